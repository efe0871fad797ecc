//! Interactive three-column task browser.
//!
//! - [`state`] holds the view state the controller owns
//! - [`model`] derives the lists and rows shown from a snapshot
//! - [`input`] advances the state one key at a time
//! - [`render`] draws a frame from both
//! - [`app`] runs the loop and the remote calls

pub mod app;
pub mod input;
pub mod model;
pub mod render;
pub mod state;
pub mod theme;

pub use app::{run, App};
