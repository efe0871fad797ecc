//! TickTick web API client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use ticktick_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`client::TickTickClient`],
//! error types, the session store, and data models.

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;
pub mod session;

pub use error::{ApiError, Error, Result};
