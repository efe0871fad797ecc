//! Data types for the TickTick web API.
//!
//! Field names follow the service's camelCase JSON; unknown fields are
//! ignored so that new server-side attributes never break a sync.

mod batch;
mod project;
mod task;

pub use batch::*;
pub use project::*;
pub use task::*;
