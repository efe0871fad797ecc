//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use ticktick_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - TickTickClient (API client)
//! // - Error, ApiError, Result (error handling)
//! // - SessionStore (cookie persistence)
//! // - Task, Project, Filter, TaskBody, BatchRequest, ... (data models)
//! ```

// Client types
pub use crate::client::TickTickClient;

// Error types
pub use crate::error::{ApiError, Error, Result};

// Session
pub use crate::session::{SessionError, SessionStore};

// Data models
pub use crate::models::{
    BatchRequest, BatchResponse, DeleteTaskParams, Filter, MainResponse, Project, Reminder,
    SyncTaskBean, Task, TaskBody,
};
