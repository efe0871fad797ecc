//! Local task state for the TickTick client.
//!
//! This crate keeps the last full sync in memory and layers the client-side
//! logic on top of it:
//!
//! - [`TaskCache`] owns the current [`Snapshot`] and routes every mutation
//!   through a [`RemoteStore`], followed by a full re-sync
//! - [`filter`] evaluates saved-filter rule trees locally
//! - [`quick_add`] turns a line of free text into a task creation request
//! - [`view`] sorts and searches the tasks of the selected list

pub mod filter;
pub mod quick_add;
pub mod remote;
pub mod snapshot;
pub mod sync_manager;
pub mod view;

pub use remote::RemoteStore;
pub use snapshot::{Snapshot, INBOX_NAME};
pub use sync_manager::{
    apply_batch, completion_body, fetch_snapshot, mutate_and_fetch, Result, SyncError, TaskCache,
};
pub use view::{project_tasks, SortMode};
