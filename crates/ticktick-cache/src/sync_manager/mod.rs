//! Task cache: keeps the current [`Snapshot`] and the remote calls that
//! replace it.
//!
//! Every mutation is followed by a full re-sync. There is no incremental
//! patching; the snapshot is swapped atomically once the new one is ready.
//! The remote calls are free functions over a [`RemoteStore`] so they can run
//! on a background task while [`TaskCache`] stays with its owner.
//!
//! # Example
//!
//! ```no_run
//! use ticktick_api_rs::client::TickTickClient;
//! use ticktick_api_rs::models::{BatchRequest, TaskBody};
//! use ticktick_cache_rs::{fetch_snapshot, mutate_and_fetch, TaskCache};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TickTickClient::new("t=session-cookie")?;
//!     let mut cache = TaskCache::new(client, "America/Santiago");
//!
//!     let snapshot = fetch_snapshot(cache.store(), cache.time_zone()).await?;
//!     println!("Synced {} tasks", cache.install(snapshot).tasks.len());
//!
//!     let request = BatchRequest::add(vec![TaskBody::titled("Call mom")]);
//!     let (_, snapshot) = mutate_and_fetch(cache.store(), &request, cache.time_zone()).await?;
//!     cache.install(snapshot);
//!
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use ticktick_api_rs::models::{
    format_wire_date, BatchRequest, BatchResponse, Task, TaskBody, STATUS_COMPLETED,
};
use tracing::{info, warn};

use crate::remote::RemoteStore;
use crate::snapshot::Snapshot;

/// Errors that can occur during sync operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// API error.
    #[error("API error: {0}")]
    Api(#[from] ticktick_api_rs::Error),

    /// A request could not be built from the given input.
    #[error("{0}")]
    Validation(String),
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Fetches the remote state and turns it into an unversioned [`Snapshot`].
pub async fn fetch_snapshot<S: RemoteStore>(store: &S, default_time_zone: &str) -> Result<Snapshot> {
    let response = store.get_snapshot().await?;
    Snapshot::from_response(response, default_time_zone, 0, Utc::now())
        .ok_or(SyncError::Api(ticktick_api_rs::Error::MissingInboxId))
}

/// Sends a batch and logs every per-task failure.
///
/// Partial failures are not errors: succeeded sub-operations stay applied and
/// nothing is rolled back.
///
/// # Errors
///
/// Returns [`SyncError::Validation`] without calling the store if the batch
/// is empty or an update carries no task id.
pub async fn apply_batch<S: RemoteStore>(store: &S, request: &BatchRequest) -> Result<BatchResponse> {
    if request.is_empty() {
        return Err(SyncError::Validation("empty batch".to_string()));
    }
    if request.update.iter().any(|task| task.id.is_none()) {
        return Err(SyncError::Validation(
            "Task ID is required for updates".to_string(),
        ));
    }
    let response = store.mutate(request).await?;
    for (id, error) in &response.id2error {
        warn!(task_id = %id, error = %error, "task operation failed");
    }
    info!(
        succeeded = response.id2etag.len(),
        failed = response.id2error.len(),
        "task batch applied"
    );
    Ok(response)
}

/// Applies a batch, then re-fetches the whole snapshot.
pub async fn mutate_and_fetch<S: RemoteStore>(
    store: &S,
    request: &BatchRequest,
    default_time_zone: &str,
) -> Result<(BatchResponse, Snapshot)> {
    let response = apply_batch(store, request).await?;
    let snapshot = fetch_snapshot(store, default_time_zone).await?;
    Ok((response, snapshot))
}

/// Builds the update that marks `task` completed by its creator at `now`.
pub fn completion_body(task: &Task, now: DateTime<Utc>) -> TaskBody {
    TaskBody {
        status: Some(STATUS_COMPLETED),
        completed_time: Some(format_wire_date(now)),
        completed_user_id: task.creator,
        ..TaskBody::for_task(task)
    }
}

/// Owns the current snapshot and the store it came from.
///
/// # Thread Safety
///
/// `TaskCache` is owned by the UI loop. Background work clones the store,
/// runs [`mutate_and_fetch`], and hands the result back through
/// [`TaskCache::install`]; the snapshot itself is shared as an `Arc`.
pub struct TaskCache<S> {
    store: S,
    snapshot: Arc<Snapshot>,
    time_zone: String,
}

impl<S> TaskCache<S> {
    /// Creates a cache with an empty snapshot (version 0).
    pub fn new(store: S, default_time_zone: impl Into<String>) -> Self {
        Self {
            store,
            snapshot: Arc::new(Snapshot::default()),
            time_zone: default_time_zone.into(),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Returns the remote store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the zone used for tasks without one.
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Replaces the snapshot, stamping it with the next version.
    pub fn install(&mut self, mut snapshot: Snapshot) -> Arc<Snapshot> {
        snapshot.version = self.snapshot.version + 1;
        self.snapshot = Arc::new(snapshot);
        self.snapshot()
    }
}
