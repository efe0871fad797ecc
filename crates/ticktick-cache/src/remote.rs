//! The capability the cache needs from the server.
//!
//! [`TickTickClient`] is the production implementation; tests swap in an
//! in-memory store.

use std::future::Future;

use ticktick_api_rs::client::TickTickClient;
use ticktick_api_rs::models::{BatchRequest, BatchResponse, MainResponse, Project};

/// Request/response access to the remote task store.
///
/// Futures are `Send` so that mutations can run on a spawned task while the
/// UI keeps drawing.
pub trait RemoteStore: Clone + Send + Sync + 'static {
    /// Fetches the full account state.
    fn get_snapshot(&self) -> impl Future<Output = ticktick_api_rs::Result<MainResponse>> + Send;

    /// Applies a batch of add/update/delete operations.
    fn mutate(
        &self,
        request: &BatchRequest,
    ) -> impl Future<Output = ticktick_api_rs::Result<BatchResponse>> + Send;

    /// Lists every project, used to resolve quick-add `~project` references.
    fn list_projects(&self) -> impl Future<Output = ticktick_api_rs::Result<Vec<Project>>> + Send;
}

impl RemoteStore for TickTickClient {
    async fn get_snapshot(&self) -> ticktick_api_rs::Result<MainResponse> {
        TickTickClient::get_snapshot(self).await
    }

    async fn mutate(&self, request: &BatchRequest) -> ticktick_api_rs::Result<BatchResponse> {
        self.batch_tasks(request).await
    }

    async fn list_projects(&self) -> ticktick_api_rs::Result<Vec<Project>> {
        TickTickClient::list_projects(self).await
    }
}
