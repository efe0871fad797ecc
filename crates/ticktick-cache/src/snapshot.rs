//! In-memory projection of the last full sync.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ticktick_api_rs::models::{Filter, MainResponse, Project, Task};

use crate::filter::{parse_rules, FilterRule};

/// Display name of the synthetic inbox list.
pub const INBOX_NAME: &str = "Inbox";

/// Everything the client knows about the account after one full sync.
///
/// A snapshot is never patched: every refresh builds a new one and replaces
/// the old value wholesale. Views keep indices and ids, never references,
/// so a selection that vanished on refresh simply resolves to nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Monotonic counter, bumped on every replacement.
    pub version: u64,
    /// When the sync that produced this snapshot finished.
    pub synced_at: Option<DateTime<Utc>>,
    /// Id of the inbox pseudo-list.
    pub inbox_id: String,
    /// Open tasks, ascending by `sort_order`.
    pub tasks: Vec<Task>,
    /// User lists (archived lists excluded), ascending by `sort_order`.
    pub projects: Vec<Project>,
    /// Saved filters, ascending by `sort_order`.
    pub filters: Vec<Filter>,
    /// Parsed filter rules by filter id; rules that failed to parse are absent.
    rules: HashMap<String, FilterRule>,
}

impl Snapshot {
    /// Builds a snapshot from a batch-check response.
    ///
    /// Completed tasks are dropped, tasks without a zone get `default_time_zone`,
    /// and every collection is stably sorted by its `sort_order`. Returns `None`
    /// if the response has no inbox id.
    pub fn from_response(
        response: MainResponse,
        default_time_zone: &str,
        version: u64,
        synced_at: DateTime<Utc>,
    ) -> Option<Self> {
        let inbox_id = response.inbox_id()?.to_string();

        let mut tasks: Vec<Task> = response
            .sync_task_bean
            .update
            .into_iter()
            .filter(|task| !task.is_completed())
            .map(|mut task| {
                if task.time_zone.is_empty() {
                    task.time_zone = default_time_zone.to_string();
                }
                task
            })
            .collect();
        tasks.sort_by_key(|task| task.sort_order);

        let mut projects: Vec<Project> = response
            .project_profiles
            .into_iter()
            .filter(|project| !project.is_closed())
            .collect();
        projects.sort_by_key(|project| project.sort_order);

        let mut filters = response.filters;
        filters.sort_by_key(|filter| filter.sort_order);
        let rules = parse_rules(&filters);

        Some(Self {
            version,
            synced_at: Some(synced_at),
            inbox_id,
            tasks,
            projects,
            filters,
            rules,
        })
    }

    /// Returns the tasks of one list, in snapshot order.
    pub fn tasks_in_list(&self, list_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.project_id == list_id)
            .collect()
    }

    /// Finds a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Finds a saved filter by id.
    pub fn filter(&self, id: &str) -> Option<&Filter> {
        self.filters.iter().find(|filter| filter.id == id)
    }

    /// Returns the parsed rule of a saved filter, if it had a valid one.
    pub fn filter_rule(&self, id: &str) -> Option<&FilterRule> {
        self.rules.get(id)
    }

    /// Returns the display name of a list id, including the inbox.
    pub fn list_name(&self, list_id: &str) -> Option<&str> {
        if list_id == self.inbox_id {
            return Some(INBOX_NAME);
        }
        self.projects
            .iter()
            .find(|project| project.id == list_id)
            .map(|project| project.name.as_str())
    }
}
