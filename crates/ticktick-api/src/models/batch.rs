//! Request and response bodies for the batch endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Filter, Project, Reminder, Task};

/// Full state returned by `GET /batch/check/0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainResponse {
    /// Inbox list id. Kept raw so that a missing or non-string value can be
    /// reported as [`crate::Error::MissingInboxId`] instead of a parse error.
    #[serde(default)]
    pub inbox_id: serde_json::Value,

    /// Task payload.
    #[serde(default)]
    pub sync_task_bean: SyncTaskBean,

    /// User lists.
    #[serde(default)]
    pub project_profiles: Vec<Project>,

    /// Saved filters.
    #[serde(default)]
    pub filters: Vec<Filter>,
}

impl MainResponse {
    /// Returns the inbox id when it is a non-empty string.
    pub fn inbox_id(&self) -> Option<&str> {
        self.inbox_id.as_str().filter(|id| !id.is_empty())
    }
}

/// Container for the task list inside [`MainResponse`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncTaskBean {
    /// Every open task the account can see.
    #[serde(default)]
    pub update: Vec<Task>,
}

/// Body for task creation and updates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<Reminder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_all_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_user_id: Option<i64>,
}

impl TaskBody {
    /// Creates a body carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates an update body addressed at an existing task.
    pub fn for_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            project_id: Some(task.project_id.clone()),
            ..Self::default()
        }
    }
}

/// Identifies a task to delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskParams {
    pub task_id: String,
    pub project_id: String,
}

/// Body for `POST /batch/task`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    pub add: Vec<TaskBody>,
    pub update: Vec<TaskBody>,
    pub delete: Vec<DeleteTaskParams>,
}

impl BatchRequest {
    /// A batch that only adds tasks.
    pub fn add(tasks: Vec<TaskBody>) -> Self {
        Self {
            add: tasks,
            ..Self::default()
        }
    }

    /// A batch that only updates tasks.
    pub fn update(tasks: Vec<TaskBody>) -> Self {
        Self {
            update: tasks,
            ..Self::default()
        }
    }

    /// A batch that only deletes tasks.
    pub fn delete(tasks: Vec<DeleteTaskParams>) -> Self {
        Self {
            delete: tasks,
            ..Self::default()
        }
    }

    /// Returns true if the batch carries no operations.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }
}

/// Response of `POST /batch/task`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchResponse {
    /// New etag per succeeded task id.
    #[serde(default)]
    pub id2etag: HashMap<String, String>,
    /// Error code per failed task id.
    #[serde(default)]
    pub id2error: HashMap<String, String>,
}

impl BatchResponse {
    /// Returns true if at least one sub-operation failed.
    pub fn has_errors(&self) -> bool {
        !self.id2error.is_empty()
    }
}
