//! Task model for the TickTick web API.
//!
//! Tasks arrive inside the `syncTaskBean.update` array of the batch-check
//! response and are sent back through the `/batch/task` endpoint.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// `chrono` format string for the instants TickTick puts on the wire,
/// e.g. `2025-05-26T04:00:00.000+0000`.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Trigger used by reminders that fire exactly at the due instant.
pub const TRIGGER_AT_DUE: &str = "TRIGGER:PT0S";

/// Task status as reported by the service.
pub const STATUS_OPEN: i32 = 0;

/// Status value that marks a task as completed.
pub const STATUS_COMPLETED: i32 = 2;

/// A task in TickTick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The unique identifier for the task.
    pub id: String,

    /// The ID of the list (project) the task belongs to.
    pub project_id: String,

    /// The task title.
    #[serde(default)]
    pub title: String,

    /// Free-form body of the task.
    #[serde(default)]
    pub content: String,

    /// Tags attached to the task, in the order the service returned them.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Start instant in wire format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Due instant in wire format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// IANA zone name. Empty when the service omitted it.
    #[serde(default)]
    pub time_zone: String,

    /// Whether the dates are whole days rather than instants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_all_day: Option<bool>,

    /// Position within the owning list.
    #[serde(default)]
    pub sort_order: i64,

    /// Numeric id of the user who created the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<i64>,

    /// 0 = open, 2 = completed.
    #[serde(default)]
    pub status: i32,

    /// Reminders attached to the task.
    #[serde(default)]
    pub reminders: Vec<Reminder>,

    /// When the task was created, in wire format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// A reminder attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Client-generated identifier.
    pub id: String,
    /// iCalendar-style trigger, e.g. `TRIGGER:PT0S`.
    pub trigger: String,
}

impl Reminder {
    /// Creates a reminder that fires at the due instant.
    pub fn at_due(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            trigger: TRIGGER_AT_DUE.to_string(),
        }
    }
}

impl Task {
    /// Returns true if the task has a due date set.
    pub fn has_due_date(&self) -> bool {
        self.due_date.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Returns true if the task has been completed.
    pub fn is_completed(&self) -> bool {
        self.status != STATUS_OPEN
    }

    /// Returns the start date parsed as an instant.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        self.start_date.as_deref().and_then(parse_wire_date)
    }

    /// Returns the due date parsed as an instant.
    pub fn due_instant(&self) -> Option<DateTime<Utc>> {
        self.due_date.as_deref().and_then(parse_wire_date)
    }
}

/// Parses a wire-format instant. Also accepts RFC 3339 (`...Z`, `...+00:00`).
pub fn parse_wire_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::<FixedOffset>::parse_from_str(value, WIRE_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Formats an instant the way the service expects it: UTC with a literal `+0000`.
pub fn format_wire_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3f+0000").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_task_deserialize_minimal() {
        let json = r#"{"id": "t1", "projectId": "inbox1"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, "t1");
        assert_eq!(task.project_id, "inbox1");
        assert!(task.title.is_empty());
        assert!(task.tags.is_empty());
        assert!(task.time_zone.is_empty());
        assert!(!task.has_due_date());
        assert!(!task.is_completed());
    }

    #[test]
    fn test_task_deserialize_full() {
        let json = r#"{
            "id": "t1",
            "projectId": "p1",
            "title": "Write report",
            "content": "Quarterly numbers",
            "tags": ["work", "urgent"],
            "startDate": "2025-05-26T04:00:00.000+0000",
            "dueDate": "2025-06-01T04:00:00.000+0000",
            "timeZone": "America/Santiago",
            "isAllDay": true,
            "sortOrder": -1099511627776,
            "creator": 12345,
            "status": 0,
            "reminders": [{"id": "r1", "trigger": "TRIGGER:PT0S"}],
            "etag": "ignored",
            "kind": "TEXT"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.tags, vec!["work", "urgent"]);
        assert_eq!(task.sort_order, -1099511627776);
        assert_eq!(task.creator, Some(12345));
        assert_eq!(task.is_all_day, Some(true));
        assert_eq!(task.reminders.len(), 1);
        assert!(task.has_due_date());
        assert_eq!(
            task.start_instant(),
            Some(Utc.with_ymd_and_hms(2025, 5, 26, 4, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task {
            id: "t1".to_string(),
            project_id: "p1".to_string(),
            title: "x".to_string(),
            content: String::new(),
            tags: vec![],
            start_date: None,
            due_date: None,
            time_zone: "UTC".to_string(),
            is_all_day: None,
            sort_order: 0,
            creator: None,
            status: 0,
            reminders: vec![],
            created_time: None,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["projectId"], "p1");
        assert_eq!(value["timeZone"], "UTC");
        assert!(value.get("startDate").is_none());
    }

    #[test]
    fn test_wire_date_format() {
        let instant = Utc.with_ymd_and_hms(2025, 5, 27, 14, 0, 0).unwrap();
        let wire = format_wire_date(instant);
        assert_eq!(wire, "2025-05-27T14:00:00.000+0000");
        assert_eq!(parse_wire_date(&wire), Some(instant));
    }

    #[test]
    fn test_parse_wire_date_accepts_rfc3339() {
        let parsed = parse_wire_date("2025-05-27T14:00:00Z");
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 5, 27, 14, 0, 0).unwrap()));
        assert!(parse_wire_date("not a date").is_none());
    }

    #[test]
    fn test_reminder_at_due() {
        let reminder = Reminder::at_due("abc");
        assert_eq!(reminder.trigger, "TRIGGER:PT0S");
    }
}
