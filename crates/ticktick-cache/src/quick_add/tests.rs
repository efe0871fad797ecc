//! Tests for quick-add parsing.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use ticktick_api_rs::models::{
    BatchRequest, BatchResponse, MainResponse, Project, TRIGGER_AT_DUE,
};

use super::*;
use crate::remote::RemoteStore;

/// Tuesday 2025-05-20, 12:00 UTC.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
}

#[derive(Clone)]
struct Projects {
    projects: Result<Vec<Project>, ()>,
    calls: Arc<Mutex<u32>>,
}

impl Projects {
    fn new(names: &[(&str, &str)]) -> Self {
        Self {
            projects: Ok(names.iter().map(|(id, name)| Project::new(*id, *name)).collect()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    fn failing() -> Self {
        Self {
            projects: Err(()),
            calls: Arc::new(Mutex::new(0)),
        }
    }
}

impl RemoteStore for Projects {
    async fn get_snapshot(&self) -> ticktick_api_rs::Result<MainResponse> {
        Err(ticktick_api_rs::Error::MissingInboxId)
    }

    async fn mutate(&self, _: &BatchRequest) -> ticktick_api_rs::Result<BatchResponse> {
        Ok(BatchResponse::default())
    }

    async fn list_projects(&self) -> ticktick_api_rs::Result<Vec<Project>> {
        *self.calls.lock().unwrap() += 1;
        self.projects
            .clone()
            .map_err(|_| ticktick_api_rs::Error::MissingInboxId)
    }
}

// ==================== Tokens ====================

#[test]
fn test_tags_keep_input_order() {
    let draft = parse_draft("Plan #work trip #travel #q3", now(), chrono_tz::UTC);

    assert_eq!(draft.title, "Plan trip");
    assert_eq!(draft.tags, vec!["work", "travel", "q3"]);
}

#[test]
fn test_lone_hash_is_a_title_word() {
    let draft = parse_draft("Room # 5", now(), chrono_tz::UTC);
    assert_eq!(draft.title, "Room # 5");
    assert!(draft.tags.is_empty());
}

#[test]
fn test_project_reference_is_folded_and_removed() {
    let draft = parse_draft("Buy bread ~Compras-Señor!", now(), chrono_tz::UTC);

    assert_eq!(draft.title, "Buy bread");
    assert_eq!(draft.project_ref.as_deref(), Some("compras-senor"));
}

#[test]
fn test_only_first_project_reference_counts() {
    let draft = parse_draft("x ~~ ~work ~home", now(), chrono_tz::UTC);
    assert_eq!(draft.project_ref.as_deref(), Some("work"));
    assert_eq!(draft.title, "x");
}

#[test]
fn test_date_words_leave_title() {
    let draft = parse_draft("Meeting tomorrow at 10am #sync", now(), chrono_tz::UTC);

    assert_eq!(draft.title, "Meeting");
    assert_eq!(draft.dates.date_texts, vec!["tomorrow at 10am"]);
    assert_eq!(draft.tags, vec!["sync"]);
}

#[test]
fn test_words_inside_date_phrase_leave_title() {
    let draft = parse_draft("Write a report in 3 days", now(), chrono_tz::UTC);

    assert_eq!(draft.dates.date_texts, vec!["in 3 days"]);
    // "a" occurs inside "days".
    assert_eq!(draft.title, "Write report");
}

#[test]
fn test_removal_ignores_case() {
    let draft = parse_draft("Email TOM Tomorrow", now(), chrono_tz::UTC);
    assert_eq!(draft.title, "Email");
}

// ==================== Request Building ====================

#[test]
fn test_timed_task_gets_one_reminder() {
    let body = parse_draft("Call mom tomorrow at 6pm", now(), chrono_tz::UTC).into_body(None);

    assert_eq!(body.title.as_deref(), Some("Call mom"));
    assert_eq!(body.start_date.as_deref(), Some("2025-05-21T18:00:00.000+0000"));
    assert_eq!(body.is_all_day, Some(false));
    let reminders = body.reminders.unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].trigger, TRIGGER_AT_DUE);
    assert!(!reminders[0].id.is_empty());
}

#[test]
fn test_reminder_ids_are_unique() {
    let first = parse_draft("a at 6pm", now(), chrono_tz::UTC).into_body(None);
    let second = parse_draft("a at 6pm", now(), chrono_tz::UTC).into_body(None);
    assert_ne!(first.reminders.unwrap()[0].id, second.reminders.unwrap()[0].id);
}

#[test]
fn test_all_day_task_has_no_reminder() {
    let body = parse_draft("Taxes May 26", now(), chrono_tz::UTC).into_body(None);
    assert_eq!(body.is_all_day, Some(true));
    assert!(body.reminders.is_none());

    let plain = parse_draft("Just a regular task without dates", now(), chrono_tz::UTC).into_body(None);
    assert!(plain.start_date.is_none());
    assert!(plain.due_date.is_none());
    assert!(plain.reminders.is_none());
    assert!(plain.tags.is_none());
    assert_eq!(plain.time_zone.as_deref(), Some("UTC"));
}

#[test]
fn test_parse_is_reproducible_for_same_now() {
    let a = parse_draft("Report friday 9am #work", now(), chrono_tz::UTC);
    let b = parse_draft("Report friday 9am #work", now(), chrono_tz::UTC);
    assert_eq!(a, b);
}

// ==================== Project Resolution ====================

#[test]
fn test_match_project_prefix_and_accents() {
    let projects = vec![
        Project::new("p1", "Trabajo"),
        Project::new("p2", "Compras Señor"),
    ];

    assert_eq!(match_project("compras", &projects).map(|p| p.id.as_str()), Some("p2"));
    assert_eq!(match_project("comprassenor", &projects).map(|p| p.id.as_str()), Some("p2"));
    assert_eq!(match_project("trab", &projects).map(|p| p.id.as_str()), Some("p1"));
    assert!(match_project("home", &projects).is_none());
}

#[tokio::test]
async fn test_resolves_project_through_store() {
    let store = Projects::new(&[("p1", "Work"), ("p2", "Home")]);

    let body = parse_task_input("Fix sink ~home", Some(&store), now(), chrono_tz::UTC).await;

    assert_eq!(body.project_id.as_deref(), Some("p2"));
    assert_eq!(body.title.as_deref(), Some("Fix sink"));
    assert_eq!(*store.calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_project_leaves_id_unset() {
    let store = Projects::new(&[("p1", "Work")]);

    let body = parse_task_input("Fix sink ~garage", Some(&store), now(), chrono_tz::UTC).await;

    assert_eq!(body.project_id, None);
    assert_eq!(body.title.as_deref(), Some("Fix sink"));
}

#[tokio::test]
async fn test_project_listing_failure_is_a_miss() {
    let store = Projects::failing();
    let body = parse_task_input("Fix sink ~work", Some(&store), now(), chrono_tz::UTC).await;
    assert_eq!(body.project_id, None);
}

#[tokio::test]
async fn test_no_store_skips_lookup() {
    let body = parse_task_input::<Projects>("Fix sink ~work", None, now(), chrono_tz::UTC).await;
    assert_eq!(body.project_id, None);
}

#[tokio::test]
async fn test_no_reference_skips_lookup() {
    let store = Projects::new(&[("p1", "Work")]);
    parse_task_input("Fix sink", Some(&store), now(), chrono_tz::UTC).await;
    assert_eq!(*store.calls.lock().unwrap(), 0);
}
