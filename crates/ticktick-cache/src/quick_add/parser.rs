//! Quick-add line parsing.
//!
//! A line such as `Pay rent tomorrow at 9am #home ~finance` becomes a task
//! creation request: dates are extracted, `#tag` tokens become tags, the
//! first `~project` token is resolved against the account's projects, and
//! whatever remains is the title.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use ticktick_api_rs::models::{Project, Reminder, TaskBody};
use tracing::{debug, warn};

use super::dates::{extract_dates, ParsedDates};
use super::normalize::{fold, suggest};
use crate::remote::RemoteStore;

/// A parsed line before its project reference is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Title words left after tags, the project and date phrase words are removed.
    pub title: String,
    /// Tags in input order, without the leading `#`.
    pub tags: Vec<String>,
    /// Folded `~project` reference, if any.
    pub project_ref: Option<String>,
    /// Recognized dates.
    pub dates: ParsedDates,
    /// Zone the dates were interpreted in.
    pub time_zone: String,
}

impl Draft {
    /// Builds the creation request.
    ///
    /// Tasks with a time of day get a single reminder at the due instant.
    pub fn into_body(self, project_id: Option<String>) -> TaskBody {
        let reminders =
            (!self.dates.is_all_day).then(|| vec![Reminder::at_due(uuid::Uuid::new_v4().to_string())]);

        TaskBody {
            title: Some(self.title),
            tags: (!self.tags.is_empty()).then_some(self.tags),
            project_id,
            start_date: self.dates.start_date,
            due_date: self.dates.due_date,
            time_zone: Some(self.time_zone),
            is_all_day: Some(self.dates.is_all_day),
            reminders,
            ..TaskBody::default()
        }
    }
}

/// Parses everything that does not need the server.
///
/// # Arguments
///
/// * `input` - The raw quick-add line
/// * `now` - Reference instant for relative dates
/// * `zone` - Zone used to interpret local dates and times
pub fn parse_draft(input: &str, now: DateTime<Utc>, zone: Tz) -> Draft {
    let dates = extract_dates(input, now, zone);

    let mut tags = Vec::new();
    let mut project_ref = None;
    let mut title_words = Vec::new();

    for word in input.split_whitespace() {
        if let Some(tag) = word.strip_prefix('#').filter(|tag| !tag.is_empty()) {
            tags.push(tag.to_string());
        } else if let Some(reference) = word.strip_prefix('~') {
            let folded = fold(reference);
            if project_ref.is_none() && !folded.is_empty() {
                project_ref = Some(folded);
            }
        } else {
            title_words.push(word);
        }
    }

    Draft {
        title: strip_date_words(&title_words, &dates.date_texts),
        tags,
        project_ref,
        dates,
        time_zone: zone.name().to_string(),
    }
}

/// Drops every title word that occurs anywhere inside a consumed date phrase.
fn strip_date_words(words: &[&str], date_texts: &[String]) -> String {
    let date_texts: Vec<String> = date_texts.iter().map(|text| text.to_lowercase()).collect();

    words
        .iter()
        .filter(|word| {
            let word = word.to_lowercase();
            !date_texts.iter().any(|text| text.contains(&word))
        })
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Finds the first project whose folded name equals or starts with the
/// folded reference.
pub fn match_project<'a>(reference: &str, projects: &'a [Project]) -> Option<&'a Project> {
    projects
        .iter()
        .find(|project| fold(&project.name).starts_with(reference))
}

/// Resolves a folded reference through the store.
///
/// Fetch failures and misses both resolve to `None`; neither is an error for
/// quick-add.
pub async fn resolve_project<S: RemoteStore>(store: &S, reference: &str) -> Option<String> {
    let projects = match store.list_projects().await {
        Ok(projects) => projects,
        Err(err) => {
            warn!(error = %err, "could not list projects for quick-add");
            return None;
        }
    };

    if let Some(project) = match_project(reference, &projects) {
        debug!(reference, project = %project.name, "resolved project reference");
        return Some(project.id.clone());
    }

    match suggest(reference, projects.iter().map(|p| p.name.as_str())) {
        Some(name) => warn!(reference, suggestion = name, "project not found. Did you mean '{name}'?"),
        None => warn!(reference, "project not found"),
    }
    None
}

/// Parses a quick-add line into a task creation request.
///
/// When `projects` is `None`, or the reference does not resolve, `project_id`
/// is left unset and the caller picks a default list.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ticktick_api_rs::client::TickTickClient;
/// use ticktick_cache_rs::quick_add::parse_task_input;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let now = Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap();
/// let body = parse_task_input::<TickTickClient>("Buy milk #errands", None, now, chrono_tz::UTC).await;
///
/// assert_eq!(body.title.as_deref(), Some("Buy milk"));
/// assert_eq!(body.tags, Some(vec!["errands".to_string()]));
/// assert_eq!(body.project_id, None);
/// # }
/// ```
pub async fn parse_task_input<S: RemoteStore>(
    input: &str,
    projects: Option<&S>,
    now: DateTime<Utc>,
    zone: Tz,
) -> TaskBody {
    let draft = parse_draft(input, now, zone);

    let project_id = match (draft.project_ref.as_deref(), projects) {
        (Some(reference), Some(store)) => resolve_project(store, reference).await,
        _ => None,
    };

    draft.into_body(project_id)
}
