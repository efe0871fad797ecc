//! Quick add command implementation.
//!
//! Parses free text locally (dates, `#tags`, `~project`) and creates the task
//! with one batch request. Unresolved projects leave the project unset, so the
//! server files the task in the inbox.

use chrono::Utc;
use chrono_tz::Tz;
use owo_colors::OwoColorize;
use ticktick_api_rs::client::TickTickClient;
use ticktick_api_rs::models::{parse_wire_date, BatchRequest, TaskBody};
use ticktick_cache_rs::apply_batch;
use ticktick_cache_rs::quick_add::parse_task_input;

use super::{CommandContext, CommandError, Result};
use crate::config::Config;

/// Executes the quick add command.
///
/// # Arguments
///
/// * `ctx` - Command context with output settings
/// * `config` - Loaded configuration (zone, base URL)
/// * `cookie` - Session cookie
/// * `text` - Free text to parse
///
/// # Errors
///
/// Returns an error if the API call fails or the server rejects the task.
pub async fn execute(ctx: &CommandContext, config: &Config, cookie: &str, text: &str) -> Result<()> {
    let zone = config.zone()?;
    let client = TickTickClient::with_base_url(cookie, config.base_url())?;

    let body = parse_task_input(text, Some(&client), Utc::now(), zone).await;
    let response = apply_batch(&client, &BatchRequest::add(vec![body.clone()])).await?;

    if let Some(error) = response.id2error.values().next() {
        return Err(CommandError::Rejected(error.clone()));
    }

    println!("{}", format_summary(&body, zone, ctx.use_colors));
    Ok(())
}

fn format_when(value: Option<&str>, zone: Tz, all_day: bool) -> Option<String> {
    let local = parse_wire_date(value?)?.with_timezone(&zone);
    let format = if all_day { "%a %b %-d, %Y" } else { "%a %b %-d, %Y %H:%M" };
    Some(local.format(format).to_string())
}

/// Formats the confirmation printed after a successful add.
pub fn format_summary(body: &TaskBody, zone: Tz, use_colors: bool) -> String {
    let all_day = body.is_all_day.unwrap_or(true);
    let mut lines = Vec::new();

    let headline = "Task added successfully";
    lines.push(if use_colors {
        headline.green().bold().to_string()
    } else {
        headline.to_string()
    });

    let mut field = |label: &str, value: String| {
        if use_colors {
            lines.push(format!("  {} {}", format!("{label}:").dimmed(), value));
        } else {
            lines.push(format!("  {label}: {value}"));
        }
    };

    field("Title", body.title.clone().unwrap_or_default());
    if let Some(tags) = body.tags.as_ref().filter(|tags| !tags.is_empty()) {
        let tags: Vec<String> = tags.iter().map(|tag| format!("#{tag}")).collect();
        field("Tags", tags.join(" "));
    }
    if let Some(project) = &body.project_id {
        field("Project", project.clone());
    }
    if let Some(start) = format_when(body.start_date.as_deref(), zone, all_day) {
        field("Start", start);
    }
    if let Some(due) = format_when(body.due_date.as_deref(), zone, all_day) {
        field("Due", due);
    }
    if body.reminders.as_ref().is_some_and(|r| !r.is_empty()) {
        field("Reminder", "at due time".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use ticktick_cache_rs::quick_add::parse_draft;

    fn body(text: &str) -> TaskBody {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap();
        parse_draft(text, now, chrono_tz::America::Santiago).into_body(None)
    }

    #[test]
    fn test_summary_all_day() {
        let summary = format_summary(
            &body("Pay rent tomorrow #home #bills"),
            chrono_tz::America::Santiago,
            false,
        );
        assert_eq!(
            summary,
            "Task added successfully\n  Title: Pay rent\n  Tags: #home #bills\n  Start: Wed May 21, 2025"
        );
    }

    #[test]
    fn test_summary_timed_range_with_reminder() {
        let summary = format_summary(
            &body("Dentist tomorrow 10am-11am"),
            chrono_tz::America::Santiago,
            false,
        );
        assert_eq!(
            summary,
            "Task added successfully\n  Title: Dentist\n  Start: Wed May 21, 2025 10:00\n  Due: Wed May 21, 2025 11:00\n  Reminder: at due time"
        );
    }

    #[test]
    fn test_summary_with_project() {
        let mut body = TaskBody::titled("Plain");
        body.project_id = Some("p1".to_string());
        let summary = format_summary(&body, chrono_tz::UTC, false);
        assert_eq!(summary, "Task added successfully\n  Title: Plain\n  Project: p1");
    }
}
