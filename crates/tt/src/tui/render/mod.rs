pub mod detail_pane;
pub mod lists_pane;
pub mod status_row;
pub mod tasks_pane;

#[cfg(test)]
pub mod test_helpers;

use chrono::DateTime;
use chrono::Utc;
use chrono_tz::Tz;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use ticktick_api_rs::models::{parse_wire_date, Task};

use super::model::Screen;
use super::state::{Column, ViewState};
use super::theme::Theme;

/// Everything one frame is drawn from. Read-only.
pub struct View<'a> {
    pub state: &'a ViewState,
    pub screen: &'a Screen<'a>,
    pub theme: &'a Theme,
    /// Zone for tasks that carry none.
    pub zone: Tz,
}

/// Draws the three columns and the status row.
pub fn render(frame: &mut Frame, view: &View<'_>) {
    let area = frame.area();

    // Layout: content | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    lists_pane::render_lists_pane(frame, view, columns[0]);
    tasks_pane::render_tasks_pane(frame, view, columns[1]);
    detail_pane::render_detail_pane(frame, view, columns[2]);
    status_row::render_status_row(frame, view, rows[1]);
}

/// Bordered block, highlighted when `column` has focus.
pub(super) fn pane_block<'a>(title: String, column: Column, view: &View<'_>) -> Block<'a> {
    let color = if view.state.column == column {
        view.theme.accent
    } else {
        view.theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(view.theme.title),
        ))
}

/// Rows available inside a bordered pane.
pub(super) fn inner_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

/// Selection marker plus styled text for a list row.
pub(super) fn selectable_line<'a>(
    selected: bool,
    focused: bool,
    mut spans: Vec<Span<'a>>,
    theme: &Theme,
) -> Line<'a> {
    let marker = if selected { "> " } else { "  " };
    spans.insert(
        0,
        Span::styled(marker, Style::default().fg(theme.accent)),
    );
    let line = Line::from(spans);
    if selected && focused {
        line.style(Style::default().bg(theme.selection_bg))
    } else {
        line
    }
}

/// The zone a task's dates are shown in.
pub(super) fn task_zone(task: &Task, fallback: Tz) -> Tz {
    task.time_zone.parse().unwrap_or(fallback)
}

/// Formats a wire date for display, without the time for all-day tasks.
pub(super) fn format_date(value: Option<&str>, zone: Tz, all_day: bool) -> Option<String> {
    let instant: DateTime<Utc> = parse_wire_date(value?)?;
    let local = instant.with_timezone(&zone);
    let format = if all_day { "%a %b %-d" } else { "%a %b %-d %H:%M" };
    Some(local.format(format).to_string())
}
