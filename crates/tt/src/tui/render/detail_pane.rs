use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use ticktick_api_rs::models::Task;

use super::{format_date, pane_block, task_zone, View};
use crate::tui::state::{Column, DetailDraft, DetailField};
use crate::tui::theme::Theme;

/// Selected task, or the editor while a draft is open
pub fn render_detail_pane(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let lines = match (&view.state.draft, view.screen.selected_task(view.state)) {
        (Some(draft), _) => draft_lines(draft, view.theme),
        (None, Some(task)) => task_lines(task, view),
        (None, None) => vec![Line::from(Span::styled(
            "No task selected",
            Style::default().fg(view.theme.muted),
        ))],
    };

    let block = pane_block("Details".to_string(), Column::Detail, view);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn label<'a>(text: &'a str, theme: &Theme) -> Span<'a> {
    Span::styled(text, Style::default().fg(theme.muted))
}

fn task_lines<'a>(task: &'a Task, view: &View<'_>) -> Vec<Line<'a>> {
    let theme = view.theme;
    let zone = task_zone(task, view.zone);
    let all_day = task.is_all_day.unwrap_or(true);

    let mut lines = vec![Line::from(Span::styled(
        task.title.as_str(),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    ))];

    if !task.tags.is_empty() {
        let tags = task
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(tags, Style::default().fg(theme.tag))));
    }

    if let Some(start) = format_date(task.start_date.as_deref(), zone, all_day) {
        lines.push(Line::from(vec![
            label("Start ", theme),
            Span::styled(start, Style::default().fg(theme.body)),
        ]));
    }
    if let Some(due) = format_date(task.due_date.as_deref(), zone, all_day) {
        lines.push(Line::from(vec![
            label("Due   ", theme),
            Span::styled(due, Style::default().fg(theme.due)),
        ]));
    }

    if !task.content.is_empty() {
        lines.push(Line::default());
        lines.extend(
            task.content
                .lines()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.body)))),
        );
    }
    lines
}

fn draft_lines<'a>(draft: &'a DetailDraft, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for field in DetailField::ALL {
        let focused = field == draft.field;
        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let mut value = vec![Span::styled(
            draft.value(field),
            Style::default().fg(theme.title),
        )];
        if focused {
            value.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.accent),
            ));
        }
        lines.push(Line::from(value));
    }
    lines
}
