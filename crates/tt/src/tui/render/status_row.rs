use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::View;
use crate::tui::state::Mode;
use crate::tui::theme::Theme;

const CURSOR: &str = "\u{258C}"; // ▌

/// Appends `hint` right-aligned if it fits.
fn push_hint<'a>(spans: &mut Vec<Span<'a>>, hint: String, width: usize, theme: &Theme) {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(hint, Style::default().fg(theme.muted)));
    }
}

fn prompt<'a>(text: String, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::styled(text, Style::default().fg(theme.title)),
        Span::styled(CURSOR, Style::default().fg(theme.accent)),
    ]
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let theme = view.theme;
    let state = view.state;
    let width = area.width as usize;
    let selected_title = || {
        view.screen
            .selected_task(state)
            .map(|task| task.title.clone())
            .unwrap_or_default()
    };

    let mut spans: Vec<Span> = Vec::new();
    let hint = if state.is_search_editing() {
        spans = prompt(format!("/{}", state.search_query().unwrap_or_default()), theme);
        "Enter search  Esc cancel".to_string()
    } else {
        match state.mode {
            Mode::QuickAdd => {
                spans = prompt(format!("Add: {}", state.input), theme);
                "Enter add  Esc cancel".to_string()
            }
            Mode::ConfirmDelete => {
                spans.push(Span::styled(
                    format!("Delete \"{}\"? (y/n)", selected_title()),
                    Style::default().fg(theme.danger),
                ));
                String::new()
            }
            Mode::ConfirmComplete => {
                spans.push(Span::styled(
                    format!("Complete \"{}\"? (y/n)", selected_title()),
                    Style::default().fg(theme.success),
                ));
                String::new()
            }
            Mode::EditDetail => {
                let field = state.draft.as_ref().map(|d| d.field.label()).unwrap_or_default();
                spans.push(Span::styled(
                    format!("Editing {}", field.to_lowercase()),
                    Style::default().fg(theme.accent),
                ));
                "Tab next field  Enter save  Esc cancel".to_string()
            }
            Mode::Normal => {
                if let Some(message) = &state.status {
                    spans.push(Span::styled(
                        message.clone(),
                        Style::default().fg(theme.notice),
                    ));
                } else if let Some(query) = state.search_query() {
                    spans.push(Span::styled(
                        format!("/{query}"),
                        Style::default().fg(theme.muted),
                    ));
                }
                let mut right = format!("sort: {}", state.sort);
                if state.reversed {
                    right.push_str(" (reversed)");
                }
                if state.in_flight {
                    right.push_str("  Syncing…");
                }
                right
            }
        }
    };
    push_hint(&mut spans, hint, width, theme);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
