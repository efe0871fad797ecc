use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{inner_height, pane_block, selectable_line, View};
use crate::tui::model::ListKind;
use crate::tui::state::{window_start, Column};

/// Inbox, projects and filters with their open task counts
pub fn render_lists_pane(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let theme = view.theme;
    let state = view.state;
    let focused = state.column == Column::Lists;
    let height = inner_height(area);
    let start = window_start(state.list_index, height);

    let lines: Vec<Line> = view
        .screen
        .lists
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(index, entry)| {
            let color = match entry.kind {
                ListKind::Inbox => theme.inbox,
                ListKind::Project => theme.body,
                ListKind::Filter => theme.filter,
            };
            let spans = vec![
                Span::styled(entry.name.clone(), Style::default().fg(color)),
                Span::styled(
                    format!(" ({})", entry.count),
                    Style::default().fg(theme.muted),
                ),
            ];
            selectable_line(index == state.list_index, focused, spans, theme)
        })
        .collect();

    let block = pane_block("Lists".to_string(), Column::Lists, view);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::model::fixtures::snapshot;
    use crate::tui::model::Screen;
    use crate::tui::render::test_helpers::{fg_of, render_to_buffer, render_to_string};
    use crate::tui::state::ViewState;
    use crate::tui::theme::Theme;

    #[test]
    fn test_lists_scroll_with_selection() {
        let snapshot = snapshot();
        let state = ViewState {
            list_index: 3,
            ..ViewState::default()
        };
        let screen = Screen::new(&snapshot, &state);
        let theme = Theme::default();
        let view = View {
            state: &state,
            screen: &screen,
            theme: &theme,
            zone: chrono_tz::UTC,
        };

        // Two visible rows: the window ends at the selection.
        let out = render_to_string(30, 4, |frame, area| render_lists_pane(frame, &view, area));

        assert!(!out.contains("Inbox"), "{out}");
        assert!(!out.contains("Work (1)"), "{out}");
        assert!(out.contains("Home (1)"), "{out}");
        assert!(out.contains("> Not work (4)"), "{out}");
    }

    #[test]
    fn test_list_kinds_use_their_colours() {
        let snapshot = snapshot();
        let state = ViewState::default();
        let screen = Screen::new(&snapshot, &state);
        let theme = Theme::default();
        let view = View {
            state: &state,
            screen: &screen,
            theme: &theme,
            zone: chrono_tz::UTC,
        };

        let buffer = render_to_buffer(30, 8, |frame, area| render_lists_pane(frame, &view, area));

        assert_eq!(fg_of(&buffer, "Inbox"), Some(theme.inbox));
        assert_eq!(fg_of(&buffer, "Home"), Some(theme.body));
        assert_eq!(fg_of(&buffer, "Not work"), Some(theme.filter));
        assert_eq!(fg_of(&buffer, "(1)"), Some(theme.muted));
    }
}
