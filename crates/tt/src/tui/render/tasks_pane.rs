use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{format_date, inner_height, pane_block, selectable_line, task_zone, View};
use crate::tui::state::{window_start, Column};

/// Task rows of the selected list: title, tags and start date
pub fn render_tasks_pane(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let theme = view.theme;
    let state = view.state;
    let focused = state.column == Column::Tasks;
    let height = inner_height(area);
    let start = window_start(state.task_index, height);

    let lines: Vec<Line> = view
        .screen
        .rows
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(index, task)| {
            let selected = index == state.task_index;
            let title_style = if selected {
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.body)
            };

            let mut spans = vec![Span::styled(task.title.clone(), title_style)];
            for tag in &task.tags {
                spans.push(Span::styled(
                    format!(" #{tag}"),
                    Style::default().fg(theme.tag),
                ));
            }
            let all_day = task.is_all_day.unwrap_or(true);
            if let Some(date) = format_date(
                task.start_date.as_deref(),
                task_zone(task, view.zone),
                all_day,
            ) {
                spans.push(Span::styled(
                    format!("  {date}"),
                    Style::default().fg(theme.muted),
                ));
            }
            selectable_line(selected, focused, spans, theme)
        })
        .collect();

    let title = match view.screen.selected_list(state) {
        Some(entry) => entry.name.clone(),
        None => "Tasks".to_string(),
    };
    let block = pane_block(title, Column::Tasks, view);

    if lines.is_empty() {
        let empty = if state.search_query().is_some_and(|q| !q.is_empty()) {
            "No matching tasks"
        } else {
            "No tasks"
        };
        let paragraph = Paragraph::new(Span::styled(empty, Style::default().fg(theme.muted)));
        frame.render_widget(paragraph.block(block), area);
    } else {
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::model::fixtures::snapshot;
    use crate::tui::model::Screen;
    use crate::tui::render::test_helpers::render_to_string;
    use crate::tui::state::{SearchState, ViewState};
    use crate::tui::theme::Theme;

    fn draw(state: &ViewState, w: u16, h: u16) -> String {
        let snapshot = snapshot();
        let screen = Screen::new(&snapshot, state);
        let theme = Theme::default();
        let view = View {
            state,
            screen: &screen,
            theme: &theme,
            zone: chrono_tz::America::Santiago,
        };
        render_to_string(w, h, |frame, area| render_tasks_pane(frame, &view, area))
    }

    #[test]
    fn test_rows_show_tags_and_dates() {
        let out = draw(&ViewState::default(), 60, 6);
        assert!(out.contains(" Inbox "), "{out}");
        assert!(out.contains("> Buy milk #errand  Thu May 22"), "{out}");
        assert!(out.contains("Call bank  Tue May 20"), "{out}");
    }

    #[test]
    fn test_window_follows_selection() {
        let state = ViewState {
            column: Column::Tasks,
            task_index: 2,
            ..ViewState::default()
        };
        // One visible row.
        let out = draw(&state, 60, 3);
        assert!(out.contains("> Call bank"), "{out}");
        assert!(!out.contains("Buy milk"), "{out}");
    }

    #[test]
    fn test_empty_search_result_message() {
        let state = ViewState {
            search: Some(SearchState {
                query: "zzz".to_string(),
                editing: false,
            }),
            ..ViewState::default()
        };
        assert!(draw(&state, 60, 5).contains("No matching tasks"));
    }
}
