//! View state owned by the input controller.
//!
//! The renderer only reads a [`ViewState`]; every change goes through
//! [`super::input::transition`].

use ticktick_api_rs::models::{Task, TaskBody};
use ticktick_cache_rs::SortMode;

/// Which column has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    #[default]
    Lists,
    Tasks,
    Detail,
}

impl Column {
    /// Moves focus left, stopping at the list column.
    pub fn left(self) -> Self {
        match self {
            Column::Lists | Column::Tasks => Column::Lists,
            Column::Detail => Column::Tasks,
        }
    }

    /// Moves focus right, stopping at the detail column.
    pub fn right(self) -> Self {
        match self {
            Column::Lists => Column::Tasks,
            Column::Tasks | Column::Detail => Column::Detail,
        }
    }
}

/// Modal state. Search is tracked separately in [`ViewState::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    QuickAdd,
    ConfirmDelete,
    ConfirmComplete,
    EditDetail,
}

/// An active search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub query: String,
    /// True while keystrokes go to the query.
    pub editing: bool,
}

/// Field of the task detail editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Title,
    Tags,
    Content,
}

impl DetailField {
    pub const ALL: [DetailField; 3] = [DetailField::Title, DetailField::Tags, DetailField::Content];

    pub fn next(self) -> Self {
        match self {
            DetailField::Title => DetailField::Tags,
            DetailField::Tags => DetailField::Content,
            DetailField::Content => DetailField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DetailField::Title => DetailField::Content,
            DetailField::Tags => DetailField::Title,
            DetailField::Content => DetailField::Tags,
        }
    }

    pub fn is_last(self) -> bool {
        self == DetailField::Content
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailField::Title => "Title",
            DetailField::Tags => "Tags",
            DetailField::Content => "Content",
        }
    }
}

/// Unsaved edits of one task.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailDraft {
    pub task: Task,
    pub title: String,
    /// Space separated.
    pub tags: String,
    pub content: String,
    pub field: DetailField,
}

impl DetailDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            task: task.clone(),
            title: task.title.clone(),
            tags: task.tags.join(" "),
            content: task.content.clone(),
            field: DetailField::Title,
        }
    }

    pub fn value(&self, field: DetailField) -> &str {
        match field {
            DetailField::Title => &self.title,
            DetailField::Tags => &self.tags,
            DetailField::Content => &self.content,
        }
    }

    /// Returns the buffer of the focused field.
    pub fn focused_mut(&mut self) -> &mut String {
        match self.field {
            DetailField::Title => &mut self.title,
            DetailField::Tags => &mut self.tags,
            DetailField::Content => &mut self.content,
        }
    }

    /// Builds the update request. Dates and zone are sent back unchanged.
    pub fn into_body(self) -> TaskBody {
        let tags = self
            .tags
            .split_whitespace()
            .map(|tag| tag.trim_start_matches('#').to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        TaskBody {
            title: Some(self.title.trim().to_string()),
            tags: Some(tags),
            content: Some(self.content),
            start_date: self.task.start_date.clone(),
            due_date: self.task.due_date.clone(),
            time_zone: (!self.task.time_zone.is_empty()).then(|| self.task.time_zone.clone()),
            is_all_day: self.task.is_all_day,
            ..TaskBody::for_task(&self.task)
        }
    }
}

/// Everything the controller tracks between keystrokes.
///
/// Selection is held as indices only. After a refresh the indices are
/// clamped against the new snapshot, never dereferenced blindly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub column: Column,
    /// Index into the list column (inbox, projects, filters).
    pub list_index: usize,
    /// Index into the projected task rows.
    pub task_index: usize,
    pub search: Option<SearchState>,
    pub mode: Mode,
    /// Quick-add input buffer.
    pub input: String,
    pub draft: Option<DetailDraft>,
    pub sort: SortMode,
    pub reversed: bool,
    /// A remote call is outstanding; mutating keys are ignored.
    pub in_flight: bool,
    /// One-line message for the status row.
    pub status: Option<String>,
}

impl ViewState {
    pub fn new(sort: SortMode, reversed: bool) -> Self {
        Self {
            sort,
            reversed,
            ..Self::default()
        }
    }

    /// The query to project with, if a search is active.
    pub fn search_query(&self) -> Option<&str> {
        self.search.as_ref().map(|search| search.query.as_str())
    }

    pub fn is_search_editing(&self) -> bool {
        self.search.as_ref().is_some_and(|search| search.editing)
    }

    /// Keeps both indices inside the current lists.
    pub fn clamp(&mut self, list_count: usize, row_count: usize) {
        self.list_index = self.list_index.min(list_count.saturating_sub(1));
        self.task_index = self.task_index.min(row_count.saturating_sub(1));
    }
}

/// First visible row of a window of `window` rows that must show `selected`.
pub fn window_start(selected: usize, window: usize) -> usize {
    let window = window.max(1);
    if selected >= window {
        selected - window + 1
    } else {
        0
    }
}

/// Next index with wraparound. Empty lists stay at 0.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Previous index with wraparound. Empty lists stay at 0.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task() -> Task {
        serde_json::from_value(serde_json::json!({
            "id": "t1",
            "projectId": "p1",
            "title": "Buy milk",
            "content": "2 liters",
            "tags": ["home", "errand"],
            "startDate": "2025-05-21T04:00:00.000+0000",
            "timeZone": "America/Santiago",
            "isAllDay": true
        }))
        .unwrap()
    }

    #[test]
    fn test_window_start_keeps_selection_visible() {
        assert_eq!(window_start(0, 5), 0);
        assert_eq!(window_start(4, 5), 0);
        assert_eq!(window_start(5, 5), 1);
        assert_eq!(window_start(12, 5), 8);
        for k in 0..30 {
            for w in 1..8 {
                let start = window_start(k, w);
                assert!(start <= k && k < start + w, "k={k} w={w}");
            }
        }
    }

    #[test]
    fn test_window_start_zero_window() {
        assert_eq!(window_start(3, 0), 3);
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_next(0, 3), 1);
        assert_eq!(wrap_prev(0, 3), 2);
        assert_eq!(wrap_prev(2, 3), 1);
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_prev(0, 0), 0);
    }

    #[test]
    fn test_column_moves_clamp() {
        assert_eq!(Column::Lists.left(), Column::Lists);
        assert_eq!(Column::Lists.right(), Column::Tasks);
        assert_eq!(Column::Detail.right(), Column::Detail);
        assert_eq!(Column::Detail.left(), Column::Tasks);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = ViewState {
            list_index: 7,
            task_index: 9,
            ..ViewState::default()
        };
        state.clamp(3, 2);
        assert_eq!((state.list_index, state.task_index), (2, 1));

        state.clamp(0, 0);
        assert_eq!((state.list_index, state.task_index), (0, 0));
    }

    #[test]
    fn test_detail_field_cycle() {
        for field in DetailField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert!(DetailField::Content.is_last());
        assert_eq!(DetailField::Content.next(), DetailField::Title);
    }

    #[test]
    fn test_draft_into_body_keeps_dates() {
        let mut draft = DetailDraft::from_task(&task());
        assert_eq!(draft.tags, "home errand");

        draft.title = " Buy oat milk ".to_string();
        draft.tags = "#home  shop".to_string();
        let body = draft.into_body();

        assert_eq!(body.id.as_deref(), Some("t1"));
        assert_eq!(body.project_id.as_deref(), Some("p1"));
        assert_eq!(body.title.as_deref(), Some("Buy oat milk"));
        assert_eq!(body.tags, Some(vec!["home".to_string(), "shop".to_string()]));
        assert_eq!(body.content.as_deref(), Some("2 liters"));
        assert_eq!(body.start_date.as_deref(), Some("2025-05-21T04:00:00.000+0000"));
        assert_eq!(body.time_zone.as_deref(), Some("America/Santiago"));
        assert_eq!(body.is_all_day, Some(true));
    }
}
