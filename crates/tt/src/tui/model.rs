//! What the screen shows, derived from a snapshot and the view state.

use ticktick_api_rs::models::Task;
use ticktick_cache_rs::filter::tasks_for_filter;
use ticktick_cache_rs::{project_tasks, Snapshot, INBOX_NAME};

use super::state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Inbox,
    Project,
    Filter,
}

/// One row of the list column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: String,
    pub name: String,
    pub kind: ListKind,
    /// Number of open tasks in the list, before search.
    pub count: usize,
}

impl ListEntry {
    /// The project a new task lands in when this list is selected.
    /// Filters have no project of their own.
    pub fn project_id(&self) -> Option<&str> {
        match self.kind {
            ListKind::Inbox | ListKind::Project => Some(&self.id),
            ListKind::Filter => None,
        }
    }
}

/// Inbox first, then projects, then saved filters.
pub fn list_entries(snapshot: &Snapshot) -> Vec<ListEntry> {
    if snapshot.inbox_id.is_empty() {
        return Vec::new();
    }

    let mut lists = Vec::with_capacity(1 + snapshot.projects.len() + snapshot.filters.len());
    lists.push(ListEntry {
        id: snapshot.inbox_id.clone(),
        name: INBOX_NAME.to_string(),
        kind: ListKind::Inbox,
        count: snapshot.tasks_in_list(&snapshot.inbox_id).len(),
    });
    lists.extend(snapshot.projects.iter().map(|project| ListEntry {
        id: project.id.clone(),
        name: project.name.clone(),
        kind: ListKind::Project,
        count: snapshot.tasks_in_list(&project.id).len(),
    }));
    lists.extend(snapshot.filters.iter().map(|filter| ListEntry {
        id: filter.id.clone(),
        name: filter.name.clone(),
        kind: ListKind::Filter,
        count: tasks_for_filter(&filter.id, snapshot).len(),
    }));
    lists
}

/// Tasks belonging to a list, in snapshot order.
pub fn list_tasks<'a>(snapshot: &'a Snapshot, entry: &ListEntry) -> Vec<&'a Task> {
    match entry.kind {
        ListKind::Inbox | ListKind::Project => snapshot.tasks_in_list(&entry.id),
        ListKind::Filter => tasks_for_filter(&entry.id, snapshot),
    }
}

/// The projected view of one frame: lists, rows, and the selected task.
#[derive(Debug)]
pub struct Screen<'a> {
    pub snapshot: &'a Snapshot,
    pub lists: Vec<ListEntry>,
    /// Tasks of the selected list after search and sort.
    pub rows: Vec<&'a Task>,
}

impl<'a> Screen<'a> {
    pub fn new(snapshot: &'a Snapshot, state: &ViewState) -> Self {
        let lists = list_entries(snapshot);
        let rows = match lists.get(state.list_index) {
            Some(entry) => project_tasks(
                list_tasks(snapshot, entry),
                state.sort,
                state.reversed,
                state.search_query(),
            ),
            None => Vec::new(),
        };
        Self {
            snapshot,
            lists,
            rows,
        }
    }

    pub fn selected_list(&self, state: &ViewState) -> Option<&ListEntry> {
        self.lists.get(state.list_index)
    }

    pub fn selected_task(&self, state: &ViewState) -> Option<&'a Task> {
        self.rows.get(state.task_index).copied()
    }

    /// Project for quick-add: the selected inbox or project, else the inbox.
    pub fn default_project_id(&self, state: &ViewState) -> String {
        self.selected_list(state)
            .and_then(ListEntry::project_id)
            .unwrap_or(&self.snapshot.inbox_id)
            .to_string()
    }
}

/// Clamps the selection after a new snapshot was installed.
///
/// Lists are clamped first since the rows depend on the selected list.
pub fn reconcile(state: &mut ViewState, snapshot: &Snapshot) {
    let list_count = list_entries(snapshot).len();
    state.clamp(list_count, usize::MAX);
    let rows = Screen::new(snapshot, state).rows.len();
    state.clamp(list_count, rows);
}
