//! Keyboard handling.
//!
//! [`transition`] is a pure function of the current state, one key event and
//! the projected screen. It returns the next state plus an [`Effect`] for the
//! runtime to carry out. Modes are checked in a fixed order: search editing,
//! idle search, quick-add, delete confirmation, completion confirmation,
//! detail editing, then normal navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ticktick_api_rs::models::{DeleteTaskParams, Task, TaskBody};

use super::model::Screen;
use super::state::{wrap_next, wrap_prev, Column, DetailDraft, Mode, SearchState, ViewState};

/// Status shown when a mutating key arrives while a request is outstanding.
pub const BUSY_MESSAGE: &str = "Still syncing, try again in a moment";

/// Work requested by a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Full re-sync.
    Refresh,
    /// Quick-add `text`; `default_project_id` applies when no `~project` resolves.
    Add {
        text: String,
        default_project_id: String,
    },
    Update(TaskBody),
    Delete(DeleteTaskParams),
    Complete(Task),
}

#[derive(Debug)]
pub struct Transition {
    pub state: ViewState,
    pub effect: Effect,
}

impl Transition {
    fn stay(state: ViewState) -> Self {
        Self {
            state,
            effect: Effect::None,
        }
    }

    /// Emits a remote effect and marks the request in flight.
    fn remote(mut state: ViewState, effect: Effect) -> Self {
        state.in_flight = true;
        Self { state, effect }
    }
}

/// Advances the controller by one key press.
pub fn transition(mut state: ViewState, key: KeyEvent, screen: &Screen<'_>) -> Transition {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Transition {
            state,
            effect: Effect::Quit,
        };
    }
    state.status = None;

    if state.is_search_editing() {
        return search_edit(state, key);
    }
    if state.search.is_some() && state.mode == Mode::Normal {
        match key.code {
            KeyCode::Esc => {
                state.search = None;
                state.task_index = 0;
                return Transition::stay(state);
            }
            KeyCode::Char('/') => {
                if let Some(search) = state.search.as_mut() {
                    search.editing = true;
                }
                return Transition::stay(state);
            }
            _ => return normal(state, key, screen),
        }
    }

    match state.mode {
        Mode::QuickAdd => quick_add(state, key, screen),
        Mode::ConfirmDelete => confirm(state, key, screen, |task| {
            Effect::Delete(DeleteTaskParams {
                task_id: task.id.clone(),
                project_id: task.project_id.clone(),
            })
        }),
        Mode::ConfirmComplete => confirm(state, key, screen, |task| Effect::Complete(task.clone())),
        Mode::EditDetail => edit_detail(state, key),
        Mode::Normal => normal(state, key, screen),
    }
}

/// Typed characters without Ctrl/Alt.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn search_edit(mut state: ViewState, key: KeyEvent) -> Transition {
    match key.code {
        KeyCode::Esc => {
            state.search = None;
            state.task_index = 0;
        }
        KeyCode::Enter => {
            state.search = state.search.map(|search| SearchState {
                editing: false,
                ..search
            });
            state.column = Column::Tasks;
        }
        KeyCode::Backspace => {
            if let Some(search) = state.search.as_mut() {
                search.query.pop();
            }
            state.task_index = 0;
        }
        _ => {
            if let (Some(c), Some(search)) = (typed_char(&key), state.search.as_mut()) {
                search.query.push(c);
                state.task_index = 0;
            }
        }
    }
    Transition::stay(state)
}

fn quick_add(mut state: ViewState, key: KeyEvent, screen: &Screen<'_>) -> Transition {
    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Normal;
            state.input.clear();
        }
        KeyCode::Enter => {
            let text = state.input.trim().to_string();
            if text.is_empty() {
                state.mode = Mode::Normal;
                state.input.clear();
            } else if state.in_flight {
                state.status = Some(BUSY_MESSAGE.to_string());
            } else {
                let default_project_id = screen.default_project_id(&state);
                state.mode = Mode::Normal;
                state.input.clear();
                return Transition::remote(
                    state,
                    Effect::Add {
                        text,
                        default_project_id,
                    },
                );
            }
        }
        KeyCode::Backspace => {
            state.input.pop();
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                state.input.push(c);
            }
        }
    }
    Transition::stay(state)
}

fn confirm(
    mut state: ViewState,
    key: KeyEvent,
    screen: &Screen<'_>,
    effect: impl FnOnce(&Task) -> Effect,
) -> Transition {
    state.mode = Mode::Normal;
    let accepted = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter);
    if !accepted {
        return Transition::stay(state);
    }
    if state.in_flight {
        state.status = Some(BUSY_MESSAGE.to_string());
        return Transition::stay(state);
    }
    match screen.selected_task(&state) {
        Some(task) => {
            let effect = effect(task);
            Transition::remote(state, effect)
        }
        None => Transition::stay(state),
    }
}

fn edit_detail(mut state: ViewState, key: KeyEvent) -> Transition {
    let Some(mut draft) = state.draft.take() else {
        state.mode = Mode::Normal;
        return Transition::stay(state);
    };

    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Normal;
            return Transition::stay(state);
        }
        KeyCode::Tab => draft.field = draft.field.next(),
        KeyCode::BackTab => draft.field = draft.field.prev(),
        KeyCode::Enter if draft.field.is_last() => {
            if state.in_flight {
                state.status = Some(BUSY_MESSAGE.to_string());
            } else {
                state.mode = Mode::Normal;
                return Transition::remote(state, Effect::Update(draft.into_body()));
            }
        }
        KeyCode::Enter => draft.field = draft.field.next(),
        KeyCode::Backspace => {
            draft.focused_mut().pop();
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                draft.focused_mut().push(c);
            }
        }
    }
    state.draft = Some(draft);
    Transition::stay(state)
}

/// Refuses to start a mutation while one is outstanding.
fn busy(state: &mut ViewState) -> bool {
    if state.in_flight {
        state.status = Some(BUSY_MESSAGE.to_string());
    }
    state.in_flight
}

fn select_list(state: &mut ViewState, index: usize) {
    if index != state.list_index {
        state.list_index = index;
        state.task_index = 0;
        state.search = None;
    }
}

fn normal(mut state: ViewState, key: KeyEvent, screen: &Screen<'_>) -> Transition {
    let lists = screen.lists.len();
    let rows = screen.rows.len();

    match key.code {
        KeyCode::Char('q') => {
            return Transition {
                state,
                effect: Effect::Quit,
            }
        }
        KeyCode::Char('h') | KeyCode::Left => state.column = state.column.left(),
        KeyCode::Char('l') | KeyCode::Right => state.column = state.column.right(),
        KeyCode::Char('j') | KeyCode::Down => match state.column {
            Column::Lists => {
                let index = wrap_next(state.list_index, lists);
                select_list(&mut state, index);
            }
            Column::Tasks => state.task_index = wrap_next(state.task_index, rows),
            Column::Detail => {}
        },
        KeyCode::Char('k') | KeyCode::Up => match state.column {
            Column::Lists => {
                let index = wrap_prev(state.list_index, lists);
                select_list(&mut state, index);
            }
            Column::Tasks => state.task_index = wrap_prev(state.task_index, rows),
            Column::Detail => {}
        },
        KeyCode::Enter => state.column = state.column.right(),
        KeyCode::Char('/') => {
            state.search = Some(SearchState {
                query: String::new(),
                editing: true,
            });
            state.task_index = 0;
        }
        KeyCode::Char('s') => {
            state.sort = state.sort.next();
            state.task_index = 0;
        }
        KeyCode::Char('r') => {
            state.reversed = !state.reversed;
            state.task_index = 0;
        }
        KeyCode::Char('a') => {
            if !busy(&mut state) && !screen.snapshot.inbox_id.is_empty() {
                state.mode = Mode::QuickAdd;
                state.input.clear();
            }
        }
        KeyCode::Char('d') => {
            if !busy(&mut state) && screen.selected_task(&state).is_some() {
                state.mode = Mode::ConfirmDelete;
            }
        }
        KeyCode::Char('c') | KeyCode::Char('x') => {
            if !busy(&mut state) && screen.selected_task(&state).is_some() {
                state.mode = Mode::ConfirmComplete;
            }
        }
        KeyCode::Char('e') => {
            if !busy(&mut state) {
                if let Some(task) = screen.selected_task(&state) {
                    state.draft = Some(DetailDraft::from_task(task));
                    state.column = Column::Detail;
                    state.mode = Mode::EditDetail;
                }
            }
        }
        KeyCode::Char('R') => {
            if !busy(&mut state) {
                return Transition::remote(state, Effect::Refresh);
            }
        }
        _ => {}
    }
    Transition::stay(state)
}
