use std::future::Future;
use std::io;
use std::mem;
use std::time::Duration;

use chrono::Utc;
use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use ticktick_api_rs::models::{BatchRequest, BatchResponse};
use ticktick_cache_rs::quick_add::parse_task_input;
use ticktick_cache_rs::{
    completion_body, fetch_snapshot, mutate_and_fetch, RemoteStore, Snapshot, SyncError, TaskCache,
};

use super::input::{transition, Effect};
use super::model::{reconcile, Screen};
use super::render::{self, View};
use super::state::ViewState;
use super::theme::Theme;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Status shown when the server rejects the session cookie.
pub const SESSION_EXPIRED: &str = "Session expired. Run with --login to log in again.";

/// Result of one background remote call.
#[derive(Debug)]
pub enum Outcome {
    Synced {
        action: &'static str,
        response: Option<BatchResponse>,
        snapshot: Snapshot,
    },
    Failed {
        action: &'static str,
        error: SyncError,
    },
}

type Work = ticktick_cache_rs::Result<(Option<BatchResponse>, Snapshot)>;

/// Main application state
pub struct App<S: RemoteStore> {
    cache: TaskCache<S>,
    pub state: ViewState,
    pub theme: Theme,
    zone: Tz,
    pub should_quit: bool,
    tx: UnboundedSender<Outcome>,
    rx: UnboundedReceiver<Outcome>,
}

impl<S: RemoteStore> App<S> {
    pub fn new(cache: TaskCache<S>, zone: Tz, state: ViewState) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        App {
            cache,
            state,
            theme: Theme::default(),
            zone,
            should_quit: false,
            tx,
            rx,
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> std::sync::Arc<Snapshot> {
        self.cache.snapshot()
    }

    /// Starts a full re-sync in the background.
    pub fn refresh(&mut self) {
        self.state.in_flight = true;
        self.execute(Effect::Refresh);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let snapshot = self.cache.snapshot();
        let screen = Screen::new(&snapshot, &self.state);
        let next = transition(mem::take(&mut self.state), key, &screen);
        self.state = next.state;
        self.execute(next.effect);
    }

    /// Applies every finished remote call without blocking.
    pub fn drain(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let snapshot = self.cache.snapshot();
        let screen = Screen::new(&snapshot, &self.state);
        let view = View {
            state: &self.state,
            screen: &screen,
            theme: &self.theme,
            zone: self.zone,
        };
        render::render(frame, &view);
    }

    fn execute(&mut self, effect: Effect) {
        let store = self.cache.store().clone();
        let time_zone = self.cache.time_zone().to_string();

        match effect {
            Effect::None => {}
            Effect::Quit => self.should_quit = true,
            Effect::Refresh => self.spawn("sync", sync(store, time_zone)),
            Effect::Add {
                text,
                default_project_id,
            } => self.spawn(
                "add",
                quick_add(store, time_zone, self.zone, text, default_project_id),
            ),
            Effect::Update(body) => self.spawn(
                "update",
                apply(store, time_zone, BatchRequest::update(vec![body])),
            ),
            Effect::Delete(params) => self.spawn(
                "delete",
                apply(store, time_zone, BatchRequest::delete(vec![params])),
            ),
            Effect::Complete(task) => self.spawn(
                "complete",
                apply(
                    store,
                    time_zone,
                    BatchRequest::update(vec![completion_body(&task, Utc::now())]),
                ),
            ),
        }
    }

    fn spawn<F>(&self, action: &'static str, work: F)
    where
        F: Future<Output = Work> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = match work.await {
                Ok((response, snapshot)) => Outcome::Synced {
                    action,
                    response,
                    snapshot,
                },
                Err(error) => Outcome::Failed { action, error },
            };
            // The receiver is gone only when the app has exited.
            let _ = tx.send(outcome);
        });
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        self.state.in_flight = false;
        match outcome {
            Outcome::Synced {
                action,
                response,
                snapshot,
            } => {
                let snapshot = self.cache.install(snapshot);
                if matches!(action, "add" | "delete" | "complete") {
                    self.state.task_index = 0;
                }
                reconcile(&mut self.state, &snapshot);
                info!(
                    action,
                    version = snapshot.version,
                    tasks = snapshot.tasks.len(),
                    "snapshot installed"
                );

                if let Some(response) = response.filter(BatchResponse::has_errors) {
                    warn!(action, failed = response.id2error.len(), "batch partially failed");
                    let detail = response
                        .id2error
                        .values()
                        .next()
                        .cloned()
                        .unwrap_or_default();
                    self.state.status = Some(format!("Could not {action} task: {detail}"));
                }
            }
            Outcome::Failed { action, error } => {
                error!(action, error = %error, "remote operation failed");
                let expired = matches!(&error, SyncError::Api(e) if e.is_auth());
                self.state.status = Some(if expired {
                    SESSION_EXPIRED.to_string()
                } else {
                    format!("Could not {action}: {error}")
                });
            }
        }
    }

    /// Waits for the next finished remote call and applies it.
    #[cfg(test)]
    pub async fn settle(&mut self) {
        if let Some(outcome) = self.rx.recv().await {
            self.apply_outcome(outcome);
        }
    }
}

async fn sync<S: RemoteStore>(store: S, time_zone: String) -> Work {
    let snapshot = fetch_snapshot(&store, &time_zone).await?;
    Ok((None, snapshot))
}

async fn apply<S: RemoteStore>(store: S, time_zone: String, request: BatchRequest) -> Work {
    let (response, snapshot) = mutate_and_fetch(&store, &request, &time_zone).await?;
    Ok((Some(response), snapshot))
}

/// Parses quick-add text, falling back to `default_project_id` when no
/// `~project` resolves, then adds and re-syncs.
async fn quick_add<S: RemoteStore>(
    store: S,
    time_zone: String,
    zone: Tz,
    text: String,
    default_project_id: String,
) -> Work {
    let mut body = parse_task_input(&text, Some(&store), Utc::now(), zone).await;
    if body.project_id.is_none() {
        body.project_id = Some(default_project_id);
    }
    debug!(title = ?body.title, project = ?body.project_id, "adding task");
    apply(store, time_zone, BatchRequest::add(vec![body])).await
}

/// Runs the TUI until the user quits.
///
/// Must be called from a multi-threaded tokio runtime; remote calls run on
/// spawned tasks while this thread polls the keyboard.
pub fn run<S: RemoteStore>(mut app: App<S>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = tokio::task::block_in_place(|| run_event_loop(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<impl RemoteStore>,
) -> io::Result<()> {
    app.refresh();
    loop {
        app.drain();
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
