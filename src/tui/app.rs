use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::storage::{JsonlStorage, StorageError, TaskStorage};
use crate::model::{Config, Quadrant, Task, TimingConfig};
use crate::ops::TaskRepository;

use super::input;
use super::render;
use super::theme::Theme;
use super::timer::StatusTimers;

/// Poll interval when no status clear is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which field of the add/edit wizard is receiving input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

/// Buffers for the two-step add/edit wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub field: Field,
    /// Text currently being typed
    pub input: String,
    pub title: String,
    pub description: String,
    /// Quadrant the task is created in (add) or keeps (edit)
    pub quadrant: Quadrant,
}

impl EntryForm {
    /// Empty form for a new task
    pub fn blank(quadrant: Quadrant) -> Self {
        EntryForm {
            field: Field::Title,
            input: String::new(),
            title: String::new(),
            description: String::new(),
            quadrant,
        }
    }

    /// Form seeded from an existing task, title ready for editing
    pub fn from_task(task: &Task) -> Self {
        EntryForm {
            field: Field::Title,
            input: task.title.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            quadrant: task.quadrant,
        }
    }
}

/// Current interaction mode. Add/Edit carry their wizard buffers and
/// Edit/Delete carry the id of the task being acted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Matrix,
    Add(EntryForm),
    Edit { task_id: u64, form: EntryForm },
    Delete { task_id: u64 },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Matrix => "matrix",
            Mode::Add(_) => "add",
            Mode::Edit { .. } => "edit",
            Mode::Delete { .. } => "delete",
        }
    }

    pub fn form(&self) -> Option<&EntryForm> {
        match self {
            Mode::Add(form) | Mode::Edit { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EntryForm> {
        match self {
            Mode::Add(form) | Mode::Edit { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Task targeted by Edit or Delete
    pub fn target_id(&self) -> Option<u64> {
        match self {
            Mode::Edit { task_id, .. } | Mode::Delete { task_id } => Some(*task_id),
            _ => None,
        }
    }
}

/// A status clear requested by the state machine, not yet handed to the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub delay: Duration,
    pub generation: u64,
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize { width: u16, height: u16 },
    /// Deferred clear of the status message issued at `generation`
    ClearStatus { generation: u64 },
}

/// Main application state
pub struct App {
    pub repo: TaskRepository,
    storage: Box<dyn TaskStorage>,
    pub mode: Mode,
    pub selected_quadrant: Quadrant,
    /// Offset into the selected quadrant's filtered list
    pub selected_index: usize,
    pub status_message: Option<String>,
    /// Bumped on every status change; deferred clears only apply to a matching generation
    pub status_generation: u64,
    pending_clears: Vec<PendingClear>,
    pub show_tips: bool,
    pub width: u16,
    pub height: u16,
    pub theme: Theme,
    pub timing: TimingConfig,
    pub should_quit: bool,
    /// Save failure from the final write at quit
    pub quit_error: Option<StorageError>,
}

impl App {
    pub fn new(repo: TaskRepository, storage: Box<dyn TaskStorage>, config: &Config) -> Self {
        App {
            repo,
            storage,
            mode: Mode::Matrix,
            selected_quadrant: Quadrant::UrgentImportant,
            selected_index: 0,
            status_message: None,
            status_generation: 0,
            pending_clears: Vec::new(),
            show_tips: config.ui.show_tips,
            width: 80,
            height: 24,
            theme: Theme::from_config(&config.ui),
            timing: config.timing.clone(),
            should_quit: false,
            quit_error: None,
        }
    }

    /// Load tasks from storage and build the app around them
    pub fn load(storage: Box<dyn TaskStorage>, config: &Config) -> Result<Self, StorageError> {
        let tasks = storage.load()?;
        let repo = TaskRepository::from_tasks(tasks);
        Ok(Self::new(repo, storage, config))
    }

    /// Feed one event through the state machine
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => input::handle_key(self, key),
            AppEvent::Paste(text) => input::handle_paste(self, &text),
            AppEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
            }
            AppEvent::ClearStatus { generation } => {
                if generation == self.status_generation {
                    self.status_message = None;
                }
            }
        }
    }

    /// Tasks in the selected quadrant of the current context
    pub fn selected_list(&self) -> Vec<&Task> {
        self.repo.list_by_quadrant(self.selected_quadrant)
    }

    /// The task under the cursor, if the quadrant has one at the index
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_list().get(self.selected_index).copied()
    }

    /// Keep the index inside the selected quadrant's list (0 when empty)
    pub fn clamp_selection(&mut self) {
        let len = self.selected_list().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Show a message that stays until replaced
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_generation += 1;
        self.status_message = Some(message.into());
    }

    /// Show a message that clears itself after `delay`
    pub fn set_status_timed(&mut self, message: impl Into<String>, delay: Duration) {
        self.set_status(message);
        self.pending_clears.push(PendingClear {
            delay,
            generation: self.status_generation,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_generation += 1;
        self.status_message = None;
    }

    /// Hand scheduled clears to the event loop
    pub fn take_pending_clears(&mut self) -> Vec<PendingClear> {
        std::mem::take(&mut self.pending_clears)
    }

    /// Write the full collection through to storage. Failures are logged and
    /// shown in the status row.
    pub fn persist(&mut self) -> bool {
        match self.storage.save(self.repo.tasks()) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to save tasks");
                self.set_status(format!("Save failed: {}", e));
                false
            }
        }
    }

    /// Save everything and stop the event loop
    pub fn quit(&mut self) {
        if let Err(e) = self.storage.save(self.repo.tasks()) {
            tracing::error!(error = %e, "failed to save tasks on quit");
            self.quit_error = Some(e);
        }
        self.should_quit = true;
    }
}

/// Run the TUI against the task file in `data_dir`
pub fn run(data_dir: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let storage = JsonlStorage::in_dir(data_dir);
    tracing::info!(path = %storage.path().display(), "starting");
    let mut app = App::load(Box::new(storage), config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    app.handle_event(AppEvent::Resize {
        width: size.width,
        height: size.height,
    });

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;
    if let Some(e) = app.quit_error.take() {
        return Err(e.into());
    }
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut timers = StatusTimers::default();
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let now = Instant::now();
        for clear in app.take_pending_clears() {
            timers.schedule(now, clear);
        }

        if event::poll(timers.poll_timeout(now, IDLE_POLL))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_event(AppEvent::Key(key));
                }
                Event::Paste(text) => app.handle_event(AppEvent::Paste(text)),
                Event::Resize(width, height) => {
                    app.handle_event(AppEvent::Resize { width, height });
                }
                _ => {}
            }
        }

        for generation in timers.take_due(Instant::now()) {
            app.handle_event(AppEvent::ClearStatus { generation });
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
