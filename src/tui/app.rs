use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::model::WorkspaceConfig;
use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId};
use crate::ops::filter::{TaskCriteria, filter_tasks};
use crate::ops::session::EditSession;
use crate::store::{ProjectStore, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Projects,
    Tasks,
    MyTasks,
}

impl View {
    pub const ALL: [View; 4] = [View::Overview, View::Projects, View::Tasks, View::MyTasks];

    pub fn title(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Projects => "Projects",
            View::Tasks => "Tasks",
            View::MyTasks => "My Tasks",
        }
    }

    /// Slug used in the persisted UI state
    pub fn slug(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Projects => "projects",
            View::Tasks => "tasks",
            View::MyTasks => "my-tasks",
        }
    }

    pub fn from_slug(s: &str) -> Option<View> {
        match s {
            "overview" => Some(View::Overview),
            "projects" => Some(View::Projects),
            "tasks" => Some(View::Tasks),
            "my-tasks" => Some(View::MyTasks),
            _ => None,
        }
    }

    pub fn next(self) -> View {
        match self {
            View::Overview => View::Projects,
            View::Projects => View::Tasks,
            View::Tasks => View::MyTasks,
            View::MyTasks => View::Overview,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Confirm,
    Comment,
}

/// A destructive action staged behind a y/n confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { id: TaskId },
    DeleteProject { id: ProjectId },
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Active text input inside the edit popup (one field at a time)
#[derive(Debug, Clone, Default)]
pub struct EditInput {
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
}

impl EditInput {
    pub fn with_text(text: &str) -> Self {
        EditInput {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }
}

/// State of the comments popup
#[derive(Debug, Clone)]
pub struct CommentState {
    pub task_id: TaskId,
    pub input: EditInput,
}

/// Edit popup field labels for tasks
pub const TASK_FIELDS: [&str; 6] = [
    "Title",
    "Assigned To",
    "Status",
    "Priority",
    "Due Date",
    "Project",
];

/// Edit popup field labels for projects
pub const PROJECT_FIELDS: [&str; 6] = [
    "Name",
    "Description",
    "Status",
    "Progress",
    "Start Date",
    "End Date",
];

/// Main application state
pub struct App {
    pub workspace_dir: PathBuf,
    pub config: WorkspaceConfig,
    pub theme: Theme,
    pub today: NaiveDate,

    pub projects: ProjectStore,
    pub tasks: TaskStore,
    pub my_tasks: TaskStore,

    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,

    /// Tasks view filter
    pub criteria: TaskCriteria,
    pub projects_cursor: usize,
    pub tasks_cursor: usize,
    pub my_cursor: usize,

    /// Staged edit session (tasks view)
    pub task_edit: Option<EditSession<TaskStore>>,
    /// Staged edit session (projects view)
    pub project_edit: Option<EditSession<ProjectStore>>,
    /// Selected field row in the edit popup
    pub edit_field: usize,
    /// Active text input for the selected field, if editing one
    pub edit_input: Option<EditInput>,

    pub confirm_state: Option<ConfirmState>,
    pub comment_state: Option<CommentState>,

    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(workspace_dir: PathBuf, config: WorkspaceConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            workspace_dir,
            config,
            theme,
            today: Local::now().date_naive(),
            projects: ProjectStore::seeded(),
            tasks: TaskStore::seeded(),
            my_tasks: TaskStore::with_tasks(crate::model::seed::my_tasks()),
            view: View::Overview,
            mode: Mode::Navigate,
            should_quit: false,
            criteria: TaskCriteria::all(),
            projects_cursor: 0,
            tasks_cursor: 0,
            my_cursor: 0,
            task_edit: None,
            project_edit: None,
            edit_field: 0,
            edit_input: None,
            confirm_state: None,
            comment_state: None,
            status_message: None,
            show_help: false,
        }
    }

    /// Tasks visible in the tasks view under the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks(self.tasks.tasks(), &self.criteria)
    }

    /// Id of the task under the cursor in the tasks view
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.tasks_cursor).map(|t| t.id)
    }

    /// Id of the project under the cursor in the projects view
    pub fn selected_project_id(&self) -> Option<ProjectId> {
        self.projects
            .projects()
            .get(self.projects_cursor)
            .map(|p| p.id)
    }

    /// Id of the task under the cursor in the My Tasks view
    pub fn selected_my_task_id(&self) -> Option<TaskId> {
        self.my_tasks.tasks().get(self.my_cursor).map(|t| t.id)
    }

    /// Keep all cursors inside their collections
    pub fn clamp_cursors(&mut self) {
        let visible = self.visible_tasks().len();
        self.tasks_cursor = self.tasks_cursor.min(visible.saturating_sub(1));
        self.projects_cursor = self
            .projects_cursor
            .min(self.projects.len().saturating_sub(1));
        self.my_cursor = self.my_cursor.min(self.my_tasks.len().saturating_sub(1));
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

/// Restore view state from the state file
pub fn restore_ui_state(app: &mut App) {
    let ui_state = match read_ui_state(&app.workspace_dir) {
        Some(s) => s,
        None => return,
    };

    if let Some(view) = View::from_slug(&ui_state.view) {
        app.view = view;
    }
    app.criteria = TaskCriteria {
        priority: ui_state.priority_filter,
        status: ui_state.status_filter,
    };
    app.projects_cursor = ui_state.projects_cursor;
    app.tasks_cursor = ui_state.tasks_cursor;
    app.my_cursor = ui_state.my_tasks_cursor;
    app.clamp_cursors();
}

/// Save view state to the state file
pub fn save_ui_state(app: &App) {
    let ui_state = UiState {
        view: app.view.slug().to_string(),
        priority_filter: app.criteria.priority,
        status_filter: app.criteria.status,
        projects_cursor: app.projects_cursor,
        tasks_cursor: app.tasks_cursor,
        my_tasks_cursor: app.my_cursor,
    };
    let _ = write_ui_state(&app.workspace_dir, &ui_state);
}

/// Run the TUI application
pub fn run(dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = match dir {
        Some(d) => std::fs::canonicalize(d)?,
        None => std::env::current_dir()?,
    };
    let config = config_io::load_config(&workspace_dir)?;

    let mut app = App::new(workspace_dir, config);
    restore_ui_state(&mut app);

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

    let result = run_event_loop(&mut terminal, &mut app);

    save_ui_state(&app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Test-only constructor with a fixed clock and the standard seed data
#[cfg(test)]
pub fn test_app() -> App {
    let mut app = App::new(
        PathBuf::from("/tmp/taskdeck-test"),
        WorkspaceConfig::default(),
    );
    // Fixed "today" between the seeded 2024 and 2025 due dates
    app.today = NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date");
    app
}
