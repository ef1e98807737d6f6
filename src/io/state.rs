use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::task::{Priority, TaskStatus};

/// Persisted TUI state file name. Holds view state only — records are
/// seeded fresh every run.
pub const STATE_FILE: &str = ".taskdeck-state.json";

/// Persisted TUI state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which view is showing ("overview", "projects", "tasks", "my-tasks")
    pub view: String,
    /// Active priority filter in the tasks view
    #[serde(default)]
    pub priority_filter: Option<Priority>,
    /// Active status filter in the tasks view
    #[serde(default)]
    pub status_filter: Option<TaskStatus>,
    #[serde(default)]
    pub projects_cursor: usize,
    #[serde(default)]
    pub tasks_cursor: usize,
    #[serde(default)]
    pub my_tasks_cursor: usize,
}

/// Read the state file from `dir`. Missing or malformed files yield None.
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let path = dir.join(STATE_FILE);
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write the state file to `dir`
pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = dir.join(STATE_FILE);
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
