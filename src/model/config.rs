use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration from taskdeck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub workspace: WorkspaceInfo,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub name: String,
}

impl Default for WorkspaceInfo {
    fn default() -> Self {
        WorkspaceInfo {
            name: "taskdeck".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme color overrides, e.g. `high = "#f44336"` under [ui.colors]
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: IndexMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
