use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique project identifier within a project store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Completed];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Toggle between the two statuses
    pub fn next(self) -> ProjectStatus {
        match self {
            ProjectStatus::Active => ProjectStatus::Completed,
            ProjectStatus::Completed => ProjectStatus::Active,
        }
    }

    /// Parse a CLI filter argument ("active", "completed")
    pub fn from_arg(s: &str) -> Option<ProjectStatus> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Some(ProjectStatus::Active),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A project record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Percent complete, 0..=100 (enforced by the store)
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
    pub description: String,

    /// Bumped by the store on every applied update; see `Task::revision`.
    #[serde(skip)]
    pub revision: u64,
}

impl Project {
    /// Blank draft for the New Project dialog: empty name and description,
    /// both dates set to `today`, status Active, no progress.
    pub fn draft(today: NaiveDate) -> Self {
        Project {
            id: ProjectId(0),
            name: String::new(),
            progress: 0,
            start_date: today,
            end_date: today,
            status: ProjectStatus::Active,
            description: String::new(),
            revision: 0,
        }
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.progress == other.progress
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.status == other.status
            && self.description == other.description
    }
}

impl Eq for Project {}
