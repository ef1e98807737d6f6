use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique task identifier within a task store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow status shown in the tasks table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    /// Human-readable label ("To Do", "In Progress", "Done")
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Next status in display order (wraps)
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::ToDo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::ToDo,
        }
    }

    /// Previous status in display order (wraps)
    pub fn prev(self) -> TaskStatus {
        self.next().next()
    }

    /// Parse a CLI filter argument ("todo", "in-progress", "done")
    pub fn from_arg(s: &str) -> Option<TaskStatus> {
        match s.to_ascii_lowercase().as_str() {
            "todo" | "to-do" => Some(TaskStatus::ToDo),
            "in-progress" | "inprogress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority in display order (wraps)
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority in display order (wraps)
    pub fn prev(self) -> Priority {
        self.next().next()
    }

    /// Parse a CLI filter argument ("low", "medium", "high")
    pub fn from_arg(s: &str) -> Option<Priority> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deadline classification shown in the My Tasks view.
///
/// Derived from status and due date rather than stored: "overdue" is a
/// function of the clock, not a fact about the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleState {
    Completed,
    Pending,
    Overdue,
}

impl ScheduleState {
    pub fn label(self) -> &'static str {
        match self {
            ScheduleState::Completed => "completed",
            ScheduleState::Pending => "pending",
            ScheduleState::Overdue => "overdue",
        }
    }
}

impl fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A comment on a task. Append-only; never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique within the owning task
    pub id: u64,
    pub text: String,
    pub date: NaiveDate,
}

/// A task record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub assigned_to: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
    /// Project name reference. Not a foreign key — nothing checks it.
    pub project: String,
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Bumped by the store on every applied update. Staged edit buffers
    /// carry the revision they were copied at; a mismatch on save is a
    /// conflict.
    #[serde(skip)]
    pub revision: u64,
}

impl Task {
    /// Create a blank task draft. The store assigns the real id on create.
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: TaskId(0),
            title: title.into(),
            assigned_to: String::new(),
            description: String::new(),
            status: TaskStatus::ToDo,
            priority: Priority::Medium,
            due_date: NaiveDate::default(),
            project: String::new(),
            comments: Vec::new(),
            revision: 0,
        }
    }

    /// Classify this task for the My Tasks view relative to `today`
    pub fn schedule_state(&self, today: NaiveDate) -> ScheduleState {
        if self.status == TaskStatus::Done {
            ScheduleState::Completed
        } else if self.due_date < today {
            ScheduleState::Overdue
        } else {
            ScheduleState::Pending
        }
    }

    /// Highest comment id in use (0 if none)
    pub fn max_comment_id(&self) -> u64 {
        self.comments.iter().map(|c| c.id).max().unwrap_or(0)
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.assigned_to == other.assigned_to
            && self.description == other.description
            && self.status == other.status
            && self.priority == other.priority
            && self.due_date == other.due_date
            && self.project == other.project
            && self.comments == other.comments
    }
}

impl Eq for Task {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_cycle_round_trip() {
        for s in TaskStatus::ALL {
            assert_eq!(s.next().prev(), s);
        }
        assert_eq!(TaskStatus::Done.next(), TaskStatus::ToDo);
    }

    #[test]
    fn test_priority_from_arg() {
        assert_eq!(Priority::from_arg("High"), Some(Priority::High));
        assert_eq!(Priority::from_arg("medium"), Some(Priority::Medium));
        assert_eq!(Priority::from_arg("urgent"), None);
    }

    #[test]
    fn test_status_from_arg() {
        assert_eq!(TaskStatus::from_arg("todo"), Some(TaskStatus::ToDo));
        assert_eq!(
            TaskStatus::from_arg("In-Progress"),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(TaskStatus::from_arg("finished"), None);
    }

    #[test]
    fn test_schedule_state_done_is_completed() {
        let mut task = Task::new("Docs");
        task.status = TaskStatus::Done;
        task.due_date = date(2024, 4, 28);
        // Done wins even when the due date is long past
        assert_eq!(
            task.schedule_state(date(2024, 6, 1)),
            ScheduleState::Completed
        );
    }

    #[test]
    fn test_schedule_state_past_due_is_overdue() {
        let mut task = Task::new("Bug fixes");
        task.due_date = date(2024, 4, 28);
        assert_eq!(
            task.schedule_state(date(2024, 5, 1)),
            ScheduleState::Overdue
        );
    }

    #[test]
    fn test_schedule_state_future_due_is_pending() {
        let mut task = Task::new("Feature");
        task.due_date = date(2024, 5, 5);
        assert_eq!(task.schedule_state(date(2024, 5, 1)), ScheduleState::Pending);
        // Due today is still pending
        assert_eq!(task.schedule_state(date(2024, 5, 5)), ScheduleState::Pending);
    }

    #[test]
    fn test_eq_ignores_revision() {
        let a = Task::new("Same");
        let mut b = a.clone();
        b.revision = 7;
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_comment_id() {
        let mut task = Task::new("With comments");
        assert_eq!(task.max_comment_id(), 0);
        task.comments.push(Comment {
            id: 3,
            text: "first".into(),
            date: date(2024, 4, 25),
        });
        task.comments.push(Comment {
            id: 1,
            text: "second".into(),
            date: date(2024, 4, 26),
        });
        assert_eq!(task.max_comment_id(), 3);
    }
}
