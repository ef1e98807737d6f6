use chrono::NaiveDate;

use crate::model::task::{Comment, Task, TaskId, TaskStatus};

use super::error::StoreError;
use super::repository::{Record, Repository};

impl Record for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

/// A mutation of the task store. All writes go through `TaskStore::apply`.
#[derive(Debug, Clone)]
pub enum TaskAction {
    /// Insert a new task (id assigned by the store)
    Create(Task),
    /// Write a staged buffer back; rejected if `base_revision` is stale
    Update { task: Task, base_revision: u64 },
    Delete {
        id: TaskId,
    },
    SetStatus {
        id: TaskId,
        status: TaskStatus,
    },
    /// Append a comment. Blank text is rejected; the comment id is the
    /// task's max comment id + 1.
    AddComment {
        id: TaskId,
        text: String,
        date: NaiveDate,
    },
}

/// What an applied action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    Created(TaskId),
    Updated(TaskId),
    Deleted(TaskId),
    StatusSet(TaskId, TaskStatus),
    CommentAdded { task: TaskId, comment: u64 },
}

/// In-memory task collection for one view, seeded once at startup.
/// Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        TaskStore { tasks, next_id }
    }

    /// Store seeded with the built-in sample tasks
    pub fn seeded() -> Self {
        Self::with_tasks(crate::model::seed::recent_tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Single mutation entry point for the store
    pub fn apply(&mut self, action: TaskAction) -> Result<TaskEvent, StoreError> {
        match action {
            TaskAction::Create(task) => {
                let id = self.create_task(task)?;
                Ok(TaskEvent::Created(id))
            }
            TaskAction::Update {
                task,
                base_revision,
            } => {
                let id = task.id;
                self.update_task(task, base_revision)?;
                Ok(TaskEvent::Updated(id))
            }
            TaskAction::Delete { id } => {
                self.delete_task(id)?;
                Ok(TaskEvent::Deleted(id))
            }
            TaskAction::SetStatus { id, status } => {
                let task = self
                    .find_mut(id)
                    .ok_or_else(|| StoreError::NotFound(format!("task {}", id)))?;
                if task.status != status {
                    task.status = status;
                    task.revision += 1;
                }
                Ok(TaskEvent::StatusSet(id, status))
            }
            TaskAction::AddComment { id, text, date } => {
                let comment = self.add_comment(id, &text, date)?;
                Ok(TaskEvent::CommentAdded {
                    task: id,
                    comment,
                })
            }
        }
    }

    fn validate(task: &Task) -> Result<(), StoreError> {
        if task.title.trim().is_empty() {
            return Err(StoreError::Validation("task title must not be empty".into()));
        }
        Ok(())
    }

    fn create_task(&mut self, mut task: Task) -> Result<TaskId, StoreError> {
        Self::validate(&task)?;
        let id = TaskId(self.next_id);
        self.next_id += 1;
        task.id = id;
        task.revision = 0;
        self.tasks.push(task);
        Ok(id)
    }

    fn update_task(&mut self, task: Task, base_revision: u64) -> Result<(), StoreError> {
        Self::validate(&task)?;
        let current = self
            .find_mut(task.id)
            .ok_or_else(|| StoreError::NotFound(format!("task {}", task.id)))?;
        if current.revision != base_revision {
            return Err(StoreError::Conflict(format!(
                "task {} changed since it was staged",
                task.id
            )));
        }
        let revision = current.revision + 1;
        *current = task;
        current.revision = revision;
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("task {}", id)))?;
        Ok(self.tasks.remove(idx))
    }

    fn add_comment(
        &mut self,
        id: TaskId,
        text: &str,
        date: NaiveDate,
    ) -> Result<u64, StoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::Validation(
                "comment text must not be empty".into(),
            ));
        }
        let task = self
            .find_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("task {}", id)))?;
        let comment_id = task.max_comment_id() + 1;
        task.comments.push(Comment {
            id: comment_id,
            text: trimmed.to_string(),
            date,
        });
        Ok(comment_id)
    }
}

impl Repository for TaskStore {
    type Record = Task;

    fn create(&mut self, record: Task) -> Result<TaskId, StoreError> {
        self.create_task(record)
    }

    fn get(&self, id: TaskId) -> Result<&Task, StoreError> {
        self.find(id)
            .ok_or_else(|| StoreError::NotFound(format!("task {}", id)))
    }

    fn update(&mut self, record: Task, base_revision: u64) -> Result<(), StoreError> {
        self.update_task(record, base_revision)
    }

    fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        self.delete_task(id)
    }

    fn records(&self) -> &[Task] {
        &self.tasks
    }
}
