use crate::model::project::{Project, ProjectId};

use super::error::StoreError;
use super::repository::{Record, Repository};

impl Record for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

/// A mutation of the project store. All writes go through
/// `ProjectStore::apply`.
#[derive(Debug, Clone)]
pub enum ProjectAction {
    /// Insert a new project (id assigned by the store)
    Create(Project),
    /// Write a staged buffer back; rejected if `base_revision` is stale
    Update {
        project: Project,
        base_revision: u64,
    },
    Delete {
        id: ProjectId,
    },
}

/// What an applied action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectEvent {
    Created(ProjectId),
    Updated(ProjectId),
    Deleted(ProjectId),
}

/// In-memory project collection, seeded once at startup.
/// Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    next_id: u64,
}

impl ProjectStore {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let next_id = projects.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        ProjectStore { projects, next_id }
    }

    /// Store seeded with the built-in sample projects
    pub fn seeded() -> Self {
        Self::with_projects(crate::model::seed::latest_projects())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Project names in display order (the edit dialog's project picker)
    pub fn names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }

    fn find_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Single mutation entry point for the store
    pub fn apply(&mut self, action: ProjectAction) -> Result<ProjectEvent, StoreError> {
        match action {
            ProjectAction::Create(project) => {
                let id = self.create_project(project)?;
                Ok(ProjectEvent::Created(id))
            }
            ProjectAction::Update {
                project,
                base_revision,
            } => {
                let id = project.id;
                self.update_project(project, base_revision)?;
                Ok(ProjectEvent::Updated(id))
            }
            ProjectAction::Delete { id } => {
                self.delete_project(id)?;
                Ok(ProjectEvent::Deleted(id))
            }
        }
    }

    fn validate(project: &Project) -> Result<(), StoreError> {
        if project.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "project name must not be empty".into(),
            ));
        }
        if project.progress > 100 {
            return Err(StoreError::Validation(format!(
                "progress {} is out of range 0..=100",
                project.progress
            )));
        }
        Ok(())
    }

    fn create_project(&mut self, mut project: Project) -> Result<ProjectId, StoreError> {
        Self::validate(&project)?;
        let id = ProjectId(self.next_id);
        self.next_id += 1;
        project.id = id;
        project.revision = 0;
        self.projects.push(project);
        Ok(id)
    }

    fn update_project(&mut self, project: Project, base_revision: u64) -> Result<(), StoreError> {
        Self::validate(&project)?;
        let current = self
            .find_mut(project.id)
            .ok_or_else(|| StoreError::NotFound(format!("project {}", project.id)))?;
        if current.revision != base_revision {
            return Err(StoreError::Conflict(format!(
                "project {} changed since it was staged",
                project.id
            )));
        }
        let revision = current.revision + 1;
        *current = project;
        current.revision = revision;
        Ok(())
    }

    fn delete_project(&mut self, id: ProjectId) -> Result<Project, StoreError> {
        let idx = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("project {}", id)))?;
        Ok(self.projects.remove(idx))
    }
}

impl Repository for ProjectStore {
    type Record = Project;

    fn create(&mut self, record: Project) -> Result<ProjectId, StoreError> {
        self.create_project(record)
    }

    fn get(&self, id: ProjectId) -> Result<&Project, StoreError> {
        self.find(id)
            .ok_or_else(|| StoreError::NotFound(format!("project {}", id)))
    }

    fn update(&mut self, record: Project, base_revision: u64) -> Result<(), StoreError> {
        self.update_project(record, base_revision)
    }

    fn delete(&mut self, id: ProjectId) -> Result<Project, StoreError> {
        self.delete_project(id)
    }

    fn records(&self) -> &[Project] {
        &self.projects
    }
}
