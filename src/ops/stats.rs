use std::collections::HashSet;

use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Priority, Task, TaskStatus};

/// Summary numbers for the dashboard overview, computed from the stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    /// Percent of projects completed (0 when there are no projects)
    pub completion_rate: u8,
    /// Mean project progress percent (0 when there are no projects)
    pub avg_progress: u8,
    pub total_tasks: usize,
    pub done_tasks: usize,
    /// Tasks not yet done
    pub pending_tasks: usize,
    /// Distinct non-empty assignees
    pub team_members: usize,
    /// Task counts in `TaskStatus::ALL` order
    pub by_status: [(TaskStatus, usize); 3],
    /// Task counts in `Priority::ALL` order
    pub by_priority: [(Priority, usize); 3],
}

/// Compute overview stats from the seeded stores
pub fn overview_stats(projects: &[Project], tasks: &[Task]) -> OverviewStats {
    let total_projects = projects.len();
    let completed_projects = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .count();
    let active_projects = total_projects - completed_projects;

    let completion_rate = if total_projects == 0 {
        0
    } else {
        (completed_projects * 100 / total_projects) as u8
    };
    let avg_progress = if total_projects == 0 {
        0
    } else {
        (projects.iter().map(|p| p.progress as usize).sum::<usize>() / total_projects) as u8
    };

    let total_tasks = tasks.len();
    let done_tasks = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();

    let by_status = TaskStatus::ALL
        .map(|s| (s, tasks.iter().filter(|t| t.status == s).count()));
    let by_priority = Priority::ALL
        .map(|p| (p, tasks.iter().filter(|t| t.priority == p).count()));

    let team_members = tasks
        .iter()
        .map(|t| t.assigned_to.as_str())
        .filter(|a| !a.is_empty())
        .collect::<HashSet<_>>()
        .len();

    OverviewStats {
        total_projects,
        active_projects,
        completed_projects,
        completion_rate,
        avg_progress,
        total_tasks,
        done_tasks,
        pending_tasks: total_tasks - done_tasks,
        team_members,
        by_status,
        by_priority,
    }
}
