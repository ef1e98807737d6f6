use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Priority, Task, TaskStatus};

/// Active filter selections for a task collection. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCriteria {
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl TaskCriteria {
    /// Criteria that match everything
    pub fn all() -> Self {
        TaskCriteria::default()
    }

    pub fn is_all(&self) -> bool {
        self.priority.is_none() && self.status.is_none()
    }

    /// Exact match on every selected field
    pub fn matches(&self, task: &Task) -> bool {
        self.priority.is_none_or(|p| task.priority == p)
            && self.status.is_none_or(|s| task.status == s)
    }
}

/// Ordered subsequence of `tasks` matching `criteria`. Pure, single pass,
/// source order preserved; no matches is an empty result, not an error.
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &TaskCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|t| criteria.matches(t)).collect()
}

/// Ordered subsequence of `projects` with the given status (`None` = all)
pub fn filter_projects<'a>(
    projects: &'a [Project],
    status: Option<ProjectStatus>,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Task> {
        seed::recent_tasks()
    }

    #[test]
    fn test_all_criteria_is_identity() {
        let tasks = sample();
        assert!(TaskCriteria::all().is_all());
        let filtered = filter_tasks(&tasks, &TaskCriteria::all());
        let expected: Vec<&Task> = tasks.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_filter_is_order_preserving_subset() {
        let tasks = sample();
        let criteria = TaskCriteria {
            priority: None,
            status: Some(TaskStatus::InProgress),
        };
        let filtered = filter_tasks(&tasks, &criteria);
        let ids: Vec<u64> = filtered.iter().map(|t| t.id.0).collect();
        // Seed order is 1..=5; tasks 1 and 4 are in progress
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tasks = sample();
        let criteria = TaskCriteria {
            priority: Some(Priority::High),
            status: None,
        };
        let once: Vec<Task> = filter_tasks(&tasks, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Task> = filter_tasks(&once, &criteria)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_both_fields_must_match() {
        let tasks = sample();
        let criteria = TaskCriteria {
            priority: Some(Priority::High),
            status: Some(TaskStatus::Done),
        };
        let filtered = filter_tasks(&tasks, &criteria);
        // Only "Security Testing" is both High and Done
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Security Testing");
    }

    #[test]
    fn test_priority_only_scenario() {
        let mut a = Task::new("first");
        a.id = crate::model::TaskId(1);
        a.priority = Priority::High;
        a.status = TaskStatus::ToDo;
        let mut b = Task::new("second");
        b.id = crate::model::TaskId(2);
        b.priority = Priority::Low;
        b.status = TaskStatus::Done;
        let tasks = vec![a, b];

        let criteria = TaskCriteria {
            priority: Some(Priority::High),
            status: None,
        };
        let filtered = filter_tasks(&tasks, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.0, 1);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let tasks = sample();
        let criteria = TaskCriteria {
            priority: Some(Priority::Low),
            status: Some(TaskStatus::Done),
        };
        assert!(filter_tasks(&tasks, &criteria).is_empty());
    }

    #[test]
    fn test_filter_projects_by_status() {
        let projects = seed::latest_projects();
        let completed = filter_projects(&projects, Some(ProjectStatus::Completed));
        let names: Vec<&str> = completed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mobile App Development", "UI/UX Improvements"]);

        let all = filter_projects(&projects, None);
        assert_eq!(all.len(), projects.len());
    }
}
