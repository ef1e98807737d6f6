//! Built-in sample data. Stores are seeded from these literals at startup;
//! nothing is ever written back.

use chrono::NaiveDate;

use super::project::{Project, ProjectId, ProjectStatus};
use super::task::{Comment, Priority, Task, TaskId, TaskStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn task(
    id: u64,
    title: &str,
    assigned_to: &str,
    status: TaskStatus,
    priority: Priority,
    due_date: NaiveDate,
    project: &str,
) -> Task {
    Task {
        id: TaskId(id),
        title: title.to_string(),
        assigned_to: assigned_to.to_string(),
        description: String::new(),
        status,
        priority,
        due_date,
        project: project.to_string(),
        comments: Vec::new(),
        revision: 0,
    }
}

/// Recent tasks shown in the admin tasks table
pub fn recent_tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Update User Interface",
            "Vanraj",
            TaskStatus::InProgress,
            Priority::High,
            date(2025, 5, 10),
            "Website Redesign",
        ),
        task(
            2,
            "Database Optimization",
            "Parth",
            TaskStatus::ToDo,
            Priority::Medium,
            date(2025, 5, 15),
            "Database Migration",
        ),
        task(
            3,
            "Security Testing",
            "Gaurav",
            TaskStatus::Done,
            Priority::High,
            date(2025, 4, 30),
            "Security Audit",
        ),
        task(
            4,
            "Mobile App Testing",
            "Pruthvi",
            TaskStatus::InProgress,
            Priority::Low,
            date(2025, 5, 5),
            "Mobile App Development",
        ),
        task(
            5,
            "Content Migration",
            "Prabhat",
            TaskStatus::ToDo,
            Priority::Medium,
            date(2025, 5, 20),
            "Website Redesign",
        ),
    ]
}

/// Latest projects shown in the admin projects table
pub fn latest_projects() -> Vec<Project> {
    let project = |id, name: &str, progress, start, end, status, description: &str| Project {
        id: ProjectId(id),
        name: name.to_string(),
        progress,
        start_date: start,
        end_date: end,
        status,
        description: description.to_string(),
        revision: 0,
    };

    vec![
        project(
            1,
            "Website Redesign",
            75,
            date(2025, 4, 1),
            date(2025, 5, 15),
            ProjectStatus::Active,
            "Complete overhaul of company website",
        ),
        project(
            2,
            "Mobile App Development",
            90,
            date(2025, 3, 15),
            date(2025, 4, 30),
            ProjectStatus::Completed,
            "New mobile app for customers",
        ),
        project(
            3,
            "Database Migration",
            45,
            date(2025, 4, 10),
            date(2025, 5, 20),
            ProjectStatus::Active,
            "Migrate to new cloud database",
        ),
        project(
            4,
            "Security Audit",
            60,
            date(2025, 4, 5),
            date(2025, 5, 5),
            ProjectStatus::Active,
            "Annual security assessment",
        ),
        project(
            5,
            "UI/UX Improvements",
            100,
            date(2025, 3, 1),
            date(2025, 4, 15),
            ProjectStatus::Completed,
            "User interface enhancements",
        ),
    ]
}

/// The signed-in employee's tasks for the My Tasks view
pub fn my_tasks() -> Vec<Task> {
    let comment = |id, text: &str, d| Comment {
        id,
        text: text.to_string(),
        date: d,
    };

    let mut docs = task(
        1,
        "Update user documentation",
        "Me",
        TaskStatus::Done,
        Priority::High,
        date(2024, 5, 1),
        "Website Redesign",
    );
    docs.description = "Update the user documentation with new features and improvements".into();
    docs.comments = vec![
        comment(1, "Started working on the documentation", date(2024, 4, 25)),
        comment(2, "Completed the first draft", date(2024, 4, 28)),
    ];

    let mut auth = task(
        2,
        "Implement new feature",
        "Me",
        TaskStatus::ToDo,
        Priority::Medium,
        date(2024, 5, 5),
        "Mobile App",
    );
    auth.description = "Implement the new user authentication feature".into();
    auth.comments = vec![comment(1, "Started implementation", date(2024, 4, 26))];

    let mut bugs = task(
        3,
        "Bug fixes for login page",
        "Me",
        TaskStatus::ToDo,
        Priority::High,
        date(2024, 4, 28),
        "Website Redesign",
    );
    bugs.description = "Fix the reported bugs in the login page".into();

    vec![docs, auth, bugs]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let tasks = recent_tasks();
        let mut ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());

        let projects = latest_projects();
        let mut ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_seed_progress_in_range() {
        assert!(latest_projects().iter().all(|p| p.progress <= 100));
    }

    #[test]
    fn test_my_tasks_have_comments() {
        let tasks = my_tasks();
        assert_eq!(tasks[0].comments.len(), 2);
        assert_eq!(tasks[1].comments.len(), 1);
        assert!(tasks[2].comments.is_empty());
    }
}
