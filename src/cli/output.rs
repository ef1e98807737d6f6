use chrono::NaiveDate;
use serde::Serialize;

use crate::model::project::Project;
use crate::model::task::{Comment, Priority, ScheduleState, Task, TaskStatus};
use crate::ops::stats::OverviewStats;
use crate::util::dates::{format_date, format_date_short};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    pub assigned_to: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleState>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<CommentJson>,
}

#[derive(Serialize)]
pub struct CommentJson {
    pub id: u64,
    pub text: String,
    pub date: NaiveDate,
}

#[derive(Serialize)]
pub struct ProjectJson {
    pub id: u64,
    pub name: String,
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: crate::model::ProjectStatus,
    pub description: String,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub workspace: String,
    pub projects: ProjectStatsJson,
    pub tasks: TaskStatsJson,
    pub team_members: usize,
}

#[derive(Serialize)]
pub struct ProjectStatsJson {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub completion_rate: u8,
    pub avg_progress: u8,
}

#[derive(Serialize)]
pub struct TaskStatsJson {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    pub pending: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task, schedule: Option<ScheduleState>) -> TaskJson {
    TaskJson {
        id: task.id.0,
        title: task.title.clone(),
        assigned_to: task.assigned_to.clone(),
        status: task.status,
        priority: task.priority,
        due_date: task.due_date,
        project: task.project.clone(),
        schedule,
        description: task.description.clone(),
        comments: task.comments.iter().map(comment_to_json).collect(),
    }
}

fn comment_to_json(comment: &Comment) -> CommentJson {
    CommentJson {
        id: comment.id,
        text: comment.text.clone(),
        date: comment.date,
    }
}

pub fn project_to_json(project: &Project) -> ProjectJson {
    ProjectJson {
        id: project.id.0,
        name: project.name.clone(),
        progress: project.progress,
        start_date: project.start_date,
        end_date: project.end_date,
        status: project.status,
        description: project.description.clone(),
    }
}

pub fn stats_to_json(workspace: &str, stats: &OverviewStats) -> StatsJson {
    StatsJson {
        workspace: workspace.to_string(),
        projects: ProjectStatsJson {
            total: stats.total_projects,
            active: stats.active_projects,
            completed: stats.completed_projects,
            completion_rate: stats.completion_rate,
            avg_progress: stats.avg_progress,
        },
        tasks: TaskStatsJson {
            total: stats.total_tasks,
            todo: stats.by_status[0].1,
            in_progress: stats.by_status[1].1,
            done: stats.by_status[2].1,
            pending: stats.pending_tasks,
            low: stats.by_priority[0].1,
            medium: stats.by_priority[1].1,
            high: stats.by_priority[2].1,
        },
        team_members: stats.team_members,
    }
}

// ---------------------------------------------------------------------------
// Plain output
// ---------------------------------------------------------------------------

pub fn print_tasks(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("no matching tasks");
        return;
    }
    let title_w = tasks.iter().map(|t| t.title.len()).max().unwrap_or(0).max(5);
    let who_w = tasks
        .iter()
        .map(|t| t.assigned_to.len())
        .max()
        .unwrap_or(0)
        .max(8);
    for task in tasks {
        println!(
            "{:>3}  {:<title_w$}  {:<who_w$}  {:<11}  {:<6}  {:<6}  {}",
            task.id,
            task.title,
            task.assigned_to,
            task.status.label(),
            task.priority.label(),
            format_date_short(task.due_date),
            task.project,
        );
    }
}

pub fn print_projects(projects: &[&Project]) {
    if projects.is_empty() {
        println!("no matching projects");
        return;
    }
    let name_w = projects
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    for project in projects {
        println!(
            "{:>3}  {:<name_w$}  {:>4}%  {}  \u{2192}  {}  {:<9}  {}",
            project.id,
            project.name,
            project.progress,
            format_date(project.start_date),
            format_date(project.end_date),
            project.status.label(),
            project.description,
        );
    }
}

pub fn print_my_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("no tasks assigned");
        return;
    }
    for task in tasks {
        let schedule = task.schedule_state(today);
        println!(
            "{:>3}  [{}] {} ({} comments)",
            task.id,
            schedule,
            task.title,
            task.comments.len()
        );
        println!(
            "     {} \u{2022} due {}",
            task.project,
            format_date(task.due_date)
        );
        if !task.description.is_empty() {
            println!("     {}", task.description);
        }
    }
}

pub fn print_stats(workspace: &str, stats: &OverviewStats) {
    println!("{}", workspace);
    println!(
        "projects: {} total, {} active, {} completed ({}% completion, {}% avg progress)",
        stats.total_projects,
        stats.active_projects,
        stats.completed_projects,
        stats.completion_rate,
        stats.avg_progress,
    );
    let status_line: Vec<String> = stats
        .by_status
        .iter()
        .map(|(s, n)| format!("{} {}", n, s.label()))
        .collect();
    println!(
        "tasks: {} total ({}), {} pending",
        stats.total_tasks,
        status_line.join(", "),
        stats.pending_tasks,
    );
    let priority_line: Vec<String> = stats
        .by_priority
        .iter()
        .map(|(p, n)| format!("{} {}", n, p.label()))
        .collect();
    println!("priorities: {}", priority_line.join(", "));
    println!("team members: {}", stats.team_members);
}
