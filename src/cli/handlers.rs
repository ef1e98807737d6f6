use std::error::Error;
use std::path::PathBuf;

use chrono::Local;

use crate::cli::commands::{Cli, Commands, ProjectsArgs, TasksArgs};
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::project::ProjectStatus;
use crate::model::task::{Priority, TaskStatus};
use crate::ops::filter::{TaskCriteria, filter_projects, filter_tasks};
use crate::ops::stats::overview_stats;
use crate::store::{ProjectStore, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let dir = workspace_dir(cli.dir.as_deref())?;

    match cli.command {
        None => {
            // No subcommand → the TUI; handled in main.rs
            Ok(())
        }
        Some(Commands::Tasks(args)) => cmd_tasks(args, json),
        Some(Commands::Projects(args)) => cmd_projects(args, json),
        Some(Commands::Mine) => cmd_mine(json),
        Some(Commands::Stats) => cmd_stats(&dir, json),
    }
}

/// Resolve the workspace directory (-C override or cwd)
fn workspace_dir(dir: Option<&str>) -> Result<PathBuf, Box<dyn Error>> {
    match dir {
        Some(d) => std::fs::canonicalize(d)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e).into()),
        None => std::env::current_dir().map_err(Into::into),
    }
}

// ---------------------------------------------------------------------------
// Filter argument parsing
// ---------------------------------------------------------------------------

fn parse_priority(arg: Option<&str>) -> Result<Option<Priority>, Box<dyn Error>> {
    match arg {
        None => Ok(None),
        Some("all") => Ok(None),
        Some(s) => Priority::from_arg(s)
            .map(Some)
            .ok_or_else(|| format!("invalid priority '{}' (expected low|medium|high|all)", s).into()),
    }
}

fn parse_task_status(arg: Option<&str>) -> Result<Option<TaskStatus>, Box<dyn Error>> {
    match arg {
        None => Ok(None),
        Some("all") => Ok(None),
        Some(s) => TaskStatus::from_arg(s)
            .map(Some)
            .ok_or_else(|| {
                format!("invalid status '{}' (expected todo|in-progress|done|all)", s).into()
            }),
    }
}

fn parse_project_status(arg: Option<&str>) -> Result<Option<ProjectStatus>, Box<dyn Error>> {
    match arg {
        None => Ok(None),
        Some("all") => Ok(None),
        Some(s) => ProjectStatus::from_arg(s)
            .map(Some)
            .ok_or_else(|| format!("invalid status '{}' (expected active|completed|all)", s).into()),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_tasks(args: TasksArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let criteria = TaskCriteria {
        priority: parse_priority(args.priority.as_deref())?,
        status: parse_task_status(args.status.as_deref())?,
    };

    let store = TaskStore::seeded();
    let filtered = filter_tasks(store.tasks(), &criteria);

    if json {
        let out: Vec<TaskJson> = filtered.iter().map(|t| task_to_json(t, None)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_tasks(&filtered);
    }
    Ok(())
}

fn cmd_projects(args: ProjectsArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let status = parse_project_status(args.status.as_deref())?;

    let store = ProjectStore::seeded();
    let filtered = filter_projects(store.projects(), status);

    if json {
        let out: Vec<ProjectJson> = filtered.iter().map(|p| project_to_json(p)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_projects(&filtered);
    }
    Ok(())
}

fn cmd_mine(json: bool) -> Result<(), Box<dyn Error>> {
    let store = TaskStore::with_tasks(crate::model::seed::my_tasks());
    let today = Local::now().date_naive();

    if json {
        let out: Vec<TaskJson> = store
            .tasks()
            .iter()
            .map(|t| task_to_json(t, Some(t.schedule_state(today))))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_my_tasks(store.tasks(), today);
    }
    Ok(())
}

fn cmd_stats(dir: &std::path::Path, json: bool) -> Result<(), Box<dyn Error>> {
    let config = config_io::load_config(dir)?;
    let projects = ProjectStore::seeded();
    let tasks = TaskStore::seeded();
    let stats = overview_stats(projects.projects(), tasks.tasks());

    if json {
        let out = stats_to_json(&config.workspace.name, &stats);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_stats(&config.workspace.name, &stats);
    }
    Ok(())
}
