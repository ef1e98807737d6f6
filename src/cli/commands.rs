use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[#] taskdeck v", env!("CARGO_PKG_VERSION"), " - your projects at a glance"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different workspace directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks from the tasks table
    Tasks(TasksArgs),
    /// List projects
    Projects(ProjectsArgs),
    /// List your own tasks with their deadline state
    Mine,
    /// Show overview statistics
    Stats,
}

#[derive(Args)]
pub struct TasksArgs {
    /// Filter by priority (low, medium, high, all)
    #[arg(long)]
    pub priority: Option<String>,
    /// Filter by status (todo, in-progress, done, all)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct ProjectsArgs {
    /// Filter by status (active, completed, all)
    #[arg(long)]
    pub status: Option<String>,
}
