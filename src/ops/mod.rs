pub mod filter;
pub mod session;
pub mod stats;

pub use filter::{TaskCriteria, filter_projects, filter_tasks};
pub use session::EditSession;
pub use stats::{OverviewStats, overview_stats};
