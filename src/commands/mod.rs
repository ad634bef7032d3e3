//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod stats;
pub mod store;
pub mod utils;

// Re-export main command functions
pub use models::{AddArgs, StatsArgs};
pub use stats::{execute_stats, validate_args};
pub use store::{execute_add, execute_list};
pub use utils::{display_schema, display_version, validate_report_file};
