use crate::utils::config::DEFAULT_TOP_AUTHORS;
use std::path::PathBuf;

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Blog collection JSON file
    pub input: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Number of rows kept in each per-author table
    pub top_authors: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("blogs.json"),
            output_json: None,
            top_authors: DEFAULT_TOP_AUTHORS,
            print_summary: false,
        }
    }
}

/// Arguments for the add command
#[derive(Debug, Clone)]
pub struct AddArgs {
    /// Store file to append to
    pub store: PathBuf,
    pub title: String,
    pub author: String,
    pub url: Option<String>,
    pub likes: Option<u64>,
}
