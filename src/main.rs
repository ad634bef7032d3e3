//! Bloglist Stats CLI
//!
//! Loads blog collections, prints like/author statistics and manages a
//! small JSON blog store.

use anyhow::Result;
use bloglist_stats::commands::{
    display_schema, display_version, execute_add, execute_list, execute_stats,
    validate_args, validate_report_file, AddArgs, StatsArgs,
};
use bloglist_stats::parser::parse_likes;
use bloglist_stats::utils::config::DEFAULT_TOP_AUTHORS;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Bloglist Stats - like and author statistics for blog collections
#[derive(Parser, Debug)]
#[command(name = "bloglist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a blog collection
    Stats {
        /// Blog collection JSON file
        #[arg(short, long, env = "BLOGLIST_FILE")]
        file: PathBuf,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of authors in each ranking table
        #[arg(long, default_value_t = DEFAULT_TOP_AUTHORS)]
        top: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// List blogs in a store
    List {
        /// Store JSON file
        #[arg(short, long, env = "BLOGLIST_FILE")]
        file: PathBuf,
    },

    /// Add a blog to a store
    Add {
        /// Store JSON file (created if missing)
        #[arg(short, long, env = "BLOGLIST_FILE")]
        file: PathBuf,

        /// Blog title (at least 5 characters, unique)
        #[arg(long)]
        title: String,

        /// Blog author
        #[arg(long)]
        author: String,

        /// Blog URL
        #[arg(long)]
        url: Option<String>,

        /// Initial like count (defaults to 0)
        #[arg(long, value_parser = parse_likes)]
        likes: Option<u64>,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Stats {
            file,
            output,
            top,
            summary,
        } => {
            let args = StatsArgs {
                input: file,
                output_json: output,
                top_authors: top,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_stats(args)?;
        }

        Commands::List { file } => {
            execute_list(&file)?;
        }

        Commands::Add {
            file,
            title,
            author,
            url,
            likes,
        } => {
            execute_add(AddArgs {
                store: file,
                title,
                author,
                url,
                likes,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
