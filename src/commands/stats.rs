//! Stats command implementation.
//!
//! The stats command:
//! 1. Loads the blog collection
//! 2. Aggregates it into a report
//! 3. Writes the report and/or prints a summary

use super::models::StatsArgs;
use crate::aggregator::build_report;
use crate::output::{render_summary, write_report};
use crate::parser::load_blogs;
use crate::parser::schema::StatsReport;
use crate::utils::config::MAX_TOP_AUTHORS;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The generated report
///
/// # Errors
/// * Unreadable or malformed blog file
/// * File write errors
pub fn execute_stats(args: StatsArgs) -> Result<StatsReport> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading blogs from {}...", args.input.display());
    let blogs = load_blogs(&args.input)
        .with_context(|| format!("Failed to load blogs from {}", args.input.display()))?;

    debug!("Loaded {} blogs", blogs.len());

    info!("Step 2/3: Aggregating statistics...");
    let source = args.input.display().to_string();
    let report = build_report(&source, &blogs, args.top_authors);
    info!("{}", report.summary());

    info!("Step 3/3: Writing output...");
    if let Some(output) = &args.output_json {
        write_report(&report, output).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", output.display());
    } else {
        debug!("No output file requested");
    }

    if args.print_summary {
        println!("{}", render_summary(&report));
    }

    info!(
        "Stats completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Validate stats arguments
///
/// **Public** - can be called before execute_stats for early validation
pub fn validate_args(args: &StatsArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input file cannot be empty");
    }

    if args.top_authors == 0 {
        anyhow::bail!("top_authors must be greater than 0");
    }

    if args.top_authors > MAX_TOP_AUTHORS {
        anyhow::bail!("top_authors is too large (max {})", MAX_TOP_AUTHORS);
    }

    if let Some(output) = &args.output_json {
        if output == &args.input {
            anyhow::bail!("Report output would overwrite the input file");
        }
    }

    Ok(())
}
