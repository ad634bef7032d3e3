use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Blogs: {}", report.blog_count);
    println!("  Total Likes: {}", report.total_likes);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Bloglist Stats Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - Blog collection the report was built from");
        println!("  blog_count: number         - Number of blogs aggregated");
        println!("  total_likes: number        - Sum of likes");
        println!("  favorite_blog: object?     - Most liked blog (title, author, url, likes)");
        println!("  most_blogs: object?        - Author with most blogs");
        println!("    author: string");
        println!("    blogs: number");
        println!("  most_likes: object?        - Author with most likes");
        println!("    author: string");
        println!("    likes: number");
        println!("  top_authors: array         - Every author tied for most likes");
        println!("  blogs_by_author: array     - Blog counts per author, largest first");
        println!("  likes_by_author: array     - Like totals per author, largest first");
        println!("  generated_at: string       - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Bloglist Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Like and author statistics for blog collections.");
}
