//! Aggregation of blog collections into summary statistics.
//!
//! This module turns validated blog records into:
//! - Collection totals (likes, favorite blog)
//! - Per-author rankings (most blogs, most likes)
//! - A combined report for output

pub mod list_helper;
pub mod report;

// Re-export main functions
pub use list_helper::{
    blogs_by_author, favorite_blog, likes_by_author, most_blogs, most_likes, top_authors_by_likes,
    total_likes,
};
pub use report::build_report;
