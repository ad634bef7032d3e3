//! Assemble every blog statistic into a single report.
//!
//! The grouping helpers treat an empty collection as a precondition
//! violation; the report checks that precondition itself and leaves the
//! per-author fields empty instead.

use super::list_helper::{
    blogs_by_author, favorite_blog, likes_by_author, most_blogs, most_likes, top_authors_by_likes,
    total_likes,
};
use crate::parser::schema::{AuthorBlogs, AuthorLikes, Blog, StatsReport};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use log::debug;

/// Build a statistics report for a blog collection
///
/// **Public** - main entry point for report generation
///
/// # Arguments
/// * `source` - Where the blogs came from (recorded in the report)
/// * `blogs` - Blog collection, in input order
/// * `top_n` - Maximum number of rows in each per-author table
pub fn build_report(source: &str, blogs: &[Blog], top_n: usize) -> StatsReport {
    debug!("Building report for {} blogs from {}", blogs.len(), source);

    let (busiest_author, most_liked_author) = if blogs.is_empty() {
        (None, None)
    } else {
        (most_blogs(blogs).ok(), most_likes(blogs).ok())
    };

    StatsReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        blog_count: blogs.len(),
        total_likes: total_likes(blogs),
        favorite_blog: favorite_blog(blogs).cloned(),
        most_blogs: busiest_author,
        most_likes: most_liked_author,
        top_authors: top_authors_by_likes(blogs),
        blogs_by_author: rank_by_blogs(blogs_by_author(blogs), top_n),
        likes_by_author: rank_by_likes(likes_by_author(blogs), top_n),
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Sort by blog count (descending) and keep the first `top_n`
///
/// Sorting is stable, so equal counts stay in first-seen order.
fn rank_by_blogs(mut rows: Vec<AuthorBlogs>, top_n: usize) -> Vec<AuthorBlogs> {
    rows.sort_by(|a, b| b.blogs.cmp(&a.blogs));
    rows.truncate(top_n);
    rows
}

fn rank_by_likes(mut rows: Vec<AuthorLikes>, top_n: usize) -> Vec<AuthorLikes> {
    rows.sort_by(|a, b| b.likes.cmp(&a.likes));
    rows.truncate(top_n);
    rows
}

impl StatsReport {
    /// Average likes per blog (0 for an empty collection)
    pub fn mean_likes(&self) -> f64 {
        if self.blog_count == 0 {
            0.0
        } else {
            self.total_likes as f64 / self.blog_count as f64
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Blogs: {} | Likes: {} | Mean: {:.1} | Most blogs: {} | Most likes: {}",
            self.blog_count,
            self.total_likes,
            self.mean_likes(),
            self.most_blogs
                .as_ref()
                .map(|m| format!("{} ({})", m.author, m.blogs))
                .unwrap_or_else(|| "-".to_string()),
            self.most_likes
                .as_ref()
                .map(|m| format!("{} ({})", m.author, m.likes))
                .unwrap_or_else(|| "-".to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Blog> {
        vec![
            Blog::new("Go To Statement Considered Harmful", "Dijkstra", 10),
            Blog::new("Clean code", "Martin", 5),
            Blog::new("Canonical string reduction", "Dijkstra", 7),
            Blog::new("Type wars", "Martin", 12),
            Blog::new("React patterns", "Chan", 1),
        ]
    }

    #[test]
    fn test_build_report() {
        let blogs = sample();
        let report = build_report("blogs.json", &blogs, 10);

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.source, "blogs.json");
        assert_eq!(report.blog_count, 5);
        assert_eq!(report.total_likes, 35);
        assert_eq!(
            report.favorite_blog.as_ref().and_then(|b| b.title.as_deref()),
            Some("Type wars")
        );
        assert_eq!(report.most_blogs.as_ref().unwrap().author, "Dijkstra");
        assert_eq!(report.most_likes.as_ref().unwrap().likes, 17);
        assert_eq!(report.top_authors.len(), 2);
        assert_eq!(report.likes_by_author[0].author, "Dijkstra");
        assert_eq!(report.likes_by_author[2].author, "Chan");
    }

    #[test]
    fn test_build_report_empty() {
        let report = build_report("empty.json", &[], 10);

        assert_eq!(report.blog_count, 0);
        assert_eq!(report.total_likes, 0);
        assert!(report.favorite_blog.is_none());
        assert!(report.most_blogs.is_none());
        assert!(report.most_likes.is_none());
        assert!(report.top_authors.is_empty());
        assert_eq!(report.mean_likes(), 0.0);
    }

    #[test]
    fn test_tables_are_truncated() {
        let report = build_report("blogs.json", &sample(), 1);

        assert_eq!(report.blogs_by_author.len(), 1);
        assert_eq!(report.likes_by_author.len(), 1);
        // Dijkstra and Martin both have two blogs; Dijkstra appeared first
        assert_eq!(report.blogs_by_author[0].author, "Dijkstra");
    }

    #[test]
    fn test_summary() {
        let report = build_report("blogs.json", &sample(), 10);
        let summary = report.summary();

        assert!(summary.contains("Blogs: 5"));
        assert!(summary.contains("Most likes: Dijkstra (17)"));
    }
}
