//! Plain-text rendering of a statistics report.

use crate::parser::schema::StatsReport;

/// Render a report as a human-readable text summary
///
/// **Public** - printed by `stats --summary`
pub fn render_summary(report: &StatsReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    out.push_str(&format!("{}\nBLOG STATISTICS\n{}\n", rule, rule));
    out.push_str(&format!("Source:       {}\n", report.source));
    out.push_str(&format!("Blogs:        {}\n", report.blog_count));
    out.push_str(&format!("Total likes:  {}\n", report.total_likes));
    out.push_str(&format!("Mean likes:   {:.1}\n", report.mean_likes()));

    match &report.favorite_blog {
        Some(blog) => out.push_str(&format!(
            "Favorite:     {} by {} ({} likes)\n",
            blog.display_title(),
            blog.author,
            blog.likes
        )),
        None => out.push_str("Favorite:     -\n"),
    }

    if let Some(most) = &report.most_blogs {
        out.push_str(&format!(
            "Most blogs:   {} ({} blogs)\n",
            most.author, most.blogs
        ));
    }

    if let Some(most) = &report.most_likes {
        out.push_str(&format!(
            "Most likes:   {} ({} likes)\n",
            most.author, most.likes
        ));
    }

    if report.top_authors.len() > 1 {
        let tied: Vec<&str> = report.top_authors.iter().map(|a| a.author.as_str()).collect();
        out.push_str(&format!("Tied on likes: {}\n", tied.join(", ")));
    }

    if !report.likes_by_author.is_empty() {
        out.push_str("\nLikes by author:\n");
        for (i, row) in report.likes_by_author.iter().enumerate() {
            out.push_str(&format!("{:>3}. {:<30} {:>8}\n", i + 1, row.author, row.likes));
        }
    }

    if !report.blogs_by_author.is_empty() {
        out.push_str("\nBlogs by author:\n");
        for (i, row) in report.blogs_by_author.iter().enumerate() {
            out.push_str(&format!("{:>3}. {:<30} {:>8}\n", i + 1, row.author, row.blogs));
        }
    }

    out.push_str(&rule);
    out
}
