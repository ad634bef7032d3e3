//! Blog collection parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw JSON blog exports
//! - Validating records before they reach the aggregator
//! - Defining the report schema

pub mod blog_list;
pub mod schema;

// Re-export main types
pub use blog_list::{load_blogs, parse_blogs, parse_blogs_str, parse_likes};
pub use schema::{AuthorBlogs, AuthorLikes, Blog, StatsReport};
