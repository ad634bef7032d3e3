//! Bloglist Stats
//!
//! Like and author statistics for blog collections.
//!
//! The heart of the crate is [`aggregator::list_helper`]: pure functions
//! that reduce an ordered slice of [`parser::Blog`] records into totals
//! and per-author rankings. The remaining modules load collections from
//! JSON, keep a small JSON-file blog store, and write reports for the
//! `bloglist` CLI.
//!
//! ```
//! use bloglist_stats::aggregator::{most_likes, total_likes};
//! use bloglist_stats::parser::Blog;
//!
//! let blogs = vec![
//!     Blog::untitled("Dijkstra", 10),
//!     Blog::untitled("Martin", 5),
//!     Blog::untitled("Dijkstra", 7),
//! ];
//!
//! assert_eq!(total_likes(&blogs), 22);
//! assert_eq!(most_likes(&blogs).unwrap().likes, 17);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod store;
pub mod utils;
