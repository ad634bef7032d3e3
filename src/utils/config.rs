//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Minimum title length accepted when adding a blog to a store
pub const TITLE_MIN_LENGTH: usize = 5;

/// Default number of authors kept in the per-author report tables
pub const DEFAULT_TOP_AUTHORS: usize = 10;
pub const MAX_TOP_AUTHORS: usize = 1000;

// Field names that may wrap the blog array (API dumps and exports differ)
pub const BLOG_FIELD_NAMES: &[&str] = &["blogs", "data", "result", "items"];
