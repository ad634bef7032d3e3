//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the grouping aggregations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// Grouping operations have no meaningful answer over zero records.
    #[error("Cannot group an empty blog collection")]
    EmptyCollection,
}

/// Errors that can occur while parsing blog collections
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read blog list: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid blog list format: {0}")]
    InvalidFormat(String),

    #[error("Invalid blog record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Errors that can occur while reading or updating a blog store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to parse store: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to write store: {0}")]
    Write(#[from] OutputError),

    #[error("Title is required")]
    MissingTitle,

    #[error("Title must be at least {min} characters long: {title:?}")]
    TitleTooShort { title: String, min: usize },

    #[error("A blog titled {0:?} already exists")]
    DuplicateTitle(String),

    #[error("Author is required")]
    MissingAuthor,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
