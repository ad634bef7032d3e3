//! Blog collection storage backed by a JSON file.

pub mod blog_store;

pub use blog_store::{BlogStore, NewBlog};
