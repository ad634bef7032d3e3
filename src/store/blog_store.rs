//! JSON-file backed blog collection.
//!
//! The file holds a plain array of blog objects. Records are kept in
//! insertion order, which is the order the aggregator sees them in.

use crate::output::write_json_pretty;
use crate::parser::blog_list::load_blogs;
use crate::parser::schema::Blog;
use crate::utils::config::TITLE_MIN_LENGTH;
use crate::utils::error::StoreError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// A blog waiting to be added to a store
#[derive(Debug, Clone, Default)]
pub struct NewBlog {
    pub title: Option<String>,
    pub author: String,
    pub url: Option<String>,
    /// Missing likes default to 0
    pub likes: Option<u64>,
}

/// Blog collection loaded from a JSON file
///
/// `open` accepts anything the parser does, including database exports and
/// `{"blogs": [...]}` wrappers. `save` always writes a bare array of blog
/// objects: wrapper objects and bookkeeping fields (`_id`, `__v`, `user`)
/// are not written back.
#[derive(Debug)]
pub struct BlogStore {
    path: PathBuf,
    blogs: Vec<Blog>,
}

impl BlogStore {
    /// Open a store, starting empty if the file does not exist yet
    ///
    /// # Errors
    /// * `StoreError::Parse` - File cannot be read or is not a valid blog list
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let blogs = if path.exists() {
            load_blogs(&path)?
        } else {
            debug!("Store {} does not exist, starting empty", path.display());
            Vec::new()
        };

        debug!("Opened store {} with {} blogs", path.display(), blogs.len());

        Ok(Self { path, blogs })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All blogs, in insertion order
    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    /// Validate and append a blog
    ///
    /// # Errors
    /// * `StoreError::MissingTitle` / `TitleTooShort` - title rules
    /// * `StoreError::DuplicateTitle` - titles are unique within a store
    /// * `StoreError::MissingAuthor` - author is blank
    pub fn add(&mut self, new_blog: NewBlog) -> Result<&Blog, StoreError> {
        let title = validate_title(new_blog.title.as_deref())?;

        if self
            .blogs
            .iter()
            .any(|blog| blog.title.as_deref().map(str::trim) == Some(title.as_str()))
        {
            return Err(StoreError::DuplicateTitle(title));
        }

        let author = new_blog.author.trim();
        if author.is_empty() {
            return Err(StoreError::MissingAuthor);
        }

        let blog = Blog {
            title: Some(title),
            author: author.to_string(),
            url: new_blog.url.filter(|url| !url.trim().is_empty()),
            likes: new_blog.likes.unwrap_or(0),
        };

        info!("Added blog: {} by {}", blog.display_title(), blog.author);

        let idx = self.blogs.len();
        self.blogs.push(blog);
        Ok(&self.blogs[idx])
    }

    /// Write the collection back to its file
    pub fn save(&self) -> Result<(), StoreError> {
        write_json_pretty(&self.blogs, &self.path)?;
        info!("Saved {} blogs to {}", self.blogs.len(), self.path.display());
        Ok(())
    }
}

/// Check title presence and minimum length
///
/// **Private** - internal validation
fn validate_title(title: Option<&str>) -> Result<String, StoreError> {
    let title = title.map(str::trim).unwrap_or_default();

    if title.is_empty() {
        return Err(StoreError::MissingTitle);
    }

    if title.chars().count() < TITLE_MIN_LENGTH {
        return Err(StoreError::TitleTooShort {
            title: title.to_string(),
            min: TITLE_MIN_LENGTH,
        });
    }

    Ok(title.to_string())
}
