//! List and add commands for a blog store file.

use super::models::AddArgs;
use crate::store::{BlogStore, NewBlog};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Print every blog's title and author
pub fn execute_list(store_path: &Path) -> Result<()> {
    let store = BlogStore::open(store_path)
        .with_context(|| format!("Failed to open store {}", store_path.display()))?;

    println!("all blogs:");
    for blog in store.blogs() {
        println!("{} {}", blog.display_title(), blog.author);
    }

    info!("Listed {} blogs", store.len());

    Ok(())
}

/// Validate a new blog, append it and save the store
pub fn execute_add(args: AddArgs) -> Result<()> {
    let mut store = BlogStore::open(&args.store)
        .with_context(|| format!("Failed to open store {}", args.store.display()))?;

    let blog = store
        .add(NewBlog {
            title: Some(args.title),
            author: args.author,
            url: args.url,
            likes: args.likes,
        })
        .context("Blog rejected")?;

    println!("added blog: {} {}", blog.display_title(), blog.author);

    store.save().context("Failed to save store")?;

    Ok(())
}
