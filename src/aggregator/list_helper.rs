//! Summary statistics over an ordered blog collection.
//!
//! Every function here is pure: it borrows the collection, never mutates it,
//! and returns freshly built values (or references into the input).
//!
//! Ties are always resolved in favour of whatever appears first in the
//! input. For the per-author operations that means the author whose first
//! blog comes earliest.

use crate::parser::schema::{AuthorBlogs, AuthorLikes, Blog};
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::HashMap;

/// Sum of likes across all blogs
///
/// **Public** - an empty collection has zero likes
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |sum, blog| sum.saturating_add(blog.likes))
}

/// The blog with the most likes
///
/// **Public** - returns `None` for an empty collection
///
/// The returned reference always points into `blogs`. When several blogs
/// share the maximum, the earliest one wins.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None::<&Blog>, |best, blog| match best {
        Some(current) if blog.likes <= current.likes => Some(current),
        _ => Some(blog),
    })
}

/// The author who wrote the most blogs, with their blog count
///
/// **Public** - requires a non-empty collection
///
/// # Errors
/// * `AggregateError::EmptyCollection` - there is no author to pick
pub fn most_blogs(blogs: &[Blog]) -> Result<AuthorBlogs, AggregateError> {
    let grouped = group_by_author(blogs, |_| 1);

    select_max(&grouped)
        .map(|&(author, count)| AuthorBlogs {
            author: author.to_string(),
            blogs: count,
        })
        .ok_or(AggregateError::EmptyCollection)
}

/// The author whose blogs collected the most likes, with that total
///
/// **Public** - requires a non-empty collection
///
/// # Errors
/// * `AggregateError::EmptyCollection` - there is no author to pick
pub fn most_likes(blogs: &[Blog]) -> Result<AuthorLikes, AggregateError> {
    let grouped = group_by_author(blogs, |blog| blog.likes);

    select_max(&grouped)
        .map(|&(author, likes)| AuthorLikes {
            author: author.to_string(),
            likes,
        })
        .ok_or(AggregateError::EmptyCollection)
}

/// Every author tied for the most likes, in order of first appearance
///
/// **Public** - empty collection gives an empty list
pub fn top_authors_by_likes(blogs: &[Blog]) -> Vec<AuthorLikes> {
    let grouped = group_by_author(blogs, |blog| blog.likes);

    let Some(&(_, max)) = select_max(&grouped) else {
        return Vec::new();
    };

    grouped
        .iter()
        .filter(|(_, likes)| *likes == max)
        .map(|&(author, likes)| AuthorLikes {
            author: author.to_string(),
            likes,
        })
        .collect()
}

/// Blog count per author, in order of first appearance
pub fn blogs_by_author(blogs: &[Blog]) -> Vec<AuthorBlogs> {
    group_by_author(blogs, |_| 1)
        .into_iter()
        .map(|(author, count)| AuthorBlogs {
            author: author.to_string(),
            blogs: count,
        })
        .collect()
}

/// Like total per author, in order of first appearance
pub fn likes_by_author(blogs: &[Blog]) -> Vec<AuthorLikes> {
    group_by_author(blogs, |blog| blog.likes)
        .into_iter()
        .map(|(author, likes)| AuthorLikes {
            author: author.to_string(),
            likes,
        })
        .collect()
}

/// Accumulate `metric` per author
///
/// **Private** - shared grouping pass
///
/// The vector keeps authors in first-seen order; the map only indexes into
/// it. Hash map iteration order is never observed.
fn group_by_author<'a, F>(blogs: &'a [Blog], metric: F) -> Vec<(&'a str, u64)>
where
    F: Fn(&Blog) -> u64,
{
    let mut groups: Vec<(&'a str, u64)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for blog in blogs {
        let author = blog.author.as_str();
        let slot = *index.entry(author).or_insert_with(|| {
            groups.push((author, 0));
            groups.len() - 1
        });
        groups[slot].1 = groups[slot].1.saturating_add(metric(blog));
    }

    debug!("Grouped {} blogs into {} authors", blogs.len(), groups.len());

    groups
}

/// Pick the entry with the largest metric, first one wins on ties
///
/// **Private** - internal selection
fn select_max<'g, 'a>(groups: &'g [(&'a str, u64)]) -> Option<&'g (&'a str, u64)> {
    groups
        .iter()
        .fold(None::<&(&str, u64)>, |best, entry| match best {
            Some(current) if entry.1 <= current.1 => Some(current),
            _ => Some(entry),
        })
}
