//! Blog collection parser.
//!
//! Accepts raw JSON as exported from the blog API or database and turns it
//! into validated `Blog` records. Database bookkeeping fields (`_id`, `id`,
//! `__v`, `user`) are ignored. A collection is rejected as a whole when any
//! record is malformed, so aggregates never silently skip records.

use super::schema::Blog;
use crate::utils::config::BLOG_FIELD_NAMES;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parse a blog collection from a JSON value
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - Either an array of blogs or an object wrapping one
///
/// # Errors
/// * `ParseError::InvalidFormat` - Not an array and no known wrapper field
/// * `ParseError::InvalidRecord` - A record is missing its author or has bad likes
pub fn parse_blogs(raw: &Value) -> Result<Vec<Blog>, ParseError> {
    let records = extract_blog_array(raw)?;

    debug!("Parsing {} blog records", records.len());

    records
        .iter()
        .enumerate()
        .map(|(index, value)| parse_blog(index, value))
        .collect()
}

/// Parse a blog collection from JSON text
pub fn parse_blogs_str(json: &str) -> Result<Vec<Blog>, ParseError> {
    let raw: Value = serde_json::from_str(json)?;
    parse_blogs(&raw)
}

/// Read and parse a blog collection file
pub fn load_blogs(path: impl AsRef<Path>) -> Result<Vec<Blog>, ParseError> {
    let path = path.as_ref();

    debug!("Loading blogs from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_blogs_str(&contents)
}

/// Locate the array of blog records
///
/// **Private** - internal helper for parse_blogs
fn extract_blog_array(raw: &Value) -> Result<&[Value], ParseError> {
    match raw {
        Value::Array(items) => Ok(items.as_slice()),

        Value::Object(obj) => {
            for field in BLOG_FIELD_NAMES {
                if let Some(Value::Array(items)) = obj.get(*field) {
                    debug!("Blog list found under '{}' field", field);
                    return Ok(items.as_slice());
                }
            }

            warn!(
                "Object has none of the blog list fields: {}",
                BLOG_FIELD_NAMES.join(", ")
            );
            Err(ParseError::InvalidFormat(
                "Object does not contain a blog array".to_string(),
            ))
        }

        _ => Err(ParseError::InvalidFormat(
            "Blog list must be a JSON array or object".to_string(),
        )),
    }
}

/// Parse a single blog record
///
/// **Private** - internal parsing logic
fn parse_blog(index: usize, value: &Value) -> Result<Blog, ParseError> {
    let invalid = |reason: &str| ParseError::InvalidRecord {
        index,
        reason: reason.to_string(),
    };

    let obj = value
        .as_object()
        .ok_or_else(|| invalid("record is not an object"))?;

    let author = match obj.get("author") {
        Some(Value::String(author)) if !author.trim().is_empty() => author.clone(),
        Some(Value::String(_)) => return Err(invalid("author is blank")),
        Some(_) => return Err(invalid("author must be a string")),
        None => return Err(invalid("author is missing")),
    };

    let likes = match obj.get("likes") {
        None | Some(Value::Null) => 0,
        Some(val) => parse_likes_value(val).map_err(|reason| invalid(reason.as_str()))?,
    };

    Ok(Blog {
        title: optional_string(obj, "title"),
        author,
        url: optional_string(obj, "url"),
        likes,
    })
}

/// Read an optional string field, ignoring values of the wrong type
fn optional_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => {
            warn!("Ignoring non-string '{}' field: {}", field, other);
            None
        }
    }
}

/// Parse a like count from a JSON number or decimal string
fn parse_likes_value(val: &Value) -> Result<u64, String> {
    if let Some(n) = val.as_u64() {
        Ok(n)
    } else if let Some(s) = val.as_str() {
        parse_likes(s)
    } else if val.is_number() {
        Err(format!("likes must be a non-negative integer, found {}", val))
    } else {
        Err(format!("likes must be a number, found {}", val))
    }
}

/// Parse a like count from text
///
/// **Public** - also used by the CLI for `--likes`
pub fn parse_likes(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid like count {:?}: {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_array() {
        let raw = json!([
            { "title": "React patterns", "author": "Michael Chan", "url": "https://reactpatterns.com/", "likes": 7 },
            { "title": "Type wars", "author": "Robert C. Martin", "likes": 2 }
        ]);

        let blogs = parse_blogs(&raw).unwrap();
        assert_eq!(blogs.len(), 2);
        assert_eq!(blogs[0].url.as_deref(), Some("https://reactpatterns.com/"));
        assert_eq!(blogs[1].likes, 2);
        assert!(blogs[1].url.is_none());
    }

    #[test]
    fn test_ignores_database_fields() {
        let raw = json!([{
            "_id": "5a422a851b54a676234d17f7",
            "title": "React patterns",
            "author": "Michael Chan",
            "likes": 7,
            "__v": 0,
            "user": "65a1f0c2b3"
        }]);

        let blogs = parse_blogs(&raw).unwrap();
        assert_eq!(blogs[0], Blog::new("React patterns", "Michael Chan", 7));
    }

    #[test]
    fn test_missing_likes_defaults_to_zero() {
        let raw = json!([{ "title": "No likes yet", "author": "Supertest" }]);
        assert_eq!(parse_blogs(&raw).unwrap()[0].likes, 0);

        let raw = json!([{ "title": "Null likes", "author": "Supertest", "likes": null }]);
        assert_eq!(parse_blogs(&raw).unwrap()[0].likes, 0);
    }

    #[test]
    fn test_string_likes() {
        let raw = json!([{ "author": "Supertest", "likes": " 12 " }]);
        assert_eq!(parse_blogs(&raw).unwrap()[0].likes, 12);
    }

    #[test]
    fn test_wrapped_array() {
        let raw = json!({ "blogs": [{ "author": "Edsger W. Dijkstra", "likes": 5 }] });
        assert_eq!(parse_blogs(&raw).unwrap().len(), 1);

        let raw = json!({ "data": [] });
        assert!(parse_blogs(&raw).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_wrapper_rejected() {
        let raw = json!({ "posts": [] });
        assert!(matches!(parse_blogs(&raw), Err(ParseError::InvalidFormat(_))));

        assert!(matches!(
            parse_blogs(&json!("blogs")),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_author_reports_index() {
        let raw = json!([
            { "author": "Michael Chan", "likes": 7 },
            { "title": "Orphan post", "likes": 3 }
        ]);

        match parse_blogs(&raw) {
            Err(ParseError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("author"));
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_author_rejected() {
        let raw = json!([{ "author": "   ", "likes": 1 }]);
        assert!(matches!(
            parse_blogs(&raw),
            Err(ParseError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_negative_likes_rejected() {
        let raw = json!([{ "author": "Michael Chan", "likes": -1 }]);
        assert!(parse_blogs(&raw).is_err());

        let raw = json!([{ "author": "Michael Chan", "likes": "lots" }]);
        assert!(parse_blogs(&raw).is_err());

        let raw = json!([{ "author": "Michael Chan", "likes": 1.5 }]);
        assert!(parse_blogs(&raw).is_err());
    }

    #[test]
    fn test_parse_blogs_str_invalid_json() {
        assert!(matches!(
            parse_blogs_str("[{"),
            Err(ParseError::JsonError(_))
        ));
    }

    #[test]
    fn test_parse_likes() {
        assert_eq!(parse_likes("0").unwrap(), 0);
        assert_eq!(parse_likes("42").unwrap(), 42);
        assert!(parse_likes("-3").is_err());
        assert!(parse_likes("").is_err());
    }
}
