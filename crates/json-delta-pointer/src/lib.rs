//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements strict helpers for [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901):
//! parsing pointer strings into raw path segments, formatting them back,
//! escape handling, path predicates, and read-only document resolution.
//!
//! Segments are kept **raw** (unescaped) everywhere inside the pipeline;
//! escaping and unescaping happen only at the text boundary, in
//! [`parse_json_pointer`] and [`format_json_pointer`].
//!
//! # Example
//!
//! ```
//! use json_delta_pointer::{parse_json_pointer, format_json_pointer, get};
//!
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(42)));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod cache;
pub use cache::PointerCache;

/// A step in a JSON Pointer path: a raw (unescaped) object key or array
/// index literal.
pub type PathStep = String;

/// A JSON Pointer path. The empty path denotes the document root.
pub type Path = Vec<PathStep>;

// ── Error ─────────────────────────────────────────────────────────────────

/// Error raised by strict pointer parsing and path decomposition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerSyntaxError {
    /// A non-empty pointer did not start with `/`.
    #[error("POINTER_NO_LEADING_SLASH")]
    NoLeadingSlash,
    /// A segment contained `~` not followed by `0` or `1`, or a trailing `~`.
    #[error("POINTER_INVALID_ESCAPE")]
    InvalidEscape,
    /// The root path has no last segment.
    #[error("POINTER_ROOT_HAS_NO_LAST")]
    RootHasNoLast,
}

// ── Escaping ──────────────────────────────────────────────────────────────

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` decodes to `/` and `~0` decodes to `~`. Any other
/// `~x` sequence, or a trailing `~`, is rejected.
///
/// # Example
///
/// ```
/// use json_delta_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b").unwrap(), "a~b");
/// assert_eq!(unescape_component("c~1d").unwrap(), "c/d");
/// assert_eq!(unescape_component("no-escapes").unwrap(), "no-escapes");
/// assert!(unescape_component("bad~2").is_err());
/// assert!(unescape_component("trailing~").is_err());
/// ```
pub fn unescape_component(component: &str) -> Result<String, PointerSyntaxError> {
    if !component.contains('~') {
        return Ok(component.to_string());
    }
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(PointerSyntaxError::InvalidEscape),
        }
    }
    Ok(out)
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use json_delta_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("no-escapes"), "no-escapes");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

// ── Parsing and formatting ────────────────────────────────────────────────

/// Parse a JSON Pointer string into raw path components.
///
/// - The empty string is the root path (empty vec).
/// - A non-empty pointer must start with `/`.
/// - Each component is strictly unescaped.
///
/// # Example
///
/// ```
/// use json_delta_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/bar").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(parse_json_pointer("foo").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Path, PointerSyntaxError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(PointerSyntaxError::NoLeadingSlash);
    }
    pointer[1..].split('/').map(unescape_component).collect()
}

/// Format raw path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use json_delta_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string()]), "/foo");
/// assert_eq!(format_json_pointer(&["a~b".to_string(), "c/d".to_string()]), "/a~0b/c~1d");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

// ── Path predicates and decomposition ─────────────────────────────────────

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Get the parent path of a given path.
///
/// The root path is its own parent (a fixed point).
pub fn parent(path: &[String]) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path[..path.len() - 1].to_vec()
}

/// Get the last segment of a path.
///
/// # Errors
///
/// Fails on the root path, which has no last segment.
pub fn last(path: &[String]) -> Result<&str, PointerSyntaxError> {
    path.last()
        .map(String::as_str)
        .ok_or(PointerSyntaxError::RootHasNoLast)
}

/// Check if `parent` path is a proper prefix of the `child` path.
///
/// # Example
///
/// ```
/// use json_delta_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    for i in 0..parent.len() {
        if parent[i] != child[i] {
            return false;
        }
    }
    true
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[String], p2: &[String]) -> bool {
    if p1.len() != p2.len() {
        return false;
    }
    for i in 0..p1.len() {
        if p1[i] != p2[i] {
            return false;
        }
    }
    true
}

/// Check if a string is a valid array index literal: ASCII digits only,
/// with no leading zero unless it is the single digit `0`.
///
/// # Example
///
/// ```
/// use json_delta_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("42"));
/// assert!(!is_valid_index("007"));
/// assert!(!is_valid_index("-"));
/// assert!(!is_valid_index(""));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

// ── Resolution ────────────────────────────────────────────────────────────

/// Get a value from a JSON document by path.
///
/// Object steps are key lookups; array steps must be valid in-range index
/// literals. `-` never resolves in read mode.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Array(arr) => {
                if !is_valid_index(step) {
                    return None;
                }
                let idx: usize = step.parse().ok()?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => {
                if !is_valid_index(step) {
                    return None;
                }
                let idx: usize = step.parse().ok()?;
                arr.get_mut(idx)?
            }
            Value::Object(map) => map.get_mut(step)?,
            _ => return None,
        };
    }
    Some(current)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_rejects_missing_leading_slash() {
        assert_eq!(
            parse_json_pointer("foo/bar"),
            Err(PointerSyntaxError::NoLeadingSlash)
        );
    }

    #[test]
    fn parse_rejects_bad_escapes() {
        assert_eq!(
            parse_json_pointer("/a~2b"),
            Err(PointerSyntaxError::InvalidEscape)
        );
        assert_eq!(
            parse_json_pointer("/a~"),
            Err(PointerSyntaxError::InvalidEscape)
        );
    }

    #[test]
    fn root_parent_is_fixed_point() {
        assert_eq!(parent(&[]), Vec::<String>::new());
        assert_eq!(parent(&["a".to_string()]), Vec::<String>::new());
        assert_eq!(
            parent(&["a".to_string(), "b".to_string()]),
            vec!["a".to_string()]
        );
    }

    #[test]
    fn last_fails_on_root() {
        assert_eq!(last(&[]), Err(PointerSyntaxError::RootHasNoLast));
        assert_eq!(last(&["a".to_string(), "b".to_string()]), Ok("b"));
    }

    #[test]
    fn get_rejects_loose_index_forms() {
        let doc = json!([10, 20, 30]);
        assert_eq!(get(&doc, &["1".to_string()]), Some(&json!(20)));
        assert_eq!(get(&doc, &["01".to_string()]), None);
        assert_eq!(get(&doc, &["-".to_string()]), None);
        assert_eq!(get(&doc, &["3".to_string()]), None);
    }

    #[test]
    fn get_mut_resolves_nested() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        let v = get_mut(
            &mut doc,
            &["a".to_string(), "b".to_string(), "1".to_string()],
        )
        .unwrap();
        *v = json!(99);
        assert_eq!(doc, json!({"a": {"b": [1, 99]}}));
    }
}
