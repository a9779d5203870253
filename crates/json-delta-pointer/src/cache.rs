//! Bounded FIFO cache for pointer parsing.
//!
//! Repeated pointer strings (hot paths in patch replay) skip re-parsing.
//! Eviction removes the earliest-inserted entry regardless of how recently
//! it was hit; lookups never reorder entries.

use indexmap::IndexMap;

use crate::{parse_json_pointer, Path, PointerSyntaxError};

/// A bounded memo of pointer string → parsed path, with FIFO eviction.
///
/// This is an injectable value, not a process-wide singleton: scope one per
/// caller or per test. It is not internally synchronized; sharing one cache
/// across threads requires an external lock.
#[derive(Debug, Clone)]
pub struct PointerCache {
    entries: IndexMap<String, Path>,
    capacity: usize,
}

impl PointerCache {
    /// Create an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Parse `pointer`, consulting the cache first.
    ///
    /// Failed parses are not cached.
    pub fn parse(&mut self, pointer: &str) -> Result<Path, PointerSyntaxError> {
        if let Some(path) = self.entries.get(pointer) {
            return Ok(path.clone());
        }
        let path = parse_json_pointer(pointer)?;
        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(pointer.to_string(), path.clone());
        Ok(path)
    }

    /// Whether `pointer` currently has a cached parse.
    pub fn contains(&self, pointer: &str) -> bool {
        self.entries.contains_key(pointer)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries. Intended for test isolation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
