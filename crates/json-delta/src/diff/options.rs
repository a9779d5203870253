//! Per-path diff configuration.

use indexmap::IndexMap;

/// Options steering list-diff strategy selection.
///
/// `identity_keys` maps an exact pointer string (e.g. `"/items"`) to the
/// field name holding each item's stable id; lists at those paths are diffed
/// with move detection. All other lists use LCS while `use_lcs` is set, and
/// whole-list replacement otherwise.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub identity_keys: IndexMap<String, String>,
    pub use_lcs: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            identity_keys: IndexMap::new(),
            use_lcs: true,
        }
    }
}

impl DiffOptions {
    /// Diff the list at `pointer` by the given identity field.
    pub fn with_identity_key(
        mut self,
        pointer: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.identity_keys.insert(pointer.into(), key.into());
        self
    }

    /// Disable the LCS fallback; unmapped lists are replaced wholesale.
    pub fn without_lcs(mut self) -> Self {
        self.use_lcs = false;
        self
    }

    pub(crate) fn identity_key_for(&self, pointer: &str) -> Option<&str> {
        self.identity_keys.get(pointer).map(String::as_str)
    }
}
