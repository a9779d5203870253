//! JSON Patch (RFC 6902) engine: apply, validate, and diff.
//!
//! Documents are `serde_json::Value` trees (with `preserve_order`, so object
//! keys keep insertion order). Paths are raw-segment vectors from
//! [`json_delta_pointer`]; escaping exists only at the text boundary.
//!
//! # Operations
//!
//! Exactly the six RFC 6902 operations:
//! `add`, `remove`, `replace`, `move`, `copy`, `test`.
//!
//! # Diff
//!
//! [`diff`] produces an operation list transforming one document into
//! another. Objects are diffed key-wise (removals first). Lists are diffed
//! either by identity key (move detection, configured per pointer in
//! [`DiffOptions`]) or by LCS, falling back to whole-list replacement when
//! LCS is disabled.
//!
//! ```
//! use json_delta::{apply_ops, diff, DiffOptions};
//! use serde_json::json;
//!
//! let src = json!({"name": "Alice", "tags": ["a", "b", "c"]});
//! let dst = json!({"name": "Alice", "tags": ["a", "c"]});
//! let ops = diff(&src, &dst, &DiffOptions::default()).unwrap();
//! let result = apply_ops(src, &ops).unwrap();
//! assert_eq!(result.doc, dst);
//! ```

pub mod deep_equal;
pub mod diff;
pub mod patch;

pub use deep_equal::deep_equal;
pub use diff::{diff, DiffOptions};
pub use patch::apply::{apply_op, apply_ops, apply_patch, get, test};
pub use patch::codec::{from_json, from_json_patch, to_json, to_json_patch};
pub use patch::types::{ApplyOptions, Op, OpResult, PatchError, PatchResult};
pub use patch::validate::validate_patch;
