//! Core types for the JSON Patch module.

use serde_json::Value;
use thiserror::Error;

pub use json_delta_pointer::{Path, PointerSyntaxError};

// ── Error ─────────────────────────────────────────────────────────────────

/// Failure taxonomy shared by patch application and diff generation.
///
/// Every failure aborts the current call immediately; there is no internal
/// retry and no rollback of operations already applied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// A pointer string failed strict RFC 6901 parsing.
    #[error(transparent)]
    Pointer(#[from] PointerSyntaxError),
    /// Malformed operation: bad index form, missing member, root removal,
    /// move prefix conflict, out-of-range insert, unknown op name.
    #[error("INVALID_OPERATION: {0}")]
    InvalidOperation(String),
    /// Resolution hit an absent key or a required-existing index.
    #[error("PATH_NOT_FOUND")]
    PathNotFound,
    /// A container was expected where a scalar was found.
    #[error("TYPE_MISMATCH")]
    TypeMismatch,
    /// A `test` operation's deep-equality check failed.
    #[error("TEST_FAILED")]
    TestFailed,
    /// Diff recursion exceeded the depth bound.
    #[error("DEPTH_EXCEEDED")]
    DepthExceeded,
}

impl PatchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation. Exactly the six RFC 6902 kinds; there is no
/// extension point.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Move { path: Path, from: Path },
    Copy { path: Path, from: Path },
    Test { path: Path, value: Value },
}

impl Op {
    /// The operation name as it appears in the wire format.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Move { .. } => "move",
            Op::Copy { .. } => "copy",
            Op::Test { .. } => "test",
        }
    }

    /// The target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Move { path, .. }
            | Op::Copy { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// The source path, for `move` and `copy`.
    pub fn from(&self) -> Option<&Path> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    /// The value displaced by the operation, if any (the removed element,
    /// the overwritten map value, the replaced document).
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchResult {
    /// The document after all operations.
    pub doc: Value,
    /// Per-operation results, in application order.
    pub res: Vec<OpResult>,
}

/// Options for [`apply_patch`](crate::apply_patch).
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// If true, skip collecting per-operation results.
    pub mutate: bool,
}
