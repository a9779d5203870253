//! Diff generation: compute an operation list transforming one document
//! into another.
//!
//! Objects are diffed key-wise, removals first. Lists are diffed by one of
//! two strategies: identity-keyed with move detection (when the list's
//! pointer is mapped in [`DiffOptions`] and both sides qualify), or LCS.
//! When the identity diff abstains and LCS is disabled, the whole list is
//! replaced.

use serde_json::Value;

use json_delta_pointer::{format_json_pointer, Path};

use crate::deep_equal::deep_equal;
use crate::patch::types::{Op, PatchError};

mod identity;
mod lcs;
pub mod options;

pub use options::DiffOptions;

/// Diff recursion bound. Tracked by an explicit counter so the threshold is
/// identical across platforms rather than tied to native stack limits.
pub const MAX_DIFF_DEPTH: usize = 512;

/// Generate a patch that transforms `src` into `dst`.
///
/// Applying the returned operations to `src` yields a document deep-equal
/// to `dst`.
pub fn diff(src: &Value, dst: &Value, options: &DiffOptions) -> Result<Vec<Op>, PatchError> {
    let mut ops = Vec::new();
    diff_at(&mut ops, &[], src, dst, options, 0)?;
    Ok(ops)
}

pub(crate) fn child_path(path: &[String], step: impl ToString) -> Path {
    let mut p = path.to_vec();
    p.push(step.to_string());
    p
}

// ── Core recursive differ ─────────────────────────────────────────────────

pub(crate) fn diff_at(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &Value,
    dst: &Value,
    options: &DiffOptions,
    depth: usize,
) -> Result<(), PatchError> {
    if deep_equal(src, dst) {
        return Ok(());
    }
    if depth >= MAX_DIFF_DEPTH {
        return Err(PatchError::DepthExceeded);
    }
    match (src, dst) {
        (Value::Object(s), Value::Object(d)) => diff_obj(ops, path, s, d, options, depth),
        (Value::Array(s), Value::Array(d)) => diff_arr(ops, path, s, d, options, depth),
        _ => {
            ops.push(Op::Replace {
                path: path.to_vec(),
                value: dst.clone(),
            });
            Ok(())
        }
    }
}

fn diff_obj(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &serde_json::Map<String, Value>,
    dst: &serde_json::Map<String, Value>,
    options: &DiffOptions,
    depth: usize,
) -> Result<(), PatchError> {
    // Removals always come first, in src key order. Consumers depend on
    // this ordering; it is a compatibility contract.
    for key in src.keys() {
        if !dst.contains_key(key) {
            ops.push(Op::Remove {
                path: child_path(path, key),
            });
        }
    }
    for (key, dst_val) in dst {
        match src.get(key) {
            None => ops.push(Op::Add {
                path: child_path(path, key),
                value: dst_val.clone(),
            }),
            Some(src_val) => {
                diff_at(ops, &child_path(path, key), src_val, dst_val, options, depth + 1)?;
            }
        }
    }
    Ok(())
}

fn diff_arr(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &[Value],
    dst: &[Value],
    options: &DiffOptions,
    depth: usize,
) -> Result<(), PatchError> {
    if let Some(id_key) = options.identity_key_for(&format_json_pointer(path)) {
        if identity::diff_identity(ops, path, src, dst, id_key, options, depth)? {
            return Ok(());
        }
    }
    if options.use_lcs {
        lcs::diff_lcs(ops, path, src, dst);
        return Ok(());
    }
    ops.push(Op::Replace {
        path: path.to_vec(),
        value: Value::Array(dst.to_vec()),
    });
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
