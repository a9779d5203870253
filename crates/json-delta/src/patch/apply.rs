//! JSON Patch apply logic.
//!
//! Operations fold left to right over the document: operation *k*'s result
//! is operation *k+1*'s input. A failing operation aborts immediately; ops
//! already applied are not rolled back. Callers holding the document via
//! `&mut` keep the intermediate state, the owned entry points discard it.

use serde_json::Value;

use json_delta_pointer::{is_child, is_path_equal, is_valid_index};

use super::types::{ApplyOptions, Op, OpResult, PatchError, PatchResult};
use crate::deep_equal::deep_equal;

// ── Array index rule ──────────────────────────────────────────────────────

/// Whether an array segment addresses an existing element or an insertion
/// slot. `-` and index `len` are valid only when inserting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexMode {
    Insert,
    Exists,
}

/// Parse an array index segment under the shared rule: `-` appends (insert
/// mode only); otherwise digits only, no leading zero except the literal
/// `0`, bounded by `[0, len]` for inserts and `[0, len-1]` for existing
/// elements.
pub(crate) fn parse_array_index(
    seg: &str,
    len: usize,
    mode: IndexMode,
) -> Result<usize, PatchError> {
    if seg == "-" {
        return match mode {
            IndexMode::Insert => Ok(len),
            IndexMode::Exists => Err(PatchError::invalid(
                "`-` only addresses the append position",
            )),
        };
    }
    if !is_valid_index(seg) {
        return Err(PatchError::invalid(format!("invalid array index `{seg}`")));
    }
    let idx: usize = seg
        .parse()
        .map_err(|_| PatchError::invalid(format!("array index `{seg}` out of range")))?;
    match mode {
        IndexMode::Insert if idx > len => Err(PatchError::invalid(format!(
            "array index {idx} out of insert range 0..={len}"
        ))),
        IndexMode::Exists if idx >= len => Err(PatchError::PathNotFound),
        _ => Ok(idx),
    }
}

// ── Path resolution ───────────────────────────────────────────────────────

/// Resolve `path` to the value it addresses.
///
/// Absent keys and out-of-range indices are `PathNotFound`; a scalar in the
/// middle of the path is `TypeMismatch`; malformed index literals are
/// `InvalidOperation`.
fn resolve<'a>(doc: &'a Value, path: &[String]) -> Result<&'a Value, PatchError> {
    let mut current = doc;
    for step in path {
        current = match current {
            Value::Object(map) => map.get(step).ok_or(PatchError::PathNotFound)?,
            Value::Array(arr) => {
                let idx = parse_array_index(step, arr.len(), IndexMode::Exists)?;
                &arr[idx]
            }
            _ => return Err(PatchError::TypeMismatch),
        };
    }
    Ok(current)
}

/// Mutable counterpart of [`resolve`].
fn resolve_mut<'a>(doc: &'a mut Value, path: &[String]) -> Result<&'a mut Value, PatchError> {
    let mut current = doc;
    for step in path {
        current = match current {
            Value::Object(map) => map.get_mut(step).ok_or(PatchError::PathNotFound)?,
            Value::Array(arr) => {
                let idx = parse_array_index(step, arr.len(), IndexMode::Exists)?;
                &mut arr[idx]
            }
            _ => return Err(PatchError::TypeMismatch),
        };
    }
    Ok(current)
}

// ── Read-only conveniences ────────────────────────────────────────────────

/// Read the value at `path`.
pub fn get<'a>(doc: &'a Value, path: &[String]) -> Result<&'a Value, PatchError> {
    resolve(doc, path)
}

/// Deep-equality check of the value at `path` against `expected`.
pub fn test(doc: &Value, path: &[String], expected: &Value) -> Result<(), PatchError> {
    let actual = resolve(doc, path)?;
    if deep_equal(actual, expected) {
        Ok(())
    } else {
        Err(PatchError::TestFailed)
    }
}

// ── Individual operation applicators ──────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = resolve_mut(doc, parent_path)?;
    match parent {
        Value::Object(map) => Ok(map.insert(key.clone(), value)),
        Value::Array(arr) => {
            let idx = parse_array_index(key, arr.len(), IndexMode::Insert)?;
            arr.insert(idx, value);
            Ok(None)
        }
        _ => Err(PatchError::TypeMismatch),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Err(PatchError::invalid("cannot remove the document root"));
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = resolve_mut(doc, parent_path)?;
    match parent {
        // shift_remove keeps the insertion order of the remaining keys.
        Value::Object(map) => map.shift_remove(key).ok_or(PatchError::PathNotFound).map(Some),
        Value::Array(arr) => {
            let idx = parse_array_index(key, arr.len(), IndexMode::Exists)?;
            Ok(Some(arr.remove(idx)))
        }
        _ => Err(PatchError::TypeMismatch),
    }
}

fn apply_replace(
    doc: &mut Value,
    path: &[String],
    value: Value,
) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = resolve_mut(doc, parent_path)?;
    match parent {
        Value::Object(map) => {
            let slot = map.get_mut(key).ok_or(PatchError::PathNotFound)?;
            Ok(Some(std::mem::replace(slot, value)))
        }
        Value::Array(arr) => {
            let idx = parse_array_index(key, arr.len(), IndexMode::Exists)?;
            Ok(Some(std::mem::replace(&mut arr[idx], value)))
        }
        _ => Err(PatchError::TypeMismatch),
    }
}

fn apply_move(
    doc: &mut Value,
    path: &[String],
    from: &[String],
) -> Result<Option<Value>, PatchError> {
    if is_path_equal(from, path) {
        return Ok(None);
    }
    // RFC prefix rule: a location cannot be moved into one of its children.
    if is_child(from, path) {
        return Err(PatchError::invalid(
            "`from` must not be a proper prefix of `path`",
        ));
    }
    // Literal remove-then-add: a failing add leaves the remove in place.
    let value = apply_remove(doc, from)?.ok_or(PatchError::PathNotFound)?;
    apply_add(doc, path, value)
}

fn apply_copy(
    doc: &mut Value,
    path: &[String],
    from: &[String],
) -> Result<Option<Value>, PatchError> {
    // The copied value is an independent structural value, never aliased.
    let value = resolve(doc, from)?.clone();
    apply_add(doc, path, value)
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation to the document in place.
///
/// Returns the value displaced by the operation, if any.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Test { path, value } => {
            test(doc, path, value)?;
            Ok(None)
        }
    }
}

/// Apply a sequence of operations, returning the final document and per-op
/// results.
pub fn apply_ops(mut doc: Value, ops: &[Op]) -> Result<PatchResult, PatchError> {
    let mut results = Vec::with_capacity(ops.len());
    for op in ops {
        let old = apply_op(&mut doc, op)?;
        results.push(OpResult { old });
    }
    Ok(PatchResult { doc, res: results })
}

/// Apply a sequence of operations with options.
///
/// With `mutate: true` the per-op result collection is skipped.
pub fn apply_patch(doc: Value, ops: &[Op], options: &ApplyOptions) -> Result<PatchResult, PatchError> {
    if options.mutate {
        let mut working = doc;
        for op in ops {
            apply_op(&mut working, op)?;
        }
        Ok(PatchResult {
            doc: working,
            res: vec![],
        })
    } else {
        apply_ops(doc, ops)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
