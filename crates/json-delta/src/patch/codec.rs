//! JSON codec for patch operations.
//!
//! Converts between [`Op`] and the RFC 6902 wire shape
//! `{op, path, value?, from?}`.

use serde_json::{json, Value};

use json_delta_pointer::{format_json_pointer, parse_json_pointer, Path};

use super::types::{Op, PatchError};

fn decode_path(map: &serde_json::Map<String, Value>, member: &str) -> Result<Path, PatchError> {
    let raw = map
        .get(member)
        .ok_or_else(|| PatchError::invalid(format!("missing `{member}` member")))?;
    let s = raw
        .as_str()
        .ok_or_else(|| PatchError::invalid(format!("`{member}` must be a string")))?;
    Ok(parse_json_pointer(s)?)
}

fn decode_value(map: &serde_json::Map<String, Value>, op: &str) -> Result<Value, PatchError> {
    map.get("value")
        .cloned()
        .ok_or_else(|| PatchError::invalid(format!("`{op}` requires a `value` member")))
}

// ── Decoding ──────────────────────────────────────────────────────────────

/// Decode a single operation object.
pub fn from_json(raw: &Value) -> Result<Op, PatchError> {
    let map = raw
        .as_object()
        .ok_or_else(|| PatchError::invalid("operation must be an object"))?;
    let name = map
        .get("op")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PatchError::invalid("missing `op` member"))?;
    let path = decode_path(map, "path")?;
    match name {
        "add" => Ok(Op::Add { path, value: decode_value(map, "add")? }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace { path, value: decode_value(map, "replace")? }),
        "move" => Ok(Op::Move { path, from: decode_path(map, "from")? }),
        "copy" => Ok(Op::Copy { path, from: decode_path(map, "from")? }),
        "test" => Ok(Op::Test { path, value: decode_value(map, "test")? }),
        other => Err(PatchError::invalid(format!("unknown op `{other}`"))),
    }
}

/// Decode a patch: an array of operation objects.
pub fn from_json_patch(raw: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = raw
        .as_array()
        .ok_or_else(|| PatchError::invalid("patch must be an array of operations"))?;
    arr.iter().map(from_json).collect()
}

// ── Encoding ──────────────────────────────────────────────────────────────

/// Encode a single operation to its wire shape.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": format_json_pointer(path),
            "value": value,
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": format_json_pointer(path),
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": format_json_pointer(path),
            "value": value,
        }),
        Op::Move { path, from } => json!({
            "op": "move",
            "path": format_json_pointer(path),
            "from": format_json_pointer(from),
        }),
        Op::Copy { path, from } => json!({
            "op": "copy",
            "path": format_json_pointer(path),
            "from": format_json_pointer(from),
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": format_json_pointer(path),
            "value": value,
        }),
    }
}

/// Encode a list of operations as a patch array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────
