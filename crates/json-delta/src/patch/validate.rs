//! Structural patch validation.
//!
//! Pure syntax checks over raw operation objects, before decoding: callers
//! can vet untrusted input without touching a live document. Returns plain
//! error strings so the result can go straight into an API response.

use serde_json::Value;

use json_delta_pointer::parse_json_pointer;

/// Validate a raw patch value structurally.
///
/// Checks that the patch is an array, that each element is an object with a
/// known `op`, syntactically valid `path` (and `from` where required), and a
/// `value` member where required. An empty vec means the patch is valid.
pub fn validate_patch(patch: &Value) -> Vec<String> {
    let Some(arr) = patch.as_array() else {
        return vec!["patch must be an array of operations".to_string()];
    };
    let mut errors = Vec::new();
    for (i, raw) in arr.iter().enumerate() {
        if let Err(msg) = validate_operation(raw) {
            errors.push(format!("error in operation [index = {i}]: {msg}"));
        }
    }
    errors
}

fn validate_pointer_member(
    map: &serde_json::Map<String, Value>,
    op: &str,
    member: &str,
) -> Result<(), String> {
    let raw = map
        .get(member)
        .ok_or_else(|| format!("`{op}` requires a `{member}` member"))?;
    let s = raw
        .as_str()
        .ok_or_else(|| format!("`{member}` must be a string"))?;
    parse_json_pointer(s).map_err(|_| format!("`{member}` is not a valid JSON Pointer: `{s}`"))?;
    Ok(())
}

fn validate_operation(raw: &Value) -> Result<(), String> {
    let map = raw
        .as_object()
        .ok_or_else(|| "operation must be an object".to_string())?;
    let op = map
        .get("op")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing `op` member".to_string())?;
    validate_pointer_member(map, op, "path")?;
    match op {
        "add" | "replace" | "test" => {
            if !map.contains_key("value") {
                return Err(format!("`{op}` requires a `value` member"));
            }
        }
        "move" | "copy" => validate_pointer_member(map, op, "from")?,
        "remove" => {}
        other => return Err(format!("unknown op `{other}`")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_patch_yields_no_errors() {
        let patch = json!([
            {"op": "add", "path": "/a", "value": 1},
            {"op": "remove", "path": "/b"},
            {"op": "move", "path": "/c", "from": "/d"},
            {"op": "test", "path": "", "value": null},
        ]);
        assert!(validate_patch(&patch).is_empty());
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(validate_patch(&json!([])).is_empty());
    }

    #[test]
    fn non_array_patch_is_one_error() {
        let errors = validate_patch(&json!({"op": "add"}));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn errors_carry_the_op_index() {
        let patch = json!([
            {"op": "remove", "path": "/ok"},
            {"op": "add", "path": "/a"},
            {"op": "teleport", "path": "/b"},
            {"op": "copy", "path": "/c", "from": "bad"},
            "not-an-object",
        ]);
        let errors = validate_patch(&patch);
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("[index = 1]"));
        assert!(errors[0].contains("value"));
        assert!(errors[1].contains("[index = 2]"));
        assert!(errors[1].contains("unknown op"));
        assert!(errors[2].contains("[index = 3]"));
        assert!(errors[3].contains("[index = 4]"));
    }

    #[test]
    fn path_must_be_well_formed() {
        let errors = validate_patch(&json!([{"op": "remove", "path": "/a~3"}]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("JSON Pointer"));
    }

    #[test]
    fn validation_never_needs_a_document() {
        // A structurally valid op can still fail at apply time; that is out
        // of scope here.
        let patch = json!([{"op": "remove", "path": "/definitely/not/there"}]);
        assert!(validate_patch(&patch).is_empty());
    }
}
