//! Structural deep equality over documents.
//!
//! Used by `test`, by change detection in diff, and as the LCS element
//! predicate. Two values are equal only when their *kinds* match exactly:
//! integers and floats are distinct kinds even when numerically equal.

use serde_json::Value;

/// Structural deep equality.
///
/// Lists compare order-sensitively, position by position. Objects compare by
/// key *set* (order-insensitive) with per-key recursion. Scalars compare
/// exactly within their kind.
///
/// ```
/// use json_delta::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// assert!(!deep_equal(&json!(1), &json!(1.0)));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        // serde_json already refuses to equate 1 and 1.0, but the kind check
        // is the contract here, so state it.
        (Value::Number(x), Value::Number(y)) => x.is_f64() == y.is_f64() && x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(v, w)| deep_equal(v, w))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_kinds_are_distinct() {
        assert!(!deep_equal(&json!(1), &json!(1.0)));
        assert!(!deep_equal(&json!(0), &json!(false)));
        assert!(!deep_equal(&json!(null), &json!(0)));
        assert!(!deep_equal(&json!("1"), &json!(1)));
        assert!(deep_equal(&json!(1), &json!(1)));
        assert!(deep_equal(&json!(1.5), &json!(1.5)));
    }

    #[test]
    fn lists_are_order_sensitive() {
        assert!(deep_equal(&json!([1, 2, 3]), &json!([1, 2, 3])));
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([3, 2, 1])));
        assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn objects_are_key_set_based() {
        assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 2})));
    }

    #[test]
    fn containers_never_equal_scalars() {
        assert!(!deep_equal(&json!([]), &json!({})));
        assert!(!deep_equal(&json!([]), &json!(null)));
        assert!(deep_equal(&json!({}), &json!({})));
        assert!(deep_equal(&json!([]), &json!([])));
    }

    #[test]
    fn nested_recursion() {
        let a = json!({"x": [{"y": 1}, {"y": 2}]});
        let b = json!({"x": [{"y": 1}, {"y": 2}]});
        let c = json!({"x": [{"y": 1}, {"y": 2.0}]});
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }
}
