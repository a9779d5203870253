//! LCS list diff.
//!
//! Standard dynamic-programming longest-common-subsequence over two lists,
//! with structural deep equality as the element predicate. The edit script
//! is emitted as all removes (by decreasing source index, so earlier
//! removals never shift later ones) followed by all adds (by increasing
//! target index). Downstream consumers rely on exactly this ordering.

use serde_json::Value;

use super::child_path;
use crate::deep_equal::deep_equal;
use crate::patch::types::Op;

pub(crate) fn diff_lcs(ops: &mut Vec<Op>, path: &[String], src: &[Value], dst: &[Value]) {
    let m = src.len();
    let n = dst.len();

    // (m+1) x (n+1) length table, row/column 0 zeroed.
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if deep_equal(&src[i - 1], &dst[j - 1]) {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    // Backtrack from (m, n). Indices land in each vec in decreasing order.
    let mut removes: Vec<usize> = Vec::new();
    let mut adds: Vec<usize> = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && deep_equal(&src[i - 1], &dst[j - 1]) {
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            adds.push(j - 1);
            j -= 1;
        } else {
            removes.push(i - 1);
            i -= 1;
        }
    }

    for idx in &removes {
        ops.push(Op::Remove {
            path: child_path(path, idx),
        });
    }
    for idx in adds.iter().rev() {
        ops.push(Op::Add {
            path: child_path(path, idx),
            value: dst[*idx].clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::apply::apply_op;
    use serde_json::json;

    fn run(src: &Value, dst: &Value) -> Vec<Op> {
        let mut ops = Vec::new();
        diff_lcs(
            &mut ops,
            &[],
            src.as_array().unwrap(),
            dst.as_array().unwrap(),
        );
        ops
    }

    fn apply_all(mut doc: Value, ops: &[Op]) -> Value {
        for op in ops {
            apply_op(&mut doc, op).expect("apply failed");
        }
        doc
    }

    #[test]
    fn single_deletion() {
        let ops = run(&json!(["a", "b", "c"]), &json!(["a", "c"]));
        assert_eq!(ops, vec![Op::Remove { path: vec!["1".to_string()] }]);
    }

    #[test]
    fn single_position_change_is_remove_plus_add() {
        let ops = run(&json!([1, 2, 3]), &json!([1, 9, 3]));
        let names: Vec<&str> = ops.iter().map(Op::op_name).collect();
        assert_eq!(names, ["remove", "add"]);
        assert_eq!(apply_all(json!([1, 2, 3]), &ops), json!([1, 9, 3]));
    }

    #[test]
    fn removes_precede_adds_and_are_descending() {
        let ops = run(&json!([1, 2, 3, 4, 5]), &json!([9, 2, 4, 8]));
        let mut seen_add = false;
        let mut last_remove: Option<usize> = None;
        for op in &ops {
            match op {
                Op::Remove { path } => {
                    assert!(!seen_add, "remove after add");
                    let idx: usize = path[0].parse().unwrap();
                    if let Some(prev) = last_remove {
                        assert!(idx < prev, "removes not descending");
                    }
                    last_remove = Some(idx);
                }
                Op::Add { .. } => seen_add = true,
                other => panic!("unexpected op {other:?}"),
            }
        }
        assert_eq!(apply_all(json!([1, 2, 3, 4, 5]), &ops), json!([9, 2, 4, 8]));
    }

    #[test]
    fn empty_to_full_and_back() {
        let ops = run(&json!([]), &json!([1, 2]));
        assert_eq!(apply_all(json!([]), &ops), json!([1, 2]));

        let ops = run(&json!([1, 2]), &json!([]));
        assert_eq!(apply_all(json!([1, 2]), &ops), json!([]));
    }

    #[test]
    fn equality_predicate_is_structural() {
        // 1 and 1.0 must not match in the table.
        let ops = run(&json!([1]), &json!([1.0]));
        let names: Vec<&str> = ops.iter().map(Op::op_name).collect();
        assert_eq!(names, ["remove", "add"]);
    }

    #[test]
    fn roundtrip_matrix() {
        let cases = [
            (json!([1, 2, 3]), json!([3, 2, 1])),
            (json!(["a"]), json!(["b", "a", "c"])),
            (json!([{"x": 1}, {"x": 2}]), json!([{"x": 2}, {"x": 3}])),
            (json!([null, null]), json!([null])),
            (json!([1, 1, 2, 2]), json!([2, 2, 1, 1])),
        ];
        for (src, dst) in cases {
            let ops = run(&src, &dst);
            assert_eq!(apply_all(src.clone(), &ops), dst, "src={src} dst={dst}");
        }
    }
}
