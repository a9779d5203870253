//! Identity-keyed list diff with move detection.
//!
//! Items are matched by a stable per-item id field instead of position,
//! so reordering becomes `move` operations rather than delete/insert
//! churn. A list qualifies only when every item on both sides is an object
//! carrying the configured key with a unique string-or-integer value;
//! otherwise this differ abstains and the caller falls back.

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use super::{child_path, diff_at, DiffOptions};
use crate::patch::types::{Op, PatchError};

/// An item id, normalized so integer ids compare by numeric value
/// regardless of how serde_json stored them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ItemId {
    Str(String),
    Int(String),
}

fn item_id(item: &Value, key: &str) -> Option<ItemId> {
    let map = item.as_object()?;
    match map.get(key)? {
        Value::String(s) => Some(ItemId::Str(s.clone())),
        Value::Number(n) if !n.is_f64() => Some(ItemId::Int(n.to_string())),
        _ => None,
    }
}

/// Collect ids for every item, or `None` if any item disqualifies the list
/// (non-object item, missing/ill-typed id, duplicate id).
fn qualify(items: &[Value], key: &str) -> Option<Vec<ItemId>> {
    let mut ids = Vec::with_capacity(items.len());
    let mut seen: IndexSet<ItemId> = IndexSet::with_capacity(items.len());
    for item in items {
        let id = item_id(item, key)?;
        if !seen.insert(id.clone()) {
            return None;
        }
        ids.push(id);
    }
    Some(ids)
}

fn position_index(ids: &[ItemId]) -> IndexMap<ItemId, usize> {
    ids.iter()
        .enumerate()
        .map(|(pos, id)| (id.clone(), pos))
        .collect()
}

/// Diff two identity-keyed lists. Returns `Ok(false)` without emitting
/// anything when either list fails to qualify.
pub(crate) fn diff_identity(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &[Value],
    dst: &[Value],
    id_key: &str,
    options: &DiffOptions,
    depth: usize,
) -> Result<bool, PatchError> {
    let Some(src_ids) = qualify(src, id_key) else {
        return Ok(false);
    };
    let Some(dst_ids) = qualify(dst, id_key) else {
        return Ok(false);
    };
    let dst_id_set: IndexSet<&ItemId> = dst_ids.iter().collect();

    let mut working: Vec<Value> = src.to_vec();
    let mut working_ids: Vec<ItemId> = src_ids;

    // Phase 1: drop items whose id vanished, back to front so earlier
    // removals never shift the indices of later ones.
    for i in (0..working.len()).rev() {
        if !dst_id_set.contains(&working_ids[i]) {
            ops.push(Op::Remove {
                path: child_path(path, i),
            });
            working.remove(i);
            working_ids.remove(i);
        }
    }

    // Phase 2: walk the target front to back, fixing one position at a
    // time. The id→position index is rebuilt whenever positions shift.
    let mut index = position_index(&working_ids);
    for (i, dst_item) in dst.iter().enumerate() {
        let id = &dst_ids[i];

        if i < working.len() && working_ids[i] == *id {
            // Same id in place: only structural field changes remain.
            diff_at(ops, &child_path(path, i), &working[i], dst_item, options, depth + 1)?;
            working[i] = dst_item.clone();
            continue;
        }

        if let Some(&j) = index.get(id) {
            // The id lives elsewhere: relocate it, then diff the pair.
            ops.push(Op::Move {
                path: child_path(path, i),
                from: child_path(path, j),
            });
            let item = working.remove(j);
            let moved_id = working_ids.remove(j);
            working.insert(i, item);
            working_ids.insert(i, moved_id);
            index = position_index(&working_ids);
            diff_at(ops, &child_path(path, i), &working[i], dst_item, options, depth + 1)?;
            working[i] = dst_item.clone();
        } else if i >= working.len() {
            ops.push(Op::Add {
                path: child_path(path, "-"),
                value: dst_item.clone(),
            });
            working.push(dst_item.clone());
            working_ids.push(id.clone());
            index = position_index(&working_ids);
        } else {
            ops.push(Op::Add {
                path: child_path(path, i),
                value: dst_item.clone(),
            });
            working.insert(i, dst_item.clone());
            working_ids.insert(i, id.clone());
            index = position_index(&working_ids);
        }
    }

    Ok(true)
}
