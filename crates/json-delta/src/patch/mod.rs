//! JSON Patch (RFC 6902): operation types, apply engine, structural
//! validation, and the JSON codec for operations.

pub mod apply;
pub mod codec;
pub mod types;
pub mod validate;

pub use apply::{apply_op, apply_ops, apply_patch, get, test};
pub use codec::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyOptions, Op, OpResult, PatchError, PatchResult};
pub use validate::validate_patch;
