//! Field-level patch operations in the style of RFC 6902 (JSON Patch).
//!
//! A patch is an ordered list of [`PatchOperation`]s applied one after the
//! other to a JSON copy of a record. Application is stateful: a `move` takes
//! the value away from its source, so applying the same `move` again fails
//! with [`PatchError::PathNotFound`].
//!
//! Paths are JSON pointers to top-level fields only (`/name`), with the
//! usual `~1` / `~0` escapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::snack::Snack;

/// A single patch instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add {
        path: String,
        value: Value,
    },
    Remove {
        path: String,
    },
    Replace {
        path: String,
        value: Value,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
    },
    Test {
        path: String,
        value: Value,
    },
}

impl PatchOperation {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        PatchOperation::Add {
            path: path.into(),
            value,
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        PatchOperation::Remove { path: path.into() }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        PatchOperation::Replace {
            path: path.into(),
            value,
        }
    }

    pub fn move_value(from: impl Into<String>, path: impl Into<String>) -> Self {
        PatchOperation::Move {
            from: from.into(),
            path: path.into(),
        }
    }

    /// The operation name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            PatchOperation::Add { .. } => "add",
            PatchOperation::Remove { .. } => "remove",
            PatchOperation::Replace { .. } => "replace",
            PatchOperation::Move { .. } => "move",
            PatchOperation::Copy { .. } => "copy",
            PatchOperation::Test { .. } => "test",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// Path is not a pointer to a single top-level field.
    InvalidPath(String),
    /// Nothing exists at the path (or `from`) of the operation.
    PathNotFound(String),
    /// The path targets a field that may not change.
    ImmutableField(String),
    /// A `test` operation found a different value.
    TestFailed(String),
    /// The patched document no longer describes a valid record.
    InvalidRecord(String),
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::InvalidPath(path) => write!(f, "invalid patch path '{}'", path),
            PatchError::PathNotFound(path) => {
                write!(f, "the target location '{}' was not found", path)
            }
            PatchError::ImmutableField(path) => {
                write!(f, "the field at '{}' cannot be patched", path)
            }
            PatchError::TestFailed(path) => {
                write!(f, "the current value at '{}' does not match the test value", path)
            }
            PatchError::InvalidRecord(msg) => write!(f, "patched record is invalid: {}", msg),
        }
    }
}

impl std::error::Error for PatchError {}

/// Fields of [`Snack`] that a patch may not touch.
const IMMUTABLE_FIELDS: &[&str] = &["id"];

/// Fields of [`Snack`] a patched document may end up with.
const SNACK_FIELDS: &[&str] = &["id", "name", "calories"];

/// Apply `operations` in order to `document`.
///
/// Stops at the first failing operation; earlier operations stay applied
/// to `document`, so callers wanting all-or-nothing work on a copy.
pub fn apply(
    document: &mut Map<String, Value>,
    operations: &[PatchOperation],
) -> Result<(), PatchError> {
    for operation in operations {
        apply_one(document, operation)?;
    }
    Ok(())
}

fn apply_one(
    document: &mut Map<String, Value>,
    operation: &PatchOperation,
) -> Result<(), PatchError> {
    match operation {
        PatchOperation::Add { path, value } => {
            let key = field(path)?;
            document.insert(key, value.clone());
        }
        PatchOperation::Remove { path } => {
            let key = field(path)?;
            document
                .remove(&key)
                .ok_or_else(|| PatchError::PathNotFound(path.clone()))?;
        }
        PatchOperation::Replace { path, value } => {
            let key = field(path)?;
            let slot = document
                .get_mut(&key)
                .ok_or_else(|| PatchError::PathNotFound(path.clone()))?;
            *slot = value.clone();
        }
        PatchOperation::Move { from, path } => {
            let source = field(from)?;
            let target = field(path)?;
            let value = document
                .remove(&source)
                .ok_or_else(|| PatchError::PathNotFound(from.clone()))?;
            document.insert(target, value);
        }
        PatchOperation::Copy { from, path } => {
            let source = field(from)?;
            let target = field(path)?;
            let value = document
                .get(&source)
                .cloned()
                .ok_or_else(|| PatchError::PathNotFound(from.clone()))?;
            document.insert(target, value);
        }
        PatchOperation::Test { path, value } => {
            let key = field(path)?;
            let current = document
                .get(&key)
                .ok_or_else(|| PatchError::PathNotFound(path.clone()))?;
            if current != value {
                return Err(PatchError::TestFailed(path.clone()));
            }
        }
    }
    Ok(())
}

/// Decode a single-segment JSON pointer into a field name.
fn field(path: &str) -> Result<String, PatchError> {
    let segment = path
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .ok_or_else(|| PatchError::InvalidPath(path.to_string()))?;
    Ok(segment.replace("~1", "/").replace("~0", "~"))
}

/// Apply `operations` to a copy of `snack` and return the patched record.
///
/// `snack` itself is never modified, so a failing patch leaves no partial
/// changes behind. Operations touching `/id` are rejected, and the final
/// document may only hold snack fields. Removed fields read as defaults.
pub fn apply_to_snack(
    snack: &Snack,
    operations: &[PatchOperation],
) -> Result<Snack, PatchError> {
    for operation in operations {
        for path in touched_paths(operation) {
            let key = field(path)?;
            if IMMUTABLE_FIELDS.contains(&key.as_str()) {
                return Err(PatchError::ImmutableField(path.to_string()));
            }
        }
    }

    let mut document = match serde_json::to_value(snack) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(PatchError::InvalidRecord("record is not an object".into())),
        Err(e) => return Err(PatchError::InvalidRecord(e.to_string())),
    };
    apply(&mut document, operations)?;

    if let Some(unknown) = document.keys().find(|k| !SNACK_FIELDS.contains(&k.as_str())) {
        return Err(PatchError::InvalidRecord(format!("unknown field '{}'", unknown)));
    }

    let mut patched: Snack = serde_json::from_value(Value::Object(document))
        .map_err(|e| PatchError::InvalidRecord(e.to_string()))?;
    patched.id = snack.id;
    Ok(patched)
}

/// Paths that `operation` reads from or writes to, excluding `test`.
fn touched_paths(operation: &PatchOperation) -> Vec<&str> {
    match operation {
        PatchOperation::Add { path, .. }
        | PatchOperation::Remove { path }
        | PatchOperation::Replace { path, .. } => vec![path.as_str()],
        PatchOperation::Move { from, path } => vec![from.as_str(), path.as_str()],
        PatchOperation::Copy { path, .. } => vec![path.as_str()],
        PatchOperation::Test { .. } => Vec::new(),
    }
}
