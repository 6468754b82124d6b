//! Structural diff engine
//!
//! Compares two snapshots of the same record shape and yields field-level
//! change descriptors. A pure function over its inputs: no I/O, no state.
//!
//! Snapshots are introspected through their serialized field maps, so the
//! engine works for any `Serialize` type without compile-time knowledge of
//! its shape. serde_json's `preserve_order` feature keeps the map in field
//! declaration order, which makes the output deterministic.

use serde::Serialize;
use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};

/// One field's before/after values when they differ between two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Name of the field that changed
    pub field: String,
    /// Rendered value before the change
    pub old_value: String,
    /// Rendered value after the change
    pub new_value: String,
}

/// Compare two same-shaped records field by field
///
/// Emits one descriptor per field whose values are present on both sides
/// and unequal, in field declaration order. A field that is null/absent on
/// either side is skipped entirely; null means "nothing to report", not a
/// value to diff. Nested values are compared as a whole, never recursed
/// into.
///
/// # Errors
///
/// `InvalidArgument` when a snapshot does not serialize to a field map.
pub fn diff_records<T: Serialize>(original: &T, updated: &T) -> LedgerResult<Vec<FieldChange>> {
    let original = snapshot(original)?;
    let updated = snapshot(updated)?;

    let mut changes = Vec::new();

    for (field, original_value) in &original {
        let updated_value = match updated.get(field) {
            Some(value) => value,
            None => continue,
        };

        if original_value.is_null() || updated_value.is_null() {
            continue;
        }

        if original_value != updated_value {
            changes.push(FieldChange {
                field: field.clone(),
                old_value: render_value(original_value),
                new_value: render_value(updated_value),
            });
        }
    }

    Ok(changes)
}

/// Render a descriptor sequence as multi-line audit text
///
/// One line per descriptor, each newline-terminated. An empty sequence
/// renders the empty string.
pub fn render_details(changes: &[FieldChange]) -> String {
    let mut details = String::new();
    for change in changes {
        details.push_str(&format!(
            "Field {} changed from {} to {}\n",
            change.field, change.old_value, change.new_value
        ));
    }
    details
}

/// Serialize a record to its field map
fn snapshot<T: Serialize>(record: &T) -> LedgerResult<serde_json::Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(LedgerError::InvalidArgument(format!(
            "snapshot must serialize to a field map, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(LedgerError::InvalidArgument(format!(
            "snapshot failed to serialize: {}",
            e
        ))),
    }
}

/// Render a field value with its default textual representation
///
/// Strings render bare (no quotes) to match how the values read in audit
/// text; everything else uses its JSON text.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
