//! Two-phase payload verification shared by every entity validator.
//!
//! All entities are constructed from a JSON field mapping. Verification runs
//! in two phases over the declared field set:
//!
//! 1. **Presence** - every required field must be present and non-empty.
//!    Missing keys, `null`, empty strings, and zero numbers all count as
//!    absent. Boolean fields are required-present, but `false` is a valid
//!    value.
//! 2. **Type** - every field's primitive type must match its declaration.
//!
//! Presence is always checked before type, for the whole field set, so a
//! payload that is missing one field and carries a wrong-typed other always
//! reports the missing property first.

use serde_json::Value;

use super::{EntityError, PayloadViolation};

/// Primitive type expected for a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Bool,
}

/// Declared field of an entity payload: name and expected primitive type.
pub type FieldSpec = (&'static str, FieldType);

/// Runs the two-phase presence/type check for `fields` against `payload`.
///
/// # Errors
///
/// - `<namespace>.NOT_CONTAIN_NEEDED_PROPERTY` when any field fails presence
/// - `<namespace>.NOT_MEET_DATA_TYPE_SPECIFICATION` when any field fails type
pub fn verify_payload(
    namespace: &'static str,
    payload: &Value,
    fields: &[FieldSpec],
) -> Result<(), EntityError> {
    for (name, field_type) in fields {
        if is_absent(payload.get(name), *field_type) {
            return Err(EntityError::new(
                namespace,
                PayloadViolation::MissingProperty,
            ));
        }
    }

    for (name, field_type) in fields {
        let matches = match (payload.get(name), field_type) {
            (Some(Value::String(_)), FieldType::String) => true,
            (Some(Value::Bool(_)), FieldType::Bool) => true,
            _ => false,
        };
        if !matches {
            return Err(EntityError::new(
                namespace,
                PayloadViolation::InvalidDataType,
            ));
        }
    }

    Ok(())
}

/// Extracts a string field after `verify_payload` has succeeded.
pub fn string_field(payload: &Value, name: &str) -> String {
    payload
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Extracts a boolean field after `verify_payload` has succeeded.
pub fn bool_field(payload: &Value, name: &str) -> bool {
    payload.get(name).and_then(Value::as_bool).unwrap_or_default()
}

fn is_absent(value: Option<&Value>, field_type: FieldType) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        // `false` only counts as absent when the field is not declared boolean.
        Some(Value::Bool(b)) => !b && field_type != FieldType::Bool,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}
