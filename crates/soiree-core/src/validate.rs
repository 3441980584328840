//! Required-field presence validation.
//!
//! The event booking form requires a handful of fields; everything else in
//! the system is schemaless. A field counts as missing when it is absent or
//! holds a falsy value: JSON `null`, an empty string, `false`, or zero.

use crate::{Error, Record, Result};
use serde_json::Value;

/// Collect the required field names that have no usable value.
///
/// Names are returned in the order they appear in `required`, so error
/// messages list them deterministically.
pub fn missing_fields(record: &Record, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| is_falsy(record.get(**name)))
        .map(|name| name.to_string())
        .collect()
}

/// Validate that every required field has a usable value.
///
/// Returns [`Error::Validation`] naming all missing fields, in declaration
/// order, when any are absent.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use soiree_core::validate_required;
///
/// let record = json!({"guests": 5}).as_object().unwrap().clone();
/// let err = validate_required(&record, &["eventPurpose", "guests", "date"]).unwrap_err();
/// assert_eq!(err.to_string(), "Missing required fields: eventPurpose, date");
/// ```
pub fn validate_required(record: &Record, required: &[&str]) -> Result<()> {
    let missing = missing_fields(record, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation { missing })
    }
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !*b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
        Some(_) => false,
    }
}
