//! Exact-match record filtering.
//!
//! Implements the query semantics of the events listing: every non-empty
//! query parameter becomes one criterion, criteria are AND-combined, and a
//! record matches a criterion when its field value, in string form and
//! lower-cased, equals the criterion value lower-cased.
//!
//! # Usage
//!
//! ```
//! use serde_json::json;
//! use soiree_core::{Record, filter_exact};
//!
//! let records: Vec<Record> = vec![
//!     json!({"type": "A"}).as_object().unwrap().clone(),
//!     json!({"type": "B"}).as_object().unwrap().clone(),
//!     json!({"type": "a"}).as_object().unwrap().clone(),
//! ];
//! let criteria = vec![("type".to_string(), "a".to_string())];
//! let matched = filter_exact(records, &criteria);
//! assert_eq!(matched.len(), 2);
//! ```

use crate::Record;
use serde_json::Value;

/// Filter records by exact, case-insensitive field matches.
///
/// Criteria with an empty expected value are ignored rather than applied.
/// A record missing a criterion's field (or holding JSON `null` there) does
/// not match that criterion. With no active criteria, all records pass.
pub fn filter_exact(records: Vec<Record>, criteria: &[(String, String)]) -> Vec<Record> {
    let active: Vec<(&str, String)> = criteria
        .iter()
        .filter(|(_, expected)| !expected.is_empty())
        .map(|(field, expected)| (field.as_str(), expected.to_lowercase()))
        .collect();

    if active.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            active
                .iter()
                .all(|(field, expected)| field_matches(record, field, expected))
        })
        .collect()
}

fn field_matches(record: &Record, field: &str, expected_lower: &str) -> bool {
    match record.get(field).and_then(match_text) {
        Some(actual) => actual.to_lowercase() == expected_lower,
        None => false,
    }
}

/// String form of a field value for matching purposes.
///
/// Strings compare by their content; other scalars by their JSON rendering
/// (`50`, `true`). JSON `null` can never match, same as a missing field.
fn match_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
