//! The open-map record type.
//!
//! A record is one form submission: arbitrary string-named fields with
//! arbitrary JSON values. No schema is imposed here; required-field
//! checks live in [`crate::validate`].

use serde_json::{Map, Value};

/// One form submission: an open map from field name to JSON value.
pub type Record = Map<String, Value>;

/// Build a record from owned string key/value pairs.
///
/// Form submissions arrive as flat string pairs; every value becomes a
/// JSON string. Later pairs with a duplicate key overwrite earlier ones.
///
/// # Examples
///
/// ```
/// use soiree_core::record_from_pairs;
///
/// let record = record_from_pairs([
///     ("name".to_string(), "Dana".to_string()),
///     ("guests".to_string(), "50".to_string()),
/// ]);
/// assert_eq!(record.get("name").and_then(|v| v.as_str()), Some("Dana"));
/// ```
pub fn record_from_pairs<I>(pairs: I) -> Record
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}
