//! Core data model types.
//!
//! A [`Row`] is a string-keyed map of scalar [`Value`]s. Rows are what flows
//! through a [`crate::pipeline::Pipeline`]: the extractor produces them,
//! transformers replace (or drop) them, the loader consumes them. The runner
//! never mutates a row after receiving it.

use std::collections::BTreeMap;
use std::fmt;

/// A single scalar cell value in a [`Row`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the integer value, if this is an `Int64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64` (accepts both `Float64` and `Int64`).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            Value::Int64(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string value, if this is a `Utf8`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Renders the raw value; `Null` renders as the empty string.
///
/// This is the representation used when writing delimited text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

/// A single record: a string-keyed map of [`Value`]s.
///
/// Backed by a `BTreeMap`, so key iteration order is deterministic
/// (ascending lexicographic). Key order is an iteration detail, not part of
/// row equality or the pipeline contract.
///
/// ```
/// use row_etl::types::{Row, Value};
///
/// let row: Row = [("id", Value::from("A1")), ("price", Value::from(120.0))]
///     .into_iter()
///     .collect();
/// assert_eq!(row.get("id"), Some(&Value::Utf8("A1".to_string())));
/// assert_eq!(row.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of keys in the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the row has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the row contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a key/value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Iterate `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, Value>> for Row {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Row, Value};

    #[test]
    fn value_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Int64(3).as_i64(), Some(3));
        assert_eq!(Value::Int64(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float64(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Utf8("x".to_string()).as_str(), Some("x"));
        assert_eq!(Value::Utf8("x".to_string()).as_i64(), None);
    }

    #[test]
    fn value_display_renders_null_as_empty() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Int64(42).to_string(), "42");
        assert_eq!(Value::Float64(1.25).to_string(), "1.25");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Utf8("ada".to_string()).to_string(), "ada");
    }

    #[test]
    fn row_insert_get_remove() {
        let mut row = Row::new();
        assert!(row.is_empty());

        assert_eq!(row.insert("id", 1i64), None);
        assert_eq!(row.insert("id", 2i64), Some(Value::Int64(1)));
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("id"), Some(&Value::Int64(2)));

        assert_eq!(row.remove("id"), Some(Value::Int64(2)));
        assert_eq!(row.get("id"), None);
    }

    #[test]
    fn row_iterates_in_key_order() {
        let row: Row = [("b", 2i64), ("a", 1i64), ("c", 3i64)].into_iter().collect();
        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn row_equality_ignores_insertion_order() {
        let forward: Row = [("a", 1i64), ("b", 2i64)].into_iter().collect();
        let backward: Row = [("b", 2i64), ("a", 1i64)].into_iter().collect();
        assert_eq!(forward, backward);
    }
}
