//! Standard transformer constructors.
//!
//! Each constructor is a factory: it closes over its configuration
//! (predicate, key mapping, column list) and returns a boxed
//! [`Transform`] ready to slot into a [`crate::pipeline::Pipeline`].
//! There is no trait hierarchy; a transformer is just a function value.
//!
//! Currently implemented:
//!
//! - [`filter()`]: keep rows matching a predicate, drop the rest
//! - [`rename()`]: rename keys via an old-key -> new-key mapping
//! - [`select()`]: project rows down to a fixed key list
//! - [`map()`]: apply an infallible row -> row function
//! - [`inspect()`]: observe surviving rows without changing them

use std::collections::BTreeMap;

use crate::pipeline::{Transform, Transformed};
use crate::types::{Row, Value};

/// Build a transformer that keeps rows for which `predicate` returns `true`
/// and drops the rest.
///
/// The row passes through unchanged when kept. Missing keys are the
/// predicate's own business (use [`Row::get`] and handle `None`); no key
/// validation happens here.
///
/// ```
/// use row_etl::transform::filter;
///
/// let active_only = filter(|row| {
///     row.get("active").and_then(|v| v.as_bool()).unwrap_or(false)
/// });
/// # let _ = active_only;
/// ```
pub fn filter<P>(mut predicate: P) -> Transform
where
    P: FnMut(&Row) -> bool + 'static,
{
    Box::new(move |row| {
        if predicate(&row) {
            Ok(Transformed::Keep(row))
        } else {
            Ok(Transformed::Drop)
        }
    })
}

/// Build a transformer that renames keys according to `mapping`.
///
/// Rules:
///
/// - Every key present in the mapping is replaced by its target; the value is
///   untouched.
/// - Keys absent from the mapping copy through unchanged.
/// - A new [`Row`] is always produced; the input is never mutated in place.
/// - If two source keys map to the same target, source keys are visited in
///   ascending lexicographic order and later writes win, so the greatest
///   source key supplies the value. Deterministic tie-break, not an error.
pub fn rename<I, K, V>(mapping: I) -> Transform
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mapping: BTreeMap<String, String> = mapping
        .into_iter()
        .map(|(old, new)| (old.into(), new.into()))
        .collect();

    Box::new(move |row| {
        let renamed: Row = row
            .into_iter()
            .map(|(key, value)| {
                let key = mapping.get(&key).cloned().unwrap_or(key);
                (key, value)
            })
            .collect();
        Ok(Transformed::Keep(renamed))
    })
}

/// Build a transformer that projects each row down to exactly `keys`.
///
/// A listed key missing from the row yields [`Value::Null`] (safe lookup);
/// keys not listed are discarded.
pub fn select<I, K>(keys: I) -> Transform
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();

    Box::new(move |row| {
        let projected: Row = keys
            .iter()
            .map(|key| {
                let value = row.get(key).cloned().unwrap_or(Value::Null);
                (key.clone(), value)
            })
            .collect();
        Ok(Transformed::Keep(projected))
    })
}

/// Build a transformer from an infallible row -> row function.
///
/// The result is always kept; use [`filter()`] (or a hand-written
/// transformer) when rows need to be dropped.
pub fn map<F>(mut f: F) -> Transform
where
    F: FnMut(Row) -> Row + 'static,
{
    Box::new(move |row| Ok(Transformed::Keep(f(row))))
}

/// Build a transformer that calls `f` on each surviving row and keeps it
/// unchanged.
///
/// The runner itself counts and logs nothing; this is the hook for callers
/// who want drop counts or progress reporting (place one before and one
/// after a [`filter()`] and diff the counters).
pub fn inspect<F>(mut f: F) -> Transform
where
    F: FnMut(&Row) + 'static,
{
    Box::new(move |row| {
        f(&row);
        Ok(Transformed::Keep(row))
    })
}
