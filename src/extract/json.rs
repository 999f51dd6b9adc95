//! NDJSON row source.
//!
//! Reads newline-delimited JSON: one object per line, e.g.
//! `{"id":1,"name":"Ada"}\n{"id":2,"name":"Grace"}\n`. Lines are parsed
//! lazily, one per pull.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{EtlError, EtlResult};
use crate::types::{Row, Value};

/// Lazily read NDJSON from a file path as a stream of [`Row`]s.
///
/// Rules:
///
/// - Each non-blank line must be a JSON object; blank lines are skipped.
/// - Scalars map onto [`Value`]: `null` -> `Null`, booleans -> `Bool`,
///   integers -> `Int64`, other numbers -> `Float64`, strings -> `Utf8`.
/// - A non-object line, or a field holding an array/object, is an
///   [`EtlError::InvalidRecord`] with a 1-based line number.
pub fn ndjson_rows_from_path(path: impl AsRef<Path>) -> Box<dyn Iterator<Item = EtlResult<Row>>> {
    match File::open(path) {
        Ok(file) => ndjson_rows_from_reader(file),
        Err(e) => Box::new(std::iter::once(Err(EtlError::Io(e)))),
    }
}

/// Lazily read NDJSON from an existing reader as a stream of [`Row`]s.
///
/// Same rules as [`ndjson_rows_from_path`].
pub fn ndjson_rows_from_reader<R: Read + 'static>(
    reader: R,
) -> Box<dyn Iterator<Item = EtlResult<Row>>> {
    let lines = BufReader::new(reader).lines();
    Box::new(lines.enumerate().filter_map(|(idx0, line)| {
        let line = match line {
            Ok(line) => line,
            Err(e) => return Some(Err(EtlError::Io(e))),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(parse_object_line(idx0 + 1, trimmed))
    }))
}

fn parse_object_line(row: usize, line: &str) -> EtlResult<Row> {
    let parsed: serde_json::Value = serde_json::from_str(line)?;
    let obj = parsed.as_object().ok_or_else(|| EtlError::InvalidRecord {
        row,
        message: "line is not a json object".to_string(),
    })?;

    obj.iter()
        .map(|(key, jv)| Ok((key.clone(), scalar_value(row, key, jv)?)))
        .collect()
}

fn scalar_value(row: usize, key: &str, v: &serde_json::Value) -> EtlResult<Value> {
    match v {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int64(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float64(f))
            } else {
                Err(EtlError::InvalidRecord {
                    row,
                    message: format!("number out of range in field '{key}'"),
                })
            }
        }
        serde_json::Value::String(s) => Ok(Value::Utf8(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(EtlError::InvalidRecord {
                row,
                message: format!("field '{key}' is not a scalar"),
            })
        }
    }
}
