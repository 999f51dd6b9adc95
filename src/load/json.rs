//! NDJSON row sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::EtlResult;
use crate::pipeline::RowStream;
use crate::types::Value;

/// Consume a row stream and write it as NDJSON to `path`.
///
/// See [`write_ndjson_rows`] for the writing rules.
pub fn write_ndjson_rows_to_path(rows: RowStream<'_>, path: impl AsRef<Path>) -> EtlResult<()> {
    let file = File::create(path)?;
    write_ndjson_rows(rows, BufWriter::new(file))
}

/// Consume a row stream and write one JSON object per line.
///
/// Rules:
///
/// - Keys serialize in the row's ascending key order.
/// - `Null` writes JSON `null`; a non-finite `Float64` (NaN/infinity) has no
///   JSON representation and also writes `null`.
/// - The writer is flushed after the stream is exhausted.
pub fn write_ndjson_rows<W: Write>(rows: RowStream<'_>, mut writer: W) -> EtlResult<()> {
    for item in rows {
        let row = item?;
        let obj: serde_json::Map<String, serde_json::Value> = row
            .into_iter()
            .map(|(key, value)| (key, to_json_value(&value)))
            .collect();
        serde_json::to_writer(&mut writer, &serde_json::Value::Object(obj))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn to_json_value(v: &Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Int64(i) => (*i).into(),
        Value::Float64(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bool(b) => (*b).into(),
        Value::Utf8(s) => serde_json::Value::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::write_ndjson_rows;
    use crate::error::EtlResult;
    use crate::types::{Row, Value};

    #[test]
    fn writes_one_object_per_line_in_key_order() {
        let items: Vec<EtlResult<Row>> = vec![
            Ok(Row::from_iter([
                ("id", Value::from(1i64)),
                ("name", Value::from("Ada")),
                ("active", Value::from(true)),
            ])),
            Ok(Row::from_iter([("id", Value::from(2i64)), ("note", Value::Null)])),
        ];
        let mut stream = items.into_iter();
        let mut out = Vec::new();

        write_ndjson_rows(&mut stream, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\"active\":true,\"id\":1,\"name\":\"Ada\"}\n{\"id\":2,\"note\":null}\n"
        );
    }

    #[test]
    fn non_finite_float_writes_null() {
        let items: Vec<EtlResult<Row>> =
            vec![Ok(Row::from_iter([("x", Value::Float64(f64::NAN))]))];
        let mut stream = items.into_iter();
        let mut out = Vec::new();

        write_ndjson_rows(&mut stream, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"x\":null}\n");
    }
}
