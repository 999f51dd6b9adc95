//! CSV row sink.

use std::io::Write;
use std::path::Path;

use crate::error::EtlResult;
use crate::pipeline::RowStream;

/// Consume a row stream and write it as headed CSV to `path`.
///
/// See [`write_csv_rows`] for the writing rules.
pub fn write_csv_rows_to_path(
    rows: RowStream<'_>,
    path: impl AsRef<Path>,
    columns: &[&str],
) -> EtlResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    write_csv_rows(rows, &mut wtr, columns)
}

/// Consume a row stream and write it as headed CSV to an existing writer.
///
/// Rules:
///
/// - `columns` fixes both the header and the per-record field order.
/// - Each value is rendered with its `Display` form; a key missing from a
///   row (or holding `Null`) writes an empty field.
/// - Row keys outside `columns` are not written.
/// - The writer is flushed after the stream is exhausted.
pub fn write_csv_rows<W: Write>(
    rows: RowStream<'_>,
    wtr: &mut csv::Writer<W>,
    columns: &[&str],
) -> EtlResult<()> {
    wtr.write_record(columns)?;
    for item in rows {
        let row = item?;
        let record: Vec<String> = columns
            .iter()
            .map(|col| row.get(col).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
