//! CSV row source.

use std::io::Read;
use std::path::Path;

use crate::error::{EtlError, EtlResult};
use crate::types::{Row, Value};

/// Lazily read headed CSV from a file path as a stream of [`Row`]s.
///
/// Rules:
///
/// - The first record is the header; each data record becomes one row keyed
///   by header name.
/// - Every cell is read untyped as [`Value::Utf8`] (empty cells included);
///   type coercion, if wanted, belongs in a transformer.
/// - Reading is lazy: a record is parsed only when the stream is pulled.
/// - Failures (unreadable file, malformed record) surface as `Err` items.
///
/// The returned iterator is single-use; for a restartable
/// [`crate::pipeline::Extractor`], re-call this inside the extractor closure
/// so each run re-opens the file.
pub fn csv_rows_from_path(path: impl AsRef<Path>) -> Box<dyn Iterator<Item = EtlResult<Row>>> {
    match csv::ReaderBuilder::new().has_headers(true).from_path(path) {
        Ok(rdr) => csv_rows(rdr),
        Err(e) => Box::new(std::iter::once(Err(EtlError::Csv(e)))),
    }
}

/// Lazily read headed CSV from an existing reader as a stream of [`Row`]s.
///
/// Same rules as [`csv_rows_from_path`].
pub fn csv_rows_from_reader<R: Read + 'static>(
    rdr: csv::Reader<R>,
) -> Box<dyn Iterator<Item = EtlResult<Row>>> {
    csv_rows(rdr)
}

fn csv_rows<R: Read + 'static>(mut rdr: csv::Reader<R>) -> Box<dyn Iterator<Item = EtlResult<Row>>> {
    let headers = match rdr.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => return Box::new(std::iter::once(Err(EtlError::Csv(e)))),
    };

    Box::new(rdr.into_records().map(move |result| {
        let record = result?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), Value::Utf8(cell.to_string())))
            .collect();
        Ok(row)
    }))
}

#[cfg(test)]
mod tests {
    use super::csv_rows_from_reader;
    use crate::types::Value;

    #[test]
    fn reads_headed_csv_into_utf8_rows() {
        let input = "id,name,score\n1,Ada,98.5\n2,Grace,91.0\n";
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes());

        let rows: Vec<_> = csv_rows_from_reader(rdr).collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("id"), Some(&Value::Utf8("1".to_string())));
        assert_eq!(rows[0].get("name"), Some(&Value::Utf8("Ada".to_string())));
        assert_eq!(rows[1].get("score"), Some(&Value::Utf8("91.0".to_string())));
    }

    #[test]
    fn empty_cells_become_empty_strings() {
        let input = "id,name\n1,\n";
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes());

        let rows: Vec<_> = csv_rows_from_reader(rdr).collect::<Result<_, _>>().unwrap();
        assert_eq!(rows[0].get("name"), Some(&Value::Utf8(String::new())));
    }

    #[test]
    fn malformed_record_surfaces_as_err_item() {
        // Second data record has an extra field.
        let input = "id,name\n1,Ada\n2,Grace,extra\n";
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes());

        let mut stream = csv_rows_from_reader(rdr);
        assert!(stream.next().unwrap().is_ok());
        assert!(stream.next().unwrap().is_err());
    }

    #[test]
    fn unreadable_path_yields_a_single_err() {
        let mut stream = super::csv_rows_from_path("does/not/exist.csv");
        assert!(stream.next().unwrap().is_err());
        assert!(stream.next().is_none());
    }
}
