//! Reference row sources (extractors).
//!
//! These are convenience collaborators built on top of the pipeline's
//! extractor contract: each function returns a lazy
//! `Iterator<Item = EtlResult<Row>>` suitable for wrapping in a
//! [`crate::pipeline::Extractor`] closure, e.g.
//! `move || csv_rows_from_path("orders.csv")`. The pipeline core does not
//! depend on them; any source satisfying the contract works just as well.
//!
//! - [`csv`]: headed delimited text, one row per record, untyped `Utf8` cells
//! - [`json`]: newline-delimited JSON objects

pub mod csv;
pub mod json;

pub use csv::{csv_rows_from_path, csv_rows_from_reader};
pub use json::{ndjson_rows_from_path, ndjson_rows_from_reader};
