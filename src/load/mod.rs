//! Reference row sinks (loaders).
//!
//! Convenience collaborators built on top of the pipeline's loader contract:
//! each function fully consumes a [`crate::pipeline::RowStream`] and is meant
//! to be wrapped in a loader closure, e.g.
//! `|rows: RowStream<'_>| write_csv_rows_to_path(rows, "out.csv", &cols)`.
//! The first `Err` item in the stream aborts the write and propagates; rows
//! already written stay written.
//!
//! - [`csv`]: header plus one record per row, in a fixed column order
//! - [`json`]: one JSON object per line (NDJSON)

pub mod csv;
pub mod json;

pub use csv::{write_csv_rows, write_csv_rows_to_path};
pub use json::{write_ndjson_rows, write_ndjson_rows_to_path};
