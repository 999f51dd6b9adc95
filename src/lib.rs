//! `row-etl` is a tiny library for composing row-oriented ETL pipelines: a
//! caller-supplied extractor produces a lazy stream of string-keyed
//! [`types::Row`]s, an ordered list of transformers replaces or drops each
//! row, and a caller-supplied loader consumes whatever survives.
//!
//! The primary entrypoint is [`pipeline::Pipeline`]. The runner is purely
//! sequential and streaming: one row at a time is pulled through the whole
//! transformer chain only when the loader requests it, so memory use is O(1)
//! in row count and infinite sources work (the loader just stops pulling).
//!
//! ## What the runner guarantees
//!
//! - **Ordering**: surviving rows reach the loader in production order;
//!   transformers replace or drop, never reorder.
//! - **Short-circuit drops**: once a transformer drops a row, later
//!   transformers never see it and the loader never receives it. Dropping is
//!   control flow, not an error, and nothing is logged or counted.
//! - **Untouched failures**: the first error from the extractor, a
//!   transformer, or the loader aborts the run and comes back from
//!   [`pipeline::Pipeline::run`] as-is. No retries, no rollback of rows the
//!   loader already consumed.
//!
//! ## Quick example: filter and rename
//!
//! ```
//! use row_etl::pipeline::{Pipeline, RowStream};
//! use row_etl::transform::{filter, rename};
//! use row_etl::types::{Row, Value};
//!
//! # fn main() -> Result<(), row_etl::EtlError> {
//! let orders = vec![
//!     Row::from_iter([("order_id", Value::from("A1")), ("total_price", Value::from(120.0))]),
//!     Row::from_iter([("order_id", Value::from("B2")), ("total_price", Value::from(15.0))]),
//! ];
//!
//! let mut pipeline = Pipeline::new(
//!     move || orders.clone().into_iter().map(Ok),
//!     vec![
//!         filter(|row| row.get("total_price").and_then(|v| v.as_f64()).is_some_and(|p| p >= 20.0)),
//!         rename([("order_id", "id"), ("total_price", "price")]),
//!     ],
//!     |rows: RowStream<'_>| {
//!         for row in rows {
//!             let row = row?;
//!             assert_eq!(row.get("id"), Some(&Value::Utf8("A1".to_string())));
//!         }
//!         Ok(())
//!     },
//! )
//! .with_name("orders_clean");
//!
//! pipeline.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: the runner, the three interface aliases, and the
//!   [`pipeline::Transformed`] keep/drop sum type
//! - [`transform`]: standard transformer constructors
//!   (filter/rename/select/map/inspect)
//! - [`types`]: the [`types::Row`] / [`types::Value`] data model
//! - [`extract`] / [`load`]: reference CSV and NDJSON adapters built on the
//!   public interfaces (the core never depends on them)
//! - [`error`]: the crate-wide error enum

pub mod error;
pub mod extract;
pub mod load;
pub mod pipeline;
pub mod transform;
pub mod types;

pub use error::{EtlError, EtlResult};
pub use pipeline::{Extractor, Loader, Pipeline, RowStream, Transform, Transformed};
pub use types::{Row, Value};
