//! The pipeline runner: lazy extract -> transform -> load sequencing.
//!
//! A [`Pipeline`] composes three caller-supplied roles:
//!
//! - an **extractor**: a zero-argument callable returning a fresh lazy
//!   sequence of rows (finite or infinite) each time it is called
//! - an ordered list of **transformers**: row -> row (or row -> drop)
//!   functions, applied in order
//! - a **loader**: a callable that fully consumes the surviving row stream
//!   (or deliberately stops pulling early)
//!
//! The runner owns no data and performs no buffering: each row is pulled
//! through the whole transformer chain only when the loader requests the next
//! item, so memory use is O(1) in row count. Errors from any of the three
//! roles propagate out of [`Pipeline::run`] untouched; there is no retry,
//! no recovery, and no rollback of rows the loader already consumed.
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
//!             println!("{:?}", row?);
//!         }
//!         Ok(())
//!     },
//! );
//! pipeline.run()?;
//! # Ok(())
//! # }
//! ```

use crate::error::EtlResult;
use crate::types::Row;

/// Result of applying one transformer to one row.
///
/// `Drop` is normal control flow, not an error: the row silently leaves the
/// stream and no later transformer (nor the loader) ever sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed {
    /// Replace the row with this one and continue down the chain.
    Keep(Row),
    /// Remove the row from the stream.
    Drop,
}

/// A restartable row source: called once per [`Pipeline::run`], returning a
/// fresh lazy sequence.
pub type Extractor = Box<dyn FnMut() -> Box<dyn Iterator<Item = EtlResult<Row>>>>;

/// One step of the transformer chain.
///
/// Transformers take the row by value and return a replacement (or drop it);
/// per-row state, if any, lives in closure captures.
pub type Transform = Box<dyn FnMut(Row) -> EtlResult<Transformed>>;

/// The lazy surviving-row stream handed to a loader.
///
/// Each `next` call pulls one row from the extractor and runs it through the
/// transformer chain (skipping dropped rows) before yielding it.
pub type RowStream<'a> = &'a mut dyn Iterator<Item = EtlResult<Row>>;

/// A row sink: receives the stream exactly once per run and drives the pull.
pub type Loader = Box<dyn FnMut(RowStream<'_>) -> EtlResult<()>>;

/// Tiny, composable ETL pipeline.
///
/// Holds one extractor, an ordered list of transformers, and one loader; owns
/// no rows. Constructed once, re-runnable: every [`Pipeline::run`] calls the
/// extractor again for a fresh sequence.
pub struct Pipeline {
    name: String,
    extract: Extractor,
    transforms: Vec<Transform>,
    load: Loader,
}

impl Pipeline {
    /// Create a pipeline from an extractor, an ordered transformer list, and
    /// a loader.
    ///
    /// Build boxed transformers with the constructors in
    /// [`crate::transform`], or box any
    /// `FnMut(Row) -> EtlResult<Transformed>` yourself.
    pub fn new<E, I, L>(mut extract: E, transforms: Vec<Transform>, load: L) -> Self
    where
        E: FnMut() -> I + 'static,
        I: Iterator<Item = EtlResult<Row>> + 'static,
        L: FnMut(RowStream<'_>) -> EtlResult<()> + 'static,
    {
        Self {
            name: "default".to_string(),
            extract: Box::new(move || Box::new(extract()) as Box<dyn Iterator<Item = EtlResult<Row>>>),
            transforms,
            load: Box::new(load),
        }
    }

    /// Set a diagnostic name for the pipeline.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The pipeline's diagnostic name (`"default"` unless set).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a transformer to the end of the chain.
    pub fn add_transform<F>(&mut self, transform: F)
    where
        F: FnMut(Row) -> EtlResult<Transformed> + 'static,
    {
        self.transforms.push(Box::new(transform));
    }

    /// Run the pipeline once.
    ///
    /// 1. Calls the extractor for a fresh lazy row sequence.
    /// 2. Adapts it lazily: each row flows through the transformers in order.
    ///    A dropped row is removed immediately (later transformers never see
    ///    it); an `Err` from the extractor or a transformer is yielded through
    ///    to the loader's stream as-is.
    /// 3. Calls the loader exactly once with the adapted stream.
    ///
    /// Rows are pulled one at a time by the loader's iteration; nothing is
    /// materialized. Any error returned by the loader (including one it
    /// received from the stream and chose to propagate) is returned from
    /// `run`; rows the loader consumed before the failure keep whatever
    /// effect the loader applied.
    pub fn run(&mut self) -> EtlResult<()> {
        let Self {
            extract,
            transforms,
            load,
            name: _,
        } = self;

        let source = (extract)();
        let mut stream = source.filter_map(|item| apply_chain(transforms, item));
        (load)(&mut stream)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("transforms_len", &self.transforms.len())
            .finish()
    }
}

/// Push one sourced item through the transformer chain.
///
/// Returns `None` when a transformer drops the row (short-circuit: the rest
/// of the chain is skipped), `Some(Err(_))` on the first failure.
fn apply_chain(transforms: &mut [Transform], item: EtlResult<Row>) -> Option<EtlResult<Row>> {
    let mut row = match item {
        Ok(row) => row,
        Err(e) => return Some(Err(e)),
    };
    for transform in transforms.iter_mut() {
        match transform(row) {
            Ok(Transformed::Keep(next)) => row = next,
            Ok(Transformed::Drop) => return None,
            Err(e) => return Some(Err(e)),
        }
    }
    Some(Ok(row))
}
