//! `dp-output` — output writers for the rust_dp dining philosophers simulation.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                      |
//! |-----------|---------|--------------------------------------------------------------------|
//! | *(none)*  | CSV     | `metrics.csv`, `philosopher_snapshots.csv`, `fork_snapshots.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                                                        |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`MetricsOutputObserver`], which implements `dp_sim::ModelObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dp_output::{CsvWriter, MetricsOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = MetricsOutputObserver::new(writer);
//! model.run(1_000, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MetricsOutputObserver;
pub use row::{ForkSnapshotRow, PhilosopherSnapshotRow, TickMetricsRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
