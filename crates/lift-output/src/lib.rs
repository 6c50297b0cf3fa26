//! `lift-output` — simulation trace writers for the rust_lift simulator.
//!
//! The CSV backend creates two files:
//!
//! | File                 | Contents                                        |
//! |----------------------|-------------------------------------------------|
//! | `lift_snapshots.csv` | One row per lift per snapshot interval          |
//! | `tick_summaries.csv` | One row per tick: movement and call statistics  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut source, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{LiftSnapshotRow, NO_DESTINATION, TickSummaryRow};
pub use writer::OutputWriter;
