//! `sn-output` — output writers for the snake world.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `agent_snapshots.csv`, `tick_summaries.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`WorldOutputObserver`], which implements `sn_world::WorldObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sn_output::{CsvWriter, WorldOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = WorldOutputObserver::new(writer);
//! world.run(3_600, &mut cursor, &mut obs);
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
pub use observer::{WorldOutputObserver, snapshot_rows};
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
