//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for per-body snapshots and per-tick summaries.
///
/// Errors are returned here; [`WorldOutputObserver`][crate::WorldOutputObserver]
/// stores the first one for [`take_error`][crate::WorldOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of body snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
