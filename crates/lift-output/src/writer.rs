//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CallSnapshotRow, LiftSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are stored by the observer rather than aborting the run; retrieve
/// them with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of lift rows taken from one snapshot.
    fn write_lift_rows(&mut self, rows: &[LiftSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of pending-call rows taken from one snapshot.
    fn write_call_rows(&mut self, rows: &[CallSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
