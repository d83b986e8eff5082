//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_sim::{SimObserver, SystemSnapshot, TickSummary};

use crate::row::{CallSnapshotRow, LiftSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `system.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `system.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:             summary.tick.0,
            assigned:         summary.assigned as u64,
            fulfilled:        summary.fulfilled as u64,
            moved:            summary.moved as u64,
            pending_calls:    summary.pending_calls as u64,
            unassigned_calls: summary.unassigned_calls as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &SystemSnapshot) {
        let tick = snapshot.tick.0;

        let lifts: Vec<LiftSnapshotRow> = snapshot.lifts
            .iter()
            .map(|view| LiftSnapshotRow::from_view(tick, view))
            .collect();
        let result = self.writer.write_lift_rows(&lifts);
        self.store_err(result);

        if !snapshot.calls.is_empty() {
            let calls: Vec<CallSnapshotRow> = snapshot.calls
                .iter()
                .map(|view| CallSnapshotRow::from_view(tick, view))
                .collect();
            let result = self.writer.write_call_rows(&calls);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
