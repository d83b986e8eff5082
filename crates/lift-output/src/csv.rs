//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `lift_snapshots.csv`
//! - `call_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! Request queues are written space-separated in service order (`"5 6 2"`).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CallSnapshotRow, LiftSnapshotRow, OutputError, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    lifts:     Writer<File>,
    calls:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    ///
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(OutputError::MissingDir(dir.to_path_buf()));
        }

        let mut lifts = Writer::from_path(dir.join("lift_snapshots.csv"))?;
        lifts.write_record(["tick", "lift_id", "floor", "doors_open", "state", "requests"])?;

        let mut calls = Writer::from_path(dir.join("call_snapshots.csv"))?;
        calls.write_record(["tick", "call_id", "floor", "direction", "assigned_to"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "assigned",
            "fulfilled",
            "moved",
            "pending_calls",
            "unassigned_calls",
        ])?;

        Ok(Self {
            lifts,
            calls,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_lift_rows(&mut self, rows: &[LiftSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            let requests: Vec<String> = row.requests.iter().map(i32::to_string).collect();
            self.lifts.write_record(&[
                row.tick.to_string(),
                row.lift_id.clone(),
                row.floor.to_string(),
                (row.doors_open as u8).to_string(),
                row.state.to_string(),
                requests.join(" "),
            ])?;
        }
        Ok(())
    }

    fn write_call_rows(&mut self, rows: &[CallSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.calls.write_record(&[
                row.tick.to_string(),
                row.call_id.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                row.assigned_to.clone().unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.assigned.to_string(),
            row.fulfilled.to_string(),
            row.moved.to_string(),
            row.pending_calls.to_string(),
            row.unassigned_calls.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.lifts.flush()?;
        self.calls.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
