//! CSV output backend.
//!
//! Creates `tick_summaries.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow};

/// Column order of `tick_summaries.csv`.
pub const TICK_SUMMARY_HEADER: [&str; 8] = [
    "tick",
    "day",
    "movements_executed",
    "ships_docked",
    "cargo_unloaded",
    "queue_len",
    "quays_occupied",
    "stored_cargo",
];

/// Writes tick summaries to a CSV file.
pub struct CsvWriter {
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) `tick_summaries.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(TICK_SUMMARY_HEADER)?;
        Ok(Self { summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.day.to_string(),
            row.movements_executed.to_string(),
            row.ships_docked.to_string(),
            row.cargo_unloaded.to_string(),
            row.queue_len.to_string(),
            row.quays_occupied.to_string(),
            row.stored_cargo.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        Ok(())
    }
}
