//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ps_core::Tick;
use ps_sim::{SimObserver, TickSummary};
use tracing::error;

use crate::row::TickSummaryRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries to any [`OutputWriter`]
/// backend (CSV, SQLite).
///
/// Rows are written at report intervals (`SimConfig::output_interval_ticks`).
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `port.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    rows_written: u64,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows_written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `port.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            error!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_report(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow::from(summary);
        let result = self.writer.write_tick_summary(&row);
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
