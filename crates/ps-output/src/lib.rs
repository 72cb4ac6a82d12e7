//! `ps-output` — tick-summary writers and the port save file for rust_portsim.
//!
//! Two summary backends are provided:
//!
//! | Feature   | Backend | Files created         |
//! |-----------|---------|-----------------------|
//! | *(none)*  | CSV     | `tick_summaries.csv`  |
//! | `sqlite`  | SQLite  | `output.db`           |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `ps_sim::SimObserver`.
//!
//! The [`codec`] module reads and writes whole ports in a line-oriented text
//! format so a run can be stopped and resumed later.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ps_output::{CsvWriter, SimOutputObserver, save_port};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! port.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! save_port(&port, Path::new("./output/port.txt"))?;
//! ```

pub mod codec;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use codec::{decode_port, encode_port, load_port, save_port};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::TickSummaryRow;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
