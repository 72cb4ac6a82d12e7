//! Error types for ps-output.

use ps_eval::EvalError;
use ps_model::ModelError;
use ps_sim::SimError;
use thiserror::Error;

/// Errors that can occur when writing simulation output or reading and
/// writing save files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A save file line that could not be decoded.  `line` is 1-based.
    #[error("bad encoding at line {line}: {reason}")]
    BadEncoding { line: usize, reason: String },

    /// The save file decoded but describes an inconsistent port.
    #[error("restored port is invalid: {0}")]
    Sim(#[from] SimError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("evaluator error: {0}")]
    Eval(#[from] EvalError),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
