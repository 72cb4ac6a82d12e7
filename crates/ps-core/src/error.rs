//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `PsError` as one variant
//! via `#[from]` where they need it.

use thiserror::Error;

/// The top-level error type for `ps-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PsError {
    #[error("invalid IMO number {0}: expected 7 digits with no leading zero")]
    InvalidImo(u64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ps-core`.
pub type PsResult<T> = Result<T, PsError>;
