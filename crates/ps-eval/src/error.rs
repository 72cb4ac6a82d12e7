use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown evaluator kind {0:?}")]
    UnknownKind(String),
}

pub type EvalResult<T> = Result<T, EvalError>;
