use strum_macros::Display;
use thiserror::Error;

/// Which enumeration a rejected code was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IndexKind {
    Stem,
    Branch,
    Element,
}

#[derive(Error, Debug)]
pub enum SajuError {
    #[error("Invalid {kind} index: {value}")]
    InvalidIndex { kind: IndexKind, value: i64 },

    #[error("Structural Violation: {0}")]
    StructuralViolation(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SajuResult<T> = Result<T, SajuError>;
