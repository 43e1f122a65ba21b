use thiserror::Error;

/// Why a single field value could not be normalized.
///
/// These never abort a query; callers treat the value as missing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("no numeric content in {0:?}")]
    EmptyNumber(String),
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("magnitude of {0:?} does not fit in a 64-bit integer")]
    OutOfRange(String),
    #[error("invalid flag: {0:?}")]
    InvalidFlag(String),
    #[error("{semantic_type} value cannot be taken from {found}")]
    WrongShape {
        semantic_type: &'static str,
        found: &'static str,
    },
}
