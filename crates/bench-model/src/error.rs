use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The dataset selector does not name one of the supported benchmark sites.
    #[error("invalid domain given: {0}")]
    InvalidDomain(String),
    #[error("unknown semantic type: {0}")]
    UnknownSemanticType(String),
    #[error("invalid sort order: {0} (expected ascending or descending)")]
    InvalidSortOrder(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
