//! Error types for the expense data layer
//!
//! Provides unified error handling using thiserror, split in two levels:
//! the failures data sources report, and the domain taxonomy the repository
//! exposes to its callers. Raw source failures never cross the repository
//! boundary untranslated.

use thiserror::Error;

// == Data Source Error Enum ==
/// Failures reported by remote and local data sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// Remote call failed (connectivity, timeout, server unavailable)
    #[error("network failure: {0}")]
    Network(String),

    /// Requested entity does not exist at the source
    #[error("not found: {0}")]
    NotFound(String),

    /// Input rejected by the source (malformed document, bad identifier)
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Local storage failure (cache layer rejected the operation)
    #[error("storage failure: {0}")]
    Storage(String),
}

// == Domain Error Enum ==
/// Domain-level error taxonomy exposed by the repository.
///
/// Callers receive exactly one of these per failed call; intermediate
/// fallback failures are never surfaced individually.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The remote source could not be reached or answered with a failure
    #[error("network error: {0}")]
    Network(String),

    /// The requested entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed input (e.g. join-by-code with no match)
    #[error("validation error: {0}")]
    Validation(String),

    /// Unclassified failure, carries the underlying message
    #[error("unknown error: {0}")]
    Unknown(String),
}

// == Translation ==
/// Single translation point between the source-level and domain-level
/// taxonomies. The repository relies on this impl via `?`.
impl From<DataSourceError> for DomainError {
    fn from(err: DataSourceError) -> Self {
        match err {
            DataSourceError::Network(msg) => DomainError::Network(msg),
            DataSourceError::NotFound(msg) => DomainError::NotFound(msg),
            DataSourceError::InvalidData(msg) => DomainError::Validation(msg),
            DataSourceError::Storage(msg) => DomainError::Unknown(msg),
        }
    }
}

// == Result Type Aliases ==
/// Result type returned by data-source implementations.
pub type SourceResult<T> = std::result::Result<T, DataSourceError>;

/// Result type exposed by the repository to its callers.
pub type DomainResult<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_translation() {
        let err: DomainError = DataSourceError::Network("timeout".to_string()).into();
        assert_eq!(err, DomainError::Network("timeout".to_string()));
    }

    #[test]
    fn test_invalid_data_maps_to_validation() {
        let err: DomainError = DataSourceError::InvalidData("bad code".to_string()).into();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_storage_maps_to_unknown() {
        let err: DomainError = DataSourceError::Storage("cache rejected".to_string()).into();
        assert!(matches!(err, DomainError::Unknown(_)));
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
