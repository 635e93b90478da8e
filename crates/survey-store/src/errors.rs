//! Error helpers for survey-store
//!
//! Wraps survey-core ExError with store-specific constructors

use survey_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a slot operation
pub fn io_error(operation: &str, key: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_storage_key(key)
        .with_message(err.to_string())
}

/// The backend refused to store a value of this size
pub fn quota_exceeded(key: &str, size: usize, quota: usize) -> ExError {
    ExError::new(ExErrorKind::QuotaExceeded)
        .with_op("slot_set")
        .with_storage_key(key)
        .with_message(format!(
            "value of {} bytes exceeds quota of {} bytes",
            size, quota
        ))
}

/// Persisting the response collection failed
pub fn persist_failed(key: &str, source: &ExError) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("append")
        .with_storage_key(key)
        .with_message(format!("failed to persist responses: {}", source))
}

/// Encoding the response collection failed
pub fn encode_failed(key: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("encode_responses")
        .with_storage_key(key)
        .with_message(err.to_string())
}

/// A slot key that cannot be mapped onto the backend
pub fn invalid_key(key: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("slot_path")
        .with_storage_key(key)
        .with_message("slot keys may only contain ASCII letters, digits, '-', '_' and '.'")
}
