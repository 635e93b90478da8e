use thiserror::Error;

use crate::intake::MissingField;

/// Result type alias using SurveyError
pub type Result<T> = std::result::Result<T, SurveyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used by the CLI, tests and log
/// assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Intake
    InvalidInput,
    ValidationFailed,

    // Lookup
    NotFound,
    EmptyStore,

    // Admin
    ConfirmationRequired,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    QuotaExceeded,
    Export,
    ExternalService,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ValidationFailed => "ERR_VALIDATION_FAILED",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::EmptyStore => "ERR_EMPTY_STORE",
            ExErrorKind::ConfirmationRequired => "ERR_CONFIRMATION_REQUIRED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::QuotaExceeded => "ERR_QUOTA_EXCEEDED",
            ExErrorKind::Export => "ERR_EXPORT",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for programmatic handling plus the operation, storage key
/// and record id that were involved.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    storage_key: Option<String>,
    record_id: Option<String>,
    message: String,
    missing: Option<Vec<MissingField>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            storage_key: None,
            record_id: None,
            message: String::new(),
            missing: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add storage key context
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Add record ID context
    pub fn with_record_id(mut self, id: impl Into<String>) -> Self {
        self.record_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the fields that failed required-presence validation, each with
    /// the message to show beside it
    pub fn with_missing(mut self, missing: Vec<MissingField>) -> Self {
        self.missing = Some(missing);
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn missing(&self) -> Option<&[MissingField]> {
        self.missing.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.storage_key {
            write!(f, " (storage_key: {})", key)?;
        }
        if let Some(id) = &self.record_id {
            write!(f, " (record_id: {})", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for survey operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurveyError {
    /// One or more required fields were not answered
    #[error("{} required field(s) missing: {}", missing.len(), join_keys(missing))]
    Validation { missing: Vec<MissingField> },

    /// No record with the given id exists in the store
    #[error("Response not found: {record_id}")]
    RecordNotFound { record_id: String },

    /// A bulk operation was requested against an empty store
    #[error("No survey responses found. Please submit some surveys first.")]
    EmptyStore,

    /// A destructive action was attempted without confirmation
    #[error("Confirmation required before {action}")]
    ConfirmationRequired { action: String },

    /// Spreadsheet generation or file write failed
    #[error("Export failed: {message}")]
    Export { message: String },

    /// The external notification service rejected or failed the dispatch
    #[error("Notification dispatch failed: {message}")]
    Notification { message: String },

    /// JSON encoding/decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

fn join_keys(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(|m| m.key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<SurveyError> for ExError {
    fn from(err: SurveyError) -> Self {
        match err {
            SurveyError::Validation { missing } => {
                let details: Vec<String> = missing
                    .iter()
                    .map(|m| format!("{} ({})", m.key, m.message))
                    .collect();
                ExError::new(ExErrorKind::ValidationFailed)
                    .with_op("validate")
                    .with_message(format!("Missing required fields: {}", details.join(", ")))
                    .with_missing(missing)
            }
            SurveyError::RecordNotFound { record_id } => ExError::new(ExErrorKind::NotFound)
                .with_record_id(record_id)
                .with_message("Response not found"),
            SurveyError::EmptyStore => ExError::new(ExErrorKind::EmptyStore)
                .with_message("No survey responses found. Please submit some surveys first."),
            SurveyError::ConfirmationRequired { action } => {
                ExError::new(ExErrorKind::ConfirmationRequired)
                    .with_op(action)
                    .with_message("Action was not confirmed")
            }
            SurveyError::Export { message } => ExError::new(ExErrorKind::Export)
                .with_op("export")
                .with_message(message),
            SurveyError::Notification { message } => ExError::new(ExErrorKind::ExternalService)
                .with_op("notify")
                .with_message(message),
            SurveyError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            SurveyError::Config { message } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for SurveyError {
    fn from(err: serde_json::Error) -> Self {
        SurveyError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::EmptyStore, "ERR_EMPTY_STORE"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
            (ExErrorKind::QuotaExceeded, "ERR_QUOTA_EXCEEDED"),
            (ExErrorKind::ConfirmationRequired, "ERR_CONFIRMATION_REQUIRED"),
            (ExErrorKind::ValidationFailed, "ERR_VALIDATION_FAILED"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("append")
            .with_storage_key("school_survey_responses")
            .with_message("disk full");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_PERSISTENCE]"));
        assert!(text.contains("'append'"));
        assert!(text.contains("disk full"));
        assert!(text.contains("school_survey_responses"));
    }

    #[test]
    fn test_validation_keeps_field_messages() {
        let missing = vec![
            MissingField::new("age", "Please select an option"),
            MissingField::new("favoriteSubjects", "Please select at least one option"),
        ];
        let err = SurveyError::Validation {
            missing: missing.clone(),
        };
        assert_eq!(err.to_string(), "2 required field(s) missing: age, favoriteSubjects");

        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::ValidationFailed);
        assert_eq!(ex.missing(), Some(&missing[..]));
        assert!(ex
            .to_string()
            .contains("favoriteSubjects (Please select at least one option)"));
    }

    #[test]
    fn test_empty_store_message_is_user_facing() {
        let ex: ExError = SurveyError::EmptyStore.into();
        assert_eq!(ex.code(), "ERR_EMPTY_STORE");
        assert!(ex.message().contains("Please submit some surveys first"));
    }
}
