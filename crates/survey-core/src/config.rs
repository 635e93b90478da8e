//! Runtime configuration
//!
//! Loaded from an optional TOML file; every field has a default matching
//! the deployed survey so an absent file is a valid configuration.
//!
//! ```toml
//! storage_key = "school_survey_responses"
//! data_dir = ".survey"
//! admin_email = "admin@example.org"
//!
//! [notifier]
//! service_id = "service_xxx"
//! template_id = "template_xxx"
//! public_key = "pk_xxx"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use survey_core_types::Sensitive;

use crate::catalog;
use crate::errors::{Result, SurveyError};

pub const DEFAULT_STORAGE_KEY: &str = "school_survey_responses";
pub const DEFAULT_DATA_DIR: &str = ".survey";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurveyConfig {
    /// Name of the slot holding all responses
    pub storage_key: String,
    /// Root directory of the filesystem slot backend
    pub data_dir: PathBuf,
    /// Recipient of new-response notifications
    pub admin_email: Option<String>,
    /// Required questions; defaults to every non-comment catalog question
    pub required: Vec<String>,
    pub notifier: Option<NotifierConfig>,
}

/// Credentials for the external notification service
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifierConfig {
    pub service_id: Sensitive<String>,
    pub template_id: Sensitive<String>,
    pub public_key: Sensitive<String>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            admin_email: None,
            required: catalog::required_keys()
                .into_iter()
                .map(str::to_string)
                .collect(),
            notifier: None,
        }
    }
}

impl SurveyConfig {
    /// Parse a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| SurveyError::Config {
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| SurveyError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Required keys as borrowed strs, the shape intake checks take
    pub fn required_keys(&self) -> Vec<&str> {
        self.required.iter().map(String::as_str).collect()
    }
}
