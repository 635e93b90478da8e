//! Survey Core - response model, field catalog and export formatting
//!
//! - `ResponseRecord` / `FormFields` data model with its JSON shape
//! - Canonical field catalog shared by every formatter
//! - Single-response rows and bulk table export
//! - Required-field validation and completion progress
//! - Notification message building behind the `Notifier` seam
//! - Error and logging facilities used by the store and engine crates

pub mod catalog;
pub mod config;
pub mod errors;
pub mod export;
pub mod intake;
pub mod logging_facility;
pub mod model;
pub mod notify;

// Re-export commonly used types
pub use config::SurveyConfig;
pub use errors::{ExError, ExErrorKind, Result, SurveyError};
pub use export::{to_rows, to_table, Sheet, Table};
pub use model::{FieldValue, FormFields, ResponseId, ResponseRecord};
pub use notify::{Notification, Notifier};
