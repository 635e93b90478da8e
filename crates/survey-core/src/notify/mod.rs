//! Notification of new responses to the survey administrator
//!
//! Delivery is an opaque external call behind [`Notifier`]; this module only
//! builds the message.

mod template;

pub use template::render_body;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::Result;
use crate::model::ResponseRecord;

pub const SENDER_NAME: &str = "School Life Survey System";
pub const SUBJECT: &str = "New School Life Survey Response Received";

/// Template parameters for one new-response notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    /// Id of the response this announces
    pub record_id: String,
    pub to_email: String,
    pub from_name: String,
    pub subject: String,
    /// Human-readable body grouped by section
    pub message: String,
    /// Pretty-printed JSON of the submitted answers
    pub survey_data: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Build the notification for a freshly appended record
    pub fn for_record(record: &ResponseRecord, recipient: &str) -> Result<Self> {
        Ok(Self {
            record_id: record.id.to_string(),
            to_email: recipient.to_string(),
            from_name: SENDER_NAME.to_string(),
            subject: SUBJECT.to_string(),
            message: render_body(record),
            survey_data: serde_json::to_string_pretty(&record.data)?,
            timestamp: record.timestamp,
        })
    }
}

/// Delivery channel for notifications
///
/// Implementations talk to whatever mail/notification service is deployed.
/// A failed dispatch is reported to the caller but never affects whether the
/// response was stored.
pub trait Notifier {
    /// # Errors
    ///
    /// Returns `SurveyError::Notification` when the service rejects or
    /// cannot be reached.
    fn dispatch(&self, notification: &Notification) -> Result<()>;
}
