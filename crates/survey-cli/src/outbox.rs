//! File outbox for administrator notifications
//!
//! The CLI has no mail client. Each notification is written as JSON to
//! `<data_dir>/outbox/notification_<record id>.json` in the shape the mail
//! service's send endpoint takes (`service_id`, `template_id`, `user_id`,
//! `template_params`) for a separate relay to post.

use std::path::PathBuf;
use survey_core::config::NotifierConfig;
use survey_core::errors::{Result, SurveyError};
use survey_core::notify::{Notification, Notifier};
use survey_store::{FsSlots, SlotStorage};

pub struct OutboxNotifier {
    slots: FsSlots,
    credentials: Option<NotifierConfig>,
}

impl OutboxNotifier {
    pub fn new(dir: impl Into<PathBuf>, credentials: Option<NotifierConfig>) -> Self {
        Self {
            slots: FsSlots::new(dir),
            credentials,
        }
    }

    fn entry(&self, notification: &Notification) -> serde_json::Value {
        let creds = self.credentials.as_ref();
        serde_json::json!({
            "service_id": creds.map(|c| c.service_id.expose().as_str()),
            "template_id": creds.map(|c| c.template_id.expose().as_str()),
            "user_id": creds.map(|c| c.public_key.expose().as_str()),
            "template_params": notification,
        })
    }
}

impl Notifier for OutboxNotifier {
    fn dispatch(&self, notification: &Notification) -> Result<()> {
        let failed = |message: String| SurveyError::Notification { message };

        let body = serde_json::to_string_pretty(&self.entry(notification))
            .map_err(|e| failed(e.to_string()))?;
        let key = format!("notification_{}", notification.record_id);

        // FsSlots writes through &mut; the handle is just a root path
        let mut slots = self.slots.clone();
        slots.set(&key, &body).map_err(|e| failed(e.to_string()))?;
        tracing::info!(outbox_key = %key, "notification written to outbox");
        Ok(())
    }
}
