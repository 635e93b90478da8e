//! Survey submission flow.
//!
//! ## Steps (in order):
//! 1. Required-field validation (hard stop, nothing stored or sent)
//! 2. Append to the response store (soft: a failed write is reported, the
//!    record is still returned)
//! 3. Notification dispatch (soft: failure never affects storage)

use std::time::Instant;

use survey_core::errors::ExError;
use survey_core::intake::validate_required;
use survey_core::model::{FormFields, ResponseRecord};
use survey_core::notify::{Notification, Notifier};
use survey_core::{log_op_end, log_op_error, log_op_start};
use survey_store::errors::Result;
use survey_store::{ResponseStore, SlotStorage};

/// What happened to the administrator notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    /// The notifier failed; carries the rendered error
    Failed(String),
    /// No notifier or no recipient configured
    Skipped,
}

/// Result of an accepted submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// The stored (or session-only) record
    pub record: ResponseRecord,
    /// Set when the store rejected the write
    pub persist_error: Option<ExError>,
    pub dispatch: DispatchOutcome,
}

impl Submission {
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Where notifications for new responses go
#[derive(Clone, Copy)]
pub struct NotifyTarget<'a> {
    pub notifier: &'a dyn Notifier,
    pub recipient: &'a str,
}

/// Validate, store and announce one survey response
///
/// # Errors
///
/// Only validation is fatal: returns `ValidationFailed` listing every
/// missing required key. Storage and notification failures are reported
/// in the returned [`Submission`].
pub fn submit<S: SlotStorage>(
    store: &mut ResponseStore<S>,
    fields: FormFields,
    required: &[&str],
    target: Option<NotifyTarget<'_>>,
) -> Result<Submission> {
    let started = Instant::now();
    log_op_start!("submit", storage_key = %store.key());

    if let Err(e) = validate_required(&fields, required) {
        let err = ExError::from(e).with_op("submit");
        log_op_error!("submit", err, started = started);
        return Err(err);
    }

    let outcome = store.append_soft(fields);
    let dispatch = match target {
        Some(target) => dispatch(target, &outcome.record),
        None => DispatchOutcome::Skipped,
    };

    log_op_end!(
        "submit",
        started = started,
        record_id = %outcome.record.id,
        persisted = outcome.is_persisted()
    );

    Ok(Submission {
        record: outcome.record,
        persist_error: outcome.persist_error,
        dispatch,
    })
}

fn dispatch(target: NotifyTarget<'_>, record: &ResponseRecord) -> DispatchOutcome {
    let sent = Notification::for_record(record, target.recipient)
        .and_then(|notification| target.notifier.dispatch(&notification));

    match sent {
        Ok(()) => DispatchOutcome::Sent,
        Err(e) => {
            tracing::warn!(record_id = %record.id, error = %e, "notification not delivered");
            DispatchOutcome::Failed(e.to_string())
        }
    }
}
