//! Administrator operations: bulk export, single-record export, clear.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Instant;

use survey_core::errors::{ExError, SurveyError};
use survey_core::export::{
    export_filename, to_table, Sheet, BULK_EXPORT_PREFIX, SINGLE_EXPORT_PREFIX,
};
use survey_core::model::ResponseRecord;
use survey_core::{log_op_end, log_op_error, log_op_start};
use survey_store::errors::Result;
use survey_store::{ResponseStore, SlotStorage};

use crate::sheet::SheetWriter;

/// Operator answer to a destructive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Where an export went and how many responses it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub filename: String,
    pub path: PathBuf,
    pub record_count: usize,
}

/// Export every stored response as one workbook
///
/// # Errors
///
/// `EmptyStore` when there is nothing to export (no file is written),
/// otherwise store read or writer errors.
pub fn export_all<S, W>(
    store: &ResponseStore<S>,
    writer: &mut W,
    now: DateTime<Utc>,
) -> Result<ExportReport>
where
    S: SlotStorage,
    W: SheetWriter + ?Sized,
{
    let started = Instant::now();
    log_op_start!("export_all", storage_key = %store.key());

    let result = store.load_all().and_then(|records| {
        if records.is_empty() {
            return Err(ExError::from(SurveyError::EmptyStore).with_op("export_all"));
        }
        let filename = export_filename(BULK_EXPORT_PREFIX, now);
        let sheet = Sheet::from_table(to_table(&records));
        let path = writer.write(&filename, &sheet)?;
        Ok(ExportReport {
            filename,
            path,
            record_count: records.len(),
        })
    });

    match result {
        Ok(report) => {
            log_op_end!(
                "export_all",
                started = started,
                record_count = report.record_count as u64
            );
            Ok(report)
        }
        Err(e) => {
            log_op_error!("export_all", e, started = started);
            Err(e)
        }
    }
}

/// Export one response as a Question/Answer workbook
///
/// # Errors
///
/// Propagates writer errors.
pub fn export_record<W>(
    record: &ResponseRecord,
    writer: &mut W,
    now: DateTime<Utc>,
) -> Result<ExportReport>
where
    W: SheetWriter + ?Sized,
{
    let started = Instant::now();
    log_op_start!("export_record", record_id = %record.id);

    let filename = export_filename(SINGLE_EXPORT_PREFIX, now);
    match writer.write(&filename, &Sheet::question_answer(record)) {
        Ok(path) => {
            log_op_end!("export_record", started = started, record_id = %record.id);
            Ok(ExportReport {
                filename,
                path,
                record_count: 1,
            })
        }
        Err(e) => {
            log_op_error!("export_record", e, started = started, record_id = %record.id);
            Err(e)
        }
    }
}

/// Look up a stored response by id and export it
///
/// # Errors
///
/// `NotFound` for an unknown id, otherwise as [`export_record`].
pub fn export_by_id<S, W>(
    store: &ResponseStore<S>,
    id: &str,
    writer: &mut W,
    now: DateTime<Utc>,
) -> Result<ExportReport>
where
    S: SlotStorage,
    W: SheetWriter + ?Sized,
{
    let record = store.find(id)?.ok_or_else(|| {
        ExError::from(SurveyError::RecordNotFound {
            record_id: id.to_string(),
        })
        .with_op("export_record")
    })?;
    export_record(&record, writer, now)
}

/// Delete every stored response after explicit confirmation
///
/// Returns how many responses were removed.
///
/// # Errors
///
/// `ConfirmationRequired` when declined (nothing is touched), otherwise
/// store errors.
pub fn clear_all<S: SlotStorage>(
    store: &mut ResponseStore<S>,
    confirmation: Confirmation,
) -> Result<usize> {
    if confirmation == Confirmation::Declined {
        tracing::info!(storage_key = %store.key(), "clear declined");
        return Err(SurveyError::ConfirmationRequired {
            action: "clear_all".to_string(),
        }
        .into());
    }

    let removed = store.len()?;
    store.clear()?;
    tracing::info!(storage_key = %store.key(), record_count = removed as u64, "all responses cleared");
    Ok(removed)
}
