//! Survey Engine - Orchestration layer
//!
//! Coordinates intake, the response store, notification and spreadsheet
//! output: the operations a front end or the CLI actually calls.

pub mod commands;
pub mod sheet;

pub use commands::admin::{
    clear_all, export_all, export_by_id, export_record, Confirmation, ExportReport,
};
pub use commands::submit::{submit, DispatchOutcome, NotifyTarget, Submission};
pub use sheet::{MemorySheetWriter, SheetWriter, XlsxSheetWriter};
