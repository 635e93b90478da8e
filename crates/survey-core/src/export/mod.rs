//! Response export formatting
//!
//! Pure transformations from records to tabular shapes. Two presentation
//! policies coexist on purpose: the single-response question/answer view
//! shows `Not specified` for unanswered questions and drops blank comments,
//! while the bulk table leaves unanswered cells empty so every row has the
//! same columns.

pub mod filename;
pub mod rows;
pub mod sheet;
pub mod table;

pub use filename::{export_filename, BULK_EXPORT_PREFIX, SINGLE_EXPORT_PREFIX};
pub use rows::to_rows;
pub use sheet::Sheet;
pub use table::{to_table, Table};

use chrono::{DateTime, Utc};

/// Human-readable submission time used in exported cells
pub fn format_submitted_on(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
