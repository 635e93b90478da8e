use crate::model::ResponseRecord;

use super::table::{Table, SUBMITTED_ON_COLUMN};
use super::{format_submitted_on, to_rows};

pub const SINGLE_SHEET_NAME: &str = "Survey Responses";
pub const BULK_SHEET_NAME: &str = "All Survey Responses";

/// Worksheet contents handed to a spreadsheet writer
///
/// Writers emit `columns` as the first sheet row, then `rows` in order, the
/// same layout a JSON-objects-to-sheet conversion produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Two-column Question/Answer sheet for one response, ending with the
    /// submission time
    pub fn question_answer(record: &ResponseRecord) -> Self {
        let mut rows: Vec<Vec<String>> = to_rows(record)
            .into_iter()
            .map(|(label, value)| vec![label, value])
            .collect();
        rows.push(vec![
            SUBMITTED_ON_COLUMN.to_string(),
            format_submitted_on(&record.timestamp),
        ]);

        Self {
            name: SINGLE_SHEET_NAME.to_string(),
            columns: vec!["Question".to_string(), "Answer".to_string()],
            widths: vec![20, 50],
            rows,
        }
    }

    /// Bulk sheet, header data row included
    pub fn from_table(table: Table) -> Self {
        Self {
            name: BULK_SHEET_NAME.to_string(),
            columns: table.columns,
            widths: table.widths,
            rows: table.rows,
        }
    }
}
