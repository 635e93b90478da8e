use crate::catalog::FIELDS;
use crate::model::ResponseRecord;

use super::format_submitted_on;

pub const RESPONSE_ID_COLUMN: &str = "Response ID";
pub const SUBMITTED_ON_COLUMN: &str = "Submitted On";

const RESPONSE_ID_WIDTH: u16 = 15;
const SUBMITTED_ON_WIDTH: u16 = 20;

/// Row-per-response table with a fixed column schema
///
/// `rows[0]` is a header row whose cells repeat the column names. It is part
/// of the data, not metadata: spreadsheets produced by earlier versions
/// carry it and downstream sheets expect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of rows including the header row
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows (excluding the header row)
    pub fn record_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Cell at `row` under `column`
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

/// Build the bulk table for `records`, preserving their order
///
/// Columns are `Response ID`, `Submitted On`, then every catalog question.
/// Unanswered questions (comments included) are empty cells.
pub fn to_table(records: &[ResponseRecord]) -> Table {
    let mut columns = vec![
        RESPONSE_ID_COLUMN.to_string(),
        SUBMITTED_ON_COLUMN.to_string(),
    ];
    columns.extend(FIELDS.iter().map(|f| f.column.to_string()));

    let mut widths = vec![RESPONSE_ID_WIDTH, SUBMITTED_ON_WIDTH];
    widths.extend(FIELDS.iter().map(|f| f.width));

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(columns.clone());
    rows.extend(records.iter().map(|record| {
        let mut row = Vec::with_capacity(columns.len());
        row.push(record.id.to_string());
        row.push(format_submitted_on(&record.timestamp));
        row.extend(
            FIELDS
                .iter()
                .map(|f| record.data.display(f.key).unwrap_or_default()),
        );
        row
    }));

    Table {
        columns,
        widths,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormFields;

    #[test]
    fn test_header_row_repeats_column_names() {
        let records: Vec<_> = (0..3)
            .map(|i| ResponseRecord::new(FormFields::new().with("grade", i.to_string())))
            .collect();
        let table = to_table(&records);

        assert_eq!(table.len(), 4);
        assert_eq!(table.record_count(), 3);
        assert_eq!(table.rows[0], table.columns);
        assert_eq!(table.columns.len(), 21);
        assert_eq!(table.widths.len(), table.columns.len());
    }

    #[test]
    fn test_rows_follow_record_order() {
        let records: Vec<_> = ["9", "10", "11"]
            .iter()
            .map(|g| ResponseRecord::new(FormFields::new().with("grade", *g)))
            .collect();
        let table = to_table(&records);

        assert_eq!(table.cell(1, "Grade Level"), Some("9"));
        assert_eq!(table.cell(2, "Grade Level"), Some("10"));
        assert_eq!(table.cell(3, "Grade Level"), Some("11"));
        assert_eq!(
            table.cell(1, RESPONSE_ID_COLUMN),
            Some(records[0].id.to_string().as_str())
        );
    }

    #[test]
    fn test_missing_cells_are_empty() {
        let record = ResponseRecord::new(
            FormFields::new()
                .with("age", "15-17")
                .with("favoriteSubjects", vec!["Math", "Art"]),
        );
        let table = to_table(&[record]);

        assert_eq!(table.cell(1, "Favorite Subjects"), Some("Math, Art"));
        assert_eq!(table.cell(1, "Grade Level"), Some(""));
        assert_eq!(table.cell(1, "Suggestions"), Some(""));
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let table = to_table(&[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.record_count(), 0);
    }
}
