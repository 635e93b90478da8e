//! `.xlsx` workbook output via rust_xlsxwriter

use rust_xlsxwriter::{Workbook, XlsxError};
use std::fs;
use std::path::{Path, PathBuf};
use survey_core::errors::{ExError, SurveyError};
use survey_core::export::Sheet;
use survey_store::Result;

use super::SheetWriter;

/// Writes workbooks into a directory
///
/// Layout matches a JSON-objects-to-sheet conversion: row 0 holds the column
/// labels, the sheet's rows follow from row 1.
#[derive(Debug, Clone)]
pub struct XlsxSheetWriter {
    out_dir: PathBuf,
}

impl XlsxSheetWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn build(sheet: &Sheet) -> std::result::Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name.as_str())?;

        for (col, width) in sheet.widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }
        for (col, label) in sheet.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, label.as_str())?;
        }
        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                worksheet.write_string(row as u32 + 1, col as u16, cell.as_str())?;
            }
        }
        Ok(workbook)
    }
}

fn export_error(filename: &str, err: impl std::fmt::Display) -> ExError {
    ExError::from(SurveyError::Export {
        message: format!("{}: {}", filename, err),
    })
    .with_op("write_xlsx")
}

impl SheetWriter for XlsxSheetWriter {
    fn write(&mut self, filename: &str, sheet: &Sheet) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir).map_err(|e| export_error(filename, e))?;
        let path = self.out_dir.join(filename);

        let mut workbook = Self::build(sheet).map_err(|e| export_error(filename, e))?;
        workbook.save(&path).map_err(|e| export_error(filename, e))?;

        tracing::debug!(path = %path.display(), rows = sheet.rows.len() as u64, "workbook written");
        Ok(path)
    }
}
