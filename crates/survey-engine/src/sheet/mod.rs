//! Spreadsheet output

mod memory;
mod xlsx;

pub use memory::MemorySheetWriter;
pub use xlsx::XlsxSheetWriter;

use std::path::PathBuf;
use survey_core::export::Sheet;
use survey_store::Result;

/// Destination for exported worksheets
pub trait SheetWriter {
    /// Write `sheet` as a one-sheet workbook called `filename`
    ///
    /// Returns the location written to.
    fn write(&mut self, filename: &str, sheet: &Sheet) -> Result<PathBuf>;
}
