use std::path::PathBuf;
use survey_core::export::Sheet;
use survey_store::Result;

use super::SheetWriter;

/// Keeps written sheets in memory, for previews and tests
#[derive(Debug, Default)]
pub struct MemorySheetWriter {
    written: Vec<(String, Sheet)>,
}

impl MemorySheetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(filename, sheet)` written so far, oldest first
    pub fn written(&self) -> &[(String, Sheet)] {
        &self.written
    }

    pub fn last(&self) -> Option<&(String, Sheet)> {
        self.written.last()
    }
}

impl SheetWriter for MemorySheetWriter {
    fn write(&mut self, filename: &str, sheet: &Sheet) -> Result<PathBuf> {
        self.written.push((filename.to_string(), sheet.clone()));
        Ok(PathBuf::from(filename))
    }
}
