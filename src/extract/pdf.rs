//! PDF text extraction backends.

use std::path::Path;

use lopdf::Document;

use crate::error::Result;

/// Source of the full text of a PDF file, pages in document order.
pub trait PdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Extracts text with lopdf. Only text drawn with text operators is found;
/// scanned pages come back empty.
pub struct LopdfTextSource;

impl PdfTextSource for LopdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let document = Document::load(path)?;
        let pages: Vec<u32> = document.get_pages().keys().copied().collect();
        if pages.is_empty() {
            log::debug!("{} has no pages", path.display());
            return Ok(String::new());
        }

        let text = document.extract_text(&pages)?;
        log::debug!(
            "extracted {} chars from {} page(s) of {}",
            text.chars().count(),
            pages.len(),
            path.display()
        );
        Ok(text)
    }
}
