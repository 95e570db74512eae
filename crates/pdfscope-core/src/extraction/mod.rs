pub mod pdftotext;

use crate::error::ScopeError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// Rejoin the page's lines into a single block of text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ScopeError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
