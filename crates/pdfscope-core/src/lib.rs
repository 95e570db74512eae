pub mod analysis;
pub mod error;
pub mod extraction;
pub mod model;
pub mod report;

use error::ScopeError;
use extraction::PdfExtractor;
use log::info;
use model::DocumentAnalysis;

pub use analysis::analyze_text;

/// Extract the full text of a PDF, returning (text, page count).
///
/// Fails with [`ScopeError::NoExtractableText`] when the document yields
/// only whitespace (image-only pages, or encrypted content the backend
/// could not decode).
pub fn extract_text(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<(String, usize), ScopeError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let page_count = pages.len();
    info!(
        "extracted {} page(s) via {}",
        page_count,
        extractor.backend_name()
    );

    let text = pages
        .iter()
        .map(|p| p.text())
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        return Err(ScopeError::NoExtractableText);
    }

    Ok((text, page_count))
}

/// Main API entry point: extract a PDF's text and run the full analysis
/// pipeline over it.
///
/// Extraction failures surface as errors; once text is obtained the
/// analysis itself cannot fail.
pub fn analyze_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<DocumentAnalysis, ScopeError> {
    let (text, page_count) = extract_text(pdf_bytes, extractor)?;
    let analysis = analysis::analyze_text(&text);

    Ok(DocumentAnalysis {
        page_count,
        text,
        analysis,
    })
}
