use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no extractable text found in PDF. The document may be image-based or encrypted.")]
    NoExtractableText,

    #[error("failed to write {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
