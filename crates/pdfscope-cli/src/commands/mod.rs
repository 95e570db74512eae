pub mod analyze;
pub mod extract;

use pdfscope_core::error::ScopeError;
use std::path::Path;

/// Write UTF-8 content, mapping failures to OutputWrite so the message
/// names the destination path.
pub fn write_output(path: &Path, contents: &str) -> Result<(), ScopeError> {
    std::fs::write(path, contents).map_err(|e| ScopeError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
