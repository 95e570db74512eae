use pdfscope_core::error::ScopeError;
use pdfscope_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::commands::write_output;

pub fn run(input_file: PathBuf, out: Option<PathBuf>) -> Result<(), ScopeError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let (text, page_count) = pdfscope_core::extract_text(&pdf_bytes, &extractor)?;

    match out {
        Some(path) => {
            write_output(&path, &text)?;
            eprintln!(
                "Extracted {} page(s) to {}",
                page_count,
                path.display()
            );
        }
        None => println!("{text}"),
    }

    Ok(())
}
