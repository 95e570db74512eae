use pdfscope_core::error::ScopeError;
use pdfscope_core::extraction::pdftotext::PdftotextExtractor;
use pdfscope_core::report::format_report;
use std::path::PathBuf;

use crate::commands::write_output;

pub fn run(
    input_file: PathBuf,
    output: Option<PathBuf>,
    extract_text: Option<PathBuf>,
    format: &str,
) -> Result<(), ScopeError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();

    eprintln!("Analyzing {}...", input_file.display());
    let doc = pdfscope_core::analyze_pdf(&pdf_bytes, &extractor)?;

    let document_name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_file.display().to_string());
    let location = std::fs::canonicalize(&input_file)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| input_file.display().to_string());

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&doc.analysis)?,
        _ => format_report(&document_name, &location, doc.page_count, &doc.analysis),
    };

    // Console first: a failed file write below must not take the report
    // away from the user.
    println!("{rendered}");

    if let Some(path) = output {
        write_output(&path, &rendered)?;
        eprintln!("Report saved to {}", path.display());
    }

    if let Some(path) = extract_text {
        write_output(&path, &doc.text)?;
        eprintln!("Extracted text saved to {}", path.display());
    }

    Ok(())
}
