use crate::analysis::sections::SECTION_PATTERNS;
use crate::model::AnalysisResult;

const LINE_WIDTH: usize = 80;

/// Render the analysis result as a fixed-layout plain-text report.
///
/// Purely presentational: deterministic for identical input, no analysis
/// logic. `document_name` and `path` are display metadata supplied by the
/// caller.
pub fn format_report(
    document_name: &str,
    path: &str,
    page_count: usize,
    result: &AnalysisResult,
) -> String {
    let banner = "=".repeat(LINE_WIDTH);
    let rule = "-".repeat(LINE_WIDTH);
    let stats = &result.statistics;

    let mut lines: Vec<String> = Vec::new();
    lines.push(banner.clone());
    lines.push("PDF ANALYSIS REPORT".to_string());
    lines.push(banner.clone());
    lines.push(String::new());
    lines.push(format!("Document: {document_name}"));
    lines.push(format!("Location: {path}"));
    lines.push(format!("Total Pages: {page_count}"));

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("CONTENT STATISTICS".to_string());
    lines.push(rule.clone());
    lines.push(format!("Total Words: {}", thousands(stats.word_count)));
    lines.push(format!(
        "Unique Words: {}",
        thousands(stats.unique_word_count)
    ));
    lines.push(format!("Total Characters: {}", thousands(stats.char_count)));
    lines.push(format!(
        "Characters (no spaces): {}",
        thousands(stats.char_count_no_spaces)
    ));
    lines.push(format!(
        "Estimated Sentences: {}",
        thousands(stats.sentence_count)
    ));
    lines.push(format!(
        "Estimated Paragraphs: {}",
        thousands(stats.paragraph_count)
    ));
    lines.push(format!(
        "Average Word Length: {:.2} characters",
        stats.avg_word_length
    ));
    lines.push(format!(
        "Average Sentence Length: {:.2} words",
        stats.avg_sentence_length
    ));

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("TOP 30 KEYWORDS (excluding common words)".to_string());
    lines.push(rule.clone());
    if result.top_words.is_empty() {
        lines.push("No keywords found.".to_string());
    } else {
        for (i, keyword) in result.top_words.iter().enumerate() {
            lines.push(format!(
                "{:2}. {:<20} - {:>4} occurrences",
                i + 1,
                keyword.word,
                keyword.count
            ));
        }
    }

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("DOCUMENT STRUCTURE".to_string());
    lines.push(rule.clone());
    if result.sections.is_empty() {
        lines.push("No standard section headers identified.".to_string());
    } else {
        lines.push("Identified Sections:".to_string());
        for section in &result.sections {
            lines.push(format!(
                "  * {}: \"{}\" at offset {}",
                section.name,
                section.heading,
                thousands(section.offset)
            ));
        }
        let missing: Vec<&str> = SECTION_PATTERNS
            .iter()
            .map(|p| p.name)
            .filter(|name| !result.sections.iter().any(|s| s.name == *name))
            .collect();
        if !missing.is_empty() {
            lines.push(format!("Not found: {}", missing.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("NUMERICAL DATA".to_string());
    lines.push(rule.clone());
    lines.push(format!(
        "Numbers Found: {}",
        thousands(result.numeric.number_count)
    ));
    lines.push(format!(
        "Date-like Strings: {}",
        thousands(result.numeric.date_count)
    ));
    if !result.numeric.years.is_empty() {
        let mut years = result.numeric.years.clone();
        years.sort();
        lines.push(format!("Years Mentioned: {}", years.join(", ")));
    }

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("TEXT PREVIEW (first 500 characters)".to_string());
    lines.push(rule);
    lines.push(result.preview.trim().to_string());
    if stats.char_count > result.preview.chars().count() {
        lines.push("...".to_string());
    }

    lines.push(String::new());
    lines.push(banner.clone());
    lines.push("END OF REPORT".to_string());
    lines.push(banner);

    lines.join("\n")
}

/// Format an integer with comma thousands separators.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
