pub mod frequency;
pub mod numbers;
pub mod sections;
pub mod stats;
pub mod stopwords;
pub mod tokenize;

use crate::model::AnalysisResult;
use log::debug;

/// Keyword ranking depth of the analysis result.
pub const TOP_WORDS_LIMIT: usize = 30;

/// Characters of raw text retained as preview.
pub const PREVIEW_CHARS: usize = 500;

/// Run the full analysis pipeline over extracted text.
///
/// Total over all inputs: empty text produces an all-zero result with
/// empty collections, never an error.
pub fn analyze_text(text: &str) -> AnalysisResult {
    let tokens = tokenize::tokenize(text);
    debug!("tokenized {} word(s)", tokens.len());

    let statistics = stats::aggregate(text, &tokens);
    let freq = frequency::count_frequencies(&tokens);
    let top_words = frequency::top_n(&freq, TOP_WORDS_LIMIT);
    let sections = sections::detect_sections(text);
    debug!("detected {} section heading(s)", sections.len());
    let numeric = numbers::extract_numbers(text);
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();

    AnalysisResult {
        statistics,
        top_words,
        sections,
        numeric,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_well_formed_result() {
        let result = analyze_text("");
        assert_eq!(result.statistics.word_count, 0);
        assert_eq!(result.statistics.unique_word_count, 0);
        assert_eq!(result.statistics.avg_sentence_length, 0.0);
        assert!(result.top_words.is_empty());
        assert!(result.sections.is_empty());
        assert_eq!(result.numeric.number_count, 0);
        assert!(result.numeric.years.is_empty());
        assert_eq!(result.preview, "");
    }

    #[test]
    fn test_preview_truncated_to_limit() {
        let text = "x".repeat(PREVIEW_CHARS + 100);
        let result = analyze_text(&text);
        assert_eq!(result.preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_word_count_includes_stop_words() {
        let result = analyze_text("the quick brown fox");
        assert_eq!(result.statistics.word_count, 4);
        // "the" is counted in word_count but never ranked
        assert!(result.top_words.iter().all(|k| k.word != "the"));
    }
}
