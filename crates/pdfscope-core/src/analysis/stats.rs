use crate::analysis::tokenize::{estimate_paragraphs, estimate_sentences};
use crate::model::TextStatistics;
use std::collections::HashSet;

/// Derive aggregate statistics from the raw text and its token sequence.
///
/// Pure function of its inputs; counts are char-based, and both averages
/// fall back to 0.0 on empty input instead of dividing by zero.
pub fn aggregate(text: &str, tokens: &[String]) -> TextStatistics {
    let word_count = tokens.len();
    let unique_word_count = tokens.iter().collect::<HashSet<_>>().len();
    let char_count = text.chars().count();
    let char_count_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let sentence_count = estimate_sentences(text);
    let paragraph_count = estimate_paragraphs(text);

    let total_token_len: usize = tokens.iter().map(|t| t.chars().count()).sum();
    let avg_word_length = if word_count > 0 {
        total_token_len as f64 / word_count as f64
    } else {
        0.0
    };
    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    TextStatistics {
        word_count,
        unique_word_count,
        char_count,
        char_count_no_spaces,
        sentence_count,
        paragraph_count,
        avg_word_length,
        avg_sentence_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize::tokenize;

    #[test]
    fn test_word_count_matches_tokens() {
        let text = "The cat sat. The cat ran.";
        let tokens = tokenize(text);
        let stats = aggregate(text, &tokens);
        assert_eq!(stats.word_count, tokens.len());
        assert_eq!(stats.unique_word_count, 4);
        assert!(stats.unique_word_count <= stats.word_count);
    }

    #[test]
    fn test_char_counts() {
        let stats = aggregate("ab cd", &tokenize("ab cd"));
        assert_eq!(stats.char_count, 5);
        assert_eq!(stats.char_count_no_spaces, 4);
    }

    #[test]
    fn test_averages() {
        let text = "One two. Three four.";
        let stats = aggregate(text, &tokenize(text));
        assert_eq!(stats.sentence_count, 2);
        assert!((stats.avg_sentence_length - 2.0).abs() < f64::EPSILON);
        // one(3) two(3) three(5) four(4) -> 15 / 4
        assert!((stats.avg_word_length - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let stats = aggregate("", &[]);
        assert_eq!(stats, TextStatistics::default());
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let text = "Repeatable input. With two sentences.";
        let tokens = tokenize(text);
        assert_eq!(aggregate(text, &tokens), aggregate(text, &tokens));
    }
}
