use serde::{Deserialize, Serialize};

/// A keyword surviving stop-word filtering, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

/// A structural section heading detected in the document text.
///
/// `offset` is the byte offset of the matched line within the full text,
/// an approximate position intended for ordering and navigation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMatch {
    pub name: String,
    pub heading: String,
    pub offset: usize,
}

/// Counts of numeric material found in the text.
///
/// `years` preserves first-occurrence order with duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericFindings {
    pub number_count: usize,
    pub years: Vec<String>,
    pub date_count: usize,
}

/// Aggregate descriptive statistics over the document text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub word_count: usize,
    pub unique_word_count: usize,
    pub char_count: usize,
    pub char_count_no_spaces: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
}

/// Everything derived from one analysis run over a document's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub statistics: TextStatistics,
    pub top_words: Vec<Keyword>,
    pub sections: Vec<SectionMatch>,
    pub numeric: NumericFindings,
    /// First 500 characters of the extracted text.
    pub preview: String,
}

/// An analyzed document: extraction output plus the analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub page_count: usize,
    /// Full extracted text, kept so callers can persist it verbatim.
    pub text: String,
    pub analysis: AnalysisResult,
}
