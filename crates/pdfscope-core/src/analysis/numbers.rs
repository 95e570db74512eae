use crate::model::NumericFindings;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Standalone integers and decimals; word boundaries keep digits embedded
/// in alphanumeric tokens (e.g. "ISO9001") from matching.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("valid number pattern"));

/// Four-digit sequences in the plausible calendar range 1000-2999.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[12]\d{3}\b").expect("valid year pattern"));

/// Date-like substrings. Each pattern is evaluated independently; adding
/// a new date format means adding a row here, not touching the scan.
static DATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 15/03/2020, 15-3-98
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
        // 2020-03-15
        r"\b\d{4}-\d{1,2}-\d{1,2}\b",
        // March 15, 2020
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},\s*\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid date pattern"))
    .collect()
});

/// Find numeric material in the text.
///
/// The three categories are independent passes: a year inside a date
/// counts as a number, a year and part of a date-like match.
pub fn extract_numbers(text: &str) -> NumericFindings {
    let number_count = NUMBER_RE.find_iter(text).count();

    let mut years = Vec::new();
    let mut seen = HashSet::new();
    for m in YEAR_RE.find_iter(text) {
        if seen.insert(m.as_str()) {
            years.push(m.as_str().to_string());
        }
    }

    let date_count = DATE_RES.iter().map(|re| re.find_iter(text).count()).sum();

    NumericFindings {
        number_count,
        years,
        date_count,
    }
}
