/// Split raw text into lowercased word tokens.
///
/// Chunks are separated by whitespace; non-alphanumeric characters are
/// stripped from chunk boundaries (interior punctuation such as hyphens
/// and apostrophes is kept). Empty results are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|chunk| {
            chunk
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Estimate the number of sentences in the text.
///
/// Counts runs of sentence-terminating punctuation (`.` `!` `?`) so that
/// an ellipsis or "?!" counts once, with a floor of 1 for non-blank text.
pub fn estimate_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                count += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }

    if count == 0 && !text.trim().is_empty() {
        1
    } else {
        count
    }
}

/// Estimate the number of paragraphs: blocks of non-blank lines separated
/// by one or more blank lines. Non-blank text always yields at least 1.
pub fn estimate_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_block = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_block = false;
        } else if !in_block {
            count += 1;
            in_block = true;
        }
    }
    count
}
