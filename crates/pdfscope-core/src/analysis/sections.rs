use crate::model::SectionMatch;

/// A canonical section name and the heading variants that identify it.
#[derive(Debug, Clone, Copy)]
pub struct SectionPattern {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

/// Section headings commonly found in reports and papers.
///
/// Variants are matched against whole heading lines after normalization,
/// never against text inside a sentence.
pub static SECTION_PATTERNS: &[SectionPattern] = &[
    SectionPattern {
        name: "Abstract",
        variants: &["abstract", "summary", "executive summary"],
    },
    SectionPattern {
        name: "Introduction",
        variants: &["introduction", "overview", "background"],
    },
    SectionPattern {
        name: "Methodology",
        variants: &["method", "methods", "methodology", "approach", "procedure"],
    },
    SectionPattern {
        name: "Results",
        variants: &["results", "findings", "outcomes"],
    },
    SectionPattern {
        name: "Discussion",
        variants: &["discussion"],
    },
    SectionPattern {
        name: "Conclusion",
        variants: &["conclusion", "conclusions", "final remarks", "closing"],
    },
    SectionPattern {
        name: "References",
        variants: &["references", "bibliography", "citations", "works cited"],
    },
    SectionPattern {
        name: "Acknowledgments",
        variants: &["acknowledgments", "acknowledgements"],
    },
    SectionPattern {
        name: "Appendix",
        variants: &["appendix", "appendices"],
    },
];

/// Lines longer than this are never considered headings.
pub const MAX_HEADING_LEN: usize = 60;

/// Scan text line-by-line for section headings.
///
/// For each canonical section name only the first qualifying line is
/// recorded; the result is ordered by offset ascending. Headings split
/// across a page-break line boundary are not detected.
pub fn detect_sections(text: &str) -> Vec<SectionMatch> {
    detect_sections_with(text, SECTION_PATTERNS)
}

/// Same as [`detect_sections`] with an explicit pattern table.
pub fn detect_sections_with(text: &str, patterns: &[SectionPattern]) -> Vec<SectionMatch> {
    let mut found: Vec<Option<SectionMatch>> = vec![None; patterns.len()];
    let mut offset = 0usize;

    for line in text.split('\n') {
        if let Some(normalized) = normalize_heading(line) {
            for (i, pattern) in patterns.iter().enumerate() {
                if found[i].is_none() && pattern.variants.contains(&normalized.as_str()) {
                    found[i] = Some(SectionMatch {
                        name: pattern.name.to_string(),
                        heading: line.trim().to_string(),
                        offset,
                    });
                    break;
                }
            }
        }
        offset += line.len() + 1;
    }

    let mut matches: Vec<SectionMatch> = found.into_iter().flatten().collect();
    matches.sort_by_key(|m| m.offset);
    matches
}

/// Normalize a line for heading comparison, or None if the line is not
/// heading-like.
///
/// A heading-like line is short (<= MAX_HEADING_LEN chars trimmed), has
/// an optional enumeration prefix ("1.", "2.3", "4)") and optional
/// trailing colon/period, and contains no interior sentence punctuation.
fn normalize_heading(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_HEADING_LEN {
        return None;
    }

    let body = strip_enumeration(trimmed)
        .trim_end_matches([':', '.'])
        .trim();
    if body.is_empty() || body.chars().any(|c| matches!(c, '.' | '!' | '?')) {
        return None;
    }

    Some(
        body.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
    )
}

/// Strip a leading numbering marker like "1.", "2.3" or "4)" from a
/// heading candidate. The marker must contain a digit, so words are
/// never stripped.
fn strip_enumeration(s: &str) -> &str {
    let Some((first, rest)) = s.split_once(char::is_whitespace) else {
        return s;
    };
    let is_marker = first.chars().any(|c| c.is_ascii_digit())
        && first
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ')' | '('));
    if is_marker {
        rest.trim_start()
    } else {
        s
    }
}
