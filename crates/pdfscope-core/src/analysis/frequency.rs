use crate::analysis::stopwords::STOP_WORDS;
use crate::model::Keyword;
use std::collections::HashMap;
use std::collections::HashSet;

/// Word-occurrence counts for one analysis run.
///
/// Each entry also records the index of the token's first occurrence in
/// the source sequence, which breaks ties when ranking equal counts.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    entries: HashMap<String, Entry>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    first_seen: usize,
}

impl WordFrequency {
    pub fn count(&self, word: &str) -> usize {
        self.entries.get(word).map(|e| e.count).unwrap_or(0)
    }

    pub fn unique_words(&self) -> usize {
        self.entries.len()
    }
}

/// Count every token, stop words included. Stop-word filtering only
/// happens at ranking time; aggregate word counts want all tokens.
pub fn count_frequencies(tokens: &[String]) -> WordFrequency {
    let mut entries: HashMap<String, Entry> = HashMap::new();
    for (i, token) in tokens.iter().enumerate() {
        entries
            .entry(token.clone())
            .and_modify(|e| e.count += 1)
            .or_insert(Entry {
                count: 1,
                first_seen: i,
            });
    }
    WordFrequency { entries }
}

/// Rank the most frequent words, excluding stop words and one-character
/// tokens. Ties are broken by first occurrence in the source text.
pub fn top_n(freq: &WordFrequency, n: usize) -> Vec<Keyword> {
    top_n_with(freq, &STOP_WORDS, n)
}

/// Same as [`top_n`] with an explicit stop-word set, so the filtering
/// logic can be exercised against a reduced set in tests.
pub fn top_n_with(freq: &WordFrequency, stop_words: &HashSet<&str>, n: usize) -> Vec<Keyword> {
    let mut ranked: Vec<(&String, &Entry)> = freq
        .entries
        .iter()
        .filter(|(word, _)| word.chars().count() > 1 && !stop_words.contains(word.as_str()))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| {
        b.count
            .cmp(&a.count)
            .then(a.first_seen.cmp(&b.first_seen))
    });
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(word, entry)| Keyword {
            word: word.clone(),
            count: entry.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_count_frequencies_includes_stop_words() {
        let freq = count_frequencies(&toks(&["the", "cat", "the"]));
        assert_eq!(freq.count("the"), 2);
        assert_eq!(freq.count("cat"), 1);
        assert_eq!(freq.unique_words(), 2);
    }

    #[test]
    fn test_top_n_excludes_stop_words_and_single_chars() {
        let freq = count_frequencies(&toks(&["the", "the", "the", "x", "x", "cat"]));
        let top = top_n(&freq, 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].word, "cat");
    }

    #[test]
    fn test_top_n_orders_by_count() {
        let freq = count_frequencies(&toks(&["rare", "common", "common"]));
        let top = top_n(&freq, 10);
        assert_eq!(top[0].word, "common");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].word, "rare");
    }

    #[test]
    fn test_top_n_tie_break_by_first_occurrence() {
        let freq = count_frequencies(&toks(&["zebra", "apple", "zebra", "apple"]));
        let top = top_n(&freq, 10);
        assert_eq!(top[0].word, "zebra");
        assert_eq!(top[1].word, "apple");
    }

    #[test]
    fn test_top_n_truncates() {
        let freq = count_frequencies(&toks(&["aa", "bb", "cc", "dd"]));
        assert_eq!(top_n(&freq, 2).len(), 2);
    }

    #[test]
    fn test_top_n_with_substitute_stop_set() {
        let freq = count_frequencies(&toks(&["foo", "bar"]));
        let stop: HashSet<&str> = ["foo"].into_iter().collect();
        let top = top_n_with(&freq, &stop, 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].word, "bar");
    }
}
