// Text normalization: raw essay text in, meaningful words out.
//
// Steps, in order: lowercase, drop every character that is neither a word
// character (alphanumeric or underscore) nor whitespace, split on whitespace,
// discard stop words. Word order and duplicates are kept so that occurrence
// counts stay meaningful.

use std::collections::HashSet;

use super::stopwords::StopWords;

/// An ordered sequence of normalized words, duplicates retained.
///
/// An empty sequence is a valid result (empty or all-stop-word document).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    words: Vec<String>,
}

impl TokenSequence {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of exact matches of `word`, duplicates counted.
    pub fn count(&self, word: &str) -> usize {
        self.words.iter().filter(|w| *w == word).count()
    }

    /// Distinct words, order discarded.
    pub fn unique(&self) -> HashSet<&str> {
        self.iter().collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<&str>> for TokenSequence {
    fn from(words: Vec<&str>) -> Self {
        Self::new(words.into_iter().map(str::to_string).collect())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize `text` into a token sequence, dropping stop words.
pub fn tokenize(text: &str, stop_words: &StopWords) -> TokenSequence {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    let words = cleaned
        .split_whitespace()
        .filter(|w| !stop_words.contains(w))
        .map(str::to_string)
        .collect();

    TokenSequence { words }
}
