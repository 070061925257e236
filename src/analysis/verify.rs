// Single-word occurrence lookup against one essay's tokens.

use crate::text::stopwords::StopWords;
use crate::text::tokenizer::TokenSequence;

/// Outcome of looking up one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// The query after trimming and lowercasing
    pub word: String,
    pub count: usize,
    /// The query is a stop word, so it can never appear in a token sequence
    pub is_stop_word: bool,
}

/// Count how often `query` appears in `tokens`.
///
/// Never fails: stop words, blank queries, and empty sequences all yield 0.
pub fn verify_word(query: &str, tokens: &TokenSequence, stop_words: &StopWords) -> Verification {
    let word = query.trim().to_lowercase();

    if stop_words.contains(&word) {
        return Verification {
            word,
            count: 0,
            is_stop_word: true,
        };
    }

    let count = if word.is_empty() { 0 } else { tokens.count(&word) };

    Verification {
        word,
        count,
        is_stop_word: false,
    }
}
