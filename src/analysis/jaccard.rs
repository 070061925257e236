// Set-based Jaccard similarity between two token sequences.
//
// Both sequences are collapsed to sets of distinct words. The score is
//
//   |A ∩ B| / |A ∪ B| * 100
//
// which gives 0.0 for no shared vocabulary and 100.0 for identical
// vocabularies. Word frequency plays no part.

use std::collections::BTreeSet;
use std::fmt;

use crate::text::tokenizer::TokenSequence;

/// Default cut-off for the "likely similar" decision, in percent.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Similarity percentage plus the shared vocabulary behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    /// 0.0 to 100.0
    pub percent: f64,
    /// Distinct shared words, lexicographically ordered
    pub common_words: BTreeSet<String>,
}

/// Distinct words present in both sequences.
pub fn common_words(a: &TokenSequence, b: &TokenSequence) -> BTreeSet<String> {
    let set_b = b.unique();
    a.unique()
        .into_iter()
        .filter(|w| set_b.contains(w))
        .map(str::to_string)
        .collect()
}

/// Compute Jaccard similarity between two token sequences.
///
/// Two empty sequences have an empty union; that case is defined as 0.0.
pub fn jaccard_similarity(a: &TokenSequence, b: &TokenSequence) -> SimilarityResult {
    let set_a = a.unique();
    let set_b = b.unique();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        return SimilarityResult {
            percent: 0.0,
            common_words: BTreeSet::new(),
        };
    }

    let common = common_words(a, b);
    let percent = common.len() as f64 / union as f64 * 100.0;

    SimilarityResult {
        percent,
        common_words: common,
    }
}

/// Presentation label for a similarity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    LikelySimilar,
    BelowThreshold,
}

impl Decision {
    pub fn from_percent(percent: f64, threshold: f64) -> Self {
        if percent >= threshold {
            Decision::LikelySimilar
        } else {
            Decision::BelowThreshold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::LikelySimilar => "likely similar",
            Decision::BelowThreshold => "below threshold",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
