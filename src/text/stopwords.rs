// Stop-word sets excluded from every token sequence.
//
// The classic set is the short list the detector has always used. The
// extended set adds the English list shipped with the `stop-words` crate for
// users who want function words like "was" or "with" ignored too.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use stop_words::{get, LANGUAGE};

/// The twelve words ignored by default.
pub const CLASSIC_STOP_WORDS: [&str; 12] = [
    "a", "an", "the", "is", "in", "of", "and", "to", "has", "it", "this", "for",
];

/// Which stop-word list to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWordList {
    #[default]
    Classic,
    Extended,
}

impl StopWordList {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopWordList::Classic => "classic",
            StopWordList::Extended => "extended",
        }
    }
}

impl fmt::Display for StopWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StopWordList {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(StopWordList::Classic),
            "extended" => Ok(StopWordList::Extended),
            other => anyhow::bail!("unknown stop-word list '{other}' (expected classic or extended)"),
        }
    }
}

/// An immutable set of lowercase stop words.
///
/// Built once at startup and handed by reference to the tokenizer and the
/// word verifier.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn classic() -> Self {
        Self {
            words: CLASSIC_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Classic words plus the `stop-words` crate's English list.
    pub fn extended() -> Self {
        let mut words: HashSet<String> =
            CLASSIC_STOP_WORDS.iter().map(|w| w.to_string()).collect();
        words.extend(get(LANGUAGE::English).into_iter().map(|w| w.to_lowercase()));
        Self { words }
    }

    pub fn from_list(list: StopWordList) -> Self {
        match list {
            StopWordList::Classic => Self::classic(),
            StopWordList::Extended => Self::extended(),
        }
    }

    /// Expects an already-normalized (lowercase) word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::classic()
    }
}
