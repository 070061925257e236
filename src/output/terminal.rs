// Terminal formatting for verification and similarity results.
//
// The session controller produces plain `(Tone, String)` lines; this module
// decides what those lines say and how each tone is colored when it reaches
// a real terminal.

use colored::{ColoredString, Colorize};

use crate::analysis::jaccard::{Decision, SimilarityResult};
use crate::analysis::verify::Verification;

use super::preview_list;

/// How many common words the terminal summary lists before eliding.
pub const COMMON_WORDS_PREVIEW: usize = 50;

/// Visual weight of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Plain,
    Success,
    Warning,
    Error,
}

/// Apply the terminal color for `tone`.
pub fn paint(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Heading => text.bold(),
        Tone::Plain => text.normal(),
        Tone::Success => text.bright_green(),
        Tone::Warning => text.yellow(),
        Tone::Error => text.red().bold(),
    }
}

/// One line describing a word lookup.
pub fn verification_line(v: &Verification) -> (Tone, String) {
    if v.is_stop_word {
        (Tone::Warning, format!("\"{}\" is a stop word.", v.word))
    } else if v.count > 0 {
        (
            Tone::Success,
            format!("\"{}\" is present in the essay {} time(s).", v.word, v.count),
        )
    } else {
        (Tone::Plain, format!("\"{}\" is not present in the essay.", v.word))
    }
}

/// Similarity percentage, decision, and a preview of the shared words.
pub fn similarity_lines(result: &SimilarityResult, threshold: f64) -> Vec<(Tone, String)> {
    let decision = Decision::from_percent(result.percent, threshold);
    let decision_line = match decision {
        Decision::LikelySimilar => (
            Tone::Error,
            format!("Decision: Similarity is likely (>= {threshold}%)."),
        ),
        Decision::BelowThreshold => (
            Tone::Success,
            format!("Decision: Similarity below {threshold}% (< {threshold}%)."),
        ),
    };

    let words_line = if result.common_words.is_empty() {
        (Tone::Plain, "(No common meaningful words found)".to_string())
    } else {
        (
            Tone::Plain,
            preview_list(result.common_words.iter(), COMMON_WORDS_PREVIEW),
        )
    };

    vec![
        (
            Tone::Heading,
            format!("Jaccard Similarity: {:.2}%", result.percent),
        ),
        decision_line,
        (
            Tone::Heading,
            format!("Common words ({}):", result.common_words.len()),
        ),
        words_line,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_verification_lines() {
        let mut v = Verification {
            word: "cat".to_string(),
            count: 2,
            is_stop_word: false,
        };
        assert_eq!(
            verification_line(&v).1,
            "\"cat\" is present in the essay 2 time(s)."
        );
        v.count = 0;
        assert_eq!(verification_line(&v).1, "\"cat\" is not present in the essay.");
        v.word = "the".to_string();
        v.is_stop_word = true;
        assert_eq!(verification_line(&v), (Tone::Warning, "\"the\" is a stop word.".to_string()));
    }

    #[test]
    fn test_similarity_lines_above_threshold() {
        let result = SimilarityResult {
            percent: 50.0,
            common_words: ["ran", "cat"].iter().map(|s| s.to_string()).collect(),
        };
        let lines = similarity_lines(&result, 50.0);
        assert_eq!(lines[0].1, "Jaccard Similarity: 50.00%");
        assert!(lines[1].1.contains("likely"));
        assert_eq!(lines[2].1, "Common words (2):");
        assert_eq!(lines[3].1, "cat, ran");
    }

    #[test]
    fn test_similarity_lines_no_common_words() {
        let result = SimilarityResult {
            percent: 0.0,
            common_words: BTreeSet::new(),
        };
        let lines = similarity_lines(&result, 50.0);
        assert!(lines[1].1.contains("below"));
        assert_eq!(lines[3].1, "(No common meaningful words found)");
    }
}
