// Unit tests for similarity and word verification.
//
// Covers the algebraic properties of the Jaccard score (symmetry, identity,
// the empty case) and the stop-word short-circuit in word lookup.

use plagiarism_detector::analysis::jaccard::{
    common_words, jaccard_similarity, Decision, DEFAULT_THRESHOLD,
};
use plagiarism_detector::analysis::verify::verify_word;
use plagiarism_detector::text::stopwords::StopWords;
use plagiarism_detector::text::tokenizer::{tokenize, TokenSequence};

fn seq(words: &[&str]) -> TokenSequence {
    TokenSequence::from(words.to_vec())
}

fn sample_pairs() -> Vec<(TokenSequence, TokenSequence)> {
    vec![
        (seq(&["cat", "sat", "cat", "ran"]), seq(&["cat", "ran", "far"])),
        (seq(&["alpha", "beta"]), seq(&["gamma"])),
        (seq(&[]), seq(&["solo"])),
        (seq(&[]), seq(&[])),
        (
            seq(&["one", "two", "three", "four", "five"]),
            seq(&["five", "four", "six", "one", "one"]),
        ),
    ]
}

// ============================================================
// Jaccard properties
// ============================================================

#[test]
fn jaccard_is_symmetric() {
    for (a, b) in sample_pairs() {
        let ab = jaccard_similarity(&a, &b);
        let ba = jaccard_similarity(&b, &a);
        assert!((ab.percent - ba.percent).abs() < 1e-12);
        assert_eq!(ab.common_words, ba.common_words);
    }
}

#[test]
fn jaccard_with_itself_is_hundred_when_non_empty() {
    for (a, _) in sample_pairs() {
        let result = jaccard_similarity(&a, &a);
        if a.is_empty() {
            assert_eq!(result.percent, 0.0);
        } else {
            assert!((result.percent - 100.0).abs() < 1e-9);
        }
    }
}

#[test]
fn jaccard_of_two_empty_sequences_is_zero() {
    let result = jaccard_similarity(&seq(&[]), &seq(&[]));
    assert_eq!(result.percent, 0.0);
    assert!(result.common_words.is_empty());
}

#[test]
fn jaccard_stays_in_range() {
    for (a, b) in sample_pairs() {
        let p = jaccard_similarity(&a, &b).percent;
        assert!((0.0..=100.0).contains(&p), "out of range: {p}");
    }
}

#[test]
fn common_words_symmetric_and_subset() {
    for (a, b) in sample_pairs() {
        let ab = common_words(&a, &b);
        let ba = common_words(&b, &a);
        assert_eq!(ab, ba);

        let set_a = a.unique();
        let set_b = b.unique();
        for w in &ab {
            assert!(set_a.contains(w.as_str()));
            assert!(set_b.contains(w.as_str()));
        }
    }
}

#[test]
fn duplicates_do_not_change_score() {
    let once = jaccard_similarity(&seq(&["cat", "dog"]), &seq(&["cat"]));
    let many = jaccard_similarity(&seq(&["cat", "cat", "dog", "dog"]), &seq(&["cat", "cat"]));
    assert!((once.percent - many.percent).abs() < 1e-12);
}

#[test]
fn scenario_cat_essays_from_raw_text() {
    let stop_words = StopWords::classic();
    let a = tokenize("The cat sat. The cat ran.", &stop_words);
    let b = tokenize("A cat ran far.", &stop_words);

    let result = jaccard_similarity(&a, &b);
    assert!((result.percent - 50.0).abs() < 1e-9);
    let common: Vec<&str> = result.common_words.iter().map(String::as_str).collect();
    assert_eq!(common, vec!["cat", "ran"]);
    assert_eq!(
        Decision::from_percent(result.percent, DEFAULT_THRESHOLD),
        Decision::LikelySimilar
    );
}

// ============================================================
// Word verification
// ============================================================

#[test]
fn scenario_verify_cat_counts_two() {
    let tokens = tokenize("The cat sat. The cat ran.", &StopWords::classic());
    let v = verify_word("cat", &tokens, &StopWords::classic());
    assert_eq!(v.count, 2);
}

#[test]
fn verifying_a_stop_word_is_always_zero() {
    let stop_words = StopWords::classic();
    let tokens = tokenize("the the the the cat", &stop_words);
    for word in ["the", "THE", " and ", "It"] {
        let v = verify_word(word, &tokens, &stop_words);
        assert_eq!(v.count, 0, "{word}");
        assert!(v.is_stop_word);
    }
}

#[test]
fn verification_is_case_insensitive_and_trimmed() {
    let tokens = seq(&["essay", "essay", "draft"]);
    let v = verify_word("\tEssay  ", &tokens, &StopWords::classic());
    assert_eq!(v.word, "essay");
    assert_eq!(v.count, 2);
}

#[test]
fn absent_word_is_zero_not_error() {
    let v = verify_word("missing", &seq(&["cat"]), &StopWords::classic());
    assert_eq!(v.count, 0);
    assert!(!v.is_stop_word);
}
