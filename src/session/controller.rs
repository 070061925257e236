// Session state machine.
//
//   Start -> LocatingDocuments -> Tokenizing -> VerifyingWord
//         -> AwaitAnalysisConfirmation -> Analyzing
//         -> AwaitSaveConfirmation -> Saving -> End
//
// Each state carries the data the next one needs. Every failure or decline
// jumps straight to End with an outcome; no state is ever revisited.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::analysis::jaccard::{jaccard_similarity, SimilarityResult};
use crate::analysis::verify::{verify_word, Verification};
use crate::config::Config;
use crate::documents::locator::{describe_dirs, Locator};
use crate::documents::{Document, FIRST_ESSAY, SECOND_ESSAY};
use crate::output::report::ReportWriter;
use crate::output::terminal::{similarity_lines, verification_line, Tone};
use crate::text::stopwords::StopWords;
use crate::text::tokenizer::TokenSequence;

use super::console::Console;

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// One or both essays were missing (logical names listed)
    DocumentsNotFound(Vec<String>),
    /// An essay existed but could not be read
    ReadFailed(String),
    /// The user declined the similarity analysis
    AnalysisDeclined(Verification),
    /// Analysis ran but the user declined to save
    SaveDeclined(SimilarityResult),
    Saved(PathBuf),
    SaveFailed(String),
}

enum State {
    Start,
    LocatingDocuments,
    Tokenizing {
        first: Document,
        second: Document,
    },
    VerifyingWord {
        first: TokenSequence,
        second: TokenSequence,
    },
    AwaitAnalysisConfirmation {
        first: TokenSequence,
        second: TokenSequence,
        verification: Verification,
    },
    Analyzing {
        first: TokenSequence,
        second: TokenSequence,
        verification: Verification,
    },
    AwaitSaveConfirmation {
        verification: Verification,
        similarity: SimilarityResult,
    },
    Saving {
        verification: Verification,
        similarity: SimilarityResult,
    },
    End(SessionOutcome),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Start => "start",
            State::LocatingDocuments => "locating_documents",
            State::Tokenizing { .. } => "tokenizing",
            State::VerifyingWord { .. } => "verifying_word",
            State::AwaitAnalysisConfirmation { .. } => "await_analysis_confirmation",
            State::Analyzing { .. } => "analyzing",
            State::AwaitSaveConfirmation { .. } => "await_save_confirmation",
            State::Saving { .. } => "saving",
            State::End(_) => "end",
        }
    }
}

/// One comparison run over a pair of essays.
pub struct Session {
    locator: Locator,
    stop_words: StopWords,
    writer: ReportWriter,
    threshold: f64,
    first_name: String,
    second_name: String,
}

impl Session {
    pub fn new(
        locator: Locator,
        stop_words: StopWords,
        writer: ReportWriter,
        threshold: f64,
    ) -> Self {
        Self {
            locator,
            stop_words,
            writer,
            threshold,
            first_name: FIRST_ESSAY.to_string(),
            second_name: SECOND_ESSAY.to_string(),
        }
    }

    /// Build every component from the loaded configuration.
    pub fn from_config(config: &Config, writer: ReportWriter) -> Self {
        Self::new(
            Locator::from_config(config),
            StopWords::from_list(config.stop_words),
            writer,
            config.threshold,
        )
    }

    /// Compare essays under names other than `essay1.txt` / `essay2.txt`.
    pub fn with_document_names(mut self, first: &str, second: &str) -> Self {
        self.first_name = first.to_string();
        self.second_name = second.to_string();
        self
    }

    /// Drive the state machine from Start to End.
    pub fn run(&self, console: &mut dyn Console) -> SessionOutcome {
        let mut state = State::Start;
        loop {
            tracing::debug!(state = state.name(), "Session step");
            state = match state {
                State::End(outcome) => {
                    info!(?outcome, "Session finished");
                    return outcome;
                }
                other => self.step(other, console),
            };
        }
    }

    fn step(&self, state: State, console: &mut dyn Console) -> State {
        match state {
            State::Start => {
                console.loading("Loading");
                console.show(Tone::Heading, "=== Plagiarism Detector ===");
                State::LocatingDocuments
            }

            State::LocatingDocuments => {
                let first = Document::locate(&self.first_name, &self.locator);
                let second = Document::locate(&self.second_name, &self.locator);

                let where_ = describe_dirs(self.locator.search_dirs());
                let missing: Vec<String> = [&first, &second]
                    .into_iter()
                    .filter(|d| !d.is_found())
                    .map(|d| d.name.clone())
                    .collect();

                if missing.is_empty() {
                    return State::Tokenizing { first, second };
                }

                for name in &missing {
                    console.show(Tone::Error, &format!("[Error] {name} not found in {where_}."));
                }
                console.show(
                    Tone::Plain,
                    &format!(
                        "Please place {} and {} in {where_}, then run again.",
                        self.first_name, self.second_name
                    ),
                );
                State::End(SessionOutcome::DocumentsNotFound(missing))
            }

            State::Tokenizing { first, second } => {
                let loaded = first
                    .load_tokens(&self.stop_words)
                    .and_then(|a| second.load_tokens(&self.stop_words).map(|b| (a, b)));

                match loaded {
                    Ok((first, second)) => State::VerifyingWord { first, second },
                    Err(e) => {
                        console.show(Tone::Error, &format!("[Error] {e}"));
                        console.show(Tone::Plain, "Error processing files. Exiting.");
                        State::End(SessionOutcome::ReadFailed(e.to_string()))
                    }
                }
            }

            State::VerifyingWord { first, second } => {
                let query = console.ask_word("Enter a word to verify: ");
                console.loading("Verifying word");
                let verification = verify_word(&query, &first, &self.stop_words);
                info!(word = %verification.word, count = verification.count, "Word verified");

                let (tone, line) = verification_line(&verification);
                console.show(tone, &line);

                State::AwaitAnalysisConfirmation {
                    first,
                    second,
                    verification,
                }
            }

            State::AwaitAnalysisConfirmation {
                first,
                second,
                verification,
            } => {
                if console.confirm("Do you want to proceed with similarity analysis?") {
                    State::Analyzing {
                        first,
                        second,
                        verification,
                    }
                } else {
                    console.show(
                        Tone::Warning,
                        "No similarity analysis was done, so there is nothing to save.",
                    );
                    console.loading("Exiting");
                    State::End(SessionOutcome::AnalysisDeclined(verification))
                }
            }

            State::Analyzing {
                first,
                second,
                verification,
            } => {
                console.loading("Analyzing similarities");
                let similarity = jaccard_similarity(&first, &second);
                info!(
                    percent = similarity.percent,
                    common = similarity.common_words.len(),
                    "Similarity computed"
                );

                for (tone, line) in similarity_lines(&similarity, self.threshold) {
                    console.show(tone, &line);
                }

                State::AwaitSaveConfirmation {
                    verification,
                    similarity,
                }
            }

            State::AwaitSaveConfirmation {
                verification,
                similarity,
            } => {
                let question = format!(
                    "Do you want to save the report to '{}'?",
                    self.writer.reports_dir().display()
                );
                if console.confirm(&question) {
                    State::Saving {
                        verification,
                        similarity,
                    }
                } else {
                    State::End(SessionOutcome::SaveDeclined(similarity))
                }
            }

            State::Saving {
                verification,
                similarity,
            } => {
                let outcome = match self.writer.write(&verification, &similarity) {
                    Ok(path) => {
                        console.show(
                            Tone::Success,
                            &format!("Report saved to: {}", path.display()),
                        );
                        console.show(Tone::Plain, "Thanks for using Plagiarism Detector!");
                        SessionOutcome::Saved(path)
                    }
                    Err(e) => {
                        warn!(error = %e, "Report not saved");
                        console.show(Tone::Error, &format!("[Error] {e}"));
                        console.show(Tone::Plain, "Failed to save report.");
                        SessionOutcome::SaveFailed(e.to_string())
                    }
                };
                console.loading("Exiting");
                State::End(outcome)
            }

            State::End(outcome) => State::End(outcome),
        }
    }
}
