// Console abstraction — the session's only window to the user.
//
// `TerminalConsole` talks to stdin/stdout with colors and an optional
// spinner. `ScriptedConsole` replays canned answers and records everything
// shown, so the session can be driven deterministically in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::terminal::{paint, Tone};

/// Interactive capability required by the session controller.
pub trait Console {
    /// Prompt for a line of free text. A closed input reads as empty.
    fn ask_word(&mut self, prompt: &str) -> String;

    /// Ask a yes/no question. Only a trimmed, case-insensitive "y" is yes.
    fn confirm(&mut self, question: &str) -> bool {
        is_affirmative(&self.ask_word(&format!("{question} (y/n): ")))
    }

    /// Display one line of output.
    fn show(&mut self, tone: Tone, text: &str);

    /// Cosmetic pause between steps. No-op unless the console animates.
    fn loading(&mut self, _message: &str) {}
}

/// Exactly "y" after trimming and lowercasing.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Console backed by the process's stdin and stdout.
pub struct TerminalConsole {
    animation: Option<Duration>,
}

impl TerminalConsole {
    pub fn new(animate: bool) -> Self {
        Self {
            animation: animate.then(|| Duration::from_millis(900)),
        }
    }
}

impl Console for TerminalConsole {
    fn ask_word(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read from stdin, treating as empty answer");
                String::new()
            }
        }
    }

    fn show(&mut self, tone: Tone, text: &str) {
        println!("{}", paint(tone, text));
    }

    fn loading(&mut self, message: &str) {
        let Some(duration) = self.animation else {
            return;
        };

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{msg} {spinner}")
                .expect("valid template")
                .tick_strings(&["   ", ".  ", ".. ", "...", "..."]),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(150));
        thread::sleep(duration);
        pb.finish_and_clear();
    }
}

/// Console that answers from a queue and records output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    /// Every prompt asked, in order
    pub prompts: Vec<String>,
    /// Every line shown, in order, without colors
    pub lines: Vec<(Tone, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Whether any shown line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, line)| line.contains(needle))
    }

    /// Number of answers that were never consumed.
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn ask_word(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or_default()
    }

    fn show(&mut self, tone: Tone, text: &str) {
        self.lines.push((tone, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_y_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" Y \n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
    }

    #[test]
    fn test_scripted_console_replays_answers() {
        let mut console = ScriptedConsole::new(["cat", "y"]);
        assert_eq!(console.ask_word("Word: "), "cat");
        assert!(console.confirm("Proceed?"));
        // Exhausted queue reads as an empty answer
        assert!(!console.confirm("Save?"));
        assert_eq!(console.prompts[1], "Proceed? (y/n): ");
        assert_eq!(console.remaining_answers(), 0);
    }
}
