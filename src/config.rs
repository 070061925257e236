use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::jaccard::DEFAULT_THRESHOLD;
use crate::text::stopwords::StopWordList;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override individual fields after loading.
#[derive(Debug, Clone)]
pub struct Config {
    /// Searched before the working directory when locating essays
    pub essays_dir: PathBuf,
    /// Where reports are written (created on first save)
    pub reports_dir: PathBuf,
    /// Similarity percentage at or above which essays are "likely similar"
    pub threshold: f64,
    pub stop_words: StopWordList,
    /// Show the spinner between steps
    pub animation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            essays_dir: PathBuf::from("essays"),
            reports_dir: PathBuf::from("reports"),
            threshold: DEFAULT_THRESHOLD,
            stop_words: StopWordList::Classic,
            animation: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a default, so an empty environment is valid.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let threshold = match env::var("PLAGIARISM_THRESHOLD") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("PLAGIARISM_THRESHOLD is not a number: {raw}"))?,
            Err(_) => defaults.threshold,
        };

        let stop_words = match env::var("PLAGIARISM_STOP_WORDS") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.stop_words,
        };

        let animation = match env::var("PLAGIARISM_ANIMATION").as_deref() {
            Ok("0") | Ok("false") | Ok("off") => false,
            _ => defaults.animation,
        };

        let config = Self {
            essays_dir: env::var("PLAGIARISM_ESSAYS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.essays_dir),
            reports_dir: env::var("PLAGIARISM_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
            threshold,
            stop_words,
            animation,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is a percentage.
    /// Call this again after applying CLI overrides.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            anyhow::bail!(
                "Similarity threshold must be between 0 and 100, got {}",
                self.threshold
            );
        }
        Ok(())
    }
}
