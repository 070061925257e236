use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use plagiarism_detector::config::Config;
use plagiarism_detector::documents::{FIRST_ESSAY, SECOND_ESSAY};
use plagiarism_detector::output::report::ReportWriter;
use plagiarism_detector::session::console::TerminalConsole;
use plagiarism_detector::session::controller::Session;
use plagiarism_detector::text::stopwords::StopWordList;

/// Plagiarism Detector: compare two essays by shared vocabulary.
///
/// Looks for essay1.txt and essay2.txt in the essays directory, then in the
/// current directory. Asks for a word to look up, then offers a similarity
/// analysis and a saved report.
#[derive(Parser)]
#[command(name = "plagiarism-detector", version, about)]
struct Cli {
    /// Directory searched first for the essays
    #[arg(long)]
    essays_dir: Option<PathBuf>,

    /// Directory the report is written to
    #[arg(long)]
    reports_dir: Option<PathBuf>,

    /// Filename of the first essay
    #[arg(long, default_value = FIRST_ESSAY)]
    first: String,

    /// Filename of the second essay
    #[arg(long, default_value = SECOND_ESSAY)]
    second: String,

    /// Similarity percentage treated as "likely similar" (default: 50)
    #[arg(long)]
    threshold: Option<f64>,

    /// Stop-word list: classic or extended
    #[arg(long)]
    stop_words: Option<StopWordList>,

    /// Skip the loading animation
    #[arg(long)]
    no_animation: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Quiet by default so log lines don't interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plagiarism_detector=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Captured once so every report from this run shares the same stamp
    let started_at = chrono::Local::now().naive_local();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(dir) = cli.essays_dir {
        config.essays_dir = dir;
    }
    if let Some(dir) = cli.reports_dir {
        config.reports_dir = dir;
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Some(list) = cli.stop_words {
        config.stop_words = list;
    }
    if cli.no_animation {
        config.animation = false;
    }
    config.validate()?;

    info!(
        essays_dir = %config.essays_dir.display(),
        reports_dir = %config.reports_dir.display(),
        threshold = config.threshold,
        stop_words = %config.stop_words,
        "Configuration loaded"
    );

    let writer = ReportWriter::new(config.reports_dir.clone(), started_at);
    let session = Session::from_config(&config, writer).with_document_names(&cli.first, &cli.second);
    let mut console = TerminalConsole::new(config.animation);

    session.run(&mut console);
    Ok(())
}
