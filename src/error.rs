// Typed failures for the document and report stages.
//
// The session controller matches on these to decide how a run ends. None of
// them is fatal to the process: each one turns into a user-visible message
// and an orderly exit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a logical document into a token sequence.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Neither the essays directory nor the working directory holds the file.
    #[error("{name} not found in the essays directory or the current directory")]
    NotFound { name: String },

    /// The file exists but could not be read or is not valid UTF-8.
    #[error("could not read '{}': {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure to persist a similarity report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("could not create reports directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write report to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
