// Plagiarism Detector: lexical-overlap similarity between two essays.
//
// This is the library root. Each module corresponds to one stage of a
// comparison session.

pub mod analysis;
pub mod config;
pub mod documents;
pub mod error;
pub mod output;
pub mod session;
pub mod text;
