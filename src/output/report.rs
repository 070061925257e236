// Plain-text similarity report.
//
// The layout is fixed because other tools may scrape it: title, generated
// time, verified word, occurrences, similarity, then the common-word count
// and the sorted common words one per line.
//
// Filenames embed the timestamp captured when the process started. Files are
// opened create-new, and a numeric suffix is appended when the name is
// already taken, so two runs in the same second never overwrite each other.

use std::fmt::Write as _;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::analysis::jaccard::SimilarityResult;
use crate::analysis::verify::Verification;
use crate::error::ReportError;

pub const REPORT_TITLE: &str = "Plagiarism Detector - Similarity Report";

const FILENAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the report body.
pub fn render_report(
    generated_at: &NaiveDateTime,
    verification: &Verification,
    similarity: &SimilarityResult,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "Generated Time: {}", generated_at.format(GENERATED_FORMAT));
    let _ = writeln!(out, "Verified word: {}", verification.word);
    let _ = writeln!(out, "Occurrences: {}", verification.count);
    let _ = writeln!(out, "Similarity: {:.2}%", similarity.percent);
    let _ = writeln!(out);
    let _ = writeln!(out, "Common words ({}):", similarity.common_words.len());
    for word in &similarity.common_words {
        let _ = writeln!(out, "{word}");
    }
    out
}

/// Writes reports into one directory, stamped with the process start time.
pub struct ReportWriter {
    reports_dir: PathBuf,
    started_at: NaiveDateTime,
}

impl ReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>, started_at: NaiveDateTime) -> Self {
        Self {
            reports_dir: reports_dir.into(),
            started_at,
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    fn stem(&self) -> String {
        format!("similarity_report_{}", self.started_at.format(FILENAME_FORMAT))
    }

    /// `similarity_report_<timestamp>.txt`, before any collision suffix.
    pub fn base_filename(&self) -> String {
        format!("{}.txt", self.stem())
    }

    /// Write a new report file and return its path.
    ///
    /// The reports directory is created if missing. A file that fails
    /// mid-write is removed and never reported as saved.
    pub fn write(
        &self,
        verification: &Verification,
        similarity: &SimilarityResult,
    ) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.reports_dir).map_err(|source| ReportError::CreateDir {
            path: self.reports_dir.clone(),
            source,
        })?;

        let (path, mut file) = self.create_unique()?;
        let body = render_report(&self.started_at, verification, similarity);

        if let Err(source) = file.write_all(body.as_bytes()).and_then(|_| file.flush()) {
            warn!(path = %path.display(), error = %source, "Report write failed, removing partial file");
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(ReportError::Write { path, source });
        }

        info!(path = %path.display(), bytes = body.len(), "Report saved");
        Ok(path)
    }

    fn create_unique(&self) -> Result<(PathBuf, File), ReportError> {
        let stem = self.stem();

        for attempt in 0u32.. {
            let name = if attempt == 0 {
                format!("{stem}.txt")
            } else {
                format!("{stem}_{attempt}.txt")
            };
            let path = self.reports_dir.join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(ReportError::Write { path, source }),
            }
        }

        Err(ReportError::Write {
            path: self.reports_dir.join(format!("{stem}.txt")),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "no free report filename"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    fn sample() -> (Verification, SimilarityResult) {
        let verification = Verification {
            word: "cat".to_string(),
            count: 2,
            is_stop_word: false,
        };
        let similarity = SimilarityResult {
            percent: 50.0,
            common_words: ["ran", "cat"].iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        };
        (verification, similarity)
    }

    #[test]
    fn test_render_layout() {
        let (v, s) = sample();
        let body = render_report(&stamp(), &v, &s);
        assert_eq!(
            body,
            "Plagiarism Detector - Similarity Report\n\
             Generated Time: 2026-10-16 09:05:07\n\
             Verified word: cat\n\
             Occurrences: 2\n\
             Similarity: 50.00%\n\
             \n\
             Common words (2):\n\
             cat\n\
             ran\n"
        );
    }

    #[test]
    fn test_render_two_decimals() {
        let (v, mut s) = sample();
        s.percent = 100.0 / 3.0;
        let body = render_report(&stamp(), &v, &s);
        assert!(body.contains("Similarity: 33.33%\n"));
    }

    #[test]
    fn test_filename_uses_start_time() {
        let writer = ReportWriter::new("reports", stamp());
        assert_eq!(writer.base_filename(), "similarity_report_2026-10-16_09-05-07.txt");
    }

    #[test]
    fn test_write_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("reports");
        let writer = ReportWriter::new(&dir, stamp());
        let (v, s) = sample();

        let path = writer.write(&v, &s).unwrap();
        assert_eq!(path, dir.join(writer.base_filename()));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(REPORT_TITLE));
    }

    #[test]
    fn test_same_timestamp_never_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(root.path(), stamp());
        let (v, s) = sample();

        let first = writer.write(&v, &s).unwrap();
        let second = writer.write(&v, &s).unwrap();
        let third = writer.write(&v, &s).unwrap();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert!(second.to_string_lossy().ends_with("_1.txt"));
        assert!(third.to_string_lossy().ends_with("_2.txt"));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_unwritable_directory_is_error() {
        let root = tempfile::tempdir().unwrap();
        // A regular file where the reports directory should be
        let blocker = root.path().join("reports");
        std::fs::write(&blocker, "not a directory").unwrap();

        let writer = ReportWriter::new(&blocker, stamp());
        let (v, s) = sample();
        let err = writer.write(&v, &s).unwrap_err();
        assert!(matches!(err, ReportError::CreateDir { .. }));
    }
}
