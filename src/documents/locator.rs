// Essay file discovery.
//
// Each logical filename is probed in a fixed order: the essays directory
// first, then the working directory. The first path that exists wins.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;

/// Resolves logical essay names to filesystem paths.
#[derive(Debug, Clone)]
pub struct Locator {
    search_dirs: Vec<PathBuf>,
}

impl Locator {
    /// Search `search_dirs` in order. An empty path means the working directory.
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Essays directory from the config, then the working directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![config.essays_dir.clone(), PathBuf::new()])
    }

    /// Return the first existing candidate for `name`, or `None`.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.search_dirs.iter().find_map(|dir| {
            let candidate = dir.join(name);
            debug!(candidate = %candidate.display(), "Probing for document");
            candidate.exists().then_some(candidate)
        })
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }
}

/// Human-readable list of the searched locations, for "not found" guidance.
pub fn describe_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| {
            if d.as_os_str().is_empty() || d == Path::new(".") {
                "the current directory".to_string()
            } else {
                format!("'{}/'", d.display())
            }
        })
        .collect::<Vec<_>>()
        .join(" or ")
}
