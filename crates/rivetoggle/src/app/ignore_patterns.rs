//! Ignore patterns read from the project's ignore file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Raw substrings; a path is ignored when its string form contains any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Read patterns from `path`. A file that cannot be read yields an empty set.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(patterns) => patterns,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no ignore file");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignore file unreadable");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut patterns = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || line.starts_with('#') {
                continue;
            }
            patterns.push(trimmed.to_owned());
        }
        Ok(Self { patterns })
    }

    pub fn should_ignore(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.patterns
            .iter()
            .any(|pattern| path.contains(pattern.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }
}
