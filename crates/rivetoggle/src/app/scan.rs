//! Project tree scanning.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::infra::config::Project;

/// Why a file was picked up by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Manifest,
    Source,
}

/// A file eligible for rewriting.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    /// Path relative to the scan root, used for ignore checks and reporting.
    pub display_path: PathBuf,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn is_manifest(&self) -> bool {
        self.kind == CandidateKind::Manifest
    }
}

/// Walks the project tree selecting manifest and source files.
#[derive(Debug, Clone)]
pub struct Scanner {
    manifest: String,
    source_extension: String,
}

impl Scanner {
    pub fn from_project(project: &Project) -> Self {
        Self {
            manifest: project.manifest.clone(),
            source_extension: project.source_extension.trim_start_matches('.').to_owned(),
        }
    }

    /// Every candidate under `root`, in file-name order.
    pub fn scan(&self, root: &Path) -> Vec<Candidate> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut candidates = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if let Some(candidate) = self.classify(root, &entry) {
                        candidates.push(candidate);
                    }
                }
                Err(err) => tracing::warn!(error = %err, "scanner error"),
            }
        }
        candidates
    }

    fn classify(&self, root: &Path, entry: &DirEntry) -> Option<Candidate> {
        let path = entry.path();
        if entry.depth() == 0 || !path.is_file() {
            return None;
        }

        let kind = if path.file_name().is_some_and(|name| name == self.manifest.as_str()) {
            CandidateKind::Manifest
        } else if path
            .extension()
            .is_some_and(|ext| ext == self.source_extension.as_str())
        {
            CandidateKind::Source
        } else {
            return None;
        };

        Some(Candidate {
            path: path.to_path_buf(),
            display_path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
            kind,
        })
    }
}
