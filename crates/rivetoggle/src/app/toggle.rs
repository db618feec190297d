//! The toggle run: scan, rewrite, fetch, report.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::app::ignore_patterns::IgnorePatterns;
use crate::app::rewrite::Rewriter;
use crate::app::scan::{Candidate, Scanner};
use crate::domain::model::{FileOutcome, RunSummary, Selection};
use crate::infra::config::Config;
use crate::infra::download::AssetFetcher;

/// One invocation of the renderer switch against a project root.
pub struct Toggler<F> {
    root: PathBuf,
    config: Config,
    selection: Selection,
    fetcher: F,
}

impl<F: AssetFetcher> Toggler<F> {
    pub fn new(root: impl Into<PathBuf>, config: Config, selection: Selection, fetcher: F) -> Self {
        Self {
            root: root.into(),
            config,
            selection,
            fetcher,
        }
    }

    /// Rewrite every candidate file, fetch the runtime asset if anything changed,
    /// and write progress plus the closing summary to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let project = &self.config.project;
        let patterns = IgnorePatterns::load(&self.root.join(&project.ignore_file));
        writeln!(
            out,
            "\nIgnoring patterns from {}: {:?}",
            project.ignore_file,
            patterns.as_slice()
        )?;
        writeln!(
            out,
            "\nSwitching to {} renderer (version {})...",
            self.selection.renderer.display_name(),
            self.selection.version
        )?;

        let rewriter = Rewriter::new(&self.selection, &self.config)?;
        let scanner = Scanner::from_project(project);

        let mut summary = RunSummary::default();
        for candidate in scanner.scan(&self.root) {
            if patterns.should_ignore(&candidate.display_path) {
                writeln!(
                    out,
                    "Skipping ignored file: {}",
                    candidate.display_path.display()
                )?;
                summary.record_skipped();
                continue;
            }
            let outcome = self.process(&candidate, &rewriter, out)?;
            tracing::debug!(
                path = %outcome.path.display(),
                modified = outcome.modified,
                "processed file"
            );
            summary.record(&outcome);
        }

        if summary.needs_download() {
            summary.downloaded = Some(self.download(out)?);
        }

        writeln!(out, "\n{}", summary.render(&self.selection))?;
        Ok(summary)
    }

    fn process<W: Write>(
        &self,
        candidate: &Candidate,
        rewriter: &Rewriter,
        out: &mut W,
    ) -> Result<FileOutcome> {
        let shown = candidate.display_path.display();
        let plan = rewriter.plan();
        writeln!(out, "Processing {shown}")?;
        writeln!(
            out,
            "Looking to replace {} and {} with {}",
            plan.replace[0], plan.replace[1], plan.target
        )?;

        let content = fs::read_to_string(&candidate.path)
            .with_context(|| format!("failed to read {}", candidate.path.display()))?;
        let rewrite = rewriter.rewrite(&content, candidate.is_manifest());

        let version = &self.selection.version;
        let manifest = &self.config.project.manifest;
        if rewrite.version_updated {
            writeln!(out, "Updated package version to {version} in {manifest}")?;
        }

        let modified = rewrite.changed(&content);
        if modified {
            fs::write(&candidate.path, &rewrite.content)
                .with_context(|| format!("failed to write {}", candidate.path.display()))?;
            writeln!(out, "Updated {shown}")?;
            if candidate.is_manifest() {
                writeln!(out, "Package.json changes:")?;
                writeln!(out, "- Updated package name")?;
                writeln!(out, "- Set version to {version}")?;
            }
        } else {
            writeln!(out, "No changes needed in {shown}")?;
        }

        Ok(FileOutcome {
            path: candidate.display_path.clone(),
            modified,
        })
    }

    fn download<W: Write>(&self, out: &mut W) -> Result<PathBuf> {
        let slug = self.selection.renderer.slug();
        let url = self
            .config
            .remote
            .asset_url(slug, &self.selection.version);
        let relative = &self.config.project.asset_output;
        let dest = self.root.join(relative);

        writeln!(out, "\nDownloading WASM from: {url}")?;
        self.fetcher.fetch(&url, &dest)?;
        writeln!(out, "Successfully downloaded WASM to: {}", relative.display())?;
        Ok(dest)
    }
}
