//! Domain models for renderer selections and run results.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::errors::ToggleError;

/// Rendering backend a project can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererKind {
    Canvas,
    Webgl,
    Webgl2,
}

impl RendererKind {
    pub const ALL: [RendererKind; 3] = [Self::Canvas, Self::Webgl, Self::Webgl2];

    /// Command line flag selecting this renderer.
    pub fn flag(&self) -> &'static str {
        match self {
            RendererKind::Canvas => "-canvas",
            RendererKind::Webgl => "-webgl",
            RendererKind::Webgl2 => "-webgl2",
        }
    }

    /// Package slug under the vendor namespace, also used to name the remote asset.
    pub fn slug(&self) -> &'static str {
        match self {
            RendererKind::Canvas => "canvas-advanced",
            RendererKind::Webgl => "webgl-advanced",
            RendererKind::Webgl2 => "webgl2-advanced",
        }
    }

    /// The two slugs that get rewritten onto this renderer, in replacement order.
    pub fn replaced_slugs(&self) -> [&'static str; 2] {
        match self {
            RendererKind::Canvas => [Self::Webgl.slug(), Self::Webgl2.slug()],
            RendererKind::Webgl => [Self::Canvas.slug(), Self::Webgl2.slug()],
            RendererKind::Webgl2 => [Self::Canvas.slug(), Self::Webgl.slug()],
        }
    }

    /// Upper-cased name used in console reports.
    pub fn display_name(&self) -> String {
        self.flag().trim_start_matches('-').to_uppercase()
    }
}

impl FromStr for RendererKind {
    type Err = ToggleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.flag() == value)
            .ok_or_else(|| ToggleError::UnknownRenderer(value.to_owned()))
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// Renderer and package version chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub renderer: RendererKind,
    pub version: String,
}

impl Selection {
    pub fn new(renderer: RendererKind, version: impl Into<String>) -> Self {
        Self {
            renderer,
            version: version.into(),
        }
    }
}

/// Outcome of processing a single candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub modified: bool,
}

/// Counters accumulated across one walk of the project tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub modified: usize,
    pub skipped: usize,
    pub downloaded: Option<PathBuf>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.checked += 1;
        if outcome.modified {
            self.modified += 1;
        }
    }

    pub fn record_skipped(&mut self) {
        self.checked += 1;
        self.skipped += 1;
    }

    pub fn needs_download(&self) -> bool {
        self.modified > 0
    }

    /// Render the closing report printed after a run.
    pub fn render(&self, selection: &Selection) -> String {
        format!(
            "Summary:\nChecked {} files\nModified {} files\nFinal renderer: {}\nVersion: {}",
            self.checked,
            self.modified,
            selection.renderer.display_name(),
            selection.version
        )
    }
}
