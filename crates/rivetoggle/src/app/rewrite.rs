//! Content rewriting for renderer package references.

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::domain::model::Selection;
use crate::infra::config::Config;

/// Package identifiers involved in switching to the selected renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePlan {
    pub replace: [String; 2],
    pub target: String,
}

/// Result of rewriting one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub version_updated: bool,
}

impl Rewrite {
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Applies package, manifest version, and local-asset rewrites for one selection.
#[derive(Debug, Clone)]
pub struct Rewriter {
    plan: PackagePlan,
    version: String,
    manifest_version: Regex,
    local_asset_on: String,
    local_asset_off: String,
}

impl Rewriter {
    pub fn new(selection: &Selection, config: &Config) -> Result<Self> {
        let remote = &config.remote;
        let renderer = selection.renderer;
        let [a, b] = renderer.replaced_slugs();
        let plan = PackagePlan {
            replace: [remote.package(a), remote.package(b)],
            target: remote.package(renderer.slug()),
        };

        let pattern = format!(r#"("{}/[^"]+": )"[^"]+""#, regex::escape(&remote.namespace()));
        let manifest_version =
            Regex::new(&pattern).context("invalid manifest version pattern")?;

        Ok(Self {
            plan,
            version: selection.version.clone(),
            manifest_version,
            local_asset_on: config.project.local_asset_on.clone(),
            local_asset_off: config.project.local_asset_off.clone(),
        })
    }

    pub fn plan(&self) -> &PackagePlan {
        &self.plan
    }

    /// Rewrite `content`; manifest files additionally get their vendor versions pinned.
    pub fn rewrite(&self, content: &str, is_manifest: bool) -> Rewrite {
        let [first, second] = &self.plan.replace;
        let mut updated = content
            .replace(first.as_str(), &self.plan.target)
            .replace(second.as_str(), &self.plan.target);

        let mut version_updated = false;
        if is_manifest && self.manifest_version.is_match(&updated) {
            updated = self
                .manifest_version
                .replace_all(&updated, |caps: &Captures| {
                    format!("{}\"{}\"", &caps[1], self.version)
                })
                .into_owned();
            version_updated = true;
        }

        let content = updated.replace(&self.local_asset_on, &self.local_asset_off);
        Rewrite {
            content,
            version_updated,
        }
    }
}
