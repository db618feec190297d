//! Fetching the renderer runtime asset.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::errors::ToggleError;

/// Retrieves a remote asset into a local file.
pub trait AssetFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), ToggleError>;
}

impl<T: AssetFetcher + ?Sized> AssetFetcher for &T {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), ToggleError> {
        (**self).fetch(url, dest)
    }
}

/// Plain HTTPS GET through a blocking reqwest client.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .context("request failed")?
            .error_for_status()?;

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let mut file =
            File::create(dest).with_context(|| format!("failed to create {}", dest.display()))?;
        let written = response
            .copy_to(&mut file)
            .with_context(|| format!("failed to write {}", dest.display()))?;
        Ok(written)
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), ToggleError> {
        let bytes = self.download(url, dest).map_err(|source| ToggleError::Download {
            url: url.to_owned(),
            source,
        })?;
        tracing::debug!(url, bytes, dest = %dest.display(), "asset downloaded");
        Ok(())
    }
}
