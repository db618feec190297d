//! Configuration management utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const WORKSPACE_CONFIG_FILE: &str = ".rivetoggle.toml";

/// Settings for a toggle run, built from defaults and an optional workspace overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub project: Project,
    #[serde(default)]
    pub remote: Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            version: "2.21.6".into(),
        }
    }
}

/// Where the tool looks inside the project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub ignore_file: String,
    pub manifest: String,
    pub source_extension: String,
    pub asset_output: PathBuf,
    pub local_asset_on: String,
    pub local_asset_off: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            ignore_file: ".gitignore".into(),
            manifest: "package.json".into(),
            source_extension: "ts".into(),
            asset_output: PathBuf::from("export/rive.wasm"),
            local_asset_on: "const USE_LOCAL_WASM: boolean = true;".into(),
            local_asset_off: "const USE_LOCAL_WASM: boolean = false;".into(),
        }
    }
}

/// Package registry layout the runtime asset is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remote {
    pub host: String,
    pub vendor: String,
    pub asset_name: String,
}

impl Default for Remote {
    fn default() -> Self {
        Self {
            host: "unpkg.com".into(),
            vendor: "rive-app".into(),
            asset_name: "rive.wasm".into(),
        }
    }
}

impl Remote {
    /// Vendor namespace prefix, e.g. `@rive-app`.
    pub fn namespace(&self) -> String {
        format!("@{}", self.vendor)
    }

    /// Fully qualified package identifier for a slug.
    pub fn package(&self, slug: &str) -> String {
        format!("{}/{slug}", self.namespace())
    }

    pub fn asset_url(&self, slug: &str, version: &str) -> String {
        format!(
            "https://{}/{}@{version}/{}",
            self.host,
            self.package(slug),
            self.asset_name
        )
    }
}

impl Config {
    /// Load defaults overlaid with `.rivetoggle.toml` from `root` when present.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(WORKSPACE_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }
}
