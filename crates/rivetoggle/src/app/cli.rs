//! Command line parsing and renderer selection.

use clap::Parser;

use crate::domain::errors::ToggleError;
use crate::domain::model::RendererKind;

pub const USAGE: &str = "Usage: rivetoggle [-webgl|-canvas|-webgl2] [-v version]";

const VERSION_FLAG: &str = "-v";

/// Positional arguments only: the renderer flag comes first and anything after it
/// is inspected for a `-v <version>` pair, the rest is ignored.
#[derive(Parser, Debug)]
#[command(
    about = "Switch a Rive project between the canvas, WebGL, and WebGL2 renderers",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    override_usage = "rivetoggle [-webgl|-canvas|-webgl2] [-v version]"
)]
pub struct Cli {
    /// Renderer to switch to: -webgl, -webgl2, or -canvas
    #[arg(allow_hyphen_values = true, value_name = "RENDERER")]
    pub renderer: Option<String>,

    /// Optional `-v <version>` followed by ignored arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub rest: Vec<String>,
}

impl Cli {
    pub fn renderer(&self) -> Result<RendererKind, ToggleError> {
        let flag = self
            .renderer
            .as_deref()
            .ok_or(ToggleError::MissingRenderer)?;
        flag.parse()
    }

    /// Version given as `-v <version>` directly after the renderer flag.
    pub fn version(&self) -> Option<&str> {
        match self.rest.as_slice() {
            [flag, version, ..] if flag == VERSION_FLAG => Some(version.as_str()),
            _ => None,
        }
    }
}
