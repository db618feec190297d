use std::env;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use rivetoggle::app::cli::{Cli, USAGE};
use rivetoggle::app::toggle::Toggler;
use rivetoggle::domain::errors::ToggleError;
use rivetoggle::domain::model::Selection;
use rivetoggle::infra::config::Config;
use rivetoggle::infra::download::HttpFetcher;

fn main() -> Result<ExitCode> {
    rivetoggle::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Ok(usage(&err)),
    };
    let renderer = match cli.renderer() {
        Ok(renderer) => renderer,
        Err(err) => return Ok(usage(&err)),
    };

    let root = env::current_dir()?;
    let config = Config::load(&root)?;
    let version = cli.version().unwrap_or(config.defaults.version.as_str());
    let selection = Selection::new(renderer, version);

    let toggler = Toggler::new(root, config, selection, HttpFetcher::new());
    let mut stdout = std::io::stdout().lock();
    match toggler.run(&mut stdout) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<ToggleError>() {
            Some(download @ ToggleError::Download { .. }) => {
                println!("Error downloading WASM: {download}");
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}

fn usage(err: &dyn std::fmt::Display) -> ExitCode {
    tracing::debug!(error = %err, "invalid arguments");
    println!("{USAGE}");
    ExitCode::FAILURE
}
