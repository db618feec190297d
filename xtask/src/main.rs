use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Nextest {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
        /// Only run tests whose names contain this string
        filter: Option<String>,
    },
    /// Lay out a small canvas-renderer project for trying rivetoggle by hand
    Fixture {
        /// Directory to create the project in
        dir: PathBuf,
    },
}

const FIXTURE_MANIFEST: &str = r#"{
  "name": "rive-fixture",
  "private": true,
  "dependencies": {
    "@rive-app/canvas-advanced": "2.21.6",
    "vite": "5.4.0"
  }
}
"#;

const FIXTURE_SOURCE: &str = r#"import RiveCanvas from '@rive-app/canvas-advanced';

const USE_LOCAL_WASM: boolean = true;

export async function loadRive() {
  return RiveCanvas({ locateFile: () => (USE_LOCAL_WASM ? '/rive.wasm' : undefined) });
}
"#;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nextest {
            profile,
            release,
            filter,
        } => run_nextest(profile, release, filter)?,
        Commands::Fixture { dir } => write_fixture(&dir)?,
    }
    Ok(())
}

fn run_nextest(profile: Option<String>, release: bool, filter: Option<String>) -> Result<()> {
    let mut args: Vec<String> = ["nextest", "run", "-p", "rivetoggle"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    args.extend(profile.into_iter().flat_map(|p| ["--profile".to_owned(), p]));
    if release {
        args.push("--release".to_owned());
    }
    args.extend(filter);

    let status = Command::new("cargo")
        .args(&args)
        .status()
        .context("failed to launch cargo")?;
    anyhow::ensure!(status.success(), "cargo {} exited with {status}", args.join(" "));
    Ok(())
}

fn write_fixture(dir: &Path) -> Result<()> {
    let src = dir.join("src");
    fs::create_dir_all(&src).with_context(|| format!("failed to create {}", src.display()))?;
    fs::create_dir_all(dir.join("dist"))?;
    fs::write(dir.join("package.json"), FIXTURE_MANIFEST)?;
    fs::write(src.join("rive.ts"), FIXTURE_SOURCE)?;
    fs::write(dir.join("dist/rive.ts"), FIXTURE_SOURCE)?;
    fs::write(dir.join(".gitignore"), "# build output\ndist/\nnode_modules/\n")?;
    println!("fixture written to {}", dir.display());
    Ok(())
}
