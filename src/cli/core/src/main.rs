/* src/cli/core/src/main.rs */

mod build;
mod config;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trellis", version, about = "Build tooling for the Trellis page framework")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Normalize page entry points under the configured pages directory.
  Build {
    /// Verify only: rewrite nothing, exit nonzero if any file would change.
    #[arg(long)]
    check: bool,
    /// Path to trellis.toml; defaults apply when the file is absent.
    #[arg(long, default_value = "trellis.toml")]
    config: PathBuf,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  match cli.command {
    Command::Build { check, config } => build::run(&config, check),
  }
}
