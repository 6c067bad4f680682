//! combglass - hole layouts for comb glass jigs
//!
//! Usage:
//!   combglass generate [-b BOARD] [-g GLASS] [-o DIR] [-f svg,pdf,txt]
//!   combglass summary  [-b BOARD] [-g GLASS] [--json]
//!   combglass presets  [--presets FILE] [--example]

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::{GenerateArgs, PresetsArgs, SummaryArgs, cmd_generate, cmd_presets, cmd_summary};

#[derive(Parser)]
#[command(name = "combglass", version)]
#[command(about = "Hole layouts for comb glass jigs")]
struct Cmd {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate layouts and write SVG, PDF, PNG, drill lists or JSON
    Generate(GenerateArgs),
    /// Print spacing parameters and hole counts per variant
    Summary(SummaryArgs),
    /// List available board and glass presets
    Presets(PresetsArgs),
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();

    let default_level = if cmd.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cmd.action {
        Action::Generate(args) => cmd_generate(args),
        Action::Summary(args) => cmd_summary(args),
        Action::Presets(args) => cmd_presets(args),
    }
}
