//! TintDeck - Terminal-based Tailwind palette manager
//!
//! Pick base colors for the fixed brand and swatch roles, watch the nine-stop
//! shade ramps regenerate live, and export the result as a pasteable
//! `tailwind.config.ts` colors block.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use tintdeck::cli::{CheckArgs, ExportArgs, ShadesArgs};
use tintdeck::constants::APP_BINARY_NAME;
use tintdeck::tui;

/// TintDeck - Terminal-based Tailwind palette manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = format!(
    "Examples:\n  {APP_BINARY_NAME}\n  {APP_BINARY_NAME} export --copy\n  {APP_BINARY_NAME} shades \"#009FDB\"\n  {APP_BINARY_NAME} check \"#009FDB\" \"#fff\""
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Headless commands (the default, with no command, opens the TUI)
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export the palette as a Tailwind theme-config snippet
    Export(ExportArgs),
    /// Generate the nine-stop ramp for a base color
    Shades(ShadesArgs),
    /// Check whether strings are valid hex colors
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Export(args)) => args.execute(),
        Some(Commands::Shades(args)) => args.execute(),
        Some(Commands::Check(args)) => args.execute(),
        None => {
            tui::run()?;
            return Ok(());
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }

    Ok(())
}
