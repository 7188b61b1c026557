//! Export command for generating the Tailwind config snippet.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::models::HexColor;
use crate::palette::PaletteSet;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export the palette as a Tailwind theme-config snippet
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output path for the snippet (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write to an auto-named file (tailwind_colors_[date].ts)
    #[arg(long, conflicts_with = "output")]
    pub save: bool,

    /// Copy the snippet to the system clipboard as well
    #[arg(long)]
    pub copy: bool,

    /// Override a base color before export (repeatable), e.g. --set primary=#336699
    #[arg(long, value_name = "KEY=HEX")]
    pub set: Vec<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let mut brand = PaletteSet::brand();
        let mut swatch = PaletteSet::swatch();

        for entry in &self.set {
            apply_override(&mut brand, &mut swatch, entry)?;
        }

        let snippet = export::serialize(&brand, &swatch);

        if self.copy {
            // Clipboard failure is non-fatal and never touches palette state
            match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(snippet.clone())) {
                Ok(()) => println!("✓ Copied config to clipboard"),
                Err(e) => eprintln!("Warning: Failed to copy to clipboard: {e}"),
            }
        }

        if let Some(path) = self.get_output_path() {
            fs::write(&path, &snippet)
                .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
            println!("✓ Exported config to: {}", path.display());
        } else {
            println!("{snippet}");
        }

        Ok(())
    }

    /// Get the output file path, if any (user-specified or auto-generated)
    fn get_output_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.output {
            return Some(path.clone());
        }

        if self.save {
            let date = chrono::Local::now().format("%Y-%m-%d");
            return Some(PathBuf::from(format!("tailwind_colors_{date}.ts")));
        }

        None
    }
}

/// Applies one `key=hex` override to whichever set owns the key.
fn apply_override(brand: &mut PaletteSet, swatch: &mut PaletteSet, entry: &str) -> CliResult<()> {
    let (key, hex) = entry
        .split_once('=')
        .ok_or_else(|| CliError::validation(format!("Expected KEY=HEX, got '{entry}'")))?;

    let color = HexColor::parse(hex).map_err(|e| CliError::validation(e.to_string()))?;

    if brand.set_from_picker(key, color.clone()) || swatch.set_from_picker(key, color) {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "Unknown color key '{key}'. Valid keys: {}",
            known_keys()
        )))
    }
}

fn known_keys() -> String {
    crate::palette::BRAND_KEYS
        .iter()
        .chain(crate::palette::SWATCH_KEYS.iter())
        .map(|k| k.key)
        .collect::<Vec<_>>()
        .join(", ")
}
