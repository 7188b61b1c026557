//! Shades command: print the nine-stop ramp for one base color.

use crate::cli::common::{CliError, CliResult};
use crate::models::{HexColor, ShadeRamp};
use clap::Args;

/// Generate the nine-stop tint/shade ramp for a base color
#[derive(Debug, Clone, Args)]
pub struct ShadesArgs {
    /// Base color, e.g. "#009FDB" or "#1af"
    #[arg(value_name = "HEX")]
    pub color: String,

    /// Output the ramp as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShadesArgs {
    /// Execute the shades command
    pub fn execute(&self) -> CliResult<()> {
        let base =
            HexColor::parse(&self.color).map_err(|e| CliError::validation(e.to_string()))?;
        let ramp = ShadeRamp::generate(&base);

        if self.json {
            let mut map = serde_json::Map::new();
            for (level, color) in ramp.iter() {
                map.insert(level.to_string(), color.as_str().into());
            }
            let json = serde_json::to_string_pretty(&map)
                .map_err(|e| CliError::io(format!("Failed to encode JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("Shades for {base}");
            for (level, color) in ramp.iter() {
                let marker = if level == 500 { "  (base)" } else { "" };
                println!("  {level:3}  {color}{marker}");
            }
        }

        Ok(())
    }
}
