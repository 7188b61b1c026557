//! Check command: validate color strings against the hex grammar.

use crate::cli::common::{CliError, CliResult};
use crate::models::is_valid_hex;
use clap::Args;
use serde::Serialize;

/// Check whether strings are valid hex colors
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Color strings to check
    #[arg(value_name = "HEX", required = true)]
    pub colors: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the check command.
#[derive(Debug, Serialize)]
struct CheckResponse {
    /// Whether every input passed the grammar.
    valid: bool,
    /// Per-input verdicts, in argument order.
    results: Vec<CheckResult>,
}

/// Verdict for one input string.
#[derive(Debug, Serialize)]
struct CheckResult {
    /// The input exactly as given.
    input: String,
    /// Whether it matches the hex grammar.
    valid: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let results: Vec<CheckResult> = self
            .colors
            .iter()
            .map(|input| CheckResult {
                input: input.clone(),
                valid: is_valid_hex(input),
            })
            .collect();

        let invalid_count = results.iter().filter(|r| !r.valid).count();

        if self.json {
            let response = CheckResponse {
                valid: invalid_count == 0,
                results,
            };
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| CliError::io(format!("Failed to encode JSON: {e}")))?;
            println!("{json}");
        } else {
            for result in &results {
                let mark = if result.valid { "✓" } else { "✗" };
                println!("{mark} {}", result.input);
            }
        }

        if invalid_count > 0 {
            return Err(CliError::validation(format!(
                "{invalid_count} invalid color(s)"
            )));
        }

        Ok(())
    }
}
