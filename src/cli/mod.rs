//! CLI command handlers for TintDeck.
//!
//! This module provides headless, scriptable access to TintDeck's core
//! functionality for automation, testing, and CI/CD integration.

pub mod check;
pub mod common;
pub mod export;
pub mod shades;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult};
pub use export::ExportArgs;
pub use shades::ShadesArgs;
