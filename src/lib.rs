//! TintDeck Library
//!
//! This library provides core functionality for the TintDeck application:
//! hex color validation, nine-stop shade ramp derivation, dual-input palette
//! state, and Tailwind theme-config serialization.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod models;
pub mod palette;
pub mod tui;
