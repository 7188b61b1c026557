//! Data models for colors and derived shade ramps.
//!
//! This module contains the core color data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod hex;
pub mod ramp;
pub mod rgb;

// Re-export all model types
pub use hex::{is_valid_hex, HexColor};
pub use ramp::{ShadeRamp, STOP_LEVELS};
pub use rgb::RgbColor;
