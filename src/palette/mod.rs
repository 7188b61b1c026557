//! Palette state: dual-input color fields grouped into fixed key sets.

pub mod field;
pub mod keys;
pub mod set;

// Re-export the palette types
pub use field::{ColorField, SyncState};
pub use keys::{ColorKey, BRAND_KEYS, SWATCH_KEYS};
pub use set::PaletteSet;
