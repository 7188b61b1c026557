//! Fixed palette key tables.
//!
//! The two key lists and their default colors are immutable configuration:
//! seven semantic brand roles and eight raw swatch roles. They are never
//! edited at runtime; only the color assigned to each key changes.

use crate::models::HexColor;

/// One named slot in a palette: identifier, display label, default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorKey {
    /// Identifier used in the serialized config (e.g. "primary").
    pub key: &'static str,
    /// Human-readable label (e.g. "Primary").
    pub label: &'static str,
    /// Default hex color assigned at tool-open time.
    pub default: &'static str,
}

impl ColorKey {
    /// Parses the default color for this key.
    #[must_use]
    pub fn default_color(&self) -> HexColor {
        // The tables below only contain valid 6-digit hex
        HexColor::parse(self.default).expect("palette default colors are valid hex")
    }
}

/// Semantic brand roles, in serialization order.
pub const BRAND_KEYS: [ColorKey; 7] = [
    ColorKey { key: "primary", label: "Primary", default: "#009FDB" },
    ColorKey { key: "secondary", label: "Secondary", default: "#878C94" },
    ColorKey { key: "success", label: "Success", default: "#2D7E24" },
    ColorKey { key: "danger", label: "Danger", default: "#C70032" },
    ColorKey { key: "warning", label: "Warning", default: "#EA712F" },
    ColorKey { key: "info", label: "Info", default: "#49EEDC" },
    ColorKey { key: "dark", label: "Dark", default: "#25303A" },
];

/// Raw swatch roles, in serialization order.
pub const SWATCH_KEYS: [ColorKey; 8] = [
    ColorKey { key: "gray", label: "Gray", default: "#878C94" },
    ColorKey { key: "red", label: "Red", default: "#C70032" },
    ColorKey { key: "orange", label: "Orange", default: "#EA712F" },
    ColorKey { key: "lime", label: "Lime", default: "#91DC00" },
    ColorKey { key: "green", label: "Green", default: "#2D7E24" },
    ColorKey { key: "blue", label: "Blue", default: "#009FDB" },
    ColorKey { key: "cobalt", label: "Cobalt", default: "#00388F" },
    ColorKey { key: "mint", label: "Mint", default: "#49EEDC" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_valid_hex;

    #[test]
    fn test_key_list_sizes() {
        assert_eq!(BRAND_KEYS.len(), 7);
        assert_eq!(SWATCH_KEYS.len(), 8);
    }

    #[test]
    fn test_all_defaults_are_valid_hex() {
        for key in BRAND_KEYS.iter().chain(SWATCH_KEYS.iter()) {
            assert!(
                is_valid_hex(key.default),
                "Default for '{}' is not valid hex: {}",
                key.key,
                key.default
            );
            assert_eq!(key.default_color().as_str(), key.default);
        }
    }

    #[test]
    fn test_brand_order() {
        let keys: Vec<&str> = BRAND_KEYS.iter().map(|k| k.key).collect();
        assert_eq!(
            keys,
            ["primary", "secondary", "success", "danger", "warning", "info", "dark"]
        );
    }

    #[test]
    fn test_swatch_order() {
        let keys: Vec<&str> = SWATCH_KEYS.iter().map(|k| k.key).collect();
        assert_eq!(
            keys,
            ["gray", "red", "orange", "lime", "green", "blue", "cobalt", "mint"]
        );
    }

    #[test]
    fn test_keys_are_unique_within_each_list() {
        for list in [&BRAND_KEYS[..], &SWATCH_KEYS[..]] {
            for (i, a) in list.iter().enumerate() {
                for b in &list[i + 1..] {
                    assert_ne!(a.key, b.key, "Duplicate key '{}'", a.key);
                }
            }
        }
    }
}
