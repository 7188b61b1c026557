//! Nine-stop tint/shade ramps derived from a single base color.
//!
//! A ramp is pure derived data: it is never mutated in place, only
//! recomputed from a base `HexColor`. Stop 500 always carries the base
//! string verbatim; the eight derived stops are 6-digit uppercase hex.

use super::HexColor;

/// Ramp stop labels in order of increasing darkness.
pub const STOP_LEVELS: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Lightness magnitudes for the four stops on either side of the base.
///
/// Index 0 applies to the stop nearest the edge (100 or 900); brightening is
/// strongest at 100 and darkening strongest at 900.
const EDGE_MAGNITUDES: [f64; 4] = [2.0, 1.5, 1.0, 0.5];

/// An ordered nine-stop shade ramp for one base color.
///
/// # Examples
///
/// ```
/// use tintdeck::models::{HexColor, ShadeRamp};
///
/// let base = HexColor::parse("#009FDB").unwrap();
/// let ramp = ShadeRamp::generate(&base);
/// assert_eq!(ramp.stop(500), Some(&base));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeRamp {
    /// Stops ordered 100 through 900.
    stops: [HexColor; 9],
}

impl ShadeRamp {
    /// Derives the nine stops from a base color.
    ///
    /// Pure and deterministic: the same base always yields the same ramp.
    /// Stops 100-400 brighten the base at decreasing magnitude, stops
    /// 600-900 darken it at increasing magnitude, and stop 500 is the base
    /// unchanged (string-identical, not re-encoded).
    #[must_use]
    pub fn generate(base: &HexColor) -> Self {
        let rgb = base.to_rgb();
        let lighter = |i: usize| HexColor::from(rgb.brighten(EDGE_MAGNITUDES[i]));
        let darker = |i: usize| HexColor::from(rgb.darken(EDGE_MAGNITUDES[i]));

        Self {
            stops: [
                lighter(0),
                lighter(1),
                lighter(2),
                lighter(3),
                base.clone(),
                darker(3),
                darker(2),
                darker(1),
                darker(0),
            ],
        }
    }

    /// Returns the color at a stop level (100, 200, ... 900).
    #[must_use]
    pub fn stop(&self, level: u16) -> Option<&HexColor> {
        let index = STOP_LEVELS.iter().position(|&l| l == level)?;
        Some(&self.stops[index])
    }

    /// Returns the color at a stop index (0-8).
    #[must_use]
    pub fn stop_at(&self, index: usize) -> Option<&HexColor> {
        self.stops.get(index)
    }

    /// Returns the base color (stop 500) verbatim.
    #[must_use]
    pub fn base(&self) -> &HexColor {
        &self.stops[4]
    }

    /// Iterates over `(level, color)` pairs from 100 to 900.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &HexColor)> {
        STOP_LEVELS.into_iter().zip(self.stops.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn test_base_fidelity() {
        // Stop 500 carries the entered text exactly, including case
        for input in ["#009FDB", "#009fdb", "#1AF", "#25303a"] {
            let ramp = ShadeRamp::generate(&hex(input));
            assert_eq!(ramp.stop(500).unwrap().as_str(), input);
            assert_eq!(ramp.base().as_str(), input);
        }
    }

    #[test]
    fn test_determinism() {
        let base = hex("#C70032");
        assert_eq!(ShadeRamp::generate(&base), ShadeRamp::generate(&base));
    }

    #[test]
    fn test_nine_stops_in_order() {
        let ramp = ShadeRamp::generate(&hex("#2D7E24"));
        let levels: Vec<u16> = ramp.iter().map(|(level, _)| level).collect();
        assert_eq!(levels, STOP_LEVELS);
    }

    #[test]
    fn test_derived_stops_are_six_digit_uppercase() {
        let ramp = ShadeRamp::generate(&hex("#9fd"));
        for (level, color) in ramp.iter() {
            if level == 500 {
                continue;
            }
            let text = color.as_str();
            assert_eq!(text.len(), 7, "Stop {level} should be #RRGGBB: {text}");
            assert!(
                text[1..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
                "Stop {level} should be uppercase: {text}"
            );
        }
    }

    #[test]
    fn test_white_clamps_on_light_side() {
        let ramp = ShadeRamp::generate(&hex("#FFFFFF"));
        for level in [100, 200, 300, 400, 500] {
            assert_eq!(
                ramp.stop(level).unwrap().as_str(),
                "#FFFFFF",
                "Brightening white cannot exceed white at stop {level}"
            );
        }
    }

    #[test]
    fn test_black_clamps_on_dark_side() {
        let ramp = ShadeRamp::generate(&hex("#000000"));
        for level in [500, 600, 700, 800, 900] {
            assert_eq!(
                ramp.stop(level).unwrap().as_str(),
                "#000000",
                "Darkening black cannot underflow at stop {level}"
            );
        }
    }

    #[test]
    fn test_lightness_decreases_across_stops() {
        let ramp = ShadeRamp::generate(&hex("#009FDB"));
        let lightness: Vec<f64> = ramp
            .iter()
            .map(|(_, color)| color.to_rgb().to_lab().0)
            .collect();

        for pair in lightness.windows(2) {
            assert!(
                pair[0] > pair[1],
                "Stops should get darker monotonically: {lightness:?}"
            );
        }
    }

    #[test]
    fn test_unknown_stop_level() {
        let ramp = ShadeRamp::generate(&hex("#009FDB"));
        assert!(ramp.stop(50).is_none());
        assert!(ramp.stop(950).is_none());
        assert!(ramp.stop_at(9).is_none());
    }
}
