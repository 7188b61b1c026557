//! RGB color handling with hex formatting and Lab lightness transforms.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightness shift in Lab L per unit of brighten/darken magnitude.
const LIGHTNESS_STEP: f64 = 18.0;

// D65 standard illuminant, 2 degree observer
const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;

const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Brighten/darken operate on the CIE Lab lightness channel so steps are
/// perceptually even, and clamp at the sRGB gamut boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use tintdeck::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Converts the color to CIE Lab.
    ///
    /// # Returns
    ///
    /// A tuple `(l, a, b)` where `l` is lightness (0.0 black to 100.0 white)
    /// and `a`/`b` are the opponent color axes.
    #[must_use]
    pub fn to_lab(&self) -> (f64, f64, f64) {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };

        let r = linear(self.r);
        let g = linear(self.g);
        let b = linear(self.b);

        let f = |t: f64| {
            if t > T3 {
                t.powf(1.0 / 3.0)
            } else {
                t / T2 + T0
            }
        };

        let x = f((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
        let y = f((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / YN);
        let z = f((0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / ZN);

        (116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }

    /// Creates an `RgbColor` from CIE Lab, clamping each channel to 0-255.
    ///
    /// Out-of-gamut results (for example an L pushed past white) saturate at
    /// the boundary channel values rather than wrapping.
    #[must_use]
    pub fn from_lab(l: f64, a: f64, b: f64) -> Self {
        let fy = (l + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        let finv = |t: f64| {
            if t > T1 {
                t * t * t
            } else {
                T2 * (t - T0)
            }
        };

        let x = XN * finv(fx);
        let y = YN * finv(fy);
        let z = ZN * finv(fz);

        let gamma = |c: f64| {
            let c = if c <= 0.003_04 {
                12.92 * c
            } else {
                1.055 * c.powf(1.0 / 2.4) - 0.055
            };
            (255.0 * c).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: gamma(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            g: gamma(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
            b: gamma(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
        }
    }

    /// Returns a perceptually brightened version of the color.
    ///
    /// One unit of `amount` raises Lab lightness by 18. Colors at or near
    /// white clamp to white instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintdeck::models::RgbColor;
    ///
    /// let white = RgbColor::new(255, 255, 255);
    /// assert_eq!(white.brighten(2.0), white);
    /// ```
    #[must_use]
    pub fn brighten(&self, amount: f64) -> Self {
        let (l, a, b) = self.to_lab();
        Self::from_lab(l + LIGHTNESS_STEP * amount, a, b)
    }

    /// Returns a perceptually darkened version of the color.
    ///
    /// Mirror of [`RgbColor::brighten`]; colors at or near black clamp to
    /// black.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        self.brighten(-amount)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        let color = RgbColor::new(255, 0, 0);
        assert_eq!(color.to_hex(), "#FF0000");

        let color = RgbColor::new(0, 128, 255);
        assert_eq!(color.to_hex(), "#0080FF");

        let color = RgbColor::new(0, 0, 0);
        assert_eq!(color.to_hex(), "#000000");
    }

    #[test]
    fn test_default() {
        let color = RgbColor::default();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    // Lab conversion tests

    #[test]
    fn test_lab_boundaries() {
        let (l, _, _) = RgbColor::new(255, 255, 255).to_lab();
        assert!((l - 100.0).abs() < 0.01, "White should have L=100, got {l}");

        let (l, a, b) = RgbColor::new(0, 0, 0).to_lab();
        assert!(l.abs() < 0.01, "Black should have L=0, got {l}");
        assert!(a.abs() < 0.01);
        assert!(b.abs() < 0.01);
    }

    #[test]
    fn test_lab_gray_is_neutral() {
        let (_, a, b) = RgbColor::new(128, 128, 128).to_lab();
        assert!(a.abs() < 0.01, "Gray should have a=0, got {a}");
        assert!(b.abs() < 0.01, "Gray should have b=0, got {b}");
    }

    #[test]
    fn test_lab_roundtrip() {
        let colors = vec![
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(0, 159, 219),
            RgbColor::new(199, 0, 50),
            RgbColor::new(135, 140, 148),
            RgbColor::new(37, 48, 58),
        ];

        for color in colors {
            let (l, a, b) = color.to_lab();
            let converted = RgbColor::from_lab(l, a, b);
            // Allow small rounding errors (±1 per channel)
            assert!(
                (i16::from(color.r) - i16::from(converted.r)).abs() <= 1,
                "Red channel mismatch: {} vs {}",
                color.r,
                converted.r
            );
            assert!(
                (i16::from(color.g) - i16::from(converted.g)).abs() <= 1,
                "Green channel mismatch: {} vs {}",
                color.g,
                converted.g
            );
            assert!(
                (i16::from(color.b) - i16::from(converted.b)).abs() <= 1,
                "Blue channel mismatch: {} vs {}",
                color.b,
                converted.b
            );
        }
    }

    #[test]
    fn test_brighten_raises_lightness() {
        let base = RgbColor::new(0, 159, 219);
        let brighter = base.brighten(1.0);

        let (l_base, _, _) = base.to_lab();
        let (l_brighter, _, _) = brighter.to_lab();
        assert!(
            l_brighter > l_base,
            "Brightened color should be lighter: {l_brighter} vs {l_base}"
        );
    }

    #[test]
    fn test_darken_lowers_lightness() {
        let base = RgbColor::new(0, 159, 219);
        let darker = base.darken(1.0);

        let (l_base, _, _) = base.to_lab();
        let (l_darker, _, _) = darker.to_lab();
        assert!(
            l_darker < l_base,
            "Darkened color should be darker: {l_darker} vs {l_base}"
        );
    }

    #[test]
    fn test_brighten_clamps_at_white() {
        let white = RgbColor::new(255, 255, 255);
        assert_eq!(white.brighten(0.5), white);
        assert_eq!(white.brighten(2.0), white);

        let near_white = RgbColor::new(254, 254, 254);
        assert_eq!(near_white.brighten(2.0), white);
    }

    #[test]
    fn test_darken_clamps_at_black() {
        let black = RgbColor::new(0, 0, 0);
        assert_eq!(black.darken(0.5), black);
        assert_eq!(black.darken(2.0), black);

        let near_black = RgbColor::new(1, 1, 1);
        assert_eq!(near_black.darken(2.0), black);
    }

    #[test]
    fn test_brighten_deterministic() {
        let base = RgbColor::new(145, 220, 0);
        assert_eq!(base.brighten(1.5), base.brighten(1.5));
        assert_eq!(base.darken(1.5), base.darken(1.5));
    }
}
