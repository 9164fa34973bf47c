//! Color space conversion utilities
//!
//! Converts averaged 8-bit RGB values into the HSV representation used for
//! hue classification, and formats colors for display.

use palette::{encoding, FromColor, Hsv, Srgb};

use crate::constants::{hue_bands::FULL_CIRCLE, thresholds::CHANNEL_MAX};

/// Hue is rounded to this many steps per degree (1e-9°)
///
/// The HSV transform carries error around 1e-13°, enough to push a hue that
/// sits exactly on a band boundary into the band below it.
const HUE_STEPS_PER_DEGREE: f64 = 1e9;

/// HSV triple with hue in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    /// Hue angle in `[0, 360)`
    pub hue_degrees: f64,
    /// Saturation in `[0, 1]`
    pub saturation: f64,
    /// Value (brightness) in `[0, 1]`
    pub value: f64,
}

/// Stateless converter between RGB and HSV
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB on the 0-255 scale (fractional values allowed) to HSV
    ///
    /// Channels are normalized to `[0, 1]` before the standard transform.
    /// Achromatic input (all channels equal) has a hue of 0.
    pub fn rgb_to_hsv(&self, r: f64, g: f64, b: f64) -> HsvColor {
        let srgb: Srgb<f64> = Srgb::new(r / CHANNEL_MAX, g / CHANNEL_MAX, b / CHANNEL_MAX);
        let hsv: Hsv<encoding::Srgb, f64> = Hsv::from_color(srgb);
        let hue = hsv.hue.into_positive_degrees();
        let hue = (hue * HUE_STEPS_PER_DEGREE).round() / HUE_STEPS_PER_DEGREE;

        HsvColor {
            hue_degrees: Self::normalize_degrees(hue),
            saturation: hsv.saturation,
            value: hsv.value,
        }
    }

    /// Wrap an angle into `[0, 360)`
    ///
    /// Rounding in the positive-angle wrap can land exactly on 360, which
    /// belongs to 0. Non-finite input is returned unchanged.
    pub fn normalize_degrees(degrees: f64) -> f64 {
        if !degrees.is_finite() {
            return degrees;
        }
        let wrapped = degrees.rem_euclid(FULL_CIRCLE);
        if wrapped >= FULL_CIRCLE {
            0.0
        } else {
            wrapped
        }
    }

    /// Format an averaged RGB color as `#RRGGBB`
    pub fn rgb_to_hex(&self, rgb: [f64; 3]) -> String {
        let [r, g, b] = rgb.map(|c| c.round().clamp(0.0, CHANNEL_MAX) as u8);
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_primary_hues() {
        let converter = ColorConverter::new();

        let red = converter.rgb_to_hsv(255.0, 0.0, 0.0);
        assert_close(red.hue_degrees, 0.0);
        assert_close(red.saturation, 1.0);
        assert_close(red.value, 1.0);

        assert_close(converter.rgb_to_hsv(0.0, 255.0, 0.0).hue_degrees, 120.0);
        assert_close(converter.rgb_to_hsv(0.0, 0.0, 255.0).hue_degrees, 240.0);
    }

    #[test]
    fn test_secondary_hues() {
        let converter = ColorConverter::new();
        assert_close(converter.rgb_to_hsv(255.0, 255.0, 0.0).hue_degrees, 60.0);
        assert_close(converter.rgb_to_hsv(0.0, 255.0, 255.0).hue_degrees, 180.0);
        assert_close(converter.rgb_to_hsv(255.0, 0.0, 255.0).hue_degrees, 300.0);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let converter = ColorConverter::new();
        let gray = converter.rgb_to_hsv(128.0, 128.0, 128.0);
        assert_close(gray.hue_degrees, 0.0);
        assert_close(gray.saturation, 0.0);
    }

    #[test]
    fn test_red_with_blue_tint_wraps_high() {
        // max = red, blue > green gives a negative raw angle
        let hsv = ColorConverter::new().rgb_to_hsv(255.0, 0.0, 10.0);
        assert!(hsv.hue_degrees > 357.0 && hsv.hue_degrees < 360.0);
    }

    #[test]
    fn test_boundary_hues_are_exact() {
        let converter = ColorConverter::new();
        // (r - g) / d + 4 = 3.5 sextants
        assert_eq!(converter.rgb_to_hsv(28.0, 33.0, 38.0).hue_degrees, 210.0);
        // (b - r) / d + 2 = 7/6 sextants
        assert_eq!(converter.rgb_to_hsv(31.0, 37.0, 1.0).hue_degrees, 70.0);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_close(ColorConverter::normalize_degrees(360.0), 0.0);
        assert_close(ColorConverter::normalize_degrees(-30.0), 330.0);
        assert_close(ColorConverter::normalize_degrees(725.0), 5.0);
        assert!(ColorConverter::normalize_degrees(f64::NAN).is_nan());
    }

    #[test]
    fn test_rgb_to_hex() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hex([255.0, 0.0, 0.0]), "#FF0000");
        assert_eq!(converter.rgb_to_hex([127.6, 0.4, 15.0]), "#80000F");
    }
}
