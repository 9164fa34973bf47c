//! Dominant hue extraction
//!
//! Averages every pixel that survives the dark-pixel filter, converts the
//! mean color to HSV and names the hue family. Runs in a single pass with
//! three running sums and a counter.

use image::RgbImage;
use tracing::debug;

use crate::color::{classify_hue, ColorConverter};
use crate::constants::thresholds::DARK_PIXEL_THRESHOLD;
use crate::ColorResult;

/// Outcome of a hue analysis
#[derive(Debug, Clone, PartialEq)]
pub enum HueOutcome {
    /// At least one pixel qualified; carries the classification
    Dominant(ColorResult),
    /// Every pixel was near-black, so no hue can be determined
    TooDark,
}

impl HueOutcome {
    /// Borrow the result if a hue was determined
    pub fn result(&self) -> Option<&ColorResult> {
        match self {
            HueOutcome::Dominant(result) => Some(result),
            HueOutcome::TooDark => None,
        }
    }

    pub fn is_too_dark(&self) -> bool {
        matches!(self, HueOutcome::TooDark)
    }
}

/// Returns true when all three channels are below the dark threshold
pub fn is_dark_pixel([r, g, b]: [u8; 3]) -> bool {
    r < DARK_PIXEL_THRESHOLD && g < DARK_PIXEL_THRESHOLD && b < DARK_PIXEL_THRESHOLD
}

/// Running per-channel sums over qualifying pixels
#[derive(Debug, Default, Clone, Copy)]
struct ChannelSums {
    red: u64,
    green: u64,
    blue: u64,
    count: usize,
}

impl ChannelSums {
    fn add(&mut self, [r, g, b]: [u8; 3]) {
        self.red += u64::from(r);
        self.green += u64::from(g);
        self.blue += u64::from(b);
        self.count += 1;
    }

    fn mean(&self) -> Option<[f64; 3]> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some([
            self.red as f64 / n,
            self.green as f64 / n,
            self.blue as f64 / n,
        ])
    }
}

/// Analyzer computing the dominant hue of a pixel collection
#[derive(Debug, Default, Clone)]
pub struct HueAnalyzer {
    converter: ColorConverter,
}

impl HueAnalyzer {
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
        }
    }

    /// Compute the dominant hue of a sequence of RGB triples
    ///
    /// Near-black pixels are excluded from the average. Returns
    /// [`HueOutcome::TooDark`] when nothing qualifies.
    pub fn analyze<I>(&self, pixels: I) -> HueOutcome
    where
        I: IntoIterator<Item = [u8; 3]>,
    {
        let mut sums = ChannelSums::default();
        let mut skipped = 0usize;

        for pixel in pixels {
            if is_dark_pixel(pixel) {
                skipped += 1;
                continue;
            }
            sums.add(pixel);
        }

        let Some(average_rgb) = sums.mean() else {
            debug!(skipped, "no pixels above dark threshold");
            return HueOutcome::TooDark;
        };

        let [r, g, b] = average_rgb;
        let hsv = self.converter.rgb_to_hsv(r, g, b);
        let color_name = classify_hue(hsv.hue_degrees);

        debug!(
            counted = sums.count,
            skipped,
            hue = hsv.hue_degrees,
            %color_name,
            "computed dominant hue"
        );

        HueOutcome::Dominant(ColorResult {
            average_rgb,
            hue_degrees: hsv.hue_degrees,
            saturation: hsv.saturation,
            value: hsv.value,
            color_name,
            hex: self.converter.rgb_to_hex(average_rgb),
            pixel_count: sums.count,
        })
    }

    /// Compute the dominant hue of a decoded RGB image
    pub fn analyze_image(&self, image: &RgbImage) -> HueOutcome {
        self.analyze(image.pixels().map(|p| p.0))
    }

    /// Compute the dominant hue of a packed `RGBRGB...` buffer
    ///
    /// A trailing partial triple is ignored.
    pub fn analyze_raw(&self, data: &[u8]) -> HueOutcome {
        self.analyze(data.chunks_exact(3).map(|c| [c[0], c[1], c[2]]))
    }
}
