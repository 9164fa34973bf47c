//! # Dominant Hue
//!
//! Determine the dominant hue of an image and name its color family.
//!
//! The analysis:
//! - Decodes the image and resizes it to a fixed working resolution
//! - Averages all pixels except near-black ones
//! - Converts the mean color to HSV
//! - Maps the hue angle to a named band (Red, Orange, ... Purple/Magenta)
//!
//! ## Example
//!
//! ```rust,no_run
//! use dominant_hue::{analyze_image, HueOutcome};
//! use std::path::Path;
//!
//! match analyze_image(Path::new("photo.jpg"))? {
//!     HueOutcome::Dominant(result) => println!("{} at {:.1}°", result.color_name, result.hue_degrees),
//!     HueOutcome::TooDark => println!("too dark"),
//! }
//! # Ok::<(), dominant_hue::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;

pub use color::{classify_hue, ColorName, HueAnalyzer, HueOutcome};
pub use config::{AnalyzerConfig, OutputFormat};
pub use error::{AnalysisError, Result};

/// Dominant color of an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorResult {
    /// Mean R, G, B of qualifying pixels (0-255 scale)
    pub average_rgb: [f64; 3],
    /// Hue angle of the mean color, in `[0, 360)`
    pub hue_degrees: f64,
    /// HSV saturation of the mean color
    pub saturation: f64,
    /// HSV value of the mean color
    pub value: f64,
    /// Named hue band
    pub color_name: ColorName,
    /// Mean color as `#RRGGBB`
    pub hex: String,
    /// Number of pixels that passed the dark-pixel filter
    pub pixel_count: usize,
}

/// Analyze the dominant hue of an image file with default settings
///
/// # Errors
///
/// Returns `AnalysisError` if the file does not exist or cannot be decoded.
/// An image with no qualifying pixels is `Ok(HueOutcome::TooDark)`.
pub fn analyze_image(image_path: &Path) -> Result<HueOutcome> {
    analyze_image_with_config(image_path, &AnalyzerConfig::default())
}

/// Analyze the dominant hue of an image file
pub fn analyze_image_with_config(image_path: &Path, config: &AnalyzerConfig) -> Result<HueOutcome> {
    let image = image_loader::load_image(image_path, config.downsample)?;
    let outcome = HueAnalyzer::new().analyze_image(&image);

    match &outcome {
        HueOutcome::Dominant(result) => info!(
            path = %image_path.display(),
            hue = result.hue_degrees,
            color = %result.color_name,
            "analysis complete"
        ),
        HueOutcome::TooDark => info!(path = %image_path.display(), "image too dark"),
    }

    Ok(outcome)
}
