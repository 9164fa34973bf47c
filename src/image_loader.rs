//! Image decoding for hue analysis
//!
//! Any format the `image` crate decodes is accepted; the format is sniffed
//! from the file contents, falling back to the extension. Decoded images are
//! resized to the fixed working resolution and converted to 8-bit RGB, which
//! drops any alpha channel.
//!
//! Resizing only bounds the cost of the averaging pass. The aspect ratio is
//! not preserved, matching a plain fixed-size resize.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage, ImageReader, RgbImage};
use tracing::debug;

use crate::constants::processing::{WORKING_HEIGHT, WORKING_WIDTH};
use crate::error::{AnalysisError, Result};

/// Load an image from disk as 8-bit RGB
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `downsample` - Resize to the working resolution before returning
///
/// # Errors
///
/// - [`AnalysisError::NotFound`] if the path does not exist
/// - [`AnalysisError::UnsupportedFormat`] if the format cannot be determined
/// - [`AnalysisError::ImageLoadError`] if opening or decoding fails
pub fn load_image(path: &Path, downsample: bool) -> Result<RgbImage> {
    let img = decode(path)?;
    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded image"
    );

    let img = if downsample {
        img.resize_exact(WORKING_WIDTH, WORKING_HEIGHT, FilterType::CatmullRom)
    } else {
        img
    };

    Ok(img.to_rgb8())
}

/// Open and decode an image without any resizing or conversion
fn decode(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(AnalysisError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)
        .map_err(|e| {
            AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
        })?
        .with_guessed_format()
        .map_err(|e| {
            AnalysisError::image_load(format!("Failed to read image file: {}", path.display()), e)
        })?;

    if reader.format().is_none() {
        return Err(AnalysisError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })
}
