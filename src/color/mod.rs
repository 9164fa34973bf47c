//! Color analysis and classification module
//!
//! This module handles RGB to HSV conversion, averaging of qualifying
//! pixels, and naming of the resulting hue.

pub mod analysis;
pub mod conversion;
pub mod naming;

pub use analysis::{is_dark_pixel, HueAnalyzer, HueOutcome};
pub use conversion::{ColorConverter, HsvColor};
pub use naming::{classify_hue, ColorName};
