//! Fixed policy constants for hue analysis
//!
//! These values are part of the algorithm, not tunables. They are named here
//! so boundary behavior can be tested against the same numbers the analyzer
//! uses.

/// Pixel filtering thresholds
pub mod thresholds {
    /// A pixel is treated as near-black, and skipped, when every channel is
    /// strictly below this value (0-255 scale)
    pub const DARK_PIXEL_THRESHOLD: u8 = 20;

    /// Maximum value of an 8-bit channel
    pub const CHANNEL_MAX: f64 = 255.0;
}

/// Image processing parameters
pub mod processing {
    /// Working resolution the loader resizes every image to before analysis
    pub const WORKING_WIDTH: u32 = 100;
    pub const WORKING_HEIGHT: u32 = 100;
}

/// Hue band boundaries in degrees
///
/// Each band is closed at its lower bound and open at its upper bound.
/// Red wraps around the circle: `[RED_START, 360) ∪ [0, ORANGE_START)`.
pub mod hue_bands {
    pub const FULL_CIRCLE: f64 = 360.0;

    pub const ORANGE_START: f64 = 15.0;
    pub const YELLOW_START: f64 = 45.0;
    pub const GREEN_START: f64 = 70.0;
    pub const CYAN_START: f64 = 150.0;
    pub const BLUE_START: f64 = 210.0;
    pub const PURPLE_START: f64 = 270.0;
    pub const RED_START: f64 = 330.0;
}
