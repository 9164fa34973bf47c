//! Hue angle to color family mapping

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::hue_bands::{
    BLUE_START, CYAN_START, FULL_CIRCLE, GREEN_START, ORANGE_START, PURPLE_START, RED_START,
    YELLOW_START,
};

/// Closed set of color family labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorName {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    #[serde(rename = "Purple/Magenta")]
    PurpleMagenta,
    /// Hue outside `[0, 360)` or not a number
    Unknown,
}

impl ColorName {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ColorName::Red => "Red",
            ColorName::Orange => "Orange",
            ColorName::Yellow => "Yellow",
            ColorName::Green => "Green",
            ColorName::Cyan => "Cyan",
            ColorName::Blue => "Blue",
            ColorName::PurpleMagenta => "Purple/Magenta",
            ColorName::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a hue angle in degrees
///
/// Bands are closed-open and checked in order; red wraps across 0.
/// Values the table cannot place (negative, >= 360, NaN) yield
/// [`ColorName::Unknown`].
pub fn classify_hue(hue_degrees: f64) -> ColorName {
    let h = hue_degrees;
    if (RED_START..FULL_CIRCLE).contains(&h) || (0.0..ORANGE_START).contains(&h) {
        ColorName::Red
    } else if (ORANGE_START..YELLOW_START).contains(&h) {
        ColorName::Orange
    } else if (YELLOW_START..GREEN_START).contains(&h) {
        ColorName::Yellow
    } else if (GREEN_START..CYAN_START).contains(&h) {
        ColorName::Green
    } else if (CYAN_START..BLUE_START).contains(&h) {
        ColorName::Cyan
    } else if (BLUE_START..PURPLE_START).contains(&h) {
        ColorName::Blue
    } else if (PURPLE_START..RED_START).contains(&h) {
        ColorName::PurpleMagenta
    } else {
        ColorName::Unknown
    }
}
