//! Runtime options for the dominant_hue analysis.
//!
//! Only presentation and performance settings live here. The dark-pixel
//! threshold and hue bands are fixed in [`crate::constants`].
//!
//! ```no_run
//! use dominant_hue::AnalyzerConfig;
//! use std::path::Path;
//!
//! let config = AnalyzerConfig::from_json_file(Path::new("hue.json"))?;
//! # Ok::<(), dominant_hue::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// How the CLI reports a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON of the result record
    Json,
}

/// Analyzer options, loadable from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Resize to the working resolution before averaging
    pub downsample: bool,

    /// Output format for the CLI
    pub output: OutputFormat,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            downsample: true,
            output: OutputFormat::Text,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("cannot read {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("invalid JSON in {}", path.display()), e)
        })
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("cannot write {}", path.display()), e)
        })
    }
}
