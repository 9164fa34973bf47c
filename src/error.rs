//! Error types for the dominant_hue library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dominant_hue operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures that prevent a hue from being computed
///
/// An image that is too dark to classify is not an error; see
/// [`HueOutcome::TooDark`](crate::color::HueOutcome::TooDark).
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input path does not reference an existing file
    #[error("File not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// Image format could not be determined from contents or extension
    #[error("Unsupported image format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Full message including the underlying cause, if any
    pub fn details(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{}: {}", self, source),
            None => self.to_string(),
        }
    }

    /// Get user-friendly error description for display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NotFound { path } => {
                format!("Error: File not found at {}", path.display())
            }
            AnalysisError::ConfigError { .. } => {
                format!("Error loading configuration: {}", self.details())
            }
            _ => format!("Error analyzing image: {}", self.details()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AnalysisError::NotFound {
            path: PathBuf::from("missing.png"),
        };
        assert_eq!(err.user_message(), "Error: File not found at missing.png");
    }

    #[test]
    fn test_image_load_includes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad header");
        let err = AnalysisError::image_load("Failed to decode image: x.png", io);

        let message = err.user_message();
        assert!(message.starts_with("Error analyzing image: "));
        assert!(message.contains("bad header"));
    }
}
