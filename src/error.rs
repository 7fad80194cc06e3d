// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the annotation library.

use std::fmt;

/// Result type alias for annotation operations.
pub type Result<T> = std::result::Result<T, AnnotateError>;

/// Main error type for the annotation library.
#[derive(Debug)]
pub enum AnnotateError {
    /// Input value has an unsupported shape or form.
    InvalidInput(String),
    /// Number of colors or labels does not match the number of box groups.
    MismatchedCardinality {
        /// What was counted against the box groups (e.g. "colors", "labels").
        what: &'static str,
        /// Number of box groups.
        expected: usize,
        /// Number of items supplied.
        actual: usize,
    },
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
    /// Error decoding or encoding images.
    ImageError(String),
    /// No usable font for drawing text.
    FontError(String),
    /// Visualizer error.
    VisualizerError(String),
    /// Feature not enabled.
    FeatureNotEnabled(String),
}

impl fmt::Display for AnnotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedCardinality {
                what,
                expected,
                actual,
            } => write!(
                f,
                "Mismatched cardinality: got {actual} {what} for {expected} box group(s)"
            ),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
            Self::FeatureNotEnabled(msg) => write!(f, "Feature not enabled: {msg}"),
        }
    }
}

impl std::error::Error for AnnotateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnnotateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for AnnotateError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}
