// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Image input handling.
//!
//! An [`ImageSource`] is any of the accepted image forms; it is normalized to
//! a [`Canvas`] before drawing.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use ndarray::Array3;

use crate::canvas::Canvas;
use crate::error::Result;

/// Represents the accepted image inputs.
#[derive(Debug, Clone)]
pub enum Source {
    /// Path to an image file.
    Path(PathBuf),
    /// Raw HWC u8 array in BGR (or BGRA, or grayscale) order.
    Array(Array3<u8>),
    /// An existing canvas.
    Canvas(Canvas),
}

/// Alias matching the role of [`Source`] in the drawing API.
pub type ImageSource = Source;

impl Source {
    /// Normalize into a drawable canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or the array has an
    /// unsupported shape.
    pub fn into_canvas(self) -> Result<Canvas> {
        match self {
            Self::Path(path) => Canvas::open(path),
            Self::Array(array) => Canvas::from_array(&array),
            Self::Canvas(canvas) => Ok(canvas),
        }
    }

    /// Get the path if this source has one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Self::Path(PathBuf::from(s))
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Self::Path(PathBuf::from(s))
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Array3<u8>> for Source {
    fn from(array: Array3<u8>) -> Self {
        Self::Array(array)
    }
}

impl From<Canvas> for Source {
    fn from(canvas: Canvas) -> Self {
        Self::Canvas(canvas)
    }
}

impl From<DynamicImage> for Source {
    fn from(image: DynamicImage) -> Self {
        Self::Canvas(Canvas::from_image(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnotateError;

    #[test]
    fn test_source_from_str() {
        let source = Source::from("image.jpg");
        assert_eq!(source.path(), Some(Path::new("image.jpg")));
    }

    #[test]
    fn test_array_into_canvas() {
        let source = Source::from(Array3::<u8>::zeros((4, 6, 3)));
        assert!(source.path().is_none());
        let canvas = source.into_canvas().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (6, 4));
    }

    #[test]
    fn test_bad_array_is_invalid_input() {
        let source = Source::from(Array3::<u8>::zeros((4, 6, 5)));
        assert!(matches!(
            source.into_canvas(),
            Err(AnnotateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_canvas_passes_through() {
        let canvas = Canvas::new(3, 2);
        let out = Source::from(canvas).into_canvas().unwrap();
        assert_eq!((out.width(), out.height()), (3, 2));
    }
}
