// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Visualization tools: the color palette and the display window.

/// Color definitions and color arguments.
pub mod color;

#[cfg(feature = "visualize")]
pub mod viewer;

pub use color::{Bgr, Color, ColorSpec, Colors};

#[cfg(feature = "visualize")]
pub use viewer::Viewer;
