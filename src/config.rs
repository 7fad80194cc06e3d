// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawing configuration.
//!
//! This module defines the [`DrawConfig`] struct, which controls how boxes
//! and labels are drawn and what happens to the annotated image afterwards
//! (display in a window, saving to disk).

use std::path::PathBuf;
use std::time::Duration;

use crate::visualizer::color::ColorSpec;

/// Configuration for drawing boxes and labels.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use bbox_annotate::{Color, DrawConfig};
///
/// let config = DrawConfig::new()
///     .with_top_k(5)
///     .with_thickness(2)
///     .with_bbox_color(Color::Red)
///     .with_show(false)
///     .with_out_file("annotated.png");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    /// Maximum boxes drawn per group, taken in input order. `0` draws all.
    pub top_k: usize,
    /// Line thickness of box outlines in pixels.
    pub thickness: u32,
    /// Label text height in pixels.
    pub font_size: f32,
    /// Box color for labeled drawing.
    pub bbox_color: ColorSpec,
    /// Text color for labeled drawing.
    pub text_color: ColorSpec,
    /// Whether to show the annotated image in a window.
    pub show: bool,
    /// Window title.
    pub win_name: String,
    /// How long the window stays open. Zero waits for a key press or for
    /// the window to be closed.
    pub wait_time: Duration,
    /// Where to save the annotated image, if anywhere.
    pub out_file: Option<PathBuf>,
    /// TrueType font for label text. If `None`, a font is searched for on
    /// the first text draw.
    pub font: Option<PathBuf>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            top_k: 0,
            thickness: 1,
            font_size: 12.0,
            bbox_color: ColorSpec::default(),
            text_color: ColorSpec::default(),
            show: true,
            win_name: String::new(),
            wait_time: Duration::ZERO,
            out_file: None,
            font: None,
        }
    }
}

impl DrawConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw at most `top_k` boxes per group (`0` draws all).
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the box line thickness.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the label text height in pixels.
    #[must_use]
    pub const fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the box color used by labeled drawing.
    #[must_use]
    pub fn with_bbox_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.bbox_color = color.into();
        self
    }

    /// Set the text color used by labeled drawing.
    #[must_use]
    pub fn with_text_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Enable or disable the display window.
    #[must_use]
    pub const fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_win_name(mut self, win_name: impl Into<String>) -> Self {
        self.win_name = win_name.into();
        self
    }

    /// Set how long the window stays open.
    #[must_use]
    pub const fn with_wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Save the annotated image to `path`.
    #[must_use]
    pub fn with_out_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_file = Some(path.into());
        self
    }

    /// Use the TrueType font at `path` for label text.
    #[must_use]
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = Some(path.into());
        self
    }
}
