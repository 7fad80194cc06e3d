// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Image viewer for displaying annotated images.

use std::time::{Duration, Instant};

use image::RgbImage;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::error::{AnnotateError, Result};

/// A simple image viewer using minifb.
pub struct Viewer {
    window: Window,
    pub width: usize,
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width.max(1),
            height.max(1),
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| AnnotateError::VisualizerError(format!("Failed to create window: {e}")))?;

        // Limit update rate
        window.set_target_fps(60);

        Ok(Self {
            window,
            width,
            height,
            buffer: Vec::new(),
        })
    }

    /// Update the window with a new image.
    ///
    /// Returns `false` if the window has been closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the window buffer cannot be updated.
    pub fn update(&mut self, image: &RgbImage) -> Result<bool> {
        if !self.window.is_open() {
            return Ok(false);
        }

        let (img_width, img_height) = (image.width() as usize, image.height() as usize);
        self.buffer.clear();
        self.buffer.reserve(img_width * img_height);

        // Pack as 0x00RRGGBB
        for pixel in image.pixels() {
            let [r, g, b] = pixel.0;
            self.buffer
                .push((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b));
        }

        self.width = img_width;
        self.height = img_height;

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| AnnotateError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the window responsive until `duration` elapses, a key is pressed,
    /// or the window is closed. A zero duration waits without a time limit.
    ///
    /// Returns `false` if the window was closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the window buffer cannot be refreshed.
    pub fn wait(&mut self, duration: Duration) -> Result<bool> {
        if self.buffer.is_empty() {
            return Ok(true);
        }

        let start = Instant::now();
        loop {
            if !self.window.is_open() {
                return Ok(false);
            }
            if !self.window.get_keys_pressed(KeyRepeat::No).is_empty()
                || self.window.is_key_down(Key::Escape)
            {
                return Ok(true);
            }
            if !duration.is_zero() && start.elapsed() >= duration {
                return Ok(true);
            }
            // minifb paces this loop through the target fps
            self.window
                .update_with_buffer(&self.buffer, self.width, self.height)
                .map_err(|e| {
                    AnnotateError::VisualizerError(format!("Failed to update window: {e}"))
                })?;
        }
    }
}
