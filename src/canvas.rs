// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawable image handle.
//!
//! A [`Canvas`] owns an RGB pixel buffer and, once text has been drawn, the
//! font used to render it. Pixel arrays passed in or taken out follow the
//! OpenCV convention: `(height, width, channels)` in BGR order.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use ndarray::Array3;

use crate::draw::Draw;
use crate::error::{AnnotateError, Result};
use crate::font::resolve_font;
use crate::verbose;
use crate::visualizer::color::{Bgr, to_rgb};

/// An image ready for drawing, display and saving.
pub struct Canvas {
    image: RgbImage,
    font_path: Option<PathBuf>,
    font: Option<FontVec>,
}

impl Canvas {
    /// Create a black canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(DynamicImage::ImageRgb8(RgbImage::new(width, height)))
    }

    /// Wrap a decoded image.
    #[must_use]
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgb8(),
            font_path: None,
            font: None,
        }
    }

    /// Load an image file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_image(load_image(path.as_ref())?))
    }

    /// Build a canvas from an HWC pixel array.
    ///
    /// Three channels are read as BGR, four as BGRA (alpha is dropped) and one
    /// as grayscale.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::InvalidInput`] for empty arrays or unsupported
    /// channel counts.
    pub fn from_array(array: &Array3<u8>) -> Result<Self> {
        let (height, width, channels) = array.dim();
        if height == 0 || width == 0 {
            return Err(AnnotateError::InvalidInput(format!(
                "image array must not be empty, got shape ({height}, {width}, {channels})"
            )));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(AnnotateError::InvalidInput(format!(
                "image array must have 1, 3 or 4 channels, got {channels}"
            )));
        }
        let w = u32::try_from(width)
            .map_err(|_| AnnotateError::InvalidInput(format!("image width {width} too large")))?;
        let h = u32::try_from(height)
            .map_err(|_| AnnotateError::InvalidInput(format!("image height {height} too large")))?;

        let image = ImageBuffer::from_fn(w, h, |x, y| {
            let (x, y) = (x as usize, y as usize);
            if channels == 1 {
                let v = array[[y, x, 0]];
                Rgb([v, v, v])
            } else {
                Rgb([array[[y, x, 2]], array[[y, x, 1]], array[[y, x, 0]]])
            }
        });

        Ok(Self {
            image,
            font_path: None,
            font: None,
        })
    }

    /// Copy the pixels out as a `(height, width, 3)` BGR array.
    #[must_use]
    pub fn to_array(&self) -> Array3<u8> {
        let (width, height) = self.image.dimensions();
        Array3::from_shape_fn((height as usize, width as usize, 3), |(y, x, c)| {
            self.image.get_pixel(x as u32, y as u32)[2 - c]
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the RGB pixel buffer.
    #[must_use]
    pub const fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    /// Take the pixels as a `DynamicImage`.
    #[must_use]
    pub fn into_image(self) -> DynamicImage {
        DynamicImage::ImageRgb8(self.image)
    }

    /// Use the font at `path` for text instead of searching for one.
    pub fn set_font_path(&mut self, path: Option<PathBuf>) {
        if self.font_path != path {
            self.font_path = path;
            self.font = None;
        }
    }

    /// Save to `path`; the format follows the file extension.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or encoding fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        self.image.save(path)?;
        verbose!("Saved annotated image to {}", path.display());
        Ok(())
    }

    /// Show the image in a window named `win_name`.
    ///
    /// Blocks for `wait_time`, or until a key is pressed or the window is
    /// closed when `wait_time` is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be opened.
    #[cfg(feature = "visualize")]
    pub fn show(&self, win_name: &str, wait_time: std::time::Duration) -> Result<()> {
        let mut viewer =
            crate::visualizer::Viewer::new(win_name, self.width() as usize, self.height() as usize)?;
        if viewer.update(&self.image)? {
            viewer.wait(wait_time)?;
        }
        Ok(())
    }

    /// Show the image in a window named `win_name`.
    ///
    /// # Errors
    ///
    /// Always fails: display requires the `visualize` feature.
    #[cfg(not(feature = "visualize"))]
    pub fn show(&self, _win_name: &str, _wait_time: std::time::Duration) -> Result<()> {
        Err(AnnotateError::FeatureNotEnabled(
            "showing images requires the 'visualize' feature".to_string(),
        ))
    }
}

impl Draw for Canvas {
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn rectangle(&mut self, bbox: [i32; 4], color: Bgr, thickness: u32) {
        let (x1, x2) = (bbox[0].min(bbox[2]), bbox[0].max(bbox[2]));
        let (y1, y2) = (bbox[1].min(bbox[3]), bbox[1].max(bbox[3]));
        let color = to_rgb(color);

        // Lines grow inward from the box edge
        for t in 0..thickness.max(1).min(i32::MAX as u32) as i32 {
            let (tx1, ty1) = (x1.saturating_add(t), y1.saturating_add(t));
            let (tx2, ty2) = (x2.saturating_sub(t), y2.saturating_sub(t));
            if tx2 < tx1 || ty2 < ty1 {
                break;
            }
            let width = (i64::from(tx2) - i64::from(tx1) + 1).min(i64::from(u32::MAX)) as u32;
            let height = (i64::from(ty2) - i64::from(ty1) + 1).min(i64::from(u32::MAX)) as u32;
            draw_hollow_rect_mut(
                &mut self.image,
                Rect::at(tx1, ty1).of_size(width, height),
                color,
            );
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn text(&mut self, text: &str, position: (i32, i32), color: Bgr, font_size: f32) -> Result<()> {
        if self.font.is_none() {
            self.font = Some(resolve_font(self.font_path.as_deref())?);
        }
        let Some(font) = self.font.as_ref() else {
            return Err(AnnotateError::FontError("font not loaded".to_string()));
        };

        let scale = PxScale::from(font_size);
        // `position` is the bottom-left corner; imageproc draws from the top-left
        let (_, text_height) = text_size(scale, font, text);
        let top = position.1.saturating_sub(text_height as i32);
        draw_text_mut(&mut self.image, to_rgb(color), position.0, top, scale, font, text);
        Ok(())
    }
}

impl Clone for Canvas {
    fn clone(&self) -> Self {
        Self {
            image: self.image.clone(),
            font_path: self.font_path.clone(),
            font: None,
        }
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("font_path", &self.font_path)
            .field("font_loaded", &self.font.is_some())
            .finish()
    }
}

/// Load an image, decoding JPEGs with `jpeg-decoder` to avoid stride issues
/// in the default decoder.
fn load_image(path: &Path) -> Result<DynamicImage> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    if let Some("jpg" | "jpeg") = ext.as_deref() {
        let file = File::open(path)?;
        let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
        if let Ok(pixels) = decoder.decode()
            && let Some(metadata) = decoder.info()
        {
            let width = u32::from(metadata.width);
            let height = u32::from(metadata.height);
            match metadata.pixel_format {
                jpeg_decoder::PixelFormat::RGB24 => {
                    if let Some(buffer) = ImageBuffer::from_raw(width, height, pixels) {
                        return Ok(DynamicImage::ImageRgb8(buffer));
                    }
                }
                jpeg_decoder::PixelFormat::L8 => {
                    if let Some(buffer) = ImageBuffer::from_raw(width, height, pixels) {
                        return Ok(DynamicImage::ImageLuma8(buffer));
                    }
                }
                _ => {}
            }
        }
    }

    // Fallback
    if !path.exists() {
        return Err(AnnotateError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("image not found: {}", path.display()),
        )));
    }
    Ok(image::open(path)?)
}
