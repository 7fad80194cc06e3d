// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Bounding Box Annotation Library
//!
//! Draw detection bounding boxes and their labels onto images for visual
//! inspection. Images can be given as a file path, an OpenCV-style BGR pixel
//! array, or an existing [`Canvas`]; the annotated image can be shown in a
//! window and/or saved to disk.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bbox_annotate::{Color, DrawConfig, draw_bboxes, draw_bboxes_with_label};
//! use ndarray::array;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Two groups of boxes: x1, y1, x2, y2[, score]
//!     let cats = array![[10.0_f32, 20.0, 50.0, 60.0, 0.87]];
//!     let dogs = array![[70.0_f32, 15.0, 120.0, 90.0, 0.65]];
//!
//!     // Boxes only, one color per group, saved without opening a window
//!     let config = DrawConfig::new().with_show(false).with_out_file("boxes.png");
//!     draw_bboxes(
//!         "image.jpg",
//!         vec![cats.clone(), dogs.clone()],
//!         vec![Color::Red, Color::Blue],
//!         &config,
//!     )?;
//!
//!     // Boxes with "name|score" labels, shown until a key is pressed
//!     let config = DrawConfig::new().with_top_k(10).with_win_name("detections");
//!     draw_bboxes_with_label("image.jpg", vec![cats, dogs], ["cat", "dog"], &config)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Inputs
//!
//! | Parameter | Accepted forms |
//! |-----------|----------------|
//! | image | path (`&str`, `PathBuf`), `Array3<u8>` (HWC, BGR/BGRA/gray), [`Canvas`], `DynamicImage` |
//! | boxes | one `Array2<f32>` group or `Vec<Array2<f32>>` |
//! | colors | [`Color`], BGR `[u8; 3]`, or a `Vec` of either (one per group) |
//! | labels | label file path, list of names, or a built-in [`Dataset`] |
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`annotate`] | [`draw_bboxes`] and [`draw_bboxes_with_label`] |
//! | [`config`] | [`DrawConfig`] builder |
//! | [`canvas`] | [`Canvas`] image handle: open, draw, show, save |
//! | [`draw`] | [`Draw`] primitives and per-group drawing loops |
//! | [`boxes`] | [`Bboxes`] groups |
//! | [`labels`] | [`LabelSource`] resolution and dataset presets |
//! | [`source`] | [`ImageSource`] input normalization |
//! | [`visualizer`] | [`Color`] palette and the display window |
//! | [`error`] | Error types ([`AnnotateError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Window display through `minifb` (default) |

// Modules
pub mod annotate;
pub mod boxes;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod font;
pub mod labels;
pub mod logging;
pub mod source;
pub mod visualizer;

// Re-export main types for convenience
pub use annotate::{draw_bboxes, draw_bboxes_with_label};
pub use boxes::Bboxes;
pub use canvas::Canvas;
pub use config::DrawConfig;
pub use draw::Draw;
pub use error::{AnnotateError, Result};
pub use labels::{Dataset, LabelSource, read_labels};
pub use source::{ImageSource, Source};
pub use visualizer::{Bgr, Color, ColorSpec, Colors};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
