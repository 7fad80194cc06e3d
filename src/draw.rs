// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawing primitives and the per-group drawing loops.

use ndarray::{Array2, ArrayView1};

use crate::config::DrawConfig;
use crate::error::Result;
use crate::visualizer::color::Bgr;

/// Rectangle and text drawing against an image.
pub trait Draw {
    /// Draw the outline of `bbox` (`[x1, y1, x2, y2]`, corners inclusive).
    fn rectangle(&mut self, bbox: [i32; 4], color: Bgr, thickness: u32);

    /// Draw `text` with its bottom-left corner at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if no font is available.
    fn text(&mut self, text: &str, position: (i32, i32), color: Bgr, font_size: f32) -> Result<()>;
}

/// Number of rows to draw from a group of `len` boxes.
///
/// `top_k == 0` draws every row; otherwise the first `top_k` rows in input
/// order are drawn.
#[must_use]
pub const fn effective_count(top_k: usize, len: usize) -> usize {
    if top_k == 0 || top_k > len { len } else { top_k }
}

/// Truncate the first four columns of a box row toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_box(row: ArrayView1<'_, f32>) -> [i32; 4] {
    [row[0] as i32, row[1] as i32, row[2] as i32, row[3] as i32]
}

/// Label text for a box row: `name|score` when the row carries a score.
#[must_use]
pub fn label_text(name: &str, row: ArrayView1<'_, f32>) -> String {
    if row.len() > 4 {
        format!("{name}|{:.2}", row[4])
    } else {
        name.to_string()
    }
}

/// Draw the first `top_k` boxes of each group in that group's color.
///
/// # Panics
///
/// Panics if a non-empty group has fewer than four columns; check groups
/// with [`validate_groups`](crate::boxes::validate_groups) first.
pub fn draw_groups<D: Draw + ?Sized>(
    target: &mut D,
    groups: &[Array2<f32>],
    colors: &[Bgr],
    config: &DrawConfig,
) {
    for (group, &color) in groups.iter().zip(colors) {
        let count = effective_count(config.top_k, group.nrows());
        for row in group.rows().into_iter().take(count) {
            target.rectangle(truncate_box(row), color, config.thickness);
        }
    }
}

/// Draw the first `top_k` boxes of each group with its label above the box.
///
/// # Errors
///
/// Returns an error if text cannot be drawn.
///
/// # Panics
///
/// Panics if a non-empty group has fewer than four columns.
pub fn draw_labeled_groups<D: Draw + ?Sized>(
    target: &mut D,
    groups: &[Array2<f32>],
    labels: &[String],
    bbox_color: Bgr,
    text_color: Bgr,
    config: &DrawConfig,
) -> Result<()> {
    for (group, name) in groups.iter().zip(labels) {
        let count = effective_count(config.top_k, group.nrows());
        for row in group.rows().into_iter().take(count) {
            let bbox = truncate_box(row);
            target.rectangle(bbox, bbox_color, config.thickness);
            target.text(
                &label_text(name, row),
                (bbox[0], bbox[1].saturating_sub(2)),
                text_color,
                config.font_size,
            )?;
        }
    }
    Ok(())
}
