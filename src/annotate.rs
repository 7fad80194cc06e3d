// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Box and label annotation.
//!
//! Both operations validate every input before the first pixel is touched,
//! draw onto a [`Canvas`], then optionally show and save the result.

use crate::boxes::{Bboxes, validate_groups};
use crate::canvas::Canvas;
use crate::config::DrawConfig;
use crate::draw::{draw_groups, draw_labeled_groups};
use crate::error::{AnnotateError, Result};
use crate::labels::{LabelSource, read_labels};
use crate::source::ImageSource;
use crate::visualizer::color::Colors;

/// Draw bounding boxes on an image.
///
/// `bboxes` is one group or a list of groups; `colors` is one color for all
/// groups or one per group. Up to `config.top_k` boxes of each group are
/// drawn, in input order. The image is then shown if `config.show` is set and
/// saved if `config.out_file` is set.
///
/// # Example
///
/// ```no_run
/// use bbox_annotate::{Color, DrawConfig, draw_bboxes};
/// use ndarray::array;
///
/// # fn main() -> bbox_annotate::Result<()> {
/// let boxes = array![[10.0_f32, 20.0, 50.0, 60.0], [5.0, 5.0, 30.0, 30.0]];
/// let config = DrawConfig::new().with_show(false).with_out_file("out.png");
/// draw_bboxes("image.jpg", boxes, Color::Red, &config)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the image cannot be loaded, the color count does not
/// match the group count, a group has fewer than four columns, or showing or
/// saving fails.
pub fn draw_bboxes(
    img: impl Into<ImageSource>,
    bboxes: impl Into<Bboxes>,
    colors: impl Into<Colors>,
    config: &DrawConfig,
) -> Result<Canvas> {
    let mut canvas = img.into().into_canvas()?;
    let groups = bboxes.into().into_groups();
    let colors = colors.into().resolve(groups.len())?;
    validate_groups(&groups)?;

    draw_groups(&mut canvas, &groups, &colors, config);
    present(&canvas, config)?;
    Ok(canvas)
}

/// Draw bounding boxes with label text on an image.
///
/// Group `i` is labeled with the `i`-th name from `labels`. Rows with a fifth
/// column get their score appended as `name|0.87`. Boxes use
/// `config.bbox_color` and text uses `config.text_color`.
///
/// # Example
///
/// ```no_run
/// use bbox_annotate::{Dataset, DrawConfig, draw_bboxes_with_label};
/// use ndarray::{Array2, array};
///
/// # fn main() -> bbox_annotate::Result<()> {
/// let mut groups = vec![Array2::<f32>::zeros((0, 5)); 20];
/// groups[14] = array![[10.0, 20.0, 50.0, 60.0, 0.87]];
/// let config = DrawConfig::new().with_top_k(10);
/// draw_bboxes_with_label("image.jpg", groups, Dataset::Voc, &config)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the image or label file cannot be loaded, the label
/// count does not match the group count, a group has fewer than four
/// columns, no font is available for the text, or showing or saving fails.
pub fn draw_bboxes_with_label(
    img: impl Into<ImageSource>,
    bboxes: impl Into<Bboxes>,
    labels: impl Into<LabelSource>,
    config: &DrawConfig,
) -> Result<Canvas> {
    let mut canvas = img.into().into_canvas()?;
    let groups = bboxes.into().into_groups();
    let label_names = read_labels(&labels.into())?;
    if label_names.len() != groups.len() {
        return Err(AnnotateError::MismatchedCardinality {
            what: "labels",
            expected: groups.len(),
            actual: label_names.len(),
        });
    }
    validate_groups(&groups)?;

    if config.font.is_some() {
        canvas.set_font_path(config.font.clone());
    }
    draw_labeled_groups(
        &mut canvas,
        &groups,
        &label_names,
        config.bbox_color.resolve(),
        config.text_color.resolve(),
        config,
    )?;
    present(&canvas, config)?;
    Ok(canvas)
}

/// Show and/or save the annotated canvas as configured.
fn present(canvas: &Canvas, config: &DrawConfig) -> Result<()> {
    if config.show {
        canvas.show(&config.win_name, config.wait_time)?;
    }
    if let Some(path) = &config.out_file {
        canvas.save(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::color::Color;
    use image::Rgb;
    use ndarray::{Array2, Array3, array};

    fn quiet() -> DrawConfig {
        DrawConfig::new().with_show(false)
    }

    #[test]
    fn test_single_array_matches_one_group() {
        let boxes = array![[1.0_f32, 1.0, 6.0, 6.0], [8.0, 8.0, 12.0, 12.0]];

        let single = draw_bboxes(Canvas::new(16, 16), boxes.clone(), Color::Red, &quiet()).unwrap();
        let grouped = draw_bboxes(Canvas::new(16, 16), vec![boxes], Color::Red, &quiet()).unwrap();

        assert_eq!(single.as_rgb(), grouped.as_rgb());
        assert_eq!(*single.as_rgb().get_pixel(1, 1), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_per_group_colors() {
        let groups = vec![array![[0.0_f32, 0.0, 3.0, 3.0]], array![[5.0_f32, 5.0, 9.0, 9.0]]];
        let canvas = draw_bboxes(
            Canvas::new(12, 12),
            groups,
            vec![Color::Blue, Color::Yellow],
            &quiet(),
        )
        .unwrap();
        assert_eq!(*canvas.as_rgb().get_pixel(0, 0), Rgb([0, 0, 255]));
        assert_eq!(*canvas.as_rgb().get_pixel(5, 5), Rgb([255, 255, 0]));
    }

    #[test]
    fn test_color_count_mismatch() {
        let groups = vec![Array2::<f32>::zeros((1, 4)); 3];
        let result = draw_bboxes(
            Canvas::new(4, 4),
            groups,
            vec![Color::Red, Color::Green],
            &quiet(),
        );
        assert!(matches!(
            result,
            Err(AnnotateError::MismatchedCardinality { what: "colors", expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_top_k_limits_drawn_boxes() {
        let boxes = array![[0.0_f32, 0.0, 2.0, 2.0], [5.0, 5.0, 7.0, 7.0]];
        let canvas = draw_bboxes(
            Canvas::new(10, 10),
            boxes,
            Color::White,
            &quiet().with_top_k(1),
        )
        .unwrap();
        assert_eq!(*canvas.as_rgb().get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*canvas.as_rgb().get_pixel(5, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_zero_groups_leaves_image_untouched() {
        let base = Array3::<u8>::from_elem((5, 5, 3), 42);
        let canvas = draw_bboxes(base.clone(), Vec::<Array2<f32>>::new(), Color::Red, &quiet()).unwrap();
        assert_eq!(canvas.to_array(), base);

        let canvas = draw_bboxes_with_label(
            base.clone(),
            Vec::<Array2<f32>>::new(),
            Vec::<String>::new(),
            &quiet(),
        )
        .unwrap();
        assert_eq!(canvas.to_array(), base);
    }

    #[test]
    fn test_label_count_mismatch_fails_before_drawing() {
        let groups = vec![array![[0.0_f32, 0.0, 2.0, 2.0]]];
        let out = std::env::temp_dir().join("bbox_annotate_mismatch_never_written.png");
        let _ = std::fs::remove_file(&out);

        let result = draw_bboxes_with_label(
            Canvas::new(4, 4),
            groups,
            ["cat", "dog"],
            &quiet().with_out_file(&out),
        );
        assert!(matches!(
            result,
            Err(AnnotateError::MismatchedCardinality { what: "labels", expected: 1, actual: 2 })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_narrow_group_rejected() {
        let result = draw_bboxes(
            Canvas::new(4, 4),
            Array2::<f32>::zeros((1, 3)),
            Color::Red,
            &quiet(),
        );
        assert!(matches!(result, Err(AnnotateError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_group_with_label_needs_no_font() {
        let config = quiet().with_font(std::env::temp_dir().join("bbox_annotate_absent.ttf"));
        let canvas = draw_bboxes_with_label(
            Canvas::new(4, 4),
            vec![Array2::<f32>::zeros((0, 5))],
            ["cat"],
            &config,
        )
        .unwrap();
        assert_eq!(canvas.width(), 4);
    }
}
