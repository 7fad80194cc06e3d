// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Label name resolution.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::warn;

/// PASCAL VOC class names.
pub const VOC_CLASSES: [&str; 20] = [
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
];

/// COCO class names.
pub const COCO_CLASSES: [&str; 80] = [
    "person",
    "bicycle",
    "car",
    "motorcycle",
    "airplane",
    "bus",
    "train",
    "truck",
    "boat",
    "traffic light",
    "fire hydrant",
    "stop sign",
    "parking meter",
    "bench",
    "bird",
    "cat",
    "dog",
    "horse",
    "sheep",
    "cow",
    "elephant",
    "bear",
    "zebra",
    "giraffe",
    "backpack",
    "umbrella",
    "handbag",
    "tie",
    "suitcase",
    "frisbee",
    "skis",
    "snowboard",
    "sports ball",
    "kite",
    "baseball bat",
    "baseball glove",
    "skateboard",
    "surfboard",
    "tennis racket",
    "bottle",
    "wine glass",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "chair",
    "couch",
    "potted plant",
    "bed",
    "dining table",
    "toilet",
    "tv",
    "laptop",
    "mouse",
    "remote",
    "keyboard",
    "cell phone",
    "microwave",
    "oven",
    "toaster",
    "sink",
    "refrigerator",
    "book",
    "clock",
    "vase",
    "scissors",
    "teddy bear",
    "hair drier",
    "toothbrush",
];

/// Built-in label sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// PASCAL VOC (20 classes).
    Voc,
    /// COCO (80 classes).
    Coco,
}

impl Dataset {
    /// Class names of this dataset.
    #[must_use]
    pub const fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Voc => &VOC_CLASSES,
            Self::Coco => &COCO_CLASSES,
        }
    }
}

/// Where label names come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// A text file with one label per line.
    File(PathBuf),
    /// Names given directly.
    Names(Vec<String>),
    /// A built-in label set.
    Dataset(Dataset),
}

impl From<PathBuf> for LabelSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&std::path::Path> for LabelSource {
    fn from(path: &std::path::Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<Vec<String>> for LabelSource {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

impl From<&[&str]> for LabelSource {
    fn from(names: &[&str]) -> Self {
        Self::Names(names.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LabelSource {
    fn from(names: [&str; N]) -> Self {
        Self::Names(names.iter().map(ToString::to_string).collect())
    }
}

impl From<Dataset> for LabelSource {
    fn from(dataset: Dataset) -> Self {
        Self::Dataset(dataset)
    }
}

/// Resolve a label source to an ordered list of names.
///
/// Label files are read line by line; trailing whitespace is trimmed and
/// blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the label file cannot be read.
pub fn read_labels(source: &LabelSource) -> Result<Vec<String>> {
    match source {
        LabelSource::File(path) => {
            let content = fs::read_to_string(path)?;
            let mut blank = 0usize;
            let names: Vec<String> = content
                .lines()
                .map(str::trim_end)
                .filter(|line| {
                    let keep = !line.is_empty();
                    if !keep {
                        blank += 1;
                    }
                    keep
                })
                .map(ToString::to_string)
                .collect();
            if blank > 0 {
                warn!(
                    "Skipped {blank} blank line(s) in label file {}",
                    path.display()
                );
            }
            Ok(names)
        }
        LabelSource::Names(names) => Ok(names.clone()),
        LabelSource::Dataset(dataset) => {
            Ok(dataset.classes().iter().map(ToString::to_string).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnotateError;

    #[test]
    fn test_read_label_file() {
        let path = std::env::temp_dir().join("bbox_annotate_labels_test.txt");
        fs::write(&path, "cat\r\ndog  \n\nbird\n").unwrap();
        let names = read_labels(&LabelSource::from(path.clone()));
        let _ = fs::remove_file(&path);
        assert_eq!(names.unwrap(), vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_names_pass_through() {
        let names = read_labels(&LabelSource::from(["b", "a"])).unwrap();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_dataset_presets() {
        let voc = read_labels(&Dataset::Voc.into()).unwrap();
        assert_eq!(voc.len(), 20);
        assert_eq!(voc[14], "person");

        let coco = read_labels(&Dataset::Coco.into()).unwrap();
        assert_eq!(coco.len(), 80);
        assert_eq!(coco[0], "person");
        assert_eq!(coco[79], "toothbrush");
    }

    #[test]
    fn test_missing_label_file() {
        let missing = std::env::temp_dir().join("bbox_annotate_no_labels.txt");
        assert!(matches!(
            read_labels(&LabelSource::File(missing)),
            Err(AnnotateError::Io(_))
        ));
    }
}
