// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Bounding box groups.
//!
//! A group is an `(n, 4)` or `(n, 5)` array of `x1, y1, x2, y2[, score]`
//! rows sharing one label and color.

use ndarray::Array2;

use crate::error::{AnnotateError, Result};

/// Bounding boxes as a single group or a list of groups.
#[derive(Debug, Clone, PartialEq)]
pub enum Bboxes {
    /// One group; treated as a one-element list.
    Single(Array2<f32>),
    /// One array per group.
    Groups(Vec<Array2<f32>>),
}

impl Bboxes {
    /// Flatten into a list of groups.
    #[must_use]
    pub fn into_groups(self) -> Vec<Array2<f32>> {
        match self {
            Self::Single(group) => vec![group],
            Self::Groups(groups) => groups,
        }
    }
}

impl From<Array2<f32>> for Bboxes {
    fn from(group: Array2<f32>) -> Self {
        Self::Single(group)
    }
}

impl From<Vec<Array2<f32>>> for Bboxes {
    fn from(groups: Vec<Array2<f32>>) -> Self {
        Self::Groups(groups)
    }
}

/// Check that every non-empty group has at least four columns.
///
/// # Errors
///
/// Returns [`AnnotateError::InvalidInput`] naming the first offending group.
pub fn validate_groups(groups: &[Array2<f32>]) -> Result<()> {
    for (i, group) in groups.iter().enumerate() {
        if group.nrows() > 0 && group.ncols() < 4 {
            return Err(AnnotateError::InvalidInput(format!(
                "box group {i} has {} column(s), expected at least 4",
                group.ncols()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_single_becomes_one_group() {
        let group = array![[1.0_f32, 2.0, 3.0, 4.0]];
        let groups = Bboxes::from(group.clone()).into_groups();
        assert_eq!(groups, vec![group]);
    }

    #[test]
    fn test_groups_pass_through() {
        let groups = vec![Array2::<f32>::zeros((2, 4)), Array2::<f32>::zeros((1, 5))];
        assert_eq!(Bboxes::from(groups.clone()).into_groups(), groups);
        assert!(Bboxes::Groups(Vec::new()).into_groups().is_empty());
    }

    #[test]
    fn test_validate_groups() {
        assert!(validate_groups(&[Array2::zeros((3, 4)), Array2::zeros((0, 0))]).is_ok());
        assert!(matches!(
            validate_groups(&[Array2::zeros((1, 4)), Array2::zeros((2, 3))]),
            Err(AnnotateError::InvalidInput(msg)) if msg.contains("group 1")
        ));
    }
}
