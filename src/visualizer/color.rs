// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Named colors and color arguments.
//!
//! All triples are stored in BGR channel order, the convention used by
//! OpenCV-style pixel arrays. [`to_rgb`] converts a triple for drawing onto an
//! RGB buffer.

use image::Rgb;

use crate::error::{AnnotateError, Result};

/// A BGR color triple.
pub type Bgr = [u8; 3];

/// The eight named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Cyan.
    Cyan,
    /// Yellow.
    Yellow,
    /// Magenta.
    Magenta,
    /// White.
    White,
    /// Black.
    Black,
}

impl Color {
    /// All named colors, in declaration order.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Yellow,
        Color::Magenta,
        Color::White,
        Color::Black,
    ];

    /// BGR triple for this color.
    #[must_use]
    pub const fn value(self) -> Bgr {
        match self {
            Self::Red => [0, 0, 255],
            Self::Green => [0, 255, 0],
            Self::Blue => [255, 0, 0],
            Self::Cyan => [255, 255, 0],
            Self::Yellow => [0, 255, 255],
            Self::Magenta => [255, 0, 255],
            Self::White => [255, 255, 255],
            Self::Black => [0, 0, 0],
        }
    }

    /// Lowercase name of this color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// A single color, either named or given as a raw BGR triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// A palette color.
    Named(Color),
    /// A raw BGR triple.
    Bgr(Bgr),
}

impl ColorSpec {
    /// Resolve to a BGR triple.
    #[must_use]
    pub const fn resolve(self) -> Bgr {
        match self {
            Self::Named(color) => color.value(),
            Self::Bgr(bgr) => bgr,
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Named(color)
    }
}

impl From<Bgr> for ColorSpec {
    fn from(bgr: Bgr) -> Self {
        Self::Bgr(bgr)
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::Named(Color::Green)
    }
}

/// Colors for box groups: one for every group, or one per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Colors {
    /// Broadcast to every group.
    Single(ColorSpec),
    /// One entry per group.
    PerGroup(Vec<ColorSpec>),
}

impl Colors {
    /// Resolve to exactly one BGR triple per box group.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::MismatchedCardinality`] if a per-group list
    /// does not have `group_count` entries.
    pub fn resolve(&self, group_count: usize) -> Result<Vec<Bgr>> {
        let resolved: Vec<Bgr> = match self {
            Self::Single(spec) => vec![spec.resolve(); group_count],
            Self::PerGroup(specs) => specs.iter().map(|spec| spec.resolve()).collect(),
        };

        if resolved.len() != group_count {
            return Err(AnnotateError::MismatchedCardinality {
                what: "colors",
                expected: group_count,
                actual: resolved.len(),
            });
        }
        Ok(resolved)
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::Single(ColorSpec::default())
    }
}

impl From<Color> for Colors {
    fn from(color: Color) -> Self {
        Self::Single(color.into())
    }
}

impl From<Bgr> for Colors {
    fn from(bgr: Bgr) -> Self {
        Self::Single(bgr.into())
    }
}

impl From<ColorSpec> for Colors {
    fn from(spec: ColorSpec) -> Self {
        Self::Single(spec)
    }
}

impl From<Vec<ColorSpec>> for Colors {
    fn from(specs: Vec<ColorSpec>) -> Self {
        Self::PerGroup(specs)
    }
}

impl From<Vec<Color>> for Colors {
    fn from(colors: Vec<Color>) -> Self {
        Self::PerGroup(colors.into_iter().map(ColorSpec::from).collect())
    }
}

impl From<Vec<Bgr>> for Colors {
    fn from(triples: Vec<Bgr>) -> Self {
        Self::PerGroup(triples.into_iter().map(ColorSpec::from).collect())
    }
}

/// Convert a BGR triple to an RGB pixel.
#[must_use]
pub const fn to_rgb(bgr: Bgr) -> Rgb<u8> {
    Rgb([bgr[2], bgr[1], bgr[0]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_bgr() {
        assert_eq!(Color::Red.value(), [0, 0, 255]);
        assert_eq!(Color::Blue.value(), [255, 0, 0]);
        assert_eq!(Color::Yellow.value(), [0, 255, 255]);
        assert_eq!(to_rgb(Color::Red.value()), Rgb([255, 0, 0]));
        assert_eq!(Color::ALL.len(), 8);
    }

    #[test]
    fn test_single_color_broadcasts() {
        let colors = Colors::from(Color::Cyan);
        let resolved = colors.resolve(3).unwrap();
        assert_eq!(resolved, vec![[255, 255, 0]; 3]);

        let raw = Colors::from([1_u8, 2, 3]);
        assert_eq!(raw.resolve(2).unwrap(), vec![[1, 2, 3]; 2]);
        assert!(raw.resolve(0).unwrap().is_empty());
    }

    #[test]
    fn test_per_group_mixed() {
        let colors = Colors::PerGroup(vec![Color::White.into(), ColorSpec::Bgr([9, 8, 7])]);
        assert_eq!(
            colors.resolve(2).unwrap(),
            vec![[255, 255, 255], [9, 8, 7]]
        );
    }

    #[test]
    fn test_per_group_mismatch() {
        let colors = Colors::from(vec![Color::Red, Color::Green]);
        match colors.resolve(3) {
            Err(AnnotateError::MismatchedCardinality {
                what,
                expected,
                actual,
            }) => {
                assert_eq!(what, "colors");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected cardinality error, got {other:?}"),
        }
    }
}
