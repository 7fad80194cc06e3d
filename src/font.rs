// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! TrueType font lookup for label text.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

use crate::error::{AnnotateError, Result};

/// Font file name looked up in the user config directory.
pub const DEFAULT_FONT: &str = "Arial.ttf";

/// Directory under the user config directory holding cached fonts.
const CONFIG_SUBDIR: &str = "bbox-annotate";

/// Well-known system font locations, tried in order.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Path of the font cached in the user config directory, if that directory is known.
#[must_use]
pub fn config_font_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(CONFIG_SUBDIR).join(DEFAULT_FONT))
}

/// Find a font file on this machine.
///
/// Checks the user config directory first, then common system locations.
#[must_use]
pub fn find_font() -> Option<PathBuf> {
    config_font_path()
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .find(|path| path.is_file())
}

/// Load a font from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid font.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let data = fs::read(path)?;
    FontVec::try_from_vec(data)
        .map_err(|e| AnnotateError::FontError(format!("{}: {e}", path.display())))
}

/// Load the explicitly configured font, or the first one [`find_font`] returns.
///
/// # Errors
///
/// Returns an error if the configured font is unusable or no font is found.
pub fn resolve_font(configured: Option<&Path>) -> Result<FontVec> {
    if let Some(path) = configured {
        return load_font(path);
    }
    let path = find_font().ok_or_else(|| {
        let hint = config_font_path()
            .map_or_else(String::new, |p| format!(" or place one at {}", p.display()));
        AnnotateError::FontError(format!(
            "no TrueType font found; set DrawConfig::font{hint}"
        ))
    })?;
    load_font(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_font_path_name() {
        if let Some(path) = config_font_path() {
            assert!(path.ends_with(Path::new(CONFIG_SUBDIR).join(DEFAULT_FONT)));
        }
    }

    #[test]
    fn test_missing_configured_font_is_io_error() {
        let missing = std::env::temp_dir().join("bbox_annotate_no_such_font.ttf");
        assert!(matches!(
            resolve_font(Some(&missing)),
            Err(AnnotateError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_font_data() {
        let path = std::env::temp_dir().join("bbox_annotate_not_a_font.ttf");
        fs::write(&path, b"definitely not a font").unwrap();
        let result = load_font(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(AnnotateError::FontError(_))));
    }
}
