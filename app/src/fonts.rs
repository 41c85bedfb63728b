//! Caption font lookup.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024; // 50MB
const VALID_EXTENSIONS: &[&str] = &["ttf", "otf"];

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("invalid font format for {0} (only TTF/OTF supported)")]
    InvalidFormat(PathBuf),
    #[error("font file too large (max 50MB): {0}")]
    FileTooLarge(PathBuf),
    #[error("failed to parse font data in {0}")]
    Parse(PathBuf),
    #[error("no usable font found (set QR_BADGE_FONT_PATH or install system fonts)")]
    NotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the caption font: `custom` if given, else the first usable system font.
pub fn load_font(custom: Option<&Path>) -> Result<FontVec, FontError> {
    if let Some(path) = custom {
        return load_font_file(path);
    }

    for path in font_candidates() {
        if !path.is_file() {
            continue;
        }
        match load_font_file(&path) {
            Ok(font) => {
                tracing::info!(path = %path.display(), "Using system font for captions");
                return Ok(font);
            }
            Err(e) => tracing::debug!(path = %path.display(), "Skipping font: {e}"),
        }
    }
    Err(FontError::NotFound)
}

/// Read and parse a single TTF/OTF file.
pub fn load_font_file(path: &Path) -> Result<FontVec, FontError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !VALID_EXTENSIONS.contains(&ext.as_str()) {
        return Err(FontError::InvalidFormat(path.to_path_buf()));
    }

    if std::fs::metadata(path)?.len() > MAX_FONT_SIZE {
        return Err(FontError::FileTooLarge(path.to_path_buf()));
    }

    let data = std::fs::read(path)?;
    FontVec::try_from_vec(data).map_err(|_| FontError::Parse(path.to_path_buf()))
}

fn font_candidates() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = system_font_candidates().iter().map(PathBuf::from).collect();
    if let Some(user_dir) = dirs::font_dir() {
        for name in ["DejaVuSans.ttf", "LiberationSans-Regular.ttf", "Arial.ttf"] {
            candidates.push(user_dir.join(name));
        }
    }
    candidates
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\arial.ttf",
            "C:\\Windows\\Fonts\\segoeui.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_extension() {
        let err = load_font_file(Path::new("/tmp/font.woff2")).unwrap_err();
        assert!(matches!(err, FontError::InvalidFormat(_)));
    }

    #[test]
    fn missing_custom_font_is_io_error() {
        let err = load_font(Some(Path::new("/definitely/not/here.ttf"))).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }

    #[test]
    fn garbage_font_data_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let err = load_font_file(&path).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));
    }
}
