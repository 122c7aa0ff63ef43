use std::path::{Path, PathBuf};

use crate::foundation::core::ImageDimensions;
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::service::PreviewImage;
use crate::text::{normalize_overlay_text, strip_extension};

/// Lower-case file extensions picked up from an input folder.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp"];

/// One source image and its per-image overlay state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageEntry {
    /// Source path.
    pub path: PathBuf,
    /// File name including extension.
    pub name: String,
    /// NFC-normalized file name without extension; the default overlay text.
    pub stem: String,
    /// Per-image custom text (individual mode). Empty means "use the stem".
    pub text: String,
    /// Whether individual mode processes this image.
    pub selected: bool,
    /// Thumbnail shown when a preview cannot be rendered.
    pub thumbnail: Option<PreviewImage>,
}

impl ImageEntry {
    /// Describe the image at `path`. New entries are selected and carry no custom text.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let stem = normalize_overlay_text(strip_extension(&name));
        Self {
            path,
            name,
            stem,
            text: String::new(),
            selected: true,
            thumbnail: None,
        }
    }

    /// Set the per-image text, normalized.
    pub fn set_text(&mut self, text: &str) {
        self.text = normalize_overlay_text(text);
    }

    /// Attach a thumbnail.
    pub fn with_thumbnail(mut self, thumbnail: PreviewImage) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Per-image text, falling back to the stem when empty.
    pub fn individual_text(&self) -> &str {
        if self.text.is_empty() {
            &self.stem
        } else {
            &self.text
        }
    }

    /// Text handed to the renderer: `text`, or the stem when `text` is empty.
    pub fn render_text<'a>(&'a self, text: &'a str) -> &'a str {
        if text.is_empty() { &self.stem } else { text }
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// List supported images directly inside `dir`, sorted by file name.
#[tracing::instrument]
pub fn discover_images(dir: &Path) -> OverlayResult<Vec<ImageEntry>> {
    let read = std::fs::read_dir(dir)
        .map_err(|e| OverlayError::io(format!("read folder '{}': {e}", dir.display())))?;

    let mut paths = Vec::new();
    for entry in read {
        let entry =
            entry.map_err(|e| OverlayError::io(format!("read entry in '{}': {e}", dir.display())))?;
        let path = entry.path();
        if path.is_file() && has_supported_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!(count = paths.len(), "discovered images");
    Ok(paths.into_iter().map(ImageEntry::from_path).collect())
}

/// Read pixel dimensions from the image header without decoding pixels.
pub fn probe_dimensions(path: &Path) -> OverlayResult<ImageDimensions> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| OverlayError::dimensions(format!("probe '{}': {e}", path.display())))?;
    ImageDimensions::new(width, height)
}

#[cfg(test)]
#[path = "../tests/unit/discover/discover.rs"]
mod tests;
