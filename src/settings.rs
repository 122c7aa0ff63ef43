use std::path::Path;
use std::time::Duration;

use crate::discover::ImageEntry;
use crate::foundation::core::LayoutRequest;
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::preview::cache::DEFAULT_CACHE_CAPACITY;
use crate::preview::scheduler::DEFAULT_DEBOUNCE;
use crate::text::normalize_overlay_text;

/// Where batch-mode overlay text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Each image's file name without extension.
    #[default]
    Auto,
    /// The same custom text on every image.
    Custom(String),
}

/// User-tunable overlay parameters shared by every image in a batch.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlaySettings {
    /// Font size at the 400x300 reference area.
    pub font_size: i32,
    /// Distance from the right edge, percent of width.
    pub anchor_right_percent: i32,
    /// Distance from the bottom edge, percent of height.
    pub anchor_bottom_percent: i32,
    /// Batch text source.
    pub text: TextSource,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            font_size: 20,
            anchor_right_percent: 10,
            anchor_bottom_percent: 10,
            text: TextSource::Auto,
        }
    }
}

impl OverlaySettings {
    /// Load settings from a JSON file and validate them. Missing fields take defaults.
    pub fn from_path(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| OverlayError::io(format!("read settings '{}': {e}", path.display())))?;
        let settings: Self = serde_json::from_str(&raw).map_err(|e| {
            OverlayError::serde(format!("parse settings '{}': {e}", path.display()))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> OverlayResult<()> {
        if self.font_size <= 0 {
            return Err(OverlayError::validation("font_size must be > 0"));
        }
        for (name, value) in [
            ("anchor_right_percent", self.anchor_right_percent),
            ("anchor_bottom_percent", self.anchor_bottom_percent),
        ] {
            if !(0..=100).contains(&value) {
                return Err(OverlayError::validation(format!(
                    "{name} must be within [0, 100], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Overlay text for `image` in batch mode.
    pub fn text_for(&self, image: &ImageEntry) -> String {
        match &self.text {
            TextSource::Auto => image.stem.clone(),
            TextSource::Custom(text) => normalize_overlay_text(text),
        }
    }

    /// Layout request for `text` under these settings.
    pub fn layout_request(&self, text: impl Into<String>) -> LayoutRequest {
        LayoutRequest {
            text: text.into(),
            base_font_size: self.font_size,
            anchor_right_percent: self.anchor_right_percent,
            anchor_bottom_percent: self.anchor_bottom_percent,
        }
    }
}

/// Preview pipeline tuning.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewOpts {
    /// Maximum retained previews.
    pub cache_capacity: usize,
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl PreviewOpts {
    /// Debounce window as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings/settings.rs"]
mod tests;
