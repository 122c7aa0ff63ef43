use crate::foundation::error::{OverlayError, OverlayResult};

/// Pixel dimensions of a source image as reported by the image service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Substitute used when the image service cannot report dimensions.
    pub const DEFAULT: Self = Self {
        width: 400,
        height: 300,
    };

    /// Create validated dimensions; both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> OverlayResult<Self> {
        if width == 0 || height == 0 {
            return Err(OverlayError::dimensions(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Area in square pixels.
    pub fn area(self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }
}

impl Default for ImageDimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raw user-tunable overlay parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutRequest {
    /// Overlay text. May be empty.
    pub text: String,
    /// Font size at the 400x300 reference area.
    pub base_font_size: i32,
    /// Distance of the text's right edge from the image's right edge, in percent of width.
    pub anchor_right_percent: i32,
    /// Distance of the text's bottom edge from the image's bottom edge, in percent of height.
    pub anchor_bottom_percent: i32,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            base_font_size: 20,
            anchor_right_percent: 10,
            anchor_bottom_percent: 10,
        }
    }
}

/// Pixel-space overlay parameters handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LayoutResult {
    /// Scaled font size, always within `[10, 200]`.
    pub font_size_px: u32,
    /// Left edge of the text box.
    pub x: u32,
    /// Top edge of the text box.
    pub y: u32,
}
