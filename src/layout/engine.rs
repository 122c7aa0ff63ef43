use crate::foundation::core::{ImageDimensions, LayoutRequest, LayoutResult};
use crate::foundation::math::floor_at_least;
use crate::layout::position::resolve_position;
use crate::layout::scale::{FONT_SIZE_MIN, scale_font_size};

/// Font size substituted when the scaled size is not a usable number.
pub const FALLBACK_FONT_SIZE: u32 = 20;

/// Pure layout entry point: area-scaled font size plus right/bottom anchored position.
///
/// Stateless and deterministic; identical inputs always produce identical results, so it is safe
/// to call from any number of concurrent requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextLayoutEngine;

impl TextLayoutEngine {
    /// Compute the pixel-space overlay parameters for one image.
    pub fn compute(
        dims: ImageDimensions,
        text: &str,
        base_font_size: i32,
        right_percent: i32,
        bottom_percent: i32,
    ) -> LayoutResult {
        let scaled = scale_font_size(dims, base_font_size);
        let position = resolve_position(
            dims,
            right_percent,
            bottom_percent,
            f64::from(scaled),
            text,
        );

        LayoutResult {
            font_size_px: floor_at_least(
                f64::from(scaled),
                f64::from(FONT_SIZE_MIN),
                f64::from(FALLBACK_FONT_SIZE),
            ) as u32,
            x: floor_at_least(position.x, 0.0, 0.0) as u32,
            y: floor_at_least(position.y, 0.0, 0.0) as u32,
        }
    }

    /// [`TextLayoutEngine::compute`] for a bundled request.
    pub fn compute_request(dims: ImageDimensions, request: &LayoutRequest) -> LayoutResult {
        Self::compute(
            dims,
            &request.text,
            request.base_font_size,
            request.anchor_right_percent,
            request.anchor_bottom_percent,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
