use crate::foundation::core::ImageDimensions;
use crate::foundation::math::round_half_up;

/// Reference area (400x300) at which the base font size is used unscaled.
pub const BASE_AREA: f64 = 400.0 * 300.0;

/// Smallest allowed area scale factor.
pub const MIN_SCALE_FACTOR: f64 = 0.5;

/// Largest allowed area scale factor.
pub const MAX_SCALE_FACTOR: f64 = 3.0;

/// Smallest font size ever produced.
pub const FONT_SIZE_MIN: u32 = 10;

/// Largest font size ever produced.
pub const FONT_SIZE_MAX: u32 = 200;

/// `sqrt(area / BASE_AREA)` held to `[MIN_SCALE_FACTOR, MAX_SCALE_FACTOR]`.
pub fn scale_factor(dims: ImageDimensions) -> f64 {
    let factor = (dims.area() / BASE_AREA).sqrt();
    factor.min(MAX_SCALE_FACTOR).max(MIN_SCALE_FACTOR)
}

/// Scale `base_font_size` to the image area.
///
/// Monotonic non-decreasing in area for a fixed base size; always within
/// `[FONT_SIZE_MIN, FONT_SIZE_MAX]`.
pub fn scale_font_size(dims: ImageDimensions, base_font_size: i32) -> u32 {
    let scaled = round_half_up(f64::from(base_font_size) * scale_factor(dims));
    scaled.clamp(f64::from(FONT_SIZE_MIN), f64::from(FONT_SIZE_MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scale.rs"]
mod tests;
