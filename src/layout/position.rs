use crate::foundation::core::ImageDimensions;
use crate::foundation::math::{clamp_low_wins, round_half_up};
use crate::layout::measure::estimate_text_width;

/// Minimum gap kept between the text box and the image edges.
pub const TEXT_PADDING: f64 = 2.0;

/// Rounded, unclamped-to-zero text box origin.
///
/// Values may be degenerate (negative) for images narrower than the padding; the engine floors
/// them before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPosition {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
}

/// Place the text box so its right/bottom edges sit at the given percentage distance from the
/// image's right/bottom edges, then pull it back inside the padded image bounds.
///
/// The text height is the font size with no line-height margin. When the text is larger than
/// the padded image the clamp bounds invert and the padding bound is kept.
pub fn resolve_position(
    dims: ImageDimensions,
    right_percent: i32,
    bottom_percent: i32,
    font_size_px: f64,
    text: &str,
) -> TextPosition {
    let text_width = f64::from(estimate_text_width(text, font_size_px));
    let text_height = font_size_px;
    let width = f64::from(dims.width);
    let height = f64::from(dims.height);

    let x = width * (1.0 - f64::from(right_percent) / 100.0) - text_width;
    let y = height * (1.0 - f64::from(bottom_percent) / 100.0) - text_height;

    let x = clamp_low_wins(x, TEXT_PADDING, width - text_width - TEXT_PADDING);
    let y = clamp_low_wins(y, TEXT_PADDING, height - text_height - TEXT_PADDING);

    TextPosition {
        x: round_half_up(x),
        y: round_half_up(y),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
