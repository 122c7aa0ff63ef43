use crate::foundation::math::round_half_up;
use crate::layout::glyph_width::width_multiplier;

/// Width reported for empty text, and the floor for every estimate.
pub const MIN_TEXT_WIDTH: u32 = 10;

/// Slack applied to the summed advances.
pub const WIDTH_OVERHEAD: f64 = 1.1;

/// Per-character ceiling of the estimate, as a multiple of the font size.
pub const MAX_CHAR_WIDTH: f64 = 0.8;

/// Estimate the rendered width of `text` at `font_size_px`.
///
/// Advances are summed with no inter-character spacing, scaled by [`WIDTH_OVERHEAD`], then held
/// to `[MIN_TEXT_WIDTH, font_size_px * chars * MAX_CHAR_WIDTH]`. The ceiling is applied first,
/// so when it lies below the floor (short text at small sizes) the floor wins.
pub fn estimate_text_width(text: &str, font_size_px: f64) -> u32 {
    if text.is_empty() {
        return MIN_TEXT_WIDTH;
    }

    let mut total = 0.0;
    let mut chars = 0usize;
    for c in text.chars() {
        total += font_size_px * width_multiplier(c);
        chars += 1;
    }

    let raw = total * WIDTH_OVERHEAD;
    let ceiling = font_size_px * chars as f64 * MAX_CHAR_WIDTH;
    let held = raw.min(ceiling).max(f64::from(MIN_TEXT_WIDTH));
    round_half_up(held) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
