use unicode_normalization::UnicodeNormalization;

/// Zero-width code points removed from overlay text.
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// Compose text to NFC and drop zero-width characters.
///
/// Input methods and some filesystems hand over Hangul as separate jamo; composing them first
/// keeps the width estimate on the syllable rule instead of the per-jamo rules.
pub fn normalize_overlay_text(text: &str) -> String {
    text.nfc().filter(|c| !ZERO_WIDTH.contains(c)).collect()
}

/// File name without its last extension.
///
/// Everything before the final `.` is kept, so a dotfile such as `.hidden` yields an empty stem.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

#[cfg(test)]
#[path = "../tests/unit/text/text.rs"]
mod tests;
