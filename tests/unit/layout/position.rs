use super::*;

fn dims(width: u32, height: u32) -> ImageDimensions {
    ImageDimensions { width, height }
}

#[test]
fn anchors_from_right_and_bottom() {
    let p = resolve_position(dims(4000, 3000), 10, 10, 60.0, "A");
    assert_eq!(p, TextPosition { x: 3564.0, y: 2640.0 });
}

#[test]
fn zero_anchor_is_pulled_inside_padding() {
    let p = resolve_position(dims(100, 100), 0, 0, 20.0, "");
    // x: 100 - 10 = 90 -> max 100 - 10 - 2 = 88; y: 100 - 20 = 80 -> max 78.
    assert_eq!(p, TextPosition { x: 88.0, y: 78.0 });
}

#[test]
fn full_anchor_clamps_to_padding() {
    let p = resolve_position(dims(640, 480), 100, 100, 30.0, "caption");
    assert_eq!(p, TextPosition { x: 2.0, y: 2.0 });
}

#[test]
fn oversized_text_prefers_lower_bound() {
    // Text far wider and taller than the image: bounds invert, padding wins.
    let p = resolve_position(dims(20, 12), 10, 10, 200.0, "WWWWWWWWWW");
    assert_eq!(p, TextPosition { x: 2.0, y: 2.0 });
}

#[test]
fn stays_within_image_for_padded_sizes() {
    let texts = ["", "A", "hello world", "가나다라마바사", "2024-06-01_IMG_0001"];
    for &(w, h) in &[(5u32, 5u32), (17, 9), (100, 100), (400, 300), (1920, 1080)] {
        for text in texts {
            for font in [10.0, 20.0, 60.0, 200.0] {
                for pct in [0, 10, 50, 90, 100] {
                    let p = resolve_position(dims(w, h), pct, pct, font, text);
                    assert!(p.x >= 0.0 && p.x < f64::from(w), "{w}x{h} {text} {font} {pct}");
                    assert!(p.y >= 0.0 && p.y < f64::from(h), "{w}x{h} {text} {font} {pct}");
                }
            }
        }
    }
}
