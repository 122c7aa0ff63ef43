use super::*;

fn dims(width: u32, height: u32) -> ImageDimensions {
    ImageDimensions { width, height }
}

#[test]
fn reference_area_is_identity() {
    for base in -20..=260 {
        let expected = base.clamp(10, 200) as u32;
        assert_eq!(scale_font_size(dims(400, 300), base), expected, "base {base}");
    }
}

#[test]
fn factor_is_clamped() {
    assert_eq!(scale_factor(dims(4000, 3000)), MAX_SCALE_FACTOR);
    assert_eq!(scale_factor(dims(10, 10)), MIN_SCALE_FACTOR);
    assert_eq!(scale_factor(dims(800, 600)), 2.0);
    assert_eq!(scale_font_size(dims(4000, 3000), 20), 60);
    assert_eq!(scale_font_size(dims(800, 600), 20), 40);
    assert_eq!(scale_font_size(dims(50, 50), 30), 15);
}

#[test]
fn output_stays_in_range() {
    let sides = [1u32, 7, 50, 120, 399, 400, 640, 1080, 1920, 4000, 12000, 65535];
    for &w in &sides {
        for &h in &sides {
            for base in [10, 11, 20, 55, 99, 150, 200] {
                let s = scale_font_size(dims(w, h), base);
                assert!((FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&s), "{w}x{h} base {base}");
            }
        }
    }
}

#[test]
fn monotonic_in_area() {
    for base in [10, 13, 20, 47, 100, 200] {
        let mut prev = 0u32;
        for side in (1..=3000u32).step_by(7) {
            let s = scale_font_size(dims(side, side), base);
            assert!(s >= prev, "base {base} side {side}: {s} < {prev}");
            prev = s;
        }
    }
}
