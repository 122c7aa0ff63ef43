/// Round to the nearest integer with ties toward positive infinity.
///
/// `f64::round` breaks ties away from zero, which disagrees with the companion renderer for
/// negative halves (`-2.5` must become `-2.0`).
pub fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    // `v - floor` is exact for every finite double.
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Clamp `v` into `[lo, hi]`, preferring `lo` when the bounds are inverted.
///
/// Evaluated as `max(lo, min(v, hi))`. `f64::clamp` panics on `lo > hi`, which is a normal
/// condition here (text wider than the image).
pub fn clamp_low_wins(v: f64, lo: f64, hi: f64) -> f64 {
    let upper = if v < hi { v } else { hi };
    if upper > lo { upper } else { lo }
}

/// Floor `v` and raise it to at least `min`, substituting `fallback` for non-finite input.
pub(crate) fn floor_at_least(v: f64, min: f64, fallback: f64) -> f64 {
    if !v.is_finite() {
        return fallback;
    }
    v.floor().max(min)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
