// Float helpers that also work without `std` (no libm in `core`).

pub(crate) fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

/// Rounds half away from zero, like `f32::round`.
pub(crate) fn round(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.round()
    }
    #[cfg(not(feature = "std"))]
    {
        round_without_std(x)
    }
}

/// Every `f32` with magnitude at or above 2^23 is already a whole number.
const WHOLE_THRESHOLD: f32 = 8_388_608.0;

#[cfg_attr(feature = "std", allow(dead_code))]
pub(crate) fn round_without_std(x: f32) -> f32 {
    if x.is_nan() || abs(x) >= WHOLE_THRESHOLD {
        return x;
    }
    let t = x as i64 as f32;
    let frac = x - t;
    if frac >= 0.5 {
        t + 1.0
    } else if frac <= -0.5 {
        t - 1.0
    } else {
        t
    }
}

pub(crate) fn is_positive_finite(x: f32) -> bool {
    x.is_finite() && x > 0.0
}
