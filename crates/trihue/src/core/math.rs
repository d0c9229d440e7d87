use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the tolerance for
/// approximate equality, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The largest absolute difference between two numbers that are still
    /// considered the same.
    ///
    /// Round-tripping coordinates through a conversion and back accumulates
    /// a handful of rounding errors, each at most one unit in the last place.
    /// The tolerance is comfortably above that yet far below anything that
    /// might be visible, even after scaling to 8-bit channels or pixels.
    const TOLERANCE: Self;
}

impl FloatExt for f64 {
    const TOLERANCE: f64 = 1e-9;
}

impl FloatExt for f32 {
    const TOLERANCE: f32 = 1e-4;
}

/// Compute the floor-style remainder, which has the same sign as the divisor.
///
/// The result is strictly less than the divisor. For tiny negative dividends,
/// `rem_euclid` rounds up to the divisor itself, which is mapped to zero.
#[inline]
pub(crate) fn modulo(n: Float, m: Float) -> Float {
    let remainder = n.rem_euclid(m);
    if remainder >= m {
        0.0
    } else {
        remainder
    }
}
