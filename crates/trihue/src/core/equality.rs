use crate::core::FloatExt;
use crate::Float;

/// Test macro for asserting the approximate equality of floating point
/// numbers.
///
/// This macro relies on [`close_enough`](crate::close_enough), which treats
/// two numbers as equal if they differ by no more than a tolerance that
/// depends on the floating point representation.
///
/// # Panics
///
/// This macro panics if the two numbers are not close enough. Its message
/// places the numbers below each other at the beginning of subsequent lines
/// for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert!(
            $crate::close_enough(f1, f2),
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Test macro for asserting that two coordinate slices are approximately
/// equal.
///
/// # Panics
///
/// This macro panics if the slices have different lengths or any pair of
/// coordinates is not close enough. Its message places the coordinates below
/// each other at the beginning of subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_close_coordinates {
    ($cs1:expr, $cs2:expr $(,)?) => {
        let (cs1, cs2): (&[$crate::Float], &[$crate::Float]) = (&$cs1[..], &$cs2[..]);
        assert!(
            cs1.len() == cs2.len()
                && cs1
                    .iter()
                    .zip(cs2.iter())
                    .all(|(c1, c2)| $crate::close_enough(*c1, *c2)),
            "coordinates differ:\n{:?}\n{:?}",
            cs1,
            cs2
        );
    };
}

/// Determine whether the two floats are close enough to be considered equal.
///
/// Not-a-number is never close enough to anything, including itself.
#[inline]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    (f1 - f2).abs() <= <Float as FloatExt>::TOLERANCE
}

#[cfg(test)]
mod test {
    use super::close_enough;
    use crate::Float;

    #[test]
    fn test_close_enough() {
        assert!(close_enough(0.1 + 0.2, 0.3));
        assert!(close_enough(1.0, 1.0));
        assert!(!close_enough(1.0, 1.001));
        assert!(!close_enough(Float::NAN, Float::NAN));

        assert_close_enough!(0.1 + 0.2, 0.3);
        assert_close_coordinates!([0.5, 0.25, 1.0], [0.5, 0.25 + 1e-12, 1.0]);
    }
}
