use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// ----------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Raise the magnitude of the base to the exponent while keeping its sign.
#[inline]
pub(crate) fn signed_pow(base: Float, exponent: Float) -> Float {
    base.abs().powf(exponent).copysign(base)
}

/// Divide numerator by denominator, treating division by zero as zero.
#[inline]
pub(crate) fn zero_div(numerator: Float, denominator: Float) -> Float {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Constrain the angle in degrees to `0..360`.
#[inline]
pub(crate) fn constrain_hue(degrees: Float) -> Float {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The verdict on a probed point during [`bisect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The point is acceptable; search above it.
    Raise,
    /// The point is not acceptable; search below it.
    Lower,
    /// The point is good enough; stop searching.
    Done,
}

/// Bisect the interval `low..high`.
///
/// This function first probes `start` and then keeps probing the midpoint of
/// the remaining interval until the interval is no wider than `width` or the
/// probe reports [`Probe::Done`]. It returns the last point, which is the
/// point reported done or the next midpoint that was not probed anymore.
///
/// The probe closure owns any state beyond the interval itself, e.g., the
/// best candidate color seen so far. Since the interval halves on every
/// iteration, the search always terminates, though it only finds something
/// meaningful if acceptance is monotonic across the interval.
pub(crate) fn bisect<F>(
    mut low: Float,
    mut high: Float,
    start: Float,
    width: Float,
    mut probe: F,
) -> Float
where
    F: FnMut(Float) -> Probe,
{
    let mut point = start;

    while width < high - low {
        match probe(point) {
            Probe::Raise => low = point,
            Probe::Lower => high = point,
            Probe::Done => return point,
        }

        point = (low + high) / 2.0;
    }

    point
}

#[cfg(test)]
mod test {
    use super::{bisect, constrain_hue, signed_pow, zero_div, Probe};
    use crate::Float;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bisect_finds_threshold() {
        let mut probes = 0;
        let point = bisect(0.0, 1.0, 0.5, 1e-6, |x| {
            probes += 1;
            if x * x < 0.5 {
                Probe::Raise
            } else {
                Probe::Lower
            }
        });

        assert_abs_diff_eq!(point, (0.5 as Float).sqrt(), epsilon = 1e-6);
        assert!(probes <= 21, "bisection took {} probes", probes);
    }

    #[test]
    fn test_bisect_stops_early() {
        let mut probes = 0;
        let point = bisect(0.0, 8.0, 4.0, 1e-3, |x| {
            probes += 1;
            if x == 2.0 {
                Probe::Done
            } else if x < 2.0 {
                Probe::Raise
            } else {
                Probe::Lower
            }
        });

        assert_eq!(point, 2.0);
        assert_eq!(probes, 2);
    }

    #[test]
    fn test_bisect_empty_interval() {
        let point = bisect(1.0, 1.0, 1.0, 0.01, |_| panic!("should not probe"));
        assert_eq!(point, 1.0);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(signed_pow(-8.0, 1.0 / 3.0).round(), -2.0);
        assert_eq!(zero_div(3.0, 0.0), 0.0);
        assert_eq!(zero_div(3.0, 2.0), 1.5);
        assert_eq!(constrain_hue(-30.0), 330.0);
        assert_eq!(constrain_hue(725.0), 5.0);
        assert_eq!(constrain_hue(360.0), 0.0);
    }
}
