use super::math::FloatExt;
use super::ColorSpace;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, clamping the lightness of Oklab
/// colors, scaling hues, reducing resolution, and dropping the sign of
/// negative zeros before comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting the equality of colors.
///
/// This macro tests the color objects for equality using the `Eq` trait. The
/// implementation, in turn, normalizes the coordinates of colors with the same
/// color space the same way as [`assert_same_coordinates`] and also compares
/// alpha.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places either color spaces or the coordinates below each other at
/// the beginning of subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        if c1.space() != c2.space() {
            assert_eq!(
                c1,
                c2,
                "color spaces differ:\n{:?}\n{:?}",
                c1.space(),
                c2.space()
            );
        }

        assert_eq!(
            c1,
            c2,
            "color coordinates differ:\n{:?}\n{:?}",
            c1.as_ref(),
            c2.as_ref()
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function ensures that coordinates are well-formed. In particular, it
/// replaces not-a-number coordinates with zero. For the Oklab variations, it
/// also ensures that (revised) lightness is in `0..=1`. For polar color
/// spaces, it ensures that chroma, colorfulness, or saturation is
/// non-negative and, for semantic consistency, replaces it with zero if the
/// hue is not-a-number.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let mut result = *coordinates;

    if let (Some(hue), Some(chroma)) = (space.hue_index(), space.chroma_index()) {
        if result[hue].is_nan() {
            result[chroma] = 0.0;
        }
        if space.is_ok() {
            result[chroma] = result[chroma].max(0.0);
        }
    }

    for c in result.iter_mut() {
        if c.is_nan() {
            *c = 0.0;
        }
    }

    if space.is_ok() {
        result[0] = result[0].clamp(0.0, 1.0);
    }

    result
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    // Zero out not-a-numbers and clamp Oklab's lightness.
    let mut coordinates = normalize(space, coordinates);

    // Normalize rotation and scale to unit range.
    if let Some(index) = space.hue_index() {
        coordinates[index] = coordinates[index].rem_euclid(360.0) / 360.0;
    }
    let [mut c1, mut c2, mut c3] = coordinates;

    // Reduce precision.
    let factor = <Float as FloatExt>::ROUNDING_FACTOR;
    c1 = (c1 * factor).round();
    c2 = (c2 * factor).round();
    c3 = (c3 * factor).round();

    // Prevent too much negativity.
    if c1 == -0.0 {
        c1 = 0.0;
    }
    if c2 == -0.0 {
        c2 = 0.0
    }
    if c3 == -0.0 {
        c3 = 0.0
    }

    [c1.to_bits(), c2.to_bits(), c3.to_bits()]
}

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}


#[cfg(test)]
mod test {
    use super::{normalize, to_eq_coordinates};
    use crate::{ColorSpace, Float};

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(ColorSpace::Oklch, &[1.2, 0.1, Float::NAN]),
            [1.0, 0.0, 0.0]
        );
        assert_eq!(
            normalize(ColorSpace::Hct, &[Float::NAN, 30.0, 50.0]),
            [0.0, 0.0, 50.0]
        );
        assert_eq!(
            normalize(ColorSpace::Hsv, &[Float::NAN, 30.0, 50.0]),
            [0.0, 0.0, 50.0]
        );
        assert_eq!(
            normalize(ColorSpace::Srgb, &[Float::NAN, 1.5, -0.5]),
            [0.0, 1.5, -0.5]
        );
    }

    #[test]
    fn test_eq_coordinates() {
        assert_eq!(
            to_eq_coordinates(ColorSpace::Hct, &[-30.0, 20.0, 50.0]),
            to_eq_coordinates(ColorSpace::Hct, &[330.0, 20.0, 50.0])
        );
        assert_eq!(
            to_eq_coordinates(ColorSpace::Srgb, &[-0.0, 0.5, 1.0]),
            to_eq_coordinates(ColorSpace::Srgb, &[0.0, 0.5, 1.0 + 1e-14])
        );
    }
}
