use crate::{ColorSpace, Float};

/// Format a single number without trailing zeros.
///
/// Formatting floats with a precision produces trailing zeros. Rounding
/// avoids them, for the most part. If the fractional part is zero, we do need
/// an explicit precision, of zero.
fn format_number(
    number: Float,
    factor: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    if number.is_nan() {
        return f.write_str("none");
    }

    let n = (number * factor).round() / factor;
    if n == n.trunc() {
        f.write_fmt(format_args!("{:.0}", n))
    } else {
        f.write_fmt(format_args!("{}", n))
    }
}

/// Format the color as a CSS color function with the color space's
/// identifier.
///
/// Coordinates are rounded to the formatter's precision, by default 5
/// digits, with hues having two digits less. Not-a-number coordinates are
/// written as `none`. Alpha is only included if it is less than one.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    alpha: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_fmt(format_args!("color({}", space.id()))?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        f.write_str(" ")?;
        let factor = if space.hue_index() == Some(index) {
            factor / 100.0
        } else {
            factor
        };
        format_number(*coordinate, factor, f)?;
    }

    if alpha < 1.0 {
        f.write_str(" / ")?;
        format_number(alpha, factor, f)?;
    }

    f.write_str(")")
}

#[cfg(test)]
mod test {
    use super::format;
    use crate::ColorSpace::{self, *};
    use crate::Float;

    struct Formatted(ColorSpace, [Float; 3], Float);

    impl std::fmt::Display for Formatted {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            format(self.0, &self.1, self.2, f)
        }
    }

    #[test]
    fn test_format() {
        for (space, coordinates, alpha, expected) in [
            (Srgb, [0.0, 0.0, 0.0], 1.0, "color(srgb 0 0 0)"),
            (Srgb, [1.0, 0.5, 0.25], 1.0, "color(srgb 1 0.5 0.25)"),
            (
                LinearSrgb,
                [0.123456789, 0.0, 1.0],
                1.0,
                "color(srgb-linear 0.12346 0 1)",
            ),
            (Oklch, [0.5, 0.2, 123.456789], 1.0, "color(oklch 0.5 0.2 123.457)"),
            (Hct, [209.5412, 2.8, 100.0], 1.0, "color(hct 209.541 2.8 100)"),
            (Oklab, [0.7, Float::NAN, 0.1], 1.0, "color(oklab 0.7 none 0.1)"),
            (DisplayP3, [0.0, 1.0, 0.0], 0.5, "color(display-p3 0 1 0 / 0.5)"),
            (Xyz, [0.2, 0.3, 0.4], 0.0, "color(xyz-d65 0.2 0.3 0.4 / 0)"),
        ] {
            assert_eq!(
                Formatted(space, coordinates, alpha).to_string(),
                expected
            );
        }

        assert_eq!(
            format!("{:.2}", Formatted(Srgb, [0.123, 0.456, 0.789], 1.0)),
            "color(srgb 0.12 0.46 0.79)"
        );
    }
}
