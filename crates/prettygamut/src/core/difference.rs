use super::cam16::Environment;
use super::hct::{hct_to_xyz, xyz_to_hct, HCT_ENVIRONMENT};
use super::{convert, ColorSpace};
use crate::Float;

/// The perceptual distance metrics, i.e., ΔE variations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeltaE {
    /// The Euclidean distance in Oklab.
    #[default]
    Ok,
    /// The Euclidean distance in CIELAB, i.e., the CIE 1976 color difference.
    E76,
    /// The CIE 2000 color difference in CIELAB.
    E2000,
    /// The Euclidean distance in a CAM16 UCS like rendition of HCT.
    Hct,
}

impl DeltaE {
    /// Get the color space this metric is computed in.
    pub const fn space(&self) -> ColorSpace {
        match *self {
            Self::Ok => ColorSpace::Oklab,
            Self::E76 | Self::E2000 => ColorSpace::Lab,
            Self::Hct => ColorSpace::Hct,
        }
    }

    /// Compute this metric for the two colors.
    pub(crate) fn compute(
        &self,
        space1: ColorSpace,
        coordinates1: &[Float; 3],
        space2: ColorSpace,
        coordinates2: &[Float; 3],
    ) -> Float {
        let target = self.space();
        let coordinates1 = convert(space1, target, coordinates1);
        let coordinates2 = convert(space2, target, coordinates2);

        match *self {
            Self::Ok | Self::E76 => euclidean_distance(&coordinates1, &coordinates2),
            Self::E2000 => delta_e_2000(&coordinates1, &coordinates2),
            Self::Hct => delta_e_hct(&coordinates1, &coordinates2, &HCT_ENVIRONMENT),
        }
    }
}

impl std::fmt::Display for DeltaE {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Ok => "ΔE OK",
            Self::E76 => "ΔE 76",
            Self::E2000 => "ΔE 2000",
            Self::Hct => "ΔE HCT",
        };

        f.write_str(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the Euclidean distance between coordinates in a rectangular color
/// space. For Oklab or Oklrab, that is ΔE OK. For CIELAB, that is ΔE 76.
#[allow(non_snake_case)]
pub(crate) fn euclidean_distance(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// 25 to the seventh power.
const G_FACTOR: Float = 6_103_515_625.0;

/// Compute ΔE 2000 between CIELAB coordinates, with the parametric factors
/// k<sub>L</sub>, k<sub>C</sub>, and k<sub>H</sub> all 1.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    // Adjust a to make the blue-ish region more uniform
    let C_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let C7 = C_bar.powi(7);
    let G = 0.5 * (1.0 - (C7 / (C7 + G_FACTOR)).sqrt());

    let a1 = (1.0 + G) * a1;
    let a2 = (1.0 + G) * a2;
    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);

    let hue = |a: Float, b: Float| {
        if a == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        }
    };
    let h1 = hue(a1, b1);
    let h2 = hue(a2, b2);

    let ΔL = L2 - L1;
    let ΔC = C2 - C1;

    let chroma_product = C1 * C2;
    let h_diff = h2 - h1;
    let h_sum = h1 + h2;

    let Δh = if chroma_product == 0.0 {
        0.0
    } else if h_diff.abs() <= 180.0 {
        h_diff
    } else if 180.0 < h_diff {
        h_diff - 360.0
    } else {
        h_diff + 360.0
    };
    let ΔH = 2.0 * chroma_product.sqrt() * (Δh / 2.0).to_radians().sin();

    let L_mean = (L1 + L2) / 2.0;
    let C_mean = (C1 + C2) / 2.0;
    let h_mean = if chroma_product == 0.0 {
        h_sum
    } else if h_diff.abs() <= 180.0 {
        h_sum / 2.0
    } else if h_sum < 360.0 {
        (h_sum + 360.0) / 2.0
    } else {
        (h_sum - 360.0) / 2.0
    };

    let L_sq = (L_mean - 50.0).powi(2);
    let SL = 1.0 + 0.015 * L_sq / (20.0 + L_sq).sqrt();
    let SC = 1.0 + 0.045 * C_mean;

    let T = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();
    let SH = 1.0 + 0.015 * C_mean * T;

    let Δθ = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let C_mean7 = C_mean.powi(7);
    let RC = 2.0 * (C_mean7 / (C_mean7 + G_FACTOR)).sqrt();
    let RT = -(2.0 * Δθ).to_radians().sin() * RC;

    let l = ΔL / SL;
    let c = ΔC / SC;
    let h = ΔH / SH;

    (l * l + c * c + h * h + RT * c * h).sqrt()
}

/// The third coefficient of CAM16 UCS, which scales colorfulness.
const UCS_COEFFICIENT: Float = 0.228;

/// Compute ΔE HCT between HCT coordinates.
///
/// This function converts chroma to CAM16 UCS like colorfulness and computes
/// the Euclidean distance of tone and the resulting rectangular coordinates.
/// Coordinates with negative chroma are first round-tripped through XYZ.
pub(crate) fn delta_e_hct(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    env: &Environment,
) -> Float {
    let to_ucs = |coordinates: &[Float; 3]| {
        let [h, c, t] = if coordinates[1] < 0.0 {
            xyz_to_hct(&hct_to_xyz(coordinates, env), env)
        } else {
            *coordinates
        };

        let m = (UCS_COEFFICIENT * c * env.fl_root()).ln_1p() / UCS_COEFFICIENT;
        let (sin, cos) = h.to_radians().sin_cos();
        [t, m * cos, m * sin]
    };

    euclidean_distance(&to_ucs(coordinates1), &to_ucs(coordinates2))
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_delta_e_2000() {
        // From Sharma, Wu, and Dalal's test data for CIEDE2000
        for (lab1, lab2, expected) in [
            ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
            ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
            ([50.0, 2.5, 0.0], [50.0, 0.0, -2.5], 4.3065),
            ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.1492),
            ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ] {
            assert_abs_diff_eq!(delta_e_2000(&lab1, &lab2), expected, epsilon = 1e-4);
            assert_abs_diff_eq!(delta_e_2000(&lab2, &lab1), expected, epsilon = 1e-4);
        }

        assert_eq!(delta_e_2000(&[40.0, 10.0, 20.0], &[40.0, 10.0, 20.0]), 0.0);
    }

    #[test]
    fn test_delta_e_hct() {
        let env = &*HCT_ENVIRONMENT;

        assert_eq!(delta_e_hct(&[20.0, 40.0, 50.0], &[20.0, 40.0, 50.0], env), 0.0);

        // Achromatic colors only differ in tone
        assert_abs_diff_eq!(
            delta_e_hct(&[20.0, 0.0, 50.0], &[200.0, 0.0, 40.0], env),
            10.0,
            epsilon = 1e-12
        );

        // Opposite hues at the same chroma and tone
        let d = delta_e_hct(&[0.0, 30.0, 50.0], &[180.0, 30.0, 50.0], env);
        let m = (UCS_COEFFICIENT * 30.0 * env.fl_root()).ln_1p() / UCS_COEFFICIENT;
        assert_abs_diff_eq!(d, 2.0 * m, epsilon = 1e-9);

        // Negative chroma is repaired through XYZ
        let d = delta_e_hct(&[120.0, -5.0, 50.0], &[120.0, -5.0, 50.0], env);
        assert!(d.is_finite());
    }

    #[test]
    fn test_compute() {
        let red = [1.0, 0.0, 0.0];
        let blue = [0.0, 0.0, 1.0];

        for metric in [DeltaE::Ok, DeltaE::E76, DeltaE::E2000, DeltaE::Hct] {
            let same = metric.compute(ColorSpace::Srgb, &red, ColorSpace::Srgb, &red);
            assert_abs_diff_eq!(same, 0.0, epsilon = 1e-9);

            let d1 = metric.compute(ColorSpace::Srgb, &red, ColorSpace::Srgb, &blue);
            let d2 = metric.compute(ColorSpace::Srgb, &blue, ColorSpace::Srgb, &red);
            assert!(0.0 < d1);
            assert_abs_diff_eq!(d1, d2, epsilon = 1e-9);
        }

        // Conversion is transparent
        let oklab = convert(ColorSpace::Srgb, ColorSpace::Oklab, &red);
        assert_abs_diff_eq!(
            DeltaE::Ok.compute(ColorSpace::Oklab, &oklab, ColorSpace::Srgb, &blue),
            DeltaE::Ok.compute(ColorSpace::Srgb, &red, ColorSpace::Srgb, &blue),
            epsilon = 1e-12
        );
    }
}
