//! Conversion between color spaces.
//!
//! Every color space but XYZ D65 is defined in terms of a base color space,
//! with [`ColorSpace::base`] returning it. Together, the color spaces form a
//! tree rooted in XYZ D65. This module implements the one-hop conversions
//! between color spaces and their bases, and [`convert`] composes them by
//! climbing from the source towards the root until it reaches an ancestor of
//! the target and then descending towards the target.

use super::cam16::{jmh_to_xyz, xyz_to_jmh, CAM16_ENVIRONMENT};
use super::hct::{from_lstar, hct_to_xyz, to_lstar, xyz_to_hct, HCT_ENVIRONMENT};
use super::math::multiply;
use super::{normalize, ColorSpace};
use crate::Float;

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected RGB to linear RGB using sRGB's
/// gamma. Display P3 uses the very same gamma.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(|c| {
        let magnitude = c.abs();
        if magnitude <= 0.04045 {
            c / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(c)
        }
    })
}

/// Convert coordinates from linear RGB to gamma-corrected RGB using sRGB's
/// gamma. Display P3 uses the very same gamma.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(|c| {
        let magnitude = c.abs();
        if magnitude <= 0.00313098 {
            c * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(c)
        }
    })
}

mod rec2020 {
    use crate::Float;

    #[allow(clippy::excessive_precision)]
    const ALPHA: Float = 1.09929682680944;
    #[allow(clippy::excessive_precision)]
    const BETA: Float = 0.018053968510807;

    /// Convert coordinates for Rec. 2020 to linear Rec. 2020.
    pub(super) fn rec2020_to_linear_rec2020(value: &[Float; 3]) -> [Float; 3] {
        value.map(|c| {
            if c < BETA * 4.5 {
                c / 4.5
            } else {
                ((c + ALPHA - 1.0) / ALPHA).powf((0.45 as Float).recip())
            }
        })
    }

    /// Convert coordinates for linear Rec. 2020 to Rec. 2020.
    pub(super) fn linear_rec2020_to_rec2020(value: &[Float; 3]) -> [Float; 3] {
        value.map(|c| {
            if c < BETA {
                c * 4.5
            } else {
                ALPHA * c.powf(0.45) - (ALPHA - 1.0)
            }
        })
    }
}

use rec2020::{linear_rec2020_to_rec2020, rec2020_to_linear_rec2020};

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: [[Float; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

// https://github.com/color-js/color.js/blob/main/src/spaces/rec2020-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_REC2020_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.6369580483012914, 0.14461690358620832,  0.1688809751641721  ],
    [ 0.2627002120112671, 0.6779980715188708,   0.05930171646986196 ],
    [ 0.000000000000000,  0.028072693049087428, 1.060985057710791   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_REC2020: [[Float; 3]; 3] = [
    [  1.716651187971268,  -0.355670783776392, -0.253366281373660  ],
    [ -0.666684351832489,   1.616481236634939,  0.0157685458139111 ],
    [  0.017639857445311,  -0.042770613257809,  0.942103121235474  ],
];

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSV to sRGB.
fn hsv_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let h = if h.is_nan() { 0.0 } else { h.rem_euclid(360.0) };
    let s = s / 100.0;
    let v = v / 100.0;

    let f = |n: Float| {
        let k = (n + h / 60.0) % 6.0;
        v - v * s * k.min(4.0 - k).min(1.0).max(0.0)
    };

    [f(5.0), f(3.0), f(1.0)]
}

/// Convert sRGB to HSV. Grays have a not-a-number hue.
fn srgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let mut h = Float::NAN;
    if d != 0.0 {
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h *= 60.0;
        if 360.0 <= h {
            h -= 360.0;
        }
    }

    let s = if max == 0.0 { 0.0 } else { d / max };
    [h, s * 100.0, max * 100.0]
}

// --------------------------------------------------------------------------------------------------------------------

/// Conversion between rectangular and polar representations, which is the
/// same for Oklab/Oklch, Oklrab/Oklrch, and CIELAB/CIELCh.
mod polar {
    use crate::Float;

    /// The threshold below which Oklab's a and b make for a gray.
    pub(super) const OK_ACHROMATIC: Float = 0.0002;

    /// The threshold below which CIELAB's a and b make for a gray.
    pub(super) const LAB_ACHROMATIC: Float = 0.02;

    /// Convert polar coordinates, with the hue in degrees, to rectangular
    /// coordinates. A not-a-number hue is treated as zero chroma.
    #[allow(non_snake_case)]
    pub(super) fn polar_to_rectangular(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;

        if h.is_nan() {
            [L, 0.0, 0.0]
        } else {
            let (sin, cos) = h.to_radians().sin_cos();
            let C = C.max(0.0);
            [L, C * cos, C * sin]
        }
    }

    /// Convert rectangular coordinates to polar coordinates. If both
    /// rectangular coordinates are smaller than the threshold in magnitude,
    /// the hue is not-a-number.
    #[allow(non_snake_case)]
    pub(super) fn rectangular_to_polar(value: &[Float; 3], threshold: Float) -> [Float; 3] {
        let [L, a, b] = *value;

        let a_m = a.abs();
        if a_m < threshold && b.abs() < threshold {
            return [L, 0.0, Float::NAN];
        }

        // per herbie 2.1
        let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };

        let h = b.atan2(a).to_degrees();
        let h = if h.is_sign_negative() { h + 360.0 } else { h };

        [L, C, h]
    }
}

use polar::{polar_to_rectangular, rectangular_to_polar, LAB_ACHROMATIC, OK_ACHROMATIC};

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/colorpicker/#intermission---a-new-lightness-estimate-for-oklab

const K1: Float = 0.206;
const K2: Float = 0.03;
const K3: Float = (1.0 + K1) / (1.0 + K2);

/// Replace Oklab's lightness L with the improved lightness Lr.
fn lightness_to_revised(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;
    let k3lk1 = K3.mul_add(l, -K1);
    [
        0.5 * (k3lk1 + k3lk1.mul_add(k3lk1, 4.0 * K2 * K3 * l).sqrt()),
        a,
        b,
    ]
}

/// Replace the improved lightness Lr with Oklab's lightness L.
fn revised_to_lightness(value: &[Float; 3]) -> [Float; 3] {
    let [lr, a, b] = *value;
    [(lr * (lr + K1)) / (K3 * (lr + K2)), a, b]
}

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert Oklab to XYZ.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let lms = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &lms.map(|c| c.powi(3)))
}

/// Convert XYZ to Oklab.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let lms = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &lms.map(Float::cbrt))
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/main/src/spaces/lab.js

/// The XYZ coordinates of the D50 standard illuminant.
const D50: [Float; 3] = [0.3457 / 0.3585, 1.0, (1.0 - 0.3457 - 0.3585) / 0.3585];

const EPSILON3: Float = 24.0 / 116.0;
const KAPPA: Float = 24389.0 / 27.0;

/// Convert XYZ D50 to CIELAB.
fn xyz_d50_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let f = |c: Float| (to_lstar(c) + 16.0) / 116.0;
    let fx = f(value[0] / D50[0]);
    let fy = f(value[1]);
    let fz = f(value[2] / D50[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIELAB to XYZ D50.
fn lab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let f = |c: Float| {
        if c > EPSILON3 {
            c.powi(3)
        } else {
            (116.0 * c - 16.0) / KAPPA
        }
    };

    [f(fx) * D50[0], from_lstar(l), f(fz) * D50[2]]
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: [[Float; 3]; 3] = [
    [  1.0479297925449969,   0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,  0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504, 0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: [[Float; 3]; 3] = [
    [  0.955473421488075,    -0.02309845494876471,  0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,   0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964, 1.330365926242124    ],
];

// ====================================================================================================================

/// Convert coordinates in the color space to its base color space.
fn to_base(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match space {
        Srgb | DisplayP3 => rgb_to_linear_rgb(value),
        Rec2020 => rec2020_to_linear_rec2020(value),
        LinearSrgb => multiply(&LINEAR_SRGB_TO_XYZ, value),
        LinearDisplayP3 => multiply(&LINEAR_DISPLAY_P3_TO_XYZ, value),
        LinearRec2020 => multiply(&LINEAR_REC2020_TO_XYZ, value),
        Hsv => hsv_to_srgb(value),
        Oklch => polar_to_rectangular(value),
        Oklrab | Oklrch => revised_to_lightness(value),
        Oklab => oklab_to_xyz(value),
        Lch => polar_to_rectangular(value),
        Lab => lab_to_xyz_d50(value),
        Hct => hct_to_xyz(value, &HCT_ENVIRONMENT),
        Cam16Jmh => jmh_to_xyz(value, &CAM16_ENVIRONMENT),
        XyzD50 => multiply(&D50_TO_D65, value),
        Xyz => *value,
    }
}

/// Convert coordinates in the color space's base color space to the color
/// space.
fn from_base(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match space {
        Srgb | DisplayP3 => linear_rgb_to_rgb(value),
        Rec2020 => linear_rec2020_to_rec2020(value),
        LinearSrgb => multiply(&XYZ_TO_LINEAR_SRGB, value),
        LinearDisplayP3 => multiply(&XYZ_TO_LINEAR_DISPLAY_P3, value),
        LinearRec2020 => multiply(&XYZ_TO_LINEAR_REC2020, value),
        Hsv => srgb_to_hsv(value),
        Oklch => rectangular_to_polar(value, OK_ACHROMATIC),
        Oklrab | Oklrch => lightness_to_revised(value),
        Oklab => xyz_to_oklab(value),
        Lch => rectangular_to_polar(value, LAB_ACHROMATIC),
        Lab => xyz_d50_to_lab(value),
        Hct => xyz_to_hct(value, &HCT_ENVIRONMENT),
        Cam16Jmh => xyz_to_jmh(value, &CAM16_ENVIRONMENT),
        XyzD50 => multiply(&D65_TO_D50, value),
        Xyz => *value,
    }
}

/// The maximum number of color spaces from any color space to the root,
/// inclusive.
const MAX_DEPTH: usize = 5;

/// Determine the path from the color space to the root XYZ D65.
fn lineage(space: ColorSpace) -> ([ColorSpace; MAX_DEPTH], usize) {
    let mut path = [ColorSpace::Xyz; MAX_DEPTH];
    let mut length = 0;
    let mut current = Some(space);

    while let Some(space) = current {
        path[length] = space;
        length += 1;
        current = space.base();
    }

    (path, length)
}

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to to the targeted color space, which may be the same as the original
/// color space. This function does not check whether the result is in gamut for
/// the targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    // 1. Normalize coordinates. Be done if color spaces are the same.
    let mut coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    let (source, source_length) = lineage(from_space);
    let (target, target_length) = lineage(to_space);
    let target = &target[..target_length];

    // 2. Climb from source until reaching the first common ancestor
    let mut ancestor = target_length - 1;
    for &space in &source[..source_length] {
        if let Some(index) = target.iter().position(|&s| s == space) {
            ancestor = index;
            break;
        }
        coordinates = to_base(space, &coordinates);
    }

    // 3. Descend from common ancestor to target
    for &space in target[..ancestor].iter().rev() {
        coordinates = from_base(space, &coordinates);
    }

    coordinates
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, ColorSpace::*};
    use crate::Float;
    use approx::assert_relative_eq;

    struct Representations {
        srgb: [Float; 3],
        linear_srgb: [Float; 3],
        p3: [Float; 3],
        linear_p3: [Float; 3],
        rec2020: [Float; 3],
        linear_rec2020: [Float; 3],
        hsv: [Float; 3],
        oklch: [Float; 3],
        oklab: [Float; 3],
        oklrch: [Float; 3],
        oklrab: [Float; 3],
        lab: [Float; 3],
        lch: [Float; 3],
        xyz: [Float; 3],
        xyz_d50: [Float; 3],
    }

    const YELLOW: Representations = Representations {
        // #ffca00
        srgb: [1.0, 0.792156862745098, 0.0],
        linear_srgb: [1.0, 0.5906188409193369, 0.0],
        p3: [0.967346220711791, 0.8002244967941964, 0.27134084647161244],
        linear_p3: [0.9273192749713864, 0.6042079205196976, 0.059841923211596565],
        rec2020: [0.9071245864481046, 0.7821891940186851, 0.22941491945066222],
        linear_rec2020: [0.8218846623958427, 0.6121951716762088, 0.0683737567590739],
        hsv: [47.52941176470588, 100.0, 100.0],
        oklch: [0.8613332073307732, 0.1760097742886813, 89.440876452466],
        oklab: [
            0.8613332073307732,
            0.0017175723640959761,
            0.17600139371700052,
        ],
        oklrch: [0.8385912822460642, 0.1760097742886813, 89.440876452466],
        oklrab: [
            0.8385912822460642,
            0.0017175723640959761,
            0.17600139371700052,
        ],
        lab: [84.27202490523537, 9.217455990603362, 84.47723289078787],
        lch: [84.27202490523537, 84.9786112608527, 83.77299271233113],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
        xyz_d50: [0.6635434850467424, 0.6459001538545541, 0.07126198065563918],
    };

    const BLUE: Representations = Representations {
        // #3178ea
        srgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        linear_srgb: [
            0.030713443732993635,
            0.18782077230067787,
            0.8227857543962835,
        ],
        p3: [0.26851535563550943, 0.4644576150842869, 0.8876966971452301],
        linear_p3: [0.058605969547446124, 0.18260572039525869, 0.763285235993837],
        rec2020: [0.318905170074285, 0.4141244051667745, 0.8687817570254107],
        linear_rec2020: [0.11675330225613656, 0.18417975425846383, 0.7539171810709095],
        hsv: [216.97297297297297, 79.05982905982906, 91.76470588235294],
        oklch: [0.5909012953108558, 0.18665606306724153, 259.66681920272595],
        oklab: [
            0.5909012953108558,
            -0.03348086515869664,
            -0.1836287492414715,
        ],
        oklrch: [0.5253778775789848, 0.18665606306724153, 259.66681920272595],
        oklrab: [
            0.5253778775789848,
            -0.03348086515869664,
            -0.1836287492414715,
        ],
        lab: [50.84558268299661, 9.53423070844478, -65.21770438095244],
        lch: [50.84558268299661, 65.91092868351313, 278.3172007684866],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
        xyz_d50: [0.20345542047334936, 0.1913569200613913, 0.6062123188831731],
    };

    fn assert_near(actual: &[Float; 3], expected: &[Float; 3]) {
        for index in 0..3 {
            assert_relative_eq!(actual[index], expected[index], epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_one_hop_conversions() {
        for color in [&YELLOW, &BLUE] {
            let linear_srgb = to_base(Srgb, &color.srgb);
            assert_same_coordinates!(LinearSrgb, &linear_srgb, &color.linear_srgb);
            assert_same_coordinates!(Srgb, &from_base(Srgb, &linear_srgb), &color.srgb);

            let xyz = to_base(LinearSrgb, &linear_srgb);
            assert_same_coordinates!(Xyz, &xyz, &color.xyz);
            assert_same_coordinates!(LinearSrgb, &from_base(LinearSrgb, &xyz), &linear_srgb);

            let linear_p3 = from_base(LinearDisplayP3, &xyz);
            assert_same_coordinates!(LinearDisplayP3, &linear_p3, &color.linear_p3);
            assert_same_coordinates!(DisplayP3, &from_base(DisplayP3, &linear_p3), &color.p3);

            let linear_rec2020 = from_base(LinearRec2020, &xyz);
            assert_same_coordinates!(LinearRec2020, &linear_rec2020, &color.linear_rec2020);
            let rec2020 = from_base(Rec2020, &linear_rec2020);
            assert_same_coordinates!(Rec2020, &rec2020, &color.rec2020);
            assert_same_coordinates!(
                LinearRec2020,
                &to_base(Rec2020, &rec2020),
                &linear_rec2020
            );

            let oklab = from_base(Oklab, &xyz);
            assert_same_coordinates!(Oklab, &oklab, &color.oklab);
            assert_same_coordinates!(Xyz, &to_base(Oklab, &oklab), &xyz);

            let oklch = from_base(Oklch, &oklab);
            assert_same_coordinates!(Oklch, &oklch, &color.oklch);
            assert_same_coordinates!(Oklab, &to_base(Oklch, &oklch), &oklab);

            let oklrab = from_base(Oklrab, &oklab);
            assert_same_coordinates!(Oklrab, &oklrab, &color.oklrab);
            let oklrch = from_base(Oklrch, &oklch);
            assert_same_coordinates!(Oklrch, &oklrch, &color.oklrch);
            assert_same_coordinates!(Oklch, &to_base(Oklrch, &oklrch), &oklch);

            let xyz_d50 = from_base(XyzD50, &xyz);
            assert_same_coordinates!(XyzD50, &xyz_d50, &color.xyz_d50);
            assert_same_coordinates!(Xyz, &to_base(XyzD50, &xyz_d50), &xyz);

            let lab = from_base(Lab, &xyz_d50);
            assert_near(&lab, &color.lab);
            assert_near(&to_base(Lab, &lab), &xyz_d50);

            let lch = from_base(Lch, &lab);
            assert_near(&lch, &color.lch);
            assert_near(&to_base(Lch, &lch), &lab);

            let hsv = from_base(Hsv, &color.srgb);
            assert_near(&hsv, &color.hsv);
            assert_near(&to_base(Hsv, &hsv), &color.srgb);
        }
    }

    #[test]
    fn test_routing() {
        for color in [&YELLOW, &BLUE] {
            assert_near(&convert(Hsv, Lch, &color.hsv), &color.lch);
            assert_near(&convert(Lch, Hsv, &color.lch), &color.hsv);
            assert_near(&convert(Oklrch, Rec2020, &color.oklrch), &color.rec2020);
            assert_near(&convert(Oklrab, Oklch, &color.oklrab), &color.oklch);
            assert_near(&convert(XyzD50, Oklrch, &color.xyz_d50), &color.oklrch);
            assert_near(&convert(DisplayP3, Srgb, &color.p3), &color.srgb);

            for space in ColorSpace::ALL {
                let there = convert(Srgb, space, &color.srgb);
                let back = convert(space, Srgb, &there);
                for index in 0..3 {
                    assert_relative_eq!(back[index], color.srgb[index], epsilon = 1e-7);
                }
            }
        }
    }

    #[test]
    fn test_achromatic() {
        let white = convert(Srgb, Lch, &[1.0, 1.0, 1.0]);
        assert_relative_eq!(white[0], 100.0, epsilon = 1e-9);
        assert_eq!(white[1], 0.0);
        assert!(white[2].is_nan());

        let gray = convert(Srgb, Hsv, &[0.5, 0.5, 0.5]);
        assert!(gray[0].is_nan());
        assert_eq!(gray[1], 0.0);
        assert_relative_eq!(gray[2], 50.0);

        let black = convert(Srgb, Hct, &[0.0, 0.0, 0.0]);
        assert_eq!(black, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_oklrxx() {
        // Based on https://github.com/color-js/color.js/pull/511
        assert_same_coordinates!(
            Oklrab,
            &convert(Srgb, Oklrab, &[1.0, 0.0, 0.0]),
            &[0.5680846563197034, 0.2248630684262744, 0.125846277330585]
        );
        assert_same_coordinates!(
            Oklrab,
            &convert(Srgb, Oklrab, &[0.0, 1.0, 0.0]),
            &[0.8445289714936317, -0.23388758093655815, 0.1794984451609376]
        );
        assert_same_coordinates!(
            Oklrab,
            &convert(Srgb, Oklrab, &[0.0, 0.0, 1.0]),
            &[
                0.3665653391870817,
                -0.03245697517079771,
                -0.3115281656775778
            ]
        );
    }
}
