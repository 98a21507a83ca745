//! The CAM16 color appearance model.
//!
//! CAM16 predicts how a color appears to a human observer under given viewing
//! conditions. Those conditions are captured by an [`Environment`], which
//! is expensive enough to compute that it is computed once and then passed by
//! reference to [`from_xyz`] and [`to_xyz`].

use std::sync::LazyLock;

use super::math::{constrain_hue, multiply, signed_pow, zero_div};
use crate::Float;

/// The XYZ coordinates of the D65 standard illuminant.
pub(crate) const D65: [Float; 3] = [0.3127 / 0.3290, 1.0, (1.0 - 0.3127 - 0.3290) / 0.3290];

const ADAPTED_COEF: Float = 0.42;
const ADAPTED_COEF_INV: Float = 1.0 / ADAPTED_COEF;
const TAU: Float = 2.0 * std::f64::consts::PI as Float;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const CAT16: [[Float; 3]; 3] = [
    [  0.401288, 0.650173, -0.051461 ],
    [ -0.250268, 1.204414,  0.045854 ],
    [ -0.002079, 0.048952,  0.953127 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const CAT16_INV: [[Float; 3]; 3] = [
    [  1.8620678550872327,  -1.0112546305316843,   0.14918677544445175  ],
    [  0.38752654323613717,  0.6214474419314753,  -0.008973985167612518 ],
    [ -0.015841498849333856, -0.03412293802851557, 1.0499644368778496   ],
];

#[rustfmt::skip]
const M1: [[Float; 3]; 3] = [
    [ 460.0,  451.0,   288.0 ],
    [ 460.0, -891.0,  -261.0 ],
    [ 460.0, -220.0, -6300.0 ],
];

const HUE_ANGLES: [Float; 5] = [20.14, 90.0, 164.25, 237.53, 380.14];
const HUE_ECCENTRICITIES: [Float; 5] = [0.8, 0.7, 1.0, 1.2, 0.8];
const HUE_QUADRATURES: [Float; 5] = [0.0, 100.0, 200.0, 300.0, 400.0];

// --------------------------------------------------------------------------------------------------------------------

/// The surround of a viewing environment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Surround {
    Dark,
    Dim,
    #[default]
    Average,
}

impl Surround {
    /// Get the factor F, the impact of surround c, and the chromatic
    /// induction factor Nc.
    const fn factors(&self) -> [Float; 3] {
        match *self {
            Self::Dark => [0.8, 0.525, 0.8],
            Self::Dim => [0.9, 0.59, 0.9],
            Self::Average => [1.0, 0.69, 1.0],
        }
    }
}

/// The viewing conditions for CAM16.
///
/// An environment is derived from a reference white, the adapting luminance
/// in cd/m², the background luminance relative to the white's luminance of
/// 100, the surround, and whether the illuminant is discounted. Once
/// created, it is immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    c: Float,
    nc: Float,
    fl: Float,
    fl_root: Float,
    n: Float,
    z: Float,
    nbb: Float,
    ncb: Float,
    d_rgb: [Float; 3],
    d_rgb_inv: [Float; 3],
    a_w: Float,
}

impl Environment {
    /// Create a new viewing environment.
    pub fn new(
        white: [Float; 3],
        adapting_luminance: Float,
        background_luminance: Float,
        surround: Surround,
        discounting: bool,
    ) -> Self {
        let [f, c, nc] = surround.factors();
        let xyz_w = white.map(|v| v * 100.0);
        let yw = xyz_w[1];
        let rgb_w = multiply(&CAT16, &xyz_w);

        let la = adapting_luminance;
        let k = 1.0 / (5.0 * la + 1.0);
        let k4 = k.powi(4);
        let fl = k4 * la + 0.1 * (1.0 - k4) * (1.0 - k4) * (5.0 * la).cbrt();
        let fl_root = fl.powf(0.25);

        let n = background_luminance / yw;
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 * n.powf(-0.2);
        let ncb = nbb;

        let d = if discounting {
            1.0
        } else {
            (f * (1.0 - 1.0 / 3.6 * ((-la - 42.0) / 92.0).exp())).clamp(0.0, 1.0)
        };

        let d_rgb = rgb_w.map(|v| 1.0 + (yw / v - 1.0) * d);
        let d_rgb_inv = d_rgb.map(Float::recip);

        let rgb_cw = [rgb_w[0] * d_rgb[0], rgb_w[1] * d_rgb[1], rgb_w[2] * d_rgb[2]];
        let [r, g, b] = adapt(&rgb_cw, fl);
        let a_w = nbb * (2.0 * r + g + 0.05 * b);

        Self {
            c,
            nc,
            fl,
            fl_root,
            n,
            z,
            nbb,
            ncb,
            d_rgb,
            d_rgb_inv,
            a_w,
        }
    }

    /// Get the luminance level adaptation factor F<sub>L</sub>.
    pub fn fl(&self) -> Float {
        self.fl
    }

    /// Get the fourth root of the luminance level adaptation factor.
    pub fn fl_root(&self) -> Float {
        self.fl_root
    }

    /// Get the achromatic response to white A<sub>w</sub>.
    pub fn a_w(&self) -> Float {
        self.a_w
    }
}

impl Default for Environment {
    /// Create CAM16's default environment.
    ///
    /// It uses D65 as reference white, 64/π·0.2 cd/m² adapting luminance,
    /// 20 background luminance, and average surround without discounting.
    fn default() -> Self {
        Self::new(
            D65,
            64.0 / std::f64::consts::PI as Float * 0.2,
            20.0,
            Surround::Average,
            false,
        )
    }
}

/// CAM16's default environment, used by the CAM16-JMh color space.
pub(crate) static CAM16_ENVIRONMENT: LazyLock<Environment> = LazyLock::new(Environment::default);

// --------------------------------------------------------------------------------------------------------------------

/// The appearance correlates computed by CAM16.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cam16 {
    /// Lightness J
    pub lightness: Float,
    /// Chroma C
    pub chroma: Float,
    /// Hue angle h in degrees
    pub hue: Float,
    /// Saturation s
    pub saturation: Float,
    /// Brightness Q
    pub brightness: Float,
    /// Colorfulness M
    pub colorfulness: Float,
    /// Hue quadrature H
    pub hue_quadrature: Float,
}

/// A relative lightness correlate for [`to_xyz`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Lightness {
    /// Lightness J
    J(Float),
    /// Brightness Q
    Q(Float),
}

/// A chroma correlate for [`to_xyz`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Chroma {
    /// Chroma C
    C(Float),
    /// Colorfulness M
    M(Float),
    /// Saturation s
    S(Float),
}

/// A hue correlate for [`to_xyz`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Hue {
    /// Hue angle h in degrees
    Angle(Float),
    /// Hue quadrature H
    Quadrature(Float),
}

/// The correlates needed for inverting CAM16: exactly one each of lightness,
/// chroma, and hue.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cam16Spec {
    pub lightness: Lightness,
    pub chroma: Chroma,
    pub hue: Hue,
}

impl Cam16Spec {
    /// Create a new specification from lightness J, chroma C, and hue angle h.
    pub const fn jch(j: Float, c: Float, h: Float) -> Self {
        Self {
            lightness: Lightness::J(j),
            chroma: Chroma::C(c),
            hue: Hue::Angle(h),
        }
    }

    /// Create a new specification from lightness J, colorfulness M, and hue
    /// angle h.
    pub const fn jmh(j: Float, m: Float, h: Float) -> Self {
        Self {
            lightness: Lightness::J(j),
            chroma: Chroma::M(m),
            hue: Hue::Angle(h),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn adapt(coordinates: &[Float; 3], fl: Float) -> [Float; 3] {
    coordinates.map(|c| {
        let x = signed_pow(fl * c.abs() * 0.01, ADAPTED_COEF);
        400.0 * x.copysign(c) / (x + 27.13)
    })
}

fn unadapt(adapted: &[Float; 3], fl: Float) -> [Float; 3] {
    let constant = 100.0 / fl * (27.13 as Float).powf(ADAPTED_COEF_INV);
    adapted.map(|c| {
        let magnitude = c.abs();
        (constant * signed_pow(magnitude / (400.0 - magnitude), ADAPTED_COEF_INV)).copysign(c)
    })
}

/// Convert the hue angle in degrees to hue quadrature.
pub fn hue_quadrature(h: Float) -> Float {
    let mut hp = constrain_hue(h);
    if hp <= HUE_ANGLES[0] {
        hp += 360.0;
    }

    let i = HUE_ANGLES
        .partition_point(|&angle| angle < hp)
        .saturating_sub(1)
        .min(3);
    let [hi, hii] = [HUE_ANGLES[i], HUE_ANGLES[i + 1]];
    let [ei, eii] = [HUE_ECCENTRICITIES[i], HUE_ECCENTRICITIES[i + 1]];

    let t = (hp - hi) / ei;
    HUE_QUADRATURES[i] + 100.0 * t / (t + (hii - hp) / eii)
}

/// Convert hue quadrature to the hue angle in degrees.
pub fn inverse_hue_quadrature(quadrature: Float) -> Float {
    let hp = quadrature.rem_euclid(400.0);
    let i = ((0.01 * hp).floor() as usize).min(3);
    let hp = hp % 100.0;
    let [hi, hii] = [HUE_ANGLES[i], HUE_ANGLES[i + 1]];
    let [ei, eii] = [HUE_ECCENTRICITIES[i], HUE_ECCENTRICITIES[i + 1]];

    constrain_hue(
        (hp * (eii * hi - ei * hii) - 100.0 * hi * eii) / (hp * (eii - ei) - 100.0 * eii),
    )
}

#[inline]
fn eccentricity(hue_radian: Float) -> Float {
    0.25 * ((hue_radian + 2.0).cos() + 3.8)
}

/// Compute the CAM16 correlates for the XYZ D65 coordinates.
pub fn from_xyz(xyz: &[Float; 3], env: &Environment) -> Cam16 {
    let xyz100 = xyz.map(|c| c * 100.0);
    let rgb = multiply(&CAT16, &xyz100);
    let [red, green, blue] = adapt(
        &[
            rgb[0] * env.d_rgb[0],
            rgb[1] * env.d_rgb[1],
            rgb[2] * env.d_rgb[2],
        ],
        env.fl,
    );

    // Opponent dimensions
    let a = red + (-12.0 * green + blue) / 11.0;
    let b = (red + green - 2.0 * blue) / 9.0;
    let hue_radian = b.atan2(a).rem_euclid(TAU);

    let t = 5e4 / 13.0
        * env.nc
        * env.ncb
        * zero_div(
            eccentricity(hue_radian) * a.hypot(b),
            red + green + 1.05 * blue + 0.305,
        );
    let alpha = signed_pow(t, 0.9) * (1.64 - (0.29 as Float).powf(env.n)).powf(0.73);

    let achromatic = env.nbb * (2.0 * red + green + 0.05 * blue);
    let j_root = signed_pow(achromatic / env.a_w, 0.5 * env.c * env.z);

    let lightness = 100.0 * j_root * j_root;
    let brightness = 4.0 / env.c * j_root * (env.a_w + 4.0) * env.fl_root;
    let chroma = alpha * j_root;
    let colorfulness = chroma * env.fl_root;
    let hue = constrain_hue(hue_radian.to_degrees());
    let saturation = 50.0 * signed_pow(env.c * alpha / (env.a_w + 4.0), 0.5);

    Cam16 {
        lightness,
        chroma,
        hue,
        saturation,
        brightness,
        colorfulness,
        hue_quadrature: hue_quadrature(hue),
    }
}

/// Compute the XYZ D65 coordinates for the CAM16 correlates.
///
/// Zero lightness or brightness always results in black.
pub fn to_xyz(spec: &Cam16Spec, env: &Environment) -> [Float; 3] {
    let j_root = match spec.lightness {
        Lightness::J(j) if j == 0.0 => return [0.0, 0.0, 0.0],
        Lightness::Q(q) if q == 0.0 => return [0.0, 0.0, 0.0],
        Lightness::J(j) => signed_pow(j, 0.5) * 0.1,
        Lightness::Q(q) => 0.25 * env.c * q / ((env.a_w + 4.0) * env.fl_root),
    };

    let hue_radian = match spec.hue {
        Hue::Angle(h) => constrain_hue(h).to_radians(),
        Hue::Quadrature(quadrature) => inverse_hue_quadrature(quadrature).to_radians(),
    };
    let (sin_h, cos_h) = hue_radian.sin_cos();

    let alpha = match spec.chroma {
        Chroma::C(c) => c / j_root,
        Chroma::M(m) => (m / env.fl_root) / j_root,
        Chroma::S(s) => 0.0004 * s * s * (env.a_w + 4.0) / env.c,
    };

    let t = signed_pow(
        alpha * (1.64 - (0.29 as Float).powf(env.n)).powf(-0.73),
        10.0 / 9.0,
    );
    let achromatic = env.a_w * signed_pow(j_root, 2.0 / env.c / env.z);

    let p1 = 5e4 / 13.0 * env.nc * env.ncb * eccentricity(hue_radian);
    let p2 = achromatic / env.nbb;
    let r = 23.0 * (p2 + 0.305) * zero_div(t, 23.0 * p1 + t * (11.0 * cos_h + 108.0 * sin_h));
    let a = r * cos_h;
    let b = r * sin_h;

    let rgb = multiply(&M1, &[p2, a, b]).map(|c| c / 1403.0);
    let rgb_c = unadapt(&rgb, env.fl);
    let xyz100 = multiply(
        &CAT16_INV,
        &[
            rgb_c[0] * env.d_rgb_inv[0],
            rgb_c[1] * env.d_rgb_inv[1],
            rgb_c[2] * env.d_rgb_inv[2],
        ],
    );

    xyz100.map(|c| c / 100.0)
}

// --------------------------------------------------------------------------------------------------------------------

const ACHROMATIC_COLORFULNESS: Float = 5e-2;

/// Convert XYZ D65 to CAM16-JMh. Colors with negligible colorfulness are
/// treated as achromatic, i.e., have zero colorfulness and no hue.
pub(crate) fn xyz_to_jmh(value: &[Float; 3], env: &Environment) -> [Float; 3] {
    let cam16 = from_xyz(value, env);
    if cam16.colorfulness.abs() < ACHROMATIC_COLORFULNESS {
        [cam16.lightness, 0.0, Float::NAN]
    } else {
        [cam16.lightness, cam16.colorfulness, cam16.hue]
    }
}

/// Convert CAM16-JMh to XYZ D65.
pub(crate) fn jmh_to_xyz(value: &[Float; 3], env: &Environment) -> [Float; 3] {
    let [j, m, h] = *value;
    to_xyz(&Cam16Spec::jmh(j, m, h), env)
}
