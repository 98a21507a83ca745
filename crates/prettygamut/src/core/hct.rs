//! The HCT color space.
//!
//! HCT combines CAM16's hue and chroma with CIELAB's tone, i.e., L\*. Its
//! coordinates are ordered hue, chroma, tone. Converting from XYZ is a
//! straightforward application of CAM16. Converting to XYZ is not, since CAM16
//! has no notion of tone. Instead, [`hct_to_xyz`] searches for the CAM16
//! lightness J that yields the luminance Y corresponding to the tone.

use std::sync::LazyLock;

use super::cam16::{from_xyz, to_xyz, Cam16Spec, Environment, Surround, D65};
use super::math::constrain_hue;
use crate::Float;

const EPSILON: Float = 216.0 / 24389.0;
const KAPPA: Float = 24389.0 / 27.0;

/// The maximum luminance difference for the inverse to be considered exact.
const THRESHOLD: Float = 2e-8;

/// The maximum number of rounds for searching lightness J.
const MAX_ROUNDS: usize = 16;

/// Convert luminance Y to CIELAB lightness L\*.
pub fn to_lstar(y: Float) -> Float {
    let fy = if y > EPSILON {
        y.cbrt()
    } else {
        KAPPA.mul_add(y, 16.0) / 116.0
    };
    116.0 * fy - 16.0
}

/// Convert CIELAB lightness L\* to luminance Y.
pub fn from_lstar(lstar: Float) -> Float {
    if lstar > 8.0 {
        ((lstar + 16.0) / 116.0).powi(3)
    } else {
        lstar / KAPPA
    }
}

/// The viewing environment for HCT.
///
/// It uses D65 as reference white, the adapting luminance and background
/// luminance for L\* = 50, and average surround without discounting.
pub static HCT_ENVIRONMENT: LazyLock<Environment> = LazyLock::new(|| {
    let y50 = from_lstar(50.0);
    Environment::new(
        D65,
        200.0 / std::f64::consts::PI as Float * y50,
        y50 * 100.0,
        Surround::Average,
        false,
    )
});

/// Convert XYZ D65 to HCT.
///
/// Black, i.e., zero tone, has zero hue and chroma.
pub fn xyz_to_hct(value: &[Float; 3], env: &Environment) -> [Float; 3] {
    let tone = to_lstar(value[1]);
    if tone == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let cam16 = from_xyz(value, env);
    [constrain_hue(cam16.hue), cam16.chroma, tone]
}

/// Convert HCT to XYZ D65.
///
/// This function searches for the CAM16 lightness J whose luminance matches
/// the luminance for the tone. It seeds J with a quadratic fit of J over tone
/// for common chroma and by correcting the luminance of a first estimate
/// otherwise. It then runs up to 16 rounds, using Newton's method for the
/// first seven and last three rounds and re-deriving J from the luminance
/// corrected XYZ coordinates in between. If no round comes within 2e-8 of the
/// targeted luminance, the result is the closest attempt.
pub fn hct_to_xyz(value: &[Float; 3], env: &Environment) -> [Float; 3] {
    let [h, c, t] = *value;
    if t == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let y = from_lstar(t);
    let solve = |j: Float| to_xyz(&Cam16Spec::jch(j, c, h), env);

    let mut j = if 0.0 < c && c < 142.0 {
        0.00462403 * t * t + 0.51460278 * t + 2.62845677
    } else {
        let mut xyz = solve(t);
        xyz[1] = y;
        from_xyz(&xyz, env).lightness
    };

    let mut best = j;
    let mut last = Float::INFINITY;

    for round in 0..MAX_ROUNDS {
        let mut xyz = solve(j);

        let delta = (xyz[1] - y).abs();
        if delta < last {
            if delta <= THRESHOLD {
                return xyz;
            }
            best = j;
            last = delta;
        }

        if (round < 7 || 13 <= round) && xyz[1] != 0.0 {
            // With Y = (√J / 10)², f(J) = Y² / J - 1 has derivative 2Y / J
            j -= (xyz[1] - y) * j / (2.0 * xyz[1]);
        } else {
            xyz[1] = y;
            j = from_xyz(&xyz, env).lightness;
        }
    }

    tracing::debug!(
        hue = h,
        chroma = c,
        tone = t,
        delta = last,
        "HCT inverse did not converge, using closest attempt"
    );
    solve(best)
}
