//! # Pretty 🌸 Gamut
//!
//! Prettygamut brings colors that are too colorful back into gamut, while
//! preserving as much of their appearance as possible.
//!
//!
//! ## 1. Overview
//!
//! Prettygamut's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates and an alpha value. Its
//!     methods expose much of prettygamut's functionality, including
//!     conversion between color spaces, access to coordinates by name, color
//!     difference, as well as gamut testing, clipping, and mapping.
//!   * [`GamutMapping`] selects a [`GamutMethod`] for mapping colors into
//!     gamut and, optionally, the color space whose gamut to map into. The
//!     methods are clipping, CSS Color 4 gamut mapping, chroma reduction in
//!     HCT, and reduction of an arbitrary [`Coordinate`] until clipping is
//!     good enough.
//!   * [`ChromaReduction`] configures the binary search over chroma that
//!     powers both CSS Color 4 and HCT gamut mapping.
//!   * [`DeltaE`] selects a **color difference** metric: ΔE OK, ΔE 76,
//!     ΔE 2000, or ΔE HCT.
//!   * The [`cam16`] and [`hct`] modules expose the **CAM16 color appearance
//!     model** and the HCT color space built on top of it.
//!
//!
//! ## 2. Color Spaces
//!
//! Prettygamut supports the RGB color spaces sRGB, Display P3, and Rec. 2020
//! in their gamma-corrected and linear forms as well as HSV. It further
//! supports the perceptually uniform Oklab, Oklch, Oklrab, and Oklrch, CIELAB
//! and CIELCh with a D50 white point, HCT and CAM16-JMh, and XYZ with D65 and
//! D50 white points.
//!
//! Only the RGB color spaces and HSV are *bounded*, i.e., have a gamut. All
//! other color spaces can represent any color and hence serve for
//! manipulating and comparing colors. Conversions between color spaces follow
//! a tree of base color spaces rooted in XYZ D65. See [`Color::to`] for
//! details.
//!
//!
//! ## 3. Feature Flags
//!
//! The `f64` feature, enabled by default, selects `f64` as [`Float`]. Without
//! it, prettygamut computes with `f32`.
//!
//! Prettygamut logs through [`tracing`](https://docs.rs/tracing) but does not
//! install a subscriber. The HCT inverse reports non-convergence at debug
//! level, gamut mapping traces its progress.
//!
//!
//! ## 4. Acknowledgements
//!
//! Prettygamut's gamut mapping follows [Color.js](https://colorjs.io) and the
//! [CSS Color 4](https://www.w3.org/TR/css-color-4/) specification, whereas
//! its HCT implementation follows Google's [Material Color
//! Utilities](https://github.com/material-foundation/material-color-utilities).
//! Thank you! 🌸
//!
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;

pub mod cam16 {
    //! The CAM16 color appearance model.
    //!
    //! [`from_xyz`] computes all appearance correlates for XYZ D65 coordinates
    //! under a viewing [`Environment`]. [`to_xyz`] inverts the model for one
    //! lightness, one chroma, and one hue correlate, as specified by a
    //! [`Cam16Spec`].
    //!
    //! ```
    //! # use prettygamut::cam16::{from_xyz, to_xyz, Cam16Spec, Environment};
    //! let env = Environment::default();
    //! let xyz = [0.2, 0.3, 0.4];
    //!
    //! let cam16 = from_xyz(&xyz, &env);
    //! let same_xyz = to_xyz(&Cam16Spec::jch(cam16.lightness, cam16.chroma, cam16.hue), &env);
    //! for index in 0..3 {
    //!     assert!((xyz[index] - same_xyz[index]).abs() < 1e-9);
    //! }
    //! ```
    pub use crate::core::{
        from_xyz, hue_quadrature, inverse_hue_quadrature, to_xyz, Cam16, Cam16Spec, Chroma,
        Environment, Hue, Lightness, Surround,
    };
}

pub mod hct {
    //! The HCT color space, combining CAM16 hue and chroma with CIELAB
    //! lightness as tone.
    //!
    //! All conversions take the viewing environment as an explicit argument.
    //! [`HCT_ENVIRONMENT`] is the standard one and the one used by
    //! [`ColorSpace::Hct`](crate::ColorSpace::Hct).
    //!
    //! ```
    //! # use prettygamut::hct::{hct_to_xyz, to_lstar, xyz_to_hct, HCT_ENVIRONMENT};
    //! let xyz = hct_to_xyz(&[120.0, 40.0, 60.0], &HCT_ENVIRONMENT);
    //! assert!((to_lstar(xyz[1]) - 60.0).abs() < 1e-6);
    //!
    //! let [hue, chroma, _] = xyz_to_hct(&xyz, &HCT_ENVIRONMENT);
    //! assert!((hue - 120.0).abs() < 1e-6);
    //! assert!((chroma - 40.0).abs() < 1e-6);
    //! ```
    pub use crate::core::{from_lstar, hct_to_xyz, to_lstar, xyz_to_hct, HCT_ENVIRONMENT};
}

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    ChromaReduction, ColorSpace, Coordinate, CoordinateInfo, DeltaE, GamutMapping, GamutMethod,
    DEFAULT_EPSILON,
};
pub use object::Color;
