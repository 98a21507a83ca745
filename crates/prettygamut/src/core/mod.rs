mod cam16;
mod conversion;
mod difference;
mod equality;
mod gamut;
mod hct;
mod math;
mod space;
mod string;

// cam16
pub use cam16::{
    from_xyz, hue_quadrature, inverse_hue_quadrature, to_xyz, Cam16, Cam16Spec, Chroma,
    Environment, Hue, Lightness, Surround,
};

// conversion
pub(crate) use conversion::convert;

// difference
pub use difference::DeltaE;

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// gamut
pub use gamut::{ChromaReduction, GamutMapping, GamutMethod, DEFAULT_EPSILON};
pub(crate) use gamut::{chroma_reduction, clip, in_gamut, to_gamut};

// hct
pub use hct::{from_lstar, hct_to_xyz, to_lstar, xyz_to_hct, HCT_ENVIRONMENT};

// space
pub use space::{ColorSpace, Coordinate, CoordinateInfo};

// string
pub(crate) use string::format;
