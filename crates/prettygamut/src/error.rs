//! Utility module with prettygamut's errors.
//!
//! Color math never fails. Unrepresentable results degrade to bounded colors
//! instead. The errors in this module cover looking up color spaces,
//! coordinates, and gamut mapping methods by name.

use crate::ColorSpace;

/// An unknown color space.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorSpaceError {
    /// A color space identifier that does not match any of the known ones.
    #[error("color space identifier should be known but `{0}` is not")]
    Unknown(String),
}

/// An erroneous coordinate reference.
///
/// References have the form `space.coordinate`, e.g., `oklch.c`, with the
/// coordinate given by identifier or by name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// A reference that does not separate color space and coordinate with a
    /// dot or has an empty part. For example, `oklch` and `oklch.` are both
    /// malformed.
    #[error("coordinate reference should have form `space.coordinate` but `{0}` does not")]
    Malformed(String),

    /// A reference with an unknown color space.
    #[error(transparent)]
    UnknownSpace(#[from] ColorSpaceError),

    /// A reference to a coordinate the color space does not have.
    #[error("coordinate should belong to {space} but `{name}` does not")]
    UnknownCoordinate { space: ColorSpace, name: String },
}

/// An unknown gamut mapping method.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GamutMethodError {
    /// A method that is neither `clip`, `css`, `hct`, nor a coordinate
    /// reference.
    #[error("gamut mapping method should be `clip`, `css`, `hct`, or `space.coordinate` but is `{0}`")]
    Unknown(String),

    /// A method that is a coordinate reference but not a valid one.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}
