use crate::error::{ColorSpaceError, CoordinateError};
use crate::Float;

/// The enumeration of supported color spaces.
///
/// # RGB
///
/// This crate supports several RGB color spaces, each in its gamma-corrected
/// and its linear form. From smallest to largest gamut, they are:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB), which has long served as the
///     default color space for the web.
///   * [Display P3](https://en.wikipedia.org/wiki/DCI-P3), which is
///     well-positioned to become sRGB's successor.
///   * [Rec. 2020](https://en.wikipedia.org/wiki/Rec._2020), which is the
///     standard color space for ultra-high-definition (UDH) video.
///
/// For all six, in-gamut coordinates range from 0 to 1, inclusive. HSV is a
/// cylindrical rendition of sRGB with saturation and value scaled to `0..=100`.
/// It shares sRGB's gamut.
///
/// # Perceptual Color Spaces
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) and their
/// variations with [revised lightness
/// Lr](https://bottosson.github.io/posts/colorpicker/#intermission---a-new-lightness-estimate-for-oklab),
/// Oklrab/Oklrch, are perceptually uniform color spaces with one coordinate
/// for lightness and two coordinates for "colorness." CIELAB and CIELCh are
/// their older, D50-based predecessors and the basis for ΔE 2000.
///
/// HCT combines the hue and chroma of the CAM16 color appearance model with
/// CIELAB's tone L\*. Its coordinates are ordered hue, chroma, tone. CAM16-JMh
/// exposes the appearance model's lightness J, colorfulness M, and hue h
/// directly. Both use the viewing conditions described by
/// [`Environment`](crate::Environment).
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// foundational color space. All conversions between unrelated color spaces go
/// through XYZ with the D65 standard illuminant. XYZ with D50 is available,
/// too, with chromatic adaptation using the (linear) Bradford method.
///
/// # Gamut
///
/// Only RGB color spaces and HSV are *bounded*, i.e., declare a legal range
/// for their coordinates. All other color spaces are unbounded and can model
/// any color. Every coordinate may also declare a *reference range*, which
/// describes its typical extent without restricting it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    DisplayP3,
    LinearDisplayP3,
    Rec2020,
    LinearRec2020,
    Hsv,
    Oklab,
    Oklch,
    Oklrab,
    Oklrch,
    Lab,
    Lch,
    Hct,
    Cam16Jmh,
    Xyz,
    XyzD50,
}

/// The metadata for a color space's coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateInfo {
    /// The short identifier, e.g., `c` for chroma.
    pub id: &'static str,
    /// The human-readable name.
    pub name: &'static str,
    /// The legal range, if the color space is bounded.
    pub range: Option<[Float; 2]>,
    /// The reference range, i.e., the coordinate's typical extent.
    pub ref_range: Option<[Float; 2]>,
    /// Whether the coordinate is an angle in degrees.
    pub is_angle: bool,
}

impl CoordinateInfo {
    const fn ranged(id: &'static str, name: &'static str, min: Float, max: Float) -> Self {
        Self {
            id,
            name,
            range: Some([min, max]),
            ref_range: None,
            is_angle: false,
        }
    }

    const fn referenced(id: &'static str, name: &'static str, min: Float, max: Float) -> Self {
        Self {
            id,
            name,
            range: None,
            ref_range: Some([min, max]),
            is_angle: false,
        }
    }

    const fn angle(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            range: None,
            ref_range: Some([0.0, 360.0]),
            is_angle: true,
        }
    }

    /// Get the legal range if declared and the reference range otherwise.
    pub const fn bounds(&self) -> Option<[Float; 2]> {
        match self.range {
            Some(range) => Some(range),
            None => self.ref_range,
        }
    }
}

const RGB: [CoordinateInfo; 3] = [
    CoordinateInfo::ranged("r", "Red", 0.0, 1.0),
    CoordinateInfo::ranged("g", "Green", 0.0, 1.0),
    CoordinateInfo::ranged("b", "Blue", 0.0, 1.0),
];

const HSV: [CoordinateInfo; 3] = [
    CoordinateInfo::angle("h", "Hue"),
    CoordinateInfo::ranged("s", "Saturation", 0.0, 100.0),
    CoordinateInfo::ranged("v", "Value", 0.0, 100.0),
];

const OKLAB: [CoordinateInfo; 3] = [
    CoordinateInfo::referenced("l", "Lightness", 0.0, 1.0),
    CoordinateInfo::referenced("a", "a", -0.4, 0.4),
    CoordinateInfo::referenced("b", "b", -0.4, 0.4),
];

const OKLCH: [CoordinateInfo; 3] = [
    CoordinateInfo::referenced("l", "Lightness", 0.0, 1.0),
    CoordinateInfo::referenced("c", "Chroma", 0.0, 0.4),
    CoordinateInfo::angle("h", "Hue"),
];

const LAB: [CoordinateInfo; 3] = [
    CoordinateInfo::referenced("l", "Lightness", 0.0, 100.0),
    CoordinateInfo::referenced("a", "a", -125.0, 125.0),
    CoordinateInfo::referenced("b", "b", -125.0, 125.0),
];

const LCH: [CoordinateInfo; 3] = [
    CoordinateInfo::referenced("l", "Lightness", 0.0, 100.0),
    CoordinateInfo::referenced("c", "Chroma", 0.0, 150.0),
    CoordinateInfo::angle("h", "Hue"),
];

const HCT: [CoordinateInfo; 3] = [
    CoordinateInfo::angle("h", "Hue"),
    CoordinateInfo::referenced("c", "Colorfulness", 0.0, 145.0),
    CoordinateInfo::referenced("t", "Tone", 0.0, 100.0),
];

const CAM16_JMH: [CoordinateInfo; 3] = [
    CoordinateInfo::referenced("j", "J", 0.0, 100.0),
    CoordinateInfo::referenced("m", "Colorfulness", 0.0, 105.0),
    CoordinateInfo::angle("h", "Hue"),
];

const XYZ: [CoordinateInfo; 3] = [
    CoordinateInfo::referenced("x", "X", 0.0, 1.0),
    CoordinateInfo::referenced("y", "Y", 0.0, 1.0),
    CoordinateInfo::referenced("z", "Z", 0.0, 1.0),
];

impl ColorSpace {
    /// All color spaces, in declaration order.
    pub const ALL: [ColorSpace; 17] = [
        Self::Srgb,
        Self::LinearSrgb,
        Self::DisplayP3,
        Self::LinearDisplayP3,
        Self::Rec2020,
        Self::LinearRec2020,
        Self::Hsv,
        Self::Oklab,
        Self::Oklch,
        Self::Oklrab,
        Self::Oklrch,
        Self::Lab,
        Self::Lch,
        Self::Hct,
        Self::Cam16Jmh,
        Self::Xyz,
        Self::XyzD50,
    ];

    /// Get this color space's identifier.
    ///
    /// The identifiers match those used by CSS Color 4 where CSS defines the
    /// color space and otherwise follow the same lowercase, hyphenated style.
    pub const fn id(&self) -> &'static str {
        use ColorSpace::*;

        match *self {
            Srgb => "srgb",
            LinearSrgb => "srgb-linear",
            DisplayP3 => "display-p3",
            LinearDisplayP3 => "display-p3-linear",
            Rec2020 => "rec2020",
            LinearRec2020 => "rec2020-linear",
            Hsv => "hsv",
            Oklab => "oklab",
            Oklch => "oklch",
            Oklrab => "oklrab",
            Oklrch => "oklrch",
            Lab => "lab",
            Lch => "lch",
            Hct => "hct",
            Cam16Jmh => "cam16-jmh",
            Xyz => "xyz-d65",
            XyzD50 => "xyz-d50",
        }
    }

    /// Get the color space this color space is defined in terms of.
    ///
    /// Base color spaces form a tree rooted in XYZ D65, which is the only
    /// color space without base.
    pub const fn base(&self) -> Option<ColorSpace> {
        use ColorSpace::*;

        match *self {
            Srgb => Some(LinearSrgb),
            DisplayP3 => Some(LinearDisplayP3),
            Rec2020 => Some(LinearRec2020),
            Hsv => Some(Srgb),
            Oklch | Oklrab => Some(Oklab),
            Oklrch => Some(Oklch),
            Lab => Some(XyzD50),
            Lch => Some(Lab),
            LinearSrgb | LinearDisplayP3 | LinearRec2020 | Oklab | Hct | Cam16Jmh | XyzD50 => {
                Some(Xyz)
            }
            Xyz => None,
        }
    }

    /// Get the metadata for this color space's coordinates.
    pub const fn coordinates(&self) -> &'static [CoordinateInfo; 3] {
        use ColorSpace::*;

        match *self {
            Srgb | LinearSrgb | DisplayP3 | LinearDisplayP3 | Rec2020 | LinearRec2020 => &RGB,
            Hsv => &HSV,
            Oklab | Oklrab => &OKLAB,
            Oklch | Oklrch => &OKLCH,
            Lab => &LAB,
            Lch => &LCH,
            Hct => &HCT,
            Cam16Jmh => &CAM16_JMH,
            Xyz | XyzD50 => &XYZ,
        }
    }

    /// Look up the coordinate with the given identifier or name.
    ///
    /// The lookup ignores case.
    pub fn coordinate(&self, name: &str) -> Option<Coordinate> {
        self.coordinates()
            .iter()
            .position(|info| {
                info.id.eq_ignore_ascii_case(name) || info.name.eq_ignore_ascii_case(name)
            })
            .map(|index| Coordinate { space: *self, index })
    }

    /// Get the index of the hue coordinate, if this color space has one.
    pub const fn hue_index(&self) -> Option<usize> {
        use ColorSpace::*;

        match *self {
            Oklch | Oklrch | Lch | Cam16Jmh => Some(2),
            Hsv | Hct => Some(0),
            _ => None,
        }
    }

    /// Get the index of the coordinate that becomes powerless together with
    /// hue, i.e., chroma, colorfulness, or saturation.
    pub const fn chroma_index(&self) -> Option<usize> {
        if self.is_polar() {
            Some(1)
        } else {
            None
        }
    }

    /// Determine whether this color space is polar, i.e., has a hue.
    pub const fn is_polar(&self) -> bool {
        self.hue_index().is_some()
    }

    /// Determine whether this color space is XYZ.
    pub const fn is_xyz(&self) -> bool {
        matches!(*self, Self::Xyz | Self::XyzD50)
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        use ColorSpace::*;
        matches!(
            *self,
            Srgb | LinearSrgb | DisplayP3 | LinearDisplayP3 | Rec2020 | LinearRec2020
        )
    }

    /// Determine whether this color space is one of the Oklab variations.
    pub const fn is_ok(&self) -> bool {
        use ColorSpace::*;
        matches!(*self, Oklab | Oklch | Oklrab | Oklrch)
    }

    /// Get the color space whose legal ranges determine this color space's
    /// gamut.
    ///
    /// HSV declares ranges for saturation and value but not for hue, which
    /// cannot possibly capture the shape of sRGB's gamut. Hence HSV's gamut
    /// space is sRGB. All other color spaces are their own gamut space.
    pub const fn gamut_space(&self) -> ColorSpace {
        match *self {
            Self::Hsv => Self::Srgb,
            _ => *self,
        }
    }

    /// Determine whether this color space is bounded.
    ///
    /// RGB color spaces and HSV are *bounded*, with coordinates of in-gamut
    /// colors limited to a legal range. All other color spaces are
    /// *unbounded* and hence can model any color.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb() || matches!(*self, Self::Hsv)
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorSpaceError;

    /// Look up a color space by its identifier.
    ///
    /// Besides the identifiers returned by [`ColorSpace::id`], this method
    /// also accepts `p3`, `p3-linear`, `xyz`, and `lab-d50` as well as
    /// identifiers in any case.
    ///
    /// ```
    /// # use prettygamut::ColorSpace;
    /// # use std::str::FromStr;
    /// assert_eq!(ColorSpace::from_str("HCT"), Ok(ColorSpace::Hct));
    /// assert_eq!(ColorSpace::from_str("xyz"), Ok(ColorSpace::Xyz));
    /// assert!(ColorSpace::from_str("cmyk").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        let space = match id.as_str() {
            "p3" => Some(Self::DisplayP3),
            "p3-linear" => Some(Self::LinearDisplayP3),
            "xyz" => Some(Self::Xyz),
            "lab-d50" => Some(Self::Lab),
            _ => Self::ALL.iter().copied().find(|space| space.id() == id),
        };

        space.ok_or_else(|| ColorSpaceError::Unknown(s.to_string()))
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            DisplayP3 => "Display P3",
            LinearDisplayP3 => "linear Display P3",
            Rec2020 => "Rec. 2020",
            LinearRec2020 => "linear Rec. 2020",
            Hsv => "HSV",
            Oklab => "Oklab",
            Oklrab => "Oklrab",
            Oklch => "Oklch",
            Oklrch => "Oklrch",
            Lab => "CIELAB",
            Lch => "CIELCh",
            Hct => "HCT",
            Cam16Jmh => "CAM16-JMh",
            Xyz => "XYZ D65",
            XyzD50 => "XYZ D50",
        };

        f.write_str(s)
    }
}

// ====================================================================================================================

/// A reference to one coordinate of a color space.
///
/// A coordinate is usually written as `space.coordinate`, e.g., `oklch.c` or
/// `hct.tone`, and parsed with [`Coordinate::from_str`](std::str::FromStr).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    space: ColorSpace,
    index: usize,
}

impl Coordinate {
    /// Resolve the reference in the context of the given color space.
    ///
    /// If the reference has the form `space.coordinate`, this method ignores
    /// the context. Otherwise, it looks up the coordinate in the context.
    ///
    /// ```
    /// # use prettygamut::{ColorSpace, Coordinate};
    /// let chroma = Coordinate::resolve("chroma", ColorSpace::Oklch)?;
    /// assert_eq!(chroma.index(), 1);
    /// let tone = Coordinate::resolve("hct.t", ColorSpace::Oklch)?;
    /// assert_eq!(tone.space(), ColorSpace::Hct);
    /// # Ok::<(), prettygamut::error::CoordinateError>(())
    /// ```
    pub fn resolve(reference: &str, context: ColorSpace) -> Result<Self, CoordinateError> {
        if reference.contains('.') {
            return reference.parse();
        }

        context
            .coordinate(reference.trim())
            .ok_or_else(|| CoordinateError::UnknownCoordinate {
                space: context,
                name: reference.to_string(),
            })
    }

    /// Get the color space.
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    /// Get the coordinate's index.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Get the coordinate's metadata.
    pub const fn info(&self) -> &'static CoordinateInfo {
        &self.space.coordinates()[self.index]
    }
}

impl std::str::FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((space, name)) = s.trim().split_once('.') else {
            return Err(CoordinateError::Malformed(s.to_string()));
        };
        if space.is_empty() || name.is_empty() {
            return Err(CoordinateError::Malformed(s.to_string()));
        }

        let space = ColorSpace::from_str(space)?;
        space
            .coordinate(name)
            .ok_or_else(|| CoordinateError::UnknownCoordinate {
                space,
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.space.id(), self.info().id)
    }
}

#[cfg(test)]
mod test {
    use super::{ColorSpace, Coordinate};
    use crate::error::{ColorSpaceError, CoordinateError};
    use std::str::FromStr;

    #[test]
    fn test_registry() {
        for space in ColorSpace::ALL {
            assert_eq!(ColorSpace::from_str(space.id()), Ok(space));
            assert_eq!(ColorSpace::from_str(&space.id().to_uppercase()), Ok(space));
        }

        assert_eq!(
            ColorSpace::from_str("cmyk"),
            Err(ColorSpaceError::Unknown("cmyk".to_string()))
        );
    }

    #[test]
    fn test_base_tree() {
        for space in ColorSpace::ALL {
            let mut current = space;
            let mut hops = 0;
            while let Some(base) = current.base() {
                current = base;
                hops += 1;
                assert!(hops < 5, "{} has no path to XYZ", space);
            }
            assert_eq!(current, ColorSpace::Xyz);
        }
    }

    #[test]
    fn test_coordinate() -> Result<(), CoordinateError> {
        let chroma = Coordinate::from_str("oklch.c")?;
        assert_eq!(chroma.space(), ColorSpace::Oklch);
        assert_eq!(chroma.index(), 1);
        assert_eq!(chroma.info().bounds(), Some([0.0, 0.4]));
        assert_eq!(format!("{}", chroma), "oklch.c");

        let tone = Coordinate::from_str("HCT.Tone")?;
        assert_eq!(tone.space(), ColorSpace::Hct);
        assert_eq!(tone.index(), 2);

        let value = Coordinate::resolve("v", ColorSpace::Hsv)?;
        assert_eq!(value.info().range, Some([0.0, 100.0]));

        assert_eq!(
            Coordinate::from_str("oklch"),
            Err(CoordinateError::Malformed("oklch".to_string()))
        );
        assert_eq!(
            Coordinate::from_str("oklch."),
            Err(CoordinateError::Malformed("oklch.".to_string()))
        );
        assert_eq!(
            Coordinate::from_str("rgb.r"),
            Err(CoordinateError::UnknownSpace(ColorSpaceError::Unknown(
                "rgb".to_string()
            )))
        );
        assert_eq!(
            Coordinate::from_str("oklab.c"),
            Err(CoordinateError::UnknownCoordinate {
                space: ColorSpace::Oklab,
                name: "c".to_string()
            })
        );

        Ok(())
    }

    #[test]
    fn test_gamut_metadata() {
        assert!(ColorSpace::Srgb.is_bounded());
        assert!(ColorSpace::Hsv.is_bounded());
        assert!(!ColorSpace::Oklch.is_bounded());
        assert!(!ColorSpace::Hct.is_bounded());
        assert_eq!(ColorSpace::Hsv.gamut_space(), ColorSpace::Srgb);
        assert_eq!(ColorSpace::Hct.hue_index(), Some(0));
        assert_eq!(ColorSpace::Oklch.hue_index(), Some(2));
        assert_eq!(ColorSpace::Oklab.chroma_index(), None);
    }
}
