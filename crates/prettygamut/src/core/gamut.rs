use std::str::FromStr;

use super::cam16::D65;
use super::math::{bisect, Probe};
use super::{convert, ColorSpace, Coordinate, DeltaE};
use crate::error::GamutMethodError;
use crate::Float;

/// The default tolerance for gamut membership.
pub const DEFAULT_EPSILON: Float = 0.000075;

/// Determine whether the coordinates are in gamut for the color space.
///
/// The gamut of a color space is determined by its [gamut
/// space](ColorSpace::gamut_space), so this function first converts the
/// coordinates if necessary. It then checks every coordinate that is not an
/// angle and has a legal range, tolerating deviations up to `epsilon`.
/// Not-a-number coordinates are in gamut.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3], epsilon: Float) -> bool {
    let gamut_space = space.gamut_space();
    let coordinates = if gamut_space == space {
        *coordinates
    } else {
        convert(space, gamut_space, coordinates)
    };

    gamut_space
        .coordinates()
        .iter()
        .zip(coordinates)
        .all(|(info, c)| match info.range {
            Some([min, max]) if !info.is_angle && !c.is_nan() => {
                min - epsilon <= c && c <= max + epsilon
            }
            _ => true,
        })
}

/// Clip the coordinates to the legal ranges of the color space.
///
/// Coordinates without legal range are left untouched.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let mut result = *coordinates;
    for (c, info) in result.iter_mut().zip(space.coordinates()) {
        if let Some([min, max]) = info.range {
            *c = c.clamp(min, max);
        }
    }
    result
}

// ====================================================================================================================

/// The configuration for chroma reduction.
///
/// Chroma reduction performs a binary search over chroma in a polar color
/// space, the mapping space, looking for a color whose clipped version is
/// within the just noticeable difference. The defaults implement the CSS
/// Color 4 [gamut mapping
/// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping), with
/// Oklch as mapping space and ΔE OK as metric. [`ChromaReduction::hct`] uses
/// HCT and ΔE HCT instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChromaReduction {
    /// The color space whose gamut to map into, by default the color's.
    pub space: Option<ColorSpace>,
    /// The just noticeable difference.
    pub jnd: Float,
    /// The distance below the just noticeable difference that stops the search.
    pub epsilon: Float,
    /// The polar color space for reducing chroma.
    pub map_space: ColorSpace,
    /// The metric for comparing candidates with their clipped versions.
    pub delta_e: DeltaE,
    /// The index of chroma in the mapping space.
    pub index_c: usize,
    /// The index of lightness in the mapping space.
    pub index_l: usize,
    /// The lightness at or above which colors map to white.
    pub max_l: Float,
    /// The lightness at or below which colors map to black.
    pub min_l: Float,
}

impl ChromaReduction {
    /// Create the configuration for CSS Color 4 gamut mapping.
    pub const fn css() -> Self {
        Self {
            space: None,
            jnd: 0.02,
            epsilon: 0.0001,
            map_space: ColorSpace::Oklch,
            delta_e: DeltaE::Ok,
            index_c: 1,
            index_l: 0,
            max_l: 1.0,
            min_l: 0.0,
        }
    }

    /// Create the configuration for gamut mapping in HCT.
    pub const fn hct() -> Self {
        Self {
            space: None,
            jnd: 0.02,
            epsilon: 0.001,
            map_space: ColorSpace::Hct,
            delta_e: DeltaE::Hct,
            index_c: 1,
            index_l: 2,
            max_l: 100.0,
            min_l: 0.0,
        }
    }

    /// Map into the given color space's gamut.
    pub const fn with_space(mut self, space: ColorSpace) -> Self {
        self.space = Some(space);
        self
    }

    /// Use the given just noticeable difference.
    pub const fn with_jnd(mut self, jnd: Float) -> Self {
        self.jnd = jnd;
        self
    }

    /// Use the given distance below the just noticeable difference for
    /// stopping the search.
    pub const fn with_epsilon(mut self, epsilon: Float) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Use the given mapping space and metric. The lightness and chroma
    /// indices as well as the lightness bounds must match the mapping space.
    pub const fn with_map_space(
        mut self,
        map_space: ColorSpace,
        delta_e: DeltaE,
        index_l: usize,
        index_c: usize,
        [min_l, max_l]: [Float; 2],
    ) -> Self {
        self.map_space = map_space;
        self.delta_e = delta_e;
        self.index_l = index_l;
        self.index_c = index_c;
        self.min_l = min_l;
        self.max_l = max_l;
        self
    }
}

impl Default for ChromaReduction {
    fn default() -> Self {
        Self::css()
    }
}

/// The width of the chroma interval that ends the search.
const CHROMA_WIDTH: Float = 0.0001;

/// Reduce chroma until the color is in gamut.
///
/// This function returns coordinates in the configuration's target space,
/// which defaults to the given color space. Colors at or beyond the lightness
/// bounds become white or black.
pub(crate) fn chroma_reduction(
    space: ColorSpace,
    coordinates: &[Float; 3],
    config: &ChromaReduction,
) -> [Float; 3] {
    let target = config.space.unwrap_or(space);
    if !target.is_bounded() {
        return convert(space, target, coordinates);
    }

    let origin = convert(space, config.map_space, coordinates);
    let lightness = origin[config.index_l];
    if config.max_l <= lightness {
        tracing::trace!(lightness, %target, "chroma reduction yields white");
        return convert(ColorSpace::Xyz, target, &D65);
    }
    if lightness <= config.min_l {
        tracing::trace!(lightness, %target, "chroma reduction yields black");
        return convert(ColorSpace::Xyz, target, &[0.0, 0.0, 0.0]);
    }

    let origin_as_target = convert(config.map_space, target, &origin);
    if in_gamut(target, &origin_as_target, 0.0) {
        return origin_as_target;
    }

    let mut clipped = clip(target, &origin_as_target);
    let mut min_in_gamut = true;
    let mut current = origin;
    let chroma = origin[config.index_c];

    let result = bisect(0.0, chroma, chroma / 2.0, CHROMA_WIDTH, |chroma| {
        current[config.index_c] = chroma;
        let current_as_target = convert(config.map_space, target, &current);

        if min_in_gamut && in_gamut(target, &current_as_target, 0.0) {
            return Probe::Raise;
        }

        clipped = clip(target, &current_as_target);
        let difference = config
            .delta_e
            .compute(target, &clipped, config.map_space, &current);

        if difference < config.jnd {
            if config.jnd - difference < config.epsilon {
                return Probe::Done;
            }
            min_in_gamut = false;
            Probe::Raise
        } else {
            Probe::Lower
        }
    });

    tracing::trace!(
        from = chroma,
        to = result,
        map_space = %config.map_space,
        "chroma reduction done"
    );
    clipped
}

// ====================================================================================================================

/// The method for mapping colors into gamut.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GamutMethod {
    /// Clip coordinates to their legal ranges.
    Clip,
    /// Use CSS Color 4 gamut mapping, i.e., chroma reduction in Oklch.
    #[default]
    Css,
    /// Use chroma reduction in HCT.
    Hct,
    /// Reduce the given coordinate until the clipped color is close enough.
    ///
    /// The coordinate must be able to bring the color into gamut, i.e., this
    /// method makes no sense for hues.
    Coordinate(Coordinate),
}

impl FromStr for GamutMethod {
    type Err = GamutMethodError;

    /// Parse a gamut mapping method.
    ///
    /// This method recognizes `clip`, `css`, `hct`, and coordinate references
    /// of the form `space.coordinate`.
    ///
    /// ```
    /// # use prettygamut::{ColorSpace, GamutMethod};
    /// # use std::str::FromStr;
    /// assert_eq!(GamutMethod::from_str("hct")?, GamutMethod::Hct);
    /// let method = GamutMethod::from_str("oklch.c")?;
    /// let GamutMethod::Coordinate(chroma) = method else { unreachable!() };
    /// assert_eq!(chroma.space(), ColorSpace::Oklch);
    /// # Ok::<(), prettygamut::error::GamutMethodError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "clip" => Ok(Self::Clip),
            "css" => Ok(Self::Css),
            "hct" => Ok(Self::Hct),
            t if t.contains('.') => Ok(Self::Coordinate(Coordinate::from_str(t)?)),
            _ => Err(GamutMethodError::Unknown(s.to_string())),
        }
    }
}

impl std::fmt::Display for GamutMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clip => f.write_str("clip"),
            Self::Css => f.write_str("css"),
            Self::Hct => f.write_str("hct"),
            Self::Coordinate(coordinate) => coordinate.fmt(f),
        }
    }
}

/// The configuration for gamut mapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GamutMapping {
    /// The method.
    pub method: GamutMethod,
    /// The color space whose gamut to map into, by default the color's.
    pub space: Option<ColorSpace>,
}

impl GamutMapping {
    /// Create a new gamut mapping configuration for the color's own space.
    pub const fn new(method: GamutMethod) -> Self {
        Self {
            method,
            space: None,
        }
    }

    /// Map into the given color space's gamut.
    pub const fn with_space(mut self, space: ColorSpace) -> Self {
        self.space = Some(space);
        self
    }
}

impl From<GamutMethod> for GamutMapping {
    fn from(value: GamutMethod) -> Self {
        Self::new(value)
    }
}

/// The ΔE 2000 beyond which the coordinate method reduces its coordinate
/// instead of clipping.
const COORDINATE_BUDGET: Float = 2.0;

/// The width of the coordinate interval that ends the coordinate method's
/// search.
const COORDINATE_WIDTH: Float = 0.01;

/// Reduce the coordinate of the color in the target space until the ΔE 2000
/// between the color and its clipped version is within budget.
fn reduce_coordinate(
    target: ColorSpace,
    coordinates: &[Float; 3],
    coordinate: Coordinate,
) -> [Float; 3] {
    let map_space = coordinate.space();
    let index = coordinate.index();
    let mut current = convert(target, map_space, coordinates);

    let Some([min, _]) = coordinate.info().bounds() else {
        tracing::warn!(%coordinate, "coordinate has no bounds, clipping instead");
        return clip(target, coordinates);
    };
    let high = current[index];

    let value = bisect(min, high, high, COORDINATE_WIDTH, |value| {
        current[index] = value;
        let clipped = clip(target, &convert(map_space, target, &current));
        let difference = DeltaE::E2000.compute(map_space, &current, target, &clipped);

        if difference - COORDINATE_BUDGET < COORDINATE_WIDTH {
            Probe::Raise
        } else {
            Probe::Lower
        }
    });

    tracing::trace!(%coordinate, from = high, to = value, "coordinate reduction done");
    current[index] = value;
    convert(map_space, target, &current)
}

/// Map the coordinates into gamut.
///
/// This function returns coordinates in the original color space, even if
/// the configuration maps into another color space's gamut. It does not
/// normalize them, so a missing hue stays missing.
pub(crate) fn to_gamut(
    space: ColorSpace,
    coordinates: &[Float; 3],
    mapping: &GamutMapping,
) -> [Float; 3] {
    let target = mapping.space.unwrap_or(space);
    let converted = convert(space, target, coordinates);
    if in_gamut(target, &converted, 0.0) {
        return *coordinates;
    }

    tracing::trace!(method = %mapping.method, %space, %target, "mapping into gamut");
    let result = match mapping.method {
        GamutMethod::Css => chroma_reduction(
            space,
            coordinates,
            &ChromaReduction::css().with_space(target),
        ),
        GamutMethod::Hct => chroma_reduction(
            space,
            coordinates,
            &ChromaReduction::hct().with_space(target),
        ),
        GamutMethod::Clip | GamutMethod::Coordinate(_) => {
            let mut result = converted;
            if let GamutMethod::Coordinate(coordinate) = mapping.method {
                if !in_gamut(target, &result, DEFAULT_EPSILON) {
                    let clipped = clip(target, &result);
                    let difference = DeltaE::E2000.compute(space, coordinates, target, &clipped);

                    result = if COORDINATE_BUDGET < difference {
                        reduce_coordinate(target, &result, coordinate)
                    } else {
                        clipped
                    };
                }
            }

            if mapping.method == GamutMethod::Clip || !in_gamut(target, &result, 0.0) {
                result = clip(target, &result);
            }
            result
        }
    };

    if target == space {
        result
    } else {
        convert(target, space, &result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, convert, ColorSpace::*};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(Srgb, &[0.0, 0.5, 1.0], 0.0));
        assert!(!in_gamut(Srgb, &[0.0, 0.5, 1.00001], 0.0));
        assert!(in_gamut(Srgb, &[0.0, 0.5, 1.00001], DEFAULT_EPSILON));
        assert!(in_gamut(Srgb, &[Float::NAN, 0.5, 1.0], 0.0));
        assert!(in_gamut(Oklch, &[2.0, 5.0, 700.0], 0.0));

        // HSV defers to sRGB
        assert!(in_gamut(Hsv, &[720.0, 50.0, 50.0], 0.0));
        assert!(!in_gamut(Hsv, &[120.0, 150.0, 50.0], 0.0));
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip(Srgb, &[-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0]);
        assert_eq!(clip(Hsv, &[400.0, 120.0, -3.0]), [400.0, 100.0, 0.0]);
        assert_eq!(clip(Oklch, &[1.5, 0.5, 400.0]), [1.5, 0.5, 400.0]);
    }

    #[test]
    fn test_css() {
        // A very green green.
        let p3 = [0.0, 1.0, 0.0];
        let srgb = convert(DisplayP3, Srgb, &p3);
        assert_same_coordinates!(
            Srgb,
            &srgb,
            &[-0.5116049825853448, 1.0182656579378029, -0.3106746212905826],
        );

        let srgb_mapped = to_gamut(Srgb, &srgb, &GamutMapping::default());
        assert_same_coordinates!(
            Srgb,
            &srgb_mapped,
            &[0.0, 0.9857637107710327, 0.15974244397343723],
        );

        // A very yellow yellow.
        let p3 = [1.0, 1.0, 0.0];
        let linear_srgb = convert(DisplayP3, LinearSrgb, &p3);
        assert_same_coordinates!(
            LinearSrgb,
            &linear_srgb,
            &[1.0, 1.0000000000000002, -0.09827360014096621],
        );

        let linear_srgb_mapped = to_gamut(LinearSrgb, &linear_srgb, &GamutMapping::default());
        assert_same_coordinates!(
            LinearSrgb,
            &linear_srgb_mapped,
            &[0.9914525477996114, 0.9977581974546286, 0.0],
        );
    }

    #[test]
    fn test_css_preserves_hue() {
        for p3 in [[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.2, 0.9, 0.3]] {
            let srgb = convert(DisplayP3, Srgb, &p3);
            let hue = convert(Srgb, Oklch, &srgb)[2];

            let mapped = to_gamut(Srgb, &srgb, &GamutMapping::default());
            let clipped = to_gamut(Srgb, &srgb, &GamutMapping::new(GamutMethod::Clip));
            assert!(in_gamut(Srgb, &mapped, 0.0));

            let mapped_drift = (convert(Srgb, Oklch, &mapped)[2] - hue).abs();
            let clipped_drift = (convert(Srgb, Oklch, &clipped)[2] - hue).abs();
            assert!(mapped_drift <= clipped_drift);
        }
    }

    #[test]
    fn test_hct() {
        let srgb = convert(DisplayP3, Srgb, &[0.0, 1.0, 0.0]);
        let hct = convert(Srgb, Hct, &srgb);

        let mapped = to_gamut(Srgb, &srgb, &GamutMapping::new(GamutMethod::Hct));
        assert!(in_gamut(Srgb, &mapped, 0.0));
        assert_abs_diff_eq!(mapped[0], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mapped[1], 0.9845370101884473, epsilon = 1e-6);
        assert_abs_diff_eq!(mapped[2], 0.1713775116251174, epsilon = 1e-6);

        // Hue and tone barely change, chroma does
        let mapped_hct = convert(Srgb, Hct, &mapped);
        assert_abs_diff_eq!(mapped_hct[0], hct[0], epsilon = 0.1);
        assert!(mapped_hct[1] < hct[1] - 30.0);
        assert_abs_diff_eq!(mapped_hct[2], hct[2], epsilon = 0.05);
    }

    #[test]
    fn test_extremes() {
        let white = convert(Xyz, Srgb, &D65);

        for method in [GamutMethod::Css, GamutMethod::Hct] {
            let mapping = GamutMapping::new(method);
            assert_eq!(to_gamut(Srgb, &[1.2, 1.1, 1.3], &mapping), white);
            assert_eq!(to_gamut(Srgb, &[-0.2, -0.1, -0.3], &mapping), [0.0, 0.0, 0.0]);
        }

        let config = ChromaReduction::css().with_space(Srgb);
        assert_eq!(chroma_reduction(Oklch, &[1.0, 0.2, 30.0], &config), white);
        assert_eq!(
            chroma_reduction(Oklch, &[0.0, 0.2, 30.0], &config),
            [0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_custom_config() {
        let p3 = [0.0, 1.0, 0.0];

        // CIELCh with ΔE 2000
        let config = ChromaReduction::css()
            .with_space(Srgb)
            .with_map_space(Lch, DeltaE::E2000, 0, 1, [0.0, 100.0])
            .with_jnd(2.0)
            .with_epsilon(0.01);
        let mapped = chroma_reduction(DisplayP3, &p3, &config);
        assert!(in_gamut(Srgb, &mapped, 0.0));
        assert!(mapped[2] < 0.01);

        let origin = convert(DisplayP3, Lch, &p3);
        let result = convert(Srgb, Lch, &mapped);
        assert_abs_diff_eq!(result[0], origin[0], epsilon = 2.0);
        assert_abs_diff_eq!(result[2], origin[2], epsilon = 3.0);

        // CAM16-JMh with ΔE HCT
        let config = ChromaReduction::hct()
            .with_space(Srgb)
            .with_map_space(Cam16Jmh, DeltaE::Hct, 0, 1, [0.0, 100.0]);
        let mapped = chroma_reduction(DisplayP3, &p3, &config);
        assert!(in_gamut(Srgb, &mapped, 0.0));

        let origin = convert(DisplayP3, Cam16Jmh, &p3);
        let result = convert(Srgb, Cam16Jmh, &mapped);
        assert_abs_diff_eq!(result[0], origin[0], epsilon = 0.5);
        assert_abs_diff_eq!(result[2], origin[2], epsilon = 1.0);

        // Without a just noticeable difference, the search only reduces chroma
        let config = ChromaReduction::css().with_space(Srgb).with_jnd(0.0);
        let mapped = chroma_reduction(DisplayP3, &p3, &config);
        assert!(in_gamut(Srgb, &mapped, 0.0));

        let origin = convert(DisplayP3, Oklch, &p3);
        let result = convert(Srgb, Oklch, &mapped);
        assert_abs_diff_eq!(result[0], origin[0], epsilon = 1e-3);
        assert_abs_diff_eq!(result[2], origin[2], epsilon = 0.05);
        assert!(result[1] < origin[1]);

        // The lightness bounds follow the mapping space
        let config = ChromaReduction::css()
            .with_space(Srgb)
            .with_map_space(Lch, DeltaE::E2000, 0, 1, [0.0, 100.0]);
        assert_eq!(
            chroma_reduction(Srgb, &[1.2, 1.1, 1.3], &config),
            convert(Xyz, Srgb, &D65)
        );
        assert_eq!(
            chroma_reduction(Srgb, &[-0.2, -0.1, -0.3], &config),
            [0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_missing_hue_stays_missing() {
        // Negative value maps to black, whose HSV hue is undefined
        let hsv = [0.0, 50.0, -10.0];
        let mapped = to_gamut(Hsv, &hsv, &GamutMapping::default());
        assert!(mapped[0].is_nan());
        assert_eq!(&mapped[1..], &[0.0, 0.0]);
        assert!(in_gamut(Hsv, &mapped, 0.0));

        // Same as mapping into the gamut of another space and converting back
        let mapping = GamutMapping::default().with_space(Srgb);
        assert_same_coordinates!(Hsv, &to_gamut(Hsv, &hsv, &mapping), &mapped);
    }

    #[test]
    fn test_in_gamut_is_idempotent() {
        let srgb = [0.2, 0.4, 0.6];
        for method in [
            GamutMethod::Clip,
            GamutMethod::Css,
            GamutMethod::Hct,
            GamutMethod::from_str("oklch.c").unwrap(),
        ] {
            assert_eq!(to_gamut(Srgb, &srgb, &GamutMapping::new(method)), srgb);
        }

        // Already in gamut for chroma reduction, so coordinates are converted only
        let oklch = convert(Srgb, Oklch, &srgb);
        let config = ChromaReduction::css().with_space(Srgb);
        assert_same_coordinates!(Srgb, &chroma_reduction(Oklch, &oklch, &config), &srgb);
    }

    #[test]
    fn test_unbounded() {
        let mapping = GamutMapping::default().with_space(Oklab);
        let srgb = [1.5, -0.5, 0.0];
        assert_same_coordinates!(Srgb, &to_gamut(Srgb, &srgb, &mapping), &srgb);

        let config = ChromaReduction::default().with_space(Xyz);
        assert_same_coordinates!(
            Xyz,
            &chroma_reduction(Srgb, &srgb, &config),
            &convert(Srgb, Xyz, &srgb)
        );
    }

    #[test]
    fn test_clip_method() {
        let p3 = [0.0, 1.0, 0.0];
        let mapping = GamutMapping::new(GamutMethod::Clip).with_space(Srgb);
        let mapped = to_gamut(DisplayP3, &p3, &mapping);

        assert_same_coordinates!(DisplayP3, &mapped, &convert(Srgb, DisplayP3, &[0.0, 1.0, 0.0]));
        for c in convert(DisplayP3, Srgb, &mapped) {
            assert!((-1e-9..=1.0 + 1e-9).contains(&c));
        }
    }

    #[test]
    fn test_coordinate_method() {
        let srgb = convert(DisplayP3, Srgb, &[0.0, 1.0, 0.0]);
        let mapping = GamutMapping::new(GamutMethod::from_str("oklch.c").unwrap());
        let mapped = to_gamut(Srgb, &srgb, &mapping);

        assert!(in_gamut(Srgb, &mapped, 0.0));
        assert_abs_diff_eq!(mapped[0], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mapped[1], 0.9853318640053538, epsilon = 1e-6);
        assert_abs_diff_eq!(mapped[2], 0.16521046808914866, epsilon = 1e-6);

        // Mapping into another space's gamut results in the original space
        let mapping = mapping.with_space(Srgb);
        let mapped = to_gamut(DisplayP3, &[0.0, 1.0, 0.0], &mapping);
        assert_abs_diff_eq!(mapped[0], 0.45126353867938124, epsilon = 1e-6);
        assert_abs_diff_eq!(mapped[1], 0.9708013204069256, epsilon = 1e-6);
        assert_abs_diff_eq!(mapped[2], 0.3339763218249714, epsilon = 1e-6);
        assert!(in_gamut(Srgb, &convert(DisplayP3, Srgb, &mapped), 1e-9));
    }

    #[test]
    fn test_coordinate_method_within_budget() {
        // Barely out of gamut, so the clipped color is close enough
        let srgb = [1.01, 0.5, 0.2];
        let mapping = GamutMapping::new(GamutMethod::from_str("oklch.c").unwrap());
        assert_eq!(to_gamut(Srgb, &srgb, &mapping), [1.0, 0.5, 0.2]);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(GamutMethod::from_str("clip"), Ok(GamutMethod::Clip));
        assert_eq!(GamutMethod::from_str(" css "), Ok(GamutMethod::Css));
        assert_eq!(
            GamutMethod::from_str("hsv.s").map(|m| m.to_string()),
            Ok("hsv.s".to_string())
        );
        assert_eq!(
            GamutMethod::from_str("minde"),
            Err(GamutMethodError::Unknown("minde".to_string()))
        );
        assert!(matches!(
            GamutMethod::from_str("oklch.q"),
            Err(GamutMethodError::Coordinate(_))
        ));
    }
}
