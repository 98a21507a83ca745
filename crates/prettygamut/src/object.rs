use crate::core::{
    chroma_reduction, clip, convert, format, in_gamut, normalize, to_eq_bits, to_eq_coordinates,
    to_gamut, ChromaReduction, ColorSpace, Coordinate, DeltaE, GamutMapping, GamutMethod,
    DEFAULT_EPSILON,
};
use crate::error::CoordinateError;
use crate::Float;

/// A high-resolution color object.
///
/// Every color object has a [color space](ColorSpace), three coordinates, and
/// an alpha value for opacity.
///
/// # Color Coordinates
///
/// For RGB color spaces, the coordinates of in-gamut colors have unit range.
/// For HSV, saturation and value have range `0..=100`, though the gamut is
/// sRGB's. For the other color spaces, there are no gamut bounds.
///
/// A coordinate may be not-a-number either because it is a [powerless
/// component](https://www.w3.org/TR/css-color-4/#powerless), such as the hue in
/// Oklch when chroma is zero, or a [missing
/// component](https://www.w3.org/TR/css-color-4/#missing), i.e., a component
/// intentionally set to not-a-number.
///
/// ## Normalization
///
/// While coordinates may be not-a-number, that representation of powerless or
/// missing components can easily render any computation on colors useless. For
/// that reason, conversions automatically normalize colors with
/// [`Color::normalize`]. Normalization replaces not-a-numbers with zero and
/// also ensures that lightness and chroma have meaningful quantities.
///
/// ## Equality Testing and Hashing
///
/// Normalization isn't sufficient for equality testing and hashing, which have
/// the additional requirement that equal colors also have equal hashes. Hence
/// this class performs the following steps to prepare coordinates for either
/// operation:
///
///   * To turn coordinates into comparable entities, replace not-a-numbers with
///     positive zero;
///   * To preserve not-a-number semantics for hues, also zero out chroma for
///     not-a-number hues;
///   * To preserve rotation semantics for hues, remove all full rotations;
///   * To prepare for rounding, scale down hues to unit range;
///   * To allow for floating point error, multiply by 1e4/1e12 and then round;
///   * To make zeros comparable, replace negative zero with positive zero (but
///     only after rounding, which may produce zeros);
///   * To convince Rust that coordinates are comparable, convert to bits.
///
/// Alpha is compared the same way, without the steps specific to hues.
///
/// ## Gamut Mapping
///
/// [`Color::to_gamut`] maps colors into gamut with the CSS Color 4 algorithm.
/// [`Color::to_gamut_with`] and [`Color::apply_gamut`] accept a
/// [`GamutMapping`] that selects clipping, chroma reduction in Oklch or HCT,
/// or the reduction of an arbitrary coordinate, optionally for the gamut of
/// another color space.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
    alpha: Float,
}

impl Color {
    /// Instantiate a new, opaque color with the given color space and
    /// coordinates.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink.as_ref(), &[0.7_f64, 0.22_f64, 3.0_f64]);
    /// assert_eq!(pink.alpha(), 1.0);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: oklch(0.7 0.22 3.0);"></div>
    /// </div>
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self {
            space,
            coordinates,
            alpha: 1.0,
        }
    }

    /// Update this color's alpha.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(mut self, alpha: Float) -> Self {
        self.alpha = alpha;
        self
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let fire_brick = Color::srgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick.space(), ColorSpace::Srgb);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: rgb(177 31 36);"></div>
    /// </div>
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Display P3 color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let cyan = Color::p3(0, 0.87, 0.85);
    /// assert_eq!(cyan.space(), ColorSpace::DisplayP3);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(display-p3 0 0.87 0.85);"></div>
    /// </div>
    pub fn p3(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::DisplayP3, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Oklch color with the given lightness, chroma, and
    /// hue coordinates.
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklch, [l.into(), c.into(), h.into()])
    }

    /// Instantiate a new HCT color with the given hue, chroma, and tone
    /// coordinates.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let blue = Color::hct(282, 45, 40);
    /// assert!(blue.to(ColorSpace::Srgb).in_gamut());
    /// ```
    pub fn hct(h: impl Into<Float>, c: impl Into<Float>, t: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hct, [h.into(), c.into(), t.into()])
    }

    /// Access the color space.
    #[inline]
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub const fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Access the alpha value.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Normalize this color.
    ///
    /// This method replaces not-a-number coordinates with zero, zeroes out
    /// chroma for not-a-number hues, and keeps the lightness and chroma of the
    /// Oklab variations within range.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let gray = Color::oklch(1.2, 0.1, f64::NAN).normalize();
    /// assert_eq!(gray.as_ref(), &[1.0, 0.0, 0.0]);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self {
            space: self.space,
            coordinates: normalize(self.space, &self.coordinates),
            alpha: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// # Approach
    ///
    /// Every color space has a base color space it converts to and from,
    /// with XYZ D65 at the root. A conversion first climbs from the source
    /// color space towards XYZ until reaching an ancestor of the target color
    /// space and then descends to the target. Hence a conversion between
    /// sibling color spaces such as Oklch and Oklab takes a single step,
    /// whereas a conversion from HCT to CIELCh takes four.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let cyan = Color::srgb(0.0, 1.0, 1.0);
    /// let same_cyan = cyan.to(ColorSpace::Hsv).to(ColorSpace::Srgb);
    /// assert_eq!(cyan, same_cyan);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self {
            space: target,
            coordinates: convert(self.space, target, &self.coordinates),
            alpha: self.alpha,
        }
    }

    /// Get the coordinate with the given reference.
    ///
    /// A reference is either the identifier or name of one of this color's
    /// coordinates, e.g., `g` or `green` for sRGB, or a qualified reference
    /// of the form `space.coordinate`, e.g., `oklch.l`, which converts the
    /// color as necessary.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let orange = Color::srgb(1.0, 0.5, 0.0);
    /// assert_eq!(orange.get("green")?, 0.5);
    /// assert_eq!(orange.get("hsv.v")?, 100.0);
    /// # Ok::<(), prettygamut::error::CoordinateError>(())
    /// ```
    pub fn get(&self, reference: &str) -> Result<Float, CoordinateError> {
        let coordinate = Coordinate::resolve(reference, self.space)?;
        if coordinate.space() == self.space {
            Ok(self.coordinates[coordinate.index()])
        } else {
            Ok(convert(self.space, coordinate.space(), &self.coordinates)[coordinate.index()])
        }
    }

    /// Set the coordinate with the given reference.
    ///
    /// This method resolves the reference just like [`Color::get`]. If the
    /// reference is to another color space, it converts this color to that
    /// color space, updates the coordinate, and converts back.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let mut color = Color::srgb(1.0, 0.5, 0.0);
    /// color.set("b", 0.25)?;
    /// assert_eq!(color, Color::srgb(1.0, 0.5, 0.25));
    /// # Ok::<(), prettygamut::error::CoordinateError>(())
    /// ```
    pub fn set(&mut self, reference: &str, value: Float) -> Result<&mut Self, CoordinateError> {
        let coordinate = Coordinate::resolve(reference, self.space)?;
        if coordinate.space() == self.space {
            self.coordinates[coordinate.index()] = value;
        } else {
            let mut coordinates = convert(self.space, coordinate.space(), &self.coordinates);
            coordinates[coordinate.index()] = value;
            self.coordinates = convert(coordinate.space(), self.space, &coordinates);
        }
        Ok(self)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in gamut for its color space, with
    /// the default tolerance of 0.000075.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// assert!(red.in_gamut());
    ///
    /// let green = Color::p3(0.0, 1.0, 0.0);
    /// assert!(!green.to(ColorSpace::Srgb).in_gamut());
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(srgb 1 0 0);"></div>
    /// <div style="background-color: color(display-p3 0 1 0);"></div>
    /// </div>
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates, DEFAULT_EPSILON)
    }

    /// Determine whether this color is in gamut for the given color space,
    /// with the given tolerance.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let green = Color::p3(0.0, 1.0, 0.0);
    /// assert!(green.in_gamut_of(ColorSpace::Rec2020, 0.0));
    /// assert!(!green.in_gamut_of(ColorSpace::Srgb, 0.0));
    /// ```
    pub fn in_gamut_of(&self, space: ColorSpace, epsilon: Float) -> bool {
        if space == self.space {
            in_gamut(space, &self.coordinates, epsilon)
        } else {
            in_gamut(space, &convert(self.space, space, &self.coordinates), epsilon)
        }
    }

    /// Clip this color to the gamut of its color space.
    ///
    /// Display P3's green primary is out of gamut in sRGB. Clipping the
    /// converted color does bring it into gamut, though the result may be a
    /// rough match for the original color.
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let too_green = Color::new(ColorSpace::DisplayP3, [0.0, 1.0, 0.0])
    ///     .to(ColorSpace::Srgb);
    /// assert!(!too_green.in_gamut());
    ///
    /// let green = too_green.clip();
    /// assert!(green.in_gamut());
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(display-p3 0 1 0);"></div>
    /// <div style="background-color: color(srgb 0 1 0);"></div>
    /// </div>
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self {
            space: self.space,
            coordinates: clip(self.space, &self.coordinates),
            alpha: self.alpha,
        }
    }

    /// Map this color into the gamut of its color space.
    ///
    /// # Algorithm
    ///
    /// This method uses the [CSS Color 4
    /// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping) for
    /// gamut mapping. It performs a binary search in Oklch for a color with
    /// less chroma than the original (but the same lightness and hue), whose
    /// clipped version is within the *just noticeable difference* and in gamut
    /// for the current color space. That clipped color is the result.
    ///
    /// The algorithm nicely illustrates how different color spaces are best
    /// suited to different needs. First, it performs clipping and in-gamut
    /// testing in the current color space. After all, that's the color space
    /// the application requires the color to be in. Second, it performs color
    /// adjustments in Oklch. It is nicely suited to color manipulation because
    /// it is both perceptually uniform and has polar coordinates. Third, it
    /// measures distance in Oklab. Since the color space is perceptually
    /// uniform and has Cartesian coordinates, computing that distance is as
    /// simple as calculating Euclidian distance.
    ///
    /// # Examples
    ///
    /// Display P3's green primary is out of gamut in sRGB. Gamut mapping the
    /// converted color does bring it into gamut while also perserving the hue
    /// and maximizing the chroma, all within sRGB's gamut.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let too_green = Color::new(ColorSpace::DisplayP3, [0.0, 1.0, 0.0])
    ///     .to(ColorSpace::Srgb);
    /// assert!(!too_green.in_gamut());
    ///
    /// let green = too_green.to_gamut();
    /// assert!(green.in_gamut());
    /// assert_eq!(green, Color::srgb(0.0, 0.9857637107710327, 0.15974244397343723));
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(display-p3 0 1 0);"></div>
    /// <div style="background-color: color(srgb 0.0 0.9857637107710327 0.15974244397343723);"></div>
    /// </div>
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut(&self) -> Self {
        self.to_gamut_with(&GamutMapping::default())
    }

    /// Map this color into gamut with CSS Color 4 gamut mapping.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut_css(&self) -> Self {
        self.to_gamut_with(&GamutMapping::new(GamutMethod::Css))
    }

    /// Map this color into gamut with chroma reduction in HCT.
    ///
    /// Since HCT's tone is CIELAB's lightness, the result has the same tone
    /// as this color, at least as long as that tone is neither 0 nor 100.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let too_green = Color::p3(0.0, 1.0, 0.0).to(ColorSpace::Srgb);
    /// let green = too_green.to_gamut_hct();
    /// assert!(green.in_gamut());
    ///
    /// let tone = too_green.get("hct.t")?;
    /// assert!((green.get("hct.t")? - tone).abs() < 0.05);
    /// # Ok::<(), prettygamut::error::CoordinateError>(())
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut_hct(&self) -> Self {
        self.to_gamut_with(&GamutMapping::new(GamutMethod::Hct))
    }

    /// Map this color into gamut with the given configuration.
    ///
    /// The result is in this color's color space, even if the configuration
    /// maps into another color space's gamut.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace, GamutMapping, GamutMethod};
    /// # use std::str::FromStr;
    /// let green = Color::p3(0.0, 1.0, 0.0);
    /// let mapping = GamutMapping::new(GamutMethod::from_str("oklch.c")?)
    ///     .with_space(ColorSpace::Srgb);
    ///
    /// let mapped = green.to_gamut_with(&mapping);
    /// assert_eq!(mapped.space(), ColorSpace::DisplayP3);
    /// assert!(mapped.in_gamut_of(ColorSpace::Srgb, 1e-9));
    /// # Ok::<(), prettygamut::error::GamutMethodError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut_with(&self, mapping: &GamutMapping) -> Self {
        Self {
            space: self.space,
            coordinates: to_gamut(self.space, &self.coordinates, mapping),
            alpha: self.alpha,
        }
    }

    /// Map this color into gamut with the given configuration, in place.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace, GamutMapping, GamutMethod};
    /// let mut color = Color::srgb(1.2, 0.5, -0.1);
    /// color.apply_gamut(&GamutMapping::new(GamutMethod::Clip));
    /// assert_eq!(color, Color::srgb(1.0, 0.5, 0.0));
    /// ```
    pub fn apply_gamut(&mut self, mapping: &GamutMapping) -> &mut Self {
        self.coordinates = to_gamut(self.space, &self.coordinates, mapping);
        self
    }

    /// Reduce this color's chroma until it is in gamut.
    ///
    /// Unlike the other gamut mapping methods, this method returns a color in
    /// the configuration's color space, if it has one.
    ///
    /// ```
    /// # use prettygamut::{ChromaReduction, Color, ColorSpace};
    /// let green = Color::p3(0.0, 1.0, 0.0);
    /// let config = ChromaReduction::hct().with_space(ColorSpace::Srgb);
    /// let mapped = green.chroma_reduction(&config);
    /// assert_eq!(mapped.space(), ColorSpace::Srgb);
    /// assert!(mapped.in_gamut());
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn chroma_reduction(&self, config: &ChromaReduction) -> Self {
        Self {
            space: config.space.unwrap_or(self.space),
            coordinates: chroma_reduction(self.space, &self.coordinates, config),
            alpha: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the color difference with the given metric.
    ///
    /// ```
    /// # use prettygamut::{Color, DeltaE};
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// let orange = Color::srgb(1.0, 0.5, 0.0);
    /// assert_eq!(red.delta_e(&red, DeltaE::E2000), 0.0);
    /// assert!(red.delta_e(&orange, DeltaE::Hct) > 0.0);
    /// ```
    #[inline]
    pub fn delta_e(&self, other: &Self, metric: DeltaE) -> Float {
        metric.compute(self.space, &self.coordinates, other.space, &other.coordinates)
    }

    /// Compute the Euclidian distance between the two colors in Oklab, i.e.,
    /// ΔE OK.
    #[inline]
    pub fn distance(&self, other: &Self) -> Float {
        self.delta_e(other, DeltaE::Ok)
    }
}

impl Default for Color {
    /// Create an instance of the default color.
    ///
    /// The chosen default for high-resolution colors is the origin in XYZ,
    /// i.e., pitch black.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let default = Color::default();
    /// assert_eq!(default.space(), ColorSpace::Xyz);
    /// assert_eq!(default.as_ref(), &[0.0_f64, 0.0, 0.0]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace};
    /// let purple = Color::srgb(0.5, 0.4, 0.75);
    /// assert_eq!(purple[2], 0.75);
    /// ```
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
        to_eq_bits(self.alpha).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both colors must have the same color space. Their coordinates and
    /// alpha are compared after normalizing and rounding them, as described
    /// for [`Color`].
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace, Float};
    /// let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));
    /// assert_eq!(
    ///     Color::srgb(Float::NAN, 4.0 * delta, 0.12 + delta),
    ///     Color::srgb(0,          5.0 * delta, 0.12        )
    /// );
    ///
    /// assert_eq!(Color::oklch(0.5, 0.1, 665), Color::oklch(0.5, 0.1, 305));
    /// assert_ne!(Color::oklch(0.5, 0.1, 305).with_alpha(0.5), Color::oklch(0.5, 0.1, 305));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space || to_eq_bits(self.alpha) != to_eq_bits(other.alpha) {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}], {})",
            self.space, c1, c2, c3, self.alpha
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color with the CSS `color()` function, the
    /// color space's identifier, and three space-separated coordinates,
    /// followed by a slash and alpha if the color is not opaque. It respects
    /// the formatter's precision, defaulting to 5 digits past the decimal.
    /// Since degrees are up to two orders of magnitude larger than other
    /// coordinates, this method uses a precision smaller by 2 for hues.
    ///
    /// ```
    /// # use prettygamut::{Color, ColorSpace::*};
    /// let lime = Color::srgb(0.631372549, 0.823529412, 0.682352941);
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    /// assert_eq!(
    ///     format!("{}", lime.with_alpha(0.5)),
    ///     "color(srgb 0.63137 0.82353 0.68235 / 0.5)"
    /// );
    ///
    /// let gray = Color::oklch(0.665, 0, f64::NAN);
    /// assert_eq!(format!("{}", gray), "color(oklch 0.665 0 none)");
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(srgb 0.63137 0.82353 0.68235);"></div>
    /// <div style="background-color: oklch(0.665 0 none);"></div>
    /// </div>
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, self.alpha, f)
    }
}

// ====================================================================================================================
