#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    delta_e, distance, format_css, format_hex, from_rgb, lab_to_lch, limit, num_to_rgb, parse_hex,
    rgb_to_cmyk, rgb_to_hcg, rgb_to_hsi, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_named,
    rgb_to_num, rgb_to_oklab, rgb_to_temperature, rgba_to_android, temperature_to_rgb, to_contrast,
    to_eq_bits, to_luminance, to_rgb, with_luminance, ColorSpace, CssMode, HexMode,
};
use crate::error::ColorError;
use crate::input::ColorInput;
use crate::mixing::{mix_with, Interpolator};
use crate::registry::Registry;
use crate::Float;

/// The amount of CIELAB lightness or LCH chroma that makes up one step of
/// [`Color::darken`] or [`Color::saturate`].
const STEP: Float = 18.0;

/// A color.
///
/// A color stores sRGB channels in `0..=255` and alpha in `0..=1`. The
/// channels may have fractional values, which is important for accurately
/// mixing colors. Accessors such as [`Color::rgb`] and [`Color::hex`] round
/// the channels, whereas [`Color::channels`] returns them unchanged.
///
/// # Creating Colors
///
/// [`Color::new`] accepts anything that converts into a [`ColorInput`],
/// including strings, integers, arrays, and tuples, and either decodes it with
/// the explicitly named format or autodetects the format:
///
/// ```
/// # use chromata::{Color, ColorError};
/// let red = Color::new("red", None)?;
/// assert_eq!(red, Color::new("#f00", None)?);
/// assert_eq!(red, Color::new(0xff0000, None)?);
/// assert_eq!(red, Color::new((0.0, 1.0, 0.5), Some("hsl"))?);
/// assert_eq!(red, Color::new("rgb(255, 0, 0)", None)?);
/// # Ok::<(), ColorError>(())
/// ```
///
/// Creating a color from a color returns that color unchanged, independent
/// of any explicit format.
///
/// # Clipping
///
/// Construction clamps out-of-range channels and alpha. The color remembers
/// whether that happened, and [`Color::unclipped`] returns the original
/// values:
///
/// ```
/// # use chromata::Color;
/// let color = Color::from_rgba(300.0, -10.0, 128.0, 1.0);
/// assert_eq!(color.rgb(), [255.0, 0.0, 128.0]);
/// assert!(color.is_clipped());
/// assert_eq!(color.unclipped(), [300.0, -10.0, 128.0, 1.0]);
/// ```
///
/// # Equality and Hashing
///
/// Two colors are equal if their channels and alpha are equal after zeroing
/// out not-a-numbers and rounding to a precision well below what any format
/// displays. Hashing uses the same normalization.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "chromata"))]
#[derive(Clone)]
pub struct Color {
    rgba: [Float; 4],
    unclipped: [Float; 4],
    clipped: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Create a new color from the given value with optional format. <i
    /// class=python-only>Python only!</i>
    ///
    /// The value may be a color, string, integer, or sequence of numbers.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (value, mode = None))]
    pub fn py_new(value: &Bound<'_, PyAny>, mode: Option<&str>) -> PyResult<Self> {
        let input = if let Ok(color) = value.extract::<Color>() {
            ColorInput::Color(color)
        } else if let Ok(text) = value.extract::<String>() {
            ColorInput::Text(text)
        } else if let Ok(number) = value.extract::<i64>() {
            ColorInput::Integer(number)
        } else {
            ColorInput::Tuple(value.extract::<Vec<Float>>()?)
        };

        Ok(Registry::global().decode(&input, mode)?)
    }

    /// Get the rounded sRGB channels.
    pub fn rgb(&self) -> [Float; 3] {
        let [r, g, b, _] = self.rgba;
        [r.round(), g.round(), b.round()]
    }

    /// Get the rounded sRGB channels and alpha.
    pub fn rgba(&self) -> [Float; 4] {
        let [r, g, b, a] = self.rgba;
        [r.round(), g.round(), b.round(), a]
    }

    /// Get the unrounded sRGB channels and alpha.
    pub fn channels(&self) -> [Float; 4] {
        self.rgba
    }

    /// Get alpha.
    pub fn alpha(&self) -> Float {
        self.rgba[3]
    }

    /// Get the sRGB channels scaled to unit range and alpha, as used by
    /// WebGL.
    pub fn gl(&self) -> [Float; 4] {
        let [r, g, b, a] = self.rgba;
        [r / 255.0, g / 255.0, b / 255.0, a]
    }

    /// Get the name of this color, falling back on the hex string for
    /// colors without name. Alpha is ignored.
    ///
    /// ```
    /// # use chromata::Color;
    /// assert_eq!(Color::from_rgb(255.0, 160.0, 122.0).name(), "lightsalmon");
    /// assert_eq!(Color::from_rgb(255.0, 160.0, 123.0).name(), "#ffa07b");
    /// ```
    pub fn name(&self) -> String {
        let rgb = self.rgb();
        rgb_to_named(rgb_to_num(&rgb) as u32)
            .map_or_else(|| format_hex(&self.rgba, HexMode::Rgb), str::to_string)
    }

    /// Get this color as 24-bit integer. Channels are truncated, not
    /// rounded, and alpha is ignored.
    pub fn num(&self) -> u32 {
        rgb_to_num(&self.rgb_channels()) as u32
    }

    /// Estimate the temperature of this color in Kelvin.
    pub fn temperature(&self) -> Float {
        rgb_to_temperature(&self.rgb_channels())
    }

    /// Get the HSL coordinates. Hue is not-a-number for grays.
    pub fn hsl(&self) -> [Float; 3] {
        rgb_to_hsl(&self.rgb_channels())
    }

    /// Get the HSV coordinates. Hue is not-a-number for grays.
    pub fn hsv(&self) -> [Float; 3] {
        rgb_to_hsv(&self.rgb_channels())
    }

    /// Get the HSI coordinates. Hue is not-a-number for grays.
    pub fn hsi(&self) -> [Float; 3] {
        rgb_to_hsi(&self.rgb_channels())
    }

    /// Get the HCG coordinates. Hue is not-a-number for grays.
    pub fn hcg(&self) -> [Float; 3] {
        rgb_to_hcg(&self.rgb_channels())
    }

    /// Get the CMYK coordinates.
    pub fn cmyk(&self) -> [Float; 4] {
        rgb_to_cmyk(&self.rgb_channels())
    }

    /// Get the CIELAB coordinates.
    pub fn lab(&self) -> [Float; 3] {
        rgb_to_lab(&self.rgb_channels())
    }

    /// Get the LCH coordinates. Hue is not-a-number for grays.
    pub fn lch(&self) -> [Float; 3] {
        lab_to_lch(&self.lab())
    }

    /// Get the LCH coordinates in reverse order.
    pub fn hcl(&self) -> [Float; 3] {
        let [l, c, h] = self.lch();
        [h, c, l]
    }

    /// Get the Oklab coordinates.
    pub fn oklab(&self) -> [Float; 3] {
        rgb_to_oklab(&self.rgb_channels())
    }

    /// Get the Oklch coordinates. Hue is not-a-number for grays.
    pub fn oklch(&self) -> [Float; 3] {
        lab_to_lch(&self.oklab())
    }

    /// Get the coordinates in the given color space.
    ///
    /// For [`ColorSpace::Rgb`], this method returns the rounded channels,
    /// just like [`Color::rgb`].
    pub fn to(&self, space: ColorSpace) -> Vec<Float> {
        match space {
            ColorSpace::Rgb => self.rgb().to_vec(),
            _ => from_rgb(space, &self.rgb_channels()),
        }
    }

    /// Get one coordinate.
    ///
    /// The path names a color space and one of its channels, separated by a
    /// dot, e.g., `hsl.h` or `oklch.c`.
    ///
    /// ```
    /// # use chromata::{Color, ColorError};
    /// let color = Color::new("#ff8000", None)?;
    /// assert_eq!(color.get("rgb.g")?, 128.0);
    /// assert_eq!(color.get("cmyk.k")?, 0.0);
    /// assert!(color.get("hsl.x").is_err());
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn get(&self, path: &str) -> Result<Float, ColorError> {
        let (space, index) = parse_path(path)?;
        Ok(self.to(space)[index])
    }

    /// Determine whether construction clamped any channel or alpha.
    pub fn is_clipped(&self) -> bool {
        self.clipped
    }

    /// Get the channels and alpha as they were before clamping.
    pub fn unclipped(&self) -> [Float; 4] {
        self.unclipped
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get a copy of this color with the given alpha.
    pub fn with_alpha(&self, alpha: Float) -> Self {
        let [r, g, b, _] = self.rgba;
        Self::from_rgba(r, g, b, alpha)
    }

    /// Darken this color by the given number of steps in CIELAB lightness.
    /// Negative amounts brighten the color.
    ///
    /// ```
    /// # use chromata::Color;
    /// let red = Color::from_rgb(255.0, 0.0, 0.0);
    /// assert_eq!(red.darken(1.0).to_string(), "#c20000");
    /// assert_eq!(red.darken(10.0).to_string(), "#000000");
    /// ```
    pub fn darken(&self, amount: Float) -> Self {
        let [l, a, b] = self.lab();
        Self::from_space(ColorSpace::Lab, &[l - STEP * amount, a, b], self.alpha())
    }

    /// Brighten this color by the given number of steps in CIELAB lightness.
    pub fn brighten(&self, amount: Float) -> Self {
        self.darken(-amount)
    }

    /// Saturate this color by the given number of steps in LCH chroma.
    /// Negative amounts desaturate the color, with chroma bottoming out at
    /// zero.
    pub fn saturate(&self, amount: Float) -> Self {
        let [l, c, h] = self.lch();
        let c = (c + STEP * amount).max(0.0);
        Self::from_space(ColorSpace::Lch, &[l, c, h], self.alpha())
    }

    /// Desaturate this color by the given number of steps in LCH chroma.
    pub fn desaturate(&self, amount: Float) -> Self {
        self.saturate(-amount)
    }

    /// Get the WCAG relative luminance.
    pub fn luminance(&self) -> Float {
        to_luminance(&self.rgb_channels())
    }

    /// Get a color with the given relative luminance.
    ///
    /// The result lies on the straight RGB line from this color to black or
    /// white, has rounded channels, and keeps this color's alpha.
    ///
    /// ```
    /// # use chromata::Color;
    /// let red = Color::from_rgb(255.0, 0.0, 0.0);
    /// assert_eq!(red.with_luminance(0.4).to_string(), "#ff8686");
    /// ```
    pub fn with_luminance(&self, target: Float) -> Self {
        let [r, g, b] = with_luminance(&self.rgb_channels(), target);
        Self::from_rgba(r, g, b, self.alpha())
    }

    /// Get this color with its channels multiplied by alpha.
    pub fn premultiplied(&self) -> Self {
        let [r, g, b, a] = self.rgba;
        Self::from_rgba(r * a, g * a, b * a, a)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the WCAG contrast ratio between this and the other color,
    /// which ranges from 1 to 21.
    pub fn contrast(&self, other: &Self) -> Float {
        to_contrast(self.luminance(), other.luminance())
    }

    /// Compute CIEDE2000 between this and the other color.
    pub fn delta_e(&self, other: &Self) -> Float {
        self.delta_e_with(other, 1.0, 1.0, 1.0)
    }

    /// Compute CIEDE2000 between this and the other color with the given
    /// weights for lightness, chroma, and hue.
    pub fn delta_e_with(&self, other: &Self, kl: Float, kc: Float, kh: Float) -> Float {
        delta_e(&self.lab(), &other.lab(), kl, kc, kh)
    }

    /// Compute the Euclidean distance between this and the other color in
    /// the given color space. Undefined hues count as zero.
    pub fn distance(&self, other: &Self, space: ColorSpace) -> Float {
        distance(&self.to(space), &other.to(space))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format this color in hexadecimal notation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "hex", signature = (mode = None))]
    pub fn py_hex(&self, mode: Option<&str>) -> PyResult<String> {
        let mode = mode.map(str::parse::<HexMode>).transpose()?;
        Ok(self.hex(mode.unwrap_or_default()))
    }

    /// Format this color as CSS color function. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "css", signature = (mode = None))]
    pub fn py_css(&self, mode: Option<&str>) -> PyResult<String> {
        let mode = mode.map(str::parse::<CssMode>).transpose()?;
        Ok(self.css(mode.unwrap_or_default()))
    }

    /// Mix this color with the other color. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "mix", signature = (other, fraction = 0.5, mode = None))]
    pub fn py_mix(&self, other: &Self, fraction: Float, mode: Option<&str>) -> PyResult<Self> {
        Ok(self.mix(other, fraction, mode)?)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hex string. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Color {
    /// Create a new color with the global registry.
    ///
    /// If the mode is `None`, the registry autodetects the format. Otherwise,
    /// the mode names the format, ignoring case.
    pub fn new<I: Into<ColorInput>>(input: I, mode: Option<&str>) -> Result<Self, ColorError> {
        Registry::global().decode(&input.into(), mode)
    }

    /// Create a new color with the given registry.
    pub fn with_registry<I: Into<ColorInput>>(
        registry: &Registry,
        input: I,
        mode: Option<&str>,
    ) -> Result<Self, ColorError> {
        registry.decode(&input.into(), mode)
    }

    /// Create a new color from sRGB channels in `0..=255` and alpha in
    /// `0..=1`, clamping out-of-range values.
    pub fn from_rgba(r: Float, g: Float, b: Float, a: Float) -> Self {
        let unclipped = [r, g, b, a];
        let clipped = unclipped
            .iter()
            .zip([255.0, 255.0, 255.0, 1.0])
            .any(|(&value, max)| value < 0.0 || value > max);

        Self {
            rgba: [
                limit(r, 0.0, 255.0),
                limit(g, 0.0, 255.0),
                limit(b, 0.0, 255.0),
                limit(a, 0.0, 1.0),
            ],
            unclipped,
            clipped,
        }
    }

    /// Create a new opaque color from sRGB channels in `0..=255`.
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Create a new color from coordinates in the given color space.
    ///
    /// Missing coordinates count as zero.
    ///
    /// ```
    /// # use chromata::{Color, ColorSpace};
    /// let red = Color::from_space(ColorSpace::Hsl, &[0.0, 1.0, 0.5], 0.25);
    /// assert_eq!(red.to_string(), "#ff000040");
    /// ```
    pub fn from_space(space: ColorSpace, coordinates: &[Float], alpha: Float) -> Self {
        let [r, g, b] = to_rgb(space, coordinates);
        Self::from_rgba(r, g, b, alpha)
    }

    /// Create a new color from its hex string.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let [r, g, b, a] = parse_hex(s)?;
        Ok(Self::from_rgba(r, g, b, a))
    }

    /// Create a new color from a 24-bit integer.
    pub fn from_num(num: u32) -> Result<Self, ColorError> {
        let [r, g, b] = num_to_rgb(num as i64).ok_or_else(|| ColorError::DecodeError {
            format: "num",
            input: num.to_string(),
        })?;
        Ok(Self::from_rgb(r, g, b))
    }

    /// Create a new color for a black body with the given temperature in
    /// Kelvin.
    pub fn from_temperature(kelvin: Float) -> Self {
        let [r, g, b] = temperature_to_rgb(kelvin);
        Self::from_rgb(r, g, b)
    }

    /// Get the unrounded sRGB channels.
    #[inline]
    fn rgb_channels(&self) -> [Float; 3] {
        let [r, g, b, _] = self.rgba;
        [r, g, b]
    }

    /// Format this color in hexadecimal notation.
    ///
    /// ```
    /// # use chromata::{Color, HexMode};
    /// let color = Color::from_rgba(255.0, 0.0, 0.0, 0.25);
    /// assert_eq!(color.hex(HexMode::Auto), "#ff000040");
    /// assert_eq!(color.hex(HexMode::Rgb), "#ff0000");
    /// assert_eq!(color.hex(HexMode::Argb), "#40ff0000");
    /// ```
    pub fn hex(&self, mode: HexMode) -> String {
        format_hex(&self.rgba, mode)
    }

    /// Format this color as CSS color function.
    pub fn css(&self, mode: CssMode) -> String {
        format_css(&self.rgba, mode)
    }

    /// Pack this color into a signed 32-bit ARGB integer.
    ///
    /// In [`AndroidMode::Auto`], alpha is included only for translucent
    /// colors. Included alpha is scaled to `0..=255` and rounded.
    pub fn android(&self, mode: AndroidMode) -> i32 {
        let alpha = match mode {
            AndroidMode::Rgb => None,
            AndroidMode::Auto if self.alpha() >= 1.0 => None,
            _ => Some(self.alpha()),
        };

        rgba_to_android(&self.rgb_channels(), alpha)
    }

    /// Set alpha in place, clamping it to `0..=1`.
    pub fn set_alpha(&mut self, alpha: Float) {
        *self = self.with_alpha(alpha);
    }

    /// Get a copy of this color with one coordinate changed.
    ///
    /// The path names a color space and one of its channels, as for
    /// [`Color::get`]. A number replaces the coordinate. A string starting
    /// with `+` or `-` adds to it, one starting with `*` or `/` multiplies or
    /// divides it, and any other string replaces it. Alpha is preserved.
    ///
    /// ```
    /// # use chromata::{Color, ColorError};
    /// let color = Color::new("#ff8000", None)?;
    /// assert_eq!(color.with_channel("rgb.b", 255.0)?.to_string(), "#ff80ff");
    /// assert_eq!(color.with_channel("rgb.r", "/2")?.to_string(), "#808000");
    /// assert_eq!(color.with_channel("rgb.g", "-28")?.to_string(), "#ff6400");
    /// assert!(color.with_channel("rgb.g", "lots").is_err());
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn with_channel<V: Into<ChannelValue>>(
        &self,
        path: &str,
        value: V,
    ) -> Result<Self, ColorError> {
        let (space, index) = parse_path(path)?;
        let mut coordinates = self.to(space);
        coordinates[index] = value.into().apply(coordinates[index])?;
        Ok(Self::from_space(space, &coordinates, self.alpha()))
    }

    /// Change one coordinate in place.
    pub fn set_channel<V: Into<ChannelValue>>(
        &mut self,
        path: &str,
        value: V,
    ) -> Result<(), ColorError> {
        *self = self.with_channel(path, value)?;
        Ok(())
    }

    /// Multiply the channels by alpha in place.
    pub fn premultiply(&mut self) {
        *self = self.premultiplied();
    }

    /// Mix this color with the other color using the global registry.
    ///
    /// The mode defaults to the registry's default mode, `lrgb`. Alpha is
    /// always interpolated linearly.
    ///
    /// ```
    /// # use chromata::{Color, ColorError};
    /// let red = Color::new("red", None)?;
    /// let blue = Color::new("blue", None)?;
    /// assert_eq!(red.mix(&blue, 0.5, None)?.to_string(), "#b400b4");
    /// assert_eq!(red.mix(&blue, 0.25, Some("rgb"))?.to_string(), "#bf0040");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn mix(&self, other: &Self, fraction: Float, mode: Option<&str>) -> Result<Self, ColorError> {
        mix_with(Registry::global(), self, other, fraction, mode)
    }

    /// Create an interpolator between this and the other color.
    pub fn interpolate(&self, other: &Self, mode: Option<&str>) -> Result<Interpolator, ColorError> {
        Interpolator::new(Registry::global(), self, other, mode)
    }
}

/// Split the channel path into color space and channel index.
fn parse_path(path: &str) -> Result<(ColorSpace, usize), ColorError> {
    let (space, channel) = path.split_once('.').unwrap_or((path, ""));
    let unknown = || ColorError::UnknownChannel {
        space: space.to_string(),
        channel: channel.to_string(),
    };

    let space: ColorSpace = space.parse().map_err(|_| unknown())?;
    let index = space.channel_index(channel).ok_or_else(unknown)?;
    Ok((space, index))
}

// --------------------------------------------------------------------------------------------------------------------

/// Create a color from the input, autodetecting its format.
///
/// A color input is returned as is, without copying its state anew.
pub fn to_color<I: Into<ColorInput>>(input: I) -> Result<Color, ColorError> {
    Registry::global().decode(&input.into(), None)
}

/// Determine whether the input can be turned into a color.
///
/// ```
/// # use chromata::valid;
/// assert!(valid("red"));
/// assert!(valid("#abc"));
/// assert!(!valid("bread"));
/// ```
pub fn valid<I: Into<ColorInput>>(input: I) -> bool {
    to_color(input).is_ok()
}

// --------------------------------------------------------------------------------------------------------------------

/// The choice of channel layout for packed ARGB integers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AndroidMode {
    /// Include alpha only if the color is translucent.
    #[default]
    Auto,
    /// Always pack the color as opaque.
    Rgb,
    /// Always include alpha.
    Rgba,
}

impl std::str::FromStr for AndroidMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            _ => Err(ColorError::UnknownFormat(s.to_string())),
        }
    }
}

/// The new value for a coordinate.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelValue {
    /// An absolute value.
    Number(Float),
    /// An absolute value or relative change as string, e.g., `+10`, `*0.5`,
    /// or `42`.
    Expression(String),
}

impl ChannelValue {
    /// Apply this value to the current coordinate.
    fn apply(&self, current: Float) -> Result<Float, ColorError> {
        let expression = match self {
            Self::Number(number) => return Ok(*number),
            Self::Expression(expression) => expression.trim(),
        };

        let number = |s: &str| {
            s.trim()
                .parse::<Float>()
                .map_err(|_| ColorError::UnsupportedSetValue(expression.to_string()))
        };

        if expression.starts_with(['+', '-']) {
            Ok(current + number(expression)?)
        } else if let Some(rest) = expression.strip_prefix('*') {
            Ok(current * number(rest)?)
        } else if let Some(rest) = expression.strip_prefix('/') {
            Ok(current / number(rest)?)
        } else {
            number(expression)
        }
    }
}

impl From<Float> for ChannelValue {
    fn from(value: Float) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ChannelValue {
    fn from(value: &str) -> Self {
        Self::Expression(value.to_string())
    }
}

impl From<String> for ChannelValue {
    fn from(value: String) -> Self {
        Self::Expression(value)
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Default for Color {
    /// Create opaque black.
    fn default() -> Self {
        Self::from_rgb(0.0, 0.0, 0.0)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    /// Create a color from a hex, CSS, or named color string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        to_color(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        to_color(value)
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for value in self.rgba {
            to_eq_bits(value).hash(state);
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba || self.rgba.map(to_eq_bits) == other.rgba.map(to_eq_bits)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.rgba;
        write!(f, "Color([{}, {}, {}, {}])", r, g, b, a)
    }
}

impl std::fmt::Display for Color {
    /// Format this color as hex string, including alpha only if the color is
    /// translucent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex(HexMode::Auto))
    }
}

// ====================================================================================================================
