//! Mixing, averaging, Bézier curves, and blend modes.
//!
//! All functions in this module produce new colors from two or more existing
//! colors. [`mix`] and [`Interpolator`] dispatch on the mixing modes of a
//! [`Registry`], whereas [`average`], [`Bezier`], and [`blend`] implement
//! fixed algorithms.

use crate::core::{
    bernstein, interpolate, interpolate_hue, lerp, limit, num_to_rgb, Accumulator, ColorSpace,
};
use crate::error::ColorError;
use crate::input::extract_mode;
use crate::registry::{Mixer, Registry};
use crate::{Color, Float};

/// Mix RGB channels linearly.
pub(crate) fn mix_rgb(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let [r1, g1, b1, _] = color1.channels();
    let [r2, g2, b2, _] = color2.channels();
    let [r, g, b] = interpolate(fraction, &[r1, g1, b1], &[r2, g2, b2]);
    Color::from_rgb(r, g, b)
}

/// Mix the squares of RGB channels linearly, which approximates mixing in
/// linear RGB.
pub(crate) fn mix_lrgb(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let [r1, g1, b1, _] = color1.channels();
    let [r2, g2, b2, _] = color2.channels();
    let blend = |c1: Float, c2: Float| {
        (c1 * c1 * (1.0 - fraction) + c2 * c2 * fraction).sqrt()
    };
    Color::from_rgb(blend(r1, r2), blend(g1, g2), blend(b1, b2))
}

/// Mix CIELAB coordinates linearly.
pub(crate) fn mix_lab(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let lab = interpolate(fraction, &color1.lab(), &color2.lab());
    Color::from_space(ColorSpace::Lab, &lab, 1.0)
}

/// Mix Oklab coordinates linearly.
pub(crate) fn mix_oklab(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let oklab = interpolate(fraction, &color1.oklab(), &color2.oklab());
    Color::from_space(ColorSpace::Oklab, &oklab, 1.0)
}

pub(crate) fn mix_hsl(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let hsl = interpolate_hue(fraction, &color1.hsl(), &color2.hsl(), true);
    Color::from_space(ColorSpace::Hsl, &hsl, 1.0)
}

/// Mix HSV coordinates. Unlike the other hue-first spaces, a gray never
/// contributes the other color's saturation.
pub(crate) fn mix_hsv(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let hsv = interpolate_hue(fraction, &color1.hsv(), &color2.hsv(), false);
    Color::from_space(ColorSpace::Hsv, &hsv, 1.0)
}

pub(crate) fn mix_hsi(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let hsi = interpolate_hue(fraction, &color1.hsi(), &color2.hsi(), true);
    Color::from_space(ColorSpace::Hsi, &hsi, 1.0)
}

pub(crate) fn mix_hcg(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let hcg = interpolate_hue(fraction, &color1.hcg(), &color2.hcg(), true);
    Color::from_space(ColorSpace::Hcg, &hcg, 1.0)
}

/// Mix LCH coordinates, which is the same as mixing HCL coordinates.
pub(crate) fn mix_lch(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let hcl = interpolate_hue(fraction, &color1.hcl(), &color2.hcl(), true);
    Color::from_space(ColorSpace::Hcl, &hcl, 1.0)
}

pub(crate) fn mix_oklch(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let reversed = |[l, c, h]: [Float; 3]| [h, c, l];
    let [h, c, l] = interpolate_hue(
        fraction,
        &reversed(color1.oklch()),
        &reversed(color2.oklch()),
        true,
    );
    Color::from_space(ColorSpace::Oklch, &[l, c, h], 1.0)
}

/// Mix the packed 24-bit integers as numbers.
///
/// The result is truncated toward zero and limited to `0..=0xffffff` before
/// unpacking, so that fractions outside the unit interval saturate just like
/// the other modes. Since the blue channel occupies the least significant
/// bits, this mode tends to produce unexpected colors.
pub(crate) fn mix_num(color1: &Color, color2: &Color, fraction: Float) -> Color {
    let num = lerp(color1.num() as Float, color2.num() as Float, fraction).trunc();
    let num = limit(num, 0.0, 0xff_ffff as Float) as i64;
    let [r, g, b] = num_to_rgb(num).unwrap_or_default();
    Color::from_rgb(r, g, b)
}

// --------------------------------------------------------------------------------------------------------------------

/// Mix two colors with the mixing modes of the global registry.
///
/// The fraction determines how much of the second color ends up in the
/// result, with 0 producing the first color and 1 the second color. If the
/// mode is `None`, this function uses the registry's default mode, `lrgb`.
/// Independent of mode, alpha is interpolated linearly.
///
/// ```
/// # use chromata::{mix, Color, ColorError};
/// let white = Color::new("white", None)?;
/// let red = Color::new("red", None)?;
/// assert_eq!(mix(&white, &red, 0.5, Some("hsl"))?.to_string(), "#ff8080");
/// assert!(mix(&white, &red, 0.5, Some("cubehelix")).is_err());
/// # Ok::<(), ColorError>(())
/// ```
pub fn mix(
    color1: &Color,
    color2: &Color,
    fraction: Float,
    mode: Option<&str>,
) -> Result<Color, ColorError> {
    mix_with(Registry::global(), color1, color2, fraction, mode)
}

/// Mix two colors with the mixing modes of the given registry.
pub fn mix_with(
    registry: &Registry,
    color1: &Color,
    color2: &Color,
    fraction: Float,
    mode: Option<&str>,
) -> Result<Color, ColorError> {
    let mixer = registry.mixer(&mode_or_default(registry, mode))?;
    Ok(apply_mixer(mixer, color1, color2, fraction))
}

/// Normalize the mode, falling back on the registry's default mode.
fn mode_or_default(registry: &Registry, mode: Option<&str>) -> String {
    extract_mode(mode)
        .or_else(|| registry.default_mode().map(str::to_string))
        .unwrap_or_default()
}

#[inline]
fn apply_mixer(mixer: Mixer, color1: &Color, color2: &Color, fraction: Float) -> Color {
    mixer(color1, color2, fraction).with_alpha(lerp(color1.alpha(), color2.alpha(), fraction))
}

/// A color interpolator.
///
/// An interpolator looks up the mixing mode once and then produces any number
/// of colors between its two end points with [`Interpolator::at`].
///
/// ```
/// # use chromata::{Color, ColorError};
/// let black = Color::new("black", None)?;
/// let white = Color::new("white", None)?;
/// let gray = black.interpolate(&white, Some("rgb"))?;
/// assert_eq!(gray.at(0.0), black);
/// assert_eq!(gray.at(0.5).to_string(), "#808080");
/// assert_eq!(gray.at(1.0), white);
/// # Ok::<(), ColorError>(())
/// ```
#[derive(Clone)]
pub struct Interpolator {
    mode: String,
    mixer: Mixer,
    color1: Color,
    color2: Color,
}

impl Interpolator {
    /// Create a new interpolator with the given registry's mixing mode.
    pub fn new(
        registry: &Registry,
        color1: &Color,
        color2: &Color,
        mode: Option<&str>,
    ) -> Result<Self, ColorError> {
        let mode = mode_or_default(registry, mode);
        let mixer = registry.mixer(&mode)?;

        Ok(Self {
            mode,
            mixer,
            color1: color1.clone(),
            color2: color2.clone(),
        })
    }

    /// Compute the color at the given fraction between the two end points.
    pub fn at(&self, fraction: Float) -> Color {
        apply_mixer(self.mixer, &self.color1, &self.color2, fraction)
    }
}

impl std::fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Interpolator({}, {:?}, {:?})",
            self.mode, self.color1, self.color2
        )
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Average several colors.
///
/// The mode is either `lrgb`, the default, or the name of a [`ColorSpace`].
/// In `lrgb` mode, this function averages the squares of the RGB channels and
/// then takes the square root, just like the `lrgb` mixing mode. In all other
/// modes, it averages each coordinate arithmetically, with the exception of
/// hue, which is averaged as the angle of the sum of unit vectors. Undefined
/// coordinates, i.e., the hues of grays, carry no weight. Alpha is always
/// averaged arithmetically.
///
/// The optional weights are scaled to add up to the number of colors. Missing
/// weights count as 1 and extra weights are ignored.
///
/// ```
/// # use chromata::{average, Color, ColorError};
/// let colors = ["blue", "red", "white"]
///     .map(|name| Color::new(name, None))
///     .into_iter()
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(average(&colors, Some("rgb"), None)?.to_string(), "#aa55aa");
/// # Ok::<(), ColorError>(())
/// ```
pub fn average(
    colors: &[Color],
    mode: Option<&str>,
    weights: Option<&[Float]>,
) -> Result<Color, ColorError> {
    if colors.is_empty() {
        return Err(ColorError::TooFewColors {
            expected: 1,
            actual: 0,
        });
    }

    let count = colors.len() as Float;
    let raw: Vec<Float> = (0..colors.len())
        .map(|index| {
            weights
                .and_then(|w| w.get(index))
                .copied()
                .unwrap_or(1.0)
        })
        .collect();
    let total = raw.iter().copied().sum::<Accumulator>().total();
    let weights: Vec<Float> = raw.iter().map(|w| w * count / total).collect();

    let mode = extract_mode(mode).unwrap_or_else(|| "lrgb".to_string());
    if mode == "lrgb" {
        return Ok(average_lrgb(colors, &weights));
    }

    let space: ColorSpace = mode
        .parse()
        .map_err(|_| ColorError::UnknownInterpolationMode(mode.clone()))?;
    Ok(average_space(space, colors, &weights))
}

fn average_lrgb(colors: &[Color], weights: &[Float]) -> Color {
    let count = colors.len() as Float;
    let mut sums = [Accumulator::default(); 3];
    let mut alpha = Accumulator::default();

    for (color, weight) in colors.iter().zip(weights) {
        let [r, g, b, a] = color.channels();
        let factor = weight / count;
        for (sum, channel) in sums.iter_mut().zip([r, g, b]) {
            *sum += channel * channel * factor;
        }
        alpha += a * factor;
    }

    let [r, g, b] = sums.map(|sum| sum.total().sqrt());
    let alpha = alpha.total();
    Color::from_rgba(r, g, b, if alpha > 0.9999999 { 1.0 } else { alpha })
}

fn average_space(space: ColorSpace, colors: &[Color], weights: &[Float]) -> Color {
    let count = colors.len() as Float;
    let arity = space.arity();
    let hue = space.hue_index();

    let mut sums = vec![Accumulator::default(); arity];
    let mut counts = vec![0.0; arity];
    let (mut dx, mut dy) = (0.0, 0.0);
    let mut alpha = Accumulator::default();

    for (color, &weight) in colors.iter().zip(weights) {
        let coordinates = color.to(space);
        alpha += color.alpha() * weight;

        for (index, &value) in coordinates.iter().enumerate().take(arity) {
            if value.is_nan() {
                continue;
            }

            counts[index] += weight;
            if Some(index) == hue {
                let angle = value.to_radians();
                dx += angle.cos() * weight;
                dy += angle.sin() * weight;
            } else {
                sums[index] += value * weight;
            }
        }
    }

    let coordinates: Vec<Float> = (0..arity)
        .map(|index| {
            if Some(index) == hue {
                let angle = (dy / counts[index]).atan2(dx / counts[index]);
                angle.to_degrees().rem_euclid(360.0)
            } else {
                sums[index].total() / counts[index]
            }
        })
        .collect();

    let alpha = alpha.total() / count;
    Color::from_space(
        space,
        &coordinates,
        if alpha > 0.99999 { 1.0 } else { alpha },
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// A Bézier curve through CIELAB.
///
/// The colors serve as control points, with the first and last color being
/// the curve's end points. Alpha is interpolated along the same curve.
///
/// ```
/// # use chromata::{Bezier, Color, ColorError};
/// let colors = [Color::new("white", None)?, Color::new("black", None)?];
/// let curve = Bezier::new(&colors)?;
/// assert_eq!(curve.at(0.5).to_string(), "#777777");
/// # Ok::<(), ColorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Bezier {
    points: Vec<[Float; 4]>,
}

impl Bezier {
    /// Create a new Bézier curve. This function fails for fewer than two
    /// colors.
    pub fn new(colors: &[Color]) -> Result<Self, ColorError> {
        if colors.len() < 2 {
            return Err(ColorError::TooFewColors {
                expected: 2,
                actual: colors.len(),
            });
        }

        let points = colors
            .iter()
            .map(|color| {
                let [l, a, b] = color.lab();
                [l, a, b, color.alpha()]
            })
            .collect();
        Ok(Self { points })
    }

    /// Compute the color at `t` along the curve.
    pub fn at(&self, t: Float) -> Color {
        let [l, a, b, alpha] = bernstein(&self.points, t);
        Color::from_space(ColorSpace::Lab, &[l, a, b], alpha)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A blend mode for layering one color on top of another.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// The top color.
    #[default]
    Normal,
    Multiply,
    /// The smaller channel.
    Darken,
    /// The larger channel.
    Lighten,
    Screen,
    /// Multiply or screen depending on the bottom color.
    Overlay,
    Burn,
    Dodge,
}

impl BlendMode {
    fn apply(&self, top: Float, bottom: Float) -> Float {
        use BlendMode::*;

        let (a, b) = (top, bottom);
        match self {
            Normal => a,
            Multiply => a * b / 255.0,
            Darken => a.min(b),
            Lighten => a.max(b),
            Screen => 255.0 * (1.0 - (1.0 - a / 255.0) * (1.0 - b / 255.0)),
            Overlay => {
                if b < 128.0 {
                    2.0 * a * b / 255.0
                } else {
                    255.0 * (1.0 - 2.0 * (1.0 - a / 255.0) * (1.0 - b / 255.0))
                }
            }
            Burn => 255.0 * (1.0 - (1.0 - b / 255.0) / (a / 255.0)),
            Dodge => {
                if a == 255.0 {
                    255.0
                } else {
                    (255.0 * (b / 255.0) / (1.0 - a / 255.0)).min(255.0)
                }
            }
        }
    }
}

impl std::str::FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use BlendMode::*;

        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Normal),
            "multiply" => Ok(Multiply),
            "darken" => Ok(Darken),
            "lighten" => Ok(Lighten),
            "screen" => Ok(Screen),
            "overlay" => Ok(Overlay),
            "burn" => Ok(Burn),
            "dodge" => Ok(Dodge),
            _ => Err(ColorError::UnknownBlendMode(s.to_string())),
        }
    }
}

/// Blend the top color onto the bottom color.
///
/// Blending operates on rounded RGB channels and ignores alpha. The result
/// is opaque.
///
/// ```
/// # use chromata::{blend, BlendMode, Color, ColorError};
/// let bottom = Color::new("red", None)?;
/// let top = Color::new("#5a9f37", None)?;
/// assert_eq!(blend(&bottom, &top, BlendMode::Multiply).to_string(), "#5a0000");
/// # Ok::<(), ColorError>(())
/// ```
pub fn blend(bottom: &Color, top: &Color, mode: BlendMode) -> Color {
    let [r1, g1, b1] = top.rgb();
    let [r2, g2, b2] = bottom.rgb();
    Color::from_rgb(
        mode.apply(r1, r2),
        mode.apply(g1, g2),
        mode.apply(b1, b2),
    )
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{average, blend, mix, mix_with, Bezier, BlendMode};
    use crate::error::ColorError;
    use crate::{assert_same_color, Color, ColorSpace, Float, Registry};
    use proptest::prelude::*;

    fn colors(inputs: &[&str]) -> Result<Vec<Color>, ColorError> {
        inputs.iter().map(|input| Color::new(*input, None)).collect()
    }

    fn color(input: &str) -> Color {
        Color::new(input, None).expect("valid color")
    }

    #[test]
    fn test_mix() -> Result<(), ColorError> {
        let white = color("white");
        let red = color("red");

        for mode in ["hsv", "hsl", "rgb"] {
            assert_same_color!(mix(&white, &red, 0.5, Some(mode))?, "#ff8080");
            assert_same_color!(mix(&red, &white, 0.5, Some(mode))?, "#ff8080");
        }

        assert_same_color!(mix(&red, &color("blue"), 0.25, Some("rgb"))?, "#bf0040");
        assert_same_color!(mix(&red, &color("blue"), 0.5, None)?, "#b400b4");
        assert_same_color!(mix(&red, &color("blue"), 0.5, Some("LRGB"))?, "#b400b4");
        assert_same_color!(mix(&white, &color("black"), 0.5, Some("hsv"))?, "#808080");
        assert_same_color!(
            mix(&color("lightyellow"), &color("navy"), 0.5, Some("hsl"))?,
            "#31ff98"
        );
        Ok(())
    }

    #[test]
    fn test_mix_endpoints() -> Result<(), ColorError> {
        let start = color("#e03c50");
        let end = color("#3278b4");
        for mode in [
            "rgb", "lrgb", "lab", "oklab", "hsl", "hsv", "hsi", "hcg", "lch", "hcl", "oklch", "num",
        ] {
            assert_same_color!(mix(&start, &end, 0.0, Some(mode))?, "#e03c50");
            assert_same_color!(mix(&start, &end, 1.0, Some(mode))?, "#3278b4");
        }
        Ok(())
    }

    #[test]
    fn test_mix_num() -> Result<(), ColorError> {
        let white = Color::new(0xffffff, None)?;
        let red = Color::new(0xff0000, None)?;
        assert_same_color!(mix(&white, &red, 0.5, Some("num"))?, "#ff7fff");
        assert_same_color!(mix(&red, &white, 0.5, Some("num"))?, "#ff7fff");

        let mixed = mix(&color("#ffffe0"), &color("#102180"), 0.5, Some("num"))?;
        assert_same_color!(mixed, "#8810b0");
        assert_eq!(mixed.num(), 8917168);

        let black = color("black");
        let white = color("white");
        assert_same_color!(mix(&black, &white, 1.5, Some("num"))?, "#ffffff");
        assert_same_color!(mix(&black, &white, -0.5, Some("num"))?, "#000000");
        assert_same_color!(mix(&white, &black, -0.5, Some("num"))?, "#ffffff");
        assert_same_color!(mix(&white, &black, 1.5, Some("num"))?, "#000000");
        Ok(())
    }

    #[test]
    fn test_mix_alpha() -> Result<(), ColorError> {
        let white = color("white").with_alpha(0.0);
        let mixed = mix(&white, &color("black"), 0.3, Some("rgb"))?;
        assert_same_color!(mixed, "#b3b3b34d");
        assert_eq!(mixed.alpha(), 0.3);

        for mode in ["lab", "oklab", "lch", "hcl", "oklch", "hsi", "hcg"] {
            let mixed = mix(&white, &color("red"), 0.5, Some(mode))?;
            assert_eq!(mixed.alpha(), 0.5, "alpha for {}", mode);
        }
        Ok(())
    }

    #[test]
    fn test_mix_errors() {
        let red = color("red");
        assert_eq!(
            mix(&red, &red, 0.5, Some("cubehelix")),
            Err(ColorError::UnknownInterpolationMode("cubehelix".to_string()))
        );

        let registry = Registry::builder().build();
        assert!(mix_with(&registry, &red, &red, 0.5, None).is_err());
    }

    #[test]
    fn test_interpolator() -> Result<(), ColorError> {
        let red = color("red");
        let blue = color("blue");
        let interpolator = red.interpolate(&blue, Some("rgb"))?;
        assert_same_color!(interpolator.at(0.25), "#bf0040");
        assert_eq!(interpolator.at(0.0), red);
        assert_eq!(interpolator.at(1.0), blue);

        let interpolator = red.interpolate(&blue, None)?;
        assert_eq!(interpolator.at(0.5), red.mix(&blue, 0.5, None)?);
        assert!(red.interpolate(&blue, Some("xyz")).is_err());
        Ok(())
    }

    #[test]
    fn test_bezier() -> Result<(), ColorError> {
        let curve = Bezier::new(&colors(&["white", "black"])?)?;
        assert_same_color!(curve.at(0.0), "#ffffff");
        assert_same_color!(curve.at(0.5), "#777777");
        assert_same_color!(curve.at(1.0), "#000000");

        let curve = Bezier::new(&[color("white"), color("black").with_alpha(0.0)])?;
        assert_same_color!(curve.at(0.5), "#77777780");

        let curve = Bezier::new(&colors(&["white", "red", "black"])?)?;
        assert_same_color!(curve.at(0.5), "#c45c44");

        let curve = Bezier::new(&colors(&["white", "yellow", "red", "black"])?)?;
        assert_same_color!(curve.at(0.25), "#ffe085");
        assert_same_color!(curve.at(0.5), "#e69735");
        assert_same_color!(curve.at(0.75), "#914213");

        let curve = Bezier::new(&[
            color("white"),
            color("yellow").with_alpha(2.0 / 3.0),
            color("red").with_alpha(1.0 / 3.0),
            color("black").with_alpha(0.0),
        ])?;
        assert_same_color!(curve.at(0.25), "#ffe085a7");
        assert_same_color!(curve.at(0.5), "#e6973580");
        assert_same_color!(curve.at(0.75), "#91421358");

        let curve = Bezier::new(&colors(&[
            "darkred",
            "orange",
            "snow",
            "lightgreen",
            "royalblue",
        ])?)?;
        assert_same_color!(curve.at(0.0), "#8b0000");
        assert_same_color!(curve.at(0.25), "#dd8d49");
        assert_same_color!(curve.at(0.5), "#dfcb98");
        assert_same_color!(curve.at(0.75), "#a7c1bd");
        assert_same_color!(curve.at(1.0), "#4169e1");

        assert_eq!(
            Bezier::new(&[color("red")]).map(|_| ()),
            Err(ColorError::TooFewColors {
                expected: 2,
                actual: 1
            })
        );
        Ok(())
    }

    #[test]
    fn test_average() -> Result<(), ColorError> {
        let three = colors(&["blue", "red", "white"])?;
        assert_same_color!(average(&three, Some("rgb"), None)?, "#aa55aa");
        assert_same_color!(average(&three, Some("lab"), None)?, "#e26daf");

        let two = colors(&["red", "blue"])?;
        assert_eq!(average(&two, None, None)?, mix(&two[0], &two[1], 0.5, None)?);

        let translucent = colors(&["rgba(0,0,0,0)", "red"])?;
        let averaged = average(&translucent, Some("rgb"), None)?;
        assert_eq!(averaged.rgba(), [128.0, 0.0, 0.0, 0.5]);
        assert_eq!(averaged.channels(), [127.5, 0.0, 0.0, 0.5]);

        let same = colors(&["#02c03a", "#02c03a"])?;
        assert_same_color!(average(&same, Some("hsl"), None)?, "#02c03a");

        let many: Vec<Color> = [
            [125.0, 133.0, 127.0],
            [131.0, 127.0, 134.0],
            [138.0, 121.0, 141.0],
            [144.0, 114.0, 147.0],
            [149.0, 107.0, 153.0],
            [165.0, 83.0, 170.0],
            [160.0, 92.0, 164.0],
            [170.0, 73.0, 175.0],
            [175.0, 62.0, 180.0],
            [155.0, 100.0, 159.0],
        ]
        .iter()
        .map(|&[r, g, b]| Color::from_rgb(r, g, b))
        .collect();
        assert_same_color!(average(&many, Some("lrgb"), None)?, "#98689c");
        Ok(())
    }

    #[test]
    fn test_average_hue() -> Result<(), ColorError> {
        let colors = [
            Color::from_space(ColorSpace::Lch, &[50.0, 50.0, 0.0], 1.0),
            Color::from_space(ColorSpace::Lch, &[50.0, 50.0, 90.0], 1.0),
        ];
        let hue = average(&colors, Some("lch"), None)?.get("lch.h")?;
        assert_eq!(hue.round(), 45.0);

        let grays = [color("black"), color("white")];
        let averaged = average(&grays, Some("hsl"), None)?;
        assert_eq!(averaged.rgb()[0], averaged.rgb()[2]);
        Ok(())
    }

    #[test]
    fn test_weighted_average() -> Result<(), ColorError> {
        let three = colors(&["blue", "red", "white"])?;
        assert_same_color!(
            average(&three, Some("rgb"), Some(&[1.0, 1.0, 2.0]))?,
            "#bf80bf"
        );
        assert_same_color!(
            average(&three, Some("lrgb"), Some(&[1.0, 3.0, 2.0]))?,
            "#e993b4"
        );
        assert_same_color!(
            average(&three, Some("hsl"), Some(&[0.25, 1.0, 0.5]))?,
            "#e56381"
        );
        Ok(())
    }

    #[test]
    fn test_average_errors() {
        assert_eq!(
            average(&[], None, None),
            Err(ColorError::TooFewColors {
                expected: 1,
                actual: 0
            })
        );
        assert_eq!(
            average(&[color("red")], Some("num"), None),
            Err(ColorError::UnknownInterpolationMode("num".to_string()))
        );
    }

    #[test]
    fn test_blend() -> Result<(), ColorError> {
        let multiply: BlendMode = "multiply".parse()?;
        assert_same_color!(blend(&color("red"), &color("#5a9f37"), multiply), "#5a0000");
        assert_same_color!(blend(&color("#33b16f"), &color("#857590"), multiply), "#1b513f");

        let bottom = color("#b83d31");
        let top = color("#0da671");
        assert_same_color!(blend(&bottom, &top, BlendMode::Screen), "#bcbb8c");
        assert_same_color!(blend(&bottom, &top, BlendMode::Overlay), "#784f2b");
        assert_same_color!(blend(&bottom, &top, BlendMode::Normal), "#0da671");
        assert_same_color!(blend(&bottom, &top, BlendMode::Darken), "#0d3d31");
        assert_same_color!(blend(&bottom, &top, BlendMode::Lighten), "#b8a671");

        let white = color("white");
        assert_same_color!(blend(&bottom, &white, BlendMode::Dodge), "#ffffff");
        assert_same_color!(blend(&white, &bottom, BlendMode::Burn), "#ffffff");
        assert!(blend(&bottom, &top.with_alpha(0.5), multiply).alpha() == 1.0);

        assert_eq!(
            "glow".parse::<BlendMode>(),
            Err(ColorError::UnknownBlendMode("glow".to_string()))
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_channels_in_range(
            r in -500.0 as Float..800.0,
            g in -500.0 as Float..800.0,
            b in -500.0 as Float..800.0,
            a in -1.0 as Float..2.0,
        ) {
            let color = Color::from_rgba(r, g, b, a);
            for channel in &color.channels()[..3] {
                prop_assert!((0.0..=255.0).contains(channel));
            }
            prop_assert!((0.0..=1.0).contains(&color.alpha()));
            prop_assert_eq!(color.unclipped(), [r, g, b, a]);
        }

        #[test]
        fn prop_mixed_alpha_is_linear(
            a1 in 0.0 as Float..=1.0,
            a2 in 0.0 as Float..=1.0,
            fraction in 0.0 as Float..=1.0,
            mode in prop::sample::select(vec!["rgb", "lrgb", "lab", "hsl", "oklch", "num"]),
        ) {
            let color1 = Color::from_rgba(200.0, 30.0, 90.0, a1);
            let color2 = Color::from_rgba(10.0, 180.0, 40.0, a2);
            let mixed = mix(&color1, &color2, fraction, Some(mode)).expect("registered mode");
            prop_assert!((mixed.alpha() - (a1 + fraction * (a2 - a1))).abs() < 1e-6);
        }

        #[test]
        fn prop_mix_endpoints(
            r1 in 0.0 as Float..=255.0,
            g1 in 0.0 as Float..=255.0,
            b1 in 0.0 as Float..=255.0,
            r2 in 0.0 as Float..=255.0,
            g2 in 0.0 as Float..=255.0,
            b2 in 0.0 as Float..=255.0,
        ) {
            let color1 = Color::from_rgb(r1, g1, b1);
            let color2 = Color::from_rgb(r2, g2, b2);
            for mode in ["rgb", "lrgb"] {
                let start = mix(&color1, &color2, 0.0, Some(mode)).expect("registered mode");
                let end = mix(&color1, &color2, 1.0, Some(mode)).expect("registered mode");
                prop_assert_eq!(start.rgb(), color1.rgb());
                prop_assert_eq!(end.rgb(), color2.rgb());
            }
        }
    }
}
