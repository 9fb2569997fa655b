//! The format registry and autodetector.
//!
//! A [`Registry`] maps format names to decoders, holds the priority-ordered
//! autodetection rules for inputs without explicit format, and maps mixing
//! mode names to mixers. [`Registry::standard`] assembles every format and
//! mode this crate supports, and [`Registry::global`] lazily creates one such
//! registry per process. Custom registries are assembled with
//! [`Registry::builder`] and are immutable once built.

use std::sync::LazyLock;

use crate::core::{
    android_to_rgba, is_css, is_named, named_to_rgb, num_to_rgb, parse_css, parse_hex,
    temperature_to_rgb, to_rgb, ColorSpace,
};
use crate::error::ColorError;
use crate::input::{extract_mode, scalar, unpack, ColorInput};
use crate::{mixing, Color, Float};

/// A function decoding raw input into sRGB channels and alpha.
///
/// The channels need not be in range yet; [`Color`] clamps them. A decoder
/// receives the registry it was looked up in, so that it can consult other
/// formats.
pub type Decoder = fn(&Registry, &ColorInput) -> Result<[Float; 4], ColorError>;

/// A function recognizing the format of raw input.
pub type Detector = fn(&ColorInput) -> Option<&'static str>;

/// A function mixing two colors by the given fraction.
///
/// Mixers need not produce meaningful alpha, since [`mix`](crate::mix)
/// always overwrites it.
pub type Mixer = fn(&Color, &Color, Float) -> Color;

/// A builder of registries.
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    formats: Vec<(&'static str, Decoder)>,
    autodetect: Vec<(u8, Detector)>,
    mixers: Vec<(&'static str, Mixer)>,
}

impl RegistryBuilder {
    /// Register the decoder for the format with the given name. A later
    /// registration for the same name replaces an earlier one.
    #[must_use]
    pub fn register_format(mut self, name: &'static str, decoder: Decoder) -> Self {
        if let Some(entry) = self.formats.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = decoder;
        } else {
            self.formats.push((name, decoder));
        }
        self
    }

    /// Register an autodetection rule with the given priority. Rules with
    /// higher priority run first. Rules with the same priority run in
    /// registration order.
    #[must_use]
    pub fn register_autodetect(mut self, priority: u8, detector: Detector) -> Self {
        self.autodetect.push((priority, detector));
        self
    }

    /// Register the mixer for the mode with the given name. The first mode
    /// registered becomes the default mode.
    #[must_use]
    pub fn register_mixer(mut self, name: &'static str, mixer: Mixer) -> Self {
        if let Some(entry) = self.mixers.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = mixer;
        } else {
            self.mixers.push((name, mixer));
        }
        self
    }

    /// Build the registry.
    pub fn build(mut self) -> Registry {
        // Stable, so that ties keep registration order.
        self.autodetect
            .sort_by(|(p1, _), (p2, _)| p2.cmp(p1));

        log::debug!(
            "built color registry with {} formats, {} autodetect rules, {} mixers",
            self.formats.len(),
            self.autodetect.len(),
            self.mixers.len()
        );

        Registry {
            formats: self.formats,
            autodetect: self.autodetect,
            mixers: self.mixers,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A registry of color formats, autodetection rules, and mixing modes.
#[derive(Clone, Debug)]
pub struct Registry {
    formats: Vec<(&'static str, Decoder)>,
    autodetect: Vec<(u8, Detector)>,
    mixers: Vec<(&'static str, Mixer)>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::standard);

impl Registry {
    /// Create a new builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Create a registry with all formats, autodetection rules, and mixing
    /// modes supported by this crate.
    pub fn standard() -> Self {
        Self::builder()
            // Formats
            .register_format("rgb", decode_rgb)
            .register_format("gl", decode_gl)
            .register_format("hex", decode_hex)
            .register_format("css", decode_css)
            .register_format("named", decode_named)
            .register_format("num", decode_num)
            .register_format("android", decode_android)
            .register_format("temperature", decode_temperature)
            .register_format("temp", decode_temperature)
            .register_format("kelvin", decode_temperature)
            .register_format("hsl", decode_hsl)
            .register_format("hsv", decode_hsv)
            .register_format("hsi", decode_hsi)
            .register_format("hcg", decode_hcg)
            .register_format("cmyk", decode_cmyk)
            .register_format("lab", decode_lab)
            .register_format("lch", decode_lch)
            .register_format("hcl", decode_hcl)
            .register_format("oklab", decode_oklab)
            .register_format("oklch", decode_oklch)
            // Autodetection
            .register_autodetect(5, detect_css)
            .register_autodetect(5, detect_named)
            .register_autodetect(5, detect_num)
            .register_autodetect(5, detect_android)
            .register_autodetect(4, detect_hex)
            .register_autodetect(3, detect_rgb)
            .register_autodetect(3, detect_oklab)
            .register_autodetect(3, detect_oklch)
            .register_autodetect(2, detect_cmyk)
            .register_autodetect(2, detect_hsi)
            .register_autodetect(2, detect_hsl)
            .register_autodetect(2, detect_hsv)
            .register_autodetect(2, detect_lab)
            .register_autodetect(2, detect_lch)
            .register_autodetect(2, detect_hcl)
            .register_autodetect(1, detect_hcg)
            // Mixing
            .register_mixer("lrgb", mixing::mix_lrgb)
            .register_mixer("rgb", mixing::mix_rgb)
            .register_mixer("lab", mixing::mix_lab)
            .register_mixer("oklab", mixing::mix_oklab)
            .register_mixer("hsl", mixing::mix_hsl)
            .register_mixer("hsv", mixing::mix_hsv)
            .register_mixer("hsi", mixing::mix_hsi)
            .register_mixer("hcg", mixing::mix_hcg)
            .register_mixer("lch", mixing::mix_lch)
            .register_mixer("hcl", mixing::mix_lch)
            .register_mixer("oklch", mixing::mix_oklch)
            .register_mixer("num", mixing::mix_num)
            .build()
    }

    /// Get the process-wide standard registry.
    ///
    /// The registry is created on first access.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Determine whether a format with the given name has been registered.
    pub fn has_format(&self, name: &str) -> bool {
        self.decoder(name).is_some()
    }

    /// Get the names of all registered formats in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.iter().map(|(name, _)| *name)
    }

    /// Get the default mixing mode, which is the first mode registered.
    pub fn default_mode(&self) -> Option<&'static str> {
        self.mixers.first().map(|(name, _)| *name)
    }

    /// Look up the mixer for the given mode.
    pub fn mixer(&self, mode: &str) -> Result<Mixer, ColorError> {
        let normalized = mode.trim().to_ascii_lowercase();
        self.mixers
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, mixer)| *mixer)
            .ok_or_else(|| ColorError::UnknownInterpolationMode(mode.to_string()))
    }

    fn decoder(&self, name: &str) -> Option<Decoder> {
        self.formats
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, decoder)| *decoder)
    }

    /// Detect the format of the given input.
    pub fn detect(&self, input: &ColorInput) -> Option<&'static str> {
        let format = self
            .autodetect
            .iter()
            .find_map(|(_, detector)| detector(input));
        log::trace!("autodetected format {:?} for {}", format, input.describe());
        format
    }

    /// Resolve the input to its format and channels.
    ///
    /// If the mode is given, this method decodes the input with that format.
    /// Otherwise, it autodetects the format. An existing color resolves to
    /// format `rgb` and its own channels.
    pub fn resolve(
        &self,
        input: &ColorInput,
        mode: Option<&str>,
    ) -> Result<(&'static str, [Float; 4]), ColorError> {
        if let ColorInput::Color(color) = input {
            return Ok(("rgb", color.channels()));
        }

        let (format, decoder) = match extract_mode(mode) {
            Some(name) => self
                .formats
                .iter()
                .find(|(n, _)| *n == name)
                .copied()
                .ok_or(ColorError::UnknownFormat(name))?,
            None => {
                let format = self
                    .detect(input)
                    .ok_or_else(|| ColorError::UnknownFormat(input.describe()))?;
                let decoder = self
                    .decoder(format)
                    .ok_or_else(|| ColorError::UnknownFormat(format.to_string()))?;
                (format, decoder)
            }
        };

        Ok((format, decoder(self, input)?))
    }

    /// Decode the input into a color.
    ///
    /// An existing color is returned as is, independent of mode.
    pub fn decode(&self, input: &ColorInput, mode: Option<&str>) -> Result<Color, ColorError> {
        if let ColorInput::Color(color) = input {
            return Ok(color.clone());
        }

        let (_, [r, g, b, a]) = self.resolve(input, mode)?;
        Ok(Color::from_rgba(r, g, b, a))
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn decode_error(format: &'static str, input: &ColorInput) -> ColorError {
    ColorError::DecodeError {
        format,
        input: input.describe(),
    }
}

/// Decode coordinates in a color space, optionally followed by alpha.
fn decode_space(
    space: ColorSpace,
    key_order: &str,
    input: &ColorInput,
) -> Result<[Float; 4], ColorError> {
    let arity = space.arity();
    let values = unpack(input, key_order)
        .filter(|values| values.len() >= arity)
        .ok_or_else(|| decode_error(space.name(), input))?;

    let [r, g, b] = to_rgb(space, &values);
    let alpha = values.get(arity).copied().unwrap_or(1.0);
    Ok([r, g, b, alpha])
}

macro_rules! space_format {
    ($decoder:ident, $detector:ident, $space:ident, $keys:literal, $detect_keys:literal) => {
        fn $decoder(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
            decode_space(ColorSpace::$space, $keys, input)
        }

        fn $detector(input: &ColorInput) -> Option<&'static str> {
            unpack(input, $detect_keys)
                .filter(|values| values.len() == ColorSpace::$space.arity())
                .map(|_| ColorSpace::$space.name())
        }
    };
}

space_format!(decode_hsl, detect_hsl, Hsl, "hsla", "hsl");
space_format!(decode_hsv, detect_hsv, Hsv, "hsva", "hsv");
space_format!(decode_hsi, detect_hsi, Hsi, "hsia", "hsi");
space_format!(decode_hcg, detect_hcg, Hcg, "hcga", "hcg");
space_format!(decode_cmyk, detect_cmyk, Cmyk, "cmyka", "cmyk");
space_format!(decode_lab, detect_lab, Lab, "laba", "lab");
space_format!(decode_lch, detect_lch, Lch, "lcha", "lch");
space_format!(decode_hcl, detect_hcl, Hcl, "hcla", "hcl");
space_format!(decode_oklab, detect_oklab, Oklab, "laba", "lab");
space_format!(decode_oklch, detect_oklch, Oklch, "lcha", "lch");

fn decode_rgb(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    decode_space(ColorSpace::Rgb, "rgba", input)
}

fn detect_rgb(input: &ColorInput) -> Option<&'static str> {
    let values = unpack(input, "rgba")?;
    match values.len() {
        3 => Some("rgb"),
        4 if (0.0..=1.0).contains(&values[3]) => Some("rgb"),
        _ => None,
    }
}

fn decode_gl(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    let values = unpack(input, "rgba")
        .filter(|values| values.len() >= 3)
        .ok_or_else(|| decode_error("gl", input))?;

    Ok([
        values[0] * 255.0,
        values[1] * 255.0,
        values[2] * 255.0,
        values.get(3).copied().unwrap_or(1.0),
    ])
}

fn decode_hex(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    match input {
        ColorInput::Text(text) => parse_hex(text),
        _ => Err(decode_error("hex", input)),
    }
}

fn detect_hex(input: &ColorInput) -> Option<&'static str> {
    match input {
        ColorInput::Text(text) if (3..=9).contains(&text.chars().count()) => Some("hex"),
        _ => None,
    }
}

fn decode_css(registry: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    let ColorInput::Text(text) = input else {
        return Err(decode_error("css", input));
    };

    let text = text.trim().to_ascii_lowercase();
    if registry.has_format("named") {
        if let Some([r, g, b]) = named_to_rgb(&text) {
            return Ok([r, g, b, 1.0]);
        }
    }
    parse_css(&text)
}

fn detect_css(input: &ColorInput) -> Option<&'static str> {
    match input {
        ColorInput::Text(text) if is_css(&text.trim().to_ascii_lowercase()) => Some("css"),
        _ => None,
    }
}

fn decode_named(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    match input {
        ColorInput::Text(text) => named_to_rgb(text)
            .map(|[r, g, b]| [r, g, b, 1.0])
            .ok_or_else(|| decode_error("named", input)),
        _ => Err(decode_error("named", input)),
    }
}

fn detect_named(input: &ColorInput) -> Option<&'static str> {
    match input {
        ColorInput::Text(text) if is_named(text) => Some("named"),
        _ => None,
    }
}

fn decode_num(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    scalar(input)
        .filter(|n| n.fract() == 0.0)
        .and_then(|n| num_to_rgb(n as i64))
        .map(|[r, g, b]| [r, g, b, 1.0])
        .ok_or_else(|| decode_error("num", input))
}

fn detect_num(input: &ColorInput) -> Option<&'static str> {
    match input {
        ColorInput::Integer(n) if (0..=0xff_ffff).contains(n) => Some("num"),
        _ => None,
    }
}

fn decode_android(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    match input {
        ColorInput::Integer(n) => Ok(android_to_rgba(*n)),
        _ => Err(decode_error("android", input)),
    }
}

fn detect_android(input: &ColorInput) -> Option<&'static str> {
    match input {
        ColorInput::Integer(_) => Some("android"),
        _ => None,
    }
}

fn decode_temperature(_: &Registry, input: &ColorInput) -> Result<[Float; 4], ColorError> {
    let [r, g, b] = scalar(input)
        .map(temperature_to_rgb)
        .ok_or_else(|| decode_error("temperature", input))?;
    Ok([r, g, b, 1.0])
}

#[cfg(test)]
mod test {
    use super::Registry;
    use crate::error::ColorError;
    use crate::{Color, ColorInput};

    fn detect<I: Into<ColorInput>>(input: I) -> Option<&'static str> {
        Registry::global().detect(&input.into())
    }

    #[test]
    fn test_autodetect() {
        assert_eq!(detect("rgb(255,0,0)"), Some("css"));
        assert_eq!(detect(" RGBA(255, 0, 0, .5) "), Some("css"));
        assert_eq!(detect("red"), Some("named"));
        assert_eq!(detect("RED"), Some("named"));
        assert_eq!(detect(0xff0000), Some("num"));
        assert_eq!(detect(-1), Some("android"));
        assert_eq!(detect(0x1ff0000_i64), Some("android"));
        assert_eq!(detect("#ff0000"), Some("hex"));
        assert_eq!(detect("f00"), Some("hex"));
        assert_eq!(detect("bread"), Some("hex"));
        assert_eq!(detect("tomatoes and more"), None);
        assert_eq!(detect([255.0, 0.0, 0.0]), Some("rgb"));
        assert_eq!(detect([255.0, 0.0, 0.0, 0.5]), Some("rgb"));
        assert_eq!(detect([1.0, 0.0, 0.0, 0.0]), Some("rgb"));
        assert_eq!(detect([0.0, 1.0, 1.0, 2.0]), Some("cmyk"));
        assert_eq!(detect([1.0, 2.0]), None);
    }

    #[test]
    fn test_autodetect_labeled() {
        let hsl = ColorInput::labeled([('h', 120.0), ('s', 1.0), ('l', 0.5)]);
        assert_eq!(Registry::global().detect(&hsl), Some("hsl"));

        let hsv = ColorInput::labeled([('h', 120.0), ('s', 1.0), ('v', 0.5)]);
        assert_eq!(Registry::global().detect(&hsv), Some("hsv"));

        let rgb = ColorInput::labeled([('r', 255.0), ('g', 0.0), ('b', 0.0)]);
        assert_eq!(Registry::global().detect(&rgb), Some("rgb"));

        // Oklab takes precedence over CIELAB for the same letters.
        let lab = ColorInput::labeled([('l', 0.5), ('a', 0.1), ('b', 0.1)]);
        assert_eq!(Registry::global().detect(&lab), Some("oklab"));

        let hcg = ColorInput::labeled([('h', 120.0), ('c', 1.0), ('g', 0.5)]);
        assert_eq!(Registry::global().detect(&hcg), Some("hcg"));
    }

    #[test]
    fn test_resolve() -> Result<(), ColorError> {
        let registry = Registry::global();

        let (format, rgba) = registry.resolve(&"#ff000080".into(), None)?;
        assert_eq!(format, "hex");
        assert_eq!(rgba, [255.0, 0.0, 0.0, 0.5]);

        let (format, rgba) = registry.resolve(&(0.0, 1.0, 0.5, 0.25).into(), Some("HSL"))?;
        assert_eq!(format, "hsl");
        assert_eq!(rgba, [255.0, 0.0, 0.0, 0.25]);

        let (format, rgba) = registry.resolve(&(0.0, 1.0, 1.0, 0.0, 0.25).into(), Some("cmyk"))?;
        assert_eq!(format, "cmyk");
        assert_eq!(rgba, [255.0, 0.0, 0.0, 0.25]);

        let (_, rgba) = registry.resolve(&[1.0, 0.5, 0.0].into(), Some("gl"))?;
        assert_eq!(rgba, [255.0, 127.5, 0.0, 1.0]);

        let (_, rgba) = registry.resolve(&6500.into(), Some("kelvin"))?;
        assert_eq!(rgba[0], 255.0);

        assert_eq!(
            registry.resolve(&"red".into(), Some("xyz")),
            Err(ColorError::UnknownFormat("xyz".to_string()))
        );
        assert_eq!(
            registry.resolve(&"bread".into(), None),
            Err(ColorError::DecodeError {
                format: "hex",
                input: "bread".to_string()
            })
        );
        assert_eq!(
            registry.resolve(&"bread".into(), Some("named")),
            Err(ColorError::DecodeError {
                format: "named",
                input: "bread".to_string()
            })
        );
        assert_eq!(
            registry.resolve(&0x1000000.into(), Some("num")),
            Err(ColorError::DecodeError {
                format: "num",
                input: "16777216".to_string()
            })
        );
        assert!(matches!(
            registry.resolve(&"tomatoes and more".into(), None),
            Err(ColorError::UnknownFormat(_))
        ));

        Ok(())
    }

    #[test]
    fn test_identity() -> Result<(), ColorError> {
        let color = Color::from_rgba(300.0, 0.0, 0.0, 1.0);
        let same = Registry::global().decode(&(&color).into(), Some("hsl"))?;
        assert_eq!(same, color);
        assert!(same.is_clipped());
        Ok(())
    }

    #[test]
    fn test_custom_registry() -> Result<(), ColorError> {
        fn decode_gray(
            _: &Registry,
            input: &ColorInput,
        ) -> Result<[crate::Float; 4], ColorError> {
            match input {
                ColorInput::Integer(n) => Ok([*n as _, *n as _, *n as _, 1.0]),
                _ => Err(ColorError::UnknownFormat(input.describe())),
            }
        }

        fn detect_gray(input: &ColorInput) -> Option<&'static str> {
            matches!(input, ColorInput::Integer(_)).then_some("gray")
        }

        let registry = Registry::builder()
            .register_format("gray", decode_gray)
            .register_autodetect(1, detect_gray)
            .register_mixer("rgb", crate::mixing::mix_rgb)
            .build();

        assert!(registry.has_format("gray"));
        assert!(!registry.has_format("hex"));
        assert_eq!(registry.formats().collect::<Vec<_>>(), vec!["gray"]);
        assert_eq!(registry.default_mode(), Some("rgb"));
        assert!(registry.mixer("lrgb").is_err());

        let color = Color::with_registry(&registry, 128, None)?;
        assert_eq!(color.rgb(), [128.0, 128.0, 128.0]);
        assert!(Color::with_registry(&registry, "red", None).is_err());
        Ok(())
    }

    #[test]
    fn test_standard() {
        let registry = Registry::standard();
        assert_eq!(registry.default_mode(), Some("lrgb"));
        assert!(registry.has_format("temp"));
        assert!(registry.mixer("HCL").is_ok());
        assert_eq!(
            registry.mixer("xyz").err(),
            Some(ColorError::UnknownInterpolationMode("xyz".to_string()))
        );
    }
}
