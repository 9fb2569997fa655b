use std::sync::LazyLock;

use regex::Regex;

use super::{hsl_to_rgb, limit, rgb_to_hsl, round_to};
use crate::error::ColorError;
use crate::Float;

/// The choice of channel layout for hexadecimal notation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexMode {
    /// Include alpha only if the color is translucent.
    #[default]
    Auto,
    /// Format `#rrggbb`, dropping alpha.
    Rgb,
    /// Format `#rrggbbaa`.
    Rgba,
    /// Format `#aarrggbb`.
    Argb,
}

impl std::str::FromStr for HexMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "argb" => Ok(Self::Argb),
            _ => Err(ColorError::UnknownFormat(s.to_string())),
        }
    }
}

/// The choice of CSS color function.
///
/// The `rgb()` and `hsl()` functions switch to `rgba()` and `hsla()` for
/// translucent colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CssMode {
    #[default]
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl std::str::FromStr for CssMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "hsl" => Ok(Self::Hsl),
            "hsla" => Ok(Self::Hsla),
            _ => Err(ColorError::UnknownFormat(s.to_string())),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in hashed hexadecimal format.
///
/// The hash is optional and the string may have 3, 4, 6, or 8 hexadecimal
/// digits. Short forms double each digit, and the optional fourth coordinate
/// is alpha, rounded to two decimals.
pub(crate) fn parse_hex(s: &str) -> Result<[Float; 4], ColorError> {
    let error = || ColorError::DecodeError {
        format: "hex",
        input: s.to_string(),
    };

    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(error());
    }

    let factor = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(error()),
    };

    let parse_coordinate = |index: usize| -> Result<u8, ColorError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or_else(error)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| error())?;
        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let r = parse_coordinate(0)?;
    let g = parse_coordinate(1)?;
    let b = parse_coordinate(2)?;
    let a = if digits.len() % 3 == 0 {
        1.0
    } else {
        round_to(parse_coordinate(3)? as Float / 255.0, 2)
    };

    Ok([r as Float, g as Float, b as Float, a])
}

/// Format the channels in hashed hexadecimal format.
pub(crate) fn format_hex(rgba: &[Float; 4], mode: HexMode) -> String {
    let [r, g, b, a] = *rgba;
    let [r, g, b] = [r, g, b].map(|c| limit(c.round(), 0.0, 255.0) as u8);
    let alpha = limit((a * 255.0).round(), 0.0, 255.0) as u8;

    let mode = match mode {
        HexMode::Auto if a < 1.0 => HexMode::Rgba,
        HexMode::Auto => HexMode::Rgb,
        _ => mode,
    };

    match mode {
        HexMode::Rgba => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha),
        HexMode::Argb => format!("#{:02x}{:02x}{:02x}{:02x}", alpha, r, g, b),
        _ => format!("#{:02x}{:02x}{:02x}", r, g, b),
    }
}

// --------------------------------------------------------------------------------------------------------------------

const INTEGER: &str = r"(-?\d+)";
const DECIMAL: &str = r"(-?\d+(?:\.\d+)?)";
const ALPHA: &str = r"([01]|[01]?\.\d+)";

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).expect("CSS color pattern should be a valid regular expression")
}

static RE_RGB: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^rgb\(\s*{0},\s*{0}\s*,\s*{0}\s*\)$",
        INTEGER
    ))
});

static RE_RGBA: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^rgba\(\s*{0},\s*{0}\s*,\s*{0}\s*,\s*{1}\)$",
        INTEGER, ALPHA
    ))
});

static RE_RGB_PCT: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^rgb\(\s*{0}%,\s*{0}%\s*,\s*{0}%\s*\)$",
        DECIMAL
    ))
});

static RE_RGBA_PCT: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^rgba\(\s*{0}%,\s*{0}%\s*,\s*{0}%\s*,\s*{1}\)$",
        DECIMAL, ALPHA
    ))
});

static RE_HSL: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^hsl\(\s*{0},\s*{0}%\s*,\s*{0}%\s*\)$",
        DECIMAL
    ))
});

static RE_HSLA: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^hsla\(\s*{0},\s*{0}%\s*,\s*{0}%\s*,\s*{1}\)$",
        DECIMAL, ALPHA
    ))
});

/// Match the regular expression and parse all capture groups as numbers.
fn numbers(re: &Regex, s: &str) -> Option<Vec<Float>> {
    let captures = re.captures(s)?;
    captures
        .iter()
        .skip(1)
        .map(|m| m.and_then(|m| m.as_str().parse::<Float>().ok()))
        .collect()
}

/// Determine whether the string looks like one of the CSS color functions.
/// The string should be normalized to lower case without surrounding
/// whitespace.
pub(crate) fn is_css(s: &str) -> bool {
    [&RE_RGB, &RE_RGBA, &RE_RGB_PCT, &RE_RGBA_PCT, &RE_HSL, &RE_HSLA]
        .iter()
        .any(|re| re.is_match(s))
}

/// Parse a CSS color function.
///
/// This function recognizes the legacy, comma-separated `rgb()`, `rgba()`,
/// `hsl()`, and `hsla()` notations, with RGB channels as integers or
/// percentages. The string should be normalized to lower case without
/// surrounding whitespace.
pub(crate) fn parse_css(s: &str) -> Result<[Float; 4], ColorError> {
    let percent = |p: Float| (p * 2.55).round();

    if let Some(n) = numbers(&RE_RGB, s) {
        return Ok([n[0], n[1], n[2], 1.0]);
    }
    if let Some(n) = numbers(&RE_RGBA, s) {
        return Ok([n[0], n[1], n[2], n[3]]);
    }
    if let Some(n) = numbers(&RE_RGB_PCT, s) {
        return Ok([percent(n[0]), percent(n[1]), percent(n[2]), 1.0]);
    }
    if let Some(n) = numbers(&RE_RGBA_PCT, s) {
        return Ok([percent(n[0]), percent(n[1]), percent(n[2]), n[3]]);
    }
    if let Some(n) = numbers(&RE_HSL, s) {
        let [r, g, b] = hsl_to_rgb(&[n[0], n[1] * 0.01, n[2] * 0.01]);
        return Ok([r, g, b, 1.0]);
    }
    if let Some(n) = numbers(&RE_HSLA, s) {
        let [r, g, b] = hsl_to_rgb(&[n[0], n[1] * 0.01, n[2] * 0.01]);
        return Ok([r, g, b, n[3]]);
    }

    Err(ColorError::DecodeError {
        format: "css",
        input: s.to_string(),
    })
}

/// Format the channels as a CSS color function without spaces.
pub(crate) fn format_css(rgba: &[Float; 4], mode: CssMode) -> String {
    let [r, g, b, a] = *rgba;

    match mode {
        CssMode::Hsl | CssMode::Hsla => {
            let [h, s, l] = rgb_to_hsl(&[r, g, b]);
            let h = round_to(if h.is_nan() { 0.0 } else { h }, 2);
            let s = round_to(s * 100.0, 2);
            let l = round_to(l * 100.0, 2);

            if mode == CssMode::Hsla || a < 1.0 {
                format!("hsla({},{}%,{}%,{})", h, s, l, a)
            } else {
                format!("hsl({},{}%,{}%)", h, s, l)
            }
        }
        CssMode::Rgb | CssMode::Rgba => {
            let [r, g, b] = [r, g, b].map(|c| c.round());
            if mode == CssMode::Rgba || a < 1.0 {
                format!("rgba({},{},{},{})", r, g, b, a)
            } else {
                format!("rgb({},{},{})", r, g, b)
            }
        }
    }
}
