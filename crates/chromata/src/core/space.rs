#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorError;

/// The enumeration of supported color spaces.
///
/// Every color is stored as sRGB with channels in `0..=255` plus alpha. The
/// color spaces enumerated here are alternative coordinate systems, which
/// [`Color::to`](crate::Color::to) converts to and
/// [`Color::from_space`](crate::Color::from_space) converts from.
///
/// # Cylindrical RGB
///
/// HSL, HSV, HSI, and HCG are cylindrical transforms of sRGB. Their hue is in
/// degrees and their other two coordinates have unit range. For achromatic
/// colors, i.e., grays, the hue is not-a-number, which marks it as undefined
/// rather than erroneous.
///
/// # CIELAB and Oklab
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) and
/// [Oklab](https://bottosson.github.io/posts/oklab/) are perceptually
/// motivated color spaces with lightness L and the opponent axes a and b. LCH
/// and Oklch are their polar forms with chroma C and hue h, and HCL is LCH with
/// its coordinates reversed. Lightness ranges `0..=100` for CIELAB but `0..=1`
/// for Oklab.
///
/// # Channel Names
///
/// Each color space names its channels with single letters, as returned by
/// [`ColorSpace::channels`]. Oklab and Oklch reuse the letters of their
/// CIELAB counterparts, so `oklab.l` and `lab.l` both name lightness.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "chromata")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hsv,
    Hsi,
    Hcg,
    Cmyk,
    Lab,
    Lch,
    Hcl,
    Oklab,
    Oklch,
}

impl ColorSpace {
    /// All color spaces in registration order.
    pub const ALL: [ColorSpace; 11] = [
        Self::Rgb,
        Self::Hsl,
        Self::Hsv,
        Self::Hsi,
        Self::Hcg,
        Self::Cmyk,
        Self::Lab,
        Self::Lch,
        Self::Hcl,
        Self::Oklab,
        Self::Oklch,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Get the format name of this color space.
    pub const fn name(&self) -> &'static str {
        use ColorSpace::*;

        match *self {
            Rgb => "rgb",
            Hsl => "hsl",
            Hsv => "hsv",
            Hsi => "hsi",
            Hcg => "hcg",
            Cmyk => "cmyk",
            Lab => "lab",
            Lch => "lch",
            Hcl => "hcl",
            Oklab => "oklab",
            Oklch => "oklch",
        }
    }

    /// Get the channel letters of this color space.
    ///
    /// ```
    /// # use chromata::ColorSpace;
    /// assert_eq!(ColorSpace::Hsl.channels(), "hsl");
    /// assert_eq!(ColorSpace::Oklch.channels(), "lch");
    /// ```
    pub const fn channels(&self) -> &'static str {
        use ColorSpace::*;

        match *self {
            Oklab => "lab",
            Oklch => "lch",
            _ => self.name(),
        }
    }

    /// Get the number of coordinates, which is four for CMYK and three
    /// otherwise.
    pub const fn arity(&self) -> usize {
        match *self {
            Self::Cmyk => 4,
            _ => 3,
        }
    }

    /// Get the index of the hue coordinate, if this color space has one.
    pub const fn hue_index(&self) -> Option<usize> {
        use ColorSpace::*;

        match *self {
            Hsl | Hsv | Hsi | Hcg | Hcl => Some(0),
            Lch | Oklch => Some(2),
            Rgb | Cmyk | Lab | Oklab => None,
        }
    }

    /// Determine whether this color space is polar, i.e., has a hue.
    pub const fn is_polar(&self) -> bool {
        self.hue_index().is_some()
    }

    /// Determine the index of the channel with the given single-letter name.
    pub fn channel_index(&self, channel: &str) -> Option<usize> {
        if channel.chars().count() != 1 {
            return None;
        }
        self.channels().find(channel)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorError;

    /// Parse the color space name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| ColorError::UnknownFormat(s.to_string()))
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::ColorSpace;
    use std::str::FromStr;

    #[test]
    fn test_channels() {
        assert_eq!(ColorSpace::Cmyk.arity(), 4);
        assert_eq!(ColorSpace::Oklab.arity(), 3);
        assert_eq!(ColorSpace::Oklab.channel_index("l"), Some(0));
        assert_eq!(ColorSpace::Oklch.channel_index("h"), Some(2));
        assert_eq!(ColorSpace::Hsl.channel_index("l"), Some(2));
        assert_eq!(ColorSpace::Hcl.channel_index("h"), Some(0));
        assert_eq!(ColorSpace::Rgb.channel_index("x"), None);
        assert_eq!(ColorSpace::Rgb.channel_index("rg"), None);
        assert_eq!(ColorSpace::Oklab.channel_index("o"), None);
    }

    #[test]
    fn test_hue_index() {
        for space in ColorSpace::ALL {
            let expected = match space.name() {
                "hsl" | "hsv" | "hsi" | "hcg" | "hcl" => Some(0),
                "lch" | "oklch" => Some(2),
                _ => None,
            };
            assert_eq!(space.hue_index(), expected, "hue index of {}", space);
        }
    }

    #[test]
    fn test_parse() {
        for space in ColorSpace::ALL {
            assert_eq!(ColorSpace::from_str(space.name()).ok(), Some(space));
        }
        assert_eq!(ColorSpace::from_str(" OKLch ").ok(), Some(ColorSpace::Oklch));
        assert!(ColorSpace::from_str("xyz").is_err());
    }
}
