//! Raw inputs to color construction.
//!
//! A color can be created from a surprising variety of inputs: three or four
//! loose numbers, an array, a map from channel letters to numbers, a string,
//! an integer, or another color. [`ColorInput`] captures all of them as one
//! tagged union, so that the format registry can dispatch on the tag instead
//! of inspecting values at runtime.

use std::collections::BTreeMap;

use crate::{Color, Float};

/// The raw input to color construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput {
    /// Three or more loose numbers, e.g., the separate arguments `255, 0, 0`.
    Positional(Vec<Float>),
    /// A single array of numbers.
    Tuple(Vec<Float>),
    /// A map from single-letter channel names to numbers, e.g., `{h: 120, s:
    /// 1, l: 0.5}`.
    Labeled(BTreeMap<char, Float>),
    /// A string, e.g., a hex color, CSS color, or color name.
    Text(String),
    /// A packed integer.
    Integer(i64),
    /// An existing color.
    Color(Color),
}

impl ColorInput {
    /// Create labeled input from pairs of channel letters and numbers.
    ///
    /// ```
    /// # use chromata::ColorInput;
    /// let input = ColorInput::labeled([('h', 120.0), ('s', 1.0), ('l', 0.5)]);
    /// assert!(matches!(input, ColorInput::Labeled(_)));
    /// ```
    pub fn labeled<I: IntoIterator<Item = (char, Float)>>(pairs: I) -> Self {
        Self::Labeled(pairs.into_iter().collect())
    }

    /// Render this input for error messages.
    ///
    /// Strings render verbatim, all other inputs with their debug
    /// representation.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(number) => number.to_string(),
            Self::Positional(values) | Self::Tuple(values) => format!("{:?}", values),
            Self::Labeled(fields) => format!("{:?}", fields),
            Self::Color(color) => color.to_string(),
        }
    }
}

/// Extract numbers from the input.
///
/// Positional input with at least three numbers and tuple input yield their
/// numbers unchanged. Labeled input yields the numbers for the channels named
/// by `key_order`, in that order and skipping absent channels. Everything
/// else yields `None`.
///
/// ```
/// # use chromata::{unpack, ColorInput};
/// let input = ColorInput::labeled([('b', 3.0), ('r', 1.0), ('g', 2.0)]);
/// assert_eq!(unpack(&input, "rgba"), Some(vec![1.0, 2.0, 3.0]));
/// ```
pub fn unpack(input: &ColorInput, key_order: &str) -> Option<Vec<Float>> {
    match input {
        ColorInput::Positional(values) if values.len() >= 3 => Some(values.clone()),
        ColorInput::Tuple(values) => Some(values.clone()),
        ColorInput::Labeled(fields) => Some(
            key_order
                .chars()
                .filter_map(|key| fields.get(&key).copied())
                .collect(),
        ),
        _ => None,
    }
}

/// Extract a single number from the input.
///
/// Integers and one-element arrays both count.
pub(crate) fn scalar(input: &ColorInput) -> Option<Float> {
    match input {
        ColorInput::Integer(number) => Some(*number as Float),
        ColorInput::Positional(values) | ColorInput::Tuple(values) if values.len() == 1 => {
            Some(values[0])
        }
        _ => None,
    }
}

/// Normalize an explicit format or mode name.
///
/// The name is trimmed and lower-cased. An absent or blank name yields
/// `None`, which requests autodetection.
pub fn extract_mode(mode: Option<&str>) -> Option<String> {
    mode.map(|m| m.trim().to_ascii_lowercase())
        .filter(|m| !m.is_empty())
}

// --------------------------------------------------------------------------------------------------------------------

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ColorInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! from_integer {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ColorInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(value as i64)
                }
            }
        )+
    };
}

from_integer!(i32, i64, u32);

impl<const N: usize> From<[Float; N]> for ColorInput {
    fn from(value: [Float; N]) -> Self {
        Self::Tuple(value.to_vec())
    }
}

impl From<&[Float]> for ColorInput {
    fn from(value: &[Float]) -> Self {
        Self::Tuple(value.to_vec())
    }
}

impl From<Vec<Float>> for ColorInput {
    fn from(value: Vec<Float>) -> Self {
        Self::Tuple(value)
    }
}

impl From<(Float, Float, Float)> for ColorInput {
    fn from(value: (Float, Float, Float)) -> Self {
        Self::Positional(vec![value.0, value.1, value.2])
    }
}

impl From<(Float, Float, Float, Float)> for ColorInput {
    fn from(value: (Float, Float, Float, Float)) -> Self {
        Self::Positional(vec![value.0, value.1, value.2, value.3])
    }
}

impl From<(Float, Float, Float, Float, Float)> for ColorInput {
    fn from(value: (Float, Float, Float, Float, Float)) -> Self {
        Self::Positional(vec![value.0, value.1, value.2, value.3, value.4])
    }
}

impl From<BTreeMap<char, Float>> for ColorInput {
    fn from(value: BTreeMap<char, Float>) -> Self {
        Self::Labeled(value)
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<&Color> for ColorInput {
    fn from(value: &Color) -> Self {
        Self::Color(value.clone())
    }
}
