//! Utility module with chromata's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An error while creating, converting, or combining colors.
///
/// Every fallible operation in this crate returns this error. All variants
/// are fatal to the failing call only; there are no partial results.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorError {
    /// An explicit format name that is not registered, or an input that no
    /// autodetection rule recognizes. The string is either the unknown name
    /// or a debug rendering of the input.
    UnknownFormat(String),

    /// An input that was routed to a format but failed that format's stricter
    /// parsing. For example, `#ffgg00` has the shape of a hex color but
    /// contains invalid digits, and `bread` is not a named color.
    DecodeError {
        format: &'static str,
        input: String,
    },

    /// A channel path such as `hsl.q` naming a channel that does not exist
    /// in the given color space, or a color space that does not exist.
    UnknownChannel { space: String, channel: String },

    /// A channel value that is neither a number nor a relative expression
    /// such as `*0.5` or `+10`.
    UnsupportedSetValue(String),

    /// A mixing mode that is not registered.
    UnknownInterpolationMode(String),

    /// A blend mode that does not exist.
    UnknownBlendMode(String),

    /// An operation on several colors received too few of them.
    TooFewColors { expected: usize, actual: usize },
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorError::*;

        match self {
            UnknownFormat(input) => write!(f, "unknown format: {}", input),
            DecodeError { format, input } => write!(f, "unknown {} color: {}", format, input),
            UnknownChannel { space, channel } => {
                write!(f, "unknown channel {} in mode {}", channel, space)
            }
            UnsupportedSetValue(value) => write!(f, "unsupported value for set: {}", value),
            UnknownInterpolationMode(mode) => {
                write!(f, "interpolation mode {} is not defined", mode)
            }
            UnknownBlendMode(mode) => write!(f, "unknown blend mode: {}", mode),
            TooFewColors { expected, actual } => write!(
                f,
                "operation needs at least {} colors but got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
