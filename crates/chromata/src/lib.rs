//! # Chromata
//!
//! Chromata converts, mixes, and measures everyday RGB colors. Its
//! [`Color`] stores sRGB channels in `0..=255` plus alpha in `0..=1` and
//! converts to and from a dozen notations and color spaces on demand:
//!
//!   * **Strings:** hex strings (`#f00`, `#ff000080`), the legacy CSS color
//!     functions (`rgb()`, `rgba()`, `hsl()`, `hsla()`), and the CSS/X11
//!     color names.
//!   * **Integers:** 24-bit packed RGB and signed 32-bit packed ARGB, as used
//!     by Android.
//!   * **Color spaces:** HSL, HSV, HSI, HCG, CMYK, CIELAB, LCH/HCL, Oklab,
//!     and Oklch, all enumerated by [`ColorSpace`].
//!   * **Temperature:** the approximate color of a black body in Kelvin.
//!
//! ```
//! # use chromata::{Color, ColorError, ColorSpace, HexMode};
//! let color = Color::new("hsl(30, 100%, 50%)", None)?;
//! assert_eq!(color.hex(HexMode::Auto), "#ff8000");
//! assert_eq!(color.to(ColorSpace::Hsl), vec![30.0, 1.0, 0.5]);
//! # Ok::<(), ColorError>(())
//! ```
//!
//! Construction either uses an explicitly named format or autodetects the
//! format of the [`ColorInput`]. Both go through a [`Registry`], which maps
//! format names to decoders and mixing modes to mixers. [`Registry::global`]
//! provides the standard registry, and [`Registry::builder`] assembles
//! custom ones.
//!
//! Beyond conversion, chromata [mixes](mix) and [averages](average) colors
//! in ten different modes, traces [Bézier curves](Bezier) through CIELAB,
//! [blends](blend) colors like image editors do, and computes WCAG
//! luminance and contrast as well as the CIEDE2000 color difference.
//!
//!
//! ## Feature Flags
//!
//! Chromata supports two feature flags:
//!
//!   - `f64` selects the eponymous type as floating point type [`Float`] and
//!     `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as [`Bits`].
//!     This feature is enabled by default.
//!   - `pyffi` enables the Python bindings through PyO3. This feature is
//!     disabled by default.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod input;
mod mixing;
mod object;
mod registry;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ColorSpace, CssMode, HexMode};
pub use error::ColorError;
pub use input::{extract_mode, unpack, ColorInput};
pub use mixing::{average, blend, mix, mix_with, Bezier, BlendMode, Interpolator};
pub use object::{to_color, valid, AndroidMode, ChannelValue, Color};
pub use registry::{Decoder, Detector, Mixer, Registry, RegistryBuilder};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn chromata(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    Ok(())
}
