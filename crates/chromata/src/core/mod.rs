mod contrast;
mod conversion;
mod difference;
mod equality;
mod interpolation;
mod math;
mod named;
mod space;
mod string;

// contrast
pub(crate) use contrast::{to_contrast, to_luminance, with_luminance};

// conversion
pub(crate) use conversion::{
    android_to_rgba, from_rgb, hsl_to_rgb, lab_to_lch, num_to_rgb, rgb_to_cmyk, rgb_to_hcg,
    rgb_to_hsi, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_num, rgb_to_oklab,
    rgb_to_temperature, rgba_to_android, temperature_to_rgb, to_rgb,
};

// difference
pub(crate) use difference::{delta_e, distance};

// equality
pub use equality::to_eq_bits;

// interpolation
pub(crate) use interpolation::{bernstein, interpolate, interpolate_hue, lerp};

// math
pub(crate) use math::{limit, round_to, Accumulator, Precision};

// named
pub(crate) use named::{is_named, named_to_rgb, rgb_to_named};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format_css, format_hex, is_css, parse_css, parse_hex};
pub use string::{CssMode, HexMode};
