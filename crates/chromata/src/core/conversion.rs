use super::{limit, ColorSpace};
use crate::Float;

use std::f64::consts::PI as PI64;

const PI: Float = PI64 as Float;
const TAU: Float = 2.0 * PI;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Compute the hue in degrees for the hexagonal models HSV and HCG. The
/// sequential tests mirror the reference algorithm, so a later maximum wins.
#[inline]
fn hexagonal_hue(r: Float, g: Float, b: Float, max: Float, delta: Float) -> Float {
    let mut h = Float::NAN;
    if r == max {
        h = (g - b) / delta;
    }
    if g == max {
        h = 2.0 + (b - r) / delta;
    }
    if b == max {
        h = 4.0 + (r - g) / delta;
    }

    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    h
}

/// Map the hexagonal sector of the hue onto RGB, with `v` the largest, `p`
/// the smallest, and `q`/`t` the falling/rising intermediate channel.
#[inline]
fn hexagonal_sector(hue: Float, p: Float, q: Float, t: Float, v: Float) -> [Float; 3] {
    match hue as usize {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Normalize a hue in degrees for sector lookup. Undefined hues become zero.
#[inline]
fn sector_hue(hue: Float) -> Float {
    if hue.is_nan() {
        0.0
    } else {
        hue.rem_euclid(360.0) / 60.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert sRGB with `0..=255` channels to HSL.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = value.map(|c| c / 255.0);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [Float::NAN, 0.0, l];
    }

    let delta = max - min;
    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    [h, s, l]
}

/// Convert HSL to sRGB with `0..=255` channels.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    if s == 0.0 {
        return [l * 255.0; 3];
    }

    let h = if h.is_nan() { 0.0 } else { h } / 360.0;
    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let channel = |t: Float| {
        let mut t = t;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        let c = if 6.0 * t < 1.0 {
            t1 + (t2 - t1) * 6.0 * t
        } else if 2.0 * t < 1.0 {
            t2
        } else if 3.0 * t < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t) * 6.0
        } else {
            t1
        };
        (c * 255.0).round()
    };

    [
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert sRGB with `0..=255` channels to HSV.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;
    let v = max / 255.0;

    if max == 0.0 {
        return [Float::NAN, 0.0, v];
    }

    [hexagonal_hue(r, g, b, max, delta), delta / max, v]
}

/// Convert HSV to sRGB with `0..=255` channels.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let v = v * 255.0;
    if s == 0.0 {
        return [v; 3];
    }

    let h = sector_hue(h);
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    hexagonal_sector(h, p, q, t, v)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert sRGB with `0..=255` channels to HSI.
pub(crate) fn rgb_to_hsi(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = value.map(|c| c / 255.0);
    let min = r.min(g).min(b);
    let i = (r + g + b) / 3.0;
    let s = if i > 0.0 { 1.0 - min / i } else { 0.0 };

    if s == 0.0 {
        return [Float::NAN, s, i];
    }

    let ratio = ((r - g) + (r - b)) / 2.0 / ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
    let mut h = limit(ratio, -1.0, 1.0).acos();
    if b > g {
        h = TAU - h;
    }

    [h / TAU * 360.0, s, i]
}

/// Convert HSI to sRGB with `0..=255` channels.
pub(crate) fn hsi_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, i] = *value;
    let s = if s.is_nan() { 0.0 } else { s };
    let mut h = if h.is_nan() { 0.0 } else { h };
    if h > 360.0 {
        h -= 360.0;
    }
    if h < 0.0 {
        h += 360.0;
    }
    h /= 360.0;

    let major = |h: Float| (1.0 + s * (TAU * h).cos() / (PI / 3.0 - TAU * h).cos()) / 3.0;
    let minor = (1.0 - s) / 3.0;

    let [r, g, b] = if h < 1.0 / 3.0 {
        let r = major(h);
        [r, 1.0 - (minor + r), minor]
    } else if h < 2.0 / 3.0 {
        let g = major(h - 1.0 / 3.0);
        [minor, g, 1.0 - (minor + g)]
    } else {
        let b = major(h - 2.0 / 3.0);
        [1.0 - (minor + b), minor, b]
    };

    [r, g, b].map(|c| limit(i * c * 3.0, 0.0, 1.0) * 255.0)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert sRGB with `0..=255` channels to HCG.
///
/// Grayness is undefined for fully saturated colors and hence reported as
/// zero.
pub(crate) fn rgb_to_hcg(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = value.map(|c| c / 255.0);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;
    let grayness = if delta < 1.0 { min / (1.0 - delta) } else { 0.0 };

    if delta == 0.0 {
        return [Float::NAN, delta, grayness];
    }

    [hexagonal_hue(r, g, b, max, delta), delta, grayness]
}

/// Convert HCG to sRGB with `0..=255` channels.
pub(crate) fn hcg_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, c, g] = *value;
    let g = g * 255.0;
    if c == 0.0 {
        return [g; 3];
    }

    let chroma = c * 255.0;
    let h = sector_hue(h);
    let f = h - h.floor();
    let p = g * (1.0 - c);
    let q = p + chroma * (1.0 - f);
    let t = p + chroma * f;
    let v = p + chroma;
    hexagonal_sector(h, p, q, t, v)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert sRGB with `0..=255` channels to CMYK.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = value.map(|c| c / 255.0);
    let k = 1.0 - r.max(g).max(b);
    let f = if k < 1.0 { 1.0 / (1.0 - k) } else { 0.0 };

    [(1.0 - r - k) * f, (1.0 - g - k) * f, (1.0 - b - k) * f, k]
}

/// Convert CMYK to sRGB with `0..=255` channels.
pub(crate) fn cmyk_to_rgb(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *value;
    if k == 1.0 {
        return [0.0; 3];
    }

    let convert = |x: Float| if x >= 1.0 { 0.0 } else { 255.0 * (1.0 - x) * (1.0 - k) };
    [convert(c), convert(m), convert(y)]
}

// --------------------------------------------------------------------------------------------------------------------

mod cielab {
    use super::multiply;
    use crate::Float;

    // D65 reference white
    const XN: Float = 0.950470;
    const YN: Float = 1.0;
    const ZN: Float = 1.088830;

    // Derived from 6/29
    #[allow(clippy::excessive_precision)]
    const T0: Float = 0.137931034;
    #[allow(clippy::excessive_precision)]
    const T1: Float = 0.206896552;
    const T2: Float = 0.12841855;
    const T3: Float = 0.008856452;

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
        [ 0.4124564, 0.3575761, 0.1804375 ],
        [ 0.2126729, 0.7151522, 0.0721750 ],
        [ 0.0193339, 0.1191920, 0.9503041 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
        [  3.2404542, -1.5371385, -0.4985314 ],
        [ -0.9692660,  1.8760108,  0.0415560 ],
        [  0.0556434, -0.2040259,  1.0572252 ],
    ];

    /// Convert sRGB with `0..=255` channels to CIELAB.
    pub(crate) fn rgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn linearize(value: Float) -> Float {
            let value = value / 255.0;
            if value <= 0.04045 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        }

        #[inline]
        fn compand(t: Float) -> Float {
            if t > T3 {
                t.cbrt()
            } else {
                t / T2 + T0
            }
        }

        let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &value.map(linearize));
        let [x, y, z] = [compand(x / XN), compand(y / YN), compand(z / ZN)];

        let l = 116.0 * y - 16.0;
        [
            if l < 0.0 { 0.0 } else { l },
            500.0 * (x - y),
            200.0 * (y - z),
        ]
    }

    /// Convert CIELAB to sRGB with `0..=255` channels.
    pub(crate) fn lab_to_rgb(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn expand(t: Float) -> Float {
            if t > T1 {
                t * t * t
            } else {
                T2 * (t - T0)
            }
        }

        #[inline]
        fn delinearize(value: Float) -> Float {
            255.0
                * if value <= 0.00304 {
                    12.92 * value
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
        }

        let [l, a, b] = *value;
        let y = (l + 16.0) / 116.0;
        let x = if a.is_nan() { y } else { y + a / 500.0 };
        let z = if b.is_nan() { y } else { y - b / 200.0 };

        let xyz = [XN * expand(x), YN * expand(y), ZN * expand(z)];
        multiply(&XYZ_TO_LINEAR_SRGB, &xyz).map(delinearize)
    }
}

pub(crate) use cielab::{lab_to_rgb, rgb_to_lab};

/// Convert Cartesian a/b coordinates to polar chroma/hue, for both CIELAB
/// and Oklab. Chroma below 5e-5 has no hue.
pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;
    let c = (a * a + b * b).sqrt();
    let h = if (c * 10_000.0).round() == 0.0 {
        Float::NAN
    } else {
        (b.atan2(a).to_degrees() + 360.0) % 360.0
    };

    [l, c, h]
}

/// Convert polar chroma/hue coordinates back to Cartesian a/b coordinates.
pub(crate) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *value;
    let h = if h.is_nan() { 0.0 } else { h.to_radians() };
    [l, h.cos() * c, h.sin() * c]
}

// --------------------------------------------------------------------------------------------------------------------

mod oklab {
    use super::multiply;
    use crate::Float;

    /// Convert gamma-corrected to linear sRGB coordinates, both in unit range.
    fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn convert(value: Float) -> Float {
            let magnitude = value.abs();
            if magnitude < 0.04045 {
                value / 12.92
            } else {
                ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
            }
        }

        value.map(convert)
    }

    /// Convert linear to gamma-corrected sRGB coordinates, both in unit range.
    fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn convert(value: Float) -> Float {
            let magnitude = value.abs();
            if magnitude > 0.0031308 {
                magnitude
                    .powf(1.0 / 2.4)
                    .mul_add(1.055, -0.055)
                    .copysign(value)
            } else {
                value * 12.92
            }
        }

        value.map(convert)
    }

    // https://bottosson.github.io/posts/oklab/

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LINEAR_SRGB_TO_LMS: [[Float; 3]; 3] = [
        [ 0.4122214708, 0.5363325363, 0.0514459929 ],
        [ 0.2119034982, 0.6806995451, 0.1073969566 ],
        [ 0.0883024619, 0.2817188376, 0.6299787005 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LMS_TO_OKLAB: [[Float; 3]; 3] = [
        [ 0.2104542553,  0.7936177850, -0.0040720468 ],
        [ 1.9779984951, -2.4285922050,  0.4505937099 ],
        [ 0.0259040371,  0.7827717662, -0.8086757660 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const OKLAB_TO_LMS: [[Float; 3]; 3] = [
        [ 1.0,  0.3963377774,  0.2158037573 ],
        [ 1.0, -0.1055613458, -0.0638541728 ],
        [ 1.0, -0.0894841775, -1.2914855480 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
        [  4.0767416621, -3.3077115913,  0.2309699292 ],
        [ -1.2684380046,  2.6097574011, -0.3413193965 ],
        [ -0.0041960863, -0.7034186147,  1.7076147010 ],
    ];

    /// Convert sRGB with `0..=255` channels to Oklab.
    pub(crate) fn rgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
        let linear = rgb_to_linear_rgb(&value.map(|c| c / 255.0));
        let lms = multiply(&LINEAR_SRGB_TO_LMS, &linear).map(|c| c.cbrt());
        multiply(&LMS_TO_OKLAB, &lms)
    }

    /// Convert Oklab to sRGB with `0..=255` channels.
    pub(crate) fn oklab_to_rgb(value: &[Float; 3]) -> [Float; 3] {
        let lms = multiply(&OKLAB_TO_LMS, value).map(|c| c * c * c);
        let linear = multiply(&LMS_TO_LINEAR_SRGB, &lms);
        linear_rgb_to_rgb(&linear).map(|c| 255.0 * c)
    }
}

pub(crate) use oklab::{oklab_to_rgb, rgb_to_oklab};

// --------------------------------------------------------------------------------------------------------------------

/// Approximate the color of a black body with the given temperature in
/// Kelvin, using [Tanner Helland's
/// fit](https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html).
#[allow(clippy::excessive_precision)]
pub(crate) fn temperature_to_rgb(kelvin: Float) -> [Float; 3] {
    let temp = kelvin / 100.0;

    if temp < 66.0 {
        let g = if temp < 6.0 {
            0.0
        } else {
            let g = temp - 2.0;
            -155.25485562709179 - 0.44596950469579133 * g + 104.49216199393888 * g.ln()
        };
        let b = if temp < 20.0 {
            0.0
        } else {
            let b = temp - 10.0;
            -254.76935184120902 + 0.8274096064007395 * b + 115.67994401066147 * b.ln()
        };
        [255.0, g, b]
    } else {
        let r = temp - 55.0;
        let g = temp - 50.0;
        [
            351.97690566805693 + 0.114206453784165 * r - 40.25366309332127 * r.ln(),
            325.4494125711974 + 0.07943456536662342 * g - 28.0852963507957 * g.ln(),
            255.0,
        ]
    }
}

/// Estimate the temperature of the given color in Kelvin.
///
/// There is no closed form, so this function bisects `1_000..=40_000` by
/// comparing blue to red ratios until the interval is narrower than 0.4K.
pub(crate) fn rgb_to_temperature(value: &[Float; 3]) -> Float {
    let ratio = value[2] / value[0];
    let mut min = 1_000.0;
    let mut max = 40_000.0;
    let mut temp = (min + max) / 2.0;

    while max - min > 0.4 {
        temp = (min + max) / 2.0;
        let [r, _, b] = temperature_to_rgb(temp);
        if b / r >= ratio {
            max = temp;
        } else {
            min = temp;
        }
    }

    temp.round()
}

// --------------------------------------------------------------------------------------------------------------------

/// Unpack a 24-bit integer into sRGB channels. This function returns `None`
/// for numbers outside `0..=0xffffff`.
pub(crate) fn num_to_rgb(num: i64) -> Option<[Float; 3]> {
    if !(0..=0xff_ffff).contains(&num) {
        return None;
    }

    Some([
        (num >> 16) as Float,
        ((num >> 8) & 0xff) as Float,
        (num & 0xff) as Float,
    ])
}

/// Pack sRGB channels into a 24-bit integer. Channels are truncated, not
/// rounded.
pub(crate) fn rgb_to_num(value: &[Float; 3]) -> i64 {
    let [r, g, b] = value.map(|c| c as i64);
    (r << 16) + (g << 8) + b
}

/// Unpack a signed 32-bit ARGB integer into sRGB channels and alpha. Larger
/// integers wrap around to 32 bits first.
pub(crate) fn android_to_rgba(value: i64) -> [Float; 4] {
    let bits = value as i32 as u32;
    [
        ((bits >> 16) & 0xff) as Float,
        ((bits >> 8) & 0xff) as Float,
        (bits & 0xff) as Float,
        (bits >> 24) as Float / 255.0,
    ]
}

/// Pack sRGB channels and alpha into a signed 32-bit ARGB integer. Without
/// alpha, the color is packed as opaque.
pub(crate) fn rgba_to_android(value: &[Float; 3], alpha: Option<Float>) -> i32 {
    let [r, g, b] = value.map(|c| limit(c.round(), 0.0, 255.0) as u32);
    let a = alpha.map_or(0xff, |a| limit((a * 255.0).round(), 0.0, 255.0) as u32);
    ((a << 24) | (r << 16) | (g << 8) | b) as i32
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert sRGB with `0..=255` channels to the given color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn from_rgb(space: ColorSpace, value: &[Float; 3]) -> Vec<Float> {
    use ColorSpace::*;

    match space {
        Rgb => value.to_vec(),
        Hsl => rgb_to_hsl(value).to_vec(),
        Hsv => rgb_to_hsv(value).to_vec(),
        Hsi => rgb_to_hsi(value).to_vec(),
        Hcg => rgb_to_hcg(value).to_vec(),
        Cmyk => rgb_to_cmyk(value).to_vec(),
        Lab => rgb_to_lab(value).to_vec(),
        Lch => lab_to_lch(&rgb_to_lab(value)).to_vec(),
        Hcl => {
            let [l, c, h] = lab_to_lch(&rgb_to_lab(value));
            vec![h, c, l]
        }
        Oklab => rgb_to_oklab(value).to_vec(),
        Oklch => lab_to_lch(&rgb_to_oklab(value)).to_vec(),
    }
}

/// Convert coordinates in the given color space to sRGB with `0..=255`
/// channels. Missing coordinates are treated as zero and extra coordinates
/// are ignored.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_rgb(space: ColorSpace, coordinates: &[Float]) -> [Float; 3] {
    use ColorSpace::*;

    let at = |index: usize| coordinates.get(index).copied().unwrap_or(0.0);
    let triple = [at(0), at(1), at(2)];

    match space {
        Rgb => triple,
        Hsl => hsl_to_rgb(&triple),
        Hsv => hsv_to_rgb(&triple),
        Hsi => hsi_to_rgb(&triple),
        Hcg => hcg_to_rgb(&triple),
        Cmyk => cmyk_to_rgb(&[at(0), at(1), at(2), at(3)]),
        Lab => lab_to_rgb(&triple),
        Lch => lab_to_rgb(&lch_to_lab(&triple)),
        Hcl => {
            let [h, c, l] = triple;
            lab_to_rgb(&lch_to_lab(&[l, c, h]))
        }
        Oklab => oklab_to_rgb(&triple),
        Oklch => oklab_to_rgb(&lch_to_lab(&triple)),
    }
}
