use super::lerp;
use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The threshold below which sRGB is linear, per WCAG 2.x.
const LINEAR_THRESHOLD: Float = 0.03928;

/// Precision of the luminance search.
const EPSILON: Float = 1e-7;

/// Maximum number of bisection steps before giving up.
const MAX_ITERATIONS: usize = 20;

/// Compute the relative luminance of the given sRGB channels in `0..=255`.
///
/// This is the luminance defined by [WCAG
/// 2.x](https://www.w3.org/TR/WCAG21/#dfn-relative-luminance), which uses a
/// slightly different linearization threshold than the sRGB standard.
pub(crate) fn to_luminance(rgb: &[Float; 3]) -> Float {
    fn linearize(value: Float) -> Float {
        let value = value / 255.0;
        if value <= LINEAR_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *rgb;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the contrast ratio between two relative luminance values.
///
/// The ratio is symmetric and ranges from 1 (no contrast) to 21 (black on
/// white).
pub(crate) fn to_contrast(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 > luminance2 {
        (luminance1, luminance2)
    } else {
        (luminance2, luminance1)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// Find sRGB channels with the given relative luminance.
///
/// Targets 0 and 1 yield black and white. Otherwise, this function bisects
/// along the straight RGB line towards black, if the color is too bright, or
/// towards white, if the color is too dark. The result is rounded to integral
/// channels.
pub(crate) fn with_luminance(rgb: &[Float; 3], target: Float) -> [Float; 3] {
    if target == 0.0 {
        return [0.0, 0.0, 0.0];
    } else if target == 1.0 {
        return [255.0, 255.0, 255.0];
    }

    let (mut low, mut high) = if to_luminance(rgb) > target {
        ([0.0, 0.0, 0.0], *rgb)
    } else {
        (*rgb, [255.0, 255.0, 255.0])
    };

    let mut iterations = 0;
    let middle = loop {
        let middle = [
            lerp(low[0], high[0], 0.5),
            lerp(low[1], high[1], 0.5),
            lerp(low[2], high[2], 0.5),
        ];
        let luminance = to_luminance(&middle);

        if (target - luminance).abs() < EPSILON {
            break middle;
        } else if iterations == MAX_ITERATIONS {
            log::debug!(
                "luminance search for {} stopped at {} after {} steps",
                target,
                luminance,
                iterations
            );
            break middle;
        }

        iterations += 1;
        if luminance > target {
            high = middle;
        } else {
            low = middle;
        }
    };

    middle.map(|c| c.round())
}

#[cfg(test)]
mod test {
    use super::{to_contrast, to_luminance, with_luminance};
    use crate::core::round_to;

    #[test]
    fn test_luminance() {
        assert_eq!(to_luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(round_to(to_luminance(&[255.0, 255.0, 255.0]), 12), 1.0);
        assert_eq!(round_to(to_luminance(&[255.0, 0.0, 0.0]), 12), 0.2126);
        assert!(to_luminance(&[255.0, 255.0, 0.0]) > to_luminance(&[0.0, 0.0, 255.0]));
    }

    #[test]
    fn test_contrast() {
        let black = to_luminance(&[0.0, 0.0, 0.0]);
        let white = to_luminance(&[255.0, 255.0, 255.0]);
        assert_eq!(round_to(to_contrast(black, white), 6), 21.0);
        assert_eq!(round_to(to_contrast(white, black), 6), 21.0);
        assert_eq!(to_contrast(white, white), 1.0);
    }

    #[test]
    fn test_with_luminance() {
        assert_eq!(with_luminance(&[255.0, 0.0, 0.0], 0.0), [0.0, 0.0, 0.0]);
        assert_eq!(with_luminance(&[255.0, 0.0, 0.0], 1.0), [255.0, 255.0, 255.0]);

        let rgb = with_luminance(&[255.0, 0.0, 0.0], 0.4);
        assert_eq!(rgb, [255.0, 134.0, 134.0]);
        assert_eq!(round_to(to_luminance(&rgb), 2), 0.4);

        let rgb = with_luminance(&[0.0, 0.0, 0.0], 0.5);
        assert_eq!(rgb, [188.0, 188.0, 188.0]);
    }
}
