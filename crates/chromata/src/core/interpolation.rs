use super::Accumulator;
use crate::Float;

/// Linearly interpolate between two numbers.
#[inline]
pub(crate) fn lerp(start: Float, end: Float, fraction: Float) -> Float {
    start + fraction * (end - start)
}

/// Linearly interpolate between two coordinate triples.
pub(crate) fn interpolate(
    fraction: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> [Float; 3] {
    [
        lerp(coordinates1[0], coordinates2[0], fraction),
        lerp(coordinates1[1], coordinates2[1], fraction),
        lerp(coordinates1[2], coordinates2[2], fraction),
    ]
}

/// Interpolate between two hue-first coordinate triples.
///
/// Both triples must have hue as their first coordinate, saturation or chroma
/// as their second, and lightness, brightness, or value as their third. Hue
/// takes the shorter arc between the two colors and may end up outside
/// `0..360`.
///
/// If only one hue is defined, the result uses that hue unchanged. In that
/// case, if the other color's third coordinate is exactly 0 or 1 and
/// `keep_saturation` is set, the result also uses the defined color's
/// saturation unchanged, since black and white have no meaningful saturation.
/// If neither hue is defined, the result's hue is not-a-number.
pub(crate) fn interpolate_hue(
    fraction: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    keep_saturation: bool,
) -> [Float; 3] {
    let [h1, s1, v1] = *coordinates1;
    let [h2, s2, v2] = *coordinates2;
    let extreme = |v: Float| v == 0.0 || v == 1.0;

    let mut saturation = None;
    let hue = match (h1.is_nan(), h2.is_nan()) {
        (false, false) => {
            let delta = if h2 > h1 && h2 - h1 > 180.0 {
                h2 - (h1 + 360.0)
            } else if h2 < h1 && h1 - h2 > 180.0 {
                h2 + 360.0 - h1
            } else {
                h2 - h1
            };
            h1 + fraction * delta
        }
        (false, true) => {
            if keep_saturation && extreme(v2) {
                saturation = Some(s1);
            }
            h1
        }
        (true, false) => {
            if keep_saturation && extreme(v1) {
                saturation = Some(s2);
            }
            h2
        }
        (true, true) => Float::NAN,
    };

    [
        hue,
        saturation.unwrap_or_else(|| lerp(s1, s2, fraction)),
        lerp(v1, v2, fraction),
    ]
}

/// Compute row `n` of Pascal's triangle.
pub(crate) fn binomial_row(n: usize) -> Vec<Float> {
    let mut row = vec![1.0];
    for k in 0..n {
        let next = row[k] * (n - k) as Float / (k + 1) as Float;
        row.push(next);
    }
    row
}

/// Evaluate the Bézier curve with the given control points at `t`.
///
/// This function uses the Bernstein form, i.e., it weighs each control point
/// with the binomial coefficient and the appropriate powers of `t` and `1 - t`.
/// It returns the origin for an empty slice.
pub(crate) fn bernstein<const N: usize>(points: &[[Float; N]], t: Float) -> [Float; N] {
    let mut result = [0.0; N];
    if points.is_empty() {
        return result;
    }

    let n = points.len() - 1;
    let row = binomial_row(n);
    let u = 1.0 - t;

    for (index, slot) in result.iter_mut().enumerate() {
        let sum: Accumulator = points
            .iter()
            .enumerate()
            .map(|(j, point)| {
                row[j] * u.powi((n - j) as i32) * t.powi(j as i32) * point[index]
            })
            .sum();
        *slot = sum.total();
    }

    result
}

#[cfg(test)]
mod test {
    use super::{bernstein, binomial_row, interpolate, interpolate_hue, lerp};
    use crate::Float;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(255.0, 0.0, 0.25), 191.25);
        assert_eq!(
            interpolate(0.5, &[0.0, 10.0, 20.0], &[10.0, 20.0, 40.0]),
            [5.0, 15.0, 30.0]
        );
    }

    #[test]
    fn test_hue() {
        // Shorter arc across zero in both directions.
        let [h, _, _] = interpolate_hue(0.5, &[350.0, 1.0, 0.5], &[10.0, 1.0, 0.5], true);
        assert_eq!(h, 360.0);
        let [h, _, _] = interpolate_hue(0.5, &[10.0, 1.0, 0.5], &[350.0, 1.0, 0.5], true);
        assert_eq!(h, 0.0);
        let [h, _, _] = interpolate_hue(0.25, &[0.0, 1.0, 0.5], &[120.0, 1.0, 0.5], true);
        assert_eq!(h, 30.0);

        // White has no hue and contributes neither hue nor saturation.
        let result = interpolate_hue(0.5, &[0.0, 1.0, 0.5], &[Float::NAN, 0.0, 1.0], true);
        assert_eq!(result, [0.0, 1.0, 0.75]);
        let result = interpolate_hue(0.5, &[0.0, 1.0, 0.5], &[Float::NAN, 0.0, 1.0], false);
        assert_eq!(result, [0.0, 0.5, 0.75]);

        let [h, s, v] = interpolate_hue(0.5, &[Float::NAN, 0.0, 0.0], &[Float::NAN, 0.0, 1.0], true);
        assert!(h.is_nan());
        assert_eq!((s, v), (0.0, 0.5));
    }

    #[test]
    fn test_binomial_row() {
        assert_eq!(binomial_row(0), vec![1.0]);
        assert_eq!(binomial_row(1), vec![1.0, 1.0]);
        assert_eq!(binomial_row(4), vec![1.0, 4.0, 6.0, 4.0, 1.0]);
    }

    #[test]
    fn test_bernstein() {
        let points = [[0.0, 0.0], [10.0, 20.0]];
        assert_eq!(bernstein(&points, 0.5), [5.0, 10.0]);

        let points = [[0.0], [10.0], [0.0]];
        assert_eq!(bernstein(&points, 0.0), [0.0]);
        assert_eq!(bernstein(&points, 0.5), [5.0]);
        assert_eq!(bernstein(&points, 1.0), [0.0]);
    }
}
