use crate::Float;

/// Compute CIEDE2000 for two CIELAB colors.
///
/// The three weights adjust the relative contribution of lightness, chroma,
/// and hue and usually are 1. The result is clamped to `0..=100`. See [Sharma
/// et al.](https://hajim.rochester.edu/ece/sites/gsharma/ciede2000/) for the
/// formulae.
#[allow(non_snake_case)]
pub(crate) fn delta_e(
    lab1: &[Float; 3],
    lab2: &[Float; 3],
    kl: Float,
    kc: Float,
    kh: Float,
) -> Float {
    let [L1, a1, b1] = *lab1;
    let [L2, a2, b2] = *lab2;

    let seventh = |c: Float| {
        let c7 = c.powi(7);
        (c7 / (c7 + (25.0 as Float).powi(7))).sqrt()
    };

    let avg_L = (L1 + L2) / 2.0;
    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let avg_C = (C1 + C2) / 2.0;

    let G = 0.5 * (1.0 - seventh(avg_C));
    let a1p = a1 * (1.0 + G);
    let a2p = a2 * (1.0 + G);
    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);
    let avg_Cp = (C1p + C2p) / 2.0;

    let h1p = b1.atan2(a1p).to_degrees().rem_euclid(360.0);
    let h2p = b2.atan2(a2p).to_degrees().rem_euclid(360.0);
    let avg_Hp = if (h1p - h2p).abs() > 180.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p) / 2.0
    };

    let T = 1.0 - 0.17 * (avg_Hp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * avg_Hp).to_radians().cos()
        + 0.32 * (3.0 * avg_Hp + 6.0).to_radians().cos()
        - 0.2 * (4.0 * avg_Hp - 63.0).to_radians().cos();

    let mut delta_hp = h2p - h1p;
    if delta_hp.abs() > 180.0 {
        delta_hp += if h2p <= h1p { 360.0 } else { -360.0 };
    }
    let delta_Hp = 2.0 * (C1p * C2p).sqrt() * (delta_hp.to_radians() / 2.0).sin();
    let delta_L = L2 - L1;
    let delta_Cp = C2p - C1p;

    let offset = (avg_L - 50.0).powi(2);
    let SL = 1.0 + 0.015 * offset / (20.0 + offset).sqrt();
    let SC = 1.0 + 0.045 * avg_Cp;
    let SH = 1.0 + 0.015 * avg_Cp * T;

    let delta_theta = 30.0 * (-((avg_Hp - 275.0) / 25.0).powi(2)).exp();
    let RC = 2.0 * seventh(avg_Cp);
    let RT = -RC * (2.0 * delta_theta.to_radians()).sin();

    let L = delta_L / (kl * SL);
    let C = delta_Cp / (kc * SC);
    let H = delta_Hp / (kh * SH);

    (L * L + C * C + H * H + RT * C * H).sqrt().clamp(0.0, 100.0)
}

/// Compute the Euclidean distance between two coordinate slices.
///
/// Not-a-number coordinates count as zero. If the slices differ in length,
/// the extra coordinates of the longer one are ignored.
pub(crate) fn distance(coordinates1: &[Float], coordinates2: &[Float]) -> Float {
    let zeroed = |c: Float| if c.is_nan() { 0.0 } else { c };

    coordinates1
        .iter()
        .zip(coordinates2)
        .map(|(&c1, &c2)| {
            let d = zeroed(c1) - zeroed(c2);
            d * d
        })
        .sum::<Float>()
        .sqrt()
}

#[cfg(test)]
mod test {
    use super::{delta_e, distance};
    use crate::core::{rgb_to_lab, round_to};
    use crate::Float;

    fn delta(rgb1: [Float; 3], rgb2: [Float; 3]) -> Float {
        delta_e(&rgb_to_lab(&rgb1), &rgb_to_lab(&rgb2), 1.0, 1.0, 1.0)
    }

    #[test]
    fn test_delta_e() {
        assert_eq!(delta([255.0, 0.0, 0.0], [255.0, 0.0, 0.0]), 0.0);
        assert_eq!(round_to(delta([0.0, 0.0, 0.0], [255.0, 255.0, 255.0]), 4), 100.0);

        // Symmetric and small for nearby colors.
        let d1 = delta([237.0, 237.0, 238.0], [237.0, 238.0, 237.0]);
        let d2 = delta([237.0, 238.0, 237.0], [237.0, 237.0, 238.0]);
        assert_eq!(round_to(d1, 8), round_to(d2, 8));
        assert!(0.0 < d1 && d1 < 2.0);

        // Reference pair from Sharma et al.
        let d = delta_e(
            &[50.0, 2.6772, -79.7751],
            &[50.0, 0.0, -82.7485],
            1.0,
            1.0,
            1.0,
        );
        assert_eq!(round_to(d, 4), 2.0425);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(&[0.0, 0.0, 0.0], &[3.0, 4.0, 0.0]), 5.0);
        assert_eq!(distance(&[Float::NAN, 1.0, 2.0], &[0.0, 1.0, 2.0]), 0.0);
        assert_eq!(distance(&[255.0, 0.0, 0.0], &[255.0, 0.0, 0.0]), 0.0);
    }
}
