use crate::Float;

/// Per-representation constants for comparing floats.
pub(crate) trait Precision {
    /// The scale applied before rounding to an integer when normalizing a
    /// float for equality and hashing. Larger scales keep more decimals.
    const EQ_SCALE: Self;
}

impl Precision for f64 {
    const EQ_SCALE: f64 = 1e12;
}

impl Precision for f32 {
    const EQ_SCALE: f32 = 1e4;
}

/// Bound the value to `min..=max`.
///
/// Unlike [`f64::clamp`], this function never panics and lets not-a-number
/// pass through unchanged.
#[inline]
pub(crate) fn limit(value: Float, min: Float, max: Float) -> Float {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round the value to the given number of decimals.
#[inline]
pub(crate) fn round_to(value: Float, decimals: i32) -> Float {
    let scale = (10.0 as Float).powi(decimals);
    (value * scale).round() / scale
}

// --------------------------------------------------------------------------------------------------------------------

/// A compensated sum.
///
/// Averages and Bézier curves add up one weighted term per color. The
/// accumulator tracks the low-order bits lost by each addition, following
/// Neumaier's variant of [Kahan
/// summation](https://en.wikipedia.org/wiki/Kahan_summation_algorithm), and
/// adds them back in [`Accumulator::total`].
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Accumulator {
    sum: Float,
    lost: Float,
}

impl Accumulator {
    /// Get the sum, including the lost bits.
    #[inline]
    pub fn total(&self) -> Float {
        self.sum + self.lost
    }
}

impl std::ops::Add<Float> for Accumulator {
    type Output = Self;

    fn add(mut self, term: Float) -> Self {
        self += term;
        self
    }
}

impl std::ops::AddAssign<Float> for Accumulator {
    fn add_assign(&mut self, term: Float) {
        let next = self.sum + term;
        self.lost += if self.sum.abs() >= term.abs() {
            (self.sum - next) + term
        } else {
            (term - next) + self.sum
        };
        self.sum = next;
    }
}

impl std::iter::Sum<Float> for Accumulator {
    fn sum<I: Iterator<Item = Float>>(iter: I) -> Self {
        iter.fold(Self::default(), |sum, term| sum + term)
    }
}
