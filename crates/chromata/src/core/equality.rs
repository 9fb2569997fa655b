use super::Precision;
use crate::{Bits, Float};

/// Assert that two floats agree after normalization with [`to_eq_bits`].
///
/// Not-a-number compares equal to zero, negative zero to positive zero, and
/// differences beyond the normalized precision are ignored.
///
/// # Panics
///
/// If the normalized bits differ. The message prints both floats on lines of
/// their own.
#[macro_export]
macro_rules! assert_close_enough {
    ($left:expr, $right:expr $(,)?) => {
        let (left, right) = ($left, $right);
        assert_eq!(
            $crate::to_eq_bits(left),
            $crate::to_eq_bits(right),
            "floats differ:\n  left: {:?}\n right: {:?}",
            left,
            right
        );
    };
}

/// Assert that a color renders as the given hex string.
///
/// The first argument must be a [`Color`](crate::Color) and the second
/// argument a hex string with leading `#`, which includes alpha only for
/// translucent colors. Since hex strings round the channels, this is the
/// usual way of checking the results of mixing and averaging.
///
/// # Panics
///
/// If the hex strings differ. The message includes the unrounded channels.
#[macro_export]
macro_rules! assert_same_color {
    ($color:expr, $hex:expr $(,)?) => {
        let (color, hex) = (&$color, $hex);
        assert_eq!(
            color.hex($crate::HexMode::Auto),
            hex,
            "colors differ for channels {:?}",
            color.channels()
        );
    };
}

/// Normalize a float for hashing and equality.
///
/// The result is the bit pattern of the float after mapping not-a-number to
/// zero, scaling and rounding away insignificant decimals, and mapping
/// negative zero to zero. It is public only for use by the
/// [`assert_close_enough`] macro.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(value: Float) -> Bits {
    if value.is_nan() {
        return (0.0 as Float).to_bits();
    }

    let rounded = (value * <Float as Precision>::EQ_SCALE).round();
    // Adding zero turns -0.0 into 0.0.
    (rounded + 0.0).to_bits()
}

#[cfg(test)]
mod test {
    use super::to_eq_bits;
    use crate::Float;

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(-1e-20), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.31));
    }
}
