//! # Precision
//!
//! How many fractional digits to keep, and how to round, when a ratio is turned into a
//! fixed-point decimal whose expansion does not terminate.
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Number of fractional digits kept by default.
pub const DEFAULT_SCALE: i64 = 32;
/// Rounding policy used by default.
pub const DEFAULT_ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

/// How to round a decimal value to a given scale.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero, truncating.
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// To the nearest neighbor, ties away from zero.
    HalfUp,
    /// To the nearest neighbor, ties towards zero.
    HalfDown,
    /// To the nearest neighbor, ties to the even neighbor.
    HalfEven,
}

/// Scale and rounding policy of a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Precision {
    /// Number of digits after the decimal point.
    pub scale: i64,
    /// What to do with the digits beyond the scale.
    pub rounding_mode: RoundingMode,
}

impl Precision {
    /// Create a new instance.
    pub fn new(scale: i64, rounding_mode: RoundingMode) -> Self {
        Self { scale, rounding_mode }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE, DEFAULT_ROUNDING_MODE)
    }
}

/// Divide two integers into a decimal with exactly `scale` fractional digits.
///
/// # Arguments
///
/// * `numerator`: Any integer.
/// * `denominator`: Strictly positive.
/// * `scale`: Number of fractional digits of the result, may be negative.
/// * `rounding_mode`: Applied to the remainder of the division.
pub(crate) fn divide_rounded(
    numerator: &BigInt,
    denominator: &BigInt,
    scale: i64,
    rounding_mode: RoundingMode,
) -> BigDecimal {
    debug_assert!(denominator.is_positive());

    let ten = BigInt::from(10);
    let (numerator, denominator) = match u32::try_from(scale.unsigned_abs()) {
        Ok(shift) if scale >= 0 => (numerator * ten.pow(shift), denominator.clone()),
        Ok(shift) => (numerator.clone(), denominator * ten.pow(shift)),
        // A scale this far out is not representable in any meaningful way.
        Err(_) => return BigDecimal::new(BigInt::zero(), scale),
    };

    let (quotient, remainder) = numerator.div_rem(&denominator);
    if remainder.is_zero() {
        return BigDecimal::new(quotient, scale);
    }

    let is_negative = numerator.is_negative();
    let twice_remainder = remainder.abs() * 2;
    let away_from_zero = match rounding_mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !is_negative,
        RoundingMode::Floor => is_negative,
        RoundingMode::HalfUp => twice_remainder >= denominator,
        RoundingMode::HalfDown => twice_remainder > denominator,
        RoundingMode::HalfEven => {
            twice_remainder > denominator || (twice_remainder == denominator && quotient.is_odd())
        },
    };

    let quotient = match (away_from_zero, is_negative) {
        (false, _) => quotient,
        (true, false) => quotient + BigInt::one(),
        (true, true) => quotient - BigInt::one(),
    };

    BigDecimal::new(quotient, scale)
}
