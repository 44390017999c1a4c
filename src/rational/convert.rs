//! # Conversions
//!
//! From machine numbers and arbitrary precision values into a `Rational`, and back.
//!
//! Conversions out of a `Rational` are destructive whenever the quotient doesn't terminate: the
//! digits beyond the configured scale, or beyond the precision of the target type, are lost.
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::precision::{divide_rounded, Precision, RoundingMode};
use crate::rational::{Flags, Rational};
use crate::reduce::{self, reduced_parts};

const LOG_TARGET: &str = "exact_fraction::rational::convert";

impl Rational {
    /// The value as a fixed-point decimal.
    ///
    /// Exact when the reduced denominator only has the prime factors 2 and 5. Otherwise the
    /// quotient is rounded to the configured scale with the configured rounding mode, which is
    /// destructive.
    pub fn to_decimal(&self) -> BigDecimal {
        let (numerator, denominator) = reduced_parts(self);

        match terminating_scale(&denominator) {
            Some(scale) => {
                let multiplier = BigInt::from(10).pow(scale) / &denominator;
                BigDecimal::new(numerator * multiplier, i64::from(scale))
            },
            None => {
                tracing::debug!(
                    target: LOG_TARGET,
                    %numerator, %denominator, scale = self.scale(),
                    "non terminating quotient, rounding",
                );
                divide_rounded(&numerator, &denominator, self.scale(), self.rounding_mode())
            },
        }
    }

    /// The value as a decimal with exactly `scale` fractional digits.
    ///
    /// Rounds with `rounding_mode` regardless of the configured precision.
    pub fn to_decimal_with(&self, scale: i64, rounding_mode: RoundingMode) -> BigDecimal {
        let (numerator, denominator) = reduced_parts(self);
        divide_rounded(&numerator, &denominator, scale, rounding_mode)
    }

    /// The integer part of the value, truncated towards zero.
    ///
    /// Computed from the exact quotient, regardless of the configured precision.
    pub fn to_integer(&self) -> BigInt {
        let (numerator, denominator) = reduced_parts(self);
        // Division of `BigInt`s truncates towards zero.
        numerator / denominator
    }

    /// Double nearest to the lowest terms quotient, independent of the configured precision.
    ///
    /// `None` if the value is not zero and the nearest double is not a normal number, which
    /// happens when the magnitude is beyond the range of a double.
    pub(crate) fn approximation(&self) -> Option<f64> {
        let (numerator, denominator) = reduced_parts(self);
        if numerator.is_zero() {
            return Some(0_f64);
        }

        let digits = |value: &BigInt| i64::try_from(value.magnitude().to_string().len()).ok();
        let scale = APPROXIMATION_DIGITS + digits(&denominator)? - digits(&numerator)?;
        let quotient = divide_rounded(&numerator, &denominator, scale, RoundingMode::HalfEven);

        quotient.to_f64().filter(|double| double.is_normal())
    }
}

/// Significant decimal digits computed before narrowing a quotient to a double.
const APPROXIMATION_DIGITS: i64 = 24;

/// Number of fractional digits of the exact decimal expansion of `1 / denominator`.
///
/// `None` if the expansion doesn't terminate, that is, if the denominator has a prime factor
/// other than 2 and 5.
fn terminating_scale(denominator: &BigInt) -> Option<u32> {
    debug_assert!(denominator.is_positive());

    let mut remaining = denominator.clone();
    let mut count_factor = |factor: u32| {
        let factor = BigInt::from(factor);
        let mut count = 0_u32;
        loop {
            let (quotient, remainder) = remaining.div_rem(&factor);
            if !remainder.is_zero() {
                break count;
            }
            remaining = quotient;
            count += 1;
        }
    };
    let twos = count_factor(2);
    let fives = count_factor(5);

    remaining.is_one().then(|| twos.max(fives))
}

mod creation {
    use num_traits::FromPrimitive;

    use crate::error::{Error, Result};
    use crate::factory::{decimal, integer};

    use super::*;

    macro_rules! from_integer {
        ($($t:ty),*) => {
            $(
                impl From<$t> for Rational {
                    fn from(value: $t) -> Self {
                        Self::from(BigInt::from(value))
                    }
                }
            )*
        };
    }
    from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

    impl From<BigInt> for Rational {
        fn from(value: BigInt) -> Self {
            Self::from_integer_parts(value, BigInt::one(), Flags::default(), Precision::default())
        }
    }

    impl From<&BigInt> for Rational {
        fn from(value: &BigInt) -> Self {
            Self::from(value.clone())
        }
    }

    /// The lowest terms ratio of a decimal, `0.125` becomes `1/8`.
    ///
    /// Fails if the decimal exponent is beyond `reduce::MAX_EXPONENT`.
    impl TryFrom<BigDecimal> for Rational {
        type Error = Error;

        fn try_from(value: BigDecimal) -> Result<Self> {
            Self::try_from(&value)
        }
    }

    impl TryFrom<&BigDecimal> for Rational {
        type Error = Error;

        fn try_from(value: &BigDecimal) -> Result<Self> {
            reduce::check_exponent(value)?;
            let (numerator, denominator) = reduce::integer_ratio(value);

            let ratio = Self::from_integer_parts(
                numerator,
                denominator,
                Flags::default(),
                Precision::default(),
            );
            Ok(ratio.reduce())
        }
    }

    impl TryFrom<f64> for Rational {
        type Error = Error;

        /// The lowest terms ratio of the shortest decimal representation of the double.
        fn try_from(value: f64) -> Result<Self> {
            decimal::from_f64(value).and_then(Self::try_from)
        }
    }

    impl TryFrom<f32> for Rational {
        type Error = Error;

        fn try_from(value: f32) -> Result<Self> {
            decimal::from_f32(value).and_then(Self::try_from)
        }
    }

    impl FromPrimitive for Rational {
        fn from_i64(n: i64) -> Option<Self> {
            Some(Self::from(integer::from_i64(n)))
        }

        fn from_u64(n: u64) -> Option<Self> {
            Some(Self::from(n))
        }

        fn from_f32(n: f32) -> Option<Self> {
            Self::try_from(n).ok()
        }

        fn from_f64(n: f64) -> Option<Self> {
            Self::try_from(n).ok()
        }
    }
}

/// Integer conversions truncate, float conversions go through `to_decimal`.
///
/// `None` is returned when the value doesn't fit the target type.
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer().to_i128()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer().to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        self.to_decimal().to_f32()
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_decimal().to_f64()
    }
}
