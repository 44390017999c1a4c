//! # Reduction
//!
//! Rewriting a fraction, possibly with fractional numerator or denominator, as a ratio of two
//! coprime integers.
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::factors::greatest_common_factor;
use crate::rational::{Rational, ZERO};

/// Largest magnitude of the decimal exponent of a stored numerator or denominator.
///
/// Values are rejected at construction beyond this bound. Products that grow past it are
/// rewritten as integers in lowest terms.
pub const MAX_EXPONENT: i64 = 1 << 16;

/// An equivalent value with an integer numerator and denominator in lowest terms.
///
/// Scale, rounding mode and flags of the input are carried over. A zero value reduces to `0/1`.
pub fn reduce(value: &Rational) -> Rational {
    if value.numerator().is_zero() {
        return ZERO.clone().with_precision(value.precision());
    }

    let (numerator, denominator) = reduced_parts(value);
    Rational::from_integer_parts(numerator, denominator, value.flags(), value.precision())
}

/// Numerator and denominator of the lowest terms form of a value.
///
/// The denominator is strictly positive, a zero value gives `(0, 1)`.
pub(crate) fn reduced_parts(value: &Rational) -> (BigInt, BigInt) {
    lowest_terms(value.numerator(), value.denominator())
}

/// Lowest terms integer ratio of `numerator / denominator`.
///
/// The denominator should be strictly positive.
pub(crate) fn lowest_terms(numerator: &BigDecimal, denominator: &BigDecimal) -> (BigInt, BigInt) {
    if numerator.is_zero() {
        return (BigInt::zero(), BigInt::one());
    }

    let (top_numerator, top_denominator) = integer_ratio(numerator);
    let (bottom_numerator, bottom_denominator) = integer_ratio(denominator);

    // (a / b) / (c / d) = (a * d) / (b * c), with c > 0
    let numerator = top_numerator * bottom_denominator;
    let denominator = top_denominator * bottom_numerator;

    let gcf = greatest_common_factor(&numerator, &denominator);
    (numerator / &gcf, denominator / gcf)
}

/// Whether the exponent of a decimal is at most `MAX_EXPONENT` in magnitude.
pub(crate) fn exponent_in_range(component: &BigDecimal) -> bool {
    let (_, exponent) = component.as_bigint_and_exponent();
    exponent.unsigned_abs() <= MAX_EXPONENT.unsigned_abs()
}

/// Check a decimal given by a caller before it is stored.
///
/// # Errors
///
/// If the exponent of the decimal is beyond `MAX_EXPONENT`.
pub(crate) fn check_exponent(component: &BigDecimal) -> Result<()> {
    if exponent_in_range(component) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "Decimal exponent is beyond the supported range of -{0} to {0}", MAX_EXPONENT,
        )))
    }
}

/// Write a decimal as an integer over a power of ten.
///
/// The sign is carried by the first element, the second is always positive. Nothing is
/// simplified: `1.50` becomes `150 / 100`.
///
/// The exponent should be at most twice `MAX_EXPONENT` in magnitude, which holds for every
/// stored component and every product of two of them.
pub(crate) fn integer_ratio(component: &BigDecimal) -> (BigInt, BigInt) {
    let (digits, exponent) = component.as_bigint_and_exponent();
    let ten = BigInt::from(10);

    let shift = u32::try_from(exponent.unsigned_abs())
        .expect("Decimal exponents are bounded on construction.");

    if exponent > 0 {
        (digits, ten.pow(shift))
    } else {
        (digits * ten.pow(shift), BigInt::one())
    }
}
