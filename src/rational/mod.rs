//! # Rational numbers
//!
//! An arbitrary precision fraction. Numerator and denominator are stored as given, as decimals,
//! only normalized such that the denominator is positive. Arithmetic reduces where needed and
//! every operation returns a new value.
//!
//! Operations that may not be re-derivable back to an exact value, such as conversion to a
//! fixed-point decimal of a non terminating quotient, are marked as destructive in their
//! documentation.
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::{Error, Result};
use crate::factory::decimal;
use crate::precision::{Precision, RoundingMode};
use crate::reduce;

pub use compare::Number;

mod arithmetic;
mod compare;
mod convert;
mod parse;
mod macros;

/// The value zero, `0/1`.
pub static ZERO: LazyLock<Rational> = LazyLock::new(|| Rational::from(0));
/// The value one, `1/1`.
pub static ONE: LazyLock<Rational> = LazyLock::new(|| Rational::from(1));

/// An arbitrary precision fraction with a positive denominator.
///
/// Equality, ordering and hashing are defined on the value, not on the representation: `2/4`
/// and `1/2` are equal and hash the same.
#[derive(Clone, Debug)]
pub struct Rational {
    numerator: BigDecimal,
    denominator: BigDecimal,
    flags: Flags,
    precision: Precision,
}

/// Informational flags, combined by logical and in every operation.
///
/// These are never derived from the value itself.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Flags {
    is_rational: bool,
    is_complex: bool,
}

impl Flags {
    pub(crate) fn new(is_rational: bool, is_complex: bool) -> Self {
        Self { is_rational, is_complex }
    }

    pub(crate) fn and(self, other: Self) -> Self {
        Self::new(self.is_rational && other.is_rational, self.is_complex && other.is_complex)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Rational {
    /// Create a new instance from a numerator and denominator.
    ///
    /// Accepts anything that converts losslessly into a decimal, such as `BigInt`, `BigDecimal`
    /// and the machine integers. The sign is moved to the numerator. Scale and rounding mode
    /// take their default values.
    ///
    /// # Errors
    ///
    /// If the denominator is zero, or if the decimal exponent of either is beyond
    /// `reduce::MAX_EXPONENT`.
    pub fn new(
        numerator: impl Into<BigDecimal>,
        denominator: impl Into<BigDecimal>,
    ) -> Result<Self> {
        Self::with_flags(numerator, denominator, true, false)
    }

    /// Create a new instance from two doubles.
    ///
    /// Both are widened to decimals through their shortest round-trip decimal representation
    /// before being stored.
    ///
    /// # Errors
    ///
    /// If either value is not finite, or if the denominator is zero.
    pub fn from_floats(numerator: f64, denominator: f64) -> Result<Self> {
        Self::new(decimal::from_f64(numerator)?, decimal::from_f64(denominator)?)
    }

    /// Create a new instance with explicit informational flags.
    ///
    /// # Errors
    ///
    /// If the denominator is zero, or if the decimal exponent of either is beyond
    /// `reduce::MAX_EXPONENT`.
    pub fn with_flags(
        numerator: impl Into<BigDecimal>,
        denominator: impl Into<BigDecimal>,
        is_rational: bool,
        is_complex: bool,
    ) -> Result<Self> {
        let (numerator, denominator) = (numerator.into(), denominator.into());
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        reduce::check_exponent(&numerator)?;
        reduce::check_exponent(&denominator)?;

        Ok(Self::from_parts(
            numerator,
            denominator,
            Flags::new(is_rational, is_complex),
            Precision::default(),
        ))
    }

    /// Create a new instance carrying over flags and precision.
    ///
    /// The denominator should not be zero and the exponents of both should be at most twice
    /// `reduce::MAX_EXPONENT` in magnitude. The sign gets normalized, and components with an
    /// exponent beyond `reduce::MAX_EXPONENT` are replaced by the lowest terms integer ratio.
    pub(crate) fn from_parts(
        numerator: BigDecimal,
        denominator: BigDecimal,
        flags: Flags,
        precision: Precision,
    ) -> Self {
        debug_assert!(!denominator.is_zero());

        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let in_range = reduce::exponent_in_range;
        let (numerator, denominator) = if in_range(&numerator) && in_range(&denominator) {
            (numerator, denominator)
        } else {
            let (numerator, denominator) = reduce::lowest_terms(&numerator, &denominator);
            (decimal::from_integer(&numerator), decimal::from_integer(&denominator))
        };

        Self { numerator, denominator, flags, precision }
    }

    pub(crate) fn from_integer_parts(
        numerator: BigInt,
        denominator: BigInt,
        flags: Flags,
        precision: Precision,
    ) -> Self {
        Self::from_parts(
            decimal::from_integer(&numerator),
            decimal::from_integer(&denominator),
            flags,
            precision,
        )
    }

    /// The numerator as stored, carrying the sign of the value.
    pub fn numerator(&self) -> &BigDecimal {
        &self.numerator
    }

    /// The denominator as stored, always strictly positive.
    pub fn denominator(&self) -> &BigDecimal {
        &self.denominator
    }

    /// Number of fractional digits kept when converting to a decimal.
    pub fn scale(&self) -> i64 {
        self.precision.scale
    }

    /// Rounding policy used when converting to a decimal.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.precision.rounding_mode
    }

    /// Scale and rounding policy together.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// The same value with a different scale.
    pub fn with_scale(self, scale: i64) -> Self {
        Self { precision: Precision { scale, ..self.precision }, ..self }
    }

    /// The same value with a different rounding policy.
    pub fn with_rounding_mode(self, rounding_mode: RoundingMode) -> Self {
        Self { precision: Precision { rounding_mode, ..self.precision }, ..self }
    }

    /// The same value with a different scale and rounding policy.
    pub fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    /// Informational flag, `true` unless set otherwise at construction.
    pub fn is_rational(&self) -> bool {
        self.flags.is_rational
    }

    /// Negation of `is_rational`.
    pub fn is_irrational(&self) -> bool {
        !self.flags.is_rational
    }

    /// Informational flag, `false` unless set otherwise at construction.
    pub fn is_complex(&self) -> bool {
        self.flags.is_complex
    }

    /// Whether the value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub(crate) fn flags(&self) -> Flags {
        self.flags
    }
}
