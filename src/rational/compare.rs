//! # Comparison
//!
//! Equality against several numeric representations, ordering and hashing. All of these look at
//! the value, not at the stored numerator and denominator.
//!
//! Two notions of comparison exist. The `equals` and `compare` methods may treat values that are
//! very close as equal: `equals` through their double approximation, `compare` through
//! rounding their difference at the configured scale. The `PartialEq`, `Eq`, `Ord` and `Hash`
//! implementations are exact and agree with each other.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::rational::Rational;
use crate::reduce::reduced_parts;

/// A number that a `Rational` can be compared with for equality.
///
/// Each variant is compared by converting the `Rational` into that representation, except when
/// comparing against another `Rational`.
#[derive(Copy, Clone, Debug)]
pub enum Number<'a> {
    /// Exact comparison of the reduced forms, falling back to comparing finite doubles.
    Rational(&'a Rational),
    /// Compared against the truncated integer value.
    Integer(&'a BigInt),
    /// Compared against the decimal value.
    Decimal(&'a BigDecimal),
    /// Compared against the double value.
    F64(f64),
    /// Compared against the single precision value.
    F32(f32),
    /// Compared against the truncated integer value, unequal if it doesn't fit.
    I64(i64),
    /// Compared against the truncated integer value, unequal if it doesn't fit.
    I32(i32),
    /// Compared against the truncated integer value, unequal if it doesn't fit.
    I16(i16),
    /// Compared against the truncated integer value, unequal if it doesn't fit.
    I8(i8),
}

impl<'a> From<&'a Rational> for Number<'a> {
    fn from(value: &'a Rational) -> Self {
        Number::Rational(value)
    }
}

impl<'a> From<&'a BigInt> for Number<'a> {
    fn from(value: &'a BigInt) -> Self {
        Number::Integer(value)
    }
}

impl<'a> From<&'a BigDecimal> for Number<'a> {
    fn from(value: &'a BigDecimal) -> Self {
        Number::Decimal(value)
    }
}

macro_rules! number_from {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl From<$t> for Number<'_> {
                fn from(value: $t) -> Self {
                    Number::$variant(value)
                }
            }
        )*
    };
}
number_from!(f64 => F64, f32 => F32, i64 => I64, i32 => I32, i16 => I16, i8 => I8);

impl Rational {
    /// Whether this value equals another number.
    ///
    /// See `Number` for how each representation is compared. Against another `Rational`, values
    /// that are exactly different but have the same double approximation are equal. This
    /// approximation doesn't depend on the scale and is only used when it is a normal double.
    pub fn equals<'a>(&self, other: impl Into<Number<'a>>) -> bool {
        match other.into() {
            Number::Rational(other) => {
                Self::compare_values(self, other) || matches!(
                    (self.approximation(), other.approximation()),
                    (Some(left), Some(right)) if left == right
                )
            },
            Number::Integer(other) => &self.to_integer() == other,
            Number::Decimal(other) => &self.to_decimal() == other,
            Number::F64(other) => self.to_f64() == Some(other),
            Number::F32(other) => self.to_f32() == Some(other),
            Number::I64(other) => self.to_i64() == Some(other),
            Number::I32(other) => self.to_i32() == Some(other),
            Number::I16(other) => self.to_i16() == Some(other),
            Number::I8(other) => self.to_i8() == Some(other),
        }
    }

    /// Whether the lowest terms forms of two values have the same numerator and denominator.
    pub fn compare_values(left: &Rational, right: &Rational) -> bool {
        reduced_parts(left) == reduced_parts(right)
    }

    /// Order two values by the sign of their difference, as a decimal.
    ///
    /// A difference that rounds to zero at the configured scale compares as equal.
    pub fn compare(&self, other: &Rational) -> Ordering {
        self.subtract(other).to_decimal().cmp(&BigDecimal::zero())
    }
}

/// Exact, see `compare_values`.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        Self::compare_values(self, other)
    }
}

impl Eq for Rational {}

macro_rules! eq_number {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Rational {
                fn eq(&self, other: &$t) -> bool {
                    self.equals(*other)
                }
            }
        )*
    };
}
eq_number!(f64, f32, i64, i32, i16, i8);

impl PartialEq<BigInt> for Rational {
    fn eq(&self, other: &BigInt) -> bool {
        self.equals(other)
    }
}

impl PartialEq<BigDecimal> for Rational {
    fn eq(&self, other: &BigDecimal) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exact ordering of the values, unlike `compare` it never rounds.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left_numerator, left_denominator) = reduced_parts(self);
        let (right_numerator, right_denominator) = reduced_parts(other);

        // Denominators are positive, so cross multiplying keeps the order.
        (left_numerator * right_denominator).cmp(&(right_numerator * left_denominator))
    }
}

/// Hashes the bits of the double approximation.
///
/// The approximation depends only on the lowest terms form, so equal values hash equal
/// whatever their scale and rounding mode.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.approximation().map(f64::to_bits).hash(state);
    }
}
