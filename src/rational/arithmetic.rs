//! # Arithmetic
//!
//! Field operations, roots and powers. Operands are never modified, each operation creates a new
//! value.
use bigdecimal::BigDecimal;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::factors::least_common_multiple;
use crate::factory::decimal;
use crate::precision::Precision;
use crate::rational::Rational;
use crate::reduce::{self, reduced_parts};

const LOG_TARGET: &str = "exact_fraction::rational::arithmetic";

impl Rational {
    /// Scale and rounding policy of a binary operation's result.
    ///
    /// The largest scale of the two, the rounding mode of the right-hand side.
    fn combined_precision(&self, other: &Rational) -> Precision {
        Precision::new(self.scale().max(other.scale()), other.rounding_mode())
    }

    /// Equivalent value with integer numerator and denominator in lowest terms.
    pub fn reduce(&self) -> Rational {
        reduce::reduce(self)
    }

    /// Sum of two values.
    ///
    /// Both operands are reduced, after which the numerators are scaled to the least common
    /// multiple of the denominators. The result is not reduced further.
    pub fn add(&self, other: &Rational) -> Rational {
        let flags = self.flags().and(other.flags());
        let precision = self.combined_precision(other);

        let (left_numerator, left_denominator) = reduced_parts(self);
        let (right_numerator, right_denominator) = reduced_parts(other);

        if left_denominator == right_denominator {
            return Self::from_integer_parts(
                left_numerator + right_numerator,
                left_denominator,
                flags,
                precision,
            );
        }

        // A whole number is first moved to the other denominator.
        let (left_numerator, left_denominator) = if left_denominator.is_one() {
            (left_numerator * &right_denominator, right_denominator.clone())
        } else {
            (left_numerator, left_denominator)
        };

        let lcm = least_common_multiple(&left_denominator, &right_denominator)
            .expect("Denominators are never zero.");
        let left_scaled = left_numerator * (&lcm / &left_denominator);
        let right_scaled = right_numerator * (&lcm / &right_denominator);

        Self::from_integer_parts(left_scaled + right_scaled, lcm, flags, precision)
    }

    /// Difference of two values, `self + (-other)`.
    pub fn subtract(&self, other: &Rational) -> Rational {
        self.add(&other.negate())
    }

    /// Product of two values.
    ///
    /// Numerators and denominators are multiplied as stored, without reduction.
    pub fn multiply(&self, other: &Rational) -> Rational {
        Self::from_parts(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
            self.flags().and(other.flags()),
            self.combined_precision(other),
        )
    }

    /// Quotient of two values, `self * other^-1`.
    ///
    /// # Errors
    ///
    /// If `other` is zero.
    pub fn divide(&self, other: &Rational) -> Result<Rational> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(self.multiply(&other.invert()?))
    }

    /// Additive inverse.
    pub fn negate(&self) -> Rational {
        Self::from_parts(
            -self.numerator.clone(),
            self.denominator.clone(),
            self.flags(),
            self.precision(),
        )
    }

    /// Multiplicative inverse, swapping numerator and denominator.
    ///
    /// # Errors
    ///
    /// If the value is zero.
    pub fn invert(&self) -> Result<Rational> {
        if self.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(Self::from_parts(
            self.denominator.clone(),
            self.numerator.clone(),
            self.flags(),
            self.precision(),
        ))
    }

    /// Absolute value.
    pub fn abs(&self) -> Rational {
        Self::from_parts(
            self.numerator.abs(),
            self.denominator.clone(),
            self.flags(),
            self.precision(),
        )
    }

    /// Raise to an integer power, exactly.
    ///
    /// The result is in lowest terms. Any value to the power zero is one.
    ///
    /// # Errors
    ///
    /// If the value is zero and the exponent negative.
    pub fn pow(&self, exponent: i32) -> Result<Rational> {
        let (numerator, denominator) = reduced_parts(self);
        if exponent < 0 && numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let power = exponent.unsigned_abs();
        let (numerator, denominator) = (numerator.pow(power), denominator.pow(power));
        let (numerator, denominator) = if exponent < 0 {
            (denominator, numerator)
        } else {
            (numerator, denominator)
        };

        Ok(Self::from_integer_parts(numerator, denominator, self.flags(), self.precision()))
    }

    /// Approximate square root.
    ///
    /// The reduced numerator and denominator must both survive a round trip through a double
    /// exactly. Their roots are then computed in floating point and widened back into decimals.
    /// This is destructive: for perfect squares below 2^53 the result is exact, otherwise it has
    /// the error of a floating point root.
    ///
    /// # Errors
    ///
    /// If the value is negative, or if either reduced component can't be represented exactly as a
    /// double.
    pub fn sqrt(&self) -> Result<Rational> {
        let reduced = self.reduce();
        if reduced.is_negative() {
            return Err(Error::InvalidArgument(format!(
                "Square root of negative value {} is not a real number", self,
            )));
        }

        let exact_double = |component: &BigDecimal| {
            let double = component.to_f64()?;
            let widened = decimal::from_f64(double).ok()?;
            (&widened == component).then_some(double)
        };

        match (exact_double(reduced.numerator()), exact_double(reduced.denominator())) {
            (Some(numerator), Some(denominator)) => {
                let root = Self::from_parts(
                    decimal::from_f64(numerator.sqrt())?,
                    decimal::from_f64(denominator.sqrt())?,
                    reduced.flags(),
                    reduced.precision(),
                );
                tracing::debug!(
                    target: LOG_TARGET,
                    value = %reduced, %root,
                    "square root through f64",
                );

                Ok(root)
            },
            _ => {
                tracing::debug!(
                    target: LOG_TARGET,
                    value = %reduced,
                    "square root exactness guard failed",
                );

                Err(Error::PrecisionLoss(format!(
                    "{} can't be represented as a pair of doubles without losing precision",
                    reduced,
                )))
            },
        }
    }
}

mod field {
    mod add {
        use std::iter::Sum;
        use std::ops::Add;

        use num_traits::Zero;

        use crate::rational::Rational;

        impl Add for Rational {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Rational::add(&self, &rhs)
            }
        }

        impl Add<&Rational> for Rational {
            type Output = Self;

            fn add(self, rhs: &Rational) -> Self::Output {
                Rational::add(&self, rhs)
            }
        }

        impl Add<Rational> for &Rational {
            type Output = Rational;

            fn add(self, rhs: Rational) -> Self::Output {
                Rational::add(self, &rhs)
            }
        }

        impl Add for &Rational {
            type Output = Rational;

            fn add(self, rhs: Self) -> Self::Output {
                Rational::add(self, rhs)
            }
        }

        impl Sum for Rational {
            fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Rational::zero(), |total, item| Rational::add(&total, &item))
            }
        }
    }

    mod sub {
        use std::ops::Sub;

        use crate::rational::Rational;

        impl Sub for Rational {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                self.subtract(&rhs)
            }
        }

        impl Sub<&Rational> for Rational {
            type Output = Self;

            fn sub(self, rhs: &Rational) -> Self::Output {
                self.subtract(rhs)
            }
        }

        impl Sub for &Rational {
            type Output = Rational;

            fn sub(self, rhs: Self) -> Self::Output {
                self.subtract(rhs)
            }
        }
    }

    mod mul {
        use std::ops::Mul;

        use crate::rational::Rational;

        impl Mul for Rational {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                self.multiply(&rhs)
            }
        }

        impl Mul<&Rational> for Rational {
            type Output = Self;

            fn mul(self, rhs: &Rational) -> Self::Output {
                self.multiply(rhs)
            }
        }

        impl Mul for &Rational {
            type Output = Rational;

            fn mul(self, rhs: Self) -> Self::Output {
                self.multiply(rhs)
            }
        }
    }

    mod div {
        use std::ops::Div;

        use crate::rational::Rational;

        /// # Panics
        ///
        /// On division by zero, like integer division. Use `Rational::divide` to handle it.
        impl Div for Rational {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Div::div(&self, &rhs)
            }
        }

        impl Div<&Rational> for Rational {
            type Output = Self;

            fn div(self, rhs: &Rational) -> Self::Output {
                Div::div(&self, rhs)
            }
        }

        impl Div for &Rational {
            type Output = Rational;

            fn div(self, rhs: Self) -> Self::Output {
                match self.divide(rhs) {
                    Ok(quotient) => quotient,
                    Err(error) => panic!("{}", error),
                }
            }
        }
    }

    mod neg {
        use std::ops::Neg;

        use crate::rational::Rational;

        impl Neg for Rational {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.negate()
            }
        }

        impl Neg for &Rational {
            type Output = Rational;

            fn neg(self) -> Self::Output {
                self.negate()
            }
        }
    }

    mod identities {
        use num_traits::{One, Zero};

        use crate::rational::{ONE, Rational, ZERO};

        impl Zero for Rational {
            fn zero() -> Self {
                ZERO.clone()
            }

            fn is_zero(&self) -> bool {
                self.numerator().is_zero()
            }
        }

        impl One for Rational {
            fn one() -> Self {
                ONE.clone()
            }

            fn is_one(&self) -> bool {
                let reduced = self.reduce();
                reduced.numerator() == reduced.denominator()
            }
        }
    }
}
