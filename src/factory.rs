//! # Factories
//!
//! Creation of the arbitrary precision values that back a `Rational` from primitives and text.
//! Each function produces a value that is equal to its input, nothing more.
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::{Error, ParseError, Result};

/// Arbitrary precision decimals.
pub mod decimal {
    use super::*;

    /// Widen a double through its shortest round-trip decimal representation.
    ///
    /// `0.1` becomes exactly `0.1`, not the binary expansion of the nearest double.
    ///
    /// # Errors
    ///
    /// If the value is NaN or infinite.
    pub fn from_f64(value: f64) -> Result<BigDecimal> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument(format!("{} is not a finite number", value)));
        }

        from_plain_text(&value.to_string())
    }

    /// Widen a single precision float through its shortest round-trip decimal representation.
    ///
    /// # Errors
    ///
    /// If the value is NaN or infinite.
    pub fn from_f32(value: f32) -> Result<BigDecimal> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument(format!("{} is not a finite number", value)));
        }

        from_plain_text(&value.to_string())
    }

    /// Exact decimal value of an integer.
    pub fn from_integer(value: &BigInt) -> BigDecimal {
        BigDecimal::new(value.clone(), 0)
    }

    /// Exact decimal value of a machine integer.
    pub fn from_i64(value: i64) -> BigDecimal {
        BigDecimal::from(value)
    }

    fn from_plain_text(text: &str) -> Result<BigDecimal> {
        BigDecimal::from_str(text)
            .map_err(|_| Error::Format(ParseError::new("Not a decimal number", text)))
    }
}

/// Arbitrary precision integers.
pub mod integer {
    use super::*;

    /// Exact integer value of a machine integer.
    pub fn from_i64(value: i64) -> BigInt {
        BigInt::from(value)
    }

    /// Read a signed sequence of decimal digits.
    ///
    /// # Errors
    ///
    /// If the text contains anything but an optional leading `-` and at least one digit.
    pub fn from_digits(text: &str) -> Result<BigInt> {
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(Error::Format(ParseError::new("Expected a signed integer", text)));
        }

        BigInt::from_str(text)
            .map_err(|_| Error::Format(ParseError::new("Expected a signed integer", text)))
    }
}
