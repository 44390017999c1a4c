//! # Parsing and formatting
//!
//! Reading values from text and writing them back.
//!
//! Two grammars are recognized, `[-]numerator/[-]denominator` and the decimal `[-]digits[.digits]`
//! (the integer digits may be left out: `-.5`). Each side of a fraction may itself be a decimal,
//! so the output of `Display` can always be read back.
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Signed;

use crate::error::{Error, ParseError, Result};
use crate::factory::integer;
use crate::rational::Rational;
use crate::reduce::integer_ratio;

const EXPECTATION: &str = "Expected [-]integer/[-]integer or a decimal number";

impl FromStr for Rational {
    type Err = Error;

    /// Decimals are converted to their lowest terms ratio, fractions are stored as written.
    ///
    /// # Errors
    ///
    /// A format error if the text matches neither grammar, division by zero for a zero
    /// denominator.
    fn from_str(text: &str) -> Result<Self> {
        match text.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = Raw::read(numerator, text)?;
                let denominator = Raw::read(denominator, text)?;

                Rational::new(BigDecimal::from(numerator), BigDecimal::from(denominator))
            },
            None => Rational::try_from(BigDecimal::from(Raw::read(text, text)?)),
        }
    }
}

impl TryFrom<&str> for Rational {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        text.parse()
    }
}

/// Intermediate form of a decimal read from text.
#[derive(Eq, PartialEq, Clone, Debug)]
struct Raw {
    sign: Sign,
    integer: BigInt,
    decimal_steps_from_right: u32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Sign {
    Positive,
    Negative,
}

impl Raw {
    /// Read one decimal.
    ///
    /// # Arguments
    ///
    /// * `part`: Text of the decimal.
    /// * `text`: Entire input, for error reporting.
    fn read(part: &str, text: &str) -> std::result::Result<Self, ParseError> {
        let error = || ParseError::new(EXPECTATION, text);

        let (sign, unsigned) = match part.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, part),
        };

        let (integer_part, mantissa_part) = match unsigned.split_once('.') {
            None => (unsigned, ""),
            Some((_, "")) => return Err(error()),
            Some((integer_part, mantissa_part)) => (integer_part, mantissa_part),
        };
        if integer_part.is_empty() && mantissa_part.is_empty() {
            return Err(error());
        }
        let all_digits = |digits: &str| digits.bytes().all(|byte| byte.is_ascii_digit());
        if !all_digits(integer_part) || !all_digits(mantissa_part) {
            return Err(error());
        }

        let decimal_steps_from_right = u32::try_from(mantissa_part.len()).map_err(|_| error())?;
        let digits = format!("{}{}", integer_part, mantissa_part);
        let integer = integer::from_digits(&digits).map_err(|_| error())?;

        Ok(Self { sign, integer, decimal_steps_from_right })
    }
}

impl From<Raw> for BigDecimal {
    fn from(value: Raw) -> Self {
        let Raw { sign, integer, decimal_steps_from_right } = value;

        let signed = match sign {
            Sign::Positive => integer,
            Sign::Negative => -integer,
        };

        BigDecimal::new(signed, i64::from(decimal_steps_from_right))
    }
}

impl Rational {
    /// The lowest terms form as `numerator/denominator`.
    pub fn to_reduced_string(&self) -> String {
        self.reduce().to_string()
    }
}

/// Writes `numerator/denominator` as stored, not reduced.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plain(f, self.numerator())?;
        f.write_str("/")?;
        write_plain(f, self.denominator())
    }
}

/// Write a decimal in positional notation, never with an exponent.
fn write_plain(f: &mut fmt::Formatter<'_>, value: &BigDecimal) -> fmt::Result {
    let (digits, exponent) = value.as_bigint_and_exponent();
    if exponent <= 0 {
        let (integer, _) = integer_ratio(value);
        return write!(f, "{}", integer);
    }

    let steps = usize::try_from(exponent).map_err(|_| fmt::Error)?;
    let magnitude = format!("{:0>width$}", digits.abs().to_string(), width = steps + 1);
    let (integer_part, mantissa_part) = magnitude.split_at(magnitude.len() - steps);
    let sign = if digits.is_negative() { "-" } else { "" };

    write!(f, "{}{}.{}", sign, integer_part, mantissa_part)
}
