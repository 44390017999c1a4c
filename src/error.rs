//! # Error reporting
//!
//! Everything that can go wrong while creating or computing with a `Rational`. All of these are
//! input errors; nothing is retried and no value is ever partially constructed.
use std::error::Error as StdError;
use std::fmt;

/// Result of a fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` describes why an operation could not produce a value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// An operand was not usable as a number.
    ///
    /// The contained `String` is a message for the end user.
    InvalidArgument(String),
    /// A denominator was zero, or a divisor reduced to zero.
    DivisionByZero,
    /// The result could not be computed without losing precision.
    ///
    /// The contained `String` is a message for the end user.
    PrecisionLoss(String),
    /// Text could not be read as a number.
    Format(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "InvalidArgument: {}", message),
            Error::DivisionByZero => f.write_str("DivisionByZero: denominator may not be zero"),
            Error::PrecisionLoss(message) => write!(f, "PrecisionLoss: {}", message),
            Error::Format(error) => error.fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Format(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::Format(error)
    }
}

/// A `ParseError` is created when text matches neither the fraction nor the decimal grammar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    text: String,
}

impl ParseError {
    /// Create a new `ParseError`.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong with the text.
    /// * `text`: The text that was being parsed.
    pub fn new(description: impl Into<String>, text: impl Into<String>) -> Self {
        Self { description: description.into(), text: text.into() }
    }

    /// What's wrong with the text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The text that could not be parsed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {} (input \"{}\")", self.description, self.text)
    }
}

impl StdError for ParseError {}
