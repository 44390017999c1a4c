//! # Exact fractions
//!
//! An arbitrary precision rational number type. Values are kept as a numerator and a positive
//! denominator, both arbitrary precision decimals, and arithmetic on them is exact. Conversions
//! to fixed-point decimals and machine numbers are available, with explicit control over the
//! scale and rounding of non terminating quotients.
//!
//! Values are immutable, every operation creates a new value. They can be shared between threads
//! freely.
#![warn(missing_docs)]

pub mod error;
pub mod factors;
pub mod factory;
pub mod precision;
pub mod rational;
pub mod reduce;

pub use error::{Error, ParseError, Result};
pub use precision::{DEFAULT_ROUNDING_MODE, DEFAULT_SCALE, Precision, RoundingMode};
pub use rational::{Number, ONE, Rational, ZERO};
