//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

/// Worked examples, each with a known outcome.
mod scenarios;
/// Algebraic laws checked over grids of values.
mod properties;
