//! # Factors and multiples
//!
//! Greatest common factors and least common multiples of arbitrary size integers, used to reduce
//! fractions and to find common denominators.
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Largest value dividing both `|left|` and `|right|`.
///
/// Computed with the Euclidean algorithm. When one of the two is zero, the absolute value of the
/// other is returned; `gcf(0, 0)` is zero.
pub fn greatest_common_factor(left: &BigInt, right: &BigInt) -> BigInt {
    let (mut first, mut second) = {
        let (left, right) = (left.abs(), right.abs());
        if left < right { (right, left) } else { (left, right) }
    };

    while !second.is_zero() {
        let remainder = &first % &second;
        first = second;
        second = remainder;
    }

    first
}

/// Smallest non negative value that is a multiple of both `left` and `right`.
///
/// # Return value
///
/// `None` if both inputs are zero, for which the least common multiple is undefined.
pub fn least_common_multiple(left: &BigInt, right: &BigInt) -> Option<BigInt> {
    let gcf = greatest_common_factor(left, right);
    if gcf.is_zero() {
        None
    } else {
        // Divide before multiplying to keep the intermediate small.
        Some((left.abs() / gcf) * right.abs())
    }
}

/// Whether one of the two values divides the other.
pub fn are_factors(left: &BigInt, right: &BigInt) -> bool {
    let divides = |divisor: &BigInt, value: &BigInt| {
        !divisor.is_zero() && (value % divisor).is_zero()
    };

    divides(right, left) || divides(left, right)
}
