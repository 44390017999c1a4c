use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use itertools::iproduct;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use exact_fraction::factors::greatest_common_factor;
use exact_fraction::{DEFAULT_SCALE, Error, Precision, R, Rational, RoundingMode};

fn values() -> Vec<Rational> {
    iproduct!([-7, -2, 0, 1, 3, 12], [-4, 1, 3, 6])
        .map(|(numerator, denominator)| R!(numerator, denominator))
        .collect()
}

fn precisions() -> [Precision; 4] {
    [
        Precision::default(),
        Precision::new(2, RoundingMode::Down),
        Precision::new(0, RoundingMode::Up),
        Precision::new(DEFAULT_SCALE + 8, RoundingMode::HalfEven),
    ]
}

/// The same values, each at several scales and rounding modes.
fn values_with_precisions() -> Vec<Rational> {
    iproduct!(values(), precisions())
        .map(|(value, precision)| value.with_precision(precision))
        .collect()
}

fn hash(value: &Rational) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn addition_commutes() {
    let values = values();
    for (left, right) in iproduct!(&values, &values) {
        assert_eq!(left.add(right), right.add(left), "{} + {}", left, right);
    }
}

#[test]
fn addition_associates() {
    let values = values();
    for (a, b, c) in iproduct!(&values, &values, &values) {
        assert_eq!(a.add(b).add(c), a.add(&b.add(c)));
    }
}

#[test]
fn multiplication_distributes() {
    let values = values();
    for (a, b, c) in iproduct!(&values, &values, &values) {
        assert_eq!(a.multiply(&b.add(c)), a.multiply(b).add(&a.multiply(c)));
    }
}

#[test]
fn subtraction_inverts_addition() {
    let values = values();
    for (left, right) in iproduct!(&values, &values) {
        assert_eq!(left.add(right).subtract(right), *left);
        assert!(left.subtract(left).is_zero());
    }
}

#[test]
fn division_inverts_multiplication() {
    let values = values();
    for (left, right) in iproduct!(&values, &values) {
        match left.multiply(right).divide(right) {
            Ok(quotient) => assert_eq!(quotient, *left),
            Err(error) => {
                assert_eq!(error, Error::DivisionByZero);
                assert!(right.is_zero());
            },
        }
    }
}

#[test]
fn reduction_is_lowest_terms() {
    for value in values() {
        let reduced = value.reduce();
        assert_eq!(reduced, value);
        assert_eq!(reduced.reduce().to_string(), reduced.to_string());

        let (numerator, numerator_exponent) = reduced.numerator().as_bigint_and_exponent();
        let (denominator, denominator_exponent) = reduced.denominator().as_bigint_and_exponent();
        assert_eq!((numerator_exponent, denominator_exponent), (0, 0));
        assert!(denominator > BigInt::zero());
        assert!(greatest_common_factor(&numerator, &denominator).is_one() || numerator.is_zero());
    }
}

#[test]
fn equal_values_hash_equal() {
    let values = values_with_precisions();
    for (left, right) in iproduct!(&values, &values) {
        if left == right {
            assert_eq!(hash(left), hash(right), "{} and {}", left, right);
        }
    }
}

#[test]
fn precision_is_not_part_of_the_value() {
    for (value, precision) in iproduct!(values(), precisions()) {
        let rescaled = value.clone().with_precision(precision);
        assert_eq!(rescaled, value);
        assert!(rescaled.equals(&value));
        assert_eq!(rescaled.cmp(&value), std::cmp::Ordering::Equal);
        assert_eq!(hash(&rescaled), hash(&value));
    }
}

#[test]
fn equality_agrees_with_ordering() {
    let values = values_with_precisions();
    for (left, right) in iproduct!(&values, &values) {
        assert_eq!(left == right, left.cmp(right) == std::cmp::Ordering::Equal);
    }
}

#[test]
fn ordering_matches_difference() {
    let values = values_with_precisions();
    for (left, right) in iproduct!(&values, &values) {
        let difference = left.subtract(right);
        let expected = if difference.is_zero() {
            std::cmp::Ordering::Equal
        } else if difference.is_negative() {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        };
        assert_eq!(left.cmp(right), expected, "{} vs {}", left, right);
    }
}

#[test]
fn text_round_trip() {
    for value in values() {
        let read: Rational = value.to_string().parse().unwrap();
        assert_eq!(read.to_string(), value.to_string());

        let reduced: Rational = value.to_reduced_string().parse().unwrap();
        assert_eq!(reduced, value);
    }
}
