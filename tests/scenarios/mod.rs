use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use exact_fraction::factors::{are_factors, greatest_common_factor, least_common_multiple};
use exact_fraction::reduce::reduce;
use exact_fraction::{Error, ONE, R, Rational, RoundingMode, ZERO};

fn d(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap()
}

#[test]
fn thirds_sum_to_one() {
    let sum = R!(2, 3).add(&R!(1, 3));
    assert_eq!(sum, *ONE);
    assert_eq!(sum.to_reduced_string(), "1/1");
}

#[test]
fn eighths_and_a_decimal() {
    let eighth: Rational = "0.125".parse().unwrap();
    assert!(R!(7, 8).add(&eighth).equals(1_i32));
}

#[test]
fn sixteenths() {
    let sum = R!(1, 16) + R!(2, 16);
    assert_eq!(sum.to_string(), "3/16");
}

#[test]
fn quotients_of_whole_numbers() {
    for (numerator, denominator) in [(1, 4), (1, 3), (2, 3), (5, 4)] {
        let quotient = R!(numerator, 1).divide(&R!(denominator, 1)).unwrap();
        assert_eq!(quotient, R!(numerator, denominator));
    }
}

#[test]
fn root_of_four() {
    let root = R!(4, 1).sqrt().unwrap();
    assert!(root.equals(2_i32));
    assert_eq!(root.to_i64(), Some(2));
}

#[test]
fn compares_with_decimal() {
    let decimal: Rational = "0.125".parse().unwrap();
    assert_eq!(R!(1, 8).compare(&decimal), std::cmp::Ordering::Equal);
    assert_eq!(R!(1, 8).to_decimal(), d("0.125"));
}

#[test]
fn zero_denominator_is_rejected() {
    let error = Rational::new(1, 0).unwrap_err();
    assert_eq!(error, Error::DivisionByZero);
    assert_eq!(error.to_string(), "DivisionByZero: denominator may not be zero");
}

#[test]
fn sign_moves_to_numerator() {
    for value in [R!(1, -2), R!(-1, 2), "1/-2".parse().unwrap()] {
        assert!(!value.denominator().to_string().starts_with('-'));
        assert!(value.is_negative());
        assert_eq!(value, R!(-1, 2));
    }
}

#[test]
fn additive_and_multiplicative_inverses() {
    let value = R!(-22, 7);
    assert_eq!(value.add(&value.negate()), *ZERO);
    assert_eq!(value.divide(&value).unwrap(), *ONE);
    assert_eq!(value.multiply(&value.invert().unwrap()), *ONE);
}

#[test]
fn decimal_components() {
    let left = Rational::new(d("0.31942"), 1).unwrap();
    let right = Rational::new(d("0.1"), 1).unwrap();
    assert_eq!(left.add(&right).to_decimal(), d("0.41942"));
}

#[test]
fn decimal_from_double() {
    let value = Rational::try_from(0.123456).unwrap();
    assert_eq!(value.to_string(), "1929/15625");
    assert_eq!(value.to_decimal(), d("0.123456"));
}

#[test]
fn difference_to_zero() {
    let difference = R!(3, 20) - R!(1, 20) - R!(1, 10);
    assert!(difference.equals(0_i32));
    assert_eq!(R!(1) - R!(1, 5), R!(8, 10));
}

#[test]
fn reduction() {
    let reduced = reduce(&Rational::new(d("2.5"), d("0.75")).unwrap());
    assert_eq!(reduced.to_string(), "10/3");

    let reduced = reduce(&R!(0, -17).with_scale(5));
    assert_eq!(reduced.to_string(), "0/1");
    assert_eq!(reduced.scale(), 5);
}

#[test]
fn factors() {
    let (a, b) = (BigInt::from(84), BigInt::from(-36));
    assert_eq!(greatest_common_factor(&a, &b), BigInt::from(12));
    assert_eq!(least_common_multiple(&a, &b), Some(BigInt::from(252)));
    assert!(!are_factors(&a, &b));
    assert!(are_factors(&BigInt::from(8), &BigInt::from(-24)));
    assert!(!are_factors(&BigInt::from(8), &BigInt::from(15)));
    assert_eq!(least_common_multiple(&BigInt::from(0), &BigInt::from(0)), None);
}

#[test]
fn configured_rounding() {
    let value = R!(5, 6).with_scale(3).with_rounding_mode(RoundingMode::Floor);
    assert_eq!(value.to_decimal(), d("0.833"));
    assert_eq!(value.with_rounding_mode(RoundingMode::HalfUp).to_decimal(), d("0.833"));
    let negative = R!(-5, 6).with_scale(2).with_rounding_mode(RoundingMode::Floor);
    assert_eq!(negative.to_decimal(), d("-0.84"));
}

#[test]
fn parse_errors() {
    for text in ["", "abc", "1/", "/2", "1.2.3", "1/2/3", "1e4"] {
        let error = text.parse::<Rational>().unwrap_err();
        assert!(matches!(error, Error::Format(_)), "{:?}", text);
        assert!(error.to_string().starts_with("ParseError"));
    }
}

#[test]
fn display_round_trips() {
    let values = [
        R!(3, 7),
        R!(-22, 8),
        Rational::new(d("0.005"), d("-1.5")).unwrap(),
        R!(0.1).add(&R!(2, 3)),
    ];
    for value in values {
        let read: Rational = value.to_string().parse().unwrap();
        assert_eq!(read, value);
        assert_eq!(read.to_string(), value.to_string());
    }
}

#[test]
fn values_beyond_double_range() {
    let ten = BigInt::from(10);
    let huge = Rational::from(ten.pow(400));
    let larger = Rational::from(ten.pow(401));
    assert!(!huge.equals(&larger));
    assert_ne!(huge, larger);
    assert!(huge < larger);
    assert_eq!(larger.divide(&huge).unwrap(), R!(10));
}

#[test]
fn decimal_exponent_out_of_range() {
    let tiny = BigDecimal::new(BigInt::from(1), 5_000_000_000);
    assert!(matches!(Rational::new(tiny.clone(), 1), Err(Error::InvalidArgument(_))));
    assert!(matches!(Rational::try_from(tiny), Err(Error::InvalidArgument(_))));
}
