/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::Rational::try_from($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational::new($numer as i64, $denom as i64).unwrap()
    };
}
