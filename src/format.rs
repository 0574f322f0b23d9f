//! Fixed-precision display formatting for metric values.

/// Decimal places used for small-magnitude values when no explicit
/// precision is requested.
const DEFAULT_DIGITS: usize = 3;

/// Format a metric value for display with the default precision.
///
/// Missing, NaN, and infinite values render as `N/A` with the unit
/// omitted. Larger magnitudes get fewer decimal places so the metric
/// table stays aligned and readable.
pub fn fmt(value: Option<f64>, unit: &str) -> String {
    fmt_digits(value, unit, DEFAULT_DIGITS)
}

/// Format a metric value, using `digits` decimal places for magnitudes
/// below 10. Magnitudes of 100 and above always get one decimal place,
/// and magnitudes of 10 and above two.
pub fn fmt_digits(value: Option<f64>, unit: &str, digits: usize) -> String {
    let val = match value {
        Some(v) if v.is_finite() => v,
        _ => return "N/A".to_string(),
    };

    if val.abs() >= 100.0 {
        format!("{:.1}{}", val, unit)
    } else if val.abs() >= 10.0 {
        format!("{:.2}{}", val, unit)
    } else {
        format!("{:.*}{}", digits, val, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_magnitude_one_decimal() {
        assert_eq!(fmt(Some(150.4), ""), "150.4");
        assert_eq!(fmt(Some(1_234_567.0), ""), "1234567.0");
    }

    #[test]
    fn test_medium_magnitude_two_decimals() {
        // The nearest f64 to 42.345 is just below it, so it rounds down
        assert_eq!(fmt(Some(42.345), ""), "42.34");
        assert_eq!(fmt(Some(42.375), ""), "42.38");
        assert_eq!(fmt(Some(10.0), ""), "10.00");
    }

    #[test]
    fn test_small_magnitude_three_decimals() {
        assert_eq!(fmt(Some(5.1234), ""), "5.123");
        assert_eq!(fmt(Some(2.0), ""), "2.000");
        assert_eq!(fmt(Some(0.5), ""), "0.500");
    }

    #[test]
    fn test_missing_is_na() {
        assert_eq!(fmt(None, ""), "N/A");
        assert_eq!(fmt(None, "%"), "N/A");
    }

    #[test]
    fn test_nan_and_infinity_are_na() {
        assert_eq!(fmt(Some(f64::NAN), ""), "N/A");
        assert_eq!(fmt(Some(f64::INFINITY), ""), "N/A");
        assert_eq!(fmt(Some(f64::NEG_INFINITY), ""), "N/A");
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(fmt(Some(3.14159), "%"), "3.142%");
        assert_eq!(fmt(Some(250.0), "%"), "250.0%");
    }

    #[test]
    fn test_negative_magnitudes() {
        assert_eq!(fmt(Some(-150.44), ""), "-150.4");
        assert_eq!(fmt(Some(-42.345), ""), "-42.34");
        assert_eq!(fmt(Some(-5.1234), ""), "-5.123");
    }

    #[test]
    fn test_custom_digits() {
        assert_eq!(fmt_digits(Some(0.123456), "", 5), "0.12346");
        // Tier thresholds override the custom precision
        assert_eq!(fmt_digits(Some(42.345), "", 5), "42.34");
    }
}
