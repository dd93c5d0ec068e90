//! Display formatting policy.
//!
//! Two rules bound what the primary display can show: typed input stops
//! at [`MAX_INPUT_LEN`] characters, and computed results whose shortest
//! decimal form would overflow that width are rounded to 10 significant
//! digits. The rounding is cosmetic; stored operands keep the
//! full-precision form from [`canonical`].

/// Maximum number of characters the user can type into the display.
pub const MAX_INPUT_LEN: usize = 12;

/// Significant digits kept when a result is too wide to display as-is.
pub const DISPLAY_PRECISION: usize = 10;

/// Formats a computed value for the primary display.
#[must_use]
pub fn format_display(value: f64) -> String {
    let full = canonical(value);
    if full.len() > MAX_INPUT_LEN {
        canonical(round_significant(value, DISPLAY_PRECISION))
    } else {
        full
    }
}

/// Shortest decimal form of a value; this is what gets stored as an
/// operand for subsequent calculations.
#[must_use]
pub fn canonical(value: f64) -> String {
    value.to_string()
}

/// Rounds a value to `digits` significant digits.
#[must_use]
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }
    // Render in scientific notation at the target precision, then reparse.
    format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== round_significant tests =====

    #[test]
    fn test_round_significant_third() {
        let third = 1.0 / 3.0;
        assert_eq!(round_significant(third, 10), 0.333_333_333_3);
    }

    #[test]
    fn test_round_significant_negative() {
        let value = -2.0 / 3.0;
        assert_eq!(round_significant(value, 10), -0.666_666_666_7);
    }

    #[test]
    fn test_round_significant_integer_unchanged() {
        assert_eq!(round_significant(42.0, 10), 42.0);
    }

    #[test]
    fn test_round_significant_zero() {
        assert_eq!(round_significant(0.0, 10), 0.0);
    }

    #[test]
    fn test_round_significant_zero_digits() {
        assert_eq!(round_significant(1.5, 0), 1.5);
    }

    // ===== canonical tests =====

    #[test]
    fn test_canonical_integer() {
        assert_eq!(canonical(7.0), "7");
        assert_eq!(canonical(-42.0), "-42");
    }

    #[test]
    fn test_canonical_decimal() {
        assert_eq!(canonical(3.5), "3.5");
        assert_eq!(canonical(0.125), "0.125");
    }

    // ===== format_display tests =====

    #[test]
    fn test_format_display_short_values_unchanged() {
        assert_eq!(format_display(7.0), "7");
        assert_eq!(format_display(3.5), "3.5");
        assert_eq!(format_display(-0.5), "-0.5");
    }

    #[test]
    fn test_format_display_rounds_long_fractions() {
        // 1/3 expands to 16+ digits; the display gets 10 significant ones
        assert_eq!(format_display(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn test_format_display_rounds_negative_fractions() {
        assert_eq!(format_display(-2.0 / 3.0), "-0.6666666667");
    }

    #[test]
    fn test_format_display_repeating_after_rounding() {
        // 2/3 rounds up at the tenth significant digit
        assert_eq!(format_display(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_format_display_twelve_chars_kept() {
        // Exactly at the cap: no rounding applied
        assert_eq!(format_display(123_456_789.12), "123456789.12");
    }

    #[test]
    fn test_format_display_large_integer_passthrough() {
        // Wide integers survive rounding intact; the cap bounds typing,
        // not result magnitude
        assert_eq!(format_display(1e15), "1000000000000000");
    }
}
