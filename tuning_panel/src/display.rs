use crate::config::Params;

/// Fixed-point rendering of a parameter value.
///
/// Non-finite values (including "not polled yet") render as `N/A`. Exact
/// ties round away from zero, so `0.25` at one decimal shows `0.3`; Rust's
/// formatter alone would pick the even digit.
pub fn format_fixed(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return Params::NOT_AVAILABLE.to_string();
    }

    // -0.0 prints as "-0" otherwise
    let value = if value == 0.0 { 0.0 } else { value };
    let precision = usize::from(decimals);

    if is_exact_tie(value, decimals) {
        let scale = 10f64.powi(i32::from(decimals));
        let scaled = value.abs() * scale;
        // Past 2^52 every f64 is an integer, so the product is exact below it.
        if scaled < 4_503_599_627_370_496.0 {
            let rounded = (scaled.floor() + 1.0) / scale;
            let signed = if value.is_sign_negative() { -rounded } else { rounded };
            return format!("{:.*}", precision, signed);
        }
    }

    // Rust rounds the exact binary value, so only true ties need help.
    format!("{:.*}", precision, value)
}

/// True when the exact binary value sits halfway between two
/// `decimals`-digit results, i.e. its lowest set bit is `2^-(decimals + 1)`.
fn is_exact_tie(value: f64, decimals: u8) -> bool {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    exponent + mantissa.trailing_zeros() as i32 == -(i32::from(decimals) + 1)
}

/// Display string for an optional snapshot value.
pub fn format_value(value: Option<f64>, decimals: u8) -> String {
    format_fixed(value.unwrap_or(f64::NAN), decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_decimal() {
        assert_eq!(format_fixed(123.45, 1), "123.5");
        assert_eq!(format_fixed(550.0, 1), "550.0");
    }

    #[test]
    fn test_default_two_decimals() {
        assert_eq!(format_fixed(1.23456, 2), "1.23");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(format_fixed(12.7, 0), "13");
        assert_eq!(format_fixed(2.5, 0), "3", "ties round away from zero");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(-0.25, 1), "-0.3");
        assert_eq!(format_fixed(1.125, 2), "1.13");
        assert_eq!(format_fixed(412.25, 1), "412.3");
    }

    #[test]
    fn test_near_ties_follow_binary_value() {
        // 207.35 is stored as 207.34999..., 130.95 as 130.94999...
        assert_eq!(format_fixed(207.35, 1), "207.3");
        assert_eq!(format_fixed(130.95, 1), "130.9");
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(-207.35, 1), "-207.3");
    }

    #[test]
    fn test_tie_detection() {
        assert!(is_exact_tie(0.5, 0));
        assert!(is_exact_tie(0.25, 1));
        assert!(!is_exact_tie(0.5, 1), "0.5 already has one decimal");
        assert!(!is_exact_tie(207.35, 1));
        assert!(!is_exact_tie(0.0, 2));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_fixed(-300.0, 1), "-300.0");
        assert_eq!(format_fixed(-12.34, 1), "-12.3");
    }

    #[test]
    fn test_non_finite_is_not_available() {
        assert_eq!(format_fixed(f64::NAN, 1), "N/A");
        assert_eq!(format_fixed(f64::INFINITY, 2), "N/A");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 0), "N/A");
        assert_eq!(format_value(None, 2), "N/A");
    }
}
