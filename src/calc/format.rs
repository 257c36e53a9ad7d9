//! Number-to-text rendering for computed results.
//!
//! Raw entry is never reformatted; only evaluation results go through here.

/// Results whose plain rendering is longer than this get rounded.
pub const MAX_PLAIN_LEN: usize = 10;

/// Fractional digits kept when a result is rounded.
pub const ROUND_DIGITS: usize = 8;

/// Render a number the way a calculator display shows it.
///
/// Integral values carry no fractional part, negative zero shows as "0",
/// and very large or very small magnitudes switch to exponent form
/// ("1e+21", "1.5e-7").
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    value.to_string()
}

/// Render a computed result, rounding it when the plain form is too wide.
pub fn format_result(value: f64) -> String {
    let plain = format_number(value);
    if plain.chars().count() <= MAX_PLAIN_LEN {
        return plain;
    }

    format_number(round_half_away(value, ROUND_DIGITS))
}

/// Fractional digits in the exact decimal expansion of the smallest `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to `digits` fractional places, ties away from zero.
///
/// Works on the exact decimal expansion, so a value such as 0.001953125
/// rounds up instead of to the even neighbour.
fn round_half_away(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let round_up = fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits.min(fraction.len());
    let (whole, fraction) = kept.split_at(split);
    let text = format!(
        "{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(fraction)
    );
    let magnitude = text.parse::<f64>().unwrap_or(value.abs());
    magnitude.copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(9.0), "9");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(100000000000000000000.0), "100000000000000000000");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn exponent_form_at_extremes() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn short_results_are_untouched() {
        assert_eq!(format_result(123.456), "123.456");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(1e21), "1e+21");
    }

    #[test]
    fn repeating_decimals_are_rounded() {
        assert_eq!(format_result(1.0 / 3.0), "0.33333333");
        assert_eq!(format_result(2.0 / 3.0), "0.66666667");
        assert_eq!(format_result(-1.0 / 3.0), "-0.33333333");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        // 1/512 is exactly 0.001953125
        assert_eq!(format_result(0.001953125), "0.00195313");
        assert_eq!(format_result(-0.001953125), "-0.00195313");
        assert_eq!(format_result(3.0 / 512.0), "0.00585938");
    }

    #[test]
    fn rounding_carries_into_whole_part() {
        assert_eq!(format_result(9.999999999), "10");
        assert_eq!(format_result(-0.999999999), "-1");
    }

    #[test]
    fn rounding_trims_trailing_zeros() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 7e7), "1e-8");
        assert_eq!(format_result(1.23456789e-10), "0");
    }

    #[test]
    fn long_integers_stay_integral() {
        assert_eq!(format_result(12345678901.0), "12345678901");
    }
}
