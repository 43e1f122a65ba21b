//! Numeric normalization utilities.

use crate::error::ValueError;

/// Keeps only ASCII digits and `.`, the way price and score columns are cleaned.
fn strip_to_number(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Extracts a number from decorated text such as `"$1,299.99"` or `"65 W"`.
///
/// Signs and exponents are discarded along with every other non-digit
/// character, so `"-5"` yields `5.0`.
pub fn parse_lenient_f64(value: &str) -> Result<f64, ValueError> {
    let cleaned = strip_to_number(value);
    if cleaned.is_empty() {
        return Err(ValueError::EmptyNumber(value.to_string()));
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| ValueError::InvalidNumber(value.to_string()))
}

/// Coerces a truthy/falsy token to 0 or 1.
pub fn parse_bool_flag(value: &str) -> Result<i64, ValueError> {
    let trimmed = value.trim();
    match trimmed.to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" => return Ok(1),
        "false" | "no" | "n" | "off" => return Ok(0),
        _ => {}
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .map(|n| i64::from(n != 0.0))
        .ok_or_else(|| ValueError::InvalidFlag(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_separators() {
        assert_eq!(parse_lenient_f64("$1,299.99"), Ok(1299.99));
        assert_eq!(parse_lenient_f64("65 W"), Ok(65.0));
        assert_eq!(parse_lenient_f64("-5"), Ok(5.0));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(matches!(
            parse_lenient_f64("N/A"),
            Err(ValueError::EmptyNumber(_))
        ));
        assert!(matches!(
            parse_lenient_f64("1.2.3"),
            Err(ValueError::InvalidNumber(_))
        ));
    }

    #[test]
    fn flags() {
        assert_eq!(parse_bool_flag("1"), Ok(1));
        assert_eq!(parse_bool_flag("0"), Ok(0));
        assert_eq!(parse_bool_flag("Yes"), Ok(1));
        assert_eq!(parse_bool_flag(" false "), Ok(0));
        assert_eq!(parse_bool_flag("2"), Ok(1));
        assert!(parse_bool_flag("maybe").is_err());
    }
}
