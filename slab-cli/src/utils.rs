use thiserror::Error;

/// Error returned when a string cannot be parsed as a monetary amount.
#[derive(Debug, Error, PartialEq)]
#[error("invalid amount '{0}': expected a non-negative number")]
pub struct ParseAmountError(String);

/// Normalizes input for amount parsing: trims whitespace and removes
/// commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a user-supplied amount string into a non-negative finite `f64`.
///
/// Handles comma as thousands separator (e.g. `"1,234,567"`). Empty input,
/// negative amounts, and non-numeric text are rejected here so the engine
/// is never called with garbage.
pub fn parse_amount(s: &str) -> Result<f64, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError(s.to_string()));
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ParseAmountError(s.to_string())),
    }
}

/// Formats an amount in rupees with thousands separators, rounded to
/// whole rupees for display.
pub fn format_pkr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}Rs {grouped}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234,567").unwrap(), 1_234_567.0);
        assert_eq!(parse_amount("1,200,000.50").unwrap(), 1_200_000.5);
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  150000  ").unwrap(), 150_000.0);
    }

    #[test]
    fn parse_amount_rejects_empty_input() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
    }

    #[test]
    fn parse_amount_rejects_negative_amounts() {
        assert!(parse_amount("-100").is_err());
    }

    #[test]
    fn parse_amount_rejects_non_numeric_text() {
        assert!(parse_amount("a lot").is_err());
        assert!(parse_amount("12x000").is_err());
    }

    #[test]
    fn parse_amount_rejects_non_finite_spellings() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn format_pkr_groups_thousands() {
        assert_eq!(format_pkr(1_234_567.0), "Rs 1,234,567");
        assert_eq!(format_pkr(600_000.0), "Rs 600,000");
        assert_eq!(format_pkr(999.0), "Rs 999");
    }

    #[test]
    fn format_pkr_rounds_to_whole_rupees() {
        assert_eq!(format_pkr(15_000.49), "Rs 15,000");
        assert_eq!(format_pkr(15_000.5), "Rs 15,001");
    }

    #[test]
    fn format_pkr_zero() {
        assert_eq!(format_pkr(0.0), "Rs 0");
    }
}
