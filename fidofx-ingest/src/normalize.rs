//! US-locale number and date normalization for export columns.

use chrono::NaiveDate;
use fidofx_core::StatementError;
use rust_decimal::Decimal;

/// Fidelity prints run and settlement dates as `MM/DD/YYYY`.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a US-formatted amount (`"1,234.56"`, `"-1,234.56"`) into an
/// exact decimal, stripping thousands separators and stray whitespace.
pub fn parse_amount(raw: &str, column: &'static str) -> Result<Decimal, StatementError> {
    raw.replace(',', "")
        .replace(' ', "")
        .parse::<Decimal>()
        .map_err(|_| StatementError::MalformedNumber {
            column,
            value: raw.to_string(),
        })
}

/// Parse the leading date portion of a cell.
///
/// Only the first 10 characters are considered, which tolerates cells
/// that carry trailing time-of-day text after the date.
pub fn parse_date(raw: &str, column: &'static str) -> Result<NaiveDate, StatementError> {
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).map_err(|_| StatementError::MalformedDate {
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_us_format() {
        assert_eq!(parse_amount("1,234.56", "Amount ($)").unwrap(), dec!(1234.56));
    }

    #[test]
    fn test_parse_amount_negative_us_format() {
        assert_eq!(
            parse_amount("-1,234.56", "Amount ($)").unwrap(),
            dec!(-1234.56)
        );
    }

    #[test]
    fn test_parse_amount_keeps_fractional_precision() {
        assert_eq!(parse_amount("0.311", "Quantity").unwrap(), dec!(0.311));
        assert_eq!(
            parse_amount("206.5300", "Price ($)").unwrap(),
            dec!(206.53)
        );
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        let err = parse_amount("No Description", "Amount ($)").unwrap_err();
        assert!(matches!(
            err,
            StatementError::MalformedNumber {
                column: "Amount ($)",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_date_plain() {
        let date = parse_date("01/01/2023", "Run Date").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_date_ignores_trailing_time() {
        let date = parse_date("02/19/2025 12:00:00 PM", "Settlement Date").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 19).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_header_text() {
        assert!(parse_date("Run Date", "Run Date").is_err());
        assert!(parse_date("", "Run Date").is_err());
    }
}
