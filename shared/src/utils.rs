// Display formatting shared by every screen that shows money or dates.
// All output is en-US regardless of the host locale.

use thiserror::Error;

pub use currency::{format_currency, format_currency_with, ZeroAmount, MISSING_AMOUNT};
pub use dates::{format_date, format_date_in, parse_date_time, INVALID_DATE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Failed to parse date '{0}'")]
    InvalidDate(String),
}

// USD amounts, "$1,234.50" style.
pub mod currency {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::{Decimal, RoundingStrategy};
    use serde::{Deserialize, Serialize};
    use std::str::FromStr;

    /// Text shown when there is no amount to display.
    pub const MISSING_AMOUNT: &str = "N/A";

    /// How a zero amount is displayed.
    ///
    /// `Display` treats zero as a real value (`"$0.00"`), `Absent` treats it like a
    /// missing amount (`"N/A"`). Which one the product wants is still open, so the
    /// choice is a configuration value rather than a code path per screen.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ZeroAmount {
        #[default]
        Display,
        Absent,
    }

    pub fn format_currency(amount: Option<f64>) -> String {
        format_currency_with(amount, ZeroAmount::default())
    }

    /// Formats `amount` as USD with two fraction digits.
    ///
    /// `None` and non-finite values render as [`MISSING_AMOUNT`]. Cents are rounded
    /// half away from zero on the shortest decimal form of the amount, so `1.005`
    /// becomes `"$1.01"`. Amounts that round to zero never carry a minus sign.
    pub fn format_currency_with(amount: Option<f64>, zero: ZeroAmount) -> String {
        let value = match amount {
            Some(v) if v.is_finite() => v,
            _ => return MISSING_AMOUNT.to_string(),
        };
        if value == 0.0 && zero == ZeroAmount::Absent {
            return MISSING_AMOUNT.to_string();
        }

        let (dollars, cents) = split_cents(value.abs());
        let sign = if value < 0.0 && (dollars != "0" || cents > 0) { "-" } else { "" };

        format!("{}${}.{:02}", sign, group_thousands(&dollars), cents)
    }

    // Whole dollars as a digit string plus rounded cents.
    fn split_cents(magnitude: f64) -> (String, u32) {
        // `Display` for f64 is the shortest round-trip form and never uses an exponent.
        let text = magnitude.to_string();
        match Decimal::from_str(&text) {
            Ok(decimal) => {
                let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                let dollars = rounded.trunc().to_u128().unwrap_or(0).to_string();
                let cents = (rounded.fract() * Decimal::ONE_HUNDRED).to_u32().unwrap_or(0);
                (dollars, cents)
            }
            // Outside Decimal's range: either an integral amount above ~7.9e28 or a
            // fraction far below a cent.
            Err(_) => match text.split_once('.') {
                None => (text, 0),
                Some(_) => ("0".to_string(), 0),
            },
        }
    }

    fn group_thousands(digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        grouped
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_currency_with_grouping() {
            assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
            assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000.00");
            assert_eq!(format_currency(Some(999.999)), "$1,000.00");
            assert_eq!(format_currency(Some(12.0)), "$12.00");
        }

        #[test]
        fn test_format_currency_missing() {
            assert_eq!(format_currency(None), "N/A");
            assert_eq!(format_currency(Some(f64::NAN)), "N/A");
            assert_eq!(format_currency(Some(f64::INFINITY)), "N/A");
        }

        #[test]
        fn test_format_currency_zero_policies() {
            // Both behaviours are kept under test until the zero policy is settled.
            assert_eq!(format_currency(Some(0.0)), "$0.00");
            assert_eq!(format_currency_with(Some(0.0), ZeroAmount::Display), "$0.00");
            assert_eq!(format_currency_with(Some(0.0), ZeroAmount::Absent), "N/A");
            assert_eq!(format_currency_with(Some(0.5), ZeroAmount::Absent), "$0.50");
        }

        #[test]
        fn test_format_currency_negative() {
            assert_eq!(format_currency(Some(-1234.5)), "-$1,234.50");
            assert_eq!(format_currency(Some(-0.001)), "$0.00");
        }

        #[test]
        fn test_format_currency_rounds_half_away_from_zero() {
            assert_eq!(format_currency(Some(0.125)), "$0.13");
            assert_eq!(format_currency(Some(2.5)), "$2.50");
            // Not exactly representable as doubles; rounded on their decimal form.
            assert_eq!(format_currency(Some(1.005)), "$1.01");
            assert_eq!(format_currency(Some(1.015)), "$1.02");
            assert_eq!(format_currency(Some(-1.005)), "-$1.01");
        }

        #[test]
        fn test_format_currency_large_amounts() {
            assert_eq!(format_currency(Some(1e21)), "$1,000,000,000,000,000,000,000.00");
            assert_eq!(format_currency(Some(1e30)), "$1,000,000,000,000,000,000,000,000,000,000.00");
            assert_eq!(format_currency(Some(123_456_789_012.34)), "$123,456,789,012.34");
        }

        #[test]
        fn test_format_currency_tiny_amounts() {
            assert_eq!(format_currency(Some(1e-30)), "$0.00");
            assert_eq!(format_currency(Some(0.004)), "$0.00");
            assert_eq!(format_currency(Some(0.005)), "$0.01");
        }

        #[test]
        fn test_non_zero_amounts_have_dollar_sign_and_two_decimals() {
            for amount in [0.01, 1.0, 7.5, 19.99, 250.0, 1234.5, 98765.4321, 3.0e9] {
                let text = format_currency(Some(amount));
                assert!(text.starts_with('$'), "{} -> {}", amount, text);
                let (_, fraction) = text.rsplit_once('.').unwrap();
                assert_eq!(fraction.len(), 2, "{} -> {}", amount, text);
                assert!(fraction.chars().all(|c| c.is_ascii_digit()));
            }
        }

        #[test]
        fn test_zero_amount_deserializes_lowercase() {
            let policy: ZeroAmount = serde_json::from_str("\"absent\"").unwrap();
            assert_eq!(policy, ZeroAmount::Absent);
        }
    }
}

// Short en-US date-times, "Mar 15, 2:30 PM" style.
pub mod dates {
    use super::FormatError;
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

    /// Text shown for a date string that cannot be parsed.
    pub const INVALID_DATE: &str = "Invalid Date";

    const DISPLAY_FORMAT: &str = "%b %-d, %-I:%M %p";

    const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    /// Parses a source date string into `zone`.
    ///
    /// Strings with an offset (RFC 3339) are converted into `zone`; date-times without
    /// one are taken to already be in `zone`. A bare `YYYY-MM-DD` means UTC midnight,
    /// converted into `zone`, so west of UTC it shows as the previous evening.
    pub fn parse_date_time(input: &str, zone: &FixedOffset) -> Result<DateTime<FixedOffset>, FormatError> {
        let s = input.trim();
        let invalid = || FormatError::InvalidDate(input.to_string());

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(zone));
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
            return Ok(Utc.from_utc_datetime(&midnight).with_timezone(zone));
        }

        let naive = NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .ok_or_else(invalid)?;

        zone.from_local_datetime(&naive).single().ok_or_else(invalid)
    }

    pub fn format_date(input: &str) -> String {
        format_date_in(input, &Utc.fix())
    }

    /// Formats `input` for display in `zone`, or [`INVALID_DATE`] when it cannot be parsed.
    pub fn format_date_in(input: &str, zone: &FixedOffset) -> String {
        match parse_date_time(input, zone) {
            Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            Err(e) => {
                tracing::debug!("{}", e);
                INVALID_DATE.to_string()
            }
        }
    }

}
