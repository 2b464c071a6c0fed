//! Date and quantity rendering.
//!
//! HL7 v3 timestamps are compact digit strings (`YYYYMMDD[HHMM[SS]]`), and
//! quantities are plain decimals without trailing zeros.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use e2b_model::Numeric;
use tracing::debug;

/// Render an ISO date as an HL7 timestamp.
///
/// Accepts `YYYY-MM-DD`, the reduced precisions `YYYY-MM` and `YYYY`,
/// ISO date-times (`YYYY-MM-DDTHH:MM[:SS]`), and already-compact digit
/// strings. Returns `None` for blank or unparseable input so the caller can
/// omit the element.
pub fn format_date(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let formatted = if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Some(date.format("%Y%m%d").to_string())
    } else if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        Some(datetime.format("%Y%m%d%H%M%S").to_string())
    } else if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        Some(datetime.format("%Y%m%d%H%M").to_string())
    } else {
        reduced_precision(value)
    };
    if formatted.is_none() {
        debug!("unparseable date, omitting element");
    }
    formatted
}

/// `YYYY-MM`, `YYYY`, or a compact timestamp of a valid HL7 length.
fn reduced_precision(value: &str) -> Option<String> {
    if let Some((year, month)) = value.split_once('-') {
        let month_number: u32 = month.parse().ok()?;
        let valid = year.len() == 4
            && month.len() == 2
            && year.bytes().all(|b| b.is_ascii_digit())
            && (1..=12).contains(&month_number);
        return valid.then(|| format!("{year}{month}"));
    }
    let compact = value.bytes().all(|b| b.is_ascii_digit())
        && matches!(value.len(), 4 | 6 | 8 | 12 | 14);
    compact.then(|| value.to_string())
}

/// Render an instant as an HL7 `YYYYMMDDHHMMSS` timestamp.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%d%H%M%S").to_string()
}

/// Render a number as a decimal without trailing zeros.
pub fn format_quantity(value: f64) -> String {
    // Normalises -0.0.
    let value = value + 0.0;
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Render a form-supplied number, or `None` when it is not numeric.
pub fn numeric_quantity(value: &Numeric) -> Option<String> {
    let formatted = value.value().map(format_quantity);
    if formatted.is_none() {
        debug!("non-numeric quantity, omitting element");
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn iso_date_loses_hyphens() {
        assert_eq!(format_date("2024-01-15").as_deref(), Some("20240115"));
    }

    #[test]
    fn reduced_precision_dates() {
        assert_eq!(format_date("2024-03").as_deref(), Some("202403"));
        assert_eq!(format_date("1979").as_deref(), Some("1979"));
        assert_eq!(format_date("20240115").as_deref(), Some("20240115"));
    }

    #[test]
    fn date_times() {
        assert_eq!(
            format_date("2024-01-15T08:30:05").as_deref(),
            Some("20240115083005")
        );
        assert_eq!(format_date("2024-01-15T08:30").as_deref(), Some("202401150830"));
    }

    #[test]
    fn invalid_dates_are_omitted() {
        assert_eq!(format_date(""), None);
        assert_eq!(format_date("   "), None);
        assert_eq!(format_date("2023-02-30"), None);
        assert_eq!(format_date("2024-13"), None);
        assert_eq!(format_date("last Tuesday"), None);
        assert_eq!(format_date("12345"), None);
    }

    #[test]
    fn timestamp_format() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 3).unwrap();
        assert_eq!(format_timestamp(&instant), "20240115090503");
    }

    #[test]
    fn quantities() {
        assert_eq!(format_quantity(45.0), "45");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(-0.0), "0");
        assert_eq!(format_quantity(0.125), "0.125");
        assert_eq!(numeric_quantity(&Numeric::from("500")).as_deref(), Some("500"));
        assert_eq!(numeric_quantity(&Numeric::from("a lot")), None);
    }

    proptest! {
        #[test]
        fn any_calendar_date_renders_without_hyphens(
            year in 1900i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let iso = format!("{year:04}-{month:02}-{day:02}");
            prop_assert_eq!(format_date(&iso), Some(iso.replace('-', "")));
        }
    }
}
