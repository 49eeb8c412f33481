#![cfg(test)]

use crate::format::{PLACEHOLDER, format_datetime, format_money, percent_from_bps};

#[test]
fn test_money_two_decimal_fidelity() {
    // The numeric value of the formatted string must equal cents / 100.
    for cents in [0i64, 1, 9, 10, 99, 100, 101, 1040, 123_456, 100_000_000] {
        let formatted = format_money(Some(cents), "usd");
        let numeric: f64 = formatted
            .trim_start_matches('$')
            .replace(',', "")
            .parse()
            .unwrap();
        assert!(
            (numeric - cents as f64 / 100.0).abs() < 1e-9,
            "{cents} cents formatted as {formatted}"
        );
    }
}

#[test]
fn test_money_absent_defaults_to_zero() {
    assert_eq!(format_money(None, "usd"), "$0.00");
}

#[test]
fn test_money_grouping() {
    assert_eq!(format_money(Some(123_456_789), "usd"), "$1,234,567.89");
    assert_eq!(format_money(Some(100_000), "usd"), "$1,000.00");
    assert_eq!(format_money(Some(99_999), "usd"), "$999.99");
}

#[test]
fn test_money_currencies() {
    assert_eq!(format_money(Some(500), "cad"), "$5.00");
    assert_eq!(format_money(Some(500), "eur"), "\u{20ac}5.00");
    assert_eq!(format_money(Some(500), "gbp"), "\u{a3}5.00");
    assert_eq!(format_money(Some(500), "nok"), "NOK 5.00");
}

#[test]
fn test_money_negative() {
    assert_eq!(format_money(Some(-123), "usd"), "-$1.23");
}

#[test]
fn test_datetime_round_trip() {
    let formatted = format_datetime(Some("2025-03-14T12:30:00Z"));
    assert_eq!(formatted, "Mar 14, 2025 12:30 PM");
}

#[test]
fn test_datetime_single_digit_day_and_hour() {
    let formatted = format_datetime(Some("2025-01-05T09:05:00-05:00"));
    assert_eq!(formatted, "Jan 5, 2025 9:05 AM");
}

#[test]
fn test_datetime_placeholder_on_absent_or_invalid() {
    assert_eq!(format_datetime(None), PLACEHOLDER);
    assert_eq!(format_datetime(Some("not a date")), PLACEHOLDER);
    assert_eq!(format_datetime(Some("")), PLACEHOLDER);
}

#[test]
fn test_percent_from_bps() {
    assert_eq!(percent_from_bps(Some(350)).as_deref(), Some("3.50%"));
    assert_eq!(percent_from_bps(Some(1000)).as_deref(), Some("10.00%"));
    assert_eq!(percent_from_bps(Some(5)).as_deref(), Some("0.05%"));
    // Absence suppresses the row; it must never become "0.00%".
    assert_eq!(percent_from_bps(None), None);
}
