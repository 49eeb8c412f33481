//! Money, date and percent formatting.
//!
//! None of these functions fail: a missing optional input formats as a
//! neutral placeholder so one sparse field can never abort a document.

use chrono::DateTime;

/// Neutral placeholder for absent values (em dash).
pub const PLACEHOLDER: &str = "\u{2014}";

/// Formats an integer cent amount as a currency string.
///
/// Absent amounts format as zero. Thousands are grouped, negative amounts
/// keep the sign ahead of the symbol: `-$1.23`.
pub fn format_money(cents: Option<i64>, currency: &str) -> String {
    let cents = cents.unwrap_or(0);
    let abs = cents.unsigned_abs();
    let dollars = group_thousands(abs / 100);
    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{}{dollars}.{:02}", currency_symbol(currency), abs % 100)
}

fn currency_symbol(code: &str) -> String {
    match code.to_ascii_lowercase().as_str() {
        "usd" | "cad" | "aud" => "$".to_string(),
        "eur" => "\u{20ac}".to_string(),
        "gbp" => "\u{a3}".to_string(),
        other => format!("{} ", other.to_ascii_uppercase()),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an RFC 3339 timestamp as e.g. `"Mar 14, 2025 12:30 PM"`.
///
/// Absent or unparseable timestamps format as [`PLACEHOLDER`].
pub fn format_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return PLACEHOLDER.to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

/// Converts basis points to a two-decimal percent string (`350` → `"3.50%"`).
///
/// Returns `None` when the input is absent; the caller suppresses the row
/// entirely instead of rendering "0.00%".
pub fn percent_from_bps(bps: Option<i64>) -> Option<String> {
    bps.map(|b| format!("{:.2}%", b as f64 / 100.0))
}
