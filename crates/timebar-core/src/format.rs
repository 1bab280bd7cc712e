// File: crates/timebar-core/src/format.rs
// Summary: Display formatting for dates (year, calendar quarter) and amounts.

use chrono::{Datelike, NaiveDate};
use num_format::{Locale, ToFormattedString};

/// Four-digit year, e.g. `1950`.
pub fn format_year(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

/// Calendar quarter label, e.g. `1947 Q1`.
pub fn format_quarter(date: NaiveDate) -> String {
    format!("{:04} Q{}", date.year(), quarter_of(date))
}

/// Quarter number in `1..=4`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

/// Fixed-precision number with comma thousands separators, e.g. `19,056.6`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = match int_part.parse::<u64>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        // Beyond u64; no dataset here gets close.
        Err(_) => int_part.to_string(),
    };

    let mut out = String::with_capacity(grouped.len() + decimals + 2);
    // "-0.0" would read oddly; only mark values that survive rounding.
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Currency with one decimal place, e.g. `$243.1`.
pub fn format_currency(value: f64) -> String {
    let grouped = format_grouped(value, 1);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${grouped}"),
    }
}
