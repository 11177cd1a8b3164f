//! Display formatting shared by the page tables and the CLI

use chrono::NaiveDateTime;
use std::time::Duration;

/// Insert thousands separators: 5898 -> "5,898"
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-token amount: 12 -> "12 REP"
pub fn rep_units(amount: u64) -> String {
    format!("{} REP", amount)
}

/// Fractional amount with trailing zeros trimmed: 200.5 -> "200.5 REP",
/// 1000.0 -> "1000 REP"
pub fn rep_amount(amount: f64) -> String {
    format!("{} REP", amount)
}

/// Timestamps as the explorer tables print them: "2025-09-17 18:00"
pub fn minute_stamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Compact age of an event: 45 seconds -> "45s", 30 minutes -> "30m"
pub fn age(elapsed: Duration) -> String {
    humantime::format_duration(elapsed).to_string()
}
