//! Explorer pages
//!
//! One module per dashboard page. Each defines its record type, embeds the
//! page's sample records, and wires them into a [`TableDataset`] with the
//! page's search selectors and export columns.
//!
//! [`TableDataset`]: crate::dataset::TableDataset

use chrono::{NaiveDate, NaiveDateTime};

pub mod accounts;
pub mod blocks;
pub mod delegation;
pub mod tokenomics;
pub mod transactions;
pub mod transfers;
pub mod validator_detail;
pub mod validators;
pub mod wallet;

/// The sample ledger's address ring: transfers rotate value around these
/// ten addresses, each one hex-pair shifted from the last.
pub(crate) const ADDRESS_RING: [&str; 10] = [
    "0xA1B2C3D4E5F6G7H8I9J0",
    "0xB2C3D4E5F6G7H8I9J0A1",
    "0xC3D4E5F6G7H8I9J0A1B2",
    "0xD4E5F6G7H8I9J0A1B2C3",
    "0xE5F6G7H8I9J0A1B2C3D4",
    "0xF6G7H8I9J0A1B2C3D4E5",
    "0xG7H8I9J0A1B2C3D4E5F6",
    "0xH8I9J0A1B2C3D4E5F6G7",
    "0xI9J0A1B2C3D4E5F6G7H8",
    "0xJ0A1B2C3D4E5F6G7H8I9",
];

/// Build a fixed sample timestamp; falls back to the epoch rather than
/// panicking on an out-of-range constant.
pub(crate) fn sample_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}
