//! The Transfers page: token movements between accounts
//!
//! Same shape as the transactions page with its own amounts, plus the
//! display-only amount and network dropdowns the upstream page carries.
//! Exports to `transfers.csv`.

use crate::dataset::{Column, TableDataset};
use crate::format::{minute_stamp, rep_units};
use crate::pages::{sample_time, ADDRESS_RING};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const TOTAL_PAGES: u64 = 5_898;

/// Amount-bucket dropdown. Display furniture upstream: selecting a bucket
/// never reaches the filter, and that behavior is preserved.
pub const AMOUNT_OPTIONS: &[&str] = &["All Amount", "0-10 REP", "10-100 REP", "100+ REP"];
/// Network dropdown, equally decorative.
pub const NETWORK_OPTIONS: &[&str] = &["All Network", "Mainnet", "Testnet"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub extrinsic_id: u64,
    pub from: String,
    pub to: String,
    pub amount: u64,
    pub time: NaiveDateTime,
}

static TRANSFERS: Lazy<Vec<Transfer>> = Lazy::new(|| {
    let amounts = [12u64, 8, 15, 6, 20, 4, 18, 11, 7, 14];
    amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| Transfer {
            extrinsic_id: 102_345 + i as u64,
            from: ADDRESS_RING[i].to_string(),
            to: ADDRESS_RING[(i + 1) % ADDRESS_RING.len()].to_string(),
            amount: *amount,
            time: sample_time(2025, 9, 17, 18, i as u32),
        })
        .collect()
});

pub fn records() -> &'static [Transfer] {
    Lazy::force(&TRANSFERS).as_slice()
}

pub fn table() -> TableDataset<Transfer> {
    TableDataset::new(
        "transfers",
        "Transfers",
        "transfers.csv",
        records(),
        vec![
            |t: &Transfer| t.extrinsic_id.to_string(),
            |t: &Transfer| t.from.clone(),
            |t: &Transfer| t.to.clone(),
            |t: &Transfer| t.amount.to_string(),
        ],
        vec![
            Column::new("Extrinsic ID", |t: &Transfer| t.extrinsic_id.to_string()),
            Column::new("From", |t: &Transfer| t.from.clone()),
            Column::new("To", |t: &Transfer| t.to.clone()),
            Column::new("Amount", |t: &Transfer| rep_units(t.amount)),
            Column::new("Time", |t: &Transfer| minute_stamp(&t.time)),
        ],
    )
}
