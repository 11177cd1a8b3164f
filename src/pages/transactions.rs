//! The Transactions page: extrinsics with a volume chart underneath
//!
//! Searchable by extrinsic id, sender, recipient and amount; exports to
//! `transactions.csv`. The chart data lives in [`crate::charts`].

use crate::dataset::{Column, TableDataset};
use crate::format::{minute_stamp, rep_units};
use crate::pages::{sample_time, ADDRESS_RING};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const TOTAL_PAGES: u64 = 5_898;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub extrinsic_id: u64,
    pub from: String,
    pub to: String,
    pub amount: u64,
    pub time: NaiveDateTime,
}

static TRANSACTIONS: Lazy<Vec<Transaction>> = Lazy::new(|| {
    let amounts = [12u64, 8, 15, 9, 11, 14, 10, 13, 7, 16];
    amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| Transaction {
            extrinsic_id: 102_345 + i as u64,
            from: ADDRESS_RING[i].to_string(),
            to: ADDRESS_RING[(i + 1) % ADDRESS_RING.len()].to_string(),
            amount: *amount,
            time: sample_time(2025, 9, 17, 18, i as u32),
        })
        .collect()
});

pub fn records() -> &'static [Transaction] {
    Lazy::force(&TRANSACTIONS).as_slice()
}

pub fn table() -> TableDataset<Transaction> {
    TableDataset::new(
        "transactions",
        "Transactions",
        "transactions.csv",
        records(),
        vec![
            |t: &Transaction| t.extrinsic_id.to_string(),
            |t: &Transaction| t.from.clone(),
            |t: &Transaction| t.to.clone(),
            |t: &Transaction| t.amount.to_string(),
        ],
        vec![
            Column::new("Extrinsic ID", |t: &Transaction| t.extrinsic_id.to_string()),
            Column::new("From", |t: &Transaction| t.from.clone()),
            Column::new("To", |t: &Transaction| t.to.clone()),
            Column::new("Amount", |t: &Transaction| rep_units(t.amount)),
            Column::new("Time", |t: &Transaction| minute_stamp(&t.time)),
        ],
    )
}
