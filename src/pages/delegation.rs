//! The Delegation page: recent delegation events
//!
//! Ages are stored as elapsed durations and printed in humantime's compact
//! form, so "45 secs ago" upstream becomes a `45s` cell here.

use crate::dataset::{Column, TableDataset};
use crate::format::{age, rep_amount};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Duration;

/// Six events fit on the page; the pager advertises far more.
pub const ENTRIES_PER_PAGE: usize = 6;

/// Decorative page total shown by the pagination stub.
pub const TOTAL_PAGES: u64 = 138_843;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delegation {
    pub delegator: String,
    pub validator: String,
    pub amount: f64,
    pub age: Duration,
    pub tx_hash: String,
}

static DELEGATIONS: Lazy<Vec<Delegation>> = Lazy::new(|| {
    [
        ("Validator X", "0xabcd...89ef", 150.345, 45, "0xc2b7...f1da"),
        ("Crypto Node", "0x1234...ef56", 200.5, 50, "0xb0a6...e0f5"),
        ("Safe Stake", "0xabcd...89ef", 1000.0, 2 * 60, "0x3d6e...de8a"),
        ("Crypto Lord", "0x5678...ijkl", 500.0, 30 * 60, "0xa5e0...4326"),
        ("Rep Delegator", "0xabcd...89ef", 2500.456, 35 * 60, "0xce8a...b8d1"),
        ("Rep Master", "0x1234...ef56", 750.24, 50 * 60, "0x3a2e...24e9"),
    ]
    .into_iter()
    .map(|(delegator, validator, amount, secs, tx_hash)| Delegation {
        delegator: delegator.to_string(),
        validator: validator.to_string(),
        amount,
        age: Duration::from_secs(secs),
        tx_hash: tx_hash.to_string(),
    })
    .collect()
});

pub fn records() -> &'static [Delegation] {
    Lazy::force(&DELEGATIONS).as_slice()
}

pub fn table() -> TableDataset<Delegation> {
    TableDataset::new(
        "delegation",
        "Delegation",
        "delegation.csv",
        records(),
        vec![
            |d: &Delegation| d.delegator.clone(),
            |d: &Delegation| d.validator.clone(),
            |d: &Delegation| d.tx_hash.clone(),
        ],
        vec![
            Column::new("Delegator", |d: &Delegation| d.delegator.clone()),
            Column::new("Validator", |d: &Delegation| d.validator.clone()),
            Column::new("Amount", |d: &Delegation| rep_amount(d.amount)),
            Column::new("Time", |d: &Delegation| age(d.age)),
            Column::new("Transaction", |d: &Delegation| d.tx_hash.clone()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let events = records();
        assert_eq!(events.len(), ENTRIES_PER_PAGE);
        assert_eq!(events[0].delegator, "Validator X");
        assert_eq!(events[0].amount, 150.345);
        assert_eq!(events[5].age, Duration::from_secs(50 * 60));
        assert_eq!(TOTAL_PAGES, 138_843);
    }

    #[test]
    fn test_filter_by_validator_address() {
        let matched = table().filter("0xabcd...89ef");
        let delegators: Vec<&str> = matched.iter().map(|d| d.delegator.as_str()).collect();
        assert_eq!(delegators, vec!["Validator X", "Safe Stake", "Rep Delegator"]);
    }

    #[test]
    fn test_filter_by_delegator_name() {
        let matched = table().filter("rep");
        let delegators: Vec<&str> = matched.iter().map(|d| d.delegator.as_str()).collect();
        assert_eq!(delegators, vec!["Rep Delegator", "Rep Master"]);
    }

    #[test]
    fn test_amounts_and_ages_are_display_only() {
        // Neither the amount nor the age participates in search
        assert!(table().filter("150.345").is_empty());
        assert!(table().filter("45s").is_empty());
    }

    #[test]
    fn test_csv_rendering() {
        let table = table();
        let rows = table.filter("0xc2b7...f1da");
        assert_eq!(
            table.to_csv(&rows),
            "Delegator,Validator,Amount,Time,Transaction\n\
             Validator X,0xabcd...89ef,150.345 REP,45s,0xc2b7...f1da"
        );
    }

    #[test]
    fn test_trimmed_amount_rendering() {
        let table = table();
        let csv = table.export_csv("Safe Stake");
        assert!(csv.contains("1000 REP"));
        assert!(csv.contains(",2m,"));
    }
}
