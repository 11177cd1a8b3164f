//! The Accounts page: wallet balances split into free and delegated
//!
//! Searchable by name and by the digit strings of all three balances;
//! exports to `accounts.csv`. The growth chart lives in [`crate::charts`].

use crate::dataset::{Column, TableDataset};
use crate::format::rep_units;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const TOTAL_PAGES: u64 = 5_898;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub free: u64,
    pub delegated: u64,
    pub total: u64,
}

static ACCOUNTS: Lazy<Vec<Account>> = Lazy::new(|| {
    [
        ("Validator X", 500, 700, 1_200),
        ("Crypto Node", 1_200, 2_250, 3_450),
        ("Safe Stake", 800, 1_800, 2_600),
        ("REP King", 1_500, 3_200, 4_700),
        ("SOL Warrior", 900, 2_100, 3_000),
        ("Satoshi", 2_000, 4_500, 6_500),
        ("ETH King", 1_100, 2_800, 3_900),
        ("REP Knight", 750, 1_650, 2_400),
        ("G Trader", 1_300, 2_900, 4_200),
        ("Power Up", 600, 1_400, 2_000),
    ]
    .into_iter()
    .map(|(name, free, delegated, total)| Account {
        name: name.to_string(),
        free,
        delegated,
        total,
    })
    .collect()
});

pub fn records() -> &'static [Account] {
    Lazy::force(&ACCOUNTS).as_slice()
}

pub fn table() -> TableDataset<Account> {
    TableDataset::new(
        "accounts",
        "Accounts",
        "accounts.csv",
        records(),
        vec![
            |a: &Account| a.name.clone(),
            |a: &Account| a.free.to_string(),
            |a: &Account| a.delegated.to_string(),
            |a: &Account| a.total.to_string(),
        ],
        vec![
            Column::new("Name", |a: &Account| a.name.clone()),
            Column::new("Free", |a: &Account| rep_units(a.free)),
            Column::new("Delegated", |a: &Account| rep_units(a.delegated)),
            Column::new("Total", |a: &Account| rep_units(a.total)),
        ],
    )
}
