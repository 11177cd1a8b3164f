//! The Validators page: the active set ranked by total stake
//!
//! Upstream searches this table by name alone, and that stays the case
//! here. Stakes are kept as the pre-grouped display strings the page ships.

use crate::dataset::{Column, TableDataset};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Real client-side windowing on this page: ten validators per window.
pub const ENTRIES_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub rank: u32,
    pub name: String,
    pub total_stake: String,
    pub self_stake: String,
    pub delegators: u32,
    pub incentive: f64,
    pub dividends: u32,
    pub uptime: f64,
}

static VALIDATORS: Lazy<Vec<Validator>> = Lazy::new(|| {
    [
        ("Validator X", "2,450,000", "300,000", 152, 87.3, 90, 99.9),
        ("Crypto Node", "1,980,000", "250,000", 121, 85.1, 88, 99.7),
        ("Safe Stake", "1,720,000", "210,000", 110, 82.6, 85, 99.5),
        ("REP King", "1,530,000", "190,000", 98, 81.2, 83, 99.3),
        ("SOL Warrior", "1,300,000", "170,000", 87, 80.5, 82, 99.1),
        ("Satoshi", "1,050,000", "140,000", 76, 78.9, 80, 98.9),
        ("ETH King", "890,000", "120,000", 68, 77.4, 78, 98.7),
        ("REP Knight", "760,000", "100,000", 55, 75.8, 76, 98.5),
        ("G Trader", "640,000", "90,000", 49, 74.1, 74, 98.3),
        ("Power Up", "520,000", "75,000", 41, 72.9, 72, 98.0),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(i, (name, total_stake, self_stake, delegators, incentive, dividends, uptime))| {
            Validator {
                rank: i as u32 + 1,
                name: name.to_string(),
                total_stake: total_stake.to_string(),
                self_stake: self_stake.to_string(),
                delegators,
                incentive,
                dividends,
                uptime,
            }
        },
    )
    .collect()
});

pub fn records() -> &'static [Validator] {
    Lazy::force(&VALIDATORS).as_slice()
}

pub fn table() -> TableDataset<Validator> {
    TableDataset::new(
        "validators",
        "Validators",
        "validators.csv",
        records(),
        vec![|v: &Validator| v.name.clone()],
        vec![
            Column::new("Rank", |v: &Validator| v.rank.to_string()),
            Column::new("Name", |v: &Validator| v.name.clone()),
            Column::new("Total Stake", |v: &Validator| {
                format!("{} REP", v.total_stake)
            }),
            Column::new("Self-Stake", |v: &Validator| {
                format!("{} REP", v.self_stake)
            }),
            Column::new("Delegators", |v: &Validator| v.delegators.to_string()),
            Column::new("Incentive", |v: &Validator| v.incentive.to_string()),
            Column::new("Dividends %", |v: &Validator| {
                format!("{}%", v.dividends)
            }),
            Column::new("Uptime", |v: &Validator| format!("{}%", v.uptime)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let validators = records();
        assert_eq!(validators.len(), 10);
        assert_eq!(validators[0].rank, 1);
        assert_eq!(validators[0].name, "Validator X");
        assert_eq!(validators[9].rank, 10);
        assert_eq!(validators[9].uptime, 98.0);
    }

    #[test]
    fn test_empty_query_returns_all_in_rank_order() {
        let matched = table().filter("");
        assert_eq!(matched.len(), 10);
        let ranks: Vec<u32> = matched.iter().map(|v| v.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_search_covers_names_only() {
        // Digit strings are not part of this page's search surface
        assert!(table().filter("2,450,000").is_empty());
        assert!(table().filter("152").is_empty());

        let matched = table().filter("stake");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Safe Stake");
    }

    #[test]
    fn test_csv_keeps_grouped_stakes_unescaped() {
        let table = table();
        let rows = table.filter("Power Up");
        // Naive CSV: grouped stake strings carry their commas straight through
        assert_eq!(
            table.to_csv(&rows),
            "Rank,Name,Total Stake,Self-Stake,Delegators,Incentive,Dividends %,Uptime\n\
             10,Power Up,520,000 REP,75,000 REP,41,72.9,72%,98%"
        );
    }

    #[test]
    fn test_case_insensitive_name_search() {
        let matched = table().filter("CRYPTO");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Crypto Node");
    }
}
