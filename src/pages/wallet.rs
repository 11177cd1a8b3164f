//! The wallet detail page: overview cards plus three companion mini tables
//!
//! None of the mini tables has a search box, so their datasets carry no
//! selectors. The `% of` column header is truncated upstream and is kept
//! verbatim, as is the `+ 500 REP` amount style that applies the plus sign
//! to undelegations too.

use crate::dataset::{Column, TableDataset};
use crate::format::{group_digits, minute_stamp};
use crate::pages::sample_time;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// Headline figures for the wallet being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletOverview {
    pub address: &'static str,
    pub balance: u64,
    pub delegated_stake: u64,
    pub staked_percent: u32,
}

pub static OVERVIEW: WalletOverview = WalletOverview {
    address: "0xc2b7...f1da",
    balance: 12_590,
    delegated_stake: 8_200,
    staked_percent: 65,
};

impl WalletOverview {
    /// Labelled card values in page order.
    pub fn stat_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Balance (REP)", format!("{} REP", group_digits(self.balance))),
            (
                "Delegated Stake (REP)",
                format!("{} REP", group_digits(self.delegated_stake)),
            ),
            ("% Balance Staked", format!("{}%", self.staked_percent)),
        ]
    }
}

// ==================== Delegation breakdown ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegationSlice {
    pub validator: String,
    pub amount: u64,
    pub percent: u32,
    pub stake_percent: u32,
}

static BREAKDOWN: Lazy<Vec<DelegationSlice>> = Lazy::new(|| {
    [
        ("Validator X", 5_000, 61, 61),
        ("Crypto Node", 2_000, 12, 24),
        ("Safe Stake", 3_000, 24, 15),
    ]
    .into_iter()
    .map(|(validator, amount, percent, stake_percent)| DelegationSlice {
        validator: validator.to_string(),
        amount,
        percent,
        stake_percent,
    })
    .collect()
});

pub fn breakdown_records() -> &'static [DelegationSlice] {
    Lazy::force(&BREAKDOWN).as_slice()
}

pub fn breakdown_table() -> TableDataset<DelegationSlice> {
    TableDataset::new(
        "wallet-delegation",
        "Delegation Breakdown",
        "wallet-delegation.csv",
        breakdown_records(),
        Vec::new(),
        vec![
            Column::new("Validator", |s: &DelegationSlice| s.validator.clone()),
            Column::new("Amount", |s: &DelegationSlice| {
                format!("{} REP", group_digits(s.amount))
            }),
            Column::new("% of", |s: &DelegationSlice| format!("{}%", s.percent)),
            Column::new("% of Stake", |s: &DelegationSlice| {
                format!("{}%", s.stake_percent)
            }),
        ],
    )
}

// ==================== Transfer activity ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => write!(f, "Incoming"),
            Direction::Outgoing => write!(f, "Outgoing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferEvent {
    pub direction: Direction,
    pub amount: i64,
    pub timestamp: NaiveDateTime,
    pub hash: String,
}

static TRANSFERS: Lazy<Vec<TransferEvent>> = Lazy::new(|| {
    [
        (Direction::Incoming, 50, (20, 14, 30), "0x9f4a...5a2c"),
        (Direction::Outgoing, -40, (19, 10, 0), "0x3d8e...6b4f"),
        (Direction::Incoming, 300, (18, 13, 0), "0x3a2e...24e9"),
    ]
    .into_iter()
    .map(|(direction, amount, (day, hour, minute), hash)| TransferEvent {
        direction,
        amount,
        timestamp: sample_time(2025, 7, day, hour, minute),
        hash: hash.to_string(),
    })
    .collect()
});

pub fn transfer_records() -> &'static [TransferEvent] {
    Lazy::force(&TRANSFERS).as_slice()
}

pub fn transfer_table() -> TableDataset<TransferEvent> {
    TableDataset::new(
        "wallet-transfers",
        "Transfer Activity",
        "wallet-transfers.csv",
        transfer_records(),
        Vec::new(),
        vec![
            Column::new("Date /Time", |t: &TransferEvent| {
                minute_stamp(&t.timestamp)
            }),
            Column::new("Type", |t: &TransferEvent| t.direction.to_string()),
            Column::new("Amount", |t: &TransferEvent| {
                format!("{:+} REP", t.amount)
            }),
            Column::new("Hash", |t: &TransferEvent| t.hash.clone()),
        ],
    )
}

// ==================== Delegation actions ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionKind {
    Delegated,
    Undelegated,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Delegated => write!(f, "Delegated"),
            ActionKind::Undelegated => write!(f, "Undelegated"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegationAction {
    pub kind: ActionKind,
    pub validator: String,
    pub amount: u64,
    pub timestamp: NaiveDateTime,
    pub hash: String,
}

static ACTIONS: Lazy<Vec<DelegationAction>> = Lazy::new(|| {
    [
        (ActionKind::Delegated, "Validator X", 500, (20, 14, 30), "0xb0a6...e0f5"),
        (ActionKind::Delegated, "Crypto Node", 300, (19, 10, 0), "0x3d6e...de8a"),
        (ActionKind::Undelegated, "Safe Stake", 200, (18, 13, 0), "0x3a2e...24e9"),
    ]
    .into_iter()
    .map(
        |(kind, validator, amount, (day, hour, minute), hash)| DelegationAction {
            kind,
            validator: validator.to_string(),
            amount,
            timestamp: sample_time(2025, 7, day, hour, minute),
            hash: hash.to_string(),
        },
    )
    .collect()
});

pub fn action_records() -> &'static [DelegationAction] {
    Lazy::force(&ACTIONS).as_slice()
}

pub fn action_table() -> TableDataset<DelegationAction> {
    TableDataset::new(
        "wallet-actions",
        "Delegation Actions",
        "wallet-actions.csv",
        action_records(),
        Vec::new(),
        vec![
            Column::new("Date /Time", |a: &DelegationAction| {
                minute_stamp(&a.timestamp)
            }),
            Column::new("Action", |a: &DelegationAction| a.kind.to_string()),
            Column::new("Validator", |a: &DelegationAction| a.validator.clone()),
            Column::new("Amount", |a: &DelegationAction| {
                format!("+ {} REP", a.amount)
            }),
            Column::new("Hash", |a: &DelegationAction| a.hash.clone()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_cards() {
        assert_eq!(OVERVIEW.address, "0xc2b7...f1da");
        let rows = OVERVIEW.stat_rows();
        assert_eq!(rows[0].1, "12,590 REP");
        assert_eq!(rows[1].1, "8,200 REP");
        assert_eq!(rows[2].1, "65%");
    }

    #[test]
    fn test_breakdown_csv() {
        let table = breakdown_table();
        let csv = table.export_csv("");
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Validator,Amount,% of,% of Stake"));
        assert_eq!(lines.next(), Some("Validator X,5,000 REP,61%,61%"));
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_transfer_amounts_are_signed() {
        let table = transfer_table();
        let csv = table.export_csv("");
        assert!(csv.contains("+50 REP"));
        assert!(csv.contains("-40 REP"));
        assert!(csv.contains("2025-07-20 14:30,Incoming"));
    }

    #[test]
    fn test_action_amounts_keep_plus_sign() {
        let rows = action_table().export_csv("");
        // Even the undelegation renders as an addition upstream
        assert!(rows.contains("Undelegated,Safe Stake,+ 200 REP"));
        assert!(rows.contains("Delegated,Validator X,+ 500 REP"));
    }

    #[test]
    fn test_mini_tables_have_no_search_surface() {
        assert!(breakdown_table().filter("Validator").is_empty());
        assert!(transfer_table().filter("0x9f4a").is_empty());
        assert!(action_table().filter("Safe").is_empty());
    }
}
