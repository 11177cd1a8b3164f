//! The validator detail page: KPI cards plus the tabbed placeholder table
//!
//! Every tab renders the same eleven-column table; only the heading changes.
//! The rows ship with empty cells upstream, so exports keep them empty and
//! the terminal renderer substitutes a dash to keep the columns visible.

use crate::dataset::{Column, TableDataset};
use once_cell::sync::Lazy;
use serde::Serialize;

/// KPI card values for the rank-1 validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidatorProfile {
    pub name: &'static str,
    pub rank: u32,
    pub self_stake: &'static str,
    pub apy: &'static str,
    pub normal_reputation_score: &'static str,
    pub delegated_stake: &'static str,
    pub delegators_reward_percent: &'static str,
    pub compute_reputation_score: &'static str,
    pub total_stake_weight: &'static str,
    pub root_percentage: &'static str,
    pub alpha_percentage: &'static str,
    pub rep_weighted_1: &'static str,
    pub rep_weighted_2: &'static str,
}

pub static PROFILE: ValidatorProfile = ValidatorProfile {
    name: "Validator X",
    rank: 1,
    self_stake: "450k REP",
    apy: "12.5%",
    normal_reputation_score: "0.92/1",
    delegated_stake: "2.00M REP",
    delegators_reward_percent: "90%",
    compute_reputation_score: "0.88/1",
    total_stake_weight: "2.45M REP",
    root_percentage: "0.02%",
    alpha_percentage: "99.98%",
    rep_weighted_1: "0.76",
    rep_weighted_2: "4.20",
};

impl ValidatorProfile {
    /// Labelled KPI values in the order the cards appear on the page.
    pub fn stat_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Self Stake", self.self_stake.to_string()),
            ("APY (Annual % Yield)", self.apy.to_string()),
            ("Normal Reputation Score", self.normal_reputation_score.to_string()),
            ("Delegated Stake", self.delegated_stake.to_string()),
            ("Delegators' Reward %", self.delegators_reward_percent.to_string()),
            ("Compute Reputation Score", self.compute_reputation_score.to_string()),
            ("Total Stake Weight", self.total_stake_weight.to_string()),
            ("Root", self.root_percentage.to_string()),
            ("Alpha", self.alpha_percentage.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceRow {
    pub rank: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub hotkey: String,
    pub ct_take: String,
    pub proportion: String,
    pub subnet_weight: String,
    pub noms: String,
    pub family_weight: String,
    pub family_balance: String,
    pub dominance: String,
    pub divs: String,
}

static PERFORMANCE: Lazy<Vec<PerformanceRow>> = Lazy::new(|| {
    (1..=10)
        .map(|rank| PerformanceRow {
            rank,
            kind: String::new(),
            hotkey: String::new(),
            ct_take: String::new(),
            proportion: String::new(),
            subnet_weight: String::new(),
            noms: String::new(),
            family_weight: String::new(),
            family_balance: String::new(),
            dominance: String::new(),
            divs: String::new(),
        })
        .collect()
});

pub fn records() -> &'static [PerformanceRow] {
    Lazy::force(&PERFORMANCE).as_slice()
}

/// The tabbed table. This page has no search box, so the dataset carries
/// no selectors and only the empty query matches anything.
pub fn table() -> TableDataset<PerformanceRow> {
    TableDataset::new(
        "performance",
        "Performance Data",
        "performance.csv",
        records(),
        Vec::new(),
        vec![
            Column::new("Rank", |r: &PerformanceRow| r.rank.to_string()),
            Column::new("Type", |r: &PerformanceRow| r.kind.clone()),
            Column::new("Hotkey", |r: &PerformanceRow| r.hotkey.clone()),
            Column::new("CT Take", |r: &PerformanceRow| r.ct_take.clone()),
            Column::new("Proportion", |r: &PerformanceRow| r.proportion.clone()),
            Column::new("Subnet Weight", |r: &PerformanceRow| {
                r.subnet_weight.clone()
            }),
            Column::new("Noms", |r: &PerformanceRow| r.noms.clone()),
            Column::new("Family Weight", |r: &PerformanceRow| {
                r.family_weight.clone()
            }),
            Column::new("Family Balance", |r: &PerformanceRow| {
                r.family_balance.clone()
            }),
            Column::new("Dominance", |r: &PerformanceRow| r.dominance.clone()),
            Column::new("Divs", |r: &PerformanceRow| r.divs.clone()),
        ],
    )
}
