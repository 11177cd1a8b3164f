//! The Blocks page: the latest window of sealed blocks
//!
//! Searchable by height, hash and proposer; exports to `blocks.csv`.

use crate::dataset::{Column, TableDataset};
use crate::format::minute_stamp;
use crate::pages::sample_time;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Pages advertised by the pager strip; fixed widget data.
pub const TOTAL_PAGES: u64 = 5_898;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub height: u64,
    pub hash: String,
    pub proposer: String,
    pub timestamp: NaiveDateTime,
    pub tx_count: u32,
}

static BLOCKS: Lazy<Vec<Block>> = Lazy::new(|| {
    let hashes = [
        "0xA1B2C3D4E5F6G7H8I9J0",
        "0xB2C3D4E5F6G7H8I9J0K1",
        "0xC3D4E5F6G7H8I9J0K1L2",
        "0xD4E5F6G7H8I9J0K1L2M3",
        "0xE5F6G7H8I9J0K1L2M3N4",
        "0xF6G7H8I9J0K1L2M3N4O5",
        "0xG7H8I9J0K1L2M3N4O5P6",
        "0xH8I9J0K1L2M3N4O5P6Q7",
        "0xI9J0K1L2M3N4O5P6Q7R8",
        "0xJ0K1L2M3N4O5P6Q7R8S9",
    ];
    let proposers = [
        "validator_01",
        "validator_05",
        "validator_03",
        "validator_07",
        "validator_02",
        "validator_09",
        "validator_04",
        "validator_08",
        "validator_06",
        "validator_10",
    ];
    let tx_counts = [12u32, 8, 15, 6, 20, 4, 18, 11, 7, 14];

    hashes
        .iter()
        .zip(proposers.iter())
        .zip(tx_counts.iter())
        .enumerate()
        .map(|(i, ((hash, proposer), tx_count))| Block {
            height: 102_345 + i as u64,
            hash: (*hash).to_string(),
            proposer: (*proposer).to_string(),
            timestamp: sample_time(2025, 9, 17, 18, i as u32),
            tx_count: *tx_count,
        })
        .collect()
});

pub fn records() -> &'static [Block] {
    Lazy::force(&BLOCKS).as_slice()
}

pub fn table() -> TableDataset<Block> {
    TableDataset::new(
        "blocks",
        "Blocks",
        "blocks.csv",
        records(),
        vec![
            |b: &Block| b.height.to_string(),
            |b: &Block| b.hash.clone(),
            |b: &Block| b.proposer.clone(),
        ],
        vec![
            Column::new("Height", |b: &Block| b.height.to_string()),
            Column::new("Hash", |b: &Block| b.hash.clone()),
            Column::new("Proposer", |b: &Block| b.proposer.clone()),
            Column::new("Timestamp", |b: &Block| minute_stamp(&b.timestamp)),
            Column::new("Tx Count", |b: &Block| b.tx_count.to_string()),
        ],
    )
}
