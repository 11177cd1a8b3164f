//! Static chart series behind the explorer dashboards
//!
//! Each chart publishes one series per supported time range. The values are
//! the explorer's fixed sample data; lookups for a range a chart does not
//! offer return `None`.

use crate::view::TimeRange;
use serde::Serialize;

/// One plotted series: axis labels plus values for a single time range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Series {
    pub label: &'static str,
    pub labels: &'static [&'static str],
    pub values: &'static [u64],
}

/// Range picker on the volume, growth and supply charts.
pub const STANDARD_RANGES: &[TimeRange] = &[
    TimeRange::D7,
    TimeRange::D30,
    TimeRange::D90,
    TimeRange::D180,
    TimeRange::Y1,
];

/// Range picker on the wallet balance chart.
pub const WALLET_RANGES: &[TimeRange] = &[
    TimeRange::D1,
    TimeRange::D7,
    TimeRange::D30,
    TimeRange::D180,
    TimeRange::D360,
];

/// Every chart opens on the 30d range.
pub const DEFAULT_RANGE: TimeRange = TimeRange::D30;

const WEEKDAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKS: &[&str] = &["Week 1", "Week 2", "Week 3", "Week 4"];
const MONTHS_3: &[&str] = &["Month 1", "Month 2", "Month 3"];
const MONTHS_6: &[&str] = &[
    "Month 1", "Month 2", "Month 3", "Month 4", "Month 5", "Month 6",
];
const QUARTERS_4: &[&str] = &["Q1", "Q2", "Q3", "Q4"];
const QUARTERS_6: &[&str] = &["Q1", "Q2", "Q3", "Q4", "Q5", "Q6"];
const DAY_HOURS: &[&str] = &[
    "00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "24:00",
];

/// Number of transactions over time, shown under the transactions table.
pub fn transaction_volume(range: TimeRange) -> Option<Series> {
    let (labels, values): (&'static [&'static str], &'static [u64]) = match range {
        TimeRange::D7 => (
            WEEKDAYS,
            &[
                15_000_000, 15_200_000, 14_800_000, 16_000_000, 16_500_000, 16_800_000, 17_000_000,
            ],
        ),
        TimeRange::D30 => (WEEKS, &[12_000_000, 14_000_000, 15_500_000, 17_000_000]),
        TimeRange::D90 => (MONTHS_3, &[8_000_000, 12_000_000, 17_000_000]),
        TimeRange::D180 => (
            QUARTERS_6,
            &[5_000_000, 7_000_000, 9_000_000, 12_000_000, 14_000_000, 17_000_000],
        ),
        TimeRange::Y1 => (QUARTERS_4, &[3_000_000, 8_000_000, 13_000_000, 17_000_000]),
        _ => return None,
    };
    Some(Series {
        label: "Transactions",
        labels,
        values,
    })
}

/// Account growth, shown under the accounts table.
pub fn account_growth(range: TimeRange) -> Option<Series> {
    let (labels, values): (&'static [&'static str], &'static [u64]) = match range {
        TimeRange::D7 => (
            WEEKDAYS,
            &[280_000, 285_000, 282_000, 290_000, 295_000, 298_000, 300_000],
        ),
        TimeRange::D30 => (WEEKS, &[250_000, 270_000, 285_000, 300_000]),
        TimeRange::D90 => (MONTHS_3, &[200_000, 250_000, 300_000]),
        TimeRange::D180 => (
            QUARTERS_6,
            &[150_000, 180_000, 220_000, 250_000, 275_000, 300_000],
        ),
        TimeRange::Y1 => (QUARTERS_4, &[100_000, 180_000, 250_000, 300_000]),
        _ => return None,
    };
    Some(Series {
        label: "Accounts",
        labels,
        values,
    })
}

/// Circulating supply trend on the tokenomics page, in thousands of REP.
pub fn supply_trend(range: TimeRange) -> Option<Series> {
    let (labels, values): (&'static [&'static str], &'static [u64]) = match range {
        TimeRange::D7 => (
            WEEKDAYS,
            &[410_000, 412_000, 408_000, 415_000, 418_000, 420_000, 420_000],
        ),
        TimeRange::D30 => (WEEKS, &[380_000, 395_000, 405_000, 420_000]),
        TimeRange::D90 => (MONTHS_3, &[320_000, 370_000, 420_000]),
        TimeRange::D180 => (
            QUARTERS_6,
            &[250_000, 280_000, 320_000, 360_000, 390_000, 420_000],
        ),
        TimeRange::Y1 => (QUARTERS_4, &[150_000, 250_000, 350_000, 420_000]),
        _ => return None,
    };
    Some(Series {
        label: "Supply (REP)",
        labels,
        values,
    })
}

/// Balance history on the wallet page. Note the wallet range picker: it
/// trades 90d/1y for 1d/360d.
pub fn balance_history(range: TimeRange) -> Option<Series> {
    let (labels, values): (&'static [&'static str], &'static [u64]) = match range {
        TimeRange::D1 => (
            DAY_HOURS,
            &[12_000, 12_150, 11_900, 12_300, 12_590, 12_400, 12_590],
        ),
        TimeRange::D7 => (
            WEEKDAYS,
            &[11_000, 11_200, 10_800, 11_500, 12_000, 11_800, 12_590],
        ),
        TimeRange::D30 => (WEEKS, &[8_000, 9_500, 11_000, 12_590]),
        TimeRange::D180 => (MONTHS_6, &[5_000, 6_500, 8_000, 9_500, 11_000, 12_590]),
        TimeRange::D360 => (QUARTERS_4, &[3_000, 6_000, 9_000, 12_590]),
        _ => return None,
    };
    Some(Series {
        label: "Balance (REP)",
        labels,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_charts_cover_their_ranges() {
        for range in STANDARD_RANGES {
            for lookup in [transaction_volume, account_growth, supply_trend] {
                let series = lookup(*range).unwrap();
                assert_eq!(series.labels.len(), series.values.len());
                assert!(!series.values.is_empty());
            }
        }
    }

    #[test]
    fn test_wallet_chart_covers_its_ranges() {
        for range in WALLET_RANGES {
            let series = balance_history(*range).unwrap();
            assert_eq!(series.labels.len(), series.values.len());
        }
    }

    #[test]
    fn test_range_pickers_differ() {
        // The wallet picker swaps 90d/1y for 1d/360d
        assert!(balance_history(TimeRange::D90).is_none());
        assert!(balance_history(TimeRange::Y1).is_none());
        assert!(transaction_volume(TimeRange::D1).is_none());
        assert!(transaction_volume(TimeRange::D360).is_none());
    }

    #[test]
    fn test_default_range() {
        assert_eq!(DEFAULT_RANGE, TimeRange::D30);
        assert!(transaction_volume(DEFAULT_RANGE).is_some());
        assert!(balance_history(DEFAULT_RANGE).is_some());
    }

    #[test]
    fn test_series_values() {
        let volume = transaction_volume(TimeRange::D7).unwrap();
        assert_eq!(volume.label, "Transactions");
        assert_eq!(volume.labels[0], "Mon");
        assert_eq!(volume.values[6], 17_000_000);

        let supply = supply_trend(TimeRange::Y1).unwrap();
        assert_eq!(supply.values, &[150_000, 250_000, 350_000, 420_000]);

        let balance = balance_history(TimeRange::D1).unwrap();
        assert_eq!(balance.labels[0], "00:00");
        assert_eq!(balance.values[4], 12_590);
    }
}
