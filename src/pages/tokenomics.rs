//! The Tokenomics page: supply stats and the staked/unstaked split

use crate::format::group_digits;
use serde::Serialize;

/// Headline supply figures. Supplies are raw token counts and pick up
/// their thousands separators at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupplyStats {
    pub circulating: u64,
    pub staked: u64,
    pub emission_rate: &'static str,
    pub staked_percent: u32,
}

pub static STATS: SupplyStats = SupplyStats {
    circulating: 420_000_000,
    staked: 168_000_000,
    emission_rate: "2 REP / block ~ 14,400 REP / day",
    staked_percent: 40,
};

impl SupplyStats {
    pub fn unstaked_percent(&self) -> u32 {
        100 - self.staked_percent
    }

    /// Labelled card values in page order.
    pub fn stat_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Circulating Supply", format!("{} REP", group_digits(self.circulating))),
            ("Supply Staked", format!("{} REP", group_digits(self.staked))),
            ("Emission Rate", self.emission_rate.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts;
    use crate::view::TimeRange;

    #[test]
    fn test_supply_stats() {
        assert_eq!(STATS.circulating, 420_000_000);
        assert_eq!(STATS.staked, 168_000_000);
        assert_eq!(STATS.staked_percent, 40);
        assert_eq!(STATS.unstaked_percent(), 60);
    }

    #[test]
    fn test_stat_rows_grouping() {
        let rows = STATS.stat_rows();
        assert_eq!(rows[0].1, "420,000,000 REP");
        assert_eq!(rows[1].1, "168,000,000 REP");
        assert_eq!(rows[2].1, "2 REP / block ~ 14,400 REP / day");
    }

    #[test]
    fn test_supply_trend_is_wired() {
        let series = charts::supply_trend(TimeRange::D30);
        assert!(series.is_some());
        let series = series.unwrap();
        assert_eq!(series.label, "Supply (REP)");
        assert_eq!(series.values.last(), Some(&420_000));
    }
}
