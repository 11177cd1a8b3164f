//! View-state carried by every explorer page
//!
//! The chrome around each table: the rows-per-page picker, the decorative
//! pagination strip, the footer line, the chart time-range picker and the
//! validator-detail tab strip.

use crate::error::{ExplorerError, Result};
use crate::format::group_digits;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Time ranges
// ============================================================================

/// Chart time ranges offered across the explorer. Which subset a chart
/// accepts is declared next to its series data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    D1,
    D7,
    D30,
    D90,
    D180,
    D360,
    Y1,
}

impl TimeRange {
    pub const ALL: &'static [TimeRange] = &[
        TimeRange::D1,
        TimeRange::D7,
        TimeRange::D30,
        TimeRange::D90,
        TimeRange::D180,
        TimeRange::D360,
        TimeRange::Y1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::D1 => "1d",
            TimeRange::D7 => "7d",
            TimeRange::D30 => "30d",
            TimeRange::D90 => "90d",
            TimeRange::D180 => "180d",
            TimeRange::D360 => "360d",
            TimeRange::Y1 => "1y",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "1d" => Ok(TimeRange::D1),
            "7d" => Ok(TimeRange::D7),
            "30d" => Ok(TimeRange::D30),
            "90d" => Ok(TimeRange::D90),
            "180d" => Ok(TimeRange::D180),
            "360d" => Ok(TimeRange::D360),
            "1y" => Ok(TimeRange::Y1),
            _ => Err(ExplorerError::InvalidTimeRange(s.to_string())),
        }
    }
}

// ============================================================================
// Rows per page
// ============================================================================

/// Options shown on the list pages.
pub const LIST_ROWS_OPTIONS: &[usize] = &[10, 25, 50, 100];
/// Options shown on the validator-detail page.
pub const DETAIL_ROWS_OPTIONS: &[usize] = &[1, 25, 50, 100];

/// The rows-per-page picker: a fixed option strip plus the active choice.
#[derive(Debug, Clone, Copy)]
pub struct RowsPerPage {
    options: &'static [usize],
    selected: usize,
}

impl RowsPerPage {
    /// List pages default to 10 rows.
    pub fn list() -> Self {
        Self {
            options: LIST_ROWS_OPTIONS,
            selected: 10,
        }
    }

    /// The validator-detail page defaults to 100 rows.
    pub fn detail() -> Self {
        Self {
            options: DETAIL_ROWS_OPTIONS,
            selected: 100,
        }
    }

    /// Pick an option; values outside the strip are rejected.
    pub fn select(&mut self, rows: usize) -> Result<()> {
        if !self.options.contains(&rows) {
            return Err(ExplorerError::InvalidRowsPerPage {
                got: rows,
                options: self.options,
            });
        }
        self.selected = rows;
        Ok(())
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &'static [usize] {
        self.options
    }
}

// ============================================================================
// Pagination strip and footers
// ============================================================================

/// The decorative pager: `Previous 1 2 3 ... {total} Next`.
///
/// Totals come from the page modules as fixed widget data; they are not
/// derived from the embedded records.
#[derive(Debug, Clone, Copy)]
pub struct PaginationStub {
    pub current: u64,
    pub total: u64,
}

impl PaginationStub {
    pub fn new(total: u64) -> Self {
        Self { current: 1, total }
    }

    /// The numbered labels between Previous and Next, with the total grouped
    /// ("5,898"). Small totals collapse to the plain sequence.
    pub fn trail(&self) -> Vec<String> {
        if self.total <= 4 {
            return (1..=self.total.max(1)).map(|page| page.to_string()).collect();
        }
        vec![
            "1".to_string(),
            "2".to_string(),
            "3".to_string(),
            "...".to_string(),
            group_digits(self.total),
        ]
    }
}

/// "Showing 1 to {upper} of {total} entries" as the list pages print it;
/// `upper` is the raw rows-per-page setting, not the visible row count.
pub fn footer_showing(upper: usize, total: usize) -> String {
    format!("Showing 1 to {} of {} entries", upper, total)
}

/// Windowed footer used by the validators page.
pub fn footer_showing_window(start: usize, end: usize, total: usize) -> String {
    format!("Showing {} to {} of {} entries", start, end, total)
}

/// Delegation's short footer, with no total.
pub fn footer_showing_short(upper: usize) -> String {
    format!("Showing 1 to {} entries", upper)
}

// ============================================================================
// Detail tabs
// ============================================================================

/// Tab strip on the validator-detail page. Only Performance carries table
/// data; the rest are placeholders upstream too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Performance,
    Staked,
    Rewards,
    JobsHistory,
    BlocksMined,
    Slashing,
    Benchmarks,
}

impl DetailTab {
    pub const ALL: &'static [DetailTab] = &[
        DetailTab::Performance,
        DetailTab::Staked,
        DetailTab::Rewards,
        DetailTab::JobsHistory,
        DetailTab::BlocksMined,
        DetailTab::Slashing,
        DetailTab::Benchmarks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Performance => "Performance",
            DetailTab::Staked => "Staked",
            DetailTab::Rewards => "Rewards",
            DetailTab::JobsHistory => "Jobs History",
            DetailTab::BlocksMined => "Blocks Mined",
            DetailTab::Slashing => "Slashing",
            DetailTab::Benchmarks => "Benchmarks",
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DetailTab {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        // Accept "Jobs History", "jobs-history" and "jobshistory" alike
        let folded: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        DetailTab::ALL
            .iter()
            .find(|tab| {
                tab.label()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_lowercase()
                    == folded
            })
            .copied()
            .ok_or_else(|| ExplorerError::UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_round_trip() {
        for range in TimeRange::ALL {
            let parsed: TimeRange = range.as_str().parse().unwrap();
            assert_eq!(parsed, *range);
        }
    }

    #[test]
    fn test_time_range_parse_is_case_insensitive() {
        assert_eq!("1Y".parse::<TimeRange>().unwrap(), TimeRange::Y1);
        assert_eq!("30D".parse::<TimeRange>().unwrap(), TimeRange::D30);
    }

    #[test]
    fn test_time_range_rejects_unknown() {
        assert!("2w".parse::<TimeRange>().is_err());
        assert!("".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_rows_per_page_defaults() {
        assert_eq!(RowsPerPage::list().selected(), 10);
        assert_eq!(RowsPerPage::detail().selected(), 100);
    }

    #[test]
    fn test_rows_per_page_select() {
        let mut rows = RowsPerPage::list();
        rows.select(50).unwrap();
        assert_eq!(rows.selected(), 50);
        assert!(rows.select(7).is_err());
        assert_eq!(rows.selected(), 50);
    }

    #[test]
    fn test_detail_rows_allow_one() {
        let mut rows = RowsPerPage::detail();
        rows.select(1).unwrap();
        assert_eq!(rows.selected(), 1);
    }

    #[test]
    fn test_pagination_trail() {
        let pager = PaginationStub::new(5898);
        assert_eq!(pager.trail(), vec!["1", "2", "3", "...", "5,898"]);

        let small = PaginationStub::new(3);
        assert_eq!(small.trail(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_footers() {
        assert_eq!(footer_showing(10, 10), "Showing 1 to 10 of 10 entries");
        assert_eq!(footer_showing(10, 0), "Showing 1 to 10 of 0 entries");
        assert_eq!(
            footer_showing_window(1, 10, 10),
            "Showing 1 to 10 of 10 entries"
        );
        assert_eq!(footer_showing_short(6), "Showing 1 to 6 entries");
    }

    #[test]
    fn test_detail_tab_parse() {
        assert_eq!(
            "performance".parse::<DetailTab>().unwrap(),
            DetailTab::Performance
        );
        assert_eq!(
            "Jobs History".parse::<DetailTab>().unwrap(),
            DetailTab::JobsHistory
        );
        assert_eq!(
            "blocks-mined".parse::<DetailTab>().unwrap(),
            DetailTab::BlocksMined
        );
        assert!("Overview".parse::<DetailTab>().is_err());
    }
}
