//! Generic table engine shared by every explorer page
//!
//! A page is a fixed slice of records plus two kinds of projections:
//! - search selectors, feeding [`filter`]: a record matches when any
//!   selector's output contains the query, case-insensitively
//! - columns, feeding [`to_csv`] and the terminal renderer
//!
//! Numeric fields take part in search through their digit strings, so a
//! query of "102347" finds the block at that height.

use crate::cache::{FilterCache, FilterKey};
use std::sync::Arc;
use tracing::debug;

/// Projects a record into the text that participates in search.
pub type FieldSelector<T> = fn(&T) -> String;

/// One export/display column: header caption plus cell projection.
#[derive(Clone, Copy)]
pub struct Column<T> {
    pub name: &'static str,
    pub project: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(name: &'static str, project: fn(&T) -> String) -> Self {
        Self { name, project }
    }
}

/// Indices of the records a query matches, in input order.
fn matching_indices<T>(records: &[T], query: &str, selectors: &[FieldSelector<T>]) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            selectors
                .iter()
                .any(|selector| selector(record).to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Case-insensitive substring filter across selector projections.
///
/// An empty query matches every record. Matching lowercases both the query
/// and each selector's output, so "VALIDATOR" and "validator" agree. The
/// result preserves input order and never mutates the input.
pub fn filter<T: Clone>(records: &[T], query: &str, selectors: &[FieldSelector<T>]) -> Vec<T> {
    matching_indices(records, query, selectors)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}

/// Render records as CSV: a header line, then one line per record.
///
/// Cells are joined with bare commas and lines with `\n`; there is no
/// quoting or escaping, so a projection containing a comma or newline would
/// corrupt the shape. The embedded datasets contain neither. An empty record
/// slice yields the header line alone.
pub fn to_csv<T>(records: &[T], columns: &[Column<T>]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|column| column.name)
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in records {
        lines.push(
            columns
                .iter()
                .map(|column| (column.project)(record))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// A page's table: fixed records wired to their search and export
/// projections, plus the page furniture the CLI needs (title, CSV filename).
pub struct TableDataset<T: 'static> {
    name: &'static str,
    title: &'static str,
    csv_filename: &'static str,
    records: &'static [T],
    selectors: Vec<FieldSelector<T>>,
    columns: Vec<Column<T>>,
}

impl<T: Clone + 'static> TableDataset<T> {
    pub fn new(
        name: &'static str,
        title: &'static str,
        csv_filename: &'static str,
        records: &'static [T],
        selectors: Vec<FieldSelector<T>>,
        columns: Vec<Column<T>>,
    ) -> Self {
        Self {
            name,
            title,
            csv_filename,
            records,
            selectors,
            columns,
        }
    }

    /// Stable identity, used as the cache key and export file stem.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Page heading shown by the CLI.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Download name for exported CSV.
    pub fn csv_filename(&self) -> &'static str {
        self.csv_filename
    }

    pub fn records(&self) -> &'static [T] {
        self.records
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter the records by a search query. See [`filter`].
    pub fn filter(&self, query: &str) -> Vec<T> {
        filter(self.records, query, &self.selectors)
    }

    /// Like [`TableDataset::filter`], memoized through the shared cache.
    ///
    /// The cache stores row indices keyed by (dataset name, lowered query),
    /// so repeated queries skip the selector scan. Results are identical to
    /// the uncached path.
    pub fn filter_cached(&self, cache: &FilterCache, query: &str) -> Vec<T> {
        let key = FilterKey::new(self.name, query);
        if let Some(indices) = cache.get(&key) {
            debug!(dataset = self.name, query, "filter cache hit");
            return indices.iter().map(|&index| self.records[index].clone()).collect();
        }
        let indices = matching_indices(self.records, query, &self.selectors);
        debug!(
            dataset = self.name,
            query,
            matches = indices.len(),
            "filter cache miss"
        );
        let rows = indices.iter().map(|&index| self.records[index].clone()).collect();
        cache.put(key, Arc::new(indices));
        rows
    }

    /// Render rows (typically a filter result) as CSV. See [`to_csv`].
    pub fn to_csv(&self, rows: &[T]) -> String {
        to_csv(rows, &self.columns)
    }

    /// What the export button does: filter, then CSV of the matches.
    pub fn export_csv(&self, query: &str) -> String {
        self.to_csv(&self.filter(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: u64,
        label: &'static str,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { id: 17, label: "Alpha" },
            Entry { id: 170, label: "beta" },
            Entry { id: 2, label: "Gamma" },
        ]
    }

    fn selectors() -> Vec<FieldSelector<Entry>> {
        vec![|e: &Entry| e.id.to_string(), |e: &Entry| e.label.to_string()]
    }

    fn columns() -> Vec<Column<Entry>> {
        vec![
            Column::new("Id", |e: &Entry| e.id.to_string()),
            Column::new("Label", |e: &Entry| e.label.to_string()),
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        let data = entries();
        let matched = filter(&data, "", &selectors());
        assert_eq!(matched, data);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let data = entries();
        let lower = filter(&data, "alpha", &selectors());
        let upper = filter(&data, "ALPHA", &selectors());
        let mixed = filter(&data, "AlPhA", &selectors());
        assert_eq!(lower.len(), 1);
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower[0].label, "Alpha");
    }

    #[test]
    fn test_filter_matches_digit_substrings() {
        let data = entries();
        // "17" is a substring of both 17 and 170
        let matched = filter(&data, "17", &selectors());
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, 17);
        assert_eq!(matched[1].id, 170);
    }

    #[test]
    fn test_filter_preserves_order() {
        let data = entries();
        let matched = filter(&data, "a", &selectors());
        // Every label contains an 'a'; order must follow the input
        assert_eq!(matched, data);
    }

    #[test]
    fn test_filter_no_match() {
        let data = entries();
        assert!(filter(&data, "nonexistent", &selectors()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = entries();
        let once = filter(&data, "17", &selectors());
        let twice = filter(&once, "17", &selectors());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_csv_shape() {
        let data = entries();
        let csv = to_csv(&data, &columns());
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), data.len() + 1);
        assert_eq!(lines[0], "Id,Label");
        assert_eq!(lines[1], "17,Alpha");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_empty_records_is_header_only() {
        let csv = to_csv::<Entry>(&[], &columns());
        assert_eq!(csv, "Id,Label");
    }

    #[test]
    fn test_csv_is_deterministic() {
        let data = entries();
        assert_eq!(to_csv(&data, &columns()), to_csv(&data, &columns()));
    }
}
