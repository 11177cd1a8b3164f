//! Shared terminal rendering for the repscan binary
//!
//! All tables go through here so every page gets the same look: UTF8 box
//! drawing, bold cyan headers, white body cells. Empty cells (the detail
//! page placeholder rows) render as a grey dash so the columns stay
//! visible.

use crate::charts::Series;
use crate::dataset::Column;
use crate::format::group_digits;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Color as TableColor;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use tracing::Level;

/// Install the fmt subscriber. The default level keeps table output clean;
/// `-v` turns on the filter and cache debug lines.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn header_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(TableColor::Cyan)
        .add_attribute(Attribute::Bold)
}

fn body_cell(value: String) -> Cell {
    if value.is_empty() {
        Cell::new("-").fg(TableColor::Grey)
    } else {
        Cell::new(value).fg(TableColor::White)
    }
}

/// Render records through their column projections.
pub fn data_table<T>(columns: &[Column<T>], rows: &[T]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|c| header_cell(c.name)).collect::<Vec<_>>());

    for row in rows {
        table.add_row(
            columns
                .iter()
                .map(|c| body_cell((c.project)(row)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// A chart as a two-row table: period labels over grouped values.
pub fn series_table(series: &Series) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            series
                .labels
                .iter()
                .map(|label| header_cell(label))
                .collect::<Vec<_>>(),
        );
    table.add_row(
        series
            .values
            .iter()
            .map(|v| body_cell(group_digits(*v)))
            .collect::<Vec<_>>(),
    );
    table
}

/// A label/value grid for KPI cards.
pub fn stat_table(rows: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for (label, value) in rows {
        table.add_row(vec![header_cell(label), body_cell(value.clone())]);
    }
    table
}
