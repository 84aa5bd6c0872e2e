//! Table formatting using comfy-table.

use std::io::IsTerminal;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use super::colors::SemanticStyle;

/// Creates a styled table with a bold header row.
pub fn list_table(columns: &[&str], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let plain = super::no_color() || !std::io::stdout().is_terminal();
    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|col| {
            if plain {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Prints a table followed by a row count footer.
pub fn print_list_table(columns: &[&str], rows: &[Vec<String>], noun: &str) {
    let table = list_table(columns, rows);
    println!("{table}");

    let count = rows.len();
    let suffix = if count == 1 { "" } else { "s" };
    println!("{}", format!("({count} {noun}{suffix})").muted());
}
