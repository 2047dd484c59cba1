use std::collections::BTreeSet;

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colcheck_cli::types::{CheckResult, TableSummary};

pub fn print_check(result: &CheckResult) {
    let report = &result.report;
    println!("Data: {}", result.data_path.display());
    println!("Config: {} (table {})", result.config_path.display(), report.table);
    println!("Rows: {}", result.rows);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("File"),
        header_cell("Config"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    let columns: BTreeSet<&String> = report.actual.iter().chain(&report.expected).collect();
    for column in columns {
        let status = if report.extra.contains(column) {
            Cell::new("extra").fg(Color::Red).add_attribute(Attribute::Bold)
        } else if report.missing.contains(column) {
            Cell::new("missing").fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else {
            Cell::new("ok").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(column),
            presence_cell(report.actual.contains(column)),
            presence_cell(report.expected.contains(column)),
            status,
        ]);
    }
    println!("{table}");
    if report.has_count_mismatch() {
        println!(
            "Column counts differ: {} in file, {} in config",
            report.actual.len(),
            report.expected.len()
        );
    }
    println!("{report}");
}

pub fn print_check_json(result: &CheckResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub fn print_tables(tables: &[TableSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Expected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in tables {
        table.add_row(vec![
            Cell::new(&summary.name).fg(Color::Cyan),
            Cell::new(summary.columns.len()),
            Cell::new(summary.columns.join(", ")),
        ]);
    }
    println!("{table}");
}

fn presence_cell(present: bool) -> Cell {
    if present {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("-").add_attribute(Attribute::Dim)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
