use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::commands::EncodeOutcome;

/// Summary of an export, one row per figure.
pub fn summary_table(outcome: &EncodeOutcome) -> Table {
    let output = outcome
        .output
        .as_ref()
        .map_or_else(|| "<stdout>".to_string(), |path| path.display().to_string());

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Case", "Drugs", "Reactions", "Causality", "Output", "Bytes"]);
    table.add_row(vec![
        Cell::new(&outcome.case_id).add_attribute(Attribute::Bold),
        Cell::new(outcome.drugs),
        Cell::new(outcome.reactions),
        Cell::new(outcome.causality_assessments),
        Cell::new(output),
        Cell::new(outcome.bytes),
    ]);
    for index in [1, 2, 3, 5] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Print the summary; to stderr when stdout carries the XML.
pub fn print_summary(outcome: &EncodeOutcome) {
    let table = summary_table(outcome);
    if outcome.output.is_some() {
        println!("{table}");
    } else {
        eprintln!("{table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
