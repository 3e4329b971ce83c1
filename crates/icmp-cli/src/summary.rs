use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use icmp_cli::pipeline::RunOutcome;
use icmp_model::CodeDiagnostic;

pub fn print_summary(outcome: &RunOutcome) {
    let compiled = &outcome.compiled;
    println!("Registry: {}", outcome.source);
    println!("Protocol: {}", compiled.variant.protocol_name());
    println!("Updated: {}", compiled.updated);
    if let Some(digest) = &compiled.source_sha256 {
        println!("SHA-256: {digest}");
    }
    if outcome.written {
        println!("Output: {} ({} bytes)", outcome.output, outcome.rendered_bytes);
    } else {
        println!("Output: {} (dry run, not written)", outcome.output);
    }

    let stats = compiled.stats();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Types"),
        header_cell("Codes"),
        header_cell("Unassigned types"),
        header_cell("Deprecated types"),
        header_cell("Unassigned codes"),
        header_cell("Diagnostics"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.types).add_attribute(Attribute::Bold),
        Cell::new(stats.codes).add_attribute(Attribute::Bold),
        count_cell(stats.unassigned_types, Color::DarkGrey),
        count_cell(stats.deprecated_types, Color::Yellow),
        count_cell(stats.unassigned_codes, Color::DarkGrey),
        count_cell(stats.diagnostics, Color::Yellow),
    ]);
    println!("{table}");
    print_diagnostic_table(&compiled.diagnostics);
}

fn print_diagnostic_table(diagnostics: &[CodeDiagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Code"),
        header_cell("Sub-registry"),
        header_cell("Problem"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for diagnostic in diagnostics {
        match diagnostic {
            CodeDiagnostic::TypeNotFound {
                type_value,
                code_value,
                registry_title,
            } => {
                table.add_row(vec![
                    Cell::new(type_value).fg(Color::Yellow),
                    Cell::new(code_value),
                    Cell::new(registry_title.trim()),
                    Cell::new("type not found, code dropped").fg(Color::Yellow),
                ]);
            }
        }
    }
    println!();
    println!("Diagnostics:");
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
