use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabclean_cli::types::CleanRun;
use tabclean_model::{ColumnKind, ColumnRole};
use tabclean_normalization::{CleaningReport, ColumnReport};

pub fn print_summary(run: &CleanRun) {
    for line in header_lines(run) {
        println!("{line}");
    }
    println!("{}", column_table(&run.report));
}

/// Print the report as pretty JSON on stdout.
pub fn print_json(run: &CleanRun) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&run.report)?);
    Ok(())
}

fn header_lines(run: &CleanRun) -> Vec<String> {
    let mut source = vec![run.input_format.as_str().to_string()];
    if let Some(delimiter) = run.delimiter {
        source.push(format!("delimiter {}", delimiter_label(delimiter)));
    }
    if let Some(encoding) = run.encoding {
        source.push(encoding.as_str().to_string());
    }
    let mut lines = vec![format!(
        "Input: {} ({})",
        run.input.display(),
        source.join(", ")
    )];
    lines.push(match &run.written {
        Some(path) => format!("Output: {} ({})", path.display(), run.output_format),
        None => format!("Output: {} (dry run, not written)", run.output.display()),
    });
    lines.push(format!("Profile: {}", run.profile.as_str()));
    if run.expanded {
        lines.push("Embedded CSV fields were split into columns".to_string());
    }
    lines
}

fn delimiter_label(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "tab".to_string(),
        other => format!("'{}'", char::from(other)),
    }
}

fn column_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Source"),
        header_cell("Role"),
        header_cell("Type"),
        header_cell("Changed"),
        header_cell("Empty"),
        header_cell("Coerced"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);

    let mut total_empty = 0usize;
    for column in &report.columns {
        total_empty += column.empty_cells;
        table.add_row(column_row(column));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows", report.rows))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(report.changed_cells(), Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(total_empty).add_attribute(Attribute::Bold),
        Cell::new(report.coerced_columns()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn column_row(column: &ColumnReport) -> Vec<Cell> {
    let source = if column.source_name == column.name {
        dim_cell("-")
    } else {
        Cell::new(&column.source_name)
    };
    vec![
        Cell::new(&column.name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        source,
        role_cell(column.role),
        kind_cell(column.kind),
        count_cell(column.changed_cells, Color::Yellow),
        count_cell(column.empty_cells, Color::DarkYellow),
        if column.coerced {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("-")
        },
    ]
}

fn role_cell(role: ColumnRole) -> Cell {
    match role {
        ColumnRole::Text => dim_cell(role.as_str()),
        ColumnRole::Identifier => Cell::new(role.as_str()).fg(Color::Magenta),
        ColumnRole::Price => Cell::new(role.as_str()).fg(Color::Green),
    }
}

fn kind_cell(kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Text => Cell::new("text"),
        ColumnKind::Numeric => Cell::new("numeric").fg(Color::Cyan),
        ColumnKind::DateTime => Cell::new("datetime").fg(Color::Magenta),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
