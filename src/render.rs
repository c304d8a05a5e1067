use crate::item::{COLUMNS, ScheduledItem};
use polars::prelude::{AnyValue, DataFrame};

const DELIMITER: &str = " | ";

/// Renders items as a pipe-delimited table: header row, `---` separator row,
/// then one row per item in input order. Cell text is not escaped, so a `|`
/// inside a field shifts the columns of that row.
pub fn render_table(items: &[ScheduledItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(COLUMNS.join(DELIMITER));
    lines.push(["---"; COLUMNS.len()].join(DELIMITER));
    for item in items {
        lines.push(item.cells().join(DELIMITER));
    }
    lines.join("\n")
}

/// Title line followed by the table.
pub fn render_document(title: &str, items: &[ScheduledItem]) -> String {
    format!("{title}\n{}", render_table(items))
}

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Boxed, column-aligned text rendering of a frame, for terminal output.
pub fn render_dataframe(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|col| col.get(row_idx).map(|av| cell_text(&av)).unwrap_or_default())
            .collect();
        cells.push(row);
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.chars().count()).collect();
    for row in &cells {
        for (ci, s) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(s.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &col_names, &widths);
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn push_row(out: &mut String, row: &[String], widths: &[usize]) {
    out.push('|');
    for (s, width) in row.iter().zip(widths) {
        out.push(' ');
        out.push_str(s);
        let pad = width.saturating_sub(s.chars().count());
        out.push_str(&" ".repeat(pad));
        out.push_str(" |");
    }
    out.push('\n');
}
