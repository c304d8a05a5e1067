//! One-way exports of a generated plan: an Excel workbook, a CSV worksheet
//! and a JSON document.

use crate::error::ExportResult;
use crate::item::{COLUMNS, ScheduledItem};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

/// Upper bound for an auto-sized column, in characters.
pub const MAX_COLUMN_WIDTH: usize = 60;
const COLUMN_PADDING: usize = 2;
/// Level, Week and Duration(min) are written as numbers in the workbook.
const NUMERIC_COLUMNS: [usize; 3] = [0, 1, 5];

/// A single-sheet table: the header row plus one row per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub name: String,
    pub rows: Vec<[String; 7]>,
    pub column_widths: [usize; 7],
}

impl Worksheet {
    pub fn from_items(items: &[ScheduledItem]) -> Self {
        let rows: Vec<[String; 7]> = items.iter().map(ScheduledItem::cells).collect();
        let column_widths = column_widths(&rows);
        Self {
            name: "Schedule".to_string(),
            rows,
            column_widths,
        }
    }

    pub fn headers(&self) -> [&'static str; 7] {
        COLUMNS
    }

    /// Writes a single-sheet workbook with a bold header row and the
    /// auto-sized column widths applied.
    pub fn write_xlsx<P: AsRef<Path>>(&self, path: P) -> ExportResult<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.name)?;

        for (col, header) in (0u16..).zip(self.headers()) {
            sheet.write_string_with_format(0, col, header, &header_format)?;
        }
        for (row_index, row) in (1u32..).zip(&self.rows) {
            for (col, (index, cell)) in (0u16..).zip(row.iter().enumerate()) {
                match cell.parse::<u32>() {
                    Ok(number) if NUMERIC_COLUMNS.contains(&index) => {
                        sheet.write_number(row_index, col, number)?;
                    }
                    _ => {
                        sheet.write_string(row_index, col, cell)?;
                    }
                }
            }
        }
        for (col, width) in (0u16..).zip(self.column_widths) {
            sheet.set_column_width(col, width as f64)?;
        }

        workbook.save(path)?;
        info!(path = %path.display(), rows = self.rows.len(), widths = ?self.column_widths, "wrote workbook");
        Ok(())
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> ExportResult<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(self.headers())?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = self.rows.len(), "wrote csv worksheet");
        Ok(())
    }
}

/// Width per column: the longest header or cell plus padding, capped at
/// [`MAX_COLUMN_WIDTH`].
pub fn column_widths(rows: &[[String; 7]]) -> [usize; 7] {
    let mut widths = COLUMNS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| (w + COLUMN_PADDING).min(MAX_COLUMN_WIDTH))
}

pub fn save_schedule_to_xlsx<P: AsRef<Path>>(items: &[ScheduledItem], path: P) -> ExportResult<()> {
    Worksheet::from_items(items).write_xlsx(path)
}

pub fn save_schedule_to_csv<P: AsRef<Path>>(items: &[ScheduledItem], path: P) -> ExportResult<()> {
    Worksheet::from_items(items).write_csv(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub title: String,
    pub items: Vec<ScheduledItem>,
}

pub fn save_schedule_to_json<P: AsRef<Path>>(
    title: &str,
    items: &[ScheduledItem],
    path: P,
) -> ExportResult<()> {
    let path = path.as_ref();
    create_parent_dirs(path)?;
    let document = PlanDocument {
        title: title.to_string(),
        items: items.to_vec(),
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &document)?;
    info!(path = %path.display(), items = items.len(), "wrote plan document");
    Ok(())
}

fn create_parent_dirs(path: &Path) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
