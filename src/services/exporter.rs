// src/services/exporter.rs
// DOCUMENTATION: Spreadsheet export of place details
// PURPOSE: Write one header row plus one row per PlaceDetail to an .xlsx file

use crate::errors::PlacesError;
use crate::models::{CellValue, PlaceDetail, EXPORT_COLUMNS};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

/// File name for a run: `{city}_{keyword_with_underscores}_places.xlsx`
/// DOCUMENTATION: Only spaces in the keyword are replaced; the city is kept as typed
pub fn output_filename(city: &str, keyword: &str) -> String {
    format!("{}_{}_places.xlsx", city, keyword.replace(' ', "_"))
}

/// Header row followed by data rows, all in EXPORT_COLUMNS order
pub fn build_table(details: &[PlaceDetail]) -> Vec<Vec<CellValue>> {
    let header: Vec<CellValue> = EXPORT_COLUMNS
        .iter()
        .map(|column| CellValue::Text(column.to_string()))
        .collect();

    std::iter::once(header)
        .chain(details.iter().map(PlaceDetail::to_row))
        .collect()
}

/// Writes place details into an .xlsx workbook
pub struct XlsxExporter {
    output_dir: PathBuf,
}

impl XlsxExporter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Export records to `output_dir/filename`
    /// DOCUMENTATION: Callers are expected to skip empty sequences; an empty one is refused
    ///
    /// # Returns
    /// Path of the written file
    pub fn export(&self, details: &[PlaceDetail], filename: &str) -> Result<PathBuf, PlacesError> {
        if details.is_empty() {
            return Err(PlacesError::ExportError("no records to export".to_string()));
        }

        let path = self.output_dir.join(filename);
        let summary = write_workbook(&build_table(details), &path).map_err(|e| {
            log::error!("Failed to write {}: {}", path.display(), e);
            PlacesError::ExportError(e.to_string())
        })?;

        log::info!(
            "Wrote {} data rows ({} cells) to {}",
            summary.rows.saturating_sub(1),
            summary.cells,
            path.display()
        );
        Ok(path)
    }
}

/// Rows and non-empty cells written to a worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSummary {
    pub rows: u32,
    pub cells: u32,
}

fn write_workbook(table: &[Vec<CellValue>], path: &Path) -> Result<SheetSummary, XlsxError> {
    let mut worksheet = Worksheet::new();
    let summary = write_rows(&mut worksheet, table)?;

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.set_column_width(0, 32.0)?;
    worksheet.set_column_width(1, 48.0)?;
    worksheet.set_column_width(2, 18.0)?;
    worksheet.set_column_width(5, 40.0)?;

    let mut workbook = Workbook::new();
    workbook.push_worksheet(worksheet);
    workbook.save(path)?;
    Ok(summary)
}

/// Write the table starting at A1; the first row gets the header format
fn write_rows(worksheet: &mut Worksheet, table: &[Vec<CellValue>]) -> Result<SheetSummary, XlsxError> {
    let header_format = Format::new().set_bold();
    let mut summary = SheetSummary { rows: 0, cells: 0 };

    for (row_idx, row) in table.iter().enumerate() {
        let row_num = row_idx as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            match cell {
                CellValue::Text(text) if row_idx == 0 => {
                    worksheet.write_string_with_format(row_num, col_num, text, &header_format)?;
                }
                CellValue::Text(text) => {
                    worksheet.write_string(row_num, col_num, text)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(row_num, col_num, *number)?;
                }
                CellValue::Empty => continue,
            }
            summary.cells += 1;
        }
        summary.rows += 1;
    }

    Ok(summary)
}
