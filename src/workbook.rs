use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use log::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::types::{InterfaceRecord, COLUMNS};

/// Sheet names longer than this are cut.
const MAX_SHEET_NAME_LEN: usize = 30;

/// Characters Excel does not accept in sheet names.
const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

const DEFAULT_SHEET_NAME: &str = "Sheet";

/// Sheet name for a device: its hostname, or `fallback` when the capture had
/// none, cleaned up so Excel accepts it.
pub(crate) fn sheet_name(hostname: &str, fallback: &str) -> String {
    let name = if hostname.is_empty() { fallback } else { hostname };

    let name: String = name
        .chars()
        .map(|c| if INVALID_SHEET_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let name = name.trim_matches('\'');

    if name.is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Store `records` as sheet `sheet_name` of the workbook at `path`.
///
/// The workbook is created if it does not exist. A sheet of the same name is
/// removed and the new one appended after the remaining sheets, which are
/// left as they are.
pub(crate) fn write_sheet(
    path: &Path,
    sheet_name: &str,
    records: &[InterfaceRecord],
) -> Result<(), anyhow::Error> {
    let mut book = if path.exists() {
        umya_spreadsheet::reader::xlsx::read(path).context("Reading existing workbook")?
    } else {
        umya_spreadsheet::new_file_empty_worksheet()
    };

    remove_sheet(&mut book, sheet_name)?;

    let worksheet = book
        .new_sheet(sheet_name)
        .map_err(|e| anyhow!("Adding sheet '{sheet_name}': {e}"))?;
    fill_sheet(worksheet, records);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Creating output dir")?;
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).context("Writing workbook")?;

    Ok(())
}

fn remove_sheet(book: &mut Spreadsheet, sheet_name: &str) -> Result<(), anyhow::Error> {
    // Excel compares sheet names case-insensitively.
    let key = sheet_name.to_lowercase();
    let existing = book
        .get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .find(|name| name.to_lowercase() == key);

    if let Some(name) = existing {
        debug!("Replacing existing sheet '{name}'");
        book.remove_sheet_by_name(&name)
            .map_err(|e| anyhow!("Removing sheet '{name}': {e}"))?;
    }

    Ok(())
}

/// Bold header row followed by one row per record. Cells are 1-based (column, row).
fn fill_sheet(worksheet: &mut Worksheet, records: &[InterfaceRecord]) {
    for (col, title) in (1u32..).zip(COLUMNS) {
        worksheet.get_cell_mut((col, 1)).set_value_string(title);
        worksheet.get_style_mut((col, 1)).get_font_mut().set_bold(true);
    }

    for (row, record) in (2u32..).zip(records) {
        for (col, value) in (1u32..).zip(record.cells()) {
            if !value.is_empty() {
                worksheet.get_cell_mut((col, row)).set_value_string(value);
            }
        }
    }

    for col in 0..COLUMNS.len() as u8 {
        let letter = char::from(b'A' + col).to_string();
        worksheet.get_column_dimension_mut(&letter).set_auto_width(true);
    }
}
