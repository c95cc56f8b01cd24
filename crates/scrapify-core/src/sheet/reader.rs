//! Input workbook reading.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::SheetError;
use crate::models::config::RegistryConfig;

/// Left-pad an identifier with zeros to `width`. Longer values pass through.
pub fn pad_identifier(raw: &str, width: usize) -> String {
    format!("{:0>width$}", raw, width = width)
}

/// Read company identifiers from the first worksheet of a workbook.
///
/// The header row must contain the configured identifier column. Cell
/// values are rendered to text, trimmed, and zero-padded; blank cells are
/// skipped.
pub fn read_identifiers(path: &Path, registry: &RegistryConfig) -> Result<Vec<String>, SheetError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SheetError::Open(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)?
        .map_err(|e| SheetError::Open(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| SheetError::MissingColumn(registry.identifier_column.clone()))?;
    let column = header
        .iter()
        .position(|cell| {
            cell_text(cell).is_some_and(|text| text.trim() == registry.identifier_column)
        })
        .ok_or_else(|| SheetError::MissingColumn(registry.identifier_column.clone()))?;

    let mut identifiers = Vec::new();
    for row in rows {
        let Some(cell) = row.get(column) else { continue };
        let Some(text) = cell_text(cell) else { continue };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        identifiers.push(pad_identifier(trimmed, registry.identifier_width));
    }

    debug!("read {} identifiers from {}", identifiers.len(), path.display());

    Ok(identifiers)
}

/// Render a cell to text. Spreadsheet numbers come back as floats, so
/// integral floats drop the trailing ".0" to recover the typed number.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use rust_xlsxwriter::Workbook;

    use super::*;

    fn write_input(path: &Path, header: &str) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, header).unwrap();
        sheet.write_string(1, 0, "Acme Widgets Ltd").unwrap();
        sheet.write_string(1, 1, "123").unwrap();
        sheet.write_number(2, 1, 9876543.0).unwrap();
        // row 3 left blank on purpose
        sheet.write_string(4, 1, "  SC123456  ").unwrap();
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_read_identifiers_pads_and_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");
        write_input(&path, "Company Number");

        let identifiers = read_identifiers(&path, &RegistryConfig::default()).unwrap();

        assert_eq!(identifiers, vec!["00000123", "09876543", "SC123456"]);
    }

    #[test]
    fn test_header_is_matched_after_trimming() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");
        write_input(&path, "  Company Number ");

        let identifiers = read_identifiers(&path, &RegistryConfig::default()).unwrap();

        assert_eq!(identifiers.len(), 3);
    }

    #[test]
    fn test_missing_identifier_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");
        write_input(&path, "Registration");

        let result = read_identifiers(&path, &RegistryConfig::default());

        assert!(matches!(result, Err(SheetError::MissingColumn(_))));
    }

    #[test]
    fn test_unreadable_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");
        std::fs::write(&path, "not a workbook").unwrap();

        let result = read_identifiers(&path, &RegistryConfig::default());

        assert!(matches!(result, Err(SheetError::Open(_))));
    }

    #[test]
    fn test_pad_identifier() {
        assert_eq!(pad_identifier("123", 8), "00000123");
        assert_eq!(pad_identifier("01234567", 8), "01234567");
        assert_eq!(pad_identifier("FC1234567", 8), "FC1234567");
    }
}
