//! Styled output workbook writing.

use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, Workbook, XlsxError};
use tracing::debug;

use crate::batch::RunReport;
use crate::error::SheetError;
use crate::models::company::{COLUMNS, CompanyRecord};

/// Format of date values as registry pages render them.
pub const PAGE_DATE_FORMAT: &str = "%d %B %Y";

const HEADER_FILL: u32 = 0x4D9BE9;
const DATE_FILL: u32 = 0xFFFFCC;

/// Write the run report as a styled workbook.
///
/// The "Scraped" sheet is always present: highlighted header row, one row
/// per record, auto-sized columns. Date columns are written as real dates
/// (displayed dd-mm-yyyy) whenever the page value parses as "13 March 2024";
/// anything else, "N/A" included, stays a literal string. "Invalid Links"
/// and "Erroneous Links" sheets are added only when non-empty.
pub fn write_report(path: &Path, report: &RunReport) -> Result<(), SheetError> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_font_color(Color::White);
    let date_format = Format::new()
        .set_num_format("dd-mm-yyyy")
        .set_font_size(10)
        .set_background_color(Color::RGB(DATE_FILL));

    let sheet = workbook.add_worksheet();
    sheet.set_name("Scraped").map_err(to_write_error)?;

    for (column, title) in COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, column as u16, *title, &header_format)
            .map_err(to_write_error)?;
    }

    for (row, record) in report.records.iter().enumerate() {
        let row = row as u32 + 1;
        for (column, (title, value)) in COLUMNS.iter().zip(record.values()).enumerate() {
            let column = column as u16;
            if CompanyRecord::is_date_column(title) {
                match NaiveDate::parse_from_str(value, PAGE_DATE_FORMAT) {
                    Ok(date) => sheet
                        .write_datetime_with_format(row, column, &date, &date_format)
                        .map_err(to_write_error)?,
                    Err(_) => sheet.write_string(row, column, value).map_err(to_write_error)?,
                };
            } else {
                sheet.write_string(row, column, value).map_err(to_write_error)?;
            }
        }
    }

    sheet.autofit();

    if !report.invalid_links.is_empty() {
        write_link_sheet(&mut workbook, "Invalid Links", &report.invalid_links)?;
    }
    if !report.erroneous_links.is_empty() {
        write_link_sheet(&mut workbook, "Erroneous Links", &report.erroneous_links)?;
    }

    workbook.save(path).map_err(to_write_error)?;

    debug!(
        "wrote {} records ({} invalid, {} erroneous) to {}",
        report.records.len(),
        report.invalid_links.len(),
        report.erroneous_links.len(),
        path.display()
    );

    Ok(())
}

fn write_link_sheet(
    workbook: &mut Workbook,
    title: &str,
    links: &[String],
) -> Result<(), SheetError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(title).map_err(to_write_error)?;
    sheet.write_string(0, 0, title).map_err(to_write_error)?;
    for (row, link) in links.iter().enumerate() {
        sheet
            .write_string(row as u32 + 1, 0, link.as_str())
            .map_err(to_write_error)?;
    }

    Ok(())
}

fn to_write_error(e: XlsxError) -> SheetError {
    SheetError::Write(e.to_string())
}
