//! Company identity extraction from the profile heading.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExtractError;
use crate::page::PageText;

use super::labels;

lazy_static! {
    /// Parenthesized company number, e.g. "(01234567)".
    static ref COMPANY_CODE: Regex = Regex::new(r"\((\d+)\)").unwrap();
}

/// The code/name pair identifying one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyIdentity {
    pub code: String,
    pub name: String,
}

/// Derive the company code and name from the heading line immediately
/// preceding the "Registered office address" label.
///
/// The heading renders as "Company information for <name> (<number>)".
/// This is the one extraction that fails the whole record: without an
/// identity there is nothing to key the record on.
pub fn extract_identity(page: &PageText) -> Result<CompanyIdentity, ExtractError> {
    let label_index = page
        .find(labels::REGISTERED_OFFICE)
        .ok_or_else(|| ExtractError::MissingAnchor(labels::REGISTERED_OFFICE.to_string()))?;
    let heading = label_index
        .checked_sub(1)
        .and_then(|index| page.line(index))
        .ok_or_else(|| ExtractError::MissingAnchor(labels::REGISTERED_OFFICE.to_string()))?;

    let code = COMPANY_CODE
        .captures(heading)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ExtractError::MissingCode(heading.to_string()))?;

    let name = heading
        .split_once("for ")
        .and_then(|(_, rest)| rest.split_once(" ("))
        .map(|(name, _)| name.to_string())
        .ok_or_else(|| ExtractError::MissingName(heading.to_string()))?;

    Ok(CompanyIdentity { code, name })
}
