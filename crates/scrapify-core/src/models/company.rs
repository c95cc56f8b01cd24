//! Scraped company profile record.

use serde::{Deserialize, Serialize};

/// Sentinel stored for fields whose label was not found on the page.
pub const ABSENT: &str = "N/A";

/// Column titles of the results sheet, in output order.
pub const COLUMNS: [&str; 16] = [
    "Company Code",
    "Company",
    "Registered office address",
    "Company status",
    "Company type",
    "Incorporated on",
    "First accounts made up to",
    "Next accounts made up to",
    "Account Due By",
    "Last accounts made up to",
    "First statement date",
    "Next statement date",
    "Statement Due By",
    "Last statement dated",
    "Nature of business (SIC)",
    "URL",
];

/// Columns whose values are calendar dates rendered like "13 March 2024".
pub const DATE_COLUMNS: [&str; 9] = [
    "Incorporated on",
    "First accounts made up to",
    "Next accounts made up to",
    "Account Due By",
    "Last accounts made up to",
    "First statement date",
    "Next statement date",
    "Statement Due By",
    "Last statement dated",
];

/// One fully extracted company profile.
///
/// The identity pair (code and name) is always real page data; every other
/// field degrades to [`ABSENT`] when its label is missing. Values are kept
/// as the page renders them, so dates stay strings until the workbook
/// writer parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Registered company number with leading zeros preserved.
    pub company_code: String,

    /// Registered company name.
    pub company_name: String,

    pub registered_office_address: String,
    pub company_status: String,
    pub company_type: String,
    pub incorporated_on: String,
    pub first_accounts_made_up_to: String,
    pub next_accounts_made_up_to: String,
    pub account_due_by: String,
    pub last_accounts_made_up_to: String,
    pub first_statement_date: String,
    pub next_statement_date: String,
    pub statement_due_by: String,
    pub last_statement_dated: String,

    /// SIC entries joined with ", ".
    pub nature_of_business: String,

    /// Profile URL rebuilt from the extracted company code.
    pub url: String,
}

impl CompanyRecord {
    /// Field values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 16] {
        [
            &self.company_code,
            &self.company_name,
            &self.registered_office_address,
            &self.company_status,
            &self.company_type,
            &self.incorporated_on,
            &self.first_accounts_made_up_to,
            &self.next_accounts_made_up_to,
            &self.account_due_by,
            &self.last_accounts_made_up_to,
            &self.first_statement_date,
            &self.next_statement_date,
            &self.statement_due_by,
            &self.last_statement_dated,
            &self.nature_of_business,
            &self.url,
        ]
    }

    /// True when `column` carries a calendar date.
    pub fn is_date_column(column: &str) -> bool {
        DATE_COLUMNS.contains(&column)
    }
}
