//! Extraction rules over the flattened page text.
//!
//! Each rule is a pure function from a line sequence to an optional value;
//! composing them into a full record is the parser's job.

pub mod anchored;
pub mod identity;
pub mod sic;

/// Label phrases as they appear on registry profile pages.
pub mod labels {
    pub const REGISTERED_OFFICE: &str = "Registered office address";
    pub const COMPANY_STATUS: &str = "Company status";
    pub const COMPANY_TYPE: &str = "Company type";
    pub const INCORPORATED_ON: &str = "Incorporated on";
    pub const FIRST_ACCOUNTS: &str = "First accounts made up to";
    pub const NEXT_ACCOUNTS: &str = "Next accounts made up to";
    pub const LAST_ACCOUNTS: &str = "Last accounts made up to";
    pub const FIRST_STATEMENT: &str = "First statement date";
    pub const NEXT_STATEMENT: &str = "Next statement date";
    pub const LAST_STATEMENT: &str = "Last statement dated";
    pub const DUE_BY: &str = "due by";
    pub const SIC: &str = "Nature of business (SIC)";
    pub const PREVIOUS_NAMES: &str = "Previous company names";
    pub const FEEDBACK_FOOTER: &str = "Tell us what you think of this service";
}
