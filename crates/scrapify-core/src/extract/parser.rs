//! Profile parser assembling a company record from page text.

use tracing::debug;

use crate::models::company::{ABSENT, CompanyRecord};
use crate::models::config::DEFAULT_REGISTRY_BASE;
use crate::page::PageText;

use super::Result;
use super::rules::{anchored, identity, labels, sic};

/// Parses one flattened profile page into a [`CompanyRecord`].
pub struct ProfileParser {
    registry_base: String,
}

impl ProfileParser {
    /// Create a parser that rebuilds record URLs against the public registry.
    pub fn new() -> Self {
        Self {
            registry_base: DEFAULT_REGISTRY_BASE.to_string(),
        }
    }

    /// Override the URL base records are rebuilt against.
    pub fn with_registry_base(mut self, base: impl Into<String>) -> Self {
        self.registry_base = base.into();
        self
    }

    /// Extract every field from the page.
    ///
    /// The identity pair is required. Every other field degrades to "N/A"
    /// when its label is missing, so a sparse page still yields a record.
    pub fn parse(&self, page: &PageText) -> Result<CompanyRecord> {
        let identity = identity::extract_identity(page)?;
        let url = format!(
            "{}/{}",
            self.registry_base.trim_end_matches('/'),
            identity.code
        );

        let field = |label: &str| {
            page.value_after(label)
                .map(str::to_string)
                .unwrap_or_else(|| ABSENT.to_string())
        };
        let due_by = |next: &str, first: &str| {
            anchored::due_by_value(page, next, first)
                .map(str::to_string)
                .unwrap_or_else(|| ABSENT.to_string())
        };

        let record = CompanyRecord {
            company_code: identity.code,
            company_name: identity.name,
            registered_office_address: field(labels::REGISTERED_OFFICE),
            company_status: field(labels::COMPANY_STATUS),
            company_type: field(labels::COMPANY_TYPE),
            incorporated_on: field(labels::INCORPORATED_ON),
            first_accounts_made_up_to: field(labels::FIRST_ACCOUNTS),
            next_accounts_made_up_to: field(labels::NEXT_ACCOUNTS),
            account_due_by: due_by(labels::NEXT_ACCOUNTS, labels::FIRST_ACCOUNTS),
            last_accounts_made_up_to: field(labels::LAST_ACCOUNTS),
            first_statement_date: field(labels::FIRST_STATEMENT),
            next_statement_date: field(labels::NEXT_STATEMENT),
            statement_due_by: due_by(labels::NEXT_STATEMENT, labels::FIRST_STATEMENT),
            last_statement_dated: field(labels::LAST_STATEMENT),
            nature_of_business: sic::sic_entries(page).unwrap_or_else(|| ABSENT.to_string()),
            url,
        };

        debug!(
            "parsed company {} ({})",
            record.company_name, record.company_code
        );

        Ok(record)
    }
}

impl Default for ProfileParser {
    fn default() -> Self {
        Self::new()
    }
}
