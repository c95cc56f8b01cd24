//! "Due by" lookups anchored at the accounts and statement labels.

use crate::page::PageText;

use super::labels;

/// Index to start a "due by" scan from: the "Next ..." label when present,
/// otherwise the "First ..." label.
pub fn preferred_anchor(page: &PageText, next_label: &str, first_label: &str) -> Option<usize> {
    page.find(next_label).or_else(|| page.find(first_label))
}

/// Value line of the first "due by" at or after the preferred anchor.
///
/// The scan restarts at the anchor index itself, so only a "due by" at or
/// below the chosen section is ever seen. When the preferred anchor exists
/// but no "due by" follows it, the lookup is absent; it does not retry from
/// the other anchor.
pub fn due_by_value<'a>(page: &'a PageText, next_label: &str, first_label: &str) -> Option<&'a str> {
    let anchor = preferred_anchor(page, next_label, first_label)?;
    let due_index = page.find_from(labels::DUE_BY, anchor)?;
    page.line(due_index + 1)
}
