//! Multi-line "Nature of business (SIC)" extraction.

use crate::page::PageText;

use super::labels;

/// Join the SIC entry lines between the label and the nearest terminator.
///
/// Entries run strictly between "Nature of business (SIC)" and whichever of
/// "Previous company names" or the feedback footer comes first. `None` when
/// the label or both terminators are absent; an empty range joins to the
/// empty string.
pub fn sic_entries(page: &PageText) -> Option<String> {
    let start = page.find(labels::SIC)?;
    let end = [labels::PREVIOUS_NAMES, labels::FEEDBACK_FOOTER]
        .iter()
        .filter_map(|keyword| page.find_from(keyword, start))
        .min()?;

    let entries: Vec<&str> = (start + 1..end).filter_map(|index| page.line(index)).collect();

    Some(entries.join(", "))
}
