//! Flattened page text.
//!
//! Profile pages are reduced to an ordered sequence of trimmed, non-empty
//! text lines in document order. Every extraction rule operates on this
//! line sequence rather than on markup, so layout changes that keep the
//! label/value adjacency intact do not break extraction.

use scraper::{Html, Node};

/// Visible text of one page, one trimmed line per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    lines: Vec<String>,
}

impl PageText {
    /// Build from pre-split lines. Lines are stored as given.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Flatten an HTML document into visible text lines.
    ///
    /// Walks the node tree in document order, skipping script and style
    /// subtrees. Each text node is split on embedded newlines and every
    /// piece is trimmed; empty pieces are dropped.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut lines = Vec::new();
        let mut stack = vec![document.tree.root()];

        while let Some(node) = stack.pop() {
            match node.value() {
                Node::Element(element) => {
                    if matches!(element.name(), "script" | "style") {
                        continue;
                    }
                }
                Node::Text(text) => {
                    for piece in text.text.split('\n') {
                        let piece = piece.trim();
                        if !piece.is_empty() {
                            lines.push(piece.to_string());
                        }
                    }
                    continue;
                }
                _ => {}
            }

            let children: Vec<_> = node.children().collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }

        Self { lines }
    }

    /// All lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the page has no visible text.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if any.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Index of the first line containing `keyword`, case-insensitively.
    pub fn find(&self, keyword: &str) -> Option<usize> {
        self.find_from(keyword, 0)
    }

    /// Index of the first line at or after `start` containing `keyword`,
    /// case-insensitively. A `start` past the end matches nothing.
    pub fn find_from(&self, keyword: &str, start: usize) -> Option<usize> {
        let needle = keyword.to_lowercase();
        self.lines
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, line)| line.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
    }

    /// Line immediately after the first occurrence of `keyword`.
    ///
    /// `None` when the keyword is absent or sits on the final line.
    pub fn value_after(&self, keyword: &str) -> Option<&str> {
        let index = self.find(keyword)?;
        self.line(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        let page = PageText::from_lines(["Company Status", "Active"]);
        assert_eq!(page.find("company status"), Some(0));
        assert_eq!(page.find("COMPANY STATUS"), Some(0));
    }

    #[test]
    fn test_find_matches_substrings() {
        let page = PageText::from_lines(["Next accounts made up to 30 June 2024"]);
        assert_eq!(page.find("Next accounts made up to"), Some(0));
    }

    #[test]
    fn test_find_from_skips_earlier_matches() {
        let page = PageText::from_lines(["due by", "early", "anchor", "due by", "late"]);
        assert_eq!(page.find("due by"), Some(0));
        assert_eq!(page.find_from("due by", 1), Some(3));
        assert_eq!(page.find_from("due by", 4), None);
    }

    #[test]
    fn test_find_missing_keyword() {
        let page = PageText::from_lines(["alpha", "beta"]);
        assert_eq!(page.find("gamma"), None);
    }

    #[test]
    fn test_find_from_past_the_end() {
        let page = PageText::from_lines(["alpha"]);
        assert_eq!(page.find_from("alpha", 5), None);
    }

    #[test]
    fn test_value_after_returns_next_line() {
        let page = PageText::from_lines(["Incorporated on", "13 March 2012"]);
        assert_eq!(page.value_after("Incorporated on"), Some("13 March 2012"));
    }

    #[test]
    fn test_value_after_label_on_final_line() {
        let page = PageText::from_lines(["Company status"]);
        assert_eq!(page.value_after("Company status"), None);
    }

    #[test]
    fn test_from_html_flattens_visible_text() {
        let html = r#"
            <html>
              <head>
                <style>.hidden { display: none; }</style>
                <script>var status = "Company status from script";</script>
              </head>
              <body>
                <h1>Company information for Acme Widgets Ltd (01234567)</h1>
                <dl>
                  <dt>Company status</dt>
                  <dd>Active</dd>
                </dl>
              </body>
            </html>
        "#;

        let page = PageText::from_html(html);
        assert_eq!(
            page.lines(),
            [
                "Company information for Acme Widgets Ltd (01234567)",
                "Company status",
                "Active",
            ]
        );
    }

    #[test]
    fn test_from_html_keeps_inline_markup_order() {
        let page = PageText::from_html("<p>Accounts <strong>overdue</strong> since 2023</p>");
        assert_eq!(page.lines(), ["Accounts", "overdue", "since 2023"]);
    }

    #[test]
    fn test_from_html_splits_embedded_newlines() {
        let page = PageText::from_html("<pre>62012\n  62020  \n\n</pre>");
        assert_eq!(page.lines(), ["62012", "62020"]);
    }

    #[test]
    fn test_from_html_empty_document() {
        let page = PageText::from_html("");
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
    }
}
