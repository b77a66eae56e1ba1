//! Client-side filtering for the listing's search box
//!
//! A record matches when every whitespace-separated term of the query
//! appears, case-insensitively, in its title, short description, or one of
//! its tags. A blank query matches everything.

use crate::record::ExtensionRecord;

/// A parsed search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(input: &str) -> Self {
        Self {
            terms: input.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, record: &ExtensionRecord) -> bool {
        self.terms.iter().all(|term| {
            contains_ci(&record.title, term)
                || contains_ci(&record.short_desc, term)
                || record.tags.iter().any(|tag| contains_ci(tag, term))
        })
    }
}

/// Records matching `input`, in collection order.
pub fn filter_records<'a>(records: &'a [ExtensionRecord], input: &str) -> Vec<&'a ExtensionRecord> {
    let query = SearchQuery::parse(input);
    records.iter().filter(|r| query.matches(r)).collect()
}

/// `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(slug: &str, title: &str, desc: &str, tags: &[&str]) -> ExtensionRecord {
        ExtensionRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            short_desc: desc.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ExtensionRecord> {
        vec![
            rec("highlighter", "Article Highlighter", "Mark up any page", &["chrome", "reading"]),
            rec("terminal-history", "Terminal History", "Search past commands", &["vscode"]),
            rec("tab-saver", "Tab Saver", "Park tabs for later", &["chrome", "productivity"]),
        ]
    }

    fn slugs(found: Vec<&ExtensionRecord>) -> Vec<&str> {
        found.into_iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_blank_query_matches_all_in_order() {
        let records = sample();
        assert_eq!(
            slugs(filter_records(&records, "   ")),
            vec!["highlighter", "terminal-history", "tab-saver"]
        );
        assert!(SearchQuery::parse("").is_blank());
    }

    #[test]
    fn test_matches_tag_case_insensitively() {
        let records = sample();
        assert_eq!(
            slugs(filter_records(&records, "CHROME")),
            vec!["highlighter", "tab-saver"]
        );
    }

    #[test]
    fn test_all_terms_must_match() {
        let records = sample();
        assert_eq!(slugs(filter_records(&records, "chrome tabs")), vec!["tab-saver"]);
        assert!(filter_records(&records, "chrome vscode").is_empty());
    }

    #[test]
    fn test_matches_description() {
        let records = sample();
        assert_eq!(
            slugs(filter_records(&records, "commands")),
            vec!["terminal-history"]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(filter_records(&sample(), "emacs").is_empty());
    }
}
