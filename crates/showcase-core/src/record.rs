//! The extension record, the only entity in the data file.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

/// Route prefix for detail pages
pub const DETAIL_ROUTE_PREFIX: &str = "/extensions";

/// Target used for outbound links a record leaves empty
pub const MISSING_LINK: &str = "#";

/// Lowercase kebab-case: `article-highlighter`, `terminal-history2`
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid"));

/// One extension's metadata entry in `data/extensions.json`.
///
/// Every field is optional on the wire, and `null` counts as missing.
/// Missing strings become empty, missing lists become empty, missing links
/// become `None`. Shape trust is implicit: views render whatever is there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_desc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub long_desc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub screenshots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl ExtensionRecord {
    /// The cover image, or `placeholder` when the record has no screenshots.
    pub fn cover_image<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.screenshots
            .first()
            .map(String::as_str)
            .unwrap_or(placeholder)
    }

    pub fn download_href(&self) -> &str {
        non_empty_link(self.download_url.as_deref())
    }

    pub fn github_href(&self) -> &str {
        non_empty_link(self.github_url.as_deref())
    }

    /// Path of this record's detail page, e.g. `/extensions/foo`.
    pub fn detail_path(&self) -> String {
        format!("{}/{}", DETAIL_ROUTE_PREFIX, self.slug)
    }

    /// Tags joined for display and for the JSON-LD category field.
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }

    /// DOM id of the card heading, used for `aria-labelledby`.
    pub fn title_id(&self) -> String {
        format!("ext-{}-title", self.slug)
    }
}

fn non_empty_link(link: Option<&str>) -> &str {
    match link {
        Some(l) if !l.trim().is_empty() => l,
        _ => MISSING_LINK,
    }
}

/// Check whether a slug is URL-safe lowercase kebab-case.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> ExtensionRecord {
        serde_json::from_str(
            r#"{
                "slug": "foo",
                "title": "Foo",
                "shortDesc": "Does foo things",
                "screenshots": ["/screenshots/foo.jpg", "/screenshots/foo-2.png"],
                "tags": ["chrome", "productivity"],
                "githubUrl": "https://github.com/someone/foo"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let rec = foo();
        assert_eq!(rec.slug, "foo");
        assert_eq!(rec.short_desc, "Does foo things");
        assert_eq!(rec.tags, vec!["chrome", "productivity"]);
        assert_eq!(rec.github_url.as_deref(), Some("https://github.com/someone/foo"));
    }

    #[test]
    fn test_missing_fields_default() {
        let rec: ExtensionRecord = serde_json::from_str(r#"{"slug": "bare"}"#).unwrap();
        assert_eq!(rec.title, "");
        assert_eq!(rec.long_desc, "");
        assert!(rec.tags.is_empty());
        assert!(rec.screenshots.is_empty());
        assert!(rec.download_url.is_none());
    }

    #[test]
    fn test_null_fields_default() {
        let rec: ExtensionRecord = serde_json::from_str(
            r#"{"slug": "b", "title": null, "shortDesc": null, "longDesc": null,
                "tags": null, "screenshots": null, "githubUrl": null}"#,
        )
        .unwrap();
        assert_eq!(rec.slug, "b");
        assert!(rec.title.is_empty());
        assert!(rec.tags.is_empty());
        assert!(rec.screenshots.is_empty());
        assert_eq!(rec.github_href(), MISSING_LINK);
        assert_eq!(rec.cover_image("/p.jpg"), "/p.jpg");
    }

    #[test]
    fn test_cover_image_uses_first_screenshot() {
        assert_eq!(foo().cover_image("/p.jpg"), "/screenshots/foo.jpg");
    }

    #[test]
    fn test_cover_image_falls_back_to_placeholder() {
        let rec = ExtensionRecord::default();
        assert_eq!(rec.cover_image("/p.jpg"), "/p.jpg");
    }

    #[test]
    fn test_links_default_to_hash() {
        let rec = foo();
        assert_eq!(rec.download_href(), "#");
        assert_eq!(rec.github_href(), "https://github.com/someone/foo");

        let blank = ExtensionRecord {
            download_url: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.download_href(), "#");
    }

    #[test]
    fn test_detail_path_and_title_id() {
        let rec = foo();
        assert_eq!(rec.detail_path(), "/extensions/foo");
        assert_eq!(rec.title_id(), "ext-foo-title");
        assert_eq!(rec.joined_tags(), "chrome, productivity");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("foo"));
        assert!(is_valid_slug("article-highlighter"));
        assert!(is_valid_slug("v2-tool"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Foo"));
        assert!(!is_valid_slug("-foo"));
        assert!(!is_valid_slug("foo--bar"));
        assert!(!is_valid_slug("foo bar"));
        assert!(!is_valid_slug("foo/bar"));
    }

    #[test]
    fn test_serialize_skips_missing_links() {
        let json = serde_json::to_string(&ExtensionRecord::default()).unwrap();
        assert!(!json.contains("githubUrl"));
        assert!(json.contains("\"shortDesc\""));
    }
}
