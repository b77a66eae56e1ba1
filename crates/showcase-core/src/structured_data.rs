//! schema.org JSON-LD for extension detail pages

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;
use crate::record::{ExtensionRecord, DETAIL_ROUTE_PREFIX};
use crate::settings::SiteSettings;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A `SoftwareApplication` node describing one extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareApplication {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub application_category: String,
    pub description: String,
    pub url: String,
    pub software_version: String,
    pub author: Person,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

impl SoftwareApplication {
    /// Build the node, failing if the configured base URL is unusable.
    pub fn from_record(record: &ExtensionRecord, site: &SiteSettings) -> Result<Self> {
        let url = canonical_url(&site.base_url, &record.slug)?;
        Ok(Self::with_url(record, site, url))
    }

    /// Like [`Self::from_record`], but never fails: a bad base URL is
    /// logged and joined textually instead.
    pub fn from_record_lossy(record: &ExtensionRecord, site: &SiteSettings) -> Self {
        let url = canonical_url(&site.base_url, &record.slug).unwrap_or_else(|e| {
            tracing::warn!("Invalid base_url {:?}: {}", site.base_url, e);
            format!(
                "{}{}/{}",
                site.base_url.trim_end_matches('/'),
                DETAIL_ROUTE_PREFIX,
                record.slug
            )
        });
        Self::with_url(record, site, url)
    }

    fn with_url(record: &ExtensionRecord, site: &SiteSettings, url: String) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            kind: "SoftwareApplication".to_string(),
            name: record.title.clone(),
            application_category: record.joined_tags(),
            description: record.short_desc.clone(),
            url,
            software_version: site.software_version.clone(),
            author: Person {
                kind: "Person".to_string(),
                name: site.author.clone(),
            },
        }
    }

    /// Compact JSON safe to place inside a `<script>` element.
    ///
    /// `<` is escaped so record text cannot close the element early.
    pub fn to_script_json(&self) -> String {
        // Serializing a struct of strings cannot fail
        serde_json::to_string(self)
            .unwrap_or_default()
            .replace('<', "\\u003c")
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Canonical URL of a detail page: `<base_url>/extensions/<slug>`.
///
/// The base may carry a path prefix; the slug is percent-encoded as needed.
pub fn canonical_url(base_url: &str, slug: &str) -> Result<String> {
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = Url::parse(&base)?;
    let relative = format!("{}/{}", DETAIL_ROUTE_PREFIX.trim_start_matches('/'), slug);
    Ok(base.join(&relative)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> ExtensionRecord {
        ExtensionRecord {
            slug: "foo".to_string(),
            title: "Foo".to_string(),
            short_desc: "Highlights articles".to_string(),
            tags: vec!["chrome".to_string(), "productivity".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_json_ld_shape() {
        let node = SoftwareApplication::from_record(&foo(), &SiteSettings::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&node.to_script_json()).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["name"], "Foo");
        assert_eq!(value["applicationCategory"], "chrome, productivity");
        assert_eq!(value["description"], "Highlights articles");
        assert_eq!(value["url"], "https://your-site.com/extensions/foo");
        assert_eq!(value["softwareVersion"], "1.0.0");
        assert_eq!(value["author"]["@type"], "Person");
        assert_eq!(value["author"]["name"], "Your Name");
    }

    #[test]
    fn test_canonical_url_with_path_prefix() {
        assert_eq!(
            canonical_url("https://example.com/portfolio", "foo").unwrap(),
            "https://example.com/portfolio/extensions/foo"
        );
        assert_eq!(
            canonical_url("https://example.com/", "foo").unwrap(),
            "https://example.com/extensions/foo"
        );
    }

    #[test]
    fn test_canonical_url_encodes_slug() {
        assert_eq!(
            canonical_url("https://example.com", "a b").unwrap(),
            "https://example.com/extensions/a%20b"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let site = SiteSettings {
            base_url: "nope".to_string(),
            ..Default::default()
        };
        assert!(SoftwareApplication::from_record(&foo(), &site).is_err());

        let node = SoftwareApplication::from_record_lossy(&foo(), &site);
        assert_eq!(node.url, "nope/extensions/foo");
    }

    #[test]
    fn test_script_json_escapes_angle_brackets() {
        let rec = ExtensionRecord {
            short_desc: "</script><script>alert(1)</script>".to_string(),
            ..foo()
        };
        let json = SoftwareApplication::from_record_lossy(&rec, &SiteSettings::default())
            .to_script_json();
        assert!(!json.contains('<'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["description"], "</script><script>alert(1)</script>");
    }
}
