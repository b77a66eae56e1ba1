//! Consistency checks over the data file, run by `showcase check`
//!
//! None of these are enforced at render time. The site degrades instead;
//! this module tells the owner what would degrade.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::Catalog;
use crate::fallback::FallbackChain;
use crate::record::is_valid_slug;

/// A single problem found in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Only the first record with this slug is reachable
    DuplicateSlug { slug: String },
    /// Slug is not lowercase kebab-case
    InvalidSlug { index: usize, slug: String },
    MissingTitle { slug: String },
    /// No file on disk for the screenshot or any fallback alternate
    UnresolvedScreenshot { slug: String, path: String },
    /// The screenshot only loads via a fallback alternate
    ScreenshotFallsBack {
        slug: String,
        path: String,
        resolved: String,
    },
}

impl Finding {
    /// Warnings are reported but do not fail the check.
    pub fn is_warning(&self) -> bool {
        matches!(self, Finding::ScreenshotFallsBack { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateSlug { slug } => {
                write!(f, "duplicate slug '{slug}': only the first record is reachable")
            }
            Finding::InvalidSlug { index, slug } => {
                write!(f, "record #{index}: slug '{slug}' is not lowercase kebab-case")
            }
            Finding::MissingTitle { slug } => write!(f, "'{slug}': missing title"),
            Finding::UnresolvedScreenshot { slug, path } => {
                write!(f, "'{slug}': screenshot {path} not found (placeholder will be shown)")
            }
            Finding::ScreenshotFallsBack {
                slug,
                path,
                resolved,
            } => write!(f, "'{slug}': screenshot {path} only loads as {resolved}"),
        }
    }
}

/// Run every check. `public_dir` is where asset URLs resolve on disk.
pub fn audit_catalog(catalog: &Catalog, public_dir: &Path, placeholder: &str) -> Vec<Finding> {
    let mut findings: Vec<Finding> = catalog
        .duplicate_slugs()
        .into_iter()
        .map(|slug| Finding::DuplicateSlug {
            slug: slug.to_string(),
        })
        .collect();

    for (index, rec) in catalog.records().iter().enumerate() {
        if !is_valid_slug(&rec.slug) {
            findings.push(Finding::InvalidSlug {
                index,
                slug: rec.slug.clone(),
            });
        }
        if rec.title.trim().is_empty() {
            findings.push(Finding::MissingTitle {
                slug: rec.slug.clone(),
            });
        }

        for shot in &rec.screenshots {
            if is_remote(shot) {
                debug!("Skipping remote screenshot {}", shot);
                continue;
            }
            // The placeholder counts as a failure here: landing on it means the
            // real image is missing.
            let resolved = FallbackChain::resolve(shot, placeholder, |candidate| {
                candidate != placeholder && asset_path(public_dir, candidate).is_file()
            });
            match resolved {
                Some(found) if found == *shot => {}
                Some(found) => findings.push(Finding::ScreenshotFallsBack {
                    slug: rec.slug.clone(),
                    path: shot.clone(),
                    resolved: found,
                }),
                None => findings.push(Finding::UnresolvedScreenshot {
                    slug: rec.slug.clone(),
                    path: shot.clone(),
                }),
            }
        }
    }

    findings
}

/// Map an asset URL such as `/screenshots/a.png?v=1` into `public_dir`.
pub fn asset_path(public_dir: &Path, url_path: &str) -> PathBuf {
    let path = url_path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('/');
    public_dir.join(path)
}

fn is_remote(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::DEFAULT_PLACEHOLDER;
    use std::fs;
    use tempfile::TempDir;

    fn public_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for f in files {
            let p = temp.path().join(f);
            fs::create_dir_all(p.parent().unwrap()).unwrap();
            fs::write(p, b"img").unwrap();
        }
        temp
    }

    fn catalog(json: &str) -> Catalog {
        Catalog::from_json_str(json).unwrap()
    }

    #[test]
    fn test_clean_catalog_has_no_findings() {
        let public = public_with(&["screenshots/foo.jpg"]);
        let cat = catalog(r#"[{"slug": "foo", "title": "Foo", "screenshots": ["/screenshots/foo.jpg"]}]"#);
        assert!(audit_catalog(&cat, public.path(), DEFAULT_PLACEHOLDER).is_empty());
    }

    #[test]
    fn test_reports_duplicates_and_bad_slugs() {
        let public = public_with(&[]);
        let cat = catalog(
            r#"[{"slug": "foo", "title": "A"}, {"slug": "foo", "title": "B"}, {"slug": "Bad Slug", "title": "C"}]"#,
        );
        let findings = audit_catalog(&cat, public.path(), DEFAULT_PLACEHOLDER);
        assert!(findings.contains(&Finding::DuplicateSlug {
            slug: "foo".to_string()
        }));
        assert!(findings.contains(&Finding::InvalidSlug {
            index: 2,
            slug: "Bad Slug".to_string()
        }));
    }

    #[test]
    fn test_reports_missing_title() {
        let public = public_with(&[]);
        let findings = audit_catalog(&catalog(r#"[{"slug": "foo"}]"#), public.path(), DEFAULT_PLACEHOLDER);
        assert_eq!(
            findings,
            vec![Finding::MissingTitle {
                slug: "foo".to_string()
            }]
        );
    }

    #[test]
    fn test_screenshot_resolved_via_alternate_is_warning() {
        let public = public_with(&["screenshots/foo.webp"]);
        let cat = catalog(r#"[{"slug": "foo", "title": "Foo", "screenshots": ["/screenshots/foo.jpg"]}]"#);
        let findings = audit_catalog(&cat, public.path(), DEFAULT_PLACEHOLDER);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0],
            Finding::ScreenshotFallsBack {
                slug: "foo".to_string(),
                path: "/screenshots/foo.jpg".to_string(),
                resolved: "/screenshots/foo.webp".to_string(),
            }
        );
        assert!(findings[0].is_warning());
    }

    #[test]
    fn test_missing_screenshot_is_error() {
        let public = public_with(&["screenshots/placeholder.jpg"]);
        let cat = catalog(r#"[{"slug": "foo", "title": "Foo", "screenshots": ["/screenshots/foo.png"]}]"#);
        let findings = audit_catalog(&cat, public.path(), DEFAULT_PLACEHOLDER);
        assert_eq!(findings.len(), 1);
        assert!(matches!(findings[0], Finding::UnresolvedScreenshot { .. }));
        assert!(!findings[0].is_warning());
    }

    #[test]
    fn test_remote_screenshots_skipped() {
        let public = public_with(&[]);
        let cat = catalog(
            r#"[{"slug": "foo", "title": "Foo", "screenshots": ["https://cdn.example.com/foo.png"]}]"#,
        );
        assert!(audit_catalog(&cat, public.path(), DEFAULT_PLACEHOLDER).is_empty());
    }

    #[test]
    fn test_asset_path_strips_query_and_slash() {
        let root = Path::new("/srv/public");
        assert_eq!(
            asset_path(root, "/screenshots/a.png?v=3"),
            PathBuf::from("/srv/public/screenshots/a.png")
        );
    }
}
