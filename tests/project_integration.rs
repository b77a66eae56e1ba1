//! Integration tests for loading a showcase project from disk

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use ext_showcase::commands::{self, Project};
use ext_showcase::core::{Catalog, SoftwareApplication};

/// Helper to write the data file at its conventional location
fn write_data(root: &Path, json: &str) {
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("extensions.json"), json).unwrap();
}

/// Helper to create a public asset
fn write_asset(root: &Path, rel: &str) {
    let path = root.join("public").join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"\x89PNG").unwrap();
}

const FOO_ONLY: &str = r#"[
  {
    "slug": "foo",
    "title": "Foo",
    "shortDesc": "Foo in one line",
    "longDesc": "Foo, explained at length.",
    "tags": ["chrome", "productivity"],
    "screenshots": ["/screenshots/foo.jpg"],
    "githubUrl": "https://github.com/someone/foo",
    "downloadUrl": "https://github.com/someone/foo/releases"
  }
]"#;

fn run_check(project: &Project) -> (bool, String) {
    let mut buf = Vec::new();
    let ok = commands::check(project, &mut buf).unwrap();
    (ok, String::from_utf8(buf).unwrap())
}

#[test]
fn test_single_record_scenario() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), FOO_ONLY);

    let project = Project::open(temp.path(), None);
    let catalog = project.catalog();
    assert_eq!(catalog.len(), 1);

    let foo = catalog.find_by_slug("foo").unwrap();
    assert_eq!(foo.title, "Foo");
    assert_eq!(foo.tags.len(), 2);
    assert_eq!(foo.screenshots.len(), 1);
    assert_eq!(foo.long_desc, "Foo, explained at length.");

    assert!(catalog.find_by_slug("bar").is_none());
}

#[test]
fn test_missing_data_file_is_empty_catalog() {
    let temp = TempDir::new().unwrap();
    let project = Project::open(temp.path(), None);
    assert_eq!(project.catalog(), Catalog::default());

    let (ok, out) = run_check(&project);
    assert!(!ok);
    assert!(out.contains("not found"));
    assert!(out.contains("empty state"));
}

#[test]
fn test_malformed_data_file_is_empty_catalog() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), "[{\"slug\": ");

    let project = Project::open(temp.path(), None);
    assert!(project.catalog().is_empty());

    let (ok, out) = run_check(&project);
    assert!(!ok);
    assert!(out.starts_with("error: JSON parsing error"));
}

#[test]
fn test_settings_redirect_data_path() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("content")).unwrap();
    fs::write(temp.path().join("content/exts.json"), FOO_ONLY).unwrap();
    fs::write(
        temp.path().join("showcase.toml"),
        "[paths]\ndata = \"content/exts.json\"\n",
    )
    .unwrap();

    let project = Project::open(temp.path(), None);
    assert_eq!(project.catalog().len(), 1);
}

#[test]
fn test_data_override_wins_over_settings() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), "[]");
    fs::write(temp.path().join("other.json"), FOO_ONLY).unwrap();

    let project = Project::open(temp.path(), Some(Path::new("other.json")));
    assert_eq!(project.catalog().len(), 1);
}

#[test]
fn test_check_clean_project() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), FOO_ONLY);
    write_asset(temp.path(), "screenshots/foo.jpg");

    let (ok, out) = run_check(&Project::open(temp.path(), None));
    assert!(ok, "{out}");
    assert_eq!(out, "1 extensions checked, 0 errors, 0 warnings\n");
}

#[test]
fn test_check_reports_fallback_as_warning() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), FOO_ONLY);
    write_asset(temp.path(), "screenshots/foo.png");

    let (ok, out) = run_check(&Project::open(temp.path(), None));
    assert!(ok);
    assert!(out.contains("warning: 'foo': screenshot /screenshots/foo.jpg only loads as /screenshots/foo.png"));
}

#[test]
fn test_check_reports_duplicate_slug() {
    let temp = TempDir::new().unwrap();
    write_data(
        temp.path(),
        r#"[{"slug": "foo", "title": "A"}, {"slug": "foo", "title": "B"}]"#,
    );

    let (ok, out) = run_check(&Project::open(temp.path(), None));
    assert!(!ok);
    assert!(out.contains("duplicate slug 'foo'"));
}

#[test]
fn test_json_ld_uses_configured_site() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), FOO_ONLY);
    fs::write(
        temp.path().join("showcase.toml"),
        "[site]\nbase_url = \"https://tools.example.org\"\nauthor = \"Aman Kumar\"\n",
    )
    .unwrap();

    let project = Project::open(temp.path(), None);
    let catalog = project.catalog();
    let node =
        SoftwareApplication::from_record(catalog.find_by_slug("foo").unwrap(), &project.settings.site)
            .unwrap();
    assert_eq!(node.url, "https://tools.example.org/extensions/foo");
    assert_eq!(node.author.name, "Aman Kumar");
    assert_eq!(node.application_category, "chrome, productivity");
}
