//! Implementations of the `showcase` subcommands
//!
//! Each command writes to a caller-supplied writer so tests can capture it.
//! The `bool` results mean "succeeded" and map to the exit status.

use std::io::Write;
use std::path::{Path, PathBuf};

use showcase_core::prelude::*;
use showcase_core::{
    audit_catalog, load_catalog, load_settings, try_load_catalog, Catalog, Settings,
    SoftwareApplication,
};

/// A project root with its settings resolved
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub settings: Settings,
    pub data_path: PathBuf,
}

impl Project {
    /// Resolve settings under `root`; `data_override` replaces the
    /// configured data path (relative paths resolve against `root`).
    pub fn open(root: &Path, data_override: Option<&Path>) -> Self {
        let settings = load_settings(root);
        let data_path = match data_override {
            Some(path) => root.join(path),
            None => settings.data_path(root),
        };
        debug!("Project root {:?}, data file {:?}", root, data_path);
        Self {
            root: root.to_path_buf(),
            settings,
            data_path,
        }
    }

    /// Degrading load, same contract as the site.
    pub fn catalog(&self) -> Catalog {
        load_catalog(&self.data_path)
    }
}

/// One line per record: slug, title, tags.
pub fn list(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    if catalog.is_empty() {
        writeln!(out, "No extensions found.")?;
        return Ok(());
    }

    let width = catalog
        .records()
        .iter()
        .map(|r| r.slug.len())
        .max()
        .unwrap_or(0);
    for rec in catalog.records() {
        writeln!(
            out,
            "{:<width$}  {}  [{}]",
            rec.slug,
            rec.title,
            rec.joined_tags(),
            width = width
        )?;
    }
    Ok(())
}

/// Full details of one record. Returns `false` when the slug is unknown.
pub fn show(catalog: &Catalog, slug: &str, out: &mut impl Write) -> Result<bool> {
    let Some(rec) = catalog.find_by_slug(slug) else {
        writeln!(out, "Extension not found: {slug}")?;
        return Ok(false);
    };

    writeln!(out, "{} ({})", rec.title, rec.slug)?;
    if !rec.short_desc.is_empty() {
        writeln!(out, "  {}", rec.short_desc)?;
    }
    if !rec.long_desc.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {}", rec.long_desc)?;
    }
    writeln!(out)?;
    writeln!(out, "  Tags:     {}", rec.joined_tags())?;
    writeln!(out, "  Download: {}", rec.download_href())?;
    writeln!(out, "  GitHub:   {}", rec.github_href())?;
    writeln!(out, "  Page:     {}", rec.detail_path())?;
    if !rec.screenshots.is_empty() {
        writeln!(out, "  Screenshots:")?;
        for shot in &rec.screenshots {
            writeln!(out, "    {shot}")?;
        }
    }
    Ok(true)
}

/// Pretty-printed JSON-LD for one record.
pub fn json_ld(
    catalog: &Catalog,
    slug: &str,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<bool> {
    let Some(rec) = catalog.find_by_slug(slug) else {
        writeln!(out, "Extension not found: {slug}")?;
        return Ok(false);
    };
    let node = SoftwareApplication::from_record(rec, &settings.site)?;
    writeln!(out, "{}", node.to_json_pretty())?;
    Ok(true)
}

/// Strict load plus every audit. Returns `false` when anything other than
/// a warning was found.
pub fn check(project: &Project, out: &mut impl Write) -> Result<bool> {
    let catalog = match try_load_catalog(&project.data_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            writeln!(out, "error: {e}")?;
            if e.is_missing_data() {
                writeln!(out, "  the site will render its empty state")?;
            } else {
                writeln!(out, "  the site will render as if the file were empty")?;
            }
            return Ok(false);
        }
    };

    let paths = &project.settings.paths;
    let findings = audit_catalog(
        &catalog,
        &project.settings.public_dir(&project.root),
        &paths.placeholder,
    );

    let mut errors = 0;
    for finding in &findings {
        if finding.is_warning() {
            writeln!(out, "warning: {finding}")?;
        } else {
            errors += 1;
            writeln!(out, "error: {finding}")?;
        }
    }

    info!(
        "Checked {} extensions: {} errors, {} warnings",
        catalog.len(),
        errors,
        findings.len() - errors
    );
    writeln!(
        out,
        "{} extensions checked, {} errors, {} warnings",
        catalog.len(),
        errors,
        findings.len() - errors
    )?;
    Ok(errors == 0)
}
