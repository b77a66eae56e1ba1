//! Loading the extension collection from `data/extensions.json`
//!
//! The collection is read-only and parsed fresh for every render. Loading
//! never fails past this module: a missing or malformed file degrades to an
//! empty [`Catalog`] and a log line. [`try_load_catalog`] is the strict
//! variant for callers that want to report the cause.

use std::path::Path;

use crate::error::{Error, Result};
use crate::record::ExtensionRecord;
use tracing::{debug, error, warn};

/// Conventional location of the data file, relative to the project root
pub const DEFAULT_DATA_PATH: &str = "data/extensions.json";

/// An ordered, read-only collection of extension records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ExtensionRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ExtensionRecord>) -> Self {
        Self { records }
    }

    /// Strict parse of a JSON document. The top level must be an array.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if !value.is_array() {
            return Err(Error::malformed_data(format!(
                "expected a JSON array of extensions, found {}",
                json_kind(&value)
            )));
        }
        let records: Vec<ExtensionRecord> = serde_json::from_value(value)?;
        Ok(Self { records })
    }

    /// Degrading parse of an optional source.
    ///
    /// `None` means the backing file did not exist; `origin` names it in
    /// log lines.
    pub fn from_source(source: Option<&str>, origin: &str) -> Self {
        let Some(content) = source else {
            warn!("{} not found, returning empty extensions list", origin);
            return Self::default();
        };

        match Self::from_json_str(content) {
            Ok(catalog) => {
                debug!("Loaded {} extensions from {}", catalog.len(), origin);
                catalog
            }
            Err(e) => {
                error!("Error reading {}: {}", origin, e);
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ExtensionRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose slug matches. Later duplicates are unreachable.
    pub fn find_by_slug(&self, slug: &str) -> Option<&ExtensionRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Slugs that appear more than once, each listed once in order of
    /// first repetition.
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes: Vec<&str> = Vec::new();
        for rec in &self.records {
            let slug = rec.slug.as_str();
            if !seen.insert(slug) && !dupes.contains(&slug) {
                dupes.push(slug);
            }
        }
        dupes
    }
}

/// Load the catalog, degrading to empty on any failure.
pub fn load_catalog(path: &Path) -> Catalog {
    match try_load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) if e.is_missing_data() => {
            warn!(
                "{} not found, returning empty extensions list",
                path.display()
            );
            Catalog::default()
        }
        Err(e) => {
            error!("Error reading {}: {}", path.display(), e);
            Catalog::default()
        }
    }
}

/// Load the catalog, reporting why it could not be read.
pub fn try_load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::data_file_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    let catalog = Catalog::from_json_str(&content)?;
    debug!("Loaded {} extensions from {:?}", catalog.len(), path);
    Ok(catalog)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
