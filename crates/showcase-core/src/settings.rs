//! Site settings parser for `showcase.toml`
//!
//! Every field has a default, so a missing or partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::DEFAULT_DATA_PATH;
use crate::error::{Error, Result};
use crate::fallback::DEFAULT_PLACEHOLDER;

/// Conventional settings file name at the project root
pub const SETTINGS_FILENAME: &str = "showcase.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site: SiteSettings,
    pub paths: PathSettings,
}

/// Identity of the site, used in the header and the JSON-LD block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub name: String,
    pub tagline: String,
    /// Origin used to build canonical detail-page URLs
    pub base_url: String,
    pub author: String,
    pub software_version: String,
    pub contact_email: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "Aman's Toolbox".to_string(),
            tagline: "Tiny tools for daily flow".to_string(),
            base_url: "https://your-site.com".to_string(),
            author: "Your Name".to_string(),
            software_version: "1.0.0".to_string(),
            contact_email: "resoamankumar@gmail.com".to_string(),
        }
    }
}

/// Locations relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub data: PathBuf,
    /// Directory that asset URLs such as `/screenshots/x.png` resolve into
    pub public: PathBuf,
    /// URL of the placeholder image that ends every fallback chain
    pub placeholder: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            public: PathBuf::from("public"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Settings {
    /// Strict parse of settings TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Degrading parse of an optional embedded source; `None` means no file.
    pub fn from_source(source: Option<&str>, origin: &str) -> Self {
        let Some(content) = source else {
            debug!("No settings at {}, using defaults", origin);
            return Self::default();
        };
        match Self::from_toml_str(content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse {}: {}", origin, e);
                Self::default()
            }
        }
    }

    /// Data file path resolved against `root`.
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.data)
    }

    /// Public asset directory resolved against `root`.
    pub fn public_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.public)
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.site.base_url)?;
        if self.paths.placeholder.trim().is_empty() {
            return Err(Error::config("paths.placeholder must not be empty"));
        }
        Ok(())
    }
}

/// Load settings from `<root>/showcase.toml`, falling back to defaults.
pub fn load_settings(project_root: &Path) -> Settings {
    let config_path = project_root.join(SETTINGS_FILENAME);

    if !config_path.exists() {
        debug!("No settings file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match Settings::from_toml_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.site.software_version, "1.0.0");
        assert_eq!(settings.paths.data, PathBuf::from("data/extensions.json"));
        assert_eq!(settings.paths.placeholder, "/screenshots/placeholder.jpg");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
[site]
author = "Aman Kumar"
"#,
        )
        .unwrap();
        assert_eq!(settings.site.author, "Aman Kumar");
        assert_eq!(settings.site.base_url, "https://your-site.com");
        assert_eq!(settings.paths, PathSettings::default());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = Settings::from_toml_str(
            r#"
[site]
base_url = "not a url"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let err = Settings::from_toml_str("[paths]\nplaceholder = \"\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_source_degrades() {
        assert_eq!(Settings::from_source(None, "showcase.toml"), Settings::default());
        assert_eq!(
            Settings::from_source(Some("[site"), "showcase.toml"),
            Settings::default()
        );
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_reads_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILENAME),
            "[paths]\ndata = \"content/exts.json\"\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(
            settings.data_path(temp.path()),
            temp.path().join("content/exts.json")
        );
        assert_eq!(settings.public_dir(temp.path()), temp.path().join("public"));
    }

    #[test]
    fn test_load_settings_malformed_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILENAME), "this = = broken").unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }
}
