//! # showcase-core - Core Domain Types
//!
//! Foundation crate for the extension showcase. Holds everything that is
//! logic rather than markup, so it can be tested without a browser.
//!
//! ## Public API
//!
//! ### Data (`record`, `catalog`)
//! - [`ExtensionRecord`] - One extension's metadata entry
//! - [`Catalog`] - Ordered, read-only collection of records
//! - [`load_catalog()`] - Degrading loader: missing or malformed file yields an empty catalog
//! - [`try_load_catalog()`] - Strict loader that reports why loading failed
//!
//! ### View State (`fallback`, `modal`, `player`, `theme`, `search`)
//! - [`FallbackChain`] - Bounded walk over alternate screenshot paths
//! - [`ModalState`], [`FocusTrap`] - Modal open/close bookkeeping and focus trapping
//! - [`PlayerState`] - Tutorial video player state machine
//! - [`Theme`] - Light/dark preference
//! - [`SearchQuery`], [`filter_records()`] - Listing search
//!
//! ### Metadata (`structured_data`)
//! - [`SoftwareApplication`] - schema.org JSON-LD for detail pages
//!
//! ### Configuration (`settings`)
//! - [`Settings`] - `showcase.toml` site and path settings
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]

pub mod audit;
pub mod catalog;
pub mod error;
pub mod fallback;
pub mod modal;
pub mod player;
pub mod record;
pub mod search;
pub mod settings;
pub mod structured_data;
pub mod theme;

/// Prelude for common imports used across the showcase crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use audit::{audit_catalog, Finding};
pub use catalog::{load_catalog, try_load_catalog, Catalog, DEFAULT_DATA_PATH};
pub use error::{Error, Result};
pub use fallback::{candidate_paths, FallbackChain, DEFAULT_PLACEHOLDER, FALLBACK_EXTENSIONS};
pub use modal::{FocusTrap, ModalAction, ModalKey, ModalState};
pub use player::{PlayerCommand, PlayerEvent, PlayerState};
pub use record::{is_valid_slug, ExtensionRecord};
pub use search::{filter_records, SearchQuery};
pub use settings::{load_settings, PathSettings, Settings, SiteSettings, SETTINGS_FILENAME};
pub use structured_data::{canonical_url, SoftwareApplication};
pub use theme::{Theme, THEME_STORAGE_KEY};
