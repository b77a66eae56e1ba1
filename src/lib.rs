//! Extension Showcase Library
//!
//! Command-line companion for the extension showcase site. The site itself
//! lives in `website/`; both share `showcase-core`.

pub mod commands;
pub mod logging;

pub use showcase_core as core;
