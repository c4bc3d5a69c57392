//! # baton-settings
//!
//! Settings types and loading for the baton handoff pipeline.
//!
//! Settings live at `~/.baton/settings.json` (overridable via
//! `BATON_SETTINGS_PATH`), use camelCase field names, and are deep-merged
//! over compiled defaults. A handful of `BATON_*` environment variables
//! override individual values with strict parsing.

#![deny(unsafe_code)]

mod errors;
mod loader;
mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{
    BatonSettings, ExtractionSettings, RetrySettings, StoreSettings,
};
