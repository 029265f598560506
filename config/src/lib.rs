//! Configuration loading for Beacon.
//!
//! - **`site`**: `beacon.toml` discovery, parsing and resolution into a [`Site`]
//! - **`theme`**: the five-category theme surface and its layering rules

pub mod site;
pub mod theme;

pub use site::{
    CONFIG_ENV, ConfigError, ConfigSource, DEFAULT_CONFIG_FILE, PageConfig, STOCK_SECTIONS, Site,
    SiteConfig, SiteMeta,
};
pub use theme::{ColorEntry, FontEntry, ThemeConfig, ThemeError, ThemeLayer};
