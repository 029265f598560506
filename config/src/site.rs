//! Site configuration file (`beacon.toml`): metadata, section order, theme.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use beacon_types::{LayoutError, PageLayout, TokenRegistry};

use crate::theme::{ThemeConfig, ThemeError};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "BEACON_CONFIG";

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "beacon.toml";

const STOCK_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/beacon.toml"));

/// Section order used when a configuration has no `[page]` table.
pub const STOCK_SECTIONS: [&str; 8] = [
    "navbar",
    "hero",
    "features",
    "why-choose-us",
    "how-it-works",
    "changelog",
    "pricing",
    "footer",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid theme in {}", .path.display())]
    Theme { path: PathBuf, source: ThemeError },
    #[error("invalid page layout in {}", .path.display())]
    Layout { path: PathBuf, source: LayoutError },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Theme { path, .. }
            | ConfigError::Layout { path, .. } => path,
        }
    }
}

/// Where a configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The configuration compiled into the binary.
    Stock,
}

impl ConfigSource {
    /// Pick a configuration: an explicit path, then `$BEACON_CONFIG`, then
    /// `./beacon.toml`, then the stock configuration.
    #[must_use]
    pub fn discover(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return ConfigSource::File(path.to_path_buf());
        }
        if let Ok(value) = env::var(CONFIG_ENV)
            && !value.trim().is_empty()
        {
            return ConfigSource::File(PathBuf::from(value));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return ConfigSource::File(local);
        }
        ConfigSource::Stock
    }

    /// Path used in error messages.
    #[must_use]
    pub fn display_path(&self) -> PathBuf {
        match self {
            ConfigSource::File(path) => path.clone(),
            ConfigSource::Stock => PathBuf::from("<stock beacon.toml>"),
        }
    }

    pub fn load(&self) -> Result<SiteConfig, ConfigError> {
        match self {
            ConfigSource::File(path) => SiteConfig::load(path),
            ConfigSource::Stock => SiteConfig::stock(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub sections: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: STOCK_SECTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Raw `beacon.toml` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn stock() -> Result<Self, ConfigError> {
        Self::parse(STOCK_CONFIG, &ConfigSource::Stock.display_path())
    }

    /// Parse TOML text; `origin` is only used for error reporting.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| {
            tracing::warn!("Failed to parse config at {}: {}", origin.display(), err);
            ConfigError::Parse {
                path: origin.to_path_buf(),
                source: err,
            }
        })
    }

    /// Validate the layout and freeze the theme.
    pub fn resolve(self, origin: &Path) -> Result<Site, ConfigError> {
        let layout = PageLayout::parse(&self.page.sections).map_err(|source| ConfigError::Layout {
            path: origin.to_path_buf(),
            source,
        })?;
        let registry = self
            .theme
            .build_registry()
            .map_err(|source| ConfigError::Theme {
                path: origin.to_path_buf(),
                source,
            })?;
        Ok(Site {
            meta: self.site,
            layout,
            registry,
        })
    }
}

/// Fully validated site: metadata, a checked layout and the frozen registry.
///
/// Built once at startup and handed out by shared reference afterwards.
#[derive(Debug, Clone)]
pub struct Site {
    pub meta: SiteMeta,
    pub layout: PageLayout,
    pub registry: TokenRegistry,
}

impl Site {
    /// Discover, load and resolve in one step.
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        source.load()?.resolve(&source.display_path())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use beacon_types::TokenCategory;

    use super::*;

    #[test]
    fn stock_config_resolves() {
        let site = Site::load(&ConfigSource::Stock).expect("stock config is valid");
        let names: Vec<&str> = site.layout.names().map(|name| name.as_str()).collect();
        assert_eq!(names, STOCK_SECTIONS);
        assert_eq!(
            site.registry
                .resolve("dark-blue.Primary", TokenCategory::Color)
                .unwrap()
                .to_css(),
            "#111457"
        );
        assert_eq!(
            site.registry
                .resolve("orange.Primary", TokenCategory::Color)
                .unwrap(),
            site.registry
                .resolve("orange.600", TokenCategory::Color)
                .unwrap()
        );
    }

    #[test]
    fn stock_extend_layer_wins_over_base() {
        let site = Site::load(&ConfigSource::Stock).unwrap();
        let sans = site.registry.resolve("sans", TokenCategory::Font).unwrap();
        assert_eq!(sans.as_font().unwrap().preferred(), "Inter");
        assert_eq!(
            site.registry.resolve("18", TokenCategory::Spacing).unwrap().to_css(),
            "4.5rem"
        );
        assert_eq!(
            site.registry.resolve("4", TokenCategory::Spacing).unwrap().to_css(),
            "1rem"
        );
    }

    #[test]
    fn missing_page_table_uses_stock_order() {
        let config = SiteConfig::parse("[site]\ntitle = \"t\"\n", Path::new("inline")).unwrap();
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        let err = SiteConfig::parse("[site]\ntitle = \"t\"\n[pages]\n", Path::new("inline"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn layout_errors_carry_the_path() {
        let config = SiteConfig::parse(
            "[site]\ntitle = \"t\"\n[page]\nsections = [\"hero\", \"Hero\"]\n",
            Path::new("dup.toml"),
        )
        .unwrap();
        let err = config.resolve(Path::new("dup.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Layout { .. }));
        assert_eq!(err.path(), Path::new("dup.toml"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[site]\ntitle = \"Disk\"\n[theme.borderRadius]\nDEFAULT = \"4px\"\n"
        )
        .unwrap();
        let site = Site::load(&ConfigSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(site.meta.title, "Disk");
        assert_eq!(
            site.registry
                .resolve_default(TokenCategory::Radius)
                .unwrap()
                .to_css(),
            "4px"
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SiteConfig::load(Path::new("/nonexistent/beacon.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn explicit_path_wins_discovery() {
        let source = ConfigSource::discover(Some(Path::new("custom.toml")));
        assert_eq!(source, ConfigSource::File(PathBuf::from("custom.toml")));
    }
}
