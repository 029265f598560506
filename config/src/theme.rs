//! Theme file format and its resolution into a [`TokenRegistry`].
//!
//! A theme has a base layer and an optional `extend` layer, each carrying the
//! same five categories:
//!
//! ```toml
//! [theme.colors.dark-blue]
//! 50 = "#E8E9F5"
//! 600 = "#111457"
//! Primary = "#111457"
//!
//! [theme.borderRadius]
//! DEFAULT = "0.25rem"
//!
//! [theme.extend.spacing]
//! 18 = "4.5rem"
//! ```
//!
//! `Primary` names the primary shade either by its color or by its key
//! (`Primary = "600"`). Exported themes use the key, which stays unambiguous
//! when two shades share a color.
//!
//! Both layers reject keys outside the five categories, so a misspelled table
//! such as `[theme.borderRaduis]` is an error rather than an empty category.
//!
//! Raw layers stay stringly typed at the serde boundary. [`ThemeConfig::build_registry`]
//! converts them into validated domain values and fails on the first bad one.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use beacon_types::{
    DEFAULT_KEY, FontStack, HexColor, PRIMARY_ALIAS, Palette, PaletteError, PaletteOverrides,
    PrimaryOverride, ShadeKey, TokenCategory, TokenError, TokenRegistry, TokenRegistryBuilder,
    TokenValue, ValueError,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid {category} token `{name}`")]
    Value {
        category: TokenCategory,
        name: String,
        source: ValueError,
    },
    #[error("invalid palette `{name}`")]
    Palette { name: String, source: PaletteError },
    #[error("palette `{0}` does not designate a `Primary` shade")]
    MissingPrimary(String),
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// A `colors` entry: either one color or a shade scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Single(String),
    Scale(BTreeMap<String, String>),
}

/// A `fontFamily` entry: an ordered list, or one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontEntry {
    Stack(Vec<String>),
    Single(String),
}

impl FontEntry {
    fn to_stack(&self) -> Result<FontStack, ValueError> {
        match self {
            FontEntry::Stack(faces) => FontStack::new(faces.iter().cloned()),
            FontEntry::Single(raw) => FontStack::parse_css(raw),
        }
    }
}

/// One layer of the theme surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeLayer {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, ColorEntry>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub font_family: BTreeMap<String, FontEntry>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub border_radius: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub box_shadow: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub spacing: BTreeMap<String, String>,
}

impl ThemeLayer {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.font_family.is_empty()
            && self.border_radius.is_empty()
            && self.box_shadow.is_empty()
            && self.spacing.is_empty()
    }

    fn lengths(&self, category: TokenCategory) -> &BTreeMap<String, String> {
        match category {
            TokenCategory::Radius => &self.border_radius,
            TokenCategory::Shadow => &self.box_shadow,
            _ => &self.spacing,
        }
    }
}

/// Base layer plus the `extend` layer layered on top of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeTable", into = "ThemeTable")]
pub struct ThemeConfig {
    pub base: ThemeLayer,
    pub extend: ThemeLayer,
}

/// On-disk shape of `[theme]`: the base categories inline, next to `extend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ThemeTable {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    colors: BTreeMap<String, ColorEntry>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    font_family: BTreeMap<String, FontEntry>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    border_radius: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    box_shadow: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    spacing: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "ThemeLayer::is_empty")]
    extend: ThemeLayer,
}

impl From<ThemeTable> for ThemeConfig {
    fn from(table: ThemeTable) -> Self {
        Self {
            base: ThemeLayer {
                colors: table.colors,
                font_family: table.font_family,
                border_radius: table.border_radius,
                box_shadow: table.box_shadow,
                spacing: table.spacing,
            },
            extend: table.extend,
        }
    }
}

impl From<ThemeConfig> for ThemeTable {
    fn from(config: ThemeConfig) -> Self {
        let ThemeLayer {
            colors,
            font_family,
            border_radius,
            box_shadow,
            spacing,
        } = config.base;
        Self {
            colors,
            font_family,
            border_radius,
            box_shadow,
            spacing,
            extend: config.extend,
        }
    }
}

impl ThemeConfig {
    /// Resolve both layers into a frozen registry.
    ///
    /// Keys in `extend` override or add to the base. A palette present in both
    /// layers is merged shade by shade with [`Palette::extend`].
    pub fn build_registry(&self) -> Result<TokenRegistry, ThemeError> {
        let mut builder = TokenRegistry::builder();
        self.register_colors(&mut builder)?;

        for category in [
            TokenCategory::Spacing,
            TokenCategory::Radius,
            TokenCategory::Shadow,
        ] {
            for (name, raw) in merged(self.base.lengths(category), self.extend.lengths(category)) {
                let value = TokenValue::parse(category, raw).map_err(|source| ThemeError::Value {
                    category,
                    name: name.clone(),
                    source,
                })?;
                builder.register_value(category, name, value)?;
            }
        }

        for (name, entry) in merged(&self.base.font_family, &self.extend.font_family) {
            let stack = entry.to_stack().map_err(|source| ThemeError::Value {
                category: TokenCategory::Font,
                name: name.clone(),
                source,
            })?;
            builder.register_font(name, stack)?;
        }

        let registry = builder.build();
        tracing::debug!(
            tokens = registry.len(),
            palettes = registry.palettes().count(),
            "theme resolved"
        );
        Ok(registry)
    }

    fn register_colors(&self, builder: &mut TokenRegistryBuilder) -> Result<(), ThemeError> {
        let names: BTreeSet<&String> = self
            .base
            .colors
            .keys()
            .chain(self.extend.colors.keys())
            .collect();

        for name in names {
            let entry = match (self.base.colors.get(name), self.extend.colors.get(name)) {
                (Some(ColorEntry::Scale(base)), Some(ColorEntry::Scale(overrides))) => {
                    let (palette, default) = palette_from_scale(name, base)?;
                    let (overrides, override_default) = overrides_from_scale(name, overrides)?;
                    let palette = palette
                        .extend(&overrides)
                        .map_err(|source| ThemeError::Palette {
                            name: name.clone(),
                            source,
                        })?;
                    ResolvedColor::Palette(palette, override_default.or(default))
                }
                (_, Some(entry)) | (Some(entry), None) => resolve_entry(name, entry)?,
                (None, None) => continue,
            };

            match entry {
                ResolvedColor::Single(color) => {
                    builder.register_value(TokenCategory::Color, name.clone(), TokenValue::Color(color))?;
                }
                ResolvedColor::Palette(palette, default) => {
                    builder.register_palette(name.clone(), palette)?;
                    if let Some(color) = default {
                        builder.register_value(
                            TokenCategory::Color,
                            format!("{name}.{DEFAULT_KEY}"),
                            TokenValue::Color(color),
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Describe `registry` as a single base layer.
    ///
    /// Loading the result again yields a registry that resolves every token to
    /// the same literal.
    #[must_use]
    pub fn from_registry(registry: &TokenRegistry) -> Self {
        let mut base = ThemeLayer::default();

        for (name, palette) in registry.palettes() {
            let mut scale: BTreeMap<String, String> = palette
                .shades()
                .map(|(key, color)| (key.to_string(), color.as_str().to_string()))
                .collect();
            scale.insert(PRIMARY_ALIAS.to_string(), palette.primary_key().to_string());
            if let Ok(TokenValue::Color(color)) =
                registry.resolve(&format!("{name}.{DEFAULT_KEY}"), TokenCategory::Color)
            {
                scale.insert(DEFAULT_KEY.to_string(), color.as_str().to_string());
            }
            base.colors.insert(name.to_string(), ColorEntry::Scale(scale));
        }

        for (name, value) in registry.tokens(TokenCategory::Color) {
            let owned_by_palette = registry.is_palette_token(name)
                || name
                    .strip_suffix(DEFAULT_KEY)
                    .and_then(|prefix| prefix.strip_suffix('.'))
                    .is_some_and(|prefix| registry.palette(prefix).is_some());
            if !owned_by_palette {
                base.colors
                    .insert(name.to_string(), ColorEntry::Single(value.to_css()));
            }
        }

        for (name, value) in registry.tokens(TokenCategory::Font) {
            if let Some(stack) = value.as_font() {
                base.font_family
                    .insert(name.to_string(), FontEntry::Stack(stack.faces().to_vec()));
            }
        }

        for (category, target) in [
            (TokenCategory::Spacing, &mut base.spacing),
            (TokenCategory::Radius, &mut base.border_radius),
            (TokenCategory::Shadow, &mut base.box_shadow),
        ] {
            for (name, value) in registry.tokens(category) {
                target.insert(name.to_string(), value.to_css());
            }
        }

        Self {
            base,
            extend: ThemeLayer::default(),
        }
    }
}

/// Base entries overridden by `extend` entries with the same key.
fn merged<'a, V>(
    base: &'a BTreeMap<String, V>,
    extend: &'a BTreeMap<String, V>,
) -> BTreeMap<&'a String, &'a V> {
    let mut out: BTreeMap<&String, &V> = base.iter().collect();
    out.extend(extend.iter());
    out
}

enum ResolvedColor {
    Single(HexColor),
    Palette(Palette, Option<HexColor>),
}

fn resolve_entry(name: &str, entry: &ColorEntry) -> Result<ResolvedColor, ThemeError> {
    match entry {
        ColorEntry::Single(raw) => HexColor::new(raw.as_str())
            .map(ResolvedColor::Single)
            .map_err(|source| ThemeError::Value {
                category: TokenCategory::Color,
                name: name.to_string(),
                source,
            }),
        ColorEntry::Scale(scale) => {
            let (palette, default) = palette_from_scale(name, scale)?;
            Ok(ResolvedColor::Palette(palette, default))
        }
    }
}

/// Split a raw scale into numeric shades, the `Primary` designation and an
/// optional `DEFAULT` color.
#[allow(clippy::type_complexity)]
fn split_scale(
    name: &str,
    scale: &BTreeMap<String, String>,
) -> Result<(Vec<(ShadeKey, HexColor)>, Option<PrimaryOverride>, Option<HexColor>), ThemeError> {
    let color = |key: &str, raw: &str| {
        HexColor::new(raw).map_err(|source| ThemeError::Value {
            category: TokenCategory::Color,
            name: format!("{name}.{key}"),
            source,
        })
    };
    let palette_err = |source| ThemeError::Palette {
        name: name.to_string(),
        source,
    };

    let mut shades = Vec::new();
    let mut primary = None;
    let mut default = None;
    for (key, raw) in scale {
        match key.as_str() {
            PRIMARY_ALIAS => {
                primary = Some(match raw.parse::<ShadeKey>() {
                    Ok(shade) => PrimaryOverride::Shade(shade),
                    Err(_) => PrimaryOverride::Color(color(key.as_str(), raw.as_str())?),
                });
            }
            DEFAULT_KEY => default = Some(color(key.as_str(), raw.as_str())?),
            _ => {
                let shade: ShadeKey = key.parse().map_err(palette_err)?;
                shades.push((shade, color(key.as_str(), raw.as_str())?));
            }
        }
    }
    Ok((shades, primary, default))
}

fn palette_from_scale(
    name: &str,
    scale: &BTreeMap<String, String>,
) -> Result<(Palette, Option<HexColor>), ThemeError> {
    let (shades, primary, default) = split_scale(name, scale)?;
    let primary = primary.ok_or_else(|| ThemeError::MissingPrimary(name.to_string()))?;
    let palette = match primary {
        PrimaryOverride::Shade(key) => Palette::new(shades, key),
        PrimaryOverride::Color(color) => Palette::with_primary_color(shades, &color),
    }
    .map_err(|source| ThemeError::Palette {
        name: name.to_string(),
        source,
    })?;
    Ok((palette, default))
}

fn overrides_from_scale(
    name: &str,
    scale: &BTreeMap<String, String>,
) -> Result<(PaletteOverrides, Option<HexColor>), ThemeError> {
    let (shades, primary, default) = split_scale(name, scale)?;
    let mut overrides = shades
        .into_iter()
        .fold(PaletteOverrides::new(), |acc, (key, color)| acc.shade(key, color));
    if let Some(primary) = primary {
        overrides = overrides.primary(primary);
    }
    Ok((overrides, default))
}
