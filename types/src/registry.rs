//! The token registry: a frozen name → value table per category.
//!
//! Registration happens on [`TokenRegistryBuilder`]; [`TokenRegistryBuilder::build`]
//! hands back a [`TokenRegistry`] with no mutating methods at all. Consumers get
//! `&TokenRegistry`, so nothing downstream of the config loader can change a
//! token.
//!
//! Names are restricted to ASCII letters, digits, `.`, `-` and `_`, and two
//! names in one category may not map to the same CSS custom property (see
//! [`property_suffix`]).

use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;

use crate::palette::{PRIMARY_ALIAS, Palette};
use crate::token::{FontStack, Token, TokenCategory, TokenValue, UnknownCategory};

/// Sentinel key used when no explicit key is requested.
pub const DEFAULT_KEY: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("unknown {category} token `{name}`")]
    UnknownToken {
        category: TokenCategory,
        name: String,
    },
    #[error("{category} token `{name}` is registered twice")]
    DuplicateTokenName {
        category: TokenCategory,
        name: String,
    },
    #[error("{category} token `{name}` was given a value of another category")]
    CategoryMismatch {
        category: TokenCategory,
        name: String,
    },
    #[error("{category} token name `{name}` may only contain letters, digits, `.`, `-` and `_`")]
    InvalidTokenName {
        category: TokenCategory,
        name: String,
    },
    #[error("{category} tokens `{name}` and `{existing}` map to the same CSS property")]
    PropertyCollision {
        category: TokenCategory,
        name: String,
        existing: String,
    },
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}

/// The part of a token's CSS custom property name after the category.
///
/// Dots become dashes and case folds, so `dark-blue.Primary` gives
/// `dark-blue-primary`. `DEFAULT` has no suffix: it is the bare category.
#[must_use]
pub fn property_suffix(name: &str) -> Option<String> {
    (name != DEFAULT_KEY).then(|| name.replace('.', "-").to_ascii_lowercase())
}

fn check_name(category: TokenCategory, name: &str) -> Result<(), TokenError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(TokenError::InvalidTokenName {
            category,
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
struct CategoryTable {
    /// Registration order, used for listing and stylesheet output.
    order: Vec<String>,
    values: HashMap<String, TokenValue>,
    /// Property suffix → the name that claimed it.
    properties: HashMap<Option<String>, String>,
}

impl CategoryTable {
    fn check(&self, category: TokenCategory, name: &str) -> Result<(), TokenError> {
        check_name(category, name)?;
        if self.values.contains_key(name) {
            return Err(TokenError::DuplicateTokenName {
                category,
                name: name.to_string(),
            });
        }
        if let Some(existing) = self.properties.get(&property_suffix(name)) {
            return Err(TokenError::PropertyCollision {
                category,
                name: name.to_string(),
                existing: existing.clone(),
            });
        }
        Ok(())
    }

    fn insert(
        &mut self,
        category: TokenCategory,
        name: String,
        value: TokenValue,
    ) -> Result<(), TokenError> {
        self.check(category, &name)?;
        self.properties.insert(property_suffix(&name), name.clone());
        self.order.push(name.clone());
        self.values.insert(name, value);
        Ok(())
    }
}

/// Collects tokens, palettes and font stacks before freezing them.
#[derive(Debug, Default)]
pub struct TokenRegistryBuilder {
    tables: BTreeMap<TokenCategory, CategoryTable>,
    palettes: BTreeMap<String, Palette>,
    palette_tokens: HashSet<String>,
}

impl TokenRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, token: Token) -> Result<&mut Self, TokenError> {
        let Token {
            category,
            name,
            value,
        } = token;
        if !value.fits(category) {
            return Err(TokenError::CategoryMismatch { category, name });
        }
        self.tables
            .entry(category)
            .or_default()
            .insert(category, name, value)?;
        Ok(self)
    }

    pub fn register_value(
        &mut self,
        category: TokenCategory,
        name: impl Into<String>,
        value: TokenValue,
    ) -> Result<&mut Self, TokenError> {
        self.register(Token::new(category, name, value))
    }

    /// Register every shade of `palette` as `name.<shade>` plus `name.Primary`.
    ///
    /// Either all of the palette's tokens are registered or none are.
    pub fn register_palette(
        &mut self,
        name: impl Into<String>,
        palette: Palette,
    ) -> Result<&mut Self, TokenError> {
        let name = name.into();
        check_name(TokenCategory::Color, &name)?;
        let mut entries: Vec<(String, TokenValue)> = palette
            .shades()
            .map(|(key, color)| (format!("{name}.{key}"), TokenValue::Color(color.clone())))
            .collect();
        entries.push((
            format!("{name}.{PRIMARY_ALIAS}"),
            TokenValue::Color(palette.primary().clone()),
        ));

        let table = self.tables.entry(TokenCategory::Color).or_default();
        for (token, _) in &entries {
            table.check(TokenCategory::Color, token)?;
        }
        if self.palettes.contains_key(&name) {
            return Err(TokenError::DuplicateTokenName {
                category: TokenCategory::Color,
                name,
            });
        }

        tracing::debug!(
            palette = %name,
            shades = palette.len(),
            primary = %palette.primary_key(),
            "registered palette"
        );
        for (token, value) in entries {
            self.palette_tokens.insert(token.clone());
            table.insert(TokenCategory::Color, token, value)?;
        }
        self.palettes.insert(name, palette);
        Ok(self)
    }

    /// Define a named font stack. The first face is preferred, the rest are
    /// fallbacks in order.
    pub fn register_font(
        &mut self,
        stack_name: impl Into<String>,
        stack: FontStack,
    ) -> Result<&mut Self, TokenError> {
        self.register_value(TokenCategory::Font, stack_name, TokenValue::Font(stack))
    }

    #[must_use]
    pub fn build(self) -> TokenRegistry {
        TokenRegistry {
            tables: self.tables,
            palettes: self.palettes,
            palette_tokens: self.palette_tokens,
        }
    }
}

/// Read-only token store.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tables: BTreeMap<TokenCategory, CategoryTable>,
    palettes: BTreeMap<String, Palette>,
    palette_tokens: HashSet<String>,
}

impl TokenRegistry {
    #[must_use]
    pub fn builder() -> TokenRegistryBuilder {
        TokenRegistryBuilder::new()
    }

    /// Resolve `name` within `category`.
    ///
    /// An empty name, or a name that is absent while `name.DEFAULT` exists,
    /// resolves to the `DEFAULT` entry. Anything else that is absent fails.
    pub fn resolve(&self, name: &str, category: TokenCategory) -> Result<&TokenValue, TokenError> {
        let unknown = || TokenError::UnknownToken {
            category,
            name: name.to_string(),
        };
        let table = self.tables.get(&category).ok_or_else(unknown)?;

        if name.is_empty() {
            return table.values.get(DEFAULT_KEY).ok_or_else(unknown);
        }
        if let Some(value) = table.values.get(name) {
            return Ok(value);
        }
        table
            .values
            .get(&format!("{name}.{DEFAULT_KEY}"))
            .ok_or_else(unknown)
    }

    pub fn resolve_default(&self, category: TokenCategory) -> Result<&TokenValue, TokenError> {
        self.resolve(DEFAULT_KEY, category)
    }

    /// Resolve a category-qualified path: `color.dark-blue.600`, `shadow.md`,
    /// or a bare category (`radius`) for its `DEFAULT`.
    pub fn lookup(&self, path: &str) -> Result<(TokenCategory, &TokenValue), TokenError> {
        let (category, name) = path.split_once('.').unwrap_or((path, ""));
        let category: TokenCategory = category.parse()?;
        self.resolve(name, category).map(|value| (category, value))
    }

    #[must_use]
    pub fn contains(&self, name: &str, category: TokenCategory) -> bool {
        self.tables
            .get(&category)
            .is_some_and(|table| table.values.contains_key(name))
    }

    /// Tokens of `category` in registration order.
    pub fn tokens(&self, category: TokenCategory) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tables.get(&category).into_iter().flat_map(|table| {
            table
                .order
                .iter()
                .map(move |name| (name.as_str(), &table.values[name]))
        })
    }

    #[must_use]
    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    /// Palettes sorted by name.
    pub fn palettes(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.palettes
            .iter()
            .map(|(name, palette)| (name.as_str(), palette))
    }

    /// Whether a color token was registered as part of a palette.
    #[must_use]
    pub fn is_palette_token(&self, name: &str) -> bool {
        self.palette_tokens.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(|table| table.order.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
