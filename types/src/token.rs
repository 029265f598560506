//! Token categories and category-typed literal values.
//!
//! Every value type here validates at construction. Holding a `HexColor` or a
//! `Length` is proof the text is safe to drop into a CSS declaration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters that would let a value escape its CSS declaration or the
/// surrounding `style` attribute.
const FORBIDDEN_CSS_CHARS: &[char] = &[';', '{', '}', '<', '>', '"'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid hex color `{0}` (expected #rgb, #rgba, #rrggbb or #rrggbbaa)")]
    InvalidHexColor(String),
    #[error("{kind} value must not be empty")]
    Empty { kind: &'static str },
    #[error("{kind} value `{value}` contains a forbidden character")]
    ForbiddenCharacter { kind: &'static str, value: String },
    #[error("font stack must name at least one face")]
    EmptyFontStack,
}

fn checked_css_text(kind: &'static str, value: String) -> Result<String, ValueError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Empty { kind });
    }
    if trimmed.contains(FORBIDDEN_CSS_CHARS) {
        return Err(ValueError::ForbiddenCharacter {
            kind,
            value: trimmed.to_string(),
        });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

// ============================================================================
// Categories
// ============================================================================

/// The five token categories a theme exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Spacing,
    Radius,
    Shadow,
    Font,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Radius,
        TokenCategory::Shadow,
        TokenCategory::Font,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Font => "font",
        }
    }

    /// Key used for this category in theme files.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            TokenCategory::Color => "colors",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Radius => "borderRadius",
            TokenCategory::Shadow => "boxShadow",
            TokenCategory::Font => "fontFamily",
        }
    }

    /// Parse either the short name (`radius`) or the theme-file key
    /// (`borderRadius`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| raw == category.as_str() || raw == category.config_key())
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for TokenCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Values
// ============================================================================

/// A hex color literal. The original spelling (case, short form) is kept so
/// resolution returns exactly what the theme declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        let valid = value
            .strip_prefix('#')
            .is_some_and(|digits| {
                matches!(digits.len(), 3 | 4 | 6 | 8)
                    && digits.chars().all(|c| c.is_ascii_hexdigit())
            });
        if valid {
            Ok(Self(value))
        } else {
            Err(ValueError::InvalidHexColor(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison of the literal (`#ABC` vs `#abc`).
    #[must_use]
    pub fn same_color(&self, other: &HexColor) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// A CSS length (`4.5rem`, `0.5rem`, `9999px`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Length(String);

impl Length {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        checked_css_text("length", value.into()).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Length {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.0
    }
}

/// A `box-shadow` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shadow(String);

impl Shadow {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        checked_css_text("shadow", value.into()).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Shadow {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Shadow> for String {
    fn from(value: Shadow) -> Self {
        value.0
    }
}

/// Ordered font faces: the first entry is preferred, the rest are fallbacks.
///
/// Picking a face is left to whatever consumes the stack; the registry only
/// keeps the order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FontStack(Vec<String>);

impl FontStack {
    pub fn new<I, S>(faces: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let faces = faces
            .into_iter()
            .map(|face| checked_css_text("font", face.into()))
            .collect::<Result<Vec<_>, _>>()?;
        if faces.is_empty() {
            return Err(ValueError::EmptyFontStack);
        }
        Ok(Self(faces))
    }

    /// Parse CSS `font-family` text (`Inter, 'Open Sans', sans-serif`).
    pub fn parse_css(raw: &str) -> Result<Self, ValueError> {
        Self::new(
            raw.split(',')
                .map(|face| face.trim().trim_matches('\'').to_string())
                .filter(|face| !face.is_empty()),
        )
    }

    #[must_use]
    pub fn preferred(&self) -> &str {
        &self.0[0]
    }

    #[must_use]
    pub fn faces(&self) -> &[String] {
        &self.0
    }

    /// CSS `font-family` text. Faces containing whitespace are quoted.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|face| {
                if face.contains(char::is_whitespace) && !face.starts_with('\'') {
                    format!("'{face}'")
                } else {
                    face.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TryFrom<Vec<String>> for FontStack {
    type Error = ValueError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FontStack> for Vec<String> {
    fn from(value: FontStack) -> Self {
        value.0
    }
}

/// A category-typed literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    Color(HexColor),
    Length(Length),
    Shadow(Shadow),
    Font(FontStack),
}

impl TokenValue {
    /// Build the value type a category expects from raw text.
    ///
    /// Font stacks given as a single string are split on commas.
    pub fn parse(category: TokenCategory, raw: &str) -> Result<Self, ValueError> {
        Ok(match category {
            TokenCategory::Color => TokenValue::Color(HexColor::new(raw)?),
            TokenCategory::Spacing | TokenCategory::Radius => TokenValue::Length(Length::new(raw)?),
            TokenCategory::Shadow => TokenValue::Shadow(Shadow::new(raw)?),
            TokenCategory::Font => TokenValue::Font(FontStack::parse_css(raw)?),
        })
    }

    /// Whether this value is of the type `category` stores.
    #[must_use]
    pub fn fits(&self, category: TokenCategory) -> bool {
        matches!(
            (self, category),
            (TokenValue::Color(_), TokenCategory::Color)
                | (
                    TokenValue::Length(_),
                    TokenCategory::Spacing | TokenCategory::Radius
                )
                | (TokenValue::Shadow(_), TokenCategory::Shadow)
                | (TokenValue::Font(_), TokenCategory::Font)
        )
    }

    /// Text suitable for the right-hand side of a CSS declaration.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Color(color) => color.as_str().to_string(),
            TokenValue::Length(length) => length.as_str().to_string(),
            TokenValue::Shadow(shadow) => shadow.as_str().to_string(),
            TokenValue::Font(stack) => stack.to_css(),
        }
    }

    #[must_use]
    pub fn as_color(&self) -> Option<&HexColor> {
        match self {
            TokenValue::Color(color) => Some(color),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_font(&self) -> Option<&FontStack> {
        match self {
            TokenValue::Font(stack) => Some(stack),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// A named design value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub name: String,
    pub value: TokenValue,
}

impl Token {
    #[must_use]
    pub fn new(category: TokenCategory, name: impl Into<String>, value: TokenValue) -> Self {
        Self {
            category,
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_keeps_original_spelling() {
        let color = HexColor::new("#E8E9F5").unwrap();
        assert_eq!(color.as_str(), "#E8E9F5");
        assert!(color.same_color(&HexColor::new("#e8e9f5").unwrap()));
    }

    #[test]
    fn hex_color_rejects_bad_input() {
        for raw in ["111457", "#11145", "#GGGGGG", "#", ""] {
            assert!(
                matches!(HexColor::new(raw), Err(ValueError::InvalidHexColor(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn length_rejects_declaration_breakout() {
        assert!(matches!(
            Length::new("1rem; color: red"),
            Err(ValueError::ForbiddenCharacter { .. })
        ));
        assert!(matches!(
            Length::new("   "),
            Err(ValueError::Empty { kind: "length" })
        ));
        assert_eq!(Length::new(" 4.5rem ").unwrap().as_str(), "4.5rem");
    }

    #[test]
    fn font_stack_preserves_order_and_quotes_multiword_faces() {
        let stack = FontStack::new(["Inter", "Helvetica Neue", "sans-serif"]).unwrap();
        assert_eq!(stack.preferred(), "Inter");
        assert_eq!(stack.to_css(), "Inter, 'Helvetica Neue', sans-serif");
    }

    #[test]
    fn font_stack_must_not_be_empty() {
        assert_eq!(
            FontStack::new(Vec::<String>::new()),
            Err(ValueError::EmptyFontStack)
        );
    }

    #[test]
    fn category_accepts_short_and_config_names() {
        assert_eq!(TokenCategory::parse("radius"), Some(TokenCategory::Radius));
        assert_eq!(
            TokenCategory::parse("borderRadius"),
            Some(TokenCategory::Radius)
        );
        assert_eq!(TokenCategory::parse("colors"), Some(TokenCategory::Color));
        assert!("gradient".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn parse_builds_category_typed_values() {
        let font = TokenValue::parse(TokenCategory::Font, "Inter, 'Open Sans', sans-serif").unwrap();
        assert_eq!(
            font.as_font().unwrap().faces(),
            ["Inter", "Open Sans", "sans-serif"]
        );
        assert!(font.fits(TokenCategory::Font));
        assert!(!font.fits(TokenCategory::Color));

        let spacing = TokenValue::parse(TokenCategory::Spacing, "4.5rem").unwrap();
        assert!(spacing.fits(TokenCategory::Radius));
    }
}
