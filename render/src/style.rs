//! Inline styles resolved from design tokens.
//!
//! Sections never hardcode a color or a length that the theme defines: they
//! name a token and [`StyleBuilder`] looks it up, so a missing token fails the
//! build instead of rendering a page with a silent gap.

use beacon_types::{TokenCategory, TokenError, TokenRegistry};

use crate::markup::escape;

/// Accumulates `property: value` declarations for a `style` attribute.
#[derive(Debug, Clone)]
pub struct StyleBuilder<'a> {
    registry: &'a TokenRegistry,
    declarations: Vec<(&'static str, String)>,
}

impl<'a> StyleBuilder<'a> {
    #[must_use]
    pub fn new(registry: &'a TokenRegistry) -> Self {
        Self {
            registry,
            declarations: Vec::new(),
        }
    }

    fn token(
        mut self,
        property: &'static str,
        name: &str,
        category: TokenCategory,
    ) -> Result<Self, TokenError> {
        let value = self.registry.resolve(name, category)?.to_css();
        self.declarations.push((property, value));
        Ok(self)
    }

    pub fn color(self, property: &'static str, name: &str) -> Result<Self, TokenError> {
        self.token(property, name, TokenCategory::Color)
    }

    pub fn spacing(self, property: &'static str, name: &str) -> Result<Self, TokenError> {
        self.token(property, name, TokenCategory::Spacing)
    }

    /// Two spacing tokens as one shorthand value (`padding: <block> <inline>`).
    pub fn spacing_pair(
        mut self,
        property: &'static str,
        block: &str,
        inline: &str,
    ) -> Result<Self, TokenError> {
        let block = self.registry.resolve(block, TokenCategory::Spacing)?.to_css();
        let inline = self.registry.resolve(inline, TokenCategory::Spacing)?.to_css();
        self.declarations.push((property, format!("{block} {inline}")));
        Ok(self)
    }

    /// `border-radius`; an empty name uses the `DEFAULT` radius.
    pub fn radius(self, name: &str) -> Result<Self, TokenError> {
        self.token("border-radius", name, TokenCategory::Radius)
    }

    /// `box-shadow`; an empty name uses the `DEFAULT` shadow.
    pub fn shadow(self, name: &str) -> Result<Self, TokenError> {
        self.token("box-shadow", name, TokenCategory::Shadow)
    }

    pub fn font(self, name: &str) -> Result<Self, TokenError> {
        self.token("font-family", name, TokenCategory::Font)
    }

    /// A declaration that is layout, not theme (`display: flex`).
    #[must_use]
    pub fn raw(mut self, property: &'static str, value: &str) -> Self {
        self.declarations.push((property, value.to_string()));
        self
    }

    /// `style` attribute value, escaped for a double-quoted attribute.
    #[must_use]
    pub fn build(self) -> String {
        let css = self
            .declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        escape(&css).into_owned()
    }
}

/// Pre-defined styles shared by several sections.
pub mod styles {
    use beacon_types::{TokenError, TokenRegistry};

    use super::StyleBuilder;

    pub fn section(registry: &TokenRegistry, background: &str) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .color("background-color", background)?
            .spacing_pair("padding", "24", "6")?
            .build())
    }

    pub fn container(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .raw("max-width", "72rem")
            .raw("margin", "0 auto")
            .build())
    }

    pub fn heading(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .font("display")?
            .color("color", "dark-blue.Primary")?
            .spacing("margin-bottom", "4")?
            .build())
    }

    pub fn eyebrow(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .color("color", "orange.Primary")?
            .raw("text-transform", "uppercase")
            .raw("letter-spacing", "0.08em")
            .raw("font-weight", "600")
            .build())
    }

    pub fn body_text(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .color("color", "gray.600")?
            .raw("line-height", "1.6")
            .build())
    }

    pub fn primary_button(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .color("background-color", "orange.Primary")?
            .color("color", "white")?
            .spacing_pair("padding", "3", "6")?
            .radius("lg")?
            .shadow("md")?
            .raw("display", "inline-block")
            .raw("text-decoration", "none")
            .raw("font-weight", "600")
            .build())
    }

    pub fn secondary_button(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .color("color", "dark-blue.Primary")?
            .color("border-color", "dark-blue.200")?
            .spacing_pair("padding", "3", "6")?
            .radius("lg")?
            .raw("border-width", "1px")
            .raw("border-style", "solid")
            .raw("display", "inline-block")
            .raw("text-decoration", "none")
            .build())
    }

    pub fn card(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .color("background-color", "white")?
            .spacing("padding", "8")?
            .radius("xl")?
            .shadow("card")?
            .build())
    }

    pub fn badge(registry: &TokenRegistry) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .color("background-color", "orange.50")?
            .color("color", "orange.700")?
            .spacing_pair("padding", "1", "3")?
            .radius("full")?
            .raw("font-size", "0.875rem")
            .build())
    }

    pub fn grid(registry: &TokenRegistry, min_column: &str) -> Result<String, TokenError> {
        Ok(StyleBuilder::new(registry)
            .raw("display", "grid")
            .raw(
                "grid-template-columns",
                &format!("repeat(auto-fit, minmax({min_column}, 1fr))"),
            )
            .spacing("gap", "8")?
            .build())
    }
}
