use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::{StyleBuilder, styles};

const LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("Why Beacon", "#why-choose-us"),
    ("How it works", "#how-it-works"),
    ("Changelog", "#changelog"),
    ("Pricing", "#pricing"),
];

/// Top navigation bar: wordmark, anchor links, call to action.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navbar;

impl Section for Navbar {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let bar = StyleBuilder::new(registry)
            .color("background-color", "white")?
            .color("border-bottom-color", "gray.200")?
            .spacing_pair("padding", "4", "6")?
            .raw("border-bottom-width", "1px")
            .raw("border-bottom-style", "solid")
            .raw("display", "flex")
            .raw("align-items", "center")
            .raw("justify-content", "space-between")
            .build();
        let wordmark = StyleBuilder::new(registry)
            .font("display")?
            .color("color", "dark-blue.Primary")?
            .raw("font-weight", "700")
            .raw("font-size", "1.25rem")
            .raw("text-decoration", "none")
            .build();
        let list = StyleBuilder::new(registry)
            .spacing("gap", "6")?
            .raw("display", "flex")
            .raw("list-style", "none")
            .raw("margin", "0")
            .raw("padding", "0")
            .build();
        let link = StyleBuilder::new(registry)
            .color("color", "gray.700")?
            .raw("text-decoration", "none")
            .build();

        let mut out = Markup::new();
        out.push_html(&format!(r#"<nav id="navbar" style="{bar}">"#));
        out.push_html(&format!(r##"<a href="#" style="{wordmark}">Beacon</a><ul style="{list}">"##));
        for (label, href) in LINKS {
            out.push_html(&format!(r#"<li><a href="{href}" style="{link}">"#));
            out.push_text(label);
            out.push_html("</a></li>");
        }
        out.push_html(&format!(
            r##"</ul><a href="#pricing" style="{}">Get started</a></nav>"##,
            styles::primary_button(registry)?
        ));
        Ok(out)
    }
}
