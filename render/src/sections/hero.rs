use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::{StyleBuilder, styles};

/// Hero banner on the dark brand background.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hero;

impl Section for Hero {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let banner = StyleBuilder::new(registry)
            .color("background-color", "dark-blue.Primary")?
            .color("color", "white")?
            .spacing_pair("padding", "24", "6")?
            .raw("text-align", "center")
            .build();
        let title = StyleBuilder::new(registry)
            .font("display")?
            .spacing("margin-bottom", "6")?
            .raw("font-size", "3rem")
            .raw("line-height", "1.1")
            .build();
        let lead = StyleBuilder::new(registry)
            .color("color", "dark-blue.100")?
            .spacing("margin-bottom", "8")?
            .raw("font-size", "1.25rem")
            .build();
        let actions = StyleBuilder::new(registry)
            .spacing("gap", "4")?
            .raw("display", "flex")
            .raw("justify-content", "center")
            .build();
        let ghost = StyleBuilder::new(registry)
            .color("color", "white")?
            .color("border-color", "dark-blue.300")?
            .spacing_pair("padding", "3", "6")?
            .radius("lg")?
            .raw("border-width", "1px")
            .raw("border-style", "solid")
            .raw("text-decoration", "none")
            .build();

        let mut out = Markup::new();
        out.push_html(&format!(r#"<section id="hero" style="{banner}">"#));
        out.push_html(&format!(r#"<span style="{}">"#, styles::badge(registry)?));
        out.push_text("New: theme tokens 2.0");
        out.push_html(&format!(r#"</span><h1 style="{title}">"#));
        out.push_text("Launch pages that look designed, not assembled");
        out.push_html(&format!(r#"</h1><p style="{lead}">"#));
        out.push_text(
            "Beacon turns one theme file into a complete, consistent landing page. \
             Change a color once and every section follows.",
        );
        out.push_html(&format!(r#"</p><div style="{actions}">"#));
        out.push_html(&format!(
            r##"<a href="#pricing" style="{}">Start free</a>"##,
            styles::primary_button(registry)?
        ));
        out.push_html(&format!(
            r##"<a href="#how-it-works" style="{ghost}">See how it works</a>"##
        ));
        out.push_html("</div></section>");
        Ok(out)
    }
}
