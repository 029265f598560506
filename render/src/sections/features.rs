use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::{StyleBuilder, styles};

use super::{framed, section_header};

const FEATURES: &[(&str, &str)] = &[
    (
        "Design tokens",
        "Colors, spacing, radii, shadows and fonts live in one theme file.",
    ),
    (
        "Palette layering",
        "Extend a base palette shade by shade without touching the original.",
    ),
    (
        "Static output",
        "One HTML file with an inline stylesheet. Host it anywhere.",
    ),
    (
        "Checked at build time",
        "A misspelled token or a missing section fails the build, not the visitor.",
    ),
];

/// Feature grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Features;

impl Section for Features {
    fn name(&self) -> &'static str {
        "features"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let icon = StyleBuilder::new(registry)
            .color("background-color", "dark-blue.50")?
            .color("color", "dark-blue.Primary")?
            .spacing("width", "12")?
            .spacing("height", "12")?
            .spacing("margin-bottom", "4")?
            .radius("")?
            .raw("display", "flex")
            .raw("align-items", "center")
            .raw("justify-content", "center")
            .raw("font-weight", "700")
            .build();
        let card_title = StyleBuilder::new(registry)
            .color("color", "dark-blue.Primary")?
            .spacing("margin-bottom", "2")?
            .build();
        let card = styles::card(registry)?;
        let body = styles::body_text(registry)?;
        let grid = styles::grid(registry, "14rem")?;

        framed(cx, "features", "gray.50", |out| {
            section_header(
                out,
                cx,
                "Features",
                "Everything a launch page needs",
                "No framework to learn. Write a theme, pick your sections, build.",
            )?;
            out.push_html(&format!(r#"<ul style="{grid}" role="list">"#));
            for (index, (title, text)) in FEATURES.iter().enumerate() {
                out.push_html(&format!(
                    r#"<li style="{card}"><div style="{icon}">{}</div><h3 style="{card_title}">"#,
                    index + 1
                ));
                out.push_text(title);
                out.push_html(&format!(r#"</h3><p style="{body}">"#));
                out.push_text(text);
                out.push_html("</p></li>");
            }
            out.push_html("</ul>");
            Ok(())
        })
    }
}
