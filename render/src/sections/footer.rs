use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::StyleBuilder;

const COLUMNS: &[(&str, &[&str])] = &[
    ("Product", &["Features", "Pricing", "Changelog"]),
    ("Company", &["About", "Blog", "Careers"]),
    ("Legal", &["Privacy", "Terms"]),
];

/// Link columns and copyright line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Footer;

impl Section for Footer {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let footer = StyleBuilder::new(registry)
            .color("background-color", "dark-blue.900")?
            .color("color", "dark-blue.100")?
            .spacing_pair("padding", "16", "6")?
            .build();
        let columns = StyleBuilder::new(registry)
            .spacing("gap", "12")?
            .raw("display", "flex")
            .raw("flex-wrap", "wrap")
            .build();
        let heading = StyleBuilder::new(registry)
            .color("color", "white")?
            .spacing("margin-bottom", "3")?
            .raw("font-size", "0.875rem")
            .raw("text-transform", "uppercase")
            .build();
        let list = StyleBuilder::new(registry)
            .raw("list-style", "none")
            .raw("padding", "0")
            .build();
        let link = StyleBuilder::new(registry)
            .color("color", "dark-blue.200")?
            .raw("text-decoration", "none")
            .build();
        let legal = StyleBuilder::new(registry)
            .color("color", "dark-blue.300")?
            .color("border-top-color", "dark-blue.800")?
            .spacing("margin-top", "12")?
            .spacing("padding-top", "6")?
            .raw("border-top-width", "1px")
            .raw("border-top-style", "solid")
            .raw("font-size", "0.875rem")
            .build();

        let mut out = Markup::new();
        out.push_html(&format!(
            r#"<footer id="footer" style="{footer}"><div style="{columns}">"#
        ));
        for (title, links) in COLUMNS {
            out.push_html(&format!(r#"<div><h4 style="{heading}">"#));
            out.push_text(title);
            out.push_html(&format!(r#"</h4><ul style="{list}">"#));
            for label in *links {
                out.push_html(&format!(r##"<li><a href="#" style="{link}">"##));
                out.push_text(label);
                out.push_html("</a></li>");
            }
            out.push_html("</ul></div>");
        }
        out.push_html(&format!(r#"</div><p style="{legal}">"#));
        out.push_text("© 2026 Beacon. Built from a single theme file.");
        out.push_html("</p></footer>");
        Ok(out)
    }
}
