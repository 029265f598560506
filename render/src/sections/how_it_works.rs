use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::{StyleBuilder, styles};

use super::{framed, section_header};

const STEPS: &[(&str, &str)] = &[
    (
        "Describe your theme",
        "List palettes, spacing steps, radii, shadows and font stacks in beacon.toml.",
    ),
    (
        "Order your sections",
        "Pick the sections you want and the order they appear in, top to bottom.",
    ),
    (
        "Build",
        "Run `beacon build` and publish the generated index.html.",
    ),
];

/// Numbered steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct HowItWorks;

impl Section for HowItWorks {
    fn name(&self) -> &'static str {
        "how-it-works"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let list = StyleBuilder::new(registry)
            .spacing("gap", "6")?
            .raw("display", "grid")
            .raw("list-style", "none")
            .raw("padding", "0")
            .build();
        let step = StyleBuilder::new(registry)
            .spacing("gap", "4")?
            .raw("display", "flex")
            .raw("align-items", "flex-start")
            .build();
        let number = StyleBuilder::new(registry)
            .color("background-color", "orange.Primary")?
            .color("color", "white")?
            .spacing("width", "12")?
            .spacing("height", "12")?
            .radius("full")?
            .raw("flex", "none")
            .raw("display", "flex")
            .raw("align-items", "center")
            .raw("justify-content", "center")
            .raw("font-weight", "700")
            .build();
        let title = StyleBuilder::new(registry)
            .color("color", "dark-blue.Primary")?
            .spacing("margin-bottom", "1")?
            .raw("margin-top", "0")
            .build();
        let body = styles::body_text(registry)?;

        framed(cx, "how-it-works", "dark-blue.50", |out| {
            section_header(
                out,
                cx,
                "How it works",
                "From theme to page in three steps",
                "There is no step four.",
            )?;
            out.push_html(&format!(r#"<ol style="{list}">"#));
            for (index, (heading, text)) in STEPS.iter().enumerate() {
                out.push_html(&format!(
                    r#"<li style="{step}"><span style="{number}">{}</span><div><h3 style="{title}">"#,
                    index + 1
                ));
                out.push_text(heading);
                out.push_html(&format!(r#"</h3><p style="{body}">"#));
                out.push_text(text);
                out.push_html("</p></div></li>");
            }
            out.push_html("</ol>");
            Ok(())
        })
    }
}
