use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::{StyleBuilder, styles};

use super::{framed, section_header};

struct Proposition {
    stat: &'static str,
    label: &'static str,
    detail: &'static str,
}

const PROPOSITIONS: &[Proposition] = &[
    Proposition {
        stat: "1 file",
        label: "to restyle everything",
        detail: "Swap a palette and the navbar, buttons and pricing cards all follow.",
    },
    Proposition {
        stat: "0 JS",
        label: "shipped to visitors",
        detail: "Pages are plain HTML and CSS, so they load before anyone notices.",
    },
    Proposition {
        stat: "8",
        label: "ready-made sections",
        detail: "From navbar to footer, each one independent and reorderable.",
    },
];

/// Value-proposition blocks with a headline figure each.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhyChooseUs;

impl Section for WhyChooseUs {
    fn name(&self) -> &'static str {
        "why-choose-us"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let block = StyleBuilder::new(registry)
            .color("border-left-color", "orange.Primary")?
            .spacing("padding-left", "6")?
            .raw("border-left-width", "4px")
            .raw("border-left-style", "solid")
            .build();
        let stat = StyleBuilder::new(registry)
            .font("display")?
            .color("color", "dark-blue.Primary")?
            .raw("font-size", "2.25rem")
            .raw("font-weight", "700")
            .raw("margin", "0")
            .build();
        let label = StyleBuilder::new(registry)
            .color("color", "dark-blue.700")?
            .spacing("margin-bottom", "2")?
            .raw("font-weight", "600")
            .build();
        let body = styles::body_text(registry)?;
        let grid = styles::grid(registry, "16rem")?;

        framed(cx, "why-choose-us", "white", |out| {
            section_header(
                out,
                cx,
                "Why Beacon",
                "Consistency without the busywork",
                "Design decisions are made once, in the theme, and applied everywhere.",
            )?;
            out.push_html(&format!(r#"<div style="{grid}">"#));
            for proposition in PROPOSITIONS {
                out.push_html(&format!(r#"<article style="{block}"><p style="{stat}">"#));
                out.push_text(proposition.stat);
                out.push_html(&format!(r#"</p><p style="{label}">"#));
                out.push_text(proposition.label);
                out.push_html(&format!(r#"</p><p style="{body}">"#));
                out.push_text(proposition.detail);
                out.push_html("</p></article>");
            }
            out.push_html("</div>");
            Ok(())
        })
    }
}
