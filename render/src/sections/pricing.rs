use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::{StyleBuilder, styles};

use super::{framed, section_header};

struct Tier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    perks: &'static [&'static str],
    highlighted: bool,
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Starter",
        price: "$0",
        period: "forever",
        perks: &["One site", "All stock sections", "Community support"],
        highlighted: false,
    },
    Tier {
        name: "Pro",
        price: "$19",
        period: "per month",
        perks: &[
            "Unlimited sites",
            "Custom sections",
            "Theme export",
            "Email support",
        ],
        highlighted: true,
    },
    Tier {
        name: "Team",
        price: "$49",
        period: "per month",
        perks: &["Everything in Pro", "Shared themes", "Priority support"],
        highlighted: false,
    },
];

/// Pricing table; the highlighted tier gets the brand border and shadow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pricing;

impl Section for Pricing {
    fn name(&self) -> &'static str {
        "pricing"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let card = styles::card(registry)?;
        let highlighted = StyleBuilder::new(registry)
            .color("background-color", "white")?
            .color("border-color", "orange.Primary")?
            .spacing("padding", "8")?
            .radius("2xl")?
            .shadow("lg")?
            .raw("border-width", "2px")
            .raw("border-style", "solid")
            .build();
        let tier_name = StyleBuilder::new(registry)
            .color("color", "dark-blue.Primary")?
            .raw("margin-top", "0")
            .build();
        let price = StyleBuilder::new(registry)
            .font("display")?
            .color("color", "dark-blue.Primary")?
            .raw("font-size", "2.5rem")
            .raw("font-weight", "700")
            .build();
        let period = StyleBuilder::new(registry)
            .color("color", "gray.500")?
            .spacing("margin-left", "1")?
            .build();
        let perks = StyleBuilder::new(registry)
            .color("color", "gray.700")?
            .spacing_pair("margin", "6", "0")?
            .raw("list-style", "none")
            .raw("padding", "0")
            .build();
        let grid = styles::grid(registry, "16rem")?;
        let primary = styles::primary_button(registry)?;
        let secondary = styles::secondary_button(registry)?;

        framed(cx, "pricing", "gray.50", |out| {
            section_header(
                out,
                cx,
                "Pricing",
                "Simple plans, no surprises",
                "Start free and upgrade when you need more than one site.",
            )?;
            out.push_html(&format!(r#"<div style="{grid}">"#));
            for tier in TIERS {
                let (style, button) = if tier.highlighted {
                    (&highlighted, &primary)
                } else {
                    (&card, &secondary)
                };
                out.push_html(&format!(
                    r#"<article style="{style}" data-highlighted="{}"><h3 style="{tier_name}">"#,
                    tier.highlighted
                ));
                out.push_text(tier.name);
                out.push_html(&format!(r#"</h3><p><span style="{price}">"#));
                out.push_text(tier.price);
                out.push_html(&format!(r#"</span><span style="{period}">"#));
                out.push_text(tier.period);
                out.push_html(&format!(r#"</span></p><ul style="{perks}">"#));
                for perk in tier.perks {
                    out.push_html("<li>");
                    out.push_text(perk);
                    out.push_html("</li>");
                }
                out.push_html(&format!(r##"</ul><a href="#" style="{button}">Choose "##));
                out.push_text(tier.name);
                out.push_html("</a></article>");
            }
            out.push_html("</div>");
            Ok(())
        })
    }
}
