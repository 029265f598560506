use beacon_types::TokenError;

use crate::markup::Markup;
use crate::section::{Section, SectionContext};
use crate::style::{StyleBuilder, styles};

use super::{framed, section_header};

struct Release {
    version: &'static str,
    date: &'static str,
    notes: &'static [&'static str],
}

// Newest first.
const RELEASES: &[Release] = &[
    Release {
        version: "2.0.0",
        date: "2026-09-30",
        notes: &[
            "Themes gain an extend layer that merges palettes shade by shade.",
            "Every palette designates exactly one Primary shade.",
        ],
    },
    Release {
        version: "1.4.0",
        date: "2026-07-12",
        notes: &[
            "DEFAULT radius and shadow are used when no key is given.",
            "New how-it-works section.",
        ],
    },
    Release {
        version: "1.0.0",
        date: "2026-03-02",
        notes: &["First public release."],
    },
];

/// Release history, newest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Changelog;

impl Section for Changelog {
    fn name(&self) -> &'static str {
        "changelog"
    }

    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError> {
        let registry = cx.registry;
        let entry = StyleBuilder::new(registry)
            .color("border-left-color", "dark-blue.200")?
            .spacing_pair("padding", "4", "6")?
            .spacing("margin-bottom", "6")?
            .raw("border-left-width", "2px")
            .raw("border-left-style", "solid")
            .build();
        let version = StyleBuilder::new(registry)
            .color("color", "dark-blue.Primary")?
            .spacing("margin-right", "3")?
            .raw("font-weight", "700")
            .build();
        let date = StyleBuilder::new(registry)
            .font("mono")?
            .color("color", "gray.500")?
            .raw("font-size", "0.875rem")
            .build();
        let notes = styles::body_text(registry)?;

        framed(cx, "changelog", "white", |out| {
            section_header(
                out,
                cx,
                "Changelog",
                "What's new",
                "Recent releases and the changes they brought.",
            )?;
            for release in RELEASES {
                out.push_html(&format!(
                    r#"<article style="{entry}"><h3><span style="{version}">"#
                ));
                out.push_text(release.version);
                out.push_html(&format!(
                    r#"</span><time datetime="{0}" style="{date}">{0}</time></h3>"#,
                    release.date
                ));
                out.push_html(&format!(r#"<ul style="{notes}">"#));
                for note in release.notes {
                    out.push_html("<li>");
                    out.push_text(note);
                    out.push_html("</li>");
                }
                out.push_html("</ul></article>");
            }
            Ok(())
        })
    }
}
