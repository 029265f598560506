//! Stock landing-page sections.
//!
//! Each section owns its copy and asks the registry for every themed value.

mod changelog;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod navbar;
mod pricing;
mod why_choose_us;

pub use changelog::Changelog;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use why_choose_us::WhyChooseUs;

use beacon_types::TokenError;

use crate::markup::{Markup, escape};
use crate::section::SectionContext;
use crate::style::styles;

/// Open a full-width `<section>` with the shared padding and an inner
/// container, run `body`, then close both.
fn framed(
    cx: &SectionContext<'_>,
    id: &str,
    background: &str,
    body: impl FnOnce(&mut Markup) -> Result<(), TokenError>,
) -> Result<Markup, TokenError> {
    let mut out = Markup::new();
    out.push_html(&format!(
        r#"<section id="{}" style="{}"><div style="{}">"#,
        escape(id),
        styles::section(cx.registry, background)?,
        styles::container(cx.registry)?,
    ));
    body(&mut out)?;
    out.push_html("</div></section>");
    Ok(out)
}

/// Eyebrow label, heading and lead paragraph shared by most sections.
fn section_header(
    out: &mut Markup,
    cx: &SectionContext<'_>,
    eyebrow: &str,
    title: &str,
    lead: &str,
) -> Result<(), TokenError> {
    out.push_html(&format!(
        r#"<header><p style="{}">"#,
        styles::eyebrow(cx.registry)?
    ));
    out.push_text(eyebrow);
    out.push_html(&format!(r#"</p><h2 style="{}">"#, styles::heading(cx.registry)?));
    out.push_text(title);
    out.push_html(&format!(r#"</h2><p style="{}">"#, styles::body_text(cx.registry)?));
    out.push_text(lead);
    out.push_html("</p></header>");
    Ok(())
}
