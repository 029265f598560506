//! Page composition: layout in, ordered HTML out.

use beacon_config::Site;
use beacon_types::{PageLayout, SectionName, TokenError, TokenRegistry};
use thiserror::Error;

use crate::markup::{Markup, escape};
use crate::section::{SectionCatalog, SectionContext};
use crate::stylesheet::stylesheet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("layout position {position} names section `{name}`, which is not in the catalog")]
    MissingSection { name: SectionName, position: usize },
    #[error("section `{section}` failed to render")]
    Token {
        section: SectionName,
        #[source]
        source: TokenError,
    },
}

/// One section's output at its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub position: usize,
    pub name: SectionName,
    pub markup: Markup,
}

/// Every section of a layout, rendered, in layout order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    sections: Vec<RenderedSection>,
}

impl RenderedPage {
    #[must_use]
    pub fn sections(&self) -> &[RenderedSection] {
        &self.sections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The `<main id="page">` tree: one slot wrapper per section, in order.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<main id=\"page\">\n");
        for section in &self.sections {
            html.push_str(&format!(
                "<div class=\"slot\" data-slot=\"{}\" data-section=\"{}\">{}</div>\n",
                section.position,
                escape(section.name.as_str()),
                section.markup
            ));
        }
        html.push_str("</main>");
        html
    }

    /// Full HTML document: head with title, description and token stylesheet,
    /// body with the page tree.
    #[must_use]
    pub fn into_document(self, site: &Site) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             <meta name=\"description\" content=\"{description}\">\n\
             <style>\n{css}</style>\n\
             </head>\n\
             <body>\n{main}\n</body>\n\
             </html>\n",
            title = escape(&site.meta.title),
            description = escape(&site.meta.description),
            css = stylesheet(&site.registry),
            main = self.to_html(),
        )
    }
}

/// Renders layouts against one catalog and one registry.
#[derive(Debug, Clone, Copy)]
pub struct PageComposer<'a> {
    catalog: &'a SectionCatalog,
    registry: &'a TokenRegistry,
}

impl<'a> PageComposer<'a> {
    #[must_use]
    pub fn new(catalog: &'a SectionCatalog, registry: &'a TokenRegistry) -> Self {
        Self { catalog, registry }
    }

    /// Fail on the first slot with no catalog entry, without rendering.
    pub fn check(&self, layout: &PageLayout) -> Result<(), ComposeError> {
        match layout
            .slots()
            .iter()
            .find(|slot| !self.catalog.contains(&slot.section))
        {
            Some(slot) => Err(ComposeError::MissingSection {
                name: slot.section.clone(),
                position: slot.position,
            }),
            None => Ok(()),
        }
    }

    /// Render every slot of `layout` in position order.
    ///
    /// All names are checked before the first section renders, so a
    /// `MissingSection` error never comes with partial output.
    pub fn compose(&self, layout: &PageLayout) -> Result<RenderedPage, ComposeError> {
        self.check(layout)?;

        let mut sections = Vec::with_capacity(layout.len());
        for slot in layout.slots() {
            let Some(section) = self.catalog.get(&slot.section) else {
                return Err(ComposeError::MissingSection {
                    name: slot.section.clone(),
                    position: slot.position,
                });
            };
            let cx = SectionContext {
                registry: self.registry,
                position: slot.position,
            };
            let markup = section
                .render(&cx)
                .map_err(|source| ComposeError::Token {
                    section: slot.section.clone(),
                    source,
                })?;
            tracing::debug!(
                position = slot.position,
                section = %slot.section,
                bytes = markup.as_str().len(),
                "rendered section"
            );
            sections.push(RenderedSection {
                position: slot.position,
                name: slot.section.clone(),
                markup,
            });
        }

        tracing::info!(sections = sections.len(), "composed page");
        Ok(RenderedPage { sections })
    }
}

/// Compose `site` with `catalog` and wrap the result into a document.
pub fn render_site(site: &Site, catalog: &SectionCatalog) -> Result<String, ComposeError> {
    let page = PageComposer::new(catalog, &site.registry).compose(&site.layout)?;
    Ok(page.into_document(site))
}
