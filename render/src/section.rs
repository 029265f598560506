//! The section boundary and the catalog of available sections.

use std::collections::BTreeMap;
use std::fmt;

use beacon_types::{SectionName, TokenError, TokenRegistry};

use crate::markup::Markup;
use crate::sections;

/// What a section gets to see while rendering.
///
/// Only a shared registry and the slot it is mounted at. There is no way to
/// reach a sibling's output or any mutable page state from here.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub registry: &'a TokenRegistry,
    pub position: usize,
}

/// One presentational block of the page.
pub trait Section: Send + Sync {
    /// Kebab-case name the layout refers to.
    fn name(&self) -> &'static str;

    /// Produce self-contained HTML. Fails only when a token the section
    /// styles itself with is missing from the registry.
    fn render(&self, cx: &SectionContext<'_>) -> Result<Markup, TokenError>;
}

/// Section implementations indexed by name.
#[derive(Default)]
pub struct SectionCatalog {
    sections: BTreeMap<SectionName, Box<dyn Section>>,
}

impl fmt::Debug for SectionCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionCatalog")
            .field("sections", &self.sections.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SectionCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every section Beacon ships with.
    #[must_use]
    pub fn stock() -> Self {
        Self::new()
            .with(sections::Navbar)
            .with(sections::Hero)
            .with(sections::Features)
            .with(sections::WhyChooseUs)
            .with(sections::HowItWorks)
            .with(sections::Changelog)
            .with(sections::Pricing)
            .with(sections::Footer)
    }

    /// Add `section`, replacing any implementation already registered under
    /// the same name.
    ///
    /// # Panics
    ///
    /// Panics if the section's name is not a valid section name; names are
    /// compile-time constants, so this is a programming error.
    #[must_use]
    pub fn with(mut self, section: impl Section + 'static) -> Self {
        let name = SectionName::new(section.name())
            .unwrap_or_else(|err| panic!("section name `{}`: {err}", section.name()));
        self.sections.insert(name, Box::new(section));
        self
    }

    #[must_use]
    pub fn get(&self, name: &SectionName) -> Option<&dyn Section> {
        self.sections.get(name).map(|section| &**section)
    }

    #[must_use]
    pub fn contains(&self, name: &SectionName) -> bool {
        self.sections.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &SectionName> {
        self.sections.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
