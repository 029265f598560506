//! Page layout: the ordered, position-checked list of section slots.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("section name must not be empty")]
    EmptySectionName,
    #[error("section name `{0}` may only contain letters, digits and dashes")]
    InvalidSectionName(String),
    #[error("two slots claim position {0}")]
    DuplicatePosition(usize),
    #[error("slot positions must be contiguous from 0: expected {expected}, found {found}")]
    PositionGap { expected: usize, found: usize },
    #[error("section `{0}` appears more than once")]
    DuplicateSection(SectionName),
}

/// Kebab-case section identifier (`why-choose-us`).
///
/// PascalCase and camelCase spellings (`WhyChooseUs`) normalize to the same
/// name, so layouts can use either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionName(String);

impl SectionName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LayoutError> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(LayoutError::EmptySectionName);
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(LayoutError::InvalidSectionName(raw.to_string()));
        }

        let mut name = String::with_capacity(raw.len() + 4);
        let mut prev_lower = false;
        for c in raw.chars() {
            if c == '_' || c == '-' {
                if !name.ends_with('-') && !name.is_empty() {
                    name.push('-');
                }
                prev_lower = false;
                continue;
            }
            if c.is_ascii_uppercase() {
                if prev_lower && !name.ends_with('-') {
                    name.push('-');
                }
                name.push(c.to_ascii_lowercase());
                prev_lower = false;
            } else {
                name.push(c);
                prev_lower = true;
            }
        }
        let name = name.trim_end_matches('-').to_string();
        if name.is_empty() {
            return Err(LayoutError::InvalidSectionName(raw.to_string()));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectionName {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SectionName {
    type Error = LayoutError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionName> for String {
    fn from(value: SectionName) -> Self {
        value.0
    }
}

/// One mounted section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlot {
    pub position: usize,
    pub section: SectionName,
}

impl SectionSlot {
    #[must_use]
    pub fn new(position: usize, section: SectionName) -> Self {
        Self { position, section }
    }
}

/// Ordered section slots whose positions are exactly `0..len`.
///
/// The position is explicit rather than implied by index, and construction
/// checks it, so a reordering bug shows up as a `LayoutError` instead of a
/// quietly shuffled page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    slots: Vec<SectionSlot>,
}

impl PageLayout {
    /// Assign positions by sequence order.
    pub fn from_sequence<I>(sections: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = SectionName>,
    {
        Self::from_slots(
            sections
                .into_iter()
                .enumerate()
                .map(|(position, section)| SectionSlot::new(position, section)),
        )
    }

    /// Parse names and assign positions by sequence order.
    pub fn parse<I, S>(names: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sections = names
            .into_iter()
            .map(SectionName::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_sequence(sections)
    }

    /// Accept slots in any order; they are sorted by position and checked for
    /// duplicates and gaps.
    pub fn from_slots<I>(slots: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = SectionSlot>,
    {
        let mut slots: Vec<SectionSlot> = slots.into_iter().collect();
        slots.sort_by_key(|slot| slot.position);

        let mut seen = HashSet::new();
        for (expected, slot) in slots.iter().enumerate() {
            if slot.position < expected {
                return Err(LayoutError::DuplicatePosition(slot.position));
            }
            if slot.position > expected {
                return Err(LayoutError::PositionGap {
                    expected,
                    found: slot.position,
                });
            }
            if !seen.insert(&slot.section) {
                return Err(LayoutError::DuplicateSection(slot.section.clone()));
            }
        }
        Ok(Self { slots })
    }

    #[must_use]
    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    pub fn names(&self) -> impl Iterator<Item = &SectionName> {
        self.slots.iter().map(|slot| &slot.section)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// A copy of this layout without `section`, positions renumbered.
    /// Returns an identical layout when `section` is not mounted.
    #[must_use]
    pub fn without(&self, section: &SectionName) -> PageLayout {
        let slots = self
            .slots
            .iter()
            .filter(|slot| &slot.section != section)
            .enumerate()
            .map(|(position, slot)| SectionSlot::new(position, slot.section.clone()))
            .collect();
        PageLayout { slots }
    }
}
