//! Core domain types for Beacon.
//!
//! Design tokens, palettes, the frozen token registry and the page layout.
//! No IO, no rendering; every layer above builds on these.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod layout;
pub mod palette;
pub mod registry;
pub mod token;

pub use layout::{LayoutError, PageLayout, SectionName, SectionSlot};
pub use palette::{
    PRIMARY_ALIAS, Palette, PaletteError, PaletteOverrides, PrimaryOverride, STANDARD_SHADES,
    ShadeKey,
};
pub use registry::{
    DEFAULT_KEY, TokenError, TokenRegistry, TokenRegistryBuilder, property_suffix,
};
pub use token::{
    FontStack, HexColor, Length, Shadow, Token, TokenCategory, TokenValue, UnknownCategory,
    ValueError,
};
