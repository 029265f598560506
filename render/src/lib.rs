//! HTML rendering for Beacon: sections, token styles and page composition.

mod compose;
mod markup;
mod section;
pub mod sections;
mod style;
mod stylesheet;

pub use compose::{ComposeError, PageComposer, RenderedPage, RenderedSection, render_site};
pub use markup::{Markup, escape};
pub use section::{Section, SectionCatalog, SectionContext};
pub use style::{StyleBuilder, styles};
pub use stylesheet::{custom_property, stylesheet};
