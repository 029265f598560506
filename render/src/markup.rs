//! HTML escaping and the `Markup` fragment type.
//!
//! Section copy is static, but token values and site metadata come from
//! configuration files, so everything interpolated into HTML goes through
//! [`escape`].

use std::borrow::Cow;
use std::fmt;

/// Escape text for use in HTML element content or a double-quoted attribute.
///
/// Returns `Cow::Borrowed` when nothing needs escaping.
///
/// ```
/// use beacon_render::escape;
///
/// assert_eq!(escape("Plans & pricing"), "Plans &amp; pricing");
/// assert_eq!(escape("plain"), "plain");
/// ```
#[must_use]
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// A self-contained HTML fragment produced by one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-escaped HTML.
    #[must_use]
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Append already-escaped HTML.
    pub fn push_html(&mut self, html: &str) {
        self.0.push_str(html);
    }

    /// Append text, escaping it.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
