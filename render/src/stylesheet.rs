//! Token stylesheet embedded in the page `<head>`.

use std::fmt::Write as _;

use beacon_types::{TokenCategory, TokenRegistry, property_suffix};

/// CSS custom property name for a token.
///
/// `DEFAULT` maps to the bare category (`--radius`), dots become dashes and
/// everything is lowercased: `dark-blue.Primary` is `--color-dark-blue-primary`.
#[must_use]
pub fn custom_property(category: TokenCategory, name: &str) -> String {
    match property_suffix(name) {
        Some(suffix) => format!("--{category}-{suffix}"),
        None => format!("--{category}"),
    }
}

/// `:root` block declaring every registered token, followed by a few base
/// rules that pull from those properties.
#[must_use]
pub fn stylesheet(registry: &TokenRegistry) -> String {
    let mut css = String::from(":root {\n");
    for category in TokenCategory::ALL {
        for (name, value) in registry.tokens(category) {
            let _ = writeln!(
                css,
                "  {}: {};",
                custom_property(category, name),
                value.to_css()
            );
        }
    }
    css.push_str("}\n");
    css.push_str(BASE_RULES);
    css
}

const BASE_RULES: &str = "\
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; font-family: var(--font-sans, sans-serif); color: var(--color-gray-800, #1F2937); }
img { max-width: 100%; display: block; }
a:focus-visible { outline: 2px solid var(--color-orange-primary, currentColor); outline-offset: 2px; }
";
