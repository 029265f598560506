//! Token resolution through a fully loaded configuration.

use beacon_types::{ShadeKey, TokenCategory, TokenError};

use crate::common::{MINIMAL_CONFIG, site_from, stock_site};

#[test]
fn primary_alias_and_shade_resolve_to_the_same_literal() {
    let site = stock_site();
    let registry = &site.registry;

    let primary = registry.resolve("dark-blue.Primary", TokenCategory::Color).unwrap();
    let shade = registry.resolve("dark-blue.600", TokenCategory::Color).unwrap();
    assert_eq!(primary, shade);
    assert_eq!(primary.to_css(), "#111457");

    let palette = registry.palette("dark-blue").unwrap();
    assert_eq!(palette.primary_key(), ShadeKey::new(600));
    assert_eq!(palette.len(), 10);
}

#[test]
fn empty_name_resolves_default_radius_and_shadow() {
    let site = site_from(MINIMAL_CONFIG);
    let registry = &site.registry;

    assert_eq!(
        registry.resolve("", TokenCategory::Radius).unwrap().to_css(),
        "0.25rem"
    );
    assert_eq!(
        registry.resolve_default(TokenCategory::Shadow).unwrap().to_css(),
        "0 1px 3px 0 rgb(0 0 0 / 0.1)"
    );
    assert_eq!(
        registry.resolve("lg", TokenCategory::Radius).unwrap().to_css(),
        "0.5rem"
    );
}

#[test]
fn category_qualified_paths() {
    let site = stock_site();
    let registry = &site.registry;

    let (category, value) = registry.lookup("color.orange.Primary").unwrap();
    assert_eq!(category, TokenCategory::Color);
    assert_eq!(value.to_css(), "#F28C0F");

    let (category, value) = registry.lookup("radius").unwrap();
    assert_eq!(category, TokenCategory::Radius);
    assert_eq!(value.to_css(), "0.25rem");

    assert_eq!(
        registry.lookup("borderRadius.2xl").unwrap().1.to_css(),
        "1rem"
    );
    assert!(matches!(
        registry.lookup("gradient.sunset"),
        Err(TokenError::UnknownCategory(_))
    ));
}

#[test]
fn unknown_tokens_are_errors_not_blanks() {
    let site = stock_site();
    let err = site
        .registry
        .resolve("dark-blue.650", TokenCategory::Color)
        .unwrap_err();
    assert_eq!(
        err,
        TokenError::UnknownToken {
            category: TokenCategory::Color,
            name: "dark-blue.650".to_string(),
        }
    );
    assert_eq!(err.to_string(), "unknown color token `dark-blue.650`");
}

#[test]
fn tokens_are_listed_in_registration_order() {
    let site = site_from(MINIMAL_CONFIG);
    let colors: Vec<&str> = site
        .registry
        .tokens(TokenCategory::Color)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        colors,
        ["brand.100", "brand.600", "brand.900", "brand.Primary", "white"]
    );
}

#[test]
fn font_stacks_keep_fallback_order() {
    let site = stock_site();
    let display = site.registry.resolve("display", TokenCategory::Font).unwrap();
    let stack = display.as_font().unwrap();
    assert_eq!(stack.preferred(), "Poppins");
    assert_eq!(stack.faces(), ["Poppins", "Inter", "sans-serif"]);
    assert_eq!(display.to_css(), "Poppins, Inter, sans-serif");
}
