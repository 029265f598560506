//! Theme layering and export.

use std::path::Path;

use beacon_config::{ConfigError, SiteConfig, ThemeConfig, ThemeError};
use beacon_types::{PaletteError, TokenCategory, TokenError};
use pretty_assertions::assert_eq;

use crate::common::{site_from, stock_site};

#[test]
fn extend_layer_overrides_a_base_palette_shade() {
    let site = site_from(
        r##"
[site]
title = "t"

[page]
sections = ["hero"]

[theme.colors.brand]
500 = "#3D43AC"
600 = "#111457"
Primary = "#111457"

[theme.extend.colors.brand]
500 = "#4B52C8"
"##,
    );
    let registry = &site.registry;
    assert_eq!(
        registry.resolve("brand.500", TokenCategory::Color).unwrap().to_css(),
        "#4B52C8"
    );
    assert_eq!(
        registry.resolve("brand.Primary", TokenCategory::Color).unwrap().to_css(),
        "#111457"
    );
}

#[test]
fn ambiguous_primary_is_rejected_with_the_config_path() {
    let err = SiteConfig::parse(
        r##"
[site]
title = "t"

[theme.colors.brand]
500 = "#111457"
600 = "#111457"
Primary = "#111457"
"##,
        Path::new("site/beacon.toml"),
    )
    .and_then(|config| config.resolve(Path::new("site/beacon.toml")))
    .unwrap_err();

    assert_eq!(err.path(), Path::new("site/beacon.toml"));
    let ConfigError::Theme { source, .. } = &err else {
        panic!("expected a theme error, got {err:?}");
    };
    assert!(matches!(
        source,
        ThemeError::Palette {
            source: PaletteError::AmbiguousPrimary { .. },
            ..
        }
    ));
}

#[test]
fn stock_theme_survives_export_and_reload() {
    let site = stock_site();
    let exported = ThemeConfig::from_registry(&site.registry);
    let text = toml::to_string(&exported).unwrap();
    let reloaded: ThemeConfig = toml::from_str(&text).unwrap();
    let registry = reloaded.build_registry().unwrap();

    for category in TokenCategory::ALL {
        let before: Vec<(String, String)> = site
            .registry
            .tokens(category)
            .map(|(name, value)| (name.to_string(), value.to_css()))
            .collect();
        for (name, css) in &before {
            assert_eq!(
                &registry.resolve(name, category).unwrap().to_css(),
                css,
                "{category} {name}"
            );
        }
        assert_eq!(registry.tokens(category).count(), before.len(), "{category}");
    }
    assert_eq!(
        registry.palettes().map(|(name, _)| name).collect::<Vec<_>>(),
        ["dark-blue", "gray", "orange"]
    );
}

#[test]
fn misspelled_theme_category_fails_to_parse() {
    let err = SiteConfig::parse(
        r#"
[site]
title = "t"

[theme.borderRaduis]
DEFAULT = "0.25rem"
"#,
        Path::new("beacon.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
}

#[test]
fn markup_in_a_token_name_never_reaches_the_stylesheet() {
    let err = SiteConfig::parse(
        r#"
[site]
title = "t"

[theme.spacing]
"x: 0}</style><script>alert(1)</script><style>{" = "1rem"
"#,
        Path::new("beacon.toml"),
    )
    .and_then(|config| config.resolve(Path::new("beacon.toml")))
    .unwrap_err();

    let ConfigError::Theme { source, .. } = &err else {
        panic!("expected a theme error, got {err:?}");
    };
    assert!(matches!(
        source,
        ThemeError::Token(TokenError::InvalidTokenName {
            category: TokenCategory::Spacing,
            ..
        })
    ));
}
