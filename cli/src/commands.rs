use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use beacon_config::{ConfigSource, Site, ThemeConfig};
use beacon_render::{PageComposer, SectionCatalog, render_site};
use beacon_types::TokenCategory;
use beacon_utils::write_output;
use serde::Serialize;

fn load(source: &ConfigSource) -> Result<Site> {
    let site = Site::load(source)?;
    tracing::info!(
        config = %source.display_path().display(),
        sections = site.layout.len(),
        tokens = site.registry.len(),
        "loaded configuration"
    );
    Ok(site)
}

pub fn build(source: &ConfigSource, out: &Path) -> Result<()> {
    let site = load(source)?;
    let html = render_site(&site, &SectionCatalog::stock())?;
    write_output(out, html.as_bytes())
        .with_context(|| format!("failed to write {}", out.display()))?;
    tracing::info!(path = %out.display(), bytes = html.len(), "page written");
    println!("{}", out.display());
    Ok(())
}

pub fn resolve(source: &ConfigSource, path: &str) -> Result<()> {
    let site = load(source)?;
    let (_, value) = site
        .registry
        .lookup(path)
        .with_context(|| format!("cannot resolve `{path}`"))?;
    println!("{}", value.to_css());
    Ok(())
}

#[derive(Debug, Serialize)]
struct TokenRow<'a> {
    category: &'static str,
    name: &'a str,
    value: String,
}

pub fn tokens(source: &ConfigSource, category: Option<&str>, json: bool) -> Result<()> {
    let site = load(source)?;
    let categories = match category {
        Some(raw) => vec![raw.parse::<TokenCategory>()?],
        None => TokenCategory::ALL.to_vec(),
    };

    let rows: Vec<TokenRow<'_>> = categories
        .into_iter()
        .flat_map(|category| {
            site.registry
                .tokens(category)
                .map(move |(name, value)| TokenRow {
                    category: category.as_str(),
                    name,
                    value: value.to_css(),
                })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in &rows {
        let _ = writeln!(
            out,
            "{:<8} {:<width$}  {}",
            row.category, row.name, row.value
        );
    }
    print!("{out}");
    Ok(())
}

pub fn check(source: &ConfigSource) -> Result<()> {
    let site = load(source)?;
    let catalog = SectionCatalog::stock();
    let composer = PageComposer::new(&catalog, &site.registry);
    composer.check(&site.layout)?;
    let page = composer.compose(&site.layout)?;
    println!(
        "ok: {} sections, {} tokens, {} palettes",
        page.len(),
        site.registry.len(),
        site.registry.palettes().count()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct ExportedTheme {
    theme: ThemeConfig,
}

pub fn export_theme(source: &ConfigSource) -> Result<()> {
    let site = load(source)?;
    let exported = ExportedTheme {
        theme: ThemeConfig::from_registry(&site.registry),
    };
    let toml = toml::to_string_pretty(&exported).context("failed to serialize theme")?;
    print!("{toml}");
    Ok(())
}
