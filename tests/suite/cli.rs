//! The `beacon` binary end to end.

use std::fs;

use scraper::{Html, Selector};

use crate::common::{MINIMAL_CONFIG, beacon, stderr, stdout, write_config};

#[test]
fn build_writes_a_document_with_the_stock_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = beacon(dir.path(), &["build", "--out", "site/index.html"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let html = fs::read_to_string(dir.path().join("site/index.html")).unwrap();
    let document = Html::parse_document(&html);
    let title = Selector::parse("title").unwrap();
    assert!(
        document
            .select(&title)
            .next()
            .unwrap()
            .inner_html()
            .starts_with("Beacon")
    );
    let slots = Selector::parse("main#page > div.slot").unwrap();
    assert_eq!(document.select(&slots).count(), 8);
}

#[test]
fn local_beacon_toml_is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), MINIMAL_CONFIG);

    let output = beacon(dir.path(), &["resolve", "color.brand.Primary"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "#111457");
}

#[test]
fn check_fails_on_unknown_section() {
    let dir = tempfile::tempdir().unwrap();
    let config = MINIMAL_CONFIG.replace(
        r#"sections = ["navbar", "hero", "footer"]"#,
        r#"sections = ["navbar", "testimonials"]"#,
    );
    let path = write_config(dir.path(), &config);

    let output = beacon(dir.path(), &["check", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("section `testimonials`"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn check_passes_on_stock_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = beacon(dir.path(), &["check"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("ok: 8 sections"));
}

#[test]
fn tokens_json_filters_by_category() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), MINIMAL_CONFIG);

    let output = beacon(dir.path(), &["tokens", "--category", "radius", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        rows,
        serde_json::json!([
            { "category": "radius", "name": "DEFAULT", "value": "0.25rem" },
            { "category": "radius", "name": "lg", "value": "0.5rem" },
        ])
    );
}

#[test]
fn export_theme_reloads_as_a_config() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), MINIMAL_CONFIG);

    let output = beacon(dir.path(), &["export-theme"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let exported = stdout(&output);
    assert!(exported.contains("#C5C7E6"), "{exported}");

    let config = format!("[site]\ntitle = \"again\"\n\n{exported}");
    let again = tempfile::tempdir().unwrap();
    write_config(again.path(), &config);
    let output = beacon(again.path(), &["resolve", "color.brand.600"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "#111457");
}
