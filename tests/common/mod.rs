//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use beacon_config::{ConfigSource, Site, SiteConfig};

/// Small but complete configuration: one brand palette, DEFAULT radius and
/// shadow, and a three-section page.
pub const MINIMAL_CONFIG: &str = r##"
[site]
title = "Minimal"
description = "A three section page"

[page]
sections = ["navbar", "hero", "footer"]

[theme.colors]
white = "#FFFFFF"

[theme.colors.brand]
100 = "#C5C7E6"
600 = "#111457"
900 = "#050615"
Primary = "#111457"

[theme.borderRadius]
DEFAULT = "0.25rem"
lg = "0.5rem"

[theme.boxShadow]
DEFAULT = "0 1px 3px 0 rgb(0 0 0 / 0.1)"

[theme.spacing]
4 = "1rem"
"##;

pub fn stock_site() -> Site {
    Site::load(&ConfigSource::Stock).expect("stock configuration resolves")
}

pub fn site_from(content: &str) -> Site {
    SiteConfig::parse(content, Path::new("inline.toml"))
        .and_then(|config| config.resolve(Path::new("inline.toml")))
        .expect("test configuration resolves")
}

/// Write `content` as `beacon.toml` inside `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("beacon.toml");
    fs::write(&path, content).expect("write config");
    path
}

/// Run the `beacon` binary in `cwd` with a clean configuration environment.
pub fn beacon(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_beacon"))
        .args(args)
        .current_dir(cwd)
        .env_remove("BEACON_CONFIG")
        .env("RUST_LOG", "warn")
        .output()
        .expect("spawn beacon")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
