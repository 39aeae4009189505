// SPDX-License-Identifier: MIT
//
// Loading `ThemeConfig` from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prism_theme::ThemeConfig;
use tracing::debug;

/// Read the config at `path`, or the defaults when no path is given.
///
/// Missing keys keep their defaults, so a file may set a single value.
pub fn load(path: Option<&Path>) -> Result<ThemeConfig> {
    let Some(path) = path else {
        return Ok(ThemeConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("parsing config {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn parse(text: &str) -> Result<ThemeConfig> {
    Ok(toml::from_str(text)?)
}
