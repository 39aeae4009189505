// SPDX-License-Identifier: MIT
//
// Reading colors from arguments, files and stdin.
//
// Accepted text formats:
//
//   #e63946            one color per line (commas and spaces also separate)
//   ["#e63946", ...]   JSON array of hex strings
//   [{"hex": ...}]     JSON array of saved palette entries
//
// Anything that does not parse as a six-digit hex color is logged and
// skipped.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use prism_color::Color;
use serde::Deserialize;
use tracing::{info, warn};

use crate::cli::ColorInput;

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Hex(String),
    Saved { hex: String },
}

impl Entry {
    fn into_hex(self) -> String {
        match self {
            Self::Hex(hex) | Self::Saved { hex } => hex,
        }
    }
}

/// Collect colors from positional arguments, `--input` and stdin.
pub fn read(input: &ColorInput) -> Result<Vec<Color>> {
    let mut tokens = Vec::new();

    for arg in &input.colors {
        if arg == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading colors from stdin")?;
            tokens.extend(split(&text).context("parsing stdin")?);
        } else {
            tokens.push(arg.clone());
        }
    }

    if let Some(path) = &input.input {
        tokens.extend(read_file(path)?);
    }

    if tokens.is_empty() {
        bail!("no colors given: pass hex colors, --input FILE, or - to read stdin");
    }

    let colors = parse_all(&tokens);
    info!(given = tokens.len(), valid = colors.len(), "read colors");
    Ok(colors)
}

fn read_file(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    split(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Break input text into color tokens.
fn split(text: &str) -> Result<Vec<String>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        let entries: Vec<Entry> = serde_json::from_str(trimmed)?;
        return Ok(entries.into_iter().map(Entry::into_hex).collect());
    }
    Ok(text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect())
}

/// Parse tokens, warning about and dropping the invalid ones.
fn parse_all(tokens: &[String]) -> Vec<Color> {
    tokens
        .iter()
        .filter_map(|token| match Color::parse(token) {
            Ok(color) => Some(color),
            Err(err) => {
                warn!(%err, "skipping invalid color");
                None
            }
        })
        .collect()
}
