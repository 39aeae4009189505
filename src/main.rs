// SPDX-License-Identifier: MIT
//
// prism — balanced palettes and editor themes from colors picked out of an
// image.
//
// The binary is a thin shell over the library crates:
//
//   prism-color   → Color value, contrast math, ANSI swatches
//   prism-palette → optimizer, quality score, harmonies, sorting
//   prism-theme   → role derivation, VS Code / Zed documents, traversal
//
// Each subcommand reads colors, runs one library operation and prints the
// result. For `prism theme`:
//
//   args / --input / stdin → input::read → ThemeRoles::derive
//       → ThemeDocument (VS Code | Zed) → pretty JSON → stdout | --output
//
// Logs and previews go to stderr; stdout only carries results.

mod cli;
mod input;
mod preview;
mod settings;

use std::fs;
use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use prism_color::Color;
use prism_palette::quality::score_with;
use prism_palette::{generate_harmony, improve_quality, sort_colors};
use prism_theme::{ThemeDocument, ThemeRoles, collect_colors};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

// ─── Logging ────────────────────────────────────────────────────────────────

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

const ACCENT_LABELS: [&str; 7] = ["c1", "c2", "c3", "c4", "c5", "c6", "c7"];

fn run(args: Args) -> Result<()> {
    let mut config = settings::load(args.config.as_deref())?;
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match args.command {
        Command::Palette {
            input,
            count,
            scheme,
            sort,
            json,
        } => {
            if let Some(count) = count {
                config.optimizer.target_count = count;
            }
            if let Some(scheme) = scheme {
                config.optimizer.scheme = scheme;
            }

            let colors = input::read(&input)?;
            let mut palette = improve_quality(&colors, &config.optimizer);
            info!(input = colors.len(), output = palette.len(), "optimized palette");

            if let Some(method) = sort {
                let sorted = sort_colors(&palette, method);
                if sorted.unchanged {
                    info!(%method, "palette was already in order");
                }
                palette = sorted.colors;
            }

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&palette)?)?;
            } else {
                for color in &palette {
                    writeln!(out, "{color}")?;
                }
            }
            if args.preview {
                preview::palette(&mut err, &palette)?;
            }
        }

        Command::Quality { input } => {
            let colors = input::read(&input)?;
            let score = score_with(&colors, &config.optimizer.quality);
            writeln!(out, "{}", serde_json::to_string_pretty(&score)?)?;
            if args.preview {
                preview::palette(&mut err, &colors)?;
            }
        }

        Command::Harmony { color, scheme } => {
            let base = Color::parse(&color).with_context(|| format!("base color {color:?}"))?;
            let colors = generate_harmony(base, scheme);
            for color in &colors {
                writeln!(out, "{color}")?;
            }
            if args.preview {
                preview::palette(&mut err, &colors)?;
            }
        }

        Command::Theme {
            input,
            format,
            strict,
            name,
            scheme,
            output,
        } => {
            config.strict |= strict;
            if let Some(name) = name {
                config.name = name;
            }
            if let Some(scheme) = scheme {
                config.optimizer.scheme = scheme;
            }

            let colors = input::read(&input)?;
            let roles = ThemeRoles::derive(&colors, &config)?;
            let document = ThemeDocument::from_roles(&roles, format, &config);
            let json = document.to_json_pretty()?;

            if let Some(path) = output {
                fs::write(&path, format!("{json}\n"))
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(path = %path.display(), %format, "wrote theme");
            } else {
                writeln!(out, "{json}")?;
            }

            if args.preview {
                let roles_list = [
                    ("background", roles.background),
                    ("foreground", roles.foreground),
                ]
                .into_iter()
                .chain(ACCENT_LABELS.into_iter().zip(roles.accents));
                preview::labelled(&mut err, roles_list)?;
            }
        }

        Command::Colors { theme } => {
            let text = fs::read_to_string(&theme)
                .with_context(|| format!("reading {}", theme.display()))?;
            let value: Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", theme.display()))?;
            let found = collect_colors(&value);
            for entry in &found {
                writeln!(out, "{}\t{}", entry.path, entry.color)?;
            }
            if args.preview {
                preview::labelled(&mut err, found.iter().map(|e| (e.path.as_str(), e.color)))?;
            }
        }
    }

    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("prism: {e:#}");
        process::exit(1);
    }
}
