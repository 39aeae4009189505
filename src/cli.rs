// SPDX-License-Identifier: MIT
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use prism_palette::{HarmonyScheme, SortMethod};
use prism_theme::ThemeFormat;

/// Turn colors picked from an image into balanced palettes and editor themes.
#[derive(Debug, Parser)]
#[command(name = "prism", version, about)]
pub struct Args {
    /// TOML file with theme and optimizer settings.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Paint 24-bit color swatches of the result on stderr.
    #[arg(long, global = true)]
    pub preview: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Optimize a palette: dedupe, drop near-duplicates, fill with harmonies.
    Palette {
        #[command(flatten)]
        input: ColorInput,

        /// Number of colors to aim for.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Harmony used to synthesize missing colors.
        #[arg(short, long)]
        scheme: Option<HarmonyScheme>,

        /// Order of the printed palette.
        #[arg(long)]
        sort: Option<SortMethod>,

        /// Print a JSON array instead of one color per line.
        #[arg(long)]
        json: bool,
    },

    /// Score how distinct the colors of a palette are.
    Quality {
        #[command(flatten)]
        input: ColorInput,
    },

    /// Print a color and its harmony companions.
    Harmony {
        /// Base color, e.g. "#e63946".
        color: String,

        #[arg(short, long, default_value_t = HarmonyScheme::Triadic)]
        scheme: HarmonyScheme,
    },

    /// Generate an editor color theme.
    Theme {
        #[command(flatten)]
        input: ColorInput,

        #[arg(short, long, default_value_t = ThemeFormat::VsCode)]
        format: ThemeFormat,

        /// Use the first eight colors as given, without optimizing.
        #[arg(long)]
        strict: bool,

        /// Theme name.
        #[arg(long)]
        name: Option<String>,

        /// Harmony used when the palette needs more colors.
        #[arg(short, long)]
        scheme: Option<HarmonyScheme>,

        /// Write the theme here instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List every color in an existing theme file with its JSON path.
    Colors {
        /// VS Code or Zed theme JSON.
        theme: PathBuf,
    },
}

/// Where colors come from.
#[derive(Debug, Clone, ClapArgs)]
pub struct ColorInput {
    /// Hex colors, or "-" to read them from stdin.
    pub colors: Vec<String>,

    /// File with one color per line, or a JSON array of hex strings or
    /// `{"hex": ..}` objects.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_with_overrides() {
        let args = Args::parse_from([
            "prism", "palette", "#ff0000", "00ff00", "-n", "8", "--scheme", "analogous",
            "--sort", "hue",
        ]);
        match args.command {
            Command::Palette {
                input,
                count,
                scheme,
                sort,
                json,
            } => {
                assert_eq!(input.colors, vec!["#ff0000", "00ff00"]);
                assert_eq!(count, Some(8));
                assert_eq!(scheme, Some(HarmonyScheme::Analogous));
                assert_eq!(sort, Some(SortMethod::Hue));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn theme_defaults() {
        let args = Args::parse_from(["prism", "theme", "-i", "colors.json"]);
        match args.command {
            Command::Theme {
                input,
                format,
                strict,
                name,
                ..
            } => {
                assert!(input.colors.is_empty());
                assert_eq!(input.input, Some(PathBuf::from("colors.json")));
                assert_eq!(format, ThemeFormat::VsCode);
                assert!(!strict);
                assert!(name.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from(["prism", "theme", "-f", "zed", "--preview", "-vv", "-"]);
        assert!(args.preview);
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Theme { format, input, .. } => {
                assert_eq!(format, ThemeFormat::Zed);
                assert_eq!(input.colors, vec!["-"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn harmony_default_scheme() {
        let args = Args::parse_from(["prism", "harmony", "#336699"]);
        assert!(matches!(
            args.command,
            Command::Harmony {
                scheme: HarmonyScheme::Triadic,
                ..
            }
        ));
    }

    #[test]
    fn bad_scheme_is_rejected() {
        assert!(Args::try_parse_from(["prism", "harmony", "#336699", "-s", "tetradic"]).is_err());
    }

    #[test]
    fn bad_format_is_rejected() {
        assert!(Args::try_parse_from(["prism", "theme", "-f", "sublime"]).is_err());
    }
}
