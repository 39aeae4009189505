//! Theme documents — the finished output of the role mapper.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use prism_color::Color;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::roles::{Appearance, ThemeRoles};
use crate::vscode::{self, VsCodeTheme};
use crate::zed::{self, ZedTheme};

/// Output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFormat {
    #[default]
    VsCode,
    Zed,
}

impl ThemeFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VsCode => "vscode",
            Self::Zed => "zed",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::VsCode, Self::Zed]
    }
}

impl fmt::Display for ThemeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeFormat {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vscode" | "vs-code" | "code" => Ok(Self::VsCode),
            "zed" => Ok(Self::Zed),
            _ => Err(ThemeError::UnknownFormat(s.to_string())),
        }
    }
}

/// A generated theme in one of the supported schemas.
///
/// Built once and never mutated; serializes directly to the schema's JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThemeDocument {
    VsCode(VsCodeTheme),
    Zed(ZedTheme),
}

impl ThemeDocument {
    /// Render `roles` in `format`.
    #[must_use]
    pub fn from_roles(roles: &ThemeRoles, format: ThemeFormat, config: &ThemeConfig) -> Self {
        match format {
            ThemeFormat::VsCode => Self::VsCode(vscode::build(roles, config)),
            ThemeFormat::Zed => Self::Zed(zed::build(roles, config)),
        }
    }

    #[must_use]
    pub const fn format(&self) -> ThemeFormat {
        match self {
            Self::VsCode(_) => ThemeFormat::VsCode,
            Self::Zed(_) => ThemeFormat::Zed,
        }
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        match self {
            Self::VsCode(theme) => theme.appearance,
            // Zed files built here always hold exactly one variant.
            Self::Zed(theme) => theme
                .themes
                .first()
                .map_or(Appearance::Dark, |variant| variant.appearance),
        }
    }

    /// The document as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] if serialization fails.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty-printed JSON, keys in schema order.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every color in the document with its dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] if serialization fails.
    pub fn colors(&self) -> Result<Vec<ThemeColor>> {
        Ok(collect_colors(&self.to_value()?))
    }
}

/// Optimize (unless strict), derive roles and render a theme.
///
/// # Errors
///
/// [`ThemeError::InsufficientPalette`] when fewer than eight colors are
/// available after optimization.
pub fn map_to_theme(
    palette: &[Color],
    format: ThemeFormat,
    config: &ThemeConfig,
) -> Result<ThemeDocument> {
    let roles = ThemeRoles::derive(palette, config)?;
    debug!(%format, appearance = ?roles.appearance, "rendering theme");
    Ok(ThemeDocument::from_roles(&roles, format, config))
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

const HEX_COLOR_PATTERN: &str = r"^#[0-9a-fA-F]{6}([0-9a-fA-F]{2})?$";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("hex color pattern is valid"));

fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// A color found in a theme document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColor {
    /// Dotted path, e.g. `colors.editor.background` or
    /// `themes[0].style.players[1].cursor`.
    pub path: String,
    pub color: Color,
}

/// Walk a theme document and report every hex color string.
///
/// Object keys join with `.`; array elements get `[i]` appended to their
/// key. Strings directly inside arrays are not colors in either schema and
/// are skipped, as are `null`s and non-color strings.
#[must_use]
pub fn collect_colors(document: &Value) -> Vec<ThemeColor> {
    let mut found = Vec::new();
    walk(document, "", &mut found);
    found
}

fn walk(container: &Value, prefix: &str, found: &mut Vec<ThemeColor>) {
    match container {
        Value::Object(map) => {
            for (key, value) in map {
                visit(prefix, key, value, found);
            }
        }
        Value::Array(items) => {
            for (i, value) in items.iter().enumerate() {
                visit(prefix, &i.to_string(), value, found);
            }
        }
        _ => {}
    }
}

fn visit(prefix: &str, key: &str, value: &Value, found: &mut Vec<ThemeColor>) {
    let path = if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    };

    match value {
        Value::String(s) if is_hex_color(s) => {
            if let Ok(color) = Color::parse_with_alpha(s) {
                found.push(ThemeColor { path, color });
            }
        }
        Value::Object(_) => walk(value, &path, found),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if item.is_object() || item.is_array() {
                    walk(item, &format!("{path}[{i}]"), found);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn colors(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|h| Color::parse(h).unwrap()).collect()
    }

    fn strict() -> ThemeConfig {
        ThemeConfig {
            strict: true,
            ..ThemeConfig::default()
        }
    }

    const DARK: [&str; 8] = [
        "#1a1a2e", "#5c7cfa", "#ff922b", "#51cf66", "#ff6b6b", "#fcc419", "#cc5de8", "#22b8cf",
    ];

    // ── Format ──────────────────────────────────────────────────────

    #[test]
    fn format_from_str() {
        assert_eq!("vscode".parse::<ThemeFormat>().unwrap(), ThemeFormat::VsCode);
        assert_eq!(" Zed ".parse::<ThemeFormat>().unwrap(), ThemeFormat::Zed);
        let err = "sublime".parse::<ThemeFormat>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownFormat(ref s) if s == "sublime"));
    }

    #[test]
    fn format_names_round_trip() {
        for &format in ThemeFormat::all() {
            assert_eq!(format.to_string().parse::<ThemeFormat>().unwrap(), format);
        }
    }

    // ── map_to_theme ────────────────────────────────────────────────

    #[test]
    fn seven_colors_are_not_enough() {
        let seven = colors(&DARK[..7]);
        let err = map_to_theme(&seven, ThemeFormat::VsCode, &strict()).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InsufficientPalette {
                actual: 7,
                required: 8
            }
        ));
        assert!(err.to_string().contains("select more or larger image regions"));
    }

    #[test]
    fn seven_clean_colors_fail_without_strict_too() {
        let seven = colors(&[
            "#1e1e2e", "#f38ba8", "#a6e3a1", "#f9e2af", "#89b4fa", "#cba6f7", "#94e2d5",
        ]);
        let err = map_to_theme(&seven, ThemeFormat::Zed, &ThemeConfig::default()).unwrap_err();
        assert!(matches!(err, ThemeError::InsufficientPalette { actual: 7, .. }));
    }

    #[test]
    fn empty_palette_fails() {
        let err = map_to_theme(&[], ThemeFormat::Zed, &ThemeConfig::default()).unwrap_err();
        assert!(matches!(err, ThemeError::InsufficientPalette { actual: 0, .. }));
    }

    #[test]
    fn both_formats_share_roles() {
        let palette = colors(&DARK);
        let code = map_to_theme(&palette, ThemeFormat::VsCode, &strict()).unwrap();
        let zed = map_to_theme(&palette, ThemeFormat::Zed, &strict()).unwrap();
        assert_eq!(code.format(), ThemeFormat::VsCode);
        assert_eq!(zed.format(), ThemeFormat::Zed);
        assert_eq!(code.appearance(), Appearance::Dark);
        assert_eq!(zed.appearance(), Appearance::Dark);

        let code = code.to_value().unwrap();
        let zed = zed.to_value().unwrap();
        assert_eq!(
            code["colors"]["editor.background"],
            zed["themes"][0]["style"]["editor.background"]
        );
        assert_eq!(
            code["colors"]["editorCursor.foreground"],
            zed["themes"][0]["style"]["players"][0]["cursor"]
        );
    }

    #[test]
    fn optimized_palette_renders() {
        let palette = colors(&[
            "#0b132b", "#1c2541", "#3a506b", "#5bc0be", "#6fffe9", "#e63946", "#f1faee",
            "#a8dadc", "#457b9d", "#ffb703", "#fb8500", "#8338ec", "#3a86ff", "#06d6a0",
        ]);
        let doc = map_to_theme(&palette, ThemeFormat::VsCode, &ThemeConfig::default()).unwrap();
        let json = doc.to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"$schema\": \"vscode://schemas/color-theme\""));
    }

    // ── Traversal ───────────────────────────────────────────────────

    #[test]
    fn collects_nested_paths() {
        let doc = json!({
            "name": "x",
            "colors": { "editor.background": "#101010", "bad": "#12345" },
            "tokenColors": [
                { "scope": ["comment", "#ffffff"], "settings": { "foreground": "#ABCDEF80" } }
            ],
            "nothing": null,
            "count": 3
        });
        let found = collect_colors(&doc);
        let paths: Vec<&str> = found.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["colors.editor.background", "tokenColors[0].settings.foreground"]
        );
        assert_eq!(found[1].color, Color::rgba(0xab, 0xcd, 0xef, 0x80));
    }

    #[test]
    fn hex_pattern_accepts_both_lengths() {
        assert!(Regex::new(HEX_COLOR_PATTERN).is_ok());
        assert!(is_hex_color("#A1b2C3"));
        assert!(is_hex_color("#a1b2c3ff"));
        assert!(!is_hex_color("#a1b2c3f"));
        assert!(!is_hex_color(" #a1b2c3"));
    }

    #[test]
    fn rejects_short_and_unprefixed_hex() {
        let doc = json!({ "a": "#fff", "b": "ffffff", "c": "#fffffff", "d": "#ggg000" });
        assert!(collect_colors(&doc).is_empty());
    }

    #[test]
    fn zed_document_paths() {
        let doc = map_to_theme(&colors(&DARK), ThemeFormat::Zed, &strict()).unwrap();
        let found = doc.colors().unwrap();
        let has = |p: &str| found.iter().any(|c| c.path == p);
        assert!(has("themes[0].style.border"));
        assert!(has("themes[0].style.players[1].cursor"));
        assert!(has("themes[0].style.syntax.keyword.color"));
        // Nulls are not colors.
        assert!(!has("themes[0].style.panel.focused_border"));
        assert!(has("themes[0].style.border.transparent"));
    }

    #[test]
    fn vscode_document_paths() {
        let doc = map_to_theme(&colors(&DARK), ThemeFormat::VsCode, &strict()).unwrap();
        let found = doc.colors().unwrap();
        assert!(found.iter().any(|c| c.path == "colors.editor.background"));
        assert!(found.iter().any(|c| c.path == "tokenColors[0].settings.foreground"));
        // markup.italic has no foreground.
        assert!(!found.iter().any(|c| c.path == "tokenColors[13].settings.foreground"));
    }
}
