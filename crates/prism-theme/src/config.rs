//! Theme generation settings.

use prism_palette::OptimizerConfig;
use serde::{Deserialize, Serialize};

/// Everything that parameterizes a theme besides the palette itself.
///
/// Deserializes with defaults for missing fields, so a config file only
/// needs the values it changes:
///
/// ```toml
/// name = "Harbor Theme"
/// strict = true
///
/// [optimizer]
/// scheme = "analogous"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name. Zed variant names drop a trailing " Theme" and append
    /// "Dark" or "Light".
    pub name: String,
    /// Author field of Zed themes.
    pub author: String,
    /// Use the palette as given instead of optimizing it first.
    pub strict: bool,
    pub optimizer: OptimizerConfig,
    /// Minimum contrast of the foreground against the background.
    pub foreground_contrast: f64,
    /// Target contrast for the two primary accents.
    pub accent_contrast: f64,
    /// Target contrast for the five semantic colors.
    pub semantic_contrast: f64,
    /// Step budget when pushing accents toward their targets.
    pub accent_max_iterations: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Custom Palette Theme".to_string(),
            author: "Image to Palette Generator".to_string(),
            strict: false,
            optimizer: OptimizerConfig::default(),
            foreground_contrast: 7.0,
            accent_contrast: 4.5,
            semantic_contrast: 3.5,
            accent_max_iterations: 10,
        }
    }
}

impl ThemeConfig {
    /// Name used for a single Zed theme variant, e.g. "Custom Palette Dark".
    #[must_use]
    pub fn variant_name(&self, dark: bool) -> String {
        let base = self
            .name
            .strip_suffix(" Theme")
            .unwrap_or(&self.name)
            .trim_end();
        let mode = if dark { "Dark" } else { "Light" };
        if base.is_empty() {
            mode.to_string()
        } else {
            format!("{base} {mode}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.name, "Custom Palette Theme");
        assert!(!config.strict);
        assert_eq!(config.optimizer.target_count, 12);
        assert_eq!(config.accent_max_iterations, 10);
    }

    #[test]
    fn variant_names() {
        let config = ThemeConfig::default();
        assert_eq!(config.variant_name(true), "Custom Palette Dark");
        assert_eq!(config.variant_name(false), "Custom Palette Light");

        let named = ThemeConfig {
            name: "Harbor".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(named.variant_name(true), "Harbor Dark");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ThemeConfig =
            serde_json::from_str(r#"{"strict": true, "optimizer": {"target_count": 9}}"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.optimizer.target_count, 9);
        assert_eq!(config.name, "Custom Palette Theme");
        assert_eq!(config.optimizer.max_working_set, 50);
    }
}
