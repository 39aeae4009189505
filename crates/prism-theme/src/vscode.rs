//! VS Code color theme serializer.
//!
//! Produces the `vscode://schemas/color-theme` shape: workbench colors in
//! `colors` and TextMate scope rules in `tokenColors`. Every value is a
//! [`Paint`] resolved against the shared [`ThemeRoles`].

use prism_color::Color;
use serde::Serialize;

use crate::config::ThemeConfig;
use crate::paint::{ColorMap, Paint, Slot, paint_table};
use crate::roles::{Appearance, ThemeRoles};
use crate::style::FontStyle;

pub const SCHEMA: &str = "vscode://schemas/color-theme";

/// A complete VS Code color theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VsCodeTheme {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(rename = "type")]
    pub appearance: Appearance,
    pub colors: ColorMap,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

/// One `tokenColors` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenColor {
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// Build the theme for `roles`.
#[must_use]
pub fn build(roles: &ThemeRoles, config: &ThemeConfig) -> VsCodeTheme {
    let token_colors = TOKEN_RULES
        .iter()
        .map(|rule| TokenColor {
            scope: rule.scopes.iter().map(ToString::to_string).collect(),
            settings: TokenSettings {
                foreground: rule.paint.and_then(|p| p.resolve(roles)),
                font_style: rule.style.vscode(),
            },
        })
        .collect();

    VsCodeTheme {
        schema: SCHEMA.to_string(),
        name: config.name.clone(),
        appearance: roles.appearance,
        colors: paint_table(WORKBENCH, roles),
        token_colors,
    }
}

// ---------------------------------------------------------------------------
// Paints
// ---------------------------------------------------------------------------

const BG: Paint = Paint::of(Slot::Background);
const FG: Paint = Paint::of(Slot::Foreground);
const BASE: Paint = Paint::of(Slot::Base);
const C1: Paint = Paint::of(Slot::C1);
const C2: Paint = Paint::of(Slot::C2);
const C3: Paint = Paint::of(Slot::C3);
const C4: Paint = Paint::of(Slot::C4);
const C5: Paint = Paint::of(Slot::C5);
const C6: Paint = Paint::of(Slot::C6);
const C7: Paint = Paint::of(Slot::C7);
const BUTTON_FG: Paint = Paint::of(Slot::ButtonText);

// Chrome backgrounds, from the untouched base color.
const BG_VERY_DARK: Paint = BASE.recede(0.95);
const BG_DARK: Paint = BASE.recede(0.92);
const BG_MEDIUM: Paint = BASE.recede(0.9);
const BG_LIGHT: Paint = BASE.recede(0.88);
const BG_LIGHTER: Paint = BASE.recede(0.85);
const BG_INACTIVE: Paint = BASE.recede(0.97);

const C2_DEEP: Paint = C2.recede(0.8);
const C3_DEEP: Paint = C3.recede(0.8);
const C4_DEEP: Paint = C4.recede(0.8);
const C5_DEEP: Paint = C5.recede(0.8);

const FG_30: Paint = FG.alpha(0x30);
const FG_50: Paint = FG.alpha(0x50);
const FG_60: Paint = FG.alpha(0x60);
const FG_70: Paint = FG.alpha(0x70);

const C1_20: Paint = C1.alpha(0x20);
const C1_30: Paint = C1.alpha(0x30);
const C1_40: Paint = C1.alpha(0x40);
const C2_30: Paint = C2.alpha(0x30);
const C2_40: Paint = C2.alpha(0x40);
const C2_60: Paint = C2.alpha(0x60);

#[rustfmt::skip]
const WORKBENCH: &[(&str, Paint)] = &[
    ("editor.background", BG),
    ("editor.foreground", FG),
    ("foreground", FG),
    ("disabledForeground", FG_60),
    ("focusBorder", C2_60),
    ("descriptionForeground", FG_70),
    ("errorForeground", C4),
    ("icon.foreground", C1),

    ("widget.border", C1_40),
    ("selection.background", C2.alpha(0x50)),
    ("sash.hoverBorder", C2),

    ("activityBar.background", BG_VERY_DARK),
    ("activityBar.foreground", C1),
    ("activityBar.activeBorder", C2),
    ("activityBarBadge.background", C2),
    ("activityBarBadge.foreground", FG),

    ("sideBar.background", BG_DARK),
    ("sideBar.foreground", FG),
    ("sideBar.border", C1_20),
    ("sideBarTitle.foreground", C1),

    ("statusBar.background", BG_VERY_DARK),
    ("statusBar.foreground", FG),
    ("statusBar.noFolderBackground", C3_DEEP),
    ("statusBar.debuggingBackground", C4),

    ("titleBar.activeBackground", BG_VERY_DARK),
    ("titleBar.activeForeground", FG),
    ("titleBar.inactiveBackground", BG_INACTIVE),
    ("titleBar.inactiveForeground", FG.alpha(0x99)),

    ("tab.activeBackground", BG),
    ("tab.activeForeground", FG),
    ("tab.inactiveBackground", BG_VERY_DARK),
    ("tab.inactiveForeground", FG.alpha(0xaa)),
    ("tab.activeBorder", C2),
    ("tab.border", C1_20),
    ("editorGroupHeader.tabsBackground", BG_VERY_DARK),

    ("panel.background", BG),
    ("panel.border", C1_40),
    ("panelTitle.activeBorder", C2),

    ("terminal.foreground", FG),
    ("terminal.ansiBlack", BASE.darken(0.9, 0.2)),
    ("terminal.ansiRed", C4),
    ("terminal.ansiGreen", C3),
    ("terminal.ansiYellow", C5),
    ("terminal.ansiBlue", C2),
    ("terminal.ansiMagenta", C6),
    ("terminal.ansiCyan", C7),
    ("terminal.ansiWhite", FG),
    ("terminal.ansiBrightBlack", FG.recede(0.3)),
    ("terminal.ansiBrightRed", C4.advance(0.2)),
    ("terminal.ansiBrightGreen", C3.advance(0.2)),
    ("terminal.ansiBrightYellow", C5.advance(0.2)),
    ("terminal.ansiBrightBlue", C2.advance(0.2)),
    ("terminal.ansiBrightMagenta", C6.advance(0.2)),
    ("terminal.ansiBrightCyan", C7.advance(0.2)),
    ("terminal.ansiBrightWhite", FG.advance(0.2)),

    ("input.background", BG_LIGHTER),
    ("input.border", C1_40),
    ("input.foreground", FG),
    ("input.placeholderForeground", FG_50),
    ("inputOption.activeBorder", C2),
    ("inputOption.activeBackground", C2_30),
    ("inputOption.activeForeground", FG),
    ("inputValidation.errorBackground", C4_DEEP),
    ("inputValidation.errorBorder", C4),
    ("inputValidation.errorForeground", FG),
    ("inputValidation.warningBackground", C5_DEEP),
    ("inputValidation.warningBorder", C5),
    ("inputValidation.warningForeground", FG),
    ("inputValidation.infoBackground", C2_DEEP),
    ("inputValidation.infoBorder", C2),
    ("inputValidation.infoForeground", FG),

    ("dropdown.background", BG_LIGHT),
    ("dropdown.foreground", FG),
    ("dropdown.border", C1_40),
    ("dropdown.listBackground", BG_LIGHTER),

    ("quickInput.background", BG_LIGHT),
    ("quickInput.foreground", FG),
    ("quickInputList.focusBackground", C2_40),
    ("quickInputList.focusForeground", FG),
    ("quickInputList.focusIconForeground", C2),
    ("quickInputTitle.background", BG_DARK),

    ("list.activeSelectionBackground", C2_40),
    ("list.activeSelectionForeground", FG),
    ("list.inactiveSelectionBackground", C1_30),
    ("list.hoverBackground", C1_20),
    ("list.focusBackground", C2_30),

    ("button.background", C2),
    ("button.foreground", BUTTON_FG),
    ("button.hoverBackground", C2.advance(0.1)),
    ("button.hoverForeground", BUTTON_FG),
    ("button.secondaryBackground", BG_LIGHT),
    ("button.secondaryForeground", FG),
    ("button.secondaryHoverBackground", BG_LIGHTER),

    ("badge.background", C2),
    ("badge.foreground", BUTTON_FG),

    ("breadcrumb.foreground", FG_70),
    ("breadcrumb.focusForeground", FG),
    ("breadcrumb.activeSelectionForeground", C2),
    ("breadcrumb.background", BG),

    ("scrollbarSlider.background", C1_40),
    ("scrollbarSlider.hoverBackground", C1.alpha(0x60)),
    ("scrollbarSlider.activeBackground", C2_60),

    ("editorLineNumber.foreground", FG_50),
    ("editorLineNumber.activeForeground", C2),
    ("editorCursor.foreground", C2),
    ("editor.selectionBackground", C2_40),
    ("editor.inactiveSelectionBackground", C1_30),
    ("editor.findMatchBackground", C5.alpha(0x40)),
    ("editor.findMatchHighlightBackground", C5.alpha(0x20)),
    ("editorBracketMatch.background", C2.alpha(0x20)),
    ("editorBracketMatch.border", C2),
    ("editorBracketHighlight.foreground1", C2.alpha(0x80)),
    ("editorBracketHighlight.foreground2", C3.alpha(0x80)),
    ("editorBracketHighlight.foreground3", C5.alpha(0x80)),
    ("editorBracketHighlight.foreground4", C6.alpha(0x80)),
    ("editorBracketHighlight.foreground5", C7.alpha(0x80)),
    ("editorBracketHighlight.foreground6", C1.alpha(0x80)),
    ("editorBracketPairGuide.activeBackground1", C2),
    ("editorBracketPairGuide.activeBackground2", C3),
    ("editorBracketPairGuide.activeBackground3", C5),
    ("editorBracketPairGuide.activeBackground4", C6),
    ("editorBracketPairGuide.activeBackground5", C7),
    ("editorBracketPairGuide.activeBackground6", C1),
    ("editorBracketPairGuide.background1", C2_30),
    ("editorBracketPairGuide.background2", C3.alpha(0x30)),
    ("editorBracketPairGuide.background3", C5.alpha(0x30)),
    ("editorBracketPairGuide.background4", C6.alpha(0x30)),
    ("editorBracketPairGuide.background5", C7.alpha(0x30)),
    ("editorBracketPairGuide.background6", C1_30),
    ("editorWhitespace.foreground", FG_30),
    ("editorWidget.background", BG_LIGHT),
    ("editorWidget.foreground", FG),
    ("editorWidget.border", C1_40),
    ("editorWidget.resizeBorder", C2),
    ("editorSuggestWidget.background", BG_LIGHT),
    ("editorSuggestWidget.foreground", FG),
    ("editorSuggestWidget.border", C1_40),
    ("editorSuggestWidget.highlightForeground", C2),
    ("editorSuggestWidget.focusHighlightForeground", C2),
    ("editorSuggestWidget.selectedBackground", C2_40),
    ("editorSuggestWidget.selectedForeground", FG),
    ("editorSuggestWidget.selectedIconForeground", C2),
    ("editorHoverWidget.background", BG_LIGHT),
    ("editorHoverWidget.foreground", FG),
    ("editorHoverWidget.border", C1_40),
    ("editorHoverWidget.highlightForeground", C2),
    ("editorHoverWidget.statusBarBackground", BG_DARK),
    ("editorError.foreground", C4),
    ("editorWarning.foreground", C5),
    ("editorInfo.foreground", C2),
    ("editorGutter.addedBackground", C3),
    ("editorGutter.modifiedBackground", C5),
    ("editorGutter.deletedBackground", C4),

    ("gitDecoration.addedResourceForeground", C3),
    ("gitDecoration.modifiedResourceForeground", C5),
    ("gitDecoration.deletedResourceForeground", C4),
    ("gitDecoration.untrackedResourceForeground", C7),
    ("gitDecoration.ignoredResourceForeground", FG_60),

    ("peekView.border", C2),
    ("peekViewEditor.background", BG_LIGHT),
    ("peekViewResult.background", BG_DARK),
    ("peekViewTitle.background", BG_VERY_DARK),

    ("notificationCenter.border", C1_40),
    ("notificationCenterHeader.background", BG_DARK),
    ("notifications.background", BG_LIGHT),
    ("notifications.border", C1_40),
    ("notificationLink.foreground", C2),

    ("settings.headerForeground", FG),
    ("settings.modifiedItemIndicator", C2),
    ("settings.focusedRowBackground", BG_MEDIUM),
    ("settings.rowHoverBackground", BG_DARK),
    ("settings.focusedRowBorder", C2_60),
    ("settings.numberInputBackground", BG),
    ("settings.numberInputForeground", C6),
    ("settings.numberInputBorder", C1_40),
    ("settings.textInputBackground", BG),
    ("settings.textInputForeground", C2),
    ("settings.textInputBorder", C1_40),
    ("settings.checkboxBackground", BG),
    ("settings.checkboxForeground", C5),
    ("settings.checkboxBorder", C1_40),
    ("settings.dropdownBackground", BG),
    ("settings.dropdownForeground", C1),
    ("settings.dropdownBorder", C1_40),
    ("settings.dropdownListBorder", C1_40),
];

// ---------------------------------------------------------------------------
// Token rules
// ---------------------------------------------------------------------------

struct TokenRule {
    scopes: &'static [&'static str],
    paint: Option<Paint>,
    style: FontStyle,
}

const fn rule(scopes: &'static [&'static str], paint: Paint, style: FontStyle) -> TokenRule {
    TokenRule {
        scopes,
        paint: Some(paint),
        style,
    }
}

const fn style_only(scopes: &'static [&'static str], style: FontStyle) -> TokenRule {
    TokenRule {
        scopes,
        paint: None,
        style,
    }
}

const PLAIN: FontStyle = FontStyle::empty();

const TOKEN_RULES: &[TokenRule] = &[
    rule(&["comment", "punctuation.definition.comment"], FG_60, FontStyle::ITALIC),
    rule(
        &[
            "keyword",
            "keyword.control",
            "keyword.operator.new",
            "keyword.operator.expression",
            "keyword.other",
        ],
        C6,
        FontStyle::BOLD,
    ),
    rule(
        &["storage", "storage.type", "storage.modifier", "entity.name.tag", "meta.tag"],
        C6,
        PLAIN,
    ),
    rule(
        &[
            "string",
            "string.quoted",
            "string.template",
            "string.regexp",
            "punctuation.definition.string",
            "support.constant.property-value",
            "support.constant.property-value.css",
            "markup.inline.raw",
            "markup.fenced_code",
            "markup.inserted",
        ],
        C3,
        PLAIN,
    ),
    rule(
        &[
            "constant.numeric",
            "constant.character",
            "number",
            "constant.other",
            "variable.other.constant",
            "support.constant",
            "entity.other.inherited-class",
            "support.class",
            "support.type",
        ],
        C5,
        PLAIN,
    ),
    rule(
        &[
            "constant.language",
            "constant.language.boolean",
            "constant.language.null",
            "entity.name.class",
            "entity.name.type",
        ],
        C5,
        FontStyle::BOLD,
    ),
    rule(
        &["variable", "identifier", "variable.other.readwrite", "meta.definition.variable"],
        FG,
        PLAIN,
    ),
    rule(
        &[
            "variable.other.property",
            "variable.other.object.property",
            "meta.object-literal.key",
            "support.variable",
            "support.other.variable",
            "support.type.property-name",
            "support.type.property-name.css",
        ],
        C1,
        PLAIN,
    ),
    rule(
        &[
            "entity.name.function",
            "meta.function-call",
            "meta.method-call",
            "meta.method",
            "meta.parameter",
            "variable.parameter",
            "entity.other.attribute-name",
            "entity.name.module",
            "support.module",
            "support.function",
            "support.node",
        ],
        C2,
        PLAIN,
    ),
    rule(
        &[
            "punctuation.definition.begin.bracket",
            "punctuation.definition.end.bracket",
            "punctuation.definition.begin.bracket.round",
            "punctuation.definition.end.bracket.round",
            "punctuation.definition.begin.bracket.square",
            "punctuation.definition.end.bracket.square",
            "punctuation.definition.begin.bracket.curly",
            "punctuation.definition.end.bracket.curly",
            "meta.brace",
            "punctuation.section.brackets",
            "punctuation.section.parens",
            "punctuation.section.braces",
        ],
        FG.alpha_by(0x90, 0x80),
        PLAIN,
    ),
    rule(
        &[
            "punctuation",
            "punctuation.terminator",
            "punctuation.separator",
            "punctuation.separator.comma",
            "punctuation.definition",
        ],
        FG.alpha_by(0x70, 0x60),
        PLAIN,
    ),
    rule(&["keyword.operator", "punctuation.operator"], C6.advance(0.05), PLAIN),
    rule(&["markup.heading", "entity.name.section"], C2, FontStyle::BOLD),
    style_only(&["markup.italic"], FontStyle::ITALIC),
    style_only(&["markup.bold"], FontStyle::BOLD),
    rule(&["markup.underline.link", "string.other.link"], C2, FontStyle::UNDERLINE),
    rule(&["markup.deleted"], C4, PLAIN),
    rule(&["invalid", "invalid.illegal"], C4, FontStyle::BOLD),
    rule(&["invalid.deprecated"], C4.alpha(0x80), FontStyle::ITALIC),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn roles(appearance: Appearance) -> ThemeRoles {
        let c = |hex: &str| Color::parse(hex).unwrap();
        ThemeRoles {
            appearance,
            average_luminance: 0.3,
            base: c("#203040"),
            background: c("#05080a"),
            foreground: c("#d0d8e0"),
            accents: [
                c("#80b0ff"),
                c("#ffb070"),
                c("#90e090"),
                c("#ff7080"),
                c("#f0d070"),
                c("#d090f0"),
                c("#70d0d0"),
            ],
        }
    }

    fn color(theme: &VsCodeTheme, key: &str) -> Color {
        theme.colors.get(key).copied().flatten().unwrap()
    }

    // ── Workbench colors ────────────────────────────────────────────

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = WORKBENCH.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), WORKBENCH.len());
    }

    #[test]
    fn core_roles_pass_through() {
        let r = roles(Appearance::Dark);
        let theme = build(&r, &ThemeConfig::default());
        assert_eq!(color(&theme, "editor.background"), r.background);
        assert_eq!(color(&theme, "editor.foreground"), r.foreground);
        assert_eq!(color(&theme, "editorCursor.foreground"), r.accent(2));
        assert_eq!(color(&theme, "terminal.ansiRed"), r.accent(4));
        assert_eq!(color(&theme, "terminal.ansiGreen"), r.accent(3));
    }

    #[test]
    fn every_color_is_set() {
        let theme = build(&roles(Appearance::Dark), &ThemeConfig::default());
        assert!(theme.colors.0.iter().all(|(_, v)| v.is_some()));
    }

    #[test]
    fn chrome_derives_from_base_color() {
        let r = roles(Appearance::Dark);
        let theme = build(&r, &ThemeConfig::default());
        assert_eq!(color(&theme, "activityBar.background"), r.base.darken(0.95));
        assert_eq!(color(&theme, "sideBar.background"), r.base.darken(0.92));
        assert_eq!(color(&theme, "terminal.ansiBlack"), r.base.darken(0.9));

        let r = roles(Appearance::Light);
        let theme = build(&r, &ThemeConfig::default());
        assert_eq!(color(&theme, "activityBar.background"), r.base.lighten(0.95));
        assert_eq!(color(&theme, "terminal.ansiBlack"), r.base.darken(0.2));
    }

    #[test]
    fn bright_terminal_colors_advance() {
        let dark = roles(Appearance::Dark);
        let theme = build(&dark, &ThemeConfig::default());
        assert_eq!(color(&theme, "terminal.ansiBrightRed"), dark.accent(4).lighten(0.2));
        assert_eq!(color(&theme, "terminal.ansiBrightBlack"), dark.foreground.darken(0.3));

        let light = roles(Appearance::Light);
        let theme = build(&light, &ThemeConfig::default());
        assert_eq!(color(&theme, "terminal.ansiBrightRed"), light.accent(4).darken(0.2));
    }

    #[test]
    fn alpha_variants() {
        let r = roles(Appearance::Dark);
        let theme = build(&r, &ThemeConfig::default());
        assert_eq!(color(&theme, "widget.border"), r.accent(1).with_alpha(0x40));
        assert_eq!(color(&theme, "tab.inactiveForeground").alpha, 0xaa);
        assert_eq!(color(&theme, "selection.background").to_hex(), "#ffb07050");
    }

    #[test]
    fn button_text() {
        let r = roles(Appearance::Dark);
        let theme = build(&r, &ThemeConfig::default());
        assert_eq!(color(&theme, "button.foreground"), r.background);

        let r = roles(Appearance::Light);
        let theme = build(&r, &ThemeConfig::default());
        assert_eq!(color(&theme, "badge.foreground"), r.base.darken(0.9));
    }

    // ── Token rules ─────────────────────────────────────────────────

    #[test]
    fn nineteen_token_rules() {
        let theme = build(&roles(Appearance::Dark), &ThemeConfig::default());
        assert_eq!(theme.token_colors.len(), 19);
    }

    #[test]
    fn comment_rule() {
        let r = roles(Appearance::Dark);
        let theme = build(&r, &ThemeConfig::default());
        let comment = &theme.token_colors[0];
        assert_eq!(comment.scope, vec!["comment", "punctuation.definition.comment"]);
        assert_eq!(comment.settings.foreground, Some(r.foreground.with_alpha(0x60)));
        assert_eq!(comment.settings.font_style.as_deref(), Some("italic"));
    }

    #[test]
    fn punctuation_alpha_depends_on_appearance() {
        let dark = build(&roles(Appearance::Dark), &ThemeConfig::default());
        let light = build(&roles(Appearance::Light), &ThemeConfig::default());
        let alpha = |t: &VsCodeTheme, i: usize| t.token_colors[i].settings.foreground.unwrap().alpha;
        assert_eq!((alpha(&dark, 9), alpha(&light, 9)), (0x90, 0x80));
        assert_eq!((alpha(&dark, 10), alpha(&light, 10)), (0x70, 0x60));
    }

    // ── JSON shape ──────────────────────────────────────────────────

    #[test]
    fn serialized_shape() {
        let theme = build(&roles(Appearance::Light), &ThemeConfig::default());
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["$schema"], "vscode://schemas/color-theme");
        assert_eq!(json["name"], "Custom Palette Theme");
        assert_eq!(json["type"], "light");
        assert_eq!(json["colors"]["editor.background"], "#05080a");

        // Style-only rules carry no foreground key at all.
        let italic = &json["tokenColors"][13]["settings"];
        assert_eq!(italic["fontStyle"], "italic");
        assert!(italic.get("foreground").is_none());

        // Color-only rules carry no fontStyle key.
        assert!(json["tokenColors"][2]["settings"].get("fontStyle").is_none());
    }

    #[test]
    fn colors_keep_table_order() {
        let theme = build(&roles(Appearance::Dark), &ThemeConfig::default());
        let text = serde_json::to_string(&theme).unwrap();
        let first = text.find("\"editor.background\"").unwrap();
        let last = text.find("\"settings.dropdownListBorder\"").unwrap();
        assert!(first < last);
        assert!(text.starts_with("{\"$schema\""));
    }
}
