//! Zed theme serializer.
//!
//! Produces a v0.2.0 theme family holding a single variant. The variant's
//! `style` object mixes flat UI color keys with two nested tables:
//! `players` (collaborator cursors) and `syntax` (token styles).

use prism_color::Color;
use serde::Serialize;

use crate::config::ThemeConfig;
use crate::paint::{ColorMap, Paint, RoleMap, Slot, paint_table};
use crate::roles::{Appearance, ThemeRoles};
use crate::style::FontStyle;

pub const SCHEMA: &str = "https://zed.dev/schema/themes/v0.2.0.json";

/// A Zed theme family file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZedTheme {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub author: String,
    pub themes: Vec<ZedVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZedVariant {
    pub name: String,
    pub appearance: Appearance,
    pub style: ZedStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZedStyle {
    #[serde(flatten)]
    pub colors: ColorMap,
    pub players: Vec<PlayerStyle>,
    pub syntax: RoleMap<SyntaxStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerStyle {
    pub cursor: Color,
    pub background: Color,
    pub selection: Color,
}

/// One syntax token style. `None` fields render as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntaxStyle {
    pub color: Option<Color>,
    pub font_style: Option<&'static str>,
    pub font_weight: Option<u16>,
}

/// Build the theme for `roles`.
#[must_use]
pub fn build(roles: &ThemeRoles, config: &ThemeConfig) -> ZedTheme {
    let players = PLAYERS
        .iter()
        .filter_map(|paint| paint.resolve(roles))
        .map(|c| PlayerStyle {
            cursor: c,
            background: c,
            selection: c.with_alpha(PLAYER_SELECTION_ALPHA),
        })
        .collect();

    let syntax = RoleMap(
        SYNTAX
            .iter()
            .map(|rule| {
                let style = SyntaxStyle {
                    color: rule.paint.resolve(roles),
                    font_style: rule.style.map(FontStyle::zed),
                    font_weight: rule.weight,
                };
                (rule.key.to_string(), style)
            })
            .collect(),
    );

    ZedTheme {
        schema: SCHEMA.to_string(),
        name: config.name.clone(),
        author: config.author.clone(),
        themes: vec![ZedVariant {
            name: config.variant_name(roles.is_dark()),
            appearance: roles.appearance,
            style: ZedStyle {
                colors: paint_table(STYLE, roles),
                players,
                syntax,
            },
        }],
    }
}

// ---------------------------------------------------------------------------
// Paints
// ---------------------------------------------------------------------------

const BG: Paint = Paint::of(Slot::Background);
const FG: Paint = Paint::of(Slot::Foreground);
const BASE: Paint = Paint::of(Slot::Base);
const C2: Paint = Paint::of(Slot::C2);
const C3: Paint = Paint::of(Slot::C3);
const C4: Paint = Paint::of(Slot::C4);
const C5: Paint = Paint::of(Slot::C5);
const C6: Paint = Paint::of(Slot::C6);
const C7: Paint = Paint::of(Slot::C7);
const CLEAR: Paint = Paint::of(Slot::Transparent);

const BG_DARK: Paint = BASE.recede(0.92);
const BG_MEDIUM: Paint = BASE.recede(0.9);
const BG_LIGHT: Paint = BASE.recede(0.88);

const FG_MUTED: Paint = FG.recede(0.25);
const FG_DISABLED: Paint = FG.recede(0.45);

const BORDER: Paint = BG.advance(0.15);
const BORDER_VARIANT: Paint = BG.advance(0.08);
const BORDER_DISABLED: Paint = BG.advance(0.12);

// Terminal "bright" variants sink toward the background; "dim" ones rise.
const C2_BRIGHT: Paint = C2.recede(0.5);
const C3_BRIGHT: Paint = C3.recede(0.5);
const C4_BRIGHT: Paint = C4.recede(0.5);
const C5_BRIGHT: Paint = C5.recede(0.5);
const C6_BRIGHT: Paint = C6.recede(0.5);
const C7_BRIGHT: Paint = C7.recede(0.5);
const C2_DIM: Paint = C2.advance(0.25);
const C3_DIM: Paint = C3.advance(0.25);
const C4_DIM: Paint = C4.advance(0.25);
const C5_DIM: Paint = C5.advance(0.25);
const C6_DIM: Paint = C6.advance(0.25);
const C7_DIM: Paint = C7.advance(0.25);

const C2_BORDER: Paint = C2.recede(0.4);
const C3_BORDER: Paint = C3.recede(0.7);
const C4_BORDER: Paint = C4.recede(0.7);
const C5_BORDER: Paint = C5.recede(0.6);

const C2_HINT: Paint = C2.advance(0.1);
const C2_PREDICTIVE: Paint = C2.recede(0.3);

const TINT: u8 = 0x1a;

#[rustfmt::skip]
const STYLE: &[(&str, Paint)] = &[
    ("border", BORDER),
    ("border.variant", BORDER_VARIANT),
    ("border.focused", C2),
    ("border.selected", C2_BORDER),
    ("border.transparent", CLEAR),
    ("border.disabled", BORDER_DISABLED),
    ("elevated_surface.background", BG_DARK),
    ("surface.background", BG_DARK),
    ("background", BG_MEDIUM),
    ("element.background", BG_DARK),
    ("element.hover", BORDER_VARIANT),
    ("element.active", BG_LIGHT),
    ("element.selected", BG_LIGHT),
    ("element.disabled", BG_DARK),
    ("drop_target.background", C2.alpha(0x80)),
    ("ghost_element.background", CLEAR),
    ("ghost_element.hover", BORDER_VARIANT),
    ("ghost_element.active", BG_LIGHT),
    ("ghost_element.selected", BG_LIGHT),
    ("ghost_element.disabled", BG_DARK),
    ("text", FG),
    ("text.muted", FG_MUTED),
    ("text.placeholder", FG_DISABLED),
    ("text.disabled", FG_DISABLED),
    ("text.accent", C2),
    ("icon", FG),
    ("icon.muted", FG_MUTED),
    ("icon.disabled", FG_DISABLED),
    ("icon.placeholder", FG_MUTED),
    ("icon.accent", C2),
    ("status_bar.background", BG_MEDIUM),
    ("title_bar.background", BG_MEDIUM),
    ("title_bar.inactive_background", BG_DARK),
    ("toolbar.background", BG),
    ("tab_bar.background", BG_DARK),
    ("tab.inactive_background", BG_DARK),
    ("tab.active_background", BG),
    ("search.match_background", C2.alpha(0x66)),
    ("panel.background", BG_DARK),
    ("panel.focused_border", Paint::UNSET),
    ("pane.focused_border", Paint::UNSET),
    ("scrollbar.thumb.background", FG.alpha(0x4c)),
    ("scrollbar.thumb.hover_background", BORDER_VARIANT),
    ("scrollbar.thumb.border", BORDER_VARIANT),
    ("scrollbar.track.background", CLEAR),
    ("scrollbar.track.border", BG_DARK),
    ("editor.foreground", FG),
    ("editor.background", BG),
    ("editor.gutter.background", BG),
    ("editor.subheader.background", BG_DARK),
    ("editor.active_line.background", BG_DARK.alpha(0xbf)),
    ("editor.highlighted_line.background", BG_DARK),
    ("editor.line_number", FG_DISABLED),
    ("editor.active_line_number", FG),
    ("editor.hover_line_number", FG_MUTED),
    ("editor.invisible", FG_DISABLED),
    ("editor.wrap_guide", FG.alpha(0x0d)),
    ("editor.active_wrap_guide", FG.alpha(0x1a)),
    ("editor.document_highlight.read_background", C2.alpha(TINT)),
    ("editor.document_highlight.write_background", C5.alpha(0x66)),
    ("terminal.background", BG),
    ("terminal.foreground", FG),
    ("terminal.bright_foreground", FG),
    ("terminal.dim_foreground", BG),
    ("terminal.ansi.black", BG),
    ("terminal.ansi.bright_black", BG.advance(0.3)),
    ("terminal.ansi.dim_black", FG),
    ("terminal.ansi.red", C4),
    ("terminal.ansi.bright_red", C4_BRIGHT),
    ("terminal.ansi.dim_red", C4_DIM),
    ("terminal.ansi.green", C3),
    ("terminal.ansi.bright_green", C3_BRIGHT),
    ("terminal.ansi.dim_green", C3_DIM),
    ("terminal.ansi.yellow", C5),
    ("terminal.ansi.bright_yellow", C5_BRIGHT),
    ("terminal.ansi.dim_yellow", C5_DIM),
    ("terminal.ansi.blue", C2),
    ("terminal.ansi.bright_blue", C2_BRIGHT),
    ("terminal.ansi.dim_blue", C2_DIM),
    ("terminal.ansi.magenta", C6),
    ("terminal.ansi.bright_magenta", C6_BRIGHT),
    ("terminal.ansi.dim_magenta", C6_DIM),
    ("terminal.ansi.cyan", C7),
    ("terminal.ansi.bright_cyan", C7_BRIGHT),
    ("terminal.ansi.dim_cyan", C7_DIM),
    ("terminal.ansi.white", FG),
    ("terminal.ansi.bright_white", FG.advance(0.2)),
    ("terminal.ansi.dim_white", FG.recede(0.4)),
    ("link_text.hover", C2),
    ("version_control.added", C3),
    ("version_control.modified", C5),
    ("version_control.deleted", C4),
    ("version_control.conflict_marker.ours", C3.alpha(TINT)),
    ("version_control.conflict_marker.theirs", C2.alpha(TINT)),
    ("conflict", C5),
    ("conflict.background", C5.alpha(TINT)),
    ("conflict.border", C5_BORDER),
    ("created", C3),
    ("created.background", C3.alpha(TINT)),
    ("created.border", C3_BORDER),
    ("deleted", C4),
    ("deleted.background", C4.alpha(TINT)),
    ("deleted.border", C4_BORDER),
    ("error", C4),
    ("error.background", C4.alpha(TINT)),
    ("error.border", C4_BORDER),
    ("hidden", FG_DISABLED),
    ("hidden.background", FG_DISABLED.alpha(TINT)),
    ("hidden.border", BORDER_DISABLED),
    ("hint", C2_HINT),
    ("hint.background", C2.alpha(TINT)),
    ("hint.border", C2_BORDER),
    ("ignored", FG_DISABLED),
    ("ignored.background", FG_DISABLED.alpha(TINT)),
    ("ignored.border", BORDER),
    ("info", C2),
    ("info.background", C2.alpha(TINT)),
    ("info.border", C2_BORDER),
    ("modified", C5),
    ("modified.background", C5.alpha(TINT)),
    ("modified.border", C5_BORDER),
    ("predictive", C2_PREDICTIVE),
    ("predictive.background", C2.alpha(TINT)),
    ("predictive.border", C3_BORDER),
    ("renamed", C2),
    ("renamed.background", C2.alpha(TINT)),
    ("renamed.border", C2_BORDER),
    ("success", C3),
    ("success.background", C3.alpha(TINT)),
    ("success.border", C3_BORDER),
    ("unreachable", FG_MUTED),
    ("unreachable.background", FG_MUTED.alpha(TINT)),
    ("unreachable.border", BORDER),
    ("warning", C5),
    ("warning.background", C5.alpha(TINT)),
    ("warning.border", C5_BORDER),
];

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

const PLAYER_SELECTION_ALPHA: u8 = 0x3d;

const PLAYERS: [Paint; 8] = [C2, C4, C5, C6, C7, C4, C5, C3];

// ---------------------------------------------------------------------------
// Syntax
// ---------------------------------------------------------------------------

struct SyntaxRule {
    key: &'static str,
    paint: Paint,
    style: Option<FontStyle>,
    weight: Option<u16>,
}

const fn token(key: &'static str, paint: Paint) -> SyntaxRule {
    SyntaxRule {
        key,
        paint,
        style: None,
        weight: None,
    }
}

const fn styled(key: &'static str, paint: Paint, style: FontStyle) -> SyntaxRule {
    SyntaxRule {
        key,
        paint,
        style: Some(style),
        weight: None,
    }
}

const fn weighted(key: &'static str, paint: Paint, weight: u16) -> SyntaxRule {
    SyntaxRule {
        key,
        paint,
        style: None,
        weight: Some(weight),
    }
}

const SYNTAX: &[SyntaxRule] = &[
    token("attribute", C2),
    token("boolean", C5),
    token("comment", FG.recede(0.6)),
    token("comment.doc", FG.recede(0.4)),
    token("constant", C5),
    token("constructor", C2),
    token("embedded", FG),
    token("emphasis", C2),
    weighted("emphasis.strong", C5, 700),
    token("enum", C4),
    token("function", C2),
    token("hint", C2_HINT),
    token("keyword", C6),
    token("label", C2),
    styled("link_text", C2, FontStyle::empty()),
    token("link_uri", C7),
    token("namespace", FG),
    token("number", C5),
    token("operator", C7),
    styled("predictive", C2_PREDICTIVE, FontStyle::ITALIC),
    token("preproc", FG),
    token("primary", FG),
    token("property", C4),
    token("punctuation", FG),
    token("punctuation.bracket", FG.advance(0.1)),
    token("punctuation.delimiter", FG.advance(0.1)),
    token("punctuation.list_marker", C4),
    token("punctuation.markup", C4),
    token("punctuation.special", C4.recede(0.2)),
    token("selector", C5),
    token("selector.pseudo", C2),
    token("string", C3),
    token("string.escape", FG.recede(0.4)),
    token("string.regex", C5),
    token("string.special", C5),
    token("string.special.symbol", C5),
    token("tag", C2),
    token("text.literal", C3),
    weighted("title", C4, 400),
    token("type", C7),
    token("variable", FG),
    token("variable.special", C5),
    token("variant", C2),
];
