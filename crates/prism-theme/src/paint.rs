//! Declarative role transforms.
//!
//! Every color in a theme file is one of a handful of role colors, moved
//! toward or away from the background and optionally given an alpha. A
//! [`Paint`] names that recipe; the schema tables in `vscode.rs` and
//! `zed.rs` are lists of `(key, Paint)` pairs resolved against one
//! [`ThemeRoles`].
//!
//! ```text
//!   Paint::of(Slot::C2).recede(0.4).alpha(0x1a)
//!         │              │            │
//!         slot           shift        opacity
//! ```

use prism_color::Color;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::roles::ThemeRoles;

/// The role a paint starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Background,
    Foreground,
    /// Palette color 0 before any repair.
    Base,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    /// Text on accent-filled buttons.
    ButtonText,
    /// `#00000000`.
    Transparent,
    /// No color; rendered as `null`.
    Unset,
}

/// How the slot color is moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shift {
    None,
    /// Toward the background: darken on dark themes, lighten on light.
    Recede(f64),
    /// Away from the background.
    Advance(f64),
    /// Darken on both appearances, by a different amount on each.
    Darken { dark: f64, light: f64 },
}

/// Alpha applied after shifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    Opaque,
    Alpha(u8),
    /// Alpha depending on appearance.
    ByAppearance { dark: u8, light: u8 },
}

/// A recipe for one theme color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub slot: Slot,
    pub shift: Shift,
    pub opacity: Opacity,
}

impl Paint {
    /// A JSON `null`.
    pub const UNSET: Self = Self::of(Slot::Unset);

    /// The slot color, unchanged.
    #[must_use]
    pub const fn of(slot: Slot) -> Self {
        Self {
            slot,
            shift: Shift::None,
            opacity: Opacity::Opaque,
        }
    }

    #[must_use]
    pub const fn recede(self, amount: f64) -> Self {
        Self {
            shift: Shift::Recede(amount),
            ..self
        }
    }

    #[must_use]
    pub const fn advance(self, amount: f64) -> Self {
        Self {
            shift: Shift::Advance(amount),
            ..self
        }
    }

    #[must_use]
    pub const fn darken(self, dark: f64, light: f64) -> Self {
        Self {
            shift: Shift::Darken { dark, light },
            ..self
        }
    }

    #[must_use]
    pub const fn alpha(self, alpha: u8) -> Self {
        Self {
            opacity: Opacity::Alpha(alpha),
            ..self
        }
    }

    #[must_use]
    pub const fn alpha_by(self, dark: u8, light: u8) -> Self {
        Self {
            opacity: Opacity::ByAppearance { dark, light },
            ..self
        }
    }

    /// Resolve against `roles`. `None` only for [`Slot::Unset`].
    #[must_use]
    pub fn resolve(self, roles: &ThemeRoles) -> Option<Color> {
        let dark = roles.is_dark();

        let start = match self.slot {
            Slot::Background => roles.background,
            Slot::Foreground => roles.foreground,
            Slot::Base => roles.base,
            Slot::C1 => roles.accent(1),
            Slot::C2 => roles.accent(2),
            Slot::C3 => roles.accent(3),
            Slot::C4 => roles.accent(4),
            Slot::C5 => roles.accent(5),
            Slot::C6 => roles.accent(6),
            Slot::C7 => roles.accent(7),
            Slot::ButtonText => roles.button_text(),
            Slot::Transparent => return Some(Color::TRANSPARENT),
            Slot::Unset => return None,
        };

        let shifted = match self.shift {
            Shift::None => start,
            Shift::Recede(amount) => roles.recede(start, amount),
            Shift::Advance(amount) => roles.advance(start, amount),
            Shift::Darken { dark: d, light: l } => start.darken(if dark { d } else { l }),
        };

        Some(match self.opacity {
            Opacity::Opaque => shifted,
            Opacity::Alpha(a) => shifted.with_alpha(a),
            Opacity::ByAppearance { dark: d, light: l } => {
                shifted.with_alpha(if dark { d } else { l })
            }
        })
    }
}

// ---------------------------------------------------------------------------
// RoleMap
// ---------------------------------------------------------------------------

/// String-keyed map that serializes as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMap<V>(pub Vec<(String, V)>);

impl<V> RoleMap<V> {
    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> Default for RoleMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V: Serialize> Serialize for RoleMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Role keys mapped to colors; `None` renders as `null`.
pub type ColorMap = RoleMap<Option<Color>>;

/// Resolve a `(key, paint)` table into a [`ColorMap`].
#[must_use]
pub fn paint_table(table: &[(&str, Paint)], roles: &ThemeRoles) -> ColorMap {
    RoleMap(
        table
            .iter()
            .map(|&(key, paint)| (key.to_string(), paint.resolve(roles)))
            .collect(),
    )
}
