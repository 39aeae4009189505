// SPDX-License-Identifier: MIT
//
// ANSI escape sequences for previewing colors in a terminal.
//
// Pure functions that write 24-bit SGR sequences to any `impl Write`. The
// CLI uses them to paint swatches next to hex codes; nothing here decides
// whether the output is a terminal.
use std::io::{self, Write};

use crate::color::Color;
use crate::metrics::readable_extreme;

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground (text) color as 24-bit `TrueColor`. Alpha is ignored.
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set the background color as 24-bit `TrueColor`. Alpha is ignored.
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Paint `label` on a block of `color`, then reset.
///
/// The label text is drawn in black or white depending on which contrasts
/// more with the swatch.
pub fn swatch(w: &mut impl Write, color: Color, label: &str) -> io::Result<()> {
    bg(w, color)?;
    fg(w, readable_extreme(color))?;
    write!(w, " {label} ")?;
    reset(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
