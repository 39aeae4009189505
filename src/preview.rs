// SPDX-License-Identifier: MIT
//
// Terminal swatches for --preview.

use std::io::{self, Write};

use prism_color::{Color, ansi};

/// One swatch per line, labelled with the hex code.
pub fn palette(w: &mut impl Write, colors: &[Color]) -> io::Result<()> {
    for &color in colors {
        ansi::swatch(w, color, &color.to_hex())?;
        writeln!(w)?;
    }
    Ok(())
}

/// Labelled swatches: `label  ███ #hex ███`.
pub fn labelled<'a>(
    w: &mut impl Write,
    entries: impl IntoIterator<Item = (&'a str, Color)>,
) -> io::Result<()> {
    let entries: Vec<_> = entries.into_iter().collect();
    let width = entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (label, color) in entries {
        write!(w, "{label:<width$}  ")?;
        ansi::swatch(w, color.opaque(), &color.to_hex())?;
        writeln!(w)?;
    }
    Ok(())
}
