//! Font style flags for syntax rules.

bitflags::bitflags! {
    /// Font styling attached to a syntax rule.
    ///
    /// ```
    /// use prism_theme::FontStyle;
    ///
    /// let style = FontStyle::BOLD | FontStyle::ITALIC;
    /// assert_eq!(style.vscode(), Some("italic bold".to_string()));
    /// assert_eq!(FontStyle::empty().vscode(), None);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct FontStyle: u8 {
        const ITALIC    = 1 << 0;
        const BOLD      = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

impl FontStyle {
    /// VS Code `fontStyle`: space-separated keywords, `None` when empty.
    #[must_use]
    pub fn vscode(self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let words: Vec<&str> = [
            (Self::ITALIC, "italic"),
            (Self::BOLD, "bold"),
            (Self::UNDERLINE, "underline"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, word)| word)
        .collect();
        Some(words.join(" "))
    }

    /// Zed `font_style`: `"italic"` or `"normal"`. Weight is separate in
    /// Zed, so `BOLD` does not affect this.
    #[must_use]
    pub const fn zed(self) -> &'static str {
        if self.contains(Self::ITALIC) {
            "italic"
        } else {
            "normal"
        }
    }
}
