//! # prism-theme — editor themes from a palette
//!
//! Derives a fixed set of UI color roles from the first eight colors of a
//! palette, then renders them as a VS Code or Zed color theme.
//!
//! # Architecture
//!
//! ```text
//! palette (≥ 8 colors, optionally optimized first)
//!     │
//!     ▼
//! roles.rs:   appearance, background, foreground, accents c1..c7
//!     │
//!     ▼
//! paint.rs:   declarative role transforms (slot × shift × opacity)
//!     │
//!     ├──► vscode.rs: workbench colors + token rules
//!     └──► zed.rs:    style map + players + syntax
//!     │
//!     ▼
//! document.rs: ThemeDocument, JSON rendering, color traversal
//! ```
//!
//! Both schemas read the same [`ThemeRoles`], so a palette always yields
//! the same colors regardless of output format.

pub mod config;
pub mod document;
pub mod error;
pub mod paint;
pub mod roles;
pub mod style;
pub mod vscode;
pub mod zed;

pub use config::ThemeConfig;
pub use document::{ThemeColor, ThemeDocument, ThemeFormat, collect_colors, map_to_theme};
pub use error::{Result, ThemeError};
pub use roles::{Appearance, ThemeRoles};
pub use style::FontStyle;
