//! Themes: named, sparse sets of variable overrides.
//!
//! A theme only stores what the user customized. Everything else comes from
//! resolution at display time, so a fresh theme with just a primary and a
//! secondary color still yields a full palette.
//!
//! ```rust
//! use game_theme::Theme;
//!
//! let theme = Theme::new("t1", "Midnight Blue")
//!     .with_variable("--game-primary-color", "#123456")
//!     .with_variable("--game-header-color", "var(--game-text-color)");
//!
//! assert_eq!(theme.slug(), "midnight-blue");
//! assert!(theme.is_overridden("--game-header-color"));
//! ```
//!
//! ## Factory Themes
//!
//! Built-in themes ship as YAML ([`factory_themes`]). They are marked
//! `is_factory` and the editor refuses to change them; duplicate one to edit.

mod presets;
mod slug;
#[allow(clippy::module_inception)]
mod theme;

pub use presets::{default_custom_theme, factory_themes, load_presets};
pub use slug::{slugify, title_from_slug};
pub use theme::{Theme, ThemeId};
