//! CSS text in and out.
//!
//! Themes travel as a single rule under a two-class selector:
//!
//! ```css
//! .bloom-page.game-theme-midnight-blue {
//!   --game-primary-color: #123456;
//!   --game-secondary-color: #abcdef;
//! }
//! ```
//!
//! [`CssFormat::serialize`] writes that shape with declarations sorted by
//! name; [`CssFormat::parse`] reads it back from pasted text. The two
//! round-trip for themes whose names are `--` custom properties and whose
//! values are trimmed, non-empty, and free of `;`, braces, `//` and line
//! breaks: parsing the serialized text yields the same overrides, and
//! serializing again yields byte-identical output.
//! [`ThemeLibrary::set_variable`](crate::ThemeLibrary::set_variable) only
//! stores overrides of that shape.

mod format;
mod parse;

pub use format::{serialize_theme, CssFormat, DEFAULT_NAMESPACE, DEFAULT_PREFIX};
pub(crate) use parse::{is_portable_value, is_variable_name};
pub use parse::{parse_theme_css, ParsedTheme};
