//! Prelude for convenient imports.
//!
//! ```rust
//! use game_theme::prelude::*;
//!
//! let registry = VariableRegistry::game();
//! let derivation = DerivationMap::from_registry(registry);
//! let theme = Theme::new("t1", "Plain");
//! let table = ResolvedValueTable::build(registry, &derivation, &theme);
//! assert_eq!(table.get("--game-text-color"), Some("black"));
//! ```

// Catalogue and derivation
pub use crate::{DerivationMap, StyleRuleSource, VariableRegistry};

// Themes and resolution
pub use crate::{ResolutionMemo, ResolvedValueTable, Resolver, Theme, ThemeId};

// CSS text and editing
pub use crate::{CssFormat, EditorConfig, ThemeLibrary};
