//! # Game Theme - Theme Variable Resolution
//!
//! `game-theme` computes concrete colors for a set of hierarchical CSS custom
//! properties. A theme only overrides a few of them; everything else is
//! derived through parent links, inline `var(...)` references and a handful
//! of hard-coded defaults.
//!
//! ## Core Concepts
//!
//! - [`VariableRegistry`]: the ordered catalogue of variables, a forest of
//!   base colors and the variables that derive from them
//! - [`DerivationMap`]: which variable each unset variable inherits from,
//!   optionally refined from `:root` style rules via a [`StyleRuleSource`]
//! - [`Theme`]: a named, sparse set of overrides
//! - [`Resolver`] / [`resolve`]: the resolution algorithm, memoized per pass
//!   and safe against cycles
//! - [`ResolvedValueTable`]: every variable's final value for one theme
//! - [`CssFormat`]: serialization to, and parsing from, theme CSS text
//! - [`ThemeLibrary`]: the editing boundary that protects factory themes
//!
//! ## Quick Start
//!
//! ```rust
//! use game_theme::{DerivationMap, ResolvedValueTable, Theme, VariableRegistry};
//!
//! let registry = VariableRegistry::game();
//! let derivation = DerivationMap::from_registry(registry);
//!
//! let theme = Theme::new("t1", "Orange on Blue")
//!     .with_variable("--game-primary-color", "#ffb453")
//!     .with_variable("--game-secondary-color", "#539eff")
//!     .with_variable("--game-header-bg-color", "var(--game-secondary-color)");
//!
//! let table = ResolvedValueTable::build(registry, &derivation, &theme);
//! assert_eq!(table.get("--game-draggable-bg-color"), Some("#ffb453"));
//! assert_eq!(table.get("--game-header-bg-color"), Some("#539eff"));
//! assert_eq!(table.get("--game-button-wrong-bg-color"), Some("#848484"));
//! ```
//!
//! ## CSS Round Trip
//!
//! ```rust
//! use game_theme::{parse_theme_css, serialize_theme, Theme};
//!
//! let theme = Theme::new("t1", "Midnight Blue")
//!     .with_variable("--game-primary-color", "#123456");
//! let css = serialize_theme(&theme);
//!
//! let parsed = parse_theme_css(&css).unwrap();
//! assert_eq!(parsed.slug, "midnight-blue");
//! assert_eq!(parsed.into_theme("t1"), theme);
//! ```

pub mod config;
pub mod css;
pub mod derivation;
mod error;
pub mod library;
pub mod prelude;
pub mod resolve;
pub mod theme;
pub mod variables;

pub use error::{ConfigError, ParseError, RegistryError, RuleSourceError, ThemeError};

pub use variables::{
    build_hierarchy, HierarchyNode, VariableDefinition, VariableRegistry, GAME_DEFAULTS,
};

pub use derivation::{
    CssRuleSource, DerivationMap, StaticRules, StyleRule, StyleRuleSource, ROOT_SELECTOR,
};

pub use resolve::{
    resolve, var_reference, ResolutionMemo, ResolvedValueTable, ResolvedVariable, Resolver,
    FALLBACK_COLOR,
};

pub use theme::{
    default_custom_theme, factory_themes, load_presets, slugify, title_from_slug, Theme, ThemeId,
};

pub use css::{parse_theme_css, serialize_theme, CssFormat, ParsedTheme};

pub use config::{EditorConfig, PasteMerge, PasteNaming};

pub use library::ThemeLibrary;
