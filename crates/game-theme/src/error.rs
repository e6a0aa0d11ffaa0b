//! Error types for the theme engine.
//!
//! Resolution itself never fails: every variable bottoms out at the black
//! fallback. Errors only come from building a registry, parsing pasted CSS,
//! loading presets or configuration, and editing themes through
//! [`ThemeLibrary`](crate::ThemeLibrary).

use thiserror::Error;

/// Errors raised while validating a variable catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two definitions share the same name.
    #[error("variable '{0}' is defined more than once")]
    DuplicateName(String),

    /// A definition points at a parent that is not in the catalogue.
    #[error("variable '{name}' derives from unknown variable '{parent}'")]
    UnknownParent { name: String, parent: String },

    /// A child's level is not exactly one deeper than its parent's.
    #[error(
        "variable '{name}' has level {level} but its parent '{parent}' has level {parent_level}"
    )]
    LevelMismatch {
        name: String,
        level: u32,
        parent: String,
        parent_level: u32,
    },

    /// A non-root definition has no parent.
    #[error("variable '{name}' has level {level} but no parent")]
    MissingParent { name: String, level: u32 },
}

/// Errors raised by the theme-text parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text contains no `.<namespace>.<prefix>-<slug> { ... }` rule.
    #[error("no recognizable theme selector found (expected `.{namespace}.{prefix}-<slug> {{ ... }}`)")]
    NoThemeSelector { namespace: String, prefix: String },
}

/// Errors raised when a style rule source cannot be read.
///
/// These never reach callers of [`DerivationMap::build`](crate::DerivationMap::build);
/// the map falls back to the registry's parent links instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSourceError {
    /// The source has nothing to offer (no stylesheet loaded, access denied, ...).
    #[error("style rules unavailable: {reason}")]
    Unavailable { reason: String },

    /// The source exists but could not be interpreted.
    #[error("malformed style rules: {message}")]
    Malformed { message: String },
}

/// Errors raised while loading editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors raised by theme editing and preset loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// No theme with this id exists in the library.
    #[error("theme '{id}' not found")]
    NotFound { id: String },

    /// Factory themes are read-only; duplicate them to edit.
    #[error("theme '{id}' is a factory theme and cannot be modified")]
    FactoryLocked { id: String },

    /// A theme name was empty or only whitespace.
    #[error("theme name cannot be empty")]
    EmptyName,

    /// Pasted CSS had a valid selector but no variable declarations.
    #[error("pasted theme '{slug}' contains no variable declarations")]
    EmptyPaste { slug: String },

    /// Pasted CSS could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Preset data could not be deserialized.
    #[error("invalid preset data: {message}")]
    Preset { message: String },

    /// A variable name that is not a `--` custom property.
    #[error("'{name}' is not a variable name (expected `--name`)")]
    InvalidVariable { name: String },

    /// A value the theme CSS format cannot carry.
    #[error("value for '{name}' cannot contain `;`, braces, `//` or line breaks: {value:?}")]
    InvalidValue { name: String, value: String },
}
