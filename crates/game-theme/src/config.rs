//! Editor configuration.
//!
//! Pasting CSS onto an existing theme can be interpreted more than one way.
//! Both choices are explicit settings rather than fixed behavior:
//!
//! - [`PasteMerge`]: whether pasted overrides replace the theme's map or are
//!   merged over it.
//! - [`PasteNaming`]: whether the theme keeps its own name or adopts the name
//!   encoded in the pasted selector.
//!
//! ```rust
//! use game_theme::{EditorConfig, PasteMerge, PasteNaming};
//!
//! let config = EditorConfig::from_yaml("merge: union\nnaming: adopt-pasted\n").unwrap();
//! assert_eq!(config.merge, PasteMerge::Union);
//! assert_eq!(config.naming, PasteNaming::AdoptPasted);
//! assert_eq!(config.format.prefix, "game-theme");
//! ```

use serde::{Deserialize, Serialize};

use crate::css::CssFormat;
use crate::error::ConfigError;

/// How pasted overrides combine with the theme's existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasteMerge {
    /// The pasted map becomes the theme's whole override map.
    #[default]
    Replace,
    /// Pasted entries are written over the existing map; others are kept.
    Union,
}

/// Which name a theme carries after a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasteNaming {
    /// Keep the theme's current display name and slug.
    #[default]
    KeepCurrent,
    /// Take the display name derived from the pasted slug. The id never changes.
    AdoptPasted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub merge: PasteMerge,
    pub naming: PasteNaming,
    pub format: CssFormat,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from YAML; missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_merge(mut self, merge: PasteMerge) -> Self {
        self.merge = merge;
        self
    }

    pub fn with_naming(mut self, naming: PasteNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_format(mut self, format: CssFormat) -> Self {
        self.format = format;
        self
    }
}
