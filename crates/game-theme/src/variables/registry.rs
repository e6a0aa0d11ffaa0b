//! The variable catalogue and the compiled-in game registry.
//!
//! A [`VariableRegistry`] is an ordered, validated forest of
//! [`VariableDefinition`]s. Validation follows the same idea as alias
//! validation for styles: every reference must point at an existing entry.
//! On top of that each child sits exactly one level below its parent, which
//! rules out cycles because levels strictly decrease along any parent chain.
//!
//! The game catalogue is built once, on first use, and shared for the life
//! of the process:
//!
//! ```rust
//! use game_theme::VariableRegistry;
//!
//! let registry = VariableRegistry::game();
//! let header = registry.get("--game-header-color").unwrap();
//! assert_eq!(header.parent.as_deref(), Some("--game-secondary-color"));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::definition::VariableDefinition;
use crate::error::RegistryError;

/// Hard-coded values for the few roots that have one.
///
/// Consulted by resolution after theme overrides and before derivation.
pub const GAME_DEFAULTS: &[(&str, &str)] = &[
    ("--game-primary-color", "black"),
    ("--game-secondary-color", "white"),
    ("--game-button-wrong-color", "white"),
    ("--game-button-wrong-bg-color", "#848484"),
];

// (name, display name, level, parent)
#[rustfmt::skip]
const GAME_VARIABLES: &[(&str, &str, u32, Option<&str>)] = &[
    ("--game-primary-color", "Primary", 0, None),
    ("--game-primary-bg-color", "Primary Background", 1, Some("--game-primary-color")),
    ("--game-button-correct-bg-color", "Button Correct Background", 2, Some("--game-primary-bg-color")),
    ("--game-selected-checkbox-bg-color", "Selected Checkbox Background", 3, Some("--game-button-correct-bg-color")),
    ("--game-selected-checkbox-outline-color", "Selected Checkbox Outline", 4, Some("--game-selected-checkbox-bg-color")),
    ("--game-draggable-bg-color", "Draggable Background", 2, Some("--game-primary-bg-color")),
    ("--game-draggable-target-outline-color", "Draggable Target Outline", 3, Some("--game-draggable-bg-color")),
    ("--game-header-bg-color", "Header Background", 2, Some("--game-primary-bg-color")),
    ("--game-control-button-bg-color", "Control Button Background", 2, Some("--game-primary-bg-color")),
    ("--game-text-color", "Text", 1, Some("--game-primary-color")),
    ("--game-page-number-color", "Page Number", 2, Some("--game-text-color")),
    ("--game-checkbox-text-color", "Checkbox Text", 2, Some("--game-text-color")),
    ("--game-checkbox-outline-color", "Checkbox Outline", 3, Some("--game-checkbox-text-color")),
    ("--game-button-text-color", "Button Text", 1, Some("--game-primary-color")),
    ("--game-button-outline-color", "Button Outline", 2, Some("--game-button-text-color")),
    ("--game-secondary-color", "Secondary", 0, None),
    ("--game-page-bg-color", "Page Background", 1, Some("--game-secondary-color")),
    ("--page-background-color", "Appearance System Page Background", 2, Some("--game-page-bg-color")),
    ("--game-button-bg-color", "Button Background", 1, Some("--game-secondary-color")),
    ("--game-button-correct-color", "Button Correct Text/Icon", 1, Some("--game-secondary-color")),
    ("--game-selected-checkbox-color", "Selected Checkbox Icon", 2, Some("--game-button-correct-color")),
    ("--game-draggable-color", "Draggable Text/Icon", 1, Some("--game-secondary-color")),
    ("--game-header-color", "Header Text", 1, Some("--game-secondary-color")),
    ("--game-control-button-color", "Control Button Icon", 1, Some("--game-secondary-color")),
    ("--game-button-wrong-color", "Button Wrong Text/Icon", 0, None),
    ("--game-button-wrong-bg-color", "Button Wrong Background", 0, None),
];

static GAME_REGISTRY: Lazy<VariableRegistry> = Lazy::new(|| {
    let definitions = GAME_VARIABLES
        .iter()
        .map(|&(name, display_name, level, parent)| VariableDefinition {
            name: name.to_string(),
            display_name: display_name.to_string(),
            level,
            parent: parent.map(str::to_string),
        })
        .collect();
    let defaults = GAME_DEFAULTS
        .iter()
        .map(|&(name, value)| (name.to_string(), value.to_string()))
        .collect();
    VariableRegistry {
        definitions,
        defaults,
    }
});

/// An ordered catalogue of variable definitions plus their hard-coded defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRegistry {
    definitions: Vec<VariableDefinition>,
    defaults: HashMap<String, String>,
}

impl VariableRegistry {
    /// Builds a registry from definitions in display order, validating the forest.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] describing the first problem found:
    /// duplicate names, dangling parents, level gaps, or parentless non-roots.
    pub fn new(definitions: Vec<VariableDefinition>) -> Result<Self, RegistryError> {
        let mut levels: HashMap<&str, u32> = HashMap::with_capacity(definitions.len());
        for def in &definitions {
            if levels.insert(def.name.as_str(), def.level).is_some() {
                return Err(RegistryError::DuplicateName(def.name.clone()));
            }
        }

        for def in &definitions {
            match &def.parent {
                None if def.level != 0 => {
                    return Err(RegistryError::MissingParent {
                        name: def.name.clone(),
                        level: def.level,
                    });
                }
                None => {}
                Some(parent) => {
                    let parent_level = *levels.get(parent.as_str()).ok_or_else(|| {
                        RegistryError::UnknownParent {
                            name: def.name.clone(),
                            parent: parent.clone(),
                        }
                    })?;
                    if parent_level + 1 != def.level {
                        return Err(RegistryError::LevelMismatch {
                            name: def.name.clone(),
                            level: def.level,
                            parent: parent.clone(),
                            parent_level,
                        });
                    }
                }
            }
        }

        Ok(Self {
            definitions,
            defaults: HashMap::new(),
        })
    }

    /// The built-in game catalogue with its defaults.
    pub fn game() -> &'static VariableRegistry {
        &GAME_REGISTRY
    }

    /// Sets a hard-coded default, returning `self` for chaining.
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&VariableDefinition> {
        self.definitions.iter().find(|def| def.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Definitions in registry order.
    pub fn definitions(&self) -> &[VariableDefinition] {
        &self.definitions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariableDefinition> {
        self.definitions.iter()
    }

    /// The hard-coded default for `name`, if one exists.
    pub fn default_value(&self, name: &str) -> Option<&str> {
        self.defaults.get(name).map(String::as_str)
    }

    pub fn defaults(&self) -> &HashMap<String, String> {
        &self.defaults
    }

    /// Root definitions, in registry order.
    pub fn roots(&self) -> impl Iterator<Item = &VariableDefinition> {
        self.definitions.iter().filter(|def| def.is_root())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<'a> IntoIterator for &'a VariableRegistry {
    type Item = &'a VariableDefinition;
    type IntoIter = std::slice::Iter<'a, VariableDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
