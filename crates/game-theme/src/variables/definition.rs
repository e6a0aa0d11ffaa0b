//! Variable definition type.

use serde::{Deserialize, Serialize};

/// A single themeable color slot.
///
/// `name` is a CSS custom-property identifier (`--game-header-color`).
/// Root definitions have `level == 0` and no `parent`; every other
/// definition names the variable it derives its default from, one level up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    pub name: String,
    pub display_name: String,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl VariableDefinition {
    /// Creates a root definition.
    pub fn root(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            level: 0,
            parent: None,
        }
    }

    /// Creates a definition deriving from `parent`.
    pub fn child(
        name: impl Into<String>,
        display_name: impl Into<String>,
        level: u32,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            level,
            parent: Some(parent.into()),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
