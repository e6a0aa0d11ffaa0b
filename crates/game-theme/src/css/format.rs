//! Theme selector format and CSS serialization.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub const DEFAULT_NAMESPACE: &str = "bloom-page";
pub const DEFAULT_PREFIX: &str = "game-theme";

/// The two-class selector themes are written under:
/// `.<namespace>.<prefix>-<slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssFormat {
    pub namespace: String,
    pub prefix: String,
}

impl Default for CssFormat {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl CssFormat {
    pub fn new(namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            prefix: prefix.into(),
        }
    }

    /// The selector for a theme slug.
    pub fn selector(&self, slug: &str) -> String {
        format!(".{}.{}-{}", self.namespace, self.prefix, slug)
    }

    /// Renders a theme's overrides as one CSS rule.
    ///
    /// Declarations are sorted by variable name, so the output only depends
    /// on the theme's contents, never on insertion order. There is no
    /// trailing newline.
    ///
    /// ```rust
    /// use game_theme::{CssFormat, Theme};
    ///
    /// let theme = Theme::new("1", "Midnight Blue")
    ///     .with_variable("--game-secondary-color", "#abcdef")
    ///     .with_variable("--game-primary-color", "#123456");
    ///
    /// assert_eq!(
    ///     CssFormat::default().serialize(&theme),
    ///     ".bloom-page.game-theme-midnight-blue {\n  --game-primary-color: #123456;\n  --game-secondary-color: #abcdef;\n}"
    /// );
    /// ```
    pub fn serialize(&self, theme: &Theme) -> String {
        let mut lines = Vec::with_capacity(theme.variables().len() + 2);
        lines.push(format!("{} {{", self.selector(theme.slug())));
        for (name, value) in theme.sorted_variables() {
            lines.push(format!("  {}: {};", name, value));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

/// Serializes with the default `.bloom-page.game-theme-<slug>` selector.
pub fn serialize_theme(theme: &Theme) -> String {
    CssFormat::default().serialize(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector() {
        assert_eq!(
            CssFormat::default().selector("blue-on-white"),
            ".bloom-page.game-theme-blue-on-white"
        );
        assert_eq!(CssFormat::new("page", "skin").selector("x"), ".page.skin-x");
    }

    #[test]
    fn test_serialize_empty_theme() {
        let theme = Theme::new("1", "Empty");
        assert_eq!(
            serialize_theme(&theme),
            ".bloom-page.game-theme-empty {\n}"
        );
    }

    #[test]
    fn test_serialize_keeps_var_references_verbatim() {
        let theme = Theme::new("1", "Refs").with_variable("--a", "var(--b)");
        assert!(serialize_theme(&theme).contains("  --a: var(--b);\n"));
    }

    #[test]
    fn test_format_from_yaml_fills_defaults() {
        let format: CssFormat = serde_yaml::from_str("prefix: skin").unwrap();
        assert_eq!(format.namespace, DEFAULT_NAMESPACE);
        assert_eq!(format.prefix, "skin");
    }
}
