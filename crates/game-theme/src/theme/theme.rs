//! The theme entity.
//!
//! A theme is a sparse bag of overrides: only the variables a user customized
//! are present. Values are either literal colors or `var(--other)` references;
//! neither is validated here, resolution deals with them at display time.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::slug::slugify;

/// Opaque unique theme identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ThemeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ThemeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ThemeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Serialized shape of a theme, as stored in preset files.
///
/// The slug is optional on input; it is always re-derived from the display
/// name when converted into a [`Theme`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeRecord {
    id: ThemeId,
    display_name: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    is_factory: bool,
    #[serde(default)]
    variables: HashMap<String, String>,
}

impl From<ThemeRecord> for Theme {
    fn from(record: ThemeRecord) -> Self {
        let slug = slugify(&record.display_name);
        if let Some(given) = record.slug.as_deref() {
            if given != slug {
                tracing::debug!(
                    theme = %record.id,
                    given,
                    derived = %slug,
                    "ignoring stored slug that does not match display name"
                );
            }
        }
        Theme {
            id: record.id,
            display_name: record.display_name,
            slug,
            is_factory: record.is_factory,
            variables: record.variables,
        }
    }
}

impl From<Theme> for ThemeRecord {
    fn from(theme: Theme) -> Self {
        ThemeRecord {
            id: theme.id,
            display_name: theme.display_name,
            slug: Some(theme.slug),
            is_factory: theme.is_factory,
            variables: theme.variables,
        }
    }
}

/// A named set of variable overrides.
///
/// The slug always matches [`slugify`] of the display name; change the name
/// through [`rename`](Theme::rename) to keep them in step.
///
/// Factory themes are read-only to the editor. That rule is enforced by
/// [`ThemeLibrary`](crate::ThemeLibrary), not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeRecord", into = "ThemeRecord")]
pub struct Theme {
    pub id: ThemeId,
    display_name: String,
    slug: String,
    pub is_factory: bool,
    variables: HashMap<String, String>,
}

impl Theme {
    /// Creates an empty, editable theme.
    pub fn new(id: impl Into<ThemeId>, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            id: id.into(),
            slug: slugify(&display_name),
            display_name,
            is_factory: false,
            variables: HashMap::new(),
        }
    }

    /// Creates an empty factory theme.
    pub fn factory(id: impl Into<ThemeId>, display_name: impl Into<String>) -> Self {
        Self {
            is_factory: true,
            ..Self::new(id, display_name)
        }
    }

    /// Adds an override, returning `self` for chaining.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Replaces all overrides, returning `self` for chaining.
    pub fn with_variables(mut self, variables: HashMap<String, String>) -> Self {
        self.variables = variables;
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Changes the display name and re-derives the slug.
    pub fn rename(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
        self.slug = slugify(&self.display_name);
    }

    /// The raw override for `name`, exactly as stored.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn is_overridden(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    /// Overrides sorted by variable name.
    pub fn sorted_variables(&self) -> Vec<(&str, &str)> {
        let mut sorted: Vec<(&str, &str)> = self
            .variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Sets an override, returning the previous value.
    pub fn set_variable(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.variables.insert(name.into(), value.into())
    }

    /// Removes an override, returning it.
    pub fn remove_variable(&mut self, name: &str) -> Option<String> {
        self.variables.remove(name)
    }

    pub(crate) fn variables_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_slug() {
        let theme = Theme::new("1", "White and Orange on Blue");
        assert_eq!(theme.slug(), "white-and-orange-on-blue");
        assert!(!theme.is_factory);
        assert!(theme.variables().is_empty());
    }

    #[test]
    fn test_rename_rederives_slug() {
        let mut theme = Theme::new("1", "Old");
        theme.rename("Brand New!");
        assert_eq!(theme.display_name(), "Brand New!");
        assert_eq!(theme.slug(), "brand-new");
    }

    #[test]
    fn test_sorted_variables_ignores_insertion_order() {
        let theme = Theme::new("1", "T")
            .with_variable("--z", "1")
            .with_variable("--a", "2")
            .with_variable("--m", "3");
        let names: Vec<&str> = theme.sorted_variables().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["--a", "--m", "--z"]);
    }

    #[test]
    fn test_set_and_remove_variable() {
        let mut theme = Theme::new("1", "T");
        assert_eq!(theme.set_variable("--a", "red"), None);
        assert_eq!(theme.set_variable("--a", "blue"), Some("red".to_string()));
        assert!(theme.is_overridden("--a"));
        assert_eq!(theme.remove_variable("--a"), Some("blue".to_string()));
        assert!(!theme.is_overridden("--a"));
    }

    #[test]
    fn test_serde_uses_camel_case_and_rederives_slug() {
        let theme: Theme = serde_yaml::from_str(
            "id: \"7\"\ndisplayName: Night Sky\nslug: wrong\nisFactory: true\nvariables:\n  --game-primary-color: \"#000033\"\n",
        )
        .unwrap();
        assert_eq!(theme.id, "7");
        assert_eq!(theme.slug(), "night-sky");
        assert!(theme.is_factory);
        assert_eq!(theme.variable("--game-primary-color"), Some("#000033"));

        let yaml = serde_yaml::to_string(&theme).unwrap();
        assert!(yaml.contains("displayName: Night Sky"));
        assert!(yaml.contains("slug: night-sky"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ThemeId::generate(), ThemeId::generate());
    }
}
