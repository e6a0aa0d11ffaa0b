//! The theme library: the editing boundary around themes.
//!
//! All mutation of themes goes through here, and this is where factory
//! themes are protected. Every operation either fully applies or leaves the
//! library untouched.
//!
//! ```rust
//! use game_theme::{EditorConfig, ThemeError, ThemeLibrary};
//!
//! let mut library = ThemeLibrary::new(EditorConfig::default());
//!
//! // Factory themes are read-only...
//! let factory = library.themes().iter().find(|t| t.is_factory).unwrap().id.clone();
//! let err = library.set_variable(&factory, "--game-primary-color", "red").unwrap_err();
//! assert!(matches!(err, ThemeError::FactoryLocked { .. }));
//!
//! // ...but a duplicate is editable.
//! let copy = library.duplicate(&factory).unwrap();
//! library.set_variable(&copy, "--game-primary-color", "red").unwrap();
//! let table = library.resolved_table(&copy).unwrap();
//! assert_eq!(table.get("--game-text-color"), Some("red"));
//! ```

use crate::config::{EditorConfig, PasteMerge, PasteNaming};
use crate::css::{is_portable_value, is_variable_name};
use crate::derivation::{DerivationMap, StyleRuleSource};
use crate::error::ThemeError;
use crate::resolve::ResolvedValueTable;
use crate::theme::{default_custom_theme, factory_themes, Theme, ThemeId};
use crate::variables::VariableRegistry;

/// Starting overrides for a theme created from scratch.
const NEW_THEME_VARIABLES: &[(&str, &str)] = &[
    ("--game-primary-color", "#9b87f5"),
    ("--game-secondary-color", "#ffffff"),
];

/// An ordered collection of themes with one selected.
#[derive(Debug, Clone)]
pub struct ThemeLibrary {
    themes: Vec<Theme>,
    selected: Option<ThemeId>,
    registry: VariableRegistry,
    derivation: DerivationMap,
    config: EditorConfig,
}

impl ThemeLibrary {
    /// A library holding the editable "Custom" theme followed by the factory
    /// themes, with "Custom" selected.
    pub fn new(config: EditorConfig) -> Self {
        let mut themes = vec![default_custom_theme()];
        themes.extend(factory_themes().iter().cloned());
        Self::with_themes(themes, config)
    }

    /// A library over the given themes, first one selected.
    pub fn with_themes(themes: Vec<Theme>, config: EditorConfig) -> Self {
        let registry = VariableRegistry::game().clone();
        let derivation = DerivationMap::from_registry(&registry);
        Self {
            selected: themes.first().map(|t| t.id.clone()),
            themes,
            registry,
            derivation,
            config,
        }
    }

    /// Swaps in another catalogue; derivation edges are rebuilt from it.
    pub fn with_registry(mut self, registry: VariableRegistry) -> Self {
        self.derivation = DerivationMap::from_registry(&registry);
        self.registry = registry;
        self
    }

    /// Refines derivation edges from loaded style rules, best effort.
    pub fn with_rule_source(mut self, source: &dyn StyleRuleSource) -> Self {
        self.derivation = DerivationMap::build(&self.registry, Some(source));
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn derivation(&self) -> &DerivationMap {
        &self.derivation
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, id: &ThemeId) -> Option<&Theme> {
        self.themes.iter().find(|t| &t.id == id)
    }

    /// The selected theme, or the first theme if the selection is gone.
    pub fn selected(&self) -> Option<&Theme> {
        self.selected
            .as_ref()
            .and_then(|id| self.get(id))
            .or_else(|| self.themes.first())
    }

    pub fn select(&mut self, id: &ThemeId) -> Result<(), ThemeError> {
        self.require(id)?;
        self.selected = Some(id.clone());
        Ok(())
    }

    /// Creates and selects a new editable theme.
    pub fn create(&mut self, display_name: &str) -> Result<ThemeId, ThemeError> {
        let display_name = non_blank(display_name)?;
        let theme = NEW_THEME_VARIABLES
            .iter()
            .fold(Theme::new(ThemeId::generate(), display_name), |theme, &(name, value)| {
                theme.with_variable(name, value)
            });
        Ok(self.push_selected(theme))
    }

    /// Copies a theme (factory or not) into a new editable "<name> Copy".
    pub fn duplicate(&mut self, id: &ThemeId) -> Result<ThemeId, ThemeError> {
        let source = self.require(id)?;
        let copy = Theme::new(
            ThemeId::generate(),
            format!("{} Copy", source.display_name()),
        )
        .with_variables(source.variables().clone());
        Ok(self.push_selected(copy))
    }

    pub fn rename(&mut self, id: &ThemeId, display_name: &str) -> Result<(), ThemeError> {
        let display_name = non_blank(display_name)?;
        let theme = self.require_editable(id)?;
        theme.rename(display_name);
        tracing::debug!(theme = %id, slug = theme.slug(), "renamed theme");
        Ok(())
    }

    /// Sets one override on an editable theme.
    ///
    /// The value is trimmed; a blank value removes the override instead.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::FactoryLocked`] for factory themes
    /// - [`ThemeError::InvalidVariable`] when `name` is not a `--` custom property
    /// - [`ThemeError::InvalidValue`] when the value could not be written as theme CSS
    pub fn set_variable(
        &mut self,
        id: &ThemeId,
        name: &str,
        value: &str,
    ) -> Result<(), ThemeError> {
        self.require_editable(id)?;
        if !is_variable_name(name) {
            return Err(ThemeError::InvalidVariable {
                name: name.to_string(),
            });
        }
        let value = value.trim();
        if !value.is_empty() && !is_portable_value(value) {
            return Err(ThemeError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }

        let theme = self.require_editable(id)?;
        if value.is_empty() {
            theme.remove_variable(name);
        } else {
            theme.set_variable(name, value);
        }
        Ok(())
    }

    /// Removes one override so the variable falls back to its derived value.
    ///
    /// Returns the removed value, if there was one.
    pub fn reset_variable(
        &mut self,
        id: &ThemeId,
        name: &str,
    ) -> Result<Option<String>, ThemeError> {
        let theme = self.require_editable(id)?;
        Ok(theme.remove_variable(name))
    }

    /// Applies pasted CSS to an editable theme.
    ///
    /// The text is parsed with the configured format, then merged and named
    /// according to [`EditorConfig::merge`] and [`EditorConfig::naming`].
    /// Returns the number of variables taken from the paste.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::FactoryLocked`] for factory themes
    /// - [`ThemeError::Parse`] when no theme selector is found
    /// - [`ThemeError::EmptyPaste`] when the selector matched but held no declarations
    ///
    /// In every error case the theme is unchanged.
    pub fn paste_css(&mut self, id: &ThemeId, text: &str) -> Result<usize, ThemeError> {
        self.require_editable(id)?;
        let parsed = self.config.format.parse(text)?;
        if parsed.is_empty() {
            return Err(ThemeError::EmptyPaste { slug: parsed.slug });
        }

        let merge = self.config.merge;
        let naming = self.config.naming;
        let count = parsed.len();
        let theme = self.require_editable(id)?;

        let variables = theme.variables_mut();
        if merge == PasteMerge::Replace {
            variables.clear();
        }
        variables.extend(parsed.variables);

        if naming == PasteNaming::AdoptPasted {
            theme.rename(parsed.display_name);
        }

        tracing::debug!(theme = %id, variables = count, ?merge, ?naming, "applied pasted css");
        self.selected = Some(id.clone());
        Ok(count)
    }

    /// Adds an editable copy of a preset and selects it.
    ///
    /// An editable theme with the preset's id is replaced. A factory theme
    /// with that id is left alone and the copy gets a fresh id.
    pub fn use_preset(&mut self, preset: &Theme) -> ThemeId {
        let mut theme = preset.clone();
        theme.is_factory = false;
        match self.themes.iter().position(|t| t.id == theme.id) {
            Some(index) if !self.themes[index].is_factory => {
                let id = theme.id.clone();
                self.themes[index] = theme;
                self.selected = Some(id.clone());
                id
            }
            Some(_) => {
                tracing::debug!(theme = %theme.id, "preset id taken by a factory theme");
                theme.id = ThemeId::generate();
                self.push_selected(theme)
            }
            None => self.push_selected(theme),
        }
    }

    /// Deletes an editable theme and returns it.
    pub fn delete(&mut self, id: &ThemeId) -> Result<Theme, ThemeError> {
        self.require_editable(id)?;
        let index = self
            .themes
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.themes.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = self.themes.first().map(|t| t.id.clone());
        }
        Ok(removed)
    }

    pub fn is_overridden(&self, id: &ThemeId, name: &str) -> Result<bool, ThemeError> {
        Ok(self.require(id)?.is_overridden(name))
    }

    /// Resolves every variable for a theme with a fresh memo.
    pub fn resolved_table(&self, id: &ThemeId) -> Result<ResolvedValueTable, ThemeError> {
        let theme = self.require(id)?;
        Ok(ResolvedValueTable::build(
            &self.registry,
            &self.derivation,
            theme,
        ))
    }

    /// The theme's overrides as CSS in the configured format.
    pub fn css(&self, id: &ThemeId) -> Result<String, ThemeError> {
        Ok(self.config.format.serialize(self.require(id)?))
    }

    fn push_selected(&mut self, theme: Theme) -> ThemeId {
        let id = theme.id.clone();
        tracing::debug!(theme = %id, name = theme.display_name(), "added theme");
        self.themes.push(theme);
        self.selected = Some(id.clone());
        id
    }

    fn require(&self, id: &ThemeId) -> Result<&Theme, ThemeError> {
        self.get(id).ok_or_else(|| not_found(id))
    }

    fn require_editable(&mut self, id: &ThemeId) -> Result<&mut Theme, ThemeError> {
        let theme = self
            .themes
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| not_found(id))?;
        if theme.is_factory {
            return Err(ThemeError::FactoryLocked { id: id.to_string() });
        }
        Ok(theme)
    }
}

impl Default for ThemeLibrary {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

fn not_found(id: &ThemeId) -> ThemeError {
    ThemeError::NotFound { id: id.to_string() }
}

fn non_blank(name: &str) -> Result<&str, ThemeError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ThemeError::EmptyName);
    }
    Ok(trimmed)
}
