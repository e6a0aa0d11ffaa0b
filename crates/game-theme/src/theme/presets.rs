//! Built-in themes.
//!
//! Factory themes are bundled as YAML and parsed on first use. Any preset
//! document with the same shape can be loaded with [`load_presets`].

use once_cell::sync::Lazy;

use super::theme::{Theme, ThemeId};
use crate::error::ThemeError;

const FACTORY_YAML: &str = include_str!("../../presets/factory.yaml");

static FACTORY_THEMES: Lazy<Vec<Theme>> = Lazy::new(|| match load_presets(FACTORY_YAML) {
    Ok(themes) => themes,
    Err(err) => {
        tracing::warn!(error = %err, "bundled factory themes failed to load");
        Vec::new()
    }
});

/// Parses a YAML list of themes and marks each one as a factory theme.
///
/// # Errors
///
/// Returns [`ThemeError::Preset`] if the document is not a list of themes.
///
/// # Example
///
/// ```rust
/// use game_theme::load_presets;
///
/// let themes = load_presets(r##"
/// - id: sunset
///   displayName: Sunset
///   variables:
///     --game-primary-color: "#ff7e5f"
/// "##).unwrap();
/// assert_eq!(themes[0].slug(), "sunset");
/// assert!(themes[0].is_factory);
/// ```
pub fn load_presets(yaml: &str) -> Result<Vec<Theme>, ThemeError> {
    let mut themes: Vec<Theme> =
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Preset {
            message: e.to_string(),
        })?;
    for theme in &mut themes {
        theme.is_factory = true;
    }
    Ok(themes)
}

/// The bundled factory themes, in file order.
pub fn factory_themes() -> &'static [Theme] {
    &FACTORY_THEMES
}

/// The editable starter theme the library opens with.
pub fn default_custom_theme() -> Theme {
    Theme::new(ThemeId::generate(), "Custom")
        .with_variable("--game-primary-color", "#6a56c2")
        .with_variable("--game-secondary-color", "#ffffff")
        .with_variable("--game-button-correct-bg-color", "#833a79")
}
