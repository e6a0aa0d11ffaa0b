//! Derivation edges: which variable an unset variable inherits from.
//!
//! The map is seeded from the registry's parent links. A [`StyleRuleSource`]
//! can refine it: every `:root` rule declaration of the form
//! `--x: var(--y)` sets `x -> y`, replacing the registry edge for `x`.
//!
//! Reading rules is best effort. When the source fails the map keeps the
//! registry edges and the failure is only logged:
//!
//! ```rust
//! use game_theme::{CssRuleSource, DerivationMap, VariableRegistry};
//!
//! let rules = CssRuleSource::new(":root { --game-header-color: var(--game-text-color); }");
//! let map = DerivationMap::build(VariableRegistry::game(), Some(&rules));
//! assert_eq!(map.parent_of("--game-header-color"), Some("--game-text-color"));
//! ```

mod css_source;

use std::collections::HashMap;

pub use css_source::CssRuleSource;

use crate::error::RuleSourceError;
use crate::resolve::var_reference;
use crate::variables::VariableRegistry;

/// Selector whose declarations may add derivation edges.
pub const ROOT_SELECTOR: &str = ":root";

/// One style rule: its selector text and its declarations in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Adds a declaration, returning `self` for chaining.
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }
}

/// Anything that can hand over loaded style rules.
///
/// The engine depends on this interface but never constructs a live source
/// itself; callers inject one when they have it.
pub trait StyleRuleSource {
    fn style_rules(&self) -> Result<Vec<StyleRule>, RuleSourceError>;
}

/// A fixed, in-memory list of rules.
#[derive(Debug, Clone, Default)]
pub struct StaticRules(pub Vec<StyleRule>);

impl StyleRuleSource for StaticRules {
    fn style_rules(&self) -> Result<Vec<StyleRule>, RuleSourceError> {
        Ok(self.0.clone())
    }
}

/// Maps a variable name to the name of the variable it inherits from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivationMap {
    edges: HashMap<String, String>,
}

impl DerivationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges taken from the registry's parent links only.
    pub fn from_registry(registry: &VariableRegistry) -> Self {
        let edges = registry
            .iter()
            .filter_map(|def| {
                def.parent
                    .as_ref()
                    .map(|parent| (def.name.clone(), parent.clone()))
            })
            .collect();
        Self { edges }
    }

    /// Registry edges refined by `source`, if any.
    ///
    /// Never fails: a source error leaves the registry edges in place.
    pub fn build(registry: &VariableRegistry, source: Option<&dyn StyleRuleSource>) -> Self {
        let mut map = Self::from_registry(registry);
        if let Some(source) = source {
            match map.extend_from_rules(source) {
                Ok(count) => {
                    tracing::debug!(edges = count, "derivation map refined from style rules");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "using registry derivation map");
                }
            }
        }
        map
    }

    /// Applies `--x: var(--y)` declarations from `:root` rules.
    ///
    /// Returns the number of edges written. On error the map is untouched.
    pub fn extend_from_rules(
        &mut self,
        source: &dyn StyleRuleSource,
    ) -> Result<usize, RuleSourceError> {
        let rules = source.style_rules()?;
        let mut count = 0;
        for rule in rules.iter().filter(|r| r.selector.trim() == ROOT_SELECTOR) {
            for (property, value) in &rule.declarations {
                if !property.starts_with("--") {
                    continue;
                }
                if let Some(target) = var_reference(value) {
                    if let Some(previous) = self.edges.insert(property.clone(), target.to_string())
                    {
                        if previous != target {
                            tracing::debug!(
                                variable = %property,
                                from = %previous,
                                to = %target,
                                "derivation edge overridden by style rule"
                            );
                        }
                    }
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    /// Sets `name -> parent`, returning `self` for chaining.
    pub fn with_edge(mut self, name: impl Into<String>, parent: impl Into<String>) -> Self {
        self.edges.insert(name.into(), parent.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, parent: impl Into<String>) {
        self.edges.insert(name.into(), parent.into());
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.edges.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DerivationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            edges: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
