//! Variable resolution.
//!
//! Resolving a variable for a theme tries, in order:
//!
//! 1. the memo for the current pass,
//! 2. the theme's explicit override (following a `var(--other)` reference),
//! 3. the registry's hard-coded default,
//! 4. the derivation parent,
//! 5. the black fallback [`FALLBACK_COLOR`].
//!
//! Steps 2 and 4 may forward to another variable, so a lookup walks a chain
//! of names until one yields a value. The walk is iterative and its depth is
//! bounded only by memory. Each name on the chain is marked in progress
//! before the walk moves on; if the chain comes back to one of them, the
//! walk stops with the fallback, so cyclic input always terminates. Every
//! name on the chain is then written to the memo with the final value, so
//! one pass computes each variable at most once. An empty memo entry counts
//! as unset.
//!
//! ```rust
//! use game_theme::{DerivationMap, ResolutionMemo, Resolver, Theme, VariableRegistry};
//!
//! let registry = VariableRegistry::game();
//! let derivation = DerivationMap::from_registry(registry);
//! let theme = Theme::new("t1", "Midnight")
//!     .with_variable("--game-primary-color", "#123456");
//!
//! let resolver = Resolver::new(registry, &derivation);
//! let mut memo = ResolutionMemo::new();
//! assert_eq!(resolver.resolve("--game-header-bg-color", &theme, &mut memo), "#123456");
//! assert_eq!(resolver.resolve("--game-header-color", &theme, &mut memo), "white");
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::derivation::DerivationMap;
use crate::theme::Theme;
use crate::variables::VariableRegistry;

/// Value given to anything that cannot be resolved.
pub const FALLBACK_COLOR: &str = "#000000";

static VAR_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"var\(\s*(--[A-Za-z0-9_-]+)\s*\)").expect("var() pattern is valid")
});

/// Extracts the variable name from the first `var(--name)` in `value`.
///
/// Returns `None` when the value holds no well-formed reference, in which
/// case it is used as a literal.
///
/// ```rust
/// use game_theme::var_reference;
///
/// assert_eq!(var_reference("var(--game-text-color)"), Some("--game-text-color"));
/// assert_eq!(var_reference("var(--game-text-color"), None);
/// assert_eq!(var_reference("#ff0000"), None);
/// ```
pub fn var_reference(value: &str) -> Option<&str> {
    if !value.contains("var(") {
        return None;
    }
    VAR_REFERENCE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    InProgress,
    Resolved(String),
}

/// Per-pass resolution state.
///
/// Create a fresh memo for every table build. Reusing one across themes
/// would leak one theme's values into another's lookups.
#[derive(Debug, Clone, Default)]
pub struct ResolutionMemo {
    slots: HashMap<String, Slot>,
}

impl ResolutionMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value already resolved for `name` in this pass.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.slots.get(name) {
            Some(Slot::Resolved(value)) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// Pre-seeds a value, which resolution will then return unchanged.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(name.into(), Slot::Resolved(value.into()));
    }

    pub fn is_in_progress(&self, name: &str) -> bool {
        matches!(self.slots.get(name), Some(Slot::InProgress))
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, Slot::Resolved(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn begin(&mut self, name: &str) {
        self.slots.insert(name.to_string(), Slot::InProgress);
    }

    fn finish(&mut self, name: String, value: &str) {
        self.slots.insert(name, Slot::Resolved(value.to_string()));
    }
}

/// What one variable contributes on its own.
enum Step<'s> {
    Value(&'s str),
    Follow(&'s str),
}

/// Resolves variables against a registry's defaults and a derivation map.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a VariableRegistry,
    derivation: &'a DerivationMap,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a VariableRegistry, derivation: &'a DerivationMap) -> Self {
        Self {
            registry,
            derivation,
        }
    }

    /// Returns the concrete value `name` should display for `theme`.
    ///
    /// Never fails; unknown names and cycles end at [`FALLBACK_COLOR`].
    pub fn resolve(&self, name: &str, theme: &Theme, memo: &mut ResolutionMemo) -> String {
        let mut chain: Vec<String> = Vec::new();
        let mut current = name.to_string();

        let value = loop {
            match memo.slots.get(current.as_str()) {
                Some(Slot::Resolved(value)) if !value.is_empty() => {
                    tracing::trace!(variable = %current, "memo hit");
                    break value.clone();
                }
                Some(Slot::InProgress) => {
                    tracing::debug!(variable = %current, "cyclic reference, using fallback");
                    break FALLBACK_COLOR.to_string();
                }
                _ => {}
            }

            memo.begin(&current);
            match self.step(&current, theme) {
                Step::Value(value) => {
                    let value = value.to_string();
                    chain.push(current);
                    break value;
                }
                Step::Follow(next) => {
                    let next = next.to_string();
                    chain.push(std::mem::replace(&mut current, next));
                }
            }
        };

        for link in chain {
            memo.finish(link, &value);
        }
        value
    }

    /// Override, then default, then derivation parent, then fallback.
    fn step<'s>(&'s self, name: &str, theme: &'s Theme) -> Step<'s> {
        if let Some(raw) = theme.variable(name).filter(|v| !v.trim().is_empty()) {
            return match var_reference(raw) {
                Some(target) => Step::Follow(target),
                None => Step::Value(raw),
            };
        }
        if let Some(value) = self.registry.default_value(name) {
            return Step::Value(value);
        }
        if let Some(parent) = self.derivation.parent_of(name) {
            return Step::Follow(parent);
        }
        Step::Value(FALLBACK_COLOR)
    }
}

/// Resolves `name` using the game registry's defaults.
///
/// Convenience over [`Resolver`] for callers that only vary the derivation map.
pub fn resolve(
    name: &str,
    theme: &Theme,
    derivation: &DerivationMap,
    memo: &mut ResolutionMemo,
) -> String {
    Resolver::new(VariableRegistry::game(), derivation).resolve(name, theme, memo)
}

/// One row of a [`ResolvedValueTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    pub value: String,
    /// Whether the theme sets this variable explicitly.
    pub overridden: bool,
}

/// Every registry variable's final value for one theme, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValueTable {
    theme_id: String,
    values: IndexMap<String, ResolvedVariable>,
}

impl ResolvedValueTable {
    /// Resolves every registry entry in order, sharing one fresh memo.
    pub fn build(registry: &VariableRegistry, derivation: &DerivationMap, theme: &Theme) -> Self {
        let resolver = Resolver::new(registry, derivation);
        let mut memo = ResolutionMemo::new();
        let values = registry
            .iter()
            .map(|def| {
                let value = resolver.resolve(&def.name, theme, &mut memo);
                let overridden = theme.is_overridden(&def.name);
                (def.name.clone(), ResolvedVariable { value, overridden })
            })
            .collect();
        Self {
            theme_id: theme.id.to_string(),
            values,
        }
    }

    /// Id of the theme this table was built for.
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|row| row.value.as_str())
    }

    pub fn row(&self, name: &str) -> Option<&ResolvedVariable> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedVariable)> {
        self.values.iter().map(|(name, row)| (name.as_str(), row))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Name to value, in registry order.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.values
            .iter()
            .map(|(name, row)| (name.clone(), row.value.clone()))
            .collect()
    }
}
