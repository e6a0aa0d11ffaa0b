//! Theme-text parsing.
//!
//! Pasted CSS is matched with two regular expressions: one for the
//! `.<namespace>.<prefix>-<slug> { ... }` rule, one for `--name: value;`
//! declarations in its body. `/* */` comments are stripped from the body
//! first. A `//` comment runs to the end of its line: it cuts the value it
//! appears in and hides any declaration after it. Values are kept verbatim
//! (after trimming): nothing is resolved or validated at this stage.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::format::CssFormat;
use crate::error::ParseError;
use crate::theme::{title_from_slug, Theme, ThemeId};

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--([A-Za-z0-9_-]+)\s*:\s*([^;\r\n]*);").expect("declaration pattern is valid")
});

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));

/// What a pasted theme block contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTheme {
    /// Slug exactly as written in the selector.
    pub slug: String,
    /// Display name recovered from the slug.
    pub display_name: String,
    /// Declarations in source order; a repeated name keeps its last value.
    pub variables: IndexMap<String, String>,
}

impl ParsedTheme {
    /// True when the selector matched but no declarations were found.
    ///
    /// Callers should usually reject such a paste rather than clear a
    /// theme's overrides.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// A new editable theme carrying the parsed name and overrides.
    pub fn into_theme(self, id: impl Into<ThemeId>) -> Theme {
        Theme::new(id, self.display_name).with_variables(self.variables.into_iter().collect())
    }
}

impl CssFormat {
    /// Extracts slug, display name and overrides from pasted CSS.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoThemeSelector`] if the text holds no rule with
    /// this format's selector. A matching rule with no declarations is *not*
    /// an error; check [`ParsedTheme::is_empty`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use game_theme::CssFormat;
    ///
    /// let parsed = CssFormat::default().parse(
    ///     ".bloom-page.game-theme-midnight-blue {\n  --game-primary-color: #123456;\n}",
    /// ).unwrap();
    /// assert_eq!(parsed.display_name, "Midnight Blue");
    /// assert_eq!(parsed.variables["--game-primary-color"], "#123456");
    /// ```
    pub fn parse(&self, text: &str) -> Result<ParsedTheme, ParseError> {
        let not_found = || ParseError::NoThemeSelector {
            namespace: self.namespace.clone(),
            prefix: self.prefix.clone(),
        };

        let pattern = format!(
            r"\.{}\.{}-([A-Za-z0-9_-]+)\s*\{{([^}}]*)\}}",
            regex::escape(&self.namespace),
            regex::escape(&self.prefix)
        );
        let selector = Regex::new(&pattern).map_err(|_| not_found())?;
        let caps = selector.captures(text).ok_or_else(not_found)?;

        let slug = caps[1].to_string();
        let body = BLOCK_COMMENT.replace_all(&caps[2], "");

        let mut variables = IndexMap::new();
        for line in body.lines() {
            collect_declarations(line, &mut variables);
        }

        tracing::debug!(slug = %slug, variables = variables.len(), "parsed pasted theme");
        Ok(ParsedTheme {
            display_name: title_from_slug(&slug),
            slug,
            variables,
        })
    }
}

/// Whether `name` is a custom property the parser reads back.
pub(crate) fn is_variable_name(name: &str) -> bool {
    name.strip_prefix("--").map_or(false, |rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    })
}

/// Whether `value` survives serialization and parsing unchanged.
///
/// Assumes the value is already trimmed and non-empty.
pub(crate) fn is_portable_value(value: &str) -> bool {
    !value.contains(&['\n', '\r', ';', '{', '}'][..]) && !value.contains("//")
}

/// Adds the declarations on one body line, stopping at a `//` comment.
fn collect_declarations(line: &str, variables: &mut IndexMap<String, String>) {
    let mut scanned = 0;
    for decl in DECLARATION.captures_iter(line) {
        let (Some(whole), Some(name), Some(raw)) = (decl.get(0), decl.get(1), decl.get(2)) else {
            continue;
        };
        if line[scanned..whole.start()].contains("//") {
            return;
        }
        scanned = whole.end();

        let (value, commented) = match raw.as_str().split_once("//") {
            Some((value, _)) => (value.trim(), true),
            None => (raw.as_str().trim(), false),
        };
        if !value.is_empty() {
            variables.insert(format!("--{}", name.as_str()), value.to_string());
        }
        if commented {
            return;
        }
    }
}

/// Parses with the default `.bloom-page.game-theme-<slug>` selector.
pub fn parse_theme_css(text: &str) -> Result<ParsedTheme, ParseError> {
    CssFormat::default().parse(text)
}
