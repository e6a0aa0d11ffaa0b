//! Style rules read from stylesheet text.
//!
//! Built on `cssparser`, the same tokenizer the stylesheet loader uses.
//! Only qualified rules are kept; at-rules and anything the tokenizer
//! rejects are skipped. Declaration values are kept as raw source text so
//! that `var(--name)` references survive untouched.
//!
//! ```rust
//! use game_theme::{CssRuleSource, StyleRuleSource};
//!
//! let source = CssRuleSource::new(":root { --a: var(--b); color: red; }");
//! let rules = source.style_rules().unwrap();
//! assert_eq!(rules[0].selector, ":root");
//! assert_eq!(rules[0].declarations[0], ("--a".to_string(), "var(--b)".to_string()));
//! ```

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use super::{StyleRule, StyleRuleSource};
use crate::error::RuleSourceError;

/// A [`StyleRuleSource`] over stylesheet text.
#[derive(Debug, Clone, Default)]
pub struct CssRuleSource {
    css: String,
}

impl CssRuleSource {
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// Reads a stylesheet from disk.
    ///
    /// An unreadable file is not an error here; it surfaces as
    /// [`RuleSourceError::Unavailable`] when rules are requested, which
    /// the derivation map tolerates.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, RuleSourceError> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map(Self::new)
            .map_err(|e| RuleSourceError::Unavailable {
                reason: format!("failed to read {}: {}", path.display(), e),
            })
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

impl StyleRuleSource for CssRuleSource {
    fn style_rules(&self) -> Result<Vec<StyleRule>, RuleSourceError> {
        if self.css.trim().is_empty() {
            return Err(RuleSourceError::Unavailable {
                reason: "stylesheet is empty".to_string(),
            });
        }

        let mut input = ParserInput::new(&self.css);
        let mut parser = Parser::new(&mut input);
        let mut rule_parser = RuleCollector;

        let mut rules = Vec::new();
        for result in cssparser::StyleSheetParser::new(&mut parser, &mut rule_parser) {
            match result {
                Ok(Some(rule)) => rules.push(rule),
                Ok(None) => {}
                Err((err, text)) => {
                    tracing::debug!(
                        error = ?err.kind,
                        rule = text,
                        "skipping unparsable style rule"
                    );
                }
            }
        }
        Ok(rules)
    }
}

struct RuleCollector;

impl<'i> QualifiedRuleParser<'i> for RuleCollector {
    type Prelude = String;
    type QualifiedRule = Option<StyleRule>;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let selector = input.slice_from(start).trim();
        if selector.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(selector.to_string())
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = RawDeclarationParser;
        let body = RuleBodyParser::new(input, &mut decl_parser);
        let declarations = body.flatten().collect();
        Ok(Some(StyleRule {
            selector,
            declarations,
        }))
    }
}

impl<'i> AtRuleParser<'i> for RuleCollector {
    type Prelude = ();
    type AtRule = Option<StyleRule>;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        while input.next().is_ok() {}
        Ok(())
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(None)
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        while input.next().is_ok() {}
        Ok(None)
    }
}

/// Keeps every declaration as `(name, raw value text)`.
struct RawDeclarationParser;

impl<'i> DeclarationParser<'i> for RawDeclarationParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let value = input.slice_from(start).trim();
        let value = value
            .strip_suffix("!important")
            .map(str::trim_end)
            .unwrap_or(value);
        Ok((name.as_ref().to_string(), value.to_string()))
    }
}

impl<'i> AtRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for RawDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
