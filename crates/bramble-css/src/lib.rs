//! CSS tokenizer, parser and selectors for the Bramble engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - All token types except `<unicode-range-token>`
//!   - Input preprocessing, comments and escape sequences
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Stylesheets, style rules and at-rules
//!   - Declaration lists (inline `style` attributes) and single declarations
//!   - Component values, with a nesting limit of [`MAX_NESTING_DEPTH`]
//!
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, universal, class, ID and attribute selectors
//!   - Structural and form pseudo-classes, `:not()`, `:is()`, `:where()`
//!   - All four combinators
//!   - Specificity and one-off matching against a parsed [`DomTree`]
//!
//! - **Document helpers**: collecting `<style>` text and inline `style`
//!   attributes from a parsed document.
//!
//! # Not Implemented
//!
//! - CSSOM, the cascade and computed values
//! - Media query evaluation
//! - Namespace selectors and `:nth-*()` pseudo-classes
//! - Live matching or invalidation

/// Errors reported by the parser entry points.
pub mod error;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// CSS selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

use bramble_common::warning::warn_once;
use bramble_dom::{DomTree, NodeId};

pub use error::{MAX_NESTING_DEPTH, ParseError};
pub use parser::{
    AtRule, AtRuleBlock, CSSParser, ComponentValue, Declaration, Rule, Selector, StyleRule,
    Stylesheet,
};
pub use selector::{ParsedSelector, Specificity, parse_selector, parse_selector_list};
pub use tokenizer::{CSSToken, CSSTokenizer};

/// Tokenize a string of CSS. The last token is always [`CSSToken::Eof`].
#[must_use]
pub fn tokenize(css: &str) -> Vec<CSSToken> {
    let mut tokenizer = CSSTokenizer::new(css);
    tokenizer.run();
    tokenizer.into_tokens()
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// # Errors
///
/// Returns [`ParseError::NestingTooDeep`] when blocks nest deeper than
/// [`MAX_NESTING_DEPTH`]. Malformed rules are otherwise dropped, not reported.
pub fn parse(css: &str) -> Result<Stylesheet, ParseError> {
    CSSParser::from_css(css).parse_stylesheet()
}

/// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations),
/// as used for the contents of a `style` attribute.
///
/// # Errors
///
/// Returns [`ParseError::NestingTooDeep`] when blocks nest too deeply.
pub fn parse_declaration_list(css: &str) -> Result<Vec<Declaration>, ParseError> {
    CSSParser::from_css(css).parse_declaration_list()
}

/// [§ 5.3.6 Parse a declaration](https://www.w3.org/TR/css-syntax-3/#parse-declaration)
///
/// # Errors
///
/// Returns [`ParseError::InvalidDeclaration`] when the input is not a
/// single declaration.
pub fn parse_declaration(css: &str) -> Result<Declaration, ParseError> {
    CSSParser::from_css(css).parse_declaration()
}

/// [§ 5.3.9 Parse a component value](https://www.w3.org/TR/css-syntax-3/#parse-component-value)
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedEof`] for empty input and
/// [`ParseError::ExpectedEof`] when more than one value is present.
pub fn parse_component_value(css: &str) -> Result<ComponentValue, ParseError> {
    CSSParser::from_css(css).parse_component_value()
}

/// The declarations of one element's `style` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineStyle {
    /// The element carrying the attribute.
    pub element: NodeId,
    /// The parsed declarations.
    pub declarations: Vec<Declaration>,
}

/// The text of every HTML `<style>` element in tree order, joined with
/// newlines.
#[must_use]
pub fn extract_style_content(tree: &DomTree) -> String {
    style_elements(tree)
        .map(|id| tree.text_content(id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse each `<style>` element into its own stylesheet.
///
/// Sheets that fail to parse are logged and skipped.
#[must_use]
pub fn style_sheets(tree: &DomTree) -> Vec<Stylesheet> {
    style_elements(tree)
        .filter_map(|id| match parse(&tree.text_content(id)) {
            Ok(sheet) => Some(sheet),
            Err(error) => {
                warn_once("CSS", &format!("skipping <style> element: {error}"));
                None
            }
        })
        .collect()
}

/// Parse the `style` attribute of every element that has one.
///
/// Attributes that fail to parse are logged and skipped.
#[must_use]
pub fn inline_styles(tree: &DomTree) -> Vec<InlineStyle> {
    tree.descendants(NodeId::ROOT)
        .filter_map(|id| {
            let style = tree.as_element(id)?.get_attribute("style")?;
            match parse_declaration_list(style) {
                Ok(declarations) => Some(InlineStyle {
                    element: id,
                    declarations,
                }),
                Err(error) => {
                    warn_once("CSS", &format!("skipping style attribute: {error}"));
                    None
                }
            }
        })
        .collect()
}

fn style_elements(tree: &DomTree) -> impl Iterator<Item = NodeId> + '_ {
    tree.descendants(NodeId::ROOT)
        .filter(|&id| tree.is_html_element(id, "style"))
}
