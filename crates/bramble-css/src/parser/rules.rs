//! The structures produced by the CSS parser.
//!
//! [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing): "The output of
//! parsing is a stylesheet, a list of rules, a list of declarations, or a
//! component value."

use std::fmt;

use serde::Serialize;

use crate::selector::{ParsedSelector, parse_selector};
use crate::tokenizer::CSSToken;

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stylesheet {
    /// Top-level rules in source order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Style rules at any depth, including those inside `@media` and other
    /// conditional group rules.
    #[must_use]
    pub fn style_rules(&self) -> Vec<&StyleRule> {
        let mut out = Vec::new();
        collect_style_rules(&self.rules, &mut out);
        out
    }
}

fn collect_style_rules<'a>(rules: &'a [Rule], out: &mut Vec<&'a StyleRule>) {
    for rule in rules {
        match rule {
            Rule::Style(style) => out.push(style),
            Rule::At(AtRule {
                block: Some(AtRuleBlock::Rules(nested)),
                ..
            }) => collect_style_rules(nested, out),
            Rule::At(_) => {}
        }
    }
}

/// A rule in a stylesheet or inside a grouping at-rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Rule {
    /// A qualified rule whose prelude is a selector list.
    Style(StyleRule),
    /// An at-rule.
    At(AtRule),
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule),
/// interpreted as a style rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    /// The comma-separated parts of the prelude.
    pub selectors: Vec<Selector>,
    /// The declarations in the block.
    pub declarations: Vec<Declaration>,
}

/// One selector of a style rule's selector list, kept as source text.
///
/// The text is parsed on demand with [`Selector::parse`], so rules with
/// selectors this crate does not understand are still kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// The selector with surrounding whitespace trimmed.
    pub text: String,
}

impl Selector {
    /// Parse the selector text. `None` when it is not a valid selector.
    #[must_use]
    pub fn parse(&self) -> Option<ParsedSelector> {
        parse_selector(&self.text)
    }
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtRule {
    /// The name, without `@`, as written.
    pub name: String,
    /// Component values between the name and the block or semicolon.
    pub prelude: Vec<ComponentValue>,
    /// The block, `None` for statement at-rules such as `@import`.
    pub block: Option<AtRuleBlock>,
}

/// How an at-rule's `{}` block was interpreted, decided by the rule name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "kebab-case")]
pub enum AtRuleBlock {
    /// A list of rules (`@media`, `@supports`, `@layer`, `@container`,
    /// `@document`).
    Rules(Vec<Rule>),
    /// A list of declarations (`@font-face`, `@page`, `@counter-style`,
    /// `@property`, `@viewport`).
    Declarations(Vec<Declaration>),
    /// Anything else, as raw component values.
    Raw(Vec<ComponentValue>),
}

impl AtRule {
    /// The prelude as CSS text, trimmed.
    #[must_use]
    pub fn prelude_text(&self) -> String {
        serialize(&self.prelude).trim().to_string()
    }
}

/// [§ 5.4.5 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// The property name, as written.
    pub name: String,
    /// The value with surrounding whitespace and `!important` removed.
    pub value: Vec<ComponentValue>,
    /// Whether the declaration ended in `!important`.
    pub important: bool,
}

impl Declaration {
    /// The value as CSS text.
    #[must_use]
    pub fn value_text(&self) -> String {
        serialize(&self.value)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value_text())?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

/// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ComponentValue {
    /// A preserved token.
    Token {
        /// The token.
        token: CSSToken,
    },
    /// [§ 5.4.9 Consume a function](https://www.w3.org/TR/css-syntax-3/#consume-function)
    Function {
        /// The function name.
        name: String,
        /// The arguments, commas included.
        value: Vec<ComponentValue>,
    },
    /// [§ 5.4.8 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    Block {
        /// The opening bracket: `{`, `[` or `(`.
        open: char,
        /// The block contents.
        value: Vec<ComponentValue>,
    },
}

impl ComponentValue {
    /// True for a preserved whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(
            self,
            Self::Token {
                token: CSSToken::Whitespace
            }
        )
    }

    fn write_css(&self, out: &mut String) {
        match self {
            Self::Token { token } => token.write_css(out),
            Self::Function { name, value } => {
                out.push_str(name);
                out.push('(');
                for item in value {
                    item.write_css(out);
                }
                out.push(')');
            }
            Self::Block { open, value } => {
                out.push(*open);
                for item in value {
                    item.write_css(out);
                }
                out.push(match open {
                    '{' => '}',
                    '[' => ']',
                    _ => ')',
                });
            }
        }
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_css(&mut out);
        f.write_str(&out)
    }
}

/// Serialize component values back to CSS text.
#[must_use]
pub fn serialize(values: &[ComponentValue]) -> String {
    let mut out = String::new();
    for value in values {
        value.write_css(&mut out);
    }
    out
}
