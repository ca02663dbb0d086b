//! CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).

/// The parser entry points and consume algorithms.
pub mod core;
/// Stylesheets, rules, declarations and component values.
pub mod rules;

pub use self::core::CSSParser;
pub use rules::{
    AtRule, AtRuleBlock, ComponentValue, Declaration, Rule, Selector, StyleRule, Stylesheet,
    serialize,
};
