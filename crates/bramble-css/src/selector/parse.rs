//! [§ 18 Grammar](https://www.w3.org/TR/selectors-4/#grammar)
//!
//! Selector parsing over CSS tokens. Anything outside the supported grammar
//! makes the whole selector invalid, as "an invalid selector represents
//! nothing".

use super::{
    AttributeOperator, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    ParsedSelector, PseudoClass, SimpleSelector,
};
use crate::error::MAX_NESTING_DEPTH;
use crate::tokenizer::{CSSToken, CSSTokenizer, HashType};

/// Pseudo-classes that depend on user interaction or other live state.
const DYNAMIC_PSEUDO_CLASSES: &[&str] = &[
    "active",
    "autofill",
    "default",
    "defined",
    "focus",
    "focus-visible",
    "focus-within",
    "fullscreen",
    "hover",
    "in-range",
    "indeterminate",
    "invalid",
    "modal",
    "optional",
    "out-of-range",
    "placeholder-shown",
    "read-only",
    "read-write",
    "required",
    "scope",
    "target",
    "target-within",
    "valid",
    "visited",
];

/// Pseudo-elements that CSS 2 allowed with a single colon.
const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["after", "before", "first-letter", "first-line"];

/// Parse a single complex selector such as `ul > li.item:first-child`.
///
/// Returns `None` for invalid selectors and for selector lists.
#[must_use]
pub fn parse_selector(text: &str) -> Option<ParsedSelector> {
    let tokens = tokenize(text);
    let mut parser = SelectorParser::new(&tokens, 0);
    let complex = parser.complex_selector()?;
    parser.at_end().then(|| ParsedSelector::new(complex))
}

/// [§ 3.1](https://www.w3.org/TR/selectors-4/#selector-list)
///
/// Parse a comma-separated selector list. A single invalid selector
/// invalidates the whole list.
#[must_use]
pub fn parse_selector_list(text: &str) -> Option<Vec<ParsedSelector>> {
    let tokens = tokenize(text);
    let list = SelectorParser::new(&tokens, 0).selector_list()?;
    Some(list.into_iter().map(ParsedSelector::new).collect())
}

fn tokenize(text: &str) -> Vec<CSSToken> {
    let mut tokenizer = CSSTokenizer::new(text);
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Returned by `peek` past the end of a slice.
static END: CSSToken = CSSToken::Eof;

struct SelectorParser<'a> {
    tokens: &'a [CSSToken],
    position: usize,
    /// How many functional pseudo-classes enclose this parser.
    depth: usize,
}

impl<'a> SelectorParser<'a> {
    const fn new(tokens: &'a [CSSToken], depth: usize) -> Self {
        Self {
            tokens,
            position: 0,
            depth,
        }
    }

    /// `<complex-selector-list>` running to the end of the input.
    fn selector_list(&mut self) -> Option<Vec<ComplexSelector>> {
        let mut list = vec![self.complex_selector()?];
        while self.peek() == &CSSToken::Comma {
            self.position += 1;
            list.push(self.complex_selector()?);
        }
        self.at_end().then_some(list)
    }

    /// `<complex-selector> = <compound-selector> [ <combinator>? <compound-selector> ]*`
    ///
    /// Stops before a comma or the end of input.
    fn complex_selector(&mut self) -> Option<ComplexSelector> {
        let _ = self.skip_whitespace();
        let mut compounds = vec![self.compound_selector()?];
        let mut combinators = Vec::new();

        loop {
            let had_whitespace = self.skip_whitespace();
            let combinator = match self.peek() {
                CSSToken::Eof | CSSToken::Comma => break,
                CSSToken::Delim('>') => Combinator::Child,
                CSSToken::Delim('+') => Combinator::NextSibling,
                CSSToken::Delim('~') => Combinator::SubsequentSibling,
                _ if had_whitespace => Combinator::Descendant,
                _ => return None,
            };
            if combinator != Combinator::Descendant {
                self.position += 1;
                let _ = self.skip_whitespace();
            }
            combinators.push(combinator);
            compounds.push(self.compound_selector()?);
        }

        let subject = compounds.pop()?;
        let combinators = combinators
            .into_iter()
            .rev()
            .zip(compounds.into_iter().rev())
            .collect();
        Some(ComplexSelector {
            subject,
            combinators,
        })
    }

    /// `<compound-selector> = [ <type-selector>? <subclass-selector>* [ <pseudo-element-selector> <pseudo-class-selector>* ]* ]!`
    fn compound_selector(&mut self) -> Option<CompoundSelector> {
        let mut simple_selectors = Vec::new();

        match self.peek() {
            CSSToken::Ident(name) => {
                simple_selectors.push(SimpleSelector::Type(name.clone()));
                self.position += 1;
            }
            CSSToken::Delim('*') => {
                simple_selectors.push(SimpleSelector::Universal);
                self.position += 1;
            }
            _ => {}
        }
        // Namespace prefixes (`svg|rect`, `*|*`) are not supported.
        if self.peek().is_delim('|') {
            return None;
        }

        loop {
            let simple = match self.peek() {
                CSSToken::Hash {
                    value,
                    hash_type: HashType::Id,
                } => {
                    let id = SimpleSelector::Id(value.clone());
                    self.position += 1;
                    id
                }
                CSSToken::Delim('.') => {
                    self.position += 1;
                    let CSSToken::Ident(class) = self.next_token() else {
                        return None;
                    };
                    SimpleSelector::Class(class.clone())
                }
                CSSToken::LeftBracket => {
                    self.position += 1;
                    SimpleSelector::Attribute(self.attribute_selector()?)
                }
                CSSToken::Colon => {
                    self.position += 1;
                    self.pseudo_selector()?
                }
                _ => break,
            };
            simple_selectors.push(simple);
        }

        if simple_selectors.is_empty() {
            None
        } else {
            Some(CompoundSelector { simple_selectors })
        }
    }

    /// `[` has been consumed.
    ///
    /// `<attribute-selector> = '[' <wq-name> ']' | '[' <wq-name> <attr-matcher> [ <string-token> | <ident-token> ] <attr-modifier>? ']'`
    fn attribute_selector(&mut self) -> Option<AttributeSelector> {
        let _ = self.skip_whitespace();
        let CSSToken::Ident(name) = self.next_token() else {
            return None;
        };
        let name = name.to_ascii_lowercase();
        let _ = self.skip_whitespace();

        let operator = match self.next_token() {
            CSSToken::RightBracket => {
                return Some(AttributeSelector {
                    name,
                    matcher: None,
                    case_insensitive: false,
                });
            }
            CSSToken::Delim('=') => AttributeOperator::Equals,
            CSSToken::Delim(c) => {
                let operator = match c {
                    '~' => AttributeOperator::Includes,
                    '|' => AttributeOperator::DashMatch,
                    '^' => AttributeOperator::Prefix,
                    '$' => AttributeOperator::Suffix,
                    '*' => AttributeOperator::Substring,
                    _ => return None,
                };
                // The `=` must follow immediately.
                if !self.next_token().is_delim('=') {
                    return None;
                }
                operator
            }
            _ => return None,
        };

        let _ = self.skip_whitespace();
        let value = match self.next_token() {
            CSSToken::Ident(value) | CSSToken::String(value) => value.clone(),
            _ => return None,
        };
        let _ = self.skip_whitespace();

        // `<attr-modifier> = i | s`
        let mut case_insensitive = false;
        if let CSSToken::Ident(modifier) = self.peek() {
            case_insensitive = match modifier.to_ascii_lowercase().as_str() {
                "i" => true,
                "s" => false,
                _ => return None,
            };
            self.position += 1;
            let _ = self.skip_whitespace();
        }

        (self.next_token() == &CSSToken::RightBracket).then(|| AttributeSelector {
            name,
            matcher: Some((operator, value)),
            case_insensitive,
        })
    }

    /// The first `:` has been consumed.
    fn pseudo_selector(&mut self) -> Option<SimpleSelector> {
        if self.peek() == &CSSToken::Colon {
            self.position += 1;
            let CSSToken::Ident(name) = self.next_token() else {
                return None;
            };
            return Some(SimpleSelector::PseudoElement(name.to_ascii_lowercase()));
        }

        match self.next_token() {
            CSSToken::Ident(name) => {
                let name = name.to_ascii_lowercase();
                let pseudo = match name.as_str() {
                    "root" => PseudoClass::Root,
                    "first-child" => PseudoClass::FirstChild,
                    "last-child" => PseudoClass::LastChild,
                    "only-child" => PseudoClass::OnlyChild,
                    "first-of-type" => PseudoClass::FirstOfType,
                    "last-of-type" => PseudoClass::LastOfType,
                    "empty" => PseudoClass::Empty,
                    "link" | "any-link" => PseudoClass::Link,
                    "checked" => PseudoClass::Checked,
                    "disabled" => PseudoClass::Disabled,
                    "enabled" => PseudoClass::Enabled,
                    legacy if LEGACY_PSEUDO_ELEMENTS.contains(&legacy) => {
                        return Some(SimpleSelector::PseudoElement(name));
                    }
                    dynamic if DYNAMIC_PSEUDO_CLASSES.contains(&dynamic) => {
                        PseudoClass::Dynamic(name)
                    }
                    _ => return None,
                };
                Some(SimpleSelector::PseudoClass(pseudo))
            }
            CSSToken::Function(name) => {
                let name = name.to_ascii_lowercase();
                let arguments = self.function_arguments()?;
                if self.depth >= MAX_NESTING_DEPTH {
                    return None;
                }
                let list = SelectorParser::new(arguments, self.depth + 1).selector_list()?;
                let pseudo = match name.as_str() {
                    "not" => PseudoClass::Not(list),
                    "is" | "matches" => PseudoClass::Is(list),
                    "where" => PseudoClass::Where(list),
                    _ => return None,
                };
                Some(SimpleSelector::PseudoClass(pseudo))
            }
            _ => None,
        }
    }

    /// The tokens up to the `)` matching an already consumed function token.
    /// The `)` itself is consumed.
    fn function_arguments(&mut self) -> Option<&'a [CSSToken]> {
        let start = self.position;
        let mut open = 1_usize;
        loop {
            match self.next_token() {
                CSSToken::Function(_) | CSSToken::LeftParen => open += 1,
                CSSToken::RightParen => {
                    open -= 1;
                    if open == 0 {
                        return self.tokens.get(start..self.position - 1);
                    }
                }
                CSSToken::Eof => return None,
                _ => {}
            }
        }
    }

    /// Skip whitespace tokens, reporting whether there were any.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        while self.peek().is_whitespace() {
            self.position += 1;
        }
        self.position > start
    }

    fn at_end(&mut self) -> bool {
        let _ = self.skip_whitespace();
        self.peek().is_eof()
    }

    fn next_token(&mut self) -> &'a CSSToken {
        let token = self.peek();
        if !token.is_eof() {
            self.position += 1;
        }
        token
    }

    fn peek(&self) -> &'a CSSToken {
        self.tokens.get(self.position).unwrap_or(&END)
    }
}
