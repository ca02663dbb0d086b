use bramble_common::warning::{log_parse_error, warn_once};

use super::rules::{
    AtRule, AtRuleBlock, ComponentValue, Declaration, Rule, Selector, StyleRule, Stylesheet,
};
use crate::error::{MAX_NESTING_DEPTH, ParseError};
use crate::tokenizer::{CSSToken, CSSTokenizer};

const COMPONENT: &str = "CSS Parser";

/// Returned by `peek` once the token list is exhausted.
static END: CSSToken = CSSToken::Eof;

/// At-rules whose block holds rules.
const RULE_LIST_AT_RULES: &[&str] = &["media", "supports", "layer", "container", "document"];

/// At-rules whose block holds declarations.
const DECLARATION_AT_RULES: &[&str] = &["font-face", "page", "counter-style", "property", "viewport"];

/// [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing)
///
/// A recursive-descent parser over a token list. Each public method is one
/// of the parser entry points; it consumes tokens from the current position.
pub struct CSSParser {
    tokens: Vec<CSSToken>,
    position: usize,
    /// Blocks and functions currently open.
    depth: usize,
}

impl CSSParser {
    /// Parse from an already tokenized list.
    #[must_use]
    pub const fn new(tokens: Vec<CSSToken>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Tokenize `css` and parse from the start.
    #[must_use]
    pub fn from_css(css: &str) -> Self {
        let mut tokenizer = CSSTokenizer::new(css);
        tokenizer.run();
        Self::new(tokenizer.into_tokens())
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// # Errors
    ///
    /// [`ParseError::NestingTooDeep`] when blocks nest past the limit.
    pub fn parse_stylesheet(&mut self) -> Result<Stylesheet, ParseError> {
        // "Consume a list of rules from input, with the top-level flag set."
        let rules = self.consume_list_of_rules(true)?;
        Ok(Stylesheet { rules })
    }

    /// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations),
    /// as used for the `style` attribute.
    ///
    /// # Errors
    ///
    /// [`ParseError::NestingTooDeep`] when blocks nest past the limit.
    pub fn parse_declaration_list(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = self.consume_list_of_declarations()?;
        // A stray `}` ends a nested list but not a top-level one.
        while self.peek() == &CSSToken::RightBrace {
            self.parse_error("unexpected-close-brace");
            self.position += 1;
            declarations.extend(self.consume_list_of_declarations()?);
        }
        Ok(declarations)
    }

    /// [§ 5.3.6 Parse a declaration](https://www.w3.org/TR/css-syntax-3/#parse-declaration)
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidDeclaration`] when the input does not start with
    /// an ident followed by a colon.
    pub fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        // "While the next input token is a <whitespace-token>, consume the
        // next input token."
        self.skip_whitespace();
        // "If the next input token is not an <ident-token>, return a syntax
        // error."
        if !matches!(self.peek(), CSSToken::Ident(_)) {
            return Err(ParseError::InvalidDeclaration {
                reason: format!("expected a property name, found {}", self.peek()),
            });
        }
        // "Consume a declaration. If anything was returned, return it.
        // Otherwise, return a syntax error."
        self.consume_declaration()?
            .ok_or_else(|| ParseError::InvalidDeclaration {
                reason: "expected `:` after the property name".to_string(),
            })
    }

    /// [§ 5.3.9 Parse a component value](https://www.w3.org/TR/css-syntax-3/#parse-component-value)
    ///
    /// # Errors
    ///
    /// [`ParseError::UnexpectedEof`] for empty input,
    /// [`ParseError::ExpectedEof`] when more than one value is present.
    pub fn parse_component_value(&mut self) -> Result<ComponentValue, ParseError> {
        // STEP 1: "While the next input token is a <whitespace-token>,
        //          consume the next input token."
        self.skip_whitespace();
        // STEP 2: "If the next input token is an <EOF-token>, return a
        //          syntax error."
        if self.peek().is_eof() {
            return Err(ParseError::UnexpectedEof);
        }
        // STEP 3: "Consume a component value and let value be the return
        //          value."
        let value = self.consume_component_value()?;
        // STEP 4: "While the next input token is a <whitespace-token>,
        //          consume the next input token."
        self.skip_whitespace();
        // STEP 5: "If the next input token is an <EOF-token>, return value.
        //          Otherwise, return a syntax error."
        if self.peek().is_eof() {
            Ok(value)
        } else {
            Err(ParseError::ExpectedEof {
                found: self.peek().to_string(),
            })
        }
    }

    /// [§ 5.3.10 Parse a list of component values](https://www.w3.org/TR/css-syntax-3/#parse-list-of-component-values)
    ///
    /// # Errors
    ///
    /// [`ParseError::NestingTooDeep`] when blocks nest past the limit.
    pub fn parse_component_values(&mut self) -> Result<Vec<ComponentValue>, ParseError> {
        let mut values = Vec::new();
        while !self.peek().is_eof() {
            values.push(self.consume_component_value()?);
        }
        Ok(values)
    }

    /// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    ///
    /// Nested lists (inside an at-rule block) stop at the closing `}`,
    /// which is left for the caller.
    fn consume_list_of_rules(&mut self, top_level: bool) -> Result<Vec<Rule>, ParseError> {
        let mut rules = Vec::new();
        loop {
            match self.peek() {
                CSSToken::Whitespace => self.position += 1,
                CSSToken::Eof => return Ok(rules),
                CSSToken::RightBrace if !top_level => return Ok(rules),
                CSSToken::Cdo | CSSToken::Cdc if top_level => self.position += 1,
                CSSToken::AtKeyword(_) => {
                    if let Some(rule) = self.consume_at_rule()? {
                        rules.push(Rule::At(rule));
                    }
                }
                _ => {
                    if let Some(rule) = self.consume_qualified_rule()? {
                        rules.push(Rule::Style(rule));
                    }
                }
            }
        }
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    fn consume_at_rule(&mut self) -> Result<Option<AtRule>, ParseError> {
        let CSSToken::AtKeyword(name) = self.next_token() else {
            return Ok(None);
        };
        let mut prelude = Vec::new();

        loop {
            match self.peek() {
                CSSToken::Semicolon => {
                    self.position += 1;
                    break;
                }
                CSSToken::Eof => {
                    self.parse_error("eof-in-at-rule");
                    break;
                }
                CSSToken::LeftBrace => {
                    let block = self.consume_at_rule_block(&name)?;
                    return Ok(Some(AtRule {
                        name,
                        prelude,
                        block: Some(block),
                    }));
                }
                _ => prelude.push(self.consume_component_value()?),
            }
        }

        Ok(Some(AtRule {
            name,
            prelude,
            block: None,
        }))
    }

    /// Consume an at-rule's `{}` block, interpreting the contents according
    /// to the rule name.
    fn consume_at_rule_block(&mut self, name: &str) -> Result<AtRuleBlock, ParseError> {
        let lower = name.to_ascii_lowercase();
        if RULE_LIST_AT_RULES.contains(&lower.as_str()) {
            self.enter_block()?;
            let rules = self.consume_list_of_rules(false)?;
            self.leave_block();
            Ok(AtRuleBlock::Rules(rules))
        } else if DECLARATION_AT_RULES.contains(&lower.as_str()) {
            self.enter_block()?;
            let declarations = self.consume_list_of_declarations()?;
            self.leave_block();
            Ok(AtRuleBlock::Declarations(declarations))
        } else {
            warn_once(COMPONENT, &format!("@{lower} rules are kept unparsed"));
            match self.consume_component_value()? {
                ComponentValue::Block { value, .. } => Ok(AtRuleBlock::Raw(value)),
                other => Ok(AtRuleBlock::Raw(vec![other])),
            }
        }
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn consume_qualified_rule(&mut self) -> Result<Option<StyleRule>, ParseError> {
        let mut prelude = Vec::new();

        loop {
            match self.peek() {
                // "This is a parse error. Return nothing."
                CSSToken::Eof => {
                    self.parse_error("eof-in-qualified-rule");
                    return Ok(None);
                }
                // Inside an at-rule block the `}` belongs to the enclosing
                // rule.
                CSSToken::RightBrace if self.depth > 0 => {
                    self.parse_error("unexpected-close-brace");
                    return Ok(None);
                }
                CSSToken::LeftBrace => {
                    self.enter_block()?;
                    let declarations = self.consume_list_of_declarations()?;
                    self.leave_block();
                    return Ok(Some(StyleRule {
                        selectors: split_selector_list(&prelude),
                        declarations,
                    }));
                }
                _ => prelude.push(self.consume_component_value()?),
            }
        }
    }

    /// [§ 5.4.4 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    ///
    /// Stops before a `}` so the same routine serves style blocks.
    fn consume_list_of_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                CSSToken::Whitespace | CSSToken::Semicolon => self.position += 1,
                CSSToken::Eof | CSSToken::RightBrace => return Ok(declarations),
                CSSToken::AtKeyword(_) => {
                    // Nested at-rules in a declaration list are dropped.
                    if let Some(rule) = self.consume_at_rule()? {
                        log::debug!(target: COMPONENT, "dropping @{} inside a declaration list", rule.name);
                    }
                }
                CSSToken::Ident(_) => {
                    if let Some(declaration) = self.consume_declaration()? {
                        declarations.push(declaration);
                    }
                }
                _ => {
                    // "This is a parse error. Reconsume the current input
                    // token. As long as the next input token is anything other
                    // than a <semicolon-token> or <EOF-token>, consume a
                    // component value and throw away the returned value."
                    self.parse_error("invalid-declaration");
                    self.skip_to_declaration_end()?;
                }
            }
        }
    }

    /// [§ 5.4.5 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    ///
    /// Returns `Ok(None)` for the "return nothing" cases, after skipping the
    /// rest of the malformed declaration.
    fn consume_declaration(&mut self) -> Result<Option<Declaration>, ParseError> {
        let CSSToken::Ident(name) = self.next_token() else {
            return Ok(None);
        };

        self.skip_whitespace();
        // "If the next input token is anything other than a <colon-token>,
        // this is a parse error. Return nothing."
        if self.peek() != &CSSToken::Colon {
            self.parse_error("missing-colon");
            self.skip_to_declaration_end()?;
            return Ok(None);
        }
        self.position += 1;
        self.skip_whitespace();

        let mut value = Vec::new();
        while !matches!(
            self.peek(),
            CSSToken::Eof | CSSToken::Semicolon | CSSToken::RightBrace
        ) {
            value.push(self.consume_component_value()?);
        }

        let important = strip_important(&mut value);
        while value.last().is_some_and(ComponentValue::is_whitespace) {
            let _ = value.pop();
        }

        Ok(Some(Declaration {
            name,
            value,
            important,
        }))
    }

    /// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self) -> Result<ComponentValue, ParseError> {
        let token = self.next_token();
        if let Some(close) = token.mirror() {
            let open = match token {
                CSSToken::LeftBrace => '{',
                CSSToken::LeftBracket => '[',
                _ => '(',
            };
            let value = self.consume_until(&close)?;
            return Ok(ComponentValue::Block { open, value });
        }
        if let CSSToken::Function(name) = token {
            let value = self.consume_until(&CSSToken::RightParen)?;
            return Ok(ComponentValue::Function { name, value });
        }
        Ok(ComponentValue::Token { token })
    }

    /// The shared body of [§ 5.4.8 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    /// and [§ 5.4.9 Consume a function](https://www.w3.org/TR/css-syntax-3/#consume-function):
    /// component values up to the matching `close` token, which is consumed.
    fn consume_until(&mut self, close: &CSSToken) -> Result<Vec<ComponentValue>, ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.nesting_error());
        }
        let mut value = Vec::new();
        loop {
            let next = self.peek();
            if next == close {
                self.position += 1;
                break;
            }
            if next.is_eof() {
                self.parse_error("eof-in-block");
                break;
            }
            value.push(self.consume_component_value()?);
        }
        self.depth -= 1;
        Ok(value)
    }

    /// Skip component values up to the next `;`, `}` or end of input.
    fn skip_to_declaration_end(&mut self) -> Result<(), ParseError> {
        while !matches!(
            self.peek(),
            CSSToken::Eof | CSSToken::Semicolon | CSSToken::RightBrace
        ) {
            let _ = self.consume_component_value()?;
        }
        Ok(())
    }

    /// Consume the `{` that opens a rule or declaration block.
    fn enter_block(&mut self) -> Result<(), ParseError> {
        self.position += 1;
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.nesting_error());
        }
        Ok(())
    }

    /// Consume the `}` that closes a block opened by `enter_block`, if
    /// present.
    fn leave_block(&mut self) {
        self.depth -= 1;
        if self.peek() == &CSSToken::RightBrace {
            self.position += 1;
        } else {
            self.parse_error("eof-in-block");
        }
    }

    fn nesting_error(&self) -> ParseError {
        warn_once(
            COMPONENT,
            &format!("stylesheet nests deeper than {MAX_NESTING_DEPTH} blocks"),
        );
        ParseError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_whitespace() {
            self.position += 1;
        }
    }

    fn next_token(&mut self) -> CSSToken {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.position += 1;
        }
        token
    }

    fn peek(&self) -> &CSSToken {
        self.tokens.get(self.position).unwrap_or(&END)
    }

    fn parse_error(&self, code: &str) {
        log_parse_error(COMPONENT, code, self.position);
    }
}

/// [§ 5.1 Selector lists](https://www.w3.org/TR/selectors-4/#selector-list)
///
/// Split a qualified rule's prelude on top-level commas.
fn split_selector_list(prelude: &[ComponentValue]) -> Vec<Selector> {
    prelude
        .split(|value| {
            matches!(
                value,
                ComponentValue::Token {
                    token: CSSToken::Comma
                }
            )
        })
        .map(|part| Selector {
            text: super::rules::serialize(part).trim().to_string(),
        })
        .filter(|selector| !selector.text.is_empty())
        .collect()
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "If the last two non-`<whitespace-token>`s in the declaration's value are
/// a `<delim-token>` with the value "!" followed by an `<ident-token>` with a
/// value that is an ASCII case-insensitive match for "important", remove them
/// from the declaration's value and set the declaration's important flag to
/// true."
fn strip_important(value: &mut Vec<ComponentValue>) -> bool {
    let significant: Vec<usize> = value
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, item)| !item.is_whitespace())
        .map(|(index, _)| index)
        .take(2)
        .collect();
    let &[ident_at, bang_at] = significant.as_slice() else {
        return false;
    };
    let is_important = matches!(
        &value[ident_at],
        ComponentValue::Token { token: CSSToken::Ident(name) } if name.eq_ignore_ascii_case("important")
    ) && matches!(
        &value[bang_at],
        ComponentValue::Token { token } if token.is_delim('!')
    );
    if is_important {
        value.truncate(bang_at);
    }
    is_important
}
