//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Token emission ("Emit the current token")
//! - Access to the current token under construction
//! - End tag handling shared by the RCDATA, RAWTEXT and script data states
//! - Parse error reporting

use super::core::HTMLTokenizer;
use super::sink::{Control, TokenSink};
use super::state::TokenizerState;
use super::token::{CurrentToken, DoctypeBuilder, TagBuilder, TagKind, Token};
use crate::error::{ParseErrorCode, ParseIssue};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<S> {
    /// "Switch to the X state"
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.input.reconsume();
        self.state = new_state;
    }

    /// "Switch to the return state."
    pub(super) const fn switch_to_return_state(&mut self) {
        self.state = self.return_state;
    }

    /// "Reconsume in the return state."
    pub(super) const fn reconsume_in_return_state(&mut self) {
        self.reconsume_in(self.return_state);
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// The tokenizer's whitespace set: tab, LF, FF and space. CR never
    /// reaches the tokenizer after newline normalization.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, '\t' | '\n' | '\x0C' | ' ')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<S> {
    /// Hand a token to the sink.
    ///
    /// Callers switch state before emitting, so a state change made by the
    /// sink is the one that sticks.
    pub(super) fn emit(&mut self, token: Token) {
        match &token {
            Token::StartTag { name, .. } => {
                self.last_start_tag_name = Some(name.clone());
            }
            // [§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
            // "When an end tag token is emitted with attributes, that is an
            // end-tag-with-attributes parse error. When an end tag token is
            // emitted with its self-closing flag set, that is an
            // end-tag-with-trailing-solidus parse error."
            Token::EndTag {
                self_closing,
                attributes,
                ..
            } => {
                if !attributes.is_empty() {
                    self.parse_error(ParseErrorCode::EndTagWithAttributes);
                }
                if *self_closing {
                    self.parse_error(ParseErrorCode::EndTagWithTrailingSolidus);
                }
            }
            Token::EndOfFile => self.eof_emitted = true,
            _ => {}
        }

        log::trace!("emit {token}");
        let mut control = Control {
            state: &mut self.state,
            position: self.input.position(),
        };
        self.sink.process_token(token, &mut control);
    }

    /// "Emit the current token"
    pub(super) fn emit_current_token(&mut self) {
        if let Some(token) = self.current_token.take() {
            self.emit(token.finish());
        }
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character(&mut self, c: char) {
        self.emit(Token::Character { data: c });
    }

    /// Emit one character token per code point of `s`.
    pub(super) fn emit_characters(&mut self, s: &str) {
        for c in s.chars() {
            self.emit_character(c);
        }
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof(&mut self) {
        self.emit(Token::EndOfFile);
    }

    /// "Emit the current token. Emit an end-of-file token."
    pub(super) fn emit_current_token_and_eof(&mut self) {
        self.emit_current_token();
        self.emit_eof();
    }
}

// =============================================================================
// Current Token Access
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<S> {
    /// "Create a new start tag token" / "Create a new end tag token"
    pub(super) fn create_tag(&mut self, kind: TagKind) {
        self.current_token = Some(CurrentToken::Tag(TagBuilder::new(kind)));
    }

    /// "Create a comment token" with the given initial data.
    pub(super) fn create_comment(&mut self, data: &str) {
        self.current_token = Some(CurrentToken::Comment(data.to_string()));
    }

    /// "Create a new DOCTYPE token"
    pub(super) fn create_doctype(&mut self) {
        self.current_token = Some(CurrentToken::Doctype(DoctypeBuilder::default()));
    }

    pub(super) fn current_tag(&mut self) -> Option<&mut TagBuilder> {
        match &mut self.current_token {
            Some(CurrentToken::Tag(tag)) => Some(tag),
            _ => None,
        }
    }

    pub(super) fn current_comment(&mut self) -> Option<&mut String> {
        match &mut self.current_token {
            Some(CurrentToken::Comment(data)) => Some(data),
            _ => None,
        }
    }

    pub(super) fn current_doctype(&mut self) -> Option<&mut DoctypeBuilder> {
        match &mut self.current_token {
            Some(CurrentToken::Doctype(doctype)) => Some(doctype),
            _ => None,
        }
    }

    /// "Append the current input character to the current tag token's tag name."
    pub(super) fn push_tag_name(&mut self, c: char) {
        if let Some(tag) = self.current_tag() {
            tag.name.push(c);
        }
    }

    /// "Append ... to the comment token's data."
    pub(super) fn push_comment(&mut self, s: &str) {
        if let Some(data) = self.current_comment() {
            data.push_str(s);
        }
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub(super) fn set_force_quirks(&mut self) {
        if let Some(doctype) = self.current_doctype() {
            doctype.force_quirks = true;
        }
    }
}

// =============================================================================
// RCDATA/RAWTEXT/Script Data Helpers
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<S> {
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any. If no start tag has been emitted from this tokenizer,
    /// then no end tag token is appropriate."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        match (&self.last_start_tag_name, &self.current_token) {
            (Some(last_start_tag), Some(CurrentToken::Tag(tag))) => {
                tag.kind == TagKind::End && &tag.name == last_start_tag
            }
            _ => false,
        }
    }

    /// "Anything else" arm shared by the RCDATA, RAWTEXT, script data and
    /// script data escaped end tag name states:
    ///
    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
    /// token, and a character token for each of the characters in the temporary
    /// buffer (in the order they were added to the buffer). Reconsume in the
    /// X state."
    pub(super) fn end_tag_name_anything_else(&mut self, raw_state: TokenizerState) {
        // The end tag token under construction is discarded.
        self.current_token = None;
        self.reconsume_in(raw_state);
        self.emit_characters("</");
        let buffer = std::mem::take(&mut self.temporary_buffer);
        self.emit_characters(&buffer);
        self.temporary_buffer = buffer;
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<S> {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records a parse error. Parse errors are not fatal; the caller performs
    /// the recovery step that follows the error in the state's definition.
    pub(super) fn parse_error(&mut self, code: ParseErrorCode) {
        let issue = ParseIssue::tokenizer(code, self.input.position());
        self.issues.push(issue);
    }
}
