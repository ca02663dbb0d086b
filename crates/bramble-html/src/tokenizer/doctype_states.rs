//! DOCTYPE states.
//!
//! Public and system identifiers share their handlers; a `public` flag picks
//! the field, the follow-up states and the error codes.

use super::core::HTMLTokenizer;
use super::sink::TokenSink;
use super::state::TokenizerState;
use crate::error::ParseErrorCode;

impl<S: TokenSink> HTMLTokenizer<S> {
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            Some('>') => self.reconsume_in(TokenizerState::BeforeDOCTYPEName),
            // "This is an eof-in-doctype parse error. Create a new DOCTYPE
            // token. Set its force-quirks flag to on. Emit the current token.
            // Emit an end-of-file token."
            None => {
                self.create_doctype();
                self.eof_in_doctype();
            }
            Some(_) => {
                self.parse_error(ParseErrorCode::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.start_doctype_name('\u{FFFD}');
            }
            // "This is a missing-doctype-name parse error. Create a new DOCTYPE
            // token. Set its force-quirks flag to on. Switch to the data state.
            // Emit the current token."
            Some('>') => {
                self.parse_error(ParseErrorCode::MissingDoctypeName);
                self.create_doctype();
                self.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.create_doctype();
                self.eof_in_doctype();
            }
            Some(c) => self.start_doctype_name(c.to_ascii_lowercase()),
        }
    }

    /// "Create a new DOCTYPE token. Set the token's name to the current input
    /// character. Switch to the DOCTYPE name state."
    fn start_doctype_name(&mut self, c: char) {
        self.create_doctype();
        if let Some(doctype) = self.current_doctype() {
            doctype.name = Some(c.to_string());
        }
        self.switch_to(TokenizerState::DOCTYPEName);
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.push_doctype_name('\u{FFFD}');
            }
            None => self.eof_in_doctype(),
            Some(c) => self.push_doctype_name(c.to_ascii_lowercase()),
        }
    }

    fn push_doctype_name(&mut self, c: char) {
        if let Some(doctype) = self.current_doctype() {
            doctype.name.get_or_insert_with(String::new).push(c);
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => self.eof_in_doctype(),
            // "If the six characters starting from the current input character
            // are an ASCII case-insensitive match for the word "PUBLIC", then
            // consume those characters and switch to the after DOCTYPE public
            // keyword state."
            Some(c)
                if c.eq_ignore_ascii_case(&'p')
                    && self.input.next_few_characters_are_case_insensitive("UBLIC") =>
            {
                self.input.advance(5);
                self.switch_to(TokenizerState::AfterDOCTYPEPublicKeyword);
            }
            Some(c)
                if c.eq_ignore_ascii_case(&'s')
                    && self.input.next_few_characters_are_case_insensitive("YSTEM") =>
            {
                self.input.advance(5);
                self.switch_to(TokenizerState::AfterDOCTYPESystemKeyword);
            }
            // "Otherwise, this is an invalid-character-sequence-after-doctype-name
            // parse error. Set the current DOCTYPE token's force-quirks flag to
            // on. Reconsume in the bogus DOCTYPE state."
            Some(_) => {
                self.parse_error(ParseErrorCode::InvalidCharacterSequenceAfterDoctypeName);
                self.set_force_quirks();
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_keyword_state(&mut self, public: bool) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(if public {
                    TokenizerState::BeforeDOCTYPEPublicIdentifier
                } else {
                    TokenizerState::BeforeDOCTYPESystemIdentifier
                });
            }
            // "This is a missing-whitespace-after-doctype-public-keyword parse
            // error. Set the current DOCTYPE token's public identifier to the
            // empty string (not missing), then switch to the DOCTYPE public
            // identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(if public {
                    ParseErrorCode::MissingWhitespaceAfterDoctypePublicKeyword
                } else {
                    ParseErrorCode::MissingWhitespaceAfterDoctypeSystemKeyword
                });
                self.begin_identifier(public, quote);
            }
            Some('>') => self.missing_identifier(public),
            None => self.eof_in_doctype(),
            Some(_) => self.missing_quote_before_identifier(public),
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_identifier_state(&mut self, public: bool) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => self.begin_identifier(public, quote),
            Some('>') => self.missing_identifier(public),
            None => self.eof_in_doctype(),
            Some(_) => self.missing_quote_before_identifier(public),
        }
    }

    /// [§ 13.2.5.59-60 DOCTYPE public identifier (quoted) states](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// [§ 13.2.5.65-66 DOCTYPE system identifier (quoted) states](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    pub(super) fn handle_doctype_identifier_quoted_state(&mut self, public: bool, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(if public {
                TokenizerState::AfterDOCTYPEPublicIdentifier
            } else {
                TokenizerState::AfterDOCTYPESystemIdentifier
            }),
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.push_identifier(public, '\u{FFFD}');
            }
            // "This is an abrupt-doctype-public-identifier parse error. Set the
            // current DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => {
                self.parse_error(if public {
                    ParseErrorCode::AbruptDoctypePublicIdentifier
                } else {
                    ParseErrorCode::AbruptDoctypeSystemIdentifier
                });
                self.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => self.eof_in_doctype(),
            Some(c) => self.push_identifier(public, c),
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(
                    ParseErrorCode::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.begin_identifier(false, quote);
            }
            None => self.eof_in_doctype(),
            Some(_) => self.missing_quote_before_identifier(false),
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(quote @ ('"' | '\'')) => self.begin_identifier(false, quote),
            None => self.eof_in_doctype(),
            Some(_) => self.missing_quote_before_identifier(false),
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => self.eof_in_doctype(),
            // "This is an unexpected-character-after-doctype-system-identifier
            // parse error. Reconsume in the bogus DOCTYPE state. (This does not
            // set the current DOCTYPE token's force-quirks flag to on.)"
            Some(_) => {
                self.parse_error(ParseErrorCode::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => self.parse_error(ParseErrorCode::UnexpectedNullCharacter),
            None => self.emit_current_token_and_eof(),
            Some(_) => {}
        }
    }
}

// =============================================================================
// Shared identifier steps
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<S> {
    /// Set the identifier to the empty string (not missing) and switch to the
    /// quoted state matching `quote`.
    fn begin_identifier(&mut self, public: bool, quote: char) {
        if let Some(doctype) = self.current_doctype() {
            let field = if public {
                &mut doctype.public_identifier
            } else {
                &mut doctype.system_identifier
            };
            *field = Some(String::new());
        }
        let next = match (public, quote) {
            (true, '"') => TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted,
            (true, _) => TokenizerState::DOCTYPEPublicIdentifierSingleQuoted,
            (false, '"') => TokenizerState::DOCTYPESystemIdentifierDoubleQuoted,
            (false, _) => TokenizerState::DOCTYPESystemIdentifierSingleQuoted,
        };
        self.switch_to(next);
    }

    fn push_identifier(&mut self, public: bool, c: char) {
        if let Some(doctype) = self.current_doctype() {
            let field = if public {
                &mut doctype.public_identifier
            } else {
                &mut doctype.system_identifier
            };
            field.get_or_insert_with(String::new).push(c);
        }
    }

    /// "This is a missing-doctype-public-identifier parse error. Set the
    /// current DOCTYPE token's force-quirks flag to on. Switch to the data
    /// state. Emit the current DOCTYPE token."
    fn missing_identifier(&mut self, public: bool) {
        self.parse_error(if public {
            ParseErrorCode::MissingDoctypePublicIdentifier
        } else {
            ParseErrorCode::MissingDoctypeSystemIdentifier
        });
        self.set_force_quirks();
        self.switch_to(TokenizerState::Data);
        self.emit_current_token();
    }

    /// "This is a missing-quote-before-doctype-public-identifier parse error.
    /// Set the current DOCTYPE token's force-quirks flag to on. Reconsume in
    /// the bogus DOCTYPE state."
    fn missing_quote_before_identifier(&mut self, public: bool) {
        self.parse_error(if public {
            ParseErrorCode::MissingQuoteBeforeDoctypePublicIdentifier
        } else {
            ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier
        });
        self.set_force_quirks();
        self.reconsume_in(TokenizerState::BogusDOCTYPE);
    }

    /// "This is an eof-in-doctype parse error. Set the current DOCTYPE token's
    /// force-quirks flag to on. Emit the current DOCTYPE token. Emit an
    /// end-of-file token."
    fn eof_in_doctype(&mut self) {
        self.parse_error(ParseErrorCode::EofInDoctype);
        self.set_force_quirks();
        self.emit_current_token_and_eof();
    }
}
