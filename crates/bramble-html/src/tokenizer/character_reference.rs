//! Character reference states for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The temporary buffer holds the code points consumed as the reference so
//! they can be flushed back verbatim when no replacement applies.

use super::core::HTMLTokenizer;
use super::named_character_references::{LONGEST_ENTITY_NAME, longest_match};
use super::sink::TokenSink;
use super::state::TokenizerState;
use crate::error::ParseErrorCode;

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// Replacements for code points 0x80 to 0x9F that windows-1252 maps to
/// printable characters.
const C1_REPLACEMENTS: [(u32, char); 27] = [
    (0x80, '\u{20AC}'),
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

/// [Noncharacter](https://infra.spec.whatwg.org/#noncharacter)
const fn is_noncharacter(code: u32) -> bool {
    matches!(code, 0xFDD0..=0xFDEF) || (code <= 0x10_FFFF && code & 0xFFFE == 0xFFFE)
}

/// [Control](https://infra.spec.whatwg.org/#control) that is not
/// [ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace),
/// plus U+000D, which the character reference rules single out.
const fn is_disallowed_control(code: u32) -> bool {
    let control = matches!(code, 0x00..=0x1F | 0x7F..=0x9F);
    let whitespace = matches!(code, 0x09 | 0x0A | 0x0C | 0x20);
    code == 0x0D || (control && !whitespace)
}

impl<S: TokenSink> HTMLTokenizer<S> {
    /// "If the character reference was consumed as part of an attribute
    /// (return state is either attribute value (double-quoted) state,
    /// attribute value (single-quoted) state, or attribute value (unquoted)
    /// state)"
    const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            TokenizerState::AttributeValueDoubleQuoted
                | TokenizerState::AttributeValueSingleQuoted
                | TokenizerState::AttributeValueUnquoted
        )
    }

    /// "Flush code points consumed as a character reference"
    ///
    /// "If the character reference was consumed as part of an attribute, then
    /// append each character to the current attribute's value. Otherwise,
    /// emit each character as a character token."
    fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            if let Some(tag) = self.current_tag() {
                tag.push_attribute_value_str(&buffer);
            }
        } else {
            self.emit_characters(&buffer);
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        // "Set the temporary buffer to the empty string. Append a U+0026
        // AMPERSAND (&) character to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');
        match self.current_input_character {
            // "ASCII alphanumeric: Reconsume in the named character reference state."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            // "U+0023 NUMBER SIGN (#): Append the current input character to the
            // temporary buffer. Switch to the numeric character reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Anything else: Flush code points consumed as a character
            // reference. Reconsume in the return state."
            _ => {
                self.reconsume_in_return_state();
                self.flush_code_points_consumed_as_character_reference();
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the named character references
    /// table."
    pub(super) fn handle_named_character_reference_state(&mut self) {
        let mut candidate = String::new();
        let mut offset = 0;
        while offset < LONGEST_ENTITY_NAME {
            match self.input.peek(offset) {
                Some(c) if c.is_ascii_alphanumeric() => candidate.push(c),
                Some(';') => {
                    candidate.push(';');
                    break;
                }
                _ => break,
            }
            offset += 1;
        }

        let Some((name, replacement)) = longest_match(&candidate) else {
            // "Otherwise: Flush code points consumed as a character reference.
            // Switch to the ambiguous ampersand state."
            self.switch_to(TokenizerState::AmbiguousAmpersand);
            self.flush_code_points_consumed_as_character_reference();
            return;
        };

        // "Append each character to the temporary buffer when it's consumed."
        self.input.advance(name.chars().count());
        self.temporary_buffer.push_str(name);
        let ends_with_semicolon = name.ends_with(';');

        // "If the character reference was consumed as part of an attribute,
        // and the last character matched is not a U+003B SEMICOLON character
        // (;), and the next input character is either a U+003D EQUALS SIGN
        // character (=) or an ASCII alphanumeric, then, for historical reasons,
        // flush code points consumed as a character reference and switch to
        // the return state."
        if self.is_consumed_as_part_of_attribute()
            && !ends_with_semicolon
            && self
                .input
                .peek(0)
                .is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
        {
            self.switch_to_return_state();
            self.flush_code_points_consumed_as_character_reference();
            return;
        }

        // "If the last character matched is not a U+003B SEMICOLON character
        // (;), then this is a missing-semicolon-after-character-reference parse
        // error."
        if !ends_with_semicolon {
            self.parse_error(ParseErrorCode::MissingSemicolonAfterCharacterReference);
        }

        // "Set the temporary buffer to the empty string. Append one or two
        // characters corresponding to the character reference name (as given
        // by the second column of the named character references table) to the
        // temporary buffer. Flush code points consumed as a character
        // reference. Switch to the return state."
        self.temporary_buffer.clear();
        self.temporary_buffer.push_str(replacement);
        self.switch_to_return_state();
        self.flush_code_points_consumed_as_character_reference();
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    pub(super) fn handle_ambiguous_ampersand_state(&mut self) {
        match self.current_input_character {
            // "If the character reference was consumed as part of an attribute,
            // then append the current input character to the current
            // attribute's value. Otherwise, emit the current input character as
            // a character token."
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.is_consumed_as_part_of_attribute() {
                    self.push_attribute_value(c);
                } else {
                    self.emit_character(c);
                }
            }
            // "This is an unknown-named-character-reference parse error.
            // Reconsume in the return state."
            Some(';') => {
                self.parse_error(ParseErrorCode::UnknownNamedCharacterReference);
                self.reconsume_in_return_state();
            }
            _ => self.reconsume_in_return_state(),
        }
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;
        match self.current_input_character {
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            _ => self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart),
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_numeric_character_reference_start_state(&mut self, radix: u32) {
        match self.current_input_character {
            Some(c) if c.is_digit(radix) => self.reconsume_in(if radix == 16 {
                TokenizerState::HexadecimalCharacterReference
            } else {
                TokenizerState::DecimalCharacterReference
            }),
            // "This is an absence-of-digits-in-numeric-character-reference parse
            // error. Flush code points consumed as a character reference.
            // Reconsume in the return state."
            _ => {
                self.parse_error(ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference);
                self.reconsume_in_return_state();
                self.flush_code_points_consumed_as_character_reference();
            }
        }
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    ///
    /// The code saturates instead of overflowing; anything past U+10FFFF is
    /// rejected in the end state either way.
    pub(super) fn handle_numeric_character_reference_digits_state(&mut self, radix: u32) {
        match self.current_input_character {
            Some(c) if c.is_digit(radix) => {
                let digit = c.to_digit(radix).unwrap_or_default();
                self.character_reference_code = self
                    .character_reference_code
                    .saturating_mul(radix)
                    .saturating_add(digit);
            }
            Some(';') => self.switch_to(TokenizerState::NumericCharacterReferenceEnd),
            // "This is a missing-semicolon-after-character-reference parse
            // error. Reconsume in the numeric character reference end state."
            _ => {
                self.parse_error(ParseErrorCode::MissingSemicolonAfterCharacterReference);
                self.reconsume_in(TokenizerState::NumericCharacterReferenceEnd);
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// Runs without consuming; a pending reconsume carries over to the
    /// return state.
    pub(super) fn handle_numeric_character_reference_end_state(&mut self) {
        let code = self.character_reference_code;
        let replacement = if code == 0 {
            // "If the number is 0x00, then this is a null-character-reference
            // parse error. Set the character reference code to 0xFFFD."
            self.parse_error(ParseErrorCode::NullCharacterReference);
            '\u{FFFD}'
        } else if code > 0x10_FFFF {
            self.parse_error(ParseErrorCode::CharacterReferenceOutsideUnicodeRange);
            '\u{FFFD}'
        } else if (0xD800..=0xDFFF).contains(&code) {
            self.parse_error(ParseErrorCode::SurrogateCharacterReference);
            '\u{FFFD}'
        } else {
            // "If the number is a noncharacter, then this is a
            // noncharacter-character-reference parse error."
            if is_noncharacter(code) {
                self.parse_error(ParseErrorCode::NoncharacterCharacterReference);
            }
            // "If the number is 0x0D, or a control that's not ASCII whitespace,
            // then this is a control-character-reference parse error. If the
            // number is one of the numbers in the first column of the following
            // table, then find the row with that number in the first column,
            // and set the character reference code to the number in the second
            // column of that row."
            if is_disallowed_control(code) {
                self.parse_error(ParseErrorCode::ControlCharacterReference);
            }
            C1_REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == code)
                .map(|(_, to)| *to)
                .or_else(|| char::from_u32(code))
                .unwrap_or('\u{FFFD}')
        };

        // "Set the temporary buffer to the empty string. Append a code point
        // equal to the character reference code to the temporary buffer. Flush
        // code points consumed as a character reference. Switch to the return
        // state."
        self.temporary_buffer.clear();
        self.temporary_buffer.push(replacement);
        self.switch_to_return_state();
        self.flush_code_points_consumed_as_character_reference();
    }
}
