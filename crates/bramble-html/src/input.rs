//! Input decoding and the code point cursor the tokenizer reads from.
//!
//! [§ 13.2.3 The input byte stream](https://html.spec.whatwg.org/multipage/parsing.html#the-input-byte-stream)

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::options::InputEncoding;

/// Decode raw bytes into a string.
///
/// With [`InputEncoding::Auto`] a byte order mark wins; otherwise the bytes
/// are taken as UTF-8 when they are valid UTF-8 and as Latin-1 when not.
#[must_use]
pub fn decode(bytes: &[u8], encoding: InputEncoding) -> String {
    match encoding {
        InputEncoding::Auto => {
            if let Some((bom_encoding, bom_length)) = Encoding::for_bom(bytes) {
                let (text, _) = bom_encoding.decode_without_bom_handling(&bytes[bom_length..]);
                return text.into_owned();
            }
            match std::str::from_utf8(bytes) {
                Ok(text) => text.to_owned(),
                Err(_) => decode_latin1(bytes),
            }
        }
        InputEncoding::Utf8 => UTF_8.decode_with_bom_removal(bytes).0.into_owned(),
        InputEncoding::Latin1 => decode_latin1(bytes),
        InputEncoding::Windows1252 => WINDOWS_1252
            .decode_without_bom_handling(bytes)
            .0
            .into_owned(),
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
///
/// "Before the tokenization stage, the input stream must be preprocessed by
/// normalizing newlines."
///
/// Every CR LF pair and every lone CR becomes a single LF.
#[must_use]
pub fn normalize_newlines(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                let _ = chars.next();
            }
            output.push('\n');
        } else {
            output.push(c);
        }
    }
    output
}

/// Position-tracked access to the normalized input.
///
/// [§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Reconsume in the X state" is modelled by a one-shot flag: the next call
/// to [`InputStream::consume`] returns the current input character again
/// instead of advancing.
#[derive(Debug, Clone)]
pub struct InputStream {
    chars: Vec<char>,
    position: usize,
    current: Option<char>,
    reconsume: bool,
}

impl InputStream {
    /// Build a stream over `input`, normalizing newlines first.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            chars: normalize_newlines(input).chars().collect(),
            position: 0,
            current: None,
            reconsume: false,
        }
    }

    /// "Consume the next input character". `None` is EOF.
    pub fn consume(&mut self) -> Option<char> {
        if self.reconsume {
            self.reconsume = false;
            return self.current;
        }
        self.current = self.chars.get(self.position).copied();
        if self.current.is_some() {
            self.position += 1;
        }
        self.current
    }

    /// Arrange for the current input character to be returned again.
    pub const fn reconsume(&mut self) {
        self.reconsume = true;
    }

    /// True when a reconsume is pending.
    #[must_use]
    pub const fn is_reconsuming(&self) -> bool {
        self.reconsume
    }

    /// The most recently consumed character.
    #[must_use]
    pub const fn current(&self) -> Option<char> {
        self.current
    }

    /// Index of the character the next [`InputStream::consume`] call returns.
    fn next_index(&self) -> usize {
        if self.reconsume && self.current.is_some() {
            self.position - 1
        } else {
            self.position
        }
    }

    /// Look at the character `offset` places past the next one, without
    /// consuming anything.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.next_index() + offset).copied()
    }

    /// "If the next few characters are ..." (exact match).
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        target
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek(i) == Some(expected))
    }

    /// "If the next few characters are an ASCII case-insensitive match for ..."
    #[must_use]
    pub fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        target
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek(i).is_some_and(|c| c.eq_ignore_ascii_case(&expected)))
    }

    /// Consume `count` characters that were already checked by lookahead.
    pub fn advance(&mut self, count: usize) {
        let end = (self.next_index() + count).min(self.chars.len());
        self.reconsume = false;
        self.position = end;
        self.current = end.checked_sub(1).and_then(|i| self.chars.get(i).copied());
    }

    /// Number of code points consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_crlf_and_lone_cr() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
    }

    #[test]
    fn test_reconsume_returns_same_character() {
        let mut input = InputStream::new("ab");
        assert_eq!(input.consume(), Some('a'));
        input.reconsume();
        assert_eq!(input.peek(0), Some('a'));
        assert_eq!(input.consume(), Some('a'));
        assert_eq!(input.consume(), Some('b'));
        assert_eq!(input.consume(), None);
        input.reconsume();
        assert_eq!(input.consume(), None);
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn test_lookahead_and_advance() {
        let mut input = InputStream::new("doctype html");
        assert!(input.next_few_characters_are_case_insensitive("DOCTYPE"));
        assert!(!input.next_few_characters_are("DOCTYPE"));
        input.advance(7);
        assert_eq!(input.current(), Some('e'));
        assert_eq!(input.consume(), Some(' '));
    }

    #[test]
    fn test_decode_prefers_bom() {
        let bytes = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
        assert_eq!(decode(&bytes, InputEncoding::Auto), "hi");
    }

    #[test]
    fn test_decode_falls_back_to_latin1() {
        let bytes = [b'c', b'a', b'f', 0xE9];
        assert_eq!(decode(&bytes, InputEncoding::Auto), "caf\u{e9}");
        assert_eq!(decode(&[0x80], InputEncoding::Windows1252), "\u{20ac}");
        assert_eq!(decode(&[0x80], InputEncoding::Latin1), "\u{80}");
    }
}
