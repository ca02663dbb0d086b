use bramble_common::warning::log_parse_error;

use super::token::{CSSToken, HashType, NumberKind};

const COMPONENT: &str = "CSS Tokenizer";

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Converts CSS source text into a flat token list ending in
/// [`CSSToken::Eof`]. Parse errors are logged and tokenizing continues.
pub struct CSSTokenizer {
    /// The preprocessed input.
    input: Vec<char>,
    /// Index of the next input code point.
    position: usize,
    tokens: Vec<CSSToken>,
}

impl CSSTokenizer {
    /// Create a tokenizer over `input`, preprocessing it first.
    ///
    /// [§ 3.3 Preprocessing the input stream](https://www.w3.org/TR/css-syntax-3/#input-preprocessing)
    ///
    /// "Replace any U+000D CARRIAGE RETURN (CR) code points, U+000C FORM FEED
    /// (FF) code points, or pairs of U+000D CARRIAGE RETURN (CR) followed by
    /// U+000A LINE FEED (LF) in input by a single U+000A LINE FEED (LF) code
    /// point. Replace any U+0000 NULL or surrogate code points in input with
    /// U+FFFD REPLACEMENT CHARACTER."
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut chars = Vec::with_capacity(input.len());
        let mut iter = input.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '\r' => {
                    let _ = iter.next_if_eq(&'\n');
                    chars.push('\n');
                }
                '\x0C' => chars.push('\n'),
                '\0' => chars.push('\u{FFFD}'),
                c => chars.push(c),
            }
        }
        Self {
            input: chars,
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let done = token.is_eof();
            self.tokens.push(token);
            if done {
                break;
            }
        }
    }

    /// The collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[CSSToken] {
        &self.tokens
    }

    /// Take the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<CSSToken> {
        self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CSSToken {
        // "Consume comments."
        self.consume_comments();

        // "Consume the next input code point."
        let Some(c) = self.consume() else {
            return CSSToken::Eof;
        };

        match c {
            c if is_whitespace(c) => {
                self.consume_whitespace();
                CSSToken::Whitespace
            }
            '"' | '\'' => self.consume_string_token(c),
            '#' => {
                // "If the next input code point is an ident code point or the
                // next two input code points are a valid escape..."
                let (next, after, _) = self.lookahead(self.position);
                if next.is_some_and(is_ident_code_point) || is_valid_escape(next, after) {
                    // "If the next 3 input code points would start an ident
                    // sequence, set the <hash-token>'s type flag to "id"."
                    let (a, b, c) = self.lookahead(self.position);
                    let hash_type = if starts_ident_sequence(a, b, c) {
                        HashType::Id
                    } else {
                        HashType::Unrestricted
                    };
                    let value = self.consume_ident_sequence();
                    CSSToken::Hash { value, hash_type }
                } else {
                    CSSToken::Delim('#')
                }
            }
            '(' => CSSToken::LeftParen,
            ')' => CSSToken::RightParen,
            '+' | '.' => {
                // "If the input stream starts with a number, reconsume the
                // current input code point, consume a numeric token, and
                // return it."
                if self.current_starts_number() {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    CSSToken::Delim(c)
                }
            }
            ',' => CSSToken::Comma,
            '-' => {
                if self.current_starts_number() {
                    self.reconsume();
                    self.consume_numeric_token()
                } else if self.peek() == Some('-') && self.peek_at(1) == Some('>') {
                    // "Otherwise, if the next 2 input code points are U+002D
                    // HYPHEN-MINUS U+003E GREATER-THAN SIGN (->), consume them
                    // and return a <CDC-token>."
                    self.position += 2;
                    CSSToken::Cdc
                } else if self.current_starts_ident_sequence() {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    CSSToken::Delim('-')
                }
            }
            ':' => CSSToken::Colon,
            ';' => CSSToken::Semicolon,
            '<' => {
                if self.lookahead(self.position) == (Some('!'), Some('-'), Some('-')) {
                    self.position += 3;
                    CSSToken::Cdo
                } else {
                    CSSToken::Delim('<')
                }
            }
            '@' => {
                let (a, b, c) = self.lookahead(self.position);
                if starts_ident_sequence(a, b, c) {
                    CSSToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('@')
                }
            }
            '[' => CSSToken::LeftBracket,
            '\\' => {
                // "If the input stream starts with a valid escape, reconsume
                // the current input code point, consume an ident-like token,
                // and return it. Otherwise, this is a parse error."
                if is_valid_escape(Some('\\'), self.peek()) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    self.parse_error("invalid-escape");
                    CSSToken::Delim('\\')
                }
            }
            ']' => CSSToken::RightBracket,
            '{' => CSSToken::LeftBrace,
            '}' => CSSToken::RightBrace,
            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }
            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }
            c => CSSToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.position += 2;
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    None => {
                        // "If the preceding paragraph ended by consuming an
                        // EOF code point, this is a parse error."
                        self.parse_error("eof-in-comment");
                        return;
                    }
                }
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self, ending: char) -> CSSToken {
        let mut value = String::new();
        loop {
            match self.consume() {
                Some(c) if c == ending => return CSSToken::String(value),
                None => {
                    self.parse_error("eof-in-string");
                    return CSSToken::String(value);
                }
                Some('\n') => {
                    // "This is a parse error. Reconsume the current input code
                    // point, create a <bad-string-token>, and return it."
                    self.parse_error("newline-in-string");
                    self.reconsume();
                    return CSSToken::BadString;
                }
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> CSSToken {
        let (value, kind) = self.consume_number();

        let (a, b, c) = self.lookahead(self.position);
        if starts_ident_sequence(a, b, c) {
            let unit = self.consume_ident_sequence();
            CSSToken::Dimension { value, kind, unit }
        } else if self.peek() == Some('%') {
            self.position += 1;
            CSSToken::Percentage { value }
        } else {
            CSSToken::Number { value, kind }
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> CSSToken {
        let string = self.consume_ident_sequence();

        if string.eq_ignore_ascii_case("url") && self.peek() == Some('(') {
            self.position += 1;
            // "While the next two input code points are whitespace, consume
            // the next input code point."
            while self.peek().is_some_and(is_whitespace) && self.peek_at(1).is_some_and(is_whitespace)
            {
                self.position += 1;
            }
            // "If the next one or two input code points are U+0022 QUOTATION
            // MARK ("), U+0027 APOSTROPHE ('), or whitespace followed by
            // U+0022 QUOTATION MARK (") or U+0027 APOSTROPHE ('), then create
            // a <function-token> with its value set to string and return it."
            let next = self.peek();
            let quoted = matches!(next, Some('"' | '\''))
                || (next.is_some_and(is_whitespace)
                    && matches!(self.peek_at(1), Some('"' | '\'')));
            if quoted {
                CSSToken::Function(string)
            } else {
                self.consume_url_token()
            }
        } else if self.peek() == Some('(') {
            self.position += 1;
            CSSToken::Function(string)
        } else {
            CSSToken::Ident(string)
        }
    }

    /// [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url_token(&mut self) -> CSSToken {
        let mut value = String::new();
        self.consume_whitespace();

        loop {
            match self.consume() {
                Some(')') => return CSSToken::Url(value),
                None => {
                    self.parse_error("eof-in-url");
                    return CSSToken::Url(value);
                }
                Some(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    match self.peek() {
                        Some(')') => {
                            self.position += 1;
                            return CSSToken::Url(value);
                        }
                        None => {
                            self.parse_error("eof-in-url");
                            return CSSToken::Url(value);
                        }
                        Some(_) => {
                            self.consume_bad_url_remnants();
                            return CSSToken::BadUrl;
                        }
                    }
                }
                Some(c) if matches!(c, '"' | '\'' | '(') || is_non_printable(c) => {
                    self.parse_error("unexpected-character-in-url");
                    self.consume_bad_url_remnants();
                    return CSSToken::BadUrl;
                }
                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek()) {
                        value.push(self.consume_escaped_code_point());
                    } else {
                        self.parse_error("invalid-escape");
                        self.consume_bad_url_remnants();
                        return CSSToken::BadUrl;
                    }
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.consume() {
                Some(')') | None => return,
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    let _ = self.consume_escaped_code_point();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        while let Some(c) = self.consume() {
            if is_ident_code_point(c) {
                result.push(c);
            } else if is_valid_escape(Some(c), self.peek()) {
                result.push(self.consume_escaped_code_point());
            } else {
                self.reconsume();
                break;
            }
        }
        result
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> (f64, NumberKind) {
        let mut kind = NumberKind::Integer;
        let mut repr = String::new();

        if matches!(self.peek(), Some('+' | '-')) {
            self.take_into(&mut repr, 1);
        }
        self.take_digits(&mut repr);

        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.take_into(&mut repr, 2);
            self.take_digits(&mut repr);
            kind = NumberKind::Number;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                self.take_into(&mut repr, digit_at + 1);
                self.take_digits(&mut repr);
                kind = NumberKind::Number;
            }
        }

        // "Convert repr to a number."
        (repr.parse().unwrap_or(0.0), kind)
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// The backslash has already been consumed.
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = String::from(c);
                // "Consume as many hex digits as possible, but no more than 5."
                while hex.len() < 6 && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                    self.take_into(&mut hex, 1);
                }
                if self.peek().is_some_and(is_whitespace) {
                    self.position += 1;
                }
                // "If this number is zero, or is for a surrogate, or is greater
                // than the maximum allowed code point, return U+FFFD
                // REPLACEMENT CHARACTER."
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|&n| n != 0)
                    .and_then(char::from_u32)
                    .unwrap_or('\u{FFFD}')
            }
            Some(c) => c,
            None => {
                self.parse_error("eof-in-escape");
                '\u{FFFD}'
            }
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number),
    /// starting from the current input code point.
    fn current_starts_number(&self) -> bool {
        let (a, b, c) = self.lookahead(self.position.saturating_sub(1));
        starts_number(a, b, c)
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier),
    /// starting from the current input code point.
    fn current_starts_ident_sequence(&self) -> bool {
        let (a, b, c) = self.lookahead(self.position.saturating_sub(1));
        starts_ident_sequence(a, b, c)
    }

    fn lookahead(&self, from: usize) -> (Option<char>, Option<char>, Option<char>) {
        (
            self.input.get(from).copied(),
            self.input.get(from + 1).copied(),
            self.input.get(from + 2).copied(),
        )
    }

    /// Move `count` code points from the input onto `out`.
    fn take_into(&mut self, out: &mut String, count: usize) {
        for _ in 0..count {
            if let Some(c) = self.consume() {
                out.push(c);
            }
        }
    }

    fn take_digits(&mut self, out: &mut String) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.take_into(out, 1);
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn parse_error(&self, code: &str) {
        log_parse_error(COMPONENT, code, self.position);
    }
}

/// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
///
/// Preprocessing has already turned CR and FF into newlines.
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ')
}

/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}

/// "A code point between U+0000 NULL and U+0008 BACKSPACE inclusive, or
/// U+000B LINE TABULATION, or a code point between U+000E SHIFT OUT and
/// U+001F INFORMATION SEPARATOR ONE inclusive, or U+007F DELETE."
const fn is_non_printable(c: char) -> bool {
    matches!(c, '\0'..='\x08' | '\x0B' | '\x0E'..='\x1F' | '\x7F')
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second != Some('\n')
}

/// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn starts_ident_sequence(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some('-') => {
            second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                || is_valid_escape(second, third)
        }
        Some('\\') => is_valid_escape(first, second),
        Some(c) => is_ident_start_code_point(c),
        None => false,
    }
}

/// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
fn starts_number(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    let digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
    match first {
        Some('+' | '-') => digit(second) || (second == Some('.') && digit(third)),
        Some('.') => digit(second),
        c => digit(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocessing() {
        let tokenizer = CSSTokenizer::new("a\r\nb\rc\x0Cd\0");
        assert_eq!(tokenizer.input.iter().collect::<String>(), "a\nb\nc\nd\u{FFFD}");
    }

    #[test]
    fn test_three_code_point_checks() {
        assert!(starts_ident_sequence(Some('-'), Some('-'), None));
        assert!(starts_ident_sequence(Some('-'), Some('a'), None));
        assert!(!starts_ident_sequence(Some('-'), Some('1'), None));
        assert!(starts_ident_sequence(Some('\\'), Some('x'), None));
        assert!(!starts_ident_sequence(Some('\\'), Some('\n'), None));
        assert!(starts_number(Some('-'), Some('.'), Some('5')));
        assert!(!starts_number(Some('+'), Some('.'), Some('x')));
        assert!(starts_number(Some('7'), None, None));
    }
}
