//! CSS tokens per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! "The output of the tokenization step is a stream of zero or more of the
//! following tokens: `<ident-token>`, `<function-token>`, `<at-keyword-token>`,
//! `<hash-token>`, `<string-token>`, `<bad-string-token>`, `<url-token>`,
//! `<bad-url-token>`, `<delim-token>`, `<number-token>`, `<percentage-token>`,
//! `<dimension-token>`, `<whitespace-token>`, `<CDO-token>`, `<CDC-token>`,
//! `<colon-token>`, `<semicolon-token>`, `<comma-token>`, `<[-token>`,
//! `<]-token>`, `<(-token>`, `<)-token>`, `<{-token>`, and `<}-token>`."

use std::fmt;

use serde::Serialize;

/// The type flag of a `<hash-token>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    /// The value would start an ident sequence, so the hash can be an ID selector.
    Id,
    /// Anything else, e.g. `#123`.
    Unrestricted,
}

/// The type flag of a `<number-token>` or `<dimension-token>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    /// No decimal point and no exponent.
    Integer,
    /// Written with a decimal point or an exponent.
    Number,
}

/// [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum CSSToken {
    /// `<ident-token>`
    Ident(String),
    /// `<function-token>`: the name, without the opening parenthesis.
    Function(String),
    /// `<at-keyword-token>`: the name, without the `@`.
    AtKeyword(String),
    /// `<hash-token>`: the value, without the `#`.
    Hash {
        /// The name after `#`.
        value: String,
        /// Whether the value is a valid identifier.
        hash_type: HashType,
    },
    /// `<string-token>`: the unquoted, unescaped value.
    String(String),
    /// `<bad-string-token>`: a string broken by an unescaped newline.
    BadString,
    /// `<url-token>` from an unquoted `url(...)`.
    Url(String),
    /// `<bad-url-token>`
    BadUrl,
    /// `<delim-token>`
    Delim(char),
    /// `<number-token>`
    Number {
        /// The numeric value.
        value: f64,
        /// The type flag.
        kind: NumberKind,
    },
    /// `<percentage-token>`
    Percentage {
        /// The number before `%`.
        value: f64,
    },
    /// `<dimension-token>`
    Dimension {
        /// The numeric value.
        value: f64,
        /// The type flag.
        kind: NumberKind,
        /// The unit, as written.
        unit: String,
    },
    /// `<whitespace-token>`: one or more whitespace code points.
    Whitespace,
    /// `<CDO-token>`: `<!--`
    Cdo,
    /// `<CDC-token>`: `-->`
    Cdc,
    /// `<colon-token>`
    Colon,
    /// `<semicolon-token>`
    Semicolon,
    /// `<comma-token>`
    Comma,
    /// `<[-token>`
    LeftBracket,
    /// `<]-token>`
    RightBracket,
    /// `<(-token>`
    LeftParen,
    /// `<)-token>`
    RightParen,
    /// `<{-token>`
    LeftBrace,
    /// `<}-token>`
    RightBrace,
    /// `<EOF-token>`: "Conceptually, an `<EOF-token>` is returned when the
    /// token stream is exhausted."
    Eof,
}

impl CSSToken {
    /// An `<ident-token>`.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// A `<hash-token>` with the "id" flag.
    #[must_use]
    pub fn hash_id(value: impl Into<String>) -> Self {
        Self::Hash {
            value: value.into(),
            hash_type: HashType::Id,
        }
    }

    /// An integer `<number-token>`.
    #[must_use]
    pub const fn integer(value: f64) -> Self {
        Self::Number {
            value,
            kind: NumberKind::Integer,
        }
    }

    /// A `<dimension-token>`.
    #[must_use]
    pub fn dimension(value: f64, kind: NumberKind, unit: impl Into<String>) -> Self {
        Self::Dimension {
            value,
            kind,
            unit: unit.into(),
        }
    }

    /// True for the end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// True for a `<whitespace-token>`.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// True for a `<delim-token>` holding `c`.
    #[must_use]
    pub const fn is_delim(&self, c: char) -> bool {
        matches!(self, Self::Delim(d) if *d == c)
    }

    /// The closing token for a `{`, `[` or `(` token.
    #[must_use]
    pub const fn mirror(&self) -> Option<Self> {
        match self {
            Self::LeftBrace => Some(Self::RightBrace),
            Self::LeftBracket => Some(Self::RightBracket),
            Self::LeftParen => Some(Self::RightParen),
            _ => None,
        }
    }

    /// Append this token as CSS source text.
    ///
    /// This is a best-effort serializer: strings are re-quoted with `"` and
    /// escaping is only applied to quotes and backslashes. It is enough to
    /// print selectors and declaration values back out.
    pub fn write_css(&self, out: &mut String) {
        match self {
            Self::Ident(name) => out.push_str(name),
            Self::Function(name) => {
                out.push_str(name);
                out.push('(');
            }
            Self::AtKeyword(name) => {
                out.push('@');
                out.push_str(name);
            }
            Self::Hash { value, .. } => {
                out.push('#');
                out.push_str(value);
            }
            Self::String(value) => {
                out.push('"');
                for c in value.chars() {
                    if matches!(c, '"' | '\\') {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('"');
            }
            Self::Url(value) => {
                out.push_str("url(");
                out.push_str(value);
                out.push(')');
            }
            Self::BadString | Self::BadUrl | Self::Eof => {}
            Self::Delim(c) => out.push(*c),
            Self::Number { value, .. } => out.push_str(&value.to_string()),
            Self::Percentage { value } => {
                out.push_str(&value.to_string());
                out.push('%');
            }
            Self::Dimension { value, unit, .. } => {
                out.push_str(&value.to_string());
                out.push_str(unit);
            }
            Self::Whitespace => out.push(' '),
            Self::Cdo => out.push_str("<!--"),
            Self::Cdc => out.push_str("-->"),
            Self::Colon => out.push(':'),
            Self::Semicolon => out.push(';'),
            Self::Comma => out.push(','),
            Self::LeftBracket => out.push('['),
            Self::RightBracket => out.push(']'),
            Self::LeftParen => out.push('('),
            Self::RightParen => out.push(')'),
            Self::LeftBrace => out.push('{'),
            Self::RightBrace => out.push('}'),
        }
    }
}

/// Debug notation, one token per `<...>` group.
impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident {v}>"),
            Self::Function(v) => write!(f, "<function {v}>"),
            Self::AtKeyword(v) => write!(f, "<at-keyword {v}>"),
            Self::Hash { value, hash_type } => match hash_type {
                HashType::Id => write!(f, "<hash {value} id>"),
                HashType::Unrestricted => write!(f, "<hash {value}>"),
            },
            Self::String(v) => write!(f, "<string {v:?}>"),
            Self::BadString => f.write_str("<bad-string>"),
            Self::Url(v) => write!(f, "<url {v}>"),
            Self::BadUrl => f.write_str("<bad-url>"),
            Self::Delim(c) => write!(f, "<delim {c}>"),
            Self::Number { value, .. } => write!(f, "<number {value}>"),
            Self::Percentage { value } => write!(f, "<percentage {value}>"),
            Self::Dimension { value, unit, .. } => write!(f, "<dimension {value} {unit}>"),
            Self::Whitespace => f.write_str("<whitespace>"),
            Self::Cdo => f.write_str("<CDO>"),
            Self::Cdc => f.write_str("<CDC>"),
            Self::Colon => f.write_str("<:>"),
            Self::Semicolon => f.write_str("<;>"),
            Self::Comma => f.write_str("<,>"),
            Self::LeftBracket => f.write_str("<[>"),
            Self::RightBracket => f.write_str("<]>"),
            Self::LeftParen => f.write_str("<(>"),
            Self::RightParen => f.write_str("<)>"),
            Self::LeftBrace => f.write_str("<{>"),
            Self::RightBrace => f.write_str("<}>"),
            Self::Eof => f.write_str("<EOF>"),
        }
    }
}
