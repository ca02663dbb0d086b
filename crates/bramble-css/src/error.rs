//! Errors from the CSS parsing entry points.
//!
//! [§ 5.3 Parser Entry Points](https://www.w3.org/TR/css-syntax-3/#parser-entry-points)
//!
//! Most of CSS parsing never fails: "parse a stylesheet" recovers from every
//! malformed construct by dropping it. The entry points that parse a single
//! item can fail, and so can any entry point that runs into blocks nested
//! deeper than the parser is willing to follow.

use thiserror::Error;

/// The deepest block or function nesting the parser follows.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Failure of a CSS parsing entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blocks or functions were nested deeper than [`MAX_NESTING_DEPTH`].
    #[error("blocks nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },

    /// "If the next input token is an `<EOF-token>`, return a syntax error."
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// "If the next input token is an `<EOF-token>`, return value. Otherwise,
    /// return a syntax error."
    #[error("expected end of input, found {found}")]
    ExpectedEof {
        /// The first token after the parsed value.
        found: String,
    },

    /// "parse a declaration" found something that is not a declaration.
    #[error("invalid declaration: {reason}")]
    InvalidDeclaration {
        /// What was wrong.
        reason: String,
    },
}
