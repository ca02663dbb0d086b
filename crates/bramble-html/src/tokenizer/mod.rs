//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard: all eighty states, character
//! references included. Tokens are pushed into a [`TokenSink`] as they are
//! emitted, and the sink may switch the tokenizer state before the next
//! character is consumed.

/// Character reference states per § 13.2.5.72 to § 13.2.5.80.
mod character_reference;
/// Markup declaration, comment and CDATA states.
mod comment_states;
/// HTML tokenizer state machine driver.
pub mod core;
/// Data, RCDATA, RAWTEXT, PLAINTEXT and script data states.
mod data_states;
/// DOCTYPE states.
mod doctype_states;
/// Helper methods for tokenizer state transitions.
mod helpers;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// The tokenizer/tree builder seam.
pub mod sink;
/// The state enum.
pub mod state;
/// Tag and attribute states.
mod tag_states;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::HTMLTokenizer;
pub use sink::{TokenSink, TokenizerControl};
pub use state::TokenizerState;
pub use token::{Attribute, Token};
