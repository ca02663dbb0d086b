//! CSS tokenizer.

/// The tokenizer state machine.
pub mod core;
/// CSS token types.
pub mod token;

pub use self::core::CSSTokenizer;
pub use token::{CSSToken, HashType, NumberKind};
