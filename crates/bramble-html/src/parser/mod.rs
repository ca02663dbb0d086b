//! HTML tree construction.
//!
//! [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
//!
//! [`HTMLParser`] is a [`crate::tokenizer::TokenSink`]: the tokenizer hands it
//! each token as soon as it is emitted, and the parser dispatches on its
//! insertion mode to build a [`bramble_dom::DomTree`].

/// Tree dumps.
pub mod debug;
/// Foreign content (SVG and MathML).
mod foreign_content;
/// The list of active formatting elements and the adoption agency algorithm.
mod formatting;
/// Creating and inserting nodes.
mod insertion;
/// The insertion modes.
pub mod modes;
/// Document mode selection.
mod quirks;
/// Element scopes and stack helpers.
mod scope;
/// The parser struct and token dispatch.
mod tree_builder;

pub use debug::{format_tree, print_tree};
pub use formatting::ActiveFormattingElement;
pub use modes::InsertionMode;
pub use tree_builder::{FramesetOk, HTMLParser};
