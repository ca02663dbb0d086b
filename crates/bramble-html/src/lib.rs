//! HTML tokenizer and tree builder for the Bramble engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Input** ([WHATWG § 13.2.3](https://html.spec.whatwg.org/multipage/parsing.html#the-input-byte-stream))
//!   - BOM sniffing, UTF-8 with a Latin-1 fallback, newline normalization
//!
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - All eighty states, including the script data escape families, CDATA
//!     sections and the DOCTYPE identifier states
//!   - Numeric and named character references
//!
//! - **HTML Parser / Tree Builder** ([WHATWG § 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction))
//!   - All twenty-three insertion modes and the rules for foreign content
//!   - Active formatting elements, the adoption agency algorithm and foster
//!     parenting
//!   - Template contents
//!
//! # Not Implemented
//!
//! - Script execution and `document.write` (reported as
//!   [`IssueKind::Unsupported`])
//! - The fragment parsing algorithm
//! - Changing the encoding from a `meta` element

/// Parse issues.
pub mod error;
/// Input decoding and the code point cursor.
pub mod input;
/// Parser configuration.
pub mod options;
/// HTML parser and tree construction.
pub mod parser;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

use bramble_dom::DomTree;

pub use error::{IssueKind, ParseErrorCode, ParseIssue};
pub use options::{InputEncoding, ParserOptions};
pub use parser::{HTMLParser, InsertionMode, format_tree, print_tree};
pub use tokenizer::{Attribute, HTMLTokenizer, Token, TokenSink, TokenizerState};

/// The result of a parse: the tree and every issue found on the way.
#[derive(Debug)]
pub struct ParseOutput {
    /// The finished tree. `NodeId::ROOT` is the Document.
    pub tree: DomTree,
    /// Tokenizer and tree construction issues, ordered by input position.
    pub issues: Vec<ParseIssue>,
}

/// Parse a byte stream into a DOM tree with default options.
#[must_use]
pub fn parse(bytes: &[u8]) -> DomTree {
    parse_with_options(bytes, ParserOptions::default()).tree
}

/// Parse already-decoded text into a DOM tree with default options.
#[must_use]
pub fn parse_str(input: &str) -> DomTree {
    parse_str_with_options(input, ParserOptions::default()).tree
}

/// Decode `bytes` according to `options.encoding` and parse them.
#[must_use]
pub fn parse_with_options(bytes: &[u8], options: ParserOptions) -> ParseOutput {
    let text = input::decode(bytes, options.encoding);
    parse_str_with_options(&text, options)
}

/// Parse already-decoded text.
///
/// The tokenizer feeds the tree builder directly; there is no token queue.
/// Issues from both stages are merged and ordered by position.
#[must_use]
pub fn parse_str_with_options(input: &str, options: ParserOptions) -> ParseOutput {
    let parser = HTMLParser::new(options);
    let mut tokenizer = HTMLTokenizer::new(input, parser)
        .with_issue_log(options.collect_issues, options.max_issues);
    tokenizer.run();

    let (parser, mut issues) = tokenizer.into_parts();
    let (tree, parser_issues) = parser.into_parts();
    issues.extend(parser_issues);
    issues.sort_by_key(|issue| issue.position);
    if let Some(max) = options.max_issues {
        issues.truncate(max);
    }
    log::debug!(
        "parsed {} code points into {} nodes with {} issues",
        input.chars().count(),
        tree.len(),
        issues.len()
    );
    ParseOutput { tree, issues }
}

/// Tokenize `input` without building a tree.
///
/// Without a tree builder the tokenizer never leaves the data state on its
/// own, so `<script>` contents are tokenized as markup.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input, Vec::new());
    tokenizer.run();
    tokenizer.into_sink()
}
