//! Property tests for the CSS tokenizer and parser.

use bramble_css::{CSSToken, parse, parse_declaration_list, tokenize};
use quickcheck_macros::quickcheck;

/// Tokenizing any input ends in exactly one EOF token.
#[quickcheck]
fn prop_single_trailing_eof(input: String) -> bool {
    let tokens = tokenize(&input);
    tokens.last() == Some(&CSSToken::Eof) && tokens.iter().filter(|t| t.is_eof()).count() == 1
}

/// Preprocessing removes every CR, FF and NUL before tokens are built.
/// Escapes can still produce them, so inputs with a backslash are skipped.
#[quickcheck]
fn prop_no_preprocessed_characters_in_idents(input: String) -> bool {
    input.contains('\\') || tokenize(&input).iter().all(|token| match token {
        CSSToken::Ident(value) | CSSToken::String(value) => {
            !value.contains(['\r', '\x0C', '\0'])
        }
        _ => true,
    })
}

/// Stylesheet parsing only fails on nesting, which short inputs cannot reach.
#[quickcheck]
fn prop_short_stylesheets_parse(input: String) -> bool {
    input.chars().count() > bramble_css::MAX_NESTING_DEPTH || parse(&input).is_ok()
}

/// Every declaration parsed from a style attribute has a non-empty name.
#[quickcheck]
fn prop_declarations_have_names(input: String) -> bool {
    parse_declaration_list(&input).is_ok_and(|declarations| {
        declarations.iter().all(|declaration| !declaration.name.is_empty())
    }) || input.chars().count() > bramble_css::MAX_NESTING_DEPTH
}
