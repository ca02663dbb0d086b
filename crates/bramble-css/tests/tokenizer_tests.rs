//! Integration tests for the CSS tokenizer.

use bramble_css::tokenize;
use bramble_css::tokenizer::{CSSToken, HashType, NumberKind};

#[test]
fn test_whitespace_collapses() {
    let tokens = tokenize("   \t\n  ");
    assert_eq!(tokens, vec![CSSToken::Whitespace, CSSToken::Eof]);
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![CSSToken::Eof]);
}

#[test]
fn test_ident_function_at_keyword() {
    let tokens = tokenize("background-color rgb( @media");
    assert_eq!(
        tokens,
        vec![
            CSSToken::ident("background-color"),
            CSSToken::Whitespace,
            CSSToken::Function("rgb".to_string()),
            CSSToken::Whitespace,
            CSSToken::AtKeyword("media".to_string()),
            CSSToken::Eof,
        ]
    );
}

#[test]
fn test_custom_property_name() {
    let tokens = tokenize("--main-color");
    assert_eq!(tokens[0], CSSToken::ident("--main-color"));
}

#[test]
fn test_hash_types() {
    let tokens = tokenize("#header #123");
    assert_eq!(tokens[0], CSSToken::hash_id("header"));
    match &tokens[2] {
        CSSToken::Hash { value, hash_type } => {
            assert_eq!(value, "123");
            assert_eq!(*hash_type, HashType::Unrestricted);
        }
        other => panic!("Expected Hash token, got {other}"),
    }
}

#[test]
fn test_lone_hash_is_delim() {
    let tokens = tokenize("# ");
    assert_eq!(tokens[0], CSSToken::Delim('#'));
}

#[test]
fn test_strings() {
    let tokens = tokenize(r#""double" 'single' "esc\"aped""#);
    assert_eq!(tokens[0], CSSToken::String("double".to_string()));
    assert_eq!(tokens[2], CSSToken::String("single".to_string()));
    assert_eq!(tokens[4], CSSToken::String("esc\"aped".to_string()));
}

#[test]
fn test_newline_in_string_is_bad_string() {
    let tokens = tokenize("\"abc\ndef");
    assert_eq!(
        tokens,
        vec![
            CSSToken::BadString,
            CSSToken::Whitespace,
            CSSToken::ident("def"),
            CSSToken::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string_at_eof() {
    let tokens = tokenize("'open");
    assert_eq!(tokens, vec![CSSToken::String("open".to_string()), CSSToken::Eof]);
}

#[test]
fn test_escaped_newline_in_string_is_dropped() {
    let tokens = tokenize("\"a\\\nb\"");
    assert_eq!(tokens[0], CSSToken::String("ab".to_string()));
}

#[test]
fn test_numbers() {
    let tokens = tokenize("42 2.5 -7 +5 1e3");
    assert_eq!(tokens[0], CSSToken::integer(42.0));
    assert_eq!(
        tokens[2],
        CSSToken::Number {
            value: 2.5,
            kind: NumberKind::Number
        }
    );
    assert_eq!(tokens[4], CSSToken::integer(-7.0));
    assert_eq!(tokens[6], CSSToken::integer(5.0));
    assert_eq!(
        tokens[8],
        CSSToken::Number {
            value: 1000.0,
            kind: NumberKind::Number
        }
    );
}

#[test]
fn test_leading_dot_number() {
    let tokens = tokenize(".5");
    assert_eq!(
        tokens[0],
        CSSToken::Number {
            value: 0.5,
            kind: NumberKind::Number
        }
    );
}

#[test]
fn test_percentage_and_dimension() {
    let tokens = tokenize("50% 10px 1.5em");
    assert_eq!(tokens[0], CSSToken::Percentage { value: 50.0 });
    assert_eq!(tokens[2], CSSToken::dimension(10.0, NumberKind::Integer, "px"));
    assert_eq!(tokens[4], CSSToken::dimension(1.5, NumberKind::Number, "em"));
}

#[test]
fn test_exponent_without_digits_is_a_unit() {
    let tokens = tokenize("2em");
    assert_eq!(tokens[0], CSSToken::dimension(2.0, NumberKind::Integer, "em"));
}

#[test]
fn test_unquoted_url() {
    let tokens = tokenize("url(  image.png  )");
    assert_eq!(tokens, vec![CSSToken::Url("image.png".to_string()), CSSToken::Eof]);
}

#[test]
fn test_quoted_url_is_function() {
    let tokens = tokenize("url(\"image.png\")");
    assert_eq!(
        tokens,
        vec![
            CSSToken::Function("url".to_string()),
            CSSToken::String("image.png".to_string()),
            CSSToken::RightParen,
            CSSToken::Eof,
        ]
    );
}

#[test]
fn test_bad_url() {
    assert_eq!(tokenize("url(a b)"), vec![CSSToken::BadUrl, CSSToken::Eof]);
    assert_eq!(tokenize("url(a'b) x")[0], CSSToken::BadUrl);
    assert_eq!(tokenize("url(a'b) x")[2], CSSToken::ident("x"));
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("a/* comment */b/* unterminated");
    assert_eq!(
        tokens,
        vec![CSSToken::ident("a"), CSSToken::ident("b"), CSSToken::Eof]
    );
}

#[test]
fn test_cdo_cdc() {
    let tokens = tokenize("<!-- -->");
    assert_eq!(
        tokens,
        vec![CSSToken::Cdo, CSSToken::Whitespace, CSSToken::Cdc, CSSToken::Eof]
    );
}

#[test]
fn test_escapes_in_ident() {
    // The hex escape swallows one trailing space.
    assert_eq!(tokenize("\\41 b")[0], CSSToken::ident("Ab"));
    assert_eq!(tokenize("a\\:b")[0], CSSToken::ident("a:b"));
    assert_eq!(tokenize("\\0")[0], CSSToken::ident("\u{FFFD}"));
}

#[test]
fn test_preprocessing_in_tokens() {
    assert_eq!(
        tokenize("a\r\nb"),
        vec![
            CSSToken::ident("a"),
            CSSToken::Whitespace,
            CSSToken::ident("b"),
            CSSToken::Eof,
        ]
    );
    assert_eq!(tokenize("a\0b")[0], CSSToken::ident("a\u{FFFD}b"));
}

#[test]
fn test_punctuation() {
    let tokens = tokenize(":;,[](){}");
    assert_eq!(
        tokens,
        vec![
            CSSToken::Colon,
            CSSToken::Semicolon,
            CSSToken::Comma,
            CSSToken::LeftBracket,
            CSSToken::RightBracket,
            CSSToken::LeftParen,
            CSSToken::RightParen,
            CSSToken::LeftBrace,
            CSSToken::RightBrace,
            CSSToken::Eof,
        ]
    );
}

#[test]
fn test_delims() {
    let tokens = tokenize("a > b ~ c + d");
    assert_eq!(tokens[2], CSSToken::Delim('>'));
    assert_eq!(tokens[6], CSSToken::Delim('~'));
    assert_eq!(tokens[10], CSSToken::Delim('+'));
    assert_eq!(tokenize("-")[0], CSSToken::Delim('-'));
    assert_eq!(tokenize("@ ")[0], CSSToken::Delim('@'));
}

#[test]
fn test_simple_rule() {
    let tokens = tokenize("p { color: red; }");
    assert_eq!(
        tokens,
        vec![
            CSSToken::ident("p"),
            CSSToken::Whitespace,
            CSSToken::LeftBrace,
            CSSToken::Whitespace,
            CSSToken::ident("color"),
            CSSToken::Colon,
            CSSToken::Whitespace,
            CSSToken::ident("red"),
            CSSToken::Semicolon,
            CSSToken::Whitespace,
            CSSToken::RightBrace,
            CSSToken::Eof,
        ]
    );
}

#[test]
fn test_display_notation() {
    assert_eq!(CSSToken::ident("x").to_string(), "<ident x>");
    assert_eq!(CSSToken::hash_id("v").to_string(), "<hash v id>");
    assert_eq!(CSSToken::Eof.to_string(), "<EOF>");
}
