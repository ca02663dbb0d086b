//! Integration tests for the HTML tokenizer.

use bramble_html::{Attribute, HTMLTokenizer, Token, TokenizerState, tokenize};

/// Concatenate the character tokens, stopping at the first other token.
fn leading_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map_while(|token| match token {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

/// Run the tokenizer from `state`, as if `last_start_tag` had just been emitted.
fn tokenize_from(state: TokenizerState, last_start_tag: &str, input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input, Vec::new())
        .with_state(state)
        .with_last_start_tag(last_start_tag);
    tokenizer.run();
    tokenizer.into_sink()
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    assert!(matches!(tokens[0], Token::Character { data: 'H' }));
    assert!(matches!(tokens[4], Token::Character { data: 'o' }));
    assert!(matches!(tokens[5], Token::EndOfFile));
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(tokenize(""), vec![Token::EndOfFile]);
}

#[test]
fn test_newlines_are_normalized() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(leading_text(&tokens), "a\nb\nc");
}

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2); // DOCTYPE + EOF
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(public_identifier, &None);
            assert_eq!(system_identifier, &None);
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_identifiers() {
    let tokens = tokenize(
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" 'http://www.w3.org/TR/html4/strict.dtd'>"#,
    );
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(public_identifier.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                system_identifier.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_system_only() {
    let tokens = tokenize(r#"<!doctype html system "about:legacy-compat">"#);
    match &tokens[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            force_quirks,
            ..
        } => {
            assert_eq!(public_identifier, &None);
            assert_eq!(system_identifier.as_deref(), Some("about:legacy-compat"));
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_missing_name_forces_quirks() {
    let tokens = tokenize("<!DOCTYPE>");
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(name, &None);
            assert!(force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_missing_public_identifier_forces_quirks() {
    let tokens = tokenize("<!DOCTYPE html PUBLIC>");
    assert!(matches!(
        tokens[0],
        Token::Doctype {
            force_quirks: true,
            ..
        }
    ));
}

#[test]
fn test_doctype_unknown_keyword_forces_quirks() {
    let tokens = tokenize("<!DOCTYPE html bogus>");
    assert!(matches!(
        tokens[0],
        Token::Doctype {
            force_quirks: true,
            ..
        }
    ));
}

#[test]
fn test_doctype_trailing_garbage_keeps_identifiers() {
    let tokens = tokenize(r#"<!DOCTYPE html SYSTEM "x" junk>"#);
    match &tokens[0] {
        Token::Doctype {
            system_identifier,
            force_quirks,
            ..
        } => {
            assert_eq!(system_identifier.as_deref(), Some("x"));
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_eof_forces_quirks() {
    let tokens = tokenize("<!DOCTYPE html");
    assert!(matches!(
        tokens[0],
        Token::Doctype {
            force_quirks: true,
            ..
        }
    ));
    assert!(matches!(tokens[1], Token::EndOfFile));
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "div");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_tag_names_are_lowercased() {
    let tokens = tokenize("<DiV CLASS=x></DIV>");
    assert!(tokens[0].is_start_tag("div"));
    assert_eq!(tokens[0].attribute("class"), Some("x"));
    assert!(tokens[1].is_end_tag("div"));
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</div>");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_end_tag("div"));
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    assert!(matches!(
        &tokens[0],
        Token::StartTag { name, self_closing: true, .. } if name == "br"
    ));
}

#[test]
fn test_attribute_forms() {
    let tokens = tokenize(r#"<input type="text" name='q' value=42 disabled>"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(
                attributes,
                &vec![
                    Attribute::new("type", "text"),
                    Attribute::new("name", "q"),
                    Attribute::new("value", "42"),
                    Attribute::new("disabled", ""),
                ]
            );
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let tokens = tokenize(r#"<p id="a" ID="b">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes, &vec![Attribute::new("id", "a")]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: " hello ".to_string()
        }
    );
}

#[test]
fn test_empty_and_abrupt_comments() {
    assert_eq!(
        tokenize("<!---->")[0],
        Token::Comment {
            data: String::new()
        }
    );
    assert_eq!(
        tokenize("<!-->")[0],
        Token::Comment {
            data: String::new()
        }
    );
}

#[test]
fn test_comment_with_inner_dashes() {
    assert_eq!(
        tokenize("<!--a--b-->")[0],
        Token::Comment {
            data: "a--b".to_string()
        }
    );
}

#[test]
fn test_processing_instruction_is_bogus_comment() {
    assert_eq!(
        tokenize("<?xml version=\"1.0\"?>")[0],
        Token::Comment {
            data: "?xml version=\"1.0\"?".to_string()
        }
    );
}

#[test]
fn test_cdata_outside_foreign_content_is_bogus_comment() {
    assert_eq!(
        tokenize("<![CDATA[x]]>")[0],
        Token::Comment {
            data: "[CDATA[x]]".to_string()
        }
    );
}

#[test]
fn test_null_in_data_is_replaced() {
    let tokens = tokenize("a\0b");
    assert_eq!(leading_text(&tokens), "a\u{FFFD}b");
}

#[test]
fn test_null_in_comment_and_doctype_is_replaced() {
    assert_eq!(
        tokenize("<!--\0-->")[0],
        Token::Comment {
            data: "\u{FFFD}".to_string()
        }
    );
    match &tokenize("<!DOCTYPE h\0>")[0] {
        Token::Doctype { name, .. } => assert_eq!(name.as_deref(), Some("h\u{FFFD}")),
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_lone_less_than_is_text() {
    let tokens = tokenize("a < b");
    assert_eq!(leading_text(&tokens), "a < b");
}

#[test]
fn test_eof_in_tag_drops_the_tag() {
    let tokens = tokenize("<div class=");
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn test_character_references_in_text() {
    let tokens = tokenize("&amp;&lt;&#65;&#x42;&notin;&notit;");
    assert_eq!(leading_text(&tokens), "&<AB\u{2209}\u{AC}it;");
}

#[test]
fn test_numeric_reference_replacements() {
    let tokens = tokenize("&#128;&#0;&#x110000;&#xD800;");
    assert_eq!(
        leading_text(&tokens),
        "\u{20AC}\u{FFFD}\u{FFFD}\u{FFFD}"
    );
}

#[test]
fn test_unknown_reference_is_left_alone() {
    let tokens = tokenize("&bogus; &");
    assert_eq!(leading_text(&tokens), "&bogus; &");
}

#[test]
fn test_character_references_in_attributes() {
    let tokens = tokenize(r#"<a href="?a=1&copy=2&amp;b" title="&copy">"#);
    assert_eq!(tokens[0].attribute("href"), Some("?a=1&copy=2&b"));
    assert_eq!(tokens[0].attribute("title"), Some("\u{A9}"));
}

#[test]
fn test_rawtext_only_ends_at_appropriate_end_tag() {
    let tokens = tokenize_from(TokenizerState::RAWTEXT, "style", "a<b></p></style>");
    assert_eq!(leading_text(&tokens), "a<b></p>");
    assert!(tokens[8].is_end_tag("style"));
}

#[test]
fn test_rcdata_decodes_references() {
    let tokens = tokenize_from(TokenizerState::RCDATA, "title", "a&amp;b</title>");
    assert_eq!(leading_text(&tokens), "a&b");
    assert!(tokens[3].is_end_tag("title"));
}

#[test]
fn test_script_data_double_escape() {
    let input = "<!--<script></script>--></script>";
    let tokens = tokenize_from(TokenizerState::ScriptData, "script", input);
    let text = leading_text(&tokens);
    assert_eq!(text, "<!--<script></script>-->");
    assert!(tokens[text.chars().count()].is_end_tag("script"));
}

#[test]
fn test_plaintext_never_ends() {
    let tokens = tokenize_from(TokenizerState::PLAINTEXT, "plaintext", "</plaintext><b>");
    assert_eq!(leading_text(&tokens), "</plaintext><b>");
    assert!(tokens.last().is_some_and(Token::is_eof));
}

#[test]
fn test_tokenizer_reports_issues() {
    let mut tokenizer = HTMLTokenizer::new("<p a=1 a=2>", Vec::new());
    tokenizer.run();
    let (_, issues) = tokenizer.into_parts();
    assert!(issues.iter().any(|issue| issue.message == "duplicate-attribute"));
}
