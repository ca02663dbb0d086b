//! Integration tests for the CSS parser entry points.

use bramble_css::{
    AtRuleBlock, CSSToken, ComponentValue, MAX_NESTING_DEPTH, ParseError, Rule, StyleRule,
    parse, parse_component_value, parse_declaration, parse_declaration_list,
};

/// Parse `css` and return its top-level style rules.
fn style_rules(css: &str) -> Vec<StyleRule> {
    parse(css)
        .unwrap()
        .rules
        .into_iter()
        .filter_map(|rule| match rule {
            Rule::Style(style) => Some(style),
            Rule::At(_) => None,
        })
        .collect()
}

fn selector_texts(rule: &StyleRule) -> Vec<&str> {
    rule.selectors.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn test_simple_style_rule() {
    let rules = style_rules("p { color: red; margin: 0 auto }");
    assert_eq!(rules.len(), 1);
    assert_eq!(selector_texts(&rules[0]), vec!["p"]);

    let declarations = &rules[0].declarations;
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].name, "color");
    assert_eq!(declarations[0].value_text(), "red");
    assert_eq!(declarations[1].name, "margin");
    assert_eq!(declarations[1].value_text(), "0 auto");
}

#[test]
fn test_selector_list_is_split_on_commas() {
    let rules = style_rules("h1, h2 , .x{}");
    assert_eq!(selector_texts(&rules[0]), vec!["h1", "h2", ".x"]);
    assert!(rules[0].declarations.is_empty());
}

#[test]
fn test_complex_selector_text_survives() {
    let rules = style_rules("div.note > p:first-child { }");
    assert_eq!(selector_texts(&rules[0]), vec!["div.note > p:first-child"]);
    assert!(rules[0].selectors[0].parse().is_some());
}

#[test]
fn test_multiple_rules_in_order() {
    let rules = style_rules("a { color: blue } b { font-weight: bold } i { }");
    let names: Vec<_> = rules.iter().map(|r| r.selectors[0].text.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "i"]);
}

#[test]
fn test_important() {
    let rules = style_rules("a { color: red !important; width: 1px ! IMPORTANT ; height: 2px }");
    let declarations = &rules[0].declarations;
    assert!(declarations[0].important);
    assert_eq!(declarations[0].value_text(), "red");
    assert!(declarations[1].important);
    assert_eq!(declarations[1].value_text(), "1px");
    assert!(!declarations[2].important);
}

#[test]
fn test_declaration_display() {
    let rules = style_rules("a { color : red  !important }");
    assert_eq!(rules[0].declarations[0].to_string(), "color: red !important");
}

#[test]
fn test_malformed_declarations_are_dropped() {
    let rules = style_rules("a { color red; ; 12px; width: 1px }");
    let declarations = &rules[0].declarations;
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].name, "width");
}

#[test]
fn test_function_values() {
    let rules = style_rules("a { color: rgb(1, 2, 3); background: url(bg.png) }");
    let declarations = &rules[0].declarations;
    assert_eq!(declarations[0].value_text(), "rgb(1, 2, 3)");
    assert!(matches!(
        &declarations[0].value[0],
        ComponentValue::Function { name, value } if name == "rgb" && value.len() == 7
    ));
    assert_eq!(declarations[1].value_text(), "url(bg.png)");
}

#[test]
fn test_unclosed_rule_at_eof_is_kept() {
    let rules = style_rules("a { color: red");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].declarations[0].value_text(), "red");
}

#[test]
fn test_prelude_without_block_is_dropped() {
    assert!(style_rules("a b c").is_empty());
}

#[test]
fn test_cdo_cdc_ignored_at_top_level() {
    let rules = style_rules("<!-- p { color: red } -->");
    assert_eq!(rules.len(), 1);
    assert_eq!(selector_texts(&rules[0]), vec!["p"]);
}

#[test]
fn test_media_rule_holds_rules() {
    let sheet = parse("@media screen and (min-width: 10px) { p { color: blue } } b { }").unwrap();
    assert_eq!(sheet.rules.len(), 2);

    let Rule::At(media) = &sheet.rules[0] else {
        panic!("Expected an at-rule");
    };
    assert_eq!(media.name, "media");
    assert_eq!(media.prelude_text(), "screen and (min-width: 10px)");
    let Some(AtRuleBlock::Rules(nested)) = &media.block else {
        panic!("Expected a rule list");
    };
    assert_eq!(nested.len(), 1);

    let all: Vec<_> = sheet.style_rules().iter().map(|r| r.selectors[0].text.clone()).collect();
    assert_eq!(all, vec!["p", "b"]);
}

#[test]
fn test_font_face_holds_declarations() {
    let sheet = parse("@font-face { font-family: Demo; src: url(demo.woff) }").unwrap();
    let Rule::At(rule) = &sheet.rules[0] else {
        panic!("Expected an at-rule");
    };
    let Some(AtRuleBlock::Declarations(declarations)) = &rule.block else {
        panic!("Expected a declaration list");
    };
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].value_text(), "Demo");
}

#[test]
fn test_unknown_at_rule_block_is_raw() {
    let sheet = parse("@keyframes spin { from { opacity: 0 } } a { }").unwrap();
    assert_eq!(sheet.rules.len(), 2);
    let Rule::At(rule) = &sheet.rules[0] else {
        panic!("Expected an at-rule");
    };
    assert_eq!(rule.prelude_text(), "spin");
    assert!(matches!(rule.block, Some(AtRuleBlock::Raw(_))));
}

#[test]
fn test_statement_at_rule() {
    let sheet = parse("@import url(base.css); @charset \"utf-8\"; a { }").unwrap();
    assert_eq!(sheet.rules.len(), 3);
    let Rule::At(import) = &sheet.rules[0] else {
        panic!("Expected an at-rule");
    };
    assert_eq!(import.name, "import");
    assert!(import.block.is_none());
    assert_eq!(import.prelude_text(), "url(base.css)");
}

#[test]
fn test_declaration_list() {
    let declarations = parse_declaration_list("color: red; font-weight: bold;").unwrap();
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[1].name, "font-weight");
}

#[test]
fn test_declaration_list_skips_stray_close_brace() {
    let declarations = parse_declaration_list("color: red; } width: 1px").unwrap();
    let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["color", "width"]);
}

#[test]
fn test_declaration_list_drops_nested_at_rule() {
    let declarations = parse_declaration_list("@media x { a: b } color: red").unwrap();
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].name, "color");
}

#[test]
fn test_parse_single_declaration() {
    let declaration = parse_declaration("  color : red ").unwrap();
    assert_eq!(declaration.name, "color");
    assert_eq!(declaration.value_text(), "red");

    assert!(matches!(
        parse_declaration("12px"),
        Err(ParseError::InvalidDeclaration { .. })
    ));
    assert!(matches!(
        parse_declaration("color red"),
        Err(ParseError::InvalidDeclaration { .. })
    ));
}

#[test]
fn test_parse_component_value() {
    assert_eq!(
        parse_component_value("  foo  ").unwrap(),
        ComponentValue::Token {
            token: CSSToken::ident("foo")
        }
    );
    assert_eq!(parse_component_value("   "), Err(ParseError::UnexpectedEof));
    assert_eq!(
        parse_component_value("a b"),
        Err(ParseError::ExpectedEof {
            found: "<ident b>".to_string()
        })
    );
    assert!(matches!(
        parse_component_value("[a b]").unwrap(),
        ComponentValue::Block { open: '[', value } if value.len() == 3
    ));
}

#[test]
fn test_nesting_limit() {
    let deep = "(".repeat(MAX_NESTING_DEPTH + 10);
    assert_eq!(
        parse_component_value(&deep),
        Err(ParseError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        })
    );

    let deep_media = "@media x {".repeat(MAX_NESTING_DEPTH + 10);
    assert!(matches!(parse(&deep_media), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn test_nesting_within_limit() {
    let css = format!("a {{ b: {}x{} }}", "(".repeat(100), ")".repeat(100));
    let rules = style_rules(&css);
    assert_eq!(rules[0].declarations.len(), 1);
}
