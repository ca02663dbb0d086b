//! Tests for collecting CSS from parsed HTML documents.

use bramble_css::{extract_style_content, inline_styles, parse, style_sheets};
use bramble_html::parse_str;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>body { margin: 0 }</style>
<style>p { color: red }</style>
</head>
<body>
<p style="color: blue; font-weight: bold">styled</p>
<div style="">empty</div>
<svg><style>rect { fill: red }</style></svg>
<template><style>.hidden { display: none }</style></template>
</body>
</html>"#;

#[test]
fn test_extract_style_content() {
    let tree = parse_str(PAGE);
    let css = extract_style_content(&tree);
    assert_eq!(css, "body { margin: 0 }\np { color: red }");

    let sheet = parse(&css).unwrap();
    assert_eq!(sheet.style_rules().len(), 2);
}

#[test]
fn test_style_sheets_per_element() {
    let tree = parse_str(PAGE);
    let sheets = style_sheets(&tree);
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[1].style_rules()[0].selectors[0].text, "p");
}

#[test]
fn test_style_in_body_is_collected() {
    let tree = parse_str("<p>x</p><style>em { }</style>");
    assert_eq!(extract_style_content(&tree), "em { }");
}

#[test]
fn test_no_styles() {
    let tree = parse_str("<p>plain</p>");
    assert_eq!(extract_style_content(&tree), "");
    assert!(style_sheets(&tree).is_empty());
    assert!(inline_styles(&tree).is_empty());
}

#[test]
fn test_inline_styles() {
    let tree = parse_str(PAGE);
    let styles = inline_styles(&tree);
    assert_eq!(styles.len(), 2);

    let paragraph = &styles[0];
    assert!(tree.is_html_element(paragraph.element, "p"));
    let names: Vec<_> = paragraph.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["color", "font-weight"]);
    assert_eq!(paragraph.declarations[0].value_text(), "blue");

    assert!(tree.is_html_element(styles[1].element, "div"));
    assert!(styles[1].declarations.is_empty());
}

#[test]
fn test_inline_style_with_nesting_error_is_skipped() {
    let deep = "(".repeat(bramble_css::MAX_NESTING_DEPTH + 1);
    let html = format!(r#"<p style="a: {deep}">x</p><p style="b: c">y</p>"#);
    let tree = parse_str(&html);
    let styles = inline_styles(&tree);
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].declarations[0].name, "b");
}
