//! Tree construction tests in the html5lib dump format.

use bramble_dom::NodeId;
use bramble_html::{format_tree, parse_str};

/// Parse `html` and dump the whole document.
fn dump(html: &str) -> String {
    format_tree(&parse_str(html), NodeId::ROOT)
}

/// Join expected dump lines.
fn lines(expected: &[&str]) -> String {
    expected.iter().map(|line| format!("{line}\n")).collect()
}

#[test]
fn test_minimal_document() {
    assert_eq!(
        dump("<!DOCTYPE html>Hi"),
        lines(&[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     \"Hi\"",
        ])
    );
}

#[test]
fn test_doctype_with_identifiers() {
    assert_eq!(
        dump(r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#),
        lines(&[
            "| <!DOCTYPE html \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">",
            "| <html>",
            "|   <head>",
            "|   <body>",
        ])
    );
}

#[test]
fn test_implied_p_end() {
    assert_eq!(
        dump("<p>a<div>b</div>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       \"a\"",
            "|     <div>",
            "|       \"b\"",
        ])
    );
}

#[test]
fn test_stray_p_end_tag_creates_empty_p() {
    assert_eq!(
        dump("</p>"),
        lines(&["| <html>", "|   <head>", "|   <body>", "|     <p>"])
    );
}

#[test]
fn test_list_items_close_each_other() {
    assert_eq!(
        dump("<ul><li>a<li>b</ul><dl><dt>c<dd>d</dl>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <ul>",
            "|       <li>",
            "|         \"a\"",
            "|       <li>",
            "|         \"b\"",
            "|     <dl>",
            "|       <dt>",
            "|         \"c\"",
            "|       <dd>",
            "|         \"d\"",
        ])
    );
}

#[test]
fn test_nested_headings() {
    assert_eq!(
        dump("<h1>a<h2>b</h1>c"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <h1>",
            "|       \"a\"",
            "|     <h2>",
            "|       \"b\"",
            "|     \"c\"",
        ])
    );
}

#[test]
fn test_misnested_formatting() {
    assert_eq!(
        dump("<b>1<p>2</b>3</p>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <b>",
            "|       \"1\"",
            "|     <p>",
            "|       <b>",
            "|         \"2\"",
            "|       \"3\"",
        ])
    );
}

#[test]
fn test_adoption_agency_nested_anchor() {
    assert_eq!(
        dump("<a><p>X<a>Y</a>Z</p></a>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <a>",
            "|     <p>",
            "|       <a>",
            "|         \"X\"",
            "|       <a>",
            "|         \"Y\"",
            "|       \"Z\"",
        ])
    );
}

#[test]
fn test_adoption_agency_inner_loop() {
    assert_eq!(
        dump("<b><i>1<div>2</b>3</i>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <b>",
            "|       <i>",
            "|         \"1\"",
            "|     <i>",
            "|     <div>",
            "|       <i>",
            "|         <b>",
            "|           \"2\"",
            "|         \"3\"",
        ])
    );
}

#[test]
fn test_formatting_is_reconstructed() {
    assert_eq!(
        dump("<p><b>x</p><p>y"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       <b>",
            "|         \"x\"",
            "|     <p>",
            "|       <b>",
            "|         \"y\"",
        ])
    );
}

#[test]
fn test_noahs_ark_limits_reconstruction() {
    assert_eq!(
        dump("<p><b><b><b><b>x</p><p>y"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       <b>",
            "|         <b>",
            "|           <b>",
            "|             <b>",
            "|               \"x\"",
            "|     <p>",
            "|       <b>",
            "|         <b>",
            "|           <b>",
            "|             \"y\"",
        ])
    );
}

#[test]
fn test_implied_table_structure() {
    assert_eq!(
        dump("<table><td>x</td></table>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <table>",
            "|       <tbody>",
            "|         <tr>",
            "|           <td>",
            "|             \"x\"",
        ])
    );
}

#[test]
fn test_table_whitespace_stays_in_table() {
    assert_eq!(
        dump("<table> <tr><td>x"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <table>",
            "|       \" \"",
            "|       <tbody>",
            "|         <tr>",
            "|           <td>",
            "|             \"x\"",
        ])
    );
}

#[test]
fn test_foster_parented_text() {
    assert_eq!(
        dump("<table>foo</table>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     \"foo\"",
            "|     <table>",
        ])
    );
}

#[test]
fn test_foster_parented_element() {
    assert_eq!(
        dump("<table><tr><div>x</div><td>y</table>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <div>",
            "|       \"x\"",
            "|     <table>",
            "|       <tbody>",
            "|         <tr>",
            "|           <td>",
            "|             \"y\"",
        ])
    );
}

#[test]
fn test_caption_and_colgroup() {
    assert_eq!(
        dump("<table><caption>c<col><tr><td>x</table>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <table>",
            "|       <caption>",
            "|         \"c\"",
            "|       <colgroup>",
            "|         <col>",
            "|       <tbody>",
            "|         <tr>",
            "|           <td>",
            "|             \"x\"",
        ])
    );
}

#[test]
fn test_cell_closed_by_new_row() {
    assert_eq!(
        dump("<table><tr><td>a<tr><th>b</table>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <table>",
            "|       <tbody>",
            "|         <tr>",
            "|           <td>",
            "|             \"a\"",
            "|         <tr>",
            "|           <th>",
            "|             \"b\"",
        ])
    );
}

#[test]
fn test_hidden_input_in_table() {
    assert_eq!(
        dump("<table><input type=hidden></table>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <table>",
            "|       <input>",
            "|         type=\"hidden\"",
        ])
    );
}

#[test]
fn test_select_options() {
    assert_eq!(
        dump("<select><option>a<option>b<optgroup><option>c</select>d"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <select>",
            "|       <option>",
            "|         \"a\"",
            "|       <option>",
            "|         \"b\"",
            "|       <optgroup>",
            "|         <option>",
            "|           \"c\"",
            "|     \"d\"",
        ])
    );
}

#[test]
fn test_select_in_table_breaks_out() {
    assert_eq!(
        dump("<table><tr><td><select><option>a<td>b</table>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <table>",
            "|       <tbody>",
            "|         <tr>",
            "|           <td>",
            "|             <select>",
            "|               <option>",
            "|                 \"a\"",
            "|           <td>",
            "|             \"b\"",
        ])
    );
}

#[test]
fn test_template_contents() {
    assert_eq!(
        dump("<template><div>x</div></template>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|     <template>",
            "|       content",
            "|         <div>",
            "|           \"x\"",
            "|   <body>",
        ])
    );
}

#[test]
fn test_template_with_table_rows() {
    assert_eq!(
        dump("<body><template><tr><td>x</td></tr></template>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <template>",
            "|       content",
            "|         <tr>",
            "|           <td>",
            "|             \"x\"",
        ])
    );
}

#[test]
fn test_unclosed_template_at_eof() {
    assert_eq!(
        dump("<template><p>x"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|     <template>",
            "|       content",
            "|         <p>",
            "|           \"x\"",
            "|   <body>",
        ])
    );
}

#[test]
fn test_svg_case_adjustment() {
    assert_eq!(
        dump("<svg viewBox=\"0 0 1 1\"><foreignObject><p>x</p></foreignObject></svg>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <svg svg>",
            "|       viewBox=\"0 0 1 1\"",
            "|       <svg foreignObject>",
            "|         <p>",
            "|           \"x\"",
        ])
    );
}

#[test]
fn test_svg_namespaced_attribute() {
    assert_eq!(
        dump("<svg><use xlink:href=\"#a\"/></svg>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <svg svg>",
            "|       <svg use>",
            "|         xlink href=\"#a\"",
        ])
    );
}

#[test]
fn test_mathml_and_breakout() {
    assert_eq!(
        dump("<math><mi>x</mi><p>y"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <math math>",
            "|       <math mi>",
            "|         \"x\"",
            "|     <p>",
            "|       \"y\"",
        ])
    );
}

#[test]
fn test_mathml_definition_url() {
    assert_eq!(
        dump("<math definitionurl=x></math>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <math math>",
            "|       definitionURL=\"x\"",
        ])
    );
}

#[test]
fn test_cdata_in_svg() {
    assert_eq!(
        dump("<svg><![CDATA[a<b]]></svg>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <svg svg>",
            "|       \"a<b\"",
        ])
    );
}

#[test]
fn test_frameset() {
    assert_eq!(
        dump("<frameset><frame></frameset>"),
        lines(&["| <html>", "|   <head>", "|   <frameset>", "|     <frame>"])
    );
}

#[test]
fn test_frameset_replaces_body_while_ok() {
    assert_eq!(
        dump("<body><frameset><frame>"),
        lines(&["| <html>", "|   <head>", "|   <frameset>", "|     <frame>"])
    );
}

#[test]
fn test_frameset_ignored_after_content() {
    assert_eq!(
        dump("<body>x<frameset>"),
        lines(&["| <html>", "|   <head>", "|   <body>", "|     \"x\""])
    );
}

#[test]
fn test_content_after_body_end() {
    assert_eq!(
        dump("<body>a</body></html>b<!--c-->"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     \"ab\"",
            "|     <!-- c -->",
        ])
    );
}

#[test]
fn test_comment_after_html_end() {
    assert_eq!(
        dump("<!DOCTYPE html><html></html><!--x-->"),
        lines(&[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "| <!-- x -->",
        ])
    );
}

#[test]
fn test_plaintext() {
    assert_eq!(
        dump("<plaintext></plaintext><b>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <plaintext>",
            "|       \"</plaintext><b>\"",
        ])
    );
}

#[test]
fn test_ruby() {
    assert_eq!(
        dump("<ruby>a<rb>b<rt>c<rp>d</ruby>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <ruby>",
            "|       \"a\"",
            "|       <rb>",
            "|         \"b\"",
            "|       <rt>",
            "|         \"c\"",
            "|       <rp>",
            "|         \"d\"",
        ])
    );
}

#[test]
fn test_nested_forms_are_ignored() {
    assert_eq!(
        dump("<form><form><input></form>x"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <form>",
            "|       <input>",
            "|     \"x\"",
        ])
    );
}

#[test]
fn test_button_closes_button() {
    assert_eq!(
        dump("<button>a<button>b"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <button>",
            "|       \"a\"",
            "|     <button>",
            "|       \"b\"",
        ])
    );
}

#[test]
fn test_head_content_after_head() {
    assert_eq!(
        dump("<head></head><meta charset=utf-8><body>"),
        lines(&[
            "| <html>",
            "|   <head>",
            "|     <meta>",
            "|       charset=\"utf-8\"",
            "|   <body>",
        ])
    );
}
