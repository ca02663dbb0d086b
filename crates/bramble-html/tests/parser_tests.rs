//! Integration tests for the HTML parser.

use bramble_dom::{DocumentMode, DomTree, Namespace, Node, NodeId, NodeType};
use bramble_html::{
    HTMLParser, HTMLTokenizer, InputEncoding, InsertionMode, IssueKind, ParseErrorCode,
    ParserOptions, Token, TokenSink, format_tree, parse, parse_str, parse_str_with_options,
    parse_with_options, tokenizer::TokenizerControl,
};

/// Helper to get element by tag name (first match, depth-first)
fn find_element(tree: &DomTree, from: NodeId, tag: &str) -> Option<NodeId> {
    if let Some(data) = tree.as_element(from)
        && data.local_name == tag
    {
        return Some(from);
    }
    for &child_id in tree.children(from) {
        if let Some(found) = find_element(tree, child_id, tag) {
            return Some(found);
        }
    }
    None
}

/// Helper to get a node reference
fn get_node(tree: &DomTree, id: NodeId) -> &Node {
    tree.get(id).expect("Node not found")
}

fn element_names(tree: &DomTree, parent: NodeId) -> Vec<&str> {
    tree.children(parent)
        .iter()
        .filter_map(|&id| tree.as_element(id))
        .map(|element| element.local_name.as_str())
        .collect()
}

#[test]
fn test_document_structure() {
    let tree = parse_str("<!DOCTYPE html><html><head></head><body></body></html>");

    let root = get_node(&tree, NodeId::ROOT);
    assert!(matches!(root.node_type, NodeType::Document(_)));

    let html = tree.document_element().expect("html element");
    assert!(tree.is_html_element(html, "html"));
    assert_eq!(element_names(&tree, html), vec!["head", "body"]);
    assert_eq!(tree.head(), find_element(&tree, html, "head"));
    assert_eq!(tree.body(), find_element(&tree, html, "body"));
    assert!(tree.doctype().is_some());
}

#[test]
fn test_implied_root_elements() {
    let tree = parse_str("Hello");
    let html = tree.document_element().expect("html element");
    assert_eq!(element_names(&tree, html), vec!["head", "body"]);
    let body = tree.body().expect("body");
    assert_eq!(tree.text_content(body), "Hello");
}

#[test]
fn test_text_node_coalescing() {
    let tree = parse_str("<p>abc</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    let children = tree.children(p);
    assert_eq!(children.len(), 1);
    assert_eq!(tree.as_text(children[0]), Some("abc"));
}

#[test]
fn test_text_coalesces_across_character_references() {
    let tree = parse_str("<p>a&amp;b</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    assert_eq!(tree.children(p).len(), 1);
    assert_eq!(tree.text_content(p), "a&b");
}

#[test]
fn test_comment_node() {
    let tree = parse_str("<html><body><!-- test comment --></body></html>");
    let body = tree.body().unwrap();
    let has_comment = tree.children(body).iter().any(|&child_id| {
        matches!(
            &get_node(&tree, child_id).node_type,
            NodeType::Comment(data) if data == " test comment "
        )
    });
    assert!(has_comment);
}

#[test]
fn test_comment_before_html_goes_to_document() {
    let tree = parse_str("<!--a--><!DOCTYPE html><html></html><!--b-->");
    let children = tree.children(NodeId::ROOT);
    assert!(matches!(&get_node(&tree, children[0]).node_type, NodeType::Comment(d) if d == "a"));
    assert!(matches!(
        &get_node(&tree, *children.last().unwrap()).node_type,
        NodeType::Comment(d) if d == "b"
    ));
}

#[test]
fn test_element_attributes() {
    let tree = parse_str(r#"<div id="main" class="container big"></div>"#);
    let div = tree.as_element(find_element(&tree, NodeId::ROOT, "div").unwrap()).unwrap();
    assert_eq!(div.id(), Some("main"));
    assert_eq!(div.class_list(), vec!["container", "big"]);
}

#[test]
fn test_case_folding() {
    let upper = parse_str("<DIV ID=x>A</DIV>");
    let lower = parse_str("<div id=x>A</div>");
    assert_eq!(
        format_tree(&upper, NodeId::ROOT),
        format_tree(&lower, NodeId::ROOT)
    );
    let upper_div = find_element(&upper, NodeId::ROOT, "div").unwrap();
    let lower_div = find_element(&lower, NodeId::ROOT, "div").unwrap();
    assert_eq!(
        upper.as_element(upper_div).unwrap().get_attribute("id"),
        lower.as_element(lower_div).unwrap().get_attribute("id")
    );
    assert_eq!(upper.text_content(upper_div), lower.text_content(lower_div));
}

#[test]
fn test_null_substitution() {
    let tree = parse_str("<p>a\0b</p><!--c\0d-->");
    let body = tree.body().unwrap();
    let p = find_element(&tree, body, "p").unwrap();
    assert_eq!(tree.text_content(p), "a\u{FFFD}b");
    let comment = *tree.children(body).last().unwrap();
    assert_eq!(tree.text_content(comment), "c\u{FFFD}d");
}

#[test]
fn test_script_is_raw_text() {
    let tree = parse_str("<script>if (a<b) {}</script>");
    let script = find_element(&tree, NodeId::ROOT, "script").unwrap();
    assert_eq!(tree.children(script).len(), 1);
    assert_eq!(tree.text_content(script), "if (a<b) {}");
    assert!(find_element(&tree, NodeId::ROOT, "b").is_none());
    let head = tree.head().unwrap();
    assert_eq!(tree.parent(script), Some(head));
}

#[test]
fn test_style_and_title() {
    let tree = parse_str("<title>a &amp; <b></title><style>p > a { }</style>");
    let title = find_element(&tree, NodeId::ROOT, "title").unwrap();
    assert_eq!(tree.text_content(title), "a & <b>");
    let style = find_element(&tree, NodeId::ROOT, "style").unwrap();
    assert_eq!(tree.text_content(style), "p > a { }");
}

#[test]
fn test_textarea_and_pre_skip_leading_newline() {
    let tree = parse_str("<textarea>\nfoo</textarea><pre>\n\nbar</pre>");
    let textarea = find_element(&tree, NodeId::ROOT, "textarea").unwrap();
    assert_eq!(tree.text_content(textarea), "foo");
    let pre = find_element(&tree, NodeId::ROOT, "pre").unwrap();
    assert_eq!(tree.text_content(pre), "\nbar");
}

#[test]
fn test_void_elements() {
    let tree = parse_str("<p>a<br>b<img src=x>c</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    assert_eq!(element_names(&tree, p), vec!["br", "img"]);
    assert_eq!(tree.children(p).len(), 5);
}

#[test]
fn test_end_br_becomes_element() {
    let tree = parse_str("<p>a</br>b</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    assert_eq!(element_names(&tree, p), vec!["br"]);
}

#[test]
fn test_image_is_renamed() {
    let tree = parse_str("<image src=x>");
    let img = find_element(&tree, NodeId::ROOT, "img").unwrap();
    assert_eq!(tree.as_element(img).unwrap().get_attribute("src"), Some("x"));
    assert!(find_element(&tree, NodeId::ROOT, "image").is_none());
}

#[test]
fn test_html_and_body_attributes_merge() {
    let tree = parse_str(r#"<html a=1><body b=2><html a=9 c=3><body b=9 d=4>"#);
    let html = tree.as_element(tree.document_element().unwrap()).unwrap();
    assert_eq!(html.get_attribute("a"), Some("1"));
    assert_eq!(html.get_attribute("c"), Some("3"));
    let body = tree.as_element(tree.body().unwrap()).unwrap();
    assert_eq!(body.get_attribute("b"), Some("2"));
    assert_eq!(body.get_attribute("d"), Some("4"));
}

#[test]
fn test_element_interfaces() {
    let tree = parse_str("<div></div><svg></svg>");
    let div = tree.as_element(find_element(&tree, NodeId::ROOT, "div").unwrap()).unwrap();
    assert_eq!(div.namespace, Namespace::Html);
    let svg = tree.as_element(find_element(&tree, NodeId::ROOT, "svg").unwrap()).unwrap();
    assert_eq!(svg.namespace, Namespace::Svg);
}

// =============================================================================
// Document mode
// =============================================================================

#[test]
fn test_no_doctype_is_quirks() {
    assert_eq!(parse_str("<p>x").document_mode(), DocumentMode::Quirks);
}

#[test]
fn test_html5_doctype_is_no_quirks() {
    assert_eq!(
        parse_str("<!DOCTYPE html><p>x").document_mode(),
        DocumentMode::NoQuirks
    );
}

#[test]
fn test_frameset_doctype_quirks_depend_on_system_id() {
    let without_system =
        parse_str(r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN">"#);
    assert_eq!(without_system.document_mode(), DocumentMode::Quirks);

    let with_system = parse_str(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#,
    );
    assert_eq!(with_system.document_mode(), DocumentMode::LimitedQuirks);
}

#[test]
fn test_xhtml_transitional_is_limited_quirks() {
    let tree = parse_str(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#,
    );
    assert_eq!(tree.document_mode(), DocumentMode::LimitedQuirks);
}

#[test]
fn test_iframe_srcdoc_is_never_quirks() {
    let options = ParserOptions::default().with_iframe_srcdoc(true);
    let output = parse_str_with_options("<p>x", options);
    assert_eq!(output.tree.document_mode(), DocumentMode::NoQuirks);
    assert!(
        !output
            .issues
            .iter()
            .any(|issue| issue.message == "missing DOCTYPE")
    );
}

#[test]
fn test_quirks_table_keeps_p_open() {
    // In quirks mode a table does not close an open p.
    let quirks = parse_str("<p><table></table>");
    let p = find_element(&quirks, NodeId::ROOT, "p").unwrap();
    assert_eq!(element_names(&quirks, p), vec!["table"]);

    let standards = parse_str("<!DOCTYPE html><p><table></table>");
    let body = standards.body().unwrap();
    assert_eq!(element_names(&standards, body), vec!["p", "table"]);
}

// =============================================================================
// Options, decoding and issues
// =============================================================================

#[test]
fn test_scripting_flag_changes_noscript() {
    let off = parse_str("<noscript><p>x</p></noscript>");
    assert!(find_element(&off, NodeId::ROOT, "p").is_some());

    let on = parse_str_with_options(
        "<noscript><p>x</p></noscript>",
        ParserOptions::default().with_scripting(true),
    )
    .tree;
    assert!(find_element(&on, NodeId::ROOT, "p").is_none());
    let noscript = find_element(&on, NodeId::ROOT, "noscript").unwrap();
    assert_eq!(on.text_content(noscript), "<p>x</p>");
}

#[test]
fn test_decoding() {
    let tree = parse(b"\xEF\xBB\xBF<p>caf\xC3\xA9</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    assert_eq!(tree.text_content(p), "caf\u{E9}");

    let latin1 = parse(b"<p>caf\xE9</p>");
    let p = find_element(&latin1, NodeId::ROOT, "p").unwrap();
    assert_eq!(latin1.text_content(p), "caf\u{E9}");

    let windows = parse_with_options(
        b"<p>\x80</p>",
        ParserOptions::default().with_encoding(InputEncoding::Windows1252),
    )
    .tree;
    let p = find_element(&windows, NodeId::ROOT, "p").unwrap();
    assert_eq!(windows.text_content(p), "\u{20AC}");
}

#[test]
fn test_issues_are_collected_in_order() {
    let output = parse_str_with_options("<p a=1 a=2></x>", ParserOptions::default());
    assert!(
        output
            .issues
            .iter()
            .any(|issue| issue.kind == IssueKind::TreeConstruction
                && issue.message == "missing DOCTYPE")
    );
    assert!(
        output
            .issues
            .iter()
            .any(|issue| issue.kind == IssueKind::Tokenizer)
    );
    assert!(
        output
            .issues
            .windows(2)
            .all(|pair| pair[0].position <= pair[1].position)
    );
}

#[test]
fn test_issue_collection_can_be_disabled_or_capped() {
    let silent = parse_str_with_options(
        "<p a=1 a=2></x>",
        ParserOptions::default().with_collect_issues(false),
    );
    assert!(silent.issues.is_empty());

    let capped = parse_str_with_options(
        "<p a=1 a=2></x></y></z>",
        ParserOptions::default().with_max_issues(Some(2)),
    );
    assert_eq!(capped.issues.len(), 2);
}

#[test]
fn test_script_end_is_unsupported() {
    let output = parse_str_with_options("<script>x()</script>", ParserOptions::default());
    assert!(
        output
            .issues
            .iter()
            .any(|issue| issue.kind == IssueKind::Unsupported)
    );
    let script = find_element(&output.tree, NodeId::ROOT, "script").unwrap();
    assert_eq!(output.tree.text_content(script), "x()");
}

#[test]
fn test_clean_document_has_no_issues() {
    let output = parse_str_with_options(
        "<!DOCTYPE html><html><head><title>t</title></head><body><p>x</p></body></html>",
        ParserOptions::default(),
    );
    assert!(output.issues.is_empty(), "{:?}", output.issues);
}

#[test]
fn test_issue_labels() {
    assert_eq!(ParseErrorCode::DuplicateAttribute.to_string(), "duplicate-attribute");
    let code: &'static str = ParseErrorCode::EofInTag.into();
    assert_eq!(code, "eof-in-tag");
    assert_eq!(IssueKind::TreeConstruction.to_string(), "tree-construction");
    assert_eq!(InsertionMode::InTableBody.to_string(), "InTableBody");
}

// =============================================================================
// Driving the parser by hand
// =============================================================================

/// Forwards tokens to the parser, keeping a copy of each token and the
/// insertion mode the parser ended in.
struct RecordingSink {
    parser: HTMLParser,
    tokens: Vec<Token>,
    modes: Vec<InsertionMode>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            parser: HTMLParser::new(ParserOptions::default()),
            tokens: Vec::new(),
            modes: Vec::new(),
        }
    }
}

impl TokenSink for RecordingSink {
    fn process_token(&mut self, token: Token, control: &mut dyn TokenizerControl) {
        self.tokens.push(token.clone());
        TokenSink::process_token(&mut self.parser, token, control);
        self.modes.push(self.parser.insertion_mode());
    }

    fn cdata_allowed(&self) -> bool {
        TokenSink::cdata_allowed(&self.parser)
    }
}

/// Step a tokenizer until EOF, recording its position after every step.
fn step_positions<S: TokenSink>(tokenizer: &mut HTMLTokenizer<S>) -> Vec<usize> {
    let mut positions = Vec::new();
    loop {
        let more = tokenizer.step();
        positions.push(tokenizer.position());
        if !more {
            return positions;
        }
    }
}

#[test]
fn test_reprocessing_does_not_move_the_tokenizer() {
    // The leading text is reprocessed in the initial, before html, before
    // head, in head and after head modes before it lands in body.
    const INPUT: &str = "x<p>";

    let mut plain = HTMLTokenizer::new(INPUT, Vec::new());
    let plain_positions = step_positions(&mut plain);
    let plain_tokens = plain.into_sink();

    let mut driven = HTMLTokenizer::new(INPUT, RecordingSink::new());
    let driven_positions = step_positions(&mut driven);
    let sink = driven.into_sink();

    // Each token reaches the parser once, in tokenizer order.
    assert_eq!(sink.tokens, plain_tokens);

    // The tokenizer walks the input exactly as it does with no parser
    // attached: one code point per step at most, ending at the input length.
    assert_eq!(driven_positions, plain_positions);
    assert!(driven_positions.windows(2).all(|pair| pair[1] - pair[0] <= 1));
    assert_eq!(driven_positions.last(), Some(&INPUT.chars().count()));

    assert_eq!(sink.modes.first(), Some(&InsertionMode::InBody));
    assert!(sink.parser.is_stopped());

    let tree = sink.parser.tree();
    let body = tree.body().unwrap();
    let children = tree.children(body);
    assert_eq!(children.len(), 2);
    assert_eq!(tree.as_text(children[0]), Some("x"));
    assert!(tree.is_html_element(children[1], "p"));
}

#[test]
fn test_parser_switches_tokenizer_state() {
    let mut tokenizer = HTMLTokenizer::new("<title>", RecordingSink::new());
    while tokenizer.sink().modes.is_empty() {
        let _ = tokenizer.step();
    }
    assert_eq!(tokenizer.sink().modes[0], InsertionMode::Text);
    assert_eq!(tokenizer.state(), bramble_html::TokenizerState::RCDATA);
}
