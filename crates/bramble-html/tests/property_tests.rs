//! Property tests over arbitrary input.

use bramble_dom::{DomTree, NodeId, NodeType};
use bramble_html::{Token, parse_str, tokenize};
use quickcheck_macros::quickcheck;

/// Every text and comment payload and every attribute value in the tree.
fn all_strings(tree: &DomTree) -> Vec<String> {
    let mut out = Vec::new();
    for id in tree.descendants(NodeId::ROOT) {
        let Some(node) = tree.get(id) else {
            continue;
        };
        match &node.node_type {
            NodeType::Text(data) | NodeType::Comment(data) => out.push(data.clone()),
            NodeType::Element(element) => {
                out.push(element.local_name.clone());
                out.extend(element.attributes.iter().map(|attr| attr.value().to_string()));
            }
            _ => {}
        }
    }
    out
}

#[quickcheck]
fn prop_parse_never_keeps_nulls(input: String) -> bool {
    all_strings(&parse_str(&input))
        .iter()
        .all(|s| !s.contains('\0'))
}

#[quickcheck]
fn prop_parse_never_keeps_carriage_returns(input: String) -> bool {
    all_strings(&parse_str(&input))
        .iter()
        .all(|s| !s.contains('\r'))
}

#[quickcheck]
fn prop_tokenizer_ends_with_single_eof(input: String) -> bool {
    let tokens = tokenize(&input);
    tokens.last().is_some_and(Token::is_eof) && tokens.iter().filter(|t| t.is_eof()).count() == 1
}

#[quickcheck]
fn prop_tag_names_fold_to_lowercase(name: String) -> bool {
    let name: String = name.chars().filter(char::is_ascii_alphabetic).collect();
    if name.is_empty() {
        return true;
    }
    let tokens = tokenize(&format!("<{name}>"));
    tokens[0].is_start_tag(&name.to_ascii_lowercase())
}

#[quickcheck]
fn prop_plain_text_round_trips(text: String) -> bool {
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '<' | '&' | '\0' | '\r') && !c.is_whitespace())
        .collect();
    let tree = parse_str(&text);
    tree.body()
        .map(|body| tree.text_content(body))
        .unwrap_or_default()
        == text
}
