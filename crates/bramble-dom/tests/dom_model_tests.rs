//! Tests for the node model: element interfaces, attributes, document
//! accessors, identity and structural equality.

use bramble_dom::{
    Attr, DocumentMode, DomTree, ElementInterface, Namespace, NodeId, NodeType, element_interface,
};

/// Builds `#document > html > (head, body > p#intro.a.b)`.
fn basic_document(tree: &mut DomTree) -> (NodeId, NodeId, NodeId, NodeId) {
    let html = tree.create_element("html", Namespace::Html, Vec::new());
    let head = tree.create_element("head", Namespace::Html, Vec::new());
    let body = tree.create_element("body", Namespace::Html, Vec::new());
    let p = tree.create_element(
        "p",
        Namespace::Html,
        vec![Attr::new("id", "intro"), Attr::new("class", "a  b a")],
    );
    let _ = tree.append_child(NodeId::ROOT, html);
    let _ = tree.append_child(html, head);
    let _ = tree.append_child(html, body);
    let _ = tree.append_child(body, p);
    (html, head, body, p)
}

#[test]
fn test_element_interface_factory() {
    assert_eq!(element_interface("html", Namespace::Html), ElementInterface::Html);
    assert_eq!(element_interface("body", Namespace::Html), ElementInterface::Body);
    assert_eq!(element_interface("div", Namespace::Html), ElementInterface::Div);
    assert_eq!(element_interface("script", Namespace::Html), ElementInterface::Script);
    assert_eq!(element_interface("style", Namespace::Html), ElementInterface::Style);
    assert_eq!(element_interface("template", Namespace::Html), ElementInterface::Template);
    assert_eq!(element_interface("blink", Namespace::Html), ElementInterface::HtmlElement);
    assert_eq!(element_interface("div", Namespace::Svg), ElementInterface::SvgElement);
    assert_eq!(element_interface("mi", Namespace::MathMl), ElementInterface::MathMlElement);
}

#[test]
fn test_create_element_records_interface() {
    let mut tree = DomTree::new();
    let script = tree.create_element("script", Namespace::Html, Vec::new());
    let circle = tree.create_element("circle", Namespace::Svg, Vec::new());

    assert_eq!(tree.as_element(script).map(|e| e.interface), Some(ElementInterface::Script));
    assert_eq!(tree.as_element(circle).map(|e| e.interface), Some(ElementInterface::SvgElement));
}

#[test]
fn test_template_gets_contents_fragment() {
    let mut tree = DomTree::new();
    let template = tree.create_element("template", Namespace::Html, Vec::new());
    let contents = tree.template_contents(template).expect("template contents");

    assert!(matches!(
        tree.get(contents).map(|n| &n.node_type),
        Some(NodeType::DocumentFragment)
    ));
    assert_eq!(tree.parent(contents), None);

    let svg_template = tree.create_element("template", Namespace::Svg, Vec::new());
    assert_eq!(tree.template_contents(svg_template), None);
}

#[test]
fn test_id_and_class_list() {
    let mut tree = DomTree::new();
    let (_, _, _, p) = basic_document(&mut tree);
    let data = tree.as_element(p).expect("p element");

    assert_eq!(data.id(), Some("intro"));
    assert_eq!(data.class_list(), vec!["a", "b"]);
    assert_eq!(data.get_attribute("missing"), None);
}

#[test]
fn test_add_attribute_if_missing_keeps_existing_value() {
    let mut tree = DomTree::new();
    let (_, _, body, _) = basic_document(&mut tree);
    let data = tree.as_element_mut(body).expect("body element");

    assert!(data.add_attribute_if_missing(Attr::new("class", "x")));
    assert!(!data.add_attribute_if_missing(Attr::new("class", "y")));
    assert_eq!(data.get_attribute("class"), Some("x"));
}

#[test]
fn test_namespaced_attr_qualified_name() {
    let attr = Attr::namespaced(Namespace::XLink, Some("xlink".to_string()), "href", "#a");
    assert_eq!(attr.qualified_name(), "xlink:href");
    assert_eq!(attr.namespace().map(Namespace::url), Some("http://www.w3.org/1999/xlink"));
    assert_eq!(Namespace::from_url("http://www.w3.org/2000/svg"), Some(Namespace::Svg));
}

#[test]
fn test_document_accessors() {
    let mut tree = DomTree::new();
    let doctype = tree.create_doctype("html", "", "");
    let _ = tree.append_child(NodeId::ROOT, doctype);
    let (html, head, body, _) = basic_document(&mut tree);

    assert_eq!(tree.doctype(), Some(doctype));
    assert_eq!(tree.document_element(), Some(html));
    assert_eq!(tree.head(), Some(head));
    assert_eq!(tree.body(), Some(body));
}

#[test]
fn test_document_mode_defaults_to_no_quirks() {
    let mut tree = DomTree::new();
    assert_eq!(tree.document_mode(), DocumentMode::NoQuirks);
    tree.set_document_mode(DocumentMode::LimitedQuirks);
    assert_eq!(tree.document_mode(), DocumentMode::LimitedQuirks);
    assert_eq!(tree.document_mode().as_str(), "limited-quirks");
}

#[test]
fn test_text_content_concatenates_descendants() {
    let mut tree = DomTree::new();
    let (_, _, body, p) = basic_document(&mut tree);
    let hello = tree.create_text("Hello ");
    let em = tree.create_element("em", Namespace::Html, Vec::new());
    let world = tree.create_text("world");
    let comment = tree.create_comment("hidden");
    let _ = tree.append_child(p, hello);
    let _ = tree.append_child(p, em);
    let _ = tree.append_child(em, world);
    let _ = tree.append_child(p, comment);

    assert_eq!(tree.text_content(body), "Hello world");
    assert_eq!(tree.text_content(comment), "hidden");
}

#[test]
fn test_descendants_are_in_tree_order() {
    let mut tree = DomTree::new();
    let (html, head, body, p) = basic_document(&mut tree);

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![html, head, body, p]);

    let ancestors: Vec<NodeId> = tree.ancestors(p).collect();
    assert_eq!(ancestors, vec![body, html, NodeId::ROOT]);

    let preceding: Vec<NodeId> = tree.preceding_siblings(body).collect();
    assert_eq!(preceding, vec![head]);
}

// ========== identity vs structural equality ==========

#[test]
fn test_same_node_is_identity() {
    let mut tree = DomTree::new();
    let a = tree.create_text("x");
    let b = tree.create_text("x");

    assert!(tree.same_node(a, a));
    assert!(!tree.same_node(a, b));
    assert!(tree.node_equals(a, b));
}

#[test]
fn test_node_equals_compares_structure() {
    let mut tree = DomTree::new();
    let build = |tree: &mut DomTree, class: &str, text: &str| {
        let div = tree.create_element(
            "div",
            Namespace::Html,
            vec![Attr::new("id", "d"), Attr::new("class", class)],
        );
        let t = tree.create_text(text);
        let _ = tree.append_child(div, t);
        div
    };

    let one = build(&mut tree, "c", "hi");
    let two = build(&mut tree, "c", "hi");
    let other_attr = build(&mut tree, "z", "hi");
    let other_text = build(&mut tree, "c", "bye");

    assert!(tree.node_equals(one, two));
    assert!(!tree.node_equals(one, other_attr));
    assert!(!tree.node_equals(one, other_text));
}

#[test]
fn test_node_equals_ignores_attribute_order() {
    let mut tree = DomTree::new();
    let a = tree.create_element(
        "a",
        Namespace::Html,
        vec![Attr::new("href", "/"), Attr::new("title", "t")],
    );
    let b = tree.create_element(
        "a",
        Namespace::Html,
        vec![Attr::new("title", "t"), Attr::new("href", "/")],
    );
    let svg_a = tree.create_element(
        "a",
        Namespace::Svg,
        vec![Attr::new("href", "/"), Attr::new("title", "t")],
    );

    assert!(tree.node_equals(a, b));
    assert!(!tree.node_equals(a, svg_a));
}
