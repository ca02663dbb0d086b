//! Integration tests for CSS selector parsing, specificity and matching.

use bramble_css::selector::{
    AttributeOperator, Combinator, PseudoClass, SimpleSelector, Specificity, parse_selector,
    parse_selector_list,
};
use bramble_dom::{DomTree, NodeId};
use bramble_html::parse_str;

/// Find the element whose `id` attribute is `id`.
fn find_by_id(tree: &DomTree, id: &str) -> NodeId {
    tree.descendants(NodeId::ROOT)
        .find(|&node| tree.as_element(node).and_then(|e| e.id()) == Some(id))
        .unwrap_or_else(|| panic!("no element with id {id}"))
}

/// The `id` attributes of every element `selector` matches, in tree order.
fn matching_ids(html: &str, selector: &str) -> Vec<String> {
    let tree = parse_str(html);
    let selector = parse_selector(selector).unwrap();
    selector
        .select_all(&tree, NodeId::ROOT)
        .into_iter()
        .filter_map(|node| tree.as_element(node)?.id().map(str::to_string))
        .collect()
}

fn specificity(selector: &str) -> Specificity {
    parse_selector(selector).unwrap().specificity
}

// ========================================================================
// Parsing
// ========================================================================

#[test]
fn test_parse_type_selector() {
    let selector = parse_selector("body").unwrap();
    assert_eq!(selector.specificity, Specificity(0, 0, 1));
    assert!(selector.is_simple());
    assert!(matches!(
        &selector.complex.subject.simple_selectors[0],
        SimpleSelector::Type(name) if name == "body"
    ));
}

#[test]
fn test_parse_compound_selector() {
    let selector = parse_selector("a#home.nav.active[href]").unwrap();
    let simple = &selector.complex.subject.simple_selectors;
    assert_eq!(simple.len(), 5);
    assert!(matches!(&simple[1], SimpleSelector::Id(id) if id == "home"));
    assert!(matches!(&simple[3], SimpleSelector::Class(c) if c == "active"));
    assert_eq!(selector.specificity, Specificity(1, 3, 1));
}

#[test]
fn test_parse_combinators_right_to_left() {
    let selector = parse_selector("div > p span ~ em + b").unwrap();
    let chain: Vec<Combinator> = selector.complex.combinators.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        chain,
        vec![
            Combinator::NextSibling,
            Combinator::SubsequentSibling,
            Combinator::Descendant,
            Combinator::Child,
        ]
    );
    assert!(matches!(
        &selector.complex.subject.simple_selectors[0],
        SimpleSelector::Type(name) if name == "b"
    ));
    assert!(matches!(
        &selector.complex.combinators[3].1.simple_selectors[0],
        SimpleSelector::Type(name) if name == "div"
    ));
}

#[test]
fn test_parse_combinators_without_spaces() {
    assert!(parse_selector("ul>li+li~li").is_some());
}

#[test]
fn test_parse_attribute_selectors() {
    let selector = parse_selector("[ DATA-Kind ^= \"x\" i ]").unwrap();
    let SimpleSelector::Attribute(attribute) = &selector.complex.subject.simple_selectors[0] else {
        panic!("Expected an attribute selector");
    };
    assert_eq!(attribute.name, "data-kind");
    assert_eq!(
        attribute.matcher,
        Some((AttributeOperator::Prefix, "x".to_string()))
    );
    assert!(attribute.case_insensitive);

    for (text, operator) in [
        ("[a=b]", AttributeOperator::Equals),
        ("[a~=b]", AttributeOperator::Includes),
        ("[a|=b]", AttributeOperator::DashMatch),
        ("[a$=b]", AttributeOperator::Suffix),
        ("[a*=b]", AttributeOperator::Substring),
    ] {
        let selector = parse_selector(text).unwrap();
        let SimpleSelector::Attribute(attribute) = &selector.complex.subject.simple_selectors[0]
        else {
            panic!("Expected an attribute selector for {text}");
        };
        assert_eq!(attribute.matcher.as_ref().map(|(op, _)| *op), Some(operator));
    }
}

#[test]
fn test_parse_pseudo_classes_and_elements() {
    let selector = parse_selector("li:first-child::before").unwrap();
    let simple = &selector.complex.subject.simple_selectors;
    assert!(matches!(simple[1], SimpleSelector::PseudoClass(PseudoClass::FirstChild)));
    assert!(matches!(&simple[2], SimpleSelector::PseudoElement(name) if name == "before"));

    let legacy = parse_selector("p:after").unwrap();
    assert!(matches!(
        &legacy.complex.subject.simple_selectors[1],
        SimpleSelector::PseudoElement(name) if name == "after"
    ));

    let hover = parse_selector("a:HOVER").unwrap();
    assert!(matches!(
        &hover.complex.subject.simple_selectors[1],
        SimpleSelector::PseudoClass(PseudoClass::Dynamic(name)) if name == "hover"
    ));
}

#[test]
fn test_parse_invalid_selectors() {
    for text in [
        "",
        "   ",
        "div >",
        "> div",
        "a,b",
        ".",
        "#123",
        "[a=]",
        "[a==b]",
        "[a=b x]",
        "svg|rect",
        ":no-such-class",
        ":nth-child(2)",
        ":not(",
        "div $ p",
    ] {
        assert!(parse_selector(text).is_none(), "{text:?} should be invalid");
    }
}

#[test]
fn test_parse_selector_list() {
    let list = parse_selector_list("h1, .title , #main > p").unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[2].specificity, Specificity(1, 0, 1));

    // One bad selector invalidates the whole list.
    assert!(parse_selector_list("h1, :bogus, h2").is_none());
    assert!(parse_selector_list("h1,").is_none());
}

// ========================================================================
// Specificity
// ========================================================================

#[test]
fn test_specificity() {
    assert_eq!(specificity("*"), Specificity(0, 0, 0));
    assert_eq!(specificity("li"), Specificity(0, 0, 1));
    assert_eq!(specificity("ul li"), Specificity(0, 0, 2));
    assert_eq!(specificity("ul ol+li"), Specificity(0, 0, 3));
    assert_eq!(specificity("h1 + *[rel=up]"), Specificity(0, 1, 1));
    assert_eq!(specificity("ul ol li.red"), Specificity(0, 1, 3));
    assert_eq!(specificity("li.red.level"), Specificity(0, 2, 1));
    assert_eq!(specificity("#x34y"), Specificity(1, 0, 0));
    assert_eq!(specificity("p::first-line"), Specificity(0, 0, 2));
    assert_eq!(specificity("a:hover"), Specificity(0, 1, 1));
}

#[test]
fn test_specificity_of_functional_pseudo_classes() {
    assert_eq!(specificity(":not(#foo)"), Specificity(1, 0, 0));
    assert_eq!(specificity(":is(em, #foo)"), Specificity(1, 0, 0));
    assert_eq!(specificity("div:not(.a, p.b)"), Specificity(0, 1, 2));
    assert_eq!(specificity(":where(#foo, .bar) p"), Specificity(0, 0, 1));
}

#[test]
fn test_specificity_ordering() {
    assert!(Specificity(1, 0, 0) > Specificity(0, 10, 10));
    assert!(Specificity(0, 1, 0) > Specificity(0, 0, 99));
    assert!(Specificity::new(0, 1, 2) < Specificity::new(0, 1, 3));
}

// ========================================================================
// Matching
// ========================================================================

const LIST: &str = r#"
<ul id="list">
  <li id="one" class="item first">One</li>
  <li id="two" class="item">Two <em id="em">x</em></li>
  <li id="three" class="item last" data-kind="Fruit-apple">Three</li>
</ul>
<p id="after">After</p>
"#;

#[test]
fn test_match_type_class_id() {
    assert_eq!(matching_ids(LIST, "li"), vec!["one", "two", "three"]);
    assert_eq!(matching_ids(LIST, "LI"), vec!["one", "two", "three"]);
    assert_eq!(matching_ids(LIST, ".first"), vec!["one"]);
    assert_eq!(matching_ids(LIST, "li.item.last"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "#two"), vec!["two"]);
    assert_eq!(matching_ids(LIST, "p#two"), Vec::<String>::new());
}

#[test]
fn test_match_combinators() {
    assert_eq!(matching_ids(LIST, "ul em"), vec!["em"]);
    assert_eq!(matching_ids(LIST, "ul > em"), Vec::<String>::new());
    assert_eq!(matching_ids(LIST, "ul > li > em"), vec!["em"]);
    assert_eq!(matching_ids(LIST, ".first + li"), vec!["two"]);
    assert_eq!(matching_ids(LIST, ".first ~ li"), vec!["two", "three"]);
    assert_eq!(matching_ids(LIST, "ul + p"), vec!["after"]);
    assert_eq!(matching_ids(LIST, "body > * > li"), vec!["one", "two", "three"]);
}

#[test]
fn test_match_backtracks_through_descendants() {
    let html = r#"<div class="a"><section><div><p id="target">x</p></div></section></div>"#;
    assert_eq!(matching_ids(html, ".a > section p"), vec!["target"]);
    assert_eq!(matching_ids(html, "div.a > div p"), Vec::<String>::new());
}

#[test]
fn test_match_attributes() {
    assert_eq!(matching_ids(LIST, "[data-kind]"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "[data-kind=Fruit-apple]"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "[data-kind=fruit-apple]"), Vec::<String>::new());
    assert_eq!(matching_ids(LIST, "[data-kind=fruit-apple i]"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "[data-kind|=Fruit]"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "[data-kind^=Fruit]"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "[data-kind$=apple]"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "[data-kind*=t-a]"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "[class~=item]"), vec!["one", "two", "three"]);
    assert_eq!(matching_ids(LIST, "[class~=ite]"), Vec::<String>::new());
    assert_eq!(matching_ids(LIST, "[data-kind^=\"\"]"), Vec::<String>::new());
}

#[test]
fn test_match_structural_pseudo_classes() {
    assert_eq!(matching_ids(LIST, "li:first-child"), vec!["one"]);
    assert_eq!(matching_ids(LIST, "li:last-child"), vec!["three"]);
    assert_eq!(matching_ids(LIST, "em:only-child"), vec!["em"]);
    assert_eq!(matching_ids(LIST, "p:first-of-type"), vec!["after"]);
    assert_eq!(matching_ids(LIST, "li:last-of-type"), vec!["three"]);
}

#[test]
fn test_match_root() {
    let tree = parse_str("<p>x</p>");
    let root = parse_selector(":root").unwrap();
    assert_eq!(root.select_all(&tree, NodeId::ROOT), vec![tree.document_element().unwrap()]);
}

#[test]
fn test_match_empty() {
    let html = r#"<div id="a"> <!-- c --> </div><div id="b">x</div><div id="c"><span></span></div>"#;
    assert_eq!(matching_ids(html, "div:empty"), vec!["a"]);
}

#[test]
fn test_match_form_pseudo_classes() {
    let html = r#"
        <input id="box" type="checkbox" checked>
        <input id="text" type="text" checked>
        <select><option id="opt" selected>1</option></select>
        <button id="off" disabled>x</button>
        <a id="link" href="/">home</a><a id="anchor">no href</a>
    "#;
    assert_eq!(matching_ids(html, ":checked"), vec!["box", "opt"]);
    assert_eq!(matching_ids(html, "button:disabled"), vec!["off"]);
    assert_eq!(matching_ids(html, "input:enabled"), vec!["box", "text"]);
    assert_eq!(matching_ids(html, ":link"), vec!["link"]);
    assert_eq!(matching_ids(html, "a:hover"), Vec::<String>::new());
}

#[test]
fn test_match_negation_and_is() {
    assert_eq!(matching_ids(LIST, "li:not(.first)"), vec!["two", "three"]);
    assert_eq!(matching_ids(LIST, "li:not(.first, #three)"), vec!["two"]);
    assert_eq!(matching_ids(LIST, ":is(#one, #after)"), vec!["one", "after"]);
    assert_eq!(matching_ids(LIST, ":where(ul) > .last"), vec!["three"]);
    assert_eq!(matching_ids(LIST, ":is(ul > li) em"), vec!["em"]);
}

#[test]
fn test_pseudo_elements_never_match() {
    assert!(matching_ids(LIST, "li::before").is_empty());
}

#[test]
fn test_foreign_type_selector_is_case_sensitive() {
    let html = r#"<svg><foreignObject id="fo"></foreignObject></svg>"#;
    assert_eq!(matching_ids(html, "foreignObject"), vec!["fo"]);
    assert!(matching_ids(html, "foreignobject").is_empty());
}

#[test]
fn test_matches_single_element() {
    let tree = parse_str(LIST);
    let two = find_by_id(&tree, "two");
    assert!(parse_selector("ul .item").unwrap().matches(&tree, two));
    assert!(!parse_selector("ol .item").unwrap().matches(&tree, two));
}
