//! [§ 17 API Hooks](https://www.w3.org/TR/selectors-4/#api-hooks): matching a
//! selector against an element of a finished tree.

use bramble_dom::{DomTree, ElementData, Namespace, NodeId, NodeType};

use super::{
    AttributeOperator, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    ParsedSelector, PseudoClass, SimpleSelector,
};

/// Form controls that can be disabled.
const DISABLEABLE: &[&str] = &[
    "button", "input", "select", "textarea", "optgroup", "option", "fieldset",
];

impl ParsedSelector {
    /// "A selector is said to match an element when..." every compound in
    /// the chain finds an element in the relationship its combinator names.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, element: NodeId) -> bool {
        self.complex.matches(tree, element)
    }

    /// Every element under `root` the selector matches, in tree order.
    #[must_use]
    pub fn select_all(&self, tree: &DomTree, root: NodeId) -> Vec<NodeId> {
        tree.descendants(root)
            .filter(|&id| self.matches(tree, id))
            .collect()
    }
}

impl ComplexSelector {
    /// Match with `element` as the subject.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, element: NodeId) -> bool {
        compound_matches(&self.subject, tree, element)
            && chain_matches(&self.combinators, tree, element)
    }
}

/// Match the remaining (combinator, compound) pairs leftward from `from`.
///
/// Descendant and subsequent-sibling combinators try every candidate, so a
/// failure further left backtracks to the next candidate.
fn chain_matches(chain: &[(Combinator, CompoundSelector)], tree: &DomTree, from: NodeId) -> bool {
    let Some(((combinator, compound), rest)) = chain.split_first() else {
        return true;
    };
    let candidate_matches =
        |id: NodeId| compound_matches(compound, tree, id) && chain_matches(rest, tree, id);

    match combinator {
        Combinator::Descendant => tree.ancestors(from).any(candidate_matches),
        Combinator::Child => tree.parent(from).is_some_and(candidate_matches),
        Combinator::NextSibling => previous_element_sibling(tree, from).is_some_and(candidate_matches),
        Combinator::SubsequentSibling => tree
            .preceding_siblings(from)
            .filter(|&id| tree.as_element(id).is_some())
            .any(candidate_matches),
    }
}

fn compound_matches(compound: &CompoundSelector, tree: &DomTree, id: NodeId) -> bool {
    let Some(element) = tree.as_element(id) else {
        return false;
    };
    compound
        .simple_selectors
        .iter()
        .all(|simple| simple_matches(simple, tree, id, element))
}

fn simple_matches(simple: &SimpleSelector, tree: &DomTree, id: NodeId, element: &ElementData) -> bool {
    match simple {
        // Type selectors are ASCII case-insensitive against HTML elements
        // and exact against foreign ones.
        SimpleSelector::Type(name) => {
            if element.namespace == Namespace::Html {
                element.local_name.eq_ignore_ascii_case(name)
            } else {
                element.local_name == *name
            }
        }
        SimpleSelector::Universal => true,
        SimpleSelector::Id(value) => element.id() == Some(value.as_str()),
        SimpleSelector::Class(class) => element.class_list().contains(&class.as_str()),
        SimpleSelector::Attribute(selector) => attribute_matches(selector, element),
        SimpleSelector::PseudoClass(pseudo) => pseudo_class_matches(pseudo, tree, id, element),
        SimpleSelector::PseudoElement(_) => false,
    }
}

/// [§ 6.1 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
fn attribute_matches(selector: &AttributeSelector, element: &ElementData) -> bool {
    let Some(actual) = element.get_attribute(&selector.name) else {
        return false;
    };
    let Some((operator, expected)) = &selector.matcher else {
        return true;
    };
    let (actual, expected) = if selector.case_insensitive {
        (actual.to_ascii_lowercase(), expected.to_ascii_lowercase())
    } else {
        (actual.to_string(), expected.clone())
    };
    match operator {
        AttributeOperator::Equals => actual == expected,
        AttributeOperator::Includes => {
            !expected.is_empty() && actual.split_ascii_whitespace().any(|word| word == expected)
        }
        AttributeOperator::DashMatch => {
            actual == expected
                || actual
                    .strip_prefix(expected.as_str())
                    .is_some_and(|rest| rest.starts_with('-'))
        }
        // "If "val" is the empty string then the selector does not
        // represent anything."
        AttributeOperator::Prefix => !expected.is_empty() && actual.starts_with(&expected),
        AttributeOperator::Suffix => !expected.is_empty() && actual.ends_with(&expected),
        AttributeOperator::Substring => !expected.is_empty() && actual.contains(&expected),
    }
}

fn pseudo_class_matches(pseudo: &PseudoClass, tree: &DomTree, id: NodeId, element: &ElementData) -> bool {
    match pseudo {
        PseudoClass::Root => tree.document_element() == Some(id),
        PseudoClass::FirstChild => element_siblings(tree, id).first() == Some(&id),
        PseudoClass::LastChild => element_siblings(tree, id).last() == Some(&id),
        PseudoClass::OnlyChild => element_siblings(tree, id) == [id],
        PseudoClass::FirstOfType => same_type_siblings(tree, id, element).first() == Some(&id),
        PseudoClass::LastOfType => same_type_siblings(tree, id, element).last() == Some(&id),
        // "The :empty pseudo-class represents an element that has no
        // children except, optionally, document white space characters."
        PseudoClass::Empty => tree.children(id).iter().all(|&child| {
            match tree.get(child).map(|node| &node.node_type) {
                Some(NodeType::Text(data)) => data.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')),
                Some(NodeType::Comment(_) | NodeType::ProcessingInstruction(_)) => true,
                _ => false,
            }
        }),
        PseudoClass::Link => {
            element.is_one_of(Namespace::Html, &["a", "area", "link"])
                && element.get_attribute("href").is_some()
        }
        PseudoClass::Checked => {
            let checkable = element.is_html("input")
                && element
                    .get_attribute("type")
                    .is_some_and(|kind| kind.eq_ignore_ascii_case("checkbox") || kind.eq_ignore_ascii_case("radio"));
            (checkable && element.get_attribute("checked").is_some())
                || (element.is_html("option") && element.get_attribute("selected").is_some())
        }
        PseudoClass::Disabled => {
            element.is_one_of(Namespace::Html, DISABLEABLE) && element.get_attribute("disabled").is_some()
        }
        PseudoClass::Enabled => {
            element.is_one_of(Namespace::Html, DISABLEABLE) && element.get_attribute("disabled").is_none()
        }
        PseudoClass::Not(list) => !list.iter().any(|complex| complex.matches(tree, id)),
        PseudoClass::Is(list) | PseudoClass::Where(list) => {
            list.iter().any(|complex| complex.matches(tree, id))
        }
        PseudoClass::Dynamic(_) => false,
    }
}

/// The element children of `id`'s parent, in order.
fn element_siblings(tree: &DomTree, id: NodeId) -> Vec<NodeId> {
    tree.parent(id).map_or_else(Vec::new, |parent| {
        tree.children(parent)
            .iter()
            .copied()
            .filter(|&child| tree.as_element(child).is_some())
            .collect()
    })
}

fn same_type_siblings(tree: &DomTree, id: NodeId, element: &ElementData) -> Vec<NodeId> {
    element_siblings(tree, id)
        .into_iter()
        .filter(|&sibling| {
            tree.as_element(sibling).is_some_and(|other| {
                other.namespace == element.namespace && other.local_name == element.local_name
            })
        })
        .collect()
}

fn previous_element_sibling(tree: &DomTree, id: NodeId) -> Option<NodeId> {
    tree.preceding_siblings(id)
        .find(|&sibling| tree.as_element(sibling).is_some())
}
