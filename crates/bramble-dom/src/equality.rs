use crate::element::Attr;
use crate::node::{NodeId, NodeType};
use crate::tree::DomTree;

impl DomTree {
    /// [§ 4.4 Concept node equals](https://dom.spec.whatwg.org/#concept-node-equals)
    ///
    /// "A node A equals a node B if all of the following conditions are true:
    /// A and B implement the same interfaces. The following are equal,
    /// switching on the interface A implements: ... If A is an element, each
    /// attribute in its attribute list has an attribute that equals an
    /// attribute in B's attribute list. A and B have the same number of
    /// children. Each child of A equals the child of B at the identical index."
    ///
    /// Structural, not identity: two distinct nodes can be equal. Use
    /// [`DomTree::same_node`] for identity.
    #[must_use]
    pub fn node_equals(&self, a: NodeId, b: NodeId) -> bool {
        let (Some(node_a), Some(node_b)) = (self.get(a), self.get(b)) else {
            return false;
        };

        let data_equal = match (&node_a.node_type, &node_b.node_type) {
            (NodeType::Document(_), NodeType::Document(_))
            | (NodeType::DocumentFragment, NodeType::DocumentFragment) => true,
            // "DocumentType: Its name, public ID, and system ID."
            (NodeType::DocumentType(x), NodeType::DocumentType(y)) => x == y,
            // "Element: Its namespace, namespace prefix, local name, and its
            // number of attributes in its attribute list."
            (NodeType::Element(x), NodeType::Element(y)) => {
                x.namespace == y.namespace
                    && x.prefix == y.prefix
                    && x.local_name == y.local_name
                    && x.attributes.len() == y.attributes.len()
                    && x
                        .attributes
                        .iter()
                        .all(|attr| y.attributes.iter().any(|other| attr_equals(attr, other)))
            }
            // "Text, Comment: Its data."
            (NodeType::Text(x), NodeType::Text(y))
            | (NodeType::Comment(x), NodeType::Comment(y)) => x == y,
            // "ProcessingInstruction: Its target and data."
            (NodeType::ProcessingInstruction(x), NodeType::ProcessingInstruction(y)) => x == y,
            _ => false,
        };

        data_equal
            && node_a.children.len() == node_b.children.len()
            && node_a
                .children
                .iter()
                .zip(&node_b.children)
                .all(|(&ca, &cb)| self.node_equals(ca, cb))
    }
}

/// "Attr: Its namespace, local name, and value."
fn attr_equals(a: &Attr, b: &Attr) -> bool {
    a.namespace() == b.namespace() && a.local_name() == b.local_name() && a.value() == b.value()
}
