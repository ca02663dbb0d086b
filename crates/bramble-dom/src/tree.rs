use crate::element::{Attr, ElementData, Namespace};
use crate::iter::{AncestorIterator, DescendantIterator, PrecedingSiblingIterator};
use crate::node::{
    DocumentData, DocumentMode, DocumentTypeData, Node, NodeId, NodeType,
    ProcessingInstructionData,
};

/// Arena-based DOM tree.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree."
///
/// All nodes live in one vector and refer to each other by [`NodeId`]. Nodes
/// are never freed; a removed node simply has no parent. The Document node is
/// always at [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeType::Document(DocumentData::default()))],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of allocated nodes, attached or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the Document node exists from construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(node_type));
        id
    }

    // ========================================================================
    // Node creation
    // ========================================================================

    /// [§ 4.9 Create an element](https://dom.spec.whatwg.org/#concept-create-element)
    ///
    /// Allocates an element whose interface comes from
    /// [`crate::element_interface`]. An HTML `template` also gets its
    /// template contents, a fresh DocumentFragment.
    pub fn create_element(
        &mut self,
        local_name: &str,
        namespace: Namespace,
        attributes: Vec<Attr>,
    ) -> NodeId {
        let mut data = ElementData::new(local_name, namespace, attributes);
        if data.is_html("template") {
            data.template_contents = Some(self.alloc(NodeType::DocumentFragment));
        }
        self.alloc(NodeType::Element(data))
    }

    /// Allocate a detached Text node.
    pub fn create_text(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(NodeType::Text(data.into()))
    }

    /// Allocate a detached Comment node.
    pub fn create_comment(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(NodeType::Comment(data.into()))
    }

    /// Allocate a detached DocumentType node.
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.alloc(NodeType::DocumentType(DocumentTypeData {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }))
    }

    /// Allocate a detached ProcessingInstruction node.
    pub fn create_processing_instruction(&mut self, target: &str, data: &str) -> NodeId {
        self.alloc(NodeType::ProcessingInstruction(ProcessingInstructionData {
            target: target.to_string(),
            data: data.to_string(),
        }))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// [§ 4.2.3 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    ///
    /// Appends `child` as the last child of `parent`. A child that already
    /// has a parent is removed from it first.
    ///
    /// Returns false, leaving the tree untouched, when `child` is an
    /// inclusive ancestor of `parent` (see [`Self::is_inclusive_ancestor`]).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.is_inclusive_ancestor(child, parent) {
            return false;
        }
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        true
    }

    /// [§ 4.2.3 Insert](https://dom.spec.whatwg.org/#concept-node-insert)
    ///
    /// Inserts `child` into `parent` immediately before `reference`. If
    /// `reference` is not a child of `parent`, `child` is appended instead.
    ///
    /// Returns false, leaving the tree untouched, under the same hierarchy
    /// rule as [`Self::append_child`].
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) -> bool {
        if self.is_inclusive_ancestor(child, parent) {
            return false;
        }
        if child == reference {
            return true;
        }
        self.detach(child);
        match self.index_in(parent, reference) {
            Some(index) => {
                self.nodes[parent.0].children.insert(index, child);
                self.nodes[child.0].parent = Some(parent);
                true
            }
            None => self.append_child(parent, child),
        }
    }

    /// [§ 4.2.3 Ensure pre-insertion validity](https://dom.spec.whatwg.org/#concept-node-ensure-pre-insertion-validity)
    ///
    /// "If node is a host-including inclusive ancestor of parent, then throw
    /// a "HierarchyRequestError" DOMException."
    ///
    /// True when `ancestor` is `node` itself or one of its ancestors.
    #[must_use]
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|id| id == ancestor)
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Removes `child` from `parent`. Does nothing if `child` is not a child
    /// of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(index) = self.index_in(parent, child) {
            let _ = self.nodes[parent.0].children.remove(index);
            self.nodes[child.0].parent = None;
        }
    }

    /// Removes `node` from its parent, if it has one.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.parent(node) {
            self.remove_child(parent, node);
        }
    }

    /// Moves every child of `from` to the end of `to`, keeping their order.
    ///
    /// Used by the adoption agency algorithm and by the `frameset` handling
    /// in the "in body" insertion mode.
    ///
    /// Does nothing when `to` is `from` or lies inside it.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        if self.is_inclusive_ancestor(from, to) {
            return;
        }
        let moved = std::mem::take(&mut self.nodes[from.0].children);
        for child in &moved {
            self.nodes[child.0].parent = Some(to);
        }
        self.nodes[to.0].children.extend(moved);
    }

    /// Appends `data` to a Text node. Returns false if `id` is not text.
    pub fn append_text(&mut self, id: NodeId, data: &str) -> bool {
        match self.get_mut(id).map(|n| &mut n.node_type) {
            Some(NodeType::Text(text)) => {
                text.push_str(data);
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// [§ 4.2](https://dom.spec.whatwg.org/#concept-tree-index)
    ///
    /// "The index of an object is its number of preceding siblings, or 0 if
    /// it has none."
    #[must_use]
    pub fn index(&self, id: NodeId) -> usize {
        self.parent(id)
            .and_then(|parent| self.index_in(parent, id))
            .unwrap_or(0)
    }

    fn index_in(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in(parent, id)?;
        self.children(parent).get(index + 1).copied()
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in(parent, id)?;
        index
            .checked_sub(1)
            .and_then(|i| self.children(parent).get(i).copied())
    }

    /// [§ 4.2 Descendant](https://dom.spec.whatwg.org/#concept-tree-descendant)
    ///
    /// "An object A is called a descendant of an object B, if either A is a
    /// child of B or A is a child of an object C that is a descendant of B."
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator::new(self, self.parent(id))
    }

    /// Iterate over preceding siblings (from immediately before to first child).
    #[must_use]
    pub fn preceding_siblings(&self, id: NodeId) -> PrecedingSiblingIterator<'_> {
        PrecedingSiblingIterator::new(self, id)
    }

    /// Iterate over the descendants of a node in tree order, excluding the
    /// node itself. Template contents are not entered.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator::new(self, id)
    }

    // ========================================================================
    // Node data access
    // ========================================================================

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// True when `id` is an HTML element with the given local name.
    #[must_use]
    pub fn is_html_element(&self, id: NodeId, local_name: &str) -> bool {
        self.as_element(id).is_some_and(|e| e.is_html(local_name))
    }

    /// The template contents fragment of a `template` element.
    #[must_use]
    pub fn template_contents(&self, id: NodeId) -> Option<NodeId> {
        self.as_element(id).and_then(|e| e.template_contents)
    }

    /// [§ 4.4](https://dom.spec.whatwg.org/#dom-node-textcontent)
    ///
    /// The concatenation of the data of all Text descendants in tree order,
    /// or the node's own data for Text and Comment nodes.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        match self.get(id).map(|n| &n.node_type) {
            Some(NodeType::Text(data) | NodeType::Comment(data)) => data.clone(),
            Some(NodeType::ProcessingInstruction(pi)) => pi.data.clone(),
            Some(_) => self
                .descendants(id)
                .filter_map(|d| self.as_text(d))
                .collect(),
            None => String::new(),
        }
    }

    // ========================================================================
    // Document accessors
    // ========================================================================

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// "The document element of a document is the element whose parent is that
    /// document, if it exists; otherwise null."
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }

    /// [§ 3.1.3 The head element](https://html.spec.whatwg.org/multipage/dom.html#the-head-element-2)
    ///
    /// "The head element of a document is the first head element that is a
    /// child of the html element, if there is one, or null otherwise."
    #[must_use]
    pub fn head(&self) -> Option<NodeId> {
        let html = self
            .document_element()
            .filter(|&id| self.is_html_element(id, "html"))?;
        self.children(html)
            .iter()
            .find(|&&id| self.is_html_element(id, "head"))
            .copied()
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// "The body element of a document is the first of the html element's children
    /// that is either a body element or a frameset element, or null if there is
    /// no such element."
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self
            .document_element()
            .filter(|&id| self.is_html_element(id, "html"))?;
        self.children(html)
            .iter()
            .find(|&&id| self.is_html_element(id, "body") || self.is_html_element(id, "frameset"))
            .copied()
    }

    /// [§ 4.5](https://dom.spec.whatwg.org/#dom-document-doctype)
    ///
    /// "The doctype getter steps are to return the child of this that is a
    /// doctype; otherwise null."
    #[must_use]
    pub fn doctype(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| {
                matches!(
                    self.get(id).map(|n| &n.node_type),
                    Some(NodeType::DocumentType(_))
                )
            })
            .copied()
    }

    /// The document's quirks mode.
    #[must_use]
    pub fn document_mode(&self) -> DocumentMode {
        match self.get(NodeId::ROOT).map(|n| &n.node_type) {
            Some(NodeType::Document(data)) => data.mode,
            _ => DocumentMode::NoQuirks,
        }
    }

    /// Set the document's quirks mode.
    pub fn set_document_mode(&mut self, mode: DocumentMode) {
        if let Some(NodeType::Document(data)) = self.get_mut(NodeId::ROOT).map(|n| &mut n.node_type)
        {
            data.mode = mode;
        }
    }

    /// [§ 4.4](https://dom.spec.whatwg.org/#dom-node-issamenode)
    ///
    /// Identity comparison: true only when both ids name the same node.
    #[must_use]
    pub fn same_node(&self, a: NodeId, b: NodeId) -> bool {
        a == b && self.get(a).is_some()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
