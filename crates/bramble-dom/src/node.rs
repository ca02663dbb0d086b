use crate::element::ElementData;

/// A type-safe index into the DOM tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
///
/// Two ids are the same node exactly when they are equal; see
/// [`crate::DomTree::same_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
///
/// The parent is a non-owning index; the children list is the owning,
/// ordered relationship. Siblings are derived from the parent's list.
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.2](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.2](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "An object that participates in a tree has ... children, which is an
    /// ordered set of objects."
    pub children: Vec<NodeId>,
}

impl Node {
    pub(crate) const fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document(DocumentData),
    /// [§ 4.6 Interface DocumentType](https://dom.spec.whatwg.org/#interface-documenttype)
    /// "Doctypes have an associated name, public ID, and system ID."
    DocumentType(DocumentTypeData),
    /// [§ 4.7 Interface DocumentFragment](https://dom.spec.whatwg.org/#interface-documentfragment)
    DocumentFragment,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.11 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.14 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
    /// [§ 4.13 Interface ProcessingInstruction](https://dom.spec.whatwg.org/#interface-processinginstruction)
    ProcessingInstruction(ProcessingInstructionData),
}

impl NodeType {
    /// The numeric `nodeType` constant for this kind of node.
    ///
    /// [§ 4.4](https://dom.spec.whatwg.org/#dom-node-nodetype)
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Element(_) => 1,
            Self::Text(_) => 3,
            Self::ProcessingInstruction(_) => 7,
            Self::Comment(_) => 8,
            Self::Document(_) => 9,
            Self::DocumentType(_) => 10,
            Self::DocumentFragment => 11,
        }
    }
}

/// Per-document state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentData {
    /// [§ 4.5](https://dom.spec.whatwg.org/#concept-document-mode)
    /// "Unless stated otherwise, a document's mode is "no-quirks"."
    pub mode: DocumentMode,
}

/// [§ 4.5](https://dom.spec.whatwg.org/#concept-document-mode)
///
/// "Each document has an associated ... mode ("no-quirks", "quirks", or
/// "limited-quirks")"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DocumentMode {
    /// Standards mode.
    #[default]
    NoQuirks,
    /// Full quirks mode.
    Quirks,
    /// Almost-standards mode.
    LimitedQuirks,
}

impl DocumentMode {
    /// The DOM string for the mode, as used by `compatMode`-style dumps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoQuirks => "no-quirks",
            Self::Quirks => "quirks",
            Self::LimitedQuirks => "limited-quirks",
        }
    }
}

/// Name, public ID and system ID of a doctype node.
///
/// Missing identifiers from the token become empty strings here, as
/// "insert a DocumentType node" requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTypeData {
    /// The doctype name (for example `html`).
    pub name: String,
    /// The public identifier.
    pub public_id: String,
    /// The system identifier.
    pub system_id: String,
}

/// Target and data of a processing instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstructionData {
    /// The PI target.
    pub target: String,
    /// The PI data.
    pub data: String,
}
