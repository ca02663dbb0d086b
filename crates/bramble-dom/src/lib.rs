//! Arena DOM tree for the Bramble engine.
//!
//! This crate provides the node model the HTML tree builder writes into,
//! following the [DOM Living Standard](https://dom.spec.whatwg.org/).
//!
//! # Design
//!
//! Every node lives in a single arena owned by [`DomTree`] and is addressed by
//! a [`NodeId`]. A node's parent is a plain index back-reference and its
//! children are an ordered list of indices, so the tree never holds
//! reference-counted cycles.
//!
//! Two notions of equality are kept apart:
//! - [`DomTree::same_node`] is identity (the two ids name the same slot).
//! - [`DomTree::node_equals`] is the DOM "equals" algorithm: same type, same
//!   data, same attributes and structurally equal children.

mod element;
mod equality;
mod iter;
mod node;
mod tree;

pub use element::{Attr, ElementData, ElementInterface, Namespace, element_interface};
pub use iter::{AncestorIterator, DescendantIterator, PrecedingSiblingIterator};
pub use node::{
    DocumentData, DocumentMode, DocumentTypeData, Node, NodeId, NodeType,
    ProcessingInstructionData,
};
pub use tree::DomTree;
