use crate::node::NodeId;
use crate::tree::DomTree;

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl<'a> AncestorIterator<'a> {
    pub(crate) const fn new(tree: &'a DomTree, start: Option<NodeId>) -> Self {
        Self {
            tree,
            current: start,
        }
    }
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Iterator over preceding siblings of a node, nearest first.
pub struct PrecedingSiblingIterator<'a> {
    siblings: &'a [NodeId],
}

impl<'a> PrecedingSiblingIterator<'a> {
    pub(crate) fn new(tree: &'a DomTree, id: NodeId) -> Self {
        let siblings = tree.parent(id).map_or(&[][..], |parent| {
            let all = tree.children(parent);
            let index = all.iter().position(|&c| c == id).unwrap_or(0);
            &all[..index]
        });
        Self { siblings }
    }
}

impl Iterator for PrecedingSiblingIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.siblings.split_last()?;
        self.siblings = rest;
        Some(*last)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> DescendantIterator<'a> {
    pub(crate) fn new(tree: &'a DomTree, root: NodeId) -> Self {
        let stack = tree.children(root).iter().rev().copied().collect();
        Self { tree, stack }
    }
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
