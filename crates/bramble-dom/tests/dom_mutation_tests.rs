//! Tests for tree mutation: append_child, insert_before, remove_child, move_children.

use bramble_dom::{DomTree, Namespace, NodeId};

fn element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.create_element(tag, Namespace::Html, Vec::new())
}

// ========== append_child ==========

#[test]
fn test_append_child_reparents_attached_node() {
    let mut tree = DomTree::new();
    let first = element(&mut tree, "div");
    let second = element(&mut tree, "section");
    let _ = tree.append_child(NodeId::ROOT, first);
    let _ = tree.append_child(NodeId::ROOT, second);

    let child = element(&mut tree, "p");
    let _ = tree.append_child(first, child);
    let _ = tree.append_child(second, child);

    assert!(tree.children(first).is_empty());
    assert_eq!(tree.children(second), &[child]);
    assert_eq!(tree.parent(child), Some(second));
}

#[test]
fn test_append_child_rejects_ancestor_under_descendant() {
    let mut tree = DomTree::new();
    let outer = element(&mut tree, "div");
    let inner = element(&mut tree, "span");
    let _ = tree.append_child(NodeId::ROOT, outer);
    let _ = tree.append_child(outer, inner);

    assert!(!tree.append_child(inner, outer));

    assert_eq!(tree.children(NodeId::ROOT), &[outer]);
    assert_eq!(tree.parent(outer), Some(NodeId::ROOT));
    assert_eq!(tree.parent(inner), Some(outer));
    assert!(tree.children(inner).is_empty());
    let ancestors: Vec<_> = tree.ancestors(inner).collect();
    assert_eq!(ancestors, vec![outer, NodeId::ROOT]);
}

#[test]
fn test_append_child_rejects_node_under_itself() {
    let mut tree = DomTree::new();
    let lone = element(&mut tree, "p");

    assert!(!tree.append_child(lone, lone));

    assert_eq!(tree.parent(lone), None);
    assert!(tree.children(lone).is_empty());
}

#[test]
fn test_insert_before_rejects_root_under_grandchild() {
    let mut tree = DomTree::new();
    let list = element(&mut tree, "ul");
    let item = element(&mut tree, "li");
    let text = tree.create_text("x");
    let _ = tree.append_child(NodeId::ROOT, list);
    let _ = tree.append_child(list, item);
    let _ = tree.append_child(item, text);

    assert!(!tree.insert_before(item, list, text));

    assert_eq!(tree.children(item), &[text]);
    assert_eq!(tree.parent(list), Some(NodeId::ROOT));
    assert_eq!(tree.descendants(NodeId::ROOT).count(), 3);
    assert_eq!(tree.text_content(NodeId::ROOT), "x");
}

#[test]
fn test_insertion_accepts_valid_moves() {
    let mut tree = DomTree::new();
    let a = element(&mut tree, "div");
    let b = element(&mut tree, "div");
    let _ = tree.append_child(NodeId::ROOT, a);

    assert!(tree.append_child(a, b));
    assert!(tree.insert_before(NodeId::ROOT, b, a));
    assert_eq!(tree.children(NodeId::ROOT), &[b, a]);
    assert!(tree.is_inclusive_ancestor(NodeId::ROOT, b));
    assert!(tree.is_inclusive_ancestor(b, b));
    assert!(!tree.is_inclusive_ancestor(a, b));
}

// ========== remove_child ==========

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let parent = element(&mut tree, "ul");
    let _ = tree.append_child(NodeId::ROOT, parent);

    let a = element(&mut tree, "li");
    let b = element(&mut tree, "li");
    let c = element(&mut tree, "li");
    let _ = tree.append_child(parent, a);
    let _ = tree.append_child(parent, b);
    let _ = tree.append_child(parent, c);

    tree.remove_child(parent, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.parent(b), None);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
    assert_eq!(tree.next_sibling(b), None);
}

#[test]
fn test_remove_child_ignores_non_child() {
    let mut tree = DomTree::new();
    let parent = element(&mut tree, "div");
    let stranger = element(&mut tree, "span");
    let _ = tree.append_child(NodeId::ROOT, parent);
    let _ = tree.append_child(NodeId::ROOT, stranger);

    tree.remove_child(parent, stranger);

    assert_eq!(tree.parent(stranger), Some(NodeId::ROOT));
    assert_eq!(tree.children(NodeId::ROOT), &[parent, stranger]);
}

// ========== insert_before ==========

#[test]
fn test_insert_before_first_child() {
    let mut tree = DomTree::new();
    let parent = element(&mut tree, "div");
    let _ = tree.append_child(NodeId::ROOT, parent);

    let existing = element(&mut tree, "b");
    let _ = tree.append_child(parent, existing);

    let new_child = element(&mut tree, "a");
    let _ = tree.insert_before(parent, new_child, existing);

    assert_eq!(tree.children(parent), &[new_child, existing]);
    assert_eq!(tree.parent(new_child), Some(parent));
    assert_eq!(tree.prev_sibling(new_child), None);
    assert_eq!(tree.index(existing), 1);
}

#[test]
fn test_insert_before_moves_within_same_parent() {
    let mut tree = DomTree::new();
    let parent = element(&mut tree, "div");
    let _ = tree.append_child(NodeId::ROOT, parent);

    let a = element(&mut tree, "a");
    let b = element(&mut tree, "b");
    let c = element(&mut tree, "c");
    let _ = tree.append_child(parent, a);
    let _ = tree.append_child(parent, b);
    let _ = tree.append_child(parent, c);

    let _ = tree.insert_before(parent, c, a);

    assert_eq!(tree.children(parent), &[c, a, b]);
}

#[test]
fn test_insert_before_unknown_reference_appends() {
    let mut tree = DomTree::new();
    let parent = element(&mut tree, "div");
    let elsewhere = element(&mut tree, "p");
    let _ = tree.append_child(NodeId::ROOT, parent);

    let child = element(&mut tree, "span");
    let _ = tree.insert_before(parent, child, elsewhere);

    assert_eq!(tree.children(parent), &[child]);
}

// ========== move_children ==========

#[test]
fn test_move_children_into_own_child_is_ignored() {
    let mut tree = DomTree::new();
    let parent = element(&mut tree, "div");
    let child = element(&mut tree, "p");
    let _ = tree.append_child(NodeId::ROOT, parent);
    let _ = tree.append_child(parent, child);

    tree.move_children(parent, child);

    assert_eq!(tree.children(parent), &[child]);
    assert!(tree.children(child).is_empty());
}

#[test]
fn test_move_children_appends_to_existing() {
    let mut tree = DomTree::new();
    let from = element(&mut tree, "div");
    let to = element(&mut tree, "span");
    let _ = tree.append_child(NodeId::ROOT, from);
    let _ = tree.append_child(NodeId::ROOT, to);

    let existing = element(&mut tree, "x");
    let _ = tree.append_child(to, existing);
    let moved = element(&mut tree, "y");
    let moved_text = tree.create_text("tail");
    let _ = tree.append_child(from, moved);
    let _ = tree.append_child(from, moved_text);

    tree.move_children(from, to);

    assert!(tree.children(from).is_empty());
    assert_eq!(tree.children(to), &[existing, moved, moved_text]);
    assert_eq!(tree.parent(moved_text), Some(to));
    assert_eq!(tree.next_sibling(existing), Some(moved));
}

#[test]
fn test_move_children_empty_source() {
    let mut tree = DomTree::new();
    let from = element(&mut tree, "div");
    let to = element(&mut tree, "span");

    tree.move_children(from, to);

    assert!(tree.children(from).is_empty());
    assert!(tree.children(to).is_empty());
}

// ========== text ==========

#[test]
fn test_append_text_only_touches_text_nodes() {
    let mut tree = DomTree::new();
    let text = tree.create_text("Hello");
    let div = element(&mut tree, "div");

    assert!(tree.append_text(text, ", world"));
    assert!(!tree.append_text(div, "ignored"));
    assert_eq!(tree.as_text(text), Some("Hello, world"));
}
