//! Tree dumps for debugging and tests.

use std::fmt::Write;

use bramble_dom::{DomTree, Namespace, NodeId, NodeType};

/// Render the subtree under `id` one node per line, in the layout used by
/// the html5lib tree construction tests:
///
/// ```text
/// | <!DOCTYPE html>
/// | <html>
/// |   <head>
/// |   <body>
/// |     <svg svg>
/// |       viewBox="0 0 10 10"
/// |     "text"
/// ```
///
/// The Document node itself is not printed; its children start at depth 0.
/// Foreign elements carry their namespace (`svg`, `math`), namespaced
/// attributes their prefix, and template contents appear under a `content`
/// line.
#[must_use]
pub fn format_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    let is_container = matches!(
        tree.get(id).map(|node| &node.node_type),
        Some(NodeType::Document(_) | NodeType::DocumentFragment)
    );
    if is_container {
        for &child in tree.children(id) {
            write_node(tree, child, 0, &mut out);
        }
    } else {
        write_node(tree, id, 0, &mut out);
    }
    out
}

/// Print [`format_tree`] to stdout.
pub fn print_tree(tree: &DomTree, id: NodeId) {
    print!("{}", format_tree(tree, id));
}

fn write_line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "| {}{text}", "  ".repeat(depth));
}

fn write_node(tree: &DomTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document(_) | NodeType::DocumentFragment => {}
        NodeType::DocumentType(doctype) => {
            if doctype.public_id.is_empty() && doctype.system_id.is_empty() {
                write_line(out, depth, &format!("<!DOCTYPE {}>", doctype.name));
            } else {
                write_line(
                    out,
                    depth,
                    &format!(
                        "<!DOCTYPE {} \"{}\" \"{}\">",
                        doctype.name, doctype.public_id, doctype.system_id
                    ),
                );
            }
        }
        NodeType::Element(element) => {
            let name = match element.namespace {
                Namespace::Html => element.local_name.clone(),
                namespace => format!("{} {}", namespace.short_name(), element.local_name),
            };
            write_line(out, depth, &format!("<{name}>"));

            let mut attributes: Vec<(String, &str)> = element
                .attributes
                .iter()
                .map(|attr| {
                    let name = match attr.namespace() {
                        Some(namespace) => {
                            format!("{} {}", namespace.short_name(), attr.local_name())
                        }
                        None => attr.local_name().to_string(),
                    };
                    (name, attr.value())
                })
                .collect();
            attributes.sort();
            for (name, value) in attributes {
                write_line(out, depth + 1, &format!("{name}=\"{value}\""));
            }

            if let Some(contents) = element.template_contents {
                write_line(out, depth + 1, "content");
                for &child in tree.children(contents) {
                    write_node(tree, child, depth + 2, out);
                }
            }
        }
        NodeType::Text(data) => write_line(out, depth, &format!("\"{data}\"")),
        NodeType::Comment(data) => write_line(out, depth, &format!("<!-- {data} -->")),
        NodeType::ProcessingInstruction(pi) => {
            write_line(out, depth, &format!("<?{} {}>", pi.target, pi.data));
        }
    }
    for &child in tree.children(id) {
        write_node(tree, child, depth + 1, out);
    }
}
