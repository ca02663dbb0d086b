//! The list of active formatting elements and the adoption agency algorithm.
//!
//! [§ 13.2.4.3 The list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#the-list-of-active-formatting-elements)
//! [§ 13.2.6.4.7 Adoption agency algorithm](https://html.spec.whatwg.org/multipage/parsing.html#adoption-agency-algorithm)

use bramble_dom::{Namespace, NodeId};

use super::HTMLParser;
use crate::tokenizer::Token;

/// An entry in the list of active formatting elements.
///
/// "This list is used to handle mis-nested formatting element tags. The list
/// contains elements in the formatting category, and markers."
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFormattingElement {
    /// A formatting element and the token it was created for, so that it can
    /// be recreated.
    Element {
        /// The element in the tree.
        node_id: NodeId,
        /// The start tag that created it.
        token: Token,
    },
    /// "The markers are inserted when entering applet, object, marquee,
    /// template, td, th, and caption elements, and are used to prevent
    /// formatting from 'leaking' into applet, object, marquee, template, td,
    /// th, and caption elements."
    Marker,
}

impl ActiveFormattingElement {
    const fn node_id(&self) -> Option<NodeId> {
        match self {
            Self::Element { node_id, .. } => Some(*node_id),
            Self::Marker => None,
        }
    }
}

/// "The following elements are formatting elements"
pub(crate) const FORMATTING_ELEMENTS: &[&str] = &[
    "a", "b", "big", "code", "em", "font", "i", "nobr", "s", "small", "strike", "strong", "tt",
    "u",
];

impl HTMLParser {
    /// Index of the entry for `node` in the list of active formatting elements.
    pub(super) fn formatting_position(&self, node: NodeId) -> Option<usize> {
        self.active_formatting_elements
            .iter()
            .position(|entry| entry.node_id() == Some(node))
    }

    /// Drop the entry for `node` from the list, if it is there.
    pub(super) fn remove_formatting_element(&mut self, node: NodeId) {
        if let Some(index) = self.formatting_position(node) {
            let _ = self.active_formatting_elements.remove(index);
        }
    }

    /// The last element named `name` between the end of the list and the last
    /// marker.
    pub(super) fn formatting_element_after_last_marker(&self, name: &str) -> Option<NodeId> {
        self.active_formatting_elements
            .iter()
            .rev()
            .take_while(|entry| !matches!(entry, ActiveFormattingElement::Marker))
            .filter_map(ActiveFormattingElement::node_id)
            .find(|&id| self.is_html(id, name))
    }

    /// Insert a marker at the end of the list.
    pub(super) fn push_formatting_marker(&mut self) {
        self.active_formatting_elements
            .push(ActiveFormattingElement::Marker);
    }

    /// Whether two elements count as identical for the Noah's Ark clause:
    /// same tag name, same namespace and the same attributes, in any order.
    fn same_formatting_element(&self, a: NodeId, b: NodeId) -> bool {
        let (Some(a), Some(b)) = (self.element(a), self.element(b)) else {
            return false;
        };
        a.local_name == b.local_name
            && a.namespace == b.namespace
            && a.attributes.len() == b.attributes.len()
            && a.attributes.iter().all(|attr| b.attributes.contains(attr))
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#push-onto-the-list-of-active-formatting-elements)
    ///
    /// "When the steps below require the UA to push onto the list of active
    /// formatting elements an element element, the UA must perform the
    /// following steps:"
    pub(super) fn push_active_formatting_element(&mut self, node_id: NodeId, token: &Token) {
        // STEP 1: "If there are already three elements in the list of active
        //          formatting elements after the last marker, if any, or
        //          anywhere in the list if there are no markers, that have the
        //          same tag name, namespace, and attributes as element, then
        //          remove the earliest such element from the list of active
        //          formatting elements."
        let matching: Vec<usize> = self
            .active_formatting_elements
            .iter()
            .enumerate()
            .rev()
            .take_while(|(_, entry)| !matches!(entry, ActiveFormattingElement::Marker))
            .filter_map(|(index, entry)| entry.node_id().map(|id| (index, id)))
            .filter(|&(_, id)| self.same_formatting_element(id, node_id))
            .map(|(index, _)| index)
            .collect();
        if matching.len() >= 3
            && let Some(&earliest) = matching.last()
        {
            let _ = self.active_formatting_elements.remove(earliest);
        }

        // STEP 2: "Add element to the list of active formatting elements."
        self.active_formatting_elements
            .push(ActiveFormattingElement::Element {
                node_id,
                token: token.clone(),
            });
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#reconstruct-the-active-formatting-elements)
    ///
    /// "When the steps below require the UA to reconstruct the active
    /// formatting elements, the UA must perform the following steps:"
    pub(super) fn reconstruct_active_formatting_elements(&mut self) {
        // STEP 1: "If there are no entries in the list of active formatting
        //          elements, then there is nothing to reconstruct; stop this
        //          algorithm."
        // STEP 2: "If the last (most recently added) entry in the list of
        //          active formatting elements is a marker, or if it is an
        //          element that is in the stack of open elements, then there
        //          is nothing to reconstruct; stop this algorithm."
        let is_open = |entry: &ActiveFormattingElement| match entry {
            ActiveFormattingElement::Marker => true,
            ActiveFormattingElement::Element { node_id, .. } => {
                self.stack_of_open_elements.contains(node_id)
            }
        };
        match self.active_formatting_elements.last() {
            None => return,
            Some(entry) if is_open(entry) => return,
            Some(_) => {}
        }

        // STEP 3-6: "Rewind": walk back to the entry after the last one that
        //           is a marker or open. `start` is the first entry to recreate.
        let start = self
            .active_formatting_elements
            .iter()
            .rposition(is_open)
            .map_or(0, |index| index + 1);

        // STEP 7-10: "Advance" / "Create": for each entry from `start` on,
        //            insert an HTML element for its token and replace the
        //            entry with the new element.
        for index in start..self.active_formatting_elements.len() {
            let ActiveFormattingElement::Element { token, .. } =
                self.active_formatting_elements[index].clone()
            else {
                continue;
            };
            // STEP 8: "Create: Insert an HTML element for the token for which
            //          the element entry was created, to obtain new element."
            let new_element = self.insert_html_element(&token);
            // STEP 9: "Replace the entry for entry in the list with an entry
            //          for new element."
            self.active_formatting_elements[index] = ActiveFormattingElement::Element {
                node_id: new_element,
                token,
            };
        }
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#clear-the-list-of-active-formatting-elements-up-to-the-last-marker)
    ///
    /// "1. Let entry be the last (most recently added) entry in the list of
    ///     active formatting elements.
    ///  2. Remove entry from the list of active formatting elements.
    ///  3. If entry was a marker, then stop the algorithm at this point.
    ///  4. Go to step 1."
    pub(super) fn clear_active_formatting_elements_to_last_marker(&mut self) {
        while let Some(entry) = self.active_formatting_elements.pop() {
            if entry == ActiveFormattingElement::Marker {
                break;
            }
        }
    }

    /// [§ 13.2.6.4.7 Adoption agency algorithm](https://html.spec.whatwg.org/multipage/parsing.html#adoption-agency-algorithm)
    ///
    /// Returns false when the caller must instead "act as described in the
    /// 'any other end tag' entry".
    pub(super) fn run_adoption_agency(&mut self, subject: &str) -> bool {
        // STEP 2: "If the current node is an HTML element whose tag name is
        //          subject, and the current node is not in the list of active
        //          formatting elements, then pop the current node off the stack
        //          of open elements and return."
        if let Some(current) = self.current_node()
            && self.is_html(current, subject)
            && self.formatting_position(current).is_none()
        {
            let _ = self.stack_of_open_elements.pop();
            return true;
        }

        // STEP 3-4: "Let outer loop counter be 0. Outer loop: If outer loop
        //            counter is greater than or equal to 8, then return."
        for _ in 0..8 {
            // STEP 4.3: "Let formatting element be the last element in the
            //            list of active formatting elements that is between
            //            the end of the list and the last marker in the list,
            //            if any, or the start of the list otherwise, and has
            //            the tag name subject."
            //            "If there is no such element, then return and instead
            //            act as described in the "any other end tag" entry."
            let Some(formatting_element) = self.formatting_element_after_last_marker(subject)
            else {
                return false;
            };

            // STEP 4.4: "If formatting element is not in the stack of open
            //            elements, then this is a parse error; remove the
            //            element from the list, and return."
            let Some(formatting_index) = self
                .stack_of_open_elements
                .iter()
                .position(|&id| id == formatting_element)
            else {
                self.parse_error("formatting element is not open");
                self.remove_formatting_element(formatting_element);
                return true;
            };

            // STEP 4.5: "If formatting element is in the stack of open
            //            elements, but the element is not in scope, then this
            //            is a parse error; return."
            if !self.has_node_in_scope(formatting_element) {
                self.parse_error("formatting element is not in scope");
                return true;
            }

            // STEP 4.6: "If formatting element is not the current node, this
            //            is a parse error. (But do not return.)"
            if self.current_node() != Some(formatting_element) {
                self.parse_error("misnested formatting element");
            }

            // STEP 4.7: "Let furthest block be the topmost node in the stack
            //            of open elements that is lower in the stack than
            //            formatting element, and is an element in the special
            //            category. There might not be one."
            let furthest_block_index = (formatting_index + 1..self.stack_of_open_elements.len())
                .find(|&index| self.is_special(self.stack_of_open_elements[index]));

            // STEP 4.8: "If there is no furthest block, then the UA must first
            //            pop all the nodes from the bottom of the stack of open
            //            elements, from the current node up to and including
            //            formatting element, then remove formatting element
            //            from the list of active formatting elements, and
            //            finally return."
            let Some(furthest_block_index) = furthest_block_index else {
                self.stack_of_open_elements.truncate(formatting_index);
                self.remove_formatting_element(formatting_element);
                return true;
            };
            let furthest_block = self.stack_of_open_elements[furthest_block_index];

            // STEP 4.9: "Let common ancestor be the element immediately above
            //            formatting element in the stack of open elements."
            let common_ancestor = formatting_index
                .checked_sub(1)
                .map_or(NodeId::ROOT, |index| self.stack_of_open_elements[index]);

            // STEP 4.10: "Let a bookmark note the position of formatting
            //             element in the list of active formatting elements
            //             relative to the elements on either side of it in the
            //             list."
            let mut bookmark = self.formatting_position(formatting_element).unwrap_or(0);

            // STEP 4.11: "Let node and last node be furthest block."
            let mut node_index = furthest_block_index;
            let mut last_node = furthest_block;

            // STEP 4.12-4.13: inner loop.
            let mut inner_loop_counter = 0;
            loop {
                // STEP 4.13.1: "Increment inner loop counter by 1."
                inner_loop_counter += 1;

                // STEP 4.13.2: "Let node be the element immediately above node
                //               in the stack of open elements, or if node is no
                //               longer in the stack of open elements (e.g.
                //               because it got removed by this algorithm), the
                //               element that was immediately above node in the
                //               stack of open elements before node was removed."
                node_index -= 1;
                let node = self.stack_of_open_elements[node_index];

                // STEP 4.13.3: "If node is formatting element, then break."
                if node == formatting_element {
                    break;
                }

                // STEP 4.13.4: "If inner loop counter is greater than 3 and
                //               node is in the list of active formatting
                //               elements, then remove node from the list of
                //               active formatting elements."
                let mut afe_index = self.formatting_position(node);
                if inner_loop_counter > 3
                    && let Some(index) = afe_index.take()
                {
                    let _ = self.active_formatting_elements.remove(index);
                    if index < bookmark {
                        bookmark -= 1;
                    }
                }

                // STEP 4.13.5: "If node is not in the list of active formatting
                //               elements, then remove node from the stack of
                //               open elements and continue."
                let Some(afe_index) = afe_index else {
                    let _ = self.stack_of_open_elements.remove(node_index);
                    continue;
                };

                // STEP 4.13.6: "Create an element for the token for which the
                //               element node was created, in the HTML
                //               namespace, with common ancestor as the intended
                //               parent; replace the entry for node in the list
                //               of active formatting elements with an entry for
                //               the new element, replace the entry for node in
                //               the stack of open elements with an entry for the
                //               new element, and let node be the new element."
                let ActiveFormattingElement::Element { token, .. } =
                    self.active_formatting_elements[afe_index].clone()
                else {
                    continue;
                };
                let new_element = self.create_element_for_token(&token, Namespace::Html);
                self.active_formatting_elements[afe_index] = ActiveFormattingElement::Element {
                    node_id: new_element,
                    token,
                };
                self.stack_of_open_elements[node_index] = new_element;

                // STEP 4.13.7: "If last node is furthest block, then move the
                //               aforementioned bookmark to be immediately after
                //               the new node in the list of active formatting
                //               elements."
                if last_node == furthest_block {
                    bookmark = afe_index + 1;
                }

                // STEP 4.13.8: "Append last node to node."
                let _ = self.tree.append_child(new_element, last_node);

                // STEP 4.13.9: "Set last node to node."
                last_node = new_element;
            }

            // STEP 4.14: "Insert whatever last node ended up being in the
            //             previous step at the appropriate place for inserting
            //             a node, but using common ancestor as the override
            //             target."
            let location = self.appropriate_place_for_inserting_a_node(Some(common_ancestor));
            location.insert(&mut self.tree, last_node);

            // STEP 4.15: "Create an element for the token for which formatting
            //             element was created, in the HTML namespace, with
            //             furthest block as the intended parent."
            let Some(formatting_position) = self.formatting_position(formatting_element) else {
                return true;
            };
            let ActiveFormattingElement::Element { token, .. } =
                self.active_formatting_elements[formatting_position].clone()
            else {
                return true;
            };
            let new_element = self.create_element_for_token(&token, Namespace::Html);

            // STEP 4.16: "Take all of the child nodes of furthest block and
            //             append them to the element created in the last step."
            self.tree.move_children(furthest_block, new_element);

            // STEP 4.17: "Append that new element to furthest block."
            let _ = self.tree.append_child(furthest_block, new_element);

            // STEP 4.18: "Remove formatting element from the list of active
            //             formatting elements, and insert the new element into
            //             the list of active formatting elements at the
            //             position of the aforementioned bookmark."
            let _ = self.active_formatting_elements.remove(formatting_position);
            if formatting_position < bookmark {
                bookmark -= 1;
            }
            let bookmark = bookmark.min(self.active_formatting_elements.len());
            self.active_formatting_elements.insert(
                bookmark,
                ActiveFormattingElement::Element {
                    node_id: new_element,
                    token,
                },
            );

            // STEP 4.19: "Remove formatting element from the stack of open
            //             elements, and insert the new element into the stack
            //             of open elements immediately below the position of
            //             furthest block in that stack."
            self.remove_from_stack(formatting_element);
            let below_furthest_block = self
                .stack_of_open_elements
                .iter()
                .position(|&id| id == furthest_block)
                .map_or(self.stack_of_open_elements.len(), |index| index + 1);
            self.stack_of_open_elements
                .insert(below_furthest_block, new_element);
        }
        true
    }

    /// [§ 13.2.6.4.7](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    ///
    /// "Any other end tag" in the "in body" insertion mode.
    pub(super) fn any_other_end_tag_in_body(&mut self, name: &str) {
        // STEP 1: "Initialize node to be the current node (the bottommost node
        //          of the stack)."
        for index in (0..self.stack_of_open_elements.len()).rev() {
            let node = self.stack_of_open_elements[index];
            // STEP 2: "Loop: If node is an HTML element with the same tag name
            //          as the token, then:"
            if self.is_html(node, name) {
                // "Generate implied end tags, except for HTML elements with the
                //  same tag name as the token."
                self.generate_implied_end_tags(Some(name));
                // "If node is not the current node, then this is a parse error."
                if self.current_node() != Some(node) {
                    self.parse_error("end tag closes unclosed elements");
                }
                // "Pop all the nodes from the current node up to node,
                //  including node, then stop these steps."
                self.pop_until_node(node);
                return;
            }
            // STEP 3: "Otherwise, if node is in the special category, then
            //          this is a parse error; ignore the token, and return."
            if self.is_special(node) {
                self.parse_error("end tag does not match an open element");
                return;
            }
            // STEP 4: "Set node to the previous entry in the stack of open
            //          elements." STEP 5: "Return to the step labeled loop."
        }
    }
}
