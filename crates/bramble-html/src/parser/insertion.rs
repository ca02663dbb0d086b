//! Creating and inserting nodes.
//!
//! [§ 13.2.6.1 Creating and inserting nodes](https://html.spec.whatwg.org/multipage/parsing.html#creating-and-inserting-nodes)

use bramble_dom::{DomTree, Namespace, NodeId, NodeType};

use super::HTMLParser;
use super::foreign_content::{attributes_for_namespace, local_name_for_namespace};
use super::modes::InsertionMode;
use crate::tokenizer::{Token, TokenizerState};

/// Elements that trigger foster parenting when they are the insertion target.
const FOSTER_PARENT_TARGETS: &[&str] = &["table", "tbody", "tfoot", "thead", "tr"];

/// A place in the tree where a node can be inserted: inside `parent`, either
/// before `before` or, when that is `None`, as the last child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AdjustedInsertionLocation {
    pub(crate) parent: NodeId,
    pub(crate) before: Option<NodeId>,
}

impl AdjustedInsertionLocation {
    const fn inside(parent: NodeId) -> Self {
        Self {
            parent,
            before: None,
        }
    }

    /// Put `node` at this location.
    pub(crate) fn insert(self, tree: &mut DomTree, node: NodeId) {
        let _ = match self.before {
            Some(reference) => tree.insert_before(self.parent, node, reference),
            None => tree.append_child(self.parent, node),
        };
    }

    /// The node immediately before this location, if any.
    fn node_before(self, tree: &DomTree) -> Option<NodeId> {
        match self.before {
            Some(reference) => tree.prev_sibling(reference),
            None => tree.last_child(self.parent),
        }
    }
}

impl HTMLParser {
    /// [§ 13.2.6.1](https://html.spec.whatwg.org/multipage/parsing.html#appropriate-place-for-inserting-a-node)
    ///
    /// "The appropriate place for inserting a node, optionally using a
    /// particular override target, is the position in an element returned by
    /// running the following steps:"
    pub(super) fn appropriate_place_for_inserting_a_node(
        &self,
        override_target: Option<NodeId>,
    ) -> AdjustedInsertionLocation {
        // STEP 1: "If there was an override target specified, then let target
        //          be the override target. Otherwise, let target be the
        //          current node."
        let target = override_target
            .or_else(|| self.current_node())
            .unwrap_or(NodeId::ROOT);

        // STEP 2: "Determine the adjusted insertion location using the first
        //          matching steps from the following list:"
        let location = if self.foster_parenting && self.is_html_one_of(target, FOSTER_PARENT_TARGETS)
        {
            self.foster_parent_location()
        } else {
            // "Otherwise: Let adjusted insertion location be inside target,
            //  after its last child (if any)."
            AdjustedInsertionLocation::inside(target)
        };

        // STEP 3: "If the adjusted insertion location is inside a template
        //          element, let it instead be inside the template element's
        //          template contents, after its last child (if any)."
        match self.tree.template_contents(location.parent) {
            Some(contents) => AdjustedInsertionLocation::inside(contents),
            None => location,
        }
    }

    /// [§ 13.2.6.1](https://html.spec.whatwg.org/multipage/parsing.html#foster-parent)
    ///
    /// "If foster parenting is enabled and target is a table, tbody, tfoot,
    /// thead, or tr element"
    fn foster_parent_location(&self) -> AdjustedInsertionLocation {
        let stack = &self.stack_of_open_elements;

        // STEP 2.1: "Let last template be the last template element in the
        //            stack of open elements, if any."
        let last_template = stack.iter().rposition(|&id| self.is_html(id, "template"));
        // STEP 2.2: "Let last table be the last table element in the stack of
        //            open elements, if any."
        let last_table = stack.iter().rposition(|&id| self.is_html(id, "table"));

        match (last_template, last_table) {
            // STEP 2.3: "If there is a last template and either there is no
            //            last table, or there is one, but last template is
            //            lower (more recently added) than last table in the
            //            stack of open elements, then: let adjusted insertion
            //            location be inside last template's template contents,
            //            after its last child (if any), and abort these steps."
            (Some(template), table) if table.is_none_or(|table| template > table) => {
                let template = stack[template];
                AdjustedInsertionLocation::inside(
                    self.tree.template_contents(template).unwrap_or(template),
                )
            }
            // STEP 2.4: "If there is no last table, then let adjusted insertion
            //            location be inside the first element in the stack of
            //            open elements (the html element), after its last child
            //            (if any), and abort these steps. (fragment case)"
            (_, None) => {
                AdjustedInsertionLocation::inside(stack.first().copied().unwrap_or(NodeId::ROOT))
            }
            (_, Some(table_index)) => {
                let table = stack[table_index];
                // STEP 2.5: "If last table has a parent node, then let adjusted
                //            insertion location be inside last table's parent
                //            node, immediately before last table, and abort
                //            these steps."
                if let Some(parent) = self.tree.parent(table) {
                    return AdjustedInsertionLocation {
                        parent,
                        before: Some(table),
                    };
                }
                // STEP 2.6: "Let previous element be the element immediately
                //            above last table in the stack of open elements."
                // STEP 2.7: "Let adjusted insertion location be inside previous
                //            element, after its last child (if any)."
                let previous = table_index
                    .checked_sub(1)
                    .map_or(NodeId::ROOT, |index| stack[index]);
                AdjustedInsertionLocation::inside(previous)
            }
        }
    }

    /// [§ 13.2.6.1 Insert a character](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-character)
    pub(super) fn insert_character(&mut self, c: char) {
        let mut buffer = [0; 4];
        self.insert_characters(c.encode_utf8(&mut buffer));
    }

    /// Insert a run of characters at one location, as consecutive "insert a
    /// character" steps would.
    pub(super) fn insert_characters(&mut self, data: &str) {
        if data.is_empty() {
            return;
        }
        // STEP 2: "Let the adjusted insertion location be the appropriate place
        //          for inserting a node."
        let location = self.appropriate_place_for_inserting_a_node(None);

        // STEP 3: "If the adjusted insertion location is inside a Document
        //          node, then ignore the token."
        if matches!(
            self.tree.get(location.parent).map(|node| &node.node_type),
            Some(NodeType::Document(_))
        ) {
            return;
        }

        // STEP 4: "If there is a Text node immediately before the adjusted
        //          insertion location, then append data to that Text node's
        //          data."
        if let Some(previous) = location.node_before(&self.tree)
            && self.tree.append_text(previous, data)
        {
            return;
        }

        // "Otherwise, create a new Text node whose data is data ... and
        //  insert the newly created node at the adjusted insertion location."
        let text = self.tree.create_text(data);
        location.insert(&mut self.tree, text);
    }

    /// [§ 13.2.6.1 Insert a comment](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-comment)
    ///
    /// "When the steps below require the user agent to insert a comment while
    /// processing a comment token, optionally with an explicitly insertion
    /// position position, the user agent must run the following steps:"
    pub(super) fn insert_comment(&mut self, data: &str, position: Option<AdjustedInsertionLocation>) {
        // STEP 2: "If position was specified, then let the adjusted insertion
        //          location be position. Otherwise, let adjusted insertion
        //          location be the appropriate place for inserting a node."
        let location =
            position.unwrap_or_else(|| self.appropriate_place_for_inserting_a_node(None));
        // STEP 3: "Create a Comment node whose data attribute is set to data"
        let comment = self.tree.create_comment(data);
        // STEP 4: "Insert the newly created node at the adjusted insertion location."
        location.insert(&mut self.tree, comment);
    }

    /// Insert a comment as the last child of `parent` (the Document or the
    /// `html` element, in the "after" modes).
    pub(super) fn insert_comment_as_last_child_of(&mut self, data: &str, parent: NodeId) {
        self.insert_comment(data, Some(AdjustedInsertionLocation::inside(parent)));
    }

    /// [§ 13.2.6.1 Create an element for a token](https://html.spec.whatwg.org/multipage/parsing.html#create-an-element-for-the-token)
    ///
    /// Custom elements and form association are not modelled; what remains is
    /// creating the element in the given namespace with the token's
    /// attributes.
    pub(super) fn create_element_for_token(&mut self, token: &Token, namespace: Namespace) -> NodeId {
        let (name, attributes) = Self::tag_parts(token);
        let local_name = local_name_for_namespace(namespace, name);
        let attributes = attributes_for_namespace(namespace, attributes);
        self.tree.create_element(local_name, namespace, attributes)
    }

    /// [§ 13.2.6.1 Insert a foreign element](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-foreign-element)
    ///
    /// "When the steps below require the user agent to insert a foreign
    /// element for a token in a given namespace and with a boolean
    /// onlyAddToElementStack, the user agent must run these steps:"
    pub(super) fn insert_foreign_element(
        &mut self,
        token: &Token,
        namespace: Namespace,
        only_add_to_element_stack: bool,
    ) -> NodeId {
        // STEP 1: "Let the adjusted insertion location be the appropriate place
        //          for inserting a node."
        let location = self.appropriate_place_for_inserting_a_node(None);
        // STEP 2: "Let element be the result of creating an element for the
        //          token in the given namespace, with the intended parent
        //          being the element in which the adjusted insertion location
        //          finds itself."
        let element = self.create_element_for_token(token, namespace);
        // STEP 3: "If onlyAddToElementStack is false, then run insert an
        //          element at the adjusted insertion location with element."
        if !only_add_to_element_stack {
            location.insert(&mut self.tree, element);
        }
        // STEP 4: "Push element onto the stack of open elements so that it is
        //          the new current node."
        self.stack_of_open_elements.push(element);
        element
    }

    /// [§ 13.2.6.1 Insert an HTML element](https://html.spec.whatwg.org/multipage/parsing.html#insert-an-html-element)
    ///
    /// "When the steps below require the user agent to insert an HTML element
    /// for a token, the user agent must insert a foreign element for the
    /// token, in the HTML namespace and with onlyAddToElementStack set to
    /// false."
    pub(super) fn insert_html_element(&mut self, token: &Token) -> NodeId {
        self.insert_foreign_element(token, Namespace::Html, false)
    }

    /// [§ 13.2.6.2 Parsing elements that contain only text](https://html.spec.whatwg.org/multipage/parsing.html#generic-raw-text-element-parsing-algorithm)
    ///
    /// "The generic raw text element parsing algorithm and the generic RCDATA
    /// element parsing algorithm consist of the following steps."
    pub(super) fn parse_text_only_element(&mut self, token: &Token, state: TokenizerState) {
        // STEP 1: "Insert an HTML element for the token."
        let _ = self.insert_html_element(token);
        // STEP 2: "If the algorithm that was invoked is the generic raw text
        //          element parsing algorithm, switch the tokenizer to the
        //          RAWTEXT state; otherwise the algorithm invoked was the
        //          generic RCDATA element parsing algorithm, switch the
        //          tokenizer to the RCDATA state."
        self.switch_tokenizer_to(state);
        // STEP 3: "Set the original insertion mode to the current insertion mode."
        self.original_insertion_mode = Some(self.insertion_mode);
        // STEP 4: "Then, switch the insertion mode to "text"."
        self.switch_mode(InsertionMode::Text);
    }

    /// The generic raw text element parsing algorithm.
    pub(super) fn parse_raw_text_element(&mut self, token: &Token) {
        self.parse_text_only_element(token, TokenizerState::RAWTEXT);
    }

    /// The generic RCDATA element parsing algorithm.
    pub(super) fn parse_rcdata_element(&mut self, token: &Token) {
        self.parse_text_only_element(token, TokenizerState::RCDATA);
    }
}
