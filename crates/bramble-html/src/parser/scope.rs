//! The stack of open elements: scopes, implied end tags and popping.
//!
//! [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)

use bramble_dom::{Namespace, NodeId};

use super::HTMLParser;
use super::modes::InsertionMode;

/// "The stack of open elements is said to have an element target node in a
/// specific scope consisting of a list of element types list when the
/// following algorithm terminates in a match state"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// [has an element in scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-scope)
    Default,
    /// [has an element in list item scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-list-item-scope)
    ListItem,
    /// [has an element in button scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-button-scope)
    Button,
    /// [has an element in table scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-table-scope)
    Table,
    /// [has an element in select scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-select-scope)
    Select,
}

/// "applet, caption, html, table, td, th, marquee, object, template"
const DEFAULT_SCOPE_HTML: &[&str] = &[
    "applet", "caption", "html", "table", "td", "th", "marquee", "object", "template",
];

/// "MathML mi, MathML mo, MathML mn, MathML ms, MathML mtext, MathML annotation-xml"
const DEFAULT_SCOPE_MATHML: &[&str] = &["mi", "mo", "mn", "ms", "mtext", "annotation-xml"];

/// "SVG foreignObject, SVG desc, SVG title"
const DEFAULT_SCOPE_SVG: &[&str] = &["foreignObject", "desc", "title"];

/// [§ 13.2.6.3 Closing elements that have implied end tags](https://html.spec.whatwg.org/multipage/parsing.html#generate-implied-end-tags)
const IMPLIED_END_TAGS: &[&str] = &[
    "dd", "dt", "li", "optgroup", "option", "p", "rb", "rp", "rt", "rtc",
];

/// [§ 13.2.6.3](https://html.spec.whatwg.org/multipage/parsing.html#generate-all-implied-end-tags-thoroughly)
const IMPLIED_END_TAGS_THOROUGHLY: &[&str] = &[
    "caption", "colgroup", "dd", "dt", "li", "optgroup", "option", "p", "rb", "rp", "rt", "rtc",
    "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#special)
///
/// "The following elements have varying levels of special parsing rules"
const SPECIAL_HTML: &[&str] = &[
    "address", "applet", "area", "article", "aside", "base", "basefont", "bgsound",
    "blockquote", "body", "br", "button", "caption", "center", "col", "colgroup", "dd",
    "details", "dir", "div", "dl", "dt", "embed", "fieldset", "figcaption", "figure", "footer",
    "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup",
    "hr", "html", "iframe", "img", "input", "keygen", "li", "link", "listing", "main",
    "marquee", "menu", "meta", "nav", "noembed", "noframes", "noscript", "object", "ol", "p",
    "param", "plaintext", "pre", "script", "search", "section", "select", "source", "style",
    "summary", "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "title",
    "tr", "track", "ul", "wbr", "xmp",
];

impl HTMLParser {
    /// Whether `id` ends the search for a target in `scope`.
    fn is_scope_boundary(&self, id: NodeId, scope: Scope) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let in_default_list = element.is_one_of(Namespace::Html, DEFAULT_SCOPE_HTML)
            || element.is_one_of(Namespace::MathMl, DEFAULT_SCOPE_MATHML)
            || element.is_one_of(Namespace::Svg, DEFAULT_SCOPE_SVG);
        match scope {
            Scope::Default => in_default_list,
            // "the list of element types that make up the particular default
            // scope, plus the following element types: HTML ol, HTML ul"
            Scope::ListItem => in_default_list || element.is_one_of(Namespace::Html, &["ol", "ul"]),
            // "plus the following element types: HTML button"
            Scope::Button => in_default_list || element.is_html("button"),
            // "html, table, template"
            Scope::Table => element.is_one_of(Namespace::Html, &["html", "table", "template"]),
            // "all element types except the following: optgroup, option"
            Scope::Select => !element.is_one_of(Namespace::Html, &["optgroup", "option"]),
        }
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-the-specific-scope)
    ///
    /// "1. Initialize node to be the current node (the bottommost node of the
    ///     stack).
    ///  2. If node is target node, terminate in a match state.
    ///  3. Otherwise, if node is one of the element types in list, terminate
    ///     in a failure state.
    ///  4. Otherwise, set node to the previous entry in the stack of open
    ///     elements and return to step 2."
    fn has_in_specific_scope(&self, scope: Scope, is_target: impl Fn(NodeId) -> bool) -> bool {
        for &id in self.stack_of_open_elements.iter().rev() {
            if is_target(id) {
                return true;
            }
            if self.is_scope_boundary(id, scope) {
                return false;
            }
        }
        false
    }

    /// An HTML element named `name` in `scope`.
    pub(super) fn has_element_in_scope_of(&self, name: &str, scope: Scope) -> bool {
        self.has_in_specific_scope(scope, |id| self.is_html(id, name))
    }

    /// An HTML element named one of `names` in `scope`.
    pub(super) fn has_one_of_in_scope_of(&self, names: &[&str], scope: Scope) -> bool {
        self.has_in_specific_scope(scope, |id| self.is_html_one_of(id, names))
    }

    pub(super) fn has_element_in_scope(&self, name: &str) -> bool {
        self.has_element_in_scope_of(name, Scope::Default)
    }

    pub(super) fn has_element_in_button_scope(&self, name: &str) -> bool {
        self.has_element_in_scope_of(name, Scope::Button)
    }

    pub(super) fn has_element_in_list_item_scope(&self, name: &str) -> bool {
        self.has_element_in_scope_of(name, Scope::ListItem)
    }

    pub(super) fn has_element_in_table_scope(&self, name: &str) -> bool {
        self.has_element_in_scope_of(name, Scope::Table)
    }

    pub(super) fn has_element_in_select_scope(&self, name: &str) -> bool {
        self.has_element_in_scope_of(name, Scope::Select)
    }

    /// The exact node `target` in the default scope.
    pub(super) fn has_node_in_scope(&self, target: NodeId) -> bool {
        self.has_in_specific_scope(Scope::Default, |id| id == target)
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#special)
    pub(super) fn is_special(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|element| {
            element.is_one_of(Namespace::Html, SPECIAL_HTML)
                || element.is_one_of(Namespace::MathMl, DEFAULT_SCOPE_MATHML)
                || element.is_one_of(Namespace::Svg, DEFAULT_SCOPE_SVG)
        })
    }

    // =========================================================================
    // Popping
    // =========================================================================

    /// Pop elements until an HTML element named `name` has been popped.
    pub(super) fn pop_until(&mut self, name: &str) {
        while let Some(id) = self.stack_of_open_elements.pop() {
            if self.is_html(id, name) {
                break;
            }
        }
    }

    /// Pop elements until an HTML element named one of `names` has been popped.
    pub(super) fn pop_until_one_of(&mut self, names: &[&str]) {
        while let Some(id) = self.stack_of_open_elements.pop() {
            if self.is_html_one_of(id, names) {
                break;
            }
        }
    }

    /// Pop elements until `target` itself has been popped.
    pub(super) fn pop_until_node(&mut self, target: NodeId) {
        if let Some(index) = self.stack_of_open_elements.iter().rposition(|&id| id == target) {
            self.stack_of_open_elements.truncate(index);
        }
    }

    /// Remove `target` from the stack wherever it is.
    pub(super) fn remove_from_stack(&mut self, target: NodeId) {
        self.stack_of_open_elements.retain(|&id| id != target);
    }

    /// [§ 13.2.6.3 Closing elements that have implied end tags](https://html.spec.whatwg.org/multipage/parsing.html#generate-implied-end-tags)
    ///
    /// "while the current node is a dd element, a dt element, an li element,
    /// an optgroup element, an option element, a p element, an rb element, an
    /// rp element, an rt element, or an rtc element, the user agent must pop
    /// the current node off the stack of open elements."
    ///
    /// "If a step requires the user agent to generate implied end tags but
    /// lists an element to exclude from the process, then the user agent must
    /// perform the above steps as if that element was not in the above list."
    pub(super) fn generate_implied_end_tags(&mut self, exclude: Option<&str>) {
        while let Some(current) = self.current_node()
            && self.is_html_one_of(current, IMPLIED_END_TAGS)
            && exclude.is_none_or(|excluded| !self.is_html(current, excluded))
        {
            let _ = self.stack_of_open_elements.pop();
        }
    }

    /// [§ 13.2.6.3](https://html.spec.whatwg.org/multipage/parsing.html#generate-all-implied-end-tags-thoroughly)
    pub(super) fn generate_all_implied_end_tags_thoroughly(&mut self) {
        while self.current_node_is_one_of(IMPLIED_END_TAGS_THOROUGHLY) {
            let _ = self.stack_of_open_elements.pop();
        }
    }

    /// [§ 13.2.6.4.7](https://html.spec.whatwg.org/multipage/parsing.html#close-a-p-element)
    ///
    /// "When the steps above say the user agent is to close a p element, it
    /// means that the user agent must run the following steps:"
    pub(super) fn close_p_element(&mut self) {
        // STEP 1: "Generate implied end tags, except for p elements."
        self.generate_implied_end_tags(Some("p"));
        // STEP 2: "If the current node is not a p element, then this is a
        //          parse error."
        if !self.current_node_is("p") {
            self.parse_error("unclosed elements inside p");
        }
        // STEP 3: "Pop elements from the stack of open elements until a p
        //          element has been popped from the stack."
        self.pop_until("p");
    }

    /// "If the stack of open elements has a p element in button scope, then
    /// close a p element."
    pub(super) fn close_p_element_in_button_scope(&mut self) {
        if self.has_element_in_button_scope("p") {
            self.close_p_element();
        }
    }

    // =========================================================================
    // Table contexts
    // =========================================================================

    fn clear_stack_back_to(&mut self, names: &[&str]) {
        while let Some(current) = self.current_node()
            && !self.is_html_one_of(current, names)
        {
            let _ = self.stack_of_open_elements.pop();
        }
    }

    /// [§ 13.2.6.4.9](https://html.spec.whatwg.org/multipage/parsing.html#clear-the-stack-back-to-a-table-context)
    ///
    /// "while the current node is not a table, template, or html element, pop
    /// elements from the stack of open elements."
    pub(super) fn clear_stack_back_to_table_context(&mut self) {
        self.clear_stack_back_to(&["table", "template", "html"]);
    }

    /// [§ 13.2.6.4.13](https://html.spec.whatwg.org/multipage/parsing.html#clear-the-stack-back-to-a-table-body-context)
    pub(super) fn clear_stack_back_to_table_body_context(&mut self) {
        self.clear_stack_back_to(&["tbody", "tfoot", "thead", "template", "html"]);
    }

    /// [§ 13.2.6.4.14](https://html.spec.whatwg.org/multipage/parsing.html#clear-the-stack-back-to-a-table-row-context)
    pub(super) fn clear_stack_back_to_table_row_context(&mut self) {
        self.clear_stack_back_to(&["tr", "template", "html"]);
    }

    // =========================================================================
    // Reset the insertion mode appropriately
    // =========================================================================

    /// [§ 13.2.4.1](https://html.spec.whatwg.org/multipage/parsing.html#reset-the-insertion-mode-appropriately)
    pub(super) fn reset_insertion_mode_appropriately(&mut self) {
        let mode = self.appropriate_insertion_mode();
        self.switch_mode(mode);
    }

    fn appropriate_insertion_mode(&self) -> InsertionMode {
        let stack = &self.stack_of_open_elements;
        // STEP 2: "Let node be the last node in the stack of open elements."
        for (index, &node) in stack.iter().enumerate().rev() {
            // STEP 3: "Loop: If node is the first node in the stack of open
            //          elements, then set last to true"
            let last = index == 0;
            let Some(element) = self.element(node) else {
                continue;
            };
            if element.namespace == Namespace::Html {
                match element.local_name.as_str() {
                    // STEP 4: "If node is a select element, run these substeps:"
                    "select" => return self.mode_for_select(index, last),
                    // STEP 5: "If node is a td or th element and last is false"
                    "td" | "th" if !last => return InsertionMode::InCell,
                    // STEP 6: "If node is a tr element"
                    "tr" => return InsertionMode::InRow,
                    // STEP 7: "If node is a tbody, thead, or tfoot element"
                    "tbody" | "thead" | "tfoot" => return InsertionMode::InTableBody,
                    // STEP 8: "If node is a caption element"
                    "caption" => return InsertionMode::InCaption,
                    // STEP 9: "If node is a colgroup element"
                    "colgroup" => return InsertionMode::InColumnGroup,
                    // STEP 10: "If node is a table element"
                    "table" => return InsertionMode::InTable,
                    // STEP 11: "If node is a template element, then switch the
                    //           insertion mode to the current template
                    //           insertion mode and return."
                    "template" => {
                        return self
                            .template_insertion_modes
                            .last()
                            .copied()
                            .unwrap_or(InsertionMode::InTemplate);
                    }
                    // STEP 12: "If node is a head element and last is false"
                    "head" if !last => return InsertionMode::InHead,
                    // STEP 13: "If node is a body element"
                    "body" => return InsertionMode::InBody,
                    // STEP 14: "If node is a frameset element" (fragment case)
                    "frameset" => return InsertionMode::InFrameset,
                    // STEP 15: "If node is an html element"
                    "html" => {
                        return if self.head_element_pointer.is_none() {
                            InsertionMode::BeforeHead
                        } else {
                            InsertionMode::AfterHead
                        };
                    }
                    _ => {}
                }
            }
            // STEP 16: "If last is true, then switch the insertion mode to "in
            //           body" and return. (fragment case)"
            if last {
                break;
            }
        }
        InsertionMode::InBody
    }

    /// STEP 4 of "reset the insertion mode appropriately", for a `select` at
    /// `index` in the stack.
    fn mode_for_select(&self, index: usize, last: bool) -> InsertionMode {
        // STEP 4.1: "If last is true, jump to the step below labeled done."
        if !last {
            // STEP 4.2-4.6: walk the ancestors of the select in the stack.
            for &ancestor in self.stack_of_open_elements[..index].iter().rev() {
                // "If ancestor is a template node, jump to the step below
                //  labeled done."
                if self.is_html(ancestor, "template") {
                    break;
                }
                // "If ancestor is a table node, switch the insertion mode to
                //  "in select in table" and return."
                if self.is_html(ancestor, "table") {
                    return InsertionMode::InSelectInTable;
                }
            }
        }
        // STEP 4.8: "Done: Switch the insertion mode to "in select" and return."
        InsertionMode::InSelect
    }
}
