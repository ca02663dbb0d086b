//! The "in select" and "in select in table" insertion modes.

use super::InsertionMode;
use crate::parser::HTMLParser;
use crate::tokenizer::Token;

/// Table tags that break out of a `select` nested in a table.
const TABLE_BREAKOUT_TAGS: &[&str] = &["caption", "table", "tbody", "tfoot", "thead", "tr", "td", "th"];

impl HTMLParser {
    /// [§ 13.2.6.4.16 The "in select" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselect)
    pub(in crate::parser) fn handle_in_select_mode(&mut self, token: &Token) {
        match token {
            // "A character token that is U+0000 NULL"
            // "Parse error. Ignore the token."
            Token::Character { data: '\0' } => self.parse_error("null character in select"),

            // "Any other character token"
            // "Insert the token's character."
            Token::Character { data } => self.insert_character(*data),

            // "A comment token"
            // "Insert a comment."
            Token::Comment { data } => self.insert_comment(data, None),

            // "A DOCTYPE token"
            // "Parse error. Ignore the token."
            Token::Doctype { .. } => self.parse_error("unexpected DOCTYPE in select"),

            Token::StartTag { name, .. } => match name.as_str() {
                // "A start tag whose tag name is "html""
                // "Process the token using the rules for the "in body"
                // insertion mode."
                "html" => self.process_using_rules_for(InsertionMode::InBody, token),

                // "A start tag whose tag name is "option""
                // "If the current node is an option element, pop that node
                // from the stack of open elements."
                // "Insert an HTML element for the token."
                "option" => {
                    self.pop_if_current_is("option");
                    let _ = self.insert_html_element(token);
                }

                // "A start tag whose tag name is "optgroup""
                // "If the current node is an option element, pop that node
                // from the stack of open elements."
                // "If the current node is an optgroup element, pop that node
                // from the stack of open elements."
                // "Insert an HTML element for the token."
                "optgroup" => {
                    self.pop_if_current_is("option");
                    self.pop_if_current_is("optgroup");
                    let _ = self.insert_html_element(token);
                }

                // "A start tag whose tag name is "hr""
                // The same as "optgroup", then "Immediately pop the current
                // node off the stack of open elements." "Acknowledge the
                // token's self-closing flag, if it is set."
                "hr" => {
                    self.pop_if_current_is("option");
                    self.pop_if_current_is("optgroup");
                    let _ = self.insert_html_element(token);
                    let _ = self.stack_of_open_elements.pop();
                    self.acknowledge_self_closing_flag();
                }

                // "A start tag whose tag name is "select""
                "select" => {
                    // "Parse error."
                    self.parse_error("nested select");
                    // "If the stack of open elements does not have a select
                    // element in select scope, ignore the token. (fragment case)"
                    // "Otherwise: Pop elements from the stack of open elements
                    // until a select element has been popped from the stack."
                    // "Reset the insertion mode appropriately."
                    let _ = self.close_select();
                }

                // "A start tag whose tag name is one of: "input", "keygen", "textarea""
                "input" | "keygen" | "textarea" => {
                    // "Parse error."
                    self.parse_error("form control inside select");
                    // "If the stack of open elements does not have a select
                    // element in select scope, ignore the token. (fragment case)"
                    // "Otherwise: Pop elements from the stack of open elements
                    // until a select element has been popped from the stack."
                    // "Reset the insertion mode appropriately."
                    // "Reprocess the token."
                    if self.close_select() {
                        self.reprocess_token(token);
                    }
                }

                // "A start tag whose tag name is one of: "script", "template""
                // "Process the token using the rules for the "in head"
                // insertion mode."
                "script" | "template" => self.process_using_rules_for(InsertionMode::InHead, token),

                // "Anything else"
                // "Parse error. Ignore the token."
                _ => self.parse_error("unexpected start tag in select"),
            },

            Token::EndTag { name, .. } => match name.as_str() {
                // "An end tag whose tag name is "optgroup""
                "optgroup" => {
                    // "First, if the current node is an option element, and the
                    // node immediately before it in the stack of open elements
                    // is an optgroup element, then pop the current node from
                    // the stack of open elements."
                    let len = self.stack_of_open_elements.len();
                    if self.current_node_is("option")
                        && len >= 2
                        && self.is_html(self.stack_of_open_elements[len - 2], "optgroup")
                    {
                        let _ = self.stack_of_open_elements.pop();
                    }
                    // "If the current node is an optgroup element, then pop
                    // that node from the stack of open elements. Otherwise,
                    // this is a parse error; ignore the token."
                    if self.current_node_is("optgroup") {
                        let _ = self.stack_of_open_elements.pop();
                    } else {
                        self.parse_error("optgroup end tag without open optgroup");
                    }
                }

                // "An end tag whose tag name is "option""
                // "If the current node is an option element, then pop that
                // node from the stack of open elements. Otherwise, this is a
                // parse error; ignore the token."
                "option" => {
                    if self.current_node_is("option") {
                        let _ = self.stack_of_open_elements.pop();
                    } else {
                        self.parse_error("option end tag without open option");
                    }
                }

                // "An end tag whose tag name is "select""
                "select" => {
                    if !self.close_select() {
                        self.parse_error("select end tag without open select");
                    }
                }

                // "An end tag whose tag name is "template""
                // "Process the token using the rules for the "in head"
                // insertion mode."
                "template" => self.process_using_rules_for(InsertionMode::InHead, token),

                // "Anything else"
                // "Parse error. Ignore the token."
                _ => self.parse_error("unexpected end tag in select"),
            },

            // "An end-of-file token"
            // "Process the token using the rules for the "in body" insertion mode."
            Token::EndOfFile => self.process_using_rules_for(InsertionMode::InBody, token),
        }
    }

    fn pop_if_current_is(&mut self, name: &str) {
        if self.current_node_is(name) {
            let _ = self.stack_of_open_elements.pop();
        }
    }

    /// Pop up to and including the open `select` and reset the insertion
    /// mode. Returns false, doing nothing, when no `select` is in select scope.
    fn close_select(&mut self) -> bool {
        if !self.has_element_in_select_scope("select") {
            return false;
        }
        self.pop_until("select");
        self.reset_insertion_mode_appropriately();
        true
    }

    /// [§ 13.2.6.4.17 The "in select in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselectintable)
    pub(in crate::parser) fn handle_in_select_in_table_mode(&mut self, token: &Token) {
        match token {
            // "A start tag whose tag name is one of: "caption", "table",
            // "tbody", "tfoot", "thead", "tr", "td", "th""
            Token::StartTag { name, .. } if TABLE_BREAKOUT_TAGS.contains(&name.as_str()) => {
                // "Parse error."
                // "Pop elements from the stack of open elements until a select
                // element has been popped from the stack."
                // "Reset the insertion mode appropriately."
                // "Reprocess the token."
                self.parse_error("table start tag inside select");
                self.pop_until("select");
                self.reset_insertion_mode_appropriately();
                self.reprocess_token(token);
            }

            // "An end tag whose tag name is one of: "caption", "table",
            // "tbody", "tfoot", "thead", "tr", "td", "th""
            Token::EndTag { name, .. } if TABLE_BREAKOUT_TAGS.contains(&name.as_str()) => {
                // "Parse error."
                self.parse_error("table end tag inside select");
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as that of the token, then ignore the token."
                if !self.has_element_in_table_scope(name) {
                    return;
                }
                // "Otherwise: Pop elements from the stack of open elements
                // until a select element has been popped from the stack."
                // "Reset the insertion mode appropriately."
                // "Reprocess the token."
                self.pop_until("select");
                self.reset_insertion_mode_appropriately();
                self.reprocess_token(token);
            }

            // "Anything else"
            // "Process the token using the rules for the "in select" insertion mode."
            _ => self.process_using_rules_for(InsertionMode::InSelect, token),
        }
    }
}
