//! The table insertion modes: "in table", "in table text", "in caption", "in
//! column group", "in table body", "in row" and "in cell".

use super::InsertionMode;
use crate::parser::HTMLParser;
use crate::parser::scope::Scope;
use crate::tokenizer::Token;

/// Elements whose character content goes through "in table text".
const TABLE_TEXT_PARENTS: &[&str] = &["table", "tbody", "template", "tfoot", "thead", "tr"];

const TABLE_SECTIONS: &[&str] = &["tbody", "tfoot", "thead"];

impl HTMLParser {
    /// [§ 13.2.6.4.9 The "in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intable)
    pub(in crate::parser) fn handle_in_table_mode(&mut self, token: &Token) {
        match token {
            // "A character token, if the current node is table, tbody,
            // template, tfoot, thead, or tr element"
            Token::Character { .. } if self.current_node_is_one_of(TABLE_TEXT_PARENTS) => {
                // "Let the pending table character tokens be an empty list of
                // tokens."
                self.pending_table_character_tokens.clear();
                // "Let the original insertion mode be the current insertion mode."
                self.original_insertion_mode = Some(self.insertion_mode);
                // "Switch the insertion mode to "in table text" and reprocess
                // the token."
                self.switch_mode(InsertionMode::InTableText);
                self.reprocess_token(token);
            }

            // "A comment token"
            // "Insert a comment."
            Token::Comment { data } => self.insert_comment(data, None),

            // "A DOCTYPE token"
            // "Parse error. Ignore the token."
            Token::Doctype { .. } => self.parse_error("unexpected DOCTYPE in table"),

            Token::StartTag { name, .. } => match name.as_str() {
                // "A start tag whose tag name is "caption""
                "caption" => {
                    // "Clear the stack back to a table context."
                    // "Insert a marker at the end of the list of active
                    // formatting elements."
                    // "Insert an HTML element for the token, then switch the
                    // insertion mode to "in caption"."
                    self.clear_stack_back_to_table_context();
                    self.push_formatting_marker();
                    let _ = self.insert_html_element(token);
                    self.switch_mode(InsertionMode::InCaption);
                }

                // "A start tag whose tag name is "colgroup""
                "colgroup" => {
                    // "Clear the stack back to a table context."
                    // "Insert an HTML element for the token, then switch the
                    // insertion mode to "in column group"."
                    self.clear_stack_back_to_table_context();
                    let _ = self.insert_html_element(token);
                    self.switch_mode(InsertionMode::InColumnGroup);
                }

                // "A start tag whose tag name is "col""
                "col" => {
                    // "Clear the stack back to a table context."
                    // "Insert an HTML element for a "colgroup" start tag token
                    // with no attributes, then switch the insertion mode to "in
                    // column group"."
                    // "Reprocess the current token."
                    self.clear_stack_back_to_table_context();
                    let _ = self.insert_html_element(&Token::start_tag("colgroup"));
                    self.switch_mode(InsertionMode::InColumnGroup);
                    self.reprocess_token(token);
                }

                // "A start tag whose tag name is one of: "tbody", "tfoot", "thead""
                "tbody" | "tfoot" | "thead" => {
                    // "Clear the stack back to a table context."
                    // "Insert an HTML element for the token, then switch the
                    // insertion mode to "in table body"."
                    self.clear_stack_back_to_table_context();
                    let _ = self.insert_html_element(token);
                    self.switch_mode(InsertionMode::InTableBody);
                }

                // "A start tag whose tag name is one of: "td", "th", "tr""
                "td" | "th" | "tr" => {
                    // "Clear the stack back to a table context."
                    // "Insert an HTML element for a "tbody" start tag token
                    // with no attributes, then switch the insertion mode to
                    // "in table body"."
                    // "Reprocess the current token."
                    self.clear_stack_back_to_table_context();
                    let _ = self.insert_html_element(&Token::start_tag("tbody"));
                    self.switch_mode(InsertionMode::InTableBody);
                    self.reprocess_token(token);
                }

                // "A start tag whose tag name is "table""
                "table" => {
                    // "Parse error."
                    self.parse_error("table start tag in table");
                    // "If the stack of open elements does not have a table
                    // element in table scope, ignore the token."
                    if !self.has_element_in_table_scope("table") {
                        return;
                    }
                    // "Otherwise: Pop elements from this stack until a table
                    // element has been popped from the stack."
                    // "Reset the insertion mode appropriately."
                    // "Reprocess the token."
                    self.pop_until("table");
                    self.reset_insertion_mode_appropriately();
                    self.reprocess_token(token);
                }

                // "A start tag whose tag name is one of: "style", "script", "template""
                // "Process the token using the rules for the "in head"
                // insertion mode."
                "style" | "script" | "template" => {
                    self.process_using_rules_for(InsertionMode::InHead, token);
                }

                // "A start tag whose tag name is "input""
                // "If the token does not have an attribute with the name
                // "type", or if it does, but that attribute's value is not an
                // ASCII case-insensitive match for the string "hidden", then:
                // act as described in the "anything else" entry below."
                "input"
                    if token
                        .attribute("type")
                        .is_some_and(|value| value.eq_ignore_ascii_case("hidden")) =>
                {
                    // "Otherwise: Parse error."
                    // "Insert an HTML element for the token."
                    // "Pop that input element off the stack of open elements."
                    // "Acknowledge the token's self-closing flag, if it is set."
                    self.parse_error("hidden input in table");
                    let _ = self.insert_html_element(token);
                    let _ = self.stack_of_open_elements.pop();
                    self.acknowledge_self_closing_flag();
                }

                // "A start tag whose tag name is "form""
                "form" => {
                    // "Parse error."
                    self.parse_error("form start tag in table");
                    // "If there is a template element on the stack of open
                    // elements, or if the form element pointer is not null,
                    // ignore the token."
                    if self.stack_contains("template") || self.form_element_pointer.is_some() {
                        return;
                    }
                    // "Otherwise: Insert an HTML element for the token, and
                    // set the form element pointer to point to the element
                    // created."
                    // "Pop that form element off the stack of open elements."
                    let form = self.insert_html_element(token);
                    self.form_element_pointer = Some(form);
                    let _ = self.stack_of_open_elements.pop();
                }

                _ => self.in_table_anything_else(token),
            },

            Token::EndTag { name, .. } => match name.as_str() {
                // "An end tag whose tag name is "table""
                "table" => {
                    // "If the stack of open elements does not have a table
                    // element in table scope, this is a parse error; ignore
                    // the token."
                    if !self.has_element_in_table_scope("table") {
                        self.parse_error("table end tag without open table");
                        return;
                    }
                    // "Otherwise: Pop elements from this stack until a table
                    // element has been popped from the stack."
                    // "Reset the insertion mode appropriately."
                    self.pop_until("table");
                    self.reset_insertion_mode_appropriately();
                }

                // "An end tag whose tag name is one of: "body", "caption",
                // "col", "colgroup", "html", "tbody", "td", "tfoot", "th",
                // "thead", "tr""
                // "Parse error. Ignore the token."
                "body" | "caption" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot"
                | "th" | "thead" | "tr" => self.parse_error("unexpected end tag in table"),

                // "An end tag whose tag name is "template""
                // "Process the token using the rules for the "in head"
                // insertion mode."
                "template" => self.process_using_rules_for(InsertionMode::InHead, token),

                _ => self.in_table_anything_else(token),
            },

            // "An end-of-file token"
            // "Process the token using the rules for the "in body" insertion mode."
            Token::EndOfFile => self.process_using_rules_for(InsertionMode::InBody, token),

            Token::Character { .. } => self.in_table_anything_else(token),
        }
    }

    /// "Anything else" in "in table": "Parse error. Enable foster parenting,
    /// process the token using the rules for the "in body" insertion mode,
    /// and then disable foster parenting."
    fn in_table_anything_else(&mut self, token: &Token) {
        self.parse_error("foster-parented content in table");
        self.foster_parenting = true;
        self.process_using_rules_for(InsertionMode::InBody, token);
        self.foster_parenting = false;
    }

    /// [§ 13.2.6.4.10 The "in table text" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intabletext)
    pub(in crate::parser) fn handle_in_table_text_mode(&mut self, token: &Token) {
        match token {
            // "A character token that is U+0000 NULL"
            // "Parse error. Ignore the token."
            Token::Character { data: '\0' } => self.parse_error("null character in table text"),

            // "Any other character token"
            // "Append the character token to the pending table character
            // tokens list."
            Token::Character { data } => self.pending_table_character_tokens.push(*data),

            // "Anything else"
            _ => {
                let pending = std::mem::take(&mut self.pending_table_character_tokens);
                // "If any of the tokens in the pending table character tokens
                // list are character tokens that are not ASCII whitespace,
                // then this is a parse error: reprocess the character tokens
                // in the pending table character tokens list using the rules
                // given in the "anything else" entry in the "in table"
                // insertion mode."
                if pending.chars().any(|c| !Self::is_whitespace(c)) {
                    self.parse_error("non-whitespace text in table");
                    self.foster_parenting = true;
                    for data in pending.chars() {
                        self.process_using_rules_for(
                            InsertionMode::InBody,
                            &Token::Character { data },
                        );
                    }
                    self.foster_parenting = false;
                } else {
                    // "Otherwise, insert the characters given by the pending
                    // table character tokens list."
                    self.insert_characters(&pending);
                }
                // "Switch the insertion mode to the original insertion mode
                // and reprocess the token."
                let mode = self
                    .original_insertion_mode
                    .take()
                    .unwrap_or(InsertionMode::InTable);
                self.switch_mode(mode);
                self.reprocess_token(token);
            }
        }
    }

    /// [§ 13.2.6.4.11 The "in caption" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incaption)
    pub(in crate::parser) fn handle_in_caption_mode(&mut self, token: &Token) {
        match token {
            // "An end tag whose tag name is "caption""
            Token::EndTag { name, .. } if name == "caption" => {
                let _ = self.close_caption();
            }

            // "A start tag whose tag name is one of: "caption", "col",
            // "colgroup", "tbody", "td", "tfoot", "th", "thead", "tr""
            // "An end tag whose tag name is "table""
            Token::StartTag { name, .. }
                if matches!(
                    name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
                ) =>
            {
                if self.close_caption() {
                    // "Reprocess the token."
                    self.reprocess_token(token);
                }
            }
            Token::EndTag { name, .. } if name == "table" => {
                if self.close_caption() {
                    self.reprocess_token(token);
                }
            }

            // "An end tag whose tag name is one of: "body", "col", "colgroup",
            // "html", "tbody", "td", "tfoot", "th", "thead", "tr""
            // "Parse error. Ignore the token."
            Token::EndTag { name, .. }
                if matches!(
                    name.as_str(),
                    "body" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
                ) =>
            {
                self.parse_error("unexpected end tag in caption");
            }

            // "Anything else"
            // "Process the token using the rules for the "in body" insertion mode."
            _ => self.process_using_rules_for(InsertionMode::InBody, token),
        }
    }

    /// Close the open caption and return to "in table". Returns false when no
    /// caption was in table scope, after reporting it.
    fn close_caption(&mut self) -> bool {
        // "If the stack of open elements does not have a caption element in
        // table scope, this is a parse error; ignore the token. (fragment case)"
        if !self.has_element_in_table_scope("caption") {
            self.parse_error("caption closed without open caption");
            return false;
        }
        // "Otherwise: Generate implied end tags."
        self.generate_implied_end_tags(None);
        // "Now, if the current node is not a caption element, then this is a
        // parse error."
        if !self.current_node_is("caption") {
            self.parse_error("caption closed with open children");
        }
        // "Pop elements from this stack until a caption element has been
        // popped from the stack."
        // "Clear the list of active formatting elements up to the last marker."
        // "Switch the insertion mode to "in table"."
        self.pop_until("caption");
        self.clear_active_formatting_elements_to_last_marker();
        self.switch_mode(InsertionMode::InTable);
        true
    }

    /// [§ 13.2.6.4.12 The "in column group" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incolumngroup)
    pub(in crate::parser) fn handle_in_column_group_mode(&mut self, token: &Token) {
        match token {
            // "A character token that is one of U+0009 CHARACTER TABULATION,
            // U+000A LINE FEED (LF), U+000C FORM FEED (FF), U+000D CARRIAGE
            // RETURN (CR), or U+0020 SPACE"
            // "Insert the character."
            Token::Character { data } if Self::is_whitespace(*data) => self.insert_character(*data),

            // "A comment token"
            // "Insert a comment."
            Token::Comment { data } => self.insert_comment(data, None),

            // "A DOCTYPE token"
            // "Parse error. Ignore the token."
            Token::Doctype { .. } => self.parse_error("unexpected DOCTYPE in column group"),

            // "A start tag whose tag name is "html""
            // "Process the token using the rules for the "in body" insertion mode."
            Token::StartTag { name, .. } if name == "html" => {
                self.process_using_rules_for(InsertionMode::InBody, token);
            }

            // "A start tag whose tag name is "col""
            // "Insert an HTML element for the token. Immediately pop the
            // current node off the stack of open elements."
            // "Acknowledge the token's self-closing flag, if it is set."
            Token::StartTag { name, .. } if name == "col" => {
                let _ = self.insert_html_element(token);
                let _ = self.stack_of_open_elements.pop();
                self.acknowledge_self_closing_flag();
            }

            // "An end tag whose tag name is "colgroup""
            Token::EndTag { name, .. } if name == "colgroup" => {
                // "If the current node is not a colgroup element, then this is
                // a parse error; ignore the token."
                if !self.current_node_is("colgroup") {
                    self.parse_error("colgroup end tag without open colgroup");
                    return;
                }
                // "Otherwise, pop the current node from the stack of open
                // elements. Switch the insertion mode to "in table"."
                let _ = self.stack_of_open_elements.pop();
                self.switch_mode(InsertionMode::InTable);
            }

            // "An end tag whose tag name is "col""
            // "Parse error. Ignore the token."
            Token::EndTag { name, .. } if name == "col" => {
                self.parse_error("col end tag");
            }

            // "A start tag whose tag name is "template""
            // "An end tag whose tag name is "template""
            // "Process the token using the rules for the "in head" insertion mode."
            Token::StartTag { name, .. } | Token::EndTag { name, .. } if name == "template" => {
                self.process_using_rules_for(InsertionMode::InHead, token);
            }

            // "An end-of-file token"
            // "Process the token using the rules for the "in body" insertion mode."
            Token::EndOfFile => self.process_using_rules_for(InsertionMode::InBody, token),

            // "Anything else"
            _ => {
                // "If the current node is not a colgroup element, then this is
                // a parse error; ignore the token."
                if !self.current_node_is("colgroup") {
                    self.parse_error("unexpected token in column group");
                    return;
                }
                // "Otherwise, pop the current node from the stack of open
                // elements."
                // "Switch the insertion mode to "in table"."
                // "Reprocess the token."
                let _ = self.stack_of_open_elements.pop();
                self.switch_mode(InsertionMode::InTable);
                self.reprocess_token(token);
            }
        }
    }

    /// [§ 13.2.6.4.13 The "in table body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intablebody)
    pub(in crate::parser) fn handle_in_table_body_mode(&mut self, token: &Token) {
        match token {
            // "A start tag whose tag name is "tr""
            // "Clear the stack back to a table body context."
            // "Insert an HTML element for the token, then switch the insertion
            // mode to "in row"."
            Token::StartTag { name, .. } if name == "tr" => {
                self.clear_stack_back_to_table_body_context();
                let _ = self.insert_html_element(token);
                self.switch_mode(InsertionMode::InRow);
            }

            // "A start tag whose tag name is one of: "th", "td""
            Token::StartTag { name, .. } if name == "th" || name == "td" => {
                // "Parse error."
                // "Clear the stack back to a table body context."
                // "Insert an HTML element for a "tr" start tag token with no
                // attributes, then switch the insertion mode to "in row"."
                // "Reprocess the current token."
                self.parse_error("cell outside row");
                self.clear_stack_back_to_table_body_context();
                let _ = self.insert_html_element(&Token::start_tag("tr"));
                self.switch_mode(InsertionMode::InRow);
                self.reprocess_token(token);
            }

            // "An end tag whose tag name is one of: "tbody", "tfoot", "thead""
            Token::EndTag { name, .. } if TABLE_SECTIONS.contains(&name.as_str()) => {
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as the token, this is a parse error; ignore the token."
                if !self.has_element_in_table_scope(name) {
                    self.parse_error("table section end tag without open section");
                    return;
                }
                // "Otherwise: Clear the stack back to a table body context."
                // "Pop the current node from the stack of open elements.
                // Switch the insertion mode to "in table"."
                self.clear_stack_back_to_table_body_context();
                let _ = self.stack_of_open_elements.pop();
                self.switch_mode(InsertionMode::InTable);
            }

            // "A start tag whose tag name is one of: "caption", "col",
            // "colgroup", "tbody", "tfoot", "thead""
            // "An end tag whose tag name is "table""
            Token::StartTag { name, .. }
                if matches!(
                    name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead"
                ) =>
            {
                self.close_table_section_and_reprocess(token);
            }
            Token::EndTag { name, .. } if name == "table" => {
                self.close_table_section_and_reprocess(token);
            }

            // "An end tag whose tag name is one of: "body", "caption", "col",
            // "colgroup", "html", "td", "th", "tr""
            // "Parse error. Ignore the token."
            Token::EndTag { name, .. }
                if matches!(
                    name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th" | "tr"
                ) =>
            {
                self.parse_error("unexpected end tag in table body");
            }

            // "Anything else"
            // "Process the token using the rules for the "in table" insertion mode."
            _ => self.process_using_rules_for(InsertionMode::InTable, token),
        }
    }

    fn close_table_section_and_reprocess(&mut self, token: &Token) {
        // "If the stack of open elements does not have a tbody, thead, or
        // tfoot element in table scope, this is a parse error; ignore the
        // token."
        if !self.has_one_of_in_scope_of(TABLE_SECTIONS, Scope::Table) {
            self.parse_error("no open table section");
            return;
        }
        // "Otherwise: Clear the stack back to a table body context."
        // "Pop the current node from the stack of open elements. Switch the
        // insertion mode to "in table"."
        // "Reprocess the token."
        self.clear_stack_back_to_table_body_context();
        let _ = self.stack_of_open_elements.pop();
        self.switch_mode(InsertionMode::InTable);
        self.reprocess_token(token);
    }

    /// [§ 13.2.6.4.14 The "in row" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inrow)
    pub(in crate::parser) fn handle_in_row_mode(&mut self, token: &Token) {
        match token {
            // "A start tag whose tag name is one of: "th", "td""
            Token::StartTag { name, .. } if name == "th" || name == "td" => {
                // "Clear the stack back to a table row context."
                // "Insert an HTML element for the token, then switch the
                // insertion mode to "in cell"."
                // "Insert a marker at the end of the list of active formatting
                // elements."
                self.clear_stack_back_to_table_row_context();
                let _ = self.insert_html_element(token);
                self.switch_mode(InsertionMode::InCell);
                self.push_formatting_marker();
            }

            // "An end tag whose tag name is "tr""
            Token::EndTag { name, .. } if name == "tr" => {
                let _ = self.close_row();
            }

            // "A start tag whose tag name is one of: "caption", "col",
            // "colgroup", "tbody", "tfoot", "thead", "tr""
            // "An end tag whose tag name is "table""
            Token::StartTag { name, .. }
                if matches!(
                    name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead" | "tr"
                ) =>
            {
                if self.close_row() {
                    // "Reprocess the token."
                    self.reprocess_token(token);
                }
            }
            Token::EndTag { name, .. } if name == "table" => {
                if self.close_row() {
                    self.reprocess_token(token);
                }
            }

            // "An end tag whose tag name is one of: "tbody", "tfoot", "thead""
            Token::EndTag { name, .. } if TABLE_SECTIONS.contains(&name.as_str()) => {
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as the token, this is a parse error; ignore the token."
                if !self.has_element_in_table_scope(name) {
                    self.parse_error("table section end tag without open section");
                    return;
                }
                // "If the stack of open elements does not have a tr element in
                // table scope, ignore the token."
                if !self.has_element_in_table_scope("tr") {
                    return;
                }
                // "Otherwise: Clear the stack back to a table row context."
                // "Pop the current node (which will be a tr element) from the
                // stack of open elements. Switch the insertion mode to "in
                // table body"."
                // "Reprocess the token."
                if self.close_row() {
                    self.reprocess_token(token);
                }
            }

            // "An end tag whose tag name is one of: "body", "caption", "col",
            // "colgroup", "html", "td", "th""
            // "Parse error. Ignore the token."
            Token::EndTag { name, .. }
                if matches!(
                    name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th"
                ) =>
            {
                self.parse_error("unexpected end tag in row");
            }

            // "Anything else"
            // "Process the token using the rules for the "in table" insertion mode."
            _ => self.process_using_rules_for(InsertionMode::InTable, token),
        }
    }

    /// Close the open row and return to "in table body". Returns false when
    /// no `tr` was in table scope, after reporting it.
    fn close_row(&mut self) -> bool {
        // "If the stack of open elements does not have a tr element in table
        // scope, this is a parse error; ignore the token."
        if !self.has_element_in_table_scope("tr") {
            self.parse_error("row closed without open row");
            return false;
        }
        // "Otherwise: Clear the stack back to a table row context."
        // "Pop the current node (which will be a tr element) from the stack of
        // open elements. Switch the insertion mode to "in table body"."
        self.clear_stack_back_to_table_row_context();
        let _ = self.stack_of_open_elements.pop();
        self.switch_mode(InsertionMode::InTableBody);
        true
    }

    /// [§ 13.2.6.4.15 The "in cell" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incell)
    pub(in crate::parser) fn handle_in_cell_mode(&mut self, token: &Token) {
        match token {
            // "An end tag whose tag name is one of: "td", "th""
            Token::EndTag { name, .. } if name == "td" || name == "th" => {
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as that of the token, then this is a parse error; ignore the
                // token."
                if !self.has_element_in_table_scope(name) {
                    self.parse_error("cell end tag without open cell");
                    return;
                }
                // "Otherwise: Generate implied end tags."
                self.generate_implied_end_tags(None);
                // "Now, if the current node is not an HTML element with the
                // same tag name as the token, then this is a parse error."
                if !self.current_node_is(name) {
                    self.parse_error("cell closed with open children");
                }
                // "Pop elements from the stack of open elements until an HTML
                // element with the same tag name as the token has been popped
                // from the stack."
                // "Clear the list of active formatting elements up to the last
                // marker."
                // "Switch the insertion mode to "in row"."
                self.pop_until(name);
                self.clear_active_formatting_elements_to_last_marker();
                self.switch_mode(InsertionMode::InRow);
            }

            // "A start tag whose tag name is one of: "caption", "col",
            // "colgroup", "tbody", "td", "tfoot", "th", "thead", "tr""
            Token::StartTag { name, .. }
                if matches!(
                    name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
                ) =>
            {
                // "Assert: The stack of open elements has a td or th element in
                // table scope."
                if !self.has_one_of_in_scope_of(&["td", "th"], Scope::Table)
                {
                    self.parse_error("table content without open cell");
                    return;
                }
                // "Close the cell (see below) and reprocess the token."
                self.close_the_cell();
                self.reprocess_token(token);
            }

            // "An end tag whose tag name is one of: "body", "caption", "col",
            // "colgroup", "html""
            // "Parse error. Ignore the token."
            Token::EndTag { name, .. }
                if matches!(name.as_str(), "body" | "caption" | "col" | "colgroup" | "html") =>
            {
                self.parse_error("unexpected end tag in cell");
            }

            // "An end tag whose tag name is one of: "table", "tbody", "tfoot",
            // "thead", "tr""
            Token::EndTag { name, .. }
                if matches!(name.as_str(), "table" | "tbody" | "tfoot" | "thead" | "tr") =>
            {
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as that of the token, then this is a parse error; ignore the
                // token."
                if !self.has_element_in_table_scope(name) {
                    self.parse_error("table end tag without open element");
                    return;
                }
                // "Otherwise, close the cell (see below) and reprocess the token."
                self.close_the_cell();
                self.reprocess_token(token);
            }

            // "Anything else"
            // "Process the token using the rules for the "in body" insertion mode."
            _ => self.process_using_rules_for(InsertionMode::InBody, token),
        }
    }

    /// [§ 13.2.6.4.15](https://html.spec.whatwg.org/multipage/parsing.html#close-the-cell)
    ///
    /// "Where the steps above say to close the cell, they mean to run the
    /// following algorithm:"
    fn close_the_cell(&mut self) {
        // STEP 1: "Generate implied end tags."
        self.generate_implied_end_tags(None);
        // STEP 2: "If the current node is not now a td element or a th
        //          element, then this is a parse error."
        if !self.current_node_is_one_of(&["td", "th"]) {
            self.parse_error("cell closed with open children");
        }
        // STEP 3: "Pop elements from the stack of open elements until a td
        //          element or a th element has been popped from the stack."
        self.pop_until_one_of(&["td", "th"]);
        // STEP 4: "Clear the list of active formatting elements up to the
        //          last marker."
        self.clear_active_formatting_elements_to_last_marker();
        // STEP 5: "Switch the insertion mode to "in row"."
        self.switch_mode(InsertionMode::InRow);
    }
}
