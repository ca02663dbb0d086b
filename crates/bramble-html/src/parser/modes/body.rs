//! The "in body" insertion mode.
//!
//! [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)

use bramble_dom::{Attr, DocumentMode, Namespace, NodeId};

use super::InsertionMode;
use crate::parser::HTMLParser;
use crate::parser::scope::Scope;
use crate::parser::tree_builder::FramesetOk;
use crate::tokenizer::{Attribute, Token, TokenizerState};

/// Elements allowed to still be open when the body ends without a parse error.
const CLOSABLE_AT_BODY_END: &[&str] = &[
    "dd", "dt", "li", "optgroup", "option", "p", "rb", "rp", "rt", "rtc", "tbody", "td", "tfoot",
    "th", "thead", "tr", "body", "html",
];

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Start tags that close an open `p` and then insert a plain block.
const BLOCK_START_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "center",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "header",
    "hgroup",
    "main",
    "menu",
    "nav",
    "ol",
    "p",
    "search",
    "section",
    "summary",
    "ul",
];

/// End tags that close a block in scope.
const BLOCK_END_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "button",
    "center",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "header",
    "hgroup",
    "listing",
    "main",
    "menu",
    "nav",
    "ol",
    "pre",
    "search",
    "section",
    "summary",
    "ul",
];

/// Formatting start tags other than `a` and `nobr`.
const FORMATTING_START_TAGS: &[&str] = &[
    "b", "big", "code", "em", "font", "i", "s", "small", "strike", "strong", "tt", "u",
];

/// End tags handled by the adoption agency algorithm.
const ADOPTION_AGENCY_END_TAGS: &[&str] = &[
    "a", "b", "big", "code", "em", "font", "i", "nobr", "s", "small", "strike", "strong", "tt",
    "u",
];

/// Start tags that are dropped outright in body.
const IGNORED_START_TAGS: &[&str] = &[
    "caption", "col", "colgroup", "frame", "head", "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Insertion modes from which a `select` goes to "in select in table".
const TABLE_MODES: &[InsertionMode] = &[
    InsertionMode::InTable,
    InsertionMode::InCaption,
    InsertionMode::InTableBody,
    InsertionMode::InRow,
    InsertionMode::InCell,
];

impl HTMLParser {
    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    pub(in crate::parser) fn handle_in_body_mode(&mut self, token: &Token) {
        match token {
            // "A character token that is U+0000 NULL"
            // "Parse error. Ignore the token."
            Token::Character { data: '\0' } => self.parse_error("null character in body"),

            // "A character token that is one of U+0009 CHARACTER TABULATION,
            // U+000A LINE FEED (LF), U+000C FORM FEED (FF), U+000D CARRIAGE
            // RETURN (CR), or U+0020 SPACE"
            // "Reconstruct the active formatting elements, if any."
            // "Insert the token's character."
            Token::Character { data } if Self::is_whitespace(*data) => {
                self.reconstruct_active_formatting_elements();
                self.insert_character(*data);
            }

            // "Any other character token"
            // "Reconstruct the active formatting elements, if any."
            // "Insert the token's character."
            // "Set the frameset-ok flag to "not ok"."
            Token::Character { data } => {
                self.reconstruct_active_formatting_elements();
                self.insert_character(*data);
                self.frameset_ok = FramesetOk::NotOk;
            }

            // "A comment token"
            // "Insert a comment."
            Token::Comment { data } => self.insert_comment(data, None),

            // "A DOCTYPE token"
            // "Parse error. Ignore the token."
            Token::Doctype { .. } => self.parse_error("unexpected DOCTYPE in body"),

            Token::StartTag {
                name, attributes, ..
            } => self.in_body_start_tag(name, attributes, token),

            Token::EndTag { name, .. } => self.in_body_end_tag(name, token),

            // "An end-of-file token"
            Token::EndOfFile => {
                // "If the stack of template insertion modes is not empty, then
                // process the token using the rules for the "in template"
                // insertion mode."
                if !self.template_insertion_modes.is_empty() {
                    self.process_using_rules_for(InsertionMode::InTemplate, token);
                    return;
                }
                // "Otherwise, follow these steps:"
                // "If there is a node in the stack of open elements that is
                // not either a dd element, a dt element, an li element, an
                // optgroup element, an option element, a p element, an rb
                // element, an rp element, an rt element, an rtc element, a
                // tbody element, a td element, a tfoot element, a th element,
                // a thead element, a tr element, the body element, or the html
                // element, then this is a parse error."
                self.check_unclosed_at_body_end();
                // "Stop parsing."
                self.stop_parsing();
            }
        }
    }

    fn check_unclosed_at_body_end(&mut self) {
        let unclosed = self
            .stack_of_open_elements
            .iter()
            .any(|&id| !self.is_html_one_of(id, CLOSABLE_AT_BODY_END));
        if unclosed {
            self.parse_error("unclosed elements at end of body");
        }
    }

    /// Copy the token's attributes onto `target` where it does not already
    /// have one of the same name.
    fn merge_attributes(&mut self, target: NodeId, attributes: &[Attribute]) {
        if let Some(element) = self.tree.as_element_mut(target) {
            for attribute in attributes {
                let _ = element.add_attribute_if_missing(Attr::new(
                    attribute.name.as_str(),
                    attribute.value.as_str(),
                ));
            }
        }
    }

    /// Insert an element that has no content model: insert, pop, acknowledge.
    fn insert_void_element(&mut self, token: &Token) {
        let _ = self.insert_html_element(token);
        let _ = self.stack_of_open_elements.pop();
        self.acknowledge_self_closing_flag();
    }

    fn in_body_start_tag(&mut self, name: &str, attributes: &[Attribute], token: &Token) {
        match name {
            // "A start tag whose tag name is "html""
            "html" => {
                // "Parse error."
                self.parse_error("html start tag in body");
                // "If there is a template element on the stack of open
                // elements, then ignore the token."
                // "Otherwise, for each attribute on the token, check to see if
                // the attribute is already present on the top element of the
                // stack of open elements. If it is not, add the attribute and
                // its corresponding value to that element."
                if !self.stack_contains("template")
                    && let Some(&html) = self.stack_of_open_elements.first()
                {
                    self.merge_attributes(html, attributes);
                }
            }

            // "A start tag whose tag name is one of: "base", "basefont",
            // "bgsound", "link", "meta", "noframes", "script", "style",
            // "template", "title""
            // "Process the token using the rules for the "in head" insertion mode."
            "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script" | "style"
            | "template" | "title" => {
                self.process_using_rules_for(InsertionMode::InHead, token);
            }

            // "A start tag whose tag name is "body""
            "body" => {
                // "Parse error."
                self.parse_error("body start tag in body");
                // "If the stack of open elements has only one node on it, or
                // if the second element on the stack of open elements is not a
                // body element, or if there is a template element on the stack
                // of open elements, then ignore the token. (fragment case or
                // there is a template element on the stack)"
                let Some(&body) = self.stack_of_open_elements.get(1) else {
                    return;
                };
                if !self.is_html(body, "body") || self.stack_contains("template") {
                    return;
                }
                // "Otherwise, set the frameset-ok flag to "not ok"; then, for
                // each attribute on the token, check to see if the attribute
                // is already present on the body element (the second element)
                // on the stack of open elements, and if it is not, add the
                // attribute and its corresponding value to that element."
                self.frameset_ok = FramesetOk::NotOk;
                self.merge_attributes(body, attributes);
            }

            // "A start tag whose tag name is "frameset""
            "frameset" => {
                // "Parse error."
                self.parse_error("frameset start tag in body");
                // "If the stack of open elements has only one node on it, or
                // if the second element on the stack of open elements is not a
                // body element, then ignore the token. (fragment case or there
                // is a template element on the stack)"
                // "If the frameset-ok flag is set to "not ok", ignore the token."
                let Some(&body) = self.stack_of_open_elements.get(1) else {
                    return;
                };
                if !self.is_html(body, "body") || self.frameset_ok == FramesetOk::NotOk {
                    return;
                }
                // "Otherwise, run the following steps:"
                // "Remove the second element on the stack of open elements
                // from its parent node, if it has one."
                self.tree.detach(body);
                // "Pop all the nodes from the bottom of the stack of open
                // elements, from the current node up to, but not including,
                // the root html element."
                self.stack_of_open_elements.truncate(1);
                // "Insert an HTML element for the token."
                // "Switch the insertion mode to "in frameset"."
                let _ = self.insert_html_element(token);
                self.switch_mode(InsertionMode::InFrameset);
            }

            // "A start tag whose tag name is one of: "address", "article",
            // "aside", "blockquote", "center", "details", "dialog", "dir",
            // "div", "dl", "fieldset", "figcaption", "figure", "footer",
            // "header", "hgroup", "main", "menu", "nav", "ol", "p", "search",
            // "section", "summary", "ul""
            // "If the stack of open elements has a p element in button scope,
            // then close a p element."
            // "Insert an HTML element for the token."
            _ if BLOCK_START_TAGS.contains(&name) => {
                self.close_p_element_in_button_scope();
                let _ = self.insert_html_element(token);
            }

            // "A start tag whose tag name is one of: "h1", "h2", "h3", "h4",
            // "h5", "h6""
            _ if HEADINGS.contains(&name) => {
                // "If the stack of open elements has a p element in button
                // scope, then close a p element."
                self.close_p_element_in_button_scope();
                // "If the current node is an HTML element whose tag name is
                // one of "h1", "h2", "h3", "h4", "h5", or "h6", then this is a
                // parse error; pop the current node off the stack of open
                // elements."
                if self.current_node_is_one_of(HEADINGS) {
                    self.parse_error("nested heading");
                    let _ = self.stack_of_open_elements.pop();
                }
                // "Insert an HTML element for the token."
                let _ = self.insert_html_element(token);
            }

            // "A start tag whose tag name is one of: "pre", "listing""
            "pre" | "listing" => {
                // "If the stack of open elements has a p element in button
                // scope, then close a p element."
                self.close_p_element_in_button_scope();
                // "Insert an HTML element for the token."
                let _ = self.insert_html_element(token);
                // "If the next token is a U+000A LINE FEED (LF) character
                // token, then ignore that token and move on to the next one.
                // (Newlines at the start of pre blocks are ignored as an
                // authoring convenience.)"
                self.ignore_next_line_feed = true;
                // "Set the frameset-ok flag to "not ok"."
                self.frameset_ok = FramesetOk::NotOk;
            }

            // "A start tag whose tag name is "form""
            "form" => {
                let template_open = self.stack_contains("template");
                // "If the form element pointer is not null, and there is no
                // template element on the stack of open elements, then this is
                // a parse error; ignore the token."
                if self.form_element_pointer.is_some() && !template_open {
                    self.parse_error("nested form");
                    return;
                }
                // "Otherwise: If the stack of open elements has a p element in
                // button scope, then close a p element."
                self.close_p_element_in_button_scope();
                // "Insert an HTML element for the token, and, if there is no
                // template element on the stack of open elements, set the form
                // element pointer to point to the element created."
                let form = self.insert_html_element(token);
                if !template_open {
                    self.form_element_pointer = Some(form);
                }
            }

            // "A start tag whose tag name is "li""
            "li" => self.start_list_item(token, &["li"]),

            // "A start tag whose tag name is one of: "dd", "dt""
            "dd" | "dt" => self.start_list_item(token, &["dd", "dt"]),

            // "A start tag whose tag name is "plaintext""
            "plaintext" => {
                // "If the stack of open elements has a p element in button
                // scope, then close a p element."
                self.close_p_element_in_button_scope();
                // "Insert an HTML element for the token."
                let _ = self.insert_html_element(token);
                // "Switch the tokenizer to the PLAINTEXT state."
                self.switch_tokenizer_to(TokenizerState::PLAINTEXT);
            }

            // "A start tag whose tag name is "button""
            "button" => {
                // "If the stack of open elements has a button element in
                // scope, then run these substeps:"
                if self.has_element_in_scope("button") {
                    // "Parse error."
                    // "Generate implied end tags."
                    // "Pop elements from the stack of open elements until a
                    // button element has been popped from the stack."
                    self.parse_error("nested button");
                    self.generate_implied_end_tags(None);
                    self.pop_until("button");
                }
                // "Reconstruct the active formatting elements, if any."
                // "Insert an HTML element for the token."
                // "Set the frameset-ok flag to "not ok"."
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_html_element(token);
                self.frameset_ok = FramesetOk::NotOk;
            }

            // "A start tag whose tag name is "a""
            "a" => {
                // "If the list of active formatting elements contains an a
                // element between the end of the list and the last marker on
                // the list (or the start of the list if there is no marker on
                // the list), then this is a parse error; run the adoption
                // agency algorithm for the token, then remove that element
                // from the list of active formatting elements and the stack of
                // open elements if the adoption agency algorithm didn't
                // already remove it (it might not have if the element is not
                // in table scope)."
                if let Some(existing) = self.formatting_element_after_last_marker("a") {
                    self.parse_error("a start tag inside a");
                    let _ = self.run_adoption_agency("a");
                    self.remove_formatting_element(existing);
                    self.remove_from_stack(existing);
                }
                // "Reconstruct the active formatting elements, if any."
                // "Insert an HTML element for the token. Push onto the list of
                // active formatting elements that element."
                self.insert_formatting_element(token);
            }

            // "A start tag whose tag name is one of: "b", "big", "code", "em",
            // "font", "i", "s", "small", "strike", "strong", "tt", "u""
            // "Reconstruct the active formatting elements, if any."
            // "Insert an HTML element for the token. Push onto the list of
            // active formatting elements that element."
            _ if FORMATTING_START_TAGS.contains(&name) => self.insert_formatting_element(token),

            // "A start tag whose tag name is "nobr""
            "nobr" => {
                // "Reconstruct the active formatting elements, if any."
                self.reconstruct_active_formatting_elements();
                // "If the stack of open elements has a nobr element in scope,
                // then this is a parse error; run the adoption agency
                // algorithm for the token, then once again reconstruct the
                // active formatting elements, if any."
                if self.has_element_in_scope("nobr") {
                    self.parse_error("nested nobr");
                    let _ = self.run_adoption_agency("nobr");
                }
                // "Insert an HTML element for the token. Push onto the list of
                // active formatting elements that element."
                self.insert_formatting_element(token);
            }

            // "A start tag whose tag name is one of: "applet", "marquee", "object""
            "applet" | "marquee" | "object" => {
                // "Reconstruct the active formatting elements, if any."
                // "Insert an HTML element for the token."
                // "Insert a marker at the end of the list of active formatting
                // elements."
                // "Set the frameset-ok flag to "not ok"."
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_html_element(token);
                self.push_formatting_marker();
                self.frameset_ok = FramesetOk::NotOk;
            }

            // "A start tag whose tag name is "table""
            "table" => {
                // "If the Document is not set to quirks mode, and the stack of
                // open elements has a p element in button scope, then close a
                // p element."
                if self.tree.document_mode() != DocumentMode::Quirks {
                    self.close_p_element_in_button_scope();
                }
                // "Insert an HTML element for the token."
                // "Set the frameset-ok flag to "not ok"."
                // "Switch the insertion mode to "in table"."
                let _ = self.insert_html_element(token);
                self.frameset_ok = FramesetOk::NotOk;
                self.switch_mode(InsertionMode::InTable);
            }

            // "A start tag whose tag name is one of: "area", "br", "embed",
            // "img", "keygen", "wbr""
            "area" | "br" | "embed" | "img" | "keygen" | "wbr" => {
                // "Reconstruct the active formatting elements, if any."
                // "Insert an HTML element for the token. Immediately pop the
                // current node off the stack of open elements."
                // "Acknowledge the token's self-closing flag, if it is set."
                // "Set the frameset-ok flag to "not ok"."
                self.reconstruct_active_formatting_elements();
                self.insert_void_element(token);
                self.frameset_ok = FramesetOk::NotOk;
            }

            // "A start tag whose tag name is "input""
            "input" => {
                // "Reconstruct the active formatting elements, if any."
                // "Insert an HTML element for the token. Immediately pop the
                // current node off the stack of open elements."
                // "Acknowledge the token's self-closing flag, if it is set."
                self.reconstruct_active_formatting_elements();
                self.insert_void_element(token);
                // "If the token does not have an attribute with the name
                // "type", or if it does, but that attribute's value is not an
                // ASCII case-insensitive match for the string "hidden", then:
                // set the frameset-ok flag to "not ok"."
                let hidden = token
                    .attribute("type")
                    .is_some_and(|value| value.eq_ignore_ascii_case("hidden"));
                if !hidden {
                    self.frameset_ok = FramesetOk::NotOk;
                }
            }

            // "A start tag whose tag name is one of: "param", "source", "track""
            // "Insert an HTML element for the token. Immediately pop the
            // current node off the stack of open elements."
            // "Acknowledge the token's self-closing flag, if it is set."
            "param" | "source" | "track" => self.insert_void_element(token),

            // "A start tag whose tag name is "hr""
            "hr" => {
                // "If the stack of open elements has a p element in button
                // scope, then close a p element."
                self.close_p_element_in_button_scope();
                // "Insert an HTML element for the token. Immediately pop the
                // current node off the stack of open elements."
                // "Acknowledge the token's self-closing flag, if it is set."
                // "Set the frameset-ok flag to "not ok"."
                self.insert_void_element(token);
                self.frameset_ok = FramesetOk::NotOk;
            }

            // "A start tag whose tag name is "image""
            // "Parse error. Change the token's tag name to "img" and reprocess
            // it. (Don't ask.)"
            "image" => {
                self.parse_error("image start tag");
                let mut renamed = token.clone();
                if let Token::StartTag { name, .. } = &mut renamed {
                    "img".clone_into(name);
                }
                self.reprocess_token(&renamed);
            }

            // "A start tag whose tag name is "textarea""
            "textarea" => {
                // "Insert an HTML element for the token."
                let _ = self.insert_html_element(token);
                // "If the next token is a U+000A LINE FEED (LF) character
                // token, then ignore that token and move on to the next one.
                // (Newlines at the start of textarea elements are ignored as
                // an authoring convenience.)"
                self.ignore_next_line_feed = true;
                // "Switch the tokenizer to the RCDATA state."
                self.switch_tokenizer_to(TokenizerState::RCDATA);
                // "Set the original insertion mode to the current insertion mode."
                self.original_insertion_mode = Some(self.insertion_mode);
                // "Set the frameset-ok flag to "not ok"."
                self.frameset_ok = FramesetOk::NotOk;
                // "Switch the insertion mode to "text"."
                self.switch_mode(InsertionMode::Text);
            }

            // "A start tag whose tag name is "xmp""
            "xmp" => {
                // "If the stack of open elements has a p element in button
                // scope, then close a p element."
                // "Reconstruct the active formatting elements, if any."
                // "Set the frameset-ok flag to "not ok"."
                // "Follow the generic raw text element parsing algorithm."
                self.close_p_element_in_button_scope();
                self.reconstruct_active_formatting_elements();
                self.frameset_ok = FramesetOk::NotOk;
                self.parse_raw_text_element(token);
            }

            // "A start tag whose tag name is "iframe""
            // "Set the frameset-ok flag to "not ok"."
            // "Follow the generic raw text element parsing algorithm."
            "iframe" => {
                self.frameset_ok = FramesetOk::NotOk;
                self.parse_raw_text_element(token);
            }

            // "A start tag whose tag name is "noembed""
            // "A start tag whose tag name is "noscript", if the scripting flag
            // is enabled"
            // "Follow the generic raw text element parsing algorithm."
            "noembed" => self.parse_raw_text_element(token),
            "noscript" if self.options.scripting => self.parse_raw_text_element(token),

            // "A start tag whose tag name is "select""
            "select" => {
                // "Reconstruct the active formatting elements, if any."
                // "Insert an HTML element for the token."
                // "Set the frameset-ok flag to "not ok"."
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_html_element(token);
                self.frameset_ok = FramesetOk::NotOk;
                // "If the insertion mode is one of "in table", "in caption",
                // "in table body", "in row", or "in cell", then switch the
                // insertion mode to "in select in table". Otherwise, switch
                // the insertion mode to "in select"."
                if TABLE_MODES.contains(&self.insertion_mode) {
                    self.switch_mode(InsertionMode::InSelectInTable);
                } else {
                    self.switch_mode(InsertionMode::InSelect);
                }
            }

            // "A start tag whose tag name is one of: "optgroup", "option""
            "optgroup" | "option" => {
                // "If the current node is an option element, then pop the
                // current node off the stack of open elements."
                if self.current_node_is("option") {
                    let _ = self.stack_of_open_elements.pop();
                }
                // "Reconstruct the active formatting elements, if any."
                // "Insert an HTML element for the token."
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_html_element(token);
            }

            // "A start tag whose tag name is one of: "rb", "rtc""
            "rb" | "rtc" => {
                // "If the stack of open elements has a ruby element in scope,
                // then generate implied end tags. If the current node is not
                // now a ruby element, this is a parse error."
                if self.has_element_in_scope("ruby") {
                    self.generate_implied_end_tags(None);
                    if !self.current_node_is("ruby") {
                        self.parse_error("ruby annotation outside ruby");
                    }
                }
                // "Insert an HTML element for the token."
                let _ = self.insert_html_element(token);
            }

            // "A start tag whose tag name is one of: "rp", "rt""
            "rp" | "rt" => {
                // "If the stack of open elements has a ruby element in scope,
                // then generate implied end tags, except for rtc elements. If
                // the current node is not now a rtc element or a ruby element,
                // this is a parse error."
                if self.has_element_in_scope("ruby") {
                    self.generate_implied_end_tags(Some("rtc"));
                    if !self.current_node_is_one_of(&["ruby", "rtc"]) {
                        self.parse_error("ruby text outside ruby");
                    }
                }
                // "Insert an HTML element for the token."
                let _ = self.insert_html_element(token);
            }

            // "A start tag whose tag name is "math""
            "math" => self.insert_foreign_root(token, Namespace::MathMl),

            // "A start tag whose tag name is "svg""
            "svg" => self.insert_foreign_root(token, Namespace::Svg),

            // "A start tag whose tag name is one of: "caption", "col",
            // "colgroup", "frame", "head", "tbody", "td", "tfoot", "th",
            // "thead", "tr""
            // "Parse error. Ignore the token."
            _ if IGNORED_START_TAGS.contains(&name) => {
                self.parse_error("table or head start tag in body");
            }

            // "Any other start tag"
            // "Reconstruct the active formatting elements, if any."
            // "Insert an HTML element for the token."
            _ => {
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_html_element(token);
            }
        }
    }

    /// Reconstruct, insert and push onto the list of active formatting elements.
    fn insert_formatting_element(&mut self, token: &Token) {
        self.reconstruct_active_formatting_elements();
        let element = self.insert_html_element(token);
        self.push_active_formatting_element(element, token);
    }

    /// "A start tag whose tag name is "math"" / "svg".
    fn insert_foreign_root(&mut self, token: &Token, namespace: Namespace) {
        // "Reconstruct the active formatting elements, if any."
        self.reconstruct_active_formatting_elements();
        // "Adjust MathML attributes for the token. (This fixes the case of
        // MathML attributes that are not all lowercase.)"
        // "Adjust foreign attributes for the token. (This fixes the use of
        // namespaced attributes, in particular XLink.)"
        // "Insert a foreign element for the token, with MathML namespace and
        // false."
        let _ = self.insert_foreign_element(token, namespace, false);
        // "If the token has its self-closing flag set, pop the current node
        // off the stack of open elements and acknowledge the token's
        // self-closing flag."
        if let Token::StartTag {
            self_closing: true, ..
        } = token
        {
            let _ = self.stack_of_open_elements.pop();
            self.acknowledge_self_closing_flag();
        }
    }

    /// "A start tag whose tag name is "li"" and "... one of: "dd", "dt"".
    ///
    /// `closes` is the set of open elements the new item implicitly closes.
    fn start_list_item(&mut self, token: &Token, closes: &[&str]) {
        // STEP 1: "Set the frameset-ok flag to "not ok"."
        self.frameset_ok = FramesetOk::NotOk;

        // STEP 2: "Initialize node to be the current node (the bottommost
        //          node of the stack)."
        for index in (0..self.stack_of_open_elements.len()).rev() {
            let node = self.stack_of_open_elements[index];
            // STEP 3: "Loop: If node is an li element, then run these substeps:"
            //         (or a dd / dt element for those tags)
            if let Some(item) = closes.iter().find(|&&item| self.is_html(node, item)) {
                // "Generate implied end tags, except for li elements."
                self.generate_implied_end_tags(Some(item));
                // "If the current node is not an li element, then this is a
                // parse error."
                if !self.current_node_is(item) {
                    self.parse_error("list item closed with open children");
                }
                // "Pop elements from the stack of open elements until an li
                // element has been popped from the stack."
                self.pop_until(item);
                // "Jump to the step labeled done below."
                break;
            }
            // STEP 4: "If node is in the special category, but is not an
            //          address, div, or p element, then jump to the step
            //          labeled done below."
            if self.is_special(node) && !self.is_html_one_of(node, &["address", "div", "p"]) {
                break;
            }
            // STEP 5: "Otherwise, set node to the previous entry in the stack
            //          of open elements and return to the step labeled loop."
        }

        // STEP 6: "Done: If the stack of open elements has a p element in
        //          button scope, then close a p element."
        self.close_p_element_in_button_scope();
        // STEP 7: "Finally, insert an HTML element for the token."
        let _ = self.insert_html_element(token);
    }

    fn in_body_end_tag(&mut self, name: &str, token: &Token) {
        match name {
            // "An end tag whose tag name is "template""
            // "Process the token using the rules for the "in head" insertion mode."
            "template" => self.process_using_rules_for(InsertionMode::InHead, token),

            // "An end tag whose tag name is "body""
            "body" => {
                // "If the stack of open elements does not have a body element
                // in scope, this is a parse error; ignore the token."
                if !self.has_element_in_scope("body") {
                    self.parse_error("body end tag without open body");
                    return;
                }
                // "Otherwise, if there is a node in the stack of open elements
                // that is not either a dd element, ... the body element, or
                // the html element, then this is a parse error."
                self.check_unclosed_at_body_end();
                // "Switch the insertion mode to "after body"."
                self.switch_mode(InsertionMode::AfterBody);
            }

            // "An end tag whose tag name is "html""
            "html" => {
                // "If the stack of open elements does not have a body element
                // in scope, this is a parse error; ignore the token."
                if !self.has_element_in_scope("body") {
                    self.parse_error("html end tag without open body");
                    return;
                }
                // "Otherwise, if there is a node in the stack of open elements
                // that is not either a dd element, ... the body element, or
                // the html element, then this is a parse error."
                self.check_unclosed_at_body_end();
                // "Switch the insertion mode to "after body"."
                // "Reprocess the token."
                self.switch_mode(InsertionMode::AfterBody);
                self.reprocess_token(token);
            }

            // "An end tag whose tag name is one of: "address", "article",
            // "aside", "blockquote", "button", "center", "details", "dialog",
            // "dir", "div", "dl", "fieldset", "figcaption", "figure",
            // "footer", "header", "hgroup", "listing", "main", "menu", "nav",
            // "ol", "pre", "search", "section", "summary", "ul""
            _ if BLOCK_END_TAGS.contains(&name) => {
                // "If the stack of open elements does not have an element in
                // scope that is an HTML element with the same tag name as that
                // of the token, then this is a parse error; ignore the token."
                if !self.has_element_in_scope(name) {
                    self.parse_error("end tag without open element");
                    return;
                }
                // "Generate implied end tags."
                // "If the current node is not an HTML element with the same
                // tag name as that of the token, then this is a parse error."
                // "Pop elements from the stack of open elements until an HTML
                // element with the same tag name as the token has been popped
                // from the stack."
                self.close_element_in_scope(name, None);
            }

            // "An end tag whose tag name is "form""
            "form" => self.in_body_form_end_tag(),

            // "An end tag whose tag name is "p""
            "p" => {
                // "If the stack of open elements does not have a p element in
                // button scope, then this is a parse error; insert an HTML
                // element for a "p" start tag token with no attributes."
                if !self.has_element_in_button_scope("p") {
                    self.parse_error("p end tag without open p");
                    let _ = self.insert_html_element(&Token::start_tag("p"));
                }
                // "Close a p element."
                self.close_p_element();
            }

            // "An end tag whose tag name is "li""
            "li" => {
                // "If the stack of open elements does not have an li element in
                // list item scope, then this is a parse error; ignore the token."
                if !self.has_element_in_list_item_scope("li") {
                    self.parse_error("li end tag without open li");
                    return;
                }
                // "Generate implied end tags, except for li elements."
                // "If the current node is not an li element, then this is a
                // parse error."
                // "Pop elements from the stack of open elements until an li
                // element has been popped from the stack."
                self.close_element_in_scope("li", Some("li"));
            }

            // "An end tag whose tag name is one of: "dd", "dt""
            "dd" | "dt" => {
                // "If the stack of open elements does not have an element in
                // scope that is an HTML element with the same tag name as that
                // of the token, then this is a parse error; ignore the token."
                if !self.has_element_in_scope(name) {
                    self.parse_error("definition end tag without open element");
                    return;
                }
                // "Generate implied end tags, except for HTML elements with
                // the same tag name as the token."
                self.close_element_in_scope(name, Some(name));
            }

            // "An end tag whose tag name is one of: "h1", "h2", "h3", "h4",
            // "h5", "h6""
            _ if HEADINGS.contains(&name) => {
                // "If the stack of open elements does not have an element in
                // scope that is an HTML element and whose tag name is one of
                // "h1", "h2", "h3", "h4", "h5", or "h6", then this is a parse
                // error; ignore the token."
                if !self.has_one_of_in_scope_of(HEADINGS, Scope::Default) {
                    self.parse_error("heading end tag without open heading");
                    return;
                }
                // "Generate implied end tags."
                self.generate_implied_end_tags(None);
                // "If the current node is not an HTML element with the same
                // tag name as that of the token, then this is a parse error."
                if !self.current_node_is(name) {
                    self.parse_error("mismatched heading end tag");
                }
                // "Pop elements from the stack of open elements until an HTML
                // element whose tag name is one of "h1", "h2", "h3", "h4",
                // "h5", or "h6" has been popped from the stack."
                self.pop_until_one_of(HEADINGS);
            }

            // "An end tag whose tag name is one of: "a", "b", "big", "code",
            // "em", "font", "i", "nobr", "s", "small", "strike", "strong",
            // "tt", "u""
            // "Run the adoption agency algorithm for the token."
            _ if ADOPTION_AGENCY_END_TAGS.contains(&name) => {
                if !self.run_adoption_agency(name) {
                    self.any_other_end_tag_in_body(name);
                }
            }

            // "An end tag token whose tag name is one of: "applet", "marquee",
            // "object""
            "applet" | "marquee" | "object" => {
                // "If the stack of open elements does not have an element in
                // scope that is an HTML element with the same tag name as that
                // of the token, then this is a parse error; ignore the token."
                if !self.has_element_in_scope(name) {
                    self.parse_error("end tag without open element");
                    return;
                }
                // "Generate implied end tags."
                // "If the current node is not an HTML element with the same
                // tag name as that of the token, then this is a parse error."
                // "Pop elements from the stack of open elements until an HTML
                // element with the same tag name as the token has been popped
                // from the stack."
                self.close_element_in_scope(name, None);
                // "Clear the list of active formatting elements up to the last
                // marker."
                self.clear_active_formatting_elements_to_last_marker();
            }

            // "An end tag whose tag name is "br""
            // "Parse error. Drop the attributes from the token, and act as
            // described in the next entry; i.e. act as if this was a "br"
            // start tag token with no attributes, rather than the end tag
            // token that it actually is."
            "br" => {
                self.parse_error("br end tag");
                self.in_body_start_tag("br", &[], &Token::start_tag("br"));
            }

            // "Any other end tag"
            _ => self.any_other_end_tag_in_body(name),
        }
    }

    /// Generate implied end tags (except `exclude`), report a mismatched
    /// current node and pop until `name` is closed. The caller has checked
    /// that `name` is in scope.
    fn close_element_in_scope(&mut self, name: &str, exclude: Option<&str>) {
        self.generate_implied_end_tags(exclude);
        if !self.current_node_is(name) {
            self.parse_error("end tag closes unclosed elements");
        }
        self.pop_until(name);
    }

    /// "An end tag whose tag name is "form""
    fn in_body_form_end_tag(&mut self) {
        // "If there is no template element on the stack of open elements,
        // then run these substeps:"
        if !self.stack_contains("template") {
            // STEP 1: "Let node be the element that the form element pointer
            //          is set to, or null if it is not set to an element."
            // STEP 2: "Set the form element pointer to null."
            let node = self.form_element_pointer.take();
            // STEP 3: "If node is null or if the stack of open elements does
            //          not have node in scope, then this is a parse error;
            //          return and ignore the token."
            let Some(node) = node.filter(|&node| self.has_node_in_scope(node)) else {
                self.parse_error("form end tag without open form");
                return;
            };
            // STEP 4: "Generate implied end tags."
            self.generate_implied_end_tags(None);
            // STEP 5: "If the current node is not node, then this is a parse
            //          error."
            if self.current_node() != Some(node) {
                self.parse_error("form closed with open children");
            }
            // STEP 6: "Remove node from the stack of open elements."
            self.remove_from_stack(node);
            return;
        }

        // "If there is a template element on the stack of open elements, then
        // run these substeps instead:"
        // STEP 1: "If the stack of open elements does not have a form element
        //          in scope, then this is a parse error; return and ignore the
        //          token."
        if !self.has_element_in_scope("form") {
            self.parse_error("form end tag without open form");
            return;
        }
        // STEP 2-4: "Generate implied end tags." "If the current node is not
        //           a form element, then this is a parse error." "Pop elements
        //           from the stack of open elements until a form element has
        //           been popped from the stack."
        self.close_element_in_scope("form", None);
    }
}
