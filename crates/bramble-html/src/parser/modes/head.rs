//! The "in head", "in head noscript" and "after head" insertion modes.

use bramble_dom::Namespace;

use super::InsertionMode;
use crate::parser::HTMLParser;
use crate::parser::tree_builder::FramesetOk;
use crate::tokenizer::{Token, TokenizerState};

impl HTMLParser {
    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    pub(in crate::parser) fn handle_in_head_mode(&mut self, token: &Token) {
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
            Token::Doctype { .. } => self.parse_error("unexpected DOCTYPE in head"),

            // "A start tag whose tag name is "html""
            // "Process the token using the rules for the "in body" insertion mode."
            Token::StartTag { name, .. } if name == "html" => {
                self.process_using_rules_for(InsertionMode::InBody, token);
            }

            // "A start tag whose tag name is one of: "base", "basefont",
            // "bgsound", "link""
            // "Insert an HTML element for the token. Immediately pop the
            // current node off the stack of open elements."
            // "Acknowledge the token's self-closing flag, if it is set."
            //
            // "A start tag whose tag name is "meta"": the same, followed by
            // encoding changes, which do not apply to already-decoded input.
            Token::StartTag { name, .. }
                if matches!(name.as_str(), "base" | "basefont" | "bgsound" | "link" | "meta") =>
            {
                let _ = self.insert_html_element(token);
                let _ = self.stack_of_open_elements.pop();
                self.acknowledge_self_closing_flag();
            }

            // "A start tag whose tag name is "title""
            // "Follow the generic RCDATA element parsing algorithm."
            Token::StartTag { name, .. } if name == "title" => self.parse_rcdata_element(token),

            // "A start tag whose tag name is "noscript", if the scripting flag
            // is enabled"
            // "A start tag whose tag name is one of: "noframes", "style""
            // "Follow the generic raw text element parsing algorithm."
            Token::StartTag { name, .. }
                if (name == "noscript" && self.options.scripting)
                    || name == "noframes"
                    || name == "style" =>
            {
                self.parse_raw_text_element(token);
            }

            // "A start tag whose tag name is "noscript", if the scripting flag
            // is disabled"
            // "Insert an HTML element for the token."
            // "Switch the insertion mode to "in head noscript"."
            Token::StartTag { name, .. } if name == "noscript" => {
                let _ = self.insert_html_element(token);
                self.switch_mode(InsertionMode::InHeadNoscript);
            }

            // "A start tag whose tag name is "script""
            Token::StartTag { name, .. } if name == "script" => self.insert_script_element(token),

            // "An end tag whose tag name is "head""
            // "Pop the current node (which will be the head element) off the
            // stack of open elements."
            // "Switch the insertion mode to "after head"."
            Token::EndTag { name, .. } if name == "head" => {
                let _ = self.stack_of_open_elements.pop();
                self.switch_mode(InsertionMode::AfterHead);
            }

            // "An end tag whose tag name is one of: "body", "html", "br""
            // "Act as described in the "anything else" entry below."
            Token::EndTag { name, .. } if matches!(name.as_str(), "body" | "html" | "br") => {
                self.in_head_anything_else(token);
            }

            // "A start tag whose tag name is "template""
            Token::StartTag { name, .. } if name == "template" => {
                // "Let template start tag be the start tag."
                // "Insert a marker at the end of the list of active formatting
                // elements."
                // "Set the frameset-ok flag to "not ok"."
                // "Switch the insertion mode to "in template"."
                // "Push "in template" onto the stack of template insertion
                // modes so that it is the new current template insertion mode."
                // Declarative shadow roots are not modelled; the element is
                // always inserted normally.
                let _ = self.insert_html_element(token);
                self.push_formatting_marker();
                self.frameset_ok = FramesetOk::NotOk;
                self.switch_mode(InsertionMode::InTemplate);
                self.template_insertion_modes
                    .push(InsertionMode::InTemplate);
            }

            // "An end tag whose tag name is "template""
            Token::EndTag { name, .. } if name == "template" => {
                // "If there is no template element on the stack of open
                // elements, then this is a parse error; ignore the token."
                if !self.stack_contains("template") {
                    self.parse_error("template end tag without open template");
                    return;
                }
                // "Generate all implied end tags thoroughly."
                self.generate_all_implied_end_tags_thoroughly();
                // "If the current node is not a template element, then this is
                // a parse error."
                if !self.current_node_is("template") {
                    self.parse_error("template closed with open children");
                }
                // "Pop elements from the stack of open elements until a
                // template element has been popped from the stack."
                self.pop_until("template");
                // "Clear the list of active formatting elements up to the last
                // marker."
                self.clear_active_formatting_elements_to_last_marker();
                // "Pop the current template insertion mode off the stack of
                // template insertion modes."
                let _ = self.template_insertion_modes.pop();
                // "Reset the insertion mode appropriately."
                self.reset_insertion_mode_appropriately();
            }

            // "A start tag whose tag name is "head""
            // "Any other end tag"
            // "Parse error. Ignore the token."
            Token::StartTag { name, .. } if name == "head" => {
                self.parse_error("head start tag inside head");
            }
            Token::EndTag { .. } => self.parse_error("unexpected end tag in head"),

            // "Anything else"
            _ => self.in_head_anything_else(token),
        }
    }

    fn in_head_anything_else(&mut self, token: &Token) {
        // "Pop the current node (which will be the head element) off the
        // stack of open elements."
        // "Switch the insertion mode to "after head"."
        // "Reprocess the token."
        let _ = self.stack_of_open_elements.pop();
        self.switch_mode(InsertionMode::AfterHead);
        self.reprocess_token(token);
    }

    /// [§ 13.2.6.4.4](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    ///
    /// "A start tag whose tag name is "script"". The parser-inserted and
    /// already-started flags only matter to script execution, which does not
    /// happen here.
    fn insert_script_element(&mut self, token: &Token) {
        // STEP 1: "Let the adjusted insertion location be the appropriate
        //          place for inserting a node."
        let location = self.appropriate_place_for_inserting_a_node(None);
        // STEP 2: "Create an element for the token in the HTML namespace, with
        //          the intended parent being the element in which the adjusted
        //          insertion location finds itself."
        let script = self.create_element_for_token(token, Namespace::Html);
        // STEP 6: "Insert the newly created element at the adjusted insertion
        //          location."
        location.insert(&mut self.tree, script);
        // STEP 7: "Push the element onto the stack of open elements so that it
        //          is the new current node."
        self.stack_of_open_elements.push(script);
        // STEP 8: "Switch the tokenizer to the script data state."
        self.switch_tokenizer_to(TokenizerState::ScriptData);
        // STEP 9: "Set the original insertion mode to the current insertion mode."
        self.original_insertion_mode = Some(self.insertion_mode);
        // STEP 10: "Switch the insertion mode to "text"."
        self.switch_mode(InsertionMode::Text);
    }

    /// [§ 13.2.6.4.5 The "in head noscript" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inheadnoscript)
    pub(in crate::parser) fn handle_in_head_noscript_mode(&mut self, token: &Token) {
        match token {
            // "A DOCTYPE token"
            // "Parse error. Ignore the token."
            Token::Doctype { .. } => self.parse_error("unexpected DOCTYPE in noscript"),

            // "A start tag whose tag name is "html""
            // "Process the token using the rules for the "in body" insertion mode."
            Token::StartTag { name, .. } if name == "html" => {
                self.process_using_rules_for(InsertionMode::InBody, token);
            }

            // "An end tag whose tag name is "noscript""
            // "Pop the current node (which will be a noscript element) from
            // the stack of open elements; the new current node will be a head
            // element."
            // "Switch the insertion mode to "in head"."
            Token::EndTag { name, .. } if name == "noscript" => {
                let _ = self.stack_of_open_elements.pop();
                self.switch_mode(InsertionMode::InHead);
            }

            // "A character token that is one of U+0009 CHARACTER TABULATION,
            // U+000A LINE FEED (LF), U+000C FORM FEED (FF), U+000D CARRIAGE
            // RETURN (CR), or U+0020 SPACE"
            // "A comment token"
            // "A start tag whose tag name is one of: "basefont", "bgsound",
            // "link", "meta", "noframes", "style""
            // "Process the token using the rules for the "in head" insertion mode."
            Token::Character { data } if Self::is_whitespace(*data) => {
                self.process_using_rules_for(InsertionMode::InHead, token);
            }
            Token::Comment { .. } => self.process_using_rules_for(InsertionMode::InHead, token),
            Token::StartTag { name, .. }
                if matches!(
                    name.as_str(),
                    "basefont" | "bgsound" | "link" | "meta" | "noframes" | "style"
                ) =>
            {
                self.process_using_rules_for(InsertionMode::InHead, token);
            }

            // "An end tag whose tag name is "br""
            // "Act as described in the "anything else" entry below."
            Token::EndTag { name, .. } if name == "br" => self.in_head_noscript_anything_else(token),

            // "A start tag whose tag name is one of: "head", "noscript""
            // "Any other end tag"
            // "Parse error. Ignore the token."
            Token::StartTag { name, .. } if name == "head" || name == "noscript" => {
                self.parse_error("unexpected start tag in noscript");
            }
            Token::EndTag { .. } => self.parse_error("unexpected end tag in noscript"),

            // "Anything else"
            _ => self.in_head_noscript_anything_else(token),
        }
    }

    fn in_head_noscript_anything_else(&mut self, token: &Token) {
        // "Parse error."
        // "Pop the current node (which will be a noscript element) from the
        // stack of open elements; the new current node will be a head
        // element."
        // "Switch the insertion mode to "in head"."
        // "Reprocess the token."
        self.parse_error("unexpected content in noscript");
        let _ = self.stack_of_open_elements.pop();
        self.switch_mode(InsertionMode::InHead);
        self.reprocess_token(token);
    }

    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    pub(in crate::parser) fn handle_after_head_mode(&mut self, token: &Token) {
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
            Token::Doctype { .. } => self.parse_error("unexpected DOCTYPE after head"),

            // "A start tag whose tag name is "html""
            // "Process the token using the rules for the "in body" insertion mode."
            Token::StartTag { name, .. } if name == "html" => {
                self.process_using_rules_for(InsertionMode::InBody, token);
            }

            // "A start tag whose tag name is "body""
            // "Insert an HTML element for the token."
            // "Set the frameset-ok flag to "not ok"."
            // "Switch the insertion mode to "in body"."
            Token::StartTag { name, .. } if name == "body" => {
                let _ = self.insert_html_element(token);
                self.frameset_ok = FramesetOk::NotOk;
                self.switch_mode(InsertionMode::InBody);
            }

            // "A start tag whose tag name is "frameset""
            // "Insert an HTML element for the token."
            // "Switch the insertion mode to "in frameset"."
            Token::StartTag { name, .. } if name == "frameset" => {
                let _ = self.insert_html_element(token);
                self.switch_mode(InsertionMode::InFrameset);
            }

            // "A start tag whose tag name is one of: "base", "basefont",
            // "bgsound", "link", "meta", "noframes", "script", "style",
            // "template", "title""
            Token::StartTag { name, .. }
                if matches!(
                    name.as_str(),
                    "base"
                        | "basefont"
                        | "bgsound"
                        | "link"
                        | "meta"
                        | "noframes"
                        | "script"
                        | "style"
                        | "template"
                        | "title"
                ) =>
            {
                // "Parse error."
                self.parse_error("head content after head");
                // "Push the node pointed to by the head element pointer onto
                // the stack of open elements."
                // "Process the token using the rules for the "in head"
                // insertion mode."
                // "Remove the node pointed to by the head element pointer from
                // the stack of open elements. (It might not be the current node
                // at this point.)"
                let Some(head) = self.head_element_pointer else {
                    self.process_using_rules_for(InsertionMode::InHead, token);
                    return;
                };
                self.stack_of_open_elements.push(head);
                self.process_using_rules_for(InsertionMode::InHead, token);
                self.remove_from_stack(head);
            }

            // "An end tag whose tag name is "template""
            // "Process the token using the rules for the "in head" insertion mode."
            Token::EndTag { name, .. } if name == "template" => {
                self.process_using_rules_for(InsertionMode::InHead, token);
            }

            // "An end tag whose tag name is one of: "body", "html", "br""
            // "Act as described in the "anything else" entry below."
            Token::EndTag { name, .. } if matches!(name.as_str(), "body" | "html" | "br") => {
                self.after_head_anything_else(token);
            }

            // "A start tag whose tag name is "head""
            // "Any other end tag"
            // "Parse error. Ignore the token."
            Token::StartTag { name, .. } if name == "head" => {
                self.parse_error("second head start tag");
            }
            Token::EndTag { .. } => self.parse_error("unexpected end tag after head"),

            // "Anything else"
            _ => self.after_head_anything_else(token),
        }
    }

    fn after_head_anything_else(&mut self, token: &Token) {
        // "Insert an HTML element for a "body" start tag token with no attributes."
        // "Switch the insertion mode to "in body"."
        // "Reprocess the current token."
        let _ = self.insert_html_element(&Token::start_tag("body"));
        self.switch_mode(InsertionMode::InBody);
        self.reprocess_token(token);
    }
}
