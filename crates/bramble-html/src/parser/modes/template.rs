//! The "in template" insertion mode.

use super::InsertionMode;
use crate::parser::HTMLParser;
use crate::tokenizer::Token;

impl HTMLParser {
    /// [§ 13.2.6.4.18 The "in template" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intemplate)
    pub(in crate::parser) fn handle_in_template_mode(&mut self, token: &Token) {
        match token {
            // "A character token"
            // "A comment token"
            // "A DOCTYPE token"
            // "Process the token using the rules for the "in body" insertion mode."
            Token::Character { .. } | Token::Comment { .. } | Token::Doctype { .. } => {
                self.process_using_rules_for(InsertionMode::InBody, token);
            }

            // "A start tag whose tag name is one of: "base", "basefont",
            // "bgsound", "link", "meta", "noframes", "script", "style",
            // "template", "title""
            // "An end tag whose tag name is "template""
            // "Process the token using the rules for the "in head" insertion mode."
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
                self.process_using_rules_for(InsertionMode::InHead, token);
            }
            Token::EndTag { name, .. } if name == "template" => {
                self.process_using_rules_for(InsertionMode::InHead, token);
            }

            // "A start tag whose tag name is one of: "caption", "colgroup",
            // "tbody", "tfoot", "thead""
            Token::StartTag { name, .. }
                if matches!(name.as_str(), "caption" | "colgroup" | "tbody" | "tfoot" | "thead") =>
            {
                self.retarget_template_mode(InsertionMode::InTable, token);
            }

            // "A start tag whose tag name is "col""
            Token::StartTag { name, .. } if name == "col" => {
                self.retarget_template_mode(InsertionMode::InColumnGroup, token);
            }

            // "A start tag whose tag name is "tr""
            Token::StartTag { name, .. } if name == "tr" => {
                self.retarget_template_mode(InsertionMode::InTableBody, token);
            }

            // "A start tag whose tag name is one of: "td", "th""
            Token::StartTag { name, .. } if name == "td" || name == "th" => {
                self.retarget_template_mode(InsertionMode::InRow, token);
            }

            // "Any other start tag"
            Token::StartTag { .. } => self.retarget_template_mode(InsertionMode::InBody, token),

            // "Any other end tag"
            // "Parse error. Ignore the token."
            Token::EndTag { .. } => self.parse_error("unexpected end tag in template"),

            // "An end-of-file token"
            Token::EndOfFile => {
                // "If there is no template element on the stack of open
                // elements, then stop parsing. (fragment case)"
                if !self.stack_contains("template") {
                    self.stop_parsing();
                    return;
                }
                // "Otherwise, this is a parse error."
                self.parse_error("end of file in template");
                // "Pop elements from the stack of open elements until a
                // template element has been popped from the stack."
                // "Clear the list of active formatting elements up to the last
                // marker."
                // "Pop the current template insertion mode off the stack of
                // template insertion modes."
                // "Reset the insertion mode appropriately."
                // "Reprocess the token."
                self.pop_until("template");
                self.clear_active_formatting_elements_to_last_marker();
                let _ = self.template_insertion_modes.pop();
                self.reset_insertion_mode_appropriately();
                self.reprocess_token(token);
            }
        }
    }

    /// "Pop the current template insertion mode off the stack of template
    /// insertion modes. Push `mode` onto the stack of template insertion modes
    /// so that it is the new current template insertion mode. Switch the
    /// insertion mode to `mode`, and reprocess the token."
    fn retarget_template_mode(&mut self, mode: InsertionMode, token: &Token) {
        let _ = self.template_insertion_modes.pop();
        self.template_insertion_modes.push(mode);
        self.switch_mode(mode);
        self.reprocess_token(token);
    }
}
