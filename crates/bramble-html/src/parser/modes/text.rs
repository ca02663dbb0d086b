//! The "text" insertion mode.

use super::InsertionMode;
use crate::parser::HTMLParser;
use crate::tokenizer::Token;

impl HTMLParser {
    /// [§ 13.2.6.4.8 The "text" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incdata)
    ///
    /// Used for the contents of `script`, `style`, `title`, `textarea` and the
    /// other raw text and RCDATA elements.
    pub(in crate::parser) fn handle_text_mode(&mut self, token: &Token) {
        match token {
            // "A character token"
            // "Insert the token's character."
            Token::Character { data } => self.insert_character(*data),

            // "An end-of-file token"
            Token::EndOfFile => {
                // "Parse error."
                self.parse_error("end of file in text content");
                // "If the current node is a script element, then set its
                // already started to true." Scripts never run, so there is
                // nothing to mark.
                // "Pop the current node off the stack of open elements."
                let _ = self.stack_of_open_elements.pop();
                // "Switch the insertion mode to the original insertion mode
                // and reprocess the token."
                self.return_to_original_insertion_mode();
                self.reprocess_token(token);
            }

            // "An end tag whose tag name is "script""
            Token::EndTag { name, .. } if name == "script" => {
                // "Let script be the current node (which will be a script
                // element)."
                // "Pop the current node off the stack of open elements."
                // "Switch the insertion mode to the original insertion mode."
                let _ = self.stack_of_open_elements.pop();
                self.return_to_original_insertion_mode();
                // "Prepare the script element script." Script execution is not
                // part of this engine; the element stays in the tree with its
                // text.
                self.unsupported("script execution");
            }

            // "Any other end tag"
            // "Pop the current node off the stack of open elements."
            // "Switch the insertion mode to the original insertion mode."
            Token::EndTag { .. } => {
                let _ = self.stack_of_open_elements.pop();
                self.return_to_original_insertion_mode();
            }

            // The tokenizer emits nothing else while in a raw text or RCDATA
            // state.
            Token::StartTag { .. } | Token::Comment { .. } | Token::Doctype { .. } => {}
        }
    }

    fn return_to_original_insertion_mode(&mut self) {
        let mode = self
            .original_insertion_mode
            .take()
            .unwrap_or(InsertionMode::InBody);
        self.switch_mode(mode);
    }
}
