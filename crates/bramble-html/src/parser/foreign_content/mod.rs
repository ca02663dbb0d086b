//! Foreign content: SVG and MathML inside HTML.
//!
//! [§ 13.2.6.3 Creating and inserting nodes](https://html.spec.whatwg.org/multipage/parsing.html#creating-and-inserting-nodes)
//! [§ 13.2.6.5 The rules for parsing tokens in foreign content](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inforeign)

mod mathml;
mod svg;

use bramble_dom::{Attr, ElementData, Namespace, NodeId};

use self::mathml::{MATHML_TEXT_INTEGRATION_POINTS, adjust_mathml_attribute_name};
use self::svg::{adjust_svg_attribute_name, adjust_svg_tag_name};
use super::HTMLParser;
use super::tree_builder::FramesetOk;
use crate::tokenizer::{Attribute, Token};

/// [§ 13.2.6.3 Adjust foreign attributes](https://html.spec.whatwg.org/multipage/parsing.html#adjust-foreign-attributes)
///
/// "if any of the attributes on the token match the strings given in the
/// first column of the following table, let the attribute be a namespaced
/// attribute, with the prefix being the string given in the corresponding
/// cell in the second column, the local name being the string given in the
/// corresponding cell in the third column, and the namespace being the
/// namespace given in the corresponding cell in the fourth column."
static FOREIGN_ATTRIBUTE_ADJUSTMENTS: &[(&str, Option<&str>, &str, Namespace)] = &[
    ("xlink:actuate", Some("xlink"), "actuate", Namespace::XLink),
    ("xlink:arcrole", Some("xlink"), "arcrole", Namespace::XLink),
    ("xlink:href", Some("xlink"), "href", Namespace::XLink),
    ("xlink:role", Some("xlink"), "role", Namespace::XLink),
    ("xlink:show", Some("xlink"), "show", Namespace::XLink),
    ("xlink:title", Some("xlink"), "title", Namespace::XLink),
    ("xlink:type", Some("xlink"), "type", Namespace::XLink),
    ("xml:lang", Some("xml"), "lang", Namespace::Xml),
    ("xml:space", Some("xml"), "space", Namespace::Xml),
    ("xmlns", None, "xmlns", Namespace::Xmlns),
    ("xmlns:xlink", Some("xmlns"), "xlink", Namespace::Xmlns),
];

/// Start tags that break out of foreign content back into HTML.
///
/// "A start tag whose tag name is one of: "b", "big", "blockquote", "body",
/// "br", "center", "code", "dd", "div", "dl", "dt", "em", "embed", "h1", "h2",
/// "h3", "h4", "h5", "h6", "head", "hr", "i", "img", "li", "listing", "menu",
/// "meta", "nobr", "ol", "p", "pre", "ruby", "s", "small", "span", "strong",
/// "strike", "sub", "sup", "table", "tt", "u", "ul", "var""
const BREAKOUT_START_TAGS: &[&str] = &[
    "b",
    "big",
    "blockquote",
    "body",
    "br",
    "center",
    "code",
    "dd",
    "div",
    "dl",
    "dt",
    "em",
    "embed",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "hr",
    "i",
    "img",
    "li",
    "listing",
    "menu",
    "meta",
    "nobr",
    "ol",
    "p",
    "pre",
    "ruby",
    "s",
    "small",
    "span",
    "strong",
    "strike",
    "sub",
    "sup",
    "table",
    "tt",
    "u",
    "ul",
    "var",
];

/// Turn token attributes into DOM attributes for an element in `namespace`.
///
/// HTML elements keep the names as tokenized. SVG and MathML elements get
/// their case fix-ups and the foreign attribute namespaces.
pub(crate) fn attributes_for_namespace(namespace: Namespace, attributes: &[Attribute]) -> Vec<Attr> {
    attributes
        .iter()
        .map(|attribute| {
            if namespace == Namespace::Html {
                return Attr::new(attribute.name.as_str(), attribute.value.as_str());
            }
            if let Some(&(_, prefix, local_name, attr_namespace)) = FOREIGN_ATTRIBUTE_ADJUSTMENTS
                .iter()
                .find(|(name, ..)| *name == attribute.name)
            {
                return Attr::namespaced(
                    attr_namespace,
                    prefix.map(str::to_string),
                    local_name,
                    attribute.value.as_str(),
                );
            }
            let name = match namespace {
                Namespace::Svg => adjust_svg_attribute_name(&attribute.name),
                Namespace::MathMl => adjust_mathml_attribute_name(&attribute.name),
                _ => attribute.name.as_str(),
            };
            Attr::new(name, attribute.value.as_str())
        })
        .collect()
}

/// The element's local name for a tag name in `namespace`.
pub(crate) fn local_name_for_namespace(namespace: Namespace, tag_name: &str) -> &str {
    if namespace == Namespace::Svg {
        adjust_svg_tag_name(tag_name)
    } else {
        tag_name
    }
}

impl HTMLParser {
    /// [§ 13.2.6.5](https://html.spec.whatwg.org/multipage/parsing.html#mathml-text-integration-point)
    pub(super) fn is_mathml_text_integration_point(element: &ElementData) -> bool {
        element.is_one_of(Namespace::MathMl, MATHML_TEXT_INTEGRATION_POINTS)
    }

    /// [§ 13.2.6.5](https://html.spec.whatwg.org/multipage/parsing.html#html-integration-point)
    ///
    /// "A node is an HTML integration point if it is one of the following
    /// elements:
    /// - A MathML annotation-xml element whose start tag token had an
    ///   attribute with the name "encoding" whose value was an ASCII
    ///   case-insensitive match for the string "text/html"
    /// - A MathML annotation-xml element whose start tag token had an
    ///   attribute with the name "encoding" whose value was an ASCII
    ///   case-insensitive match for the string "application/xhtml+xml"
    /// - An SVG foreignObject element
    /// - An SVG desc element
    /// - An SVG title element"
    pub(super) fn is_html_integration_point(&self, id: NodeId) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        if element.is_one_of(Namespace::MathMl, &["annotation-xml"]) {
            return element.get_attribute("encoding").is_some_and(|encoding| {
                encoding.eq_ignore_ascii_case("text/html")
                    || encoding.eq_ignore_ascii_case("application/xhtml+xml")
            });
        }
        element.is_one_of(Namespace::Svg, &["foreignObject", "desc", "title"])
    }

    fn is_breakout_token(token: &Token) -> bool {
        match token {
            Token::StartTag {
                name, attributes, ..
            } => {
                BREAKOUT_START_TAGS.contains(&name.as_str())
                    // "A start tag whose tag name is "font", if the token has
                    // any attributes named "color", "face", or "size""
                    || (name == "font"
                        && attributes
                            .iter()
                            .any(|attr| matches!(attr.name.as_str(), "color" | "face" | "size")))
            }
            // "An end tag whose tag name is "br", "p""
            Token::EndTag { name, .. } => name == "br" || name == "p",
            _ => false,
        }
    }

    /// [§ 13.2.6.5 The rules for parsing tokens in foreign content](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inforeign)
    pub(super) fn process_token_in_foreign_content(&mut self, token: &Token) {
        match token {
            // "A character token that is U+0000 NULL"
            // "Parse error. Insert a U+FFFD REPLACEMENT CHARACTER character."
            Token::Character { data: '\0' } => {
                self.parse_error("null character in foreign content");
                self.insert_character('\u{FFFD}');
            }
            // "A character token that is one of U+0009 CHARACTER TABULATION,
            // U+000A LINE FEED (LF), U+000C FORM FEED (FF), U+000D CARRIAGE
            // RETURN (CR), or U+0020 SPACE"
            // "Insert the token's character."
            Token::Character { data } if Self::is_whitespace(*data) => {
                self.insert_character(*data);
            }
            // "Any other character token"
            // "Insert the token's character. Set the frameset-ok flag to "not ok"."
            Token::Character { data } => {
                self.insert_character(*data);
                self.frameset_ok = FramesetOk::NotOk;
            }
            // "A comment token"
            Token::Comment { data } => self.insert_comment(data, None),
            // "A DOCTYPE token"
            Token::Doctype { .. } => self.parse_error("DOCTYPE in foreign content"),

            _ if Self::is_breakout_token(token) => {
                // "Parse error."
                self.parse_error("HTML tag breaks out of foreign content");
                // "While the current node is not a MathML text integration
                // point, an HTML integration point, or an element in the HTML
                // namespace, pop elements from the stack of open elements."
                while let Some(current) = self.current_node() {
                    let leave = self.element(current).is_none_or(|element| {
                        element.namespace == Namespace::Html
                            || Self::is_mathml_text_integration_point(element)
                    }) || self.is_html_integration_point(current);
                    if leave {
                        break;
                    }
                    let _ = self.stack_of_open_elements.pop();
                }
                // "Reprocess the token according to the rules given in the
                // section corresponding to the current insertion mode in HTML
                // content."
                self.reprocess_token(token);
            }

            // "Any other start tag"
            Token::StartTag {
                name, self_closing, ..
            } => {
                let namespace = self
                    .adjusted_current_node()
                    .and_then(|id| self.element(id))
                    .map_or(Namespace::Html, |element| element.namespace);
                // Tag name and attribute adjustments happen while the element
                // is created.
                let _ = self.insert_foreign_element(token, namespace, false);
                // "If the token has its self-closing flag set, then run the
                // appropriate steps from the following list:"
                if *self_closing {
                    // "If the token's tag name is "script", and the new current
                    // node is in the SVG namespace": acknowledge and act as for
                    // a script end tag. Otherwise: pop and acknowledge.
                    let _ = self.stack_of_open_elements.pop();
                    self.acknowledge_self_closing_flag();
                    if name == "script" && namespace == Namespace::Svg {
                        self.unsupported("SVG script execution");
                    }
                }
            }

            // "An end tag whose tag name is "script", if the current node is
            // an SVG script element"
            Token::EndTag { name, .. }
                if name == "script"
                    && self.current_node().is_some_and(|id| {
                        self.element(id)
                            .is_some_and(|e| e.is_one_of(Namespace::Svg, &["script"]))
                    }) =>
            {
                // "Pop the current node off the stack of open elements."
                let _ = self.stack_of_open_elements.pop();
                self.unsupported("SVG script execution");
            }

            // "Any other end tag"
            Token::EndTag { name, .. } => self.foreign_content_any_other_end_tag(name, token),

            Token::EndOfFile => self.process_token(token),
        }
    }

    /// [§ 13.2.6.5](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inforeign)
    ///
    /// "Any other end tag": walk down the stack looking for a match, handing
    /// the token to HTML content as soon as an HTML element is reached.
    fn foreign_content_any_other_end_tag(&mut self, name: &str, token: &Token) {
        // STEP 1: "Initialize node to be the current node (the bottommost node
        //          of the stack)."
        let Some(mut index) = self.stack_of_open_elements.len().checked_sub(1) else {
            return;
        };

        // STEP 2: "If node's tag name, converted to ASCII lowercase, is not the
        //          same as the tag name of the token, then this is a parse error."
        if !self.local_name_matches(self.stack_of_open_elements[index], name) {
            self.parse_error("unexpected end tag in foreign content");
        }

        loop {
            // STEP 3: "Loop: If node is the topmost element in the stack of
            //          open elements, then return. (fragment case)"
            if index == 0 {
                return;
            }

            // STEP 4: "If node's tag name, converted to ASCII lowercase, is
            //          the same as the tag name of the token, pop elements from
            //          the stack of open elements until node has been popped
            //          from the stack, and then return."
            let node = self.stack_of_open_elements[index];
            if self.local_name_matches(node, name) {
                self.stack_of_open_elements.truncate(index);
                return;
            }

            // STEP 5: "Set node to the previous entry in the stack of open elements."
            index -= 1;

            // STEP 6: "If node is not an element in the HTML namespace, return
            //          to the step labeled loop."
            // STEP 7: "Otherwise, process the token according to the rules
            //          given in the section corresponding to the current
            //          insertion mode in HTML content."
            let node = self.stack_of_open_elements[index];
            if self
                .element(node)
                .is_some_and(|element| element.namespace == Namespace::Html)
            {
                self.process_token(token);
                return;
            }
        }
    }

    fn local_name_matches(&self, id: NodeId, name: &str) -> bool {
        self.element(id)
            .is_some_and(|element| element.local_name.eq_ignore_ascii_case(name))
    }
}
