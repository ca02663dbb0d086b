use bramble_dom::{DomTree, ElementData, Namespace, NodeId};

use super::formatting::ActiveFormattingElement;
use super::modes::InsertionMode;
use crate::error::{IssueLog, ParseErrorCode, ParseIssue};
use crate::options::ParserOptions;
use crate::tokenizer::{Attribute, Token, TokenSink, TokenizerControl, TokenizerState};

/// [§ 13.2.4.5 Other parsing state flags](https://html.spec.whatwg.org/multipage/parsing.html#frameset-ok-flag)
///
/// "The frameset-ok flag is set to "ok" when the parser is created. It is set
/// to "not ok" after certain tokens are seen."
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FramesetOk {
    /// A `frameset` start tag may still replace the body.
    #[default]
    Ok,
    /// Content has been seen that rules out a frameset.
    NotOk,
}

/// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
///
/// The HTML parser builds a DOM tree from the tokens it receives as a
/// [`TokenSink`]. Feed it with an [`crate::HTMLTokenizer`] and take the tree
/// back with [`HTMLParser::into_parts`].
pub struct HTMLParser {
    /// `NodeId::ROOT` (index 0) is the Document node.
    pub(super) tree: DomTree,

    pub(super) options: ParserOptions,

    /// [§ 13.2.4.1 The insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-insertion-mode)
    pub(super) insertion_mode: InsertionMode,

    /// [§ 13.2.4.1](https://html.spec.whatwg.org/multipage/parsing.html#original-insertion-mode)
    pub(super) original_insertion_mode: Option<InsertionMode>,

    /// [§ 13.2.4.1](https://html.spec.whatwg.org/multipage/parsing.html#stack-of-template-insertion-modes)
    ///
    /// "The current template insertion mode is the insertion mode that was
    /// most recently pushed onto the stack of template insertion modes."
    pub(super) template_insertion_modes: Vec<InsertionMode>,

    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    ///
    /// Stores `NodeId`s into the arena. Grows downwards: the last entry is
    /// the current node.
    pub(super) stack_of_open_elements: Vec<NodeId>,

    /// [§ 13.2.4.3 The list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#the-list-of-active-formatting-elements)
    pub(super) active_formatting_elements: Vec<ActiveFormattingElement>,

    /// [§ 13.2.4.4 The element pointers](https://html.spec.whatwg.org/multipage/parsing.html#the-element-pointers)
    pub(super) head_element_pointer: Option<NodeId>,

    /// "The form element pointer points to the last form element that was
    /// opened and whose end tag has not yet been seen."
    pub(super) form_element_pointer: Option<NodeId>,

    pub(super) frameset_ok: FramesetOk,

    /// [§ 13.2.6.1](https://html.spec.whatwg.org/multipage/parsing.html#foster-parent)
    pub(super) foster_parenting: bool,

    /// [§ 13.2.6.4.10](https://html.spec.whatwg.org/multipage/parsing.html#concept-pending-table-char-tokens)
    pub(super) pending_table_character_tokens: String,

    /// Set after `pre`, `listing` and `textarea` start tags: "If the next
    /// token is a U+000A LINE FEED (LF) character token, then ignore that
    /// token and move on to the next one."
    pub(super) ignore_next_line_feed: bool,

    /// [§ 13.2.5.40](https://html.spec.whatwg.org/multipage/parsing.html#acknowledge-self-closing-flag)
    pub(super) self_closing_acknowledged: bool,

    /// Tokenizer state requested while handling the current token. Applied
    /// through the [`TokenizerControl`] before control returns.
    pub(super) pending_tokenizer_state: Option<TokenizerState>,

    /// Tokenizer position of the token being processed.
    pub(super) position: usize,

    /// Set by "stop parsing".
    pub(super) stopped: bool,

    pub(super) issues: IssueLog,
}

impl HTMLParser {
    /// Create a parser with an empty Document.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            tree: DomTree::new(),
            options,
            insertion_mode: InsertionMode::Initial,
            original_insertion_mode: None,
            template_insertion_modes: Vec::new(),
            stack_of_open_elements: Vec::new(),
            active_formatting_elements: Vec::new(),
            head_element_pointer: None,
            form_element_pointer: None,
            frameset_ok: FramesetOk::Ok,
            foster_parenting: false,
            pending_table_character_tokens: String::new(),
            ignore_next_line_feed: false,
            self_closing_acknowledged: true,
            pending_tokenizer_state: None,
            position: 0,
            stopped: false,
            issues: IssueLog::new("HTML Parser", options.collect_issues, options.max_issues),
        }
    }

    /// The tree built so far.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The current insertion mode.
    #[must_use]
    pub const fn insertion_mode(&self) -> InsertionMode {
        self.insertion_mode
    }

    /// The frameset-ok flag.
    #[must_use]
    pub const fn frameset_ok(&self) -> FramesetOk {
        self.frameset_ok
    }

    /// Whether "stop parsing" has run.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Consume the parser, returning the tree and the tree construction issues.
    #[must_use]
    pub fn into_parts(self) -> (DomTree, Vec<ParseIssue>) {
        (self.tree, self.issues.into_issues())
    }
}

// =============================================================================
// Dispatch
// =============================================================================

impl HTMLParser {
    /// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction-dispatcher)
    ///
    /// "As each token is emitted from the tokenizer, the user agent must
    /// follow the appropriate steps from the following list, known as the
    /// tree construction dispatcher"
    fn tree_construction_dispatcher(&mut self, token: &Token) {
        if self.stopped {
            return;
        }
        if std::mem::take(&mut self.ignore_next_line_feed)
            && matches!(token, Token::Character { data: '\n' })
        {
            return;
        }

        let self_closing_start_tag = matches!(
            token,
            Token::StartTag {
                self_closing: true,
                ..
            }
        );
        self.self_closing_acknowledged = !self_closing_start_tag;

        if self.use_insertion_mode_rules(token) {
            self.process_token(token);
        } else {
            self.process_token_in_foreign_content(token);
        }

        // "When a start tag token is emitted with its self-closing flag set,
        // if the flag is not acknowledged when it is processed by the tree
        // construction stage, that is a
        // non-void-html-element-start-tag-with-trailing-solidus parse error."
        if !self.self_closing_acknowledged {
            self.self_closing_acknowledged = true;
            self.issues.push(ParseIssue::tokenizer(
                ParseErrorCode::NonVoidHtmlElementStartTagWithTrailingSolidus,
                self.position,
            ));
        }
    }

    /// The dispatcher's conditions for handing a token to the current
    /// insertion mode instead of the rules for foreign content.
    fn use_insertion_mode_rules(&self, token: &Token) -> bool {
        // "If the stack of open elements is empty"
        let Some(adjusted) = self.adjusted_current_node() else {
            return true;
        };
        let Some(element) = self.tree.as_element(adjusted) else {
            return true;
        };
        // "If the adjusted current node is an element in the HTML namespace"
        if element.namespace == Namespace::Html {
            return true;
        }
        let mathml_text_point = Self::is_mathml_text_integration_point(element);
        let html_point = self.is_html_integration_point(adjusted);
        match token {
            // "If the adjusted current node is a MathML text integration point
            // and the token is a start tag whose tag name is neither "mglyph"
            // nor "malignmark""
            Token::StartTag { name, .. }
                if mathml_text_point && name != "mglyph" && name != "malignmark" =>
            {
                true
            }
            // "If the adjusted current node is a MathML annotation-xml element
            // and the token is a start tag whose tag name is "svg""
            Token::StartTag { name, .. }
                if name == "svg" && element.is_one_of(Namespace::MathMl, &["annotation-xml"]) =>
            {
                true
            }
            // "If the adjusted current node is an HTML integration point and
            // the token is a start tag" / "... and the token is a character token"
            Token::StartTag { .. } | Token::Character { .. } if html_point => true,
            Token::Character { .. } => mathml_text_point,
            // "If the token is an end-of-file token"
            Token::EndOfFile => true,
            _ => false,
        }
    }

    /// Process `token` according to the current insertion mode.
    pub(super) fn process_token(&mut self, token: &Token) {
        self.process_using_rules_for(self.insertion_mode, token);
    }

    /// [§ 13.2.4.1 The insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-insertion-mode)
    ///
    /// "When the steps below require the UA to reprocess the token, the user
    /// agent must process the token according to the rules of the current
    /// insertion mode."
    ///
    /// The mode handlers call this after switching mode, so each "reprocess
    /// the token" step maps to one call. The same borrowed token is
    /// dispatched again and the tokenizer consumes nothing.
    pub(super) fn reprocess_token(&mut self, token: &Token) {
        self.process_token(token);
    }

    /// "Process the token using the rules for the X insertion mode", without
    /// switching to it.
    pub(super) fn process_using_rules_for(&mut self, mode: InsertionMode, token: &Token) {
        if self.stopped {
            return;
        }
        match mode {
            InsertionMode::Initial => self.handle_initial_mode(token),
            InsertionMode::BeforeHtml => self.handle_before_html_mode(token),
            InsertionMode::BeforeHead => self.handle_before_head_mode(token),
            InsertionMode::InHead => self.handle_in_head_mode(token),
            InsertionMode::InHeadNoscript => self.handle_in_head_noscript_mode(token),
            InsertionMode::AfterHead => self.handle_after_head_mode(token),
            InsertionMode::InBody => self.handle_in_body_mode(token),
            InsertionMode::Text => self.handle_text_mode(token),
            InsertionMode::InTable => self.handle_in_table_mode(token),
            InsertionMode::InTableText => self.handle_in_table_text_mode(token),
            InsertionMode::InCaption => self.handle_in_caption_mode(token),
            InsertionMode::InColumnGroup => self.handle_in_column_group_mode(token),
            InsertionMode::InTableBody => self.handle_in_table_body_mode(token),
            InsertionMode::InRow => self.handle_in_row_mode(token),
            InsertionMode::InCell => self.handle_in_cell_mode(token),
            InsertionMode::InSelect => self.handle_in_select_mode(token),
            InsertionMode::InSelectInTable => self.handle_in_select_in_table_mode(token),
            InsertionMode::InTemplate => self.handle_in_template_mode(token),
            InsertionMode::AfterBody => self.handle_after_body_mode(token),
            InsertionMode::InFrameset => self.handle_in_frameset_mode(token),
            InsertionMode::AfterFrameset => self.handle_after_frameset_mode(token),
            InsertionMode::AfterAfterBody => self.handle_after_after_body_mode(token),
            InsertionMode::AfterAfterFrameset => self.handle_after_after_frameset_mode(token),
        }
    }

    /// Switch the insertion mode.
    pub(super) fn switch_mode(&mut self, mode: InsertionMode) {
        log::trace!("insertion mode {} -> {mode}", self.insertion_mode);
        self.insertion_mode = mode;
    }

    /// Ask the tokenizer to switch state before it consumes the next character.
    pub(super) const fn switch_tokenizer_to(&mut self, state: TokenizerState) {
        self.pending_tokenizer_state = Some(state);
    }

    /// [§ 13.2.7 The end](https://html.spec.whatwg.org/multipage/parsing.html#stop-parsing)
    ///
    /// "Pop all the nodes off the stack of open elements." Scripts, deferred
    /// loads and events are not modelled, so nothing else happens.
    pub(super) fn stop_parsing(&mut self) {
        self.stack_of_open_elements.clear();
        self.stopped = true;
    }
}

impl TokenSink for HTMLParser {
    fn process_token(&mut self, token: Token, control: &mut dyn TokenizerControl) {
        self.position = control.position();
        self.tree_construction_dispatcher(&token);
        if let Some(state) = self.pending_tokenizer_state.take() {
            control.switch_to(state);
        }
    }

    fn cdata_allowed(&self) -> bool {
        self.adjusted_current_node()
            .and_then(|id| self.tree.as_element(id))
            .is_some_and(|element| element.namespace != Namespace::Html)
    }
}

// =============================================================================
// Node queries
// =============================================================================

impl HTMLParser {
    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#current-node)
    ///
    /// "The current node is the bottommost node in this stack of open elements."
    pub(super) fn current_node(&self) -> Option<NodeId> {
        self.stack_of_open_elements.last().copied()
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#adjusted-current-node)
    ///
    /// "The adjusted current node is the context element if the parser was
    /// created as part of the HTML fragment parsing algorithm and the stack
    /// of open elements has only one element in it; otherwise, the adjusted
    /// current node is the current node." Fragment parsing is not offered,
    /// so this is always the current node.
    pub(super) fn adjusted_current_node(&self) -> Option<NodeId> {
        self.current_node()
    }

    pub(super) fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.as_element(id)
    }

    /// True for an HTML element named `name`.
    pub(super) fn is_html(&self, id: NodeId, name: &str) -> bool {
        self.tree.is_html_element(id, name)
    }

    /// True for an HTML element whose name is one of `names`.
    pub(super) fn is_html_one_of(&self, id: NodeId, names: &[&str]) -> bool {
        self.element(id)
            .is_some_and(|element| element.is_one_of(Namespace::Html, names))
    }

    pub(super) fn current_node_is(&self, name: &str) -> bool {
        self.current_node().is_some_and(|id| self.is_html(id, name))
    }

    pub(super) fn current_node_is_one_of(&self, names: &[&str]) -> bool {
        self.current_node()
            .is_some_and(|id| self.is_html_one_of(id, names))
    }

    /// Whether the stack holds an HTML element named `name` anywhere.
    pub(super) fn stack_contains(&self, name: &str) -> bool {
        self.stack_of_open_elements
            .iter()
            .any(|&id| self.is_html(id, name))
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// "U+0009 CHARACTER TABULATION, U+000A LINE FEED (LF), U+000C FORM FEED
    /// (FF), U+000D CARRIAGE RETURN (CR), or U+0020 SPACE"
    pub(super) const fn is_whitespace(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
    }

    /// The name and attributes of a tag token. Other tokens have neither.
    pub(super) fn tag_parts(token: &Token) -> (&str, &[Attribute]) {
        match token {
            Token::StartTag {
                name, attributes, ..
            }
            | Token::EndTag {
                name, attributes, ..
            } => (name, attributes),
            _ => ("", &[]),
        }
    }
}

// =============================================================================
// Issues
// =============================================================================

impl HTMLParser {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Record a tree construction parse error. Recovery is the caller's next
    /// step.
    pub(super) fn parse_error(&mut self, message: &str) {
        self.issues
            .push(ParseIssue::tree_construction(message, self.position));
    }

    /// Record that the parser reached something it does not do (script
    /// execution) and carried on with the fallback.
    pub(super) fn unsupported(&mut self, message: &str) {
        self.issues.push(ParseIssue::unsupported(message, self.position));
    }

    /// [§ 13.2.5.40](https://html.spec.whatwg.org/multipage/parsing.html#acknowledge-self-closing-flag)
    pub(super) const fn acknowledge_self_closing_flag(&mut self) {
        self.self_closing_acknowledged = true;
    }
}
