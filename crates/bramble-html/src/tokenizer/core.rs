use super::sink::TokenSink;
use super::state::TokenizerState;
use super::token::CurrentToken;
use crate::error::{IssueLog, ParseIssue};
use crate::input::InputStream;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
///
/// Tokens go straight to the sink `S` as they are emitted. The sink may
/// switch the tokenizer state through [`super::TokenizerControl`] before the
/// next character is consumed.
pub struct HTMLTokenizer<S: TokenSink> {
    pub(super) sink: S,
    pub(super) input: InputStream,
    pub(super) state: TokenizerState,

    /// [§ 13.2.5.72](https://html.spec.whatwg.org/multipage/parsing.html#return-state)
    /// "The return state is used by the character reference states."
    pub(super) return_state: TokenizerState,

    pub(super) current_input_character: Option<char>,
    pub(super) current_token: Option<CurrentToken>,

    /// "The last start tag token emitted is used as part of the tree construction stage
    /// and in the RCDATA, RAWTEXT, and script data states."
    pub(super) last_start_tag_name: Option<String>,

    /// [§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    pub(super) temporary_buffer: String,

    /// [§ 13.2.5.75](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-code)
    pub(super) character_reference_code: u32,

    pub(super) eof_emitted: bool,
    pub(super) issues: IssueLog,
}

impl<S: TokenSink> HTMLTokenizer<S> {
    /// Create a new tokenizer for the given input.
    ///
    /// Newlines are normalized here. "The initial state is the data state."
    pub fn new(input: &str, sink: S) -> Self {
        Self {
            sink,
            input: InputStream::new(input),
            state: TokenizerState::Data,
            return_state: TokenizerState::Data,
            current_input_character: None,
            current_token: None,
            last_start_tag_name: None,
            temporary_buffer: String::new(),
            character_reference_code: 0,
            eof_emitted: false,
            issues: IssueLog::new("HTML Tokenizer", true, None),
        }
    }

    /// Start in `state` instead of the data state.
    #[must_use]
    pub fn with_state(mut self, state: TokenizerState) -> Self {
        self.state = state;
        self
    }

    /// Pretend a start tag named `name` was the last one emitted, so end
    /// tags in the raw text states can be appropriate.
    #[must_use]
    pub fn with_last_start_tag(mut self, name: &str) -> Self {
        self.last_start_tag_name = Some(name.to_string());
        self
    }

    /// Configure how parse errors are kept.
    #[must_use]
    pub(crate) fn with_issue_log(mut self, collect: bool, max: Option<usize>) -> Self {
        self.issues = IssueLog::new("HTML Tokenizer", collect, max);
        self
    }

    /// Run the tokenizer until the end-of-file token has been emitted.
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Advance the state machine by one state.
    ///
    /// Consumes one code point (or re-delivers the current one after a
    /// reconsume) and runs the handler for the current state. The few states
    /// that only look ahead consume nothing here. Returns false once the
    /// end-of-file token has been emitted.
    pub fn step(&mut self) -> bool {
        if self.eof_emitted {
            return false;
        }
        match self.state {
            TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
            TokenizerState::NamedCharacterReference => {
                self.handle_named_character_reference_state();
            }
            TokenizerState::NumericCharacterReferenceEnd => {
                self.handle_numeric_character_reference_end_state();
            }
            state => {
                self.current_input_character = self.input.consume();
                self.dispatch(state);
            }
        }
        !self.eof_emitted
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Code points consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.input.position()
    }

    /// The sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the tokenizer, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Consume the tokenizer, returning the sink and the recorded parse errors.
    pub fn into_parts(self) -> (S, Vec<ParseIssue>) {
        (self.sink, self.issues.into_issues())
    }

    fn dispatch(&mut self, state: TokenizerState) {
        match state {
            TokenizerState::Data => self.handle_data_state(),
            TokenizerState::RCDATA => self.handle_rcdata_state(),
            TokenizerState::RAWTEXT => self.handle_rawtext_state(),
            TokenizerState::ScriptData => self.handle_script_data_state(),
            TokenizerState::PLAINTEXT => self.handle_plaintext_state(),
            TokenizerState::TagOpen => self.handle_tag_open_state(),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
            TokenizerState::TagName => self.handle_tag_name_state(),
            TokenizerState::RCDATALessThanSign => {
                self.handle_raw_less_than_sign_state(TokenizerState::RCDATA);
            }
            TokenizerState::RCDATAEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::RCDATA,
                TokenizerState::RCDATAEndTagName,
            ),
            TokenizerState::RCDATAEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::RCDATA);
            }
            TokenizerState::RAWTEXTLessThanSign => {
                self.handle_raw_less_than_sign_state(TokenizerState::RAWTEXT);
            }
            TokenizerState::RAWTEXTEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::RAWTEXT,
                TokenizerState::RAWTEXTEndTagName,
            ),
            TokenizerState::RAWTEXTEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::RAWTEXT);
            }
            TokenizerState::ScriptDataLessThanSign => {
                self.handle_script_data_less_than_sign_state();
            }
            TokenizerState::ScriptDataEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::ScriptData,
                TokenizerState::ScriptDataEndTagName,
            ),
            TokenizerState::ScriptDataEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::ScriptData);
            }
            TokenizerState::ScriptDataEscapeStart => self.handle_script_data_escape_start_state(),
            TokenizerState::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_dash_state();
            }
            TokenizerState::ScriptDataEscaped => self.handle_script_data_escaped_state(),
            TokenizerState::ScriptDataEscapedDash => self.handle_script_data_escaped_dash_state(),
            TokenizerState::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataEscapedEndTagOpen => self.handle_raw_end_tag_open_state(
                TokenizerState::ScriptDataEscaped,
                TokenizerState::ScriptDataEscapedEndTagName,
            ),
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.handle_raw_end_tag_name_state(TokenizerState::ScriptDataEscaped);
            }
            TokenizerState::ScriptDataDoubleEscapeStart => self.handle_double_escape_boundary(
                TokenizerState::ScriptDataDoubleEscaped,
                TokenizerState::ScriptDataEscaped,
            ),
            TokenizerState::ScriptDataDoubleEscaped => {
                self.handle_script_data_double_escaped_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataDoubleEscapeEnd => self.handle_double_escape_boundary(
                TokenizerState::ScriptDataEscaped,
                TokenizerState::ScriptDataDoubleEscaped,
            ),
            TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
            TokenizerState::AttributeName => self.handle_attribute_name_state(),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state('"', state);
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state('\'', state);
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state();
            }
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
            TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            TokenizerState::CommentStart => self.handle_comment_start_state(),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
            TokenizerState::Comment => self.handle_comment_state(),
            TokenizerState::CommentLessThanSign => self.handle_comment_less_than_sign_state(),
            TokenizerState::CommentLessThanSignBang => {
                self.handle_comment_less_than_sign_bang_state();
            }
            TokenizerState::CommentLessThanSignBangDash => {
                self.handle_comment_less_than_sign_bang_dash_state();
            }
            TokenizerState::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state();
            }
            TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
            TokenizerState::CommentEnd => self.handle_comment_end_state(),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang_state(),
            TokenizerState::DOCTYPE => self.handle_doctype_state(),
            TokenizerState::BeforeDOCTYPEName => self.handle_before_doctype_name_state(),
            TokenizerState::DOCTYPEName => self.handle_doctype_name_state(),
            TokenizerState::AfterDOCTYPEName => self.handle_after_doctype_name_state(),
            TokenizerState::AfterDOCTYPEPublicKeyword => {
                self.handle_after_doctype_keyword_state(true);
            }
            TokenizerState::BeforeDOCTYPEPublicIdentifier => {
                self.handle_before_doctype_identifier_state(true);
            }
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_quoted_state(true, '"');
            }
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted => {
                self.handle_doctype_identifier_quoted_state(true, '\'');
            }
            TokenizerState::AfterDOCTYPEPublicIdentifier => {
                self.handle_after_doctype_public_identifier_state();
            }
            TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state();
            }
            TokenizerState::AfterDOCTYPESystemKeyword => {
                self.handle_after_doctype_keyword_state(false);
            }
            TokenizerState::BeforeDOCTYPESystemIdentifier => {
                self.handle_before_doctype_identifier_state(false);
            }
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_quoted_state(false, '"');
            }
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted => {
                self.handle_doctype_identifier_quoted_state(false, '\'');
            }
            TokenizerState::AfterDOCTYPESystemIdentifier => {
                self.handle_after_doctype_system_identifier_state();
            }
            TokenizerState::BogusDOCTYPE => self.handle_bogus_doctype_state(),
            TokenizerState::CDATASection => self.handle_cdata_section_state(),
            TokenizerState::CDATASectionBracket => self.handle_cdata_section_bracket_state(),
            TokenizerState::CDATASectionEnd => self.handle_cdata_section_end_state(),
            TokenizerState::CharacterReference => self.handle_character_reference_state(),
            TokenizerState::AmbiguousAmpersand => self.handle_ambiguous_ampersand_state(),
            TokenizerState::NumericCharacterReference => {
                self.handle_numeric_character_reference_state();
            }
            TokenizerState::HexadecimalCharacterReferenceStart => {
                self.handle_numeric_character_reference_start_state(16);
            }
            TokenizerState::DecimalCharacterReferenceStart => {
                self.handle_numeric_character_reference_start_state(10);
            }
            TokenizerState::HexadecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(16);
            }
            TokenizerState::DecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(10);
            }
            // These three look ahead without consuming and are handled in
            // `step` before a character is taken.
            TokenizerState::MarkupDeclarationOpen
            | TokenizerState::NamedCharacterReference
            | TokenizerState::NumericCharacterReferenceEnd => {
                self.input.reconsume();
            }
        }
    }
}
