//! Parse errors.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "This specification defines the parsing rules for HTML documents, whether
//! they are syntactically correct or not." Nothing here is fatal: every
//! issue is recorded and parsing carries on.

use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

use bramble_common::warning::{log_parse_error, warn_once};

/// Which stage reported an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// A tokenizer parse error with a standard error code.
    Tokenizer,
    /// A tree construction parse error.
    TreeConstruction,
    /// Something the engine deliberately does not do (script execution,
    /// `document.write`); the parser continued with its fallback.
    Unsupported,
}

/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
///
/// The tokenizer error codes, displayed in their standard kebab-case form
/// (`unexpected-null-character`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ParseErrorCode {
    AbruptClosingOfEmptyComment,
    AbruptDoctypePublicIdentifier,
    AbruptDoctypeSystemIdentifier,
    AbsenceOfDigitsInNumericCharacterReference,
    CdataInHtmlContent,
    CharacterReferenceOutsideUnicodeRange,
    ControlCharacterReference,
    DuplicateAttribute,
    EndTagWithAttributes,
    EndTagWithTrailingSolidus,
    EofBeforeTagName,
    EofInCdata,
    EofInComment,
    EofInDoctype,
    EofInScriptHtmlCommentLikeText,
    EofInTag,
    IncorrectlyClosedComment,
    IncorrectlyOpenedComment,
    InvalidCharacterSequenceAfterDoctypeName,
    InvalidFirstCharacterOfTagName,
    MissingAttributeValue,
    MissingDoctypeName,
    MissingDoctypePublicIdentifier,
    MissingDoctypeSystemIdentifier,
    MissingEndTagName,
    MissingQuoteBeforeDoctypePublicIdentifier,
    MissingQuoteBeforeDoctypeSystemIdentifier,
    MissingSemicolonAfterCharacterReference,
    MissingWhitespaceAfterDoctypePublicKeyword,
    MissingWhitespaceAfterDoctypeSystemKeyword,
    MissingWhitespaceBeforeDoctypeName,
    MissingWhitespaceBetweenAttributes,
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    NestedComment,
    NoncharacterCharacterReference,
    NonVoidHtmlElementStartTagWithTrailingSolidus,
    NullCharacterReference,
    SurrogateCharacterReference,
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    UnexpectedCharacterInAttributeName,
    UnexpectedCharacterInUnquotedAttributeValue,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedNullCharacter,
    UnexpectedQuestionMarkInsteadOfTagName,
    UnexpectedSolidusInTag,
    UnknownNamedCharacterReference,
}

/// A recoverable problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} issue at {position}: {message}")]
pub struct ParseIssue {
    /// Which stage reported it.
    pub kind: IssueKind,
    /// The standard error code, for tokenizer errors.
    pub code: Option<ParseErrorCode>,
    /// Human-readable description. For coded errors this is the code itself.
    pub message: String,
    /// Code point offset into the normalized input.
    pub position: usize,
}

impl ParseIssue {
    /// A tokenizer error with a standard code.
    #[must_use]
    pub fn tokenizer(code: ParseErrorCode, position: usize) -> Self {
        Self {
            kind: IssueKind::Tokenizer,
            code: Some(code),
            message: code.to_string(),
            position,
        }
    }

    /// A tree construction error.
    #[must_use]
    pub fn tree_construction(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: IssueKind::TreeConstruction,
            code: None,
            message: message.into(),
            position,
        }
    }

    /// A feature the engine does not provide.
    #[must_use]
    pub fn unsupported(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: IssueKind::Unsupported,
            code: None,
            message: message.into(),
            position,
        }
    }
}

/// Collects issues for one parse, honouring the collection options.
#[derive(Debug, Clone)]
pub(crate) struct IssueLog {
    component: &'static str,
    collect: bool,
    max: Option<usize>,
    issues: Vec<ParseIssue>,
}

impl IssueLog {
    pub(crate) const fn new(component: &'static str, collect: bool, max: Option<usize>) -> Self {
        Self {
            component,
            collect,
            max,
            issues: Vec::new(),
        }
    }

    /// Log the issue and keep it if collection allows.
    pub(crate) fn push(&mut self, issue: ParseIssue) {
        match issue.kind {
            IssueKind::Unsupported => warn_once(self.component, &issue.message),
            IssueKind::Tokenizer | IssueKind::TreeConstruction => {
                log_parse_error(self.component, &issue.message, issue.position);
            }
        }
        if self.collect && self.max.is_none_or(|max| self.issues.len() < max) {
            self.issues.push(issue);
        }
    }

    pub(crate) fn into_issues(self) -> Vec<ParseIssue> {
        self.issues
    }
}
