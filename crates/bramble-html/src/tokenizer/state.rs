//! Tokenizer states.

use strum_macros::Display;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// One variant per state of the tokenizer state machine. "The initial state
/// is the data state."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[allow(clippy::upper_case_acronyms)]
pub enum TokenizerState {
    /// Data state ([§ 13.2.5.1](https://html.spec.whatwg.org/multipage/parsing.html#data-state))
    Data,
    /// RCDATA state ([§ 13.2.5.2](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state))
    RCDATA,
    /// RAWTEXT state ([§ 13.2.5.3](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state))
    RAWTEXT,
    /// Script data state ([§ 13.2.5.4](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state))
    ScriptData,
    /// PLAINTEXT state ([§ 13.2.5.5](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state))
    PLAINTEXT,
    /// Tag open state ([§ 13.2.5.6](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state))
    TagOpen,
    /// End tag open state ([§ 13.2.5.7](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state))
    EndTagOpen,
    /// Tag name state ([§ 13.2.5.8](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state))
    TagName,
    /// RCDATA less-than sign state ([§ 13.2.5.9](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state))
    RCDATALessThanSign,
    /// RCDATA end tag open state ([§ 13.2.5.10](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state))
    RCDATAEndTagOpen,
    /// RCDATA end tag name state ([§ 13.2.5.11](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state))
    RCDATAEndTagName,
    /// RAWTEXT less-than sign state ([§ 13.2.5.12](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state))
    RAWTEXTLessThanSign,
    /// RAWTEXT end tag open state ([§ 13.2.5.13](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state))
    RAWTEXTEndTagOpen,
    /// RAWTEXT end tag name state ([§ 13.2.5.14](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state))
    RAWTEXTEndTagName,
    /// Script data less-than sign state ([§ 13.2.5.15](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state))
    ScriptDataLessThanSign,
    /// Script data end tag open state ([§ 13.2.5.16](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state))
    ScriptDataEndTagOpen,
    /// Script data end tag name state ([§ 13.2.5.17](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state))
    ScriptDataEndTagName,
    /// Script data escape start state ([§ 13.2.5.18](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state))
    ScriptDataEscapeStart,
    /// Script data escape start dash state ([§ 13.2.5.19](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state))
    ScriptDataEscapeStartDash,
    /// Script data escaped state ([§ 13.2.5.20](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state))
    ScriptDataEscaped,
    /// Script data escaped dash state ([§ 13.2.5.21](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state))
    ScriptDataEscapedDash,
    /// Script data escaped dash dash state ([§ 13.2.5.22](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state))
    ScriptDataEscapedDashDash,
    /// Script data escaped less-than sign state ([§ 13.2.5.23](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state))
    ScriptDataEscapedLessThanSign,
    /// Script data escaped end tag open state ([§ 13.2.5.24](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state))
    ScriptDataEscapedEndTagOpen,
    /// Script data escaped end tag name state ([§ 13.2.5.25](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state))
    ScriptDataEscapedEndTagName,
    /// Script data double escape start state ([§ 13.2.5.26](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state))
    ScriptDataDoubleEscapeStart,
    /// Script data double escaped state ([§ 13.2.5.27](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state))
    ScriptDataDoubleEscaped,
    /// Script data double escaped dash state ([§ 13.2.5.28](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state))
    ScriptDataDoubleEscapedDash,
    /// Script data double escaped dash dash state ([§ 13.2.5.29](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state))
    ScriptDataDoubleEscapedDashDash,
    /// Script data double escaped less-than sign state ([§ 13.2.5.30](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state))
    ScriptDataDoubleEscapedLessThanSign,
    /// Script data double escape end state ([§ 13.2.5.31](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state))
    ScriptDataDoubleEscapeEnd,
    /// Before attribute name state ([§ 13.2.5.32](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state))
    BeforeAttributeName,
    /// Attribute name state ([§ 13.2.5.33](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state))
    AttributeName,
    /// After attribute name state ([§ 13.2.5.34](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state))
    AfterAttributeName,
    /// Before attribute value state ([§ 13.2.5.35](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state))
    BeforeAttributeValue,
    /// Attribute value (double-quoted) state ([§ 13.2.5.36](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state))
    AttributeValueDoubleQuoted,
    /// Attribute value (single-quoted) state ([§ 13.2.5.37](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state))
    AttributeValueSingleQuoted,
    /// Attribute value (unquoted) state ([§ 13.2.5.38](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state))
    AttributeValueUnquoted,
    /// After attribute value (quoted) state ([§ 13.2.5.39](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state))
    AfterAttributeValueQuoted,
    /// Self-closing start tag state ([§ 13.2.5.40](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state))
    SelfClosingStartTag,
    /// Bogus comment state ([§ 13.2.5.41](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state))
    BogusComment,
    /// Markup declaration open state ([§ 13.2.5.42](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state))
    MarkupDeclarationOpen,
    /// Comment start state ([§ 13.2.5.43](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state))
    CommentStart,
    /// Comment start dash state ([§ 13.2.5.44](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state))
    CommentStartDash,
    /// Comment state ([§ 13.2.5.45](https://html.spec.whatwg.org/multipage/parsing.html#comment-state))
    Comment,
    /// Comment less-than sign state ([§ 13.2.5.46](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state))
    CommentLessThanSign,
    /// Comment less-than sign bang state ([§ 13.2.5.47](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state))
    CommentLessThanSignBang,
    /// Comment less-than sign bang dash state ([§ 13.2.5.48](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state))
    CommentLessThanSignBangDash,
    /// Comment less-than sign bang dash dash state ([§ 13.2.5.49](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state))
    CommentLessThanSignBangDashDash,
    /// Comment end dash state ([§ 13.2.5.50](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state))
    CommentEndDash,
    /// Comment end state ([§ 13.2.5.51](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state))
    CommentEnd,
    /// Comment end bang state ([§ 13.2.5.52](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state))
    CommentEndBang,
    /// DOCTYPE state ([§ 13.2.5.53](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state))
    DOCTYPE,
    /// Before DOCTYPE name state ([§ 13.2.5.54](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state))
    BeforeDOCTYPEName,
    /// DOCTYPE name state ([§ 13.2.5.55](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state))
    DOCTYPEName,
    /// After DOCTYPE name state ([§ 13.2.5.56](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state))
    AfterDOCTYPEName,
    /// After DOCTYPE public keyword state ([§ 13.2.5.57](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state))
    AfterDOCTYPEPublicKeyword,
    /// Before DOCTYPE public identifier state ([§ 13.2.5.58](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state))
    BeforeDOCTYPEPublicIdentifier,
    /// DOCTYPE public identifier (double-quoted) state ([§ 13.2.5.59](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state))
    DOCTYPEPublicIdentifierDoubleQuoted,
    /// DOCTYPE public identifier (single-quoted) state ([§ 13.2.5.60](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state))
    DOCTYPEPublicIdentifierSingleQuoted,
    /// After DOCTYPE public identifier state ([§ 13.2.5.61](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state))
    AfterDOCTYPEPublicIdentifier,
    /// Between DOCTYPE public and system identifiers state ([§ 13.2.5.62](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state))
    BetweenDOCTYPEPublicAndSystemIdentifiers,
    /// After DOCTYPE system keyword state ([§ 13.2.5.63](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state))
    AfterDOCTYPESystemKeyword,
    /// Before DOCTYPE system identifier state ([§ 13.2.5.64](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state))
    BeforeDOCTYPESystemIdentifier,
    /// DOCTYPE system identifier (double-quoted) state ([§ 13.2.5.65](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state))
    DOCTYPESystemIdentifierDoubleQuoted,
    /// DOCTYPE system identifier (single-quoted) state ([§ 13.2.5.66](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state))
    DOCTYPESystemIdentifierSingleQuoted,
    /// After DOCTYPE system identifier state ([§ 13.2.5.67](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state))
    AfterDOCTYPESystemIdentifier,
    /// Bogus DOCTYPE state ([§ 13.2.5.68](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state))
    BogusDOCTYPE,
    /// CDATA section state ([§ 13.2.5.69](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state))
    CDATASection,
    /// CDATA section bracket state ([§ 13.2.5.70](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state))
    CDATASectionBracket,
    /// CDATA section end state ([§ 13.2.5.71](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state))
    CDATASectionEnd,
    /// Character reference state ([§ 13.2.5.72](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state))
    CharacterReference,
    /// Named character reference state ([§ 13.2.5.73](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state))
    NamedCharacterReference,
    /// Ambiguous ampersand state ([§ 13.2.5.74](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state))
    AmbiguousAmpersand,
    /// Numeric character reference state ([§ 13.2.5.75](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state))
    NumericCharacterReference,
    /// Hexadecimal character reference start state ([§ 13.2.5.76](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state))
    HexadecimalCharacterReferenceStart,
    /// Decimal character reference start state ([§ 13.2.5.77](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state))
    DecimalCharacterReferenceStart,
    /// Hexadecimal character reference state ([§ 13.2.5.78](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state))
    HexadecimalCharacterReference,
    /// Decimal character reference state ([§ 13.2.5.79](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state))
    DecimalCharacterReference,
    /// Numeric character reference end state ([§ 13.2.5.80](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state))
    NumericCharacterReferenceEnd,
}
