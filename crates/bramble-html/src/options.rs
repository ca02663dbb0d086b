//! Parser configuration.

use serde::{Deserialize, Serialize};

/// How the input bytes are turned into code points.
///
/// [§ 13.2.3 The input byte stream](https://html.spec.whatwg.org/multipage/parsing.html#the-input-byte-stream)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputEncoding {
    /// Sniff a byte order mark, then try UTF-8, then fall back to Latin-1.
    #[default]
    Auto,
    /// UTF-8 with replacement of malformed sequences.
    Utf8,
    /// Each byte is the code point of the same value.
    Latin1,
    /// The windows-1252 legacy encoding.
    Windows1252,
}

/// Options for a single parse.
///
/// All fields have sensible defaults; the `with_*` methods build on
/// [`ParserOptions::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// [§ 13.2.6.4.4](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    ///
    /// "The scripting flag is set to "enabled" if scripting was enabled for
    /// the Document with which the parser is associated when the parser was
    /// created, and "disabled" otherwise."
    ///
    /// Scripts are never run; the flag only changes how `noscript` parses.
    pub scripting: bool,

    /// [§ 13.2.6.4.1](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
    ///
    /// "If the document is not an iframe srcdoc document ..." quirks are
    /// never applied to srcdoc documents.
    pub iframe_srcdoc: bool,

    /// How input bytes are decoded.
    pub encoding: InputEncoding,

    /// Keep parse issues in the returned output (they are always logged).
    pub collect_issues: bool,

    /// Upper bound on stored issues. `None` keeps all of them.
    pub max_issues: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            scripting: false,
            iframe_srcdoc: false,
            encoding: InputEncoding::Auto,
            collect_issues: true,
            max_issues: None,
        }
    }
}

impl ParserOptions {
    /// Parse as if scripting were enabled.
    #[must_use]
    pub const fn with_scripting(mut self, scripting: bool) -> Self {
        self.scripting = scripting;
        self
    }

    /// Treat the document as an iframe srcdoc document.
    #[must_use]
    pub const fn with_iframe_srcdoc(mut self, iframe_srcdoc: bool) -> Self {
        self.iframe_srcdoc = iframe_srcdoc;
        self
    }

    /// Choose how bytes are decoded.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: InputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Turn issue collection on or off.
    #[must_use]
    pub const fn with_collect_issues(mut self, collect_issues: bool) -> Self {
        self.collect_issues = collect_issues;
        self
    }

    /// Cap the number of stored issues.
    #[must_use]
    pub const fn with_max_issues(mut self, max_issues: Option<usize>) -> Self {
        self.max_issues = max_issues;
        self
    }
}
