use core::fmt;

/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// Tokens are immutable once emitted. The tokenizer builds them in a
/// [`CurrentToken`] and converts at emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag."
    Doctype {
        /// "a name"
        name: Option<String>,
        /// "a public identifier"
        public_identifier: Option<String>,
        /// "a system identifier"
        system_identifier: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes, each of which has a name and a value."
    StartTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Same structure as a start tag.
    EndTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// "Comment and character tokens have data."
    Character {
        /// "data"
        data: char,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// A start tag with the given name and no attributes.
    #[must_use]
    pub fn start_tag(name: &str) -> Self {
        Self::StartTag {
            name: name.to_string(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// An end tag with the given name.
    #[must_use]
    pub fn end_tag(name: &str) -> Self {
        Self::EndTag {
            name: name.to_string(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// True for a start tag named `name`.
    #[must_use]
    pub fn is_start_tag(&self, name: &str) -> bool {
        matches!(self, Self::StartTag { name: n, .. } if n == name)
    }

    /// True for an end tag named `name`.
    #[must_use]
    pub fn is_end_tag(&self, name: &str) -> bool {
        matches!(self, Self::EndTag { name: n, .. } if n == name)
    }

    /// Value of the named attribute on a tag token.
    #[must_use]
    pub fn attribute(&self, attribute_name: &str) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => attributes
                .iter()
                .find(|attr| attr.name == attribute_name)
                .map(|attr| attr.value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                if let Some(pub_id) = public_identifier {
                    write!(f, " PUBLIC \"{pub_id}\"")?;
                }
                if let Some(sys_id) = system_identifier {
                    write!(f, " SYSTEM \"{sys_id}\"")?;
                }
                if *force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name, .. } => write!(f, "</{name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => match data {
                '\n' => write!(f, "Character(\\n)"),
                '\t' => write!(f, "Character(\\t)"),
                ' ' => write!(f, "Character(SPACE)"),
                c => write!(f, "Character({c})"),
            },
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}

/// Whether a tag under construction is a start or an end tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>`
    Start,
    /// `</name ...>`
    End,
}

/// A start or end tag being built by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBuilder {
    /// Start or end.
    pub kind: TagKind,
    /// Tag name so far.
    pub name: String,
    /// Self-closing flag.
    pub self_closing: bool,
    /// Attributes so far. The last entry is the current attribute.
    pub attributes: Vec<Attribute>,
    /// Set when the current attribute duplicated an earlier name and must be
    /// dropped instead of receiving a value.
    current_is_duplicate: bool,
}

impl TagBuilder {
    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset (its other state is that it be set), and its attributes list must
    /// be empty."
    #[must_use]
    pub const fn new(kind: TagKind) -> Self {
        Self {
            kind,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
            current_is_duplicate: false,
        }
    }

    /// "Start a new attribute in the current tag token. Set that attribute
    /// name and value to the empty string."
    pub fn start_attribute(&mut self) {
        self.drop_duplicate();
        self.attributes.push(Attribute::new("", ""));
    }

    /// "Append the current input character to the current attribute's name."
    pub fn push_attribute_name(&mut self, c: char) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.name.push(c);
        }
    }

    /// "Append the current input character to the current attribute's value."
    pub fn push_attribute_value(&mut self, c: char) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.value.push(c);
        }
    }

    /// Append a string to the current attribute's value.
    pub fn push_attribute_value_str(&mut self, s: &str) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.value.push_str(s);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state (and before
    /// emitting the tag token, if appropriate), the complete attribute's name
    /// must be compared to the other attributes on the same token; if there is
    /// already an attribute on the token with the exact same name, then this
    /// is a duplicate-attribute parse error and the new attribute must be
    /// removed from the token."
    ///
    /// Returns true on a duplicate. The attribute stays in place so its value
    /// can still be consumed, and is dropped when the next attribute starts or
    /// the token is emitted.
    pub fn check_duplicate(&mut self) -> bool {
        let Some((current, earlier)) = self.attributes.split_last() else {
            return false;
        };
        self.current_is_duplicate = earlier.iter().any(|attr| attr.name == current.name);
        self.current_is_duplicate
    }

    fn drop_duplicate(&mut self) {
        if self.current_is_duplicate {
            let _ = self.attributes.pop();
            self.current_is_duplicate = false;
        }
    }

    /// Finish the tag.
    #[must_use]
    pub fn finish(mut self) -> Token {
        self.drop_duplicate();
        match self.kind {
            TagKind::Start => Token::StartTag {
                name: self.name,
                self_closing: self.self_closing,
                attributes: self.attributes,
            },
            TagKind::End => Token::EndTag {
                name: self.name,
                self_closing: self.self_closing,
                attributes: self.attributes,
            },
        }
    }
}

/// A DOCTYPE being built by the tokenizer.
///
/// "When a DOCTYPE token is created, its name, public identifier, and system
/// identifier must be marked as missing (which is a distinct state from the
/// empty string), and the force-quirks flag must be set to off."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctypeBuilder {
    /// Name, if any.
    pub name: Option<String>,
    /// Public identifier, if any.
    pub public_identifier: Option<String>,
    /// System identifier, if any.
    pub system_identifier: Option<String>,
    /// Force-quirks flag.
    pub force_quirks: bool,
}

impl DoctypeBuilder {
    /// Finish the DOCTYPE.
    #[must_use]
    pub fn finish(self) -> Token {
        Token::Doctype {
            name: self.name,
            public_identifier: self.public_identifier,
            system_identifier: self.system_identifier,
            force_quirks: self.force_quirks,
        }
    }
}

/// The tokenizer's single in-progress token slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentToken {
    /// A start or end tag.
    Tag(TagBuilder),
    /// A comment's data.
    Comment(String),
    /// A DOCTYPE.
    Doctype(DoctypeBuilder),
}

impl CurrentToken {
    /// Convert into the immutable token.
    #[must_use]
    pub fn finish(self) -> Token {
        match self {
            Self::Tag(tag) => tag.finish(),
            Self::Comment(data) => Token::Comment { data },
            Self::Doctype(doctype) => doctype.finish(),
        }
    }
}
