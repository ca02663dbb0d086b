//! Elements, attributes and the element interface factory.

use crate::NodeId;

/// [§ 1.2 Namespaces](https://infra.spec.whatwg.org/#namespaces)
///
/// The namespaces the HTML parser can put on elements and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `http://www.w3.org/1999/xhtml`
    Html,
    /// `http://www.w3.org/2000/svg`
    Svg,
    /// `http://www.w3.org/1998/Math/MathML`
    MathMl,
    /// `http://www.w3.org/1999/xlink`
    XLink,
    /// `http://www.w3.org/XML/1998/namespace`
    Xml,
    /// `http://www.w3.org/2000/xmlns/`
    Xmlns,
}

impl Namespace {
    /// The namespace URL.
    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            Self::Html => "http://www.w3.org/1999/xhtml",
            Self::Svg => "http://www.w3.org/2000/svg",
            Self::MathMl => "http://www.w3.org/1998/Math/MathML",
            Self::XLink => "http://www.w3.org/1999/xlink",
            Self::Xml => "http://www.w3.org/XML/1998/namespace",
            Self::Xmlns => "http://www.w3.org/2000/xmlns/",
        }
    }

    /// Look a namespace up by URL.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        [
            Self::Html,
            Self::Svg,
            Self::MathMl,
            Self::XLink,
            Self::Xml,
            Self::Xmlns,
        ]
        .into_iter()
        .find(|ns| ns.url() == url)
    }

    /// Short lowercase name used in tree dumps (`svg`, `math`, ...).
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
            Self::MathMl => "math",
            Self::XLink => "xlink",
            Self::Xml => "xml",
            Self::Xmlns => "xmlns",
        }
    }
}

/// [§ 4.9.2 Interface Attr](https://dom.spec.whatwg.org/#interface-attr)
///
/// "Attr nodes have a namespace (null or a non-empty string), namespace
/// prefix (null or a non-empty string), local name (a non-empty string),
/// value (a string)"
///
/// An `Attr` is never changed once built. Changing an element's attributes
/// means replacing entries in its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    namespace: Option<Namespace>,
    prefix: Option<String>,
    local_name: String,
    value: String,
}

impl Attr {
    /// A null-namespace attribute, which is what HTML tokens produce.
    #[must_use]
    pub fn new(local_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            prefix: None,
            local_name: local_name.into(),
            value: value.into(),
        }
    }

    /// A namespaced attribute such as `xlink:href`.
    #[must_use]
    pub fn namespaced(
        namespace: Namespace,
        prefix: Option<String>,
        local_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace),
            prefix,
            local_name: local_name.into(),
            value: value.into(),
        }
    }

    /// The attribute namespace, if any.
    #[must_use]
    pub const fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    /// The namespace prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// The value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// [§ 4.9.2](https://dom.spec.whatwg.org/#concept-attribute-qualified-name)
    ///
    /// "An attribute's qualified name is its local name if its namespace
    /// prefix is null, and its namespace prefix, followed by ":", followed by
    /// its local name, otherwise."
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local_name),
            None => self.local_name.clone(),
        }
    }
}

/// Which concrete interface an element was created with.
///
/// [§ 4.9](https://dom.spec.whatwg.org/#concept-element-interface)
/// "The element interface for any name and namespace is Element, unless
/// stated otherwise."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementInterface {
    /// `HTMLHtmlElement`
    Html,
    /// `HTMLHeadElement`
    Head,
    /// `HTMLBodyElement`
    Body,
    /// `HTMLDivElement`
    Div,
    /// `HTMLScriptElement`
    Script,
    /// `HTMLStyleElement`
    Style,
    /// `HTMLTemplateElement`
    Template,
    /// Any other HTML element (`HTMLElement` and the interfaces not modelled
    /// here).
    HtmlElement,
    /// `SVGElement`
    SvgElement,
    /// `MathMLElement`
    MathMlElement,
    /// Plain `Element` for unknown namespaces.
    Element,
}

/// [§ 3.2.2 Elements in the DOM](https://html.spec.whatwg.org/multipage/dom.html#elements-in-the-dom)
///
/// Look up the interface for an element given its local name and namespace.
#[must_use]
pub fn element_interface(local_name: &str, namespace: Namespace) -> ElementInterface {
    match namespace {
        Namespace::Html => match local_name {
            "html" => ElementInterface::Html,
            "head" => ElementInterface::Head,
            "body" => ElementInterface::Body,
            "div" => ElementInterface::Div,
            "script" => ElementInterface::Script,
            "style" => ElementInterface::Style,
            "template" => ElementInterface::Template,
            _ => ElementInterface::HtmlElement,
        },
        Namespace::Svg => ElementInterface::SvgElement,
        Namespace::MathMl => ElementInterface::MathMlElement,
        Namespace::XLink | Namespace::Xml | Namespace::Xmlns => ElementInterface::Element,
    }
}

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element):
/// "Elements have an associated namespace, namespace prefix, local name,
/// custom element state, custom element definition, is value."
///
/// Custom element state is not modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The element namespace.
    pub namespace: Namespace,
    /// The namespace prefix (always `None` for parser-created elements).
    pub prefix: Option<String>,
    /// "An element's local name"
    pub local_name: String,
    /// "An element has an associated attribute list", in source order.
    pub attributes: Vec<Attr>,
    /// The interface chosen at creation time.
    pub interface: ElementInterface,
    /// [§ 4.12.3](https://html.spec.whatwg.org/multipage/scripting.html#template-contents)
    /// "Each template element has an associated DocumentFragment object that
    /// is its template contents."
    pub template_contents: Option<NodeId>,
}

impl ElementData {
    /// Build element data, choosing the interface from the name and namespace.
    #[must_use]
    pub fn new(local_name: impl Into<String>, namespace: Namespace, attributes: Vec<Attr>) -> Self {
        let local_name = local_name.into();
        let interface = element_interface(&local_name, namespace);
        Self {
            namespace,
            prefix: None,
            local_name,
            attributes,
            interface,
            template_contents: None,
        }
    }

    /// True for an element with the given local name in the HTML namespace.
    #[must_use]
    pub fn is_html(&self, local_name: &str) -> bool {
        self.namespace == Namespace::Html && self.local_name == local_name
    }

    /// True when the element is in `namespace` and its local name is one of
    /// `names`.
    #[must_use]
    pub fn is_one_of(&self, namespace: Namespace, names: &[&str]) -> bool {
        self.namespace == namespace && names.contains(&self.local_name.as_str())
    }

    /// [§ 4.9](https://dom.spec.whatwg.org/#concept-element-qualified-name)
    ///
    /// "An element's qualified name is its local name if its namespace prefix
    /// is null; otherwise its namespace prefix, followed by ":", followed by
    /// its local name."
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// Value of the first null-namespace attribute called `name`.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.namespace().is_none() && attr.local_name() == name)
            .map(Attr::value)
    }

    /// True when an attribute with this qualified name is present.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|attr| attr.qualified_name() == name)
    }

    /// Append `attr` unless an attribute with the same qualified name exists.
    ///
    /// Returns whether the attribute was added. Used by the parser when it
    /// merges the attributes of a stray `<html>` or `<body>` tag.
    pub fn add_attribute_if_missing(&mut self, attr: Attr) -> bool {
        if self.has_attribute(&attr.qualified_name()) {
            return false;
        }
        self.attributes.push(attr);
        true
    }

    /// Returns the element's id attribute value if present.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// Class names from the class attribute, in order, without duplicates.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    #[must_use]
    pub fn class_list(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = Vec::new();
        for class in self
            .get_attribute("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
        {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }
}
