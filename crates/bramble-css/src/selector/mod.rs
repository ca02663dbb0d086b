//! CSS selectors per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! Selectors are parsed from CSS tokens into a right-to-left chain of
//! compound selectors, which makes both specificity and matching a walk
//! from the subject outward. Matching is a one-off query against a finished
//! tree; there is no invalidation or style recalculation.

mod matching;
mod parse;

use serde::Serialize;

pub use parse::{parse_selector, parse_selector_list};

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// A single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `div`.
    Type(String),
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector): `*`
    Universal,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`.
    Id(String),
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.note`.
    Class(String),
    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    Attribute(AttributeSelector),
    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    PseudoClass(PseudoClass),
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements), e.g. `::before`.
    ///
    /// Pseudo-elements never match an element in the tree.
    PseudoElement(String),
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSelector {
    /// The attribute name, ASCII-lowercased.
    pub name: String,
    /// The operator and value, `None` for `[name]`.
    pub matcher: Option<(AttributeOperator, String)>,
    /// [§ 6.3](https://www.w3.org/TR/selectors-4/#attribute-case): the `i` flag.
    pub case_insensitive: bool,
}

/// The operator of an attribute selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeOperator {
    /// `[att=val]`: exactly `val`.
    Equals,
    /// `[att~=val]`: a whitespace-separated list containing `val`.
    Includes,
    /// `[att|=val]`: exactly `val` or starting with `val-`.
    DashMatch,
    /// `[att^=val]`: starts with `val`.
    Prefix,
    /// `[att$=val]`: ends with `val`.
    Suffix,
    /// `[att*=val]`: contains `val`.
    Substring,
}

/// The pseudo-classes this crate understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "arguments", rename_all = "kebab-case")]
pub enum PseudoClass {
    /// `:root`
    Root,
    /// `:first-child`
    FirstChild,
    /// `:last-child`
    LastChild,
    /// `:only-child`
    OnlyChild,
    /// `:first-of-type`
    FirstOfType,
    /// `:last-of-type`
    LastOfType,
    /// `:empty`
    Empty,
    /// `:link`, `:any-link`: every link counts as unvisited.
    Link,
    /// `:checked`
    Checked,
    /// `:disabled`
    Disabled,
    /// `:enabled`
    Enabled,
    /// [§ 4.3 :not()](https://www.w3.org/TR/selectors-4/#negation)
    Not(Vec<ComplexSelector>),
    /// [§ 4.2 :is()](https://www.w3.org/TR/selectors-4/#matches), also `:matches()`.
    Is(Vec<ComplexSelector>),
    /// [§ 4.4 :where()](https://www.w3.org/TR/selectors-4/#zero-matches)
    Where(Vec<ComplexSelector>),
    /// A user-action or otherwise dynamic pseudo-class such as `:hover`.
    ///
    /// Never matches a static tree, but still counts toward specificity.
    Dynamic(String),
}

/// [§ 3.1](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    /// The simple selectors, in source order.
    pub simple_selectors: Vec<SimpleSelector>,
}

/// [§ 15 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// `A B`
    Descendant,
    /// `A > B`
    Child,
    /// `A + B`
    NextSibling,
    /// `A ~ B`
    SubsequentSibling,
}

/// [§ 3.1](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a sequence of one or more compound selectors
/// separated by combinators."
///
/// Stored right to left: `div > p span` has subject `span` and combinators
/// `[(Descendant, p), (Child, div)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexSelector {
    /// The rightmost compound selector.
    pub subject: CompoundSelector,
    /// (combinator, compound) pairs walking left from the subject.
    pub combinators: Vec<(Combinator, CompoundSelector)>,
}

/// [§ 16 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "count the number of ID selectors in the selector (= A); count the number
/// of class selectors, attributes selectors, and pseudo-classes in the
/// selector (= B); count the number of type selectors and pseudo-elements in
/// the selector (= C)". Ordering compares A, then B, then C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Build a specificity from its (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    const fn plus(self, other: Self) -> Self {
        Self(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }
}

impl ComplexSelector {
    /// The specificity of the whole chain.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.combinators
            .iter()
            .map(|(_, compound)| compound.specificity())
            .fold(self.subject.specificity(), Specificity::plus)
    }
}

impl CompoundSelector {
    /// The summed specificity of the simple selectors.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.simple_selectors
            .iter()
            .map(SimpleSelector::specificity)
            .fold(Specificity::default(), Specificity::plus)
    }
}

impl SimpleSelector {
    /// The specificity this simple selector contributes.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Id(_) => Specificity(1, 0, 0),
            Self::Class(_) | Self::Attribute(_) => Specificity(0, 1, 0),
            Self::Type(_) | Self::PseudoElement(_) => Specificity(0, 0, 1),
            // "ignore the universal selector"
            Self::Universal => Specificity::default(),
            Self::PseudoClass(pseudo) => match pseudo {
                // "The specificity of an :is(), :not(), or :has() pseudo-class
                // is replaced by the specificity of the most specific complex
                // selector in its selector list argument."
                PseudoClass::Not(list) | PseudoClass::Is(list) => list
                    .iter()
                    .map(ComplexSelector::specificity)
                    .max()
                    .unwrap_or_default(),
                // "The specificity of a :where() pseudo-class is replaced by
                // zero."
                PseudoClass::Where(_) => Specificity::default(),
                _ => Specificity(0, 1, 0),
            },
        }
    }
}

/// A complex selector with its specificity computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSelector {
    /// The selector chain.
    pub complex: ComplexSelector,
    /// The specificity of [`Self::complex`].
    pub specificity: Specificity,
}

impl ParsedSelector {
    /// Wrap a complex selector, computing its specificity.
    #[must_use]
    pub fn new(complex: ComplexSelector) -> Self {
        let specificity = complex.specificity();
        Self {
            complex,
            specificity,
        }
    }

    /// True when the selector has no combinators.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        self.complex.combinators.is_empty()
    }
}
