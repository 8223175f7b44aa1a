//! Composite rules combining children with AND / OR / NOT.
//!
//! A [`Chain`] owns an ordered list of child [`Rule`]s. Its [`ChainKind`]
//! tells downstream evaluators how to combine them:
//!
//! ```text
//! All  = child₁ ∧ child₂ ∧ …
//! Any  = child₁ ∨ child₂ ∨ …
//! None = ¬(child₁ ∨ child₂ ∨ …)   (usually a single child)
//! ```
//!
//! Child order is kept for rendering and is significant for `same_as`.

use std::fmt;

use crate::error::{FilterError, Result};
use crate::meta::MetaData;
use crate::rule::Rule;

/// How a chain combines its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainKind {
    /// Logical AND.
    #[default]
    All,
    /// Logical OR.
    Any,
    /// Logical NOT of the children.
    None,
}

impl ChainKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ChainKind::All => "all",
            ChainKind::Any => "any",
            ChainKind::None => "none",
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered group of rules combined by a [`ChainKind`].
///
/// The default chain is an empty `All`.
///
/// # Example
///
/// ```
/// use stdkit_filter::{Chain, ChainKind, Condition};
///
/// let mut chain = Chain::any()
///     .with(Condition::equal("state", "down"))
///     .with(Condition::equal("state", "unreachable"));
///
/// chain.add(Chain::none().with(Condition::equal("acknowledged", true)));
///
/// assert_eq!(chain.kind(), ChainKind::Any);
/// assert_eq!(chain.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chain {
    kind: ChainKind,
    rules: Vec<Rule>,
    meta: Option<MetaData>,
}

impl Chain {
    /// Creates an empty chain of the given kind.
    pub fn new(kind: ChainKind) -> Self {
        Chain {
            kind,
            rules: Vec::new(),
            meta: None,
        }
    }

    /// Creates a chain of the given kind holding `rules` in order.
    pub fn with_rules<I, R>(kind: ChainKind, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        Chain {
            kind,
            rules: rules.into_iter().map(Into::into).collect(),
            meta: None,
        }
    }

    /// Creates an empty AND chain.
    pub fn all() -> Self {
        Chain::new(ChainKind::All)
    }

    /// Creates an empty OR chain.
    pub fn any() -> Self {
        Chain::new(ChainKind::Any)
    }

    /// Creates an empty NOT chain.
    pub fn none() -> Self {
        Chain::new(ChainKind::None)
    }

    pub fn kind(&self) -> ChainKind {
        self.kind
    }

    /// Appends `rule` and returns the chain, for building in one expression.
    pub fn with(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Appends `rule`.
    pub fn add(&mut self, rule: impl Into<Rule>) -> &mut Self {
        self.rules.push(rule.into());
        self
    }

    /// Inserts `rule` immediately before the first child that is the same as
    /// `before`.
    pub fn insert_before(&mut self, rule: impl Into<Rule>, before: &Rule) -> Result<&mut Self> {
        let at = self.position(before)?;
        self.rules.insert(at, rule.into());
        Ok(self)
    }

    /// Inserts `rule` immediately after the first child that is the same as
    /// `after`.
    pub fn insert_after(&mut self, rule: impl Into<Rule>, after: &Rule) -> Result<&mut Self> {
        let at = self.position(after)?;
        self.rules.insert(at + 1, rule.into());
        Ok(self)
    }

    /// Inserts `rule` at `index`, shifting later children back.
    ///
    /// Panics if `index > len`, like [`Vec::insert`].
    pub(crate) fn insert_at(&mut self, index: usize, rule: impl Into<Rule>) -> &mut Self {
        self.rules.insert(index, rule.into());
        self
    }

    /// Returns whether any child is the same as `rule`.
    pub fn has(&self, rule: &Rule) -> bool {
        self.rules.iter().any(|r| r.same_as(rule))
    }

    /// Replaces the first child that is the same as `rule` with
    /// `replacement`, returning the replaced child.
    pub fn replace(&mut self, rule: &Rule, replacement: impl Into<Rule>) -> Result<Rule> {
        let at = self.position(rule)?;
        Ok(std::mem::replace(&mut self.rules[at], replacement.into()))
    }

    /// Removes and returns the first child that is the same as `rule`.
    pub fn remove(&mut self, rule: &Rule) -> Option<Rule> {
        let at = self.rules.iter().position(|r| r.same_as(rule))?;
        Some(self.rules.remove(at))
    }

    /// Returns `true` if the chain has no children.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns the children in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterates over the children in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns the depth of the tree rooted at this chain.
    ///
    /// A chain whose children are all conditions (or which is empty) has
    /// depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .rules
            .iter()
            .filter_map(Rule::as_chain)
            .map(Chain::depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns this chain's annotations, creating the store on first use.
    pub fn meta_data(&mut self) -> &mut MetaData {
        self.meta.get_or_insert_with(MetaData::default)
    }

    /// Returns this chain's annotations without creating them.
    pub fn meta(&self) -> Option<&MetaData> {
        self.meta.as_ref()
    }

    /// Returns whether `other` is structurally the same chain.
    ///
    /// Kinds must match and children must be pairwise the same, in order.
    /// Annotations are ignored.
    pub fn same_as(&self, other: &Chain) -> bool {
        self.kind == other.kind
            && self.rules.len() == other.rules.len()
            && self
                .rules
                .iter()
                .zip(&other.rules)
                .all(|(a, b)| a.same_as(b))
    }

    fn position(&self, rule: &Rule) -> Result<usize> {
        self.rules
            .iter()
            .position(|r| r.same_as(rule))
            .ok_or(FilterError::ReferenceNotFound {
                chain: self.kind.as_str(),
            })
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for Chain {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<R: Into<Rule>> Extend<R> for Chain {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.rules.extend(iter.into_iter().map(Into::into));
    }
}
