//! Incremental construction of filter trees.
//!
//! The [`Filterable`] trait gives any type that owns a root-chain slot four
//! builder operations. Each one merges a rule into the current tree while
//! keeping it as shallow as possible:
//!
//! - a run of calls with the same combinator appends to the existing root,
//! - switching combinator wraps the whole previous tree as the first child of
//!   a new root, exactly once.
//!
//! ```text
//! filter(a)                  All(a)
//! filter(a) filter(b)        All(a, b)
//! filter(a) or_filter(b)     Any(All(a), b)
//! or_filter(a) filter(b)     All(Any(a), b)
//! ```
//!
//! The previous tree always becomes a single operand of the new top-level
//! operator, which matches the grouping of the literal call sequence.

use std::borrow::Cow;

use tracing::trace;

use crate::chain::{Chain, ChainKind};
use crate::rule::Rule;

/// Types that carry a filter tree built through the four builder operations.
///
/// Implementors only expose their root slot; the builder logic is provided.
///
/// # Example
///
/// ```
/// use stdkit_filter::{Filterable, Chain, Condition};
///
/// #[derive(Default)]
/// struct HostQuery {
///     filter: Option<Chain>,
/// }
///
/// impl Filterable for HostQuery {
///     fn filter_slot(&self) -> Option<&Chain> {
///         self.filter.as_ref()
///     }
///
///     fn filter_slot_mut(&mut self) -> &mut Option<Chain> {
///         &mut self.filter
///     }
/// }
///
/// let mut query = HostQuery::default();
/// query
///     .filter(Condition::equal("state", "down"))
///     .or_filter(Condition::equal("flapping", true));
///
/// let expected = Chain::any()
///     .with(Chain::all().with(Condition::equal("state", "down")))
///     .with(Condition::equal("flapping", true));
/// assert!(query.get_filter().same_as(&expected));
/// ```
pub trait Filterable {
    /// Returns the stored root chain, if any builder operation ran yet.
    fn filter_slot(&self) -> Option<&Chain>;

    /// Returns the root chain slot for the builder operations to update.
    fn filter_slot_mut(&mut self) -> &mut Option<Chain>;

    /// Returns the current root chain.
    ///
    /// Without a stored root this is a fresh empty `All` chain; the slot
    /// itself is left untouched.
    fn get_filter(&self) -> Cow<'_, Chain> {
        match self.filter_slot() {
            Some(chain) => Cow::Borrowed(chain),
            None => Cow::Owned(Chain::all()),
        }
    }

    /// Adds `rule` with AND semantics.
    fn filter(&mut self, rule: impl Into<Rule>) -> &mut Self
    where
        Self: Sized,
    {
        join(self.filter_slot_mut(), ChainKind::All, rule.into());
        self
    }

    /// Adds `rule` with OR semantics.
    fn or_filter(&mut self, rule: impl Into<Rule>) -> &mut Self
    where
        Self: Sized,
    {
        join(self.filter_slot_mut(), ChainKind::Any, rule.into());
        self
    }

    /// Adds the negation of `rule` with AND semantics.
    ///
    /// Same as `filter(None(rule))`.
    fn not_filter(&mut self, rule: impl Into<Rule>) -> &mut Self
    where
        Self: Sized,
    {
        self.filter(Chain::none().with(rule))
    }

    /// Adds the negation of `rule` with OR semantics.
    ///
    /// Same as `or_filter(None(rule))`.
    fn or_not_filter(&mut self, rule: impl Into<Rule>) -> &mut Self
    where
        Self: Sized,
    {
        self.or_filter(Chain::none().with(rule))
    }
}

/// Merges `rule` into the tree in `slot` under a root of kind `kind`.
///
/// Leaves `slot` holding a chain of kind `kind`.
fn join(slot: &mut Option<Chain>, kind: ChainKind, rule: Rule) {
    let mut current = slot.take().unwrap_or_default();

    if current.kind() == kind {
        current.add(rule);
        *slot = Some(current);
        return;
    }

    let mut root = Chain::new(kind).with(rule);
    if current.is_empty() {
        trace!(from = %current.kind(), to = %kind, "dropping empty filter root");
    } else {
        trace!(
            from = %current.kind(),
            to = %kind,
            children = current.len(),
            "wrapping filter root"
        );
        root.insert_at(0, current);
    }

    *slot = Some(root);
}

/// A standalone root-chain slot implementing [`Filterable`].
///
/// Embed it in a type that should carry a filter, or use it directly to
/// build a tree.
///
/// # Example
///
/// ```
/// use stdkit_filter::{Filters, Filterable, Condition};
///
/// let mut filters = Filters::new();
/// filters
///     .filter(Condition::equal("a", "1"))
///     .not_filter(Condition::like("b", "tmp*"));
///
/// let tree = filters.into_filter();
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filters {
    root: Option<Chain>,
}

impl Filters {
    /// Creates a slot holding no filter yet.
    pub fn new() -> Self {
        Filters::default()
    }

    /// Returns `true` if no builder operation has run yet.
    pub fn is_unset(&self) -> bool {
        self.root.is_none()
    }

    /// Consumes the slot and returns the root chain (empty `All` if unset).
    pub fn into_filter(self) -> Chain {
        self.root.unwrap_or_default()
    }
}

impl Filterable for Filters {
    fn filter_slot(&self) -> Option<&Chain> {
        self.root.as_ref()
    }

    fn filter_slot_mut(&mut self) -> &mut Option<Chain> {
        &mut self.root
    }
}

/// A fixed rule kept alongside a user-built filter.
///
/// Typical use is a scope restriction that a query always applies, no matter
/// what the caller added through [`Filterable`].
#[derive(Debug, Clone, Default)]
pub struct BaseFilter {
    rule: Option<Rule>,
}

impl BaseFilter {
    pub fn new() -> Self {
        BaseFilter::default()
    }

    /// Returns whether a base filter has been set.
    pub fn has_base_filter(&self) -> bool {
        self.rule.is_some()
    }

    pub fn base_filter(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    /// Sets or clears the base filter.
    pub fn set_base_filter(&mut self, rule: Option<Rule>) -> &mut Self {
        self.rule = rule;
        self
    }
}
