//! Filter - Composable filter rule trees.
//!
//! This crate models filter expressions as trees and builds them
//! incrementally. It provides:
//!
//! - Leaf [`Condition`]s: equal, unequal, like and unlike comparisons on one
//!   or more columns, optionally case-insensitive
//! - Composite [`Chain`]s: AND (`All`), OR (`Any`) and NOT (`None`) groups
//! - The [`Filterable`] builder trait, which merges rules into a
//!   minimal-depth tree as callers add them
//! - Per-node [`MetaData`] for consumers to annotate nodes
//!
//! Trees are only constructed, edited and compared here. Evaluating them
//! against data or rendering them (SQL, URLs, ...) is left to consumers,
//! which walk the tree through [`Rule`] and [`Chain::iter`].
//!
//! # Quick Start
//!
//! ```rust
//! use stdkit_filter::{all, any, equal, like, Filters, Filterable};
//!
//! let mut filters = Filters::new();
//! filters
//!     .filter(equal("state", "down"))
//!     .filter(like("name", "web*").ignore_case())
//!     .or_filter(equal("pinned", true));
//!
//! // Switching from AND to OR wrapped the previous AND group once
//! let expected = any!(
//!     all!(equal("state", "down"), like("name", "web*").ignore_case()),
//!     equal("pinned", true),
//! );
//! assert!(filters.get_filter().same_as(&expected));
//! ```
//!
//! # Tree Semantics
//!
//! ```text
//! All(r₁, …, rₙ)   = r₁ ∧ … ∧ rₙ
//! Any(r₁, …, rₙ)   = r₁ ∨ … ∨ rₙ
//! None(r)          = ¬r
//! ```
//!
//! [`Rule::same_as`] compares trees structurally: kinds, columns, values and
//! case flags must match, children in order. `Equal` conditions compare list
//! values as sets.

mod chain;
mod condition;
mod error;
mod filters;
mod meta;
mod rule;
mod value;

// Re-export public API
pub use chain::{Chain, ChainKind};
pub use condition::{Column, Condition, ConditionKind};
pub use error::{FilterError, Result};
pub use filters::{BaseFilter, Filterable, Filters};
pub use meta::MetaData;
pub use rule::Rule;
pub use value::{Number, Value};

/// Creates an AND chain holding `rules`.
pub fn all<I, R>(rules: I) -> Chain
where
    I: IntoIterator<Item = R>,
    R: Into<Rule>,
{
    Chain::with_rules(ChainKind::All, rules)
}

/// Creates an OR chain holding `rules`.
pub fn any<I, R>(rules: I) -> Chain
where
    I: IntoIterator<Item = R>,
    R: Into<Rule>,
{
    Chain::with_rules(ChainKind::Any, rules)
}

/// Creates a NOT chain holding `rules`.
pub fn none<I, R>(rules: I) -> Chain
where
    I: IntoIterator<Item = R>,
    R: Into<Rule>,
{
    Chain::with_rules(ChainKind::None, rules)
}

/// Creates an `Equal` condition.
pub fn equal(column: impl Into<Column>, value: impl Into<Value>) -> Condition {
    Condition::equal(column, value)
}

/// Creates an `Unequal` condition.
pub fn unequal(column: impl Into<Column>, value: impl Into<Value>) -> Condition {
    Condition::unequal(column, value)
}

/// Creates a `Like` condition.
pub fn like(column: impl Into<Column>, value: impl Into<Value>) -> Condition {
    Condition::like(column, value)
}

/// Creates an `Unlike` condition.
pub fn unlike(column: impl Into<Column>, value: impl Into<Value>) -> Condition {
    Condition::unlike(column, value)
}

/// Builds an AND chain from rules of mixed types.
///
/// ```
/// use stdkit_filter::{all, any, equal};
///
/// let chain = all!(equal("a", 1), any!(equal("b", 2), equal("c", 3)));
/// assert_eq!(chain.len(), 2);
/// ```
#[macro_export]
macro_rules! all {
    ($($rule:expr),* $(,)?) => {
        $crate::Chain::all()$(.with($rule))*
    };
}

/// Builds an OR chain from rules of mixed types.
#[macro_export]
macro_rules! any {
    ($($rule:expr),* $(,)?) => {
        $crate::Chain::any()$(.with($rule))*
    };
}

/// Builds a NOT chain from rules of mixed types.
#[macro_export]
macro_rules! none {
    ($($rule:expr),* $(,)?) => {
        $crate::Chain::none()$(.with($rule))*
    };
}
