//! The node type of a filter tree.

use crate::chain::Chain;
use crate::condition::Condition;
use crate::meta::MetaData;

/// Any node of a filter tree: a leaf [`Condition`] or a composite [`Chain`].
///
/// Evaluators and renderers walk a tree by matching on this enum and
/// iterating chains in insertion order.
#[derive(Debug, Clone)]
pub enum Rule {
    Condition(Condition),
    Chain(Chain),
}

impl Rule {
    /// Returns whether `other` is semantically the same rule.
    ///
    /// Identity and annotations are ignored. A condition is never the same
    /// as a chain, even a chain wrapping only that condition.
    pub fn same_as(&self, other: &Rule) -> bool {
        match (self, other) {
            (Rule::Condition(a), Rule::Condition(b)) => a.same_as(b),
            (Rule::Chain(a), Rule::Chain(b)) => a.same_as(b),
            _ => false,
        }
    }

    pub fn is_chain(&self) -> bool {
        matches!(self, Rule::Chain(_))
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Rule::Condition(c) => Some(c),
            Rule::Chain(_) => None,
        }
    }

    pub fn as_chain(&self) -> Option<&Chain> {
        match self {
            Rule::Chain(c) => Some(c),
            Rule::Condition(_) => None,
        }
    }

    /// Returns this node's annotations, creating the store on first use.
    pub fn meta_data(&mut self) -> &mut MetaData {
        match self {
            Rule::Condition(c) => c.meta_data(),
            Rule::Chain(c) => c.meta_data(),
        }
    }

    /// Returns this node's annotations without creating them.
    pub fn meta(&self) -> Option<&MetaData> {
        match self {
            Rule::Condition(c) => c.meta(),
            Rule::Chain(c) => c.meta(),
        }
    }
}

impl From<Condition> for Rule {
    fn from(condition: Condition) -> Self {
        Rule::Condition(condition)
    }
}

impl From<Chain> for Rule {
    fn from(chain: Chain) -> Self {
        Rule::Chain(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_is_never_same_as_chain() {
        let condition = Rule::from(Condition::equal("a", "1"));
        let wrapped = Rule::from(Chain::all().with(Condition::equal("a", "1")));

        assert!(!condition.same_as(&wrapped));
        assert!(!wrapped.same_as(&condition));
    }

    #[test]
    fn accessors() {
        let condition = Rule::from(Condition::equal("a", "1"));
        assert!(!condition.is_chain());
        assert!(condition.as_condition().is_some());
        assert!(condition.as_chain().is_none());

        let chain = Rule::from(Chain::any());
        assert!(chain.is_chain());
        assert!(chain.as_chain().is_some());
        assert!(chain.as_condition().is_none());
    }

    #[test]
    fn meta_data_reaches_the_wrapped_node() {
        let mut rule = Rule::from(Chain::none());
        assert!(rule.meta().is_none());

        rule.meta_data().set("negated", true);
        let chain = rule.as_chain().unwrap();
        assert!(chain.meta().unwrap().has("negated"));
    }
}
