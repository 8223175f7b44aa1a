//! Tree shapes produced by the builder operations.

use stdkit_filter::{
    all, any, equal, like, none, unequal, unlike, Chain, ChainKind, Condition, Filterable,
    Filters, Rule,
};

// ============================================================================
// Test helpers
// ============================================================================

/// A filterable type embedding the ready-made slot.
#[derive(Default)]
struct HostQuery {
    filters: Filters,
    limit: Option<usize>,
}

impl Filterable for HostQuery {
    fn filter_slot(&self) -> Option<&Chain> {
        self.filters.filter_slot()
    }

    fn filter_slot_mut(&mut self) -> &mut Option<Chain> {
        self.filters.filter_slot_mut()
    }
}

fn assert_tree(filterable: &impl Filterable, expected: &Chain) {
    let actual = filterable.get_filter();
    assert!(
        actual.same_as(expected),
        "tree mismatch:\n  actual:   {:?}\n  expected: {:?}",
        actual,
        expected
    );
}

// ============================================================================
// Keeping the current hierarchy
// ============================================================================

#[test]
fn filter_keeps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.filter(equal("", "")).filter(unequal("", ""));

    assert_tree(&query, &all!(equal("", ""), unequal("", "")));
}

#[test]
fn or_filter_keeps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.or_filter(equal("", "")).or_filter(unequal("", ""));

    assert_tree(&query, &any!(equal("", ""), unequal("", "")));
}

#[test]
fn not_filter_keeps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.not_filter(equal("", "")).not_filter(unequal("", ""));

    assert_tree(
        &query,
        &all!(none!(equal("", "")), none!(unequal("", ""))),
    );
}

#[test]
fn or_not_filter_keeps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.or_not_filter(equal("", "")).or_not_filter(unequal("", ""));

    assert_tree(
        &query,
        &any!(none!(equal("", "")), none!(unequal("", ""))),
    );
}

// ============================================================================
// Wrapping the current hierarchy
// ============================================================================

#[test]
fn filter_wraps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.or_filter(equal("", "")).filter(unequal("", ""));

    assert_tree(&query, &all!(any!(equal("", "")), unequal("", "")));
}

#[test]
fn or_filter_wraps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.filter(equal("", "")).or_filter(unequal("", ""));

    assert_tree(&query, &any!(all!(equal("", "")), unequal("", "")));
}

#[test]
fn not_filter_wraps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.or_filter(equal("", "")).not_filter(unequal("", ""));

    assert_tree(
        &query,
        &all!(any!(equal("", "")), none!(unequal("", ""))),
    );
}

#[test]
fn or_not_filter_wraps_current_hierarchy() {
    let mut query = HostQuery::default();
    query.filter(equal("", "")).or_not_filter(unequal("", ""));

    assert_tree(
        &query,
        &any!(all!(equal("", "")), none!(unequal("", ""))),
    );
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn or_filters_stay_flat() {
    let mut query = HostQuery::default();
    query
        .or_filter(equal("a", "1"))
        .or_filter(equal("b", "2"));

    assert_tree(&query, &any!(equal("a", "1"), equal("b", "2")));
}

#[test]
fn alternating_combinators_nest_once_per_switch() {
    let mut query = HostQuery::default();
    query
        .filter(equal("a", "1"))
        .or_filter(equal("b", "2"))
        .filter(equal("c", "3"));

    assert_tree(
        &query,
        &all!(any!(all!(equal("a", "1")), equal("b", "2")), equal("c", "3")),
    );
    assert_eq!(query.get_filter().depth(), 3);
}

#[test]
fn not_filter_matches_filter_of_none() {
    let mut negated = Filters::new();
    negated.filter(equal("a", "1")).not_filter(like("b", "x*"));

    let mut explicit = Filters::new();
    explicit
        .filter(equal("a", "1"))
        .filter(none!(like("b", "x*")));

    assert!(negated.get_filter().same_as(&explicit.get_filter()));
}

#[test]
fn or_not_filter_matches_or_filter_of_none() {
    let mut negated = Filters::new();
    negated.or_not_filter(unlike("b", "x*"));

    let mut explicit = Filters::new();
    explicit.or_filter(none!(unlike("b", "x*")));

    assert!(negated.get_filter().same_as(&explicit.get_filter()));
}

#[test]
fn chains_can_be_added_as_rules() {
    let mut query = HostQuery::default();
    query
        .filter(any!(equal("a", "1"), equal("b", "2")))
        .filter(equal("c", "3"));

    assert_tree(
        &query,
        &all!(any!(equal("a", "1"), equal("b", "2")), equal("c", "3")),
    );
}

#[test]
fn builder_leaves_other_state_alone() {
    let mut query = HostQuery {
        limit: Some(25),
        ..HostQuery::default()
    };
    query.filter(equal("a", "1"));

    assert_eq!(query.limit, Some(25));
    assert_eq!(query.get_filter().kind(), ChainKind::All);
}

#[test]
fn factory_functions_match_macros() {
    let from_fn = all([equal("a", "1"), equal("b", "2")]);
    let from_macro = all!(equal("a", "1"), equal("b", "2"));
    assert!(from_fn.same_as(&from_macro));

    let rules: Vec<Rule> = vec![equal("a", "1").into(), none([like("c", "z")]).into()];
    assert!(any(rules).same_as(&any!(equal("a", "1"), none!(like("c", "z")))));
}

// ============================================================================
// Equality of conditions
// ============================================================================

#[test]
fn equal_with_list_values_is_order_independent() {
    assert!(equal("", ["a", "b"]).same_as(&equal("", ["b", "a"])));
}

#[test]
fn like_with_list_values_is_order_dependent() {
    assert!(!like("c", ["a", "b"]).same_as(&like("c", ["b", "a"])));
}

#[test]
fn any_chains_with_swapped_children_differ() {
    let ab = any!(equal("a", "1"), equal("b", "2"));
    let ba = any!(equal("b", "2"), equal("a", "1"));
    assert!(!Rule::from(ab).same_as(&Rule::from(ba)));
}

#[test]
fn cloned_condition_meta_data_is_independent() {
    let mut original = Condition::equal("a", "1");
    original.meta_data().set("columnLabel", "A");

    let mut clone = original.clone();
    clone.meta_data().clear();

    assert!(original.meta().unwrap().has("columnLabel"));
    assert!(clone.meta().unwrap().is_empty());
}

#[test]
fn cloned_tree_meta_data_is_independent() {
    let mut filters = Filters::new();
    filters.filter(equal("a", "1"));
    if let Some(root) = filters.filter_slot_mut() {
        root.meta_data().set("scope", "user");
    }

    let mut copy = filters.clone();
    if let Some(root) = copy.filter_slot_mut() {
        root.meta_data().set("scope", "copy");
    }

    let original_scope = filters.get_filter().meta().and_then(|m| m.get("scope").cloned());
    assert_eq!(original_scope, Some(serde_json::json!("user")));
}

#[test]
fn tree_with_float_values_is_same_as_its_clone() {
    let mut filters = Filters::new();
    filters
        .filter(equal("load", f64::NAN))
        .or_filter(like("ratio", [0.5, f64::NAN]))
        .not_filter(equal("id", 9_007_199_254_740_993i64));

    let tree = filters.get_filter().into_owned();
    assert!(tree.same_as(&tree.clone()));
}
