//! Property-based tests for the support helpers using proptest.

use proptest::prelude::*;
use stdkit::strings::{camel, limit, starts_with, symmetric_split, trim_split};
use stdkit::{group_by, OrderedValues};
use unicode_width::UnicodeWidthStr;

proptest! {
    /// symmetric_split always yields exactly `limit` parts.
    #[test]
    fn symmetric_split_has_exact_length(
        subject in proptest::option::of("[a-z,]{0,20}"),
        limit in 0usize..6,
    ) {
        let parts = symmetric_split(subject.as_deref(), ",", limit, None);
        prop_assert_eq!(parts.len(), limit);
    }

    /// Joining the non-padded parts gives back the input.
    #[test]
    fn symmetric_split_is_lossless(
        subject in "[a-z,]{0,20}",
        limit in 1usize..6,
    ) {
        let parts = symmetric_split(Some(subject.as_str()), ",", limit, None);
        let joined = parts.into_iter().flatten().collect::<Vec<_>>().join(",");
        prop_assert_eq!(joined, subject);
    }

    /// trim_split parts never carry surrounding whitespace.
    #[test]
    fn trim_split_parts_are_trimmed(subject in "[a-z ,]{0,30}") {
        for part in trim_split(Some(subject.as_str()), ",", None) {
            prop_assert_eq!(part.trim(), part.as_str());
        }
    }

    /// camel output never contains delimiters.
    #[test]
    fn camel_removes_delimiters(subject in "[a-zA-Z_ -]{0,30}") {
        let result = camel(Some(subject.as_str()));
        prop_assert!(!result.contains(['_', '-', ' ']));
    }

    /// Case-insensitive prefix checks accept any case variation.
    #[test]
    fn starts_with_ignores_case(prefix in "[a-z]{0,5}", rest in "[a-z]{0,5}") {
        let subject = format!("{}{}", prefix.to_uppercase(), rest);
        prop_assert!(starts_with(Some(subject.as_str()), &prefix, false));
    }

    /// Truncated text fits the width before the ellipsis.
    #[test]
    fn limit_respects_width(subject in "[a-z \u{4e00}-\u{4e50}]{0,40}", width in 0usize..20) {
        let result = limit(&subject, width, Some(""));
        prop_assert!(result.width() <= width);
        prop_assert!(subject.starts_with(&result));
    }

    /// Equal orders keep insertion order; the output is sorted by order.
    #[test]
    fn ordered_values_are_stable(orders in prop::collection::vec(-50i64..50, 0..40)) {
        let mut values = OrderedValues::new();
        for (index, order) in orders.iter().enumerate() {
            values.add((*order, index), *order);
        }

        let mut expected: Vec<_> = orders.iter().copied().zip(0..).collect();
        expected.sort_by_key(|(order, _)| *order);

        let actual: Vec<_> = values.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Groups partition the input without losing or reordering items.
    #[test]
    fn group_by_partitions_input(mut items in prop::collection::vec(0u8..5, 0..40)) {
        items.sort_unstable();
        let groups: Vec<_> = group_by(items.clone(), |n| *n).collect();

        let flattened: Vec<u8> = groups.iter().flat_map(|(_, g)| g.iter().copied()).collect();
        prop_assert_eq!(flattened, items);
        for window in groups.windows(2) {
            prop_assert!(window[0].0 < window[1].0);
        }
    }
}
