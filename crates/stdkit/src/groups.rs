//! Grouping consecutive items of a sorted sequence.

use std::iter::Peekable;

/// Groups consecutive items sharing the same key.
///
/// The input must already be sorted (or at least clustered) by the key;
/// a key that reappears later starts a new group.
///
/// ```
/// use stdkit::group_by;
///
/// let rows = vec![("web", 1), ("web", 2), ("db", 3)];
/// let groups: Vec<_> = group_by(rows, |row| row.0).collect();
///
/// assert_eq!(groups, vec![
///     ("web", vec![("web", 1), ("web", 2)]),
///     ("db", vec![("db", 3)]),
/// ]);
/// ```
pub fn group_by<I, K, F>(items: I, key: F) -> GroupBy<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    GroupBy {
        items: items.into_iter().peekable(),
        key,
    }
}

/// Iterator returned by [`group_by`].
pub struct GroupBy<I: Iterator, F> {
    items: Peekable<I>,
    key: F,
}

impl<I, K, F> Iterator for GroupBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.items.next()?;
        let criterion = (self.key)(&first);
        let mut group = vec![first];

        while let Some(item) = self.items.peek() {
            if (self.key)(item) != criterion {
                break;
            }
            // peek() just returned Some
            if let Some(item) = self.items.next() {
                group.push(item);
            }
        }

        Some((criterion, group))
    }
}
