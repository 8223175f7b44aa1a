//! Collections ordered by an explicit integer key.

use std::collections::BTreeMap;

/// Values yielded in ascending order of the key they were added with.
///
/// Entries with equal order keep their insertion order, however many share
/// that order.
///
/// ```
/// use stdkit::OrderedValues;
///
/// let mut values = OrderedValues::new();
/// values.add("foo", 4).add("bar", 3).add("oof", 3);
///
/// let ordered: Vec<_> = values.into_iter().collect();
/// assert_eq!(ordered, vec!["bar", "oof", "foo"]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedValues<T> {
    // (order, insertion sequence)
    values: BTreeMap<(i64, u64), T>,
    next: u64,
}

impl<T> Default for OrderedValues<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
            next: 0,
        }
    }
}

impl<T> OrderedValues<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` at position `order`.
    pub fn add(&mut self, value: T, order: i64) -> &mut Self {
        self.values.insert((order, self.next), value);
        self.next += 1;
        self
    }

    /// Adds every `(order, value)` pair of `entries`.
    pub fn extend<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (i64, T)>,
    {
        for (order, value) in entries {
            self.add(value, order);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over values in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.values()
    }
}

impl<T> IntoIterator for OrderedValues<T> {
    type Item = T;
    type IntoIter = std::collections::btree_map::IntoValues<(i64, u64), T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_order() {
        let mut values = OrderedValues::new();
        values.add("foo", 4);
        values.add("bar", 3);
        values.add("oof", 2);

        let ordered: Vec<_> = values.iter().copied().collect();
        assert_eq!(ordered, vec!["oof", "bar", "foo"]);
    }

    #[test]
    fn equal_orders_keep_insertion_order() {
        let mut values = OrderedValues::new();
        values.add("foo", 4);
        values.add("bar", 3);
        values.add("oof", 3);

        let ordered: Vec<_> = values.into_iter().collect();
        assert_eq!(ordered, vec!["bar", "oof", "foo"]);
    }

    #[test]
    fn extend_from_pairs() {
        let mut values = OrderedValues::new();
        values.extend([(42, "foo"), (41, "bar")]);
        values.extend(["a", "b"].into_iter().enumerate().map(|(i, v)| (i as i64, v)));

        let ordered: Vec<_> = values.into_iter().collect();
        assert_eq!(ordered, vec!["a", "b", "bar", "foo"]);
    }

    #[test]
    fn negative_orders_come_first() {
        let mut values = OrderedValues::new();
        values.add(1, 0).add(2, -5);
        assert_eq!(values.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn many_equal_orders_stay_below_higher_orders() {
        let mut values = OrderedValues::new();
        values.add("order1", 1);
        for _ in 0..257 {
            values.add("order0", 0);
        }

        let ordered: Vec<_> = values.iter().copied().collect();
        assert_eq!(ordered.len(), 258);
        assert!(ordered[..257].iter().all(|v| *v == "order0"));
        assert_eq!(ordered.last(), Some(&"order1"));
    }

    #[test]
    fn extreme_orders_are_accepted() {
        let mut values = OrderedValues::new();
        values.add("max", i64::MAX).add("min", i64::MIN).add("zero", 0);
        assert_eq!(values.into_iter().collect::<Vec<_>>(), vec!["min", "zero", "max"]);
    }
}
