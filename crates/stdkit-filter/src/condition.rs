//! Leaf rules comparing columns against a value.
//!
//! A [`Condition`] is a single comparison: one or more columns, a
//! [`ConditionKind`] saying how to compare, and a [`Value`] to compare
//! against. Conditions are the leaves of a filter tree.

use std::fmt;

use crate::meta::MetaData;
use crate::value::Value;

/// How a condition compares its column against its value.
///
/// The kind is carried for downstream evaluators and renderers; the filter
/// core only uses it to tell conditions apart in `same_as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// Column equals the value (or one of the values of a list).
    Equal,
    /// Column differs from the value.
    Unequal,
    /// Column contains or matches the value as a pattern.
    Like,
    /// Column does not contain or match the value as a pattern.
    Unlike,
}

impl ConditionKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKind::Equal => "equal",
            ConditionKind::Unequal => "unequal",
            ConditionKind::Like => "like",
            ConditionKind::Unlike => "unlike",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The column side of a condition: one column or several.
///
/// Multi-column conditions compare a tuple of columns, e.g. a composite key.
/// An empty list is accepted; what it means is up to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    /// A single column name.
    Single(String),
    /// An ordered list of column names.
    Multi(Vec<String>),
}

impl Column {
    /// Returns the column names in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Column::Single(name) => vec![name.as_str()],
            Column::Multi(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Returns the single column name, if this is not a multi-column.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Column::Single(name) => Some(name),
            Column::Multi(_) => None,
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::Single(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::Single(name)
    }
}

impl From<Vec<String>> for Column {
    fn from(names: Vec<String>) -> Self {
        Column::Multi(names)
    }
}

impl From<Vec<&str>> for Column {
    fn from(names: Vec<&str>) -> Self {
        Column::Multi(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Column {
    fn from(names: [&str; N]) -> Self {
        Column::Multi(names.into_iter().map(str::to_string).collect())
    }
}

/// A single column/value comparison.
///
/// Column and value are set together at construction and stay mutable
/// through the `set_*` methods, which return the same condition for
/// chaining.
///
/// # Example
///
/// ```
/// use stdkit_filter::{Condition, ConditionKind};
///
/// let mut condition = Condition::like("name", "*web*").ignore_case();
/// condition.set_value("*db*");
///
/// assert_eq!(condition.kind(), ConditionKind::Like);
/// assert!(condition.ignores_case());
/// assert_eq!(condition.value().as_str(), Some("*db*"));
/// ```
#[derive(Debug, Clone)]
pub struct Condition {
    kind: ConditionKind,
    column: Column,
    value: Value,
    ignore_case: bool,
    meta: Option<MetaData>,
}

impl Condition {
    /// Creates a new condition of the given kind.
    pub fn new(kind: ConditionKind, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Condition {
            kind,
            column: column.into(),
            value: value.into(),
            ignore_case: false,
            meta: None,
        }
    }

    /// Creates an [`Equal`](ConditionKind::Equal) condition.
    pub fn equal(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Condition::new(ConditionKind::Equal, column, value)
    }

    /// Creates an [`Unequal`](ConditionKind::Unequal) condition.
    pub fn unequal(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Condition::new(ConditionKind::Unequal, column, value)
    }

    /// Creates a [`Like`](ConditionKind::Like) condition.
    pub fn like(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Condition::new(ConditionKind::Like, column, value)
    }

    /// Creates an [`Unlike`](ConditionKind::Unlike) condition.
    pub fn unlike(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Condition::new(ConditionKind::Unlike, column, value)
    }

    /// Ignores case on both sides of the comparison.
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Returns whether this condition ignores case.
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Sets whether this condition ignores case.
    pub fn set_ignore_case(&mut self, ignore_case: bool) -> &mut Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn set_column(&mut self, column: impl Into<Column>) -> &mut Self {
        self.column = column.into();
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// Returns this condition's annotations, creating the store on first use.
    pub fn meta_data(&mut self) -> &mut MetaData {
        self.meta.get_or_insert_with(MetaData::default)
    }

    /// Returns this condition's annotations without creating them.
    pub fn meta(&self) -> Option<&MetaData> {
        self.meta.as_ref()
    }

    /// Returns whether `other` is semantically the same condition.
    ///
    /// Kind, case sensitivity, column and value must match; annotations are
    /// ignored. Requiring the same column is stricter than comparing kind,
    /// case and value alone: `Equal(a, 1)` is never the same as `Equal(b, 1)`. `Equal` compares list values as sets, so
    /// `Equal(c, [a, b])` is the same as `Equal(c, [b, a])`. All other kinds
    /// compare values in order.
    pub fn same_as(&self, other: &Condition) -> bool {
        if self.kind != other.kind
            || self.ignore_case != other.ignore_case
            || self.column != other.column
        {
            return false;
        }

        match self.kind {
            ConditionKind::Equal => self.value.set_eq(&other.value),
            _ => self.value == other.value,
        }
    }
}
