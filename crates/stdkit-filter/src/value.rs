//! Comparison values carried by conditions.
//!
//! A [`Value`] is what a [`Condition`](crate::Condition) compares its column
//! against: a scalar, or a list of scalars for multi-value conditions such as
//! `status IN (1, 2)`. The filter core never interprets values beyond
//! comparing them for [`same_as`](crate::Rule::same_as).

use std::cmp::Ordering;

use serde::Serialize;

/// Owned comparison value.
///
/// # Example
///
/// ```
/// use stdkit_filter::Value;
///
/// let single: Value = "open".into();
/// let many: Value = vec!["open", "closed"].into();
///
/// assert!(!single.is_list());
/// assert_eq!(many.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `List`.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Compares two values as sets.
    ///
    /// Lists are compared without regard to order or duplicates. A scalar
    /// on either side counts as a one-element set, so `"a"` and `["a", "a"]`
    /// are set-equal.
    pub fn set_eq(&self, other: &Value) -> bool {
        if !self.is_list() && !other.is_list() {
            return self == other;
        }

        let lhs = self.members();
        let rhs = other.members();

        lhs.iter().all(|v| rhs.contains(v)) && rhs.iter().all(|v| lhs.contains(v))
    }

    fn members(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            scalar => std::slice::from_ref(scalar),
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers keep their original representation, but compare across variants:
/// `Number::I64(1) == Number::U64(1)` and `Number::I64(2) == Number::F64(2.0)`.
/// Integers compare exactly against floats, even beyond 2^53.
///
/// Comparison is total so that a value always equals itself. A NaN equals a
/// NaN with the same bits and sorts above every other number (below, if its
/// sign bit is set), matching [`f64::total_cmp`].
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64. Large integers may lose precision.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Ordering {
        match (self.integer(), other.integer()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(a), None) => compare_int_float(a, other.to_f64()),
            (None, Some(b)) => compare_int_float(b, self.to_f64()).reverse(),
            (None, None) => compare_floats(self.to_f64(), other.to_f64()),
        }
    }

    fn integer(self) -> Option<i128> {
        match self {
            Number::I64(n) => Some(i128::from(n)),
            Number::U64(n) => Some(i128::from(n)),
            Number::F64(_) => None,
        }
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    // -0.0 and 0.0 stay equal; only NaN falls back to the bitwise order
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

fn compare_int_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    // Every i64 and u64 lies strictly inside (-2^127, 2^127)
    const BOUND: f64 = (1u128 << 127) as f64;
    if float >= BOUND {
        return Ordering::Less;
    }
    if float <= -BOUND {
        return Ordering::Greater;
    }

    // A truncated finite float in range is an exact integer
    let whole = float.trunc() as i128;
    int.cmp(&whole).then_with(|| {
        let fract = float - float.trunc();
        if fract > 0.0 {
            Ordering::Less
        } else if fract < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$source> for Value {
                fn from(n: $source) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_extractors() {
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from(42i32).as_number(), Some(Number::I64(42)));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert!(Value::from(None::<&str>).is_null());

        // Wrong type returns None
        assert_eq!(Value::from("test").as_number(), None);
        assert_eq!(Value::from(1u8).as_str(), None);
        assert_eq!(Value::from("x").as_list(), None);
    }

    #[test]
    fn list_conversions() {
        let from_vec = Value::from(vec!["a", "b"]);
        let from_array = Value::from(["a", "b"]);
        let collected: Value = ["a", "b"].into_iter().collect();

        assert_eq!(from_vec, from_array);
        assert_eq!(from_vec, collected);
        assert!(from_vec.is_list());
    }

    #[test]
    fn number_equality_across_variants() {
        assert_eq!(Number::I64(5), Number::U64(5));
        assert_eq!(Number::I64(5), Number::F64(5.0));
        assert_ne!(Number::I64(-1), Number::U64(u64::MAX));
        assert_eq!(Number::F64(0.0), Number::F64(-0.0));
    }

    #[test]
    fn nan_equals_itself() {
        let nan = Number::F64(f64::NAN);
        assert_eq!(nan, nan);
        assert_ne!(nan, Number::F64(1.0));
        assert_ne!(nan, Number::I64(0));
        assert!(Value::from(f64::NAN).set_eq(&Value::from([f64::NAN, f64::NAN])));
    }

    #[test]
    fn integers_compare_exactly_against_floats() {
        let above = 9_007_199_254_740_993i64; // 2^53 + 1
        let float = Number::F64(9_007_199_254_740_992.0);

        assert_ne!(Number::I64(above), float);
        assert_eq!(Number::I64(above).compare(float), Ordering::Greater);
        assert_eq!(Number::I64(above - 1), float);
        assert_eq!(Number::U64(u64::MAX).compare(Number::F64(u64::MAX as f64)), Ordering::Less);
        assert_eq!(Number::I64(i64::MIN), Number::F64(i64::MIN as f64));
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(Number::I64(5).compare(Number::U64(10)), Ordering::Less);
        assert_eq!(Number::U64(10).compare(Number::I64(-3)), Ordering::Greater);
        assert_eq!(Number::U64(10).compare(Number::F64(5.5)), Ordering::Greater);
        assert_eq!(Number::I64(-3).compare(Number::F64(-2.5)), Ordering::Less);
        assert_eq!(Number::I64(-2).compare(Number::F64(-2.5)), Ordering::Greater);
        assert_eq!(Number::I64(i64::MAX).compare(Number::F64(f64::INFINITY)), Ordering::Less);
        assert_eq!(Number::F64(f64::NEG_INFINITY).compare(Number::U64(0)), Ordering::Less);
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), Ordering::Greater);
    }

    #[test]
    fn set_eq_ignores_order_and_duplicates() {
        let ab = Value::from(["a", "b"]);
        let ba = Value::from(["b", "a"]);
        let abb = Value::from(["a", "b", "b"]);
        let abc = Value::from(["a", "b", "c"]);

        assert!(ab.set_eq(&ba));
        assert!(ab.set_eq(&abb));
        assert!(!ab.set_eq(&abc));
        assert!(!abc.set_eq(&ab));
    }

    #[test]
    fn set_eq_promotes_scalars() {
        assert!(Value::from("a").set_eq(&Value::from(["a", "a"])));
        assert!(Value::from(["a"]).set_eq(&Value::from("a")));
        assert!(!Value::from("a").set_eq(&Value::from(["a", "b"])));
        assert!(Value::from("a").set_eq(&Value::from("a")));
    }

    #[test]
    fn serializes_untagged() {
        let value = Value::from(vec![Value::from("a"), Value::from(1i64), Value::Null]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"["a",1,null]"#);
    }
}
