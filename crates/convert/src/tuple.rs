//! Fixed-length heterogeneous tuples
//!
//! Positional accessors never fail: a missing position reads as null, and
//! typed accessors fall back to the target's zero value.

use crate::coerce::{Coerce, to_bool, to_f64, to_i32, to_i64, to_isize, to_string};
use crate::lenient::lenient;
use crate::value::Value;

/// An ordered sequence of values of mixed kinds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tuple {
    elements: Vec<Value>,
}

impl Tuple {
    pub fn new(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    /// Element at `index`, or null past the end
    pub fn get(&self, index: usize) -> &Value {
        static NULL: Value = Value::Null;
        self.elements.get(index).unwrap_or(&NULL)
    }

    pub fn get_string(&self, index: usize) -> String {
        lenient(|| to_string(self.get(index)), String::new())
    }

    pub fn get_bool(&self, index: usize) -> bool {
        lenient(|| to_bool(self.get(index)), false)
    }

    pub fn get_isize(&self, index: usize) -> isize {
        lenient(|| to_isize(self.get(index)), 0)
    }

    pub fn get_i64(&self, index: usize) -> i64 {
        lenient(|| to_i64(self.get(index)), 0)
    }

    pub fn get_i32(&self, index: usize) -> i32 {
        lenient(|| to_i32(self.get(index)), 0)
    }

    pub fn get_f64(&self, index: usize) -> f64 {
        lenient(|| to_f64(self.get(index)), 0.0)
    }

    /// Element at `index` coerced to `T`, or `T`'s zero value
    pub fn get_as<T: Coerce>(&self, index: usize) -> T {
        self.get(index).coerce_or_default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.elements
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Packs a result as `[ok, null]` or `[null, error]`
impl<T, E> From<Result<T, E>> for Tuple
where
    T: Into<Value>,
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::new(vec![v.into(), Value::Null]),
            Err(e) => Self::new(vec![Value::Null, Value::error(e)]),
        }
    }
}

impl From<Tuple> for Value {
    fn from(tuple: Tuple) -> Self {
        Value::Seq(tuple.elements)
    }
}
