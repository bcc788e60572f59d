//! The coercion matrix
//!
//! One strict function per target type. Every function resolves reference
//! layers first and then applies a fixed rule per source kind:
//!
//! | source      | numeric target        | bool target   | string target     |
//! |-------------|-----------------------|---------------|-------------------|
//! | null        | `0`                   | `false`       | `""`              |
//! | bool        | `1` / `0`             | as is         | `true` / `false`  |
//! | number      | `as` cast             | non-zero      | canonical decimal |
//! | duration    | nanosecond count      | non-zero      | `1h2m3s` form     |
//! | text        | target's parser       | literal set   | as is             |
//! | other       | unsupported           | unsupported   | see [`to_string`] |
//!
//! Unsigned targets reject negative numeric sources with
//! [`ConvertError::NegativeNotAllowed`].

mod boolean;
mod bytes;
mod number;
mod temporal;
mod text;

pub use boolean::to_bool;
pub use bytes::to_bytes;
pub use number::{
    to_f32, to_f64, to_i8, to_i16, to_i32, to_i64, to_isize, to_u8, to_u16, to_u32, to_u64,
    to_usize,
};
pub use temporal::{to_duration, to_time};
pub use text::to_string;

use crate::error::{ConvertError, ConvertResult};
use crate::lenient::lenient;
use crate::value::Value;
use chrono::TimeDelta;

/// A type the coercion matrix can produce from any [`Value`]
pub trait Coerce: Sized {
    /// Target name used in error messages
    const TARGET: &'static str;

    /// Strict coercion
    fn coerce(value: &Value) -> ConvertResult<Self>;

    /// The value lenient coercion falls back to
    fn zero() -> Self;
}

impl Value {
    /// Strictly coerce this value to `T`
    ///
    /// ```
    /// use morph_convert::Value;
    ///
    /// assert_eq!(Value::from("09").coerce::<u8>().unwrap(), 9);
    /// assert!(Value::from(-1).coerce::<u64>().is_err());
    /// ```
    pub fn coerce<T: Coerce>(&self) -> ConvertResult<T> {
        T::coerce(self)
    }

    /// Coerce to `T`, or `default` on failure
    pub fn coerce_or<T: Coerce>(&self, default: T) -> T {
        lenient(|| T::coerce(self), default)
    }

    /// Coerce to `T`, or its zero value on failure
    pub fn coerce_or_default<T: Coerce>(&self) -> T {
        lenient(|| T::coerce(self), T::zero())
    }
}

pub(crate) fn unsupported(value: &Value, target: &str) -> ConvertError {
    ConvertError::unsupported(value.to_string(), value.kind(), target)
}

/// Nanosecond count of a duration, clamped to the i64 range
pub(crate) fn duration_nanos(d: TimeDelta) -> i64 {
    d.num_nanoseconds().unwrap_or(if d < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}
