//! Numeric targets
//!
//! Numbers convert with `as` semantics: float to int truncates and saturates,
//! int to int wraps. Text goes through the base-prefixed integer parser into
//! 64 bits. Signed targets then cast to their width; unsigned targets reject
//! text that does not fit.

use super::{Coerce, duration_nanos, unsupported};
use crate::error::{ConvertError, ConvertResult};
use crate::parse::{parse_f32, parse_f64, parse_signed, parse_unsigned};
use crate::resolve::indirect;
use crate::value::Value;

macro_rules! signed_coercion {
    ($($name:ident => $ty:ty),+ $(,)?) => {$(
        #[doc = concat!("Coerce a value to `", stringify!($ty), "`")]
        #[allow(trivial_numeric_casts, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        pub fn $name(value: &Value) -> ConvertResult<$ty> {
            const TARGET: &str = stringify!($ty);
            let value = indirect(value);
            if let Some(text) = value.as_text() {
                return Ok(parse_signed(text, TARGET)? as $ty);
            }
            Ok(match &*value {
                Value::Null => 0,
                Value::Bool(b) => <$ty>::from(*b),
                Value::Int(n) => *n as $ty,
                Value::Uint(n) => *n as $ty,
                Value::Float(x) => *x as $ty,
                Value::Float32(x) => *x as $ty,
                Value::Duration(d) => duration_nanos(*d) as $ty,
                other => return Err(unsupported(other, TARGET)),
            })
        }

        impl Coerce for $ty {
            const TARGET: &'static str = stringify!($ty);

            fn coerce(value: &Value) -> ConvertResult<Self> {
                $name(value)
            }

            fn zero() -> Self {
                0
            }
        }
    )+};
}

macro_rules! unsigned_coercion {
    ($($name:ident => $ty:ty),+ $(,)?) => {$(
        #[doc = concat!("Coerce a value to `", stringify!($ty), "`; negative numbers are rejected")]
        #[allow(
            trivial_numeric_casts,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::unnecessary_fallible_conversions
        )]
        pub fn $name(value: &Value) -> ConvertResult<$ty> {
            const TARGET: &str = stringify!($ty);
            let value = indirect(value);
            if let Some(text) = value.as_text() {
                let n = parse_unsigned(text, TARGET)?;
                return <$ty>::try_from(n)
                    .map_err(|_| ConvertError::parse(text, TARGET, "value out of range"));
            }
            let negative = || ConvertError::negative(value.to_string(), TARGET);
            Ok(match &*value {
                Value::Null => 0,
                Value::Bool(b) => <$ty>::from(*b),
                Value::Int(n) if *n < 0 => return Err(negative()),
                Value::Int(n) => *n as $ty,
                Value::Uint(n) => *n as $ty,
                Value::Float(x) if *x < 0.0 => return Err(negative()),
                Value::Float(x) => *x as $ty,
                Value::Float32(x) if *x < 0.0 => return Err(negative()),
                Value::Float32(x) => *x as $ty,
                Value::Duration(d) if duration_nanos(*d) < 0 => return Err(negative()),
                Value::Duration(d) => duration_nanos(*d) as $ty,
                other => return Err(unsupported(other, TARGET)),
            })
        }

        impl Coerce for $ty {
            const TARGET: &'static str = stringify!($ty);

            fn coerce(value: &Value) -> ConvertResult<Self> {
                $name(value)
            }

            fn zero() -> Self {
                0
            }
        }
    )+};
}

macro_rules! float_coercion {
    ($($name:ident => $ty:ty, $parse:ident),+ $(,)?) => {$(
        #[doc = concat!("Coerce a value to `", stringify!($ty), "`")]
        #[allow(
            trivial_numeric_casts,
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss
        )]
        pub fn $name(value: &Value) -> ConvertResult<$ty> {
            const TARGET: &str = stringify!($ty);
            let value = indirect(value);
            if let Some(text) = value.as_text() {
                return $parse(text);
            }
            Ok(match &*value {
                Value::Null => 0.0,
                Value::Bool(b) => <$ty>::from(u8::from(*b)),
                Value::Int(n) => *n as $ty,
                Value::Uint(n) => *n as $ty,
                Value::Float(x) => *x as $ty,
                Value::Float32(x) => *x as $ty,
                Value::Duration(d) => duration_nanos(*d) as $ty,
                other => return Err(unsupported(other, TARGET)),
            })
        }

        impl Coerce for $ty {
            const TARGET: &'static str = stringify!($ty);

            fn coerce(value: &Value) -> ConvertResult<Self> {
                $name(value)
            }

            fn zero() -> Self {
                0.0
            }
        }
    )+};
}

signed_coercion! {
    to_i8 => i8,
    to_i16 => i16,
    to_i32 => i32,
    to_i64 => i64,
    to_isize => isize,
}

unsigned_coercion! {
    to_u8 => u8,
    to_u16 => u16,
    to_u32 => u32,
    to_u64 => u64,
    to_usize => usize,
}

float_coercion! {
    to_f32 => f32, parse_f32,
    to_f64 => f64, parse_f64,
}
