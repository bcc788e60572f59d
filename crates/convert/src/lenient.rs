//! Lenient coercion
//!
//! Every strict `to_X` has a `to_X_or(value, default)` and a
//! `to_X_or_default(value)` twin. Both are built on [`lenient`], which is the
//! only place a coercion error is discarded.

use crate::collection::{
    to_bool_map, to_bool_vec, to_duration_vec, to_i8_vec, to_i16_vec, to_i32_vec, to_i64_map,
    to_i64_vec, to_isize_map, to_isize_vec, to_string_map, to_string_vec, to_string_vec_map,
    to_u8_vec, to_u16_vec, to_u32_vec, to_u64_vec, to_value_map, to_value_vec,
};
use crate::coerce::{
    to_bool, to_bytes, to_duration, to_f32, to_f64, to_i8, to_i16, to_i32, to_i64, to_isize,
    to_string, to_time, to_u8, to_u16, to_u32, to_u64, to_usize,
};
use crate::epoch::zero_time;
use crate::error::ConvertResult;
use crate::mobile::to_mobile;
use crate::value::{Timestamp, Value};
use crate::version::{VersionInfo, parse_version};
use chrono::TimeDelta;
use indexmap::IndexMap;

/// Run a strict coercion, yielding `default` on failure
#[inline]
pub fn lenient<T>(strict: impl FnOnce() -> ConvertResult<T>, default: T) -> T {
    strict().unwrap_or(default)
}

macro_rules! lenient_pair {
    ($($strict:ident => $or:ident, $or_default:ident : $ty:ty = $zero:expr;)+) => {$(
        #[doc = concat!("[`", stringify!($strict), "`] or `default` on failure")]
        pub fn $or(value: &Value, default: $ty) -> $ty {
            lenient(|| $strict(value), default)
        }

        #[doc = concat!("[`", stringify!($strict), "`] or its zero value on failure")]
        pub fn $or_default(value: &Value) -> $ty {
            lenient(|| $strict(value), $zero)
        }
    )+};
}

lenient_pair! {
    to_bool => to_bool_or, to_bool_or_default: bool = false;
    to_i8 => to_i8_or, to_i8_or_default: i8 = 0;
    to_i16 => to_i16_or, to_i16_or_default: i16 = 0;
    to_i32 => to_i32_or, to_i32_or_default: i32 = 0;
    to_i64 => to_i64_or, to_i64_or_default: i64 = 0;
    to_isize => to_isize_or, to_isize_or_default: isize = 0;
    to_u8 => to_u8_or, to_u8_or_default: u8 = 0;
    to_u16 => to_u16_or, to_u16_or_default: u16 = 0;
    to_u32 => to_u32_or, to_u32_or_default: u32 = 0;
    to_u64 => to_u64_or, to_u64_or_default: u64 = 0;
    to_usize => to_usize_or, to_usize_or_default: usize = 0;
    to_f32 => to_f32_or, to_f32_or_default: f32 = 0.0;
    to_f64 => to_f64_or, to_f64_or_default: f64 = 0.0;
    to_string => to_string_or, to_string_or_default: String = String::new();
    to_time => to_time_or, to_time_or_default: Timestamp = zero_time();
    to_duration => to_duration_or, to_duration_or_default: TimeDelta = TimeDelta::zero();
    to_bytes => to_bytes_or, to_bytes_or_default: Vec<u8> = Vec::new();
    parse_version => parse_version_or, parse_version_or_default: VersionInfo = VersionInfo::default();
    to_mobile => to_mobile_or, to_mobile_or_default: String = String::new();

    to_string_vec => to_string_vec_or, to_string_vec_or_default: Vec<String> = Vec::new();
    to_bool_vec => to_bool_vec_or, to_bool_vec_or_default: Vec<bool> = Vec::new();
    to_isize_vec => to_isize_vec_or, to_isize_vec_or_default: Vec<isize> = Vec::new();
    to_i64_vec => to_i64_vec_or, to_i64_vec_or_default: Vec<i64> = Vec::new();
    to_i32_vec => to_i32_vec_or, to_i32_vec_or_default: Vec<i32> = Vec::new();
    to_i16_vec => to_i16_vec_or, to_i16_vec_or_default: Vec<i16> = Vec::new();
    to_i8_vec => to_i8_vec_or, to_i8_vec_or_default: Vec<i8> = Vec::new();
    to_u64_vec => to_u64_vec_or, to_u64_vec_or_default: Vec<u64> = Vec::new();
    to_u32_vec => to_u32_vec_or, to_u32_vec_or_default: Vec<u32> = Vec::new();
    to_u16_vec => to_u16_vec_or, to_u16_vec_or_default: Vec<u16> = Vec::new();
    to_u8_vec => to_u8_vec_or, to_u8_vec_or_default: Vec<u8> = Vec::new();
    to_duration_vec => to_duration_vec_or, to_duration_vec_or_default: Vec<TimeDelta> = Vec::new();
    to_value_vec => to_value_vec_or, to_value_vec_or_default: Vec<Value> = Vec::new();

    to_value_map => to_value_map_or, to_value_map_or_default: IndexMap<String, Value> = IndexMap::new();
    to_string_map => to_string_map_or, to_string_map_or_default: IndexMap<String, String> = IndexMap::new();
    to_string_vec_map => to_string_vec_map_or, to_string_vec_map_or_default: IndexMap<String, Vec<String>> = IndexMap::new();
    to_bool_map => to_bool_map_or, to_bool_map_or_default: IndexMap<String, bool> = IndexMap::new();
    to_isize_map => to_isize_map_or, to_isize_map_or_default: IndexMap<String, isize> = IndexMap::new();
    to_i64_map => to_i64_map_or, to_i64_map_or_default: IndexMap<String, i64> = IndexMap::new();
}
