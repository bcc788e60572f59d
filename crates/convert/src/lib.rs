//! # morph-convert
//!
//! Deterministic coercion of dynamic values into typed scalars, collections
//! and mappings.
//!
//! A [`Value`] holds data of a kind known only at runtime: configuration
//! entries, decoded JSON, template arguments. The strict `to_*` functions turn
//! it into a requested Rust type under one fixed rule set and report every
//! failure as a [`ConvertError`]. Each strict function has `_or` and
//! `_or_default` twins that fall back instead of failing.
//!
//! ```
//! use morph_convert::{Value, to_i32, to_u64, to_duration, to_string_map_or_default};
//!
//! assert_eq!(to_i32(&Value::from("0009")).unwrap(), 9);
//! assert!(to_u64(&Value::from(-3)).unwrap_err().is_negative());
//! assert_eq!(to_duration(&Value::from("90")).unwrap().num_nanoseconds(), Some(90));
//!
//! let map = to_string_map_or_default(&Value::from(r#"{"a":"1"}"#));
//! assert_eq!(map["a"], "1");
//! ```
//!
//! The engine is pure and holds no state beyond compiled regexes. Resource
//! bounds for JSON text and reference chains live in [`ConvertLimits`].

pub mod coerce;
pub mod collection;
pub mod epoch;
pub mod error;
pub mod json;
pub mod lenient;
pub mod limits;
pub mod mobile;
pub mod parse;
pub mod resolve;
pub mod tuple;
pub mod value;
pub mod version;

pub use coerce::{
    Coerce, to_bool, to_bytes, to_duration, to_f32, to_f64, to_i8, to_i16, to_i32, to_i64,
    to_isize, to_string, to_time, to_u8, to_u16, to_u32, to_u64, to_usize,
};
pub use collection::{
    coerce_map_of, coerce_map_of_with, coerce_slice_of, dedupe, map_keys, map_values,
    merge_dedupe, project, to_bool_map, to_bool_vec, to_duration_vec, to_i8_vec, to_i16_vec,
    to_i32_vec, to_i64_map, to_i64_vec, to_isize_map, to_isize_vec, to_set, to_string_map,
    to_string_vec, to_string_vec_map, to_u8_vec, to_u16_vec, to_u32_vec, to_u64_vec,
    to_value_map, to_value_vec,
};
pub use epoch::{
    is_zero_time, ms_to_time, ns_to_time, sec_to_time, time_to_ms, time_to_ns, time_to_sec,
    time_to_us, us_to_time, zero_time,
};
pub use error::{ConvertError, ConvertResult};
pub use json::{deep_copy, from_json_slice, json_escape, to_json_string, to_styled_json_string};
pub use lenient::*;
pub use limits::ConvertLimits;
pub use mobile::{is_cn_mobile, to_mobile};
pub use parse::{
    format_duration, parse_bool, parse_duration, parse_f32, parse_f64, parse_i64,
    parse_timestamp, parse_u64,
};
pub use resolve::{indirect, indirect_to_renderable};
pub use tuple::Tuple;
pub use value::{Displayed, Markup, MarkupKind, Render, Timestamp, Value, ValueKind};
pub use version::{VersionInfo, parse_version};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Coerce, ConvertError, ConvertLimits, ConvertResult, Markup, Render, Timestamp, Tuple,
        Value, ValueKind, VersionInfo,
    };
}
