//! Collection and mapping lifters
//!
//! Generic lifters take the element coercer as a parameter, so every scalar
//! rule of the coercion matrix applies unchanged inside containers.

mod dedupe;
mod map;
mod seq;

pub use dedupe::{dedupe, merge_dedupe, project, to_set};
pub use map::{
    coerce_map_of, coerce_map_of_with, map_keys, map_values, to_bool_map, to_i64_map,
    to_isize_map, to_string_map, to_string_vec_map, to_value_map,
};
pub use seq::{
    coerce_slice_of, to_bool_vec, to_duration_vec, to_i8_vec, to_i16_vec, to_i32_vec,
    to_i64_vec, to_isize_vec, to_string_vec, to_u8_vec, to_u16_vec, to_u32_vec, to_u64_vec,
    to_value_vec,
};
