//! Table-driven checks of the scalar coercion matrix

use chrono::TimeDelta;
use morph_convert::{
    ConvertError, Markup, Value, to_bool, to_f32, to_f64, to_i8, to_i16, to_i32, to_i64,
    to_isize, to_string, to_u8, to_u8_or, to_u8_vec, to_u8_vec_or_default, to_u16, to_u32,
    to_u64, to_usize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fmt;
use std::sync::Arc;

// ===== INTEGER TARGETS =====

#[rstest]
#[case::null(Value::Null, 0)]
#[case::bool_true(Value::from(true), 1)]
#[case::bool_false(Value::from(false), 0)]
#[case::int(Value::from(-42), -42)]
#[case::uint(Value::from(42u32), 42)]
#[case::float_truncates(Value::from(8.99), 8)]
#[case::negative_float_truncates(Value::from(-8.99), -8)]
#[case::float32(Value::from(2.5f32), 2)]
#[case::duration_nanos(Value::from(TimeDelta::microseconds(3)), 3000)]
#[case::text(Value::from("8"), 8)]
#[case::leading_zero(Value::from("09"), 9)]
#[case::many_leading_zeros(Value::from("0009"), 9)]
#[case::zero_text(Value::from("0"), 0)]
#[case::octal(Value::from("0o17"), 15)]
#[case::signed_hex(Value::from("-0x10"), -16)]
#[case::binary(Value::from("+0b11"), 3)]
#[case::separated(Value::from("1_000"), 1000)]
#[case::separated_hex(Value::from("-0x_ff"), -255)]
#[case::markup(Value::from(Markup::html("12")), 12)]
#[case::reference(Value::reference(7), 7)]
#[case::nested_reference(Value::reference(Value::reference("5")), 5)]
#[case::null_reference(Value::null_ref(), 0)]
fn test_i64_accepts(#[case] input: Value, #[case] expected: i64) {
    assert_eq!(to_i64(&input).unwrap(), expected);
}

#[rstest]
#[case::octal_digit(Value::from("0o9"))]
#[case::empty(Value::from(""))]
#[case::words(Value::from("test"))]
#[case::float_text(Value::from("8.0"))]
#[case::unsigned_hex(Value::from("0x10"))]
#[case::overflow(Value::from("9223372036854775808"))]
#[case::doubled_separator(Value::from("1__000"))]
#[case::trailing_separator(Value::from("1000_"))]
fn test_i64_parse_failures(#[case] input: Value) {
    let err = to_i64(&input).unwrap_err();
    assert!(err.is_parse(), "{err}");
    assert_eq!(err.target(), Some("i64"));
}

#[rstest]
#[case::seq(Value::seq([1]))]
#[case::map(Value::map([("a", 1)]))]
#[case::bytes(Value::bytes(vec![1]))]
#[case::version(Value::from(morph_convert::VersionInfo::new(1, 0, 0)))]
#[case::function(Value::named_function("app::handler"))]
fn test_i64_unsupported_kinds(#[case] input: Value) {
    assert!(matches!(
        to_i64(&input),
        Err(ConvertError::Unsupported { .. })
    ));
}

#[test]
fn test_narrowing_wraps() {
    assert_eq!(to_i8(&Value::from(300)).unwrap(), 44);
    assert_eq!(to_i8(&Value::from("200")).unwrap(), -56);
    assert_eq!(to_i16(&Value::from(70_000)).unwrap(), 4464);
    assert_eq!(to_i32(&Value::from(u64::MAX)).unwrap(), -1);
    assert_eq!(to_u8(&Value::from(256)).unwrap(), 0);
}

#[test]
fn test_signed_keeps_negatives() {
    assert_eq!(to_isize(&Value::from(-3)).unwrap(), -3);
    assert_eq!(to_isize(&Value::from(-3.7)).unwrap(), -3);
    assert_eq!(to_i32(&Value::from("-12")).unwrap(), -12);
}

// ===== UNSIGNED TARGETS =====

#[rstest]
#[case::int(Value::from(-1))]
#[case::float(Value::from(-0.5))]
#[case::float32(Value::from(-2.0f32))]
#[case::duration(Value::from(TimeDelta::nanoseconds(-1)))]
#[case::through_reference(Value::reference(-9))]
fn test_unsigned_rejects_negative(#[case] input: Value) {
    assert!(to_u64(&input).unwrap_err().is_negative());
    assert!(to_usize(&input).unwrap_err().is_negative());
    assert!(to_u8(&input).unwrap_err().is_negative());
}

#[test]
fn test_unsigned_text() {
    assert_eq!(to_u64(&Value::from("18446744073709551615")).unwrap(), u64::MAX);
    assert_eq!(to_u32(&Value::from("007")).unwrap(), 7);
    // A sign in text is a syntax error, never the negative error
    let err = to_u64(&Value::from("-1")).unwrap_err();
    assert!(err.is_parse());
    assert!(to_u64(&Value::from("+1")).is_err());
}

#[rstest]
#[case::u8_overflow("256", "u8")]
#[case::u8_far_overflow("300", "u8")]
#[case::u16_overflow("70000", "u16")]
#[case::u32_overflow("4294967296", "u32")]
#[case::u64_overflow("18446744073709551616", "u64")]
fn test_unsigned_text_out_of_range(#[case] text: &str, #[case] target: &str) {
    let value = Value::from(text);
    let err = match target {
        "u8" => to_u8(&value).map(u64::from),
        "u16" => to_u16(&value).map(u64::from),
        "u32" => to_u32(&value).map(u64::from),
        _ => to_u64(&value),
    }
    .unwrap_err();
    assert!(err.is_parse(), "{err}");
    assert_eq!(err.target(), Some(target));
}

#[test]
fn test_unsigned_text_out_of_range_in_sequences() {
    let value = Value::seq(["1", "256"]);
    assert!(to_u8_vec(&value).is_err());
    assert!(to_u8_vec_or_default(&value).is_empty());
    assert_eq!(to_u8_or(&Value::from("256"), 7), 7);
}

#[test]
fn test_unsigned_accepts_non_negative() {
    assert_eq!(to_u64(&Value::from(0)).unwrap(), 0);
    assert_eq!(to_usize(&Value::from(3.9)).unwrap(), 3);
    assert_eq!(to_u64(&Value::Null).unwrap(), 0);
    assert_eq!(to_u8(&Value::from(true)).unwrap(), 1);
}

// ===== FLOAT TARGETS =====

#[rstest]
#[case::null(Value::Null, 0.0)]
#[case::bool(Value::from(true), 1.0)]
#[case::int(Value::from(-3), -3.0)]
#[case::text(Value::from("2.5"), 2.5)]
#[case::exponent(Value::from("1e3"), 1000.0)]
#[case::duration(Value::from(TimeDelta::nanoseconds(12)), 12.0)]
fn test_f64_accepts(#[case] input: Value, #[case] expected: f64) {
    assert_eq!(to_f64(&input).unwrap(), expected);
}

#[test]
fn test_float_special_text() {
    assert!(to_f64(&Value::from("inf")).unwrap().is_infinite());
    assert!(to_f64(&Value::from("NaN")).unwrap().is_nan());
    assert!(to_f64(&Value::from("1.2.3")).is_err());
    assert_eq!(to_f32(&Value::from(0.1)).unwrap(), 0.1_f32);
}

#[rstest]
#[case::f64_overflow("1e400", "f64")]
#[case::f64_negative_overflow("-1e309", "f64")]
#[case::f32_overflow("1e40", "f32")]
#[case::f32_negative_overflow("-3.5e38", "f32")]
fn test_float_text_out_of_range(#[case] text: &str, #[case] target: &str) {
    let value = Value::from(text);
    let err = match target {
        "f32" => to_f32(&value).map(f64::from),
        _ => to_f64(&value),
    }
    .unwrap_err();
    assert!(err.is_parse(), "{err}");
    assert_eq!(err.target(), Some(target));
}

#[test]
fn test_infinity_text_is_not_overflow() {
    assert_eq!(to_f32(&Value::from("-Infinity")).unwrap(), f32::NEG_INFINITY);
    assert_eq!(to_f64(&Value::from("INF")).unwrap(), f64::INFINITY);
}

// ===== BOOL TARGET =====

#[rstest]
#[case::one("1", true)]
#[case::t("t", true)]
#[case::upper_t("T", true)]
#[case::upper("TRUE", true)]
#[case::lower("true", true)]
#[case::title("True", true)]
#[case::zero("0", false)]
#[case::f("f", false)]
#[case::upper_f("F", false)]
#[case::upper_false("FALSE", false)]
#[case::lower_false("false", false)]
#[case::title_false("False", false)]
fn test_bool_literals(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(to_bool(&Value::from(text)).unwrap(), expected);
}

#[rstest]
#[case::word("test")]
#[case::yes("yes")]
#[case::mixed_case("tRuE")]
#[case::padded(" true")]
#[case::empty("")]
fn test_bool_rejects(#[case] text: &str) {
    assert!(to_bool(&Value::from(text)).unwrap_err().is_parse());
}

#[test]
fn test_bool_numeric() {
    assert!(!to_bool(&Value::from(0)).unwrap());
    assert!(to_bool(&Value::from(-5)).unwrap());
    assert!(to_bool(&Value::from(0.1)).unwrap());
    assert!(to_bool(&Value::from(f64::NAN)).unwrap());
    assert!(!to_bool(&Value::Null).unwrap());
    assert!(to_bool(&Value::from(TimeDelta::seconds(1))).unwrap());
    assert!(to_bool(&Value::seq([true])).is_err());
}

// ===== STRING TARGET =====

#[derive(Debug)]
struct Money(i64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("disk full")]
struct DiskFull;

#[rstest]
#[case::null(Value::Null, "")]
#[case::text(Value::from("hi"), "hi")]
#[case::bool(Value::from(true), "true")]
#[case::int(Value::from(-8), "-8")]
#[case::uint(Value::from(u64::MAX), "18446744073709551615")]
#[case::float(Value::from(8.31), "8.31")]
#[case::whole_float(Value::from(8.0), "8")]
#[case::float32(Value::from(0.1f32), "0.1")]
#[case::positive_inf(Value::from(f64::INFINITY), "+Inf")]
#[case::negative_inf(Value::from(f64::NEG_INFINITY), "-Inf")]
#[case::nan(Value::from(f64::NAN), "NaN")]
#[case::bytes(Value::bytes(*b"raw"), "raw")]
#[case::markup(Value::from(Markup::url("a?b=c")), "a?b=c")]
#[case::duration(Value::from(TimeDelta::milliseconds(1500)), "1.5s")]
#[case::version(Value::from(morph_convert::VersionInfo::new(1, 2, 3)), "1.2.3")]
#[case::renderable(Value::display(Money(5)), "$5")]
#[case::error(Value::error(DiskFull), "disk full")]
#[case::function(Value::named_function("app::server::handler"), "handler")]
#[case::dotted_function(Value::named_function("main.handler"), "handler")]
fn test_string_rules(#[case] input: Value, #[case] expected: &str) {
    assert_eq!(to_string(&input).unwrap(), expected);
}

#[test]
fn test_string_rejects_containers() {
    assert!(to_string(&Value::seq(["a"])).is_err());
    assert!(to_string(&Value::map([("a", "b")])).is_err());
}

#[test]
fn test_string_stops_at_renderables() {
    let shared = Arc::new(Value::display(Money(9)));
    let value = Value::reference(Value::from(shared));
    assert_eq!(to_string(&value).unwrap(), "$9");
}
