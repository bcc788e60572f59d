//! Unix epoch projections
//!
//! Conversions between epoch offsets and [`Timestamp`]. Timestamps built here
//! are in UTC and keep sub-second precision. The zero timestamp
//! (`0001-01-01T00:00:00Z`) projects to `0` at every resolution.

use crate::error::{ConvertError, ConvertResult};
use crate::value::Timestamp;
use chrono::{DateTime, NaiveDate, Utc};

fn out_of_range(n: impl ToString, unit: &str) -> ConvertError {
    ConvertError::parse(n.to_string(), "timestamp", format!("{unit} since epoch out of range"))
}

/// Timestamp `secs` seconds after the Unix epoch
pub fn sec_to_time(secs: i64) -> ConvertResult<Timestamp> {
    DateTime::from_timestamp(secs, 0)
        .map(|t| t.fixed_offset())
        .ok_or_else(|| out_of_range(secs, "seconds"))
}

/// Timestamp `ms` milliseconds after the Unix epoch
pub fn ms_to_time(ms: i64) -> ConvertResult<Timestamp> {
    DateTime::from_timestamp_millis(ms)
        .map(|t| t.fixed_offset())
        .ok_or_else(|| out_of_range(ms, "milliseconds"))
}

/// Timestamp `us` microseconds after the Unix epoch
pub fn us_to_time(us: i64) -> ConvertResult<Timestamp> {
    DateTime::from_timestamp_micros(us)
        .map(|t| t.fixed_offset())
        .ok_or_else(|| out_of_range(us, "microseconds"))
}

/// Timestamp `ns` nanoseconds after the Unix epoch; every i64 is in range
pub fn ns_to_time(ns: i64) -> Timestamp {
    DateTime::from_timestamp_nanos(ns).fixed_offset()
}

/// The zero timestamp, `0001-01-01T00:00:00Z`
pub fn zero_time() -> Timestamp {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(DateTime::<Utc>::MIN_UTC, |naive| naive.and_utc())
        .fixed_offset()
}

pub fn is_zero_time(t: &Timestamp) -> bool {
    *t == zero_time()
}

/// Whole seconds since the epoch
pub fn time_to_sec(t: &Timestamp) -> i64 {
    if is_zero_time(t) { 0 } else { t.timestamp() }
}

/// Whole milliseconds since the epoch
pub fn time_to_ms(t: &Timestamp) -> i64 {
    if is_zero_time(t) { 0 } else { t.timestamp_millis() }
}

/// Whole microseconds since the epoch
pub fn time_to_us(t: &Timestamp) -> i64 {
    if is_zero_time(t) { 0 } else { t.timestamp_micros() }
}

/// Nanoseconds since the epoch, clamped to the i64 range
pub fn time_to_ns(t: &Timestamp) -> i64 {
    if is_zero_time(t) {
        return 0;
    }
    let nanos = i128::from(t.timestamp()) * 1_000_000_000 + i128::from(t.timestamp_subsec_nanos());
    i64::try_from(nanos).unwrap_or(if nanos < 0 { i64::MIN } else { i64::MAX })
}
