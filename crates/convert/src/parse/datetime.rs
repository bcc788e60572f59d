//! Timestamp text parsing with ordered layout fallback

use crate::error::{ConvertError, ConvertResult};
use crate::value::Timestamp;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// How a layout's parsed fields become a timestamp
#[derive(Debug, Clone, Copy)]
enum Zone {
    /// The layout carries a numeric offset
    Offset,
    /// No offset in the text; named zone abbreviations are skipped. Resolves to UTC.
    Naive,
    /// Calendar date only, at midnight UTC
    DateOnly,
    /// `Z` for UTC or a numeric offset in the given format
    ZuluOr(&'static str),
    /// Clock time only, on January 1 of year 0
    Kitchen,
    /// Month, day and clock time, in year 0
    Stamp,
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    name: &'static str,
    format: &'static str,
    zone: Zone,
}

const fn layout(name: &'static str, format: &'static str, zone: Zone) -> Layout {
    Layout { name, format, zone }
}

/// Accepted layouts, tried in order; the first success wins.
///
/// `%.f` accepts an optional fraction after every seconds field.
const LAYOUTS: &[Layout] = &[
    layout("rfc3339", "", Zone::Offset),
    layout("iso8601", "%Y-%m-%dT%H:%M:%S%.f", Zone::Naive),
    layout("rfc1123z", "%a, %d %b %Y %H:%M:%S%.f %z", Zone::Offset),
    layout("rfc1123", "%a, %d %b %Y %H:%M:%S%.f %Z", Zone::Naive),
    layout("rfc822z", "%d %b %y %H:%M %z", Zone::Offset),
    layout("rfc822", "%d %b %y %H:%M %Z", Zone::Naive),
    layout("rfc850", "%A, %d-%b-%y %H:%M:%S%.f %Z", Zone::Naive),
    layout("ansic", "%a %b %e %H:%M:%S%.f %Y", Zone::Naive),
    layout("unix", "%a %b %e %H:%M:%S%.f %Z %Y", Zone::Naive),
    layout("ruby", "%a %b %d %H:%M:%S%.f %z %Y", Zone::Offset),
    layout("display", "%Y-%m-%d %H:%M:%S%.f %z %Z", Zone::Offset),
    layout("date", "%Y-%m-%d", Zone::DateOnly),
    layout("day-month-year", "%d %b %Y", Zone::DateOnly),
    layout("iso8601-offset", "%Y-%m-%dT%H:%M:%S%.f%z", Zone::Offset),
    layout("space-colon-offset", "%Y-%m-%d %H:%M:%S%.f %:z", Zone::Offset),
    layout("space-offset", "%Y-%m-%d %H:%M:%S%.f %z", Zone::Offset),
    layout("zulu-colon", "%Y-%m-%d %H:%M:%S%.f", Zone::ZuluOr("%:z")),
    layout("zulu", "%Y-%m-%d %H:%M:%S%.f", Zone::ZuluOr("%z")),
    layout("datetime", "%Y-%m-%d %H:%M:%S%.f", Zone::Naive),
    layout("kitchen", "%I:%M%p", Zone::Kitchen),
    layout("stamp", "%Y %b %e %H:%M:%S%.f", Zone::Stamp),
];

/// Parse timestamp text against the ordered layout list.
///
/// Offsets are kept as written. Named zone abbreviations resolve to offset
/// zero, zone-less layouts to UTC, and layouts without a year to year 0.
pub fn parse_timestamp(text: &str) -> ConvertResult<Timestamp> {
    for layout in LAYOUTS {
        if let Some(ts) = try_layout(layout, text) {
            tracing::trace!(layout = layout.name, input = text, "timestamp layout matched");
            return Ok(ts);
        }
    }
    Err(ConvertError::parse(
        text,
        "timestamp",
        "no supported layout matched",
    ))
}

fn try_layout(layout: &Layout, text: &str) -> Option<Timestamp> {
    match layout.zone {
        Zone::Offset if layout.format.is_empty() => DateTime::parse_from_rfc3339(text).ok(),
        Zone::Offset => DateTime::parse_from_str(text, layout.format).ok(),
        Zone::Naive if layout.format.contains("%Z") && has_numeric_offset(text) => None,
        Zone::Naive => NaiveDateTime::parse_from_str(text, layout.format)
            .ok()
            .map(utc),
        Zone::DateOnly => NaiveDate::parse_from_str(text, layout.format)
            .ok()
            .map(|date| utc(date.and_time(NaiveTime::MIN))),
        Zone::ZuluOr(offset) => match text.strip_suffix('Z') {
            Some(body) => NaiveDateTime::parse_from_str(body, layout.format)
                .ok()
                .map(utc),
            None => {
                let format = format!("{}{offset}", layout.format);
                DateTime::parse_from_str(text, &format).ok()
            }
        },
        Zone::Kitchen => {
            let time = NaiveTime::parse_from_str(text, layout.format).ok()?;
            let date = NaiveDate::from_ymd_opt(0, 1, 1)?;
            Some(utc(date.and_time(time)))
        }
        Zone::Stamp => {
            let dated = format!("0000 {text}");
            NaiveDateTime::parse_from_str(&dated, layout.format)
                .ok()
                .map(utc)
        }
    }
}

/// A zone-name field must not swallow a numeric offset such as `-0700`
fn has_numeric_offset(text: &str) -> bool {
    text.split_whitespace().any(|token| {
        let mut chars = token.chars();
        matches!(chars.next(), Some('+' | '-')) && chars.next().is_some_and(|c| c.is_ascii_digit())
    })
}

fn utc(naive: NaiveDateTime) -> Timestamp {
    Utc.from_utc_datetime(&naive).fixed_offset()
}
