//! Fixed textual encodings of timestamps used by the exported documents.

use chrono::{
    DateTime, NaiveDate, TimeZone, Utc,
    format::{Item, StrftimeItems},
};
use std::fmt::Write as _;

/// iCalendar "UTC basic" form, e.g. `20160707T170000Z`.
pub const UTC_BASIC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// RFC 822 style date used by RSS, always English and suffixed with `GMT`.
pub const RFC822_GMT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Whether `pattern` is a strftime pattern chrono can render.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Renders `at` converted to UTC with `pattern`. Falls back to `fallback`
/// when the pattern cannot be rendered.
pub fn format_utc<Tz: TimeZone>(at: &DateTime<Tz>, pattern: &str, fallback: &str) -> String {
    let at = at.with_timezone(&Utc);
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_ok() {
        return out;
    }

    tracing::warn!(pattern, "unrenderable date pattern, using default");
    at.format(fallback).to_string()
}

pub fn utc_basic<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format_utc(at, UTC_BASIC_FORMAT, UTC_BASIC_FORMAT)
}

pub fn rfc822<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format_utc(at, RFC822_GMT_FORMAT, RFC822_GMT_FORMAT)
}

/// Calendar dates are published as midnight UTC.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
