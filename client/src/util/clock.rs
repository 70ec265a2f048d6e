//! Timestamp parsing and `h:mm AM` formatting for message bubbles.
//!
//! The backend is inconsistent about timestamp shape: push events carry
//! RFC 3339 or epoch milliseconds, `save-message` answers with a naive
//! `Y-m-d H:M:S` in UTC. All of them end up as local wall-clock time.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Parse any timestamp shape the backend emits.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    if let Ok(ts) = PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"),
    ) {
        return Some(ts.assume_utc());
    }
    if let Ok(ts) = PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    ) {
        return Some(ts.assume_utc());
    }
    if let Ok(ms) = raw.parse::<i64>() {
        return OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).ok();
    }
    raw.parse::<f64>().ok().and_then(from_epoch_ms)
}

/// Convert epoch milliseconds (as returned by `Date.now()`) to a timestamp.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_epoch_ms(ms: f64) -> Option<OffsetDateTime> {
    if !ms.is_finite() {
        return None;
    }
    OffsetDateTime::from_unix_timestamp_nanos((ms as i128) * 1_000_000).ok()
}

/// Format as `h:mm AM` in the zone `utc_offset_minutes` east of UTC.
#[must_use]
pub fn format_clock(ts: OffsetDateTime, utc_offset_minutes: i32) -> String {
    let offset = UtcOffset::from_whole_seconds(utc_offset_minutes.saturating_mul(60)).unwrap_or(UtcOffset::UTC);
    ts.to_offset(offset)
        .format(format_description!("[hour repr:12 padding:none]:[minute] [period]"))
        .unwrap_or_default()
}

/// Display time for a message: the server timestamp when it parses,
/// otherwise the local arrival time.
#[must_use]
pub fn display_time(raw: Option<&str>, received_at_ms: f64, utc_offset_minutes: i32) -> String {
    raw.and_then(parse_timestamp)
        .or_else(|| from_epoch_ms(received_at_ms))
        .map(|ts| format_clock(ts, utc_offset_minutes))
        .unwrap_or_default()
}
