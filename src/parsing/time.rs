//! Clock-time range parsing.
//!
//! This module recovers a shift duration from the first 12-hour clock-time
//! range embedded in a raw text blob, handling single midnight wraparound
//! for overnight shifts.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

static TIME_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}:\d{2} [AP]M) to (\d{1,2}:\d{2} [AP]M)").unwrap());

/// Minutes in one day; durations are always strictly below this.
const MINUTES_PER_DAY: u32 = 1440;

/// Extracts a duration in minutes from the first clock-time range in `text`.
///
/// The range grammar is `"<H>:<MM> <AM|PM> to <H>:<MM> <AM|PM>"` with a one
/// or two digit hour and a case-insensitive period marker. Returns `None`
/// when no range is present, or when either endpoint is not a valid 12-hour
/// time (hour outside 1 to 12, minutes outside 00 to 59).
///
/// When the end time is earlier than the start time the range is assumed to
/// cross midnight exactly once; equal endpoints are a valid zero-length
/// shift, not a full day. The result is always in `[0, 1440)`.
///
/// # Examples
///
/// ```
/// use shift_reconciler::parsing::parse_duration;
///
/// assert_eq!(parse_duration("9:00 AM to 5:00 PM"), Some(480));
/// assert_eq!(parse_duration("11:00 PM to 1:00 AM"), Some(120));
/// assert_eq!(parse_duration("1:00 AM to 1:00 AM"), Some(0));
/// assert_eq!(parse_duration("no times here"), None);
/// ```
pub fn parse_duration(text: &str) -> Option<u32> {
    let caps = TIME_RANGE_RE.captures(text)?;
    let start = minutes_since_midnight(&caps[1])?;
    let end = minutes_since_midnight(&caps[2])?;

    Some(if end >= start {
        end - start
    } else {
        MINUTES_PER_DAY - start + end
    })
}

/// Converts one `"H:MM AM"` token to minutes since midnight.
///
/// Delegates the 12-hour to 24-hour conversion (12 AM is 00, 12 PM stays 12)
/// to chrono, which also rejects out-of-range hours and minutes.
fn minutes_since_midnight(token: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(&token.to_uppercase(), "%I:%M %p").ok()?;
    Some(time.num_seconds_from_midnight() / 60)
}
