//! Human duration expression parsing for giveaway commands.
//!
//! Accepts the short forms users type in chat: `"10s"`, `"5m"`, `"1h"`, `"2d"`,
//! `"500ms"`, `"1w"`, plus a bare number meaning milliseconds. Unit suffixes are
//! case-insensitive and a few spelled-out variants (`sec`, `mins`, `hours`, ...)
//! are accepted as well.

use std::time::Duration;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;

/// Parses a human duration expression into a `Duration`.
///
/// Returns `None` when the expression is malformed or does not describe a
/// strictly positive duration. Negative values are rejected outright; `"0s"`
/// parses but is not positive, so it is rejected too.
pub fn parse_duration(spec: &str) -> Option<Duration> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    let split = spec
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(spec.len());
    let (number, unit) = spec.split_at(split);

    let value: f64 = number.parse().ok()?;
    let scale = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "ms" | "msec" | "msecs" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => MS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MS_PER_HOUR,
        "d" | "day" | "days" => MS_PER_DAY,
        "w" | "week" | "weeks" => MS_PER_WEEK,
        _ => return None,
    };

    let millis = value * scale;
    if !millis.is_finite() || millis < 1.0 {
        return None;
    }

    Some(Duration::from_millis(millis.round() as u64))
}
