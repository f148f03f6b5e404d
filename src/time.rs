//! Timestamp normalization for listing pages.
//!
//! News listings print either a relative age (`"3 HRS AGO"`) or a month-name
//! date (`"Dec 20, 2024"`). [`normalize`] turns both into a naive ISO-8601
//! timestamp and hands back anything else untouched, so `published_time` is
//! always either ISO-8601 or the source's own text.
//!
//! Reference instants are UTC. The relative form is computed in that clock and
//! truncated to the hour.

use crate::error::TimeParseError;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Output layout for normalized timestamps.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Hours below this value on a ticker clock are read as afternoon/evening.
pub const CLOCK_SHIFT_THRESHOLD: u32 = 12;

static RELATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s*([a-z]+)?\s+ago\s*$").expect("valid relative time pattern")
});

/// Normalize a listing timestamp against `reference`.
///
/// Never fails: unrecognized input is returned as-is.
///
/// # Examples
///
/// ```ignore
/// normalize("3 HRS AGO", now);      // "2024-12-20T09:00:00" when now is 12:41 UTC
/// normalize("Dec 20, 2024", now);   // "2024-12-20T00:00:00"
/// normalize("garbage", now);        // "garbage"
/// ```
pub fn normalize(raw: &str, reference: DateTime<Utc>) -> String {
    match parse_listing_time(raw, reference) {
        Ok(parsed) => parsed.format(ISO_FORMAT).to_string(),
        Err(e) => {
            debug!(error = %e, "Keeping raw timestamp");
            raw.to_string()
        }
    }
}

/// Parse a relative or month-name timestamp.
pub fn parse_listing_time(
    raw: &str,
    reference: DateTime<Utc>,
) -> Result<NaiveDateTime, TimeParseError> {
    if let Some(caps) = RELATIVE.captures(raw) {
        let amount: i64 = caps[1]
            .parse()
            .map_err(|_| TimeParseError(raw.to_string()))?;
        let unit = caps.get(2).map(|m| m.as_str().to_ascii_lowercase());
        let age = match unit.as_deref() {
            Some("m" | "min" | "mins" | "minute" | "minutes") => Duration::try_minutes(amount),
            Some("d" | "day" | "days") => Duration::try_days(amount),
            _ => Duration::try_hours(amount),
        }
        .ok_or_else(|| TimeParseError(raw.to_string()))?;

        let then = reference
            .naive_utc()
            .checked_sub_signed(age)
            .ok_or_else(|| TimeParseError(raw.to_string()))?;
        return truncate_to_hour(then).ok_or_else(|| TimeParseError(raw.to_string()));
    }

    // %B accepts both "December" and "Dec" when parsing.
    let date = NaiveDate::parse_from_str(raw.trim(), "%B %d, %Y")
        .map_err(|_| TimeParseError(raw.to_string()))?;
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| TimeParseError(raw.to_string()))
}

fn truncate_to_hour(t: NaiveDateTime) -> Option<NaiveDateTime> {
    t.with_minute(0)?.with_second(0)?.with_nanosecond(0)
}

/// Convert a ticker's 12-hour `HH:MM` clock to 24-hour time.
///
/// Hours below [`CLOCK_SHIFT_THRESHOLD`] move forward by twelve; later hours
/// and malformed input are returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(shift_sub_day_clock("08:05"), "20:05");
/// assert_eq!(shift_sub_day_clock("23:00"), "23:00");
/// ```
pub fn shift_sub_day_clock(time: &str) -> String {
    let trimmed = time.trim();
    let Some((hours, minutes)) = trimmed.split_once(':') else {
        debug!(time, "Clock value has no separator");
        return time.to_string();
    };
    match (hours.parse::<u32>(), minutes.parse::<u32>()) {
        (Ok(h), Ok(m)) if h < 24 && m < 60 => {
            let h = if h < CLOCK_SHIFT_THRESHOLD { h + 12 } else { h };
            format!("{h:02}:{m:02}")
        }
        _ => {
            debug!(time, "Clock value is not HH:MM");
            time.to_string()
        }
    }
}
