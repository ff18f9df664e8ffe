//! Relative date/time placeholder expansion for string values.
//!
//! String values may embed tokens of the form `{{date:Y,M,D}}` or
//! `{{time:H,M,S}}`. During resolution each token is replaced with the
//! current date (advanced by the year/month/day offsets, formatted
//! `YYYY-MM-DD`) or the current time (advanced by the hour/minute/second
//! offsets, formatted `HH:MM:SS`).
//!
//! Offsets are optionally `-`-signed base-10 integers; an empty segment
//! counts as zero. Malformed tokens (wrong segment count, `+` signs,
//! non-digits, unknown unit) are left verbatim. This is deliberately not
//! a general template engine: only this narrow syntax is recognized.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate};
use regex::{Captures, Regex};

use crate::time::Clock;

/// Token pattern: unit name followed by three comma-separated,
/// optionally negative integer segments, any of which may be empty.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(\w+):(-?\d*),(-?\d*),(-?\d*)\}\}").expect("valid placeholder pattern")
});

/// Expands all date/time placeholder tokens in `raw` against `clock`.
///
/// Each token is expanded independently; text without tokens passes
/// through unchanged.
#[must_use]
pub fn expand(raw: &str, clock: &dyn Clock) -> String {
    if !raw.contains("{{") {
        return raw.to_string();
    }

    TOKEN
        .replace_all(raw, |caps: &Captures<'_>| {
            let a = segment(caps, 2);
            let b = segment(caps, 3);
            let c = segment(caps, 4);

            match &caps[1] {
                "date" => {
                    let now = clock.now();
                    shift_date(now.date_naive(), a, b, c)
                        .format("%Y-%m-%d")
                        .to_string()
                }
                "time" => {
                    let now = clock.now();
                    let shifted = time_offset(a, b, c)
                        .and_then(|offset| now.checked_add_signed(offset))
                        .unwrap_or(now);
                    shifted.format("%H:%M:%S").to_string()
                }
                // Unknown unit: leave the token verbatim
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Parses one offset segment; empty or unparsable segments count as zero.
fn segment(caps: &Captures<'_>, index: usize) -> i64 {
    caps[index].parse().unwrap_or(0)
}

/// Builds the hour/minute/second offset, or `None` when the offsets do
/// not fit in a [`Duration`].
fn time_offset(hours: i64, minutes: i64, seconds: i64) -> Option<Duration> {
    let h = Duration::try_hours(hours)?;
    let m = Duration::try_minutes(minutes)?;
    let s = Duration::try_seconds(seconds)?;
    h.checked_add(&m)?.checked_add(&s)
}

/// Advances `date` by calendar offsets with day-overflow normalization:
/// the result is the first of the target month plus the (zero-based) day
/// offset, so e.g. Jan 31 + 1 month lands in early March.
fn shift_date(date: NaiveDate, years: i64, months: i64, days: i64) -> NaiveDate {
    let Some(offset) = years.checked_mul(12).and_then(|y| y.checked_add(months)) else {
        return date;
    };
    let Some(total) =
        (i64::from(date.year()) * 12 + i64::from(date.month0())).checked_add(offset)
    else {
        return date;
    };

    let Ok(year) = i32::try_from(total.div_euclid(12)) else {
        return date;
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month = total.rem_euclid(12) as u32 + 1;

    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return date;
    };

    i64::from(date.day0())
        .checked_add(days)
        .and_then(Duration::try_days)
        .and_then(|offset| first.checked_add_signed(offset))
        .unwrap_or(date)
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
