//! The aggregation engine: pure functions over record snapshots.
//!
//! Everything in here is synchronous and deterministic. Callers hand in
//! full snapshots plus the clock value and recompute from scratch on
//! every change; there is no incremental state anywhere.

pub mod dashboard;
pub mod financial;
pub mod health;
pub mod milk;
pub mod users;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Month-of-year (0-11) of a record date, if it parses.
///
/// Record dates are compared by month only; the year is deliberately not
/// part of the comparison, so a March record matches every March.
/// Unparseable dates match no month at all.
pub(crate) fn date_month0(date: &str) -> Option<u32> {
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed.month0());
    }
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|parsed| parsed.month0())
}

/// Month-of-year (0-11) of a creation stamp, in local time.
pub(crate) fn timestamp_month0(epoch_millis: i64) -> Option<u32> {
    Local
        .timestamp_millis_opt(epoch_millis)
        .single()
        .map(|stamp| stamp.month0())
}
