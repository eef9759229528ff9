//! Time utilities: the engine works on calendar days, resolved in the user's timezone.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Resolve "today" for an IANA tz like "America/Chicago" at the instant `now`.
pub fn today_in(tz: &str, now: DateTime<Utc>) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

    Ok(now.with_timezone(&tz).date_naive())
}

/// Whole days from `today` until `due`. Negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Parse an ISO calendar date ("2026-02-20").
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{s}': {e}"))
}
