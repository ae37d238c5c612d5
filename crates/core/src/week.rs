//! Week-ending dates and inclusive date ranges.
//!
//! Reports are keyed by the Friday that closes the reporting week. The
//! date-range helpers turn calendar days into timestamp bounds where the
//! upper day is included up to its last millisecond.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Wire/storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_friday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Fri
}

/// Reject any week-ending date that is not a Friday.
pub fn validate_week_ending(date: NaiveDate) -> Result<(), CoreError> {
    if is_friday(date) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Week ending date {date} is a {:?}; it must be a Friday",
            date.weekday()
        )))
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::Validation(format!("Invalid date '{raw}'. Expected YYYY-MM-DD")))
}

/// Parse a `YYYY-MM-DD` date and require it to be a Friday.
pub fn parse_week_ending(raw: &str) -> Result<NaiveDate, CoreError> {
    let date = parse_date(raw)?;
    validate_week_ending(date)?;
    Ok(date)
}

/// 00:00:00.000 UTC on `date`.
pub fn start_of_day(date: NaiveDate) -> Timestamp {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// 23:59:59.999 UTC on `date`.
pub fn end_of_day(date: NaiveDate) -> Timestamp {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(last_milli))
}

/// An optionally bounded range of calendar days, inclusive at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Build a range, rejecting `from` after `to`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, CoreError> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(CoreError::Validation(format!(
                    "Invalid date range: from {f} is after to {t}"
                )));
            }
        }
        Ok(Self { from, to })
    }

    /// Earliest included instant, if bounded below.
    pub fn lower_bound(&self) -> Option<Timestamp> {
        self.from.map(start_of_day)
    }

    /// Latest included instant, if bounded above. The whole `to` day counts.
    pub fn upper_bound(&self) -> Option<Timestamp> {
        self.to.map(end_of_day)
    }

    pub fn contains(&self, ts: Timestamp) -> bool {
        self.lower_bound().map_or(true, |lo| ts >= lo)
            && self.upper_bound().map_or(true, |hi| ts <= hi)
    }
}
