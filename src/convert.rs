//! Conversions between local wall-clock values and UTC instants
//!
//! Every other module goes through these functions instead of doing offset arithmetic by itself.
//!
//! * A local time that does not exist (it is skipped by a "spring forward" change) is an error, it is never moved to an adjacent hour.
//! * A local time that exists twice (it is repeated by a "fall back" change) always resolves to the earlier instant.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, Offset, TimeZone, Timelike, Utc};

use crate::error::{EventError, EventResult};
use crate::timezone::TimezoneRule;

/// Convert a local date and time into an UTC instant
pub fn to_utc(local_date: NaiveDate, local_time: NaiveTime, rule: &TimezoneRule) -> EventResult<DateTime<Utc>> {
    // chrono represents leap seconds as nanoseconds >= 1e9. These are not valid wall-clock inputs
    if local_time.nanosecond() >= 1_000_000_000 {
        return Err(EventError::InvalidTime(local_time.to_string()));
    }

    let local = local_date.and_time(local_time);
    match rule.tz().from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, latest) => {
            log::trace!("{} is ambiguous in {} ({} or {}), using the earlier one", local, rule, earliest, latest);
            Ok(earliest.with_timezone(&Utc))
        },
        LocalResult::None => {
            log::debug!("{} does not exist in {}", local, rule);
            Err(EventError::InvalidLocalTime { date: local_date, time: local_time })
        },
    }
}

/// The first instant of a local day.
///
/// Some zones spring forward at midnight, so that `00:00` does not exist on that day. The day then starts when the gap ends.
pub fn start_of_day(local_date: NaiveDate, rule: &TimezoneRule) -> EventResult<DateTime<Utc>> {
    let midnight = local_date.and_time(NaiveTime::MIN);
    match rule.tz().from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            // The gap ends at the instant midnight would have been under the offset in effect before it
            let offset_before = rule.tz().offset_from_utc_datetime(&(midnight - Duration::days(1))).fix();
            let gap_end = Utc.from_utc_datetime(&(midnight - Duration::seconds(i64::from(offset_before.local_minus_utc()))));
            if local_date_of(gap_end, rule) != local_date {
                return Err(EventError::InvalidLocalTime { date: local_date, time: NaiveTime::MIN });
            }
            log::debug!("{} starts at {} in {}, after a daylight saving time gap", local_date, to_local(gap_end, rule).1, rule);
            Ok(gap_end)
        },
    }
}

/// Convert an UTC instant into the local date and time it is displayed at
pub fn to_local(instant: DateTime<Utc>, rule: &TimezoneRule) -> (NaiveDate, NaiveTime) {
    let local = instant.with_timezone(&rule.tz());
    (local.date_naive(), local.time())
}

/// The local calendar date an instant belongs to
pub fn local_date_of(instant: DateTime<Utc>, rule: &TimezoneRule) -> NaiveDate {
    to_local(instant, rule).0
}
