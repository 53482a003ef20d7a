//! The timezone rule that dates are interpreted in
//!
//! Every local date and time submitted on the site is a wall-clock value of the site's zone.
//! This wraps an IANA zone so that daylight saving changes come from the timezone database instead of hard-coded offsets.

use std::fmt::{Display, Formatter};

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

use crate::error::{EventError, EventResult};

/// The zone used when nothing has been configured
pub const DEFAULT_TIMEZONE: &str = "America/Indiana/Indianapolis";

/// The UTC offset in effect on a given calendar date
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DstOffsets {
    /// Standard offset from UTC (e.g. -5h for US Eastern)
    pub utc_offset: Duration,
    /// Extra offset added during daylight saving time (usually 0 or 1h)
    pub dst_adjustment: Duration,
}

impl DstOffsets {
    /// The total offset from UTC
    pub fn total(&self) -> Duration {
        self.utc_offset + self.dst_adjustment
    }

    pub fn is_dst(&self) -> bool {
        self.dst_adjustment != Duration::zero()
    }
}


/// Maps local dates to UTC offsets. This is immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimezoneRule {
    tz: Tz,
}

impl TimezoneRule {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Look up a rule by its IANA name (e.g. `America/New_York`)
    pub fn from_name(name: &str) -> EventResult<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| EventError::UnknownTimezone(name.to_string()))
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Returns the offsets that apply to `date` as a whole.
    ///
    /// The date is sampled at local noon, which is never inside a transition.
    pub fn offsets_on(&self, date: NaiveDate) -> DstOffsets {
        let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
        let offset = match self.tz.from_local_datetime(&noon).earliest() {
            Some(dt) => *dt.offset(),
            None => self.tz.offset_from_utc_datetime(&noon),
        };
        DstOffsets {
            utc_offset: offset.base_utc_offset(),
            dst_adjustment: offset.dst_offset(),
        }
    }
}

impl Default for TimezoneRule {
    fn default() -> Self {
        Self::new(chrono_tz::America::Indiana::Indianapolis)
    }
}

impl Display for TimezoneRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the rule that has been loaded by [`config::init`](crate::config::init), or the default rule.
pub fn current() -> TimezoneRule {
    crate::config::loaded_timezone_rule().unwrap_or_default()
}
