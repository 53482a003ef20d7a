//! What a submitter sends when adding or editing events
//!
//! These are plain input values. They are never stored, and nothing in this crate mutates them.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EventError, EventResult};
use crate::item::{EventContent, UserId};

/// Date formats accepted in a submitted date list. The date picker sends the first one
const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];
/// Time formats accepted for start and end times. The time picker sends the first ones
const TIME_FORMATS: [&str; 5] = ["%I:%M %p", "%I:%M%p", "%I:%M:%S %p", "%H:%M:%S", "%H:%M"];

/// The content and times shared by every date of a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccurrenceTemplate {
    pub content: EventContent,
    pub time_start: NaiveTime,
    /// When present, this may be earlier than `time_start`: this means the event ends after midnight
    pub time_end: Option<NaiveTime>,
}

impl OccurrenceTemplate {
    pub fn new(content: EventContent, time_start: NaiveTime, time_end: Option<NaiveTime>) -> Self {
        Self { content, time_start, time_end }
    }
}

/// A list of dates, and the template every one of them shares
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedOccurrenceSet {
    /// In submission order. Duplicates are kept as-is
    dates: Vec<NaiveDate>,
    template: OccurrenceTemplate,
}

impl SubmittedOccurrenceSet {
    pub fn new(dates: Vec<NaiveDate>, template: OccurrenceTemplate) -> Self {
        Self { dates, template }
    }

    /// Build a set from the comma-separated date list sent by the date picker
    pub fn from_date_list(date_list: &str, template: OccurrenceTemplate) -> EventResult<Self> {
        Ok(Self::new(parse_dates(date_list)?, template))
    }

    pub fn dates(&self) -> &[NaiveDate]           { &self.dates }
    pub fn template(&self) -> &OccurrenceTemplate { &self.template }
    pub fn len(&self) -> usize                    { self.dates.len() }
    pub fn is_empty(&self) -> bool                { self.dates.is_empty() }

    /// Several dates are submitted as a series, a single one as a standalone event
    pub fn is_series(&self) -> bool {
        self.dates.len() > 1
    }
}

/// Parse a comma-separated list of dates, e.g. `10/30/2018,10/31/2018`
pub fn parse_dates(date_list: &str) -> EventResult<Vec<NaiveDate>> {
    date_list
        .split(',')
        .map(str::trim)
        .filter(|s| s.is_empty() == false)
        .map(parse_date)
        .collect()
}

pub fn parse_date(s: &str) -> EventResult<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| EventError::InvalidDate(s.to_string()))
}

/// Parse a time of day, e.g. `07:30 pm` or `19:30`
pub fn parse_time(s: &str) -> EventResult<NaiveTime> {
    let s = s.trim();
    TIME_FORMATS.iter()
        .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
        .ok_or_else(|| EventError::InvalidTime(s.to_string()))
}


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

/// The account a submission comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorContext {
    /// `None` for visitors who are not logged in
    pub user_id: Option<UserId>,
    pub role: Role,
    /// Whether this account has been trusted to publish without moderation
    pub auto_publish: bool,
}

impl AuthorContext {
    pub fn anonymous() -> Self {
        Self { user_id: None, role: Role::User, auto_publish: false }
    }

    pub fn user(user_id: UserId, auto_publish: bool) -> Self {
        Self { user_id: Some(user_id), role: Role::User, auto_publish }
    }

    pub fn admin(user_id: UserId) -> Self {
        Self { user_id: Some(user_id), role: Role::Admin, auto_publish: true }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether submissions from this account skip moderation.
    ///
    /// Anonymous submissions are always moderated.
    pub fn auto_publishes(&self) -> bool {
        self.user_id.is_some() && (self.auto_publish || self.is_admin())
    }
}
