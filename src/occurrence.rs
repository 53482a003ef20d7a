//! Occurrences: one concrete, dated instance of an event

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{EventError, EventResult};
use crate::item::{EventContent, OccurrenceId, SeriesId, UserId};

/// Whether a moderator has reviewed an occurrence.
///
/// This is independent from being published: publication is what makes an occurrence visible in public listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalState {
    Unapproved,
    Approved(UserId),
}

/// A single event, on a given date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredOccurrence")]
pub struct Occurrence {
    /// Assigned by the storage layer. `None` until this occurrence is saved
    id: Option<OccurrenceId>,
    /// The series this occurrence belongs to, if any.
    /// This is only a lookup key, the series is not owned by its occurrences
    series_id: Option<SeriesId>,
    /// Who submitted this occurrence (`None` for anonymous submissions)
    author_id: Option<UserId>,

    content: EventContent,

    /// The day the submitter meant. This is the key used to match occurrences of a series
    local_date: NaiveDate,
    start_utc: DateTime<Utc>,
    /// Always strictly after `start_utc`
    end_utc: Option<DateTime<Utc>>,

    approved_by: Option<UserId>,
    published: bool,

    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Occurrence {
    /// Create a brand new occurrence that is not stored yet, and has not been approved
    pub fn new(content: EventContent, local_date: NaiveDate,
               start_utc: DateTime<Utc>, end_utc: Option<DateTime<Utc>>,
               author_id: Option<UserId>) -> EventResult<Self>
    {
        let now = Utc::now();
        Self::new_with_parameters(None, None, author_id, content, local_date, start_utc, end_utc, None, false, now, now)
    }

    /// Create an occurrence instance, that may be stored already
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_parameters(id: Option<OccurrenceId>, series_id: Option<SeriesId>, author_id: Option<UserId>,
                               content: EventContent,
                               local_date: NaiveDate, start_utc: DateTime<Utc>, end_utc: Option<DateTime<Utc>>,
                               approved_by: Option<UserId>, published: bool,
                               created_at: DateTime<Utc>, modified_at: DateTime<Utc>,
                            ) -> EventResult<Self>
    {
        check_times(start_utc, end_utc)?;
        Ok(Self {
            id,
            series_id,
            author_id,
            content,
            local_date,
            start_utc,
            end_utc,
            approved_by,
            published,
            created_at,
            modified_at,
        })
    }

    pub fn id(&self) -> Option<OccurrenceId>        { self.id }
    pub fn series_id(&self) -> Option<SeriesId>     { self.series_id }
    pub fn author_id(&self) -> Option<UserId>       { self.author_id }
    pub fn content(&self) -> &EventContent          { &self.content }
    pub fn title(&self) -> &str                     { &self.content.title }
    pub fn local_date(&self) -> NaiveDate           { self.local_date }
    pub fn start_utc(&self) -> DateTime<Utc>        { self.start_utc }
    pub fn end_utc(&self) -> Option<DateTime<Utc>>  { self.end_utc }
    pub fn approved_by(&self) -> Option<UserId>     { self.approved_by }
    pub fn published(&self) -> bool                 { self.published }
    pub fn created_at(&self) -> DateTime<Utc>       { self.created_at }
    pub fn modified_at(&self) -> DateTime<Utc>      { self.modified_at }

    pub fn approval_state(&self) -> ApprovalState {
        match self.approved_by {
            Some(moderator) => ApprovalState::Approved(moderator),
            None => ApprovalState::Unapproved,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approved_by.is_some()
    }

    /// Whether this is visible in public listings
    pub fn is_public(&self) -> bool {
        self.is_approved() && self.published
    }

    /// Returns the same occurrence, with the identity the storage layer gave it
    pub fn with_id(mut self, id: OccurrenceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the same occurrence, attached to a series
    pub fn with_series(mut self, series_id: SeriesId) -> Self {
        self.series_id = Some(series_id);
        self
    }

    /// Whether both occurrences describe the same event at the same time.
    ///
    /// Identity, approval and timestamps are ignored.
    pub fn has_same_content_as(&self, other: &Occurrence) -> bool {
           self.content == other.content
        && self.local_date == other.local_date
        && self.start_utc == other.start_utc
        && self.end_utc == other.end_utc
        && self.series_id == other.series_id
    }

    /// Keep the identity and the moderation state of `stored`, but take everything else from `self`.
    ///
    /// This is how an edit is applied to an occurrence that already exists.
    pub fn carrying_forward(&self, stored: &Occurrence) -> Occurrence {
        Occurrence {
            id: stored.id,
            series_id: self.series_id.or(stored.series_id),
            author_id: stored.author_id.or(self.author_id),
            content: self.content.clone(),
            local_date: self.local_date,
            start_utc: self.start_utc,
            end_utc: self.end_utc,
            approved_by: stored.approved_by,
            published: stored.published,
            created_at: stored.created_at,
            modified_at: self.modified_at,
        }
    }

    /// Returns a copy that has never been stored nor approved
    pub fn as_fresh(&self) -> Occurrence {
        Occurrence {
            id: None,
            approved_by: None,
            published: false,
            ..self.clone()
        }
    }

    pub(crate) fn set_moderation(&mut self, approved_by: Option<UserId>, published: bool) {
        if self.approved_by != approved_by || self.published != published {
            self.approved_by = approved_by;
            self.published = published;
            self.update_last_modified();
        }
    }

    fn update_last_modified(&mut self) {
        self.modified_at = Utc::now();
    }
}

/// The serialized form of an [`Occurrence`], before its times are checked
#[derive(Deserialize)]
struct StoredOccurrence {
    id: Option<OccurrenceId>,
    series_id: Option<SeriesId>,
    author_id: Option<UserId>,
    content: EventContent,
    local_date: NaiveDate,
    start_utc: DateTime<Utc>,
    end_utc: Option<DateTime<Utc>>,
    approved_by: Option<UserId>,
    published: bool,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl TryFrom<StoredOccurrence> for Occurrence {
    type Error = EventError;

    fn try_from(stored: StoredOccurrence) -> Result<Self, Self::Error> {
        Occurrence::new_with_parameters(
            stored.id, stored.series_id, stored.author_id,
            stored.content,
            stored.local_date, stored.start_utc, stored.end_utc,
            stored.approved_by, stored.published,
            stored.created_at, stored.modified_at,
        )
    }
}

fn check_times(start_utc: DateTime<Utc>, end_utc: Option<DateTime<Utc>>) -> EventResult<()> {
    match end_utc {
        Some(end) if end <= start_utc => Err(EventError::InvalidTime(
            format!("the event ends ({}) before it starts ({})", end, start_utc)
        )),
        _ => Ok(()),
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, TimeZone};
    use crate::item::{CategoryId, Location};

    fn sample(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> EventResult<Occurrence> {
        Occurrence::new(
            EventContent::new("Placeholder Event Series", "Come on out!", CategoryId::new(2), Location::new("Be Here Now")),
            NaiveDate::from_ymd_opt(2018, 10, 30).unwrap(),
            start,
            end,
            Some(UserId::new(1)),
        )
    }

    #[test]
    fn test_end_must_follow_start() {
        let start = Utc.with_ymd_and_hms(2018, 10, 30, 15, 24, 9).unwrap();
        assert!(sample(start, None).is_ok());
        assert!(sample(start, Some(start + Duration::hours(1))).is_ok());
        assert!(matches!(sample(start, Some(start)), Err(EventError::InvalidTime(_))));
        assert!(matches!(sample(start, Some(start - Duration::hours(1))), Err(EventError::InvalidTime(_))));
    }

    #[test]
    fn test_moderation_state() {
        let start = Utc.with_ymd_and_hms(2018, 10, 30, 15, 24, 9).unwrap();
        let mut occ = sample(start, None).unwrap();
        assert_eq!(occ.approval_state(), ApprovalState::Unapproved);
        assert!(occ.is_public() == false);

        occ.set_moderation(Some(UserId::new(9)), true);
        assert_eq!(occ.approval_state(), ApprovalState::Approved(UserId::new(9)));
        assert!(occ.is_public());

        let fresh = occ.clone().with_id(OccurrenceId::new(4)).as_fresh();
        assert_eq!(fresh.id(), None);
        assert_eq!(fresh.approval_state(), ApprovalState::Unapproved);
        assert!(fresh.has_same_content_as(&occ));
    }

    #[test]
    fn test_carrying_forward() {
        let start = Utc.with_ymd_and_hms(2018, 10, 30, 15, 24, 9).unwrap();
        let mut stored = sample(start, None).unwrap()
            .with_id(OccurrenceId::new(1))
            .with_series(SeriesId::new(1));
        stored.set_moderation(Some(UserId::new(1)), true);

        let mut edited = sample(start + Duration::hours(2), None).unwrap();
        edited.content.title = String::from("Renamed");

        let merged = edited.carrying_forward(&stored);
        assert_eq!(merged.id(), Some(OccurrenceId::new(1)));
        assert_eq!(merged.series_id(), Some(SeriesId::new(1)));
        assert_eq!(merged.approved_by(), Some(UserId::new(1)));
        assert!(merged.published());
        assert_eq!(merged.title(), "Renamed");
        assert_eq!(merged.start_utc(), start + Duration::hours(2));
        assert_eq!(merged.created_at(), stored.created_at());
        assert!(merged.has_same_content_as(&stored) == false);
    }

    #[test]
    fn test_deserialized_times_are_checked() {
        let start = Utc.with_ymd_and_hms(2018, 10, 30, 15, 24, 9).unwrap();
        let occ = sample(start, Some(start + Duration::hours(2))).unwrap();
        let json = serde_json::to_value(&occ).unwrap();
        let reloaded: Occurrence = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(reloaded, occ);

        let mut reversed = json;
        reversed["end_utc"] = serde_json::to_value(start - Duration::hours(1)).unwrap();
        let err = serde_json::from_value::<Occurrence>(reversed).unwrap_err();
        assert!(err.to_string().contains("before it starts"), "unexpected error: {}", err);
    }
}
