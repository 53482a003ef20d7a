//! Multiple scenarios that are used to test that editing a series correctly works
#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use event_series::approval::approve_occurrence;
use event_series::builder::build_occurrence;
use event_series::item::{CategoryId, EventContent, Location, OccurrenceId, SeriesId, UserId};
use event_series::store::MemoryStore;
use event_series::submission::{AuthorContext, OccurrenceTemplate, SubmittedOccurrenceSet};
use event_series::traits::PersistenceGateway;
use event_series::{Occurrence, Series, SeriesManager, TimezoneRule};

pub const SERIES_TITLE: &str = "Placeholder Event Series";
pub const EDITED_TITLE: &str = "Placeholder Event Series (edited)";
pub const MODERATOR: u64 = 1;

/// How an occurrence is stored before the edit
pub struct StoredState {
    approved: bool,
}

/// What is expected to be stored for a date after the edit
pub enum ExpectedState {
    /// Nothing is stored for this date
    None,
    /// The occurrence that was stored first for this date has been kept, and updated
    Kept { approved: bool },
    /// A new occurrence has been created
    Created,
}

pub struct DateScenario {
    pub date: NaiveDate,
    /// Occurrences of the series stored for this date, in creation order
    before_edit: Vec<StoredState>,
    /// How many times this date appears in the edit
    times_submitted: usize,
    after_edit: ExpectedState,
}

pub fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, m, d).unwrap()
}

pub fn template(title: &str) -> OccurrenceTemplate {
    let mut content = EventContent::new(
        title,
        "Lots of events in this placeholder series. Come on out!",
        CategoryId::new(2),
        Location::new("Be Here Now").with_address("505 N. Dill St."),
    );
    content.cost = Some(String::from("$5"));
    content.age_restriction = Some(String::from("21+"));
    OccurrenceTemplate::new(content, NaiveTime::from_hms_opt(19, 0, 0).unwrap(), Some(NaiveTime::from_hms_opt(21, 0, 0).unwrap()))
}

pub fn rule() -> TimezoneRule {
    TimezoneRule::default()
}

/// Populate a series with the following, then submit an edit:
/// * stored:    10/28✓, 10/29✓, 10/30, 10/30 (dup), 10/31
/// * submitted:         10/29,  10/30,              10/31, 11/01, 11/02, 11/02
///
/// Hence, here is the expected result after the edit:
/// * stored:            10/29✓, 10/30,              10/31, 11/01, 11/02
///
/// Notes:
/// * ✓: approved and published
/// * every kept occurrence has its content (title) updated
pub fn basic_scenarii() -> Vec<DateScenario> {
    vec![
        DateScenario {
            date: date(10, 28),
            before_edit: vec![StoredState{ approved: true }],
            times_submitted: 0,
            after_edit: ExpectedState::None,
        },
        DateScenario {
            date: date(10, 29),
            before_edit: vec![StoredState{ approved: true }],
            times_submitted: 1,
            after_edit: ExpectedState::Kept{ approved: true },
        },
        DateScenario {
            date: date(10, 30),
            before_edit: vec![StoredState{ approved: false }, StoredState{ approved: false }],
            times_submitted: 1,
            after_edit: ExpectedState::Kept{ approved: false },
        },
        DateScenario {
            date: date(10, 31),
            before_edit: vec![StoredState{ approved: false }],
            times_submitted: 1,
            after_edit: ExpectedState::Kept{ approved: false },
        },
        DateScenario {
            date: date(11, 1),
            before_edit: Vec::new(),
            times_submitted: 1,
            after_edit: ExpectedState::Created,
        },
        DateScenario {
            date: date(11, 2),
            before_edit: Vec::new(),
            times_submitted: 2,
            after_edit: ExpectedState::Created,
        },
    ]
}

/// The dates of the edit, in submission order
pub fn submitted_dates(scenarii: &[DateScenario]) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for scenario in scenarii {
        for _ in 0..scenario.times_submitted {
            dates.push(scenario.date);
        }
    }
    dates
}

pub fn edit_submission(scenarii: &[DateScenario]) -> SubmittedOccurrenceSet {
    SubmittedOccurrenceSet::new(submitted_dates(scenarii), template(EDITED_TITLE))
}

/// Store the series as it is before the edit.
///
/// Returns its id, and the ids of the occurrences that have been stored for each date
pub async fn populate_test_store(scenarii: &[DateScenario], store: &mut MemoryStore) -> (SeriesId, HashMap<NaiveDate, Vec<OccurrenceId>>) {
    let author = AuthorContext::user(UserId::new(3), false);
    let series_id = store.create_series(&Series::new(SERIES_TITLE, author.user_id, false)).await.unwrap();
    let tpl = template(SERIES_TITLE);

    let mut ids: HashMap<NaiveDate, Vec<OccurrenceId>> = HashMap::new();
    for scenario in scenarii {
        for state in &scenario.before_edit {
            let mut occurrence = build_occurrence(scenario.date, &tpl, &author, &rule()).unwrap().with_series(series_id);
            if state.approved {
                occurrence = approve_occurrence(&occurrence, UserId::new(MODERATOR));
            }
            let id = store.create_occurrence(&occurrence).await.unwrap();
            ids.entry(scenario.date).or_default().push(id);
        }
    }
    (series_id, ids)
}

/// Check that what is stored matches what the scenarii expect after the edit
pub async fn check_after_edit(scenarii: &[DateScenario], manager: &SeriesManager<MemoryStore>, series_id: SeriesId, ids_before: &HashMap<NaiveDate, Vec<OccurrenceId>>) {
    let stored = manager.gateway().get_occurrences_by_series(series_id).await.unwrap();

    let mut by_date: HashMap<NaiveDate, Vec<&Occurrence>> = HashMap::new();
    for occ in &stored {
        by_date.entry(occ.local_date()).or_default().push(occ);
    }

    for scenario in scenarii {
        let found = by_date.remove(&scenario.date).unwrap_or_default();
        match scenario.after_edit {
            ExpectedState::None => {
                assert!(found.is_empty(), "{} should have been deleted", scenario.date);
            },
            ExpectedState::Kept{ approved } => {
                assert_eq!(found.len(), 1, "{} should have exactly one occurrence", scenario.date);
                let occ = found[0];
                assert_eq!(occ.id(), Some(ids_before[&scenario.date][0]), "{} should have kept its identity", scenario.date);
                assert_eq!(occ.is_public(), approved, "approval of {}", scenario.date);
                assert_eq!(occ.title(), EDITED_TITLE);
            },
            ExpectedState::Created => {
                assert_eq!(found.len(), 1, "{} should have exactly one occurrence", scenario.date);
                let occ = found[0];
                assert!(ids_before.get(&scenario.date).is_none());
                assert!(occ.is_approved() == false);
                assert!(occ.published() == false);
                assert_eq!(occ.title(), EDITED_TITLE);
            },
        }
    }
    assert!(by_date.is_empty(), "Unexpected dates: {:?}", by_date.keys().collect::<Vec<_>>());
}
