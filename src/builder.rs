//! Turns a submission into candidate occurrences (one per submitted date)
//!
//! This is a pure transformation: nothing is stored here.

use chrono::{DateTime, NaiveDate, Utc};

use crate::approval::apply_auto_approval;
use crate::convert::to_utc;
use crate::error::{EventError, EventResult};
use crate::occurrence::Occurrence;
use crate::submission::{AuthorContext, OccurrenceTemplate, SubmittedOccurrenceSet};
use crate::timezone::TimezoneRule;

/// Build one unsaved occurrence per submitted date, in submission order.
///
/// Duplicate dates are not merged here. This fails as a whole as soon as one date cannot be converted.
pub fn build_occurrences(submitted: &SubmittedOccurrenceSet, author: &AuthorContext, rule: &TimezoneRule) -> EventResult<Vec<Occurrence>> {
    if submitted.is_empty() {
        return Err(EventError::EmptyDateSet);
    }

    submitted.dates()
        .iter()
        .map(|date| build_occurrence(*date, submitted.template(), author, rule))
        .collect()
}

/// Build the unsaved occurrence for a single date
pub fn build_occurrence(date: NaiveDate, template: &OccurrenceTemplate, author: &AuthorContext, rule: &TimezoneRule) -> EventResult<Occurrence> {
    let (start_utc, end_utc) = resolve_times(date, template, rule)?;
    let occurrence = Occurrence::new(template.content.clone(), date, start_utc, end_utc, author.user_id)?;
    Ok(apply_auto_approval(occurrence, author))
}

/// Compute the start and end instants of the template on a given date.
///
/// An end time that is not after the start time on the wall clock belongs to the next day: submitters give end times for the same "event night".
/// Only the date the end time is taken on has to be valid for it.
pub fn resolve_times(date: NaiveDate, template: &OccurrenceTemplate, rule: &TimezoneRule) -> EventResult<(DateTime<Utc>, Option<DateTime<Utc>>)> {
    let start_utc = to_utc(date, template.time_start, rule)?;

    let end_utc = match template.time_end {
        None => None,
        Some(time_end) => {
            let next_day = || date.succ_opt().ok_or_else(|| EventError::InvalidDate(date.to_string()));

            if time_end <= template.time_start {
                let end_date = next_day()?;
                log::trace!("End time {} is not after start time {} on {}, moving it to {}", time_end, template.time_start, date, end_date);
                Some(to_utc(end_date, time_end, rule)?)
            } else {
                let same_day = to_utc(date, time_end, rule)?;
                if same_day > start_utc {
                    Some(same_day)
                } else {
                    // The clocks went back in between
                    let end_date = next_day()?;
                    log::trace!("End time {} on {} is not after {} once converted, moving it to {}", time_end, date, start_utc, end_date);
                    Some(to_utc(end_date, time_end, rule)?)
                }
            }
        },
    };

    Ok((start_utc, end_utc))
}
