//! The list of submissions that are waiting for a moderator

use std::collections::HashMap;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::convert::local_date_of;
use crate::item::{OccurrenceId, SeriesId};
use crate::occurrence::Occurrence;
use crate::timezone::TimezoneRule;

/// An occurrence to review, and the other pending occurrences that were probably submitted along with it
#[derive(Clone, Debug, PartialEq)]
pub struct ModerationEntry {
    pub occurrence: Occurrence,
    pub likely_duplicates: Vec<OccurrenceId>,
}

/// Whether a moderator still has to look at this occurrence
pub fn needs_moderation(occurrence: &Occurrence) -> bool {
    occurrence.is_public() == false
}

/// Build the moderation queue out of a list of occurrences.
///
/// Public occurrences are skipped. Pending occurrences of the same series that were last modified on the same (local) day
/// are grouped, since they are most likely a single submission: the earliest one is listed, with the others as its duplicates.
/// Occurrences that do not belong to any series are always listed on their own.
pub fn moderation_queue(occurrences: &[Occurrence], rule: &TimezoneRule) -> Vec<ModerationEntry> {
    let mut queue: Vec<ModerationEntry> = Vec::new();
    let mut groups: HashMap<(SeriesId, NaiveDate), usize> = HashMap::new();

    let pending = occurrences.iter()
        .filter(|occ| needs_moderation(occ))
        .sorted_by_key(|occ| (occ.start_utc(), occ.id()));

    for occ in pending {
        let series_id = match occ.series_id() {
            None => {
                queue.push(ModerationEntry { occurrence: occ.clone(), likely_duplicates: Vec::new() });
                continue;
            },
            Some(id) => id,
        };

        let key = (series_id, local_date_of(occ.modified_at(), rule));
        match groups.get(&key) {
            Some(index) => {
                log::trace!("{:?} on {} is grouped with an earlier occurrence of {}", occ.id(), occ.local_date(), series_id);
                if let Some(id) = occ.id() {
                    queue[*index].likely_duplicates.push(id);
                }
            },
            None => {
                groups.insert(key, queue.len());
                queue.push(ModerationEntry { occurrence: occ.clone(), likely_duplicates: Vec::new() });
            },
        }
    }

    queue
}
