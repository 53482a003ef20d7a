//! Computes what has to change in the storage when a series is edited
//!
//! Occurrences are matched by their local date: a series has at most one occurrence per day.
//! The result is a plan, that the caller applies through a [`PersistenceGateway`](crate::traits::PersistenceGateway).
//! Applying a plan may stop halfway. Reconciling again against what has actually been stored only returns the remaining work.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::occurrence::Occurrence;

/// A stored occurrence and what it should become
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedUpdate {
    pub previous: Occurrence,
    /// Has the identity and moderation state of `previous`
    pub updated: Occurrence,
}

/// The changes needed to turn a stored set of occurrences into a submitted one
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditScript {
    /// Stored occurrences whose date is not submitted anymore
    pub to_delete: Vec<Occurrence>,
    /// Stored occurrences whose date is still submitted, but whose content changed
    pub to_update: Vec<PlannedUpdate>,
    /// Fresh (unsaved, unapproved) occurrences for newly submitted dates
    pub to_insert: Vec<Occurrence>,
    /// Stored occurrences that already match what has been submitted.
    /// These need no work
    pub unchanged: Vec<Occurrence>,
}

/// One step of an [`EditScript`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanStep<'a> {
    Insert(&'a Occurrence),
    Update(&'a PlannedUpdate),
    Delete(&'a Occurrence),
}

impl<'a> PlanStep<'a> {
    pub fn local_date(&self) -> NaiveDate {
        match self {
            PlanStep::Insert(occ) => occ.local_date(),
            PlanStep::Update(upd) => upd.updated.local_date(),
            PlanStep::Delete(occ) => occ.local_date(),
        }
    }
}

impl<'a> Display for PlanStep<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStep::Insert(occ) => write!(f, "+ {} {}", occ.local_date(), occ.title()),
            PlanStep::Update(upd) => write!(f, "~ {} {}", upd.updated.local_date(), upd.updated.title()),
            PlanStep::Delete(occ) => write!(f, "- {} {}", occ.local_date(), occ.title()),
        }
    }
}

impl EditScript {
    /// Whether there is nothing left to do
    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty() && self.to_update.is_empty() && self.to_insert.is_empty()
    }

    /// The number of storage operations this plan needs
    pub fn len(&self) -> usize {
        self.to_delete.len() + self.to_update.len() + self.to_insert.len()
    }

    /// The steps of this plan, in the order they should be applied.
    ///
    /// Insertions come first and deletions last, so that a series never becomes empty if the plan is interrupted.
    pub fn steps(&self) -> impl Iterator<Item = PlanStep<'_>> {
        self.to_insert.iter().map(PlanStep::Insert)
            .chain(self.to_update.iter().map(PlanStep::Update))
            .chain(self.to_delete.iter().map(PlanStep::Delete))
    }
}

impl Display for EditScript {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(nothing to do)");
        }
        let lines: Vec<String> = self.steps().map(|step| step.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}


/// Compute the plan that turns `existing` (what is stored) into `candidates` (what has just been submitted).
///
/// * dates only in `existing` are deleted,
/// * dates in both are updated, keeping the stored identity and approval,
/// * dates only in `candidates` are inserted, as fresh unapproved occurrences.
///
/// When a date appears several times, the first stored occurrence is the one that is kept (the others are deleted), and the last submitted one wins.
/// Neither input is modified.
pub fn reconcile(existing: &[Occurrence], candidates: &[Occurrence]) -> EditScript {
    let mut script = EditScript::default();

    let mut existing_by_date: BTreeMap<NaiveDate, &Occurrence> = BTreeMap::new();
    for occ in existing {
        if let Some(kept) = existing_by_date.get(&occ.local_date()) {
            log::trace!("{:?} duplicates {:?} on {}, it will be deleted", occ.id(), kept.id(), occ.local_date());
            script.to_delete.push(occ.clone());
            continue;
        }
        existing_by_date.insert(occ.local_date(), occ);
    }

    let mut candidates_by_date: BTreeMap<NaiveDate, &Occurrence> = BTreeMap::new();
    for occ in candidates {
        if candidates_by_date.insert(occ.local_date(), occ).is_some() {
            log::trace!("{} has been submitted more than once, using the last one", occ.local_date());
        }
    }

    for (date, stored) in &existing_by_date {
        match candidates_by_date.get(date) {
            None => {
                log::trace!("{} is not submitted anymore", date);
                script.to_delete.push((*stored).clone());
            },
            Some(candidate) => {
                let updated = candidate.carrying_forward(stored);
                if updated.has_same_content_as(stored) {
                    log::trace!("{} is unchanged", date);
                    script.unchanged.push((*stored).clone());
                } else {
                    log::trace!("{} has changed", date);
                    script.to_update.push(PlannedUpdate {
                        previous: (*stored).clone(),
                        updated,
                    });
                }
            },
        }
    }

    for (date, candidate) in &candidates_by_date {
        if existing_by_date.contains_key(date) == false {
            log::trace!("{} is a new date", date);
            script.to_insert.push(candidate.as_fresh());
        }
    }

    script.to_delete.sort_by_key(|occ| (occ.local_date(), occ.id()));
    script
}
