//! This module ties the builder, the reconciler and the approval rules to a storage
//!
//! It is what a controller calls when a visitor submits or edits events, or when a moderator approves them.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::approval::{apply_auto_approval, approve_occurrence, publish_series, ApprovalReport};
use crate::builder::{build_occurrence, build_occurrences};
use crate::convert::start_of_day;
use crate::error::{EventError, EventResult, PersistenceError};
use crate::item::{OccurrenceId, SeriesId, UserId};
use crate::moderation::{moderation_queue, ModerationEntry};
use crate::occurrence::Occurrence;
use crate::reconcile::{reconcile, EditScript, PlanStep};
use crate::series::Series;
use crate::submission::{AuthorContext, OccurrenceTemplate, SubmittedOccurrenceSet};
use crate::timezone::TimezoneRule;
use crate::traits::PersistenceGateway;

pub mod save_progress;
use save_progress::{FeedbackSender, OccurrenceFailure, Operation, SaveEvent, SaveProgress, SaveReport};


/// Saves submissions and edits of occurrences and series into a [`PersistenceGateway`].
///
/// Writes are not transactional: when a write fails, what has already been written stays written, and the failure is reported.
/// Running the same edit again picks up where it stopped.
#[derive(Debug)]
pub struct SeriesManager<G: PersistenceGateway> {
    gateway: G,
    rule: TimezoneRule,
}

impl<G: PersistenceGateway> SeriesManager<G> {
    pub fn new(gateway: G, rule: TimezoneRule) -> Self {
        Self { gateway, rule }
    }

    /// Create a manager that uses the timezone the process has been configured with
    pub fn with_current_timezone(gateway: G) -> Self {
        Self::new(gateway, crate::timezone::current())
    }

    pub fn gateway(&self) -> &G { &self.gateway }
    pub fn gateway_mut(&mut self) -> &mut G { &mut self.gateway }
    pub fn timezone_rule(&self) -> &TimezoneRule { &self.rule }

    /// Build the (unsaved) occurrences of a submission
    pub fn build_occurrences(&self, submitted: &SubmittedOccurrenceSet, author: &AuthorContext) -> EventResult<Vec<Occurrence>> {
        build_occurrences(submitted, author, &self.rule)
    }

    /// Save a new submission.
    ///
    /// A single date creates a standalone occurrence. Several dates create a series, then one occurrence per date.
    /// Nothing is written if any date is invalid. If a write fails, the remaining dates are abandoned and listed in the report.
    pub async fn submit(&mut self, submitted: &SubmittedOccurrenceSet, author: &AuthorContext) -> EventResult<SaveReport> {
        let mut progress = SaveProgress::new();
        self.run_submit(submitted, author, &mut progress).await
    }

    /// Same as [`Self::submit`], giving feedback about the progress
    pub async fn submit_with_feedback(&mut self, submitted: &SubmittedOccurrenceSet, author: &AuthorContext, feedback_sender: FeedbackSender) -> EventResult<SaveReport> {
        let mut progress = SaveProgress::new_with_feedback_channel(feedback_sender);
        self.run_submit(submitted, author, &mut progress).await
    }

    async fn run_submit(&mut self, submitted: &SubmittedOccurrenceSet, author: &AuthorContext, progress: &mut SaveProgress) -> EventResult<SaveReport> {
        let candidates = self.build_occurrences(submitted, author)?;
        let title = submitted.template().content.title.clone();
        progress.info(&format!("Saving a new submission ({} dates) for \"{}\"", candidates.len(), title));
        progress.feedback(SaveEvent::Started);

        let mut report = SaveReport::default();

        let series_id = if submitted.is_series() {
            let series = Series::new(&title, author.user_id, author.auto_publishes());
            let series_id = match self.gateway.create_series(&series).await {
                Ok(id) => id,
                Err(err) => {
                    progress.error(&format!("Unable to create a series for \"{}\": {}", title, err));
                    progress.feedback(SaveEvent::Finished{ success: false });
                    return Err(err.into());
                },
            };
            report.series_id = Some(series_id);
            Some(series_id)
        } else {
            None
        };

        let mut aborted = false;
        for candidate in candidates {
            if aborted {
                report.skipped.push(candidate.local_date());
                continue;
            }
            let candidate = match series_id {
                Some(id) => candidate.with_series(id),
                None => candidate,
            };

            progress.debug(&format!("> Creating the occurrence on {}", candidate.local_date()));
            match self.gateway.create_occurrence(&candidate).await {
                Ok(id) => {
                    report.inserted.push(id);
                    progress.increment_counter();
                    progress.feedback(SaveEvent::InProgress{ series: title.clone(), done: progress.counter(), details: format!("created {}", candidate.local_date()) });
                },
                Err(err) => {
                    progress.warn(&format!("Unable to create the occurrence on {}: {}. Abandoning the remaining dates", candidate.local_date(), err));
                    report.failures.push(OccurrenceFailure {
                        local_date: candidate.local_date(),
                        id: None,
                        operation: Operation::Insert,
                        error: err.to_string(),
                    });
                    aborted = true;
                },
            }
        }

        if let Some(series_id) = series_id {
            if report.inserted.is_empty() {
                progress.info(&format!("No occurrence of {} could be saved, deleting it", series_id));
                match self.gateway.delete_series(series_id).await {
                    Ok(()) => report.series_deleted = true,
                    Err(err) => progress.error(&format!("Unable to delete the empty {}: {}", series_id, err)),
                }
            }
        }

        progress.info(&format!("Submission saved ({} created, {} failed, {} skipped)", report.inserted.len(), report.failures.len(), report.skipped.len()));
        progress.feedback(SaveEvent::Finished{ success: progress.is_success() });
        Ok(report)
    }


    /// Compute what should change in the storage so that a series matches the given candidates
    pub async fn reconcile_series(&self, series_id: SeriesId, candidates: &[Occurrence]) -> EventResult<EditScript> {
        let existing = self.gateway.get_occurrences_by_series(series_id).await?;
        Ok(reconcile(&existing, candidates))
    }

    /// Replace the dates of a series with a new submission.
    ///
    /// Kept dates are updated (and keep their approval), removed dates are deleted, new dates are inserted.
    /// The first failing write aborts the remaining ones, see [`SaveReport`]. The series is renamed to `new_title` if given,
    /// and deleted if it has no occurrence left.
    pub async fn edit_series(&mut self, series_id: SeriesId, submitted: &SubmittedOccurrenceSet, new_title: Option<&str>, author: &AuthorContext) -> EventResult<SaveReport> {
        let mut progress = SaveProgress::new();
        self.run_edit_series(series_id, submitted, new_title, author, &mut progress).await
    }

    /// Same as [`Self::edit_series`], giving feedback about the progress
    pub async fn edit_series_with_feedback(&mut self, series_id: SeriesId, submitted: &SubmittedOccurrenceSet, new_title: Option<&str>, author: &AuthorContext, feedback_sender: FeedbackSender) -> EventResult<SaveReport> {
        let mut progress = SaveProgress::new_with_feedback_channel(feedback_sender);
        self.run_edit_series(series_id, submitted, new_title, author, &mut progress).await
    }

    async fn run_edit_series(&mut self, series_id: SeriesId, submitted: &SubmittedOccurrenceSet, new_title: Option<&str>, author: &AuthorContext, progress: &mut SaveProgress) -> EventResult<SaveReport> {
        let mut series = self.gateway.get_series(series_id).await?
            .ok_or_else(|| EventError::NotFound(series_id.to_string()))?;

        let candidates: Vec<Occurrence> = self.build_occurrences(submitted, author)?
            .into_iter()
            .map(|occ| occ.with_series(series_id))
            .collect();
        let script = self.reconcile_series(series_id, &candidates).await?;

        progress.info(&format!("Editing {} \"{}\": {} to insert, {} to update, {} to delete, {} unchanged",
            series_id, series.title(), script.to_insert.len(), script.to_update.len(), script.to_delete.len(), script.unchanged.len()));
        progress.feedback(SaveEvent::Started);

        let mut report = SaveReport {
            series_id: Some(series_id),
            unchanged: script.unchanged.iter().filter_map(|occ| occ.id()).collect(),
            ..SaveReport::default()
        };

        let mut aborted = false;
        for step in script.steps() {
            if aborted {
                report.skipped.push(step.local_date());
                continue;
            }

            progress.debug(&format!("> {}", step));
            if let Err(failure) = self.apply_step(step, author, &mut report).await {
                progress.warn(&format!("{} ({}). Abandoning the remaining changes", failure, failure.error));
                report.failures.push(failure);
                aborted = true;
                continue;
            }
            progress.increment_counter();
            progress.feedback(SaveEvent::InProgress{ series: series.title().to_string(), done: progress.counter(), details: step.to_string() });
        }

        // Occurrences are written, let's take care of their series
        if let Err(err) = self.update_edited_series(&mut series, new_title, &mut report).await {
            progress.error(&format!("Unable to update {}: {}", series_id, err));
            report.series_failure = Some(err.to_string());
        }

        progress.info(&format!("Edit of {} finished ({} inserted, {} updated, {} deleted, {} failed, {} skipped)",
            series_id, report.inserted.len(), report.updated.len(), report.deleted.len(), report.failures.len(), report.skipped.len()));
        progress.feedback(SaveEvent::Finished{ success: progress.is_success() });
        Ok(report)
    }

    async fn apply_step(&mut self, step: PlanStep<'_>, author: &AuthorContext, report: &mut SaveReport) -> Result<(), OccurrenceFailure> {
        let failure = |occ: &Occurrence, operation: Operation, err: PersistenceError| OccurrenceFailure {
            local_date: occ.local_date(),
            id: occ.id(),
            operation,
            error: err.to_string(),
        };

        match step {
            PlanStep::Insert(occ) => {
                let occ = apply_auto_approval(occ.clone(), author);
                let id = self.gateway.create_occurrence(&occ).await
                    .map_err(|err| failure(&occ, Operation::Insert, err))?;
                report.inserted.push(id);
            },
            PlanStep::Update(planned) => {
                let updated = apply_auto_approval(planned.updated.clone(), author);
                let id = stored_id(&planned.previous).map_err(|err| failure(&updated, Operation::Update, err))?;
                self.gateway.update_occurrence(id, &updated).await
                    .map_err(|err| failure(&updated, Operation::Update, err))?;
                report.updated.push(id);
            },
            PlanStep::Delete(occ) => {
                let id = stored_id(occ).map_err(|err| failure(occ, Operation::Delete, err))?;
                self.gateway.delete_occurrence(id).await
                    .map_err(|err| failure(occ, Operation::Delete, err))?;
                report.deleted.push(id);
            },
        }
        Ok(())
    }

    async fn update_edited_series(&mut self, series: &mut Series, new_title: Option<&str>, report: &mut SaveReport) -> Result<(), PersistenceError> {
        let series_id = series.id().ok_or_else(|| PersistenceError::new("This series has never been stored"))?;

        let remaining = self.gateway.get_occurrences_by_series(series_id).await?;
        if remaining.is_empty() {
            log::info!("{} has no occurrence left, deleting it", series_id);
            self.gateway.delete_series(series_id).await?;
            report.series_deleted = true;
            return Ok(());
        }

        match new_title {
            Some(title) if title != series.title() => series.set_title(title.to_string()),
            _ => series.touch(),
        }
        self.gateway.update_series(series_id, series).await
    }


    /// Change the date, times or content of a single occurrence.
    ///
    /// Its identity, series and approval are kept.
    pub async fn edit_occurrence(&mut self, id: OccurrenceId, date: NaiveDate, template: &OccurrenceTemplate, author: &AuthorContext) -> EventResult<Occurrence> {
        let stored = self.gateway.get_occurrence(id).await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;

        let candidate = build_occurrence(date, template, author, &self.rule)?;
        let updated = apply_auto_approval(candidate.carrying_forward(&stored), author);

        if updated.has_same_content_as(&stored) && updated.approval_state() == stored.approval_state() && updated.published() == stored.published() {
            log::debug!("{} is already up to date", id);
            return Ok(stored);
        }

        log::debug!("Updating {} (now on {})", id, updated.local_date());
        self.gateway.update_occurrence(id, &updated).await?;
        Ok(updated)
    }

    /// Delete an occurrence, and its series if it was the last one.
    ///
    /// Returns whether the series has been deleted
    pub async fn delete_occurrence(&mut self, id: OccurrenceId) -> EventResult<bool> {
        let stored = self.gateway.get_occurrence(id).await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;

        self.gateway.delete_occurrence(id).await?;
        log::debug!("Deleted {} on {}", id, stored.local_date());

        if let Some(series_id) = stored.series_id() {
            if self.gateway.get_occurrences_by_series(series_id).await?.is_empty() {
                log::info!("{} has no occurrence left, deleting it", series_id);
                self.gateway.delete_series(series_id).await?;
                return Ok(true);
            }
        }
        Ok(false)
    }


    /// Approve and publish some occurrences, and publish the series they belong to.
    ///
    /// A failure on an occurrence does not prevent the others from being approved.
    pub async fn approve_occurrences(&mut self, ids: &[OccurrenceId], moderator: UserId) -> EventResult<ApprovalReport> {
        let mut report = ApprovalReport::default();
        let mut touched_series = BTreeSet::new();

        for id in ids {
            match self.approve_stored_occurrence(*id, moderator).await {
                Ok(occurrence) => {
                    report.approved.push(*id);
                    if let Some(series_id) = occurrence.series_id() {
                        touched_series.insert(series_id);
                    }
                },
                Err(err) => {
                    log::warn!("Unable to approve {}: {}", id, err);
                    report.failed.push(*id);
                },
            }
        }

        let mut all_published = touched_series.is_empty() == false;
        for series_id in touched_series {
            match self.publish_stored_series(series_id).await {
                Ok(()) => (),
                Err(err) => {
                    log::warn!("Unable to publish {}: {}", series_id, err);
                    all_published = false;
                },
            }
        }
        report.series_published = all_published;

        log::info!("{} approved {} occurrences ({} failed)", moderator, report.approved.len(), report.failed.len());
        Ok(report)
    }

    /// Publish a series and approve every one of its occurrences.
    ///
    /// A failure on an occurrence does not prevent the others from being approved.
    pub async fn approve_series(&mut self, series: &Series, moderator: UserId) -> EventResult<ApprovalReport> {
        let series_id = series.id().ok_or_else(|| EventError::NotFound(format!("series \"{}\" has never been stored", series.title())))?;
        let mut report = ApprovalReport::default();

        match self.publish_stored_series(series_id).await {
            Ok(()) => report.series_published = true,
            Err(err) => log::warn!("Unable to publish {}: {}", series_id, err),
        }

        for occurrence in self.gateway.get_occurrences_by_series(series_id).await? {
            let id = match occurrence.id() {
                Some(id) => id,
                None => continue,
            };
            let approved = approve_occurrence(&occurrence, moderator);
            if approved == occurrence {
                report.approved.push(id);
                continue;
            }
            match self.gateway.update_occurrence(id, &approved).await {
                Ok(()) => report.approved.push(id),
                Err(err) => {
                    log::warn!("Unable to approve {} on {}: {}", id, occurrence.local_date(), err);
                    report.failed.push(id);
                },
            }
        }

        log::info!("{} approved {} ({} occurrences approved, {} failed)", moderator, series_id, report.approved.len(), report.failed.len());
        Ok(report)
    }

    async fn approve_stored_occurrence(&mut self, id: OccurrenceId, moderator: UserId) -> EventResult<Occurrence> {
        let stored = self.gateway.get_occurrence(id).await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))?;
        let approved = approve_occurrence(&stored, moderator);
        if approved != stored {
            self.gateway.update_occurrence(id, &approved).await?;
        }
        Ok(approved)
    }

    async fn publish_stored_series(&mut self, series_id: SeriesId) -> EventResult<()> {
        let stored = self.gateway.get_series(series_id).await?
            .ok_or_else(|| EventError::NotFound(series_id.to_string()))?;
        if stored.published() == false {
            self.gateway.update_series(series_id, &publish_series(&stored)).await?;
        }
        Ok(())
    }


    /// The occurrences a moderator still has to review, with their likely duplicates
    pub async fn moderation_queue(&self) -> EventResult<Vec<ModerationEntry>> {
        let pending = self.gateway.get_unapproved_occurrences().await?;
        Ok(moderation_queue(&pending, &self.rule))
    }

    /// The public occurrences that start on a given local day
    pub async fn public_occurrences_on(&self, date: NaiveDate) -> EventResult<Vec<Occurrence>> {
        let next_day = date.succ_opt().ok_or_else(|| EventError::InvalidDate(date.to_string()))?;
        let from = start_of_day(date, &self.rule)?;
        let to = start_of_day(next_day, &self.rule)?;

        Ok(self.gateway.get_occurrences_in_range(from, to).await?
            .into_iter()
            .filter(|occ| occ.is_public())
            .collect())
    }
}

fn stored_id(occurrence: &Occurrence) -> Result<OccurrenceId, PersistenceError> {
    occurrence.id().ok_or_else(|| PersistenceError::new(format!("The occurrence on {} has never been stored", occurrence.local_date())))
}


#[cfg(test)]
mod test {
    use super::*;
    use std::sync::{Arc, Mutex};
    use chrono::NaiveTime;

    use crate::item::{CategoryId, EventContent, Location};
    use crate::mock_behaviour::MockBehaviour;
    use crate::store::MemoryStore;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, m, d).unwrap()
    }

    fn template(title: &str) -> OccurrenceTemplate {
        OccurrenceTemplate::new(
            EventContent::new(title, "Come on out!", CategoryId::new(2), Location::new("Be Here Now")),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            Some(NaiveTime::from_hms_opt(21, 0, 0).unwrap()),
        )
    }

    fn manager() -> SeriesManager<MemoryStore> {
        SeriesManager::new(MemoryStore::new(), TimezoneRule::from_name("America/New_York").unwrap())
    }

    #[tokio::test]
    async fn test_submit_single() {
        let mut manager = manager();
        let submitted = SubmittedOccurrenceSet::new(vec![date(10, 30)], template("Open mic"));
        let report = manager.submit(&submitted, &AuthorContext::anonymous()).await.unwrap();

        assert!(report.is_complete());
        assert_eq!(report.series_id, None);
        assert_eq!(report.inserted.len(), 1);
        assert_eq!(manager.gateway().series().count(), 0);
    }

    #[tokio::test]
    async fn test_submit_series_publication() {
        let mut manager = manager();
        let submitted = SubmittedOccurrenceSet::new(vec![date(10, 30), date(10, 31)], template("Open mic"));

        let report = manager.submit(&submitted, &AuthorContext::user(UserId::new(3), false)).await.unwrap();
        let series = manager.gateway().get_series(report.series_id.unwrap()).await.unwrap().unwrap();
        assert_eq!(series.title(), "Open mic");
        assert!(series.published() == false);

        let report = manager.submit(&submitted, &AuthorContext::user(UserId::new(3), true)).await.unwrap();
        let series = manager.gateway().get_series(report.series_id.unwrap()).await.unwrap().unwrap();
        assert!(series.published());
        let stored = manager.gateway().get_occurrences_by_series(report.series_id.unwrap()).await.unwrap();
        assert!(stored.iter().all(|occ| occ.is_public()));
    }

    #[tokio::test]
    async fn test_invalid_submission_writes_nothing() {
        let mut manager = manager();
        let mut tpl = template("Open mic");
        tpl.time_start = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        let submitted = SubmittedOccurrenceSet::new(vec![date(3, 10), date(3, 11)], tpl);

        let result = manager.submit(&submitted, &AuthorContext::anonymous()).await;
        assert!(matches!(result, Err(EventError::InvalidLocalTime{ .. })));
        assert_eq!(manager.gateway().occurrences().count(), 0);
        assert_eq!(manager.gateway().series().count(), 0);
    }

    #[tokio::test]
    async fn test_edit_unknown_series() {
        let mut manager = manager();
        let submitted = SubmittedOccurrenceSet::new(vec![date(10, 30)], template("Open mic"));
        let result = manager.edit_series(SeriesId::new(42), &submitted, None, &AuthorContext::anonymous()).await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_edit_occurrence_keeps_approval() {
        let mut manager = manager();
        let submitted = SubmittedOccurrenceSet::new(vec![date(10, 30), date(10, 31)], template("Open mic"));
        let report = manager.submit(&submitted, &AuthorContext::anonymous()).await.unwrap();
        let id = report.inserted[0];

        manager.approve_occurrences(&[id], UserId::new(1)).await.unwrap();
        let edited = manager.edit_occurrence(id, date(11, 2), &template("Open mic night"), &AuthorContext::anonymous()).await.unwrap();

        assert_eq!(edited.id(), Some(id));
        assert_eq!(edited.series_id(), report.series_id);
        assert_eq!(edited.approved_by(), Some(UserId::new(1)));
        assert_eq!(edited.title(), "Open mic night");
        assert_eq!(manager.gateway().get_occurrence(id).await.unwrap().unwrap(), edited);
    }

    #[tokio::test]
    async fn test_delete_last_occurrence_deletes_series() {
        let mut manager = manager();
        let submitted = SubmittedOccurrenceSet::new(vec![date(10, 30), date(10, 31)], template("Open mic"));
        let report = manager.submit(&submitted, &AuthorContext::anonymous()).await.unwrap();

        assert_eq!(manager.delete_occurrence(report.inserted[0]).await.unwrap(), false);
        assert_eq!(manager.delete_occurrence(report.inserted[1]).await.unwrap(), true);
        assert_eq!(manager.gateway().series().count(), 0);
        assert!(matches!(manager.delete_occurrence(report.inserted[1]).await, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_submit_failure_removes_empty_series() {
        let mock = Arc::new(Mutex::new(MockBehaviour {
            create_occurrence_behaviour: (0, 1),
            ..MockBehaviour::default()
        }));
        let store = MemoryStore::new().with_mock_behaviour(Arc::clone(&mock));
        let mut manager = SeriesManager::new(store, TimezoneRule::from_name("America/New_York").unwrap());

        let submitted = SubmittedOccurrenceSet::new(vec![date(10, 30), date(10, 31), date(11, 1)], template("Open mic"));
        let report = manager.submit(&submitted, &AuthorContext::anonymous()).await.unwrap();

        assert!(report.is_complete() == false);
        assert!(report.inserted.is_empty());
        assert_eq!(report.failures[0].to_string(), "Event on 2018-10-30 could not be saved");
        assert_eq!(report.skipped, vec![date(10, 31), date(11, 1)]);
        assert!(report.series_deleted);
        assert_eq!(manager.gateway().series().count(), 0);
    }

    #[tokio::test]
    async fn test_public_occurrences_on() {
        let mut manager = manager();
        let mut tpl = template("Late show");
        tpl.time_start = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        tpl.time_end = None;
        let submitted = SubmittedOccurrenceSet::new(vec![date(10, 30), date(10, 31)], tpl);
        let report = manager.submit(&submitted, &AuthorContext::admin(UserId::new(1))).await.unwrap();

        // 23:30 in New York is already the next day in UTC
        let found = manager.public_occurrences_on(date(10, 30)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), Some(report.inserted[0]));
    }

    #[tokio::test]
    async fn test_public_occurrences_on_a_day_starting_with_a_gap() {
        // Cuba springs forward at midnight: 2018-03-11 has no 00:00
        let mut manager = SeriesManager::new(MemoryStore::new(), TimezoneRule::from_name("America/Havana").unwrap());
        let mut tpl = template("Early bird");
        tpl.time_start = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
        tpl.time_end = None;
        let submitted = SubmittedOccurrenceSet::new(vec![date(3, 10), date(3, 11), date(3, 12)], tpl);
        let report = manager.submit(&submitted, &AuthorContext::admin(UserId::new(1))).await.unwrap();
        assert_eq!(report.inserted.len(), 3);

        let found = manager.public_occurrences_on(date(3, 11)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), Some(report.inserted[1]));
        assert_eq!(found[0].local_date(), date(3, 11));
    }
}
