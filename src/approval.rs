//! Approval and publication of occurrences and series
//!
//! An occurrence starts `Unapproved` and unpublished, unless its author is trusted to publish directly.
//! Approving sets both the approving moderator and the published flag. Approving again is harmless.

use serde::{Deserialize, Serialize};

use crate::item::{OccurrenceId, UserId};
use crate::occurrence::Occurrence;
use crate::series::Series;
use crate::submission::AuthorContext;

/// Approve and publish an occurrence.
///
/// This is allowed from any state. Re-approving an already approved occurrence with the same moderator returns it unchanged.
pub fn approve_occurrence(occurrence: &Occurrence, moderator: UserId) -> Occurrence {
    let mut approved = occurrence.clone();
    approved.set_moderation(Some(moderator), true);
    approved
}

/// Publish a series. Its occurrences have to be approved separately
pub fn publish_series(series: &Series) -> Series {
    let mut published = series.clone();
    published.set_published(true);
    published
}

/// Pre-approve a newly created occurrence if its author is trusted to publish without moderation.
///
/// This never revokes an existing approval.
pub fn apply_auto_approval(occurrence: Occurrence, author: &AuthorContext) -> Occurrence {
    match author.user_id {
        Some(user_id) if author.auto_publishes() && occurrence.is_public() == false => {
            log::debug!("{} auto-publishes, pre-approving the occurrence on {}", user_id, occurrence.local_date());
            approve_occurrence(&occurrence, user_id)
        },
        _ => occurrence,
    }
}


/// The outcome of approving several occurrences at once
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalReport {
    pub approved: Vec<OccurrenceId>,
    pub failed: Vec<OccurrenceId>,
    /// Whether the series (if any) has been published
    pub series_published: bool,
}

impl ApprovalReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
