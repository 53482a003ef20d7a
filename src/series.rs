//! Series: a named group of occurrences that share a template

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::item::{SeriesId, UserId};

/// A group of occurrences (one per date) that have been submitted together
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    id: Option<SeriesId>,
    title: String,
    author_id: Option<UserId>,
    /// Series-level visibility gate
    published: bool,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Series {
    /// Create a new series, that is not stored yet
    pub fn new<S: ToString>(title: S, author_id: Option<UserId>, published: bool) -> Self {
        let now = Utc::now();
        Self::new_with_parameters(None, title.to_string(), author_id, published, now, now)
    }

    pub fn new_with_parameters(id: Option<SeriesId>, title: String, author_id: Option<UserId>,
                               published: bool, created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self
    {
        Self { id, title, author_id, published, created_at, modified_at }
    }

    pub fn id(&self) -> Option<SeriesId>      { self.id }
    pub fn title(&self) -> &str               { &self.title }
    pub fn author_id(&self) -> Option<UserId> { self.author_id }
    pub fn published(&self) -> bool           { self.published }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn modified_at(&self) -> DateTime<Utc> { self.modified_at }

    pub fn with_id(mut self, id: SeriesId) -> Self {
        self.id = Some(id);
        self
    }

    /// Rename a series.
    /// This updates its "modified" field
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.update_last_modified();
    }

    /// Mark the series as edited
    pub fn touch(&mut self) {
        self.update_last_modified();
    }

    pub(crate) fn set_published(&mut self, published: bool) {
        if self.published != published {
            self.published = published;
            self.update_last_modified();
        }
    }

    fn update_last_modified(&mut self) {
        self.modified_at = Utc::now();
    }
}
