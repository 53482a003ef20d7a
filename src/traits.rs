use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::PersistenceError;
use crate::item::{OccurrenceId, SeriesId};
use crate::occurrence::Occurrence;
use crate::series::Series;

/// The storage that occurrences and series live in.
///
/// Every write is an independent operation: no multi-row transaction is assumed.
/// Within a single request, implementors must return what has just been written (read-your-writes).
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Returns the occurrence with this identifier, if it exists
    async fn get_occurrence(&self, id: OccurrenceId) -> Result<Option<Occurrence>, PersistenceError>;
    /// Returns every occurrence of a series, ordered by start time (earliest first)
    async fn get_occurrences_by_series(&self, series_id: SeriesId) -> Result<Vec<Occurrence>, PersistenceError>;
    /// Returns the occurrences that start in `[from, to)`, ordered by start time
    async fn get_occurrences_in_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Occurrence>, PersistenceError>;
    /// Returns the occurrences that are either unapproved or unpublished, ordered by start time
    async fn get_unapproved_occurrences(&self) -> Result<Vec<Occurrence>, PersistenceError>;

    /// Store a new occurrence (its `id` is ignored), and returns the identifier it has been given
    async fn create_occurrence(&mut self, occurrence: &Occurrence) -> Result<OccurrenceId, PersistenceError>;
    /// Replace a stored occurrence
    async fn update_occurrence(&mut self, id: OccurrenceId, occurrence: &Occurrence) -> Result<(), PersistenceError>;
    async fn delete_occurrence(&mut self, id: OccurrenceId) -> Result<(), PersistenceError>;

    async fn get_series(&self, id: SeriesId) -> Result<Option<Series>, PersistenceError>;
    /// Store a new series (its `id` is ignored), and returns the identifier it has been given
    async fn create_series(&mut self, series: &Series) -> Result<SeriesId, PersistenceError>;
    async fn update_series(&mut self, id: SeriesId, series: &Series) -> Result<(), PersistenceError>;
    /// Delete a series. This does not delete its occurrences
    async fn delete_series(&mut self, id: SeriesId) -> Result<(), PersistenceError>;
}
