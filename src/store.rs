//! This module provides an in-memory storage for occurrences and series, that can be saved to a JSON file

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::item::{OccurrenceId, SeriesId};
use crate::mock_behaviour::MockBehaviour;
use crate::occurrence::Occurrence;
use crate::series::Series;
use crate::traits::PersistenceGateway;


/// A [`PersistenceGateway`] that keeps everything in memory.
///
/// It can optionally be backed by a file, and can be told to fail on purpose (see [`MockBehaviour`])
#[derive(Debug, Default)]
pub struct MemoryStore {
    backing_file: Option<PathBuf>,
    occurrences: BTreeMap<OccurrenceId, Occurrence>,
    series: BTreeMap<SeriesId, Series>,
    next_occurrence_id: u64,
    next_series_id: u64,

    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

/// What actually gets written into the backing file
#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct StoredData {
    occurrences: Vec<Occurrence>,
    series: Vec<Series>,
    next_occurrence_id: u64,
    next_series_id: u64,
}

impl MemoryStore {
    /// Create an empty store, that is not backed by any file
    pub fn new() -> Self {
        Self {
            next_occurrence_id: 1,
            next_series_id: 1,
            ..Self::default()
        }
    }

    /// Create an empty store, that will be saved to `path` by [`MemoryStore::save_to_file`]
    pub fn new_with_file(path: &Path) -> Self {
        Self {
            backing_file: Some(PathBuf::from(path)),
            ..Self::new()
        }
    }

    /// Make this store fail on purpose, as the given behaviour says
    pub fn with_mock_behaviour(mut self, mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        self.mock_behaviour = Some(mock_behaviour);
        self
    }

    /// Initialize a store from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, PersistenceError> {
        let data: StoredData = match std::fs::File::open(path) {
            Err(err) => {
                return Err(PersistenceError::new(format!("Unable to open file {:?}: {}", path, err)));
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        let mut store = Self::new_with_file(path);
        for occurrence in data.occurrences {
            let id = occurrence.id().ok_or_else(|| PersistenceError::new(format!("Occurrence on {} in {:?} has no id", occurrence.local_date(), path)))?;
            store.occurrences.insert(id, occurrence);
        }
        for series in data.series {
            let id = series.id().ok_or_else(|| PersistenceError::new(format!("Series {} in {:?} has no id", series.title(), path)))?;
            store.series.insert(id, series);
        }
        store.next_occurrence_id = data.next_occurrence_id.max(1);
        store.next_series_id = data.next_series_id.max(1);
        Ok(store)
    }

    /// Store the current content to its backing file
    pub fn save_to_file(&self) -> Result<(), PersistenceError> {
        let path = match &self.backing_file {
            None => return Err(PersistenceError::new("This store is not backed by any file")),
            Some(path) => path,
        };

        let data = StoredData {
            occurrences: self.occurrences.values().cloned().collect(),
            series: self.series.values().cloned().collect(),
            next_occurrence_id: self.next_occurrence_id,
            next_series_id: self.next_series_id,
        };

        let file = std::fs::File::create(path)?;
        serde_json::to_writer(file, &data)?;
        log::debug!("Saved {} occurrences and {} series to {:?}", data.occurrences.len(), data.series.len(), path);
        Ok(())
    }

    /// Every stored occurrence, in identifier order
    pub fn occurrences(&self) -> impl Iterator<Item = &Occurrence> {
        self.occurrences.values()
    }

    /// Every stored series, in identifier order
    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    /// Occurrences whose series does not exist (anymore)
    pub fn orphan_occurrences(&self) -> Vec<&Occurrence> {
        self.occurrences.values()
            .filter(|occ| match occ.series_id() {
                Some(series_id) => self.series.contains_key(&series_id) == false,
                None => false,
            })
            .collect()
    }

    /// Series that do not have any occurrence
    pub fn empty_series(&self) -> Vec<&Series> {
        self.series.iter()
            .filter(|(id, _)| self.occurrences.values().any(|occ| occ.series_id() == Some(**id)) == false)
            .map(|(_, series)| series)
            .collect()
    }

    fn mock(&self) -> Result<Option<std::sync::MutexGuard<'_, MockBehaviour>>, PersistenceError> {
        match &self.mock_behaviour {
            None => Ok(None),
            Some(mock) => mock.lock()
                .map(Some)
                .map_err(|_| PersistenceError::new("Mock behaviour lock is poisoned")),
        }
    }

    fn sorted_by_start(mut occurrences: Vec<Occurrence>) -> Vec<Occurrence> {
        occurrences.sort_by_key(|occ| (occ.start_utc(), occ.id()));
        occurrences
    }
}

#[async_trait]
impl PersistenceGateway for MemoryStore {
    async fn get_occurrence(&self, id: OccurrenceId) -> Result<Option<Occurrence>, PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_get_occurrences()?;
        }
        Ok(self.occurrences.get(&id).cloned())
    }

    async fn get_occurrences_by_series(&self, series_id: SeriesId) -> Result<Vec<Occurrence>, PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_get_occurrences()?;
        }
        let found = self.occurrences.values()
            .filter(|occ| occ.series_id() == Some(series_id))
            .cloned()
            .collect();
        Ok(Self::sorted_by_start(found))
    }

    async fn get_occurrences_in_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Occurrence>, PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_get_occurrences()?;
        }
        let found = self.occurrences.values()
            .filter(|occ| occ.start_utc() >= from && occ.start_utc() < to)
            .cloned()
            .collect();
        Ok(Self::sorted_by_start(found))
    }

    async fn get_unapproved_occurrences(&self) -> Result<Vec<Occurrence>, PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_get_occurrences()?;
        }
        let found = self.occurrences.values()
            .filter(|occ| occ.is_public() == false)
            .cloned()
            .collect();
        Ok(Self::sorted_by_start(found))
    }

    async fn create_occurrence(&mut self, occurrence: &Occurrence) -> Result<OccurrenceId, PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_create_occurrence()?;
        }
        let id = OccurrenceId::new(self.next_occurrence_id);
        self.next_occurrence_id += 1;
        self.occurrences.insert(id, occurrence.clone().with_id(id));
        log::trace!("Created {} on {}", id, occurrence.local_date());
        Ok(id)
    }

    async fn update_occurrence(&mut self, id: OccurrenceId, occurrence: &Occurrence) -> Result<(), PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_update_occurrence()?;
        }
        match self.occurrences.get_mut(&id) {
            None => Err(PersistenceError::new(format!("{} does not exist", id))),
            Some(stored) => {
                *stored = occurrence.clone().with_id(id);
                Ok(())
            },
        }
    }

    async fn delete_occurrence(&mut self, id: OccurrenceId) -> Result<(), PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_delete_occurrence()?;
        }
        match self.occurrences.remove(&id) {
            None => Err(PersistenceError::new(format!("{} does not exist", id))),
            Some(_) => Ok(()),
        }
    }

    async fn get_series(&self, id: SeriesId) -> Result<Option<Series>, PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_get_series()?;
        }
        Ok(self.series.get(&id).cloned())
    }

    async fn create_series(&mut self, series: &Series) -> Result<SeriesId, PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_create_series()?;
        }
        let id = SeriesId::new(self.next_series_id);
        self.next_series_id += 1;
        self.series.insert(id, series.clone().with_id(id));
        Ok(id)
    }

    async fn update_series(&mut self, id: SeriesId, series: &Series) -> Result<(), PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_update_series()?;
        }
        match self.series.get_mut(&id) {
            None => Err(PersistenceError::new(format!("{} does not exist", id))),
            Some(stored) => {
                *stored = series.clone().with_id(id);
                Ok(())
            },
        }
    }

    async fn delete_series(&mut self, id: SeriesId) -> Result<(), PersistenceError> {
        if let Some(mut mock) = self.mock()? {
            mock.can_delete_series()?;
        }
        match self.series.remove(&id) {
            None => Err(PersistenceError::new(format!("{} does not exist", id))),
            Some(_) => Ok(()),
        }
    }
}
