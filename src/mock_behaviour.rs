//! This module provides ways to tweak a [`MemoryStore`](crate::store::MemoryStore), so that it can return errors on some tests

use crate::error::PersistenceError;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    // Reads
    pub get_occurrences_behaviour: (u32, u32),
    pub get_series_behaviour: (u32, u32),

    // Occurrence writes
    pub create_occurrence_behaviour: (u32, u32),
    pub update_occurrence_behaviour: (u32, u32),
    pub delete_occurrence_behaviour: (u32, u32),

    // Series writes
    pub create_series_behaviour: (u32, u32),
    pub update_series_behaviour: (u32, u32),
    pub delete_series_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            get_occurrences_behaviour: (0, n_fails),
            get_series_behaviour: (0, n_fails),
            create_occurrence_behaviour: (0, n_fails),
            update_occurrence_behaviour: (0, n_fails),
            delete_occurrence_behaviour: (0, n_fails),
            create_series_behaviour: (0, n_fails),
            update_series_behaviour: (0, n_fails),
            delete_series_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_get_occurrences(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.get_occurrences_behaviour, "get_occurrences")
    }
    pub fn can_get_series(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.get_series_behaviour, "get_series")
    }
    pub fn can_create_occurrence(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.create_occurrence_behaviour, "create_occurrence")
    }
    pub fn can_update_occurrence(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.update_occurrence_behaviour, "update_occurrence")
    }
    pub fn can_delete_occurrence(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.delete_occurrence_behaviour, "delete_occurrence")
    }
    pub fn can_create_series(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.create_series_behaviour, "create_series")
    }
    pub fn can_update_series(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.update_series_behaviour, "update_series")
    }
    pub fn can_delete_series(&mut self) -> Result<(), PersistenceError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.delete_series_behaviour, "delete_series")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), PersistenceError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(PersistenceError::new(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value)))
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}
