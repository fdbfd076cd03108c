//! Session store abstraction.
//!
//! The persisted `ScoreRecord` lives behind a small trait so the game
//! logic never touches the storage medium directly: the web front end
//! plugs in a cookie-backed store, tests use [`MemoryStore`]. Persistence
//! is best-effort; the engine absorbs store errors and degrades to an
//! always-fresh session.

use crate::date_key::DayKey;
use crate::record::ScoreRecord;
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Save/load operations for per-day score records.
pub trait SessionStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the record for one day, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium is unavailable. Corrupted payloads
    /// are reported as absent, not as errors.
    fn load(&self, key: &DayKey) -> Result<Option<ScoreRecord>, Self::Error>;

    /// Overwrite the record for its day.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium is unavailable.
    fn save(&self, record: &ScoreRecord) -> Result<(), Self::Error>;

    /// Delete every stored record regardless of key. Administrative
    /// escape hatch, not part of the player-facing contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium is unavailable.
    fn clear_all(&self) -> Result<(), Self::Error>;
}

/// In-memory store backend. The single-writer model makes `Rc<RefCell>`
/// sufficient; there is no concurrent writer to guard against.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<HashMap<DayKey, ScoreRecord>>>,
    saves: Rc<RefCell<usize>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls observed, for write-discipline assertions.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    /// Seed a record directly, bypassing the save counter.
    pub fn seed(&self, record: ScoreRecord) {
        self.records.borrow_mut().insert(record.date.clone(), record);
    }
}

impl SessionStore for MemoryStore {
    type Error = Infallible;

    fn load(&self, key: &DayKey) -> Result<Option<ScoreRecord>, Self::Error> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn save(&self, record: &ScoreRecord) -> Result<(), Self::Error> {
        *self.saves.borrow_mut() += 1;
        self.records
            .borrow_mut()
            .insert(record.date.clone(), record.clone());
        Ok(())
    }

    fn clear_all(&self) -> Result<(), Self::Error> {
        self.records.borrow_mut().clear();
        Ok(())
    }
}

/// Error of a store whose medium cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session storage unavailable")]
pub struct StoreUnavailable;

/// Store backend that always fails, modelling disabled browser storage.
#[derive(Clone, Copy, Default)]
pub struct UnavailableStore;

impl SessionStore for UnavailableStore {
    type Error = StoreUnavailable;

    fn load(&self, _key: &DayKey) -> Result<Option<ScoreRecord>, Self::Error> {
        Err(StoreUnavailable)
    }

    fn save(&self, _record: &ScoreRecord) -> Result<(), Self::Error> {
        Err(StoreUnavailable)
    }

    fn clear_all(&self) -> Result<(), Self::Error> {
        Err(StoreUnavailable)
    }
}
