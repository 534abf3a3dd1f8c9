//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::selection::QuizPicker;

/// Shared application state.
///
/// Generic over `D: Database` so tests can inject an in-memory store.
/// Dependencies are injected via constructor, not created internally.
pub struct AppState<D: Database> {
    db: Arc<D>,
    picker: QuizPicker,
}

// Manual Clone impl - only the Arc needs cloning, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            picker: self.picker,
        }
    }
}

impl<D: Database> AppState<D> {
    pub fn new(db: D, picker: QuizPicker) -> Self {
        Self {
            db: Arc::new(db),
            picker,
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get the quiz picker.
    pub fn picker(&self) -> QuizPicker {
        self.picker
    }
}
