//! Shared router state
//!
//! Handlers are stateless; the only shared resource is the database pool.

use crate::tracker::TrackerDb;
use std::sync::Arc;

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Tracker database
    pub db: Arc<TrackerDb>,
}

impl AppState {
    /// Wrap an opened database
    pub fn new(db: TrackerDb) -> Self {
        Self { db: Arc::new(db) }
    }
}
