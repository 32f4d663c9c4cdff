//! Navigation delegate.
//!
//! The surface never renders pages itself; it only asks a [`Router`] to go
//! somewhere. [`HistoryRouter`] is the in-process implementation used by the
//! terminal front end: it records every visited path so the page area can
//! show where the user is.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

use foodtuck_types::Route;
use tracing::info;

/// Performs navigation to a path. No result is consumed by the caller.
pub trait Router: Debug {
    fn push(&mut self, path: &str);
}

/// Router that keeps the visited paths in memory.
///
/// Clones share the same history, which lets a caller keep a handle for
/// inspection after handing the router to the app.
#[derive(Debug, Clone, Default)]
pub struct HistoryRouter {
    entries: Arc<Mutex<Vec<Route>>>,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn current(&self) -> Option<Route> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }
}

impl Router for HistoryRouter {
    fn push(&mut self, path: &str) {
        info!(path, "navigate");
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(Route::new(path));
    }
}
