use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::RecommendationEngine;

/// An engine behind one exclusive lock.
///
/// The engine itself is single-threaded by design; callers that want to share
/// one instance across threads take this wrapper and hold the guard for the
/// duration of each top-level call, which is the whole consistency window the
/// nested maps need.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<RecommendationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }

    pub fn lock(&self) -> MutexGuard<'_, RecommendationEngine> {
        self.inner.lock()
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(RecommendationEngine::new())
    }
}
