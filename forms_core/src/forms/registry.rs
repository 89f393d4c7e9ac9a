use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::FormSession;

/// Recent form sessions, so API clients can poll a submission's status.
/// The least recently touched session is dropped once capacity is reached.
#[derive(Debug, Clone)]
pub struct SubmissionRegistry {
    sessions: Arc<Mutex<LruCache<Uuid, FormSession>>>,
}

impl SubmissionRegistry {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn insert(&self, session: FormSession) {
        if let Some((evicted, _)) = self.sessions.lock().push(session.id(), session) {
            debug!(session = %evicted, "Evicted form session from registry");
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<FormSession> {
        self.sessions.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.sessions.lock().cap().get()
    }
}

impl Default for SubmissionRegistry {
    fn default() -> Self {
        Self::new(1024)
    }
}
