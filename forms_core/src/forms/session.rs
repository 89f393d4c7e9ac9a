//! Shared handle over one form instance

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use super::{Completion, DebugInfo, FormError, FormKind, FormPayload, FormState, SubmissionStatus};

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub kind: FormKind,
    pub status: SubmissionStatus,
    pub debug_info: Option<DebugInfo>,
}

/// Cloneable handle used by the controller and the display timer.
///
/// Each submission bumps a generation counter; a pending revert only
/// fires if no newer submission started after it was scheduled.
#[derive(Debug, Clone)]
pub struct FormSession {
    id: Uuid,
    state: Arc<Mutex<FormState>>,
    generation: Arc<AtomicU64>,
}

impl FormSession {
    pub fn new(kind: FormKind) -> Self {
        Self::from_state(FormState::new(kind))
    }

    pub fn from_state(state: FormState) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Arc::new(Mutex::new(state)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> FormKind {
        self.state.lock().kind()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.lock().status()
    }

    pub fn debug_info(&self) -> Option<DebugInfo> {
        self.state.lock().debug_info().cloned()
    }

    pub fn payload(&self) -> FormPayload {
        self.state.lock().payload().clone()
    }

    pub fn set(&self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.state.lock().set(field, value)
    }

    pub fn reset(&self) {
        self.state.lock().reset();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock();
        SessionSnapshot {
            id: self.id,
            kind: state.kind(),
            status: state.status(),
            debug_info: state.debug_info().cloned(),
        }
    }

    /// Moves to `submitting` and returns the payload to deliver.
    pub fn begin_submit(&self) -> Result<FormPayload, FormError> {
        let mut state = self.state.lock();
        let payload = state.begin_submit()?;
        self.generation.fetch_add(1, Ordering::SeqCst);
        Ok(payload)
    }

    pub fn complete(&self, completion: Completion) {
        self.state.lock().complete(completion);
    }

    /// Spawns a timer that returns a `success` form to `idle` after `delay`.
    pub fn revert_after(&self, delay: Duration) -> JoinHandle<()> {
        let session = self.clone();
        let scheduled_for = self.generation.load(Ordering::SeqCst);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if session.generation.load(Ordering::SeqCst) != scheduled_for {
                debug!(session = %session.id, "Skipping stale success revert");
                return;
            }

            if session.state.lock().revert_to_idle() {
                debug!(session = %session.id, "Success banner expired, form back to idle");
            }
        })
    }
}
