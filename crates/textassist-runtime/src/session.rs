//! Model session lifecycle.
//!
//! [`SessionManager`] owns at most one live [`ModelSession`] and guarantees
//! that at most one initialisation is in flight. Concurrent callers share
//! the in-flight attempt and observe the same outcome.

use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use textassist_protocols::{
    Availability, LanguageModel, ModelSession, SessionError, SessionOptions,
};

use crate::deadline::{Deadline, DeadlineError};

type InitOutcome = Result<Arc<dyn ModelSession>, SessionError>;
type InitFuture = Shared<BoxFuture<'static, InitOutcome>>;

/// Externally visible session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Idle,
    Initializing,
    Ready,
}

struct InFlight {
    attempt: u64,
    future: InitFuture,
}

#[derive(Default)]
struct SessionState {
    session: Option<Arc<dyn ModelSession>>,
    in_flight: Option<InFlight>,
    attempts: u64,
}

pub struct SessionManager {
    backend: Arc<dyn LanguageModel>,
    options: SessionOptions,
    init_deadline: Deadline,
    state: Arc<Mutex<SessionState>>,
}

impl SessionManager {
    pub fn new(
        backend: Arc<dyn LanguageModel>,
        options: SessionOptions,
        init_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            options,
            init_deadline: Deadline::new(init_timeout),
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    pub fn backend_id(&self) -> &str {
        self.backend.id()
    }

    pub fn status(&self) -> SessionStatus {
        let state = self.state.lock();
        if state.session.is_some() {
            SessionStatus::Ready
        } else if state.in_flight.is_some() {
            SessionStatus::Initializing
        } else {
            SessionStatus::Idle
        }
    }

    /// Number of initialisation attempts started so far.
    pub fn attempts(&self) -> u64 {
        self.state.lock().attempts
    }

    /// Make sure a session exists, returning whether one is ready.
    pub async fn ensure_ready(&self) -> bool {
        self.acquire().await.is_ok()
    }

    /// Return the live session, creating it if needed.
    ///
    /// Fails fast with [`SessionError::CapabilityAbsent`] when the backend is
    /// not present; no initialisation is recorded in that case.
    pub async fn acquire(&self) -> Result<Arc<dyn ModelSession>, SessionError> {
        let future = {
            let mut state = self.state.lock();
            if let Some(session) = &state.session {
                return Ok(Arc::clone(session));
            }

            match &state.in_flight {
                Some(in_flight) => {
                    debug!(attempt = in_flight.attempt, "Joining in-flight session initialization");
                    in_flight.future.clone()
                }
                None => {
                    if self.backend.availability() == Availability::Absent {
                        debug!(backend = self.backend.id(), "Language model capability absent");
                        return Err(SessionError::CapabilityAbsent);
                    }

                    state.attempts += 1;
                    let attempt = state.attempts;
                    let future = self.start_initialization(attempt);
                    state.in_flight = Some(InFlight {
                        attempt,
                        future: future.clone(),
                    });
                    future
                }
            }
        };

        future.await
    }

    /// Start creating a session in the background.
    ///
    /// The returned handle resolves to whether the warm-up produced a session.
    pub fn spawn_warm_up(self: &Arc<Self>) -> JoinHandle<bool> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            let ready = manager.ensure_ready().await;
            if ready {
                info!(backend = manager.backend_id(), "Model session warmed up");
            } else {
                debug!(backend = manager.backend_id(), "Model session warm-up did not complete");
            }
            ready
        })
    }

    /// Drop the current session and forget any in-flight attempt.
    ///
    /// An attempt that completes after a reset does not install its session.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.session = None;
        state.in_flight = None;
        info!(backend = self.backend.id(), "Model session reset");
    }

    fn start_initialization(&self, attempt: u64) -> InitFuture {
        let backend = Arc::clone(&self.backend);
        let options = self.options.clone();
        let deadline = self.init_deadline;
        let task_state = Arc::clone(&self.state);

        info!(attempt, backend = backend.id(), "Creating model session");
        let task = tokio::spawn(async move {
            let outcome = match deadline.run(backend.create_session(options)).await {
                Ok(Ok(session)) => Ok(session),
                Ok(Err(e)) => Err(SessionError::from(e)),
                Err(DeadlineError::Elapsed(limit)) => {
                    Err(SessionError::Timeout(limit.as_millis() as u64))
                }
                Err(DeadlineError::Aborted(reason)) => {
                    Err(SessionError::InitializationFailed(reason))
                }
            };
            settle(&task_state, attempt, &outcome);
            outcome
        });

        let state = Arc::clone(&self.state);
        async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    let outcome = Err(SessionError::InitializationFailed(format!(
                        "initialization task failed: {join_error}"
                    )));
                    settle(&state, attempt, &outcome);
                    outcome
                }
            }
        }
        .boxed()
        .shared()
    }
}

/// Record the outcome of `attempt` if it is still the current one.
fn settle(state: &Mutex<SessionState>, attempt: u64, outcome: &InitOutcome) {
    let mut state = state.lock();
    let current = state
        .in_flight
        .as_ref()
        .is_some_and(|in_flight| in_flight.attempt == attempt);
    if !current {
        debug!(attempt, "Discarding outcome of superseded session initialization");
        return;
    }

    state.in_flight = None;
    match outcome {
        Ok(session) => {
            state.session = Some(Arc::clone(session));
            info!(attempt, "Model session ready");
        }
        Err(e) => {
            warn!(attempt, error = %e, "Model session initialization failed");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
