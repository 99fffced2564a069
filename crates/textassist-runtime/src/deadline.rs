//! Deadline-aware call wrapper.
//!
//! Every suspension point that talks to the model goes through a
//! [`Deadline`]. Results are returned by value, so a call that loses the
//! race has nothing to write into and cannot corrupt shared state.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeadlineError {
    #[error("deadline of {}ms exceeded", .0.as_millis())]
    Elapsed(Duration),

    /// A detached call's task panicked or was cancelled by the runtime.
    #[error("detached call aborted: {0}")]
    Aborted(String),
}

/// A fixed time budget for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    limit: Duration,
}

impl Deadline {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Run `future`, dropping it if the deadline passes first.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, DeadlineError>
    where
        F: Future,
    {
        tokio::time::timeout(self.limit, future)
            .await
            .map_err(|_| DeadlineError::Elapsed(self.limit))
    }

    /// Run `future` on its own task.
    ///
    /// If the deadline passes first the task keeps running to completion and
    /// its output is dropped unobserved.
    pub async fn run_detached<F>(&self, future: F) -> Result<F::Output, DeadlineError>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let handle = tokio::spawn(future);
        match tokio::time::timeout(self.limit, handle).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(join_error)) => Err(DeadlineError::Aborted(join_error.to_string())),
            Err(_) => Err(DeadlineError::Elapsed(self.limit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_run_completes_within_limit() {
        let deadline = Deadline::new(Duration::from_millis(100));
        let result = deadline
            .run(async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                42
            })
            .await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_elapsed() {
        let deadline = Deadline::new(Duration::from_millis(100));
        let result = deadline
            .run(tokio::time::sleep(Duration::from_secs(5)))
            .await;
        assert_eq!(result, Err(DeadlineError::Elapsed(Duration::from_millis(100))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_detached_loser_keeps_running() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let deadline = Deadline::new(Duration::from_millis(50));
        let result = deadline
            .run_detached(async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                flag.store(true, Ordering::SeqCst);
                "late"
            })
            .await;

        assert!(matches!(result, Err(DeadlineError::Elapsed(_))));
        assert!(!finished.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_detached_panic_is_aborted() {
        let deadline = Deadline::new(Duration::from_secs(1));
        let result = deadline
            .run_detached(async {
                panic!("backend exploded");
            })
            .await;
        assert!(matches!(result, Err(DeadlineError::Aborted(_))));
    }

    #[test]
    fn test_elapsed_display() {
        let err = DeadlineError::Elapsed(Duration::from_millis(8000));
        assert!(err.to_string().contains("8000ms"));
    }
}
