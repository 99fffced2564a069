//! Application state shared across HTTP handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::router::RequestRouter;

pub struct AppState {
    pub router: Arc<RequestRouter>,
    started_at: DateTime<Utc>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(router: Arc<RequestRouter>) -> Self {
        Self {
            router,
            started_at: Utc::now(),
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}
