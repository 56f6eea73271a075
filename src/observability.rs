use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Backend API usage counters
///
/// Metrics fetch failures never reach dashboard output; these counters and the
/// log stream are the only record of them.
#[derive(Debug, Default)]
pub struct ApiCallStats {
    pub total_requests: AtomicU64,
    pub errors: AtomicU64,
    pub stale_discarded: AtomicU64,
}

impl ApiCallStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_discarded(&self) {
        self.stale_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ApiCallSnapshot {
        ApiCallSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            stale_discarded: self.stale_discarded.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.snapshot();
        info!(
            requests = stats.total_requests,
            errors = stats.errors,
            stale_discarded = stats.stale_discarded,
            "Backend API usage"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiCallSnapshot {
    pub total_requests: u64,
    pub errors: u64,
    pub stale_discarded: u64,
}

static API_STATS: std::sync::LazyLock<ApiCallStats> = std::sync::LazyLock::new(ApiCallStats::new);

pub fn api_stats() -> &'static ApiCallStats {
    &API_STATS
}

/// Logs how long an operation took when dropped
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        debug!(
            operation = %self.operation,
            duration_ms = self.start.elapsed().as_millis() as u64,
            "Operation completed"
        );
    }
}
