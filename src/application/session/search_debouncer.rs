use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Quiet period before a search-as-you-type request is sent
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// SearchDebouncer - runs only the latest of a burst of calls
///
/// Each call takes a new generation and waits for the quiet period. The task
/// runs only if no newer call arrived meanwhile, and its output is dropped if
/// a newer call arrived while it was running. Clones share the generation.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the quiet period, then runs `task` unless superseded
    ///
    /// Returns `None` when a newer call superseded this one.
    pub async fn run<F, Fut, T>(&self, task: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;

        if !self.is_current(ticket) {
            tracing::debug!(ticket, "debounced call superseded before running");
            return None;
        }

        let output = task().await;

        if !self.is_current(ticket) {
            tracing::debug!(ticket, "debounced call superseded while running");
            return None;
        }
        Some(output)
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
