use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

/// Reference-counted tracker for in-flight operations.
///
/// Wrap a request future in [`LoadingTracker::show_until`] and the loading
/// state stays on for its duration. The count nests, so overlapping
/// operations keep the indicator on until the last one finishes, and the
/// decrement happens on drop, so an abandoned future cannot leave the
/// indicator stuck.
#[derive(Clone)]
pub struct LoadingTracker {
    count_tx: Arc<watch::Sender<u32>>,
}

impl Default for LoadingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingTracker {
    pub fn new() -> Self {
        let (count_tx, _) = watch::channel(0);
        Self {
            count_tx: Arc::new(count_tx),
        }
    }

    /// Run `fut` with the loading state held on until it completes.
    pub async fn show_until<F: Future>(&self, fut: F) -> F::Output {
        self.count_tx.send_modify(|count| *count += 1);
        let _guard = CountGuard {
            count_tx: &self.count_tx,
        };
        fut.await
    }

    /// Whether any tracked operation is currently in flight.
    pub fn is_loading(&self) -> bool {
        *self.count_tx.borrow() > 0
    }

    /// Subscribe to the in-flight operation count.
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.count_tx.subscribe()
    }
}

struct CountGuard<'a> {
    count_tx: &'a watch::Sender<u32>,
}

impl Drop for CountGuard<'_> {
    fn drop(&mut self) {
        self.count_tx
            .send_modify(|count| *count = count.saturating_sub(1));
    }
}
