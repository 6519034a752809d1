//! Debounced propagation of a rapidly changing value.
//!
//! A [`Debouncer`] holds a "settled" value that only catches up with the
//! latest input once no new input arrived for the configured delay.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Quiet period used for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Scheduled propagation of one input value.
///
/// Dropping the guard aborts the timer task, so replacing or dropping it
/// always cancels the pending propagation.
struct PendingPropagation(JoinHandle<()>);

impl Drop for PendingPropagation {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Debouncer for a value of type `T`
///
/// At most one propagation is pending at any time. Each [`Debouncer::set`]
/// cancels the previous one; the last value written before a quiet period
/// is the one that settles. Must be used from within a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    settled: Arc<watch::Sender<T>>,
    pending: Option<PendingPropagation>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (settled, _) = watch::channel(initial);
        Self {
            delay,
            settled: Arc::new(settled),
            pending: None,
        }
    }

    /// Feeds a new input value, rescheduling propagation.
    pub fn set(&mut self, value: T) {
        self.pending.take();

        let settled = Arc::clone(&self.settled);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::trace!(delay_ms = delay.as_millis() as u64, "debounced value settled");
            settled.send_replace(value);
        });
        self.pending = Some(PendingPropagation(handle));
    }

    /// Cancels the pending propagation, if any, keeping the settled value.
    pub fn cancel(&mut self) {
        self.pending.take();
    }

    /// Returns the current settled value
    pub fn settled(&self) -> T {
        self.settled.borrow().clone()
    }

    /// Receiver notified every time a value settles
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.settled.subscribe()
    }

    /// Whether a propagation is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.0.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
