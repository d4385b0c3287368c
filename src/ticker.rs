//! Periodic tick source for the countdown.
//!
//! A [`TickSubscription`] owns a background tokio task and the receiving end
//! of its channel. Dropping the subscription aborts the task and discards any
//! ticks still queued, so nothing ticks the timer after it is gone.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, trace};

/// A live 1-tick-per-period subscription.
pub struct TickSubscription {
    /// Background interval task
    task: JoinHandle<()>,
    /// Ticks sent by the task but not yet drained
    ticks: UnboundedReceiver<()>,
    /// Number of times the task has fired
    fired: Arc<AtomicU64>,
}

impl TickSubscription {
    /// Spawns the tick task. The first tick arrives one full period later.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration) -> Self {
        let (tx, ticks) = mpsc::unbounded_channel();
        let fired = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&fired);

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                trace!("tick #{}", n);
                if tx.send(()).is_err() {
                    // Receiver dropped
                    break;
                }
            }
        });

        debug!("Tick subscription acquired (period {:?})", period);
        Self { task, ticks, fired }
    }

    /// Returns how many ticks arrived since the last call, without waiting.
    pub fn drain(&mut self) -> u64 {
        let mut count = 0;
        while self.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    /// Shared count of firings of the background task.
    #[cfg(test)]
    pub fn fired(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.fired)
    }
}

impl Drop for TickSubscription {
    fn drop(&mut self) {
        self.task.abort();
        self.ticks.close();
        debug!(
            "Tick subscription released after {} ticks",
            self.fired.load(Ordering::SeqCst)
        );
    }
}
