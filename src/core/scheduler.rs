//! Repeating tick tasks with scoped cancellation.
//!
//! A [`TickTask`] owns the spawned timer loop. Dropping it aborts the loop, so
//! a unit that holds its task in a field releases the timer on every exit
//! path, including unwinding.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Finished,
}

#[derive(Debug)]
pub struct TickTask {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl TickTask {
    /// Calls `on_tick` every `period`, first after one full period, until it
    /// returns [`TickFlow::Finished`] or the task is cancelled.
    ///
    /// Returns `None` when called outside a tokio runtime; the unit then stays
    /// idle instead of panicking. `period` must be non-zero.
    pub fn spawn<F>(label: &'static str, period: Duration, mut on_tick: F) -> Option<Self>
    where
        F: FnMut() -> TickFlow + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!(task = label, "no tokio runtime, timer not started: {}", e);
                return None;
            }
        };
        let handle = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                ticker.tick().await;
                if on_tick() == TickFlow::Finished {
                    tracing::debug!(task = label, "tick task finished");
                    break;
                }
            }
        });
        tracing::debug!(task = label, ?period, "tick task started");
        Some(Self { label, handle })
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn cancel(&self) {
        if self.is_active() {
            self.handle.abort();
            tracing::debug!(task = self.label, "tick task cancelled");
        }
    }
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
