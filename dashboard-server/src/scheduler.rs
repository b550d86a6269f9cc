//! Periodic task registration.
//!
//! The dashboard is driven by independent periodic triggers: two one-second
//! recompute ticks and a slow weather refresh. This module wraps the timer
//! mechanism so the rest of the crate only assumes that callbacks fire at
//! approximately the stated periods.
//!
//! Invocations of the same task never overlap: each run is awaited before
//! the next timer tick is taken, so a refresh that outlives its own period
//! delays the following run rather than racing it. Missed ticks are then
//! delivered back to back until the task catches up.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Owns the spawned periodic tasks.
///
/// Tasks run until [`shutdown`](Scheduler::shutdown) aborts them or the
/// runtime stops. Individual task failures never propagate; each task is
/// expected to handle its own errors and keep running indefinitely.
#[derive(Default)]
pub struct Scheduler {
    handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task that runs immediately and then every `period`.
    pub fn every<F, Fut>(&mut self, period: Duration, mut task: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        self.handles.push(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                task().await;
            }
        }));
    }

    /// Register a stateful task: each run receives the state returned by
    /// the previous run.
    ///
    /// This keeps per-task state out of shared mutable storage; the state
    /// value is threaded explicitly through each invocation.
    pub fn every_with<S, F, Fut>(&mut self, period: Duration, state: S, mut task: F)
    where
        S: Send + 'static,
        F: FnMut(S) -> Fut + Send + 'static,
        Fut: Future<Output = S> + Send,
    {
        self.handles.push(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            let mut state = state;
            loop {
                interval.tick().await;
                state = task(state).await;
            }
        }));
    }

    /// Register a task that first waits `delay`, then runs every `period`.
    pub fn every_after<F, Fut>(&mut self, delay: Duration, period: Duration, mut task: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        self.handles.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                task().await;
            }
        }));
    }

    /// Abort all registered tasks.
    pub fn shutdown(self) {
        for handle in self.handles {
            handle.abort();
        }
    }
}
