//! Join counter for the crawl's dynamically spawned tasks
//!
//! Tasks are spawned from inside other tasks, so there is no fixed set of
//! handles to await. Instead every spawn takes a [`TaskGuard`] from the
//! shared [`TaskCounter`] before the task exists, and the guard gives its
//! slot back when the task finishes (or panics). The crawl is over when the
//! count returns to zero.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Counter {
    outstanding: AtomicUsize,
    idle: Notify,
}

/// Counts outstanding tasks and lets a caller wait for all of them
#[derive(Debug, Clone, Default)]
pub struct TaskCounter {
    inner: Arc<Counter>,
}

impl TaskCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one more outstanding task
    ///
    /// Must be called before the task is spawned, by a caller that is itself
    /// still counted, so the count cannot touch zero in between.
    pub fn enter(&self) -> TaskGuard {
        self.inner.outstanding.fetch_add(1, Ordering::SeqCst);
        TaskGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of tasks that have entered and not yet finished
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }

    /// Waits until no task is outstanding
    ///
    /// Returns immediately if nothing was ever entered.
    pub async fn wait(&self) {
        loop {
            // Registered before the check so a wakeup in between is not lost
            let notified = self.inner.idle.notified();
            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Slot held by one running task; dropping it marks the task done
#[derive(Debug)]
pub struct TaskGuard {
    inner: Arc<Counter>,
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if self.inner.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}
