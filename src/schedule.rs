//! Deferred callbacks for a single-threaded event loop.
//!
//! The host loop owns the clock: it asks [`Scheduler::next_due`] how long it
//! may sleep and drains [`Scheduler::pop_due`] when it wakes. Nothing here
//! spawns threads or reads the clock itself.

use std::time::{Duration, Instant};

/// Handle returned by [`Scheduler::after`]; pass it to [`Scheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(u64);

#[derive(Debug, Clone)]
struct Job<T> {
    id: JobId,
    due: Instant,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    next_id: u64,
    // sorted by due time, ties in insertion order
    jobs: Vec<Job<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self { next_id: 0, jobs: Vec::new() }
    }

    /// Run `task` once `delay` has passed since `now`.
    pub fn after(&mut self, now: Instant, delay: Duration, task: T) -> JobId {
        self.at(now + delay, task)
    }

    pub fn at(&mut self, due: Instant, task: T) -> JobId {
        let id = JobId(self.next_id);
        self.next_id += 1;
        let pos = self.jobs.partition_point(|j| j.due <= due);
        self.jobs.insert(pos, Job { id, due, task });
        id
    }

    /// Drop a pending job. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, id: JobId) -> bool {
        match self.jobs.iter().position(|j| j.id == id) {
            Some(pos) => {
                self.jobs.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove and return the earliest job due at or before `now`, with its due time.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        if self.jobs.first().is_some_and(|j| j.due <= now) {
            let job = self.jobs.remove(0);
            Some((job.due, job.task))
        } else {
            None
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.jobs.first().map(|j| j.due)
    }

    pub fn is_pending(&self, id: JobId) -> bool {
        self.jobs.iter().any(|j| j.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
