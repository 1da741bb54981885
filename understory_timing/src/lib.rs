// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI widgets often need to delay work until input has gone quiet: commit a
//! value after an animation settles, or re-measure layout after a burst of
//! resize notifications. This crate models those delays as **keyed** scheduled
//! tasks rather than opaque timer handles:
//!
//! - Scheduling a key that is already pending reschedules it (trailing-edge
//!   debounce). Only the most recent request in the window fires.
//! - Cancelling is by key, so "a new tap cancels the pending tap commit" is a
//!   single call.
//! - Time is supplied by the host as plain milliseconds. The queue never reads
//!   a clock and never spawns anything; the host asks for
//!   [`TimerQueue::next_deadline`] and later drains due keys with
//!   [`TimerQueue::pop_due`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Task {
//!     Commit,
//!     Relayout,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Task::Commit, 0, 200);
//! timers.schedule(Task::Relayout, 10, 1000);
//!
//! // A second request inside the window pushes the deadline out.
//! assert!(timers.schedule(Task::Commit, 100, 200));
//! assert_eq!(timers.next_deadline(), Some(300));
//!
//! assert_eq!(timers.pop_due(250), None);
//! assert_eq!(timers.pop_due(300), Some(Task::Commit));
//! assert!(timers.cancel(&Task::Relayout));
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use smallvec::SmallVec;

/// Host-supplied time in milliseconds.
pub type Millis = u64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Scheduled<K> {
    key: K,
    deadline: Millis,
    /// Monotonic insertion order, used to break deadline ties.
    seq: u64,
}

/// A small queue of keyed, cancellable, debounced timers.
///
/// At most one timer per key is pending at any time. Widgets typically only
/// have a handful of keys, so the queue is a short inline vector scanned
/// linearly.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    pending: SmallVec<[Scheduled<K>; 4]>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            pending: SmallVec::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire `delay` milliseconds after `now`.
    ///
    /// If `key` is already pending, its previous deadline is discarded and
    /// replaced. Returns `true` when an earlier request was superseded.
    pub fn schedule(&mut self, key: K, now: Millis, delay: Millis) -> bool {
        let deadline = now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(entry) = self.pending.iter_mut().find(|e| e.key == key) {
            entry.deadline = deadline;
            entry.seq = seq;
            true
        } else {
            self.pending.push(Scheduled { key, deadline, seq });
            false
        }
    }

    /// Cancels a pending `key`. Returns `true` if it was pending.
    pub fn cancel(&mut self, key: &K) -> bool {
        if let Some(index) = self.pending.iter().position(|e| e.key == *key) {
            self.pending.remove(index);
            true
        } else {
            false
        }
    }

    /// Cancels every pending timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Returns `true` if `key` is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.iter().any(|e| e.key == *key)
    }

    /// Returns the deadline of `key`, if pending.
    #[must_use]
    pub fn deadline_of(&self, key: &K) -> Option<Millis> {
        self.pending
            .iter()
            .find(|e| e.key == *key)
            .map(|e| e.deadline)
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.iter().map(|e| e.deadline).min()
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    ///
    /// Timers sharing a deadline fire in the order they were (re)scheduled.
    /// Call repeatedly until it returns `None` to drain everything due.
    pub fn pop_due(&mut self, now: Millis) -> Option<K> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index).key)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
