// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred callbacks on a virtual clock.
//!
//! [`TimerQueue`] hands out [`TimerId`]s for timeouts measured in
//! milliseconds. The host owns the clock: it calls [`TimerQueue::advance_to`]
//! (or [`TimerQueue::advance_by`]) with the current time and receives the ids
//! of the timeouts that expired, in firing order. Nothing runs on its own,
//! which keeps behavior deterministic in tests.
//!
//! ```
//! use understory_element_tree::timers::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let a = timers.set_timeout(100);
//! let b = timers.set_timeout(50);
//! assert!(timers.clear_timeout(a));
//!
//! assert!(timers.advance_by(49).is_empty());
//! assert_eq!(timers.advance_by(1), vec![b]);
//! assert_eq!(timers.pending(), 0);
//! ```

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

/// Handle for a scheduled timeout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Pending timeouts keyed by deadline, driven by a host-supplied clock.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    /// Current time in milliseconds.
    now: u64,
    next_id: u64,
    /// `(deadline, id)` orders by deadline, then by scheduling order.
    pending: BTreeSet<(u64, TimerId)>,
    deadlines: BTreeMap<TimerId, u64>,
}

impl TimerQueue {
    /// Create an empty queue with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule a timeout `delay_ms` milliseconds from now.
    pub fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = self.now.saturating_add(delay_ms);
        self.pending.insert((deadline, id));
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a timeout.
    ///
    /// Returns `false` if the timeout already fired or was cancelled.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => {
                self.pending.remove(&(deadline, id));
                true
            }
            None => false,
        }
    }

    /// Whether `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Number of timeouts waiting to fire.
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Move the clock to `now` and return the expired timeouts in firing order.
    ///
    /// The clock never moves backwards; an earlier `now` only drains timeouts
    /// already due.
    pub fn advance_to(&mut self, now: u64) -> Vec<TimerId> {
        self.now = self.now.max(now);
        let mut fired = Vec::new();
        while let Some(&(deadline, id)) = self.pending.first() {
            if deadline > self.now {
                break;
            }
            self.pending.remove(&(deadline, id));
            self.deadlines.remove(&id);
            fired.push(id);
        }
        fired
    }

    /// Move the clock forward by `delta_ms` and return the expired timeouts.
    pub fn advance_by(&mut self, delta_ms: u64) -> Vec<TimerId> {
        self.advance_to(self.now.saturating_add(delta_ms))
    }
}
