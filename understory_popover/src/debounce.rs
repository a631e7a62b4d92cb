// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cancel-and-reschedule timer driven by the caller's clock.
//!
//! The debouncer owns no timer. Callers pass a monotonic `now` (any fixed epoch works) to
//! [`Debouncer::schedule`] when an event arrives and to [`Debouncer::poll`] from their frame
//! or timer tick. A burst of events fires once, `delay` after the last one.
//!
//! ```
//! use core::time::Duration;
//! use understory_popover::Debouncer;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debouncer::new(ms(200));
//! d.schedule(ms(0));
//! d.schedule(ms(150)); // pushes the deadline to 350ms
//! assert!(!d.poll(ms(300)));
//! assert!(d.poll(ms(350)));
//! assert!(!d.poll(ms(400)));
//! ```

use core::time::Duration;

/// Fires once after `delay` has passed with no newer [`schedule`](Self::schedule) call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    /// An idle debouncer with the given delay.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// When the pending firing is due, if one is pending.
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Whether a firing is pending.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record an event at `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// Drop any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once when `now` reaches the pending deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
