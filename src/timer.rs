//! Timer capability consumed by playback, plus a deterministic clock.
//!
//! The core never sleeps or spawns threads. It asks a [`Scheduler`] to arm
//! timers and the host hands fired timers back by id.

use std::time::Duration;

/// Opaque handle for an armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Single-threaded timer primitive provided by the host.
///
/// When a timer fires, the host delivers its id back to the session
/// (`EditSession::on_timer`). Ids that were cancelled must not be delivered,
/// but the core tolerates it when they are.
pub trait Scheduler {
    /// Arm a one-shot timer.
    fn schedule_after(&mut self, delay: Duration) -> TimerId;

    /// Arm a timer that fires every `interval` until cancelled.
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId;

    /// Disarm a timer. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Clone, Debug)]
struct Armed {
    id: TimerId,
    deadline: u128,
    interval: Option<u128>,
}

/// A manually advanced clock with nanosecond resolution.
///
/// Useful for headless hosts and for tests: nothing fires until
/// [`VirtualClock::next_due`] is called.
///
/// ```rust
/// use std::time::Duration;
/// use minipixel_core::{Scheduler, VirtualClock};
///
/// let mut clock = VirtualClock::new();
/// let tick = clock.schedule_repeating(Duration::from_millis(10));
///
/// assert_eq!(clock.next_due(Duration::from_millis(25)), Some(tick));
/// assert_eq!(clock.next_due(Duration::from_millis(25)), Some(tick));
/// assert_eq!(clock.next_due(Duration::from_millis(25)), None);
/// assert_eq!(clock.now(), Duration::from_millis(25));
/// ```
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: u128,
    next_id: u64,
    armed: Vec<Armed>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        nanos_to_duration(self.now)
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.armed.len()
    }

    /// Check whether a timer is still armed.
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.armed.iter().any(|a| a.id == id)
    }

    /// Fire the earliest timer due at or before `until`.
    ///
    /// Advances the clock to that timer's deadline and returns its id.
    /// Repeating timers are re-armed one interval later. When nothing is due
    /// the clock moves to `until` and None is returned.
    pub fn next_due(&mut self, until: Duration) -> Option<TimerId> {
        let until = until.as_nanos();
        let slot = self
            .armed
            .iter()
            .enumerate()
            .filter(|(_, a)| a.deadline <= until)
            .min_by_key(|(_, a)| (a.deadline, a.id))
            .map(|(i, _)| i);

        let Some(slot) = slot else {
            self.now = self.now.max(until);
            return None;
        };

        let Armed { id, deadline, interval } = self.armed[slot].clone();
        self.now = self.now.max(deadline);
        match interval {
            Some(interval) => self.armed[slot].deadline += interval,
            None => {
                self.armed.swap_remove(slot);
            }
        }
        Some(id)
    }

    fn arm(&mut self, delay: Duration, repeating: bool) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        // A zero interval would fire forever without advancing time.
        let nanos = delay.as_nanos().max(1);
        self.armed.push(Armed {
            id,
            deadline: self.now + nanos,
            interval: repeating.then_some(nanos),
        });
        id
    }
}

impl Scheduler for VirtualClock {
    fn schedule_after(&mut self, delay: Duration) -> TimerId {
        self.arm(delay, false)
    }

    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        self.arm(interval, true)
    }

    fn cancel(&mut self, id: TimerId) {
        self.armed.retain(|a| a.id != id);
    }
}

fn nanos_to_duration(nanos: u128) -> Duration {
    let secs = (nanos / 1_000_000_000) as u64;
    let sub = (nanos % 1_000_000_000) as u32;
    Duration::new(secs, sub)
}
