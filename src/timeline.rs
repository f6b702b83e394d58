/// ----- TIMELINE MODULE -----
/// Simulated clock and the queue of pending car wake-ups. Wake-ups due at
/// the same instant fire in the order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use shared_resources::car_id::CarId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wake {
    pub at: Duration,
    pub car: CarId,
    seq: u64,
}

impl Ord for Wake {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Wake {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    queue: BinaryHeap<Reverse<Wake>>,
    next_seq: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, car: CarId, delay: Duration) -> Duration {
        let at = self.now + delay;
        self.queue.push(Reverse(Wake { at, car, seq: self.next_seq }));
        self.next_seq += 1;
        at
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(wake)| wake.at)
    }

    /// Pops the earliest wake-up and moves the clock to it.
    pub fn pop_next(&mut self) -> Option<Wake> {
        let Reverse(wake) = self.queue.pop()?;
        self.now = self.now.max(wake.at);
        Some(wake)
    }

    /// Like `pop_next`, but leaves anything due after `until` in the queue.
    pub fn pop_due(&mut self, until: Duration) -> Option<Wake> {
        match self.next_due() {
            Some(at) if at <= until => self.pop_next(),
            _ => None,
        }
    }

    /// The clock never runs backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
