use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

pub const ONE_SEC_MS: u64 = 1000;
pub const ONE_MIN_MS: u64 = 60 * ONE_SEC_MS;

/// Events processed by the session schedule.
///
/// Intent events are dispatched synchronously by the session facade; the
/// remaining kinds are delivered when a timer armed on [SessionClock] fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    GoOnline,
    GoOffline,
    SearchRequested,
    RequestAccepted,
    RequestDeclined,
    RideEnded,
    IdleDelayElapsed,
    SearchWindowElapsed,
    CountdownExpired,
}

/// Timer slots owned by the clock. At most one live timer per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    IdleDelay,
    SearchWindow,
    Countdown,
}

impl TimerKind {
    pub const COUNT: usize = 3;

    fn slot(self) -> usize {
        match self {
            TimerKind::IdleDelay => 0,
            TimerKind::SearchWindow => 1,
            TimerKind::Countdown => 2,
        }
    }

    /// Event delivered when this timer fires.
    pub fn event_kind(self) -> EventKind {
        match self {
            TimerKind::IdleDelay => EventKind::IdleDelayElapsed,
            TimerKind::SearchWindow => EventKind::SearchWindowElapsed,
            TimerKind::Countdown => EventKind::CountdownExpired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: u64,
    pub kind: EventKind,
}

/// The event currently being processed by the schedule.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerEntry {
    deadline: u64,
    kind: TimerKind,
    generation: u64,
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by deadline;
        // equal deadlines pop in arming order.
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.generation.cmp(&self.generation))
    }
}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Virtual-time clock owning every pending session timer.
///
/// Arming a kind that is already pending replaces it: each slot keeps the
/// generation of its live entry, and heap entries with a stale generation
/// are discarded unfired.
#[derive(Debug, Default, Resource)]
pub struct SessionClock {
    now: u64,
    timers: BinaryHeap<TimerEntry>,
    armed: [Option<u64>; TimerKind::COUNT],
    generations: u64,
}

impl SessionClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Arm `kind` to fire after `delay_ms`, cancelling any prior instance.
    pub fn arm(&mut self, kind: TimerKind, delay_ms: u64) {
        self.generations += 1;
        self.armed[kind.slot()] = Some(self.generations);
        self.timers.push(TimerEntry {
            deadline: self.now + delay_ms,
            kind,
            generation: self.generations,
        });
    }

    /// Cancel a pending timer of `kind`. No-op if the kind is not armed.
    pub fn disarm(&mut self, kind: TimerKind) {
        self.armed[kind.slot()] = None;
        self.purge_stale();
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
        self.armed = [None; TimerKind::COUNT];
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.armed[kind.slot()].is_some()
    }

    /// Number of live timers.
    pub fn pending_timers(&self) -> usize {
        self.armed.iter().filter(|g| g.is_some()).count()
    }

    fn is_live(&self, entry: &TimerEntry) -> bool {
        self.armed[entry.kind.slot()] == Some(entry.generation)
    }

    /// Drop cancelled entries from the top of the heap.
    fn purge_stale(&mut self) {
        while let Some(entry) = self.timers.peek() {
            if self.armed[entry.kind.slot()] == Some(entry.generation) {
                break;
            }
            self.timers.pop();
        }
    }

    /// Deadline of the next live timer, if any.
    pub fn next_deadline(&mut self) -> Option<u64> {
        self.purge_stale();
        self.timers.peek().map(|entry| entry.deadline)
    }

    /// Pop the next live timer due at or before `limit_ms`, advancing `now`
    /// to its deadline. Returns `None` when nothing is due in the window.
    pub fn pop_due(&mut self, limit_ms: u64) -> Option<Event> {
        self.purge_stale();
        if self.timers.peek()?.deadline > limit_ms {
            return None;
        }
        let entry = self.timers.pop()?;
        debug_assert!(
            entry.deadline >= self.now,
            "timer deadline must be >= current time"
        );
        debug_assert!(self.is_live(&entry), "purge must leave a live entry on top");
        self.armed[entry.kind.slot()] = None;
        self.now = entry.deadline;
        Some(Event {
            timestamp: entry.deadline,
            kind: entry.kind.event_kind(),
        })
    }

    /// Move `now` forward to `target_ms`; never moves backwards.
    pub fn advance_to(&mut self, target_ms: u64) {
        self.now = self.now.max(target_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_pop_in_deadline_order() {
        let mut clock = SessionClock::default();
        clock.arm(TimerKind::Countdown, 20);
        clock.arm(TimerKind::IdleDelay, 5);
        clock.arm(TimerKind::SearchWindow, 10);

        let first = clock.pop_due(u64::MAX).expect("first timer");
        assert_eq!(first.timestamp, 5);
        assert_eq!(first.kind, EventKind::IdleDelayElapsed);
        assert_eq!(clock.now(), 5);

        let second = clock.pop_due(u64::MAX).expect("second timer");
        assert_eq!(second.timestamp, 10);
        assert_eq!(second.kind, EventKind::SearchWindowElapsed);

        let third = clock.pop_due(u64::MAX).expect("third timer");
        assert_eq!(third.timestamp, 20);
        assert_eq!(third.kind, EventKind::CountdownExpired);

        assert!(clock.pop_due(u64::MAX).is_none());
        assert_eq!(clock.pending_timers(), 0);
    }

    #[test]
    fn rearming_replaces_the_pending_instance() {
        let mut clock = SessionClock::default();
        clock.arm(TimerKind::IdleDelay, 100);
        clock.arm(TimerKind::IdleDelay, 5);
        assert_eq!(clock.pending_timers(), 1);

        let event = clock.pop_due(u64::MAX).expect("rearmed timer");
        assert_eq!(event.timestamp, 5);
        // The original instance at t=100 was cancelled by the re-arm.
        assert!(clock.pop_due(u64::MAX).is_none());
    }

    #[test]
    fn disarmed_timers_never_fire() {
        let mut clock = SessionClock::default();
        clock.arm(TimerKind::SearchWindow, 10);
        clock.disarm(TimerKind::SearchWindow);

        assert!(!clock.is_armed(TimerKind::SearchWindow));
        assert_eq!(clock.pending_timers(), 0);
        assert!(clock.pop_due(u64::MAX).is_none());
        // Time does not advance for a cancelled timer.
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn cancel_all_empties_the_queue() {
        let mut clock = SessionClock::default();
        clock.arm(TimerKind::IdleDelay, 5);
        clock.arm(TimerKind::SearchWindow, 10);
        clock.arm(TimerKind::Countdown, 20);
        assert_eq!(clock.pending_timers(), 3);

        clock.cancel_all();
        assert_eq!(clock.pending_timers(), 0);
        assert!(clock.next_deadline().is_none());
    }

    #[test]
    fn pop_due_respects_the_limit() {
        let mut clock = SessionClock::default();
        clock.arm(TimerKind::IdleDelay, 50);

        assert!(clock.pop_due(49).is_none());
        assert_eq!(clock.now(), 0);

        let event = clock.pop_due(50).expect("due timer");
        assert_eq!(event.timestamp, 50);
        assert_eq!(clock.now(), 50);
    }

    #[test]
    fn advance_to_never_moves_backwards() {
        let mut clock = SessionClock::default();
        clock.advance_to(100);
        assert_eq!(clock.now(), 100);
        clock.advance_to(40);
        assert_eq!(clock.now(), 100);
    }
}
