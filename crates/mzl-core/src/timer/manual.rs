//! Deterministic virtual-time scheduler.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, TimerFire};

/// Handle to a timer queued on a [`VirtualClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualTimer(u64);

/// A timer that came due, tagged with the scheduler that queued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledFire {
    pub scheduler: usize,
    pub at: Duration,
    pub fire: TimerFire,
}

#[derive(Debug)]
struct Entry {
    id: u64,
    scheduler: usize,
    due: Duration,
    fire: TimerFire,
}

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    next_scheduler: usize,
    entries: Vec<Entry>,
}

/// Virtual time shared by any number of [`ManualScheduler`]s.
///
/// Time only moves in [`VirtualClock::advance`], which delivers due timers
/// in due order (ties in scheduling order).
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler with its own identity on this clock.
    pub fn scheduler(&self) -> ManualScheduler {
        let mut state = self.state.borrow_mut();
        let id = state.next_scheduler;
        state.next_scheduler += 1;
        ManualScheduler { clock: self.clone(), id }
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Timers queued and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Pending timers queued by one scheduler.
    pub fn pending_for(&self, scheduler: &ManualScheduler) -> usize {
        self.state.borrow().entries.iter().filter(|e| e.scheduler == scheduler.id).count()
    }

    /// Move time forward by `by`, handing every timer that comes due to
    /// `dispatch`. Timers scheduled from inside `dispatch` fire in the same
    /// call if they come due before the target time.
    pub fn advance(&self, by: Duration, mut dispatch: impl FnMut(ScheduledFire)) {
        let target = self.now() + by;
        while let Some(due) = self.pop_due(target) {
            dispatch(due);
        }
        self.state.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledFire> {
        let mut state = self.state.borrow_mut();
        let index = state
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        let entry = state.entries.remove(index);
        state.now = entry.due;
        Some(ScheduledFire { scheduler: entry.scheduler, at: entry.due, fire: entry.fire })
    }
}

/// [`Scheduler`] queuing onto a [`VirtualClock`].
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    clock: VirtualClock,
    id: usize,
}

impl ManualScheduler {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn clock(&self) -> &VirtualClock {
        &self.clock
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, fire: TimerFire) -> ManualTimer {
        let mut state = self.clock.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.entries.push(Entry { id, scheduler: self.id, due, fire });
        ManualTimer(id)
    }

    fn cancel(&self, handle: ManualTimer) {
        self.clock.state.borrow_mut().entries.retain(|e| e.id != handle.0);
    }
}
