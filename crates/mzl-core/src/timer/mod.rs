//! Scheduler seam for the open/close debounce delays.
//!
//! A scheduler never calls the controller directly: it hands the
//! [`TimerFire`] it was given back to a dispatch function when the delay
//! elapses. Each controller keeps the returned handle and cancels it
//! explicitly when a later pointer event invalidates the timer.

mod manual;
#[cfg(feature = "tokio")]
mod tokio_local;

pub use manual::{ManualScheduler, ManualTimer, ScheduledFire, VirtualClock};
#[cfg(feature = "tokio")]
pub use tokio_local::TokioScheduler;

use std::rc::Rc;
use std::time::Duration;

/// Which transition a timer completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Opening -> Open
    Open,
    /// Closing -> Idle
    Close,
}

/// Payload delivered back to the controller when a timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFire {
    pub kind: TimerKind,
    /// Generation token; fires whose token is no longer current are dropped.
    pub token: u64,
}

/// Routes an elapsed timer back to its controller.
pub type Dispatch = Rc<dyn Fn(TimerFire)>;

/// Schedules one-shot callbacks on the UI thread.
pub trait Scheduler {
    /// Cancellation handle for a pending timer.
    type Handle;

    fn schedule(&self, delay: Duration, fire: TimerFire) -> Self::Handle;

    /// Cancel a pending timer. Cancelling an elapsed timer is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
