//! Browser scheduler on `setTimeout`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use mzl_core::timer::{Dispatch, Scheduler, TimerFire};

/// One `setTimeout` per timer; cancelling clears it.
#[derive(Clone)]
pub struct GlooScheduler {
    dispatch: Dispatch,
}

impl GlooScheduler {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }
}

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, fire: TimerFire) -> Timeout {
        let dispatch = self.dispatch.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || dispatch(fire))
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle.cancel());
    }
}
