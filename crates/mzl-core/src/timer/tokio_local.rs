//! Scheduler for native hosts running a tokio `LocalSet`.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::{Dispatch, Scheduler, TimerFire};

/// Spawns one local task per timer; cancelling aborts the task.
///
/// Must be used from within a `tokio::task::LocalSet`, since the dispatch
/// function is not `Send`.
#[derive(Clone)]
pub struct TokioScheduler {
    dispatch: Dispatch,
}

impl TokioScheduler {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule(&self, delay: Duration, fire: TimerFire) -> JoinHandle<()> {
        let dispatch = self.dispatch.clone();
        // The delay runs from scheduling, not from the task's first poll.
        let deadline = Instant::now() + delay;
        tokio::task::spawn_local(async move {
            tokio::time::sleep_until(deadline).await;
            dispatch(fire);
        })
    }

    fn cancel(&self, handle: JoinHandle<()>) {
        handle.abort();
    }
}
