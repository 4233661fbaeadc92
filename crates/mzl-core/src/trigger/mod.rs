//! Trigger controller: hover handling and debounced open/close.
//!
//! ```text
//!            pointer-enter              open delay
//!   Idle ───────────────────▶ Opening ─────────────▶ Open
//!    ▲                         │   ▲                   │
//!    │ close delay   pointer-  │   │ pointer-enter     │ pointer-leave
//!    │               leave     ▼   │                   ▼
//!    └──────────────────────── Closing ◀───────────────┘
//! ```
//!
//! Every transition clears the timer of the opposite direction before
//! scheduling its own, so at most one timer per trigger is ever pending.
//! Fires carry a generation token as a second line of defence against a
//! timer that elapsed after its premise was invalidated.

mod shared;
mod state;


pub use shared::SharedTrigger;
pub use state::TriggerState;

use state::{PendingTimer, TriggerEvent};

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use mzl_types::{BoundingBox, TooltipConfig};
use tracing::{debug, trace, warn};

use crate::popup::{PopupRenderer, TooltipInstance};
use crate::timer::{Scheduler, TimerFire, TimerKind};

/// Called with `true` when the popup opens and `false` when it closes.
pub type OpenChangeCallback = Box<dyn FnMut(bool)>;

static NEXT_TRIGGER_ID: AtomicU64 = AtomicU64::new(1);

/// Drives one popup from pointer events and timer fires.
pub struct TriggerController<R: PopupRenderer, S: Scheduler> {
    id: u64,
    state: TriggerState,
    popup: R,
    scheduler: S,
    content: R::Content,
    config: TooltipConfig,
    instance: Option<TooltipInstance<R::Content>>,
    open_timer: Option<PendingTimer<S::Handle>>,
    close_timer: Option<PendingTimer<S::Handle>>,
    next_token: u64,
    on_open_change: Option<OpenChangeCallback>,
}

impl<R: PopupRenderer, S: Scheduler> TriggerController<R, S> {
    pub fn new(popup: R, scheduler: S, content: R::Content, config: TooltipConfig) -> Self {
        Self {
            id: NEXT_TRIGGER_ID.fetch_add(1, Ordering::Relaxed),
            state: TriggerState::Idle,
            popup,
            scheduler,
            content,
            config,
            instance: None,
            open_timer: None,
            close_timer: None,
            next_token: 0,
            on_open_change: None,
        }
    }

    pub fn with_on_open_change(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(callback));
        self
    }

    pub fn set_on_open_change(&mut self, callback: Option<OpenChangeCallback>) {
        self.on_open_change = callback;
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn popup(&self) -> &R {
        &self.popup
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// The current hover cycle's instance, while a popup is mounted.
    pub fn instance(&self) -> Option<&TooltipInstance<R::Content>> {
        self.instance.as_ref()
    }

    /// Number of timers this controller is waiting on (0 or 1).
    pub fn pending_timers(&self) -> usize {
        usize::from(self.open_timer.is_some()) + usize::from(self.close_timer.is_some())
    }

    /// Pointer entered the trigger, whose box is `bounding_box` right now.
    pub fn pointer_enter(&mut self, bounding_box: BoundingBox) {
        match self.state {
            TriggerState::Idle | TriggerState::Closing => {
                self.cancel_timers();
                let instance =
                    TooltipInstance::new(bounding_box, self.content.clone(), &self.config);
                if let Err(e) = self.popup.mount(&instance) {
                    warn!(trigger = self.id, error = %e, "Failed to mount tooltip popup");
                    self.popup.unmount();
                    self.instance = None;
                    self.transition(TriggerEvent::PointerEnter, TriggerState::Idle);
                    return;
                }
                self.instance = Some(instance);
                self.open_timer = Some(self.start_timer(TimerKind::Open, self.config.open_delay()));
                self.transition(TriggerEvent::PointerEnter, TriggerState::Opening);
            },
            TriggerState::Opening | TriggerState::Open => {
                trace!(trigger = self.id, state = %self.state, "pointer-enter ignored");
            },
        }
    }

    /// Pointer left the trigger.
    pub fn pointer_leave(&mut self) {
        match self.state {
            TriggerState::Opening => {
                // Never visually opened, so there is nothing to report.
                self.cancel_timers();
                self.close_timer =
                    Some(self.start_timer(TimerKind::Close, self.config.close_delay()));
                self.transition(TriggerEvent::PointerLeave, TriggerState::Closing);
            },
            TriggerState::Open => {
                self.cancel_timers();
                self.popup.set_open(false);
                self.close_timer =
                    Some(self.start_timer(TimerKind::Close, self.config.close_delay()));
                self.transition(TriggerEvent::PointerLeave, TriggerState::Closing);
                self.notify(false);
            },
            TriggerState::Idle | TriggerState::Closing => {
                trace!(trigger = self.id, state = %self.state, "pointer-leave ignored");
            },
        }
    }

    /// A timer scheduled by this controller elapsed.
    pub fn on_timer(&mut self, fire: TimerFire) {
        let slot = match fire.kind {
            TimerKind::Open => &mut self.open_timer,
            TimerKind::Close => &mut self.close_timer,
        };
        if slot.as_ref().map(|pending| pending.token) != Some(fire.token) {
            debug!(
                trigger = self.id,
                kind = ?fire.kind,
                token = fire.token,
                "Stale timer fire dropped"
            );
            return;
        }
        *slot = None;

        match (fire.kind, self.state) {
            (TimerKind::Open, TriggerState::Opening) => {
                self.popup.set_open(true);
                self.transition(TriggerEvent::Elapsed(TimerKind::Open), TriggerState::Open);
                self.notify(true);
            },
            (TimerKind::Close, TriggerState::Closing) => {
                self.popup.unmount();
                self.instance = None;
                self.transition(TriggerEvent::Elapsed(TimerKind::Close), TriggerState::Idle);
            },
            (kind, state) => {
                warn!(trigger = self.id, ?kind, %state, "Timer fired in unexpected state");
            },
        }
    }

    /// Cancel pending timers and detach the popup. Reports a close if the
    /// popup was open.
    pub fn dispose(&mut self) {
        self.cancel_timers();
        let was_open = self.state == TriggerState::Open;
        if self.popup.is_mounted() {
            self.popup.set_open(false);
            self.popup.unmount();
        }
        self.instance = None;
        if self.state != TriggerState::Idle {
            debug!(trigger = self.id, from = %self.state, "Tooltip disposed");
            self.state = TriggerState::Idle;
        }
        if was_open {
            self.notify(false);
        }
    }

    fn start_timer(&mut self, kind: TimerKind, delay: Duration) -> PendingTimer<S::Handle> {
        self.next_token += 1;
        let token = self.next_token;
        let handle = self.scheduler.schedule(delay, TimerFire { kind, token });
        PendingTimer { handle, token }
    }

    fn cancel_timers(&mut self) {
        if let Some(pending) = self.open_timer.take() {
            self.scheduler.cancel(pending.handle);
        }
        if let Some(pending) = self.close_timer.take() {
            self.scheduler.cancel(pending.handle);
        }
    }

    fn transition(&mut self, event: TriggerEvent, to: TriggerState) {
        let from = self.state;
        self.state = to;
        debug!(trigger = self.id, ?event, %from, %to, "Tooltip state change");
    }

    fn notify(&mut self, open: bool) {
        if let Some(callback) = self.on_open_change.as_mut() {
            callback(open);
        }
    }
}

impl<R: PopupRenderer, S: Scheduler> Drop for TriggerController<R, S> {
    fn drop(&mut self) {
        self.cancel_timers();
        self.popup.unmount();
    }
}
