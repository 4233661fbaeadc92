//! Reference-counted controller wired to a callback-driven scheduler.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use mzl_types::{BoundingBox, TooltipConfig};
use tracing::warn;

use super::{OpenChangeCallback, TriggerController, TriggerState};
use crate::popup::PopupRenderer;
use crate::timer::{Dispatch, Scheduler, TimerFire};

/// Open-change reports waiting for the controller borrow to end.
#[derive(Default)]
struct Notifier {
    callback: RefCell<Option<Rc<RefCell<OpenChangeCallback>>>>,
    queue: RefCell<VecDeque<bool>>,
    delivering: Cell<bool>,
}

impl Notifier {
    fn push(&self, open: bool) {
        self.queue.borrow_mut().push_back(open);
    }

    /// Run the callback for every queued report. Reports queued by the
    /// callback itself are delivered by the same loop, in order.
    fn deliver(&self) {
        if self.delivering.replace(true) {
            return;
        }
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(open) = next else {
                break;
            };
            let callback = self.callback.borrow().clone();
            if let Some(callback) = callback {
                let mut callback = callback.borrow_mut();
                (*callback)(open);
            }
        }
        self.delivering.set(false);
    }
}

/// A [`TriggerController`] shared between event handlers and its own timers.
///
/// The scheduler only holds a weak reference back to the controller, so a
/// timer that outlives the component it belonged to fires into nothing.
/// The open-change callback runs after the controller is released, so it may
/// query or drive the trigger.
pub struct SharedTrigger<R: PopupRenderer + 'static, S: Scheduler + 'static> {
    inner: Rc<RefCell<TriggerController<R, S>>>,
    notifier: Rc<Notifier>,
}

impl<R: PopupRenderer + 'static, S: Scheduler + 'static> Clone for SharedTrigger<R, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner), notifier: Rc::clone(&self.notifier) }
    }
}

impl<R: PopupRenderer + 'static, S: Scheduler + 'static> SharedTrigger<R, S> {
    /// Build the controller; `make_scheduler` receives the dispatch function
    /// its timers must call.
    pub fn new(
        popup: R,
        content: R::Content,
        config: TooltipConfig,
        make_scheduler: impl FnOnce(Dispatch) -> S,
    ) -> Self {
        let notifier = Rc::new(Notifier::default());
        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<TriggerController<R, S>>>| {
            let weak = weak.clone();
            let delivery = Rc::downgrade(&notifier);
            let dispatch: Dispatch = Rc::new(move |fire: TimerFire| {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                match controller.try_borrow_mut() {
                    Ok(mut controller) => controller.on_timer(fire),
                    Err(_) => {
                        warn!(kind = ?fire.kind, "Timer fired while controller busy; dropped");
                        return;
                    },
                };
                if let Some(notifier) = delivery.upgrade() {
                    notifier.deliver();
                }
            });

            let queue = Rc::downgrade(&notifier);
            let controller =
                TriggerController::new(popup, make_scheduler(dispatch), content, config)
                    .with_on_open_change(move |open| {
                        if let Some(notifier) = queue.upgrade() {
                            notifier.push(open);
                        }
                    });
            RefCell::new(controller)
        });
        Self { inner, notifier }
    }

    pub fn set_on_open_change(&self, callback: Option<OpenChangeCallback>) {
        *self.notifier.callback.borrow_mut() = callback.map(|cb| Rc::new(RefCell::new(cb)));
    }

    pub fn pointer_enter(&self, bounding_box: BoundingBox) {
        self.update(|controller| controller.pointer_enter(bounding_box));
    }

    pub fn pointer_leave(&self) {
        self.update(TriggerController::pointer_leave);
    }

    pub fn dispose(&self) {
        self.update(TriggerController::dispose);
    }

    pub fn state(&self) -> TriggerState {
        self.inner.borrow().state()
    }

    /// Read access to the controller.
    pub fn with<T>(&self, f: impl FnOnce(&TriggerController<R, S>) -> T) -> T {
        f(&self.inner.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut TriggerController<R, S>)) {
        match self.inner.try_borrow_mut() {
            Ok(mut controller) => f(&mut controller),
            // Only reachable from code running inside a controller call,
            // such as content rendering.
            Err(_) => {
                warn!("Tooltip event dropped: controller busy");
                return;
            },
        }
        self.notifier.deliver();
    }
}
