//! Hover cycles against real tokio timers on a paused clock.

#![cfg(feature = "tokio")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use mzl_core::dom::MemoryDocument;
use mzl_core::timer::TokioScheduler;
use mzl_core::{DomPopup, SharedTrigger, TriggerState, POPUP_CLASS};
use mzl_types::{BoundingBox, TooltipConfig};
use tokio::task::LocalSet;
use tokio::task::yield_now;
use tokio::time::sleep;

type Trigger = SharedTrigger<DomPopup<MemoryDocument>, TokioScheduler>;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Sleep, then let timer tasks that came due at the same instant run.
async fn wait(n: u64) {
    sleep(ms(n)).await;
    yield_now().await;
}

fn trigger(doc: &MemoryDocument, changes: &Rc<RefCell<Vec<bool>>>) -> Trigger {
    mzl_core::logging::init_tracing("mzl_core=debug");
    let popup = DomPopup::new(doc.clone()).unwrap_or_else(|e| panic!("{e}"));
    let shared =
        SharedTrigger::new(popup, Rc::from("tip"), TooltipConfig::default(), TokioScheduler::new);
    let sink = Rc::clone(changes);
    shared.set_on_open_change(Some(Box::new(move |open| sink.borrow_mut().push(open))));
    shared
}

#[tokio::test(start_paused = true)]
async fn test_open_and_close_cycle() {
    LocalSet::new()
        .run_until(async {
            let doc = MemoryDocument::new();
            let changes = Rc::new(RefCell::new(Vec::new()));
            let tip = trigger(&doc, &changes);

            tip.pointer_enter(BoundingBox::new(10.0, 10.0, 50.0, 20.0));
            sleep(ms(149)).await;
            assert_eq!(tip.state(), TriggerState::Opening);

            sleep(ms(2)).await;
            assert_eq!(tip.state(), TriggerState::Open);
            assert_eq!(*changes.borrow(), vec![true]);

            tip.pointer_leave();
            sleep(ms(151)).await;
            assert_eq!(tip.state(), TriggerState::Idle);
            assert_eq!(*changes.borrow(), vec![true, false]);
            assert_eq!(doc.count_by_class(POPUP_CLASS), 0);
            assert_eq!(doc.removals(), 1);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_quick_leave_aborts_open_timer() {
    LocalSet::new()
        .run_until(async {
            let doc = MemoryDocument::new();
            let changes = Rc::new(RefCell::new(Vec::new()));
            let tip = trigger(&doc, &changes);

            tip.pointer_enter(BoundingBox::new(10.0, 10.0, 50.0, 20.0));
            wait(50).await;
            tip.pointer_leave();
            // Leave at 50ms; the close timer is due exactly at 200ms.
            wait(150).await;

            assert_eq!(tip.state(), TriggerState::Idle);
            assert!(changes.borrow().is_empty());
            assert_eq!(doc.count_by_class(POPUP_CLASS), 0);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_close_delay_counts_from_pointer_leave() {
    LocalSet::new()
        .run_until(async {
            let doc = MemoryDocument::new();
            let changes = Rc::new(RefCell::new(Vec::new()));
            let tip = trigger(&doc, &changes);

            tip.pointer_enter(BoundingBox::new(10.0, 10.0, 50.0, 20.0));
            wait(150).await;
            assert_eq!(tip.state(), TriggerState::Open);

            tip.pointer_leave();
            wait(149).await;
            assert_eq!(tip.state(), TriggerState::Closing);
            assert_eq!(doc.count_by_class(POPUP_CLASS), 1);

            wait(1).await;
            assert_eq!(tip.state(), TriggerState::Idle);
            assert_eq!(*changes.borrow(), vec![true, false]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_simultaneous_triggers_share_container() {
    LocalSet::new()
        .run_until(async {
            let doc = MemoryDocument::new();
            let first_changes = Rc::new(RefCell::new(Vec::new()));
            let second_changes = Rc::new(RefCell::new(Vec::new()));
            let first = trigger(&doc, &first_changes);
            let second = trigger(&doc, &second_changes);

            first.pointer_enter(BoundingBox::new(10.0, 10.0, 50.0, 20.0));
            second.pointer_enter(BoundingBox::new(200.0, 10.0, 50.0, 20.0));
            assert_eq!(doc.count_by_class(POPUP_CLASS), 2);

            sleep(ms(60)).await;
            first.pointer_leave();
            sleep(ms(100)).await;

            assert_eq!(first.state(), TriggerState::Closing);
            assert_eq!(second.state(), TriggerState::Open);
            assert!(first_changes.borrow().is_empty());
            assert_eq!(*second_changes.borrow(), vec![true]);

            sleep(ms(60)).await;
            assert_eq!(first.state(), TriggerState::Idle);
            assert_eq!(doc.count_by_class(POPUP_CLASS), 1);
        })
        .await;
}
