//! Tooltip component

use leptos::html::Div;
use leptos::prelude::*;
use mzl_core::{DomPopup, SharedTrigger};
use mzl_types::{Alignment, TooltipConfig};
use send_wrapper::SendWrapper;

use crate::dom::{bounding_box, WebDocument};
use crate::timer::GlooScheduler;

type WebTrigger = SharedTrigger<DomPopup<WebDocument>, GlooScheduler>;

/// Wraps `children` and shows `content` in the shared overlay container while
/// the pointer rests on them.
#[component]
pub fn Tooltip(
    /// Trigger content
    children: Children,
    /// Popup body, rendered fresh for every hover
    #[prop(into)]
    content: ViewFn,
    /// Side of the trigger the popup appears on (default: top)
    #[prop(optional)]
    align: Option<Alignment>,
    /// Popup background color (default: #000)
    #[prop(optional, into)]
    color: Option<String>,
    /// Popup z-index (default: 1011)
    #[prop(optional)]
    z_index: Option<i32>,
    /// Called with `true` when the popup opens and `false` when it closes
    #[prop(optional, into)]
    on_open_change: Option<Callback<bool>>,
    /// Extra class on the trigger wrapper
    #[prop(optional, into)]
    class: String,
    /// Inline style on the trigger wrapper
    #[prop(optional, into)]
    style: String,
    /// Delays, gap and viewport fitting; the props above override it
    #[prop(optional)]
    config: Option<TooltipConfig>,
) -> impl IntoView {
    let mut config = config.unwrap_or_default();
    if let Some(align) = align {
        config.align = align;
    }
    if let Some(color) = color {
        config.color = color;
    }
    if let Some(z_index) = z_index {
        config.z_index = z_index;
    }

    let trigger_ref = NodeRef::<Div>::new();
    let trigger = build_trigger(content, config, on_open_change);

    let cleanup = SendWrapper::new(trigger.clone());
    on_cleanup(move || {
        if let Some(trigger) = cleanup.take() {
            trigger.dispose();
        }
    });

    let enter = trigger.clone();
    let on_enter = move |_| {
        if let (Some(trigger), Some(element)) = (&enter, trigger_ref.get_untracked()) {
            trigger.pointer_enter(bounding_box(&element));
        }
    };
    let on_leave = move |_| {
        if let Some(trigger) = &trigger {
            trigger.pointer_leave();
        }
    };

    let classes = if class.trim().is_empty() {
        "mzl_tooltip".to_string()
    } else {
        format!("mzl_tooltip {class}")
    };

    view! {
        <div
            class=classes
            style=style
            node_ref=trigger_ref
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            {children()}
        </div>
    }
}

/// Controller for one tooltip, or `None` when there is no usable document,
/// in which case the children render without a tooltip.
fn build_trigger(
    content: ViewFn,
    config: TooltipConfig,
    on_open_change: Option<Callback<bool>>,
) -> Option<WebTrigger> {
    let popup = match WebDocument::current().and_then(DomPopup::new) {
        Ok(popup) => popup,
        Err(e) => {
            log::warn!("Tooltip disabled: {e}");
            return None;
        },
    };

    let trigger = SharedTrigger::new(popup, content, config, GlooScheduler::new);
    if let Some(callback) = on_open_change {
        trigger.set_on_open_change(Some(Box::new(move |open| callback.run(open))));
    }
    Some(trigger)
}
