//! Widget gallery

use leptos::prelude::*;
use mzl_types::{Alignment, ButtonKind, ButtonSize, UiConfig};

use crate::components::{Button, Tooltip};

const KINDS: [ButtonKind; 7] = [
    ButtonKind::Primary,
    ButtonKind::Default,
    ButtonKind::Danger,
    ButtonKind::Link,
    ButtonKind::Warning,
    ButtonKind::Info,
    ButtonKind::Dashed,
];

const SIZES: [ButtonSize; 3] = [ButtonSize::Large, ButtonSize::Middle, ButtonSize::Small];

/// Root component: every button variant and a tooltip per alignment.
#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let events = RwSignal::new(Vec::<String>::new());

    let kinds = KINDS
        .into_iter()
        .map(|kind| {
            view! {
                <Button kind=kind config=config.clone()>{kind.to_string()}</Button>
            }
        })
        .collect_view();

    let sizes = SIZES
        .into_iter()
        .map(|size| {
            view! {
                <Button kind=ButtonKind::Primary size=size config=config.clone()>
                    {size.to_string()}
                </Button>
            }
        })
        .collect_view();

    let tooltips = Alignment::ALL
        .into_iter()
        .map(|align| {
            let label = align.to_string();
            let button_config = config.clone();
            let on_open_change = Callback::new(move |open: bool| {
                let state = if open { "opened" } else { "closed" };
                events.update(|log| log.push(format!("{align}: {state}")));
            });
            view! {
                <Tooltip
                    align=align
                    content=move || format!("Placed {align}")
                    on_open_change=on_open_change
                    config=config.tooltip.clone()
                >
                    <Button config=button_config>{label}</Button>
                </Tooltip>
            }
        })
        .collect_view();

    view! {
        <div class="gallery">
            <header class="gallery-header">
                <h1>"mzl widgets"</h1>
                <span class="gallery-version">{env!("GIT_VERSION")}</span>
            </header>

            <section>
                <h2>"Kinds"</h2>
                <div class="gallery-row">{kinds}</div>
            </section>

            <section>
                <h2>"Sizes"</h2>
                <div class="gallery-row">{sizes}</div>
            </section>

            <section>
                <h2>"States"</h2>
                <div class="gallery-row">
                    <Button disabled=true config=config.clone()>"disabled"</Button>
                    <Button circle=true config=config.clone()>"+"</Button>
                    <Button kind=ButtonKind::Link href="https://example.com" config=config.clone()>
                        "link"
                    </Button>
                    <Button kind=ButtonKind::Link disabled=true config=config.clone()>
                        "disabled link"
                    </Button>
                </div>
            </section>

            <section>
                <h2>"Tooltips"</h2>
                <div class="gallery-grid">{tooltips}</div>
                <Tooltip
                    content=|| "Colored, above everything"
                    color="#722ed1"
                    z_index=2000
                    class="gallery-custom"
                >
                    <span>"custom color"</span>
                </Tooltip>
            </section>

            <section>
                <h2>"Open changes"</h2>
                <ul class="gallery-log">
                    {move || {
                        events
                            .get()
                            .into_iter()
                            .rev()
                            .take(12)
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
