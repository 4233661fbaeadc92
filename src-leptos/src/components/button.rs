//! Button component with variants

use leptos::prelude::*;
use mzl_core::ButtonAppearance;
use mzl_types::{ButtonKind, ButtonSize, UiConfig};

#[component]
pub fn Button(
    /// Button content
    children: Children,
    /// Button kind
    #[prop(optional)]
    kind: ButtonKind,
    /// Button size
    #[prop(optional)]
    size: ButtonSize,
    /// Whether button is disabled
    #[prop(optional)]
    disabled: bool,
    /// Round button (ignored for links)
    #[prop(optional)]
    circle: bool,
    /// Link target; a link button with an href renders as `<a>`
    #[prop(optional, into)]
    href: Option<String>,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
    /// Inline style, applied after the color style
    #[prop(optional, into)]
    style: String,
    /// Shared configuration supplying the accent color
    #[prop(optional)]
    config: Option<UiConfig>,
    /// Click handler
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let look = ButtonAppearance { kind, size, disabled, circle };
    let color =
        config.map_or_else(|| UiConfig::DEFAULT_GLOBAL_COLOR.to_string(), |c| c.global_color);
    let classes = look.classes(&class);
    let inline = look.style(&color, &style);
    let click = move |_| {
        if let Some(on_click) = &on_click {
            on_click.run(());
        }
    };

    if look.renders_anchor(href.as_deref()) {
        view! {
            <a class=classes href=href style=inline on:click=click>
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <button type="button" class=classes disabled=disabled style=inline on:click=click>
                {children()}
            </button>
        }
        .into_any()
    }
}
