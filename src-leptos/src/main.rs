//! mzl widget gallery
//!
//! Client-side Leptos app mounting every widget variant.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use mzl_core as _;
use mzl_types as _;
use send_wrapper as _;
use tracing as _;
use wasm_bindgen as _;
use web_sys as _;

use leptos::prelude::*;
use mzl_leptos::app::App;
use mzl_leptos::config::load_page_config;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("mzl gallery {} starting...", env!("GIT_VERSION"));

    let config = load_page_config();
    mount_to_body(move || view! { <App config=config /> });
}
