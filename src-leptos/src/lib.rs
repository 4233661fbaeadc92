//! mzl widgets for Leptos.
//!
//! [`components::Tooltip`] and [`components::Button`], plus the browser
//! implementations of the `mzl-core` document and scheduler seams.

// tracing's `log` feature routes mzl-core events into console_log
use tracing as _;

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod timer;
