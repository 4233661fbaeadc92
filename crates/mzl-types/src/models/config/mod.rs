//! Widget configuration.
//!
//! Configuration is passed explicitly into the component tree; nothing is
//! read from an ambient global.

mod tooltip;
mod ui;

pub use tooltip::TooltipConfig;
pub use ui::UiConfig;
