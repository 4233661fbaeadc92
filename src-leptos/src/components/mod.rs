//! Reusable UI components

mod button;
mod tooltip;

pub use button::Button;
pub use tooltip::Tooltip;
