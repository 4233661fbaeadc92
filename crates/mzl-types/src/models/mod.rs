//! Domain models shared by the mzl widgets.

mod alignment;
mod button;
mod config;
mod geometry;

pub use alignment::{Alignment, CrossAlign, Side};
pub use button::{ButtonKind, ButtonSize};
pub use config::{TooltipConfig, UiConfig};
pub use geometry::{BoundingBox, Position, Size};
