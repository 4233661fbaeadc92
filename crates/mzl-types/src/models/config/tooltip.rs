//! Tooltip defaults and timing.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::models::Alignment;

/// Tooltip display and timing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipConfig {
    /// Side of the trigger the popup appears on
    pub align: Alignment,
    /// Popup background color
    #[validate(length(min = 1_u64, message = "must not be empty"))]
    pub color: String,
    /// Popup stacking order
    pub z_index: i32,
    /// Hover time before the popup opens
    #[validate(range(max = 10_000_u64, message = "must be at most 10000"))]
    pub open_delay_ms: u64,
    /// Time after pointer-leave before the popup node is detached
    #[validate(range(max = 10_000_u64, message = "must be at most 10000"))]
    pub close_delay_ms: u64,
    /// Distance between trigger and popup in pixels
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[validate(custom(function = "validate_finite"))]
    pub gap: f64,
    /// Flip/shift the popup to keep it inside the viewport
    pub fit_viewport: bool,
}

impl TooltipConfig {
    pub const DEFAULT_COLOR: &'static str = "#000";
    pub const DEFAULT_Z_INDEX: i32 = 1011;
    pub const DEFAULT_DELAY_MS: u64 = 150;
    pub const DEFAULT_GAP: f64 = 8.0;

    pub fn new() -> Self {
        Self {
            align: Alignment::Top,
            color: Self::DEFAULT_COLOR.to_string(),
            z_index: Self::DEFAULT_Z_INDEX,
            open_delay_ms: Self::DEFAULT_DELAY_MS,
            close_delay_ms: Self::DEFAULT_DELAY_MS,
            gap: Self::DEFAULT_GAP,
            fit_viewport: false,
        }
    }

    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("must be a finite number".into()))
    }
}
