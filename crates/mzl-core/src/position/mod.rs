//! Popup placement.
//!
//! Pure geometry: callers pass already-measured boxes, so placement is
//! computed after the popup's first render pass.

mod viewport;

#[cfg(test)]
mod tests;

pub use viewport::fit_to_viewport;

use mzl_types::{Alignment, BoundingBox, CrossAlign, Position, Side, Size, TooltipConfig};

/// Gap between trigger and popup when none is configured.
pub const DEFAULT_GAP: f64 = TooltipConfig::DEFAULT_GAP;

/// Top-left corner for a popup of `popup` size placed around `trigger`.
pub fn compute_position(trigger: BoundingBox, popup: Size, align: Alignment) -> Position {
    compute_position_with_gap(trigger, popup, align, DEFAULT_GAP)
}

/// [`compute_position`] with an explicit trigger/popup gap.
///
/// An unmeasured popup (zero, negative or non-finite size) is placed at the
/// trigger's top-left. Negative trigger dimensions are treated as zero and a
/// negative or non-finite gap as no gap.
pub fn compute_position_with_gap(
    trigger: BoundingBox,
    popup: Size,
    align: Alignment,
    gap: f64,
) -> Position {
    let trigger = trigger.sanitized();
    if !popup.is_measured() {
        return Position::new(trigger.left, trigger.top);
    }
    let gap = if gap.is_finite() && gap > 0.0 { gap } else { 0.0 };

    match align.side() {
        Side::Top => Position::new(
            cross_offset(trigger.left, trigger.width, popup.width, align.cross()),
            trigger.top - popup.height - gap,
        ),
        Side::Bottom => Position::new(
            cross_offset(trigger.left, trigger.width, popup.width, align.cross()),
            trigger.bottom() + gap,
        ),
        Side::Left => Position::new(
            trigger.left - popup.width - gap,
            cross_offset(trigger.top, trigger.height, popup.height, align.cross()),
        ),
        Side::Right => Position::new(
            trigger.right() + gap,
            cross_offset(trigger.top, trigger.height, popup.height, align.cross()),
        ),
    }
}

/// Coordinate on the axis the popup slides along.
fn cross_offset(start: f64, trigger_len: f64, popup_len: f64, cross: CrossAlign) -> f64 {
    match cross {
        CrossAlign::Center => start + (trigger_len - popup_len) / 2.0,
        CrossAlign::Start => start,
        CrossAlign::End => start + trigger_len - popup_len,
    }
}
