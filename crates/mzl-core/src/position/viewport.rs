//! Keeping popups on screen.

use mzl_types::{Alignment, BoundingBox, Position, Side, Size};

use super::compute_position_with_gap;

/// Place the popup, flipping and shifting it to stay inside `viewport`.
///
/// The popup flips to the opposite side only when its requested side
/// overflows and the opposite side does not. It is then shifted along the
/// trigger's edge, never away from it, so it stays adjacent to the trigger.
/// Returns the position and the alignment actually used.
pub fn fit_to_viewport(
    trigger: BoundingBox,
    popup: Size,
    align: Alignment,
    gap: f64,
    viewport: Size,
) -> (Position, Alignment) {
    let position = compute_position_with_gap(trigger, popup, align, gap);
    if !popup.is_measured() || !viewport.is_measured() {
        return (position, align);
    }

    let (position, align) = if overflows(position, popup, align.side(), viewport) {
        let flipped = align.flipped();
        let candidate = compute_position_with_gap(trigger, popup, flipped, gap);
        if overflows(candidate, popup, flipped.side(), viewport) {
            (position, align)
        } else {
            (candidate, flipped)
        }
    } else {
        (position, align)
    };

    let shifted = if align.side().is_vertical() {
        Position::new(clamp_into(position.left, popup.width, viewport.width), position.top)
    } else {
        Position::new(position.left, clamp_into(position.top, popup.height, viewport.height))
    };
    (shifted, align)
}

fn overflows(position: Position, popup: Size, side: Side, viewport: Size) -> bool {
    match side {
        Side::Top => position.top < 0.0,
        Side::Bottom => position.top + popup.height > viewport.height,
        Side::Left => position.left < 0.0,
        Side::Right => position.left + popup.width > viewport.width,
    }
}

/// Clamp a start coordinate so `[start, start + len]` fits in `[0, limit]`.
/// Content larger than the viewport is pinned to the leading edge.
fn clamp_into(start: f64, len: f64, limit: f64) -> f64 {
    let max = (limit - len).max(0.0);
    start.clamp(0.0, max)
}
