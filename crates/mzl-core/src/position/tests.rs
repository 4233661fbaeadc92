use super::*;
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn trigger() -> BoundingBox {
    BoundingBox::new(100.0, 200.0, 80.0, 30.0)
}

#[test]
fn test_top_is_centered_above() {
    let pos = compute_position(trigger(), Size::new(40.0, 20.0), Alignment::Top);
    assert_eq!(pos, Position::new(120.0, 172.0));
}

#[test]
fn test_bottom_is_centered_below() {
    let pos = compute_position(trigger(), Size::new(40.0, 20.0), Alignment::Bottom);
    assert_eq!(pos, Position::new(120.0, 238.0));
}

#[test]
fn test_left_and_right_are_vertically_centered() {
    let popup = Size::new(40.0, 10.0);
    assert_eq!(compute_position(trigger(), popup, Alignment::Left), Position::new(52.0, 210.0));
    assert_eq!(compute_position(trigger(), popup, Alignment::Right), Position::new(188.0, 210.0));
}

#[test]
fn test_edge_aligned_variants() {
    let popup = Size::new(40.0, 10.0);
    assert_eq!(compute_position(trigger(), popup, Alignment::TopLeft).left, 100.0);
    assert_eq!(compute_position(trigger(), popup, Alignment::BottomRight).left, 140.0);
    assert_eq!(compute_position(trigger(), popup, Alignment::LeftTop).top, 200.0);
    assert_eq!(compute_position(trigger(), popup, Alignment::RightBottom).top, 220.0);
}

#[test]
fn test_unmeasured_popup_falls_back_to_trigger_origin() {
    for popup in [Size::default(), Size::new(-1.0, 20.0), Size::new(f64::NAN, 20.0)] {
        assert_eq!(
            compute_position(trigger(), popup, Alignment::Right),
            Position::new(100.0, 200.0)
        );
    }
}

#[test]
fn test_negative_trigger_dimensions_degrade_to_point() {
    let bbox = BoundingBox::new(50.0, 60.0, -10.0, -10.0);
    let pos = compute_position_with_gap(bbox, Size::new(20.0, 10.0), Alignment::Bottom, 0.0);
    assert_eq!(pos, Position::new(40.0, 60.0));
}

#[test]
fn test_negative_gap_is_ignored() {
    let pos = compute_position_with_gap(trigger(), Size::new(40.0, 20.0), Alignment::Top, -5.0);
    assert_eq!(pos.top, 180.0);
}

#[test]
fn test_fit_flips_when_top_overflows() {
    let near_top = BoundingBox::new(100.0, 5.0, 80.0, 30.0);
    let (pos, align) = fit_to_viewport(
        near_top,
        Size::new(40.0, 20.0),
        Alignment::Top,
        8.0,
        Size::new(800.0, 600.0),
    );
    assert_eq!(align, Alignment::Bottom);
    assert_eq!(pos.top, 43.0);
}

#[test]
fn test_fit_keeps_side_when_both_sides_overflow() {
    let tall = BoundingBox::new(100.0, 5.0, 80.0, 590.0);
    let (_, align) = fit_to_viewport(
        tall,
        Size::new(40.0, 20.0),
        Alignment::Top,
        8.0,
        Size::new(800.0, 600.0),
    );
    assert_eq!(align, Alignment::Top);
}

#[test]
fn test_fit_shifts_along_edge() {
    let near_left = BoundingBox::new(0.0, 300.0, 20.0, 20.0);
    let (pos, align) = fit_to_viewport(
        near_left,
        Size::new(100.0, 20.0),
        Alignment::Bottom,
        8.0,
        Size::new(800.0, 600.0),
    );
    assert_eq!(align, Alignment::Bottom);
    assert_eq!(pos, Position::new(0.0, 328.0));
}

#[test]
fn test_fit_without_viewport_is_plain_placement() {
    let popup = Size::new(40.0, 20.0);
    let (pos, align) = fit_to_viewport(trigger(), popup, Alignment::Left, 8.0, Size::default());
    assert_eq!(align, Alignment::Left);
    assert_eq!(pos, compute_position(trigger(), popup, Alignment::Left));
}

fn any_alignment() -> impl Strategy<Value = Alignment> {
    prop::sample::select(Alignment::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_popup_is_adjacent_on_requested_side(
        left in -2000.0f64..2000.0,
        top in -2000.0f64..2000.0,
        width in 0.0f64..500.0,
        height in 0.0f64..500.0,
        popup_w in 1.0f64..400.0,
        popup_h in 1.0f64..400.0,
        align in any_alignment(),
    ) {
        let bbox = BoundingBox::new(left, top, width, height);
        let popup = Size::new(popup_w, popup_h);
        let pos = compute_position(bbox, popup, align);

        match align.side() {
            Side::Top => prop_assert!(pos.top + popup.height <= bbox.top),
            Side::Bottom => prop_assert!(pos.top >= bbox.bottom()),
            Side::Left => prop_assert!(pos.left + popup.width <= bbox.left),
            Side::Right => prop_assert!(pos.left >= bbox.right()),
        }
    }

    #[test]
    fn prop_plain_sides_are_centered(
        left in -2000.0f64..2000.0,
        top in -2000.0f64..2000.0,
        width in 0.0f64..500.0,
        height in 0.0f64..500.0,
        popup_w in 1.0f64..400.0,
        popup_h in 1.0f64..400.0,
        side in prop::sample::select(vec![
            Alignment::Top,
            Alignment::Bottom,
            Alignment::Left,
            Alignment::Right,
        ]),
    ) {
        let bbox = BoundingBox::new(left, top, width, height);
        let popup = Size::new(popup_w, popup_h);
        let pos = compute_position(bbox, popup, side);

        if side.side().is_vertical() {
            let popup_center = pos.left + popup.width / 2.0;
            prop_assert!((popup_center - (bbox.left + bbox.width / 2.0)).abs() < EPS);
        } else {
            let popup_center = pos.top + popup.height / 2.0;
            prop_assert!((popup_center - (bbox.top + bbox.height / 2.0)).abs() < EPS);
        }
    }

    #[test]
    fn prop_fit_stays_adjacent(
        left in 0.0f64..800.0,
        top in 0.0f64..600.0,
        width in 0.0f64..200.0,
        height in 0.0f64..200.0,
        popup_w in 1.0f64..300.0,
        popup_h in 1.0f64..300.0,
        align in any_alignment(),
    ) {
        let bbox = BoundingBox::new(left, top, width, height);
        let popup = Size::new(popup_w, popup_h);
        let viewport = Size::new(1024.0, 768.0);
        let (pos, used) = fit_to_viewport(bbox, popup, align, DEFAULT_GAP, viewport);

        prop_assert_eq!(used.side().is_vertical(), align.side().is_vertical());
        match used.side() {
            Side::Top => prop_assert!(pos.top + popup.height <= bbox.top),
            Side::Bottom => prop_assert!(pos.top >= bbox.bottom()),
            Side::Left => prop_assert!(pos.left + popup.width <= bbox.left),
            Side::Right => prop_assert!(pos.left >= bbox.right()),
        }
    }
}
