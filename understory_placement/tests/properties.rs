// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the placement solver.

use kurbo::{Insets, Rect, Size};
use proptest::prelude::*;
use understory_placement::{
    Anchor, AnchorSpec, Direction, MenuStyle, PlacementError, PositionPreference, ScreenContext,
    solve,
};

const EPS: f64 = 1e-9;

fn screens() -> impl Strategy<Value = ScreenContext> {
    (360.0..1400.0f64, 480.0..1400.0f64, 0.0..60.0f64, 0.0..40.0f64).prop_map(
        |(w, h, top, bottom)| {
            ScreenContext::new(Size::new(w, h)).with_safe_area(Insets::new(0.0, top, 0.0, bottom))
        },
    )
}

fn styles() -> impl Strategy<Value = MenuStyle> {
    (
        100.0..300.0f64,
        24.0..60.0f64,
        1usize..40,
        2.0..16.0f64,
        0.5..12.0f64,
        4.0..12.0f64,
        4.0..14.0f64,
        0.5..4.0f64,
    )
        .prop_map(
            |(
                menu_width,
                row_height,
                row_count,
                margin,
                corner_radius,
                arrow_width,
                arrow_height,
                arrow_corner_radius,
            )| MenuStyle {
                menu_width,
                row_height,
                row_count,
                margin,
                corner_radius,
                arrow_width,
                arrow_height,
                arrow_corner_radius,
            },
        )
}

/// Screens from barely one row tall up to a small landscape phone.
fn short_screens() -> impl Strategy<Value = ScreenContext> {
    (360.0..900.0f64, 20.0..240.0f64, 0.0..30.0f64, 0.0..30.0f64).prop_map(
        |(w, h, top, bottom)| {
            ScreenContext::new(Size::new(w, h)).with_safe_area(Insets::new(0.0, top, 0.0, bottom))
        },
    )
}

fn preferences() -> impl Strategy<Value = PositionPreference> {
    prop_oneof![
        Just(PositionPreference::Automatic),
        Just(PositionPreference::AlwaysAbove),
        Just(PositionPreference::AlwaysBelow),
    ]
}

/// An anchor fully inside the screen, as fractions of the screen size.
fn anchor_in(screen: &ScreenContext, fx: f64, fy: f64, fw: f64, fh: f64) -> Rect {
    let w = fw * screen.width() * 0.2;
    let h = fh * screen.height() * 0.1;
    let x = fx * (screen.width() - w);
    let y = fy * (screen.height() - h);
    Rect::new(x, y, x + w, y + h)
}

proptest! {
    #[test]
    fn frame_stays_on_screen(
        screen in screens(),
        style in styles(),
        preference in preferences(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
        fw in 0.0..1.0f64,
        fh in 0.0..1.0f64,
    ) {
        let rect = anchor_in(&screen, fx, fy, fw, fh);
        let spec = AnchorSpec::new(Anchor::Frame(rect)).with_preference(preference);
        let r = solve(&spec, &screen, &style).unwrap();
        prop_assert!(r.frame.x0 >= -EPS);
        prop_assert!(r.frame.x1 <= screen.width() + EPS);
        prop_assert!(r.frame.y0 >= screen.safe_area.y0 - EPS);
        prop_assert!(r.frame.y1 <= screen.height() - screen.safe_area.y1 + EPS);
        prop_assert!(r.frame.height() > 0.0);
        prop_assert!(r.frame.height() <= style.desired_height() + EPS);
    }

    #[test]
    fn short_screens_reject_or_fit(
        screen in short_screens(),
        style in styles(),
        preference in preferences(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
    ) {
        let rect = anchor_in(&screen, fx, fy, 0.5, 0.5);
        let spec = AnchorSpec::new(Anchor::Frame(rect)).with_preference(preference);
        match solve(&spec, &screen, &style) {
            Ok(r) => {
                prop_assert!(r.frame.y0 >= screen.safe_area.y0 - EPS);
                prop_assert!(r.frame.y1 <= screen.height() - screen.safe_area.y1 + EPS);
                prop_assert!(r.frame.height() > 0.0);
            }
            Err(err) => prop_assert_eq!(err, PlacementError::ScreenTooShort),
        }
    }

    #[test]
    fn arrow_stays_clear_of_corners(
        screen in screens(),
        style in styles(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
    ) {
        let rect = anchor_in(&screen, fx, fy, 0.5, 0.5);
        let r = solve(&AnchorSpec::new(Anchor::Frame(rect)), &screen, &style).unwrap();
        let lo = style.corner_radius + style.arrow_width;
        let hi = style.menu_width - style.corner_radius - style.arrow_width;
        prop_assert!(r.arrow_point.x >= lo - EPS);
        prop_assert!(r.arrow_point.x <= hi + EPS);
        prop_assert!((r.scale_pivot.x * style.menu_width - r.arrow_point.x).abs() < 1e-6);
    }

    #[test]
    fn automatic_side_follows_anchor_center(
        screen in screens(),
        style in styles(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
    ) {
        let rect = anchor_in(&screen, fx, fy, 0.3, 0.3);
        let r = solve(&AnchorSpec::new(Anchor::Frame(rect)), &screen, &style).unwrap();
        let expect_up = rect.center().y < screen.height() / 2.0;
        prop_assert_eq!(r.direction == Direction::Up, expect_up);
    }

    #[test]
    fn forced_sides_are_honored(
        screen in screens(),
        style in styles(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
    ) {
        let rect = anchor_in(&screen, fx, fy, 0.3, 0.3);
        let spec = AnchorSpec::new(Anchor::Frame(rect));
        let above = solve(&spec.with_preference(PositionPreference::AlwaysAbove), &screen, &style);
        let below = solve(&spec.with_preference(PositionPreference::AlwaysBelow), &screen, &style);
        prop_assert_eq!(above.unwrap().direction, Direction::Down);
        prop_assert_eq!(below.unwrap().direction, Direction::Up);
    }

    #[test]
    fn solve_is_deterministic(
        screen in screens(),
        style in styles(),
        preference in preferences(),
        fx in 0.0..1.0f64,
        fy in 0.0..1.0f64,
    ) {
        let rect = anchor_in(&screen, fx, fy, 0.4, 0.4);
        let spec = AnchorSpec::new(Anchor::View(rect)).with_preference(preference);
        prop_assert_eq!(solve(&spec, &screen, &style), solve(&spec, &screen, &style));
    }
}
