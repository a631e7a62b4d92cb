// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session lifecycle.
//!
//! Show a menu, rotate the screen, let the relayout settle, and tap a row.
//!
//! Run:
//! - `cargo run -p understory_popover_demos --example session_lifecycle`

use std::time::Duration;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use understory_placement::{Anchor, AnchorSpec, ScreenContext};
use understory_popover::{MenuHit, MenuModel, PopoverConfig, PopoverSession, RichRow, RowContent};

fn main() {
    let portrait = ScreenContext::new(Size::new(390.0, 844.0))
        .with_safe_area(Insets::new(0.0, 47.0, 0.0, 34.0));
    let landscape = ScreenContext::new(Size::new(844.0, 390.0))
        .with_safe_area(Insets::new(47.0, 0.0, 47.0, 21.0));

    let share = RichRow {
        icon: Some("square.and.arrow.up".into()),
        selected: true,
        ..RichRow::new("Share")
    };
    let model: MenuModel = MenuModel::new(vec![
        RowContent::from("Copy"),
        RowContent::from("Paste"),
        RowContent::from(share),
    ]);
    let config = PopoverConfig {
        menu_width: 200.0,
        row_height: 44.0,
        margin: 8.0,
        ..PopoverConfig::default()
    };
    let anchor = AnchorSpec::new(Anchor::View(Rect::new(330.0, 60.0, 370.0, 90.0)));

    let mut session = match PopoverSession::show(anchor, model, config, &portrait) {
        Ok(session) => session.with_outcome_handler(|outcome| println!("outcome: {outcome:?}")),
        Err(err) => {
            println!("not shown: {err}");
            return;
        }
    };
    println!("portrait frame: {:?}", session.geometry().placement.frame);
    print_show_animation(&session);

    // Rotation: bounds arrive in two steps, only the settled one is used.
    session.update_anchor(Anchor::View(Rect::new(760.0, 40.0, 800.0, 70.0)));
    session.orientation_changed(Duration::from_millis(0));
    session.orientation_changed(Duration::from_millis(50));
    for now in [100_u64, 200, 250, 300] {
        let relaid = session
            .poll(Duration::from_millis(now), &landscape)
            .unwrap_or(false);
        println!("t={now}ms relayout={relaid}");
    }
    println!("landscape frame: {:?}", session.geometry().placement.frame);

    // Tap the last row.
    let placement = session.geometry().placement;
    let list = placement.list_rect();
    let tap = placement.frame.origin() + Vec2::new(list.center().x, list.y1 - 10.0);
    match session.tap(tap) {
        MenuHit::Row(i) => println!("tapped row {i}: {:?}", session.model().title(i)),
        other => println!("tap landed on {other:?}"),
    }
    // Hide: the same scale run in reverse, then report the outcome.
    println!(
        "hide over {:?} back to scale {}",
        session.config().animation_duration,
        session.config().initial_scale
    );
    session.finish_dismiss();
}

/// Sample the show animation a host would run: scale from `initial_scale` to 1 around the
/// arrow tip over `animation_duration`.
fn print_show_animation(session: &PopoverSession) {
    let config = session.config();
    let placement = session.geometry().placement;
    let frame = placement.frame;
    let pivot = Point::new(
        frame.x0 + placement.scale_pivot.x * frame.width(),
        frame.y0 + placement.scale_pivot.y * frame.height(),
    );
    let steps = 4_u32;
    for step in 0..=steps {
        let t = f64::from(step) / f64::from(steps);
        let scale = config.initial_scale + (1.0 - config.initial_scale) * t;
        let at = config.animation_duration.mul_f64(t);
        let scaled = Rect::new(
            pivot.x + (frame.x0 - pivot.x) * scale,
            pivot.y + (frame.y0 - pivot.y) * scale,
            pivot.x + (frame.x1 - pivot.x) * scale,
            pivot.y + (frame.y1 - pivot.y) * scale,
        );
        println!("  show t={at:?} scale={scale:.2} rect={scaled:?}");
    }
}
