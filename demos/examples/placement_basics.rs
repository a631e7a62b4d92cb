// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Solve placements for anchors across a phone screen, then build the outline for one of them.
//!
//! Run:
//! - `cargo run -p understory_popover_demos --example placement_basics`

use kurbo::{Insets, Point, Rect, Size};
use understory_connector::{ConnectorParams, Segment, build_path};
use understory_placement::{
    Anchor, AnchorSpec, MenuStyle, PositionPreference, ScreenContext, solve,
};

fn main() {
    let screen = ScreenContext::new(Size::new(390.0, 844.0))
        .with_safe_area(Insets::new(0.0, 47.0, 0.0, 34.0));
    let style = MenuStyle {
        menu_width: 200.0,
        row_height: 44.0,
        row_count: 4,
        margin: 8.0,
        ..MenuStyle::default()
    };

    let requests = [
        ("centered button", AnchorSpec::new(Anchor::View(Rect::new(175.0, 120.0, 215.0, 150.0)))),
        ("left edge", AnchorSpec::new(Anchor::View(Rect::new(4.0, 120.0, 44.0, 150.0)))),
        ("right edge", AnchorSpec::new(Anchor::View(Rect::new(346.0, 120.0, 386.0, 150.0)))),
        ("toolbar", AnchorSpec::new(Anchor::Frame(Rect::new(175.0, 760.0, 215.0, 800.0)))),
        (
            "forced below near bottom",
            AnchorSpec::new(Anchor::Frame(Rect::new(175.0, 640.0, 215.0, 670.0)))
                .with_preference(PositionPreference::AlwaysBelow),
        ),
        ("long press", AnchorSpec::new(Anchor::Touch(Point::new(300.0, 400.0)))),
    ];

    for (name, spec) in &requests {
        match solve(spec, &screen, &style) {
            Ok(p) => println!(
                "{name:>26}: {:?} frame={:?} arrow_x={:.1} pivot=({:.2}, {:.2}) flags={:?}",
                p.direction, p.frame, p.arrow_point.x, p.scale_pivot.x, p.scale_pivot.y, p.flags
            ),
            Err(err) => println!("{name:>26}: rejected: {err}"),
        }
    }

    // Outline for the first request.
    let Ok(placement) = solve(&requests[0].1, &screen, &style) else {
        return;
    };
    let path = build_path(&ConnectorParams::from_placement(&placement, &style));
    println!("outline closed={} bbox={:?}", path.is_closed(), path.bounding_box());
    for segment in path.segments() {
        match segment {
            Segment::MoveTo(p) => println!("  move ({:.2}, {:.2})", p.x, p.y),
            Segment::LineTo(p) => println!("  line ({:.2}, {:.2})", p.x, p.y),
            Segment::Arc(arc) => println!(
                "  arc  c=({:.2}, {:.2}) r={:.2} sweep={:.3}",
                arc.center.x,
                arc.center.y,
                arc.radius,
                arc.sweep()
            ),
            Segment::Close => println!("  close"),
        }
    }
}
