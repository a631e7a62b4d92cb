// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline construction: rounded body fused with a rounded-apex arrow.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Point, Size, Vec2};
use understory_placement::{Direction, MenuStyle, PlacementResult};

use crate::segment::{ArcSegment, ConnectorPath, Segment};

/// Inputs to [`build_path`].
///
/// Every length must be positive and finite; [`solve`](understory_placement::solve) rejects
/// styles that are not, so values from [`ConnectorParams::from_placement`] always qualify.
/// Other values produce NaN points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConnectorParams {
    /// Menu size, arrow included.
    pub size: Size,
    /// Which edge carries the arrow: the top for [`Direction::Up`], the bottom for [`Direction::Down`].
    pub direction: Direction,
    /// Arrow tip in menu-local coordinates. Only `x` is read; the tip sits on the menu edge.
    pub arrow_point: Point,
    /// Body corner radius.
    pub corner_radius: f64,
    /// Half-width of the arrow base.
    pub arrow_width: f64,
    /// Arrow height.
    pub arrow_height: f64,
    /// Radius of the rounded arrow apex.
    pub arrow_corner_radius: f64,
}

impl ConnectorParams {
    /// Parameters for the outline of a solved placement.
    pub fn from_placement(placement: &PlacementResult, style: &MenuStyle) -> Self {
        Self {
            size: placement.size(),
            direction: placement.direction,
            arrow_point: placement.arrow_point,
            corner_radius: style.corner_radius,
            arrow_width: style.arrow_width,
            arrow_height: style.arrow_height,
            arrow_corner_radius: style.arrow_corner_radius,
        }
    }
}

/// Tangent geometry of the rounded arrow apex, relative to the nominal tip.
#[derive(Copy, Clone, Debug)]
struct Apex {
    /// Horizontal distance from the tip to where each slanted edge meets the apex arc.
    delta: f64,
    /// Vertical distance from the tip to those tangent points.
    rise: f64,
    /// Vertical distance from the tip to the apex arc center.
    center: f64,
    /// Angle between the arrow axis and either slanted edge.
    half_angle: f64,
    /// Apex arc radius, reduced if the requested one does not fit the arrow.
    radius: f64,
}

impl Apex {
    fn new(arrow_width: f64, arrow_height: f64, corner_radius: f64) -> Self {
        let slant = Vec2::new(arrow_width, arrow_height).hypot();
        // The tangent points must stay on the slanted edges.
        let radius = corner_radius.min(arrow_width * slant / arrow_height);
        let delta = radius * arrow_height / slant;
        let rise = arrow_height * delta / arrow_width;
        Self {
            delta,
            rise,
            center: rise + delta * delta / rise,
            half_angle: Vec2::new(arrow_height, arrow_width).atan2(),
            radius,
        }
    }

    /// Angle the apex arc sweeps through.
    fn sweep(&self) -> f64 {
        PI - 2.0 * self.half_angle
    }
}

/// Build the closed outline for a popover.
///
/// The body is a rounded rectangle occupying everything except the arrow band. The edge
/// facing the anchor is interrupted by a notch rising into a triangular arrow whose apex is
/// rounded with `arrow_corner_radius`; the straight edges meet the apex arc tangentially. The
/// contour starts at the left foot of the arrow, runs over the apex, then walks the body
/// corners and closes back at the start.
///
/// Because the apex is rounded, the outline's extreme point on the arrow side sits slightly
/// inside the nominal tip, by `arrow_corner_radius * (hypot(w, h) / w - 1)`.
///
/// The body corner radius is reduced when the body is too small to hold two full corners.
pub fn build_path(params: &ConnectorParams) -> ConnectorPath {
    let Size { width, height } = params.size;
    let w = params.arrow_width;
    let h = params.arrow_height;
    debug_assert!(
        w > 0.0 && w.is_finite(),
        "arrow_width must be positive and finite, got {w}"
    );
    debug_assert!(
        h > 0.0 && h.is_finite(),
        "arrow_height must be positive and finite, got {h}"
    );
    debug_assert!(
        params.arrow_corner_radius > 0.0 && params.arrow_corner_radius.is_finite(),
        "arrow_corner_radius must be positive and finite, got {}",
        params.arrow_corner_radius
    );
    let x = params.arrow_point.x;
    let r = params
        .corner_radius
        .min(width / 2.0)
        .min((height - h).max(0.0) / 2.0);
    let apex = Apex::new(w, h, params.arrow_corner_radius);

    let mut path = ConnectorPath::with_capacity(16);
    match params.direction {
        Direction::Up => {
            path.push(Segment::MoveTo(Point::new(x - w, h)));
            path.push(Segment::LineTo(Point::new(x - apex.delta, apex.rise)));
            let start_angle = -PI + apex.half_angle;
            path.push(Segment::Arc(ArcSegment {
                center: Point::new(x, apex.center),
                radius: apex.radius,
                start_angle,
                end_angle: start_angle + apex.sweep(),
                clockwise: true,
            }));
            path.push(Segment::LineTo(Point::new(x + w, h)));
            path.push(Segment::LineTo(Point::new(width - r, h)));
            corner(&mut path, Point::new(width - r, h + r), r, 3.0 * FRAC_PI_2, 0.0, true);
            path.push(Segment::LineTo(Point::new(width, height - r)));
            corner(&mut path, Point::new(width - r, height - r), r, 0.0, FRAC_PI_2, true);
            path.push(Segment::LineTo(Point::new(r, height)));
            corner(&mut path, Point::new(r, height - r), r, FRAC_PI_2, PI, true);
            path.push(Segment::LineTo(Point::new(0.0, h + r)));
            corner(&mut path, Point::new(r, h + r), r, PI, 3.0 * FRAC_PI_2, true);
        }
        Direction::Down => {
            let base = height - h;
            path.push(Segment::MoveTo(Point::new(x - w, base)));
            path.push(Segment::LineTo(Point::new(x - apex.delta, height - apex.rise)));
            let start_angle = PI - apex.half_angle;
            path.push(Segment::Arc(ArcSegment {
                center: Point::new(x, height - apex.center),
                radius: apex.radius,
                start_angle,
                end_angle: start_angle - apex.sweep(),
                clockwise: false,
            }));
            path.push(Segment::LineTo(Point::new(x + w, base)));
            path.push(Segment::LineTo(Point::new(width - r, base)));
            corner(&mut path, Point::new(width - r, base - r), r, FRAC_PI_2, 0.0, false);
            path.push(Segment::LineTo(Point::new(width, r)));
            corner(&mut path, Point::new(width - r, r), r, 0.0, 3.0 * FRAC_PI_2, false);
            path.push(Segment::LineTo(Point::new(r, 0.0)));
            corner(&mut path, Point::new(r, r), r, 3.0 * FRAC_PI_2, PI, false);
            path.push(Segment::LineTo(Point::new(0.0, base - r)));
            corner(&mut path, Point::new(r, base - r), r, PI, FRAC_PI_2, false);
        }
    }
    path.push(Segment::Close);
    path
}

fn corner(
    path: &mut ConnectorPath,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    clockwise: bool,
) {
    path.push(Segment::Arc(ArcSegment {
        center,
        radius,
        start_angle,
        end_angle,
        clockwise,
    }));
}
