// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments and the closed outline they form.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Arc, BezPath, Point, Rect, Shape, Vec2};

/// Distance under which two path points are treated as the same point.
pub const JOIN_TOLERANCE: f64 = 1e-6;

/// A circular arc given by center, radius, and start/end angles.
///
/// Angles are measured in a y-down coordinate system: angle `0` points right and `π/2`
/// points down. `clockwise` arcs sweep through increasing angles, as seen on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Arc center.
    pub center: Point,
    /// Arc radius.
    pub radius: f64,
    /// Angle of the first point.
    pub start_angle: f64,
    /// Angle of the last point.
    pub end_angle: f64,
    /// Sweep direction.
    pub clockwise: bool,
}

impl ArcSegment {
    /// Point on the arc's circle at `angle`.
    pub fn point_at(&self, angle: f64) -> Point {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// First point of the arc.
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    /// Last point of the arc.
    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// Signed sweep angle: positive for clockwise arcs, negative otherwise, at most one turn.
    ///
    /// NaN when either angle is not finite.
    pub fn sweep(&self) -> f64 {
        let sweep = self.end_angle - self.start_angle;
        if !sweep.is_finite() {
            return f64::NAN;
        }
        if self.clockwise {
            if (0.0..=TAU).contains(&sweep) {
                sweep
            } else {
                positive_turn(sweep)
            }
        } else if (-TAU..=0.0).contains(&sweep) {
            sweep
        } else {
            positive_turn(sweep) - TAU
        }
    }

    /// Whether `angle` lies on the swept part of the circle.
    ///
    /// Always `false` when the arc or `angle` is not finite.
    pub fn covers(&self, angle: f64) -> bool {
        let sweep = self.sweep();
        let along = if self.clockwise {
            angle - self.start_angle
        } else {
            self.start_angle - angle
        };
        if !along.is_finite() || sweep.is_nan() {
            return false;
        }
        positive_turn(along) <= if sweep < 0.0 { -sweep } else { sweep }
    }

    /// Exact bounding box of the swept part.
    pub fn bounding_box(&self) -> Rect {
        let mut bbox = Rect::from_points(self.start_point(), self.end_point());
        for quadrant in 0..4 {
            let angle = f64::from(quadrant) * FRAC_PI_2;
            if self.covers(angle) {
                bbox = bbox.union_pt(self.point_at(angle));
            }
        }
        bbox
    }

    /// The same arc as a Kurbo [`Arc`].
    pub fn to_kurbo(&self) -> Arc {
        Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle: self.start_angle,
            sweep_angle: self.sweep(),
            x_rotation: 0.0,
        }
    }
}

/// Reduce a finite angle into `[0, τ)`.
fn positive_turn(angle: f64) -> f64 {
    let turn = angle % TAU;
    if turn < 0.0 { turn + TAU } else { turn }
}

/// One step of a [`ConnectorPath`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Segment {
    /// Start the contour at a point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Circular arc; it starts where the previous segment ended.
    Arc(ArcSegment),
    /// Line back to the contour start.
    Close,
}

impl Segment {
    /// Where the segment leaves the current point, if it moves it.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(*p),
            Self::Arc(arc) => Some(arc.end_point()),
            Self::Close => None,
        }
    }
}

/// A popover outline: one closed contour of lines and arcs.
///
/// Built by [`build_path`](crate::build_path). The same contour is used as the fill and the
/// optional stroke, so the arrow renders as part of the body rather than as a separate shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorPath {
    segments: Vec<Segment>,
}

impl ConnectorPath {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Segments in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Arc segments in drawing order.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    /// Whether this is a single closed, continuous contour.
    ///
    /// That is: exactly one leading [`Segment::MoveTo`], exactly one trailing
    /// [`Segment::Close`], and every arc starting where the previous segment ended.
    pub fn is_closed(&self) -> bool {
        let Some((Segment::MoveTo(start), rest)) = self.segments.split_first() else {
            return false;
        };
        let Some((Segment::Close, body)) = rest.split_last() else {
            return false;
        };
        let mut current = *start;
        for segment in body {
            match segment {
                Segment::MoveTo(_) | Segment::Close => return false,
                Segment::LineTo(p) => current = *p,
                Segment::Arc(arc) => {
                    if arc.start_point().distance(current) > JOIN_TOLERANCE {
                        return false;
                    }
                    current = arc.end_point();
                }
            }
        }
        true
    }

    /// Exact bounding box of the outline.
    pub fn bounding_box(&self) -> Rect {
        let mut bbox: Option<Rect> = None;
        let mut add = |r: Rect| {
            bbox = Some(match bbox {
                Some(b) => b.union(r),
                None => r,
            });
        };
        for segment in &self.segments {
            match segment {
                Segment::MoveTo(p) | Segment::LineTo(p) => add(Rect::from_points(*p, *p)),
                Segment::Arc(arc) => add(arc.bounding_box()),
                Segment::Close => {}
            }
        }
        bbox.unwrap_or(Rect::ZERO)
    }

    /// Flatten into a Kurbo [`BezPath`], approximating arcs with cubics within `tolerance`.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        let mut current = Point::ORIGIN;
        for segment in &self.segments {
            match segment {
                Segment::MoveTo(p) => {
                    path.move_to(*p);
                    current = *p;
                }
                Segment::LineTo(p) => {
                    path.line_to(*p);
                    current = *p;
                }
                Segment::Arc(arc) => {
                    let start = arc.start_point();
                    if start.distance(current) > JOIN_TOLERANCE {
                        path.line_to(start);
                    }
                    path.extend(arc.to_kurbo().append_iter(tolerance));
                    current = arc.end_point();
                }
                Segment::Close => path.close_path(),
            }
        }
        path
    }

    /// Whether `point` is inside the filled outline.
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        self.to_bez_path(tolerance).contains(point)
    }
}
