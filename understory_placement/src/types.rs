// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the placement solver: screen context, anchors, menu style, and results.

use kurbo::{Insets, Point, Rect, Size};

/// Screen (or viewport) bounds together with the safe-area insets reserved by the host.
///
/// Insets follow Kurbo's convention: `x0` is the left inset, `y0` the top, `x1` the right
/// and `y1` the bottom. The host refreshes this value on orientation change and the solver
/// reads it fresh on every call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenContext {
    /// Full screen size in points.
    pub size: Size,
    /// Edge margins content must not be placed under.
    pub safe_area: Insets,
}

impl ScreenContext {
    /// A screen of the given size with no safe-area insets.
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            safe_area: Insets::ZERO,
        }
    }

    /// Replace the safe-area insets.
    #[must_use]
    pub const fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Screen width.
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Screen height.
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// Full screen rectangle with its origin at zero.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Screen rectangle shrunk by the safe-area insets.
    pub fn safe_bounds(&self) -> Rect {
        self.bounds() - self.safe_area
    }

    /// Orientation implied by the current bounds. Square screens count as portrait.
    pub fn orientation(&self) -> Orientation {
        if self.size.width > self.size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Screen orientation derived from [`ScreenContext`] bounds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

/// What the menu is attached to, in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    /// A view's frame, already converted to screen coordinates by the host view system.
    View(Rect),
    /// An explicit rectangle supplied by the caller.
    Frame(Rect),
    /// A touch location; treated as a zero-size rectangle.
    Touch(Point),
}

impl Anchor {
    /// The anchor as a normalized rectangle.
    pub fn rect(&self) -> Rect {
        match *self {
            Self::View(r) | Self::Frame(r) => r.abs(),
            Self::Touch(p) => Rect::from_points(p, p),
        }
    }
}

/// Caller preference for which side of the anchor the menu appears on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PositionPreference {
    /// Below the anchor in the upper half of the screen, above it otherwise.
    #[default]
    Automatic,
    /// Always above the anchor (arrow points down).
    AlwaysAbove,
    /// Always below the anchor (arrow points up).
    AlwaysBelow,
}

/// A show request's anchor: at most one anchor plus a side preference.
///
/// An `anchor` of `None` is an invalid request and is rejected by [`solve`](crate::solve).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnchorSpec {
    /// The anchor, if any was supplied.
    pub anchor: Option<Anchor>,
    /// Side preference.
    pub preference: PositionPreference,
}

impl AnchorSpec {
    /// An automatic-side request for `anchor`.
    pub const fn new(anchor: Anchor) -> Self {
        Self {
            anchor: Some(anchor),
            preference: PositionPreference::Automatic,
        }
    }

    /// Replace the side preference.
    #[must_use]
    pub const fn with_preference(mut self, preference: PositionPreference) -> Self {
        self.preference = preference;
        self
    }
}

impl From<Anchor> for AnchorSpec {
    fn from(anchor: Anchor) -> Self {
        Self::new(anchor)
    }
}

/// Menu dimensions consumed by the solver and the outline builder.
///
/// `arrow_width` is the half-width of the arrow base: the base spans
/// `arrow_x - arrow_width ..= arrow_x + arrow_width`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuStyle {
    /// Menu width.
    pub menu_width: f64,
    /// Height of one row.
    pub row_height: f64,
    /// Number of rows; must be at least one.
    pub row_count: usize,
    /// Minimum distance kept between the menu and a screen edge.
    pub margin: f64,
    /// Body corner radius.
    pub corner_radius: f64,
    /// Half-width of the arrow base.
    pub arrow_width: f64,
    /// Arrow height, measured from the body edge to the tip.
    pub arrow_height: f64,
    /// Radius used to round the arrow apex.
    pub arrow_corner_radius: f64,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            menu_width: 120.0,
            row_height: 40.0,
            row_count: 1,
            margin: 4.0,
            corner_radius: 4.0,
            arrow_width: 8.0,
            arrow_height: 10.0,
            arrow_corner_radius: 2.0,
        }
    }
}

impl MenuStyle {
    /// Natural height of all rows.
    pub fn content_height(&self) -> f64 {
        self.row_height * self.row_count as f64
    }

    /// Height the menu takes when nothing needs truncating: all rows plus the arrow.
    pub fn desired_height(&self) -> f64 {
        self.content_height() + self.arrow_height
    }

    /// Smallest height a truncated menu is allowed to shrink to: one row plus the arrow.
    pub fn min_height(&self) -> f64 {
        self.desired_height().min(self.row_height + self.arrow_height)
    }

    /// Lowest and highest arrow x (menu-local) that keep the arrow base off the rounded corners.
    pub fn arrow_x_range(&self) -> (f64, f64) {
        let inset = self.corner_radius + self.arrow_width;
        (inset, self.menu_width - inset)
    }
}

/// Which side of the anchor the menu body occupies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Body below the anchor; the arrow is on the top edge and points up.
    Up,
    /// Body above the anchor; the arrow is on the bottom edge and points down.
    Down,
}

bitflags::bitflags! {
    /// Adjustments the solver made to keep the menu on screen.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PlacementFlags: u8 {
        /// Anchor was too close to the left edge; the menu was pinned to the left margin.
        const CLAMPED_LEFT  = 0b0000_0001;
        /// Anchor was too close to the right edge; the menu was pinned to the right margin.
        const CLAMPED_RIGHT = 0b0000_0010;
        /// Height was cut short of the natural height; the row list must scroll.
        const TRUNCATED     = 0b0000_0100;
        /// Truncation went below one row and the height was raised back to that floor.
        const FLOORED       = 0b0000_1000;
    }
}

/// Geometry computed by [`solve`](crate::solve).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Side of the anchor the body sits on.
    pub direction: Direction,
    /// Menu bounding rectangle in screen coordinates, arrow included.
    pub frame: Rect,
    /// Arrow tip in menu-local coordinates.
    pub arrow_point: Point,
    /// Normalized point the show/hide animation scales around.
    pub scale_pivot: Point,
    /// Natural height of all rows.
    pub content_height: f64,
    /// Arrow height the frame was computed with.
    pub arrow_height: f64,
    /// Adjustments made while placing.
    pub flags: PlacementFlags,
}

impl PlacementResult {
    /// Menu size.
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// Horizontal origin of the menu in screen coordinates.
    pub fn origin_x(&self) -> f64 {
        self.frame.x0
    }

    /// Arrow tip in screen coordinates.
    pub fn arrow_tip_in_screen(&self) -> Point {
        self.frame.origin() + self.arrow_point.to_vec2()
    }

    /// Interior rectangle for the row list, in menu-local coordinates.
    ///
    /// It is `height - arrow_height` tall and sits below the arrow for [`Direction::Up`]
    /// and above it for [`Direction::Down`].
    pub fn list_rect(&self) -> Rect {
        let size = self.frame.size();
        let list_height = (size.height - self.arrow_height).max(0.0);
        let top = match self.direction {
            Direction::Up => self.arrow_height,
            Direction::Down => 0.0,
        };
        Rect::new(0.0, top, size.width, top + list_height)
    }

    /// Whether the row list is shorter than its content and has to scroll.
    pub fn is_scrollable(&self) -> bool {
        self.list_rect().height() < self.content_height
    }
}
