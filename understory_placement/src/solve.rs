// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement solver.
//!
//! [`solve`] is a pure function of its inputs. It is re-run from scratch on first show and
//! after every orientation change; there is no incremental path.

use kurbo::{Point, Rect};

use crate::error::PlacementError;
use crate::types::{
    AnchorSpec, Direction, MenuStyle, PlacementFlags, PlacementResult, PositionPreference,
    ScreenContext,
};

/// Compute the menu's side, frame, arrow tip, and scale pivot for a show request.
///
/// Returns an error, without computing anything, when the request has no anchor, has
/// no rows, or carries a style that cannot be placed on this screen.
pub fn solve(
    spec: &AnchorSpec,
    screen: &ScreenContext,
    style: &MenuStyle,
) -> Result<PlacementResult, PlacementError> {
    let anchor = spec.anchor.ok_or(PlacementError::MissingAnchor)?;
    validate(screen, style)?;

    // An anchor below the screen is treated as sitting on its bottom edge.
    let mut anchor_rect = anchor.rect();
    if anchor_rect.y0 > screen.height() {
        anchor_rect = anchor_rect.with_origin((anchor_rect.x0, screen.height()));
    }

    let direction = select_direction(spec.preference, anchor_rect, screen);
    let mut flags = PlacementFlags::empty();
    let (top, height) = vertical_extent(direction, anchor_rect, screen, style, &mut flags);
    let (origin_x, arrow_x) = horizontal_extent(anchor_rect.center().x, screen, style, &mut flags);

    let frame = Rect::new(origin_x, top, origin_x + style.menu_width, top + height);
    let (arrow_y, pivot_y) = match direction {
        Direction::Up => (0.0, 0.0),
        Direction::Down => (height, 1.0),
    };

    log::debug!("popover placed {direction:?} at {frame:?}, arrow x {arrow_x}, flags {flags:?}");

    Ok(PlacementResult {
        direction,
        frame,
        arrow_point: Point::new(arrow_x, arrow_y),
        scale_pivot: Point::new(arrow_x / style.menu_width, pivot_y),
        content_height: style.content_height(),
        arrow_height: style.arrow_height,
        flags,
    })
}

/// Pick the side of the anchor the menu body goes on.
///
/// With [`PositionPreference::Automatic`] the menu goes below anchors whose vertical
/// center is in the upper half of the screen and above all others.
pub fn select_direction(
    preference: PositionPreference,
    anchor: Rect,
    screen: &ScreenContext,
) -> Direction {
    match preference {
        PositionPreference::AlwaysAbove => Direction::Down,
        PositionPreference::AlwaysBelow => Direction::Up,
        PositionPreference::Automatic => {
            if anchor.center().y < screen.height() / 2.0 {
                Direction::Up
            } else {
                Direction::Down
            }
        }
    }
}

fn validate(screen: &ScreenContext, style: &MenuStyle) -> Result<(), PlacementError> {
    if style.row_count == 0 {
        return Err(PlacementError::NoRows);
    }
    let dimensions = [
        ("screen width", screen.width()),
        ("screen height", screen.height()),
        ("menu_width", style.menu_width),
        ("row_height", style.row_height),
        ("margin", style.margin),
        ("corner_radius", style.corner_radius),
        ("arrow_width", style.arrow_width),
        ("arrow_height", style.arrow_height),
        ("arrow_corner_radius", style.arrow_corner_radius),
    ];
    for (name, value) in dimensions {
        if !(value.is_finite() && value > 0.0) {
            return Err(PlacementError::NonPositive(name));
        }
    }
    if style.menu_width + 2.0 * style.margin > screen.width() {
        return Err(PlacementError::MenuWiderThanScreen);
    }
    // The height floor must fit between the safe-area edges.
    if style.margin + style.min_height() > screen.safe_bounds().height() {
        return Err(PlacementError::ScreenTooShort);
    }
    let (lo, hi) = style.arrow_x_range();
    if lo > hi {
        return Err(PlacementError::ArrowDoesNotFit);
    }
    Ok(())
}

/// Top edge and height of the frame.
fn vertical_extent(
    direction: Direction,
    anchor: Rect,
    screen: &ScreenContext,
    style: &MenuStyle,
    flags: &mut PlacementFlags,
) -> (f64, f64) {
    let desired = style.desired_height();
    let floor = style.min_height();
    let safe_top = screen.safe_area.y0;
    let safe_bottom = screen.height() - screen.safe_area.y1;

    match direction {
        Direction::Up => {
            let mut top = anchor.y1.max(safe_top);
            let mut height = desired;
            if top + height > safe_bottom {
                height = safe_bottom - top - style.margin;
                *flags |= PlacementFlags::TRUNCATED;
            }
            if height < floor {
                log::debug!("popover height {height} below one row, flooring to {floor}");
                height = floor;
                top = top.min(safe_bottom - style.margin - floor).max(safe_top);
                *flags |= PlacementFlags::FLOORED;
            }
            (top, height)
        }
        Direction::Down => {
            let bottom = anchor.y0.min(safe_bottom);
            let mut top = bottom - desired;
            let mut height = desired;
            if top < safe_top {
                top = style.margin + safe_top;
                height = bottom - style.margin - safe_top;
                *flags |= PlacementFlags::TRUNCATED;
            }
            if height < floor {
                log::debug!("popover height {height} below one row, flooring to {floor}");
                height = floor;
                *flags |= PlacementFlags::FLOORED;
            }
            (top, height)
        }
    }
}

/// Horizontal origin of the frame and the menu-local arrow x.
fn horizontal_extent(
    center_x: f64,
    screen: &ScreenContext,
    style: &MenuStyle,
    flags: &mut PlacementFlags,
) -> (f64, f64) {
    let screen_width = screen.width();
    let half_plus_margin = style.menu_width / 2.0 + style.margin;

    let (origin_x, arrow_x) = if center_x + half_plus_margin > screen_width {
        *flags |= PlacementFlags::CLAMPED_RIGHT;
        let origin_x = screen_width - style.menu_width - style.margin;
        let arrow_x =
            (center_x - origin_x).min(style.menu_width - style.arrow_width - style.margin);
        (origin_x, arrow_x)
    } else if center_x - half_plus_margin < 0.0 {
        *flags |= PlacementFlags::CLAMPED_LEFT;
        let arrow_x = (style.corner_radius + style.arrow_width).max(center_x - style.margin);
        (style.margin, arrow_x)
    } else {
        (center_x - style.menu_width / 2.0, style.menu_width / 2.0)
    };

    // Keep the arrow base off the rounded corners whatever the margin is.
    let (lo, hi) = style.arrow_x_range();
    (origin_x, arrow_x.clamp(lo, hi))
}
