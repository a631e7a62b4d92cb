// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: where an anchored popover menu goes.
//!
//! Given an anchor rectangle, the screen bounds with their safe-area insets, and the menu's
//! dimensions, [`solve`] decides:
//!
//! - which side of the anchor the menu body sits on ([`Direction`]),
//! - the menu frame, clamped horizontally to the screen margins and truncated vertically to
//!   the safe area,
//! - where the arrow tip lands along the menu edge, kept clear of the rounded corners,
//! - the normalized pivot the show/hide animation scales around.
//!
//! The solver is a pure function. Hosts call it on first show and again, from scratch, after
//! every orientation change. Nothing is cached between calls.
//!
//! ## Side selection
//!
//! [`PositionPreference::AlwaysAbove`] puts the body above the anchor with the arrow pointing
//! down ([`Direction::Down`]); [`PositionPreference::AlwaysBelow`] puts it below with the arrow
//! pointing up ([`Direction::Up`]). [`PositionPreference::Automatic`] picks `Up` when the
//! anchor's vertical center is in the upper half of the screen.
//!
//! ## Truncation
//!
//! A menu taller than the room on its side is cut short and its row list scrolls
//! ([`PlacementFlags::TRUNCATED`], [`PlacementResult::is_scrollable`]). Truncation never goes
//! below one row: when it would, the height is raised to one row plus the arrow and the menu
//! slides away from the screen edge ([`PlacementFlags::FLOORED`]).
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{Anchor, AnchorSpec, Direction, MenuStyle, ScreenContext, solve};
//!
//! let screen = ScreenContext::new(Size::new(375.0, 812.0));
//! let style = MenuStyle { menu_width: 200.0, row_height: 44.0, row_count: 3, margin: 8.0, ..Default::default() };
//!
//! // A button near the top of the screen.
//! let spec = AnchorSpec::new(Anchor::View(Rect::new(167.0, 100.0, 207.0, 130.0)));
//! let placement = solve(&spec, &screen, &style).unwrap();
//!
//! assert_eq!(placement.direction, Direction::Up);
//! assert_eq!(placement.frame.x0, 87.0);
//! assert_eq!(placement.arrow_point.x, 100.0);
//! ```
//!
//! Requests without an anchor or without rows are rejected with a [`PlacementError`] before
//! any geometry is computed.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod solve;
mod types;

pub use error::PlacementError;
pub use solve::{select_direction, solve};
pub use types::{
    Anchor, AnchorSpec, Direction, MenuStyle, Orientation, PlacementFlags, PlacementResult,
    PositionPreference, ScreenContext,
};
