// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_connector --heading-base-level=0

//! Understory Connector: the outline of an anchored popover.
//!
//! A popover is drawn as one solid shape: a rounded rectangle whose edge facing the anchor
//! carries a triangular arrow with a rounded apex. [`build_path`] produces that silhouette as
//! a single closed [`ConnectorPath`] of lines and circular arcs, suitable both as a fill and as
//! a stroke outline.
//!
//! The inputs usually come straight from `understory_placement`:
//! [`ConnectorParams::from_placement`] takes a solved placement and the menu style.
//!
//! ## Geometry
//!
//! For [`Direction::Up`](understory_placement::Direction::Up) the arrow sits on the top edge:
//!
//! 1. start at the left foot of the arrow, `(arrow_x - arrow_width, arrow_height)`,
//! 2. run up the left slanted edge until it meets the apex circle tangentially,
//! 3. sweep the apex arc, `π - 2·atan(arrow_width / arrow_height)` radians,
//! 4. run down the right slanted edge to `(arrow_x + arrow_width, arrow_height)`,
//! 5. walk the body clockwise through four quarter-circle corners and close.
//!
//! [`Direction::Down`](understory_placement::Direction::Down) is the vertical mirror, with
//! every arc traversed in the opposite rotational sense.
//!
//! ## Rendering
//!
//! [`ConnectorPath::to_bez_path`] converts the outline into a Kurbo [`BezPath`](kurbo::BezPath)
//! for any Kurbo-based renderer. [`ConnectorPath::segments`] exposes the raw line/arc steps
//! for renderers with native arc support.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_connector::{ConnectorParams, build_path};
//! use understory_placement::Direction;
//!
//! let path = build_path(&ConnectorParams {
//!     size: Size::new(200.0, 142.0),
//!     direction: Direction::Up,
//!     arrow_point: Point::new(100.0, 0.0),
//!     corner_radius: 6.0,
//!     arrow_width: 8.0,
//!     arrow_height: 10.0,
//!     arrow_corner_radius: 2.0,
//! });
//! assert!(path.is_closed());
//! assert_eq!(path.bounding_box().y1, 142.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod build;
mod segment;

pub use build::{ConnectorParams, build_path};
pub use segment::{ArcSegment, ConnectorPath, JOIN_TOLERANCE, Segment};
