// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: one anchored menu, from show request to outcome.
//!
//! This crate ties [`understory_placement`] and [`understory_connector`] into a per-show
//! session that a host UI drives:
//!
//! - [`MenuModel`] holds the rows, each resolved to a [`RowContent`] variant up front.
//! - [`PopoverConfig`] carries the menu dimensions and the timings the host animates with.
//! - [`PopoverSession`] owns the current [`Geometry`] (placement plus outline), maps taps to
//!   rows, debounces relayout after orientation changes, and reports exactly one [`Outcome`].
//!
//! Rendering, animation, and event delivery stay with the host. Time is passed in explicitly
//! as a [`Duration`](core::time::Duration) since an arbitrary epoch, so sessions can be driven
//! from any clock, including a test's.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_placement::{Anchor, AnchorSpec, ScreenContext};
//! use understory_popover::{MenuHit, MenuModel, Outcome, PopoverConfig, PopoverSession};
//!
//! let screen = ScreenContext::new(Size::new(375.0, 812.0));
//! let anchor = AnchorSpec::new(Anchor::View(Rect::new(167.0, 100.0, 207.0, 130.0)));
//! let model: MenuModel = MenuModel::from_titles(["Copy", "Paste", "Delete"]);
//! let config = PopoverConfig { menu_width: 200.0, row_height: 44.0, ..Default::default() };
//!
//! let mut session = PopoverSession::show(anchor, model, config, &screen).unwrap();
//! let frame = session.geometry().placement.frame;
//!
//! // Tap the middle of the second row.
//! let list = session.geometry().placement.list_rect();
//! let tap = Point::new(frame.center().x, frame.y0 + list.y0 + 44.0 * 1.5);
//! assert_eq!(session.tap(tap), MenuHit::Row(1));
//!
//! // After the hide animation the outcome is reported once.
//! assert_eq!(session.finish_dismiss(), Some(Outcome::Selected(1)));
//! assert_eq!(session.finish_dismiss(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod debounce;
mod rows;
mod session;

pub use config::PopoverConfig;
pub use debounce::Debouncer;
pub use rows::{IconRef, MenuModel, RichRow, RowContent};
pub use session::{Geometry, MenuHit, Outcome, PopoverSession, SessionState};
