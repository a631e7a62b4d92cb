// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rejection reasons for placement requests.

/// Why a placement request was rejected.
///
/// Every variant is detected before any geometry is computed. Callers treat a rejection
/// as a silent no-op: nothing is shown and no outcome is reported.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PlacementError {
    /// Neither a view rectangle nor an explicit rectangle was supplied.
    #[error("no anchor view or rectangle was supplied")]
    MissingAnchor,
    /// The menu has no rows.
    #[error("menu has no rows")]
    NoRows,
    /// A style or screen dimension was zero, negative, or not finite.
    #[error("`{0}` must be positive and finite")]
    NonPositive(&'static str),
    /// The menu plus its margins is wider than the screen.
    #[error("menu width plus margins exceeds the screen width")]
    MenuWiderThanScreen,
    /// The safe area is shorter than one row, the arrow, and a margin.
    #[error("safe area is too short for one row, the arrow, and a margin")]
    ScreenTooShort,
    /// The menu is too narrow to fit the arrow base between its rounded corners.
    #[error("menu is too narrow to keep the arrow clear of its corners")]
    ArrowDoesNotFit,
}
