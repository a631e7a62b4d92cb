// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover configuration.

use core::time::Duration;

use understory_placement::MenuStyle;

/// Dimensions and timings for a popover menu.
///
/// The row count is not part of the configuration; it comes from the
/// [`MenuModel`](crate::MenuModel) at show time (see [`PopoverConfig::style_for`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopoverConfig {
    /// Menu width.
    pub menu_width: f64,
    /// Height of one row.
    pub row_height: f64,
    /// Body corner radius.
    pub corner_radius: f64,
    /// Half-width of the arrow base.
    pub arrow_width: f64,
    /// Arrow height.
    pub arrow_height: f64,
    /// Radius of the rounded arrow apex.
    pub arrow_corner_radius: f64,
    /// Minimum distance between the menu and a screen edge.
    pub margin: f64,
    /// How long screen bounds are given to settle after an orientation change before the
    /// menu is laid out again.
    pub settle_delay: Duration,
    /// Duration of the show and hide animations.
    ///
    /// Read by the host only: sessions do not animate, they expect
    /// [`finish_dismiss`](crate::PopoverSession::finish_dismiss) once the hide animation ends.
    pub animation_duration: Duration,
    /// Scale the menu grows from when shown and shrinks to when hidden, around
    /// [`PlacementResult::scale_pivot`](understory_placement::PlacementResult::scale_pivot).
    ///
    /// Read by the host only.
    pub initial_scale: f64,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self::from_style(&MenuStyle::default())
    }
}

impl PopoverConfig {
    /// Configuration with the dimensions of `style` and default timings.
    pub fn from_style(style: &MenuStyle) -> Self {
        Self {
            menu_width: style.menu_width,
            row_height: style.row_height,
            corner_radius: style.corner_radius,
            arrow_width: style.arrow_width,
            arrow_height: style.arrow_height,
            arrow_corner_radius: style.arrow_corner_radius,
            margin: style.margin,
            settle_delay: Duration::from_millis(200),
            animation_duration: Duration::from_millis(200),
            initial_scale: 0.1,
        }
    }

    /// The [`MenuStyle`] for a menu of `row_count` rows.
    pub fn style_for(&self, row_count: usize) -> MenuStyle {
        MenuStyle {
            menu_width: self.menu_width,
            row_height: self.row_height,
            row_count,
            margin: self.margin,
            corner_radius: self.corner_radius,
            arrow_width: self.arrow_width,
            arrow_height: self.arrow_height,
            arrow_corner_radius: self.arrow_corner_radius,
        }
    }
}
