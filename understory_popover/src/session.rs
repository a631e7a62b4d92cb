// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-show popover sessions.
//!
//! ## Lifecycle
//!
//! 1) [`PopoverSession::show`] validates the request, solves the placement, and builds the
//!    outline. An invalid request yields an error and no session: nothing is shown and no
//!    outcome is ever reported.
//! 2) While on screen the host feeds taps ([`PopoverSession::tap`]), scroll offsets, and
//!    orientation changes ([`PopoverSession::orientation_changed`] then
//!    [`PopoverSession::poll`]). Every relayout recomputes the geometry from scratch.
//! 3) A selection or a cancellation starts dismissal. The first one wins; later ones are
//!    ignored.
//! 4) Once its hide animation has finished, the host calls [`PopoverSession::finish_dismiss`],
//!    which reports the [`Outcome`] exactly once.

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use understory_connector::{ConnectorParams, ConnectorPath, build_path};
use understory_placement::{Anchor, AnchorSpec, PlacementError, PlacementResult, ScreenContext, solve};

use crate::config::PopoverConfig;
use crate::debounce::Debouncer;
use crate::rows::MenuModel;

/// Tolerance used when flattening the outline for hit testing.
const HIT_TOLERANCE: f64 = 0.1;

/// How a menu session ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// The row at this index was chosen.
    Selected(usize),
    /// The menu was dismissed without a choice.
    Cancelled,
}

/// Where a session is in its lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SessionState {
    /// Shown and accepting input.
    OnScreen,
    /// An outcome is decided; the host is running the hide animation.
    Dismissing,
    /// The outcome has been reported.
    Dismissed,
}

/// What a screen point falls on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MenuHit {
    /// A row.
    Row(usize),
    /// Inside the menu outline but not on a row (the arrow, or space below the last row).
    Chrome,
    /// Outside the menu.
    Outside,
}

/// Placement and outline for the current screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Solved placement.
    pub placement: PlacementResult,
    /// Outline in menu-local coordinates.
    pub path: ConnectorPath,
}

impl Geometry {
    /// Solve the placement and build the outline for one request.
    pub fn compute(
        anchor: &AnchorSpec,
        row_count: usize,
        config: &PopoverConfig,
        screen: &ScreenContext,
    ) -> Result<Self, PlacementError> {
        let style = config.style_for(row_count);
        let placement = solve(anchor, screen, &style)?;
        let path = build_path(&ConnectorParams::from_placement(&placement, &style));
        Ok(Self { placement, path })
    }
}

type OutcomeHandler = Box<dyn FnOnce(Outcome)>;

/// One on-screen menu, from show request to reported outcome.
pub struct PopoverSession<X = ()> {
    anchor: AnchorSpec,
    model: MenuModel<X>,
    config: PopoverConfig,
    geometry: Geometry,
    state: SessionState,
    pending: Option<Outcome>,
    scroll_offset: f64,
    relayout: Debouncer,
    handler: Option<OutcomeHandler>,
}

impl<X: fmt::Debug> fmt::Debug for PopoverSession<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopoverSession")
            .field("anchor", &self.anchor)
            .field("model", &self.model)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("scroll_offset", &self.scroll_offset)
            .field("relayout", &self.relayout)
            .finish_non_exhaustive()
    }
}

impl<X> PopoverSession<X> {
    /// Show a menu of `model` rows attached to `anchor`.
    ///
    /// Fails, without creating a session, when the anchor is missing, the model is empty, or
    /// the configuration cannot be placed on `screen`.
    pub fn show(
        anchor: AnchorSpec,
        model: MenuModel<X>,
        config: PopoverConfig,
        screen: &ScreenContext,
    ) -> Result<Self, PlacementError> {
        let geometry = Geometry::compute(&anchor, model.row_count(), &config, screen)
            .inspect_err(|err| log::debug!("popover show request rejected: {err}"))?;
        log::debug!(
            "popover shown with {} rows at {:?}",
            model.row_count(),
            geometry.placement.frame
        );
        Ok(Self {
            anchor,
            model,
            relayout: Debouncer::new(config.settle_delay),
            config,
            geometry,
            state: SessionState::OnScreen,
            pending: None,
            scroll_offset: 0.0,
            handler: None,
        })
    }

    /// Register the callback that receives the outcome.
    #[must_use]
    pub fn with_outcome_handler(mut self, handler: impl FnOnce(Outcome) + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the menu is shown and accepting input.
    pub fn is_on_screen(&self) -> bool {
        self.state == SessionState::OnScreen
    }

    /// Current placement and outline.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The rows.
    pub fn model(&self) -> &MenuModel<X> {
        &self.model
    }

    /// The configuration the session was shown with.
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// The anchor request used for the next relayout.
    pub fn anchor(&self) -> &AnchorSpec {
        &self.anchor
    }

    /// Replace the anchor, for example after the host re-resolved a view's screen frame.
    ///
    /// Takes effect on the next [`reposition`](Self::reposition).
    pub fn update_anchor(&mut self, anchor: Anchor) {
        self.anchor.anchor = Some(anchor);
    }

    /// Recompute placement and outline against `screen`.
    ///
    /// Does nothing once dismissal has started. On error the previous geometry is kept.
    pub fn reposition(&mut self, screen: &ScreenContext) -> Result<(), PlacementError> {
        if !self.is_on_screen() {
            return Ok(());
        }
        self.geometry =
            Geometry::compute(&self.anchor, self.model.row_count(), &self.config, screen)?;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        Ok(())
    }

    /// Note an orientation change at `now`. The relayout runs from [`poll`](Self::poll) once
    /// the settle delay has passed without a newer change.
    pub fn orientation_changed(&mut self, now: Duration) {
        if self.is_on_screen() {
            self.relayout.schedule(now);
        }
    }

    /// Run a pending relayout if it is due. Returns whether the geometry was recomputed.
    pub fn poll(&mut self, now: Duration, screen: &ScreenContext) -> Result<bool, PlacementError> {
        if !self.relayout.poll(now) || !self.is_on_screen() {
            return Ok(false);
        }
        log::debug!("popover relayout after orientation change");
        self.reposition(screen)?;
        Ok(true)
    }

    /// Whether a relayout is waiting for the settle delay.
    pub fn relayout_pending(&self) -> bool {
        self.relayout.is_pending()
    }

    /// Vertical scroll offset of the row list.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest scroll offset: zero unless the list was truncated.
    pub fn max_scroll_offset(&self) -> f64 {
        let placement = &self.geometry.placement;
        (placement.content_height - placement.list_rect().height()).max(0.0)
    }

    /// Set the row list's scroll offset, clamped to the scrollable range.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0).min(self.max_scroll_offset());
    }

    /// What the screen point `point` falls on.
    pub fn hit_test(&self, point: Point) -> MenuHit {
        let placement = &self.geometry.placement;
        if !placement.frame.contains(point) {
            return MenuHit::Outside;
        }
        let local = point - placement.frame.origin().to_vec2();
        if !self.geometry.path.contains(local, HIT_TOLERANCE) {
            return MenuHit::Outside;
        }
        let list = placement.list_rect();
        if !list.contains(local) {
            return MenuHit::Chrome;
        }
        let offset = local.y - list.y0 + self.scroll_offset;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Offset is non-negative and bounded by the content height."
        )]
        let row = (offset / self.config.row_height) as usize;
        if row < self.model.row_count() {
            MenuHit::Row(row)
        } else {
            MenuHit::Chrome
        }
    }

    /// Handle a tap at the screen point `point`: a row selects it, outside cancels, anything
    /// else is ignored.
    pub fn tap(&mut self, point: Point) -> MenuHit {
        let hit = self.hit_test(point);
        match hit {
            MenuHit::Row(index) => {
                self.select(index);
            }
            MenuHit::Outside => {
                self.dismiss();
            }
            MenuHit::Chrome => {}
        }
        hit
    }

    /// Choose the row at `index` and start dismissal.
    ///
    /// Returns `false`, changing nothing, when the session is no longer on screen or the index
    /// is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.model.row_count() {
            log::debug!("popover selection {index} out of range, ignored");
            return false;
        }
        self.begin_dismiss(Outcome::Selected(index))
    }

    /// Cancel the menu and start dismissal. Returns `false` when dismissal already started.
    pub fn dismiss(&mut self) -> bool {
        self.begin_dismiss(Outcome::Cancelled)
    }

    /// Outcome decided but not yet reported.
    pub fn pending_outcome(&self) -> Option<Outcome> {
        self.pending
    }

    /// Report the outcome after the hide animation has finished.
    ///
    /// Calls the outcome handler, if any, and returns the outcome. Returns `None` before
    /// dismissal has started and on every call after the first.
    pub fn finish_dismiss(&mut self) -> Option<Outcome> {
        if self.state != SessionState::Dismissing {
            return None;
        }
        self.state = SessionState::Dismissed;
        let outcome = self.pending.take()?;
        log::debug!("popover dismissed: {outcome:?}");
        if let Some(handler) = self.handler.take() {
            handler(outcome);
        }
        Some(outcome)
    }

    fn begin_dismiss(&mut self, outcome: Outcome) -> bool {
        if !self.is_on_screen() {
            log::debug!("popover already dismissing, ignoring {outcome:?}");
            return false;
        }
        self.state = SessionState::Dismissing;
        self.pending = Some(outcome);
        self.relayout.cancel();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::{Insets, Rect, Size};
    use understory_placement::{Direction, PositionPreference};

    fn phone() -> ScreenContext {
        ScreenContext::new(Size::new(375.0, 812.0))
    }

    fn config() -> PopoverConfig {
        PopoverConfig {
            menu_width: 200.0,
            row_height: 44.0,
            margin: 8.0,
            ..PopoverConfig::default()
        }
    }

    fn rows(n: usize) -> MenuModel {
        MenuModel::from_titles((0..n).map(|i| alloc::format!("Row {i}")))
    }

    fn button() -> AnchorSpec {
        AnchorSpec::new(Anchor::View(Rect::new(167.0, 100.0, 207.0, 130.0)))
    }

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn invalid_requests_create_no_session() {
        let none = PopoverSession::show(AnchorSpec::default(), rows(3), config(), &phone());
        assert_eq!(none.unwrap_err(), PlacementError::MissingAnchor);
        let empty = PopoverSession::show(button(), rows(0), config(), &phone());
        assert_eq!(empty.unwrap_err(), PlacementError::NoRows);
    }

    #[test]
    fn tap_on_row_selects_it() {
        let mut s = PopoverSession::show(button(), rows(3), config(), &phone()).unwrap();
        // Frame starts at y=130; rows start below the 10pt arrow band.
        let hit = s.tap(Point::new(187.0, 130.0 + 10.0 + 44.0 + 5.0));
        assert_eq!(hit, MenuHit::Row(1));
        assert_eq!(s.state(), SessionState::Dismissing);
        assert_eq!(s.finish_dismiss(), Some(Outcome::Selected(1)));
        assert_eq!(s.state(), SessionState::Dismissed);
    }

    #[test]
    fn tap_outside_cancels() {
        let mut s = PopoverSession::show(button(), rows(3), config(), &phone()).unwrap();
        assert_eq!(s.tap(Point::new(10.0, 700.0)), MenuHit::Outside);
        assert_eq!(s.finish_dismiss(), Some(Outcome::Cancelled));
    }

    #[test]
    fn tap_beside_arrow_is_outside() {
        let s = PopoverSession::show(button(), rows(3), config(), &phone()).unwrap();
        // In the arrow band but far from the arrow.
        assert_eq!(s.hit_test(Point::new(100.0, 132.0)), MenuHit::Outside);
        // On the arrow itself.
        assert_eq!(s.hit_test(Point::new(187.0, 137.0)), MenuHit::Chrome);
    }

    #[test]
    fn outcome_fires_exactly_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut s = PopoverSession::show(button(), rows(3), config(), &phone())
            .unwrap()
            .with_outcome_handler(move |o| sink.borrow_mut().push(o));
        assert_eq!(s.finish_dismiss(), None);
        assert!(s.select(2));
        assert!(!s.dismiss());
        assert!(!s.select(0));
        assert_eq!(s.pending_outcome(), Some(Outcome::Selected(2)));
        assert_eq!(s.finish_dismiss(), Some(Outcome::Selected(2)));
        assert_eq!(s.finish_dismiss(), None);
        assert_eq!(*seen.borrow(), [Outcome::Selected(2)]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut s = PopoverSession::show(button(), rows(3), config(), &phone()).unwrap();
        assert!(!s.select(3));
        assert!(s.is_on_screen());
    }

    #[test]
    fn orientation_change_relayouts_after_settling() {
        let mut s = PopoverSession::show(button(), rows(3), config(), &phone()).unwrap();
        let before = s.geometry().placement.frame;

        let landscape = ScreenContext::new(Size::new(812.0, 375.0))
            .with_safe_area(Insets::new(44.0, 0.0, 44.0, 21.0));
        s.update_anchor(Anchor::View(Rect::new(700.0, 20.0, 740.0, 50.0)));
        s.orientation_changed(ms(0));
        s.orientation_changed(ms(120));
        assert!(!s.poll(ms(200), &landscape).unwrap());
        assert_eq!(s.geometry().placement.frame, before);
        assert!(s.poll(ms(320), &landscape).unwrap());
        assert!(!s.relayout_pending());

        let after = s.geometry().placement;
        assert_eq!(after.direction, Direction::Up);
        assert!(after.frame.x1 <= 812.0);
        assert!(s.geometry().path.is_closed());
    }

    #[test]
    fn dismissal_cancels_pending_relayout() {
        let mut s = PopoverSession::show(button(), rows(3), config(), &phone()).unwrap();
        s.orientation_changed(ms(0));
        s.dismiss();
        assert!(!s.relayout_pending());
        assert!(!s.poll(ms(500), &phone()).unwrap());
    }

    #[test]
    fn truncated_menu_scrolls_rows() {
        let anchor = AnchorSpec::new(Anchor::Frame(Rect::new(167.0, 500.0, 207.0, 530.0)))
            .with_preference(PositionPreference::AlwaysBelow);
        let mut s = PopoverSession::show(anchor, rows(20), config(), &phone()).unwrap();
        let placement = s.geometry().placement;
        assert!(placement.is_scrollable());
        let max = s.max_scroll_offset();
        assert!(max > 0.0);

        s.set_scroll_offset(10_000.0);
        assert_eq!(s.scroll_offset(), max);
        s.set_scroll_offset(-5.0);
        assert_eq!(s.scroll_offset(), 0.0);

        // Scrolling by two rows shifts the row under a fixed point by two.
        let point = Point::new(187.0, placement.frame.y0 + 10.0 + 5.0);
        assert_eq!(s.hit_test(point), MenuHit::Row(0));
        s.set_scroll_offset(88.0);
        assert_eq!(s.hit_test(point), MenuHit::Row(2));
    }
}
