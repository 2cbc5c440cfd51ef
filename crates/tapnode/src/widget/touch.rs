//! Touch tracking for a single widget.
//!
//! [`TouchTracker`] follows at most one finger from press to release and
//! reports, for every incoming [`TouchEvent`], what happened to the tracked
//! touch as a [`TouchOutcome`]. It knows nothing about highlighting or
//! callbacks; the button turns outcomes into state changes and actions.
//!
//! # States
//!
//! ```text
//!            press inside            move outside
//!   Idle ─────────────────▶ Inside ─────────────────▶ Outside
//!    ▲                        │  ◀─────────────────     │
//!    │     release / cancel   │      move inside        │  release / cancel
//!    └────────────────────────┴─────────────────────────┘
//! ```
//!
//! Only moves are hit-tested against the boundary. A release ends the touch on
//! whichever side the tracker last saw it, wherever the finger is lifted.
//!
//! Presses outside the hit area, presses while disabled, a second finger while
//! one is tracked, and events for fingers that are not tracked are all ignored.
//!
//! # Platform Events
//!
//! With the `winit` feature, [`from_winit_touch`] converts a winit touch into a
//! [`TouchEvent`] relative to the widget's center in window coordinates.

use tapnode_core::logging::targets;
use tapnode_render::Rect;

use super::events::{TouchEvent, TouchPhase};

/// Where the tracked touch currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackingState {
    /// No touch is tracked.
    #[default]
    Idle,
    /// A touch is tracked and is inside the hit area.
    TrackingInside,
    /// A touch is tracked and has left the hit area.
    TrackingOutside,
}

/// What a touch event did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchOutcome {
    /// The event did not concern the tracker and changed nothing.
    Ignored,
    /// A new touch went down inside the hit area and is now tracked.
    Began,
    /// The tracked touch moved but stayed on the same side of the boundary.
    Moved,
    /// The tracked touch moved back inside the hit area.
    Entered,
    /// The tracked touch moved outside the hit area.
    Exited,
    /// The tracked touch was lifted while tracked inside the hit area.
    EndedInside,
    /// The tracked touch was lifted while tracked outside the hit area.
    EndedOutside,
    /// The host withdrew the tracked touch.
    Cancelled,
}

/// Single-touch state machine.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    state: TrackingState,
    touch_id: Option<u64>,
}

impl TouchTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tracking state.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// ID of the tracked touch, if any.
    pub fn tracked_touch(&self) -> Option<u64> {
        self.touch_id
    }

    /// Whether a touch is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.state != TrackingState::Idle
    }

    /// Feed one event through the state machine.
    ///
    /// `hit_area` is the widget's frame in the same space as the event
    /// position. Presses are only accepted while `enabled`.
    pub fn handle(&mut self, event: &TouchEvent, hit_area: Rect, enabled: bool) -> TouchOutcome {
        let outcome = match event.phase {
            TouchPhase::Started => self.on_press(event, hit_area, enabled),
            TouchPhase::Moved => self.on_move(event, hit_area),
            TouchPhase::Ended => self.on_release(event),
            TouchPhase::Cancelled => self.on_cancel(event),
        };

        if outcome != TouchOutcome::Ignored {
            tracing::trace!(
                target: targets::TOUCH,
                id = event.id,
                phase = ?event.phase,
                x = event.position.x,
                y = event.position.y,
                ?outcome,
                state = ?self.state,
                "touch transition"
            );
        }
        outcome
    }

    /// Abandon the tracked touch, if any, without reporting an outcome.
    ///
    /// Returns `true` if a touch was being tracked.
    pub fn reset(&mut self) -> bool {
        let was_tracking = self.is_tracking();
        self.state = TrackingState::Idle;
        self.touch_id = None;
        was_tracking
    }

    fn is_tracked(&self, id: u64) -> bool {
        self.touch_id == Some(id)
    }

    fn on_press(&mut self, event: &TouchEvent, hit_area: Rect, enabled: bool) -> TouchOutcome {
        if !enabled || self.is_tracking() || !hit_area.contains_inclusive(event.position) {
            return TouchOutcome::Ignored;
        }
        self.state = TrackingState::TrackingInside;
        self.touch_id = Some(event.id);
        TouchOutcome::Began
    }

    fn on_move(&mut self, event: &TouchEvent, hit_area: Rect) -> TouchOutcome {
        if !self.is_tracked(event.id) {
            return TouchOutcome::Ignored;
        }
        let inside = hit_area.contains_inclusive(event.position);
        match (self.state, inside) {
            (TrackingState::TrackingInside, false) => {
                self.state = TrackingState::TrackingOutside;
                TouchOutcome::Exited
            }
            (TrackingState::TrackingOutside, true) => {
                self.state = TrackingState::TrackingInside;
                TouchOutcome::Entered
            }
            _ => TouchOutcome::Moved,
        }
    }

    fn on_release(&mut self, event: &TouchEvent) -> TouchOutcome {
        if !self.is_tracked(event.id) {
            return TouchOutcome::Ignored;
        }
        // Only moves cross the boundary; the lift position is not hit-tested.
        let outcome = match self.state {
            TrackingState::TrackingOutside => TouchOutcome::EndedOutside,
            _ => TouchOutcome::EndedInside,
        };
        self.reset();
        outcome
    }

    fn on_cancel(&mut self, event: &TouchEvent) -> TouchOutcome {
        if !self.is_tracked(event.id) {
            return TouchOutcome::Ignored;
        }
        self.reset();
        TouchOutcome::Cancelled
    }
}

/// Convert a winit touch into a [`TouchEvent`].
///
/// `widget_center` is the widget's center in window coordinates. Only
/// translation is applied; hosts with scaled or rotated widgets should map the
/// position themselves and build the event with [`TouchEvent::new`].
#[cfg(feature = "winit")]
pub fn from_winit_touch(touch: &winit::event::Touch, widget_center: tapnode_render::Point) -> TouchEvent {
    use tapnode_render::Point;
    use winit::event::TouchPhase as WinitTouchPhase;

    let phase = match touch.phase {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    };
    let window_pos = Point::new(touch.location.x as f32, touch.location.y as f32);

    TouchEvent::new(touch.id, phase, window_pos.relative_to(widget_center))
}
