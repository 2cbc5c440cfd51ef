//! Touch events delivered by the host input system.

use tapnode_render::Point;

/// Phase of a touch within its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The finger went down.
    Started,
    /// The finger moved while down.
    Moved,
    /// The finger was lifted.
    Ended,
    /// The host withdrew the touch (system gesture, interruption, focus loss).
    Cancelled,
}

/// A single touch event.
///
/// `position` is expressed in the widget's own coordinate space, whose origin
/// is the center of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Identifier of the finger, stable for one press-to-release sequence.
    pub id: u64,
    /// Lifecycle phase.
    pub phase: TouchPhase,
    /// Position in widget-local coordinates.
    pub position: Point,
}

impl TouchEvent {
    /// Create a touch event.
    pub fn new(id: u64, phase: TouchPhase, position: impl Into<Point>) -> Self {
        Self {
            id,
            phase,
            position: position.into(),
        }
    }

    /// A finger going down at `position`.
    pub fn press(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, TouchPhase::Started, position)
    }

    /// A finger moving to `position`.
    pub fn moved(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, TouchPhase::Moved, position)
    }

    /// A finger lifting at `position`.
    pub fn release(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, TouchPhase::Ended, position)
    }

    /// The host withdrawing the touch. The position is not hit-tested.
    pub fn cancel(id: u64) -> Self {
        Self::new(id, TouchPhase::Cancelled, Point::ZERO)
    }
}
